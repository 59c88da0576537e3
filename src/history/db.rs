use chrono::Utc;
use rusqlite::{params, Connection};
use serde::Serialize;
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::models::{SearchStatus, SolveReport};

/// Fila de la tabla `runs` tal como se devuelve por `GET /history`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunRecord {
    pub id: i64,
    pub ts: String,
    pub problem: String,
    pub strategy: String,
    pub metric: i64,
    pub calls: i64,
    pub status: String,
    pub elapsed_ms: i64,
    pub solution_json: String,
}

fn status_name(status: SearchStatus) -> &'static str {
    match status {
        SearchStatus::Complete => "complete",
        SearchStatus::Aborted => "aborted",
        SearchStatus::NotFound => "not_found",
    }
}

/// Crea el directorio y la tabla si no existen.
pub fn init_db(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            fs::create_dir_all(dir)?;
        }
    }
    let conn = Connection::open(path)?;
    conn.execute(
        "CREATE TABLE IF NOT EXISTS runs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            ts TEXT NOT NULL,
            problem TEXT NOT NULL,
            strategy TEXT NOT NULL,
            metric INTEGER,
            calls INTEGER,
            status TEXT NOT NULL,
            elapsed_ms INTEGER,
            solution_json TEXT
        )",
        [],
    )?;
    Ok(())
}

/// Agrega una ejecución. `solution` son los nombres de las estaciones.
pub fn log_run(path: &Path, report: &SolveReport, solution: &[String], elapsed_ms: i64) -> Result<(), Box<dyn Error>> {
    let conn = Connection::open(path)?;
    let ts = Utc::now().to_rfc3339();
    let solution_json = serde_json::to_string(solution)?;
    conn.execute(
        "INSERT INTO runs (ts, problem, strategy, metric, calls, status, elapsed_ms, solution_json)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            ts,
            report.problem.id(),
            report.strategy.id(),
            report.metric as i64,
            report.calls as i64,
            status_name(report.status),
            elapsed_ms,
            solution_json,
        ],
    )?;
    Ok(())
}

/// Últimas `limit` ejecuciones, la más reciente primero.
pub fn recent_runs(path: &Path, limit: i64) -> Result<Vec<RunRecord>, Box<dyn Error>> {
    let conn = Connection::open(path)?;
    let mut stmt = conn.prepare(
        "SELECT id, ts, problem, strategy, metric, calls, status, elapsed_ms, solution_json
         FROM runs ORDER BY id DESC LIMIT ?1",
    )?;
    let rows = stmt.query_map(params![limit], |row| {
        Ok(RunRecord {
            id: row.get(0)?,
            ts: row.get(1)?,
            problem: row.get(2)?,
            strategy: row.get(3)?,
            metric: row.get(4)?,
            calls: row.get(5)?,
            status: row.get(6)?,
            elapsed_ms: row.get(7)?,
            solution_json: row.get(8)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Problem, Strategy};

    #[test]
    fn logs_and_reads_back_newest_first() {
        let dir = std::env::temp_dir().join(format!("metrosolve_history_{}", std::process::id()));
        let path = dir.join("history.db");
        let _ = fs::remove_file(&path);
        init_db(&path).unwrap();

        let mut report = SolveReport {
            problem: Problem::LongestPath,
            strategy: Strategy::BruteForce,
            solution: vec![0, 1],
            metric: 2,
            calls: 7,
            status: SearchStatus::Complete,
        };
        log_run(&path, &report, &["A".to_string(), "B".to_string()], 5).unwrap();
        report.strategy = Strategy::Heuristic;
        report.status = SearchStatus::Aborted;
        log_run(&path, &report, &["A".to_string()], 1).unwrap();

        let rows = recent_runs(&path, 10).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].strategy, "heuristic");
        assert_eq!(rows[0].status, "aborted");
        assert_eq!(rows[1].solution_json, "[\"A\",\"B\"]");
        assert!(chrono::DateTime::parse_from_rfc3339(&rows[1].ts).is_ok());

        assert_eq!(recent_runs(&path, 1).unwrap().len(), 1);
        let _ = fs::remove_dir_all(&dir);
    }
}
