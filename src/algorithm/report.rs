// Resumen legible de cada ejecución: una línea con la métrica y otra con la
// solución. El destino (archivo, memoria) lo decide quien llama.

use std::fs::{create_dir_all, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::graph::Graph;
use crate::models::{Problem, SearchStatus, SolveReport, Strategy};

/// Destino de los resúmenes de resultado.
pub trait ResultSink {
    fn record(&mut self, key: &str, lines: &[String]) -> std::io::Result<()>;
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn record(&mut self, key: &str, lines: &[String]) -> std::io::Result<()> {
        (**self).record(key, lines)
    }
}

/// Descarta los resúmenes.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl ResultSink for DiscardSink {
    fn record(&mut self, _key: &str, _lines: &[String]) -> std::io::Result<()> {
        Ok(())
    }
}

/// Guarda los resúmenes en memoria (útil en tests y en la CLI).
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    pub entries: Vec<(String, Vec<String>)>,
}

impl ResultSink for MemorySink {
    fn record(&mut self, key: &str, lines: &[String]) -> std::io::Result<()> {
        self.entries.push((key.to_string(), lines.to_vec()));
        Ok(())
    }
}

/// Un archivo por combinación problema/estrategia dentro de `dir`; cada
/// ejecución sobrescribe el resultado anterior.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        FileSink { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.txt", key))
    }
}

impl ResultSink for FileSink {
    fn record(&mut self, key: &str, lines: &[String]) -> std::io::Result<()> {
        create_dir_all(&self.dir)?;
        let mut f = OpenOptions::new().write(true).create(true).truncate(true).open(self.path_for(key))?;
        for line in lines {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Nombre estable del resultado, p. ej. `longest_path_branch_and_bound`.
pub fn result_key(problem: Problem, strategy: Strategy) -> String {
    let prefix = match problem {
        Problem::LongestPath => "longest_path",
        Problem::DominatingSet => "dominating_set",
    };
    format!("{}_{}", prefix, strategy.id())
}

pub fn summary_lines(graph: &Graph, report: &SolveReport) -> Vec<String> {
    let partial = if report.status == SearchStatus::Aborted { " (parcial)" } else { "" };
    let names = graph.labels_of(&report.solution).join(", ");
    match (report.problem, report.status) {
        (Problem::DominatingSet, SearchStatus::NotFound) => vec![
            "Ningún conjunto dominante encontrado en los tamaños probados".to_string(),
            "[]".to_string(),
        ],
        (Problem::LongestPath, _) => vec![
            format!("Camino más largo con {} vértices{}:", report.metric, partial),
            format!("[{}]", names),
        ],
        (Problem::DominatingSet, _) => vec![
            format!("Conjunto dominante con {} vértices{}:", report.metric, partial),
            format!("[{}]", names),
        ],
    }
}
