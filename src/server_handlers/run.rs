use actix_web::{web, HttpResponse, Responder};
use log::{info, warn};
use serde_json::json;
use std::time::Instant;

use crate::algorithm::{solve, AbortHandle, FileSink, SearchContext};
use crate::api_json::{RunRequest, RunResponse};
use crate::server::{AppState, ProgressSnapshot};

/// POST /run
/// Ejecuta {problema, algoritmo} sobre la red cargada. La búsqueda corre en
/// un hilo bloqueante (uno por CPU como máximo); si hay límite de tiempo
/// configurado, al vencer se interrumpe y se devuelve el mejor parcial.
pub async fn run_handler(state: web::Data<AppState>, body: web::Json<serde_json::Value>) -> impl Responder {
    let req: RunRequest = match serde_json::from_value(body.into_inner()) {
        Ok(r) => r,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("invalid JSON body: {}", e)})),
    };
    let params = match req.resolve() {
        Ok(p) => p,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };
    let session = match state.session() {
        Some(s) => s,
        None => return HttpResponse::BadRequest().json(json!({"error": "network not initialized; call POST /initialize first"})),
    };

    let run_id = state.next_run_id();
    let permit = match state.semaphore.clone().acquire_owned().await {
        Ok(p) => p,
        Err(_) => return HttpResponse::ServiceUnavailable().json(json!({"error": "failed to acquire semaphore"})),
    };

    let abort = AbortHandle::new();
    let timer = state.config.time_limit.map(|limit| {
        let abort = abort.clone();
        tokio::spawn(async move {
            tokio::time::sleep(limit).await;
            warn!("run {}: límite de {:?} alcanzado, interrumpiendo", run_id, limit);
            abort.abort();
        })
    });

    let window = params.window.or_else(|| state.config.dom_window(session.graph.len()));
    let results_dir = state.config.results_dir.clone();
    let progress = state.progress.clone();
    let graph_session = session.clone();
    let start = Instant::now();

    let blocking = tokio::task::spawn_blocking(move || {
        let _permit = permit;
        let problem_id = params.problem.id().to_string();
        let strategy_id = params.strategy.id().to_string();
        let reporter = move |pct: u8| {
            progress.send_replace(ProgressSnapshot {
                run_id,
                problem: problem_id.clone(),
                strategy: strategy_id.clone(),
                progress: pct,
            });
        };
        let mut ctx = SearchContext::new()
            .with_reporter(reporter)
            .with_sink(FileSink::new(results_dir))
            .with_abort(abort);
        if let Some(w) = window {
            ctx = ctx.with_window(w);
        }
        solve(&graph_session.graph, params.problem, params.strategy, &mut ctx)
    })
    .await;

    if let Some(t) = timer {
        t.abort();
    }
    let elapsed = start.elapsed();

    let report = match blocking {
        Ok(Ok(r)) => r,
        // Todos los SolveError son errores del cliente (grafo, ventana o combinación)
        Ok(Err(e)) => return HttpResponse::BadRequest().json(json!({"error": e.to_string()})),
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)})),
    };

    let names = session.graph.labels_of(&report.solution);
    info!(
        "run {}: problema {} / {} -> métrica {}, {} llamadas, {:.3}s",
        run_id,
        params.problem.id(),
        params.strategy.id(),
        report.metric,
        report.calls,
        elapsed.as_secs_f64()
    );

    let history_db = state.config.history_db.clone();
    let report_log = report.clone();
    let names_log = names.clone();
    let elapsed_ms = elapsed.as_millis() as i64;
    tokio::task::spawn_blocking(move || {
        if let Err(e) = crate::history::log_run(&history_db, &report_log, &names_log, elapsed_ms) {
            warn!("no se pudo registrar la ejecución en el historial: {}", e);
        }
    });

    HttpResponse::Ok().json(RunResponse {
        run_id,
        result: names,
        metric: report.metric,
        calls: report.calls,
        status: report.status,
        elapsed_time: elapsed.as_secs_f64(),
    })
}
