use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

use crate::server::AppState;

/// GET /history?limit=10
pub async fn history_handler(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let limit = query.get("limit").and_then(|s| s.parse::<usize>().ok()).unwrap_or(10) as i64;
    let path = state.config.history_db.clone();
    let rows = tokio::task::spawn_blocking(move || {
        crate::history::recent_runs(&path, limit).map_err(|e| e.to_string())
    })
    .await;

    match rows {
        Ok(Ok(rows)) => HttpResponse::Ok().json(rows),
        Ok(Err(e)) => {
            error!("error leyendo el historial: {}", e);
            HttpResponse::InternalServerError().json(json!({"error": format!("failed to read history: {}", e)}))
        }
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)})),
    }
}
