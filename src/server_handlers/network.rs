use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::server::AppState;

const IMAGE_SIZE: (u32, u32) = (1200, 900);

/// GET /network.png?highlight=Estación A,Estación B,...
/// Dibuja la red cargada; `highlight` (opcional) es un camino por nombres.
pub async fn network_png_handler(
    state: web::Data<AppState>,
    query: web::Query<std::collections::HashMap<String, String>>,
) -> impl Responder {
    let session = match state.session() {
        Some(s) => s,
        None => return HttpResponse::BadRequest().json(json!({"error": "network not initialized; call POST /initialize first"})),
    };

    let mut highlight: Vec<usize> = Vec::new();
    if let Some(raw) = query.get("highlight").filter(|s| !s.trim().is_empty()) {
        for name in raw.split(',').map(|p| p.trim()).filter(|p| !p.is_empty()) {
            match session.graph.index_of(name) {
                Some(i) => highlight.push(i),
                None => return HttpResponse::BadRequest().json(json!({"error": format!("unknown station '{}'", name)})),
            }
        }
    }

    let out = std::env::temp_dir().join(format!("metrosolve_{}_{}.png", std::process::id(), state.next_render_id()));
    let rendered = tokio::task::spawn_blocking(move || {
        let res = crate::network::render_network(&session.network, &highlight, &out, IMAGE_SIZE)
            .map_err(|e| e.to_string())
            .and_then(|_| std::fs::read(&out).map_err(|e| e.to_string()));
        let _ = std::fs::remove_file(&out);
        res
    })
    .await;

    match rendered {
        Ok(Ok(bytes)) => HttpResponse::Ok().content_type("image/png").body(bytes),
        Ok(Err(e)) => HttpResponse::InternalServerError().json(json!({"error": format!("render failed: {}", e)})),
        Err(e) => HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)})),
    }
}
