use actix_web::{web, HttpResponse, Responder};
use log::info;
use serde_json::json;

use crate::api_json::InitializeRequest;
use crate::server::{load_session, AppState};

/// POST /initialize
/// Carga la red (archivos configurados, rutas indicadas o texto en el cuerpo)
/// y la deja lista para `POST /run`.
pub async fn initialize_handler(state: web::Data<AppState>, body: Option<web::Json<InitializeRequest>>) -> impl Responder {
    let req = body.map(|b| b.into_inner()).unwrap_or_default();
    let source = match req.source(&state.config) {
        Ok(s) => s,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": e})),
    };

    let loaded = tokio::task::spawn_blocking(move || load_session(&source)).await;
    let session = match loaded {
        Ok(Ok(s)) => s,
        Ok(Err(e)) => return HttpResponse::BadRequest().json(json!({"error": e})),
        Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("task join error: {}", e)})),
    };

    let stations = session.graph.len();
    let connections = session.graph.edge_count();
    state.set_session(session);
    info!("red inicializada: {} estaciones, {} conexiones", stations, connections);
    HttpResponse::Ok().json(json!({"status": "ok", "stations": stations, "connections": connections}))
}
