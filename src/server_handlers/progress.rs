use actix_web::http::header;
use actix_web::{web, HttpResponse};
use futures_util::stream;

use crate::server::AppState;

/// GET /progress-updates
/// Flujo SSE: primero el estado actual y luego un evento `data: {...}` por
/// cada cambio de progreso publicado por cualquier ejecución. El cliente
/// distingue ejecuciones por `run_id`.
pub async fn progress_updates_handler(state: web::Data<AppState>) -> HttpResponse {
    let rx = state.progress.subscribe();
    let events = stream::unfold((rx, true), |(mut rx, first)| async move {
        if !first && rx.changed().await.is_err() {
            return None;
        }
        let snapshot = rx.borrow_and_update().clone();
        let payload = serde_json::to_string(&snapshot).unwrap_or_else(|_| "{}".to_string());
        let chunk = web::Bytes::from(format!("data: {}\n\n", payload));
        Some((Ok::<_, std::convert::Infallible>(chunk), (rx, false)))
    });

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(events)
}
