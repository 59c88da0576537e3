use actix_web::{HttpResponse, Responder};
use serde_json::json;

use crate::api_json::RunRequest;

pub async fn help_handler() -> impl Responder {
    let example = RunRequest {
        problem: "B".to_string(),
        algorithm: "brute_force".to_string(),
        min_size: Some(1),
        max_size: Some(5),
    };

    let help = json!({
        "description": "API de resolución sobre la red de metro. Problema A: camino simple más largo. Problema B: conjunto dominante mínimo.",
        "endpoints": {
            "POST /initialize": "carga la red; cuerpo opcional {stations_path, lines_path} o {stations_text, lines_text}",
            "POST /run": "ejecuta {problem, algorithm, min_size?, max_size?}",
            "GET /progress-updates": "flujo SSE con {run_id, problem, strategy, progress}",
            "GET /network.png": "imagen de la red; ?highlight=A,B,C resalta un camino",
            "GET /history": "últimas ejecuciones; ?limit=N"
        },
        "post_run_example": example,
        "problems": ["A", "B"],
        "algorithms": ["brute_force", "branch_and_bound", "heuristic", "double_sweep"],
        "note": "double_sweep sólo aplica al problema A; min_size/max_size sólo a la fuerza bruta del problema B."
    });

    HttpResponse::Ok().json(help)
}
