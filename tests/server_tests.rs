use actix_web::{test, web, App};
use serde_json::{json, Value};

use metrosolve::config::AppConfig;
use metrosolve::server::{configure, AppState};

const STATIONS: &str = "A 0 0\nB 1 0\nC 2 0\nD 3 0\nE 4 0\n";
const LINES: &str = "Linha 1, blue\nA;B\nB;C\nC;D\nD;E\n";

fn test_config(tag: &str) -> AppConfig {
    let dir = std::env::temp_dir().join(format!("metrosolve_srv_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    AppConfig {
        stations_path: dir.join("no_estacoes.txt"),
        lines_path: dir.join("no_linhas.txt"),
        results_dir: dir.join("resultados"),
        history_db: dir.join("history.db"),
        ..AppConfig::default()
    }
}

macro_rules! app {
    ($cfg:expr) => {
        test::init_service(App::new().app_data(web::Data::new(AppState::new($cfg))).configure(configure)).await
    };
}

macro_rules! initialize_text {
    ($app:expr) => {{
        let req = test::TestRequest::post()
            .uri("/initialize")
            .set_json(json!({"stations_text": STATIONS, "lines_text": LINES}))
            .to_request();
        let resp = test::call_service(&$app, req).await;
        assert!(resp.status().is_success(), "initialize falló: {}", resp.status());
        let body: Value = test::read_body_json(resp).await;
        body
    }};
}

#[actix_web::test]
async fn help_lists_endpoints() {
    let app = app!(test_config("help"));
    let resp = test::call_service(&app, test::TestRequest::get().uri("/help").to_request()).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert!(body["endpoints"]["POST /run"].is_string());
}

#[actix_web::test]
async fn run_requires_initialized_network() {
    let app = app!(test_config("uninit"));
    let req = test::TestRequest::post()
        .uri("/run")
        .set_json(json!({"problem": "A", "algorithm": "brute_force"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["error"].as_str().unwrap_or("").contains("not initialized"));
}

#[actix_web::test]
async fn initialize_without_body_uses_configured_files() {
    let app = app!(test_config("nobody"));
    let resp = test::call_service(&app, test::TestRequest::post().uri("/initialize").to_request()).await;
    assert_eq!(resp.status().as_u16(), 400, "los archivos configurados no existen");
}

#[actix_web::test]
async fn initialize_then_solve_both_problems() {
    let cfg = test_config("solve");
    let results_dir = cfg.results_dir.clone();
    let app = app!(cfg);

    let init = initialize_text!(app);
    assert_eq!(init["stations"], 5);
    assert_eq!(init["connections"], 4);

    let req = test::TestRequest::post()
        .uri("/run")
        .set_json(json!({"problem": "A", "algorithm": "forca_bruta"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["metric"], 5);
    assert_eq!(body["status"], "complete");
    assert_eq!(body["result"].as_array().map(|a| a.len()), Some(5));
    assert!(body["elapsed_time"].as_f64().is_some());

    let req = test::TestRequest::post()
        .uri("/run")
        .set_json(json!({"problem": "B", "algorithm": "branch_and_bound"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["metric"], 2);

    assert!(results_dir.join("longest_path_brute_force.txt").exists());
    assert!(results_dir.join("dominating_set_branch_and_bound.txt").exists());
}

#[actix_web::test]
async fn unknown_identifiers_are_bad_requests() {
    let app = app!(test_config("unknown"));
    initialize_text!(app);

    for body in [
        json!({"problem": "Z", "algorithm": "heuristic"}),
        json!({"problem": "A", "algorithm": "tabu"}),
        json!({"problem": "B", "algorithm": "double_sweep"}),
        json!({"problem": "B", "algorithm": "brute_force", "min_size": 3, "max_size": 1}),
        json!({"algorithm": "heuristic"}),
    ] {
        let req = test::TestRequest::post().uri("/run").set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400, "cuerpo: {}", body);
        let err: Value = test::read_body_json(resp).await;
        assert!(err["error"].is_string());
    }
}

#[actix_web::test]
async fn disconnected_network_is_rejected_on_initialize() {
    let app = app!(test_config("disc"));
    let req = test::TestRequest::post()
        .uri("/initialize")
        .set_json(json!({"stations_text": "A 0 0\nB 1 0\nC 2 0\nD 3 0\n", "lines_text": "Linha 1\nA;B\nC;D\n"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn network_png_and_history_respond() {
    let cfg = test_config("png");
    metrosolve::history::init_db(&cfg.history_db).expect("historial");
    let app = app!(cfg);
    initialize_text!(app);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/network.png?highlight=A,B,C").to_request()).await;
    assert!(resp.status().is_success());
    let bytes = test::read_body(resp).await;
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/network.png?highlight=Z").to_request()).await;
    assert_eq!(resp.status().as_u16(), 400);

    let resp = test::call_service(&app, test::TestRequest::get().uri("/history?limit=5").to_request()).await;
    assert!(resp.status().is_success());
    let body: Value = test::read_body_json(resp).await;
    assert!(body.is_array());
}

#[actix_web::test]
async fn run_ids_are_consecutive_and_new_subscribers_see_the_last_snapshot() {
    use actix_web::body::MessageBody;

    let app = app!(test_config("sse"));
    initialize_text!(app);

    // Dibujar la red no consume identificadores de ejecución.
    let resp = test::call_service(&app, test::TestRequest::get().uri("/network.png").to_request()).await;
    assert!(resp.status().is_success());

    for expected in [1, 2] {
        let req = test::TestRequest::post()
            .uri("/run")
            .set_json(json!({"problem": "A", "algorithm": "heuristic"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["run_id"], expected);
    }

    let resp = test::call_service(&app, test::TestRequest::get().uri("/progress-updates").to_request()).await;
    assert!(resp.status().is_success());
    let mut body = resp.into_body();
    let chunk = std::future::poll_fn(|cx| std::pin::Pin::new(&mut body).poll_next(cx))
        .await
        .expect("el flujo envía el estado actual al conectar")
        .expect("chunk sin error");
    let text = std::str::from_utf8(&chunk).expect("utf-8");
    let payload: Value = serde_json::from_str(text.trim_start_matches("data: ").trim()).expect("evento JSON");
    assert_eq!(payload["run_id"], 2);
    assert_eq!(payload["problem"], "A");
    assert_eq!(payload["progress"], 100);
}
