// --- metrosolve: camino más largo y conjunto dominante sobre la red de metro ---
//
// Uso:
//   metrosolve                       inicia el servidor HTTP
//   metrosolve run <A|B> <estrategia>  resuelve una vez con los archivos configurados
//   metrosolve render <salida.png>     dibuja la red configurada

use std::error::Error;
use std::time::Instant;

use log::info;
use metrosolve::algorithm::report::summary_lines;
use metrosolve::algorithm::{AbortHandle, FileSink, SearchContext};
use metrosolve::api_json::{NetworkSource, RunRequest};
use metrosolve::config::AppConfig;
use metrosolve::server::load_session;
use metrosolve::{run_server, solve};

fn configured_source(cfg: &AppConfig) -> NetworkSource {
    NetworkSource::Files { stations: cfg.stations_path.clone(), lines: cfg.lines_path.clone() }
}

fn run_once(cfg: &AppConfig, problem: &str, algorithm: &str) -> Result<(), Box<dyn Error>> {
    let req = RunRequest { problem: problem.to_string(), algorithm: algorithm.to_string(), min_size: None, max_size: None };
    let params = req.resolve()?;
    let session = load_session(&configured_source(cfg))?;

    let abort = AbortHandle::new();
    if let Some(limit) = cfg.time_limit {
        let abort = abort.clone();
        std::thread::spawn(move || {
            std::thread::sleep(limit);
            abort.abort();
        });
    }

    let mut ctx = SearchContext::new()
        .with_reporter(|pct: u8| info!("progreso: {}%", pct))
        .with_sink(FileSink::new(cfg.results_dir.clone()))
        .with_abort(abort);
    if let Some(w) = cfg.dom_window(session.graph.len()) {
        ctx = ctx.with_window(w);
    }

    let start = Instant::now();
    let report = solve(&session.graph, params.problem, params.strategy, &mut ctx)?;
    for line in summary_lines(&session.graph, &report) {
        println!("{}", line);
    }
    println!("Llamadas: {}", report.calls);
    println!("Tiempo: {:.3}s", start.elapsed().as_secs_f64());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cfg = AppConfig::from_env();
    if let Some(font) = cfg.font_path.as_deref() {
        if !metrosolve::network::render::register_label_font(Some(font)) {
            log::warn!("no se pudo cargar METRO_FONT='{}'", font.display());
        }
    }
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] => {
            println!("=== metrosolve (API) ===");
            run_server(cfg).await?;
        }
        ["run", problem, algorithm] => run_once(&cfg, problem, algorithm)?,
        ["render", out] => {
            let session = load_session(&configured_source(&cfg))?;
            metrosolve::network::render_network(&session.network, &[], out, (1200, 900))?;
            println!("Red dibujada en {}", out);
        }
        _ => {
            eprintln!("uso: metrosolve [run <A|B> <estrategia> | render <salida.png>]");
            std::process::exit(2);
        }
    }
    Ok(())
}
