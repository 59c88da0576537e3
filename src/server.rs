use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::{watch, Semaphore};

use crate::api_json::NetworkSource;
use crate::config::AppConfig;
use crate::graph::Graph;
use crate::network::{load_network, network_from_text, MetroNetwork};
use crate::server_handlers::{
    help_handler, history_handler, initialize_handler, network_png_handler, progress_updates_handler, run_handler,
};

/// Red cargada y su grafo de resolución. Se reemplaza entera en cada
/// `POST /initialize`; las ejecuciones en curso conservan la anterior.
#[derive(Debug)]
pub struct Session {
    pub network: MetroNetwork,
    pub graph: Graph,
}

/// Último aviso de progreso publicado por `/progress-updates`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub run_id: u64,
    pub problem: String,
    pub strategy: String,
    pub progress: u8,
}

pub struct AppState {
    pub config: AppConfig,
    session: RwLock<Option<Arc<Session>>>,
    pub progress: Arc<watch::Sender<ProgressSnapshot>>,
    pub semaphore: Arc<Semaphore>,
    next_run: AtomicU64,
    next_render: AtomicU64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let (tx, _rx) = watch::channel(ProgressSnapshot::default());
        let procs = num_cpus::get();
        AppState {
            config,
            session: RwLock::new(None),
            progress: Arc::new(tx),
            semaphore: Arc::new(Semaphore::new(std::cmp::max(1, procs))),
            next_run: AtomicU64::new(0),
            next_render: AtomicU64::new(0),
        }
    }

    pub fn session(&self) -> Option<Arc<Session>> {
        match self.session.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn set_session(&self, session: Session) {
        let session = Arc::new(session);
        match self.session.write() {
            Ok(mut guard) => *guard = Some(session),
            Err(poisoned) => *poisoned.into_inner() = Some(session),
        }
    }

    pub fn next_run_id(&self) -> u64 {
        self.next_run.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Sufijo para los PNG temporales; no consume identificadores de ejecución.
    pub fn next_render_id(&self) -> u64 {
        self.next_render.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Carga la red desde archivos o texto y valida el grafo resultante.
pub fn load_session(source: &NetworkSource) -> Result<Session, String> {
    let network = match source {
        NetworkSource::Files { stations, lines } => load_network(stations, lines),
        NetworkSource::Text { stations, lines } => network_from_text(stations, lines),
    }
    .map_err(|e| format!("failed to load network: {}", e))?;
    let graph = Graph::from_network(&network);
    graph.validate().map_err(|e| e.to_string())?;
    Ok(Session { network, graph })
}

/// Rutas del servicio; compartido entre `run_server` y los tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/initialize", web::post().to(initialize_handler))
        .route("/run", web::post().to(run_handler))
        .route("/progress-updates", web::get().to(progress_updates_handler))
        .route("/network.png", web::get().to(network_png_handler))
        .route("/history", web::get().to(history_handler))
        .route("/help", web::get().to(help_handler));
}

pub async fn run_server(config: AppConfig) -> std::io::Result<()> {
    if let Err(e) = crate::history::init_db(&config.history_db) {
        warn!("historial deshabilitado ({}): {}", config.history_db.display(), e);
    }

    let bind = config.bind.clone();
    let state = web::Data::new(AppState::new(config));

    // Si los archivos configurados existen se cargan de inmediato; si no, el
    // cliente debe llamar a POST /initialize.
    let default_source = NetworkSource::Files {
        stations: state.config.stations_path.clone(),
        lines: state.config.lines_path.clone(),
    };
    match load_session(&default_source) {
        Ok(session) => {
            info!("red inicial: {} estaciones, {} conexiones", session.graph.len(), session.graph.edge_count());
            state.set_session(session);
        }
        Err(e) => warn!("sin red inicial: {}", e),
    }

    info!("Iniciando servidor en http://{}", bind);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .configure(configure)
    })
    .bind(bind)?
    .run()
    .await
}
