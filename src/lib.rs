// Biblioteca raíz del crate `metrosolve`.
// Motor de resolución (camino más largo y conjunto dominante mínimo) sobre la
// red de metro, más las capas de entrada/salida y el servidor HTTP.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod graph;
pub mod history;
pub mod models;
pub mod network;
pub mod server;
pub mod server_handlers;

pub use algorithm::solve;
pub use error::SolveError;
pub use graph::Graph;
/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;
