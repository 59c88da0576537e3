// Historial de ejecuciones en SQLite.

pub mod db;

pub use db::{init_db, log_run, recent_runs, RunRecord};
