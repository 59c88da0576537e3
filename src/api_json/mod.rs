use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::AppConfig;
use crate::models::{Problem, SearchStatus, SizeWindow, Strategy};

/// Cuerpo de `POST /run`.
///
/// ```json
/// { "problem": "A", "algorithm": "branch_and_bound" }
/// { "problem": "B", "algorithm": "brute_force", "min_size": 2, "max_size": 6 }
/// ```
///
/// - `problem`: "A" (camino más largo) o "B" (conjunto dominante mínimo)
/// - `algorithm`: "brute_force" | "branch_and_bound" | "heuristic" | "double_sweep" (sólo A);
///   se aceptan también "forca_bruta" y "heuristica"
/// - `min_size` / `max_size`: ventana de tamaños para la fuerza bruta de B (opcional)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRequest {
	pub problem: String,
	pub algorithm: String,
	#[serde(default)]
	pub min_size: Option<usize>,
	#[serde(default)]
	pub max_size: Option<usize>,
}

/// Parámetros ya validados de una ejecución.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunParams {
	pub problem: Problem,
	pub strategy: Strategy,
	pub window: Option<SizeWindow>,
}

impl RunRequest {
	/// Traduce los identificadores; cualquier identificador desconocido o
	/// combinación inexistente devuelve el mensaje de error para el cliente.
	pub fn resolve(&self) -> Result<RunParams, String> {
		let problem = Problem::from_id(&self.problem)
			.ok_or_else(|| format!("unknown problem '{}' (expected 'A' or 'B')", self.problem))?;
		let strategy = Strategy::from_id(&self.algorithm).ok_or_else(|| {
			format!(
				"unknown algorithm '{}' (expected brute_force, branch_and_bound, heuristic or double_sweep)",
				self.algorithm
			)
		})?;
		if problem == Problem::DominatingSet && strategy == Strategy::DoubleSweep {
			return Err("algorithm 'double_sweep' is only available for problem 'A'".to_string());
		}
		let window = match (self.min_size, self.max_size) {
			(None, None) => None,
			(min, max) => Some(SizeWindow::new(min.unwrap_or(1), max.unwrap_or(usize::MAX))),
		};
		Ok(RunParams { problem, strategy, window })
	}
}

pub fn parse_run_request(json_str: &str) -> Result<RunRequest, serde_json::Error> {
	serde_json::from_str::<RunRequest>(json_str)
}

/// Respuesta de `POST /run`: nombres de las estaciones de la solución y el
/// tiempo de reloj en segundos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunResponse {
	pub run_id: u64,
	pub result: Vec<String>,
	pub metric: usize,
	pub calls: u64,
	pub status: SearchStatus,
	pub elapsed_time: f64,
}

/// Cuerpo opcional de `POST /initialize`. Sin cuerpo se usan los archivos
/// configurados; con textos se construye la red desde memoria.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InitializeRequest {
	#[serde(default)]
	pub stations_path: Option<String>,
	#[serde(default)]
	pub lines_path: Option<String>,
	#[serde(default)]
	pub stations_text: Option<String>,
	#[serde(default)]
	pub lines_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NetworkSource {
	Files { stations: PathBuf, lines: PathBuf },
	Text { stations: String, lines: String },
}

impl InitializeRequest {
	pub fn source(&self, cfg: &AppConfig) -> Result<NetworkSource, String> {
		match (&self.stations_text, &self.lines_text) {
			(Some(s), Some(l)) => Ok(NetworkSource::Text { stations: s.clone(), lines: l.clone() }),
			(None, None) => Ok(NetworkSource::Files {
				stations: self.stations_path.as_ref().map(PathBuf::from).unwrap_or_else(|| cfg.stations_path.clone()),
				lines: self.lines_path.as_ref().map(PathBuf::from).unwrap_or_else(|| cfg.lines_path.clone()),
			}),
			_ => Err("stations_text and lines_text must be sent together".to_string()),
		}
	}
}
