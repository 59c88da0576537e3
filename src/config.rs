// Configuración del servicio desde variables de entorno (y `.env` si existe).

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::models::SizeWindow;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub bind: String,
    pub stations_path: PathBuf,
    pub lines_path: PathBuf,
    pub results_dir: PathBuf,
    pub history_db: PathBuf,
    /// Límite de reloj por ejecución; al vencer se interrumpe la búsqueda.
    pub time_limit: Option<Duration>,
    pub dom_min_size: Option<usize>,
    pub dom_max_size: Option<usize>,
    /// Fuente TrueType para los nombres de estación en el mapa.
    pub font_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            bind: "127.0.0.1:5000".to_string(),
            stations_path: PathBuf::from("estacoes.txt"),
            lines_path: PathBuf::from("linhas.txt"),
            results_dir: PathBuf::from("resultados"),
            history_db: PathBuf::from("resultados/history.db"),
            time_limit: None,
            dom_min_size: None,
            dom_max_size: None,
            font_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Igual que `from_env` pero leyendo de una función arbitraria; los
    /// valores vacíos o que no se pueden parsear se ignoran con un aviso.
    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let number = |key: &str| -> Option<u64> {
            let raw = get(key)?;
            match raw.parse::<u64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    log::warn!("{}='{}' no es un número; se ignora", key, raw);
                    None
                }
            }
        };

        let mut cfg = AppConfig::default();
        if let Some(v) = get("METRO_BIND") { cfg.bind = v; }
        if let Some(v) = get("METRO_STATIONS") { cfg.stations_path = PathBuf::from(v); }
        if let Some(v) = get("METRO_LINES") { cfg.lines_path = PathBuf::from(v); }
        if let Some(v) = get("METRO_RESULTS_DIR") { cfg.results_dir = PathBuf::from(v); }
        if let Some(v) = get("METRO_HISTORY_DB") { cfg.history_db = PathBuf::from(v); }
        cfg.time_limit = number("METRO_TIME_LIMIT_SECS").filter(|&s| s > 0).map(Duration::from_secs);
        cfg.dom_min_size = number("METRO_DOM_MIN_SIZE").map(|v| v as usize);
        cfg.dom_max_size = number("METRO_DOM_MAX_SIZE").map(|v| v as usize);
        cfg.font_path = get("METRO_FONT").map(PathBuf::from);
        cfg
    }

    /// Ventana por defecto para la fuerza bruta del problema B, si se
    /// configuró alguno de los extremos. El extremo faltante toma 1 o `n`.
    pub fn dom_window(&self, n: usize) -> Option<SizeWindow> {
        if self.dom_min_size.is_none() && self.dom_max_size.is_none() {
            return None;
        }
        Some(SizeWindow::new(self.dom_min_size.unwrap_or(1), self.dom_max_size.unwrap_or(n)))
    }
}
