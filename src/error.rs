use thiserror::Error;

/// Errores del motor de búsqueda. Que no exista un conjunto dominante dentro de
/// la ventana de tamaños NO es un error: se informa como `SearchStatus::NotFound`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// Grafo vacío, sin aristas, desconectado o con aristas mal formadas
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// La estrategia no existe para el problema pedido (p. ej. B + double_sweep)
    #[error("strategy '{strategy}' is not available for problem {problem}")]
    UnsupportedCombination { problem: String, strategy: String },
    /// Ventana de tamaños inválida para la fuerza bruta del conjunto dominante
    #[error("invalid size window [{min}, {max}]")]
    InvalidWindow { min: usize, max: usize },
}
