// Estructuras de datos principales

use serde::{Deserialize, Serialize};

/// Estación de la red con su posición (sólo se usa para dibujar).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub name: String,
    pub x: f64,
    pub y: f64,
}

/// Metadatos de una conexión entre estaciones: línea y color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub line: String,
    pub color: String,
}

/// Problema A: camino simple más largo. Problema B: conjunto dominante mínimo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Problem {
    #[serde(rename = "A")]
    LongestPath,
    #[serde(rename = "B")]
    DominatingSet,
}

impl Problem {
    pub fn from_id(id: &str) -> Option<Problem> {
        match id.trim() {
            "A" | "a" => Some(Problem::LongestPath),
            "B" | "b" => Some(Problem::DominatingSet),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Problem::LongestPath => "A",
            Problem::DominatingSet => "B",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    BruteForce,
    BranchAndBound,
    Heuristic,
    /// Doble barrido (sólo problema A)
    DoubleSweep,
}

impl Strategy {
    /// Acepta también los identificadores en portugués del front-end.
    pub fn from_id(id: &str) -> Option<Strategy> {
        match id.trim() {
            "brute_force" | "forca_bruta" => Some(Strategy::BruteForce),
            "branch_and_bound" => Some(Strategy::BranchAndBound),
            "heuristic" | "heuristica" => Some(Strategy::Heuristic),
            "double_sweep" => Some(Strategy::DoubleSweep),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Strategy::BruteForce => "brute_force",
            Strategy::BranchAndBound => "branch_and_bound",
            Strategy::Heuristic => "heuristic",
            Strategy::DoubleSweep => "double_sweep",
        }
    }
}

/// Ventana inclusiva de tamaños para la fuerza bruta del conjunto dominante.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeWindow {
    pub min: usize,
    pub max: usize,
}

impl SizeWindow {
    pub fn new(min: usize, max: usize) -> Self { SizeWindow { min, max } }

    /// Ventana completa `[1, n]`: la fuerza bruta se vuelve exhaustiva.
    pub fn full(n: usize) -> Self { SizeWindow { min: 1, max: n.max(1) } }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchStatus {
    /// La búsqueda terminó normalmente
    Complete,
    /// Interrumpida desde fuera; la solución es el mejor resultado parcial
    Aborted,
    /// Ningún conjunto dominante dentro de la ventana de tamaños
    NotFound,
}

/// Resultado de una ejecución: solución (índices densos), métrica principal
/// (largo del camino o tamaño del conjunto) y contador de llamadas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub problem: Problem,
    pub strategy: Strategy,
    pub solution: Vec<usize>,
    pub metric: usize,
    pub calls: u64,
    pub status: SearchStatus,
}

impl SolveReport {
    pub fn is_found(&self) -> bool { self.status != SearchStatus::NotFound }
}
