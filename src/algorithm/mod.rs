// Motor de resolución: camino más largo (problema A) y conjunto dominante
// mínimo (problema B), cada uno con fuerza bruta, branch-and-bound y heurística.
pub mod bounds;
pub mod branch_bound;
pub mod brute_force;
pub mod context;
pub mod double_sweep;
pub mod greedy;
pub mod progress;
pub mod report;

pub use context::SearchContext;
pub use progress::{AbortHandle, NoProgress, ProgressReporter};
pub use report::{DiscardSink, FileSink, MemorySink, ResultSink};

use log::{info, warn};

use crate::error::SolveError;
use crate::graph::Graph;
use crate::models::{Problem, SizeWindow, SolveReport, Strategy};

/// Ejecuta la combinación {problema, estrategia} sobre `graph`.
///
/// Falla rápido si el grafo no es utilizable (vacío, sin aristas o
/// desconectado) o si la estrategia no existe para el problema. Al terminar
/// escribe el resumen de dos líneas en el sink del contexto; un error de
/// escritura se registra pero no invalida el resultado.
pub fn solve(
    graph: &Graph,
    problem: Problem,
    strategy: Strategy,
    ctx: &mut SearchContext,
) -> Result<SolveReport, SolveError> {
    graph.validate()?;

    info!("Ejecutando problema {} con {}", problem.id(), strategy.id());
    let report = match (problem, strategy) {
        (Problem::LongestPath, Strategy::BruteForce) => brute_force::longest_path(graph, ctx),
        (Problem::LongestPath, Strategy::BranchAndBound) => branch_bound::longest_path(graph, ctx),
        (Problem::LongestPath, Strategy::Heuristic) => greedy::longest_path(graph, ctx),
        (Problem::LongestPath, Strategy::DoubleSweep) => double_sweep::longest_path(graph, ctx),
        (Problem::DominatingSet, Strategy::BruteForce) => {
            let window = ctx.window().unwrap_or_else(|| SizeWindow::full(graph.len()));
            brute_force::dominating_set(graph, window, ctx)?
        }
        (Problem::DominatingSet, Strategy::BranchAndBound) => branch_bound::dominating_set(graph, ctx),
        (Problem::DominatingSet, Strategy::Heuristic) => greedy::dominating_set(graph, ctx),
        (Problem::DominatingSet, Strategy::DoubleSweep) => {
            return Err(SolveError::UnsupportedCombination {
                problem: problem.id().to_string(),
                strategy: strategy.id().to_string(),
            });
        }
    };

    let key = report::result_key(problem, strategy);
    let lines = report::summary_lines(graph, &report);
    if let Err(e) = ctx.sink().record(&key, &lines) {
        warn!("no se pudo escribir el resumen '{}': {}", key, e);
    }
    Ok(report)
}
