// Heurísticas golosas: una construcción por vértice inicial, sin backtracking.

use log::info;

use crate::algorithm::bounds::{closed_neighborhoods, degree_order};
use crate::algorithm::context::SearchContext;
use crate::graph::{BitSet, Graph};
use crate::models::{Problem, SearchStatus, SolveReport, Strategy};

/// Camino largo goloso: desde cada inicio, avanzar al vecino libre con más
/// vecinos libres propios (empates: primero en orden de adyacencia).
pub fn longest_path(graph: &Graph, ctx: &mut SearchContext) -> SolveReport {
    let n = graph.len();
    let order = degree_order(graph);
    let mut best: Vec<usize> = Vec::new();
    let mut steps: u64 = 0;
    let mut visited = BitSet::new(n);
    let mut status = SearchStatus::Complete;
    let mut starts_tested = 0usize;

    ctx.begin(n as u128);
    for &start in order.iter() {
        if ctx.is_aborted() {
            status = SearchStatus::Aborted;
            break;
        }
        visited.clear();
        visited.insert(start);
        let mut path = vec![start];
        let mut current = start;

        loop {
            let mut chosen: Option<usize> = None;
            let mut chosen_cover: usize = 0;
            for &u in graph.neighbors(current) {
                if visited.contains(u) {
                    continue;
                }
                let cover = graph.neighbors(u).iter().filter(|&&w| !visited.contains(w)).count();
                if chosen.is_none() || cover > chosen_cover {
                    chosen = Some(u);
                    chosen_cover = cover;
                }
            }
            let Some(u) = chosen else { break };
            visited.insert(u);
            path.push(u);
            current = u;
            steps += 1;
        }

        if path.len() > best.len() {
            best = path;
        }
        starts_tested += 1;
        ctx.advance(starts_tested as u128);
    }
    ctx.finish();

    info!("[heuristic] nodos iniciales probados: {}/{}; pasos: {}; largo: {}", starts_tested, n, steps, best.len());
    SolveReport {
        problem: Problem::LongestPath,
        strategy: Strategy::Heuristic,
        metric: best.len(),
        solution: best,
        calls: steps,
        status,
    }
}

/// Conjunto dominante goloso: sembrar con cada vértice y agregar siempre el
/// que cubra más vértices todavía no dominados.
pub fn dominating_set(graph: &Graph, ctx: &mut SearchContext) -> SolveReport {
    let n = graph.len();
    let order = degree_order(graph);
    let neighborhoods = closed_neighborhoods(graph);
    let mut best: Option<Vec<usize>> = None;
    let mut additions: u64 = 0;
    let mut status = SearchStatus::Complete;
    let mut starts_tested = 0usize;
    let mut in_set = BitSet::new(n);

    ctx.begin(n as u128);
    for &start in order.iter() {
        if ctx.is_aborted() {
            status = SearchStatus::Aborted;
            break;
        }
        in_set.clear();
        in_set.insert(start);
        let mut set = vec![start];
        let mut dominated = neighborhoods[start].clone();

        while dominated.count() < n {
            let mut chosen: Option<usize> = None;
            let mut chosen_gain: usize = 0;
            for &v in order.iter() {
                if in_set.contains(v) {
                    continue;
                }
                let gain = dominated.count_missing_from(&neighborhoods[v]);
                if gain > chosen_gain {
                    chosen = Some(v);
                    chosen_gain = gain;
                }
            }
            // Mientras quede un vértice sin dominar, él mismo aporta al menos 1
            let Some(v) = chosen else { break };
            in_set.insert(v);
            set.push(v);
            dominated.union_with(&neighborhoods[v]);
            additions += 1;
        }

        if best.as_ref().is_none_or(|b| set.len() < b.len()) {
            best = Some(set);
        }
        starts_tested += 1;
        ctx.advance(starts_tested as u128);
    }
    ctx.finish();

    let mut solution = best.unwrap_or_default();
    solution.sort_unstable();
    info!(
        "[heuristic] nodos de inicio probados: {}/{}; agregados: {}; tamaño: {}",
        starts_tested,
        n,
        additions,
        solution.len()
    );
    SolveReport {
        problem: Problem::DominatingSet,
        strategy: Strategy::Heuristic,
        metric: solution.len(),
        solution,
        calls: additions,
        status,
    }
}
