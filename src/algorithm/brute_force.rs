//! Búsquedas exactas por fuerza bruta con poda elemental.
//!
//! - Camino más largo: backtracking desde cada vértice (orden por grado), con
//!   pila explícita en vez de recursión para no agotar el stack en redes grandes.
//! - Conjunto dominante: enumeración de subconjuntos por tamaño creciente dentro
//!   de una ventana `[min, max]`; devuelve el primero que domina.

use log::{debug, info};

use crate::algorithm::bounds::{closed_neighborhoods, degree_order, path_length_bound};
use crate::algorithm::context::SearchContext;
use crate::error::SolveError;
use crate::graph::{BitSet, Graph};
use crate::models::{Problem, SearchStatus, SizeWindow, SolveReport, Strategy};

pub fn longest_path(graph: &Graph, ctx: &mut SearchContext) -> SolveReport {
    let n = graph.len();
    let order = degree_order(graph);
    info!("[brute_force] camino más largo: {} vértices, {} aristas", n, graph.edge_count());

    let mut best: Vec<usize> = Vec::new();
    let mut calls: u64 = 0;
    let mut visited = BitSet::new(n);
    let mut path: Vec<usize> = Vec::with_capacity(n);
    // cursors[i] = próximo vecino de path[i] a probar
    let mut cursors: Vec<usize> = Vec::with_capacity(n);
    let mut starts_tested = 0usize;
    let mut status = SearchStatus::Complete;
    let mut hamiltonian = false;

    ctx.begin(n as u128);
    for &start in order.iter() {
        if ctx.is_aborted() {
            status = SearchStatus::Aborted;
            break;
        }

        // El camino y los visitados siempre contienen los mismos vértices.
        visited.insert(start);
        path.push(start);
        if path_length_bound(path.len(), path.len(), n) <= best.len() {
            visited.remove(start);
            path.pop();
        } else {
            calls += 1;
            cursors.push(0);
        }

        while let Some(&v) = path.last() {
            let neighbors = graph.neighbors(v);
            let Some(cursor) = cursors.last_mut() else { break };
            let mut next: Option<usize> = None;
            while *cursor < neighbors.len() {
                let u = neighbors[*cursor];
                *cursor += 1;
                if !visited.contains(u) {
                    next = Some(u);
                    break;
                }
            }

            match next {
                Some(u) => {
                    visited.insert(u);
                    path.push(u);
                    if path_length_bound(path.len(), path.len(), n) <= best.len() {
                        visited.remove(u);
                        path.pop();
                        continue;
                    }
                    calls += 1;
                    cursors.push(0);
                }
                None => {
                    if path.len() > best.len() {
                        best = path.clone();
                        debug!("[brute_force] nuevo mejor camino: {} vértices", best.len());
                        if best.len() == n {
                            hamiltonian = true;
                            break;
                        }
                    }
                    visited.remove(v);
                    path.pop();
                    cursors.pop();
                }
            }
        }

        starts_tested += 1;
        if hamiltonian {
            break;
        }
        ctx.advance(starts_tested as u128);
    }
    ctx.finish();

    info!(
        "[brute_force] nodos iniciales probados: {}/{}; llamadas: {}; largo: {}",
        starts_tested, n, calls, best.len()
    );
    SolveReport {
        problem: Problem::LongestPath,
        strategy: Strategy::BruteForce,
        metric: best.len(),
        solution: best,
        calls,
        status,
    }
}

/// Conjunto dominante por enumeración de subconjuntos dentro de `window`.
/// `calls` cuenta los subconjuntos probados. Si ningún tamaño de la ventana
/// admite un conjunto dominante el estado es `NotFound`.
pub fn dominating_set(graph: &Graph, window: SizeWindow, ctx: &mut SearchContext) -> Result<SolveReport, SolveError> {
    if window.min == 0 || window.min > window.max {
        return Err(SolveError::InvalidWindow { min: window.min, max: window.max });
    }
    let n = graph.len();
    let max_k = window.max.min(n);
    let order = degree_order(graph);
    let neighborhoods = closed_neighborhoods(graph);
    let sizes: Vec<usize> = (0..n).map(|v| neighborhoods[v].count()).collect();

    let total: u128 = (window.min..=max_k).map(|k| binomial(n, k)).fold(0u128, |acc, c| acc.saturating_add(c));
    info!(
        "[brute_force] conjunto dominante: ventana [{}, {}], {} subconjuntos candidatos",
        window.min, max_k, total
    );

    let mut tested: u128 = 0;
    let mut covered = BitSet::new(n);
    ctx.begin(total);

    for k in window.min..=max_k {
        debug!("[brute_force] verificando subconjuntos de tamaño {}", k);
        let mut comb: Vec<usize> = (0..k).collect();
        loop {
            if ctx.is_aborted() {
                ctx.finish();
                return Ok(report_set(Vec::new(), tested, SearchStatus::Aborted));
            }
            tested += 1;
            ctx.advance(tested);

            covered.clear();
            for (idx, &p) in comb.iter().enumerate() {
                covered.union_with(&neighborhoods[order[p]]);
                let count = covered.count();
                if count == n {
                    let mut found: Vec<usize> = comb.iter().map(|&q| order[q]).collect();
                    found.sort_unstable();
                    info!("[brute_force] conjunto dominante de tamaño {} tras {} combinaciones", k, tested);
                    ctx.finish();
                    return Ok(report_set(found, tested, SearchStatus::Complete));
                }
                let rest = &comb[idx + 1..];
                if let Some(max_cover) = rest.iter().map(|&q| sizes[order[q]]).max() {
                    if count + (k - idx - 1) * max_cover < n {
                        break;
                    }
                }
            }

            if !next_combination(&mut comb, n) {
                break;
            }
        }
    }

    ctx.finish();
    info!("[brute_force] ningún conjunto dominante en los tamaños probados ({} combinaciones)", tested);
    Ok(report_set(Vec::new(), tested, SearchStatus::NotFound))
}

fn report_set(solution: Vec<usize>, tested: u128, status: SearchStatus) -> SolveReport {
    SolveReport {
        problem: Problem::DominatingSet,
        strategy: Strategy::BruteForce,
        metric: solution.len(),
        solution,
        calls: u64::try_from(tested).unwrap_or(u64::MAX),
        status,
    }
}

/// Avanza `comb` (índices crecientes en `0..n`) a la siguiente combinación en
/// orden lexicográfico. Devuelve false cuando ya era la última.
pub(crate) fn next_combination(comb: &mut [usize], n: usize) -> bool {
    let k = comb.len();
    let mut i = k;
    while i > 0 {
        i -= 1;
        if comb[i] < n - k + i {
            comb[i] += 1;
            for j in i + 1..k {
                comb[j] = comb[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

/// C(n, k) saturando en u128.
pub(crate) fn binomial(n: usize, k: usize) -> u128 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    let mut acc: u128 = 1;
    for i in 0..k {
        // acc * (n - i) / (i + 1) es exacto en cada paso
        acc = match acc.checked_mul((n - i) as u128) {
            Some(v) => v / (i as u128 + 1),
            None => return u128::MAX,
        };
    }
    acc
}
