//! Branch-and-bound exacto para ambos problemas.
//!
//! Camino más largo: mismo recorrido que la fuerza bruta, pero antes de bajar
//! a cada hijo se compara `largo + alcanzables_no_visitados` con el mejor
//! camino conocido. Como la región alcanzable nunca es mayor que el total de
//! no visitados, explora un subconjunto de los nodos de la fuerza bruta.
//!
//! Conjunto dominante: por cada vértice inicial `v` (posición `i` en el orden
//! por grado) se exploran sólo conjuntos cuyo elemento mínimo es `v`. Se
//! ramifica sobre el vértice no dominado de menor posición, probando los
//! miembros de su vecindario cerrado con posición mayor que `i`.

use log::{debug, info};

use crate::algorithm::bounds::{
    closed_neighborhoods_by_position, cover_lower_bound, degree_order, max_closed_neighborhood, positions_of,
    ReachCounter,
};
use crate::algorithm::context::SearchContext;
use crate::graph::{BitSet, Graph};
use crate::models::{Problem, SearchStatus, SolveReport, Strategy};

struct Frame {
    vertex: usize,
    cursor: usize,
    // largo máximo alcanzable extendiendo el camino desde este vértice
    bound: usize,
}

pub fn longest_path(graph: &Graph, ctx: &mut SearchContext) -> SolveReport {
    let n = graph.len();
    let order = degree_order(graph);
    info!("[branch_and_bound] camino más largo: {} vértices, {} aristas", n, graph.edge_count());

    let mut best: Vec<usize> = Vec::new();
    let mut calls: u64 = 0;
    let mut visited = BitSet::new(n);
    let mut path: Vec<usize> = Vec::with_capacity(n);
    let mut frames: Vec<Frame> = Vec::with_capacity(n);
    let mut reach = ReachCounter::new(n);
    let mut starts_tested = 0usize;
    let mut status = SearchStatus::Complete;
    let mut hamiltonian = false;

    ctx.begin(n as u128);
    for &start in order.iter() {
        if ctx.is_aborted() {
            status = SearchStatus::Aborted;
            break;
        }

        visited.insert(start);
        path.push(start);
        let bound = path.len() + reach.count(graph, start, &visited);
        if bound > best.len() {
            calls += 1;
            frames.push(Frame { vertex: start, cursor: 0, bound });
        } else {
            visited.remove(start);
            path.pop();
        }

        while let Some(frame) = frames.last_mut() {
            let v = frame.vertex;
            let neighbors = graph.neighbors(v);
            let mut next: Option<usize> = None;
            // La cota se vuelve a comparar antes de cada hijo: el mejor camino
            // pudo mejorar mientras se exploraba un hermano.
            if frame.bound > best.len() {
                while frame.cursor < neighbors.len() {
                    let u = neighbors[frame.cursor];
                    frame.cursor += 1;
                    if !visited.contains(u) {
                        next = Some(u);
                        break;
                    }
                }
            }

            match next {
                Some(u) => {
                    visited.insert(u);
                    path.push(u);
                    let bound = path.len() + reach.count(graph, u, &visited);
                    if bound <= best.len() {
                        visited.remove(u);
                        path.pop();
                        continue;
                    }
                    calls += 1;
                    frames.push(Frame { vertex: u, cursor: 0, bound });
                }
                None => {
                    if path.len() > best.len() {
                        best = path.clone();
                        debug!("[branch_and_bound] nuevo mejor camino: {} vértices", best.len());
                        if best.len() == n {
                            hamiltonian = true;
                            break;
                        }
                    }
                    visited.remove(v);
                    path.pop();
                    frames.pop();
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
        "[branch_and_bound] nodos de inicio probados: {}/{}; llamadas: {}; largo: {}",
        starts_tested, n, calls, best.len()
    );
    SolveReport {
        problem: Problem::LongestPath,
        strategy: Strategy::BranchAndBound,
        metric: best.len(),
        solution: best,
        calls,
        status,
    }
}

/// Estado de la búsqueda de conjunto dominante. Todo se expresa en posiciones
/// del orden por grado, de modo que "menor posición no dominada" es el primer
/// bit apagado.
struct DominatingSearch<'g> {
    graph: &'g Graph,
    order: Vec<usize>,
    positions: Vec<usize>,
    neighborhoods: Vec<BitSet>,
    max_cover: usize,
    current: Vec<usize>,
    best: Vec<usize>,
    calls: u64,
}

impl DominatingSearch<'_> {
    fn dfs(&mut self, dominated: &BitSet, start_pos: usize) {
        self.calls += 1;
        let n = self.order.len();
        let covered = dominated.count();
        if covered == n {
            if self.current.len() < self.best.len() {
                self.best = self.current.clone();
                debug!("[branch_and_bound] nuevo conjunto dominante: {} vértices", self.best.len());
            }
            return;
        }

        let bound = cover_lower_bound(n - covered, self.max_cover);
        if self.current.len() + bound >= self.best.len() {
            return;
        }

        let target = match dominated.first_unset() {
            Some(p) => p,
            None => return,
        };

        // Candidatos: el propio objetivo y luego sus vecinos en orden de
        // adyacencia, restringidos a posiciones mayores que el inicio.
        let target_vertex = self.order[target];
        let mut candidates: Vec<usize> = Vec::with_capacity(self.graph.degree(target_vertex) + 1);
        if target > start_pos {
            candidates.push(target);
        }
        for &u in self.graph.neighbors(target_vertex) {
            let q = self.positions[u];
            if q > start_pos {
                candidates.push(q);
            }
        }

        for q in candidates {
            let mut next = dominated.clone();
            next.union_with(&self.neighborhoods[q]);
            self.current.push(q);
            self.dfs(&next, start_pos);
            self.current.pop();
        }
    }
}

pub fn dominating_set(graph: &Graph, ctx: &mut SearchContext) -> SolveReport {
    let n = graph.len();
    let order = degree_order(graph);
    let positions = positions_of(&order);
    let neighborhoods = closed_neighborhoods_by_position(graph, &order);
    let max_cover = max_closed_neighborhood(graph);
    info!("[branch_and_bound] conjunto dominante: {} vértices, cobertura máxima {}", n, max_cover);

    let mut search = DominatingSearch {
        graph,
        order,
        positions,
        neighborhoods,
        max_cover,
        current: Vec::new(),
        // Incumbente inicial: todos los vértices (trivialmente dominante)
        best: (0..n).collect(),
        calls: 0,
    };

    let mut starts_tested = 0usize;
    let mut status = SearchStatus::Complete;
    ctx.begin(n as u128);
    for p in 0..n {
        if search.best.len() == 1 {
            break;
        }
        if ctx.is_aborted() {
            status = SearchStatus::Aborted;
            break;
        }
        let dominated = search.neighborhoods[p].clone();
        search.current.push(p);
        search.dfs(&dominated, p);
        search.current.pop();

        starts_tested += 1;
        ctx.advance(starts_tested as u128);
    }
    ctx.finish();

    let mut solution: Vec<usize> = search.best.iter().map(|&p| search.order[p]).collect();
    solution.sort_unstable();
    info!(
        "[branch_and_bound] nodos de inicio probados: {}/{}; llamadas: {}; tamaño: {}",
        starts_tested,
        n,
        search.calls,
        solution.len()
    );
    SolveReport {
        problem: Problem::DominatingSet,
        strategy: Strategy::BranchAndBound,
        metric: solution.len(),
        solution,
        calls: search.calls,
        status,
    }
}
