//! Aproximación del camino más largo por doble barrido (estilo diámetro de
//! árbol): un DFS completo desde un extremo probable, el vértice más profundo
//! como punta, y un segundo DFS desde esa punta evitando lo ya usado.

use log::info;

use crate::algorithm::context::SearchContext;
use crate::graph::{BitSet, Graph};
use crate::models::{Problem, SearchStatus, SolveReport, Strategy};

struct Sweep {
    path: Vec<usize>,
    endpoint: usize,
    explored: usize,
}

/// DFS en orden de adyacencia desde `start` registrando padre y profundidad;
/// devuelve el camino del árbol hasta el vértice más profundo (el primero
/// visitado en caso de empate).
fn farthest_path(graph: &Graph, start: usize, blocked: &BitSet) -> Sweep {
    let n = graph.len();
    let mut explored = BitSet::new(n);
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut depth: Vec<usize> = vec![0; n];
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    explored.insert(start);
    let mut explored_count = 1usize;
    let mut farthest = start;

    while let Some((v, cursor)) = stack.last_mut() {
        let v = *v;
        let neighbors = graph.neighbors(v);
        let mut child: Option<usize> = None;
        while *cursor < neighbors.len() {
            let u = neighbors[*cursor];
            *cursor += 1;
            if !explored.contains(u) && !blocked.contains(u) {
                child = Some(u);
                break;
            }
        }
        match child {
            Some(u) => {
                explored.insert(u);
                explored_count += 1;
                parent[u] = Some(v);
                depth[u] = depth[v] + 1;
                if depth[u] > depth[farthest] {
                    farthest = u;
                }
                stack.push((u, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    let mut path = vec![farthest];
    let mut current = farthest;
    while let Some(p) = parent[current] {
        path.push(p);
        current = p;
    }
    path.reverse();
    Sweep { path, endpoint: farthest, explored: explored_count }
}

pub fn longest_path(graph: &Graph, ctx: &mut SearchContext) -> SolveReport {
    let n = graph.len();
    ctx.begin(2);

    // Preferir un vértice de grado 1 como inicio: suele ser un extremo.
    let initial = (0..n).find(|&v| graph.degree(v) == 1).unwrap_or(0);
    let first = farthest_path(graph, initial, &BitSet::new(n));
    ctx.advance(1);

    let mut used = BitSet::new(n);
    for &v in &first.path {
        used.insert(v);
    }
    used.remove(first.endpoint);

    let mut status = SearchStatus::Complete;
    let mut explored = first.explored as u64;
    let mut path = first.path.clone();
    if ctx.is_aborted() {
        status = SearchStatus::Aborted;
    } else {
        let second = farthest_path(graph, first.endpoint, &used);
        explored += second.explored as u64;
        if second.path.len() > 1 {
            let last = first.path[first.path.len() - 1];
            if graph.has_edge(last, second.path[1]) {
                path.extend_from_slice(&second.path[1..]);
            }
        }
        ctx.advance(2);
    }
    ctx.finish();

    info!(
        "[double_sweep] inicio {}, punta {}; vértices explorados: {}; largo: {}",
        graph.label(initial),
        graph.label(first.endpoint),
        explored,
        path.len()
    );
    SolveReport {
        problem: Problem::LongestPath,
        strategy: Strategy::DoubleSweep,
        metric: path.len(),
        solution: path,
        calls: explored,
        status,
    }
}
