// Utilidades compartidas por las búsquedas exactas: orden por grado,
// vecindarios cerrados y cotas optimistas.

use std::cmp::Reverse;

use crate::graph::{BitSet, Graph};

/// Vértices ordenados por grado descendente; empates por índice ascendente.
pub fn degree_order(graph: &Graph) -> Vec<usize> {
    let mut order: Vec<usize> = (0..graph.len()).collect();
    order.sort_by_key(|&v| Reverse(graph.degree(v)));
    order
}

/// Inversa de una permutación: `positions[order[p]] == p`.
pub fn positions_of(order: &[usize]) -> Vec<usize> {
    let mut pos = vec![0usize; order.len()];
    for (p, &v) in order.iter().enumerate() {
        pos[v] = p;
    }
    pos
}

/// `N[v] = {v} ∪ adj(v)` como bitset, indexado por vértice.
pub fn closed_neighborhoods(graph: &Graph) -> Vec<BitSet> {
    (0..graph.len())
        .map(|v| {
            let mut bs = BitSet::new(graph.len());
            bs.insert(v);
            for &u in graph.neighbors(v) {
                bs.insert(u);
            }
            bs
        })
        .collect()
}

/// Vecindarios cerrados expresados en posiciones de `order` en lugar de
/// vértices: el bit `p` representa a `order[p]`.
pub fn closed_neighborhoods_by_position(graph: &Graph, order: &[usize]) -> Vec<BitSet> {
    let pos = positions_of(order);
    order
        .iter()
        .map(|&v| {
            let mut bs = BitSet::new(graph.len());
            bs.insert(pos[v]);
            for &u in graph.neighbors(v) {
                bs.insert(pos[u]);
            }
            bs
        })
        .collect()
}

/// Mayor vecindario cerrado de todo el grafo (grado máximo + 1).
pub fn max_closed_neighborhood(graph: &Graph) -> usize {
    (0..graph.len()).map(|v| graph.degree(v) + 1).max().unwrap_or(1)
}

/// Cota simple de la fuerza bruta: largo actual más todo lo no visitado.
#[inline]
pub fn path_length_bound(path_len: usize, visited: usize, total: usize) -> usize {
    path_len + (total - visited)
}

/// Mínimo de vértices que faltan para cubrir `undominated` si cada uno cubre a
/// lo sumo `max_cover`.
#[inline]
pub fn cover_lower_bound(undominated: usize, max_cover: usize) -> usize {
    undominated.div_ceil(max_cover.max(1))
}

/// Cuenta los vértices no visitados alcanzables desde `from` pasando sólo por
/// vértices no visitados. Ninguna extensión del camino que termina en `from`
/// puede salir de esa región.
pub struct ReachCounter {
    seen: BitSet,
    queue: Vec<usize>,
}

impl ReachCounter {
    pub fn new(n: usize) -> Self {
        ReachCounter { seen: BitSet::new(n), queue: Vec::with_capacity(n) }
    }

    pub fn count(&mut self, graph: &Graph, from: usize, visited: &BitSet) -> usize {
        self.seen.clear();
        self.queue.clear();
        self.queue.push(from);
        self.seen.insert(from);
        let mut reached = 0usize;
        while let Some(v) = self.queue.pop() {
            for &u in graph.neighbors(v) {
                if !visited.contains(u) && !self.seen.contains(u) {
                    self.seen.insert(u);
                    self.queue.push(u);
                    reached += 1;
                }
            }
        }
        reached
    }
}
