//! Modelo de grafo inmutable que consumen todos los solvers.
//!
//! Los vértices son identificadores opacos (nombres de estación) mapeados a
//! índices densos `0..n` en orden de inserción. La adyacencia conserva el orden
//! de inserción de las aristas: los recorridos dependen de ese orden para ser
//! reproducibles.

pub mod bitset;

use std::collections::{HashMap, VecDeque};

use petgraph::graph::UnGraph;
use petgraph::visit::EdgeRef;

use crate::error::SolveError;
use crate::models::{Connection, Station};
pub use bitset::BitSet;

#[derive(Debug, Clone)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    edge_count: usize,
}

impl Graph {
    /// Construye el grafo desde listas de nombres. No descarta aristas
    /// duplicadas; rechaza lazos y extremos desconocidos.
    pub fn from_edges(vertices: &[&str], edges: &[(&str, &str)]) -> Result<Graph, SolveError> {
        let mut labels: Vec<String> = Vec::with_capacity(vertices.len());
        let mut index: HashMap<String, usize> = HashMap::new();
        for v in vertices {
            if index.contains_key(*v) {
                return Err(SolveError::InvalidInput(format!("duplicate vertex '{}'", v)));
            }
            index.insert(v.to_string(), labels.len());
            labels.push(v.to_string());
        }

        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); labels.len()];
        for (a, b) in edges {
            let (ia, ib) = match (index.get(*a), index.get(*b)) {
                (Some(&ia), Some(&ib)) => (ia, ib),
                _ => return Err(SolveError::InvalidInput(format!("edge {}-{} references an unknown vertex", a, b))),
            };
            if ia == ib {
                return Err(SolveError::InvalidInput(format!("self-loop on '{}'", a)));
            }
            adjacency[ia].push(ib);
            adjacency[ib].push(ia);
        }

        Ok(Graph { labels, index, adjacency, edge_count: edges.len() })
    }

    /// Extrae la adyacencia de la red de metro. Sólo importa la topología: las
    /// coordenadas y los datos de línea se ignoran.
    pub fn from_network(network: &UnGraph<Station, Connection>) -> Graph {
        let mut labels: Vec<String> = Vec::with_capacity(network.node_count());
        let mut index: HashMap<String, usize> = HashMap::new();
        for node in network.node_indices() {
            let name = network[node].name.clone();
            index.insert(name.clone(), node.index());
            labels.push(name);
        }

        // edge_references() recorre en orden de índice de arista (= inserción);
        // neighbors() de petgraph devolvería el orden inverso.
        let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); labels.len()];
        let mut edge_count = 0usize;
        for e in network.edge_references() {
            let (a, b) = (e.source().index(), e.target().index());
            if a == b { continue; }
            adjacency[a].push(b);
            adjacency[b].push(a);
            edge_count += 1;
        }

        Graph { labels, index, adjacency, edge_count }
    }

    /// Comprueba que el grafo sea utilizable por los solvers: al menos un
    /// vértice, al menos una arista y una sola componente conexa.
    pub fn validate(&self) -> Result<(), SolveError> {
        if self.labels.is_empty() {
            return Err(SolveError::InvalidInput("graph has no vertices".to_string()));
        }
        if self.edge_count == 0 {
            return Err(SolveError::InvalidInput("graph has no edges".to_string()));
        }
        let reached = self.reachable_from(0).count();
        if reached != self.len() {
            return Err(SolveError::InvalidInput(format!(
                "graph is disconnected: only {} of {} vertices reachable from '{}'",
                reached,
                self.len(),
                self.labels[0]
            )));
        }
        Ok(())
    }

    fn reachable_from(&self, start: usize) -> BitSet {
        let mut seen = BitSet::new(self.len());
        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);
        while let Some(v) = queue.pop_front() {
            for &u in &self.adjacency[v] {
                if !seen.contains(u) {
                    seen.insert(u);
                    queue.push_back(u);
                }
            }
        }
        seen
    }

    #[inline]
    pub fn len(&self) -> usize { self.labels.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.labels.is_empty() }

    #[inline]
    pub fn edge_count(&self) -> usize { self.edge_count }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[usize] { &self.adjacency[v] }

    #[inline]
    pub fn degree(&self, v: usize) -> usize { self.adjacency[v].len() }

    pub fn label(&self, v: usize) -> &str { &self.labels[v] }

    pub fn index_of(&self, name: &str) -> Option<usize> { self.index.get(name).copied() }

    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        let (small, other) = if self.degree(a) <= self.degree(b) { (a, b) } else { (b, a) };
        self.adjacency[small].contains(&other)
    }

    pub fn labels_of(&self, vertices: &[usize]) -> Vec<String> {
        vertices.iter().map(|&v| self.labels[v].clone()).collect()
    }

    /// Camino simple: vértices distintos y cada par consecutivo adyacente.
    pub fn is_simple_path(&self, path: &[usize]) -> bool {
        let mut seen = BitSet::new(self.len());
        for (i, &v) in path.iter().enumerate() {
            if v >= self.len() || seen.contains(v) { return false; }
            seen.insert(v);
            if i > 0 && !self.has_edge(path[i - 1], v) { return false; }
        }
        true
    }

    /// La unión de los vecindarios cerrados de `set` cubre todos los vértices.
    pub fn is_dominating_set(&self, set: &[usize]) -> bool {
        let mut covered = BitSet::new(self.len());
        for &v in set {
            if v >= self.len() { return false; }
            covered.insert(v);
            for &u in &self.adjacency[v] { covered.insert(u); }
        }
        covered.count() == self.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjacency_keeps_insertion_order_and_symmetry() {
        let g = Graph::from_edges(&["A", "B", "C", "D"], &[("A", "C"), ("A", "B"), ("D", "A")]).unwrap();
        assert_eq!(g.neighbors(0), &[2, 1, 3]);
        for v in 0..g.len() {
            for &u in g.neighbors(v) {
                assert!(g.neighbors(u).contains(&v));
            }
        }
        assert_eq!(g.edge_count(), 3);
    }

    #[test]
    fn rejects_self_loop_and_unknown_endpoint() {
        assert!(matches!(Graph::from_edges(&["A"], &[("A", "A")]), Err(SolveError::InvalidInput(_))));
        assert!(matches!(Graph::from_edges(&["A"], &[("A", "Z")]), Err(SolveError::InvalidInput(_))));
    }

    #[test]
    fn validate_flags_empty_edgeless_and_disconnected() {
        let empty = Graph::from_edges(&[], &[]).unwrap();
        assert!(empty.validate().is_err());
        let lonely = Graph::from_edges(&["A"], &[]).unwrap();
        assert!(lonely.validate().is_err());
        let split = Graph::from_edges(&["A", "B", "C", "D"], &[("A", "B"), ("C", "D")]).unwrap();
        assert!(split.validate().is_err());
        let ok = Graph::from_edges(&["A", "B"], &[("A", "B")]).unwrap();
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn path_and_dominating_checks() {
        let g = Graph::from_edges(&["A", "B", "C"], &[("A", "B"), ("B", "C")]).unwrap();
        assert!(g.is_simple_path(&[0, 1, 2]));
        assert!(!g.is_simple_path(&[0, 2]));
        assert!(!g.is_simple_path(&[0, 1, 0]));
        assert!(g.is_dominating_set(&[1]));
        assert!(!g.is_dominating_set(&[0]));
    }
}
