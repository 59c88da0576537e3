// Construcción de la red de metro (estaciones + líneas) sobre petgraph.

pub mod io;
pub mod render;

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

use log::{info, warn};
use petgraph::graph::{NodeIndex, UnGraph};

use crate::models::{Connection, Station};
pub use io::{parse_lines, parse_stations, read_lines, read_stations, LineSpec};
pub use render::render_network;

pub type MetroNetwork = UnGraph<Station, Connection>;

/// Arma la red: un nodo por estación (orden de archivo) y una arista por
/// conexión válida. Se omiten con aviso las conexiones con estaciones
/// desconocidas y los lazos. Una conexión repetida conserva su posición pero
/// toma la línea y el color de la última aparición.
pub fn build_network(stations: &[(String, (f64, f64))], lines: &[LineSpec]) -> MetroNetwork {
    let mut g: MetroNetwork = UnGraph::new_undirected();
    let mut idx: HashMap<&str, NodeIndex> = HashMap::new();
    for (name, (x, y)) in stations {
        let node = g.add_node(Station { name: name.clone(), x: *x, y: *y });
        idx.insert(name.as_str(), node);
    }

    let mut skipped = 0usize;
    for line in lines {
        for (a, b) in &line.connections {
            let (na, nb) = match (idx.get(a.as_str()), idx.get(b.as_str())) {
                (Some(&na), Some(&nb)) => (na, nb),
                _ => {
                    warn!("{}: conexión {};{} con estación desconocida, se omite", line.name, a, b);
                    skipped += 1;
                    continue;
                }
            };
            if na == nb {
                continue;
            }
            let attrs = Connection { line: line.name.clone(), color: line.color.clone() };
            match g.find_edge(na, nb) {
                Some(e) => g[e] = attrs,
                None => {
                    g.add_edge(na, nb, attrs);
                }
            }
        }
    }

    info!(
        "red construida: {} estaciones, {} conexiones ({} omitidas)",
        g.node_count(),
        g.edge_count(),
        skipped
    );
    g
}

pub fn load_network<P: AsRef<Path>, Q: AsRef<Path>>(stations_path: P, lines_path: Q) -> Result<MetroNetwork, Box<dyn Error>> {
    let stations = read_stations(stations_path)?;
    let lines = read_lines(lines_path)?;
    Ok(build_network(&stations, &lines))
}

pub fn network_from_text(stations_text: &str, lines_text: &str) -> Result<MetroNetwork, Box<dyn Error>> {
    let stations = parse_stations(stations_text)?;
    let lines = parse_lines(lines_text);
    Ok(build_network(&stations, &lines))
}
