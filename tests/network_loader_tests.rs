use metrosolve::api_json::NetworkSource;
use metrosolve::network::{load_network, network_from_text, render_network};
use metrosolve::server::load_session;
use metrosolve::Graph;

const STATIONS: &str = "\
Gare du Nord 10 40
Châtelet 10 20
Bastille 30 20
Nation 50 20
Saint-Lazare -10 30
";

const LINES: &str = "\
Linha 1, yellow
Châtelet;Bastille
Bastille;Nation
Linha 4, purple
Gare du Nord;Châtelet
Line 14
Saint-Lazare;Châtelet
Châtelet;Opéra
";

fn temp_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("metrosolve_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("directorio temporal");
    dir
}

#[test]
fn text_and_files_build_the_same_network() {
    let dir = temp_dir("loader");
    std::fs::write(dir.join("estacoes.txt"), STATIONS).unwrap();
    std::fs::write(dir.join("linhas.txt"), LINES).unwrap();

    let from_text = network_from_text(STATIONS, LINES).expect("red desde texto");
    let from_files = load_network(dir.join("estacoes.txt"), dir.join("linhas.txt")).expect("red desde archivos");
    assert_eq!(from_text.node_count(), 5);
    assert_eq!(from_text.edge_count(), 4, "la conexión con Opéra (desconocida) se omite");
    assert_eq!(from_files.node_count(), from_text.node_count());
    assert_eq!(from_files.edge_count(), from_text.edge_count());
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn solver_graph_keeps_connection_order() {
    let net = network_from_text(STATIONS, LINES).unwrap();
    let g = Graph::from_network(&net);
    let chatelet = g.index_of("Châtelet").unwrap();
    let names = g.labels_of(g.neighbors(chatelet));
    assert_eq!(names, vec!["Bastille", "Gare du Nord", "Saint-Lazare"]);
    assert!(g.validate().is_ok());
}

#[test]
fn load_session_rejects_disconnected_networks() {
    let stations = "A 0 0\nB 1 0\nC 2 0\nD 3 0\n";
    let lines = "Linha 1, red\nA;B\nC;D\n";
    let err = load_session(&NetworkSource::Text { stations: stations.into(), lines: lines.into() }).unwrap_err();
    assert!(err.contains("disconnected"), "{}", err);

    let missing = NetworkSource::Files { stations: "no/existe.txt".into(), lines: "no/existe2.txt".into() };
    assert!(load_session(&missing).is_err());
}

#[test]
fn renders_a_png_with_highlight() {
    let dir = temp_dir("render");
    let net = network_from_text(STATIONS, LINES).unwrap();
    let out = dir.join("red.png");
    render_network(&net, &[0, 1, 2, 3], &out, (320, 240)).expect("render");
    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    let _ = std::fs::remove_dir_all(&dir);
}
