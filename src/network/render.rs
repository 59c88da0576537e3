// Dibujo de la red en PNG con plotters. Los nombres de estación se escriben
// con ab_glyph y una fuente TrueType registrada en tiempo de ejecución.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use log::{info, warn};
use petgraph::graph::NodeIndex;
use petgraph::visit::EdgeRef;
use plotters::prelude::*;
use plotters::style::{register_font, FontStyle};

use super::MetroNetwork;

const FALLBACK: RGBColor = RGBColor(128, 128, 128);
const STATION_FILL: RGBColor = RGBColor(211, 211, 211);
const LABEL_FAMILY: &str = "sans-serif";
const LABEL_SIZE: f64 = 13.0;

const SYSTEM_FONTS: [&str; 6] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static LABEL_FONT: OnceLock<PathBuf> = OnceLock::new();

/// Registra la fuente de las etiquetas. Con `path` sólo se prueba ese archivo;
/// sin él, las ubicaciones habituales del sistema. Devuelve si hay fuente.
pub fn register_label_font(path: Option<&Path>) -> bool {
    if LABEL_FONT.get().is_some() {
        return true;
    }
    let candidates: Vec<PathBuf> = match path {
        Some(p) => vec![p.to_path_buf()],
        None => SYSTEM_FONTS.iter().map(PathBuf::from).collect(),
    };
    for candidate in candidates {
        let Ok(bytes) = std::fs::read(&candidate) else { continue };
        // plotters guarda la fuente por el resto del proceso
        let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
        match register_font(LABEL_FAMILY, FontStyle::Normal, bytes) {
            Ok(()) => {
                info!("fuente de etiquetas: {}", candidate.display());
                let _ = LABEL_FONT.set(candidate);
                return true;
            }
            Err(_) => warn!("fuente inválida '{}'", candidate.display()),
        }
    }
    false
}

/// Traduce el color de una línea (nombre en inglés/portugués o `#rrggbb`);
/// cualquier otro valor, incluido "gray", cae en gris.
pub fn line_color(name: &str) -> RGBColor {
    let name = name.trim().to_lowercase();
    if let Some(hex) = name.strip_prefix('#') {
        if hex.len() == 6 && hex.is_ascii() {
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            if let (Some(r), Some(g), Some(b)) = (channel(0), channel(2), channel(4)) {
                return RGBColor(r, g, b);
            }
        }
        return FALLBACK;
    }
    match name.as_str() {
        "black" | "preto" => RGBColor(0, 0, 0),
        "blue" | "azul" => RGBColor(0, 82, 164),
        "lightblue" | "light blue" => RGBColor(110, 190, 235),
        "red" | "vermelho" => RGBColor(220, 30, 40),
        "green" | "verde" => RGBColor(0, 150, 70),
        "darkgreen" | "dark green" => RGBColor(0, 90, 40),
        "yellow" | "amarelo" => RGBColor(240, 200, 0),
        "orange" | "laranja" => RGBColor(245, 130, 30),
        "purple" | "roxo" | "violet" => RGBColor(120, 50, 150),
        "pink" | "rosa" => RGBColor(230, 120, 170),
        "brown" | "marrom" => RGBColor(140, 80, 40),
        "cyan" => RGBColor(0, 180, 200),
        "magenta" => RGBColor(200, 0, 150),
        _ => FALLBACK,
    }
}

fn padded_range(values: impl Iterator<Item = f64>) -> std::ops::Range<f64> {
    let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
    for v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if !lo.is_finite() || !hi.is_finite() {
        return 0.0..1.0;
    }
    let pad = ((hi - lo) * 0.05).max(1.0);
    (lo - pad)..(hi + pad)
}

/// Dibuja la red en `out_path`. `highlight` es un camino (índices de nodo)
/// que se traza encima en rojo y más grueso; vacío para no resaltar nada.
pub fn render_network<P: AsRef<Path>>(
    network: &MetroNetwork,
    highlight: &[usize],
    out_path: P,
    size: (u32, u32),
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path.as_ref(), size).into_drawing_area();
    root.fill(&WHITE).map_err(|e| format!("render failed: {}", e))?;

    let xs = padded_range(network.node_weights().map(|s| s.x));
    let ys = padded_range(network.node_weights().map(|s| s.y));
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .build_cartesian_2d(xs, ys)
        .map_err(|e| format!("render failed: {}", e))?;

    chart
        .draw_series(network.edge_references().map(|e| {
            let a = &network[e.source()];
            let b = &network[e.target()];
            PathElement::new(vec![(a.x, a.y), (b.x, b.y)], line_color(&e.weight().color).stroke_width(3))
        }))
        .map_err(|e| format!("render failed: {}", e))?;

    let points: Vec<(f64, f64)> = highlight
        .iter()
        .filter_map(|&i| network.node_weight(NodeIndex::new(i)).map(|s| (s.x, s.y)))
        .collect();
    if points.len() > 1 {
        chart
            .draw_series(std::iter::once(PathElement::new(points, RED.stroke_width(6))))
            .map_err(|e| format!("render failed: {}", e))?;
    }

    chart
        .draw_series(network.node_weights().map(|s| Circle::new((s.x, s.y), 7, STATION_FILL.filled())))
        .map_err(|e| format!("render failed: {}", e))?;
    chart
        .draw_series(network.node_weights().map(|s| Circle::new((s.x, s.y), 7, BLACK.stroke_width(1))))
        .map_err(|e| format!("render failed: {}", e))?;

    if register_label_font(None) {
        let style = (LABEL_FAMILY, LABEL_SIZE).into_font().color(&BLACK);
        let labels = chart.draw_series(
            network
                .node_weights()
                .map(|s| EmptyElement::at((s.x, s.y)) + Text::new(s.name.clone(), (9, -16), style.clone())),
        );
        if let Err(e) = labels {
            warn!("no se pudieron escribir los nombres de estación: {}", e);
        }
    } else {
        warn!("sin fuente TrueType; el mapa se dibuja sin nombres (definir METRO_FONT)");
    }

    root.present().map_err(|e| format!("failed to write '{}': {}", out_path.as_ref().display(), e))?;
    Ok(())
}
