// Lectura de los archivos de estaciones y líneas.
//
// Estaciones: una por línea, "<nombre con espacios> <x> <y>".
// Líneas: cabecera "Linha <n>, <color>" (o "Line ..."), seguida de conexiones
// "<estación A>;<estación B>".

use std::collections::HashMap;
use std::error::Error;
use std::path::Path;

/// Línea de metro con su color y la lista de conexiones en orden de archivo.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub name: String,
    pub color: String,
    pub connections: Vec<(String, String)>,
}

/// Estaciones en orden de archivo (el orden define los índices del grafo).
pub fn parse_stations(text: &str) -> Result<Vec<(String, (f64, f64))>, Box<dyn Error>> {
    let mut out: Vec<(String, (f64, f64))> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();
    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        // Las coordenadas son los dos últimos tokens; el resto, tal cual, es el nombre.
        let bad = || format!("line {}: expected '<name> <x> <y>', got '{}'", lineno + 1, line);
        let (rest, y) = line.rsplit_once(char::is_whitespace).ok_or_else(bad)?;
        let (name, x) = rest.trim_end().rsplit_once(char::is_whitespace).ok_or_else(bad)?;
        let name = name.trim_end();
        if name.is_empty() {
            return Err(bad().into());
        }
        let x: f64 = x.parse().map_err(|e| format!("line {}: invalid x '{}': {}", lineno + 1, x, e))?;
        let y: f64 = y.parse().map_err(|e| format!("line {}: invalid y '{}': {}", lineno + 1, y, e))?;
        // Nombre repetido: la última posición gana, como en un diccionario
        match seen.get(name) {
            Some(&idx) => out[idx].1 = (x, y),
            None => {
                seen.insert(name.to_string(), out.len());
                out.push((name.to_string(), (x, y)));
            }
        }
    }
    Ok(out)
}

// Una fila con ';' siempre es conexión, aunque la estación empiece por "Line".
fn is_line_header(line: &str) -> bool {
    if line.contains(';') {
        return false;
    }
    let lower = line.to_lowercase();
    lower.starts_with("linha") || lower.starts_with("line")
}

pub fn parse_lines(text: &str) -> Vec<LineSpec> {
    let mut out: Vec<LineSpec> = Vec::new();
    let mut current: Option<LineSpec> = None;
    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        if is_line_header(line) {
            if let Some(done) = current.take() {
                out.push(done);
            }
            let mut parts = line.splitn(2, ',');
            let name = parts.next().unwrap_or("").trim().to_string();
            let color = parts
                .next()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .unwrap_or("black")
                .to_string();
            current = Some(LineSpec { name, color, connections: Vec::new() });
            continue;
        }
        if let Some((a, b)) = line.split_once(';') {
            match current.as_mut() {
                Some(open) => open.connections.push((a.trim().to_string(), b.trim().to_string())),
                None => log::warn!("conexión '{}' fuera de cualquier línea; se ignora", line),
            }
        }
    }
    if let Some(done) = current.take() {
        out.push(done);
    }
    out
}

pub fn read_stations<P: AsRef<Path>>(path: P) -> Result<Vec<(String, (f64, f64))>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path.as_ref())
        .map_err(|e| format!("failed to read stations '{}': {}", path.as_ref().display(), e))?;
    parse_stations(&text)
}

pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<LineSpec>, Box<dyn Error>> {
    let text = std::fs::read_to_string(path.as_ref())
        .map_err(|e| format!("failed to read lines '{}': {}", path.as_ref().display(), e))?;
    Ok(parse_lines(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stations_keep_spaces_in_names() {
        let text = "Gare du Nord 10.5 20\n\nChâtelet 1 -2.5\n";
        let st = parse_stations(text).unwrap();
        assert_eq!(st, vec![
            ("Gare du Nord".to_string(), (10.5, 20.0)),
            ("Châtelet".to_string(), (1.0, -2.5)),
        ]);
    }

    #[test]
    fn stations_keep_inner_spacing_verbatim() {
        let st = parse_stations("Porta  Nuova   3 4\n").unwrap();
        assert_eq!(st, vec![("Porta  Nuova".to_string(), (3.0, 4.0))]);
        let lines = parse_lines("Linha 1\nPorta  Nuova;B\n");
        assert_eq!(lines[0].connections[0].0, st[0].0, "el nombre coincide con el del archivo de líneas");
    }

    #[test]
    fn stations_reject_missing_coordinates() {
        assert!(parse_stations("Bastille 3\n").is_err());
        assert!(parse_stations("Bastille x y\n").is_err());
    }

    #[test]
    fn lines_group_connections_and_default_color() {
        let text = "Linha 1, yellow\nA;B\nB ; C\nlinha 2\nC;D\n";
        let lines = parse_lines(text);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Linha 1");
        assert_eq!(lines[0].color, "yellow");
        assert_eq!(lines[0].connections, vec![("A".into(), "B".into()), ("B".into(), "C".into())]);
        assert_eq!(lines[1].color, "black");
    }

    #[test]
    fn connection_rows_starting_with_line_are_not_headers() {
        let lines = parse_lines("Linha 1, blue\nLinear Park;B\nB;C\nLine 2, red\nLinha Verde;C\n");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].name, "Linha 1");
        assert_eq!(
            lines[0].connections,
            vec![("Linear Park".into(), "B".into()), ("B".into(), "C".into())]
        );
        assert_eq!(lines[1].name, "Line 2");
        assert_eq!(lines[1].connections, vec![("Linha Verde".into(), "C".into())]);
    }
}
