//! Parser für vorberechnete `render_path`-Strings (M/L/Z-Subpfade).
//!
//! Die Extraktions-Pipeline liefert pro Region optional einen Pfad-String
//! als Zeichen-Cache; Subpfade beschreiben Ringe (erster Ring = Außenkontur,
//! weitere = Löcher im Even-Odd-Sinn). Jede Abweichung vom erwarteten Format
//! führt zu `None`; der Aufrufer fällt dann auf `points` zurück.

use glam::Vec2;

/// Zerlegt einen Pfad-String in Ringe aus Welt-Koordinaten.
///
/// Unterstützt werden absolute `M`/`L`-Kommandos und `Z` als Ring-Abschluss,
/// mit Whitespace oder Komma als Trenner. Ringe mit weniger als drei Punkten
/// werden verworfen; bleibt kein Ring übrig, ist das Ergebnis `None`.
pub fn parse_render_path(path: &str) -> Option<Vec<Vec<Vec2>>> {
    let mut rings: Vec<Vec<Vec2>> = Vec::new();
    let mut current: Vec<Vec2> = Vec::new();
    let mut tokens = path
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty());

    let mut close_ring = |current: &mut Vec<Vec2>, rings: &mut Vec<Vec<Vec2>>| {
        if current.len() >= 3 {
            rings.push(std::mem::take(current));
        } else {
            current.clear();
        }
    };

    while let Some(token) = tokens.next() {
        match token {
            "M" => {
                close_ring(&mut current, &mut rings);
                let point = parse_point(tokens.next()?, tokens.next()?)?;
                current.push(point);
            }
            "L" => {
                let point = parse_point(tokens.next()?, tokens.next()?)?;
                current.push(point);
            }
            "Z" | "z" => {
                close_ring(&mut current, &mut rings);
            }
            // Nach einem M/L dürfen weitere Koordinatenpaare implizit folgen
            other => {
                let y = tokens.next()?;
                let point = parse_point(other, y)?;
                current.push(point);
            }
        }
    }
    close_ring(&mut current, &mut rings);

    if rings.is_empty() {
        None
    } else {
        Some(rings)
    }
}

fn parse_point(x: &str, y: &str) -> Option<Vec2> {
    let x: f32 = x.parse().ok()?;
    let y: f32 = y.parse().ok()?;
    if x.is_finite() && y.is_finite() {
        Some(Vec2::new(x, y))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_ring() {
        let rings = parse_render_path("M 0 0 L 10 0 L 10 10 L 0 10 Z").expect("Pfad erwartet");
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);
        assert_eq!(rings[0][2], Vec2::new(10.0, 10.0));
    }

    #[test]
    fn parses_outer_ring_with_hole() {
        let rings = parse_render_path(
            "M 0 0 L 10 0 L 10 10 L 0 10 Z M 4 4 L 6 4 L 6 6 L 4 6 Z",
        )
        .expect("zwei Ringe erwartet");
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[1][0], Vec2::new(4.0, 4.0));
    }

    #[test]
    fn parses_comma_separated_and_implicit_lineto() {
        let rings = parse_render_path("M 0,0 10,0 10,10 Z").expect("Pfad erwartet");
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 3);
    }

    #[test]
    fn malformed_input_returns_none() {
        assert!(parse_render_path("").is_none());
        assert!(parse_render_path("M 0 0 L banane 3 Z").is_none());
        assert!(parse_render_path("M 1 2 Z").is_none()); // zu wenig Punkte
        assert!(parse_render_path("C 0 0 1 1 2 2").is_none()); // Kurven nicht unterstützt
    }
}
