//! Parser für Punkt-Eingaben im Format "X,Y".

use glam::DVec2;
use thiserror::Error;

/// Hinweistext für den Benutzer bei fehlerhafter Eingabe.
pub const POINT_INPUT_HINT: &str = "Expected: X,Y (e.g. 2,3)";

/// Fehler beim Parsen einer Punkt-Eingabe.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointParseError {
    #[error("Eingabe enthält kein Komma-getrenntes Koordinatenpaar")]
    MissingComponent,
    #[error("Eingabe enthält mehr als zwei Koordinaten")]
    TooManyComponents,
    #[error("Ungültige {axis}-Koordinate: '{value}'")]
    InvalidNumber { axis: char, value: String },
    #[error("{axis}-Koordinate ist nicht endlich: '{value}'")]
    NonFinite { axis: char, value: String },
}

/// Parst "X,Y" in einen Weltpunkt. Leerzeichen um die Zahlen werden ignoriert.
pub fn parse_point(text: &str) -> Result<DVec2, PointParseError> {
    let mut parts = text.split(',');
    let (Some(x), Some(y)) = (parts.next(), parts.next()) else {
        return Err(PointParseError::MissingComponent);
    };
    if parts.next().is_some() {
        return Err(PointParseError::TooManyComponents);
    }

    Ok(DVec2::new(parse_component(x, 'X')?, parse_component(y, 'Y')?))
}

fn parse_component(raw: &str, axis: char) -> Result<f64, PointParseError> {
    let value = raw.trim();
    let parsed: f64 = value.parse().map_err(|_| PointParseError::InvalidNumber {
        axis,
        value: value.to_string(),
    })?;
    if !parsed.is_finite() {
        return Err(PointParseError::NonFinite {
            axis,
            value: value.to_string(),
        });
    }
    Ok(parsed)
}
