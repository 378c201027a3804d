//! Bézier-Auswertung beliebigen Grades über die Bernstein-Basis.
//!
//! B(t) = Σ_{i=0..n} P_i · C(n,i) · t^i · (1-t)^(n-i),  n = Anzahl Punkte - 1

use glam::DVec2;
use thiserror::Error;

/// Standard-Anzahl an Stützstellen für die Kurvendarstellung (Schrittweite 0.0001).
pub const DEFAULT_SAMPLE_COUNT: usize = 10_001;

/// Fehler bei der Kurvenauswertung.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CurveError {
    /// Mindestens zwei Kontrollpunkte (Grad ≥ 1) erforderlich
    #[error("Kurve benötigt mindestens 2 Kontrollpunkte, vorhanden: {count}")]
    InsufficientPoints { count: usize },
}

/// Binomialkoeffizient C(n, k), iterativ-multiplikativ.
///
/// `C(n,i) = C(n,i-1) · (n-i+1) / i`. Multiplikation vor Division hält jeden
/// Zwischenwert ganzzahlig; bis ~2^53 ist das Ergebnis exakt.
pub fn binomial(n: usize, k: usize) -> f64 {
    if k > n {
        return 0.0;
    }
    let k = k.min(n - k);
    let mut c = 1.0f64;
    for i in 1..=k {
        c = c * (n - k + i) as f64 / i as f64;
    }
    c
}

/// Bernstein-Basispolynom b_{i,n}(t); 0 für `i > n`.
pub fn bernstein(n: usize, i: usize, t: f64) -> f64 {
    if i > n {
        return 0.0;
    }
    binomial(n, i) * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

/// Wertet die Kurve an `t ∈ [0, 1]` aus.
///
/// Außerhalb von [0, 1] wird das Polynom extrapoliert; darauf sollte sich
/// niemand verlassen.
pub fn evaluate(points: &[DVec2], t: f64) -> Result<DVec2, CurveError> {
    Ok(BezierCurve::new(points)?.eval(t))
}

/// Bézier-Kurve mit vorberechneten Binomialkoeffizienten.
///
/// Hält eine eigene Kopie der Kontrollpunkte, damit eine Auswertung nie
/// eine laufende Mutation der Punktliste sieht.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierCurve {
    points: Vec<DVec2>,
    coefficients: Vec<f64>,
}

impl BezierCurve {
    /// Erstellt die Kurve; verweigert weniger als 2 Punkte.
    pub fn new(points: &[DVec2]) -> Result<Self, CurveError> {
        if points.len() < 2 {
            return Err(CurveError::InsufficientPoints {
                count: points.len(),
            });
        }
        let n = points.len() - 1;
        Ok(Self {
            points: points.to_vec(),
            coefficients: (0..=n).map(|i| binomial(n, i)).collect(),
        })
    }

    /// Kurvengrad n.
    pub fn degree(&self) -> usize {
        self.points.len() - 1
    }

    /// B(t) als direkte Summe über die Bernstein-Basis, pro Achse.
    pub fn eval(&self, t: f64) -> DVec2 {
        let n = self.degree();
        let inv = 1.0 - t;
        self.points
            .iter()
            .zip(&self.coefficients)
            .enumerate()
            .fold(DVec2::ZERO, |acc, (i, (&p, &c))| {
                acc + p * (c * t.powi(i as i32) * inv.powi((n - i) as i32))
            })
    }

    /// Gleichmäßig verteilte Stützstellen über [0, 1] inkl. beider Endpunkte.
    ///
    /// `count < 2` liefert nur den Startpunkt.
    pub fn sample(&self, count: usize) -> Vec<DVec2> {
        if count < 2 {
            return vec![self.eval(0.0)];
        }
        let last = (count - 1) as f64;
        (0..count).map(|i| self.eval(i as f64 / last)).collect()
    }
}
