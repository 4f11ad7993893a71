//! Sample and point classification types.

use std::fmt;

/// Sign of an extremum: peaks are positive, bottoms negative.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    Positive,
    Negative,
}

impl Polarity {
    /// The opposite polarity.
    pub fn flip(self) -> Self {
        match self {
            Polarity::Positive => Polarity::Negative,
            Polarity::Negative => Polarity::Positive,
        }
    }
}

/// Classification of a sample within its series.
///
/// Tagging produces `None`, `Peak` or `Bottom`. Turning-point selection may
/// promote an extremum to `Boundary`, keeping the sign of the extremum it came
/// from.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointKind {
    /// Neither a local maximum nor a local minimum.
    #[default]
    None,
    /// Strict local maximum.
    Peak,
    /// Strict local minimum.
    Bottom,
    /// Extremum promoted to a segment boundary.
    Boundary(Polarity),
}

impl PointKind {
    /// Polarity of an extremum or boundary; `None` for ordinary samples.
    pub fn polarity(self) -> Option<Polarity> {
        match self {
            PointKind::None => None,
            PointKind::Peak => Some(Polarity::Positive),
            PointKind::Bottom => Some(Polarity::Negative),
            PointKind::Boundary(p) => Some(p),
        }
    }

    /// True for raw (unpromoted) peaks and bottoms.
    pub fn is_extremum(self) -> bool {
        matches!(self, PointKind::Peak | PointKind::Bottom)
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, PointKind::Boundary(_))
    }

    /// Promote an extremum to a boundary of the same sign.
    ///
    /// Ordinary samples and existing boundaries are returned unchanged.
    pub fn promote(self) -> Self {
        match self {
            PointKind::Peak => PointKind::Boundary(Polarity::Positive),
            PointKind::Bottom => PointKind::Boundary(Polarity::Negative),
            other => other,
        }
    }

    /// Signed integer code: 0 none, 1 peak, -1 bottom, +/-2 boundary.
    pub fn code(self) -> i8 {
        match self {
            PointKind::None => 0,
            PointKind::Peak => 1,
            PointKind::Bottom => -1,
            PointKind::Boundary(Polarity::Positive) => 2,
            PointKind::Boundary(Polarity::Negative) => -2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PointKind::None => "none",
            PointKind::Peak => "peak",
            PointKind::Bottom => "bottom",
            PointKind::Boundary(_) => "boundary",
        }
    }
}

impl fmt::Display for PointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single (x, y) observation with its classification.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub kind: PointKind,
}

impl Sample {
    pub fn new(x: f64, y: f64, kind: PointKind) -> Self {
        Self { x, y, kind }
    }

    /// The sample as an `(x, y)` pair.
    pub fn point(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Copy of this sample with a different kind.
    pub fn with_kind(self, kind: PointKind) -> Self {
        Self { kind, ..self }
    }
}

impl fmt::Display for Sample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sample({}, {}, {})", self.x, self.y, self.kind)
    }
}
