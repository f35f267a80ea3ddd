//! # Thresholds
//!
//! Cut points that split the level axis into five bands.
//!
//! Two magnitudes are applied symmetrically around zero:
//!
//! ```text
//!   HATE   |  DISLIKE  |      NONE      |  LIKE   |  LOVE
//! ---------[-----------[----------------]---------]--------->
//!       -strong      -mild            +mild    +strong
//! ```
//!
//! `[` and `]` mark which side owns the boundary. The negative cut points
//! belong to the band above them, the positive cut points to the band below
//! them, so NONE is closed on both ends.

use crate::error::{AffinityError, Result};
use crate::state::EmotionalState;
use serde::Serialize;

/// Default magnitude separating NONE from LIKE / DISLIKE.
pub const DEFAULT_MILD: f32 = 0.1;

/// Default magnitude separating LIKE / DISLIKE from LOVE / HATE.
pub const DEFAULT_STRONG: f32 = 0.6;

/// Validated pair of cut points.
///
/// Invariant: both finite and `0.0 <= mild < strong`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    mild: f32,
    strong: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            mild: DEFAULT_MILD,
            strong: DEFAULT_STRONG,
        }
    }
}

impl Thresholds {
    /// Create thresholds, validating `0.0 <= mild < strong`.
    pub fn new(mild: f32, strong: f32) -> Result<Self> {
        let valid = mild.is_finite() && strong.is_finite() && mild >= 0.0 && mild < strong;
        if !valid {
            return Err(AffinityError::InvalidThresholds { mild, strong });
        }
        Ok(Self { mild, strong })
    }

    #[must_use]
    pub const fn mild(&self) -> f32 {
        self.mild
    }

    #[must_use]
    pub const fn strong(&self) -> f32 {
        self.strong
    }

    /// The five bands in state order, HATE first.
    #[must_use]
    pub fn bands(&self) -> [Band; 5] {
        let (m, s) = (self.mild, self.strong);
        [
            Band::new(EmotionalState::Hate, None, Some(Bound::exclusive(-s))),
            Band::new(
                EmotionalState::Dislike,
                Some(Bound::inclusive(-s)),
                Some(Bound::exclusive(-m)),
            ),
            Band::new(
                EmotionalState::None,
                Some(Bound::inclusive(-m)),
                Some(Bound::inclusive(m)),
            ),
            Band::new(
                EmotionalState::Like,
                Some(Bound::exclusive(m)),
                Some(Bound::inclusive(s)),
            ),
            Band::new(EmotionalState::Love, Some(Bound::exclusive(s)), None),
        ]
    }

    /// The band mapped to `state`.
    #[must_use]
    pub fn band_for(&self, state: EmotionalState) -> Band {
        let [hate, dislike, none, like, love] = self.bands();
        match state {
            EmotionalState::Hate => hate,
            EmotionalState::Dislike => dislike,
            EmotionalState::None => none,
            EmotionalState::Like => like,
            EmotionalState::Love => love,
        }
    }
}

// =============================================================================
// BANDS
// =============================================================================

/// One end of a band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bound {
    pub value: f32,
    pub inclusive: bool,
}

impl Bound {
    #[must_use]
    pub const fn inclusive(value: f32) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    #[must_use]
    pub const fn exclusive(value: f32) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// The interval of levels mapped to one state.
///
/// A missing bound means the band is open towards that infinity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Band {
    pub state: EmotionalState,
    pub lower: Option<Bound>,
    pub upper: Option<Bound>,
}

impl Band {
    #[must_use]
    pub const fn new(state: EmotionalState, lower: Option<Bound>, upper: Option<Bound>) -> Self {
        Self {
            state,
            lower,
            upper,
        }
    }

    /// Check whether `level` falls inside this band. NaN is in no band.
    #[must_use]
    pub fn contains(&self, level: f32) -> bool {
        let above_lower = match self.lower {
            None => !level.is_nan(),
            Some(b) if b.inclusive => level >= b.value,
            Some(b) => level > b.value,
        };
        let below_upper = match self.upper {
            None => !level.is_nan(),
            Some(b) if b.inclusive => level <= b.value,
            Some(b) => level < b.value,
        };
        above_lower && below_upper
    }

    /// Interval notation, e.g. `[-0.6, -0.1)`.
    #[must_use]
    pub fn interval(&self) -> String {
        let lower = match self.lower {
            None => String::from("(-inf"),
            Some(b) => format!("{}{}", if b.inclusive { '[' } else { '(' }, b.value),
        };
        let upper = match self.upper {
            None => String::from("+inf)"),
            Some(b) => format!("{}{}", b.value, if b.inclusive { ']' } else { ')' }),
        };
        format!("{}, {}", lower, upper)
    }
}

// =============================================================================
// TESTS
// =============================================================================
