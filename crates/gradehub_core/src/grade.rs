//! Grade classification.
//!
//! # Responsibility
//! - Map a numeric score to one of six ordered grade tiers.
//! - Provide the tier -> display style token lookup used by badges.
//!
//! # Invariants
//! - `classify` is total: every integer maps to exactly one tier.
//! - Tier rank never improves as marks drop.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Grade tier derived from exam marks.
///
/// Variants are declared lowest-first so the derived `Ord` ranks tiers:
/// `Grade::F < Grade::D < ... < Grade::APlus`. Serialized as the display
/// strings (`"A+"`, `"A"`, ..., `"F"`) to match the external schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    F,
    D,
    C,
    B,
    A,
    #[serde(rename = "A+")]
    APlus,
}

impl Grade {
    /// All tiers, ranked best-first.
    pub const ALL: [Grade; 6] = [
        Grade::APlus,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::F,
    ];

    /// Display style token for badge rendering.
    ///
    /// Total over all tiers; the presentation layer maps tokens to
    /// concrete styling.
    pub fn style_token(self) -> &'static str {
        match self {
            Grade::APlus => "grade-a-plus",
            Grade::A => "grade-a",
            Grade::B => "grade-b",
            Grade::C => "grade-c",
            Grade::D => "grade-d",
            Grade::F => "grade-f",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        };
        write!(f, "{label}")
    }
}

/// Classifies marks into a grade tier.
///
/// Inclusive lower bounds, first match wins. Callers are expected to
/// pre-validate marks to [0, 100]; out-of-range input still resolves
/// deterministically (negative scores fall through to `F`, scores above
/// 100 stay `A+`) rather than erroring.
pub fn classify(marks: i64) -> Grade {
    if marks >= 90 {
        Grade::APlus
    } else if marks >= 80 {
        Grade::A
    } else if marks >= 70 {
        Grade::B
    } else if marks >= 60 {
        Grade::C
    } else if marks >= 50 {
        Grade::D
    } else {
        Grade::F
    }
}
