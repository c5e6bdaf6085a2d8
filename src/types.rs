//! Type-safe wrappers for fixture and team identifiers, gameweeks, and
//! baseline difficulty ratings.
//!
//! Ranges are validated at construction so downstream code never has to
//! re-check that a difficulty rating is 1-5 or a gameweek is 1-38.

use crate::error::{FplError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// First round of the league season.
pub const FIRST_GAMEWEEK: u8 = 1;
/// Final round of the league season.
pub const FINAL_GAMEWEEK: u8 = 38;

/// Type-safe wrapper for team IDs.
///
/// # Examples
///
/// ```rust
/// use fpl_fixtures::TeamId;
///
/// let team = TeamId::new(14);
/// assert_eq!(team.as_u32(), 14);
/// assert_eq!(team.to_string(), "14");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub u32);

impl TeamId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TeamId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

/// Type-safe wrapper for fixture IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FixtureId(pub u32);

impl FixtureId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FixtureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A league round number, validated to the 1-38 season range.
///
/// Window arithmetic saturates at the season boundaries, which is what the
/// congestion window and run aggregation need:
///
/// ```rust
/// use fpl_fixtures::Gameweek;
///
/// let gw = Gameweek::new(2).unwrap();
/// assert_eq!(gw.back(2).as_u8(), 1);
/// assert_eq!(gw.ahead(40).as_u8(), 38);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gameweek(u8);

impl Gameweek {
    pub fn new(gw: i64) -> Result<Self> {
        if (FIRST_GAMEWEEK as i64..=FINAL_GAMEWEEK as i64).contains(&gw) {
            Ok(Self(gw as u8))
        } else {
            Err(FplError::InvalidGameweek { value: gw })
        }
    }

    /// Build a gameweek from arbitrary arithmetic, clamping into the season.
    pub fn clamped(gw: i64) -> Self {
        Self(gw.clamp(FIRST_GAMEWEEK as i64, FINAL_GAMEWEEK as i64) as u8)
    }

    /// `n` gameweeks earlier, saturating at gameweek 1.
    pub fn back(&self, n: u8) -> Self {
        Self::clamped(self.0 as i64 - n as i64)
    }

    /// `n` gameweeks later, saturating at gameweek 38.
    pub fn ahead(&self, n: u8) -> Self {
        Self::clamped(self.0 as i64 + n as i64)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(FIRST_GAMEWEEK)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GW{}", self.0)
    }
}

/// A baseline 1-5 fixture difficulty rating, externally assigned.
///
/// Lower is easier. Constructing a value outside 1-5 fails with
/// [`FplError::InvalidDifficulty`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DifficultyRating(u8);

impl DifficultyRating {
    pub fn new(rating: i64) -> Result<Self> {
        if (1..=5).contains(&rating) {
            Ok(Self(rating as u8))
        } else {
            Err(FplError::InvalidDifficulty { value: rating })
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for DifficultyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
