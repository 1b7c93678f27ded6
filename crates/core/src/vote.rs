//! Votes
//!
//! A [`Vote`] rates one tracking on a 1-5 scale. The pair
//! `(user_id, tracking_id)` is unique across the store.

use crate::error::{Error, Result};
use crate::types::{Timestamp, TrackingId, UserId, VoteId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Validated rating in `1..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    /// Lowest accepted rating
    pub const MIN: u8 = 1;
    /// Highest accepted rating
    pub const MAX: u8 = 5;

    /// Validate a rating
    pub fn new(value: u8) -> Result<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Rating(value))
        } else {
            Err(Error::Validation(format!(
                "rating must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            )))
        }
    }

    /// Numeric value
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> u8 {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Rating as submitted by a client: a JSON number or a numeric string
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RatingInput {
    /// `{"rating": 3}`
    Number(f64),
    /// `{"rating": "3"}`
    Text(String),
}

impl RatingInput {
    /// Coerce to a [`Rating`]
    ///
    /// Strings are trimmed and parsed as numbers. Anything that is not an
    /// integer in `1..=5` is a validation error.
    pub fn parse(&self) -> Result<Rating> {
        let number = match self {
            RatingInput::Number(n) => *n,
            RatingInput::Text(text) => text.trim().parse::<f64>().map_err(|_| {
                Error::Validation(format!("rating is not a number: {:?}", text))
            })?,
        };

        if !number.is_finite() || number.fract() != 0.0 {
            return Err(Error::Validation(format!(
                "rating must be a whole number, got {}",
                number
            )));
        }
        if number < f64::from(Rating::MIN) || number > f64::from(Rating::MAX) {
            return Err(Error::Validation(format!(
                "rating must be between {} and {}, got {}",
                Rating::MIN,
                Rating::MAX,
                number
            )));
        }

        Rating::new(number as u8)
    }
}

impl From<u8> for RatingInput {
    fn from(n: u8) -> Self {
        RatingInput::Number(f64::from(n))
    }
}

impl From<i32> for RatingInput {
    fn from(n: i32) -> Self {
        RatingInput::Number(f64::from(n))
    }
}

impl From<f64> for RatingInput {
    fn from(n: f64) -> Self {
        RatingInput::Number(n)
    }
}

impl From<&str> for RatingInput {
    fn from(s: &str) -> Self {
        RatingInput::Text(s.to_string())
    }
}

/// Payload for voting on a tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VoteRequest {
    /// Submitted rating, coerced on use
    pub rating: RatingInput,
}

impl VoteRequest {
    /// Create a payload
    pub fn new(rating: impl Into<RatingInput>) -> Self {
        Self {
            rating: rating.into(),
        }
    }
}

/// One user's rating of one tracking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vote {
    /// Opaque id
    pub id: VoteId,
    /// Voter
    pub user_id: UserId,
    /// Rated tracking
    pub tracking_id: TrackingId,
    /// Tracking name at the time of the vote
    pub tracking_name: String,
    /// Rating given
    pub rating: Rating,
    /// When the vote was cast
    pub created_at: Timestamp,
}
