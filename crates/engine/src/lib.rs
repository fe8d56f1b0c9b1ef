#![forbid(unsafe_code)]

//! Verification and scoring of race predictions.
//!
//! Everything here is a pure function of its inputs: a [`Prediction`], an
//! optional [`RaceResult`] and externally supplied base points go in, a
//! [`ScoreBreakdown`] comes out.

pub mod dnf;
mod error;
pub mod event_match;
pub mod model;
pub mod multiplier;
mod normalize;
pub mod podium;
mod score;

pub use error::Error;
pub use model::{EventKey, Events, Positions, Prediction, RaceResult};
pub use normalize::{NONE_TOKEN, Token, normalize};
pub use podium::{PodiumStatus, SlotMatch};
pub use score::{ScoreBreakdown, Scorer, score};
