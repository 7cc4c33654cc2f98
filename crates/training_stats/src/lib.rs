//! Distance, speed and calorie statistics for running, race walking and
//! swimming sessions.
//!
//! A sensor package is an activity code plus positional values. [`read_package`]
//! turns it into a [`Workout`], and [`render`] formats the workout summary.

pub mod config;
pub mod error;
pub mod report;
pub mod training;
pub mod workout;

pub use error::{TrainingError, TrainingResult};
pub use report::{InfoMessage, render};
pub use training::{Running, Session, SportsWalking, Swimming, Training};
pub use workout::{Workout, WorkoutKind, build_activity, read_package};
