//! Workout summaries and their text and JSON renderings.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TrainingResult;
use crate::workout::Workout;

/// Computed values of one workout, captured once for reporting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InfoMessage {
    pub training_type: String,
    /// Hours.
    pub duration: f64,
    /// Kilometers.
    pub distance: f64,
    /// km/h.
    pub speed: f64,
    /// kcal.
    pub calories: f64,
}

impl InfoMessage {
    /// Human-readable summary with every number fixed to three decimals.
    pub fn message(&self) -> String {
        format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }

    /// Single-line JSON object with the raw values.
    pub fn to_json(&self) -> TrainingResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

/// Render the text summary of a workout.
pub fn render(workout: &Workout) -> String {
    workout.info().message()
}
