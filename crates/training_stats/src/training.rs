//! Workout sessions and the per-activity distance, speed and calorie formulas.
//!
//! Every activity shares the step-based distance and the distance-over-time
//! speed. The calorie formula has no shared default: each concrete session
//! type supplies its own, so an activity without one does not compile.

use crate::report::InfoMessage;

/// Meters in a kilometer.
pub const M_IN_KM: f64 = 1000.0;
/// Minutes in an hour.
pub const MIN_IN_H: f64 = 60.0;

/// Step length shared by running and walking, in meters.
pub const STEP_LENGTH_M: f64 = 0.65;
/// Distance covered per stroke while swimming, in meters.
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Measurements common to every workout.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    /// Steps or strokes counted by the sensor.
    pub action_count: i64,
    pub duration_hours: f64,
    pub weight_kg: f64,
}

impl Session {
    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            action_count,
            duration_hours,
            weight_kg,
        }
    }
}

/// Computations available on every workout.
///
/// `duration_hours` is used as a divisor and must be nonzero. Inputs are not
/// range checked.
pub trait Training {
    /// Label shown as the training type in reports.
    const LABEL: &'static str;
    /// Distance covered by one action, in meters.
    const STEP_LENGTH_M: f64 = STEP_LENGTH_M;

    fn session(&self) -> &Session;

    /// Distance in kilometers derived from the action count.
    fn distance_km(&self) -> f64 {
        self.session().action_count as f64 * Self::STEP_LENGTH_M / M_IN_KM
    }

    /// Mean speed in km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.session().duration_hours
    }

    /// Estimated energy expenditure in kcal.
    fn calories_burned(&self) -> f64;

    /// Snapshot of the computed values for reporting.
    fn info(&self) -> InfoMessage {
        InfoMessage {
            training_type: Self::LABEL.to_string(),
            duration: self.session().duration_hours,
            distance: self.distance_km(),
            speed: self.mean_speed_kmh(),
            calories: self.calories_burned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Running {
    pub session: Session,
}

impl Running {
    const SPEED_MULTIPLIER: f64 = 18.0;
    const SPEED_SHIFT: f64 = 20.0;

    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64) -> Self {
        Self {
            session: Session::new(action_count, duration_hours, weight_kg),
        }
    }
}

impl Training for Running {
    const LABEL: &'static str = "Running";

    fn session(&self) -> &Session {
        &self.session
    }

    fn calories_burned(&self) -> f64 {
        let s = &self.session;
        (Self::SPEED_MULTIPLIER * self.mean_speed_kmh() - Self::SPEED_SHIFT) * s.weight_kg / M_IN_KM
            * (s.duration_hours * MIN_IN_H)
    }
}

/// Race walking. `height_cm` is a divisor in the calorie formula and must be nonzero.
#[derive(Clone, Debug, PartialEq)]
pub struct SportsWalking {
    pub session: Session,
    pub height_cm: f64,
}

impl SportsWalking {
    const WEIGHT_MULTIPLIER: f64 = 0.035;
    const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    const SPEED_EXPONENT: i32 = 2;

    pub fn new(action_count: i64, duration_hours: f64, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            session: Session::new(action_count, duration_hours, weight_kg),
            height_cm,
        }
    }
}

impl Training for SportsWalking {
    const LABEL: &'static str = "SportsWalking";

    fn session(&self) -> &Session {
        &self.session
    }

    fn calories_burned(&self) -> f64 {
        let s = &self.session;
        // Floor division: reference outputs depend on the truncated quotient.
        let speed_per_height = (self.mean_speed_kmh().powi(Self::SPEED_EXPONENT) / self.height_cm).floor();
        (Self::WEIGHT_MULTIPLIER * s.weight_kg
            + speed_per_height * Self::SPEED_HEIGHT_MULTIPLIER * s.weight_kg)
            * (s.duration_hours * MIN_IN_H)
    }
}

/// Pool swimming. Speed comes from pool geometry; distance still comes from strokes.
#[derive(Clone, Debug, PartialEq)]
pub struct Swimming {
    pub session: Session,
    pub pool_length_m: f64,
    pub pool_laps: i64,
}

impl Swimming {
    const SPEED_SHIFT: f64 = 1.1;
    const WEIGHT_MULTIPLIER: f64 = 2.0;

    pub fn new(
        action_count: i64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: i64,
    ) -> Self {
        Self {
            session: Session::new(action_count, duration_hours, weight_kg),
            pool_length_m,
            pool_laps,
        }
    }
}

impl Training for Swimming {
    const LABEL: &'static str = "Swimming";
    const STEP_LENGTH_M: f64 = STROKE_LENGTH_M;

    fn session(&self) -> &Session {
        &self.session
    }

    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m * self.pool_laps as f64 / M_IN_KM / self.session.duration_hours
    }

    // Adds speed rather than multiplying it by weight; kept as-is to match reference outputs.
    fn calories_burned(&self) -> f64 {
        self.mean_speed_kmh() + Self::SPEED_SHIFT * Self::WEIGHT_MULTIPLIER * self.session.weight_kg
    }
}
