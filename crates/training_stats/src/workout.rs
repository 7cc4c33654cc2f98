//! The fixed set of workout kinds and the factory that builds them from
//! sensor packages.

use std::fmt;
use std::str::FromStr;

use crate::error::{TrainingError, TrainingResult};
use crate::report::InfoMessage;
use crate::training::{Running, SportsWalking, Swimming, Training};

/// Activity codes recognized in sensor packages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Swimming,
    Running,
    SportsWalking,
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Swimming,
        WorkoutKind::Running,
        WorkoutKind::SportsWalking,
    ];

    pub fn code(self) -> &'static str {
        match self {
            WorkoutKind::Swimming => "SWM",
            WorkoutKind::Running => "RUN",
            WorkoutKind::SportsWalking => "WLK",
        }
    }

    /// Number of positional values a package of this kind carries.
    pub fn arity(self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = TrainingError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        WorkoutKind::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| TrainingError::UnknownActivityCode(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One constructed workout of any kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Workout {
    Running(Running),
    SportsWalking(SportsWalking),
    Swimming(Swimming),
}

impl Workout {
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Workout::Running(_) => WorkoutKind::Running,
            Workout::SportsWalking(_) => WorkoutKind::SportsWalking,
            Workout::Swimming(_) => WorkoutKind::Swimming,
        }
    }

    pub fn distance_km(&self) -> f64 {
        match self {
            Workout::Running(w) => w.distance_km(),
            Workout::SportsWalking(w) => w.distance_km(),
            Workout::Swimming(w) => w.distance_km(),
        }
    }

    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Workout::Running(w) => w.mean_speed_kmh(),
            Workout::SportsWalking(w) => w.mean_speed_kmh(),
            Workout::Swimming(w) => w.mean_speed_kmh(),
        }
    }

    pub fn calories_burned(&self) -> f64 {
        match self {
            Workout::Running(w) => w.calories_burned(),
            Workout::SportsWalking(w) => w.calories_burned(),
            Workout::Swimming(w) => w.calories_burned(),
        }
    }

    pub fn info(&self) -> InfoMessage {
        match self {
            Workout::Running(w) => w.info(),
            Workout::SportsWalking(w) => w.info(),
            Workout::Swimming(w) => w.info(),
        }
    }
}

/// Build a workout from an activity code and its positional values.
///
/// Value order per code:
/// - `RUN`: action_count, duration_hours, weight_kg
/// - `WLK`: action_count, duration_hours, weight_kg, height_cm
/// - `SWM`: action_count, duration_hours, weight_kg, pool_length_m, pool_laps
pub fn read_package(code: &str, args: &[f64]) -> TrainingResult<Workout> {
    let kind: WorkoutKind = code.parse()?;
    if args.len() != kind.arity() {
        return Err(TrainingError::ArgumentCount {
            code: code.to_string(),
            expected: kind.arity(),
            got: args.len(),
        });
    }
    tracing::debug!(code, args = args.len(), "building workout");

    let action_count = count_arg(code, 0, args[0])?;
    let (duration_hours, weight_kg) = (args[1], args[2]);
    let workout = match kind {
        WorkoutKind::Running => Workout::Running(Running::new(action_count, duration_hours, weight_kg)),
        WorkoutKind::SportsWalking => Workout::SportsWalking(SportsWalking::new(
            action_count,
            duration_hours,
            weight_kg,
            args[3],
        )),
        WorkoutKind::Swimming => Workout::Swimming(Swimming::new(
            action_count,
            duration_hours,
            weight_kg,
            args[3],
            count_arg(code, 4, args[4])?,
        )),
    };
    Ok(workout)
}

/// Same as [`read_package`].
pub fn build_activity(code: &str, args: &[f64]) -> TrainingResult<Workout> {
    read_package(code, args)
}

/// Convert an integer-typed positional value. Only the type is checked, not the range.
/// `index` is zero-based; the error reports it one-based.
fn count_arg(code: &str, index: usize, value: f64) -> TrainingResult<i64> {
    // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive.
    if value.is_finite()
        && value.fract() == 0.0
        && value >= i64::MIN as f64
        && value < i64::MAX as f64
    {
        Ok(value as i64)
    } else {
        Err(TrainingError::ArgumentType {
            code: code.to_string(),
            position: index + 1,
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_kinds() {
        assert_eq!("SWM".parse::<WorkoutKind>().unwrap(), WorkoutKind::Swimming);
        assert_eq!("RUN".parse::<WorkoutKind>().unwrap(), WorkoutKind::Running);
        assert_eq!("WLK".parse::<WorkoutKind>().unwrap(), WorkoutKind::SportsWalking);
    }

    #[test]
    fn codes_are_case_sensitive() {
        let err = "run".parse::<WorkoutKind>().unwrap_err();
        assert!(matches!(err, TrainingError::UnknownActivityCode(c) if c == "run"));
    }

    #[test]
    fn kind_round_trips_through_code() {
        for kind in WorkoutKind::ALL {
            assert_eq!(kind.code().parse::<WorkoutKind>().unwrap(), kind);
            assert_eq!(kind.to_string(), kind.code());
        }
    }

    #[test]
    fn read_package_builds_matching_variant() {
        let w = read_package("WLK", &[9000.0, 1.0, 75.0, 180.0]).unwrap();
        assert_eq!(w.kind(), WorkoutKind::SportsWalking);
        assert_eq!(
            w,
            Workout::SportsWalking(SportsWalking::new(9000, 1.0, 75.0, 180.0))
        );
    }

    #[test]
    fn read_package_rejects_unknown_code() {
        let err = read_package("XYZ", &[1.0, 2.0, 3.0]).unwrap_err();
        assert!(matches!(err, TrainingError::UnknownActivityCode(c) if c == "XYZ"));
    }

    #[test]
    fn read_package_rejects_wrong_arity() {
        let err = read_package("RUN", &[15000.0, 1.0]).unwrap_err();
        assert!(matches!(
            err,
            TrainingError::ArgumentCount { expected: 3, got: 2, .. }
        ));
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0]).unwrap_err();
        assert!(matches!(
            err,
            TrainingError::ArgumentCount { expected: 5, got: 4, .. }
        ));
    }

    #[test]
    fn read_package_rejects_fractional_counts() {
        let err = read_package("RUN", &[10.5, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, TrainingError::ArgumentType { position: 1, .. }));
        let err = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, 2.5]).unwrap_err();
        assert!(matches!(err, TrainingError::ArgumentType { position: 5, .. }));
        let err = read_package("RUN", &[f64::NAN, 1.0, 75.0]).unwrap_err();
        assert!(matches!(err, TrainingError::ArgumentType { position: 1, .. }));
    }

    #[test]
    fn read_package_accepts_negative_counts() {
        let w = read_package("RUN", &[-100.0, 1.0, 75.0]).unwrap();
        assert!((w.distance_km() - -0.065).abs() < 1e-9);
        let w = read_package("SWM", &[720.0, 1.0, 80.0, 25.0, -40.0]).unwrap();
        assert!((w.mean_speed_kmh() - -1.0).abs() < 1e-9);
    }

    #[test]
    fn build_activity_is_read_package() {
        let args = [15000.0, 1.0, 75.0];
        assert_eq!(
            build_activity("RUN", &args).unwrap(),
            read_package("RUN", &args).unwrap()
        );
    }
}
