use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};
use std::str::FromStr;

use super::{ExerciseRef, RoutineRef};

/// Actual performance for one set.
///
/// Every field is optional: a user may log only reps for a bodyweight set or
/// only a duration for a timed one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetPerformance {
    /// Load in kilograms.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Time under tension, in seconds.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    /// Rest taken after the set, in seconds.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rest_after: Option<u32>,
}

impl SetPerformance {
    /// Weight times reps; zero when either is missing.
    #[must_use]
    pub fn volume(&self) -> f64 {
        match (self.weight, self.reps) {
            (Some(weight), Some(reps)) => weight * f64::from(reps),
            _ => 0.0,
        }
    }
}

/// Logged sets for one exercise of a workout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggedExercise {
    pub exercise: ExerciseRef,
    #[serde(default)]
    pub sets: Vec<SetPerformance>,
}

/// A completed workout as returned by `GET /workouts`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    #[serde(rename = "_id", default)]
    pub id: String,
    #[serde(default)]
    pub routine: Option<RoutineRef>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub exercises: Vec<LoggedExercise>,
    /// Overall duration in minutes.
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub feeling_rating: Option<u8>,
}

impl WorkoutLog {
    /// Title shown in workout lists.
    #[must_use]
    pub fn routine_name(&self) -> &str {
        self.routine
            .as_ref()
            .map_or("Unknown routine", RoutineRef::display_name)
    }

    /// Sum of weight times reps over every logged set.
    #[must_use]
    pub fn total_volume(&self) -> f64 {
        self.exercises
            .iter()
            .flat_map(|exercise| exercise.sets.iter())
            .map(SetPerformance::volume)
            .sum()
    }
}

/// Payload for `POST /workouts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateWorkoutRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    pub routine: String,
    /// Overall duration in minutes.
    pub duration: u32,
    pub exercises: Vec<LoggedExercise>,
    pub notes: String,
    pub feeling_rating: u8,
}

// Sets logged by older clients were posted as raw form strings, so numbers may
// come back quoted or empty.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + FromStr,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(text)) => text.trim().parse().ok(),
        Some(number @ serde_json::Value::Number(_)) => serde_json::from_value(number).ok(),
        _ => None,
    })
}
