use serde::{Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

use super::ExerciseRef;

/// Difficulty label chosen when creating a routine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Every selectable value, in form order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err("unknown difficulty"),
        }
    }
}

/// One planned exercise inside a routine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineExercise {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub exercise: ExerciseRef,
    /// Number of planned sets.
    #[serde(default, deserialize_with = "planned_sets")]
    pub sets: u32,
    #[serde(default)]
    pub reps: u32,
    /// Rest between sets, in seconds.
    #[serde(default)]
    pub rest_between_sets: u32,
}

/// A reusable workout plan.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Routine {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<RoutineExercise>,
    #[serde(default)]
    pub difficulty: String,
    /// Estimated duration in minutes.
    #[serde(default)]
    pub estimated_duration: Option<u32>,
    #[serde(default)]
    pub target_muscle_groups: Vec<String>,
    #[serde(default)]
    pub workout_type: String,
    #[serde(default)]
    pub equipment: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub times_used: u32,
}

impl Routine {
    /// Total number of planned sets across every exercise.
    #[must_use]
    pub fn planned_set_count(&self) -> u32 {
        self.exercises.iter().map(|exercise| exercise.sets).sum()
    }
}

/// Reference to a routine from a workout log; populated on reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RoutineRef {
    Populated(Box<Routine>),
    Id(String),
}

impl RoutineRef {
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Populated(routine) => &routine.name,
            Self::Id(id) => id,
        }
    }
}

/// Exercise row as submitted by the add-routine form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewRoutineExercise {
    pub exercise: String,
    pub sets: u32,
    pub reps: u32,
    pub rest_between_sets: u32,
}

/// Payload for `POST /routines`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoutineRequest {
    pub name: String,
    pub description: String,
    pub exercises: Vec<NewRoutineExercise>,
    pub difficulty: Difficulty,
    pub estimated_duration: u32,
    pub target_muscle_groups: Vec<String>,
    pub workout_type: String,
    pub equipment: Vec<String>,
    pub tags: Vec<String>,
    pub is_public: bool,
}

// The routines endpoint has been seen to send either a set count or an array
// of per-set templates; both collapse to a count.
fn planned_sets<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Planned {
        Count(u32),
        Listed(Vec<serde_json::Value>),
    }

    Ok(match Planned::deserialize(deserializer)? {
        Planned::Count(count) => count,
        Planned::Listed(sets) => u32::try_from(sets.len()).unwrap_or(u32::MAX),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_routine_with_populated_exercises() {
        let json = r#"{
            "_id": "r1",
            "name": "Upper body",
            "description": "Push and pull",
            "exercises": [
                {"_id": "re1", "exercise": {"_id": "e1", "name": "Bench Press"}, "sets": 3, "reps": 8, "restBetweenSets": 90},
                {"_id": "re2", "exercise": "e2", "sets": [{}, {}], "reps": 12}
            ],
            "difficulty": "Intermediate",
            "estimatedDuration": 45,
            "targetMuscleGroups": ["chest", "back"],
            "isPublic": true,
            "likes": 4,
            "timesUsed": 9
        }"#;
        let routine: Routine = serde_json::from_str(json).unwrap();

        assert_eq!(routine.exercises.len(), 2);
        assert_eq!(routine.exercises[0].exercise.display_name(), "Bench Press");
        assert_eq!(routine.exercises[0].rest_between_sets, 90);
        assert_eq!(routine.exercises[1].sets, 2);
        assert_eq!(routine.exercises[1].rest_between_sets, 0);
        assert_eq!(routine.planned_set_count(), 5);
        assert_eq!(routine.estimated_duration, Some(45));
        assert!(routine.is_public);
        assert_eq!(routine.times_used, 9);
    }

    #[test]
    fn test_create_routine_request_wire_names() {
        let request = CreateRoutineRequest {
            name: "Legs".to_string(),
            description: "Leg day".to_string(),
            exercises: vec![NewRoutineExercise {
                exercise: "e1".to_string(),
                sets: 4,
                reps: 6,
                rest_between_sets: 120,
            }],
            difficulty: Difficulty::Advanced,
            estimated_duration: 60,
            target_muscle_groups: vec!["legs".to_string()],
            workout_type: "strength".to_string(),
            equipment: vec![],
            tags: vec![],
            is_public: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["difficulty"], "Advanced");
        assert_eq!(value["estimatedDuration"], 60);
        assert_eq!(value["exercises"][0]["restBetweenSets"], 120);
        assert_eq!(value["isPublic"], false);
    }

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!("beginner".parse::<Difficulty>().unwrap(), Difficulty::Beginner);
        assert_eq!("Advanced".parse::<Difficulty>().unwrap(), Difficulty::Advanced);
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_routine_ref_variants() {
        let populated: RoutineRef = serde_json::from_str(r#"{"_id":"r1","name":"Full body"}"#).unwrap();
        assert_eq!(populated.display_name(), "Full body");
        let bare: RoutineRef = serde_json::from_str(r#""r9""#).unwrap();
        assert_eq!(bare.display_name(), "r9");
    }
}
