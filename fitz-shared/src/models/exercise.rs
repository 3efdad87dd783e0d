use serde::{Deserialize, Serialize};

/// Catalogue entry; read-only from the client's point of view.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    #[serde(rename = "_id", default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub muscle_group: String,
    #[serde(default)]
    pub equipment: String,
}

/// Reference to an exercise inside a routine or workout.
///
/// The API populates the reference on reads and expects a bare id on writes,
/// so both shapes are accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ExerciseRef {
    Populated(Exercise),
    Id(String),
}

impl ExerciseRef {
    /// Identifier of the referenced exercise.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            Self::Populated(exercise) => &exercise.id,
            Self::Id(id) => id,
        }
    }

    /// Name to show in lists; unpopulated references fall back to the id.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Populated(exercise) => &exercise.name,
            Self::Id(id) => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_ref_populated() {
        let reference: ExerciseRef = serde_json::from_str(
            r#"{"_id":"e1","name":"Squat","muscleGroup":"legs","equipment":"barbell"}"#,
        )
        .unwrap();
        assert_eq!(reference.id(), "e1");
        assert_eq!(reference.display_name(), "Squat");
        match reference {
            ExerciseRef::Populated(exercise) => assert_eq!(exercise.muscle_group, "legs"),
            ExerciseRef::Id(_) => panic!("expected populated exercise"),
        }
    }

    #[test]
    fn test_exercise_ref_bare_id() {
        let reference: ExerciseRef = serde_json::from_str(r#""e42""#).unwrap();
        assert_eq!(reference, ExerciseRef::Id("e42".to_string()));
        assert_eq!(reference.display_name(), "e42");
    }
}
