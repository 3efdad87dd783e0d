use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Gender options offered by the registration and settings forms.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    /// Every selectable value, in form order.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Other];

    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    /// Human readable label for select inputs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            "other" => Ok(Self::Other),
            _ => Err("unknown gender"),
        }
    }
}

/// Self-reported training experience.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl FitnessLevel {
    /// Every selectable value, in form order.
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    /// Return the canonical string representation used on the wire.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }

    /// Human readable label for select inputs.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FitnessLevel {
    type Err = &'static str;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err("unknown fitness level"),
        }
    }
}

/// The authenticated user's profile as returned by the API.
///
/// Only `username` is guaranteed; the remaining attributes are optional
/// because login responses may carry a trimmed-down user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Server identifier.
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Display handle.
    pub username: String,

    /// Account email address.
    #[serde(default)]
    pub email: String,

    /// Age in years.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,

    /// Height in centimetres.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Body weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,

    /// Target body weight in kilograms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_goal: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_goal: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<FitnessLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_workout_split: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_from_full_profile() {
        let json = r#"{
            "_id": "64f0c0ffee",
            "username": "lifter",
            "email": "lifter@example.com",
            "age": 31,
            "gender": "female",
            "height": 168.5,
            "weight": 62.0,
            "weightGoal": 60.0,
            "mainGoal": "strength",
            "fitnessLevel": "intermediate",
            "preferredWorkoutSplit": "push/pull/legs"
        }"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id.as_deref(), Some("64f0c0ffee"));
        assert_eq!(user.age, Some(31));
        assert_eq!(user.gender, Some(Gender::Female));
        assert_eq!(user.weight_goal, Some(60.0));
        assert_eq!(user.fitness_level, Some(FitnessLevel::Intermediate));
        assert_eq!(user.preferred_workout_split.as_deref(), Some("push/pull/legs"));
    }

    #[test]
    fn test_user_from_minimal_payload() {
        let user: User = serde_json::from_str(r#"{"username":"a"}"#).unwrap();
        assert_eq!(user.username, "a");
        assert!(user.email.is_empty());
        assert!(user.id.is_none());
        assert!(user.gender.is_none());
    }

    #[test]
    fn test_user_serializes_camel_case_and_skips_missing() {
        let user = User {
            username: "a".to_string(),
            weight_goal: Some(70.0),
            ..User::default()
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains("\"weightGoal\":70.0"));
        assert!(!json.contains("_id"));
        assert!(!json.contains("fitnessLevel"));
    }

    #[test]
    fn gender_and_level_parse() {
        for gender in Gender::ALL {
            assert_eq!(Gender::from_str(gender.as_str()).unwrap(), gender);
        }
        for level in FitnessLevel::ALL {
            assert_eq!(level.to_string(), level.as_str());
            assert_eq!(FitnessLevel::from_str(level.as_str()).unwrap(), level);
        }
        assert!(Gender::from_str("robot").is_err());
        assert!(FitnessLevel::from_str("elite").is_err());
    }
}
