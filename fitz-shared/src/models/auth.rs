use serde::{Deserialize, Serialize};

use super::{FitnessLevel, Gender, User};

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Full profile posted to `/auth/register`.
///
/// Built from a validated [`crate::forms::register::RegisterForm`], never by hand
/// from raw input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: u32,
    pub gender: Gender,
    pub height: f64,
    pub weight: f64,
    pub weight_goal: f64,
    pub main_goal: String,
    pub fitness_level: FitnessLevel,
    pub preferred_workout_split: String,
}

/// Successful login or registration.
///
/// Some deployments only return the token; the session store then fetches the
/// profile separately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthResponse {
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_with_user() {
        let response: AuthResponse =
            serde_json::from_str(r#"{"token":"t1","user":{"username":"a"}}"#).unwrap();
        assert_eq!(response.token, "t1");
        assert_eq!(response.user.map(|u| u.username).as_deref(), Some("a"));
    }

    #[test]
    fn test_auth_response_token_only() {
        let response: AuthResponse = serde_json::from_str(r#"{"token":"t2"}"#).unwrap();
        assert!(response.user.is_none());
    }

    #[test]
    fn test_register_request_wire_names() {
        let request = RegisterRequest {
            username: "lifter".to_string(),
            email: "lifter@example.com".to_string(),
            password: "password123".to_string(),
            age: 30,
            gender: Gender::Other,
            height: 180.0,
            weight: 80.0,
            weight_goal: 75.0,
            main_goal: "endurance".to_string(),
            fitness_level: FitnessLevel::Beginner,
            preferred_workout_split: "full body".to_string(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["weightGoal"], 75.0);
        assert_eq!(value["fitnessLevel"], "beginner");
        assert_eq!(value["preferredWorkoutSplit"], "full body");
        assert_eq!(value["gender"], "other");
    }
}
