use serde::{Deserialize, Serialize};

use super::{Exercise, Routine, WorkoutLog};

/// One page of a collection endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_pages: 1,
        }
    }
}

fn one() -> u32 {
    1
}

/// Envelope returned by `GET /exercises`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseListResponse {
    #[serde(default)]
    pub exercises: Vec<Exercise>,
    #[serde(default = "one")]
    pub total_pages: u32,
}

/// Envelope returned by `GET /routines`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoutineListResponse {
    #[serde(default)]
    pub routines: Vec<Routine>,
    #[serde(default = "one")]
    pub total_pages: u32,
}

/// Envelope returned by `GET /workouts`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutListResponse {
    #[serde(default)]
    pub workouts: Vec<WorkoutLog>,
    #[serde(default = "one")]
    pub total_pages: u32,
}

impl From<ExerciseListResponse> for Page<Exercise> {
    fn from(response: ExerciseListResponse) -> Self {
        Self {
            items: response.exercises,
            total_pages: response.total_pages,
        }
    }
}

impl From<RoutineListResponse> for Page<Routine> {
    fn from(response: RoutineListResponse) -> Self {
        Self {
            items: response.routines,
            total_pages: response.total_pages,
        }
    }
}

impl From<WorkoutListResponse> for Page<WorkoutLog> {
    fn from(response: WorkoutListResponse) -> Self {
        Self {
            items: response.workouts,
            total_pages: response.total_pages,
        }
    }
}
