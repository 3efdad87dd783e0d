//! Wire models exchanged with the remote fitness API.
//!
//! Field names follow the API's JSON (camelCase keys and `_id` identifiers);
//! anything the server may leave out deserialises with a default.

pub mod auth;
pub mod errors;
pub mod exercise;
pub mod pagination;
pub mod progress;
pub mod routine;
pub mod user;
pub mod workout;

pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use errors::ErrorResponse;
pub use exercise::{Exercise, ExerciseRef};
pub use pagination::{ExerciseListResponse, Page, RoutineListResponse, WorkoutListResponse};
pub use progress::{Dashboard, MuscleGroupInsight, MuscleInsights, VolumeSummary};
pub use routine::{CreateRoutineRequest, Difficulty, NewRoutineExercise, Routine, RoutineExercise, RoutineRef};
pub use user::{FitnessLevel, Gender, User};
pub use workout::{CreateWorkoutRequest, LoggedExercise, SetPerformance, WorkoutLog};
