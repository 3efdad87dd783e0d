//! Form drafts for every screen that submits data.
//!
//! A draft holds raw input exactly as typed so the screen can re-render it
//! unchanged after a failed submission; converting a draft into a request
//! payload is where validation happens.

pub mod profile;
pub mod register;
pub mod routine;
pub mod workout;

pub use profile::ProfileForm;
pub use register::RegisterForm;
pub use routine::{ExerciseEntryRow, RoutineDraft, RowField, split_list};
pub use workout::{
    DEFAULT_FEELING_RATING, ExerciseLogEntry, SetEntry, SetField, StartWorkoutSelection,
    WorkoutDraft, WorkoutHandoff, prepare_workout_log,
};
