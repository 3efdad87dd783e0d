//! Start-workout selection and the log-workout form.
//!
//! The routine chosen on the start screen travels to the log screen as a
//! [`WorkoutHandoff`] in navigation state. It is never persisted: reloading
//! the log screen loses it and the screen reports that no routine was
//! selected.

use tracing::debug;

use crate::{
    api::{ClientError, FitzClient},
    models::{CreateWorkoutRequest, ExerciseRef, LoggedExercise, Routine, SetPerformance},
    validation::{
        Field, FieldErrors, ValidationError, parse_in_range, parse_optional, parse_positive_int,
    },
};

/// Feeling rating preselected on a fresh log.
pub const DEFAULT_FEELING_RATING: u8 = 3;
/// Inclusive bounds of the feeling rating.
pub const FEELING_RANGE: (u32, u32) = (1, 5);

/// Navigation state passed from the start screen to the log screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutHandoff {
    pub routine_id: String,
}

/// Routine picker state on the start-workout screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StartWorkoutSelection {
    routine_id: Option<String>,
}

impl StartWorkoutSelection {
    /// Select a routine; an empty id clears the selection.
    pub fn select(&mut self, routine_id: impl Into<String>) {
        let routine_id = routine_id.into();
        self.routine_id = (!routine_id.trim().is_empty()).then_some(routine_id);
    }

    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.routine_id.as_deref()
    }

    /// Build the hand-off for the log screen.
    ///
    /// # Errors
    /// [`ClientError::RoutineNotChosen`] when nothing is selected.
    pub fn handoff(&self) -> Result<WorkoutHandoff, ClientError> {
        self.routine_id
            .clone()
            .map(|routine_id| WorkoutHandoff { routine_id })
            .ok_or(ClientError::RoutineNotChosen)
    }
}

/// Raw input for one planned set. Blank inputs mean "not recorded".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SetEntry {
    pub weight: String,
    pub reps: String,
    pub duration: String,
    pub rest_after: String,
}

/// Column of a [`SetEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetField {
    Weight,
    Reps,
    Duration,
    RestAfter,
}

impl SetEntry {
    pub fn set(&mut self, field: SetField, value: String) {
        match field {
            SetField::Weight => self.weight = value,
            SetField::Reps => self.reps = value,
            SetField::Duration => self.duration = value,
            SetField::RestAfter => self.rest_after = value,
        }
    }

    fn parse(&self) -> Result<SetPerformance, ValidationError> {
        let weight: Option<f64> = parse_optional(&self.weight)?;
        if weight.is_some_and(|weight| !weight.is_finite()) {
            return Err(ValidationError::NotANumber);
        }
        Ok(SetPerformance {
            weight,
            reps: parse_optional(&self.reps)?,
            duration: parse_optional(&self.duration)?,
            rest_after: parse_optional(&self.rest_after)?,
        })
    }
}

/// Planned sets for one exercise of the routine being logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseLogEntry {
    pub exercise_id: String,
    pub exercise_name: String,
    pub sets: Vec<SetEntry>,
}

/// The log-workout form, seeded from a routine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub routine_id: String,
    pub routine_name: String,
    pub exercises: Vec<ExerciseLogEntry>,
    /// Overall duration in minutes.
    pub duration: String,
    pub notes: String,
    pub feeling_rating: String,
}

impl WorkoutDraft {
    /// One empty [`SetEntry`] per planned set of every routine exercise.
    #[must_use]
    pub fn from_routine(routine: &Routine) -> Self {
        let exercises = routine
            .exercises
            .iter()
            .map(|planned| ExerciseLogEntry {
                exercise_id: planned.exercise.id().to_string(),
                exercise_name: planned.exercise.display_name().to_string(),
                sets: vec![SetEntry::default(); planned.sets as usize],
            })
            .collect();

        Self {
            routine_id: routine.id.clone(),
            routine_name: routine.name.clone(),
            exercises,
            duration: String::new(),
            notes: String::new(),
            feeling_rating: DEFAULT_FEELING_RATING.to_string(),
        }
    }

    /// Update one cell; out of range positions are ignored.
    pub fn set_field(&mut self, exercise: usize, set: usize, field: SetField, value: String) {
        if let Some(entry) = self
            .exercises
            .get_mut(exercise)
            .and_then(|exercise| exercise.sets.get_mut(set))
        {
            entry.set(field, value);
        }
    }

    /// Parse the draft into the workout payload.
    ///
    /// # Errors
    /// Returns every failing field; sets are reported as [`Field::Set`].
    pub fn to_request(&self, user_id: Option<&str>) -> Result<CreateWorkoutRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let duration = errors.check(Field::Duration, parse_positive_int(&self.duration));
        let feeling_rating = errors.check(
            Field::FeelingRating,
            parse_in_range(&self.feeling_rating, FEELING_RANGE).and_then(|rating| {
                u8::try_from(rating)
                    .map_err(|_| ValidationError::OutOfRange(FEELING_RANGE.0, FEELING_RANGE.1))
            }),
        );

        let mut exercises = Vec::with_capacity(self.exercises.len());
        for (exercise_index, exercise) in self.exercises.iter().enumerate() {
            let sets = exercise
                .sets
                .iter()
                .enumerate()
                .filter_map(|(set_index, entry)| {
                    errors.check(
                        Field::Set {
                            exercise: exercise_index,
                            set: set_index,
                        },
                        entry.parse(),
                    )
                })
                .collect();
            exercises.push(LoggedExercise {
                exercise: ExerciseRef::Id(exercise.exercise_id.clone()),
                sets,
            });
        }

        match (duration, feeling_rating) {
            (Some(duration), Some(feeling_rating)) if errors.is_empty() => Ok(CreateWorkoutRequest {
                user: user_id.map(str::to_string),
                routine: self.routine_id.clone(),
                duration,
                exercises,
                notes: self.notes.trim().to_string(),
                feeling_rating,
            }),
            _ => Err(errors),
        }
    }
}

/// Load the routine named by the hand-off and seed a log form from it.
///
/// Without a hand-off this fails immediately, before any request is made.
///
/// # Errors
/// [`ClientError::NoRoutineSelected`] without a hand-off, otherwise whatever
/// fetching the routine fails with.
pub async fn prepare_workout_log(
    client: &FitzClient,
    handoff: Option<&WorkoutHandoff>,
) -> Result<WorkoutDraft, ClientError> {
    let handoff = handoff.ok_or(ClientError::NoRoutineSelected)?;
    debug!(routine_id = %handoff.routine_id, "preparing workout log");
    let routine = client.routine(&handoff.routine_id).await?;
    Ok(WorkoutDraft::from_routine(&routine))
}
