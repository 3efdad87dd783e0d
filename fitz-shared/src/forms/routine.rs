use crate::{
    models::{CreateRoutineRequest, Difficulty, NewRoutineExercise},
    validation::{
        Field, FieldErrors, MAX_TEXT_LENGTH, ValidationError, parse_choice, parse_positive_int,
        parse_whole, validate_text,
    },
};

/// Split a comma separated input into trimmed, non-empty items.
///
/// ```
/// use shared::forms::split_list;
/// assert_eq!(split_list("chest, back,,legs "), vec!["chest", "back", "legs"]);
/// ```
#[must_use]
pub fn split_list(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// One planned exercise row on the add-routine form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseEntryRow {
    pub exercise_id: String,
    pub sets: String,
    pub reps: String,
    pub rest_between_sets: String,
}

/// Input of a single [`ExerciseEntryRow`] cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowField {
    Exercise,
    Sets,
    Reps,
    RestBetweenSets,
}

impl ExerciseEntryRow {
    pub fn set(&mut self, field: RowField, value: String) {
        match field {
            RowField::Exercise => self.exercise_id = value,
            RowField::Sets => self.sets = value,
            RowField::Reps => self.reps = value,
            RowField::RestBetweenSets => self.rest_between_sets = value,
        }
    }

    fn parse(&self) -> Result<NewRoutineExercise, ValidationError> {
        let exercise = self.exercise_id.trim();
        if exercise.is_empty() {
            return Err(ValidationError::Required);
        }
        Ok(NewRoutineExercise {
            exercise: exercise.to_string(),
            sets: parse_positive_int(&self.sets)?,
            reps: parse_positive_int(&self.reps)?,
            rest_between_sets: parse_whole(&self.rest_between_sets)?,
        })
    }
}

/// The add-routine form as entered.
///
/// List inputs (`target_muscle_groups`, `equipment`, `tags`) keep the raw
/// comma separated text; they are split with [`split_list`] on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoutineDraft {
    pub name: String,
    pub description: String,
    pub difficulty: String,
    pub estimated_duration: String,
    pub target_muscle_groups: String,
    pub workout_type: String,
    pub equipment: String,
    pub tags: String,
    pub is_public: bool,
    pub exercises: Vec<ExerciseEntryRow>,
}

impl RoutineDraft {
    /// Current input backing a free-text `field`.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Name => &self.name,
            Field::Description => &self.description,
            Field::Difficulty => &self.difficulty,
            Field::EstimatedDuration => &self.estimated_duration,
            Field::TargetMuscleGroups => &self.target_muscle_groups,
            Field::WorkoutType => &self.workout_type,
            Field::Equipment => &self.equipment,
            Field::Tags => &self.tags,
            _ => return None,
        };
        Some(value)
    }

    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Name => Some(&mut self.name),
            Field::Description => Some(&mut self.description),
            Field::Difficulty => Some(&mut self.difficulty),
            Field::EstimatedDuration => Some(&mut self.estimated_duration),
            Field::TargetMuscleGroups => Some(&mut self.target_muscle_groups),
            Field::WorkoutType => Some(&mut self.workout_type),
            Field::Equipment => Some(&mut self.equipment),
            Field::Tags => Some(&mut self.tags),
            _ => None,
        }
    }

    /// Append an empty exercise row.
    pub fn add_exercise(&mut self) {
        self.exercises.push(ExerciseEntryRow::default());
    }

    /// Remove the row at `index`; out of range indexes are ignored.
    pub fn remove_exercise(&mut self, index: usize) {
        if index < self.exercises.len() {
            self.exercises.remove(index);
        }
    }

    pub fn update_exercise(&mut self, index: usize, field: RowField, value: String) {
        if let Some(row) = self.exercises.get_mut(index) {
            row.set(field, value);
        }
    }

    /// Parse the draft into a creation request.
    ///
    /// # Errors
    /// Returns every failing field; rows are reported as
    /// [`Field::ExerciseRow`] with their position.
    pub fn to_request(&self) -> Result<CreateRoutineRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = errors.check(Field::Name, validate_text(&self.name, MAX_TEXT_LENGTH));
        let description = errors.check(
            Field::Description,
            validate_text(&self.description, usize::MAX),
        );
        let difficulty: Option<Difficulty> =
            errors.check(Field::Difficulty, parse_choice(&self.difficulty));
        let estimated_duration = errors.check(
            Field::EstimatedDuration,
            parse_positive_int(&self.estimated_duration),
        );
        let workout_type = errors.check(
            Field::WorkoutType,
            validate_text(&self.workout_type, MAX_TEXT_LENGTH),
        );

        if self.exercises.is_empty() {
            errors.insert(Field::Exercises, ValidationError::Required);
        }
        let exercises: Vec<NewRoutineExercise> = self
            .exercises
            .iter()
            .enumerate()
            .filter_map(|(index, row)| errors.check(Field::ExerciseRow(index), row.parse()))
            .collect();

        match (name, description, difficulty, estimated_duration, workout_type) {
            (Some(name), Some(description), Some(difficulty), Some(estimated_duration), Some(workout_type))
                if errors.is_empty() =>
            {
                Ok(CreateRoutineRequest {
                    name,
                    description,
                    exercises,
                    difficulty,
                    estimated_duration,
                    target_muscle_groups: split_list(&self.target_muscle_groups),
                    workout_type,
                    equipment: split_list(&self.equipment),
                    tags: split_list(&self.tags),
                    is_public: self.is_public,
                })
            }
            _ => Err(errors),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(exercise: &str, sets: &str, reps: &str, rest: &str) -> ExerciseEntryRow {
        ExerciseEntryRow {
            exercise_id: exercise.to_string(),
            sets: sets.to_string(),
            reps: reps.to_string(),
            rest_between_sets: rest.to_string(),
        }
    }

    fn draft() -> RoutineDraft {
        RoutineDraft {
            name: "Push day".to_string(),
            description: "Chest, shoulders and triceps".to_string(),
            difficulty: "intermediate".to_string(),
            estimated_duration: "45".to_string(),
            target_muscle_groups: "chest, shoulders , triceps".to_string(),
            workout_type: "Strength".to_string(),
            equipment: "barbell,,dumbbells".to_string(),
            tags: String::new(),
            is_public: true,
            exercises: vec![row("ex1", "3", "10", "90"), row("ex2", "4", "8", "0")],
        }
    }

    #[test]
    fn test_split_list() {
        assert_eq!(split_list("chest, back, legs"), vec!["chest", "back", "legs"]);
        assert_eq!(split_list(" a ,, b ,"), vec!["a", "b"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_field_accessors() {
        let mut draft = draft();
        if let Some(tags) = draft.field_mut(Field::Tags) {
            tags.push_str("push, gym");
        }
        assert_eq!(draft.field(Field::Tags), Some("push, gym"));
        assert_eq!(draft.field(Field::Name), Some("Push day"));
        assert!(draft.field(Field::Exercises).is_none());
        assert!(draft.field_mut(Field::Username).is_none());
    }

    #[test]
    fn test_to_request() {
        let request = draft().to_request().unwrap();
        assert_eq!(request.name, "Push day");
        assert_eq!(request.difficulty, Difficulty::Intermediate);
        assert_eq!(request.estimated_duration, 45);
        assert_eq!(request.target_muscle_groups, vec!["chest", "shoulders", "triceps"]);
        assert_eq!(request.equipment, vec!["barbell", "dumbbells"]);
        assert!(request.tags.is_empty());
        assert!(request.is_public);
        assert_eq!(request.exercises.len(), 2);
        assert_eq!(request.exercises[1].rest_between_sets, 0);
        assert_eq!(request.exercises[0].exercise, "ex1");
    }

    #[test]
    fn test_rows_are_reported_by_position() {
        let mut routine = draft();
        routine.exercises.push(row("", "3", "10", "60"));
        routine.exercises.push(row("ex3", "0", "10", "60"));
        routine.exercises.push(row("ex4", "3", "10", "-5"));

        let errors = routine.to_request().unwrap_err();
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::ExerciseRow(2)), Some(&ValidationError::Required));
        assert_eq!(errors.get(Field::ExerciseRow(3)), Some(&ValidationError::NotPositive));
        assert_eq!(errors.get(Field::ExerciseRow(4)), Some(&ValidationError::Negative));
    }

    #[test]
    fn test_requires_at_least_one_exercise() {
        let routine = RoutineDraft {
            exercises: Vec::new(),
            ..draft()
        };
        let errors = routine.to_request().unwrap_err();
        assert_eq!(errors.get(Field::Exercises), Some(&ValidationError::Required));
    }

    #[test]
    fn test_required_fields() {
        let errors = RoutineDraft::default().to_request().unwrap_err();
        for field in [
            Field::Name,
            Field::Description,
            Field::Difficulty,
            Field::EstimatedDuration,
            Field::WorkoutType,
            Field::Exercises,
        ] {
            assert_eq!(errors.get(field), Some(&ValidationError::Required), "{field}");
        }
    }

    #[test]
    fn test_rows_are_independently_editable() {
        let mut routine = RoutineDraft::default();
        routine.add_exercise();
        routine.add_exercise();
        routine.update_exercise(1, RowField::Exercise, "ex9".to_string());
        routine.update_exercise(7, RowField::Sets, "3".to_string());
        routine.remove_exercise(0);
        routine.remove_exercise(5);

        assert_eq!(routine.exercises.len(), 1);
        assert_eq!(routine.exercises[0].exercise_id, "ex9");
    }
}
