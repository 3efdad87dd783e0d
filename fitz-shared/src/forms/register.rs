use crate::{
    models::RegisterRequest,
    validation::{
        AGE_RANGE, Field, FieldErrors, MAX_TEXT_LENGTH, parse_choice, parse_in_range,
        parse_positive, validate_email, validate_password, validate_text, validate_username,
    },
};

/// Registration form input, one string per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegisterForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub weight_goal: String,
    pub main_goal: String,
    pub fitness_level: String,
    pub preferred_workout_split: String,
}

impl RegisterForm {
    /// Every field on the form, in display order.
    pub const FIELDS: [Field; 11] = [
        Field::Username,
        Field::Email,
        Field::Password,
        Field::Age,
        Field::Gender,
        Field::Height,
        Field::Weight,
        Field::WeightGoal,
        Field::MainGoal,
        Field::FitnessLevel,
        Field::PreferredWorkoutSplit,
    ];

    /// Current input backing `field`.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::Age => &self.age,
            Field::Gender => &self.gender,
            Field::Height => &self.height,
            Field::Weight => &self.weight,
            Field::WeightGoal => &self.weight_goal,
            Field::MainGoal => &self.main_goal,
            Field::FitnessLevel => &self.fitness_level,
            Field::PreferredWorkoutSplit => &self.preferred_workout_split,
            _ => return None,
        };
        Some(value)
    }

    /// Mutable access to the input backing `field`, for change handlers.
    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Username => Some(&mut self.username),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::Age => Some(&mut self.age),
            Field::Gender => Some(&mut self.gender),
            Field::Height => Some(&mut self.height),
            Field::Weight => Some(&mut self.weight),
            Field::WeightGoal => Some(&mut self.weight_goal),
            Field::MainGoal => Some(&mut self.main_goal),
            Field::FitnessLevel => Some(&mut self.fitness_level),
            Field::PreferredWorkoutSplit => Some(&mut self.preferred_workout_split),
            _ => None,
        }
    }

    /// Check every field against the registration schema.
    ///
    /// # Errors
    /// Returns every failing field at once.
    pub fn validate(&self) -> Result<RegisterRequest, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = errors.check(Field::Username, validate_username(&self.username));
        let email = errors.check(Field::Email, validate_email(&self.email));
        let password = errors.check(Field::Password, validate_password(&self.password));
        let age = errors.check(Field::Age, parse_in_range(&self.age, AGE_RANGE));
        let gender = errors.check(Field::Gender, parse_choice(&self.gender));
        let height = errors.check(Field::Height, parse_positive(&self.height));
        let weight = errors.check(Field::Weight, parse_positive(&self.weight));
        let weight_goal = errors.check(Field::WeightGoal, parse_positive(&self.weight_goal));
        let main_goal = errors.check(Field::MainGoal, validate_text(&self.main_goal, MAX_TEXT_LENGTH));
        let fitness_level = errors.check(Field::FitnessLevel, parse_choice(&self.fitness_level));
        let preferred_workout_split = errors.check(
            Field::PreferredWorkoutSplit,
            validate_text(&self.preferred_workout_split, MAX_TEXT_LENGTH),
        );

        match (
            username,
            email,
            password,
            age,
            gender,
            height,
            weight,
            weight_goal,
            main_goal,
            fitness_level,
            preferred_workout_split,
        ) {
            (
                Some(username),
                Some(email),
                Some(password),
                Some(age),
                Some(gender),
                Some(height),
                Some(weight),
                Some(weight_goal),
                Some(main_goal),
                Some(fitness_level),
                Some(preferred_workout_split),
            ) => Ok(RegisterRequest {
                username,
                email,
                password,
                age,
                gender,
                height,
                weight,
                weight_goal,
                main_goal,
                fitness_level,
                preferred_workout_split,
            }),
            _ => Err(errors),
        }
    }
}
