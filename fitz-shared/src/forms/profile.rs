use crate::{
    models::User,
    validation::{Field, FieldErrors, ValidationError, parse_choice, parse_optional},
};

/// Settings form, pre-populated from the cached user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub username: String,
    pub email: String,
    pub age: String,
    pub gender: String,
    pub height: String,
    pub weight: String,
    pub weight_goal: String,
    pub main_goal: String,
    pub fitness_level: String,
    pub preferred_workout_split: String,
}

fn text<T: ToString>(value: Option<T>) -> String {
    value.map(|value| value.to_string()).unwrap_or_default()
}

fn optional_choice<T: std::str::FromStr>(value: &str) -> Result<Option<T>, ValidationError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_choice(value).map(Some)
}

fn optional_positive(value: &str) -> Result<Option<f64>, ValidationError> {
    match parse_optional::<f64>(value)? {
        Some(number) if !number.is_finite() => Err(ValidationError::NotANumber),
        Some(number) if number <= 0.0 => Err(ValidationError::NotPositive),
        other => Ok(other),
    }
}

fn optional_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

impl ProfileForm {
    #[must_use]
    pub fn from_user(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            email: user.email.clone(),
            age: text(user.age),
            gender: text(user.gender.map(|gender| gender.as_str())),
            height: text(user.height),
            weight: text(user.weight),
            weight_goal: text(user.weight_goal),
            main_goal: text(user.main_goal.as_ref()),
            fitness_level: text(user.fitness_level.map(|level| level.as_str())),
            preferred_workout_split: text(user.preferred_workout_split.as_ref()),
        }
    }

    /// Current input backing `field`.
    #[must_use]
    pub fn field(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Username => &self.username,
            Field::Email => &self.email,
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

    pub fn field_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Username => Some(&mut self.username),
            Field::Email => Some(&mut self.email),
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

    /// Apply the edits on top of `user`, keeping fields the form does not
    /// cover (such as the id). Blank optional inputs clear the value.
    ///
    /// # Errors
    /// Field errors for a blank username or malformed numbers and choices.
    pub fn apply(&self, user: &User) -> Result<User, FieldErrors> {
        let mut errors = FieldErrors::new();

        let username = self.username.trim();
        if username.is_empty() {
            errors.insert(Field::Username, ValidationError::Required);
        }
        let age = errors.check(Field::Age, parse_optional::<u32>(&self.age));
        let gender = errors.check(Field::Gender, optional_choice(&self.gender));
        let height = errors.check(Field::Height, optional_positive(&self.height));
        let weight = errors.check(Field::Weight, optional_positive(&self.weight));
        let weight_goal = errors.check(Field::WeightGoal, optional_positive(&self.weight_goal));
        let fitness_level = errors.check(Field::FitnessLevel, optional_choice(&self.fitness_level));

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(User {
            id: user.id.clone(),
            username: username.to_string(),
            email: self.email.trim().to_string(),
            age: age.flatten(),
            gender: gender.flatten(),
            height: height.flatten(),
            weight: weight.flatten(),
            weight_goal: weight_goal.flatten(),
            main_goal: optional_text(&self.main_goal),
            fitness_level: fitness_level.flatten(),
            preferred_workout_split: optional_text(&self.preferred_workout_split),
        })
    }
}
