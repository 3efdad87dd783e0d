//! Client-side form schema.
//!
//! Every form in the application is validated here before anything is sent,
//! so validation failures never cost a network round trip. Errors are
//! collected per field rather than stopping at the first one.

use std::{collections::BTreeMap, fmt, str::FromStr};

/// Username length bounds, in characters, after trimming.
pub const USERNAME_LENGTH: (usize, usize) = (3, 30);
/// Password length bounds, in characters.
pub const PASSWORD_LENGTH: (usize, usize) = (8, 128);
/// Upper bound for free-text profile fields.
pub const MAX_TEXT_LENGTH: usize = 100;
/// Accepted age range, in years.
pub const AGE_RANGE: (u32, u32) = (1, 120);

/// Why a single field was rejected.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum ValidationError {
    /// Field is required but empty
    Required,
    /// Shorter than the minimum number of characters
    TooShort(usize),
    /// Longer than the maximum number of characters
    TooLong(usize),
    /// Email address is malformed
    InvalidEmail,
    /// Not parseable as a number
    NotANumber,
    /// Must be greater than zero
    NotPositive,
    /// Must be zero or more
    Negative,
    /// Outside an inclusive numeric range
    OutOfRange(u32, u32),
    /// Not one of the enumerated choices
    UnknownOption,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Required => f.write_str("is required"),
            Self::TooShort(min) => write!(f, "must be at least {min} characters"),
            Self::TooLong(max) => write!(f, "must be at most {max} characters"),
            Self::InvalidEmail => f.write_str("must be a valid email address"),
            Self::NotANumber => f.write_str("must be a number"),
            Self::NotPositive => f.write_str("must be greater than zero"),
            Self::Negative => f.write_str("must not be negative"),
            Self::OutOfRange(min, max) => write!(f, "must be between {min} and {max}"),
            Self::UnknownOption => f.write_str("must be one of the listed options"),
        }
    }
}

/// Form field a [`ValidationError`] is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Username,
    Email,
    Password,
    Age,
    Gender,
    Height,
    Weight,
    WeightGoal,
    MainGoal,
    FitnessLevel,
    PreferredWorkoutSplit,
    Name,
    Description,
    Difficulty,
    EstimatedDuration,
    WorkoutType,
    TargetMuscleGroups,
    Equipment,
    Tags,
    Exercises,
    ExerciseRow(usize),
    Duration,
    FeelingRating,
    Set { exercise: usize, set: usize },
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Username => f.write_str("Username"),
            Self::Email => f.write_str("Email"),
            Self::Password => f.write_str("Password"),
            Self::Age => f.write_str("Age"),
            Self::Gender => f.write_str("Gender"),
            Self::Height => f.write_str("Height"),
            Self::Weight => f.write_str("Weight"),
            Self::WeightGoal => f.write_str("Weight goal"),
            Self::MainGoal => f.write_str("Main goal"),
            Self::FitnessLevel => f.write_str("Fitness level"),
            Self::PreferredWorkoutSplit => f.write_str("Preferred workout split"),
            Self::Name => f.write_str("Name"),
            Self::Description => f.write_str("Description"),
            Self::Difficulty => f.write_str("Difficulty"),
            Self::EstimatedDuration => f.write_str("Estimated duration"),
            Self::WorkoutType => f.write_str("Workout type"),
            Self::TargetMuscleGroups => f.write_str("Target muscle groups"),
            Self::Equipment => f.write_str("Equipment"),
            Self::Tags => f.write_str("Tags"),
            Self::Exercises => f.write_str("Exercises"),
            Self::ExerciseRow(index) => write!(f, "Exercise {}", index + 1),
            Self::Duration => f.write_str("Duration"),
            Self::FeelingRating => f.write_str("Feeling rating"),
            Self::Set { exercise, set } => write!(f, "Exercise {} set {}", exercise + 1, set + 1),
        }
    }
}

/// Field-scoped validation failures for one form submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, ValidationError>);

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error; the first error per field wins.
    pub fn insert(&mut self, field: Field, error: ValidationError) {
        self.0.entry(field).or_insert(error);
    }

    /// Record the error from `result`, if any, and hand back the value.
    pub fn check<T>(&mut self, field: Field, result: Result<T, ValidationError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(error) => {
                self.insert(field, error);
                None
            }
        }
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Field, &ValidationError)> {
        self.0.iter()
    }

    /// Message for one field, formatted for inline display under its input.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(|error| format!("{field} {error}"))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field} {error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

fn check_length(value: &str, (min, max): (usize, usize)) -> Result<(), ValidationError> {
    let length = value.chars().count();
    if length < min {
        return Err(ValidationError::TooShort(min));
    }
    if length > max {
        return Err(ValidationError::TooLong(max));
    }
    Ok(())
}

/// Validates a username and returns it trimmed.
///
/// # Validation rules
/// - Username must not be empty
/// - Username must be 3 to 30 characters long after trimming
pub fn validate_username(username: &str) -> Result<String, ValidationError> {
    let trimmed = username.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    check_length(trimmed, USERNAME_LENGTH)?;
    Ok(trimmed.to_string())
}

/// Validates an email address and returns it trimmed.
///
/// # Validation rules
/// - Email must not be empty
/// - Email must have a non-empty local part, a single '@', and a non-empty domain
/// - The domain must not start or end with '.'
pub fn validate_email(email: &str) -> Result<String, ValidationError> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let domain_ok = !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || trimmed.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(trimmed.to_string())
}

/// Validates a password. Passwords are never trimmed.
///
/// # Validation rules
/// - Password must not be blank
/// - Password must be 8 to 128 characters long
pub fn validate_password(password: &str) -> Result<String, ValidationError> {
    if password.trim().is_empty() {
        return Err(ValidationError::Required);
    }
    check_length(password, PASSWORD_LENGTH)?;
    Ok(password.to_string())
}

/// Validates a required free-text field and returns it trimmed.
pub fn validate_text(value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.chars().count() > max {
        return Err(ValidationError::TooLong(max));
    }
    Ok(trimmed.to_string())
}

/// Parses a strictly positive decimal, as used for body measurements.
pub fn parse_positive(value: &str) -> Result<f64, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    let number: f64 = trimmed.parse().map_err(|_| ValidationError::NotANumber)?;
    if !number.is_finite() {
        return Err(ValidationError::NotANumber);
    }
    if number <= 0.0 {
        return Err(ValidationError::NotPositive);
    }
    Ok(number)
}

/// Parses a strictly positive whole number.
pub fn parse_positive_int(value: &str) -> Result<u32, ValidationError> {
    let number = parse_whole(value)?;
    if number == 0 {
        return Err(ValidationError::NotPositive);
    }
    Ok(number)
}

/// Parses a whole number that may be zero.
pub fn parse_whole(value: &str) -> Result<u32, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    if trimmed.starts_with('-') {
        return Err(ValidationError::Negative);
    }
    trimmed.parse().map_err(|_| ValidationError::NotANumber)
}

/// Parses a whole number inside an inclusive range.
pub fn parse_in_range(value: &str, (min, max): (u32, u32)) -> Result<u32, ValidationError> {
    let number = parse_whole(value)?;
    if !(min..=max).contains(&number) {
        return Err(ValidationError::OutOfRange(min, max));
    }
    Ok(number)
}

/// Parses one of an enumerated set of options.
pub fn parse_choice<T: FromStr>(value: &str) -> Result<T, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Required);
    }
    trimmed.parse().map_err(|_| ValidationError::UnknownOption)
}

/// Parses an optional numeric input: blank means "not recorded".
pub fn parse_optional<T: FromStr>(value: &str) -> Result<Option<T>, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    if trimmed.starts_with('-') {
        return Err(ValidationError::Negative);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|_| ValidationError::NotANumber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;

    #[test]
    fn test_validate_username() {
        assert_eq!(validate_username("  lifter  ").unwrap(), "lifter");
        assert!(validate_username("abc").is_ok());
        assert_eq!(validate_username("   "), Err(ValidationError::Required));
        assert_eq!(validate_username("ab"), Err(ValidationError::TooShort(3)));
        assert_eq!(
            validate_username(&"a".repeat(31)),
            Err(ValidationError::TooLong(30))
        );
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.com").is_ok());
        assert!(validate_email("first.last+tag@example.co.uk").is_ok());
        assert_eq!(validate_email(" user@host ").as_deref(), Ok("user@host"));
        assert_eq!(validate_email(""), Err(ValidationError::Required));
        for invalid in ["userexample.com", "@example.com", "user@", "a b@c.com", "a@b@c.com", "a@.com", "a@b."] {
            assert_eq!(validate_email(invalid), Err(ValidationError::InvalidEmail), "{invalid}");
        }
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password1").is_ok());
        assert_eq!(validate_password("        "), Err(ValidationError::Required));
        assert_eq!(validate_password("short"), Err(ValidationError::TooShort(8)));
        assert_eq!(
            validate_password(&"x".repeat(129)),
            Err(ValidationError::TooLong(128))
        );
        // Surrounding spaces are part of the password.
        assert_eq!(validate_password(" secret12 ").unwrap(), " secret12 ");
    }

    #[test]
    fn test_numeric_parsers() {
        assert_eq!(parse_positive("72.5"), Ok(72.5));
        assert_eq!(parse_positive("0"), Err(ValidationError::NotPositive));
        assert_eq!(parse_positive("-3"), Err(ValidationError::NotPositive));
        assert_eq!(parse_positive("heavy"), Err(ValidationError::NotANumber));
        assert_eq!(parse_positive("NaN"), Err(ValidationError::NotANumber));
        assert_eq!(parse_positive(""), Err(ValidationError::Required));

        assert_eq!(parse_positive_int("3"), Ok(3));
        assert_eq!(parse_positive_int("0"), Err(ValidationError::NotPositive));
        assert_eq!(parse_whole("0"), Ok(0));
        assert_eq!(parse_whole("-1"), Err(ValidationError::Negative));
        assert_eq!(parse_whole("1.5"), Err(ValidationError::NotANumber));

        assert_eq!(parse_in_range("30", AGE_RANGE), Ok(30));
        assert_eq!(parse_in_range("0", AGE_RANGE), Err(ValidationError::OutOfRange(1, 120)));
        assert_eq!(parse_in_range("121", AGE_RANGE), Err(ValidationError::OutOfRange(1, 120)));
    }

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional::<u32>(""), Ok(None));
        assert_eq!(parse_optional::<u32>(" 12 "), Ok(Some(12)));
        assert_eq!(parse_optional::<f64>("-2"), Err(ValidationError::Negative));
        assert_eq!(parse_optional::<u32>("ten"), Err(ValidationError::NotANumber));
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice::<Gender>("female"), Ok(Gender::Female));
        assert_eq!(parse_choice::<Gender>(""), Err(ValidationError::Required));
        assert_eq!(parse_choice::<Gender>("robot"), Err(ValidationError::UnknownOption));
    }

    #[test]
    fn test_field_errors_collects_first_error_per_field() {
        let mut errors = FieldErrors::new();
        assert!(errors.is_empty());

        assert_eq!(errors.check(Field::Age, parse_in_range("0", AGE_RANGE)), None);
        errors.insert(Field::Age, ValidationError::Required);
        assert_eq!(errors.check(Field::Height, parse_positive("180")), Some(180.0));
        errors.insert(Field::Set { exercise: 0, set: 1 }, ValidationError::NotANumber);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(Field::Age), Some(&ValidationError::OutOfRange(1, 120)));
        assert_eq!(
            errors.message(Field::Age).as_deref(),
            Some("Age must be between 1 and 120")
        );
        assert_eq!(
            errors.to_string(),
            "Age must be between 1 and 120; Exercise 1 set 2 must be a number"
        );
    }
}
