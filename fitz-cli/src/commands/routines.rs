use anyhow::{Context as _, Result, bail};
use clap::{Args, Subcommand};
use shared::{
    forms::{ExerciseEntryRow, RoutineDraft},
    validation::FieldErrors,
};

use super::Context;

#[derive(Subcommand, Debug)]
pub enum RoutineCommand {
    /// List routines, one page at a time
    List {
        #[arg(
            long,
            short,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        page: u32,
    },
    /// Show one routine with its exercises
    Show {
        /// Routine identifier
        id: String,
    },
    /// Create a routine
    Add(AddRoutineArgs),
}

#[derive(Args, Debug)]
pub struct AddRoutineArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub description: String,
    /// Beginner, Intermediate or Advanced
    #[arg(long)]
    pub difficulty: String,
    /// Estimated duration in minutes
    #[arg(long)]
    pub duration: String,
    #[arg(long)]
    pub workout_type: String,
    /// Comma separated, e.g. "chest, back"
    #[arg(long, default_value = "")]
    pub muscle_groups: String,
    /// Comma separated
    #[arg(long, default_value = "")]
    pub equipment: String,
    /// Comma separated
    #[arg(long, default_value = "")]
    pub tags: String,
    #[arg(long)]
    pub public: bool,
    /// Exercise row as ID:SETS:REPS:REST; repeat for each exercise
    #[arg(long = "exercise", value_parser = parse_exercise_row)]
    pub exercises: Vec<ExerciseEntryRow>,
}

/// Parse `ID:SETS:REPS:REST`; REST may be omitted. Numbers are checked
/// later with the rest of the form.
pub fn parse_exercise_row(value: &str) -> Result<ExerciseEntryRow, String> {
    let parts: Vec<&str> = value.split(':').map(str::trim).collect();
    let (exercise_id, sets, reps, rest) = match parts.as_slice() {
        [id, sets, reps] => (*id, *sets, *reps, "0"),
        [id, sets, reps, rest] => (*id, *sets, *reps, *rest),
        _ => return Err(format!("expected ID:SETS:REPS:REST, got `{value}`")),
    };
    if exercise_id.is_empty() {
        return Err("exercise id must not be empty".to_string());
    }
    Ok(ExerciseEntryRow {
        exercise_id: exercise_id.to_string(),
        sets: sets.to_string(),
        reps: reps.to_string(),
        rest_between_sets: rest.to_string(),
    })
}

pub async fn run(context: &Context, command: RoutineCommand) -> Result<()> {
    match command {
        RoutineCommand::List { page } => list(context, page).await,
        RoutineCommand::Show { id } => show(context, &id).await,
        RoutineCommand::Add(args) => add(context, args).await,
    }
}

async fn list(context: &Context, page: u32) -> Result<()> {
    let routines = context
        .authenticated_client()?
        .routines(page)
        .await
        .context("failed to list routines")?;

    if routines.items.is_empty() {
        println!("No routines found.");
    }
    for routine in &routines.items {
        println!(
            "{:<26} {:<32} {:<13} {} exercises",
            routine.id,
            routine.name,
            routine.difficulty,
            routine.exercises.len()
        );
    }
    println!("Page {page} of {}", routines.total_pages.max(1));
    Ok(())
}

async fn show(context: &Context, id: &str) -> Result<()> {
    let routine = context
        .authenticated_client()?
        .routine(id)
        .await
        .context("failed to fetch routine")?;

    println!("{} ({})", routine.name, routine.id);
    if !routine.description.is_empty() {
        println!("{}", routine.description);
    }
    println!("difficulty: {}", routine.difficulty);
    if let Some(minutes) = routine.estimated_duration {
        println!("duration: {minutes} min");
    }
    if !routine.target_muscle_groups.is_empty() {
        println!("muscle groups: {}", routine.target_muscle_groups.join(", "));
    }
    if !routine.equipment.is_empty() {
        println!("equipment: {}", routine.equipment.join(", "));
    }
    println!();
    for entry in &routine.exercises {
        println!(
            "  {:<32} {} x {}  rest {}s",
            entry.exercise.display_name(),
            entry.sets,
            entry.reps,
            entry.rest_between_sets
        );
    }
    println!("{} planned sets", routine.planned_set_count());
    Ok(())
}

async fn add(context: &Context, args: AddRoutineArgs) -> Result<()> {
    let draft = RoutineDraft {
        name: args.name,
        description: args.description,
        difficulty: args.difficulty,
        estimated_duration: args.duration,
        target_muscle_groups: args.muscle_groups,
        workout_type: args.workout_type,
        equipment: args.equipment,
        tags: args.tags,
        is_public: args.public,
        exercises: args.exercises,
    };
    let request = match draft.to_request() {
        Ok(request) => request,
        Err(errors) => return invalid(&errors),
    };

    let routine = context
        .authenticated_client()?
        .create_routine(&request)
        .await
        .context("failed to create routine")?;
    println!("Created routine {} ({})", routine.name, routine.id);
    Ok(())
}

fn invalid(errors: &FieldErrors) -> Result<()> {
    for (field, error) in errors.iter() {
        eprintln!("{field} {error}");
    }
    bail!("routine is invalid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_exercise_row() {
        let row = parse_exercise_row("ex1:3:10:90").unwrap();
        assert_eq!(row.exercise_id, "ex1");
        assert_eq!(row.sets, "3");
        assert_eq!(row.reps, "10");
        assert_eq!(row.rest_between_sets, "90");
    }

    #[test]
    fn test_parse_exercise_row_without_rest() {
        let row = parse_exercise_row("ex1:4:8").unwrap();
        assert_eq!(row.rest_between_sets, "0");
    }

    #[test]
    fn test_parse_exercise_row_rejects_malformed() {
        assert!(parse_exercise_row("ex1").is_err());
        assert!(parse_exercise_row(":3:10:90").is_err());
        assert!(parse_exercise_row("a:1:2:3:4").is_err());
    }
}
