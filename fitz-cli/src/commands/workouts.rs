use anyhow::{Context as _, Result, bail};
use clap::{Args, Subcommand};
use shared::{
    forms::{DEFAULT_FEELING_RATING, SetField, WorkoutDraft, WorkoutHandoff, prepare_workout_log},
    models::WorkoutLog,
};

use super::{Context, prompt};

#[derive(Subcommand, Debug)]
pub enum WorkoutCommand {
    /// List logged workouts, one page at a time
    List {
        #[arg(
            long,
            short,
            default_value_t = 1,
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        page: u32,
    },
    /// Log a workout for a routine, prompting for every planned set
    Log(LogWorkoutArgs),
}

#[derive(Args, Debug)]
pub struct LogWorkoutArgs {
    /// Routine identifier
    #[arg(long)]
    pub routine: String,
    /// Overall duration in minutes
    #[arg(long)]
    pub duration: String,
    #[arg(long, default_value = "")]
    pub notes: String,
    /// How the workout felt, 1 to 5
    #[arg(long, default_value_t = DEFAULT_FEELING_RATING.to_string())]
    pub feeling: String,
}

const SET_PROMPTS: [(SetField, &str); 4] = [
    (SetField::Weight, "weight (kg)"),
    (SetField::Reps, "reps"),
    (SetField::Duration, "duration (s)"),
    (SetField::RestAfter, "rest after (s)"),
];

pub async fn run(context: &Context, command: WorkoutCommand) -> Result<()> {
    match command {
        WorkoutCommand::List { page } => list(context, page).await,
        WorkoutCommand::Log(args) => log(context, args).await,
    }
}

fn summary(workout: &WorkoutLog) -> String {
    let date = workout
        .date
        .map_or_else(|| "-".to_string(), |date| date.format("%Y-%m-%d").to_string());
    let duration = workout
        .duration
        .map_or_else(|| "-".to_string(), |minutes| format!("{minutes} min"));
    format!(
        "{date:<10} {:<32} {duration:>8} {:>10.1} kg",
        workout.routine_name(),
        workout.total_volume()
    )
}

async fn list(context: &Context, page: u32) -> Result<()> {
    let workouts = context
        .authenticated_client()?
        .workouts(page)
        .await
        .context("failed to list workouts")?;

    if workouts.items.is_empty() {
        println!("No workouts logged yet.");
    }
    for workout in &workouts.items {
        println!("{}", summary(workout));
    }
    println!("Page {page} of {}", workouts.total_pages.max(1));
    Ok(())
}

fn fill_sets(draft: &mut WorkoutDraft) -> Result<()> {
    let plan: Vec<(String, usize)> = draft
        .exercises
        .iter()
        .map(|exercise| (exercise.exercise_name.clone(), exercise.sets.len()))
        .collect();

    for (exercise_index, (name, set_count)) in plan.into_iter().enumerate() {
        println!("{name}");
        for set_index in 0..set_count {
            for (field, label) in SET_PROMPTS {
                let value = prompt(&format!("  set {} {label}: ", set_index + 1))?;
                draft.set_field(exercise_index, set_index, field, value);
            }
        }
    }
    Ok(())
}

async fn log(context: &Context, args: LogWorkoutArgs) -> Result<()> {
    let client = context.authenticated_client()?;
    let user_id = context
        .session_store()
        .user()
        .and_then(|user| user.id.clone());

    let handoff = WorkoutHandoff {
        routine_id: args.routine,
    };
    let mut draft = prepare_workout_log(&client, Some(&handoff))
        .await
        .context("failed to load routine")?;
    println!("Logging {}; leave a value blank to skip it.", draft.routine_name);
    fill_sets(&mut draft)?;
    draft.duration = args.duration;
    draft.notes = args.notes;
    draft.feeling_rating = args.feeling;

    let request = match draft.to_request(user_id.as_deref()) {
        Ok(request) => request,
        Err(errors) => {
            for (field, error) in errors.iter() {
                eprintln!("{field} {error}");
            }
            bail!("workout is invalid");
        }
    };

    let workout = client
        .log_workout(&request)
        .await
        .context("failed to log workout")?;
    println!("Logged workout {} ({:.1} kg)", workout.id, workout.total_volume());
    Ok(())
}
