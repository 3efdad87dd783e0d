use anyhow::{Context as _, Result};
use clap::Args;

use super::Context;

#[derive(Args, Debug)]
pub struct ExercisesArgs {
    #[arg(
        long,
        short,
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub page: u32,
}

pub async fn list(context: &Context, args: ExercisesArgs) -> Result<()> {
    let page = context
        .authenticated_client()?
        .exercises(args.page)
        .await
        .context("failed to list exercises")?;

    if page.items.is_empty() {
        println!("No exercises found.");
    }
    for exercise in &page.items {
        println!(
            "{:<26} {:<40} {:<14} {}",
            exercise.id, exercise.name, exercise.muscle_group, exercise.equipment
        );
    }
    println!("Page {} of {}", args.page, page.total_pages.max(1));
    Ok(())
}
