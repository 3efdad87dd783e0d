use anyhow::{Context as _, Result};

use super::Context;

pub async fn show(context: &Context) -> Result<()> {
    let dashboard = context
        .authenticated_client()?
        .dashboard()
        .await
        .context("dashboard unavailable")?;

    let volume = &dashboard.volume;
    println!("Total workouts:      {}", volume.total_workouts);
    println!("Total volume:        {:.0} kg", volume.total_volume);
    println!("Average per workout: {:.1} kg", volume.average_volume_per_workout);

    let ranked = dashboard.ranked_muscle_groups();
    if ranked.is_empty() {
        println!("No muscle group data yet.");
        return Ok(());
    }
    println!();
    println!("Muscle groups:");
    for (group, insight) in ranked {
        println!(
            "  {group:<16} {:>10.0} kg {:>6.1}%",
            insight.total_volume, insight.percentage_of_total
        );
    }
    Ok(())
}
