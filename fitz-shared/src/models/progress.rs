use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Server-computed totals from `GET /progress/volume`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSummary {
    #[serde(default)]
    pub total_workouts: u32,
    /// Kilograms lifted across every workout.
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub average_volume_per_workout: f64,
}

/// Volume attributed to one muscle group.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MuscleGroupInsight {
    #[serde(default)]
    pub total_volume: f64,
    #[serde(default)]
    pub percentage_of_total: f64,
}

/// Muscle group name to its share of the training volume, from
/// `GET /progress/muscle-insights`.
pub type MuscleInsights = BTreeMap<String, MuscleGroupInsight>;

/// Both dashboard panels; only ever built when both fetches succeeded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub volume: VolumeSummary,
    pub muscle_insights: MuscleInsights,
}

impl Dashboard {
    /// Muscle groups ordered by descending volume, ties by name.
    #[must_use]
    pub fn ranked_muscle_groups(&self) -> Vec<(&str, &MuscleGroupInsight)> {
        let mut ranked: Vec<_> = self
            .muscle_insights
            .iter()
            .map(|(group, insight)| (group.as_str(), insight))
            .collect();
        ranked.sort_by(|(a_name, a), (b_name, b)| {
            b.total_volume
                .total_cmp(&a.total_volume)
                .then_with(|| a_name.cmp(b_name))
        });
        ranked
    }
}
