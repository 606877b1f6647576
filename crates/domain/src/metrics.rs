use serde::{Deserialize, Serialize};

/// Totals extracted from one workout description.
///
/// Volume, set and rep totals are exact for well-formed set lines.
/// `exercise_count` is the number of distinct label lines that had at least
/// one set recorded under them and may be 0 for unlabeled logs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutMetrics {
    pub total_volume_lbs: f64,
    pub total_sets: u32,
    pub total_reps: u32,
    pub exercise_count: u32,
}
