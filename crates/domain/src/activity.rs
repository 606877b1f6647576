use serde_json::Value;

use crate::{WorkoutMetrics, parse_description};

/// Extracts workout metrics from a generic activity record.
///
/// A missing, null or non-string `description` attribute is treated as an
/// empty description.
#[must_use]
pub fn activity_metrics(activity: &Value) -> WorkoutMetrics {
    let description = activity
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or_default();
    parse_description(description)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_activity_metrics() {
        let activity = json!({
            "name": "Push Day",
            "description": "Exercise\nSet 1: 100 lbs x 10\nSet 2: 100 lbs x 10",
        });

        assert_eq!(
            activity_metrics(&activity),
            WorkoutMetrics {
                total_volume_lbs: 2000.0,
                total_sets: 2,
                total_reps: 20,
                exercise_count: 1,
            }
        );
    }

    #[rstest]
    #[case(json!({"name": "Workout"}))]
    #[case(json!({"description": ""}))]
    #[case(json!({"description": null}))]
    #[case(json!({"description": 42}))]
    fn test_activity_metrics_without_description(#[case] activity: Value) {
        assert_eq!(activity_metrics(&activity), WorkoutMetrics::default());
    }
}
