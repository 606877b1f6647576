use std::collections::BTreeSet;
use std::sync::LazyLock;

use log::trace;
use regex::Regex;

use crate::{WorkoutMetrics, parse_set_line};

static REP_SCHEME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d+\s*[xX×]\s*\d+").ok());

// A line is taken as an exercise label only if it carries no rep scheme, is
// none of the known metadata prefixes and is longer than three characters.
// The rules are an ordered exclusion list, kept as is for compatibility with
// logs already classified this way.
fn is_exercise_name(line: &str) -> bool {
    if REP_SCHEME
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(line))
    {
        return false;
    }

    let lowercased = line.to_lowercase();

    !lowercased.starts_with("set ")
        && !lowercased.starts_with("logged with")
        && !lowercased.starts_with("rep ")
        && line.chars().count() > 3
}

/// Aggregates all set lines of a workout description into totals.
///
/// Lines that parse as sets are accumulated; any other line may become the
/// "current exercise" label under which subsequent sets are recorded. An
/// empty description yields all-zero metrics.
#[must_use]
pub fn parse_description(description: &str) -> WorkoutMetrics {
    if description.is_empty() {
        return WorkoutMetrics::default();
    }

    let mut total_volume = 0.0;
    let mut total_sets = 0;
    let mut total_reps = 0;
    let mut exercises = BTreeSet::new();
    let mut current_exercise: Option<&str> = None;

    for line in description.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(set) = parse_set_line(line) {
            trace!("set line {line:?}: {} lbs x {}", set.weight, set.reps);
            total_volume += set.volume();
            total_sets += 1;
            total_reps += u32::from(set.reps);
            if let Some(exercise) = current_exercise {
                exercises.insert(exercise);
            }
        } else if is_exercise_name(line) {
            trace!("exercise name {line:?}");
            current_exercise = Some(line);
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    let exercise_count = exercises.len() as u32;

    WorkoutMetrics {
        total_volume_lbs: (total_volume * 100.0).round() / 100.0,
        total_sets,
        total_reps,
        exercise_count,
    }
}
