use std::sync::LazyLock;

use regex::Regex;

use crate::{Reps, Set, Weight};

static SET_LINE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    // Weight, optional unit token, separator, rep count. Searched, not
    // anchored: leading labels ("Set 1:") and trailing annotations
    // ("[Failure]") are ignored.
    Regex::new(r"(\d+(?:\.\d+)?)\s*(?i:lbs?|pounds?|kg|kilograms?)?\s*[xX×]\s*(\d+)").ok()
});

/// Extracts weight and reps from a single set line, e.g. "Set 1: 175 lbs x 7"
/// or "80 kg x 10". Returns `None` if the line encodes no set.
///
/// Whether the weight is kilograms is decided by searching the whole line for
/// "kg" or "kilogram", independent of the matched unit token. A line with a
/// coincidental "kg" elsewhere still converts.
#[must_use]
pub fn parse_set_line(line: &str) -> Option<Set> {
    let captures = SET_LINE.as_ref()?.captures(line)?;

    let value = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let lowercased = line.to_lowercase();
    let weight = if lowercased.contains("kg") || lowercased.contains("kilogram") {
        Weight::from_kilograms(value)
    } else {
        Weight::new(value)
    }
    .ok()?;
    let reps = Reps::try_from(captures.get(2)?.as_str()).ok()?;

    Some(Set { weight, reps })
}
