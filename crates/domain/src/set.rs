use derive_more::{Display, Into};

/// Conversion factor applied to weights logged in kilograms.
pub const LBS_PER_KG: f64 = 2.20462;

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, PartialOrd)]
pub struct Weight(f64);

impl Weight {
    pub fn new(value: f64) -> Result<Self, WeightError> {
        if !value.is_finite() {
            return Err(WeightError::NotFinite);
        }

        if value < 0.0 {
            return Err(WeightError::Negative);
        }

        Ok(Self(value))
    }

    pub fn from_kilograms(value: f64) -> Result<Self, WeightError> {
        Self::new(value * LBS_PER_KG)
    }
}

impl TryFrom<&str> for Weight {
    type Error = WeightError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<f64>() {
            Ok(parsed_value) => Weight::new(parsed_value),
            Err(_) => Err(WeightError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum WeightError {
    #[error("Weight must be a finite number")]
    NotFinite,
    #[error("Weight must not be negative")]
    Negative,
    #[error("Weight must be a decimal")]
    ParseError,
}

#[derive(Debug, Default, Display, Clone, Copy, Into, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value)
    }
}

impl TryFrom<&str> for Reps {
    type Error = RepsError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<u32>() {
            Ok(parsed_value) => Ok(Reps(parsed_value)),
            Err(_) => Err(RepsError::ParseError),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be a non-negative integer")]
    ParseError,
}

/// A single performed set, weight normalized to pounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Set {
    pub weight: Weight,
    pub reps: Reps,
}

impl Set {
    #[must_use]
    pub fn volume(&self) -> f64 {
        f64::from(self.weight) * f64::from(u32::from(self.reps))
    }
}
