//! Arithmetic mean and single-predictor ordinary least squares.
//!
//! <https://en.wikipedia.org/wiki/Simple_linear_regression>

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::prelude::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StatisticsError {
    /// Empty or mismatched sequences.
    #[error("{0}")]
    InvalidInput(String),

    /// All `x` values are identical, so the slope is undefined.
    #[error("x has zero variance, the slope is undefined")]
    DegenerateInput,
}

/// Fitted line `y = a * x + b`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Regression {
    /// Slope.
    pub a: f64,

    /// Intercept.
    pub b: f64,
}

impl Regression {
    #[must_use]
    pub fn predict(&self, x: f64) -> f64 {
        self.a * x + self.b
    }
}

/// Computes a [`Regression`] from the paired samples.
///
/// The web layer only sees this trait, so the computation may be swapped out
/// when the service is constructed.
pub trait Regressor: Send + Sync + 'static {
    fn fit(&self, x: &[f64], y: &[f64]) -> StdResult<Regression, StatisticsError>;
}

impl<F> Regressor for F
where
    F: Fn(&[f64], &[f64]) -> StdResult<Regression, StatisticsError> + Send + Sync + 'static,
{
    fn fit(&self, x: &[f64], y: &[f64]) -> StdResult<Regression, StatisticsError> {
        self(x, y)
    }
}

pub fn mean(values: &[f64]) -> StdResult<f64, StatisticsError> {
    if values.is_empty() {
        return Err(StatisticsError::InvalidInput(
            "cannot take the mean of an empty sequence".to_string(),
        ));
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

pub fn linear_regression(x: &[f64], y: &[f64]) -> StdResult<Regression, StatisticsError> {
    if x.len() != y.len() {
        return Err(StatisticsError::InvalidInput(format!(
            "x and y must have equal lengths, got {} and {}",
            x.len(),
            y.len(),
        )));
    }
    if x.is_empty() {
        return Err(StatisticsError::InvalidInput("x and y must not be empty".to_string()));
    }
    // The mean of identical inexact values may round away from them.
    if x.iter().all(|&xi| xi == x[0]) {
        return Err(StatisticsError::DegenerateInput);
    }

    let mean_x = mean(x)?;
    let mean_y = mean(y)?;

    let (numerator, denominator) =
        x.iter()
            .zip(y)
            .fold((0.0, 0.0), |(numerator, denominator), (xi, yi)| {
                let dx = xi - mean_x;
                (numerator + dx * (yi - mean_y), denominator + dx * dx)
            });
    if denominator == 0.0 {
        return Err(StatisticsError::DegenerateInput);
    }

    let a = numerator / denominator;
    let b = mean_y - a * mean_x;
    if !a.is_finite() || !b.is_finite() {
        return Err(StatisticsError::InvalidInput(
            "the samples are too large, the fit overflows".to_string(),
        ));
    }
    Ok(Regression { a, b })
}
