use std::str::FromStr;

use crate::prelude::*;

pub fn sample_rate(value: &str) -> Result<f32> {
    match f32::from_str(value)? {
        value if (0.0..=1.0).contains(&value) => Ok(value),
        value => Err(anyhow!("{} is not within 0.0..=1.0", value)),
    }
}

pub fn finite_f64(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        value if value.is_finite() => Ok(value),
        _ => Err(anyhow!("expected a finite number")),
    }
}
