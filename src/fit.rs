//! One-shot fit over a JSON document, bypassing the web API.

use std::fs::File;
use std::io::{stdin, stdout, BufReader, Read, Write};

use serde::Serialize;

use crate::models::Samples;
use crate::opts::FitOpts;
use crate::prelude::*;
use crate::statistics::{linear_regression, Regression};
use crate::tracing::format_elapsed;

#[derive(Debug, Serialize)]
pub struct FitOutput {
    #[serde(flatten)]
    pub regression: Regression,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub predictions: Vec<Prediction>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct Prediction {
    pub x: f64,
    pub y: f64,
}

pub fn run(opts: FitOpts) -> Result {
    let start_instant = Instant::now();
    let output = match &opts.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open `{}`", path.display()))?;
            fit(BufReader::new(file), &opts.predict)?
        }
        None => fit(stdin().lock(), &opts.predict)?,
    };
    debug!(elapsed = %format_elapsed(start_instant), "fitted");

    let mut stdout = stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &output)?;
    writeln!(stdout)?;
    Ok(())
}

#[instrument(level = "debug", skip_all)]
pub fn fit(reader: impl Read, predict: &[f64]) -> Result<FitOutput> {
    let samples: Samples =
        serde_json::from_reader(reader).context("failed to parse the samples")?;
    debug!(n_samples = samples.x.len());
    let regression = linear_regression(&samples.x, &samples.y)?;
    let predictions = predict
        .iter()
        .map(|&x| Prediction { x, y: regression.predict(x) })
        .collect();
    Ok(FitOutput { regression, predictions })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::statistics::StatisticsError;

    #[test]
    fn fit_ok() -> Result {
        let input = Cursor::new(r#"{"x": [0, 1, 2], "y": [0, 2, 4]}"#);
        let output = fit(input, &[3.0])?;
        assert_eq!(output.regression, Regression { a: 2.0, b: 0.0 });
        assert_eq!(output.predictions, [Prediction { x: 3.0, y: 6.0 }]);
        Ok(())
    }

    #[test]
    fn serialize_without_predictions_ok() -> Result {
        let output = fit(Cursor::new(r#"{"x": [1, 2, 3], "y": [2, 2, 2]}"#), &[])?;
        assert_eq!(serde_json::to_value(&output)?, serde_json::json!({"a": 0.0, "b": 2.0}));
        Ok(())
    }

    #[test]
    fn degenerate_error() {
        let error = fit(Cursor::new(r#"{"x": [1, 1], "y": [1, 2]}"#), &[]).unwrap_err();
        assert_eq!(error.downcast_ref::<StatisticsError>(), Some(&StatisticsError::DegenerateInput));
    }

    #[test]
    fn malformed_input_error() {
        let error = fit(Cursor::new("[1, 2, 3]"), &[]).unwrap_err();
        assert_eq!(error.to_string(), "failed to parse the samples");
    }
}
