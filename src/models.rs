use serde::{Deserialize, Serialize};

/// Paired samples, `x[i]` goes with `y[i]`.
///
/// Both fields are required: a document missing either one fails to decode.
#[derive(Debug, Serialize, Deserialize)]
pub struct Samples {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_integers_ok() {
        let samples: Samples = serde_json::from_str(r#"{"x": [0, 1, 2], "y": [0.5, 2, 4]}"#).unwrap();
        assert_eq!(samples.x, [0.0, 1.0, 2.0]);
        assert_eq!(samples.y, [0.5, 2.0, 4.0]);
    }

    #[test]
    fn deserialize_missing_field_error() {
        let error = serde_json::from_str::<Samples>(r#"{"x": [1, 2]}"#).unwrap_err();
        assert!(error.to_string().contains("missing field `y`"));
    }
}
