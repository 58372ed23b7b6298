//! Per-feature standardization, `(x - mean) / scale`.

use std::path::Path;

use ndarray::{Array1, ArrayView1};

use crate::artifacts::{check_finite, invalid, read_json, ScalerArtifact};
use crate::error::{InferenceError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: Option<Array1<f64>>,
    scale: Option<Array1<f64>>,
    n_features: usize,
}

impl StandardScaler {
    pub fn new(mean: Option<Vec<f64>>, scale: Option<Vec<f64>>, n_features: usize) -> Self {
        Self {
            mean: mean.map(Array1::from),
            scale: scale.map(|s| Array1::from(s).mapv(non_zero)),
            n_features,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let artifact: ScalerArtifact = read_json(path)?;
        Self::from_artifact(artifact, path)
    }

    /// Validates a fitted-scaler export. `path` is only used for error reporting.
    pub fn from_artifact(artifact: ScalerArtifact, path: &Path) -> Result<Self> {
        let ScalerArtifact {
            n_features_in,
            mean,
            var,
            scale,
        } = artifact;

        let scale = match (scale, var) {
            (Some(scale), _) => Some(scale),
            (None, Some(var)) => {
                if let Some(i) = var.iter().position(|v| *v < 0.0) {
                    return Err(invalid(path, format!("var[{i}] is negative")));
                }
                Some(var.iter().map(|v| v.sqrt()).collect())
            }
            (None, None) => None,
        };

        let widths: Vec<usize> = [mean.as_ref(), scale.as_ref()]
            .into_iter()
            .flatten()
            .map(Vec::len)
            .chain(n_features_in)
            .collect();
        let n_features = match widths.first() {
            Some(&w) if widths.iter().all(|&x| x == w) => w,
            Some(_) => return Err(invalid(path, format!("inconsistent feature widths {widths:?}"))),
            None => return Err(invalid(path, "no mean, scale or n_features_in")),
        };

        if let Some(mean) = &mean {
            check_finite(path, "mean", mean)?;
        }
        if let Some(scale) = &scale {
            check_finite(path, "scale", scale)?;
        }

        Ok(Self::new(mean, scale, n_features))
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn transform(&self, x: ArrayView1<f64>) -> Result<Array1<f64>> {
        if x.len() != self.n_features {
            return Err(InferenceError::Dimension {
                expected: self.n_features,
                found: x.len(),
            });
        }
        let mut out = x.to_owned();
        if let Some(mean) = &self.mean {
            out -= mean;
        }
        if let Some(scale) = &self.scale {
            out /= scale;
        }
        Ok(out)
    }
}

// Constant features were fitted with zero variance; leave them unscaled.
fn non_zero(s: f64) -> f64 {
    if s == 0.0 {
        1.0
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn artifact(json: &str) -> ScalerArtifact {
        serde_json::from_str(json).unwrap()
    }

    fn fitted(json: &str) -> Result<StandardScaler> {
        StandardScaler::from_artifact(artifact(json), Path::new("s.json"))
    }

    #[test]
    fn centers_and_scales() {
        let sc = StandardScaler::new(Some(vec![1.0, 10.0]), Some(vec![2.0, 5.0]), 2);
        let out = sc.transform(array![3.0, 0.0].view()).unwrap();
        assert_eq!(out, array![1.0, -2.0]);
    }

    #[test]
    fn scale_derived_from_variance() {
        let sc = fitted(r#"{"mean": [0.0, 0.0], "var": [4.0, 0.0]}"#).unwrap();
        // zero variance keeps the feature unscaled
        let out = sc.transform(array![6.0, 7.0].view()).unwrap();
        assert_eq!(out, array![3.0, 7.0]);
    }

    #[test]
    fn without_mean_only_scales() {
        let sc = fitted(r#"{"scale": [2.0]}"#).unwrap();
        assert_eq!(sc.transform(array![8.0].view()).unwrap(), array![4.0]);
    }

    #[test]
    fn wrong_width_is_a_dimension_error() {
        let sc = StandardScaler::new(Some(vec![0.0; 3]), None, 3);
        let err = sc.transform(array![1.0, 2.0].view()).unwrap_err();
        assert!(matches!(err, InferenceError::Dimension { expected: 3, found: 2 }));
    }

    #[test]
    fn rejects_inconsistent_artifacts() {
        let mismatch = fitted(r#"{"mean": [0.0, 1.0], "scale": [1.0]}"#);
        assert!(matches!(mismatch, Err(InferenceError::InvalidArtifact { .. })));

        assert!(fitted(r#"{"n_features_in": 3, "mean": [0.0, 1.0]}"#).is_err());
        assert!(fitted("{}").is_err());
        assert!(fitted(r#"{"var": [-1.0]}"#).is_err());
    }

    #[test]
    fn passthrough_when_fitted_without_statistics() {
        let sc = fitted(r#"{"n_features_in": 2}"#).unwrap();
        assert_eq!(sc.transform(array![5.0, -5.0].view()).unwrap(), array![5.0, -5.0]);
    }
}
