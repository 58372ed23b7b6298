//! Binary logistic regression decision model.

use std::path::Path;

use ndarray::{Array1, ArrayView1};

use crate::artifacts::{check_finite, invalid, read_json, ClassifierArtifact};
use crate::error::{InferenceError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct LogisticRegression {
    coef: Array1<f64>,
    intercept: f64,
    classes: [i64; 2],
}

impl LogisticRegression {
    pub fn new(coef: Vec<f64>, intercept: f64, classes: [i64; 2]) -> Self {
        Self {
            coef: Array1::from(coef),
            intercept,
            classes,
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let artifact: ClassifierArtifact = read_json(path)?;
        Self::from_artifact(artifact, path)
    }

    pub fn from_artifact(artifact: ClassifierArtifact, path: &Path) -> Result<Self> {
        let ClassifierArtifact {
            mut coef,
            intercept,
            classes,
        } = artifact;

        // A binary model carries exactly one coefficient row.
        if coef.len() != 1 {
            return Err(invalid(path, format!("expected 1 coefficient row, found {}", coef.len())));
        }
        let coef = coef.remove(0);
        if coef.is_empty() {
            return Err(invalid(path, "empty coefficient row"));
        }
        let intercept = match intercept.as_slice() {
            [b] => *b,
            other => {
                let reason = format!("expected 1 intercept, found {}", other.len());
                return Err(invalid(path, reason));
            }
        };
        let classes: [i64; 2] = classes
            .try_into()
            .map_err(|c: Vec<i64>| {
                invalid(path, format!("expected 2 classes, found {}", c.len()))
            })?;
        check_finite(path, "coef", &coef)?;
        check_finite(path, "intercept", &[intercept])?;

        Ok(Self::new(coef, intercept, classes))
    }

    pub fn n_features(&self) -> usize {
        self.coef.len()
    }

    pub fn classes(&self) -> [i64; 2] {
        self.classes
    }

    pub fn decision_function(&self, x: ArrayView1<f64>) -> Result<f64> {
        if x.len() != self.coef.len() {
            return Err(InferenceError::Dimension {
                expected: self.coef.len(),
                found: x.len(),
            });
        }
        Ok(self.coef.dot(&x) + self.intercept)
    }

    /// Positive decision values select the second class.
    pub fn predict(&self, x: ArrayView1<f64>) -> Result<i64> {
        let decision = self.decision_function(x)?;
        Ok(self.class_for(decision))
    }

    /// Probability of the second class.
    pub fn predict_proba(&self, x: ArrayView1<f64>) -> Result<f64> {
        Ok(sigmoid(self.decision_function(x)?))
    }

    pub(crate) fn class_for(&self, decision: f64) -> i64 {
        self.classes[usize::from(decision > 0.0)]
    }
}

pub(crate) fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn model() -> LogisticRegression {
        LogisticRegression::new(vec![2.0, -1.0], 0.5, [0, 1])
    }

    #[test]
    fn decision_is_affine() {
        let d = model().decision_function(array![1.0, 3.0].view()).unwrap();
        assert_eq!(d, 2.0 - 3.0 + 0.5);
    }

    #[test]
    fn predict_thresholds_at_zero() {
        let m = model();
        assert_eq!(m.predict(array![1.0, 0.0].view()).unwrap(), 1);
        assert_eq!(m.predict(array![0.0, 1.0].view()).unwrap(), 0);
        // exactly zero falls to the first class
        assert_eq!(m.predict(array![0.0, 0.5].view()).unwrap(), 0);
    }

    #[test]
    fn proba_is_sigmoid_of_decision() {
        let m = model();
        assert!((m.predict_proba(array![0.0, 0.5].view()).unwrap() - 0.5).abs() < 1e-12);
        let p = m.predict_proba(array![10.0, 0.0].view()).unwrap();
        assert!(p > 0.99 && p < 1.0);
    }

    #[test]
    fn custom_class_labels() {
        let m = LogisticRegression::new(vec![1.0], 0.0, [7, 3]);
        assert_eq!(m.predict(array![1.0].view()).unwrap(), 3);
        assert_eq!(m.predict(array![-1.0].view()).unwrap(), 7);
    }

    #[test]
    fn rejects_malformed_artifacts() {
        let path = Path::new("m.json");
        let multi = ClassifierArtifact {
            coef: vec![vec![1.0], vec![2.0]],
            intercept: vec![0.0],
            classes: vec![0, 1],
        };
        assert!(LogisticRegression::from_artifact(multi, path).is_err());

        let three_classes = ClassifierArtifact {
            coef: vec![vec![1.0]],
            intercept: vec![0.0],
            classes: vec![0, 1, 2],
        };
        let err = LogisticRegression::from_artifact(three_classes, path).unwrap_err();
        assert!(err.to_string().contains("expected 2 classes"), "{err}");

        let no_intercept = ClassifierArtifact {
            coef: vec![vec![1.0]],
            intercept: vec![],
            classes: vec![0, 1],
        };
        assert!(LogisticRegression::from_artifact(no_intercept, path).is_err());
    }

    #[test]
    fn wrong_width_is_a_dimension_error() {
        let err = model().decision_function(array![1.0].view()).unwrap_err();
        assert!(matches!(err, InferenceError::Dimension { expected: 2, found: 1 }));
    }
}
