use serde::{Serialize, Deserialize};

/// One labelled sample: an input vector and the target output vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub input: Vec<f64>,
    pub target: Vec<f64>,
}

impl TrainingExample {
    pub fn new(input: Vec<f64>, target: Vec<f64>) -> TrainingExample {
        TrainingExample { input, target }
    }

    /// Builds an example whose target is one-hot at `class` over `n_classes` outputs.
    ///
    /// Returns `None` when `class >= n_classes`.
    pub fn one_hot(input: Vec<f64>, class: usize, n_classes: usize) -> Option<TrainingExample> {
        if class >= n_classes {
            return None;
        }
        let mut target = vec![0.0; n_classes];
        target[class] = 1.0;
        Some(TrainingExample { input, target })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_hot_target() {
        let ex = TrainingExample::one_hot(vec![0.5], 2, 4).unwrap();
        assert_eq!(ex.target, vec![0.0, 0.0, 1.0, 0.0]);
        assert!(TrainingExample::one_hot(vec![0.5], 4, 4).is_none());
    }
}
