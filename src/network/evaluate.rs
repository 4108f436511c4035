use crate::data::TrainingExample;
use crate::error::Result;
use crate::math::vector::argmax;
use crate::network::network::Network;

impl Network {
    /// Number of examples whose predicted class (argmax of the output) equals
    /// the argmax of the target. Ties resolve to the lowest index.
    pub fn evaluate(&self, test_data: &[TrainingExample]) -> Result<usize> {
        let mut correct = 0;
        for (index, example) in test_data.iter().enumerate() {
            self.check_example(index, example)?;
            let output = self.feedforward(&example.input)?;
            if argmax(&output) == argmax(&example.target) {
                correct += 1;
            }
        }
        Ok(correct)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use crate::math::Matrix;

    /// Output unit 0 fires for input [1, 0], unit 1 for input [0, 1].
    fn sharp_network() -> Network {
        let w = Matrix::from_data(vec![vec![10.0, -10.0], vec![-10.0, 10.0]]).unwrap();
        Network::from_parameters(vec![w], vec![vec![0.0, 0.0]]).unwrap()
    }

    #[test]
    fn counts_matching_argmax() {
        let net = sharp_network();
        let hit = TrainingExample::new(vec![1.0, 0.0], vec![1.0, 0.0]);
        let miss = TrainingExample::new(vec![1.0, 0.0], vec![0.0, 1.0]);

        assert_eq!(net.evaluate(&[hit.clone()]).unwrap(), 1);
        assert_eq!(net.evaluate(&[miss.clone()]).unwrap(), 0);
        assert_eq!(net.evaluate(&[hit.clone(), miss, hit]).unwrap(), 2);
        assert_eq!(net.evaluate(&[]).unwrap(), 0);
    }

    #[test]
    fn target_ties_resolve_to_first_index() {
        let net = sharp_network();
        // Zero input gives equal outputs and the tied target also picks index 0.
        let tied = TrainingExample::new(vec![0.0, 0.0], vec![0.5, 0.5]);
        assert_eq!(net.evaluate(&[tied]).unwrap(), 1);
    }

    #[test]
    fn malformed_example_aborts() {
        let net = sharp_network();
        let bad = TrainingExample::new(vec![1.0], vec![1.0, 0.0]);
        assert!(matches!(
            net.evaluate(&[bad]),
            Err(NetworkError::InvalidExample { index: 0, .. })
        ));
    }
}
