use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::network::network::{validate_layer_sizes, Network};

/// Serializable description of a network's architecture.
///
/// `layer_sizes` lists the neuron count of every layer, input first and
/// output last. When `seed` is set, `build()` initialises the parameters
/// reproducibly; otherwise the generator is seeded from OS entropy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    pub layer_sizes: Vec<usize>,
    #[serde(default)]
    pub seed: Option<u64>,
}

impl NetworkSpec {
    pub fn new(layer_sizes: Vec<usize>) -> Self {
        NetworkSpec { layer_sizes, seed: None }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        validate_layer_sizes(&self.layer_sizes)
    }

    pub fn build(&self) -> Result<Network> {
        self.validate()?;
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Network::new(&self.layer_sizes, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;

    #[test]
    fn parses_json_without_seed() {
        let spec: NetworkSpec = serde_json::from_str(r#"{ "layer_sizes": [784, 30, 10] }"#).unwrap();
        assert_eq!(spec, NetworkSpec::new(vec![784, 30, 10]));
    }

    #[test]
    fn seeded_builds_agree() {
        let spec = NetworkSpec::new(vec![3, 4, 2]).with_seed(99);
        let a = spec.build().unwrap();
        let b = spec.build().unwrap();
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.biases(), b.biases());
    }

    #[test]
    fn validation_matches_network_construction() {
        let single = NetworkSpec::new(vec![10]).validate().unwrap_err();
        assert!(matches!(single, NetworkError::Construction(_)));

        let zero = NetworkSpec::new(vec![10, 0, 2]).build().unwrap_err();
        assert_eq!(zero.to_string(), "invalid network construction: layer 1 has zero neurons");
    }
}
