use std::path::Path;

use serde::Deserialize;

use crate::error::Result;
use crate::network::NetworkSpec;
use crate::train::TrainConfig;

/// A complete training run read from one JSON file:
///
/// ```json
/// {
///   "network":  { "layer_sizes": [784, 30, 10], "seed": 1 },
///   "training": { "epochs": 30, "mini_batch_size": 10, "learning_rate": 3.0 }
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    pub network: NetworkSpec,
    pub training: TrainConfig,
}

impl RunConfig {
    /// Reads and validates a run description.
    pub fn load_json(path: impl AsRef<Path>) -> Result<RunConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: RunConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.network.validate()?;
        self.training.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetworkError;
    use std::path::PathBuf;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("nabla-{}-{}.json", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_both_sections() {
        let path = write_temp(
            "run",
            r#"{
                "network": { "layer_sizes": [4, 3, 2], "seed": 7 },
                "training": { "epochs": 5, "mini_batch_size": 2, "learning_rate": 0.5 }
            }"#,
        );
        let config = RunConfig::load_json(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.network, NetworkSpec::new(vec![4, 3, 2]).with_seed(7));
        assert_eq!(config.training.epochs, 5);
        assert_eq!(config.training.mini_batch_size, 2);
        assert!(config.training.seed.is_none());
    }

    #[test]
    fn rejects_invalid_values() {
        let path = write_temp(
            "bad-run",
            r#"{
                "network": { "layer_sizes": [4, 2] },
                "training": { "epochs": 5, "mini_batch_size": 0, "learning_rate": 0.5 }
            }"#,
        );
        let err = RunConfig::load_json(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, NetworkError::InvalidConfig(_)));
    }

    #[test]
    fn missing_section_is_a_json_error() {
        let path = write_temp("partial-run", r#"{ "network": { "layer_sizes": [4, 2] } }"#);
        let err = RunConfig::load_json(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, NetworkError::Json(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("nabla-does-not-exist.json");
        assert!(matches!(RunConfig::load_json(path), Err(NetworkError::Io(_))));
    }
}
