//! Command-line driver: loads an IDX (MNIST-style) dataset and trains a
//! sigmoid network on it with mini-batch SGD.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use nabla::data::load_idx_pair;
use nabla::{train_loop, NetworkSpec, RunConfig, TrainConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "nabla")]
#[command(about = "Train a feedforward sigmoid network with mini-batch SGD", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Train on an IDX image/label pair and report test accuracy per epoch
    Train {
        /// IDX3 training images
        #[arg(long)]
        train_images: PathBuf,

        /// IDX1 training labels
        #[arg(long)]
        train_labels: PathBuf,

        /// IDX3 test images
        #[arg(long, requires = "test_labels")]
        test_images: Option<PathBuf>,

        /// IDX1 test labels
        #[arg(long, requires = "test_images")]
        test_labels: Option<PathBuf>,

        /// JSON file with `network` and `training` sections, used instead of the flags below
        #[arg(short, long, conflicts_with_all = ["layers", "epochs", "batch_size", "eta", "seed"])]
        config: Option<PathBuf>,

        /// Layer sizes, input first
        #[arg(long, value_delimiter = ',', default_value = "784,30,10")]
        layers: Vec<usize>,

        /// Number of epochs
        #[arg(short, long, default_value = "30")]
        epochs: usize,

        /// Mini-batch size
        #[arg(short, long, default_value = "10")]
        batch_size: usize,

        /// Learning rate
        #[arg(long, default_value = "3.0")]
        eta: f64,

        /// Seed for weight initialisation and shuffling
        #[arg(long)]
        seed: Option<u64>,

        /// Write per-epoch statistics as JSON to this file
        #[arg(long)]
        report: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level: Level = cli
        .log_level
        .parse()
        .with_context(|| format!("invalid log level '{}'", cli.log_level))?;
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Train {
            train_images,
            train_labels,
            test_images,
            test_labels,
            config,
            layers,
            epochs,
            batch_size,
            eta,
            seed,
            report,
        } => {
            let (spec, train_config) = match config {
                Some(path) => {
                    let run = RunConfig::load_json(&path)
                        .with_context(|| format!("loading config {}", path.display()))?;
                    (run.network, run.training)
                }
                None => {
                    let spec = NetworkSpec { layer_sizes: layers, seed };
                    let mut train_config = TrainConfig::new(epochs, batch_size, eta);
                    train_config.seed = seed;
                    (spec, train_config)
                }
            };
            spec.validate()?;
            train_config.validate()?;

            let n_classes = spec.layer_sizes[spec.layer_sizes.len() - 1];

            let mut training_data = load_idx_pair(&train_images, &train_labels, n_classes)
                .with_context(|| format!("loading training data from {}", train_images.display()))?;
            let test_data = match (test_images, test_labels) {
                (Some(images), Some(labels)) => load_idx_pair(&images, &labels, n_classes)
                    .with_context(|| format!("loading test data from {}", images.display()))?,
                (None, None) => Vec::new(),
                _ => bail!("--test-images and --test-labels must be given together"),
            };
            info!(
                training = training_data.len(),
                test = test_data.len(),
                layers = ?spec.layer_sizes,
                "loaded dataset"
            );

            let mut network = spec.build()?;
            let mut rng = train_config.rng();
            let history = train_loop(
                &mut network,
                &mut training_data,
                &test_data,
                &train_config,
                &mut rng,
            )?;

            if let Some(last) = history.last() {
                println!("{last}");
            }

            if let Some(path) = report {
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("creating report {}", path.display()))?;
                serde_json::to_writer_pretty(std::io::BufWriter::new(file), &history)?;
                info!(path = %path.display(), "wrote epoch report");
            }
        }
    }

    Ok(())
}
