//! Block bootstrap over per-unit (e.g. per-scaffold) statistics files.
//!
//! Units listed in an index are resampled uniformly with replacement until the
//! resampled length reaches the original total length. Each drawn unit's data
//! file is copied into the replicate directory under a fresh sequential name,
//! with its first column set to that number.

pub mod cli;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod materialize;
pub mod replicate;
pub mod resample;

pub use config::BootstrapConfig;
pub use error::{BootstrapError, Result};
pub use index::{IndexEntry, IndexSet};
pub use replicate::{run_replicates, BootstrapSummary, Replicate};
pub use resample::{Draw, Resampler};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    }
}

/// Loads the index and writes all replicates described by `config`.
pub fn run(config: &BootstrapConfig) -> Result<BootstrapSummary> {
    let index = IndexSet::load(&config.index_path, |unit_id| {
        config.data_file(&config.input_dir, unit_id)
    })?;
    if index.is_empty() {
        return Err(BootstrapError::EmptyIndex {
            path: config.index_path.clone(),
        });
    }

    let mut rng = make_rng(config.seed);
    run_replicates(&index, config, &mut rng)
}
