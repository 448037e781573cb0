use crate::config::BootstrapConfig;
use crate::error::{BootstrapError, Result};
use crate::index::IndexSet;
use crate::materialize::materialize_draw;
use crate::resample::{Draw, Resampler};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;

/// One bootstrap resample of the index set.
#[derive(Clone, Debug)]
pub struct Replicate {
    pub id: usize,
    pub target_length: u64,
    pub draws: Vec<Draw>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplicateSummary {
    pub id: usize,
    pub n_draws: usize,
    pub sampled_length: u64,
}

#[derive(Clone, Debug, Default)]
pub struct BootstrapSummary {
    pub replicates: Vec<ReplicateSummary>,
}

impl Replicate {
    pub fn draw(
        id: usize,
        index: &IndexSet,
        rng: &mut impl Rng,
        config: &BootstrapConfig,
    ) -> Result<Self> {
        let resampler = Resampler::new(index, rng).ok_or_else(|| BootstrapError::EmptyIndex {
            path: config.index_path.clone(),
        })?;
        Ok(Replicate {
            id,
            target_length: index.total_length(),
            draws: resampler.collect(),
        })
    }

    pub fn sampled_length(&self, index: &IndexSet) -> u64 {
        self.draws.iter().map(|d| index.get(d.unit).length).sum()
    }

    /// Writes one rewritten data file per draw into the replicate directory,
    /// creating the directory if needed.
    pub fn materialize(&self, index: &IndexSet, config: &BootstrapConfig) -> Result<()> {
        let out_dir = config.replicate_dir(self.id);
        std::fs::create_dir_all(&out_dir).map_err(|e| BootstrapError::io(&out_dir, e))?;

        for draw in self.draws.iter() {
            let unit_id = &index.get(draw.unit).unit_id;
            let source = config.data_file(&config.input_dir, unit_id);
            let target = config.data_file(&out_dir, &draw.sequence_number.to_string());
            let n_records = materialize_draw(&source, &target, draw.sequence_number)?;
            log::debug!("{} -> {} ({} records)", source.display(), target.display(), n_records);
        }
        Ok(())
    }
}

/// Generates `config.replicates` independent replicates. Stops at the first error.
pub fn run_replicates(
    index: &IndexSet,
    config: &BootstrapConfig,
    rng: &mut impl Rng,
) -> Result<BootstrapSummary> {
    if index.is_empty() {
        return Err(BootstrapError::EmptyIndex {
            path: config.index_path.clone(),
        });
    }

    let progress = ProgressBar::new(config.replicates as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} replicates [{elapsed_precise}]")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut summary = BootstrapSummary::default();
    for id in 0..config.replicates {
        let replicate = Replicate::draw(id, index, rng, config)?;
        replicate.materialize(index, config)?;

        let sampled_length = replicate.sampled_length(index);
        log::info!(
            "Replicate {}: {} draws, {} of {} length units",
            id,
            replicate.draws.len(),
            sampled_length,
            replicate.target_length
        );
        summary.replicates.push(ReplicateSummary {
            id,
            n_draws: replicate.draws.len(),
            sampled_length,
        });
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(summary)
}
