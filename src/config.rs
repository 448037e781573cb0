use std::path::{Path, PathBuf};

pub const DEFAULT_SUFFIX: &str = ".MSMC.txt";
pub const DEFAULT_REPLICATES: usize = 100;

/// Everything a bootstrap run needs to know. The defaults reproduce the
/// classic behaviour: 100 replicates of `.MSMC.txt` files, unseeded.
#[derive(Clone, Debug)]
pub struct BootstrapConfig {
    pub index_path: PathBuf,
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub suffix: String,
    pub replicates: usize,
    pub seed: Option<u64>,
}

impl BootstrapConfig {
    pub fn new(
        index_path: impl Into<PathBuf>,
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        BootstrapConfig {
            index_path: index_path.into(),
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            suffix: DEFAULT_SUFFIX.to_owned(),
            replicates: DEFAULT_REPLICATES,
            seed: None,
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_replicates(mut self, replicates: usize) -> Self {
        self.replicates = replicates;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    // Expects matches produced by cli::build_cli()
    pub fn from_matches(args: &clap::ArgMatches) -> Self {
        let index = args.get_one::<PathBuf>("index").cloned().unwrap_or_default();
        let input_dir = args.get_one::<PathBuf>("input_dir").cloned().unwrap_or_default();
        let output_dir = args.get_one::<PathBuf>("output_dir").cloned().unwrap_or_default();

        let mut config = BootstrapConfig::new(index, input_dir, output_dir)
            .with_seed(args.get_one::<u64>("seed").copied());
        if let Some(suffix) = args.get_one::<String>("suffix") {
            config = config.with_suffix(suffix.as_str());
        }
        if let Some(n) = args.get_one::<usize>("replicates") {
            config = config.with_replicates(*n);
        }
        config
    }

    /// `{dir}/{unit_id}{suffix}`. Also used for output files, where the unit id
    /// is the draw's sequence number.
    pub fn data_file(&self, dir: &Path, unit_id: &str) -> PathBuf {
        dir.join(format!("{}{}", unit_id, self.suffix))
    }

    pub fn replicate_dir(&self, replicate_id: usize) -> PathBuf {
        self.output_dir.join(format!("bootstrap_{}", replicate_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_and_paths() {
        let config = BootstrapConfig::new("in.fai", "idir", "odir");
        assert_eq!(config.suffix, ".MSMC.txt");
        assert_eq!(config.replicates, 100);
        assert!(config.seed.is_none());

        assert_eq!(
            config.data_file(Path::new("idir"), "scaffold_7"),
            Path::new("idir/scaffold_7.MSMC.txt")
        );
        assert_eq!(config.replicate_dir(42), Path::new("odir/bootstrap_42"));
    }

    #[test]
    fn test_from_matches() {
        let matches = crate::cli::build_cli()
            .try_get_matches_from([
                "scaffold_bootstrap",
                "in.fai",
                "idir",
                "odir",
                "--seed",
                "7",
                "-n",
                "3",
                "--suffix",
                ".txt",
            ])
            .unwrap();
        let config = BootstrapConfig::from_matches(&matches);
        assert_eq!(config.index_path, Path::new("in.fai"));
        assert_eq!(config.input_dir, Path::new("idir"));
        assert_eq!(config.output_dir, Path::new("odir"));
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.replicates, 3);
        assert_eq!(config.suffix, ".txt");

        let matches = crate::cli::build_cli()
            .try_get_matches_from(["scaffold_bootstrap", "a", "b", "c"])
            .unwrap();
        let config = BootstrapConfig::from_matches(&matches);
        assert_eq!(config.suffix, DEFAULT_SUFFIX);
        assert_eq!(config.replicates, DEFAULT_REPLICATES);
        assert_eq!(config.seed, None);
    }
}
