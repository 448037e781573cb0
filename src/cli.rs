use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

// Also included by build.rs to generate shell completions, so this file
// must not refer to anything else in the crate.
pub fn build_cli() -> Command {
    Command::new("scaffold_bootstrap")
        .version("0.1.0")
        .about(
            "Block bootstrap over per-scaffold statistics files. \
             Writes replicates to <output_dir>/bootstrap_<i>/<n><suffix>.",
        )
        .arg_required_else_help(true)
        .arg(
            Arg::new("index")
                .help("Index of units, e.g. a .fai file (tab-separated: name, length, ...)")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("input_dir")
                .help("Directory holding one data file per unit")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output_dir")
                .help("Root directory for the replicate directories")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .help("Seed for the random number generator. Unseeded runs are not reproducible.")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("replicates")
                .short('n')
                .long("replicates")
                .default_value("100")
                .help("Number of bootstrap replicates")
                .value_parser(clap::value_parser!(usize)),
        )
        .arg(
            Arg::new("suffix")
                .long("suffix")
                .default_value(".MSMC.txt")
                .help("Filename suffix of the per-unit data files"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Print progress information"),
        )
}
