use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tabiso_common::{Config, Enumeration, WeightMode};

/// Tabiso - match a labelled graph against a numbered distance table
#[derive(Parser, Debug)]
#[command(name = "tabiso")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Where the graph and the table come from
    #[command(subcommand)]
    pub input: Input,

    /// Whether edge weights must match
    #[arg(short = 'w', long, value_enum, default_value = "auto", global = true)]
    pub weights: WeightModeArg,
    /// Stop at the first isomorphism
    #[arg(long, default_value_t = false, global = true)]
    pub first: bool,
    /// Search on a single thread
    #[arg(long, default_value_t = false, global = true)]
    pub sequential: bool,
    /// Print every isomorphism found
    #[arg(short = 'm', long, default_value_t = false, global = true)]
    pub mappings: bool,
    /// Print a JSON report instead of plain text
    #[arg(long, default_value_t = false, global = true)]
    pub json: bool,
    /// Joins the answer positions
    #[arg(short = 's', long, default_value = "", global = true)]
    pub separator: String,
}

/// Input sources.
#[derive(Subcommand, Debug)]
pub enum Input {
    /// Read a distance table and an edge list from two text files
    Text {
        /// Square table, one whitespace separated row per line
        #[arg(long)]
        matrix: PathBuf,
        /// Edge list, one `A-B 13` or `A B` per line
        #[arg(long)]
        edges: PathBuf,
        /// Requested labels, e.g. `"B, D"`
        #[arg(short = 't', long)]
        targets: Option<String>,
    },
    /// Read a saved graph-editor exercise
    Exercise {
        /// Exercise JSON file
        file: PathBuf,
        /// Requested labels, e.g. `"B, D"`
        #[arg(short = 't', long)]
        targets: Option<String>,
    },
}

impl Input {
    /// The raw `--targets` text, if any.
    pub fn targets(&self) -> Option<&str> {
        match self {
            Self::Text { targets, .. } | Self::Exercise { targets, .. } => targets.as_deref(),
        }
    }
}

impl Args {
    /// Convert command-line arguments into internal configuration
    pub fn to_config(&self) -> Config {
        let enumeration = if self.first {
            Enumeration::First
        } else {
            Enumeration::All
        };

        Config::builder()
            .weight_mode(self.weights.into())
            .enumeration(enumeration)
            .parallel(!self.sequential)
            .build()
    }
}

/// Command-line argument wrapper for WeightMode
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum WeightModeArg {
    /// Weights must match exactly
    #[value(name = "weighted")]
    Weighted,
    /// Only adjacency matters
    #[value(name = "unweighted")]
    Unweighted,
    /// Weighted when the graph carries a weight above 1
    #[value(name = "auto")]
    Auto,
}

impl From<WeightModeArg> for WeightMode {
    fn from(arg: WeightModeArg) -> Self {
        match arg {
            WeightModeArg::Weighted => Self::Weighted,
            WeightModeArg::Unweighted => Self::Unweighted,
            WeightModeArg::Auto => Self::Auto,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_search_everything_in_parallel() {
        let args = Args::parse_from(["tabiso", "exercise", "task.json"]);
        let config = args.to_config();
        assert_eq!(config.weight_mode, WeightMode::Auto);
        assert_eq!(config.enumeration, Enumeration::All);
        assert!(config.parallel);
        assert!(args.input.targets().is_none());
        assert_eq!(args.separator, "");
    }

    #[rstest]
    #[case::after_subcommand(&["tabiso", "text", "--matrix", "m.txt", "--edges", "e.txt", "--targets", "b,d", "-w", "unweighted", "--first", "--sequential"])]
    #[case::before_subcommand(&["tabiso", "--weights", "unweighted", "--first", "--sequential", "text", "--matrix", "m.txt", "--edges", "e.txt", "--targets", "b,d"])]
    fn global_flags_are_accepted_anywhere(#[case] argv: &[&str]) {
        let args = Args::parse_from(argv);
        let config = args.to_config();
        assert_eq!(config.weight_mode, WeightMode::Unweighted);
        assert_eq!(config.enumeration, Enumeration::First);
        assert!(!config.parallel);
        assert_eq!(args.input.targets(), Some("b,d"));
    }

    #[rstest]
    #[case("auto", WeightMode::Auto)]
    #[case("weighted", WeightMode::Weighted)]
    #[case("unweighted", WeightMode::Unweighted)]
    fn weight_mode_names(#[case] name: &str, #[case] expected: WeightMode) {
        let args = Args::parse_from(["tabiso", "exercise", "task.json", "--weights", name]);
        assert_eq!(args.to_config().weight_mode, expected);
    }
}
