//! Configuration for a matching run.
//!
//! ```ignore
//! use tabiso_common::{Config, Enumeration, WeightMode};
//! let cfg = Config::builder()
//!     .weight_mode(WeightMode::Weighted)
//!     .enumeration(Enumeration::All)
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::vertex::Vertex;

/// How edge weights take part in matching.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// Weights must correspond exactly.
    Weighted,
    /// Only adjacency matters; weights are ignored.
    Unweighted,
    /// Weighted if the source graph carries any weight other than 1.
    #[default]
    Auto,
}

impl WeightMode {
    /// Decides whether a match against `source` compares weights.
    #[must_use]
    pub fn is_weighted<V: Vertex>(self, source: &Graph<V>) -> bool {
        match self {
            Self::Weighted => true,
            Self::Unweighted => false,
            Self::Auto => source.has_nontrivial_weights(),
        }
    }
}

impl From<bool> for WeightMode {
    fn from(weighted: bool) -> Self {
        if weighted {
            Self::Weighted
        } else {
            Self::Unweighted
        }
    }
}

/// How many isomorphisms the search collects.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Enumeration {
    /// Every isomorphism.
    #[default]
    All,
    /// Stop at the first complete isomorphism.
    First,
}

/// Global search configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Whether weights are compared.
    pub weight_mode: WeightMode,
    /// How many isomorphisms to collect.
    pub enumeration: Enumeration,
    /// Split the top-level search branches across threads when the engine
    /// is built with parallel support.
    pub parallel: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weight_mode: WeightMode::Auto,
            enumeration: Enumeration::All,
            parallel: true,
        }
    }
}

impl Config {
    /// Starts a builder seeded with the defaults.
    #[must_use]
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Exhaustive search with weights compared exactly as requested.
    #[must_use]
    pub fn with_weights(weighted: bool) -> Self {
        Self::builder().weight_mode(weighted.into()).build()
    }
}

/// Builder for [`Config`].
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Sets the weight mode.
    #[must_use]
    pub const fn weight_mode(mut self, mode: WeightMode) -> Self {
        self.config.weight_mode = mode;
        self
    }

    /// Sets the enumeration mode.
    #[must_use]
    pub const fn enumeration(mut self, enumeration: Enumeration) -> Self {
        self.config.enumeration = enumeration;
        self
    }

    /// Enables or disables branch-level parallelism.
    #[must_use]
    pub const fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Finishes the configuration.
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }
}
