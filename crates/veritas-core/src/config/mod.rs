//! Configuration for every subsystem, loadable from TOML.
//!
//! All structs use `#[serde(default)]` so partial config files work: any
//! field omitted falls back to the value in [`defaults`].

pub mod defaults;

mod eval_config;
mod retrieval_config;
mod trust_config;

pub use eval_config::EvalConfig;
pub use retrieval_config::RetrievalConfig;
pub use trust_config::TrustConfig;

use serde::{Deserialize, Serialize};

/// Top-level configuration aggregating all subsystems.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VeritasConfig {
    pub retrieval: RetrievalConfig,
    pub trust: TrustConfig,
    pub eval: EvalConfig,
}

impl VeritasConfig {
    /// Parse a TOML config string. Missing sections and fields fall back
    /// to defaults.
    pub fn from_toml_str(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }
}
