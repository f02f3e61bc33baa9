use std::env;

use crate::error::{Error, Result};

pub const SOURCE_VAR: &str = "FLOWNET_SOURCE";
pub const SINK_VAR: &str = "FLOWNET_SINK";
pub const MAX_AUGMENTATIONS_VAR: &str = "FLOWNET_MAX_AUGMENTATIONS";

/// Settings for a batch run: which vertices are the terminals, how far the
/// flow loop may go, and where reports are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowConfig {
    pub source: String,
    pub sink: String,
    /// Upper bound on augmentations per network; `None` runs to convergence.
    pub max_augmentations: Option<usize>,
    /// Appended to the input file stem to name the report file.
    pub output_suffix: String,
}

impl Default for FlowConfig {
    fn default() -> Self {
        FlowConfig {
            source: "s".to_string(),
            sink: "t".to_string(),
            max_augmentations: None,
            output_suffix: "_output".to_string(),
        }
    }
}

impl FlowConfig {
    pub fn new(source: impl Into<String>, sink: impl Into<String>) -> Self {
        FlowConfig {
            source: source.into(),
            sink: sink.into(),
            ..Default::default()
        }
    }

    pub fn with_max_augmentations(mut self, limit: usize) -> Self {
        self.max_augmentations = Some(limit);
        self
    }

    pub fn with_output_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.output_suffix = suffix.into();
        self
    }

    /// Defaults overridden by `FLOWNET_SOURCE`, `FLOWNET_SINK` and
    /// `FLOWNET_MAX_AUGMENTATIONS`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = FlowConfig::default();
        if let Some(source) = lookup(SOURCE_VAR) {
            config.source = source;
        }
        if let Some(sink) = lookup(SINK_VAR) {
            config.sink = sink;
        }
        if let Some(raw) = lookup(MAX_AUGMENTATIONS_VAR) {
            let limit = raw
                .trim()
                .parse::<usize>()
                .map_err(|e| Error::config(MAX_AUGMENTATIONS_VAR, format!("{:?}: {}", raw, e)))?;
            config.max_augmentations = Some(limit);
        }
        Ok(config)
    }
}
