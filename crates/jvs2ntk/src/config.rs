//! Configuration for the converter.
//!
//! Loaded from `--config <path>` when given, otherwise from
//! `.jvs2ntk/config.toml` in the working directory if that file exists.
//!
//! Example config.toml:
//! ```toml
//! [domain]
//! usings = ["using System;", "using Olf.NetToolkit;"]
//! close_namespace = true
//!
//! [general]
//! close_namespace = false
//! ```

use jvs2ntk_rewrite::{ConversionMode, Pipeline};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_DIR: &str = ".jvs2ntk";
pub const CONFIG_FILE: &str = "config.toml";

/// Overrides for one conversion mode. Unset fields keep the mode's defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModeConfig {
    /// Lines written before the converted body, replacing the default prelude.
    pub usings: Option<Vec<String>>,
    /// Whether to append a closing `}` line.
    pub close_namespace: Option<bool>,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub general: ModeConfig,
    pub domain: ModeConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl Config {
    /// Load the explicit config file, or the project config under `root`.
    ///
    /// A missing project config yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_file(path);
        }
        let path = root.join(CONFIG_DIR).join(CONFIG_FILE);
        if path.is_file() {
            Self::load_file(&path)
        } else {
            debug!(path = %path.display(), "no project config, using defaults");
            Ok(Self::default())
        }
    }

    fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn for_mode(&self, mode: ConversionMode) -> &ModeConfig {
        match mode {
            ConversionMode::General => &self.general,
            ConversionMode::Domain => &self.domain,
        }
    }

    /// The mode's default pipeline with this config's overrides applied.
    pub fn pipeline(&self, mode: ConversionMode) -> Pipeline {
        let section = self.for_mode(mode);
        let mut pipeline = Pipeline::new(mode);
        if let Some(usings) = &section.usings {
            pipeline = pipeline.with_prelude(usings.clone());
        }
        if let Some(close) = section.close_namespace {
            pipeline = pipeline.with_closing_brace(close);
        }
        pipeline
    }
}
