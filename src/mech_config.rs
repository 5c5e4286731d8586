//! # Mechanism Configuration Module
//!
//! ## Purpose
//! Keeps the tables and layout constants of the mechanism tools in one place.
//! Defaults reproduce the fixed mechanism conventions; a `mech_config.json` in the
//! mechanisms root directory can override them.
//!
//! ## Configuration Format
//! ```json
//! {
//!   "mechs_dir": "./mechs",
//!   "rate_function_prefixes": ["TERM", "TYP3", "TYP2", "PHO2", "ERCO", "TJPL", " ARR", "ARR2"],
//!   "reserved_identifiers": ["AIR", "TEMP", "H2Oz"],
//!   "operator_tokens": ["+", "-", "->", "hv", "="],
//!   "common_species": ["O2", "H2O", "M", "CO2", "H2", "N2"],
//!   "reaction_marker_width": 8,
//!   "column_padding": 10,
//!   "species_column_width": 12
//! }
//! ```
//! Missing keys fall back to their defaults.

use crate::Mechanism::errors::MechError;
use crate::Mechanism::rate_functions::{
    PREFIX_LEN, default_prefixes, default_reserved_identifiers,
};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE_NAME: &str = "mech_config.json";

/// Configuration of the mechanism tools.
///
/// # Fields
/// * `mechs_dir` - root directory holding one sub-directory per mechanism
/// * `rate_function_prefixes` - 4-character windows recognizing rate function calls
/// * `reserved_identifiers` - rate function arguments never rewritten
/// * `operator_tokens` - reaction operators removed from the species list
/// * `common_species` - species left out of the initial species file
/// * `reaction_marker_width` - width of the `{N.}` column
/// * `column_padding` - added to the widest ':' offset for the reaction column
/// * `species_column_width` - width of both columns of the species file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MechConfig {
    pub mechs_dir: String,
    pub rate_function_prefixes: Vec<String>,
    pub reserved_identifiers: Vec<String>,
    pub operator_tokens: Vec<String>,
    pub common_species: Vec<String>,
    pub reaction_marker_width: usize,
    pub column_padding: usize,
    pub species_column_width: usize,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for MechConfig {
    fn default() -> Self {
        Self {
            mechs_dir: "./mechs".to_string(),
            rate_function_prefixes: default_prefixes(),
            reserved_identifiers: default_reserved_identifiers(),
            operator_tokens: strings(&["+", "-", "->", "hv", "="]),
            common_species: strings(&["O2", "H2O", "M", "CO2", "H2", "N2"]),
            reaction_marker_width: 8,
            column_padding: 10,
            species_column_width: 12,
        }
    }
}

impl MechConfig {
    /// Loads configuration from a JSON file, defaults if the file does not exist.
    pub fn load(config_file: &Path) -> Result<Self, MechError> {
        if !config_file.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(config_file)?;
        let config: MechConfig = serde_json::from_str(&content)?;
        config.validate()?;
        info!("Using configuration from {}", config_file.display());
        Ok(config)
    }

    /// Loads `mech_config.json` from the default mechanisms root.
    pub fn from_default_location() -> Result<Self, MechError> {
        let root = Self::default().mechs_dir;
        Self::load(&Path::new(&root).join(CONFIG_FILE_NAME))
    }

    pub fn validate(&self) -> Result<(), MechError> {
        for prefix in &self.rate_function_prefixes {
            if prefix.chars().count() != PREFIX_LEN {
                return Err(MechError::Config(format!(
                    "rate function prefix '{}' must be exactly {} characters",
                    prefix, PREFIX_LEN
                )));
            }
        }
        Ok(())
    }

    pub fn mech_dir(&self, mech_name: &str) -> PathBuf {
        Path::new(&self.mechs_dir).join(mech_name)
    }
}
