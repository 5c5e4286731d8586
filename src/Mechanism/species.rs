//! Collecting the unique species of a mechanism and rendering a first version of its
//! species file. Species keep the order in which they first appear.
use crate::Mechanism::errors::MechError;
use crate::Mechanism::line_tokenizer::MechanismLine;
use crate::Utils::load_from_file::MechanismSource;
use crate::mech_config::MechConfig;
use log::{info, warn};
use prettytable::{Table, row};
use std::collections::HashSet;

/// ordered set of species names
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeciesSet {
    species: Vec<String>,
    seen: HashSet<String>,
}

impl SpeciesSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// collects base tokens of all lines, first seen order
    pub fn from_lines(lines: &[MechanismLine]) -> Self {
        let mut set = Self::new();
        for line in lines {
            for (token, base) in line.left_tokens.iter().zip(line.base_tokens()) {
                if base.is_empty() {
                    warn!(
                        "line {}: token '{}' has no species name after its stoichiometric coefficient",
                        line.line_no, token
                    );
                }
                set.insert(base);
            }
        }
        set
    }

    pub fn insert(&mut self, name: &str) -> bool {
        if self.seen.insert(name.to_string()) {
            self.species.push(name.to_string());
            true
        } else {
            false
        }
    }

    pub fn remove(&mut self, name: &str) -> bool {
        if self.seen.remove(name) {
            self.species.retain(|s| s != name);
            true
        } else {
            false
        }
    }

    #[cfg(test)]
    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.species
    }

    pub fn remove_operators(&mut self, operators: &[String]) {
        for op in operators {
            self.remove(op);
        }
    }

    /// drops the species that are not part of the species file (bath gas, water ...)
    pub fn remove_common(&mut self, common: &[String]) -> Vec<String> {
        let mut removed = Vec::new();
        for name in common {
            if self.remove(name) {
                info!("removing {} from list ...", name);
                removed.push(name.clone());
            }
        }
        removed
    }

    pub fn print_table(&self) {
        let mut table = Table::new();
        table.add_row(row!["#", "Species"]);
        for (i, name) in self.species.iter().enumerate() {
            table.add_row(row![i + 1, name]);
        }
        table.printstd();
    }
}

/// species identifier used in the generated code: the name without parentheses
pub fn species_identifier(name: &str) -> String {
    name.replace(['(', ')'], "")
}

/// two left-justified columns: name and identifier
pub fn render_species_file(species: &SpeciesSet, width: usize) -> String {
    let mut out = String::new();
    for name in species.as_slice() {
        out.push_str(&format!(
            "{:<w$}  {:<w$}\n",
            name,
            species_identifier(name),
            w = width
        ));
    }
    out
}

/// Unique species of a mechanism without operators and common species.
pub fn initial_species(
    source: &MechanismSource,
    config: &MechConfig,
) -> Result<SpeciesSet, MechError> {
    let lines = source.parse_lines()?;
    let mut species = SpeciesSet::from_lines(&lines);
    species.remove_operators(&config.operator_tokens);
    info!("There are {} unique species in the mechanism", species.len());
    species.print_table();
    species.remove_common(&config.common_species);
    Ok(species)
}
