use crate::Mechanism::errors::MechError;
use regex::Regex;
use std::sync::OnceLock;

pub const COLON: &str = ":";
pub const SEMICOLON: &str = ";";

/// one reaction line of a mechanism file split into its parts
#[derive(Debug, Clone, PartialEq)]
pub struct MechanismLine {
    /// raw text as read from the file
    pub raw: String,
    /// 1-based line number in the file, the header is line 1
    pub line_no: usize,
    /// reactants, operators and products between the index column and ':'
    pub left_tokens: Vec<String>,
    /// rate coefficient between ':' and ';', tokens joined by single blanks
    pub rate: String,
}

impl MechanismLine {
    /// splits a reaction line on whitespace. The first token is the old reaction
    /// index and is dropped, ':' and ';' must stand alone exactly once each.
    pub fn parse(raw: &str, line_no: usize) -> Result<Self, MechError> {
        let tokens: Vec<&str> = raw.split_whitespace().collect();
        let colon = find_delimiter(&tokens, COLON, raw, line_no)?;
        let semicolon = find_delimiter(&tokens, SEMICOLON, raw, line_no)?;
        if semicolon < colon {
            return Err(MechError::malformed_line(
                line_no,
                raw,
                "';' delimiter stands before ':'",
            ));
        }
        if colon == 0 {
            return Err(MechError::malformed_line(
                line_no,
                raw,
                "no reaction index column before ':'",
            ));
        }
        Ok(Self {
            raw: raw.to_string(),
            line_no,
            left_tokens: tokens[1..colon].iter().map(|t| t.to_string()).collect(),
            rate: tokens[colon + 1..semicolon].join(" "),
        })
    }

    /// the reaction column of the reformatted file: every token followed by a blank, ':' included
    pub fn reaction_column(&self) -> String {
        let mut column = String::new();
        for token in self.left_tokens.iter().map(String::as_str).chain([COLON]) {
            column.push_str(token);
            column.push(' ');
        }
        column
    }

    /// species identifiers of the line with stoichiometric coefficients removed
    pub fn base_tokens(&self) -> Vec<&str> {
        self.left_tokens
            .iter()
            .map(|t| strip_stoichiometry(t))
            .collect()
    }
}

fn find_delimiter(
    tokens: &[&str],
    delimiter: &str,
    raw: &str,
    line_no: usize,
) -> Result<usize, MechError> {
    let mut positions = tokens
        .iter()
        .enumerate()
        .filter(|(_, t)| **t == delimiter)
        .map(|(i, _)| i);
    match (positions.next(), positions.next()) {
        (Some(i), None) => Ok(i),
        (None, _) => Err(MechError::malformed_line(
            line_no,
            raw,
            &format!("missing '{}' delimiter", delimiter),
        )),
        (Some(_), Some(_)) => Err(MechError::malformed_line(
            line_no,
            raw,
            &format!("more than one '{}' delimiter", delimiter),
        )),
    }
}

/// character offset of the first ':' in a raw line
pub fn colon_offset(raw: &str) -> Option<usize> {
    raw.chars().position(|c| c == ':')
}

fn stoichiometry_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9.]+").expect("stoichiometry pattern is valid"))
}

/// removes a leading stoichiometric coefficient (digits and '.'), "2.5NO2" -> "NO2".
/// A token made only of digits leaves an empty identifier.
pub fn strip_stoichiometry(token: &str) -> &str {
    match stoichiometry_regex().find(token) {
        Some(m) => &token[m.end()..],
        None => token,
    }
}
