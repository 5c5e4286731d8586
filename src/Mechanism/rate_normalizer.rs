//! Rewriting of rate coefficient expressions into double precision form.
//!
//! The steps run in a fixed order, each one relies on the previous one:
//! 1) case folding (photolysis rates starting with `kphoto` are exempt)
//! 2) repair of the humidity variable `H2OZ` -> `H2Oz`
//! 3) scientific notation markers `E` -> `D`
//! 4) arguments of at most two recognized rate function calls get the `D0` suffix
//!
//! The call recognition assumes the mechanism format: no parenthesis pair that is not a
//! rate function call stands left of the first call, and there are at most two calls per line.
use crate::Mechanism::errors::ExpressionError;
use crate::Mechanism::rate_functions::{
    PREFIX_LEN, default_prefixes, default_reserved_identifiers,
};
use crate::mech_config::MechConfig;
use log::debug;

/// photolysis rate expressions carry mixed case content and are not folded
pub const PHOTOLYSIS_MARKER: &str = "kphoto";
/// exponent marker of double precision literals
pub const DOUBLE_MARKER: char = 'D';
/// suffix turning a decimal constant into a double precision one
pub const DOUBLE_SUFFIX: &str = "D0";
/// number of parenthesis pairs inspected for rate function calls
pub const MAX_CALLS: usize = 2;

const HUMIDITY_FOLDED: &str = "H2OZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// copying plain text, looking for the next opening parenthesis
    ScanningPrefix,
    /// collecting the argument list of a recognized call
    InsideCall,
    /// copying a parenthesized region that is not a recognized call
    PassThrough,
}

/// struct for the rate coefficient rewriter with its tables of recognized
/// function prefixes and reserved identifiers
#[derive(Debug, Clone)]
pub struct RateNormalizer {
    prefixes: Vec<String>,
    reserved: Vec<String>,
}

impl Default for RateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RateNormalizer {
    pub fn new() -> Self {
        Self {
            prefixes: default_prefixes(),
            reserved: default_reserved_identifiers(),
        }
    }

    pub fn with_tables(prefixes: Vec<String>, reserved: Vec<String>) -> Self {
        Self { prefixes, reserved }
    }

    pub fn from_config(config: &MechConfig) -> Self {
        Self::with_tables(
            config.rate_function_prefixes.clone(),
            config.reserved_identifiers.clone(),
        )
    }

    /// rewrites one rate coefficient expression
    pub fn normalize(&self, rate: &str) -> Result<String, ExpressionError> {
        let folded = fold_case(rate);
        let repaired = repair_humidity(folded);
        let chars: Vec<char> = convert_exponent_markers(&repaired).chars().collect();
        let normalized = self.rewrite_calls(&chars)?;
        debug!("rate coefficient '{}' -> '{}'", rate, normalized);
        Ok(normalized)
    }

    /// true if the 4-character window matches one of the recognized prefixes
    pub fn is_rate_function(&self, window: &str) -> bool {
        self.prefixes.iter().any(|p| p == window)
    }

    /// rewrites a single argument of a recognized call, the argument is classified
    /// as written, blanks included
    pub fn rewrite_argument(&self, arg: &str) -> String {
        if has_double_marker(arg) || self.reserved.iter().any(|r| r == arg) {
            arg.to_string()
        } else {
            format!("{}{}", arg, DOUBLE_SUFFIX)
        }
    }

    fn rewrite_arguments(&self, args: &str, open_at: usize) -> Result<String, ExpressionError> {
        let mut rewritten = Vec::new();
        for arg in args.split(',') {
            if arg.trim().is_empty() {
                return Err(ExpressionError::EmptyArgument(open_at));
            }
            rewritten.push(self.rewrite_argument(arg));
        }
        Ok(rewritten.join(","))
    }

    // the lookbehind window never reaches back past the end of the previous pair
    fn is_call_at(&self, chars: &[char], segment_start: usize, open_at: usize) -> bool {
        if open_at < segment_start + PREFIX_LEN {
            return false;
        }
        let window: String = chars[open_at - PREFIX_LEN..open_at].iter().collect();
        self.is_rate_function(&window)
    }

    fn rewrite_calls(&self, chars: &[char]) -> Result<String, ExpressionError> {
        let mut out = String::with_capacity(chars.len() + 4 * DOUBLE_SUFFIX.len());
        let mut state = ScanState::ScanningPrefix;
        let mut args = String::new();
        let mut segment_start = 0;
        let mut pairs_seen = 0;
        let mut open_at = 0;
        let mut depth = 0usize;

        for (i, &c) in chars.iter().enumerate() {
            match state {
                ScanState::ScanningPrefix => match c {
                    '(' => {
                        out.push(c);
                        open_at = i;
                        if pairs_seen < MAX_CALLS && self.is_call_at(chars, segment_start, i) {
                            args.clear();
                            state = ScanState::InsideCall;
                        } else {
                            depth = 1;
                            state = ScanState::PassThrough;
                        }
                    }
                    ')' => return Err(ExpressionError::UnbalancedParenthesis(i)),
                    _ => out.push(c),
                },
                ScanState::InsideCall => match c {
                    '(' => return Err(ExpressionError::NestedParenthesis(i)),
                    ')' => {
                        out.push_str(&self.rewrite_arguments(&args, open_at)?);
                        out.push(c);
                        pairs_seen += 1;
                        segment_start = i + 1;
                        state = ScanState::ScanningPrefix;
                    }
                    _ => args.push(c),
                },
                ScanState::PassThrough => {
                    out.push(c);
                    if c == '(' {
                        depth += 1;
                    } else if c == ')' {
                        depth -= 1;
                        if depth == 0 {
                            pairs_seen += 1;
                            segment_start = i + 1;
                            state = ScanState::ScanningPrefix;
                        }
                    }
                }
            }
        }

        if state != ScanState::ScanningPrefix {
            return Err(ExpressionError::UnbalancedParenthesis(open_at));
        }
        Ok(out)
    }
}

/// upper-cases everything except photolysis rates
pub fn fold_case(rate: &str) -> String {
    if rate.starts_with(PHOTOLYSIS_MARKER) {
        rate.to_string()
    } else {
        rate.to_uppercase()
    }
}

/// restores the spelling `H2Oz` of the first occurrence spoiled by case folding
pub fn repair_humidity(mut rate: String) -> String {
    if let Some(i) = rate.find(HUMIDITY_FOLDED) {
        let last = i + HUMIDITY_FOLDED.len() - 1;
        rate.replace_range(last..last + 1, "z");
    }
    rate
}

/// turns `E` into `D` where it is the exponent marker of a numeric literal:
/// preceded by a digit or '.', followed by a digit, '+' or '-'
pub fn convert_exponent_markers(rate: &str) -> String {
    let chars: Vec<char> = rate.chars().collect();
    let mut converted = String::with_capacity(rate.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == 'E' && is_exponent_position(&chars, i) {
            converted.push(DOUBLE_MARKER);
        } else {
            converted.push(c);
        }
    }
    converted
}

fn is_exponent_position(chars: &[char], i: usize) -> bool {
    if i == 0 {
        return false;
    }
    let before = chars[i - 1];
    let Some(&after) = chars.get(i + 1) else {
        return false;
    };
    (before.is_ascii_digit() || before == '.')
        && (after.is_ascii_digit() || after == '+' || after == '-')
}

// a 'D' anywhere after the first character is taken as an exponent marker
fn has_double_marker(arg: &str) -> bool {
    let after_start = |i: usize| i > 0;
    arg.find(DOUBLE_MARKER).is_some_and(after_start)
        || arg.find(DOUBLE_SUFFIX).is_some_and(after_start)
}
