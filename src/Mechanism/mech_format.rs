//! Reformatting of a mechanism file into the standard layout:
//! `{N.}` marker, reaction column of uniform width, double precision rate coefficient, ` ;`.
//!
//! The column width depends on the widest line of the whole file, so all lines
//! are tokenized before the first one is emitted.
use crate::Mechanism::errors::MechError;
use crate::Mechanism::line_tokenizer::{MechanismLine, colon_offset};
use crate::Mechanism::rate_normalizer::RateNormalizer;
use crate::Utils::load_from_file::MechanismSource;
use crate::mech_config::MechConfig;
use log::debug;

/// widths shared by all lines of one output file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatContext {
    pub marker_width: usize,
    pub column_width: usize,
}

impl FormatContext {
    /// column width = widest ':' offset over all reaction lines + padding
    pub fn scan(lines: &[MechanismLine], config: &MechConfig) -> Self {
        let widest = lines
            .iter()
            .filter_map(|l| colon_offset(&l.raw))
            .max()
            .unwrap_or(0);
        Self {
            marker_width: config.reaction_marker_width,
            column_width: widest + config.column_padding,
        }
    }
}

pub fn reaction_marker(reaction: usize) -> String {
    format!("{{{}.}}", reaction)
}

/// one output line for reaction number `reaction`
pub fn reformat_line(
    line: &MechanismLine,
    reaction: usize,
    ctx: &FormatContext,
    normalizer: &RateNormalizer,
) -> Result<String, MechError> {
    let rate = normalizer
        .normalize(&line.rate)
        .map_err(|source| MechError::MalformedExpression {
            line: line.line_no,
            content: line.raw.clone(),
            source,
        })?;
    Ok(format!(
        "{:<mw$}{:<cw$}{} ;\n",
        reaction_marker(reaction),
        line.reaction_column(),
        rate,
        mw = ctx.marker_width,
        cw = ctx.column_width
    ))
}

/// Renders the reformatted document: header copied as is, reactions renumbered from 1.
pub fn reformat_mechanism(
    source: &MechanismSource,
    config: &MechConfig,
) -> Result<String, MechError> {
    let lines = source.parse_lines()?;
    let ctx = FormatContext::scan(&lines, config);
    let normalizer = RateNormalizer::from_config(config);

    let mut out = String::with_capacity(source.header.len() + lines.len() * ctx.column_width * 2);
    out.push_str(&source.header);
    out.push('\n');
    for (i, line) in lines.iter().enumerate() {
        debug!("{}", line.raw);
        out.push_str(&reformat_line(line, i + 1, &ctx, &normalizer)?);
    }
    Ok(out)
}
