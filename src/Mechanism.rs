/// error taxonomy of mechanism processing: malformed lines, malformed rate coefficients, I/O
pub mod errors;
/// Splits a mechanism line into the reaction part and the rate coefficient part.
/// The line looks like
/// `<old index> <reactants> -> <products> : <rate coefficient> ;`
/// where ':' and ';' are standalone tokens. The old index is dropped, the reactions
/// are renumbered on output. Leading stoichiometric coefficients are stripped from
/// species tokens for the species list ("2.5NO2" -> "NO2").
pub mod line_tokenizer;
/// table of rate coefficient functions whose arguments are converted to double precision
pub mod rate_functions;
/// Rate coefficient rewriter
///
///  # Examples
/// ```
/// use mechprep::Mechanism::rate_normalizer::RateNormalizer;
/// let normalizer = RateNormalizer::new();
/// assert_eq!(normalizer.normalize("ARR2(4.2,200.)").unwrap(), "ARR2(4.2D0,200.D0)");
/// assert_eq!(normalizer.normalize("1.2e-11").unwrap(), "1.2D-11");
/// ```
pub mod rate_normalizer;
/// reformatting pass: renumbered reactions, aligned reaction column, double precision rates
pub mod mech_format;
/// species extraction pass producing the initial species file
pub mod species;

#[cfg(test)]
mod mechanism_tests;
