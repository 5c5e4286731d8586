use thiserror::Error;

/// errors of the rate coefficient rewriter, positions are character offsets
/// into the expression after case folding
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("unbalanced parenthesis at position {0}")]
    UnbalancedParenthesis(usize),
    #[error("nested parenthesis inside rate function arguments at position {0}")]
    NestedParenthesis(usize),
    #[error("empty argument in rate function call opened at position {0}")]
    EmptyArgument(usize),
}

/// error types for mechanism processing
#[derive(Debug, Error)]
pub enum MechError {
    #[error("{0}")]
    Usage(String),
    #[error("mechanism file '{0}' has no header line")]
    EmptyMechanism(String),
    #[error("malformed line {line}: {reason}\n    {content}")]
    MalformedLine {
        line: usize,
        content: String,
        reason: String,
    },
    #[error("malformed rate coefficient on line {line}: {source}\n    {content}")]
    MalformedExpression {
        line: usize,
        content: String,
        #[source]
        source: ExpressionError,
    },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for MechError {
    fn from(e: serde_json::Error) -> Self {
        MechError::Config(e.to_string())
    }
}

impl MechError {
    pub fn malformed_line(line: usize, content: &str, reason: &str) -> Self {
        MechError::MalformedLine {
            line,
            content: content.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_line_and_content() {
        let e = MechError::malformed_line(7, "1 NO2 -> NO ARR2(1,2) ;", "missing ':' delimiter");
        let msg = e.to_string();
        assert!(msg.contains("line 7"));
        assert!(msg.contains("missing ':' delimiter"));
        assert!(msg.contains("1 NO2 -> NO ARR2(1,2) ;"));

        let e = MechError::MalformedExpression {
            line: 3,
            content: "x".to_string(),
            source: ExpressionError::UnbalancedParenthesis(4),
        };
        assert!(e.to_string().contains("unbalanced parenthesis at position 4"));
    }
}
