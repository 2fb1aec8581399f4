//! Line-oriented reputation file loader.
//!
//! One value per line. Line terminators (`\n` or `\r\n`) and surrounding
//! whitespace are stripped. Blank lines are only tolerated at the end of the
//! file; a blank line followed by more values is a parse error. Any other
//! line must be a floating-point literal. Domain checks (negative values,
//! zero total) belong to
//! [`ReputationDistribution`](crate::types::ReputationDistribution).

use std::path::Path;

use tracing::{debug, info};

use crate::error::LoadError;

/// Parse the contents of a reputation file.
///
/// ```
/// use repute_core::loader::parse_reputations;
/// let values = parse_reputations("1.5\r\n2\n3e1\n\n").unwrap();
/// assert_eq!(values, vec![1.5, 2.0, 30.0]);
/// assert!(parse_reputations("1\n\n2\n").is_err());
/// ```
pub fn parse_reputations(text: &str) -> Result<Vec<f64>, LoadError> {
    let mut values = Vec::new();
    let mut first_blank = None;
    for (index, raw) in text.lines().enumerate() {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            first_blank.get_or_insert(index + 1);
            continue;
        }
        if let Some(line) = first_blank {
            return Err(LoadError::Parse {
                line,
                content: String::new(),
            });
        }
        let value = trimmed.parse::<f64>().map_err(|_| LoadError::Parse {
            line: index + 1,
            content: trimmed.to_string(),
        })?;
        values.push(value);
    }
    debug!(count = values.len(), "parsed reputation values");
    Ok(values)
}

/// Read and parse a reputation file from disk.
pub fn load_reputations(path: impl AsRef<Path>) -> Result<Vec<f64>, LoadError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let values = parse_reputations(&text)?;
    info!(path = %path.display(), count = values.len(), "loaded reputation file");
    Ok(values)
}
