use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternError {
    #[error("device pattern is empty")]
    Empty,
    #[error("invalid device pattern: {0}")]
    Invalid(#[from] regex::Error),
}

/// Compiles a device pattern into a regular expression.
///
/// An empty pattern is rejected: it would otherwise match every device,
/// while an empty pattern in the control type list marks the fallback entry.
pub fn compile_pattern(pattern: &str) -> Result<Regex, PatternError> {
    if pattern.is_empty() {
        return Err(PatternError::Empty);
    }
    Ok(Regex::new(pattern)?)
}

/// A compiled device pattern. Matching never fails.
#[derive(Debug, Clone)]
pub enum DeviceMatcher {
    Regex(Regex),
    /// Matches nothing. Used for empty and malformed patterns.
    Nothing,
}

impl DeviceMatcher {
    pub fn new(pattern: &str) -> Self {
        match compile_pattern(pattern) {
            Ok(regex) => Self::Regex(regex),
            Err(PatternError::Empty) => Self::Nothing,
            Err(e) => {
                log::debug!("device pattern \"{pattern}\" matches nothing: {e}");
                Self::Nothing
            }
        }
    }

    pub fn is_match(&self, device: &str) -> bool {
        match self {
            Self::Regex(regex) => regex.is_match(device),
            Self::Nothing => false,
        }
    }
}
