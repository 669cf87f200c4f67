use thiserror::Error;

/// Errors raised while loading theme data or parsing prop values.
///
/// Rendering itself never fails; these only surface at the loading boundary.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid length `{0}`, expected a number ending with 'px', 'rem' or '%'")]
    InvalidLength(String),

    #[error("invalid duration `{0}`, expected a number ending with 's' or 'ms'")]
    InvalidDuration(String),

    #[error("no bundled theme asset at \"{0}\"")]
    MissingAsset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_length_display() {
        let message = ThemeError::InvalidLength("12pt".into()).to_string();
        assert!(message.contains("12pt"));
        assert!(message.contains("'rem'"));
    }

    #[test]
    fn test_parse_error_converts_from_serde() {
        let error: ThemeError = serde_json::from_str::<u8>("nope").unwrap_err().into();
        assert!(error.to_string().starts_with("failed to parse theme data"));
    }
}
