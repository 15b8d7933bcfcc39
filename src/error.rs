use std::fmt;

/// Central error types for the El Ensueño site
#[derive(Debug)]
pub enum AppError {
    /// A content table references an image that is not in the manifest
    MissingImage(String),
    /// `site.toml` could not be parsed
    Config(toml::de::Error),
    /// The image manifest could not be parsed
    Manifest(serde_json::Error),
    /// Validation error (e.g. departure before arrival)
    Validation(String),
    /// Resource not found (e.g. unknown suite slug)
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AppError::MissingImage(path) => write!(f, "Missing image for path: {}", path),
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Manifest(e) => write!(f, "Image manifest error: {}", e),
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Manifest(e) => Some(e),
            _ => None,
        }
    }
}

// Conversions from other error types
impl From<toml::de::Error> for AppError {
    fn from(e: toml::de::Error) -> Self {
        AppError::Config(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Manifest(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_image_message() {
        let e = AppError::MissingImage("/images/nope.webp".to_string());
        assert_eq!(e.to_string(), "Missing image for path: /images/nope.webp");
    }

    #[test]
    fn test_config_error_has_source() {
        let parse: Result<toml::Value, _> = toml::from_str("= broken");
        let e = AppError::from(parse.unwrap_err());
        assert!(std::error::Error::source(&e).is_some());
        assert!(e.to_string().starts_with("Configuration error"));
    }
}
