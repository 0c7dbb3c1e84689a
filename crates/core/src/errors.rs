use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("unsupported category: {0}")]
    UnsupportedCategory(String),
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("catalog failure: {0}")]
    Catalog(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable class name used in structured command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(_) => "domain_validation",
            Self::Catalog(_) => "catalog_input",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Domain(_) => "The build could not be assembled. Check the selected parts.",
            Self::Catalog(_) => "The catalog could not be read. Check the snapshot file.",
            Self::Configuration(_) => "The configuration is invalid. Run `rigsmith config`.",
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::{ApplicationError, DomainError};

    #[test]
    fn domain_error_maps_to_domain_validation_class() {
        let error =
            ApplicationError::from(DomainError::UnsupportedCategory("sound_card".to_owned()));

        assert_eq!(error.error_class(), "domain_validation");
        assert_eq!(error.to_string(), "unsupported category: sound_card");
    }

    #[test]
    fn catalog_error_has_user_safe_message() {
        let error = ApplicationError::Catalog("unexpected end of input".to_owned());

        assert_eq!(error.error_class(), "catalog_input");
        assert_eq!(
            error.user_message(),
            "The catalog could not be read. Check the snapshot file."
        );
    }
}
