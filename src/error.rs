//! Error type shared by configuration, logging and the runtime.

pub type VinylResult<T> = Result<T, VinylError>;

#[derive(thiserror::Error, Debug)]
pub enum VinylError {
    #[error("config error: {0}")]
    Config(#[from] ::config::ConfigError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("logging error: {0}")]
    Logging(String),

    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl VinylError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            VinylError::validation("x")
                .to_string()
                .contains("validation error:")
        );
        assert!(VinylError::logging("x").to_string().contains("logging error:"));
    }

    #[test]
    fn toml_errors_are_serialize_errors() {
        let err: VinylError = toml::to_string(&1u8).unwrap_err().into();
        assert!(matches!(err, VinylError::Serialize(_)));
        assert!(err.to_string().starts_with("serialize error:"));
    }

    #[test]
    fn io_errors_convert_transparently() {
        let err: VinylError = std::io::Error::other("disk gone").into();
        assert_eq!(err.to_string(), "disk gone");
    }
}
