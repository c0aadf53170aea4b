use thiserror::Error;

/// Every failure an exercise can report back to its console loop.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("a record with key '{0}' already exists")]
    DuplicateKey(String),

    #[error("no record found for '{0}'")]
    NotFound(String),

    #[error("{value} {scale} is below absolute zero")]
    PhysicalImpossibility { value: f64, scale: &'static str },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0} is empty")]
    EmptyInput(&'static str),

    #[error("could not parse '{input}' as {expected}")]
    Parse { input: String, expected: &'static str },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation { field, reason: reason.into() }
    }

    pub fn parse(input: &str, expected: &'static str) -> Self {
        Self::Parse { input: input.to_string(), expected }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_input() {
        let err = Error::validation("phone", "expected 9-15 digits");
        assert_eq!(err.to_string(), "invalid phone: expected 9-15 digits");

        let err = Error::PhysicalImpossibility { value: -300.0, scale: "Celsius" };
        assert_eq!(err.to_string(), "-300 Celsius is below absolute zero");

        let err = Error::parse("abc", "a number");
        assert_eq!(err.to_string(), "could not parse 'abc' as a number");
    }
}
