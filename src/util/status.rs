use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Code {
    Ok,
    InvalidArgument,
    Corruption,
    NotSupported,
    ParseError,
    IOError,
}

#[derive(Debug, Clone)]
pub struct Status {
    code: Code,
    message: Option<String>,
}

impl Status {
    pub fn ok() -> Self {
        Status {
            code: Code::Ok,
            message: None,
        }
    }

    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Status {
            code: Code::InvalidArgument,
            message: Some(msg.into()),
        }
    }

    /// Truncated or structurally invalid encoded input.
    pub fn corruption(msg: impl Into<String>) -> Self {
        Status {
            code: Code::Corruption,
            message: Some(msg.into()),
        }
    }

    /// Encoded format version that this build cannot read.
    pub fn not_supported(msg: impl Into<String>) -> Self {
        Status {
            code: Code::NotSupported,
            message: Some(msg.into()),
        }
    }

    /// A stored attribute that does not parse as its declared type.
    pub fn parse_error(msg: impl Into<String>) -> Self {
        Status {
            code: Code::ParseError,
            message: Some(msg.into()),
        }
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Status {
            code: Code::IOError,
            message: Some(msg.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.code == Code::Ok
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.code == Code::InvalidArgument
    }

    pub fn is_corruption(&self) -> bool {
        self.code == Code::Corruption
    }

    pub fn is_not_supported(&self) -> bool {
        self.code == Code::NotSupported
    }

    pub fn is_parse_error(&self) -> bool {
        self.code == Code::ParseError
    }

    pub fn is_io_error(&self) -> bool {
        self.code == Code::IOError
    }

    pub fn code(&self) -> &Code {
        &self.code
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{:?}: {}", self.code, msg),
            None => write!(f, "{:?}", self.code),
        }
    }
}

impl std::error::Error for Status {}

impl From<std::io::Error> for Status {
    fn from(err: std::io::Error) -> Self {
        Status::io_error(err.to_string())
    }
}

impl From<serde_json::Error> for Status {
    fn from(err: serde_json::Error) -> Self {
        Status::invalid_argument(format!("invalid table schema: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, Status>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_ok() {
        let status = Status::ok();
        assert!(status.is_ok());
        assert_eq!(status.code(), &Code::Ok);
    }

    #[test]
    fn test_status_predicates() {
        assert!(Status::invalid_argument("bad name").is_invalid_argument());
        assert!(Status::corruption("truncated").is_corruption());
        assert!(Status::not_supported("version 2").is_not_supported());
        assert!(Status::parse_error("not a long").is_parse_error());
        assert!(!Status::parse_error("not a long").is_corruption());
    }

    #[test]
    fn test_status_display() {
        let status = Status::not_supported("version 1");
        assert_eq!(status.to_string(), "NotSupported: version 1");
        assert_eq!(status.message(), Some("version 1"));
    }

    #[test]
    fn test_status_from_serde_json() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let status = Status::from(err);
        assert!(status.is_invalid_argument());
    }
}
