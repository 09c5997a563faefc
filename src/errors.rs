use std::fmt;

pub type Result<T> = std::result::Result<T, IndexError>;

/// Details about what went wrong, kept as strings because the interesting
/// consumers are humans reading `navtree-tool` output and logs.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorDetails {
    /// The file (or other source) being processed, when there is one.
    pub source: Option<String>,
    /// Stringified version of the lower level error.
    pub message: String,
}

impl ErrorDetails {
    pub fn new(message: impl Into<String>) -> Self {
        ErrorDetails {
            source: None,
            message: message.into(),
        }
    }

    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }
}

/// Failure while building an index.  Lookups never produce these; a lookup
/// miss is reported as `None` or an empty slice.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexError {
    /// A config or navtree file could not be read.
    Io(ErrorDetails),
    /// The bytes were read but were not the JSON we expected.
    Parse(ErrorDetails),
    /// Structurally valid input that still can't be turned into an index, like
    /// a navtree row with a numeric name or duplicate sibling names.
    BadInput(ErrorDetails),
}

impl IndexError {
    pub fn details(&self) -> &ErrorDetails {
        match self {
            IndexError::Io(d) | IndexError::Parse(d) | IndexError::BadInput(d) => d,
        }
    }

    /// Attach the path of the file being processed if none was recorded yet.
    pub fn in_source(self, source: &str) -> Self {
        let attach = |d: ErrorDetails| {
            if d.source.is_some() {
                d
            } else {
                d.with_source(source)
            }
        };
        match self {
            IndexError::Io(d) => IndexError::Io(attach(d)),
            IndexError::Parse(d) => IndexError::Parse(attach(d)),
            IndexError::BadInput(d) => IndexError::BadInput(attach(d)),
        }
    }

    pub fn bad_input(message: impl Into<String>) -> Self {
        IndexError::BadInput(ErrorDetails::new(message))
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            IndexError::Io(_) => "I/O error",
            IndexError::Parse(_) => "parse error",
            IndexError::BadInput(_) => "bad input",
        };
        let details = self.details();
        match &details.source {
            Some(source) => write!(f, "{} in [{}]: {}", kind, source, details.message),
            None => write!(f, "{}: {}", kind, details.message),
        }
    }
}

impl std::error::Error for IndexError {}

impl From<std::io::Error> for IndexError {
    fn from(err: std::io::Error) -> IndexError {
        IndexError::Io(ErrorDetails::new(err.to_string()))
    }
}

// JSON parse errors are data problems, not I/O problems.
impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> IndexError {
        if err.is_io() {
            return IndexError::Io(ErrorDetails::new(err.to_string()));
        }
        IndexError::Parse(ErrorDetails::new(err.to_string()))
    }
}

impl From<url::ParseError> for IndexError {
    fn from(err: url::ParseError) -> IndexError {
        IndexError::BadInput(ErrorDetails::new(format!("bad URL: {}", err)))
    }
}
