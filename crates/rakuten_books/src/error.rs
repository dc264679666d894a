pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// The Errors that may occur when looking up a book.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    code: Option<i64>,
    source: Option<DynError>,
}

/// Types of errors that make up an [`Error`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A scraper was configured with an unusable value, such as an empty application id.
    InvalidConfiguration,
    /// The network call itself failed, raised by [`Transport`](crate::api::Transport)
    /// implementations.
    Transport,
    /// The provider could not be reached or answered with data that cannot be trusted.
    Provider,
}

impl Error {
    /// Creates a new [`Error`] based on the [`ErrorKind`] and message to describe the error.
    pub fn new<S: Into<String>>(kind: ErrorKind, message: S) -> Self {
        Self {
            kind,
            message: Some(message.into()),
            code: None,
            source: None,
        }
    }

    /// Wraps an existing error as the source of [`Error`].
    pub fn wrap<E>(kind: ErrorKind, source: E) -> Self
    where
        E: Into<DynError>,
    {
        Self {
            kind,
            message: None,
            code: None,
            source: Some(source.into()),
        }
    }

    /// Attaches a numeric code, such as an HTTP status, to the error.
    #[must_use]
    pub const fn with_code(mut self, code: Option<i64>) -> Self {
        self.code = code;
        self
    }

    /// Attaches the underlying cause of the error.
    #[must_use]
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Into<DynError>,
    {
        self.source = Some(source.into());
        self
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human readable message of the error, without the kind prefix or cause.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The numeric code carried by the error, if any.
    #[must_use]
    pub const fn code(&self) -> Option<i64> {
        self.code
    }

    pub(crate) fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::InvalidConfiguration, message)
    }

    pub(crate) fn provider<S: Into<String>>(message: S) -> Self {
        Self::new(ErrorKind::Provider, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            ErrorKind::InvalidConfiguration => f.write_str("Invalid configuration")?,
            ErrorKind::Transport => f.write_str("Transport error")?,
            ErrorKind::Provider => f.write_str("Data provider error")?,
        };

        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }

        if let Some(code) = self.code {
            write!(f, " (code {code})")?;
        }

        if let Some(cause) = &self.source {
            write!(f, ": caused by {cause}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| &**e as _)
    }
}
