//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Formatter Switchboard
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// The code style slot is owned by something that is neither the host
    /// implementation nor one of our proxies
    #[error(
        "Code style service conflict in session '{session}', another formatter plugin is probably installed: {found}"
    )]
    RegistryConflict {
        /// Session whose slot is occupied
        session: String,
        /// Identity of the unexpected occupant
        found: String,
    },

    /// No override variant (or engine) is compatible with the running host
    #[error("Unsupported capability: {message}")]
    UnsupportedCapability {
        /// Description of what could not be satisfied
        message: String,
    },

    /// The delegating proxy could not be built
    #[error("Proxy construction failed: {message}")]
    ConstructionFailure {
        /// Description of the construction failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Infrastructure operation error
    #[error("Infrastructure error: {message}")]
    Infrastructure {
        /// Description of the infrastructure error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

// Switchboard error creation methods
impl Error {
    /// Create a registry conflict error
    pub fn registry_conflict<S: Into<String>, F: Into<String>>(session: S, found: F) -> Self {
        Self::RegistryConflict {
            session: session.into(),
            found: found.into(),
        }
    }

    /// Create an unsupported capability error
    pub fn unsupported_capability<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedCapability {
            message: message.into(),
        }
    }

    /// Create a proxy construction failure
    pub fn construction_failure<S: Into<String>>(message: S) -> Self {
        Self::ConstructionFailure {
            message: message.into(),
        }
    }

    /// True when the error means another extension owns the slot
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::RegistryConflict { .. })
    }
}

// I/O and configuration error creation methods
impl Error {
    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an infrastructure error
    pub fn infrastructure<S: Into<String>>(message: S) -> Self {
        Self::Infrastructure {
            message: message.into(),
            source: None,
        }
    }
}
