//! Error extension utilities
//!
//! Context extension methods that turn foreign errors into `rcs_domain`
//! errors.

use rcs_domain::error::{Error, Result};
use std::fmt;
use std::path::Path;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use rcs_infrastructure::error_ext::ErrorContext;
///
/// let addr: SocketAddr = text.parse().config_context("invalid server address")?;
/// let body = serde_json::to_string(&value).serialization_context("cannot encode")?;
/// ```
pub trait ErrorContext<T> {
    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;

    /// Add context for serialization operations
    fn serialization_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }

    fn serialization_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
        Self: Sized,
    {
        self.map_err(|err| Error::serialization(format!("{context}: {err}")))
    }
}

/// Path context for I/O results
pub trait IoContext<T> {
    /// Attach the path being accessed, producing [`Error::File`]
    fn io_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|err| Error::file(path, err))
    }
}
