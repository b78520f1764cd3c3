//! Unified error type.

use std::fmt;
use std::io;

/// The error type returned by ruta's fallible operations.
///
/// Only two things can fail, and both are fatal to the setup pass: scanning
/// the routes directory and loading a module's exports. Everything that is
/// recoverable (a file outside the routes root, a middleware module without a
/// `default` export) is a warning on the diagnostics channel, not an `Error`.
#[derive(Debug)]
pub enum Error {
    /// The routes directory (or one of its subdirectories) could not be read.
    Scan {
        path: String,
        source: io::Error,
    },
    /// An [`ExportLoader`](crate::ExportLoader) failed to load a module.
    Load {
        path: String,
        detail: String,
    },
}

impl Error {
    pub(crate) fn scan(path: impl Into<String>, source: io::Error) -> Self {
        Self::Scan { path: path.into(), source }
    }

    /// Constructs the error an [`ExportLoader`](crate::ExportLoader) reports
    /// when it cannot produce the exports of `path`.
    pub fn load(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::Load { path: path.into(), detail: detail.into() }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scan { path, source } => write!(f, "scan {path}: {source}"),
            Self::Load { path, detail } => write!(f, "load {path}: {detail}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scan { source, .. } => Some(source),
            Self::Load { .. } => None,
        }
    }
}
