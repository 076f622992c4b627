//! Errors of the command-line program.

use displaydoc::Display;
use std::{io, path::PathBuf};
use thiserror::Error;

/// All kinds of errors the program may report.
#[derive(Debug, Display, Error)]
pub(crate) enum CliError {
    /// Unable to access {path:?}: {source}
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Unable to start the runtime: {0}
    Runtime(#[source] io::Error),
    /// {0}
    Lib(#[from] lifeboard_lib::Error),
    /// Invalid JSON: {0}
    Json(#[from] serde_json::Error),
    /// Invalid TOML: {0}
    Toml(#[from] toml::de::Error),
    /// Invalid YAML: {0}
    Yaml(#[from] serde_yaml::Error),
    /// Unsupported config file format {0:?}, expected toml, yaml or json
    ConfigFormat(String),
}

impl CliError {
    pub(crate) fn io<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| CliError::Io { path, source }
    }
}
