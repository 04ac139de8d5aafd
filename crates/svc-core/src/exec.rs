use crate::SvcError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// A single program invocation managed by the service: the directory it lives
/// in, the binary name, and any arguments passed on launch.
///
/// This is a pure string-to-structure transform; nothing checks that the
/// binary exists on disk. Installation of the service definition is the
/// responsibility of an external collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Executable {
    pub directory: PathBuf,
    pub exec: String,
    pub arguments: Vec<String>,
}

impl Executable {
    /// Parses a raw invocation string of the form:
    ///
    /// ```text
    /// path/to/executable --arg1 --arg2=value
    /// ```
    ///
    /// Surrounding whitespace is trimmed first; a blank input yields `None`
    /// and is silently skipped by the configuration layer. The first
    /// space-delimited token is split into directory and binary name, any
    /// remaining text is split on single spaces in input order.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let (exec_path, args) = match trimmed.split_once(' ') {
            Some((path, rest)) => (path, rest),
            None => (trimmed, ""),
        };

        let arguments = if args.is_empty() {
            Vec::new()
        } else {
            args.split(' ').map(str::to_string).collect()
        };

        Some(Self::split_path(Path::new(exec_path), arguments))
    }

    /// Builds a descriptor for the currently running binary, with no
    /// arguments. Used when a service is configured without any executables.
    pub fn current() -> Result<Self, SvcError> {
        let path = std::env::current_exe().map_err(SvcError::CurrentExecutable)?;
        Ok(Self::split_path(&path, Vec::new()))
    }

    fn split_path(path: &Path, arguments: Vec<String>) -> Self {
        let exec = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let directory = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            Some(_) => PathBuf::from("."),
            None => path.to_path_buf(),
        };

        Self {
            directory,
            exec,
            arguments,
        }
    }
}
