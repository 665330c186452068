//! Per-run context.
//!
//! A [`Session`] is constructed once at the start of a run, passed to
//! whatever needs to create models or pick writers, and dropped at the end.

use std::fmt;
use std::path::Path;

use crate::error::ModelResult;
use crate::model::Model;
use crate::writer::{format_for_path, reader_for, writer_for, ModelReader, ModelWriter};

/// Library version triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LibraryVersion {
    /// Major version.
    pub major: u32,
    /// Minor version.
    pub minor: u32,
    /// Patch version.
    pub micro: u32,
}

impl LibraryVersion {
    /// Version of this crate.
    #[must_use]
    pub fn current() -> Self {
        let parse = |s: &str| s.parse().unwrap_or(0);
        Self {
            major: parse(env!("CARGO_PKG_VERSION_MAJOR")),
            minor: parse(env!("CARGO_PKG_VERSION_MINOR")),
            micro: parse(env!("CARGO_PKG_VERSION_PATCH")),
        }
    }
}

impl fmt::Display for LibraryVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        let pre = env!("CARGO_PKG_VERSION_PRE");
        if !pre.is_empty() {
            write!(f, "-{pre}")?;
        }
        Ok(())
    }
}

/// Explicit replacement for a process-wide library handle.
#[derive(Debug)]
pub struct Session {
    version: LibraryVersion,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Opens a session and logs the library version.
    #[must_use]
    pub fn new() -> Self {
        let version = LibraryVersion::current();
        tracing::info!("tessera_mesh version: {}", version);
        Self { version }
    }

    /// Library version.
    #[must_use]
    pub const fn version(&self) -> LibraryVersion {
        self.version
    }

    /// Creates an empty model owned by the caller.
    #[must_use]
    pub fn create_model(&self) -> Model {
        Model::new()
    }

    /// Writer for a format name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or external formats.
    pub fn query_writer(&self, format: &str) -> ModelResult<Box<dyn ModelWriter>> {
        writer_for(format)
    }

    /// Reader for a format name.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or external formats.
    pub fn query_reader(&self, format: &str) -> ModelResult<Box<dyn ModelReader>> {
        reader_for(format)
    }

    /// Reads a model, picking the reader from the file extension.
    ///
    /// # Errors
    ///
    /// Returns an error for unsupported extensions, I/O failures and
    /// malformed models.
    pub fn read_model(&self, path: &Path) -> ModelResult<Model> {
        let format = format_for_path(path)?;
        self.query_reader(format.name())?.read_from_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_matches_manifest() {
        let session = Session::new();
        assert_eq!(session.version().to_string(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_models_are_independent() {
        let session = Session::new();
        let mut a = session.create_model();
        let b = session.create_model();
        a.add_mesh(crate::mesh::MeshObject::new("only_in_a")).unwrap();
        assert_eq!(a.object_count(), 1);
        assert_eq!(b.object_count(), 0);
    }
}
