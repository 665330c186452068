//! Model writers and readers.
//!
//! Backends are picked by format name, the way a model library's
//! `QueryWriter("3mf")` works. Only the JSON model dump ships with this
//! crate; the 3MF package encoder is an external collaborator and asking
//! for it yields [`ModelError::UnsupportedFormat`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! let writer = session.query_writer("json")?;
//! writer.write_to_file(&model, Path::new("cube.json"))?;
//! ```

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

use crate::error::{ModelError, ModelResult};
use crate::model::Model;

/// Known model format names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFormat {
    /// serde JSON dump of the whole model.
    Json,
    /// 3D Manufacturing Format package.
    ThreeMf,
}

impl ModelFormat {
    /// Canonical name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::ThreeMf => "3mf",
        }
    }
}

impl FromStr for ModelFormat {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "3mf" => Ok(Self::ThreeMf),
            _ => Err(ModelError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Serializes a model.
pub trait ModelWriter {
    /// Format this writer produces.
    fn format(&self) -> ModelFormat;

    /// Writes the model to a stream.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O or encoding failure.
    fn write_to(&self, model: &Model, out: &mut dyn Write) -> ModelResult<()>;

    /// Writes the model to a file, replacing it.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O or encoding failure.
    fn write_to_file(&self, model: &Model, path: &Path) -> ModelResult<()> {
        let mut out = BufWriter::new(File::create(path)?);
        self.write_to(model, &mut out)?;
        out.flush()?;
        tracing::info!(
            "Wrote {} objects ({} triangles) to {}",
            model.object_count(),
            model.total_triangle_count(),
            path.display()
        );
        Ok(())
    }
}

/// Deserializes a model.
pub trait ModelReader {
    /// Format this reader accepts.
    fn format(&self) -> ModelFormat;

    /// Reads and validates a model from a stream.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, malformed input or broken references.
    fn read_from(&self, input: &mut dyn Read) -> ModelResult<Model>;

    /// Reads and validates a model from a file.
    ///
    /// # Errors
    ///
    /// Returns an error on I/O failure, malformed input or broken references.
    fn read_from_file(&self, path: &Path) -> ModelResult<Model> {
        let mut input = BufReader::new(File::open(path)?);
        let model = self.read_from(&mut input)?;
        tracing::debug!("Read {} objects from {}", model.object_count(), path.display());
        Ok(model)
    }
}

/// JSON model dump.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelWriter {
    /// Indent the output.
    pub pretty: bool,
}

impl JsonModelWriter {
    /// Indented writer.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl ModelWriter for JsonModelWriter {
    fn format(&self) -> ModelFormat {
        ModelFormat::Json
    }

    fn write_to(&self, model: &Model, out: &mut dyn Write) -> ModelResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, model)?;
        } else {
            serde_json::to_writer(&mut *out, model)?;
        }
        Ok(())
    }
}

/// Reader for [`JsonModelWriter`] output.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonModelReader;

impl ModelReader for JsonModelReader {
    fn format(&self) -> ModelFormat {
        ModelFormat::Json
    }

    fn read_from(&self, input: &mut dyn Read) -> ModelResult<Model> {
        let model: Model = serde_json::from_reader(input)?;
        model.validate()?;
        Ok(model)
    }
}

/// Writer registered for `format`.
///
/// # Errors
///
/// Returns [`ModelError::UnsupportedFormat`] for unknown or external formats.
pub fn writer_for(format: &str) -> ModelResult<Box<dyn ModelWriter>> {
    match format.parse::<ModelFormat>()? {
        ModelFormat::Json => Ok(Box::new(JsonModelWriter::pretty())),
        other => Err(ModelError::UnsupportedFormat(other.name().to_string())),
    }
}

/// Reader registered for `format`.
///
/// # Errors
///
/// Returns [`ModelError::UnsupportedFormat`] for unknown or external formats.
pub fn reader_for(format: &str) -> ModelResult<Box<dyn ModelReader>> {
    match format.parse::<ModelFormat>()? {
        ModelFormat::Json => Ok(Box::new(JsonModelReader)),
        other => Err(ModelError::UnsupportedFormat(other.name().to_string())),
    }
}

/// Format implied by a file extension.
///
/// # Errors
///
/// Returns [`ModelError::UnsupportedFormat`] if the extension is missing or
/// unknown.
pub fn format_for_path(path: &Path) -> ModelResult<ModelFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .ok_or_else(|| ModelError::UnsupportedFormat(path.display().to_string()))?
        .parse()
}

/// Writes a model into a byte buffer.
///
/// # Errors
///
/// Returns an error on encoding failure.
pub fn write_to_vec(writer: &dyn ModelWriter, model: &Model) -> ModelResult<Vec<u8>> {
    let mut buf = Vec::new();
    writer.write_to(model, &mut buf)?;
    Ok(buf)
}

/// Reads a model from a byte slice.
///
/// # Errors
///
/// Returns an error on malformed input or broken references.
pub fn read_from_slice(reader: &dyn ModelReader, data: &[u8]) -> ModelResult<Model> {
    let mut cursor = io::Cursor::new(data);
    reader.read_from(&mut cursor)
}
