//! File loading utilities
//!
//! `GedcomLoader` wraps the pipeline entry point
//! [parse_gedcom](crate::ged::parse_gedcom) with the usual sources: a path, a
//! byte buffer, or a string already in memory. Decoding still happens inside
//! the pipeline — GEDCOM declares its charset in-band — so the loader only
//! deals in bytes.
//!
//! # Example
//!
//! ```rust,ignore
//! use ged_parser::GedcomLoader;
//!
//! let file = GedcomLoader::from_path("family.ged")?.parse()?;
//! println!("{} individuals", file.gedcom.individuals.len());
//! ```

use super::{parse_gedcom, GedcomFile, ParseError};
use std::fs;
use std::path::Path;

/// Error that can occur when loading files
#[derive(Debug, Clone)]
pub enum LoaderError {
    /// IO error when reading the file
    Io(String),
    /// Fatal parse error from the pipeline
    Parse(ParseError),
}

impl std::fmt::Display for LoaderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderError::Io(msg) => write!(f, "IO error: {}", msg),
            LoaderError::Parse(err) => write!(f, "Parse error: {}", err),
        }
    }
}

impl std::error::Error for LoaderError {}

impl From<std::io::Error> for LoaderError {
    fn from(err: std::io::Error) -> Self {
        LoaderError::Io(err.to_string())
    }
}

impl From<ParseError> for LoaderError {
    fn from(err: ParseError) -> Self {
        LoaderError::Parse(err)
    }
}

/// Loader over one GEDCOM byte stream.
pub struct GedcomLoader {
    bytes: Vec<u8>,
}

impl GedcomLoader {
    /// Load from a file path. The bytes are read whole; the pipeline performs
    /// no further I/O.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let bytes = fs::read(path)?;
        Ok(GedcomLoader { bytes })
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        GedcomLoader {
            bytes: bytes.into(),
        }
    }

    /// Load from a string already decoded by the caller. Charset detection
    /// still runs but will simply confirm UTF-8.
    pub fn from_string(source: impl Into<String>) -> Self {
        GedcomLoader {
            bytes: source.into().into_bytes(),
        }
    }

    /// Run the full pipeline on the loaded bytes.
    pub fn parse(&self) -> Result<GedcomFile, LoaderError> {
        Ok(parse_gedcom(&self.bytes)?)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ged::testing::SampleBuilder;

    #[test]
    fn test_from_string_parses() {
        let source = SampleBuilder::new().finish();
        let file = GedcomLoader::from_string(source).parse().unwrap();
        assert!(file.gedcom.header.gedcom_version.is_some());
    }

    #[test]
    fn test_from_bytes_parses() {
        let source = SampleBuilder::new().finish();
        let file = GedcomLoader::from_bytes(source.into_bytes()).parse().unwrap();
        assert!(file.gedcom.header.character_set.is_some());
    }

    #[test]
    fn test_from_path_nonexistent() {
        let result = GedcomLoader::from_path("nonexistent.ged");
        assert!(matches!(result, Err(LoaderError::Io(_))));
    }

    #[test]
    fn test_fatal_error_surfaces() {
        let result = GedcomLoader::from_string("junk line\n").parse();
        assert!(matches!(result, Err(LoaderError::Parse(_))));
    }
}
