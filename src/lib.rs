#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::style,
    clippy::pedantic
)]

//! Reads and writes INI configuration text.
//!
//! ```ini
//! [SectionName]
//! key=value
//! ; comment line
//! # comment line
//! ```
//!
//! Values are stored verbatim after trimming. No escaping is applied when rendering, so a value
//! with significant leading or trailing whitespace does not survive a round trip. Keys starting
//! with `#`, `;` or `[` are rejected, since they would render as comments or section headers.

mod error;
mod parser;
mod section;
mod util;

use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;
use std::{fmt, fs};

pub use crate::error::{Error, ParseError};
pub use crate::parser::Parser;
pub use crate::section::Section;
pub use crate::util::has_ini_extension;

/// The only file extension accepted by [`Ini::load_from_file`] and [`Ini::save_to_file`].
pub const EXTENSION: &str = "ini";

/// An in-memory INI document: an ordered set of sections, each an ordered set of unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ini {
    sections: Vec<Section>,
}

impl Ini {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let mut ini = Self::new();
        ini.load_from_file(path)?;
        Ok(ini)
    }

    /// Reads and parses the file at `path`, replacing the current contents.
    ///
    /// The extension is checked before the file system is touched. On any error the current
    /// contents are left as they were.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();

        if !has_ini_extension(path) {
            return Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        let text =
            fs::read_to_string(path).map_err(|source| Error::from_io(path.to_path_buf(), source))?;

        tracing::debug!("Loading INI file: {}", path.display());
        self.load_from_str(&text)
    }

    /// Parses `text`, replacing the current contents. On error the current contents are kept.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), Error> {
        let sections = Parser::new(text).into_sections()?;
        tracing::debug!("Parsed {} sections", sections.len());
        self.sections = sections;
        Ok(())
    }

    /// Section names in declaration order.
    #[must_use]
    pub fn section_names(&self) -> Vec<String> {
        self.sections.iter().map(|s| s.name().to_owned()).collect()
    }

    /// Returns an owned copy of every section and its entries.
    #[must_use]
    pub fn sections(&self) -> HashMap<String, HashMap<String, String>> {
        self.sections
            .iter()
            .map(|section| {
                let entries = section.entries().iter().cloned().collect();
                (section.name().to_owned(), entries)
            })
            .collect()
    }

    #[must_use]
    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name() == name)
    }

    pub fn get(&self, section: &str, key: &str) -> Result<&str, Error> {
        if section.is_empty() {
            return Err(Error::InvalidArgument);
        }

        self.section(section)
            .and_then(|s| s.get(key))
            .ok_or_else(|| not_found(section, key))
    }

    /// Overwrites the value of an existing key. New sections and keys can only come from loading.
    ///
    /// The value is trimmed before it is stored. Values that trim to empty or span several lines
    /// are rejected with [`Error::InvalidValue`].
    pub fn set(&mut self, section: &str, key: &str, value: &str) -> Result<(), Error> {
        if section.is_empty() {
            return Err(Error::InvalidArgument);
        }

        let value = value.trim();
        if value.is_empty() || value.contains(['\n', '\r']) {
            return Err(Error::InvalidValue {
                value: value.to_owned(),
            });
        }

        let replaced = self
            .sections
            .iter_mut()
            .find(|s| s.name() == section)
            .is_some_and(|s| s.replace(key, value.to_owned()));

        if replaced {
            Ok(())
        } else {
            Err(not_found(section, key))
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();

        if !has_ini_extension(path) {
            return Err(Error::UnsupportedFormat {
                path: path.to_path_buf(),
            });
        }

        fs::write(path, self.render()).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!("Saved INI file: {}", path.display());
        Ok(())
    }
}

fn not_found(section: &str, key: &str) -> Error {
    Error::NotFound {
        section: section.to_owned(),
        key: key.to_owned(),
    }
}

impl FromStr for Ini {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut ini = Self::new();
        ini.load_from_str(s)?;
        Ok(ini)
    }
}

impl fmt::Display for Ini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for section in &self.sections {
            write!(f, "{section}")?;
        }

        Ok(())
    }
}
