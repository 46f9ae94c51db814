use std::iter::Enumerate;
use std::str::Lines;

use crate::error::ParseError;
use crate::section::Section;

/// Lines starting with one of these characters are ignored entirely.
const COMMENT_MARKERS: [char; 2] = ['#', ';'];

const KEY_FORBIDDEN_PREFIXES: [char; 3] = ['#', ';', '['];

/// Represents an on-going parse.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    lines: Enumerate<Lines<'a>>,
    sections: Vec<Section>,
    /// Index into `sections` of the most recently declared section.
    current: Option<usize>,
}

impl<'a> Parser<'a> {
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate(),
            sections: Vec::with_capacity(16),
            current: None,
        }
    }
}

impl Parser<'_> {
    /// Consumes every line, stopping at the first error.
    pub fn into_sections(mut self) -> Result<Vec<Section>, ParseError> {
        while let Some((i, line)) = self.lines.next() {
            let line_number = i + 1;

            // `str::lines` strips "\n" and "\r\n" but not a lone trailing '\r'.
            let line = line.strip_suffix('\r').unwrap_or(line);

            if line.trim().is_empty() || line.starts_with(COMMENT_MARKERS) {
                continue;
            }

            if line.starts_with('[') {
                self.parse_section_header(line, line_number)?;
            } else {
                self.parse_entry(line, line_number)?;
            }
        }

        Ok(self.sections)
    }

    /// Declares a section, replacing the contents of any earlier section with the same name.
    fn parse_section_header(&mut self, line: &str, line_number: usize) -> Result<(), ParseError> {
        let name = line
            .trim_end()
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .map(str::trim)
            .ok_or(ParseError::MalformedSection { line: line_number })?;

        if name.is_empty() {
            return Err(ParseError::MalformedSection { line: line_number });
        }

        let section = Section::new(name.to_owned());
        let index = match self.sections.iter().position(|s| s.name() == name) {
            Some(i) => {
                self.sections[i] = section;
                i
            }
            None => {
                self.sections.push(section);
                self.sections.len() - 1
            }
        };

        self.current = Some(index);
        Ok(())
    }

    fn parse_entry(&mut self, line: &str, line_number: usize) -> Result<(), ParseError> {
        let (key, value) = line
            .split_once('=')
            .ok_or(ParseError::MalformedLine { line: line_number })?;
        let (key, value) = (key.trim(), value.trim());

        // A rendered key must not read back as a comment or section header.
        if key.is_empty() || value.is_empty() || key.starts_with(KEY_FORBIDDEN_PREFIXES) {
            return Err(ParseError::InvalidKeyValue { line: line_number });
        }

        let section = self
            .current
            .and_then(|i| self.sections.get_mut(i))
            .ok_or(ParseError::NoCurrentSection { line: line_number })?;

        if section.contains_key(key) {
            return Err(ParseError::DuplicateKey {
                line: line_number,
                key: key.to_owned(),
            });
        }

        section.push(key.to_owned(), value.to_owned());
        Ok(())
    }
}
