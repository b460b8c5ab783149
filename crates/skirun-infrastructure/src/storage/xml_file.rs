//! Whole-document XML file operations.
//!
//! Every call opens the file, reads or writes it completely, and closes it again.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use serde::{Serialize, de::DeserializeOwned};
use skirun_core::SkiRunError;
use skirun_core::error::Result;
use std::fs;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;
const INDENT_SIZE: usize = 2;

/// A serde type stored as a complete XML document.
pub trait XmlDocument: Serialize + DeserializeOwned {
    /// Name of the single top-level element.
    const ROOT_ELEMENT: &'static str;
}

/// A handle to an XML file holding one serialized `T`.
///
/// Loading is strict: a missing file, a document without exactly one `T::ROOT_ELEMENT`
/// root, or any malformed content fails the whole load.
/// Saving overwrites the file in place. It is not atomic, so an interrupted write
/// can leave a truncated document behind.
pub struct XmlFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> XmlFile<T>
where
    T: XmlDocument,
{
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(T)`: Successfully loaded and deserialized
    /// - `Err(SkiRunError::MissingFile)`: The file does not exist
    /// - `Err(SkiRunError::Io)`: The file exists but could not be read
    /// - `Err(SkiRunError::Serialization)`: The content is not a valid document
    pub fn load(&self) -> Result<T> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SkiRunError::missing_file(&self.path));
            }
            Err(e) => {
                return Err(SkiRunError::io(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )));
            }
        };

        let content = String::from_utf8(bytes).map_err(|e| self.parse_error(e))?;
        // Byte order mark written by some editors and the .NET serializer
        let content = content.strip_prefix('\u{FEFF}').unwrap_or(&content);
        check_single_root(content, T::ROOT_ELEMENT).map_err(|e| self.parse_error(e))?;

        quick_xml::de::from_str(content).map_err(|e| self.parse_error(e))
    }

    /// Serializes `data` and replaces the entire file content with it.
    pub fn save(&self, data: &T) -> Result<()> {
        let xml = Self::render(data)?;

        fs::write(&self.path, xml).map_err(|e| {
            SkiRunError::io(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    /// Renders `data` as an indented document with an XML declaration.
    ///
    /// Fails if the output would hold a character XML 1.0 does not allow, such as
    /// a control character in a text field.
    fn render(data: &T) -> Result<String> {
        let mut xml = String::from(XML_DECLARATION);
        xml.push('\n');

        let mut serializer = quick_xml::se::Serializer::new(&mut xml);
        serializer.indent(' ', INDENT_SIZE);
        data.serialize(serializer)?;

        if let Some(c) = xml.chars().find(|&c| !is_xml_char(c)) {
            return Err(SkiRunError::serialization(
                "XML",
                format!("Character {:?} cannot be stored in an XML 1.0 document", c),
            ));
        }

        xml.push('\n');
        Ok(xml)
    }

    fn parse_error(&self, err: impl std::fmt::Display) -> SkiRunError {
        SkiRunError::serialization(
            "XML",
            format!("Failed to parse {}: {}", self.path.display(), err),
        )
    }
}

/// `Char` production of XML 1.0. Surrogates cannot occur in a Rust `char`.
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

/// Verifies the document is well formed with exactly one top-level element named `root`.
///
/// The serde deserializer stops after the first element and ignores its name, so both
/// are checked here first.
fn check_single_root(content: &str, root: &str) -> std::result::Result<(), String> {
    let mut reader = Reader::from_str(content);
    let mut depth: usize = 0;
    let mut seen_root = false;

    let mut open_top_level = |start: &BytesStart<'_>| {
        if seen_root {
            return Err("document has more than one root element".to_string());
        }
        seen_root = true;
        if start.name().as_ref() != root.as_bytes() {
            return Err(format!(
                "expected root element <{}>, found <{}>",
                root,
                String::from_utf8_lossy(start.name().as_ref())
            ));
        }
        Ok(())
    };

    loop {
        match reader.read_event() {
            Ok(Event::Start(start)) => {
                if depth == 0 {
                    open_top_level(&start)?;
                }
                depth += 1;
            }
            Ok(Event::Empty(start)) => {
                if depth == 0 {
                    open_top_level(&start)?;
                }
            }
            Ok(Event::End(_)) => depth = depth.saturating_sub(1),
            Ok(Event::Text(text)) if depth == 0 => {
                if !text.iter().all(u8::is_ascii_whitespace) {
                    return Err("text outside the root element".to_string());
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(format!(
                    "malformed XML at position {}: {}",
                    reader.error_position(),
                    e
                ));
            }
        }
    }

    if depth > 0 {
        return Err(format!("root element <{}> is not closed", root));
    }
    if !seen_root {
        return Err(format!("missing root element <{}>", root));
    }
    Ok(())
}
