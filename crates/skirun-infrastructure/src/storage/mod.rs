//! File storage helpers.

mod xml_file;

pub use xml_file::{XmlDocument, XmlFile};
