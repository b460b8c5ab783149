use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root of the `config.toml` file.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RootConfig {
    #[serde(default)]
    pub store: StoreSection,
}

/// The `[store]` table of `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreSection {
    /// Path of the XML file holding the ski run collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
}

/// Resolved settings handed to a store at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub data_file: PathBuf,
}

impl StoreConfig {
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    pub fn data_file(&self) -> &Path {
        &self.data_file
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: RootConfig = toml::from_str("").unwrap();
        assert_eq!(config, RootConfig::default());
        assert!(config.store.data_file.is_none());
    }

    #[test]
    fn test_store_section_parses_data_file() {
        let config: RootConfig = toml::from_str(
            r#"
[store]
data_file = "/srv/ski/ski_runs.xml"
"#,
        )
        .unwrap();
        assert_eq!(
            config.store.data_file,
            Some(PathBuf::from("/srv/ski/ski_runs.xml"))
        );
    }
}
