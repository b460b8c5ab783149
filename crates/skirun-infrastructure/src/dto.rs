//! On-disk XML shape of the ski run collection.
//!
//! ```xml
//! <?xml version="1.0" encoding="utf-8"?>
//! <SkiRuns>
//!   <SkiRun>
//!     <ID>1</ID>
//!     <Name>Buttermilk</Name>
//!     <Vertical>1000</Vertical>
//!   </SkiRun>
//! </SkiRuns>
//! ```

use serde::{Deserialize, Serialize};
use skirun_core::ski_run::SkiRun;

use crate::storage::XmlDocument;

/// Root `<SkiRuns>` element.
///
/// Attributes on the root (such as `xmlns:xsi` written by older tooling) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename = "SkiRuns")]
pub struct SkiRunsDocument {
    #[serde(rename = "SkiRun", default)]
    pub runs: Vec<SkiRunDto>,
}

/// One `<SkiRun>` element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkiRunDto {
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Vertical")]
    pub vertical: i32,
}

impl XmlDocument for SkiRunsDocument {
    const ROOT_ELEMENT: &'static str = "SkiRuns";
}

impl SkiRunsDocument {
    pub fn from_runs(runs: &[SkiRun]) -> Self {
        Self {
            runs: runs.iter().map(SkiRunDto::from).collect(),
        }
    }

    pub fn into_runs(self) -> Vec<SkiRun> {
        self.runs.into_iter().map(SkiRun::from).collect()
    }
}

impl From<&SkiRun> for SkiRunDto {
    fn from(run: &SkiRun) -> Self {
        Self {
            id: run.id,
            name: run.name.clone(),
            vertical: run.vertical,
        }
    }
}

impl From<SkiRunDto> for SkiRun {
    fn from(dto: SkiRunDto) -> Self {
        SkiRun {
            id: dto.id,
            name: dto.name,
            vertical: dto.vertical,
        }
    }
}
