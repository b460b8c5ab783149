//! XML file-backed SkiRunRepository implementation.
//!
//! The whole collection is loaded at construction and the whole file is
//! rewritten after every mutation.

use skirun_core::SkiRunError;
use skirun_core::config::StoreConfig;
use skirun_core::error::Result;
use skirun_core::ski_run::{SkiRun, SkiRunRepository};
use std::fs;
use std::path::Path;

use crate::dto::SkiRunsDocument;
use crate::storage::XmlFile;

enum StoreState {
    Open(Vec<SkiRun>),
    Disposed,
}

/// A ski run store backed by a single XML file.
///
/// Responsibilities:
/// - Own the in-memory collection for the lifetime of the store
/// - Rewrite the backing file after each insert, delete, or update
///
/// Does NOT:
/// - Coordinate with other stores writing the same file (last writer wins)
/// - Reload the file after construction
pub struct XmlSkiRunRepository {
    file: XmlFile<SkiRunsDocument>,
    state: StoreState,
}

impl XmlSkiRunRepository {
    /// Opens the store, loading every run from `config.data_file`.
    ///
    /// Fails if the file is missing, unreadable, or not a valid document.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let runs = Self::load(config.data_file())?;
        tracing::info!(
            "Opened ski run store {:?} with {} runs",
            config.data_file(),
            runs.len()
        );

        Ok(Self {
            file: XmlFile::new(config.data_file),
            state: StoreState::Open(runs),
        })
    }

    /// Reads the XML document at `path` into an ordered list of runs.
    pub fn load(path: &Path) -> Result<Vec<SkiRun>> {
        let document = XmlFile::<SkiRunsDocument>::new(path).load()?;
        Ok(document.into_runs())
    }

    /// Writes an empty collection to `path` if no file exists there yet.
    ///
    /// Returns `true` if the file was created. An existing file is never touched.
    pub fn initialize(path: &Path) -> Result<bool> {
        let file = XmlFile::<SkiRunsDocument>::new(path);
        if file.exists() {
            return Ok(false);
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        file.save(&SkiRunsDocument::default())?;
        tracing::info!("Initialized empty ski run file {:?}", path);
        Ok(true)
    }

    /// Rewrites the backing file from the current collection, in order.
    pub fn persist(&self) -> Result<()> {
        let runs = self.runs()?;
        tracing::debug!("Persisting {} runs to {:?}", runs.len(), self.file.path());
        self.file.save(&SkiRunsDocument::from_runs(runs))
    }

    pub fn data_file(&self) -> &Path {
        self.file.path()
    }

    fn runs(&self) -> Result<&Vec<SkiRun>> {
        match &self.state {
            StoreState::Open(runs) => Ok(runs),
            StoreState::Disposed => Err(SkiRunError::Disposed),
        }
    }

    fn runs_mut(&mut self) -> Result<&mut Vec<SkiRun>> {
        match &mut self.state {
            StoreState::Open(runs) => Ok(runs),
            StoreState::Disposed => Err(SkiRunError::Disposed),
        }
    }

    fn persist_after(&self, operation: &str) -> Result<()> {
        self.persist().inspect_err(|e| {
            tracing::warn!(
                "{} applied in memory but not persisted to {:?}: {}",
                operation,
                self.file.path(),
                e
            );
        })
    }
}

impl SkiRunRepository for XmlSkiRunRepository {
    fn insert(&mut self, run: SkiRun) -> Result<()> {
        tracing::debug!("Inserting ski run {}", run.id);
        self.runs_mut()?.push(run);
        self.persist_after("insert")
    }

    fn delete_by_id(&mut self, id: i32) -> Result<()> {
        let runs = self.runs_mut()?;
        let before = runs.len();
        runs.retain(|run| run.id != id);
        tracing::debug!("Deleted {} ski runs with id {}", before - runs.len(), id);
        self.persist_after("delete")
    }

    fn update(&mut self, run: SkiRun) -> Result<()> {
        tracing::debug!("Updating ski run {}", run.id);
        let runs = self.runs_mut()?;
        runs.retain(|existing| existing.id != run.id);
        runs.push(run);
        self.persist_after("update")
    }

    fn get_by_id(&self, id: i32) -> Result<Option<SkiRun>> {
        Ok(self.runs()?.iter().find(|run| run.id == id).cloned())
    }

    fn get_all(&self) -> Result<Vec<SkiRun>> {
        Ok(self.runs()?.clone())
    }

    fn query_by_vertical(&self, min: i32, max: i32) -> Result<Vec<SkiRun>> {
        Ok(self
            .runs()?
            .iter()
            .filter(|run| run.vertical_within(min, max))
            .cloned()
            .collect())
    }

    fn len(&self) -> Result<usize> {
        Ok(self.runs()?.len())
    }

    fn dispose(&mut self) {
        self.state = StoreState::Disposed;
    }

    fn is_disposed(&self) -> bool {
        matches!(self.state, StoreState::Disposed)
    }
}
