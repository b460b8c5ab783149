//! Ski run repository trait.
//!
//! Defines the interface for ski run persistence operations.

use super::model::SkiRun;
use crate::error::Result;

/// An abstract repository owning an ordered collection of ski runs.
///
/// Every mutating operation writes the whole collection back to storage before
/// returning. Once [`dispose`](SkiRunRepository::dispose) has been called, every
/// other operation fails with [`SkiRunError::Disposed`](crate::SkiRunError::Disposed).
pub trait SkiRunRepository {
    /// Appends `run` to the end of the collection and persists.
    ///
    /// No uniqueness check is made on `run.id`.
    fn insert(&mut self, run: SkiRun) -> Result<()>;

    /// Removes every run whose ID equals `id` and persists.
    ///
    /// Succeeds when nothing matches.
    fn delete_by_id(&mut self, id: i32) -> Result<()>;

    /// Replaces all runs sharing `run.id` with `run`, appended at the end.
    ///
    /// The updated record does not keep its previous position.
    fn update(&mut self, run: SkiRun) -> Result<()>;

    /// Returns the first run with the given ID, or `None`.
    fn get_by_id(&self, id: i32) -> Result<Option<SkiRun>>;

    /// Returns a copy of the whole collection in stored order.
    fn get_all(&self) -> Result<Vec<SkiRun>>;

    /// Returns the runs whose vertical drop is within `[min, max]`, in stored order.
    ///
    /// # Returns
    ///
    /// - `Ok(Vec<SkiRun>)`: Matching runs (empty when `min > max`)
    /// - `Err(SkiRunError::Disposed)`: The store was disposed
    fn query_by_vertical(&self, min: i32, max: i32) -> Result<Vec<SkiRun>>;

    /// Returns the number of runs held.
    fn len(&self) -> Result<usize>;

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }

    /// Releases the in-memory collection. Storage is left untouched.
    ///
    /// Calling it again has no effect.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}
