//! Ski run domain model and repository trait.

mod model;
mod repository;

pub use model::SkiRun;
pub use repository::SkiRunRepository;
