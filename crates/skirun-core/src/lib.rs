pub mod config;
pub mod error;
pub mod ski_run;

// Re-export common error type
pub use error::SkiRunError;
