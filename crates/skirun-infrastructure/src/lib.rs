pub mod config_service;
pub mod dto;
pub mod paths;
pub mod storage;
pub mod xml_ski_run_repository;

pub use crate::config_service::ConfigService;
pub use crate::paths::SkiRunPaths;
pub use crate::xml_ski_run_repository::XmlSkiRunRepository;
