pub mod init;
pub mod runs;
