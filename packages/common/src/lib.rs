//! Common infrastructure shared by the pqc-csr crates
//!
//! - Structured logging bootstrap around `env_logger`
//! - File helpers for writing public artifacts and private key material

pub mod fs;
pub mod logging;

pub use fs::{ensure_directory, write_private_file, write_public_file};
pub use logging::LoggingTransformer;
