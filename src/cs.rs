pub mod compression;

// Re-export all modules
pub use compression::*;
