pub mod cs;
pub mod error;

pub use cs::compression;
pub use error::{HuffmanError, Result};
