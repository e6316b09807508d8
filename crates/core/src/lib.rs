pub mod config;
pub mod conversion;
pub mod error;

pub use config::{ChunkConfig, Config};
pub use conversion::{ConversionResult, DocMeta};
pub use error::*;
