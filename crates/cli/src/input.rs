use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use chunkline_core::ConversionResult;

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    File(PathBuf),
}

impl Source {
    pub fn from_arg(input: Option<&Path>) -> Self {
        match input {
            None => Source::Stdin,
            Some(path) if path.as_os_str() == "-" => Source::Stdin,
            Some(path) => Source::File(path.to_path_buf()),
        }
    }

    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Source::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .lock()
                    .read_to_string(&mut text)
                    .context("failed to read stdin")?;
                Ok(text)
            }
            Source::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Stdin => f.write_str("stdin"),
            Source::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Text to chunk from raw input. A conversion response with no markdown or
/// text content yields an empty document.
pub fn document_text(raw: String, conversion_json: bool) -> Result<String> {
    if !conversion_json {
        return Ok(raw);
    }
    let converted =
        ConversionResult::from_json(&raw).context("failed to parse conversion response")?;
    match converted.content() {
        Some(content) => Ok(content.to_string()),
        None => {
            warn!(
                title = converted.metadata.title.as_deref().unwrap_or(""),
                pages = converted.metadata.pages,
                "conversion response has no markdown or text content"
            );
            Ok(String::new())
        }
    }
}
