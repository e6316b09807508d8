use std::io::Write;

use anyhow::Result;

use chunkline_chunker::Chunk;

use crate::cli::OutputFormat;

pub fn write_chunks<W: Write>(mut out: W, chunks: &[Chunk], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Jsonl => {
            for chunk in chunks {
                serde_json::to_writer(&mut out, chunk)?;
                out.write_all(b"\n")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, chunks)?;
            out.write_all(b"\n")?;
        }
        OutputFormat::Text => {
            for (n, chunk) in chunks.iter().enumerate() {
                if n > 0 {
                    out.write_all(b"\n")?;
                }
                writeln!(
                    out,
                    "--- chunk {} [{}..{}) {} units ---",
                    n + 1,
                    chunk.start_index,
                    chunk.end_index,
                    chunk.len()
                )?;
                writeln!(out, "{}", chunk.text)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
