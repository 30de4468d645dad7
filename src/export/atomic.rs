//! Atomic replacement of the export destination.
//!
//! Output is written to a temp file beside the destination and renamed over
//! it only after the writer succeeded and the data reached disk. A failed
//! export leaves whatever was at the destination untouched; the temp file is
//! removed when it is dropped.

use crate::error::{StudioError, StudioResult};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Run `write` against a temp file and move the result to `output`
pub fn write_atomically<F>(output: &Path, write: F) -> StudioResult<()>
where
    F: FnOnce(&mut BufWriter<&File>) -> io::Result<()>,
{
    let dir = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let fail = |e: io::Error| StudioError::destination(output, e);

    let temp = NamedTempFile::new_in(dir).map_err(fail)?;
    {
        let mut writer = BufWriter::new(temp.as_file());
        write(&mut writer).map_err(fail)?;
        writer.flush().map_err(fail)?;
    }
    temp.as_file().sync_all().map_err(fail)?;
    temp.persist(output).map_err(|e| fail(e.error))?;

    tracing::debug!(path = %output.display(), "Export written");
    Ok(())
}
