use std::fs;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;

use crate::layout::Layout;
use crate::templates::FileDescriptor;

/// Write every descriptor's content to `<directory>/<filename>`, replacing any
/// existing file. Target directories must already exist.
pub fn emit(
    layout: &Layout,
    descriptors: &[FileDescriptor],
    dry_run: bool,
) -> Result<Vec<Utf8PathBuf>> {
    let mut written = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        let destination = layout.dir(descriptor.directory).join(descriptor.filename);
        let content = descriptor.content()?;

        if dry_run {
            tracing::debug!(path = %destination, bytes = content.len(), "dry-run: skipping write");
            println!("  would write {}", destination);
            continue;
        }

        fs::write(&destination, content).with_context(|| format!("writing {}", destination))?;
        println!("✓ Wrote: {}", destination);
        written.push(destination);
    }
    Ok(written)
}
