pub mod emit;
pub mod provision;

use anyhow::Result;
use camino::Utf8PathBuf;

use crate::layout::Layout;
use crate::templates;

pub const NEXT_STEPS: &str = "\n=== Scaffold generated successfully ===\n\
\n\
Next steps:\n\
1. Copy code from PHASE3-TASK1-IMPLEMENTATION.md\n\
2. Create Java files in respective directories\n\
3. Run: ./gradlew build\n\
4. Run: ./gradlew test";

/// Provision the target directory set, then emit every template into it.
pub fn generate(layout: &Layout, dry_run: bool) -> Result<Vec<Utf8PathBuf>> {
    provision::provision(&layout.directories(), dry_run)?;
    emit::emit(layout, templates::descriptors(), dry_run)
}

/// Paths `generate` would produce, without touching the filesystem.
pub fn plan(layout: &Layout) -> (Vec<Utf8PathBuf>, Vec<Utf8PathBuf>) {
    let files = templates::descriptors()
        .iter()
        .map(|descriptor| layout.dir(descriptor.directory).join(descriptor.filename))
        .collect();
    (layout.directories(), files)
}
