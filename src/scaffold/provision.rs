use anyhow::Result;
use camino::Utf8PathBuf;

use crate::util;

/// Create each directory (and missing parents) in order. Existing directories
/// are left alone; the first failure aborts.
pub fn provision(dirs: &[Utf8PathBuf], dry_run: bool) -> Result<()> {
    for dir in dirs {
        if dry_run {
            tracing::debug!(path = %dir, "dry-run: skipping directory creation");
            println!("  would create {}", dir);
            continue;
        }

        util::fs::ensure_dir(dir)?;
        println!("✓ Created: {}", dir);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::layout::Layout;
    use crate::util::testing::unique_temp_dir;

    #[test]
    fn creates_nested_tree_and_is_idempotent() {
        let root = unique_temp_dir();
        let dirs = Layout::new(root.join("auth-service")).directories();

        provision(&dirs, false).unwrap();
        provision(&dirs, false).unwrap();

        for dir in &dirs {
            assert!(dir.is_dir(), "{dir} missing");
        }

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn file_in_the_way_aborts() {
        let root = unique_temp_dir();
        fs::create_dir_all(&root).unwrap();
        let base = root.join("auth-service");
        fs::write(&base, "not a directory").unwrap();

        let err = provision(&Layout::new(&base).directories(), false).unwrap_err();
        assert!(err.to_string().contains("creating directory"));
        assert!(base.is_file());

        let _ = fs::remove_dir_all(&root);
    }

    #[test]
    fn dry_run_touches_nothing() {
        let root = unique_temp_dir();
        let dirs = Layout::new(root.join("auth-service")).directories();

        provision(&dirs, true).unwrap();
        assert!(!root.exists());
    }
}
