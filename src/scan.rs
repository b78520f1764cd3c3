//! Recursive routes-directory scanner.
//!
//! Produces the flat list of candidate files the rest of the pipeline works
//! from. The order is deterministic: entries are sorted by name within each
//! directory, traversal is depth-first, and a directory's files come before
//! its subdirectories. Downstream stages must preserve this order — it is
//! what makes registration reproducible across runs for a fixed snapshot.

use std::path::{Path, PathBuf};

use crate::error::Error;

/// Recursively lists every file under `root`, as lossily-decoded path
/// strings.
///
/// Fails with [`Error::Scan`] if `root` or any subdirectory cannot be read —
/// fatal, there is no partial result.
pub(crate) async fn scan(root: &str) -> Result<Vec<String>, Error> {
    let mut files = Vec::new();
    // Explicit stack instead of recursion: async fns cannot recurse without
    // boxing every level.
    let mut pending = vec![PathBuf::from(root)];

    while let Some(dir) = pending.pop() {
        let mut entries = read_sorted(&dir).await?;
        let mut subdirs = Vec::new();

        for (path, is_dir) in entries.drain(..) {
            if is_dir {
                subdirs.push(path);
            } else {
                files.push(path.to_string_lossy().into_owned());
            }
        }

        // Pop order is LIFO, so push reversed to visit subdirs name-ascending.
        pending.extend(subdirs.into_iter().rev());
    }

    Ok(files)
}

/// Reads one directory and returns its entries sorted by name.
async fn read_sorted(dir: &Path) -> Result<Vec<(PathBuf, bool)>, Error> {
    let scan_err = |e| Error::scan(dir.to_string_lossy(), e);

    let mut rd = tokio::fs::read_dir(dir).await.map_err(scan_err)?;
    let mut entries = Vec::new();

    while let Some(entry) = rd.next_entry().await.map_err(scan_err)? {
        let is_dir = entry.file_type().await.map_err(scan_err)?.is_dir();
        entries.push((entry.path(), is_dir));
    }

    entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_directory_is_fatal() {
        let err = scan("tests/fixtures/no-such-dir").await.unwrap_err();
        assert!(matches!(err, Error::Scan { .. }));
    }

    #[tokio::test]
    async fn listing_is_depth_first_and_name_sorted() {
        let files = scan("tests/fixtures/routes").await.unwrap();
        let expected = [
            "tests/fixtures/routes/_middleware.ts",
            "tests/fixtures/routes/items.ts",
            "tests/fixtures/routes/blog/[slug].ts",
            "tests/fixtures/routes/users/_middleware.auth.ts",
            "tests/fixtures/routes/users/index.ts",
            "tests/fixtures/routes/users/profile.ts",
        ];
        assert_eq!(files, expected);
    }
}
