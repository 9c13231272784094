use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

/// The GraphQL files found at or under a set of input paths.
#[derive(Debug, Default)]
pub(crate) struct DiscoveredFiles {
    pub graphql_files: Vec<PathBuf>,
    pub num_skipped: usize,
}

/// Normalizes `exts` to a set of `.`-prefixed extensions.
pub(crate) fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| {
            if !ext.starts_with('.') {
                format!(".{ext}")
            } else {
                ext.to_owned()
            }
        })
        .collect()
}

fn has_graphql_ext(path: &Path, exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()))
        .is_some_and(|ext| exts.contains(&ext))
}

/// Recursively collects the files under `paths` whose extension is one of
/// `exts`.
///
/// A single file path that doesn't match any extension is still returned
/// when nothing else was found, on the presumption that the caller named it
/// on purpose.
pub(crate) fn discover(paths: &[PathBuf], exts: &HashSet<String>) -> anyhow::Result<DiscoveredFiles> {
    log::debug!("Scanning {} input paths...", paths.len());
    let mut discovered = DiscoveredFiles::default();

    for path in paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
            let entry = entry.with_context(|| {
                format!("Failed to read filesystem entries at/under {path:#?}")
            })?;
            let entry_path = entry.path();
            if !entry.file_type().is_file() {
                log::trace!("Skipping non-file: {entry_path:#?}.");
                continue;
            }
            if has_graphql_ext(entry_path, exts) {
                log::trace!("Found GraphQL file at {entry_path:#?}.");
                discovered.graphql_files.push(canonicalize(entry_path)?);
            } else {
                discovered.num_skipped += 1;
            }
        }
    }

    if discovered.graphql_files.is_empty()
        && paths.len() == 1
        && let Some(first_path) = paths.first()
        && first_path.is_file() {
        let canonicalized = canonicalize(first_path)?;
        log::warn!(
            "Proceeding with {canonicalized:#?} even though it doesn't match \
            any of the --graphql-file-exts ({}).",
            exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        discovered.num_skipped = discovered.num_skipped.saturating_sub(1);
        discovered.graphql_files.push(canonicalized);
    }

    log::debug!("Found {} GraphQL files.", discovered.graphql_files.len());
    Ok(discovered)
}

fn canonicalize(path: &Path) -> anyhow::Result<PathBuf> {
    std::fs::canonicalize(path).with_context(|| format!("Failed to resolve {path:#?}"))
}

#[cfg(test)]
mod tests {
    use super::discover;
    use super::normalize_exts;
    use std::path::PathBuf;

    /// A fresh directory under the system temp dir, removed on drop.
    struct ScratchDir(PathBuf);

    impl ScratchDir {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!("gqlrt-cli-{name}-{}", std::process::id()));
            let _ = std::fs::remove_dir_all(&dir);
            std::fs::create_dir_all(dir.join("nested")).unwrap();
            Self(dir)
        }

        fn write(&self, rel_path: &str) -> PathBuf {
            let path = self.0.join(rel_path);
            std::fs::write(&path, "{ a }").unwrap();
            path
        }
    }

    impl Drop for ScratchDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn exts_get_a_leading_dot() {
        let exts = normalize_exts(&["graphql".to_string(), ".gql".to_string()]);
        assert_eq!(exts.len(), 2);
        assert!(exts.contains(".graphql"));
        assert!(exts.contains(".gql"));
    }

    #[test]
    fn directories_are_walked_recursively() {
        let scratch = ScratchDir::new("walk");
        scratch.write("b.graphql");
        scratch.write("nested/a.gql");
        scratch.write("notes.txt");

        let exts = normalize_exts(&["graphql".to_string(), "gql".to_string()]);
        let discovered = discover(&[scratch.0.clone()], &exts).unwrap();
        let names: Vec<String> = discovered
            .graphql_files
            .iter()
            .filter_map(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["b.graphql", "a.gql"]);
        assert_eq!(discovered.num_skipped, 1);
    }

    #[test]
    fn a_lone_file_is_kept_whatever_its_extension() {
        let scratch = ScratchDir::new("lone");
        let path = scratch.write("query.txt");

        let discovered = discover(&[path], &normalize_exts(&["graphql".to_string()])).unwrap();
        assert_eq!(discovered.graphql_files.len(), 1);
        assert_eq!(discovered.num_skipped, 0);
    }
}
