//! Property-based tests for copy operations

use crate::modules::files::relative_entries;
use proptest::prelude::*;
use repo_scaffold::{copy_tree, Logger, IGNORED_PATHS};
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use tempfile::TempDir;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        3 => "[a-d]{1,2}",
        1 => prop::sample::select(IGNORED_PATHS.to_vec()).prop_map(str::to_string),
    ]
}

fn tree() -> impl Strategy<Value = BTreeMap<PathBuf, Vec<u8>>> {
    prop::collection::btree_map(
        prop::collection::vec(segment(), 1..4)
            .prop_map(|parts| parts.iter().collect::<PathBuf>()),
        prop::collection::vec(any::<u8>(), 0..64),
        0..12,
    )
}

/// Write the files, dropping any that would need a file to also be a directory
fn materialize(root: &Path, files: &BTreeMap<PathBuf, Vec<u8>>) {
    std::fs::create_dir_all(root).unwrap();
    let mut written: BTreeSet<PathBuf> = BTreeSet::new();

    for (relative, content) in files {
        let clashes = written
            .iter()
            .any(|existing| relative.starts_with(existing) || existing.starts_with(relative));
        if clashes {
            continue;
        }

        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, content).unwrap();
        written.insert(relative.clone());
    }
}

fn top_level_ignored(relative: &Path) -> bool {
    match relative.components().next() {
        Some(Component::Normal(name)) => IGNORED_PATHS.iter().any(|i| name == OsStr::new(i)),
        _ => false,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn copy_tree_reproduces_everything_not_ignored(files in tree()) {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        let dst = temp_dir.path().join("dst");
        materialize(&src, &files);

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime
            .block_on(copy_tree(&src, &dst, &Logger::quiet()))
            .unwrap();

        let expected: BTreeSet<PathBuf> = relative_entries(&src)
            .into_iter()
            .filter(|relative| !top_level_ignored(relative))
            .collect();
        let actual = relative_entries(&dst);
        prop_assert_eq!(&actual, &expected);

        for relative in &actual {
            let copied = dst.join(relative);
            if copied.is_file() {
                prop_assert_eq!(
                    std::fs::read(&copied).unwrap(),
                    std::fs::read(src.join(relative)).unwrap()
                );
            } else {
                prop_assert!(src.join(relative).is_dir());
            }
        }
    }
}
