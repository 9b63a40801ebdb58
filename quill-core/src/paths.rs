//! Helpers for `/`-separated logical paths (storage keys, URL paths).
//!
//! These operate on strings, not on [`std::path::Path`]: the separator is
//! always `/` regardless of platform.

use std::collections::BTreeSet;

/// Strips every leading `/`.
pub fn remove_start_slash(path: &str) -> &str {
    path.trim_start_matches('/')
}

/// Strips every trailing `/`.
pub fn remove_end_slash(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// Strips every leading and trailing `/`.
pub fn remove_both_ends_slash(path: &str) -> &str {
    remove_start_slash(remove_end_slash(path))
}

/// Strips a leading run of `.` followed by a run of `/`.
///
/// `./aaa`, `../aaa` and `/aaa` all become `aaa`.
pub fn remove_start_dir_chars(path: &str) -> &str {
    path.trim_start_matches('.').trim_start_matches('/')
}

/// A path split at its last `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilePathParts<'a> {
    /// Everything after the last `/`.
    pub file_name: &'a str,
    /// Everything before the last `/`; empty when there is none.
    pub dir_path: &'a str,
}

/// Splits `file_path` into its file name and directory part.
pub fn split_file_path(file_path: &str) -> FilePathParts<'_> {
    match file_path.rsplit_once('/') {
        Some((dir_path, file_name)) => FilePathParts {
            file_name,
            dir_path,
        },
        None => FilePathParts {
            file_name: file_path,
            dir_path: "",
        },
    }
}

/// Expands each path into itself plus all of its ancestors.
///
/// Empty segments are ignored, duplicates collapse, and the result is
/// sorted so parents precede their children:
/// `["d1/d11/fileA.txt", "d1/d11/fileB.txt"]` yields
/// `["d1", "d1/d11", "d1/d11/fileA.txt", "d1/d11/fileB.txt"]`.
pub fn split_hierarchical_paths<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut expanded = BTreeSet::new();
    for path in paths {
        let mut current = String::new();
        for segment in path.as_ref().split('/').filter(|s| !s.is_empty()) {
            if !current.is_empty() {
                current.push('/');
            }
            current.push_str(segment);
            expanded.insert(current.clone());
        }
    }
    expanded.into_iter().collect()
}

/// Collapses each family of paths to its deepest members.
///
/// A path replaces an ancestor already in the result (in the ancestor's
/// slot) and is dropped if a descendant, or the path itself, is already
/// present. Ancestry is decided per segment, so `d1/d1` is not an ancestor
/// of `d1/d11`; the empty path is an ancestor of every path.
pub fn summarize_family_paths<I, S>(paths: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut summary: Vec<String> = Vec::new();
    'paths: for path in paths {
        let path = path.as_ref();
        for existing in summary.iter_mut() {
            if is_same_or_ancestor(path, existing) {
                continue 'paths;
            }
            if is_same_or_ancestor(existing, path) {
                *existing = path.to_string();
                continue 'paths;
            }
        }
        summary.push(path.to_string());
    }
    summary
}

fn is_same_or_ancestor(ancestor: &str, path: &str) -> bool {
    if ancestor.is_empty() {
        return true;
    }
    match path.strip_prefix(ancestor) {
        Some(rest) => {
            rest.is_empty() || ancestor.ends_with('/') || rest.starts_with('/')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_slashes() {
        assert_eq!(remove_start_slash("//a/b/"), "a/b/");
        assert_eq!(remove_end_slash("/a/b//"), "/a/b");
        assert_eq!(remove_both_ends_slash("//a/b//"), "a/b");
        assert_eq!(remove_both_ends_slash("///"), "");
        assert_eq!(remove_both_ends_slash(""), "");
    }

    #[test]
    fn strips_leading_dir_chars() {
        assert_eq!(remove_start_dir_chars("./aaa"), "aaa");
        assert_eq!(remove_start_dir_chars("../aaa"), "aaa");
        assert_eq!(remove_start_dir_chars("/aaa"), "aaa");
        assert_eq!(remove_start_dir_chars("aaa/bbb"), "aaa/bbb");
        assert_eq!(remove_start_dir_chars(""), "");
    }

    #[test]
    fn splits_file_path() {
        assert_eq!(
            split_file_path("d1/d11/fileA.txt"),
            FilePathParts {
                file_name: "fileA.txt",
                dir_path: "d1/d11",
            }
        );
        assert_eq!(
            split_file_path("fileA.txt"),
            FilePathParts {
                file_name: "fileA.txt",
                dir_path: "",
            }
        );
        assert_eq!(split_file_path("d1/").file_name, "");
    }

    #[test]
    fn expands_hierarchy() {
        let result = split_hierarchical_paths([
            "d1/d11/fileA.txt",
            "d1/d11/fileB.txt",
            "",
            "/d2//",
        ]);
        assert_eq!(
            result,
            vec![
                "d1",
                "d1/d11",
                "d1/d11/fileA.txt",
                "d1/d11/fileB.txt",
                "d2",
            ]
        );
    }

    #[test]
    fn summarizes_families() {
        let result = summarize_family_paths([
            "d1/d11",
            "d1/d11/d111",
            "d1/d11/d112",
            "d2/d21",
            "d2/d21/d211",
        ]);
        assert_eq!(result, vec!["d1/d11/d111", "d1/d11/d112", "d2/d21/d211"]);
    }

    #[test]
    fn summary_drops_ancestors_seen_later() {
        let result = summarize_family_paths(["a/b/c", "a/b", "a", "a/b/c"]);
        assert_eq!(result, vec!["a/b/c"]);
    }

    #[test]
    fn empty_path_belongs_to_every_family() {
        assert_eq!(summarize_family_paths(["", "a/b"]), vec!["a/b"]);
        assert_eq!(summarize_family_paths(["a/b", ""]), vec!["a/b"]);
        assert_eq!(summarize_family_paths(["", ""]), vec![""]);
    }

    #[test]
    fn summary_respects_segment_boundaries() {
        let result = summarize_family_paths(["d1/d1", "d1/d11"]);
        assert_eq!(result, vec!["d1/d1", "d1/d11"]);
    }
}
