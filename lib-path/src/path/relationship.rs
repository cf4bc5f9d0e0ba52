//! Path relationship checking.
//!
//! This module determines how two canonical paths relate to each other in
//! the directory hierarchy. Comparison is per component: `/a` is an ancestor
//! of `/a/b` but unrelated to `/ab`.

use super::normalize::path_remove_trailing_slashes;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use lib_path::path::PathRelationship;
///
/// assert_eq!(
///     PathRelationship::between("/home/user", "/home/user/project"),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The second path lies somewhere beneath the first.
    Ancestor,

    /// The first path lies somewhere beneath the second.
    Descendant,

    /// The paths are the same after removing trailing slashes.
    Same,

    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// Both paths should already be in canonical form; only separators and
    /// trailing slashes are normalized here.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathRelationship;
    ///
    /// assert_eq!(PathRelationship::between("/a", "/a/b"), PathRelationship::Ancestor);
    /// assert_eq!(PathRelationship::between("/a/b", "/a"), PathRelationship::Descendant);
    /// assert_eq!(PathRelationship::between("/a/", "/a"), PathRelationship::Same);
    /// assert_eq!(PathRelationship::between("/a", "/ab"), PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &str, path2: &str) -> Self {
        let p1 = path_remove_trailing_slashes(path1);
        let p2 = path_remove_trailing_slashes(path2);

        if p1 == p2 {
            Self::Same
        } else if is_component_prefix(&p1, &p2) {
            Self::Ancestor
        } else if is_component_prefix(&p2, &p1) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if `path` is within `directory` (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use lib_path::path::PathRelationship;
    ///
    /// assert!(PathRelationship::is_within("/home/user/file.txt", "/home/user"));
    /// assert!(PathRelationship::is_within("/home/user", "/home/user"));
    /// assert!(!PathRelationship::is_within("/home", "/home/user"));
    /// ```
    #[must_use]
    pub fn is_within(path: &str, directory: &str) -> bool {
        matches!(Self::between(path, directory), Self::Descendant | Self::Same)
    }
}

/// Whether `prefix` names `path` or one of its ancestors, by whole components.
fn is_component_prefix(prefix: &str, path: &str) -> bool {
    match path.strip_prefix(prefix) {
        Some(rest) => prefix.ends_with('/') || rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relationship_ancestor() {
        assert_eq!(PathRelationship::between("/a", "/a/b"), PathRelationship::Ancestor);
        assert_eq!(PathRelationship::between("/a/b", "/a/b/c/d"), PathRelationship::Ancestor);
        assert_eq!(PathRelationship::between("/", "/a"), PathRelationship::Ancestor);
        assert_eq!(
            PathRelationship::between("//main", "//main/share"),
            PathRelationship::Ancestor
        );
    }

    #[test]
    fn test_relationship_descendant() {
        assert_eq!(PathRelationship::between("/a/b", "/a"), PathRelationship::Descendant);
        assert_eq!(
            PathRelationship::between(r"c:\a\b", "c:/a"),
            PathRelationship::Descendant
        );
    }

    #[test]
    fn test_relationship_same() {
        assert_eq!(PathRelationship::between("/a/b/c", "/a/b/c"), PathRelationship::Same);
        assert_eq!(PathRelationship::between("/a/", "/a"), PathRelationship::Same);
        assert_eq!(PathRelationship::between("/", "/"), PathRelationship::Same);
    }

    #[test]
    fn test_relationship_unrelated() {
        assert_eq!(PathRelationship::between("/a", "/b"), PathRelationship::Unrelated);
        assert_eq!(PathRelationship::between("/a/b", "/a/c"), PathRelationship::Unrelated);
        assert_eq!(PathRelationship::between("/test", "/test2"), PathRelationship::Unrelated);
    }

    #[test]
    fn test_is_within() {
        assert!(PathRelationship::is_within("/a/b", "/a"));
        assert!(PathRelationship::is_within("/a", "/a"));
        assert!(!PathRelationship::is_within("/a", "/a/b"));
        assert!(!PathRelationship::is_within("/a", "/b"));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn path_strategy() -> impl Strategy<Value = String> {
            prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5)
                .prop_map(|parts| format!("/{}", parts.join("/")))
        }

        proptest! {
            /// A path is always the same as itself
            #[test]
            fn relationship_reflexive(s in path_strategy()) {
                prop_assert_eq!(PathRelationship::between(&s, &s), PathRelationship::Same);
            }

            /// If A is an ancestor of B, then B is a descendant of A
            #[test]
            fn relationship_symmetric(s1 in path_strategy(), s2 in path_strategy()) {
                let rel1 = PathRelationship::between(&s1, &s2);
                let rel2 = PathRelationship::between(&s2, &s1);

                match (rel1, rel2) {
                    (PathRelationship::Ancestor, PathRelationship::Descendant)
                    | (PathRelationship::Descendant, PathRelationship::Ancestor)
                    | (PathRelationship::Same, PathRelationship::Same)
                    | (PathRelationship::Unrelated, PathRelationship::Unrelated) => {}
                    _ => prop_assert!(false, "Invalid relationship symmetry: {:?} vs {:?}", rel1, rel2),
                }
            }

            /// Appending components always yields a descendant
            #[test]
            fn relationship_transitive(s in path_strategy()) {
                let child = format!("{s}/subdir");
                let grandchild = format!("{child}/nested");

                prop_assert_eq!(PathRelationship::between(&s, &child), PathRelationship::Ancestor);
                prop_assert_eq!(PathRelationship::between(&child, &grandchild), PathRelationship::Ancestor);
                prop_assert_eq!(PathRelationship::between(&s, &grandchild), PathRelationship::Ancestor);
            }
        }
    }
}
