//! Stateless path string rules.
//!
//! Every function here first converts backslashes to forward slashes and
//! then reasons purely on string prefixes and suffixes (`:` at position 1,
//! `//` at position 0). Nothing touches the filesystem.
//!
//! The two `normpath` flavors collapse `.`/`..` segments and duplicate
//! separators following POSIX and Windows rules respectively; they are the
//! building blocks of [`PathNormalizer`](super::PathNormalizer).

/// Trims surrounding whitespace and replaces every `\` with `/`.
///
/// # Examples
///
/// ```
/// use lib_path::path::normalize::strip_and_replace_backslashes;
///
/// assert_eq!(strip_and_replace_backslashes(r"c:\test"), "c:/test");
/// assert_eq!(strip_and_replace_backslashes(r"  \\main\install "), "//main/install");
/// ```
#[must_use]
pub fn strip_and_replace_backslashes(path: &str) -> String {
    path.trim().replace('\\', "/")
}

/// Returns `true` if the path is a Windows network (UNC) path like `//server/share`.
///
/// # Examples
///
/// ```
/// use lib_path::path::normalize::is_windows_network_unc;
///
/// assert!(!is_windows_network_unc("/test"));
/// assert!(!is_windows_network_unc("c:/test"));
/// assert!(is_windows_network_unc(r"\\main\install"));
/// ```
#[must_use]
pub fn is_windows_network_unc(path: &str) -> bool {
    strip_and_replace_backslashes(path).starts_with("//")
}

/// Returns `true` if the path starts with a drive letter like `c:/`.
///
/// # Examples
///
/// ```
/// use lib_path::path::normalize::path_starts_with_windows_drive_letter;
///
/// assert!(!path_starts_with_windows_drive_letter("//main/install"));
/// assert!(!path_starts_with_windows_drive_letter("/test"));
/// assert!(path_starts_with_windows_drive_letter(r"c:\test"));
/// ```
#[must_use]
pub fn path_starts_with_windows_drive_letter(path: &str) -> bool {
    drive_prefix_len(&strip_and_replace_backslashes(path)).is_some()
}

/// Removes a leading `x:` drive prefix, leaving any other path unchanged.
///
/// The result is always backslash-normalized.
///
/// # Examples
///
/// ```
/// use lib_path::path::normalize::subtract_windows_drive_letter;
///
/// assert_eq!(subtract_windows_drive_letter("c:/test"), "/test");
/// assert_eq!(subtract_windows_drive_letter("//main/install"), "//main/install");
/// assert_eq!(subtract_windows_drive_letter("/test"), "/test");
/// ```
#[must_use]
pub fn subtract_windows_drive_letter(path: &str) -> String {
    let path = strip_and_replace_backslashes(path);
    match drive_prefix_len(&path) {
        Some(len) => path[len..].to_string(),
        None => path,
    }
}

/// Removes trailing slashes.
///
/// A path made only of slashes keeps its root: `//` for a UNC root and `/`
/// otherwise.
///
/// # Examples
///
/// ```
/// use lib_path::path::normalize::path_remove_trailing_slashes;
///
/// assert_eq!(path_remove_trailing_slashes("//test//"), "//test");
/// assert_eq!(path_remove_trailing_slashes("//test"), "//test");
/// assert_eq!(path_remove_trailing_slashes("////"), "//");
/// ```
#[must_use]
pub fn path_remove_trailing_slashes(path: &str) -> String {
    let path = strip_and_replace_backslashes(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() && !path.is_empty() {
        if path.starts_with("//") {
            "//".to_string()
        } else {
            "/".to_string()
        }
    } else {
        trimmed.to_string()
    }
}

/// Returns the final path component without its last extension.
///
/// Leading dots do not start an extension, so `.test` stays `.test`.
///
/// # Examples
///
/// ```
/// use lib_path::path::normalize::basename_without_extension;
///
/// assert_eq!(basename_without_extension("//main/xyz/test.txt"), "test");
/// assert_eq!(basename_without_extension("//main/xyz/test.txt.back"), "test.txt");
/// assert_eq!(basename_without_extension("//main/xyz/.test"), ".test");
/// assert_eq!(basename_without_extension("//main/xyz/.test.txt"), ".test");
/// ```
#[must_use]
pub fn basename_without_extension(path: &str) -> String {
    let path = strip_and_replace_backslashes(path);
    let name = path
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    match name.rfind('.') {
        Some(i) if i > 0 && i < name.len() - 1 => name[..i].to_string(),
        _ => name.to_string(),
    }
}

/// Classifies a raw path by its spelling.
///
/// Shorthand for [`PathClassification::of`](super::PathClassification::of).
///
/// # Examples
///
/// ```
/// use lib_path::path::normalize::classify_path;
/// use lib_path::path::PathClassification;
///
/// assert_eq!(classify_path(r"d:\data"), PathClassification::AbsoluteDrive);
/// ```
#[must_use]
pub fn classify_path(path: &str) -> super::PathClassification {
    super::PathClassification::of(path)
}

/// Returns everything before the last `/`, without trailing slashes.
///
/// Roots keep their slash: a head made only of slashes is returned as-is and
/// a drive root stays `x:/`. A path without any slash has an empty dirname.
/// Expects a backslash-normalized path.
pub(crate) fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        None => "",
        Some(i) => {
            let head = &path[..=i];
            let trimmed = head.trim_end_matches('/');
            if trimmed.is_empty() {
                head
            } else if drive_prefix_len(head) == Some(trimmed.len()) {
                &head[..=trimmed.len()]
            } else {
                trimmed
            }
        }
    }
}

/// Byte length of an `x:/` style drive prefix (`x:`), if present.
pub(crate) fn drive_prefix_len(path: &str) -> Option<usize> {
    let mut chars = path.chars();
    let first = chars.next()?;
    chars
        .as_str()
        .starts_with(":/")
        .then(|| first.len_utf8() + 1)
}

/// Splits a Windows drive (`x:`, lowercased) from the rest of a path.
fn split_windows_drive(path: &str) -> (String, &str) {
    let mut chars = path.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) => {
            let len = letter.len_utf8() + 1;
            (format!("{}:", letter.to_lowercase()), &path[len..])
        }
        _ => (String::new(), path),
    }
}

/// Collapses `.`, `..` and repeated separators following POSIX rules.
///
/// Exactly two leading slashes are preserved; one or three and more collapse
/// to a single slash. `..` above the root is dropped; leading `..` of a
/// relative path is kept. An empty result becomes `.`.
pub(crate) fn posix_normpath(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let initial_slashes = if path.starts_with("//") && !path.starts_with("///") {
        2
    } else if path.starts_with('/') {
        1
    } else {
        0
    };

    let mut components: Vec<&str> = Vec::new();
    for component in path.split('/') {
        match component {
            "" | "." => {}
            ".." => match components.last() {
                Some(&last) if last != ".." => {
                    components.pop();
                }
                _ if initial_slashes > 0 => {}
                _ => components.push(".."),
            },
            _ => components.push(component),
        }
    }

    let normalized = format!("{}{}", "/".repeat(initial_slashes), components.join("/"));
    if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

/// Collapses `.`, `..` and repeated separators following Windows rules.
///
/// Operates on forward-slash paths. A leading drive letter is lowercased and
/// kept; any number of leading slashes becomes a single root. UNC prefixes
/// are not recognized here; callers strip and restore them.
pub(crate) fn windows_normpath(path: &str) -> String {
    let (drive, rest) = split_windows_drive(path);
    let rooted = rest.starts_with('/');

    let mut components: Vec<&str> = Vec::new();
    for component in rest.split('/') {
        match component {
            "" | "." => {}
            ".." => match components.last() {
                Some(&last) if last != ".." => {
                    components.pop();
                }
                _ if rooted => {}
                _ => components.push(".."),
            },
            _ => components.push(component),
        }
    }

    let mut normalized = drive;
    if rooted {
        normalized.push('/');
    }
    normalized.push_str(&components.join("/"));
    if normalized.is_empty() {
        ".".to_string()
    } else {
        normalized
    }
}

/// Makes a normalized Windows-flavored path absolute against `cwd`.
///
/// A rooted path without a drive inherits the drive of `cwd` (if any); a
/// drive-relative path (`d:foo`) resolves against `cwd` when the drives
/// match and against the drive root otherwise.
///
/// With a UNC `cwd` the result keeps its `//` prefix; a rooted path without a
/// drive then lands on the `//server/share` of `cwd`.
pub(crate) fn windows_absolutize(path: &str, cwd: &str) -> String {
    let (drive, rest) = split_windows_drive(path);

    if drive.is_empty() {
        if let Some(share) = unc_share(cwd) {
            let joined = if rest.starts_with('/') {
                format!("{share}{path}")
            } else {
                format!("{cwd}/{path}")
            };
            let rooted = format!("/{}", joined.trim_start_matches('/'));
            return format!("/{}", windows_normpath(&rooted));
        }
    }

    let (cwd_drive, _) = split_windows_drive(cwd);

    let joined = match (drive.is_empty(), rest.starts_with('/')) {
        (false, true) => path.to_string(),
        (true, true) => format!("{cwd_drive}{path}"),
        (false, false) if drive == cwd_drive => format!("{cwd}/{rest}"),
        (false, false) => format!("{drive}/{rest}"),
        (true, false) => format!("{cwd}/{path}"),
    };
    windows_normpath(&joined)
}

/// The `//server/share` head of a UNC path.
fn unc_share(path: &str) -> Option<String> {
    if !is_windows_network_unc(path) {
        return None;
    }
    let mut parts = path.split('/').filter(|c| !c.is_empty());
    let server = parts.next()?;
    Some(match parts.next() {
        Some(share) => format!("//{server}/{share}"),
        None => format!("//{server}"),
    })
}

/// Makes a POSIX-flavored path absolute against `cwd`.
pub(crate) fn posix_absolutize(path: &str, cwd: &str) -> String {
    if path.starts_with('/') {
        posix_normpath(path)
    } else {
        posix_normpath(&format!("{cwd}/{path}"))
    }
}
