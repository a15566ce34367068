use std::path::{PathBuf, MAIN_SEPARATOR};

/// Helpers for building backend-native path strings.
pub struct PortablePath;

impl PortablePath {
    /// The separator the current backend uses between path segments
    pub const DIRECTORY_SEPARATOR: char = MAIN_SEPARATOR;

    /// Join path segments with the native separator.
    ///
    /// Empty segments are skipped. A segment that is itself absolute replaces
    /// everything before it, as with [`PathBuf::push`].
    ///
    /// ```
    /// use core_storage::PortablePath;
    ///
    /// let path = PortablePath::combine(&["Docs", "2024", "notes.txt"]);
    /// assert!(path.ends_with("notes.txt"));
    /// ```
    pub fn combine(segments: &[&str]) -> String {
        segments
            .iter()
            .filter(|segment| !segment.is_empty())
            .fold(PathBuf::new(), |mut path, segment| {
                path.push(segment);
                path
            })
            .to_string_lossy()
            .into_owned()
    }
}
