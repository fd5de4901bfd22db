//! Slash-separated paths shared by every rules crate

use std::path::{Path, PathBuf};

/// A path stored with `/` separators.
///
/// Category inference reads directory names out of the path string, so
/// Windows separators are rewritten once on construction. Conversion back
/// to a [`PathBuf`] happens only where the filesystem is touched.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            inner: path.as_ref().to_string_lossy().replace('\\', "/"),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Append `segment`, inserting a separator only when one is missing.
    pub fn join(&self, segment: &str) -> Self {
        let segment = segment.replace('\\', "/");
        let inner = match self.inner.as_str() {
            "" => segment,
            base if base.ends_with('/') => format!("{}{}", base, segment),
            base => format!("{}/{}", base, segment),
        };
        Self { inner }
    }

    /// Last non-empty segment.
    pub fn file_name(&self) -> Option<&str> {
        self.inner
            .trim_end_matches('/')
            .rsplit('/')
            .next()
            .filter(|name| !name.is_empty())
    }

    /// Extension of the file name; dotfiles such as `.clinerules` have none.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name()?;
        match name.rfind('.') {
            Some(0) | None => None,
            Some(idx) => Some(&name[idx + 1..]),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backslashes_normalized() {
        let path = NormalizedPath::new(r"C:\rules\clinerules\system\a.md");
        assert_eq!(path.as_str(), "C:/rules/clinerules/system/a.md");
    }

    #[test]
    fn test_join_avoids_double_separator() {
        assert_eq!(NormalizedPath::new("/root/").join("output").as_str(), "/root/output");
        assert_eq!(
            NormalizedPath::new("/root").join(r"clinerules\system").as_str(),
            "/root/clinerules/system"
        );
        assert_eq!(NormalizedPath::new("").join("output").as_str(), "output");
    }

    #[test]
    fn test_file_name_of_directory_path() {
        assert_eq!(NormalizedPath::new("/root/clinerules/").file_name(), Some("clinerules"));
        assert_eq!(NormalizedPath::new("/").file_name(), None);
    }

    #[test]
    fn test_extension_ignores_dotfiles() {
        assert_eq!(NormalizedPath::new("out/.clinerules").extension(), None);
        assert_eq!(NormalizedPath::new("rules.toml").extension(), Some("toml"));
        assert_eq!(NormalizedPath::new("output/").extension(), None);
    }
}
