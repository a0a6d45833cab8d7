//! In-memory project file tree.

use indexmap::IndexMap;
use indexmap::map::Entry;

/// Content of one file in a [`VirtualFileTree`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// UTF-8 text, written to the archive as its UTF-8 bytes.
    Text(String),
    /// Raw bytes, written as-is.
    Binary(Vec<u8>),
}

impl FileContent {
    /// Bytes that end up in the archive.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Binary(bytes) => bytes,
        }
    }

    /// Text content, or `None` for binary files.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Binary(_) => None,
        }
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FileContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<u8>> for FileContent {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Binary(bytes)
    }
}

/// Ordered mapping from forward-slash relative paths to file contents.
///
/// Iteration follows first-insertion order. Writing an existing path replaces
/// its content in place, so a scaffold default overwritten by generated
/// content keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VirtualFileTree {
    files: IndexMap<String, FileContent>,
}

impl VirtualFileTree {
    /// Create an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a file, returning the content it replaced.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        content: impl Into<FileContent>,
    ) -> Option<FileContent> {
        match self.files.entry(path.into()) {
            Entry::Occupied(mut entry) => Some(entry.insert(content.into())),
            Entry::Vacant(entry) => {
                entry.insert(content.into());
                None
            }
        }
    }

    /// Content stored at `path`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileContent> {
        self.files.get(path)
    }

    /// Text content stored at `path`; `None` if missing or binary.
    #[must_use]
    pub fn get_text(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(FileContent::as_text)
    }

    /// Whether a file exists at `path`.
    #[must_use]
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Number of files.
    #[must_use]
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the tree has no files.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Iterate `(path, content)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileContent)> {
        self.files.iter().map(|(path, content)| (path.as_str(), content))
    }

    /// Iterate paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl<P, C> FromIterator<(P, C)> for VirtualFileTree
where
    P: Into<String>,
    C: Into<FileContent>,
{
    fn from_iter<I: IntoIterator<Item = (P, C)>>(iter: I) -> Self {
        let mut tree = Self::new();
        for (path, content) in iter {
            tree.insert(path, content);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut tree = VirtualFileTree::new();
        assert!(tree.insert("src/main.ts", "bootstrap();").is_none());
        assert_eq!(tree.get_text("src/main.ts"), Some("bootstrap();"));
        assert!(tree.contains("src/main.ts"));
        assert_eq!(tree.len(), 1);
    }

    #[test]
    fn test_overwrite_keeps_position() {
        let mut tree: VirtualFileTree = [("a.txt", "1"), ("b.txt", "2"), ("c.txt", "3")]
            .into_iter()
            .collect();
        let previous = tree.insert("a.txt", "one");
        assert_eq!(previous, Some(FileContent::from("1")));

        let paths: Vec<_> = tree.paths().collect();
        assert_eq!(paths, ["a.txt", "b.txt", "c.txt"]);
        assert_eq!(tree.get_text("a.txt"), Some("one"));
    }

    #[test]
    fn test_binary_content() {
        let mut tree = VirtualFileTree::new();
        tree.insert("src/assets/logo.png", vec![0x89, b'P', b'N', b'G']);
        let content = tree.get("src/assets/logo.png").unwrap();
        assert_eq!(content.as_bytes(), &[0x89, b'P', b'N', b'G']);
        assert!(content.as_text().is_none());
        assert!(tree.get_text("src/assets/logo.png").is_none());
    }

    #[test]
    fn test_empty_tree() {
        let tree = VirtualFileTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.iter().count(), 0);
    }
}
