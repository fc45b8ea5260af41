//! Core domain types: the ordered path-to-slug mapping and well-known file names.

/// Manifest file at the project root.
pub const MANIFEST_FILE_NAME: &str = "agmd.yml";

/// Aggregate document written at the project root, and the file fetched from each remote.
pub const AGENTS_FILE_NAME: &str = "AGENTS.md";

/// Optional local override appended after every remote section.
pub const LOCAL_OVERRIDE_FILE_NAME: &str = "AGENTS.local.md";

/// Key used for the project root itself.
pub const ROOT_KEY: &str = ".";

/// Ordered mapping of project-relative path keys to GitHub slugs.
///
/// Keys are unique. Updating an existing key keeps its position; new keys
/// are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mapping {
    entries: Vec<(String, String)>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`, returning the previous slug if there was one.
    pub fn insert(&mut self, key: impl Into<String>, slug: impl Into<String>) -> Option<String> {
        let key = key.into();
        let slug = slug.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, value)) => Some(std::mem::replace(value, slug)),
            None => {
                self.entries.push((key, slug));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut mapping = Mapping::new();
        for (key, slug) in iter {
            mapping.insert(key, slug);
        }
        mapping
    }
}
