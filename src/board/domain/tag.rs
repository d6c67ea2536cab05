//! Tags and the fixed catalog they are picked from.

use super::{BoardDomainError, TagId};
use serde::{Deserialize, Serialize};

/// Labeled, colored classifier attached to tasks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Catalog identifier.
    pub id: TagId,
    /// Display name.
    pub name: String,
    /// Display color, usually a `#rrggbb` string.
    pub color: String,
}

impl Tag {
    /// Creates a tag.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: TagId::new(id),
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Fixed set of tags offered when editing a task.
///
/// The catalog is supplied by the embedding application; tasks store copies
/// of whichever tags were selected, so the catalog itself is never persisted
/// with the boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagCatalog {
    tags: Vec<Tag>,
}

impl TagCatalog {
    /// Creates a catalog from the given tags, keeping their order.
    #[must_use]
    pub fn new(tags: impl IntoIterator<Item = Tag>) -> Self {
        Self {
            tags: tags.into_iter().collect(),
        }
    }

    /// Returns all catalog tags in presentation order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Looks up a tag by identifier.
    #[must_use]
    pub fn get(&self, id: &TagId) -> Option<&Tag> {
        self.tags.iter().find(|tag| &tag.id == id)
    }

    /// Resolves identifiers into catalog tags, preserving the requested order.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::UnknownTag`] for the first identifier that
    /// is not part of the catalog.
    pub fn resolve(&self, ids: &[TagId]) -> Result<Vec<Tag>, BoardDomainError> {
        ids.iter()
            .map(|id| {
                self.get(id)
                    .cloned()
                    .ok_or_else(|| BoardDomainError::UnknownTag(id.clone()))
            })
            .collect()
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::new([
            Tag::new("1", "Urgent", "#ff4d4f"),
            Tag::new("2", "Important", "#faad14"),
            Tag::new("3", "Later", "#1890ff"),
        ])
    }
}
