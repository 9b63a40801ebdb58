use std::fmt;

pub mod users {
    pub const NAME: &str = "users";
}

pub mod storage_nodes {
    pub const NAME: &str = "storage-nodes";
}

pub mod article_tags {
    pub const NAME: &str = "article-tags";
}

/// Persisted entity collections, keyed by their collection name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Entity {
    Users,
    StorageNodes,
    ArticleTags,
}

impl Entity {
    pub const ALL: [Entity; 3] =
        [Entity::Users, Entity::StorageNodes, Entity::ArticleTags];

    /// Collection name the entity is stored under.
    pub fn name(&self) -> &'static str {
        match self {
            Entity::Users => users::NAME,
            Entity::StorageNodes => storage_nodes::NAME,
            Entity::ArticleTags => article_tags::NAME,
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
