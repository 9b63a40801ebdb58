//! Names of the storage roots and well-known files.

/// Per-user storage area.
pub mod users {
    pub const ROOT_NAME: &str = "users";
}

/// Article storage area and the files each article directory holds.
pub mod articles {
    pub const ROOT_NAME: &str = "articles";
    pub const ASSETS_NAME: &str = "assets";
    pub const MASTER_SRC_FILE_NAME: &str = "master-src.md";
    pub const DRAFT_SRC_FILE_NAME: &str = "draft-src.md";
}
