//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use crate::forms::ProfileUpdate;
use crate::models::{Category, Comment, CommentEntry, Post, PostEntry, User};
use async_trait::async_trait;
use uuid::Uuid;

/// Data persistence contract for users, categories, posts, and comments.
///
/// Listing methods return `PostEntry` rows (post + category + author name +
/// comment count) ordered by `pub_date` descending. Visibility filtering is
/// NOT applied here; that is core policy, not storage.
#[async_trait]
pub trait BlogRepo: Send + Sync {
    // User operations
    async fn create_user(&self, user: User, password_hash: &str) -> anyhow::Result<()>;
    async fn find_user(&self, username: &str) -> anyhow::Result<Option<User>>;
    async fn find_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>>;
    /// Returns (user id, stored password hash) for login verification.
    async fn credentials(&self, username: &str) -> anyhow::Result<Option<(Uuid, String)>>;
    async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> anyhow::Result<()>;

    // Category operations
    async fn get_category(&self, slug: &str) -> anyhow::Result<Option<Category>>;
    async fn list_categories(&self) -> anyhow::Result<Vec<Category>>;

    // Post operations
    async fn all_entries(&self) -> anyhow::Result<Vec<PostEntry>>;
    async fn entries_in_category(&self, category_id: Uuid) -> anyhow::Result<Vec<PostEntry>>;
    async fn entries_by_author(&self, author_id: Uuid) -> anyhow::Result<Vec<PostEntry>>;
    async fn get_entry(&self, post_id: Uuid) -> anyhow::Result<Option<PostEntry>>;
    async fn create_post(&self, post: Post) -> anyhow::Result<()>;
    async fn update_post(&self, post: Post) -> anyhow::Result<()>;
    /// Deletes the post and its comments atomically.
    async fn delete_post(&self, id: Uuid) -> anyhow::Result<()>;

    // Comment operations
    /// Comments for a post, ordered by creation time ascending.
    async fn comments_for(&self, post_id: Uuid) -> anyhow::Result<Vec<CommentEntry>>;
    async fn get_comment(&self, id: Uuid) -> anyhow::Result<Option<Comment>>;
    async fn create_comment(&self, comment: Comment) -> anyhow::Result<()>;
    async fn update_comment(&self, id: Uuid, text: &str) -> anyhow::Result<()>;
    async fn delete_comment(&self, id: Uuid) -> anyhow::Result<()>;
}

/// Media storage contract for handling uploads and thumbnails.
#[async_trait]
pub trait MediaStore: Send + Sync {
    /// Saves raw bytes and returns a media_id for the Post model.
    async fn save_upload(&self, data: Vec<u8>, content_type: &str) -> anyhow::Result<String>;
    /// Returns the URL or path to the original media.
    async fn get_url(&self, media_id: &str) -> String;
    /// Returns the URL or path to the thumbnail.
    async fn get_thumbnail_url(&self, media_id: &str) -> String;
}

/// Identity contract: password handling and session tokens.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Hashes a password for storage at registration time.
    fn hash_password(&self, password: &str) -> anyhow::Result<String>;

    /// Verifies a password against a stored hash.
    async fn verify_password(&self, password: &str, hash: &str) -> bool;

    /// Issues a signed session token for the given user.
    fn issue_session(&self, user_id: Uuid) -> String;

    /// Verifies a session token, returning the user it was issued to.
    fn verify_session(&self, token: &str) -> Option<Uuid>;
}
