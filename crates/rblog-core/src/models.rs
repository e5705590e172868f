//! # Domain Models
//!
//! These structs represent the core entities of Rusty-Blog.
//! We use UUID v7 for time-ordered, globally unique identification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered author. Password material never lives on this struct;
/// it stays behind the `AuthProvider` and `BlogRepo` ports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique login name, also the profile URL segment
    pub username: String,
    pub display_name: Option<String>,
    pub email: Option<String>,
    /// Staff accounts see unpublished posts in profile feeds
    pub is_staff: bool,
    pub joined_at: DateTime<Utc>,
}

/// A publication section (e.g., "travel", "recipes").
/// Managed out of band; read-only to this application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: Uuid,
    /// The URL slug (e.g., "travel" for /category/travel/)
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    /// Unpublishing a category hides every post in it
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// The fundamental unit of publication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Uuid,
    pub title: String,
    pub body: String,
    /// ID of the media handled by MediaStore
    pub image_id: Option<String>,
    /// May be in the future; the post stays hidden until then
    pub pub_date: DateTime<Utc>,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
}

/// A reader's comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Read model for listings and the detail page: a post joined with the
/// context the visibility rule and the templates need.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEntry {
    pub post: Post,
    pub category: Category,
    pub author_name: String,
    pub comment_count: i64,
}

/// A comment joined with its author's name, for rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentEntry {
    pub comment: Comment,
    pub author_name: String,
}

/// Who is asking. Resolved once per request from the session cookie and
/// passed explicitly into every operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Requester {
    Anonymous,
    User {
        id: Uuid,
        username: String,
        is_staff: bool,
    },
}

impl Requester {
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            Requester::Anonymous => None,
            Requester::User { id, .. } => Some(*id),
        }
    }

    pub fn is_staff(&self) -> bool {
        matches!(self, Requester::User { is_staff: true, .. })
    }

    /// True when the requester is exactly this author.
    pub fn is_author(&self, author_id: Uuid) -> bool {
        self.user_id() == Some(author_id)
    }
}
