//! # Form Data
//!
//! Validated shapes for everything users submit. Handlers build these from
//! raw request bodies; a `ValidationError` re-renders the form with the
//! message inline and applies no mutation.

use crate::error::{AppError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::Deserialize;

pub const MAX_TITLE_LEN: usize = 256;
pub const MAX_BODY_LEN: usize = 65_536;
pub const MAX_COMMENT_LEN: usize = 4_096;

/// A new or edited post, before the image upload is resolved.
#[derive(Debug, Clone)]
pub struct PostDraft {
    pub title: String,
    pub body: String,
    pub category_slug: String,
    pub pub_date: DateTime<Utc>,
    pub is_published: bool,
}

impl PostDraft {
    pub fn validate(&self) -> Result<()> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::ValidationError("title must not be blank".into()));
        }
        if title.len() > MAX_TITLE_LEN {
            return Err(AppError::ValidationError(format!(
                "title exceeds {MAX_TITLE_LEN} characters"
            )));
        }
        if self.body.trim().is_empty() {
            return Err(AppError::ValidationError("body must not be blank".into()));
        }
        if self.body.len() > MAX_BODY_LEN {
            return Err(AppError::ValidationError("body is too long".into()));
        }
        if self.category_slug.trim().is_empty() {
            return Err(AppError::ValidationError("category is required".into()));
        }
        Ok(())
    }
}

/// Parses the publish date as submitted by an HTML datetime-local input,
/// with a seconds-bearing fallback.
pub fn parse_pub_date(raw: &str) -> Result<DateTime<Utc>> {
    let raw = raw.trim();
    for fmt in ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Utc.from_utc_datetime(&naive));
        }
    }
    Err(AppError::ValidationError(format!(
        "unrecognized publish date: {raw}"
    )))
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentDraft {
    pub text: String,
}

impl CommentDraft {
    pub fn validate(&self) -> Result<()> {
        if self.text.trim().is_empty() {
            return Err(AppError::ValidationError("comment must not be blank".into()));
        }
        if self.text.len() > MAX_COMMENT_LEN {
            return Err(AppError::ValidationError("comment is too long".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub email: Option<String>,
}

impl ProfileUpdate {
    pub fn validate(&self) -> Result<()> {
        if let Some(email) = self.email.as_deref() {
            // A full RFC check belongs to the mail layer; reject the obvious.
            if !email.is_empty() && !email.contains('@') {
                return Err(AppError::ValidationError("email looks invalid".into()));
            }
        }
        Ok(())
    }

    /// Normalizes empty submissions to None.
    pub fn normalized(mut self) -> Self {
        let clean = |v: Option<String>| v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());
        self.display_name = clean(self.display_name);
        self.email = clean(self.email);
        self
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<()> {
        let name = self.username.trim();
        if name.len() < 3 || name.len() > 32 {
            return Err(AppError::ValidationError(
                "username must be 3 to 32 characters".into(),
            ));
        }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
            return Err(AppError::ValidationError(
                "username may only contain letters, digits, '_' and '-'".into(),
            ));
        }
        if self.password.len() < 8 {
            return Err(AppError::ValidationError(
                "password must be at least 8 characters".into(),
            ));
        }
        Ok(())
    }
}
