//! # Visibility Policy
//!
//! The one rule that recurs through the whole application: when is a post
//! publicly viewable? Evaluated at read time against a caller-supplied
//! clock, so scheduled posts appear on their own without any background job.

use crate::models::{Category, Post, PostEntry, Requester};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// The visibility invariant: published, in a published category, and past
/// its publish date.
pub fn is_publicly_visible(post: &Post, category: &Category, now: DateTime<Utc>) -> bool {
    post.is_published && category.is_published && post.pub_date <= now
}

/// Keeps exactly the entries satisfying the invariant, preserving order.
/// Empty input yields empty output.
pub fn filter_visible(entries: Vec<PostEntry>, now: DateTime<Utc>) -> Vec<PostEntry> {
    entries
        .into_iter()
        .filter(|e| is_publicly_visible(&e.post, &e.category, now))
        .collect()
}

/// How much of a listing the requester may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewScope {
    /// Only entries satisfying the visibility invariant.
    Public,
    /// Everything, hidden and scheduled posts included.
    Unrestricted,
}

impl ViewScope {
    /// Scope for a profile feed: the profile owner and staff see everything,
    /// everyone else sees the public subset.
    pub fn for_profile(requester: &Requester, owner_id: Uuid) -> ViewScope {
        if requester.is_author(owner_id) || requester.is_staff() {
            ViewScope::Unrestricted
        } else {
            ViewScope::Public
        }
    }
}
