//! # Listing Assembler
//!
//! One pipeline for all three feeds (home, category, profile): order by
//! publish date descending, apply the visibility policy for the requester's
//! scope, paginate. Keeping this in one place stops the three call sites
//! from drifting apart.

use crate::models::PostEntry;
use crate::pagination::{paginate, Page, DEFAULT_PAGE_SIZE};
use crate::visibility::{filter_visible, ViewScope};
use chrono::{DateTime, Utc};

/// Builds a feed page from raw entries.
///
/// `Unrestricted` scope skips the visibility filter entirely — the
/// owner/staff override on profile feeds, intentional and not a leak.
pub fn assemble_feed(
    mut entries: Vec<PostEntry>,
    scope: ViewScope,
    now: DateTime<Utc>,
    requested_page: Option<usize>,
) -> Page<PostEntry> {
    entries.sort_by(|a, b| b.post.pub_date.cmp(&a.post.pub_date));

    let entries = match scope {
        ViewScope::Public => filter_visible(entries, now),
        ViewScope::Unrestricted => entries,
    };

    paginate(entries, requested_page, DEFAULT_PAGE_SIZE)
}
