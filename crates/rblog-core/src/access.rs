//! # Access Policies
//!
//! Two small, named decisions that the handlers apply verbatim. Both
//! collapse "you may not" into a neutral outward signal on purpose:
//! hidden posts read as nonexistent, and mutation attempts by non-authors
//! bounce back to the read view without an error.

use crate::models::{PostEntry, Requester};
use crate::visibility::is_publicly_visible;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Outcome of a single-post read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAccess {
    Granted,
    /// Surface as NotFound, never Forbidden.
    Hidden,
}

/// The author may always read their own post, drafts and scheduled posts
/// included. Everyone else — staff too — needs the visibility invariant.
pub fn detail_access(requester: &Requester, entry: &PostEntry, now: DateTime<Utc>) -> DetailAccess {
    if requester.is_author(entry.post.author_id) {
        return DetailAccess::Granted;
    }
    if is_publicly_visible(&entry.post, &entry.category, now) {
        DetailAccess::Granted
    } else {
        DetailAccess::Hidden
    }
}

/// Outcome of an edit/delete attempt on a post or comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationAccess {
    Granted,
    /// Silent no-op: send the requester to the post's read view.
    RedirectToPost,
}

/// Only the original author may mutate. No staff override.
pub fn mutation_access(requester: &Requester, author_id: Uuid) -> MutationAccess {
    if requester.is_author(author_id) {
        MutationAccess::Granted
    } else {
        MutationAccess::RedirectToPost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Post};
    use chrono::Duration;

    fn entry(author_id: Uuid, published: bool, pub_date: DateTime<Utc>) -> PostEntry {
        let category_id = Uuid::now_v7();
        PostEntry {
            post: Post {
                id: Uuid::now_v7(),
                author_id,
                category_id,
                title: "post".into(),
                body: "...".into(),
                image_id: None,
                pub_date,
                is_published: published,
                created_at: Utc::now(),
            },
            category: Category {
                id: category_id,
                slug: "c".into(),
                title: "C".into(),
                description: None,
                is_published: true,
                created_at: Utc::now(),
            },
            author_name: "ann".into(),
            comment_count: 0,
        }
    }

    fn user(id: Uuid, is_staff: bool) -> Requester {
        Requester::User {
            id,
            username: "someone".into(),
            is_staff,
        }
    }

    #[test]
    fn author_previews_their_own_draft() {
        let now = Utc::now();
        let author_id = Uuid::now_v7();
        let draft = entry(author_id, false, now + Duration::days(3));

        assert_eq!(detail_access(&user(author_id, false), &draft, now), DetailAccess::Granted);
    }

    #[test]
    fn hidden_post_reads_as_absent_to_everyone_else() {
        let now = Utc::now();
        let draft = entry(Uuid::now_v7(), false, now - Duration::days(1));

        assert_eq!(detail_access(&Requester::Anonymous, &draft, now), DetailAccess::Hidden);
        // Staff get no special treatment on the detail route
        assert_eq!(detail_access(&user(Uuid::now_v7(), true), &draft, now), DetailAccess::Hidden);
    }

    #[test]
    fn visible_post_is_granted_to_anyone() {
        let now = Utc::now();
        let live = entry(Uuid::now_v7(), true, now - Duration::hours(1));

        assert_eq!(detail_access(&Requester::Anonymous, &live, now), DetailAccess::Granted);
    }

    #[test]
    fn only_the_author_may_mutate() {
        let author_id = Uuid::now_v7();

        assert_eq!(mutation_access(&user(author_id, false), author_id), MutationAccess::Granted);
        assert_eq!(
            mutation_access(&user(Uuid::now_v7(), true), author_id),
            MutationAccess::RedirectToPost
        );
        assert_eq!(
            mutation_access(&Requester::Anonymous, author_id),
            MutationAccess::RedirectToPost
        );
    }
}
