//! # rblog-ui
//!
//! Askama templates for every page Rusty-Blog serves. Structs borrow from
//! the handler's data; rendering never owns anything.

use askama::Template;
use rblog_core::models::{Category, CommentEntry, PostEntry, User};
use rblog_core::pagination::Page;

/// Home feed ("/").
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub page: &'a Page<PostEntry>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Category feed ("/category/{slug}/").
#[derive(Template)]
#[template(path = "category.html")]
pub struct CategoryTemplate<'a> {
    pub category: &'a Category,
    pub page: &'a Page<PostEntry>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Profile feed ("/profile/{username}/").
#[derive(Template)]
#[template(path = "profile.html")]
pub struct ProfileTemplate<'a> {
    pub profile: &'a User,
    pub page: &'a Page<PostEntry>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
    /// Owner/staff view: feed includes hidden and scheduled posts
    pub unrestricted: bool,
}

/// A comment prepared for rendering: the row plus whether the current
/// requester wrote it (controls edit/delete links).
pub struct CommentView<'a> {
    pub entry: &'a CommentEntry,
    pub is_author: bool,
}

/// Single post with its comments and the add-comment form.
#[derive(Template)]
#[template(path = "detail.html")]
pub struct DetailTemplate<'a> {
    pub entry: &'a PostEntry,
    pub comments: &'a [CommentView<'a>],
    pub image_url: Option<&'a str>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
    /// Requester authored this post; shows edit/delete controls
    pub is_author: bool,
}

/// Create/edit post form. `values` echoes the submission on a validation
/// failure so nothing the user typed is lost.
#[derive(Template)]
#[template(path = "post_form.html")]
pub struct PostFormTemplate<'a> {
    pub heading: &'a str,
    pub action: &'a str,
    pub categories: &'a [Category],
    pub values: PostFormValues<'a>,
    pub error: Option<&'a str>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Raw field values for the post form.
#[derive(Debug, Default, Clone, Copy)]
pub struct PostFormValues<'a> {
    pub post_title: &'a str,
    pub body: &'a str,
    pub category_slug: &'a str,
    pub pub_date: &'a str,
    pub is_published: bool,
}

/// Delete-post confirmation page.
#[derive(Template)]
#[template(path = "post_confirm_delete.html")]
pub struct PostDeleteTemplate<'a> {
    pub entry: &'a PostEntry,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Edit-comment form.
#[derive(Template)]
#[template(path = "comment_form.html")]
pub struct CommentFormTemplate<'a> {
    pub post_id: &'a str,
    pub comment_id: &'a str,
    pub text: &'a str,
    pub error: Option<&'a str>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Delete-comment confirmation page.
#[derive(Template)]
#[template(path = "comment_confirm_delete.html")]
pub struct CommentDeleteTemplate<'a> {
    pub post_id: &'a str,
    pub comment_id: &'a str,
    pub text: &'a str,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Profile edit form.
#[derive(Template)]
#[template(path = "profile_edit.html")]
pub struct ProfileEditTemplate<'a> {
    pub display_name: &'a str,
    pub email: &'a str,
    pub error: Option<&'a str>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Login form.
#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub error: Option<&'a str>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Registration form.
#[derive(Template)]
#[template(path = "registration.html")]
pub struct RegistrationTemplate<'a> {
    pub error: Option<&'a str>,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}

/// Minimal page for error responses (404 and friends).
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub status: u16,
    pub message: &'a str,
    pub title: &'a str,
    pub current_user: Option<&'a str>,
}
