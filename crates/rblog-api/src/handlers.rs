//! # rblog-api Handlers
//!
//! This module coordinates the flow between HTTP requests and Core policies.
//! Every handler resolves the requester once, applies the relevant core
//! decision (visibility, ownership, validation), and either renders a
//! template or answers with a 303 redirect.

use actix_multipart::Multipart;
use actix_web::{web, HttpRequest, HttpResponse};
use askama::Template;
use chrono::Utc;
use futures_util::StreamExt as _;
use rblog_core::access::{detail_access, mutation_access, DetailAccess, MutationAccess};
use rblog_core::error::AppError;
use rblog_core::forms::{parse_pub_date, CommentDraft, Credentials, PostDraft, ProfileUpdate};
use rblog_core::listing::assemble_feed;
use rblog_core::models::{Category, Comment, Post, Requester, User};
use rblog_core::traits::{AuthProvider, BlogRepo, MediaStore};
use rblog_core::visibility::ViewScope;
use rblog_ui::{
    CategoryTemplate, CommentDeleteTemplate, CommentFormTemplate, CommentView, DetailTemplate,
    IndexTemplate, LoginTemplate, PostDeleteTemplate, PostFormTemplate, PostFormValues,
    ProfileEditTemplate, ProfileTemplate, RegistrationTemplate,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::error::{not_found, ApiError};
use crate::identity::{
    clear_session_cookie, current_requester, redirect, require_login, session_cookie,
};

/// State shared across all Actix-web workers.
pub struct AppState {
    pub repo: Arc<dyn BlogRepo>,
    pub store: Arc<dyn MediaStore>,
    pub auth: Arc<dyn AuthProvider>,
}

/// Uploads larger than this are rejected at parse time.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

type HandlerResult = Result<HttpResponse, ApiError>;

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Lenient: "?page=abc" means page 1, same as no parameter at all.
    fn number(&self) -> Option<usize> {
        self.page.as_deref().and_then(|s| s.parse().ok())
    }
}

fn current_username(requester: &Requester) -> Option<&str> {
    match requester {
        Requester::User { username, .. } => Some(username.as_str()),
        Requester::Anonymous => None,
    }
}

fn render<T: Template>(template: T) -> HandlerResult {
    let html = template
        .render()
        .map_err(|e| ApiError(AppError::Internal(format!("template rendering failed: {e}"))))?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

// ---------------------------------------------------------------------------
// Feeds
// ---------------------------------------------------------------------------

/// Home feed ("/"): every publicly visible post, newest first.
pub async fn index(
    state: web::Data<AppState>,
    req: HttpRequest,
    query: web::Query<PageQuery>,
) -> HandlerResult {
    let requester = current_requester(&req, &state).await;
    let entries = state.repo.all_entries().await?;
    let page = assemble_feed(entries, ViewScope::Public, Utc::now(), query.number());

    render(IndexTemplate {
        page: &page,
        title: "Rusty-Blog",
        current_user: current_username(&requester),
    })
}

/// Category feed. The category itself must exist and be published; an
/// unpublished category is indistinguishable from a missing one.
pub async fn category_posts(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> HandlerResult {
    let slug = path.into_inner();
    let requester = current_requester(&req, &state).await;

    let category = state
        .repo
        .get_category(&slug)
        .await?
        .filter(|c| c.is_published)
        .ok_or_else(|| not_found("Category", &slug))?;

    let entries = state.repo.entries_in_category(category.id).await?;
    let page = assemble_feed(entries, ViewScope::Public, Utc::now(), query.number());

    render(CategoryTemplate {
        category: &category,
        page: &page,
        title: &category.title,
        current_user: current_username(&requester),
    })
}

/// Profile feed. The owner and staff see drafts and scheduled posts too;
/// this is the deliberate owner/admin bypass, not a leak.
pub async fn profile(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    query: web::Query<PageQuery>,
) -> HandlerResult {
    let username = path.into_inner();
    let requester = current_requester(&req, &state).await;

    let user = state
        .repo
        .find_user(&username)
        .await?
        .ok_or_else(|| not_found("User", &username))?;

    let scope = ViewScope::for_profile(&requester, user.id);
    let entries = state.repo.entries_by_author(user.id).await?;
    let page = assemble_feed(entries, scope, Utc::now(), query.number());

    render(ProfileTemplate {
        profile: &user,
        page: &page,
        title: &user.username,
        current_user: current_username(&requester),
        unrestricted: scope == ViewScope::Unrestricted,
    })
}

// ---------------------------------------------------------------------------
// Post detail
// ---------------------------------------------------------------------------

/// Full view of a single post. Authors see their own post in any state;
/// for everyone else a hidden post answers 404, never 403.
pub async fn post_detail(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> HandlerResult {
    let post_id = path.into_inner();
    let requester = current_requester(&req, &state).await;

    let entry = state
        .repo
        .get_entry(post_id)
        .await?
        .ok_or_else(|| not_found("Post", post_id))?;

    if detail_access(&requester, &entry, Utc::now()) == DetailAccess::Hidden {
        return Err(not_found("Post", post_id));
    }

    let comments = state.repo.comments_for(post_id).await?;
    let comment_views: Vec<CommentView<'_>> = comments
        .iter()
        .map(|c| CommentView {
            entry: c,
            is_author: requester.is_author(c.comment.author_id),
        })
        .collect();
    let image_url = match &entry.post.image_id {
        Some(id) => Some(state.store.get_url(id).await),
        None => None,
    };

    render(DetailTemplate {
        entry: &entry,
        comments: &comment_views,
        image_url: image_url.as_deref(),
        title: &entry.post.title,
        current_user: current_username(&requester),
        is_author: requester.is_author(entry.post.author_id),
    })
}

// ---------------------------------------------------------------------------
// Post create / edit / delete
// ---------------------------------------------------------------------------

/// Everything a post form can submit, still unvalidated.
#[derive(Debug, Default)]
struct PostSubmission {
    title: String,
    body: String,
    category: String,
    pub_date: String,
    is_published: bool,
    image: Option<(Vec<u8>, String)>,
}

impl PostSubmission {
    fn values(&self) -> PostFormValues<'_> {
        PostFormValues {
            post_title: &self.title,
            body: &self.body,
            category_slug: &self.category,
            pub_date: &self.pub_date,
            is_published: self.is_published,
        }
    }
}

/// Drains a multipart body into a `PostSubmission`. Unknown fields are
/// ignored; an oversized image aborts the whole request.
async fn read_post_submission(mut payload: Multipart) -> Result<PostSubmission, ApiError> {
    let mut submission = PostSubmission::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| AppError::ValidationError(format!("malformed form data: {e}")))?;
        let name = field.name().to_string();
        let content_type = field.content_type().map(|m| m.to_string());

        let mut data = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk =
                chunk.map_err(|e| AppError::ValidationError(format!("upload interrupted: {e}")))?;
            data.extend_from_slice(&chunk);
            if data.len() > MAX_UPLOAD_BYTES {
                return Err(ApiError(AppError::ValidationError(
                    "image exceeds the 10 MiB upload limit".into(),
                )));
            }
        }

        match name.as_str() {
            "title" => submission.title = String::from_utf8_lossy(&data).into_owned(),
            "body" => submission.body = String::from_utf8_lossy(&data).into_owned(),
            "category" => submission.category = String::from_utf8_lossy(&data).into_owned(),
            "pub_date" => submission.pub_date = String::from_utf8_lossy(&data).into_owned(),
            "is_published" => submission.is_published = true,
            "image" => {
                if !data.is_empty() {
                    let ct = content_type.unwrap_or_else(|| "application/octet-stream".into());
                    submission.image = Some((data, ct));
                }
            }
            _ => {}
        }
    }

    Ok(submission)
}

async fn published_categories(state: &AppState) -> Result<Vec<Category>, ApiError> {
    let categories = state.repo.list_categories().await?;
    Ok(categories.into_iter().filter(|c| c.is_published).collect())
}

fn post_form_page(
    heading: &str,
    action: &str,
    categories: &[Category],
    values: PostFormValues<'_>,
    error: Option<&str>,
    current_user: Option<&str>,
) -> HandlerResult {
    render(PostFormTemplate {
        heading,
        action,
        categories,
        values,
        error,
        title: heading,
        current_user,
    })
}

/// Turns a submission into a validated draft plus its resolved category.
/// A blank publish date means "now".
async fn resolve_draft(
    state: &AppState,
    submission: &PostSubmission,
) -> Result<(PostDraft, Category), AppError> {
    let pub_date = if submission.pub_date.trim().is_empty() {
        Utc::now()
    } else {
        parse_pub_date(&submission.pub_date)?
    };

    let draft = PostDraft {
        title: submission.title.clone(),
        body: submission.body.clone(),
        category_slug: submission.category.clone(),
        pub_date,
        is_published: submission.is_published,
    };
    draft.validate()?;

    let category = state
        .repo
        .get_category(&draft.category_slug)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
        .ok_or_else(|| AppError::ValidationError("unknown category".into()))?;

    Ok((draft, category))
}

pub async fn create_post_form(state: web::Data<AppState>, req: HttpRequest) -> HandlerResult {
    let requester = current_requester(&req, &state).await;
    let (_, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let categories = published_categories(&state).await?;
    let pub_date = Utc::now().format("%Y-%m-%dT%H:%M").to_string();
    let values = PostFormValues {
        pub_date: &pub_date,
        is_published: true,
        ..Default::default()
    };

    post_form_page("New post", "/posts/create/", &categories, values, None, Some(&username))
}

pub async fn create_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    payload: Multipart,
) -> HandlerResult {
    let requester = current_requester(&req, &state).await;
    let (user_id, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let submission = read_post_submission(payload).await?;
    let (draft, category) = match resolve_draft(&state, &submission).await {
        Ok(v) => v,
        Err(AppError::ValidationError(message)) => {
            let categories = published_categories(&state).await?;
            return post_form_page(
                "New post",
                "/posts/create/",
                &categories,
                submission.values(),
                Some(&message),
                Some(&username),
            );
        }
        Err(other) => return Err(ApiError(other)),
    };

    let image_id = match submission.image {
        Some((data, content_type)) => Some(state.store.save_upload(data, &content_type).await?),
        None => None,
    };

    state
        .repo
        .create_post(Post {
            id: Uuid::now_v7(),
            author_id: user_id,
            category_id: category.id,
            title: draft.title.trim().to_string(),
            body: draft.body,
            image_id,
            pub_date: draft.pub_date,
            is_published: draft.is_published,
            created_at: Utc::now(),
        })
        .await?;

    Ok(redirect(&format!("/profile/{username}/")))
}

pub async fn edit_post_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> HandlerResult {
    let post_id = path.into_inner();
    let requester = current_requester(&req, &state).await;
    let (_, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let entry = state
        .repo
        .get_entry(post_id)
        .await?
        .ok_or_else(|| not_found("Post", post_id))?;

    if mutation_access(&requester, entry.post.author_id) == MutationAccess::RedirectToPost {
        return Ok(redirect(&format!("/posts/{post_id}/")));
    }

    let categories = published_categories(&state).await?;
    let pub_date = entry.post.pub_date.format("%Y-%m-%dT%H:%M").to_string();
    let action = format!("/posts/{post_id}/edit/");
    let values = PostFormValues {
        post_title: &entry.post.title,
        body: &entry.post.body,
        category_slug: &entry.category.slug,
        pub_date: &pub_date,
        is_published: entry.post.is_published,
    };

    post_form_page("Edit post", &action, &categories, values, None, Some(&username))
}

pub async fn edit_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    payload: Multipart,
) -> HandlerResult {
    let post_id = path.into_inner();
    let requester = current_requester(&req, &state).await;
    let (_, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let entry = state
        .repo
        .get_entry(post_id)
        .await?
        .ok_or_else(|| not_found("Post", post_id))?;

    if mutation_access(&requester, entry.post.author_id) == MutationAccess::RedirectToPost {
        return Ok(redirect(&format!("/posts/{post_id}/")));
    }

    let submission = read_post_submission(payload).await?;
    let action = format!("/posts/{post_id}/edit/");
    let (draft, category) = match resolve_draft(&state, &submission).await {
        Ok(v) => v,
        Err(AppError::ValidationError(message)) => {
            let categories = published_categories(&state).await?;
            return post_form_page(
                "Edit post",
                &action,
                &categories,
                submission.values(),
                Some(&message),
                Some(&username),
            );
        }
        Err(other) => return Err(ApiError(other)),
    };

    // A fresh upload replaces the image; otherwise the existing one stays.
    let image_id = match submission.image {
        Some((data, content_type)) => Some(state.store.save_upload(data, &content_type).await?),
        None => entry.post.image_id.clone(),
    };

    state
        .repo
        .update_post(Post {
            id: post_id,
            author_id: entry.post.author_id,
            category_id: category.id,
            title: draft.title.trim().to_string(),
            body: draft.body,
            image_id,
            pub_date: draft.pub_date,
            is_published: draft.is_published,
            created_at: entry.post.created_at,
        })
        .await?;

    Ok(redirect(&format!("/posts/{post_id}/")))
}

pub async fn delete_post_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> HandlerResult {
    let post_id = path.into_inner();
    let requester = current_requester(&req, &state).await;
    let (_, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let entry = state
        .repo
        .get_entry(post_id)
        .await?
        .ok_or_else(|| not_found("Post", post_id))?;

    if mutation_access(&requester, entry.post.author_id) == MutationAccess::RedirectToPost {
        return Ok(redirect(&format!("/posts/{post_id}/")));
    }

    render(PostDeleteTemplate {
        entry: &entry,
        title: "Delete post",
        current_user: Some(&username),
    })
}

pub async fn delete_post(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
) -> HandlerResult {
    let post_id = path.into_inner();
    let requester = current_requester(&req, &state).await;
    if require_login(&requester).is_err() {
        return Ok(redirect("/auth/login/"));
    }

    let entry = state
        .repo
        .get_entry(post_id)
        .await?
        .ok_or_else(|| not_found("Post", post_id))?;

    if mutation_access(&requester, entry.post.author_id) == MutationAccess::RedirectToPost {
        return Ok(redirect(&format!("/posts/{post_id}/")));
    }

    state.repo.delete_post(post_id).await?;
    Ok(redirect("/"))
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

pub async fn add_comment(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<Uuid>,
    form: web::Form<CommentDraft>,
) -> HandlerResult {
    let post_id = path.into_inner();
    let requester = current_requester(&req, &state).await;
    let (user_id, _) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    state
        .repo
        .get_entry(post_id)
        .await?
        .ok_or_else(|| not_found("Post", post_id))?;

    let draft = form.into_inner();
    // An invalid comment is dropped silently; the detail view is the answer
    // either way.
    if draft.validate().is_ok() {
        state
            .repo
            .create_comment(Comment {
                id: Uuid::now_v7(),
                post_id,
                author_id: user_id,
                text: draft.text.trim().to_string(),
                created_at: Utc::now(),
            })
            .await?;
    }

    Ok(redirect(&format!("/posts/{post_id}/")))
}

/// Looks up the comment and applies the ownership gate. `Err` carries the
/// ready-made response (redirect or 404) for the caller to return.
async fn owned_comment(
    state: &AppState,
    requester: &Requester,
    post_id: Uuid,
    comment_id: Uuid,
) -> Result<Comment, Result<HttpResponse, ApiError>> {
    let comment = match state.repo.get_comment(comment_id).await {
        Ok(Some(c)) => c,
        Ok(None) => return Err(Err(not_found("Comment", comment_id))),
        Err(e) => return Err(Err(ApiError::from(e))),
    };

    if mutation_access(requester, comment.author_id) == MutationAccess::RedirectToPost {
        return Err(Ok(redirect(&format!("/posts/{post_id}/"))));
    }

    Ok(comment)
}

pub async fn edit_comment_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> HandlerResult {
    let (post_id, comment_id) = path.into_inner();
    let requester = current_requester(&req, &state).await;
    let (_, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let comment = match owned_comment(&state, &requester, post_id, comment_id).await {
        Ok(c) => c,
        Err(out) => return out,
    };

    render(CommentFormTemplate {
        post_id: &post_id.to_string(),
        comment_id: &comment_id.to_string(),
        text: &comment.text,
        error: None,
        title: "Edit comment",
        current_user: Some(&username),
    })
}

pub async fn edit_comment(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
    form: web::Form<CommentDraft>,
) -> HandlerResult {
    let (post_id, comment_id) = path.into_inner();
    let requester = current_requester(&req, &state).await;
    let (_, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let _comment = match owned_comment(&state, &requester, post_id, comment_id).await {
        Ok(c) => c,
        Err(out) => return out,
    };

    let draft = form.into_inner();
    if let Err(AppError::ValidationError(message)) = draft.validate() {
        return render(CommentFormTemplate {
            post_id: &post_id.to_string(),
            comment_id: &comment_id.to_string(),
            text: &draft.text,
            error: Some(&message),
            title: "Edit comment",
            current_user: Some(&username),
        });
    }

    state
        .repo
        .update_comment(comment_id, draft.text.trim())
        .await?;

    Ok(redirect(&format!("/posts/{post_id}/")))
}

pub async fn delete_comment_form(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> HandlerResult {
    let (post_id, comment_id) = path.into_inner();
    let requester = current_requester(&req, &state).await;
    let (_, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let comment = match owned_comment(&state, &requester, post_id, comment_id).await {
        Ok(c) => c,
        Err(out) => return out,
    };

    render(CommentDeleteTemplate {
        post_id: &post_id.to_string(),
        comment_id: &comment_id.to_string(),
        text: &comment.text,
        title: "Delete comment",
        current_user: Some(&username),
    })
}

pub async fn delete_comment(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<(Uuid, Uuid)>,
) -> HandlerResult {
    let (post_id, comment_id) = path.into_inner();
    let requester = current_requester(&req, &state).await;
    if require_login(&requester).is_err() {
        return Ok(redirect("/auth/login/"));
    }

    match owned_comment(&state, &requester, post_id, comment_id).await {
        Ok(_) => {}
        Err(out) => return out,
    }

    state.repo.delete_comment(comment_id).await?;
    Ok(redirect(&format!("/posts/{post_id}/")))
}

// ---------------------------------------------------------------------------
// Profile editing
// ---------------------------------------------------------------------------

pub async fn edit_profile_form(state: web::Data<AppState>, req: HttpRequest) -> HandlerResult {
    let requester = current_requester(&req, &state).await;
    let (user_id, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let user = state
        .repo
        .find_user_by_id(user_id)
        .await?
        .ok_or_else(|| not_found("User", user_id))?;

    render(ProfileEditTemplate {
        display_name: user.display_name.as_deref().unwrap_or(""),
        email: user.email.as_deref().unwrap_or(""),
        error: None,
        title: "Edit profile",
        current_user: Some(&username),
    })
}

pub async fn edit_profile(
    state: web::Data<AppState>,
    req: HttpRequest,
    form: web::Form<ProfileUpdate>,
) -> HandlerResult {
    let requester = current_requester(&req, &state).await;
    let (user_id, username) = match require_login(&requester) {
        Ok(v) => v,
        Err(resp) => return Ok(resp),
    };

    let update = form.into_inner().normalized();
    if let Err(AppError::ValidationError(message)) = update.validate() {
        return render(ProfileEditTemplate {
            display_name: update.display_name.as_deref().unwrap_or(""),
            email: update.email.as_deref().unwrap_or(""),
            error: Some(&message),
            title: "Edit profile",
            current_user: Some(&username),
        });
    }

    state.repo.update_profile(user_id, &update).await?;
    Ok(redirect(&format!("/profile/{username}/")))
}

// ---------------------------------------------------------------------------
// Auth flows
// ---------------------------------------------------------------------------

pub async fn login_form(state: web::Data<AppState>, req: HttpRequest) -> HandlerResult {
    let requester = current_requester(&req, &state).await;
    render(LoginTemplate {
        error: None,
        title: "Log in",
        current_user: current_username(&requester),
    })
}

pub async fn login(state: web::Data<AppState>, form: web::Form<Credentials>) -> HandlerResult {
    let creds = form.into_inner();

    let verified = match state.repo.credentials(&creds.username).await? {
        Some((user_id, hash)) if state.auth.verify_password(&creds.password, &hash).await => {
            Some(user_id)
        }
        // Wrong password and unknown user read identically
        _ => None,
    };

    match verified {
        Some(user_id) => {
            let token = state.auth.issue_session(user_id);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/"))
                .cookie(session_cookie(token))
                .finish())
        }
        None => render(LoginTemplate {
            error: Some("Invalid username or password."),
            title: "Log in",
            current_user: None,
        }),
    }
}

pub async fn registration_form(state: web::Data<AppState>, req: HttpRequest) -> HandlerResult {
    let requester = current_requester(&req, &state).await;
    render(RegistrationTemplate {
        error: None,
        title: "Register",
        current_user: current_username(&requester),
    })
}

pub async fn register(state: web::Data<AppState>, form: web::Form<Credentials>) -> HandlerResult {
    let creds = form.into_inner();

    if let Err(AppError::ValidationError(message)) = creds.validate() {
        return render(RegistrationTemplate {
            error: Some(&message),
            title: "Register",
            current_user: None,
        });
    }

    if state.repo.find_user(&creds.username).await?.is_some() {
        return render(RegistrationTemplate {
            error: Some("That username is taken."),
            title: "Register",
            current_user: None,
        });
    }

    let user_id = Uuid::now_v7();
    let hash = state.auth.hash_password(&creds.password)?;
    state
        .repo
        .create_user(
            User {
                id: user_id,
                username: creds.username.trim().to_string(),
                display_name: None,
                email: None,
                is_staff: false,
                joined_at: Utc::now(),
            },
            &hash,
        )
        .await?;

    // Registration logs the new user straight in
    let token = state.auth.issue_session(user_id);
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .cookie(session_cookie(token))
        .finish())
}

pub async fn logout() -> HandlerResult {
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", "/"))
        .cookie(clear_session_cookie())
        .finish())
}
