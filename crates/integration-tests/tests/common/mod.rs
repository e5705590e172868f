//! Shared fixtures for the end-to-end handler tests. Everything runs against
//! a fresh in-memory SQLite database per test.
#![allow(dead_code)] // not every test binary uses every fixture

use actix_web::web;
use chrono::{DateTime, Duration, Utc};
use rblog_api::handlers::AppState;
use rblog_auth_simple::SimpleAuthProvider;
use rblog_core::models::{Category, Post, User};
use rblog_core::traits::{AuthProvider, BlogRepo};
use rblog_db_sqlite::SqliteBlogRepo;
use rblog_storage_local::LocalMediaStore;
use std::sync::Arc;
use uuid::Uuid;

pub const TEST_SALT: &str = "integration-salt";

pub struct TestCtx {
    pub state: web::Data<AppState>,
    pub repo: Arc<SqliteBlogRepo>,
    pub auth: Arc<SimpleAuthProvider>,
}

pub async fn ctx() -> TestCtx {
    let repo = Arc::new(SqliteBlogRepo::new("sqlite::memory:").await.unwrap());
    let auth = Arc::new(SimpleAuthProvider::new(TEST_SALT));
    let store = Arc::new(LocalMediaStore::new(
        std::env::temp_dir().join("rblog-test-uploads"),
        "/static/uploads".into(),
    ));

    let state = web::Data::new(AppState {
        repo: repo.clone(),
        store,
        auth: auth.clone(),
    });

    TestCtx { state, repo, auth }
}

impl TestCtx {
    pub async fn seed_user(&self, username: &str) -> User {
        let user = User {
            id: Uuid::now_v7(),
            username: username.to_string(),
            display_name: None,
            email: None,
            is_staff: false,
            joined_at: Utc::now(),
        };
        let hash = self.auth.hash_password("password-123").unwrap();
        self.repo.create_user(user.clone(), &hash).await.unwrap();
        user
    }

    pub async fn seed_staff(&self, username: &str) -> User {
        let mut user = self.seed_user(username).await;
        // The repo has no staff toggle by design; flip the flag in place.
        sqlx_flip_staff(&self.repo, user.id).await;
        user.is_staff = true;
        user
    }

    pub async fn seed_category(&self, slug: &str, published: bool) -> Category {
        self.repo.seed_categories(&[(slug, slug)]).await.unwrap();
        let category = self.repo.get_category(slug).await.unwrap().unwrap();
        if !published {
            unpublish_category(&self.repo, category.id).await;
        }
        self.repo.get_category(slug).await.unwrap().unwrap()
    }

    pub async fn seed_post(
        &self,
        author: &User,
        category: &Category,
        title: &str,
        is_published: bool,
        pub_date: DateTime<Utc>,
    ) -> Post {
        let post = Post {
            id: Uuid::now_v7(),
            author_id: author.id,
            category_id: category.id,
            title: title.to_string(),
            body: format!("body of {title}"),
            image_id: None,
            pub_date,
            is_published,
            created_at: Utc::now(),
        };
        self.repo.create_post(post.clone()).await.unwrap();
        post
    }

    /// A post visible to everyone right now.
    pub async fn seed_live_post(&self, author: &User, category: &Category, title: &str) -> Post {
        self.seed_post(author, category, title, true, Utc::now() - Duration::hours(1))
            .await
    }

    /// Session cookie header value for an authenticated request.
    pub fn session_for(&self, user: &User) -> (&'static str, String) {
        let token = self.auth.issue_session(user.id);
        ("cookie", format!("rblog_session={token}"))
    }
}

async fn sqlx_flip_staff(repo: &SqliteBlogRepo, id: Uuid) {
    sqlx::query("UPDATE users SET is_staff = 1 WHERE id = ?")
        .bind(id.as_bytes().to_vec())
        .execute(repo.pool())
        .await
        .unwrap();
}

async fn unpublish_category(repo: &SqliteBlogRepo, id: Uuid) {
    sqlx::query("UPDATE categories SET is_published = 0 WHERE id = ?")
        .bind(id.as_bytes().to_vec())
        .execute(repo.pool())
        .await
        .unwrap();
}

/// Builds a multipart/form-data body for the post form.
/// Returns (content-type header value, body bytes).
pub fn multipart_form(fields: &[(&str, &str)]) -> (String, Vec<u8>) {
    let boundary = "----rblog-test-boundary";
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());
    (format!("multipart/form-data; boundary={boundary}"), body)
}

pub async fn body_string(resp: actix_web::dev::ServiceResponse) -> String {
    let bytes = actix_web::test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Location header of a redirect response.
pub fn location(resp: &actix_web::dev::ServiceResponse) -> String {
    resp.headers()
        .get("location")
        .expect("redirect has a Location header")
        .to_str()
        .unwrap()
        .to_string()
}
