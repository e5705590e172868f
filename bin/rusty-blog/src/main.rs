//! # Rusty-Blog Binary
//!
//! The entry point that assembles the application based on compile-time features.

use actix_web::{web, App, HttpServer};
use rblog_api::handlers::AppState;
use rblog_api::middleware::standard_middleware;
use std::sync::Arc;

// Feature-gated imports: plugin crates are compiled to order
#[cfg(feature = "db-sqlite")]
use rblog_db_sqlite::SqliteBlogRepo;

#[cfg(feature = "storage-local")]
use rblog_storage_local::LocalMediaStore;

#[cfg(feature = "auth-simple")]
use rblog_auth_simple::SimpleAuthProvider;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let addr = std::env::var("RUSTY_BLOG_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into());
    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite:rusty_blog.db".into());
    let session_salt =
        std::env::var("SESSION_SALT").unwrap_or_else(|_| "dev-only-rotate-me".into());
    let upload_root = std::env::var("UPLOAD_ROOT").unwrap_or_else(|_| "./data/uploads".into());

    // 1. Initialize Database Implementation
    #[cfg(feature = "db-sqlite")]
    let repo = {
        let repo = SqliteBlogRepo::new(&database_url)
            .await
            .expect("Failed to init SQLite");
        repo.seed_categories(&[("general", "General"), ("travel", "Travel"), ("food", "Food")])
            .await
            .expect("Failed to seed categories");
        repo
    };

    // 2. Initialize Storage Implementation
    #[cfg(feature = "storage-local")]
    let store = LocalMediaStore::new(upload_root.clone().into(), "/static/uploads".into());

    // 3. Initialize Auth Implementation
    #[cfg(feature = "auth-simple")]
    let auth = SimpleAuthProvider::new(&session_salt);

    // 4. Wrap in AppState (dynamic dispatch keeps the plugin swap cheap)
    let state = web::Data::new(AppState {
        repo: Arc::new(repo),
        store: Arc::new(store),
        auth: Arc::new(auth),
    });

    log::info!("Rusty-Blog starting on http://{addr}");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(standard_middleware())
            .service(actix_files::Files::new("/static/uploads", upload_root.clone()))
            .service(actix_files::Files::new("/static", "./static"))
            .configure(rblog_api::configure_routes)
    })
    .bind(&addr)?
    .run()
    .await
}
