//! # rblog-api
//!
//! The web routing and orchestration layer for Rusty-Blog.

pub mod error;
pub mod handlers;
pub mod identity;
pub mod middleware;

use actix_web::web;

/// Configures the routes for the blog.
///
/// # Developer Note
/// We use a scoped configuration to allow the main binary to mount
/// the app under different paths if needed. Literal segments
/// ("/posts/create/", "/profile/edit/") are registered before their
/// parameterized siblings so they are never captured as ids.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            // Feeds
            .route("/", web::get().to(handlers::index))
            .route("/category/{slug}/", web::get().to(handlers::category_posts))
            // Posts
            .route("/posts/create/", web::get().to(handlers::create_post_form))
            .route("/posts/create/", web::post().to(handlers::create_post))
            .route("/posts/{post_id}/", web::get().to(handlers::post_detail))
            .route("/posts/{post_id}/edit/", web::get().to(handlers::edit_post_form))
            .route("/posts/{post_id}/edit/", web::post().to(handlers::edit_post))
            .route("/posts/{post_id}/delete/", web::get().to(handlers::delete_post_form))
            .route("/posts/{post_id}/delete/", web::post().to(handlers::delete_post))
            // Comments
            .route("/posts/{post_id}/comment/", web::post().to(handlers::add_comment))
            .route(
                "/posts/{post_id}/edit_comment/{comment_id}/",
                web::get().to(handlers::edit_comment_form),
            )
            .route(
                "/posts/{post_id}/edit_comment/{comment_id}/",
                web::post().to(handlers::edit_comment),
            )
            .route(
                "/posts/{post_id}/delete_comment/{comment_id}/",
                web::get().to(handlers::delete_comment_form),
            )
            .route(
                "/posts/{post_id}/delete_comment/{comment_id}/",
                web::post().to(handlers::delete_comment),
            )
            // Profiles
            .route("/profile/edit/", web::get().to(handlers::edit_profile_form))
            .route("/profile/edit/", web::post().to(handlers::edit_profile))
            .route("/profile/{username}/", web::get().to(handlers::profile))
            // Auth
            .route("/auth/login/", web::get().to(handlers::login_form))
            .route("/auth/login/", web::post().to(handlers::login))
            .route("/auth/logout/", web::get().to(handlers::logout))
            .route("/auth/registration/", web::get().to(handlers::registration_form))
            .route("/auth/registration/", web::post().to(handlers::register)),
    );
}
