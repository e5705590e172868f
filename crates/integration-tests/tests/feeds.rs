//! Feed behavior end-to-end: home, category, and profile listings.

mod common;

use actix_web::{test, App};
use chrono::{Duration, Utc};
use common::*;

macro_rules! app {
    ($ctx:expr) => {
        test::init_service(
            App::new()
                .app_data($ctx.state.clone())
                .configure(rblog_api::configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn home_feed_shows_only_publicly_visible_posts() {
    let ctx = ctx().await;
    let ann = ctx.seed_user("ann").await;
    let travel = ctx.seed_category("travel", true).await;
    let secret = ctx.seed_category("secret", false).await;

    ctx.seed_live_post(&ann, &travel, "Visible post").await;
    ctx.seed_post(&ann, &travel, "Draft post", false, Utc::now() - Duration::hours(1))
        .await;
    ctx.seed_post(&ann, &travel, "Scheduled post", true, Utc::now() + Duration::days(1))
        .await;
    ctx.seed_live_post(&ann, &secret, "Dead category post").await;

    let app = app!(ctx);
    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert!(resp.status().is_success());

    let body = body_string(resp).await;
    assert!(body.contains("Visible post"));
    assert!(!body.contains("Draft post"));
    assert!(!body.contains("Scheduled post"));
    assert!(!body.contains("Dead category post"));
}

#[actix_web::test]
async fn category_feed_lists_only_that_category() {
    let ctx = ctx().await;
    let ann = ctx.seed_user("ann").await;
    let travel = ctx.seed_category("travel", true).await;
    let food = ctx.seed_category("food", true).await;

    ctx.seed_live_post(&ann, &travel, "Travel post").await;
    ctx.seed_live_post(&ann, &food, "Food post").await;

    let app = app!(ctx);
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/category/travel/").to_request(),
    )
    .await;
    assert!(resp.status().is_success());

    let body = body_string(resp).await;
    assert!(body.contains("Travel post"));
    assert!(!body.contains("Food post"));
}

#[actix_web::test]
async fn unpublished_category_answers_not_found() {
    let ctx = ctx().await;
    let ann = ctx.seed_user("ann").await;
    let secret = ctx.seed_category("secret", false).await;
    ctx.seed_live_post(&ann, &secret, "Hidden").await;

    let app = app!(ctx);
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/category/secret/").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);

    let missing = test::call_service(
        &app,
        test::TestRequest::get().uri("/category/no-such/").to_request(),
    )
    .await;
    assert_eq!(missing.status(), 404);
}

#[actix_web::test]
async fn profile_feed_owner_sees_strictly_more_than_anonymous() {
    let ctx = ctx().await;
    let ann = ctx.seed_user("ann").await;
    let travel = ctx.seed_category("travel", true).await;

    ctx.seed_live_post(&ann, &travel, "Public post").await;
    ctx.seed_post(&ann, &travel, "Draft post", false, Utc::now() - Duration::hours(2))
        .await;

    let app = app!(ctx);

    let anon = test::call_service(
        &app,
        test::TestRequest::get().uri("/profile/ann/").to_request(),
    )
    .await;
    let anon_body = body_string(anon).await;
    assert!(anon_body.contains("Public post"));
    assert!(!anon_body.contains("Draft post"));

    let cookie = ctx.session_for(&ann);
    let owner = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/profile/ann/")
            .insert_header(cookie)
            .to_request(),
    )
    .await;
    let owner_body = body_string(owner).await;
    // Superset: everything anonymous saw, plus the draft
    assert!(owner_body.contains("Public post"));
    assert!(owner_body.contains("Draft post"));
}

#[actix_web::test]
async fn staff_see_drafts_on_other_profiles() {
    let ctx = ctx().await;
    let ann = ctx.seed_user("ann").await;
    let admin = ctx.seed_staff("admin").await;
    let travel = ctx.seed_category("travel", true).await;
    ctx.seed_post(&ann, &travel, "Draft post", false, Utc::now()).await;

    let app = app!(ctx);
    let cookie = ctx.session_for(&admin);
    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/profile/ann/")
            .insert_header(cookie)
            .to_request(),
    )
    .await;
    let body = body_string(resp).await;
    assert!(body.contains("Draft post"));
}

#[actix_web::test]
async fn unknown_profile_answers_not_found() {
    let ctx = ctx().await;
    let app = app!(ctx);
    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/profile/nobody/").to_request(),
    )
    .await;
    assert_eq!(resp.status(), 404);
}

#[actix_web::test]
async fn feed_pages_are_capped_and_clamped() {
    let ctx = ctx().await;
    let ann = ctx.seed_user("ann").await;
    let travel = ctx.seed_category("travel", true).await;

    for i in 0..12 {
        ctx.seed_post(
            &ann,
            &travel,
            &format!("Numbered post {i:02}"),
            true,
            Utc::now() - Duration::hours(i + 1),
        )
        .await;
    }

    let app = app!(ctx);

    // Page 1 holds the ten newest
    let first = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let first_body = body_string(first).await;
    assert!(first_body.contains("Numbered post 00"));
    assert!(first_body.contains("Numbered post 09"));
    assert!(!first_body.contains("Numbered post 10"));

    // Page 2 holds the remainder
    let second =
        test::call_service(&app, test::TestRequest::get().uri("/?page=2").to_request()).await;
    let second_body = body_string(second).await;
    assert!(second_body.contains("Numbered post 10"));
    assert!(second_body.contains("Numbered post 11"));
    assert!(!second_body.contains("Numbered post 09"));

    // Requests past the end land on the last page instead of failing
    let clamped =
        test::call_service(&app, test::TestRequest::get().uri("/?page=99").to_request()).await;
    assert!(clamped.status().is_success());
    let clamped_body = body_string(clamped).await;
    assert!(clamped_body.contains("Numbered post 11"));

    // Garbage page numbers read as page 1
    let garbage =
        test::call_service(&app, test::TestRequest::get().uri("/?page=abc").to_request()).await;
    assert!(garbage.status().is_success());
    let garbage_body = body_string(garbage).await;
    assert!(garbage_body.contains("Numbered post 00"));
}
