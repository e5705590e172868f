//! # rblog-db-sqlite Implementation
//!
//! This module implements the data mapping between the SQLite relational
//! model and the `rblog-core` domain models.

use async_trait::async_trait;
use rblog_core::forms::ProfileUpdate;
use rblog_core::models::{Category, Comment, CommentEntry, Post, PostEntry, User};
use rblog_core::traits::BlogRepo;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use uuid::Uuid;

pub struct SqliteBlogRepo {
    pool: SqlitePool,
}

// Helper for UUID conversion
fn uuid_to_blob(id: Uuid) -> Vec<u8> {
    id.as_bytes().to_vec()
}

fn blob_to_uuid(blob: &[u8]) -> Uuid {
    Uuid::from_slice(blob).unwrap_or_default()
}

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS users (
    id            BLOB PRIMARY KEY,
    username      TEXT NOT NULL UNIQUE,
    display_name  TEXT,
    email         TEXT,
    is_staff      INTEGER NOT NULL DEFAULT 0,
    password_hash TEXT NOT NULL,
    joined_at     TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS categories (
    id           BLOB PRIMARY KEY,
    slug         TEXT NOT NULL UNIQUE,
    title        TEXT NOT NULL,
    description  TEXT,
    is_published INTEGER NOT NULL DEFAULT 1,
    created_at   TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS posts (
    id           BLOB PRIMARY KEY,
    author_id    BLOB NOT NULL REFERENCES users(id),
    category_id  BLOB NOT NULL REFERENCES categories(id),
    title        TEXT NOT NULL,
    body         TEXT NOT NULL,
    image_id     TEXT,
    pub_date     TEXT NOT NULL,
    is_published INTEGER NOT NULL DEFAULT 1,
    created_at   TEXT NOT NULL
);
CREATE TABLE IF NOT EXISTS comments (
    id         BLOB PRIMARY KEY,
    post_id    BLOB NOT NULL REFERENCES posts(id),
    author_id  BLOB NOT NULL REFERENCES users(id),
    text       TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_posts_category ON posts(category_id);
CREATE INDEX IF NOT EXISTS idx_posts_author   ON posts(author_id);
CREATE INDEX IF NOT EXISTS idx_comments_post  ON comments(post_id);
";

/// Shared SELECT for every PostEntry query: post + category + author name +
/// correlated comment count, newest publish date first.
const ENTRY_SELECT: &str = "
SELECT p.id, p.author_id, p.category_id, p.title, p.body, p.image_id,
       p.pub_date, p.is_published, p.created_at,
       c.id AS cat_id, c.slug AS cat_slug, c.title AS cat_title,
       c.description AS cat_description, c.is_published AS cat_is_published,
       c.created_at AS cat_created_at,
       u.username AS author_name,
       (SELECT COUNT(*) FROM comments cm WHERE cm.post_id = p.id) AS comment_count
FROM posts p
JOIN categories c ON c.id = p.category_id
JOIN users u ON u.id = p.author_id
";

impl SqliteBlogRepo {
    /// Connects (creating the file when missing) and applies the schema.
    pub async fn new(url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let mut pool_options = SqlitePoolOptions::new();
        // A ":memory:" database lives and dies with its connection; the pool
        // gets exactly one and must never recycle it.
        if url.contains(":memory:") {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }
        let pool = pool_options.connect_with(options).await?;
        // One statement per query; SQLite's driver does not take batches.
        for stmt in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(stmt).execute(&pool).await?;
        }
        Ok(Self { pool })
    }

    /// Direct pool access for out-of-band administration (seeding scripts,
    /// staff flags, category toggles) and tests.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Inserts categories that do not exist yet. Category management is out
    /// of band; this gives a fresh database something to post into.
    pub async fn seed_categories(&self, seeds: &[(&str, &str)]) -> anyhow::Result<()> {
        for (slug, title) in seeds {
            sqlx::query(
                "INSERT OR IGNORE INTO categories (id, slug, title, description, is_published, created_at)
                 VALUES (?, ?, ?, NULL, 1, ?)",
            )
            .bind(uuid_to_blob(Uuid::now_v7()))
            .bind(slug)
            .bind(title)
            .bind(chrono::Utc::now())
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }
}

fn category_from_row(row: &SqliteRow) -> Category {
    Category {
        id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
        slug: row.get("slug"),
        title: row.get("title"),
        description: row.get("description"),
        is_published: row.get("is_published"),
        created_at: row.get("created_at"),
    }
}

fn user_from_row(row: &SqliteRow) -> User {
    User {
        id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
        username: row.get("username"),
        display_name: row.get("display_name"),
        email: row.get("email"),
        is_staff: row.get("is_staff"),
        joined_at: row.get("joined_at"),
    }
}

fn entry_from_row(row: &SqliteRow) -> PostEntry {
    PostEntry {
        post: Post {
            id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
            author_id: blob_to_uuid(row.get::<Vec<u8>, _>("author_id").as_slice()),
            category_id: blob_to_uuid(row.get::<Vec<u8>, _>("category_id").as_slice()),
            title: row.get("title"),
            body: row.get("body"),
            image_id: row.get("image_id"),
            pub_date: row.get("pub_date"),
            is_published: row.get("is_published"),
            created_at: row.get("created_at"),
        },
        category: Category {
            id: blob_to_uuid(row.get::<Vec<u8>, _>("cat_id").as_slice()),
            slug: row.get("cat_slug"),
            title: row.get("cat_title"),
            description: row.get("cat_description"),
            is_published: row.get("cat_is_published"),
            created_at: row.get("cat_created_at"),
        },
        author_name: row.get("author_name"),
        comment_count: row.get("comment_count"),
    }
}

#[async_trait]
impl BlogRepo for SqliteBlogRepo {
    async fn create_user(&self, user: User, password_hash: &str) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO users (id, username, display_name, email, is_staff, password_hash, joined_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid_to_blob(user.id))
        .bind(user.username)
        .bind(user.display_name)
        .bind(user.email)
        .bind(user.is_staff)
        .bind(password_hash)
        .bind(user.joined_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find_user(&self, username: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, display_name, email, is_staff, joined_at FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn find_user_by_id(&self, id: Uuid) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, display_name, email, is_staff, joined_at FROM users WHERE id = ?",
        )
        .bind(uuid_to_blob(id))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn credentials(&self, username: &str) -> anyhow::Result<Option<(Uuid, String)>> {
        let row = sqlx::query("SELECT id, password_hash FROM users WHERE username = ?")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(|r| {
            (
                blob_to_uuid(r.get::<Vec<u8>, _>("id").as_slice()),
                r.get("password_hash"),
            )
        }))
    }

    async fn update_profile(&self, id: Uuid, update: &ProfileUpdate) -> anyhow::Result<()> {
        sqlx::query("UPDATE users SET display_name = ?, email = ? WHERE id = ?")
            .bind(update.display_name.as_deref())
            .bind(update.email.as_deref())
            .bind(uuid_to_blob(id))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_category(&self, slug: &str) -> anyhow::Result<Option<Category>> {
        let row = sqlx::query(
            "SELECT id, slug, title, description, is_published, created_at FROM categories WHERE slug = ?",
        )
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(category_from_row))
    }

    async fn list_categories(&self) -> anyhow::Result<Vec<Category>> {
        let rows = sqlx::query(
            "SELECT id, slug, title, description, is_published, created_at FROM categories ORDER BY title",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(category_from_row).collect())
    }

    async fn all_entries(&self) -> anyhow::Result<Vec<PostEntry>> {
        let sql = format!("{ENTRY_SELECT} ORDER BY p.pub_date DESC");
        let rows = sqlx::query(&sql).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(entry_from_row).collect())
    }

    async fn entries_in_category(&self, category_id: Uuid) -> anyhow::Result<Vec<PostEntry>> {
        let sql = format!("{ENTRY_SELECT} WHERE p.category_id = ? ORDER BY p.pub_date DESC");
        let rows = sqlx::query(&sql)
            .bind(uuid_to_blob(category_id))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(entry_from_row).collect())
    }

    async fn entries_by_author(&self, author_id: Uuid) -> anyhow::Result<Vec<PostEntry>> {
        let sql = format!("{ENTRY_SELECT} WHERE p.author_id = ? ORDER BY p.pub_date DESC");
        let rows = sqlx::query(&sql)
            .bind(uuid_to_blob(author_id))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.iter().map(entry_from_row).collect())
    }

    async fn get_entry(&self, post_id: Uuid) -> anyhow::Result<Option<PostEntry>> {
        let sql = format!("{ENTRY_SELECT} WHERE p.id = ?");
        let row = sqlx::query(&sql)
            .bind(uuid_to_blob(post_id))
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(entry_from_row))
    }

    async fn create_post(&self, post: Post) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO posts (id, author_id, category_id, title, body, image_id, pub_date, is_published, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(uuid_to_blob(post.id))
        .bind(uuid_to_blob(post.author_id))
        .bind(uuid_to_blob(post.category_id))
        .bind(post.title)
        .bind(post.body)
        .bind(post.image_id)
        .bind(post.pub_date)
        .bind(post.is_published)
        .bind(post.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_post(&self, post: Post) -> anyhow::Result<()> {
        sqlx::query(
            "UPDATE posts SET category_id = ?, title = ?, body = ?, image_id = ?, pub_date = ?, is_published = ?
             WHERE id = ?",
        )
        .bind(uuid_to_blob(post.category_id))
        .bind(post.title)
        .bind(post.body)
        .bind(post.image_id)
        .bind(post.pub_date)
        .bind(post.is_published)
        .bind(uuid_to_blob(post.id))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Atomic operation to delete a post together with its comments, so no
    /// orphan comments survive a partial failure.
    async fn delete_post(&self, id: Uuid) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("DELETE FROM comments WHERE post_id = ?")
            .bind(uuid_to_blob(id))
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(uuid_to_blob(id))
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(())
    }

    async fn comments_for(&self, post_id: Uuid) -> anyhow::Result<Vec<CommentEntry>> {
        let rows = sqlx::query(
            "SELECT cm.id, cm.post_id, cm.author_id, cm.text, cm.created_at, u.username AS author_name
             FROM comments cm
             JOIN users u ON u.id = cm.author_id
             WHERE cm.post_id = ?
             ORDER BY cm.created_at ASC",
        )
        .bind(uuid_to_blob(post_id))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CommentEntry {
                comment: Comment {
                    id: blob_to_uuid(row.get::<Vec<u8>, _>("id").as_slice()),
                    post_id: blob_to_uuid(row.get::<Vec<u8>, _>("post_id").as_slice()),
                    author_id: blob_to_uuid(row.get::<Vec<u8>, _>("author_id").as_slice()),
                    text: row.get("text"),
                    created_at: row.get("created_at"),
                },
                author_name: row.get("author_name"),
            })
            .collect())
    }

    async fn get_comment(&self, id: Uuid) -> anyhow::Result<Option<Comment>> {
        let row = sqlx::query("SELECT id, post_id, author_id, text, created_at FROM comments WHERE id = ?")
            .bind(uuid_to_blob(id))
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|r| Comment {
            id: blob_to_uuid(r.get::<Vec<u8>, _>("id").as_slice()),
            post_id: blob_to_uuid(r.get::<Vec<u8>, _>("post_id").as_slice()),
            author_id: blob_to_uuid(r.get::<Vec<u8>, _>("author_id").as_slice()),
            text: r.get("text"),
            created_at: r.get("created_at"),
        }))
    }

    async fn create_comment(&self, comment: Comment) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO comments (id, post_id, author_id, text, created_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(uuid_to_blob(comment.id))
        .bind(uuid_to_blob(comment.post_id))
        .bind(uuid_to_blob(comment.author_id))
        .bind(comment.text)
        .bind(comment.created_at)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn update_comment(&self, id: Uuid, text: &str) -> anyhow::Result<()> {
        sqlx::query("UPDATE comments SET text = ? WHERE id = ?")
            .bind(text)
            .bind(uuid_to_blob(id))
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn delete_comment(&self, id: Uuid) -> anyhow::Result<()> {
        sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(uuid_to_blob(id))
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    async fn memory_repo() -> SqliteBlogRepo {
        SqliteBlogRepo::new("sqlite::memory:").await.unwrap()
    }

    fn user(name: &str) -> User {
        User {
            id: Uuid::now_v7(),
            username: name.to_string(),
            display_name: None,
            email: None,
            is_staff: false,
            joined_at: Utc::now(),
        }
    }

    async fn seed_category(repo: &SqliteBlogRepo, slug: &str) -> Category {
        repo.seed_categories(&[(slug, "Test Category")]).await.unwrap();
        repo.get_category(slug).await.unwrap().unwrap()
    }

    fn post(author_id: Uuid, category_id: Uuid, title: &str) -> Post {
        Post {
            id: Uuid::now_v7(),
            author_id,
            category_id,
            title: title.to_string(),
            body: "body".to_string(),
            image_id: None,
            pub_date: Utc::now(),
            is_published: true,
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn create_and_fetch_entry_with_comment_count() {
        let repo = memory_repo().await;
        let author = user("ann");
        let author_id = author.id;
        repo.create_user(author, "hash").await.unwrap();
        let category = seed_category(&repo, "travel").await;

        let p = post(author_id, category.id, "First trip");
        let post_id = p.id;
        repo.create_post(p).await.unwrap();

        for text in ["nice", "very nice"] {
            repo.create_comment(Comment {
                id: Uuid::now_v7(),
                post_id,
                author_id,
                text: text.to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();
        }

        let entry = repo.get_entry(post_id).await.unwrap().expect("entry exists");
        assert_eq!(entry.post.title, "First trip");
        assert_eq!(entry.author_name, "ann");
        assert_eq!(entry.category.slug, "travel");
        assert_eq!(entry.comment_count, 2);
    }

    #[tokio::test]
    async fn entries_are_scoped_by_category_and_author() {
        let repo = memory_repo().await;
        let ann = user("ann");
        let bob = user("bob");
        let (ann_id, bob_id) = (ann.id, bob.id);
        repo.create_user(ann, "h1").await.unwrap();
        repo.create_user(bob, "h2").await.unwrap();
        let travel = seed_category(&repo, "travel").await;
        let food = seed_category(&repo, "food").await;

        repo.create_post(post(ann_id, travel.id, "ann travel")).await.unwrap();
        repo.create_post(post(ann_id, food.id, "ann food")).await.unwrap();
        repo.create_post(post(bob_id, travel.id, "bob travel")).await.unwrap();

        assert_eq!(repo.all_entries().await.unwrap().len(), 3);
        assert_eq!(repo.entries_in_category(travel.id).await.unwrap().len(), 2);
        assert_eq!(repo.entries_by_author(ann_id).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn delete_post_removes_its_comments() {
        let repo = memory_repo().await;
        let author = user("ann");
        let author_id = author.id;
        repo.create_user(author, "hash").await.unwrap();
        let category = seed_category(&repo, "travel").await;

        let p = post(author_id, category.id, "Doomed");
        let post_id = p.id;
        repo.create_post(p).await.unwrap();

        let comment_id = Uuid::now_v7();
        repo.create_comment(Comment {
            id: comment_id,
            post_id,
            author_id,
            text: "so long".to_string(),
            created_at: Utc::now(),
        })
        .await
        .unwrap();

        repo.delete_post(post_id).await.unwrap();

        assert!(repo.get_entry(post_id).await.unwrap().is_none());
        assert!(repo.get_comment(comment_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn profile_update_and_credentials_roundtrip() {
        let repo = memory_repo().await;
        let ann = user("ann");
        let ann_id = ann.id;
        repo.create_user(ann, "argon2-hash").await.unwrap();

        let (id, hash) = repo.credentials("ann").await.unwrap().expect("exists");
        assert_eq!(id, ann_id);
        assert_eq!(hash, "argon2-hash");

        repo.update_profile(
            ann_id,
            &ProfileUpdate {
                display_name: Some("Ann A.".into()),
                email: Some("ann@example.com".into()),
            },
        )
        .await
        .unwrap();

        let stored = repo.find_user("ann").await.unwrap().unwrap();
        assert_eq!(stored.display_name.as_deref(), Some("Ann A."));
        assert_eq!(stored.email.as_deref(), Some("ann@example.com"));
    }
}
