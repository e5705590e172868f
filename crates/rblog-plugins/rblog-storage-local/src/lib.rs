//! # rblog-storage-local
//! Local filesystem implementation of `MediaStore` for post images.
//! Features: Content-addressable storage, directory sharding, and thumbnailing.

use async_trait::async_trait;
use image::io::Reader as ImageReader;
use rblog_core::traits::MediaStore;
use sha2::{Digest, Sha256};
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct LocalMediaStore {
    /// Root directory for all uploads (e.g., "./data/uploads")
    root_path: PathBuf,
    /// Public URL prefix (e.g., "/static/uploads")
    url_prefix: String,
}

impl LocalMediaStore {
    pub fn new(root: PathBuf, url_prefix: String) -> Self {
        Self {
            root_path: root,
            url_prefix,
        }
    }

    /// Generates a sharded path: "ab/cd/ef...hash.ext"
    fn get_sharded_path(&self, media_id: &str) -> PathBuf {
        let mut path = self.root_path.clone();
        path.push(&media_id[0..2]);
        path.push(&media_id[2..4]);
        path.push(media_id);
        path
    }

    /// File extension from the declared content type; the id keeps it so the
    /// static file server can infer the MIME type on the way back out.
    fn extension_for(content_type: &str) -> &'static str {
        match content_type {
            "image/png" => "png",
            "image/gif" => "gif",
            "image/webp" => "webp",
            _ => "jpg",
        }
    }

    fn hash_of(media_id: &str) -> &str {
        media_id.split('.').next().unwrap_or(media_id)
    }
}

#[async_trait]
impl MediaStore for LocalMediaStore {
    /// Saves an upload using its SHA-256 hash as the filename.
    /// This automatically deduplicates files.
    async fn save_upload(&self, data: Vec<u8>, content_type: &str) -> anyhow::Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(&data);
        let hash = format!("{:x}", hasher.finalize());
        let media_id = format!("{}.{}", hash, Self::extension_for(content_type));

        let target_path = self.get_sharded_path(&media_id);
        let parent = target_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("upload path has no parent"))?;
        fs::create_dir_all(parent).await?;

        if !target_path.exists() {
            fs::write(&target_path, &data).await?;
            self.generate_thumbnail(&target_path, &hash).await?;
        }

        Ok(media_id)
    }

    async fn get_url(&self, media_id: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.url_prefix,
            &media_id[0..2],
            &media_id[2..4],
            media_id
        )
    }

    async fn get_thumbnail_url(&self, media_id: &str) -> String {
        let hash = Self::hash_of(media_id);
        format!(
            "{}/{}/{}/thumb_{}.webp",
            self.url_prefix,
            &media_id[0..2],
            &media_id[2..4],
            hash
        )
    }
}

impl LocalMediaStore {
    /// Internal helper to generate a 250px WebP thumbnail.
    async fn generate_thumbnail(&self, source_path: &Path, hash: &str) -> anyhow::Result<()> {
        let data = fs::read(source_path).await?;
        let img = ImageReader::new(Cursor::new(data))
            .with_guessed_format()?
            .decode()?;

        let thumb = img.thumbnail(250, 250);
        let mut thumb_path = source_path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("upload path has no parent"))?
            .to_path_buf();
        thumb_path.push(format!("thumb_{hash}.webp"));

        thumb.save_with_format(thumb_path, image::ImageFormat::WebP)?;
        Ok(())
    }
}
