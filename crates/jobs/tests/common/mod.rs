#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use lookbook_core::types::DbId;
use lookbook_db::models::media_file::{CreateMediaFile, MediaFile};
use lookbook_db::models::team_member::{CreateMemberImage, CreateTeamMember, TeamMember};
use lookbook_db::repositories::{MediaFileRepo, MemberImageRepo, TeamMemberRepo};
use lookbook_storage::{ObjectStore, StorageError};
use sqlx::PgPool;

/// One call recorded by [`MemoryStore`].
#[derive(Debug, Clone)]
pub struct Upload {
    pub folder: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub url: String,
}

/// In-memory object store that records uploads.
pub struct MemoryStore {
    enabled: bool,
    failing: bool,
    uploads: Mutex<Vec<Upload>>,
    deleted: Mutex<Vec<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            enabled: true,
            failing: false,
            uploads: Mutex::new(Vec::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::new()
        }
    }

    /// Enabled, but every upload is rejected by the service.
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::new()
        }
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn deleted(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ObjectStore for MemoryStore {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        folder: &str,
    ) -> Result<String, StorageError> {
        if !self.enabled {
            return Err(StorageError::Unavailable);
        }
        if self.failing {
            return Err(StorageError::Service {
                status: 500,
                body: "boom".into(),
            });
        }
        let mut uploads = self.uploads.lock().unwrap();
        let url = format!(
            "https://storage.test/storage/v1/object/public/bucket/{folder}/{}-{file_name}",
            uploads.len()
        );
        uploads.push(Upload {
            folder: folder.to_string(),
            file_name: file_name.to_string(),
            bytes,
            url: url.clone(),
        });
        Ok(url)
    }

    async fn delete(&self, url: &str) -> Result<(), StorageError> {
        if !self.enabled {
            return Err(StorageError::Unavailable);
        }
        self.deleted.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn media_root() -> tempfile::TempDir {
    let root = tempfile::tempdir().unwrap();
    for dir in ["images", "videos", "logos"] {
        std::fs::create_dir_all(root.path().join(dir)).unwrap();
    }
    root
}

pub fn write_file(root: &Path, relative: &str, bytes: &[u8]) {
    let path = root.join(relative);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, bytes).unwrap();
}

/// Every file path under `root`, relative and sorted.
pub fn list_files(root: &Path) -> Vec<String> {
    fn walk(base: &Path, dir: &Path, out: &mut Vec<String>) {
        for entry in std::fs::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                walk(base, &path, out);
            } else {
                out.push(path.strip_prefix(base).unwrap().to_string_lossy().into_owned());
            }
        }
    }
    let mut out = Vec::new();
    walk(root, root, &mut out);
    out.sort();
    out
}

pub async fn seed_member(pool: &PgPool, name: &str) -> TeamMember {
    TeamMemberRepo::create(
        pool,
        &CreateTeamMember {
            name: name.to_string(),
            title: "Creative Designer".to_string(),
            view_url: "/designer/x".to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_image(
    pool: &PgPool,
    team_member_id: DbId,
    image_url: Option<&str>,
    image_file: Option<&str>,
    sort_order: i32,
) -> DbId {
    MemberImageRepo::create(
        pool,
        &CreateMemberImage {
            team_member_id,
            image_url: image_url.map(String::from),
            image_file: image_file.map(String::from),
            sort_order: Some(sort_order),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_media(
    pool: &PgPool,
    name: &str,
    media_type: &str,
    file_url: Option<&str>,
    file_path: Option<&str>,
) -> MediaFile {
    MediaFileRepo::create_if_absent(
        pool,
        &CreateMediaFile {
            name: name.to_string(),
            media_type: media_type.to_string(),
            file_url: file_url.map(String::from),
            file_path: file_path.map(String::from),
            description: None,
        },
    )
    .await
    .unwrap()
    .unwrap()
}

/// Remote URL currently stored for a gallery image.
pub async fn image_url(pool: &PgPool, image_id: DbId) -> Option<String> {
    sqlx::query_scalar::<_, Option<String>>("SELECT image_url FROM member_images WHERE id = $1")
        .bind(image_id)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Deterministic noisy RGB image encoded as PNG; compresses badly.
pub fn noisy_png(width: u32, height: u32) -> Vec<u8> {
    let mut state: u32 = 0x9E37_79B9;
    let img = image::RgbImage::from_fn(width, height, |_, _| {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let [r, g, b, _] = state.to_le_bytes();
        image::Rgb([r, g, b])
    });
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
