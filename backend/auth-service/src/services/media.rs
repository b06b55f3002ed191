/// Profile image upload
///
/// Images arrive inline in the signup body, either as a data URI
/// (`data:image/png;base64,...`) or as bare base64. Upload failures are not
/// errors for the caller: they produce an [`UploadResult`] without a
/// `public_id` and the handler decides what to report.
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use s3_utils::{S3Error, S3Operations};
use std::sync::Arc;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadOptions {
    /// Replace an existing object with the same public id
    pub overwrite: bool,
    /// Mark the object so CDN caches revalidate it
    pub invalidate: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadResult {
    pub public_id: Option<String>,
    pub secure_url: Option<String>,
}

#[async_trait]
pub trait MediaUploader: Send + Sync {
    async fn upload(&self, file: &str, public_id: &str, options: UploadOptions) -> UploadResult;
}

/// Bucket operations the uploader needs
#[async_trait]
pub trait ObjectStore: Send + Sync {
    fn object_key(&self, public_id: &str) -> String;

    async fn object_exists(&self, key: &str) -> Result<bool, S3Error>;

    /// Store the object and return its public URL
    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
        cache_control: Option<&'static str>,
    ) -> Result<String, S3Error>;
}

#[async_trait]
impl ObjectStore for S3Operations {
    fn object_key(&self, public_id: &str) -> String {
        self.config().object_key(public_id)
    }

    async fn object_exists(&self, key: &str) -> Result<bool, S3Error> {
        S3Operations::object_exists(self, key).await
    }

    async fn put_object(
        &self,
        key: &str,
        body: Vec<u8>,
        content_type: &str,
        cache_control: Option<&'static str>,
    ) -> Result<String, S3Error> {
        self.upload_file(key, body, content_type, cache_control).await
    }
}

pub struct S3MediaUploader {
    store: Arc<dyn ObjectStore>,
}

impl S3MediaUploader {
    pub fn new(store: Arc<dyn ObjectStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl MediaUploader for S3MediaUploader {
    async fn upload(&self, file: &str, public_id: &str, options: UploadOptions) -> UploadResult {
        let Some(image) = decode_image(file) else {
            warn!(public_id, "profile picture is not a valid base64 image");
            return UploadResult::default();
        };

        let key = self.store.object_key(public_id);

        if !options.overwrite {
            match self.store.object_exists(&key).await {
                Ok(false) => {}
                Ok(true) => {
                    debug!(key = %key, "object exists and overwrite is disabled");
                    return UploadResult::default();
                }
                Err(e) => {
                    error!(key = %key, "S3 lookup failed: {}", e);
                    return UploadResult::default();
                }
            }
        }

        let cache_control = options.invalidate.then_some("no-cache");

        match self
            .store
            .put_object(&key, image.bytes, &image.content_type, cache_control)
            .await
        {
            Ok(url) => UploadResult {
                public_id: Some(public_id.to_string()),
                secure_url: Some(url),
            },
            Err(e) => {
                error!(key = %key, "S3 upload failed: {}", e);
                UploadResult::default()
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct DecodedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

/// Decode a data URI or bare base64 string into image bytes
pub fn decode_image(file: &str) -> Option<DecodedImage> {
    let file = file.trim();

    let (declared_type, data) = match file.strip_prefix("data:") {
        Some(rest) => {
            let (header, data) = rest.split_once(',')?;
            let media_type = header.strip_suffix(";base64")?;
            (Some(media_type), data)
        }
        None => (None, file),
    };

    let bytes = STANDARD.decode(data).ok()?;
    if bytes.is_empty() {
        return None;
    }

    let content_type = match declared_type {
        Some(t) if !t.is_empty() => t.to_string(),
        _ => sniff_content_type(&bytes).to_string(),
    };

    Some(DecodedImage {
        bytes,
        content_type,
    })
}

fn sniff_content_type(bytes: &[u8]) -> &'static str {
    match bytes {
        [0x89, b'P', b'N', b'G', ..] => "image/png",
        [0xFF, 0xD8, 0xFF, ..] => "image/jpeg",
        [b'G', b'I', b'F', b'8', ..] => "image/gif",
        [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => "image/webp",
        _ => "application/octet-stream",
    }
}
