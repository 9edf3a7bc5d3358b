//! Resolution of stored avatar references to public URLs.

/// Default blob storage bucket for profile images.
pub const DEFAULT_AVATAR_BUCKET: &str = "profile-images";

/// Builds public object URLs for avatar references.
///
/// References are either absolute URLs (returned unchanged) or object paths inside the
/// avatar bucket, with or without the bucket prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarResolver {
    base_url: Option<String>,
    bucket: String,
}

impl Default for AvatarResolver {
    fn default() -> Self {
        Self::new(None, DEFAULT_AVATAR_BUCKET)
    }
}

impl AvatarResolver {
    pub fn new(base_url: Option<&str>, bucket: &str) -> Self {
        Self {
            base_url: base_url
                .map(|url| url.trim().trim_end_matches('/').to_string())
                .filter(|url| !url.is_empty()),
            bucket: bucket.trim_matches('/').to_string(),
        }
    }

    /// Public URL for `reference`, or `None` when it is blank or relative with no base URL
    /// configured.
    pub fn resolve(&self, reference: Option<&str>) -> Option<String> {
        let reference = reference.map(str::trim).filter(|r| !r.is_empty())?;
        if reference.starts_with("http") {
            return Some(reference.to_string());
        }

        let base_url = self.base_url.as_deref()?;
        let path = reference.strip_prefix('/').unwrap_or(reference);
        let object = if path.starts_with(&self.bucket) {
            path.to_string()
        } else {
            format!("{}/{}", self.bucket, path)
        };

        Some(format!("{}/storage/v1/object/public/{}", base_url, object))
    }
}
