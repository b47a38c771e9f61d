use serde::{Deserialize, Serialize};

/// Bucket holding every image uploaded from the backoffice
pub const IMAGE_BUCKET: &str = "mia-club-images";

/// Result of storing an object
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct UploadDto {
    /// Object path inside the bucket
    pub path: String,
    /// URL the object can be publicly downloaded from
    pub public_url: String,
}

/// Object path for a content image, `public/<millis>_<file name>`
pub fn image_object_path(file_name: &str, millis: i64) -> String {
    format!("public/{}_{}", millis, sanitize_file_name(file_name))
}

/// Object path for the site logo, `public/logo/<millis>_<file name>`
pub fn logo_object_path(file_name: &str, millis: i64) -> String {
    format!("public/logo/{}_{}", millis, sanitize_file_name(file_name))
}

/// Keeps only the final path segment of a user supplied file name.
fn sanitize_file_name(file_name: &str) -> String {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." {
        "upload".to_string()
    } else {
        name.replace(' ', "_")
    }
}
