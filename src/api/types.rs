// Portfolio API types.
// Defines structs for the backend's work records and the client-side upload draft.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{EaselError, Result};

/// A single artwork record as exposed by the backend.
///
/// Immutable once received; the gallery replaces its whole collection on each
/// successful load rather than merging field-by-field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_tag")]
    pub tag: String,
    #[serde(default = "default_year")]
    pub year: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    /// Naive ISO timestamp assigned by the backend; order only, never parsed.
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_tag() -> String {
    "Sketch".to_string()
}

fn default_year() -> String {
    "2025".to_string()
}

/// Response wrapper for the works list.
#[derive(Debug, Deserialize)]
pub struct WorksResponse {
    pub items: Vec<WorkItem>,
}

/// Client-side data for a new artwork upload.
///
/// Validated before any network request: a rejected draft never costs a call.
#[derive(Debug, Clone, Default)]
pub struct WorkDraft {
    pub title: String,
    pub tag: String,
    pub year: String,
    pub description: String,
    pub image_path: String,
}

impl WorkDraft {
    /// Validate the draft. The backend requires `title` and `image`; the
    /// optional fields are omitted from the form when empty so the backend
    /// applies its own defaults.
    pub fn validate(&self) -> Result<PathBuf> {
        if self.title.trim().is_empty() {
            return Err(EaselError::InvalidDraft("Artwork title is required.".into()));
        }
        let path_str = self.image_path.trim();
        if path_str.is_empty() {
            return Err(EaselError::InvalidDraft("Please select an image.".into()));
        }
        let path = PathBuf::from(path_str);
        if !path.is_file() {
            return Err(EaselError::InvalidDraft(format!(
                "Image not found: {}",
                path.display()
            )));
        }
        Ok(path)
    }
}

/// Guess the image MIME type from a file extension.
/// The backend rejects uploads whose content type is not `image/*`.
pub fn image_mime(path: &std::path::Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .as_deref()
    {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_work_item_defaults() {
        let json = r#"{
            "id": "abc123",
            "title": "Evening study",
            "imageUrl": "http://localhost:8000/uploads/abc.png"
        }"#;

        let work: WorkItem = serde_json::from_str(json).unwrap();
        assert_eq!(work.tag, "Sketch");
        assert_eq!(work.year, "2025");
        assert_eq!(work.description, "");
        assert!(work.created_at.is_none());
    }

    #[test]
    fn test_work_item_full() {
        let json = r#"{
            "id": "abc123",
            "title": "Evening study",
            "description": "Graphite on paper",
            "tag": "Portrait",
            "year": "2024",
            "imageUrl": "http://localhost:8000/uploads/abc.png",
            "created_at": "2024-06-01T12:00:00"
        }"#;

        let work: WorkItem = serde_json::from_str(json).unwrap();
        assert_eq!(work.tag, "Portrait");
        assert_eq!(work.year, "2024");
        assert_eq!(work.created_at.as_deref(), Some("2024-06-01T12:00:00"));
    }

    #[test]
    fn test_works_response_items() {
        let json = r#"{"items": [
            {"id": "a", "title": "One", "imageUrl": "http://x/1.png"},
            {"id": "b", "title": "Two", "imageUrl": "http://x/2.png"}
        ]}"#;

        let response: WorksResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].id, "a");
    }

    #[test]
    fn test_draft_requires_title() {
        let draft = WorkDraft {
            image_path: "/tmp/whatever.png".to_string(),
            ..WorkDraft::default()
        };
        assert!(draft.validate().is_err());
    }

    #[test]
    fn test_draft_requires_image_path() {
        let draft = WorkDraft {
            title: "Untitled".to_string(),
            ..WorkDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("select an image"));
    }

    #[test]
    fn test_draft_requires_existing_file() {
        let draft = WorkDraft {
            title: "Untitled".to_string(),
            image_path: "/nonexistent/easel-test.png".to_string(),
            ..WorkDraft::default()
        };
        let err = draft.validate().unwrap_err();
        assert!(err.to_string().contains("Image not found"));
    }

    #[test]
    fn test_draft_valid_with_real_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("sketch.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let draft = WorkDraft {
            title: "Untitled".to_string(),
            image_path: path.to_string_lossy().into_owned(),
            ..WorkDraft::default()
        };
        assert_eq!(draft.validate().unwrap(), path);
    }

    #[test]
    fn test_image_mime() {
        assert_eq!(image_mime(Path::new("a.png")), "image/png");
        assert_eq!(image_mime(Path::new("a.JPG")), "image/jpeg");
        assert_eq!(image_mime(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(image_mime(Path::new("a.webp")), "image/webp");
        assert_eq!(image_mime(Path::new("a")), "application/octet-stream");
    }
}
