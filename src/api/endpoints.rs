// Portfolio API endpoint functions.
// Provides typed methods for the four operations the backend exposes.

use reqwest::multipart::{Form, Part};

use crate::error::Result;

use super::client::ApiClient;
use super::types::{WorkDraft, WorkItem, WorksResponse, image_mime};

impl ApiClient {
    /// Fetch the full works collection, server order (newest first).
    pub async fn list_works(&self) -> Result<Vec<WorkItem>> {
        let response = self.get("/api/works").await?;
        let wrapper: WorksResponse = response.json().await?;
        Ok(wrapper.items)
    }

    /// Verify an admin key against the backend. Resolves only if accepted.
    pub async fn verify_admin(&self, admin_key: &str) -> Result<()> {
        self.get_admin("/api/admin/verify", admin_key).await?;
        Ok(())
    }

    /// Upload a new artwork. The draft must already be validated; validation
    /// failures here would cost a network round trip for nothing.
    pub async fn create_work(&self, draft: &WorkDraft, admin_key: &str) -> Result<WorkItem> {
        let image_path = draft.validate()?;
        let bytes = tokio::fs::read(&image_path).await?;
        let file_name = image_path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(image_mime(&image_path))
            .map_err(crate::error::EaselError::Api)?;

        let mut form = Form::new()
            .text("title", draft.title.trim().to_string())
            .part("image", part);

        // Empty optional fields are omitted so the backend applies defaults.
        if !draft.tag.trim().is_empty() {
            form = form.text("tag", draft.tag.trim().to_string());
        }
        if !draft.year.trim().is_empty() {
            form = form.text("year", draft.year.trim().to_string());
        }
        if !draft.description.trim().is_empty() {
            form = form.text("description", draft.description.trim().to_string());
        }

        let response = self.post_multipart("/api/works", form, admin_key).await?;
        let created: WorkItem = response.json().await?;
        Ok(created)
    }

    /// Delete a work by id.
    pub async fn delete_work(&self, work_id: &str, admin_key: &str) -> Result<()> {
        self.delete_admin(&format!("/api/works/{}", work_id), admin_key)
            .await?;
        Ok(())
    }
}
