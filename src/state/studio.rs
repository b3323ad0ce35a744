// Studio (admin) view state.
// Holds the admin session, the key-entry form, and the upload form.
// Privileged actions are never retried automatically: a failed write must not
// risk duplicate side effects.

use crate::api::{WorkDraft, WorkItem};

/// Authentication context for privileged calls.
///
/// The key lives in process memory for this session only, set on a verified
/// login and cleared on logout, and is handed explicitly to every call that
/// needs it.
#[derive(Debug, Clone, Default)]
pub struct AdminSession {
    key: Option<String>,
}

impl AdminSession {
    pub fn is_active(&self) -> bool {
        self.key.is_some()
    }

    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    pub fn login(&mut self, key: String) {
        self.key = Some(key);
    }

    pub fn logout(&mut self) {
        self.key = None;
    }
}

/// Focusable field of the upload form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UploadField {
    #[default]
    Title,
    Tag,
    Year,
    ImagePath,
    Description,
}

impl UploadField {
    pub fn label(&self) -> &'static str {
        match self {
            UploadField::Title => "Title",
            UploadField::Tag => "Tag",
            UploadField::Year => "Year",
            UploadField::ImagePath => "Image file",
            UploadField::Description => "Description",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            UploadField::Title => UploadField::Tag,
            UploadField::Tag => UploadField::Year,
            UploadField::Year => UploadField::ImagePath,
            UploadField::ImagePath => UploadField::Description,
            UploadField::Description => UploadField::Title,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            UploadField::Title => UploadField::Description,
            UploadField::Tag => UploadField::Title,
            UploadField::Year => UploadField::Tag,
            UploadField::ImagePath => UploadField::Year,
            UploadField::Description => UploadField::ImagePath,
        }
    }

    pub const ALL: [UploadField; 5] = [
        UploadField::Title,
        UploadField::Tag,
        UploadField::Year,
        UploadField::ImagePath,
        UploadField::Description,
    ];
}

/// Complete state for the Studio tab.
#[derive(Debug, Default)]
pub struct StudioState {
    pub session: AdminSession,
    /// Admin key being typed on the login form.
    pub key_input: String,
    /// Verify round trip in flight.
    pub verifying: bool,
    pub draft: WorkDraft,
    pub focus: UploadField,
    /// Upload in flight.
    pub uploading: bool,
    /// Inline message below the active form.
    pub message: Option<String>,
}

impl StudioState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn busy(&self) -> bool {
        self.verifying || self.uploading
    }

    /// The string the next keystroke edits.
    fn active_input(&mut self) -> &mut String {
        if !self.session.is_active() {
            return &mut self.key_input;
        }
        match self.focus {
            UploadField::Title => &mut self.draft.title,
            UploadField::Tag => &mut self.draft.tag,
            UploadField::Year => &mut self.draft.year,
            UploadField::ImagePath => &mut self.draft.image_path,
            UploadField::Description => &mut self.draft.description,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.busy() {
            return;
        }
        self.active_input().push(c);
    }

    pub fn backspace(&mut self) {
        if self.busy() {
            return;
        }
        self.active_input().pop();
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Start a key verification. Returns the key to verify, or None if the
    /// input is unusable (message set instead, no network call).
    pub fn begin_verify(&mut self) -> Option<String> {
        if self.busy() {
            return None;
        }
        let key = self.key_input.trim().to_string();
        if key.is_empty() {
            self.message = Some("Enter admin key.".to_string());
            return None;
        }
        self.message = None;
        self.verifying = true;
        Some(key)
    }

    /// Complete a key verification.
    pub fn finish_verify(&mut self, key: String, accepted: bool) {
        self.verifying = false;
        if accepted {
            self.session.login(key);
            self.key_input.clear();
            self.message = None;
        } else {
            self.message = Some("Invalid admin key.".to_string());
        }
    }

    /// Clear the session and any half-typed form state.
    pub fn logout(&mut self) {
        self.session.logout();
        self.key_input.clear();
        self.draft = WorkDraft::default();
        self.focus = UploadField::Title;
        self.message = None;
    }

    /// Start an upload. Validates the draft locally first; a rejected draft
    /// never reaches the network.
    pub fn begin_upload(&mut self) -> Option<WorkDraft> {
        if self.busy() || !self.session.is_active() {
            return None;
        }
        if let Err(err) = self.draft.validate() {
            self.message = Some(err.to_string());
            return None;
        }
        self.message = None;
        self.uploading = true;
        Some(self.draft.clone())
    }

    /// Complete an upload. On success the form resets for the next piece.
    pub fn finish_upload(&mut self, result: Result<&WorkItem, ()>) {
        self.uploading = false;
        match result {
            Ok(work) => {
                self.draft = WorkDraft::default();
                self.focus = UploadField::Title;
                self.message = Some(format!("Uploaded \"{}\".", work.title));
            }
            Err(()) => {
                self.message = Some("Upload failed. Check admin access and backend.".to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn created_work() -> WorkItem {
        WorkItem {
            id: "new".to_string(),
            title: "Evening study".to_string(),
            description: String::new(),
            tag: "Sketch".to_string(),
            year: "2025".to_string(),
            image_url: "http://localhost:8000/uploads/new.png".to_string(),
            created_at: None,
        }
    }

    #[test]
    fn test_typing_targets_key_input_before_login() {
        let mut studio = StudioState::new();
        studio.insert_char('s');
        studio.insert_char('k');
        assert_eq!(studio.key_input, "sk");
        assert_eq!(studio.draft.title, "");
    }

    #[test]
    fn test_typing_targets_focused_field_after_login() {
        let mut studio = StudioState::new();
        studio.session.login("secret".to_string());
        studio.insert_char('a');
        studio.focus_next();
        studio.insert_char('b');
        assert_eq!(studio.draft.title, "a");
        assert_eq!(studio.draft.tag, "b");
    }

    #[test]
    fn test_focus_cycles_through_all_fields() {
        let mut studio = StudioState::new();
        for expected in UploadField::ALL {
            assert_eq!(studio.focus, expected);
            studio.focus_next();
        }
        assert_eq!(studio.focus, UploadField::Title);
        studio.focus_prev();
        assert_eq!(studio.focus, UploadField::Description);
    }

    #[test]
    fn test_begin_verify_rejects_blank_key() {
        let mut studio = StudioState::new();
        studio.key_input = "   ".to_string();
        assert!(studio.begin_verify().is_none());
        assert_eq!(studio.message.as_deref(), Some("Enter admin key."));
        assert!(!studio.verifying);
    }

    #[test]
    fn test_verify_lifecycle() {
        let mut studio = StudioState::new();
        studio.key_input = " secret ".to_string();

        let key = studio.begin_verify().unwrap();
        assert_eq!(key, "secret");
        assert!(studio.verifying);

        studio.finish_verify(key, true);
        assert!(studio.session.is_active());
        assert_eq!(studio.session.key(), Some("secret"));
        assert!(studio.key_input.is_empty());
    }

    #[test]
    fn test_rejected_key_shows_message() {
        let mut studio = StudioState::new();
        studio.key_input = "wrong".to_string();
        let key = studio.begin_verify().unwrap();
        studio.finish_verify(key, false);

        assert!(!studio.session.is_active());
        assert_eq!(studio.message.as_deref(), Some("Invalid admin key."));
    }

    #[test]
    fn test_logout_clears_session_and_forms() {
        let mut studio = StudioState::new();
        studio.session.login("secret".to_string());
        studio.draft.title = "half typed".to_string();
        studio.message = Some("Uploaded \"x\".".to_string());

        studio.logout();
        assert!(!studio.session.is_active());
        assert!(studio.draft.title.is_empty());
        assert!(studio.message.is_none());
    }

    #[test]
    fn test_begin_upload_requires_valid_draft() {
        let mut studio = StudioState::new();
        studio.session.login("secret".to_string());
        studio.draft.title = "Untitled".to_string();
        // No image path: rejected locally, no upload starts.
        assert!(studio.begin_upload().is_none());
        assert!(!studio.uploading);
        assert_eq!(studio.message.as_deref(), Some("Please select an image."));
    }

    #[test]
    fn test_begin_upload_requires_session() {
        let mut studio = StudioState::new();
        studio.draft.title = "Untitled".to_string();
        assert!(studio.begin_upload().is_none());
    }

    #[test]
    fn test_upload_success_resets_form() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let image = temp_dir.path().join("new.png");
        std::fs::write(&image, b"png").unwrap();

        let mut studio = StudioState::new();
        studio.session.login("secret".to_string());
        studio.draft.title = "Evening study".to_string();
        studio.draft.image_path = image.to_string_lossy().into_owned();

        let draft = studio.begin_upload().unwrap();
        assert_eq!(draft.title, "Evening study");
        assert!(studio.uploading);

        let work = created_work();
        studio.finish_upload(Ok(&work));
        assert!(!studio.uploading);
        assert!(studio.draft.title.is_empty());
        assert_eq!(studio.message.as_deref(), Some("Uploaded \"Evening study\"."));
    }

    #[test]
    fn test_upload_failure_keeps_draft() {
        let mut studio = StudioState::new();
        studio.session.login("secret".to_string());
        studio.draft.title = "Evening study".to_string();
        studio.uploading = true;

        studio.finish_upload(Err(()));
        assert!(!studio.uploading);
        assert_eq!(studio.draft.title, "Evening study");
        assert_eq!(
            studio.message.as_deref(),
            Some("Upload failed. Check admin access and backend.")
        );
    }

    #[test]
    fn test_keystrokes_ignored_while_busy() {
        let mut studio = StudioState::new();
        studio.verifying = true;
        studio.insert_char('x');
        assert!(studio.key_input.is_empty());
    }
}
