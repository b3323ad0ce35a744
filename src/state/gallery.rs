// Gallery view state.
// Tag filtering, selection, and the detail/delete modals over the loaded
// works collection. The collection is replaced wholesale on every load.

use crate::api::WorkItem;
use crate::loader::{LoadOutcome, LoadState};

/// Filter value meaning "no tag filter".
pub const ALL_TAG: &str = "All";

const FALLBACK_TAG: &str = "Sketch";

/// Display tag for a work; blank tags collapse to the default.
pub fn display_tag(work: &WorkItem) -> &str {
    if work.tag.trim().is_empty() {
        FALLBACK_TAG
    } else {
        &work.tag
    }
}

/// Complete state for a gallery view.
///
/// Each view owns its collection exclusively; two views showing the gallery
/// run independent loader activations and never share this struct.
#[derive(Debug, Default)]
pub struct GalleryState {
    /// Loading state of the works collection.
    pub load: LoadState,
    /// Active tag filter.
    pub active_tag: String,
    /// Selection index into the filtered list.
    pub selected: usize,
    /// Work opened in the detail modal.
    pub opened: Option<WorkItem>,
    /// Work id awaiting delete confirmation.
    pub delete_target: Option<String>,
    /// Inline message from the last privileged action.
    pub notice: Option<String>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self {
            active_tag: ALL_TAG.to_string(),
            ..Self::default()
        }
    }

    pub fn set_loading(&mut self) {
        self.load = LoadState::Loading;
    }

    /// Apply a completed activation. Replaces the collection outright;
    /// a failed load leaves an empty collection behind, not a stale one.
    pub fn apply_outcome(&mut self, outcome: LoadOutcome) {
        self.load = outcome.into_state();
        self.prune_modals();
        self.clamp_selection();
    }

    /// Unique tags of the collection: "All" first, then first-seen order.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = vec![ALL_TAG.to_string()];
        for work in self.load.works() {
            let tag = display_tag(work);
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        tags
    }

    /// Works passing the active tag filter, collection order.
    pub fn filtered_works(&self) -> Vec<&WorkItem> {
        self.load
            .works()
            .iter()
            .filter(|work| self.active_tag == ALL_TAG || display_tag(work) == self.active_tag)
            .collect()
    }

    /// Cycle the tag filter left or right through the chip row.
    pub fn cycle_tag(&mut self, forward: bool) {
        let tags = self.tags();
        if tags.len() < 2 {
            return;
        }
        let current = tags.iter().position(|t| *t == self.active_tag).unwrap_or(0);
        let next = if forward {
            (current + 1) % tags.len()
        } else {
            (current + tags.len() - 1) % tags.len()
        };
        self.active_tag = tags[next].clone();
        self.selected = 0;
    }

    pub fn select_next(&mut self) {
        let len = self.filtered_works().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn selected_work(&self) -> Option<&WorkItem> {
        self.filtered_works().get(self.selected).copied()
    }

    /// Open the detail modal for the current selection.
    pub fn open_selected(&mut self) {
        self.opened = self.selected_work().cloned();
    }

    pub fn close_detail(&mut self) {
        self.opened = None;
    }

    /// Stage the opened (or selected) work for delete confirmation.
    pub fn request_delete(&mut self) {
        let target = self
            .opened
            .as_ref()
            .map(|work| work.id.clone())
            .or_else(|| self.selected_work().map(|work| work.id.clone()));
        self.delete_target = target;
    }

    pub fn cancel_delete(&mut self) {
        self.delete_target = None;
    }

    /// Take the staged delete target on confirmation.
    pub fn take_delete_target(&mut self) -> Option<String> {
        self.delete_target.take()
    }

    /// Insert a freshly created work at the front of the collection.
    /// A successful upload proves the backend reachable, so this also clears
    /// a lingering Failed state.
    pub fn insert_created(&mut self, work: WorkItem) {
        let mut items = match std::mem::take(&mut self.load) {
            LoadState::Ready(items) => items,
            _ => Vec::new(),
        };
        items.insert(0, work);
        self.load = LoadState::Ready(items);
        self.notice = None;
    }

    /// Remove a deleted work by id, closing modals that pointed at it.
    pub fn remove_deleted(&mut self, work_id: &str) {
        if let LoadState::Ready(items) = &mut self.load {
            items.retain(|work| work.id != work_id);
        }
        if self.opened.as_ref().is_some_and(|work| work.id == work_id) {
            self.opened = None;
        }
        if self.delete_target.as_deref() == Some(work_id) {
            self.delete_target = None;
        }
        self.clamp_selection();
    }

    fn prune_modals(&mut self) {
        let ids: Vec<&str> = self.load.works().iter().map(|work| work.id.as_str()).collect();
        if self
            .opened
            .as_ref()
            .is_some_and(|work| !ids.contains(&work.id.as_str()))
        {
            self.opened = None;
        }
        if self
            .delete_target
            .as_deref()
            .is_some_and(|id| !ids.contains(&id))
        {
            self.delete_target = None;
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.filtered_works().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}
