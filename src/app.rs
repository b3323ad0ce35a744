// App state and main event loop.
// One mpsc channel fans in terminal events, ticks, and network completions;
// loader activations and privileged actions run as spawned tasks and report
// back through it.

use std::io;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use crate::api::{ApiClient, WorkItem};
use crate::loader::{self, CancelToken, LoadOutcome};
use crate::state::{GalleryState, StudioState};
use crate::ui;

/// Active tab in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Gallery,
    Studio,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Gallery => "Gallery",
            Tab::Studio => "Studio",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Tab::Home => Tab::Gallery,
            Tab::Gallery => Tab::Studio,
            Tab::Studio => Tab::Home,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Tab::Home => Tab::Studio,
            Tab::Gallery => Tab::Home,
            Tab::Studio => Tab::Gallery,
        }
    }
}

/// Events delivered to the main loop.
#[derive(Debug)]
pub enum AppEvent {
    Terminal(Event),
    Tick,
    /// A loader activation ran to completion. Cancelled activations send
    /// nothing; stale epochs are dropped on receipt.
    WorksLoaded { epoch: u64, outcome: LoadOutcome },
    VerifyFinished { key: String, accepted: bool },
    UploadFinished(crate::error::Result<WorkItem>),
    DeleteFinished { work_id: String, ok: bool },
}

/// Main application state.
pub struct App {
    pub active_tab: Tab,
    pub gallery: GalleryState,
    pub studio: StudioState,
    /// Scroll offset for the Home page.
    pub home_scroll: u16,
    pub should_quit: bool,
    client: ApiClient,
    events: mpsc::UnboundedSender<AppEvent>,
    /// Epoch of the live gallery activation; completions from older epochs
    /// raced past their token check and must not write state.
    load_epoch: u64,
    load_token: Option<CancelToken>,
}

impl App {
    pub fn new(client: ApiClient, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            active_tab: Tab::default(),
            gallery: GalleryState::new(),
            studio: StudioState::new(),
            home_scroll: 0,
            should_quit: false,
            client,
            events,
            load_epoch: 0,
            load_token: None,
        }
    }

    /// Main event loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<impl Backend>,
        rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    ) -> io::Result<()> {
        self.start_load();

        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            match rx.recv().await {
                Some(event) => self.handle_event(event),
                None => break,
            }
        }

        self.cancel_load();
        Ok(())
    }

    /// Start a fresh loader activation, superseding any live one.
    fn start_load(&mut self) {
        self.cancel_load();
        self.load_epoch += 1;
        let epoch = self.load_epoch;
        let token = CancelToken::new();
        self.load_token = Some(token.clone());
        self.gallery.set_loading();

        let client = self.client.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            tracing::debug!(epoch, "work list activation started");
            let outcome = loader::load_works(
                || {
                    let client = client.clone();
                    async move { client.list_works().await }
                },
                &token,
            )
            .await;
            if let Some(outcome) = outcome {
                let _ = tx.send(AppEvent::WorksLoaded { epoch, outcome });
            }
        });
    }

    fn cancel_load(&mut self) {
        if let Some(token) = self.load_token.take() {
            token.cancel();
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Terminal(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                self.handle_key(key);
            }
            AppEvent::Terminal(_) | AppEvent::Tick => {}
            AppEvent::WorksLoaded { epoch, outcome } => self.apply_load(epoch, outcome),
            AppEvent::VerifyFinished { key, accepted } => self.studio.finish_verify(key, accepted),
            AppEvent::UploadFinished(result) => self.finish_upload(result),
            AppEvent::DeleteFinished { work_id, ok } => self.finish_delete(&work_id, ok),
        }
    }

    /// Apply a completed activation, unless it has been superseded.
    fn apply_load(&mut self, epoch: u64, outcome: LoadOutcome) {
        if epoch != self.load_epoch {
            tracing::debug!(epoch, live = self.load_epoch, "dropping stale load completion");
            return;
        }
        self.load_token = None;
        self.gallery.apply_outcome(outcome);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        match key.code {
            KeyCode::Tab => {
                self.active_tab = self.active_tab.next();
                return;
            }
            KeyCode::BackTab => {
                self.active_tab = self.active_tab.prev();
                return;
            }
            _ => {}
        }
        match self.active_tab {
            Tab::Home => self.handle_home_key(key),
            Tab::Gallery => self.handle_gallery_key(key),
            Tab::Studio => self.handle_studio_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.home_scroll = self.home_scroll.saturating_sub(1),
            KeyCode::Down | KeyCode::Char('j') => {
                self.home_scroll = self.home_scroll.saturating_add(1)
            }
            KeyCode::PageUp => self.home_scroll = self.home_scroll.saturating_sub(10),
            KeyCode::PageDown => self.home_scroll = self.home_scroll.saturating_add(10),
            KeyCode::Home => self.home_scroll = 0,
            _ => {}
        }
    }

    fn handle_gallery_key(&mut self, key: KeyEvent) {
        // The delete confirmation swallows everything until answered.
        if self.gallery.delete_target.is_some() {
            match key.code {
                KeyCode::Enter | KeyCode::Char('y') => self.confirm_delete(),
                KeyCode::Esc | KeyCode::Char('n') => self.gallery.cancel_delete(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.gallery.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.gallery.select_next(),
            KeyCode::Left | KeyCode::Char('h') => self.gallery.cycle_tag(false),
            KeyCode::Right | KeyCode::Char('l') => self.gallery.cycle_tag(true),
            KeyCode::Enter => self.gallery.open_selected(),
            KeyCode::Esc => self.gallery.close_detail(),
            KeyCode::Char('r') => self.start_load(),
            KeyCode::Char('d') => {
                // Delete is a privileged action; without a session the key
                // does nothing at all.
                if self.studio.session.is_active() {
                    self.gallery.request_delete();
                }
            }
            _ => {}
        }
    }

    fn handle_studio_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('l') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.studio.logout();
            return;
        }
        match key.code {
            KeyCode::Enter => {
                if self.studio.session.is_active() {
                    self.start_upload();
                } else {
                    self.start_verify();
                }
            }
            KeyCode::Up => self.studio.focus_prev(),
            KeyCode::Down => self.studio.focus_next(),
            KeyCode::Backspace => self.studio.backspace(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.studio.insert_char(c)
            }
            _ => {}
        }
    }

    fn start_verify(&mut self) {
        let Some(key) = self.studio.begin_verify() else {
            return;
        };
        let client = self.client.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let accepted = match client.verify_admin(&key).await {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!("admin key verification failed: {err}");
                    false
                }
            };
            let _ = tx.send(AppEvent::VerifyFinished { key, accepted });
        });
    }

    fn start_upload(&mut self) {
        let Some(draft) = self.studio.begin_upload() else {
            return;
        };
        let Some(admin_key) = self.studio.session.key().map(str::to_string) else {
            return;
        };
        let client = self.client.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let result = client.create_work(&draft, &admin_key).await;
            let _ = tx.send(AppEvent::UploadFinished(result));
        });
    }

    fn finish_upload(&mut self, result: crate::error::Result<WorkItem>) {
        match result {
            Ok(work) => {
                self.studio.finish_upload(Ok(&work));
                self.gallery.insert_created(work);
            }
            Err(err) => {
                tracing::warn!("upload failed: {err}");
                self.studio.finish_upload(Err(()));
            }
        }
    }

    fn confirm_delete(&mut self) {
        let Some(work_id) = self.gallery.take_delete_target() else {
            return;
        };
        let Some(admin_key) = self.studio.session.key().map(str::to_string) else {
            return;
        };
        let client = self.client.clone();
        let tx = self.events.clone();
        tokio::spawn(async move {
            let ok = match client.delete_work(&work_id, &admin_key).await {
                Ok(()) => true,
                Err(err) => {
                    tracing::warn!(work_id = %work_id, "delete failed: {err}");
                    false
                }
            };
            let _ = tx.send(AppEvent::DeleteFinished { work_id, ok });
        });
    }

    fn finish_delete(&mut self, work_id: &str, ok: bool) {
        if ok {
            self.gallery.remove_deleted(work_id);
            self.gallery.notice = None;
        } else {
            self.gallery.notice =
                Some("Delete failed. Check admin access and backend.".to_string());
        }
    }
}
