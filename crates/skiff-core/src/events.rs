//! Engine notifications
//!
//! Every notification is tagged with the window and tab that produced it.
//! Engines may post from their own threads; the UI thread drains the queue.

use parking_lot::Mutex;
use skiff_session::WindowId;
use skiff_tabs::TabId;
use std::collections::VecDeque;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEventKind {
    /// Load progress in percent; 100 means the load completed
    Progress(u32),
    UrlChanged,
    LoadFinished,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineEvent {
    pub window: WindowId,
    pub tab: TabId,
    pub kind: EngineEventKind,
}

/// FIFO shared between engine views and the browser
#[derive(Debug, Clone, Default)]
pub struct EventQueue {
    inner: Arc<Mutex<VecDeque<EngineEvent>>>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: EngineEvent) {
        self.inner.lock().push_back(event);
    }

    /// Take everything queued so far, oldest first
    pub fn drain(&self) -> Vec<EngineEvent> {
        self.inner.lock().drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

/// Handed to each engine view at creation; posts notifications carrying
/// that view's own window and tab identity.
#[derive(Debug, Clone)]
pub struct Notifier {
    window: WindowId,
    tab: TabId,
    queue: EventQueue,
}

impl Notifier {
    pub fn new(window: WindowId, tab: TabId, queue: EventQueue) -> Self {
        Self { window, tab, queue }
    }

    pub fn window(&self) -> WindowId {
        self.window
    }

    pub fn tab(&self) -> TabId {
        self.tab
    }

    pub fn progress(&self, percent: u32) {
        self.post(EngineEventKind::Progress(percent));
    }

    pub fn url_changed(&self) {
        self.post(EngineEventKind::UrlChanged);
    }

    pub fn load_finished(&self) {
        self.post(EngineEventKind::LoadFinished);
    }

    fn post(&self, kind: EngineEventKind) {
        self.queue.push(EngineEvent {
            window: self.window,
            tab: self.tab,
            kind,
        });
    }
}
