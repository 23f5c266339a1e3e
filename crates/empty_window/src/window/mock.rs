//! Scripted backend for tests that cannot open a real window

use std::collections::VecDeque;

use glfw::WindowEvent;

use super::backend::WindowBackend;
use crate::assets::IconImage;

/// In-memory window that replays queued events, one batch per poll
#[derive(Default)]
pub struct MockBackend {
    should_close: bool,
    batches: VecDeque<Vec<WindowEvent>>,
    pending: Vec<WindowEvent>,
    /// Close externally once this many polls have happened
    pub close_after_polls: Option<usize>,
    /// Number of `swap_buffers` calls
    pub swaps: usize,
    /// Number of `poll_events` calls
    pub polls: usize,
    /// Size of the last icon set, if any
    pub icon: Option<(u32, u32)>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the events delivered by the next poll that has none queued yet
    pub fn push_batch(&mut self, events: Vec<WindowEvent>) {
        self.batches.push_back(events);
    }
}

impl WindowBackend for MockBackend {
    fn should_close(&self) -> bool {
        self.should_close
    }

    fn set_should_close(&mut self, should_close: bool) {
        self.should_close = should_close;
    }

    fn swap_buffers(&mut self) {
        self.swaps += 1;
    }

    fn poll_events(&mut self) {
        self.polls += 1;
        if let Some(batch) = self.batches.pop_front() {
            self.pending.extend(batch);
        }
        if self.close_after_polls == Some(self.polls) {
            self.should_close = true;
        }
    }

    fn flush_events(&mut self) -> Vec<WindowEvent> {
        std::mem::take(&mut self.pending)
    }

    fn set_icon(&mut self, icon: IconImage) {
        self.icon = Some((icon.width, icon.height));
    }
}
