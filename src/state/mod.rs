/// State management module
///
/// This module handles all application state, including:
/// - Catalog records (data.rs)
/// - The filter/sort pipeline (filter.rs)
/// - Search debouncing (debounce.rs)
/// - The list and detail screen state machines (listing.rs, detail.rs)
pub mod data;
pub mod debounce;
pub mod detail;
pub mod filter;
pub mod listing;

use iced::task;

/// Abort handles of the background tasks a screen started.
/// Every held task is aborted when the guard is dropped.
#[derive(Default)]
pub struct TaskGuard {
    handles: Vec<task::Handle>,
}

impl TaskGuard {
    pub fn hold(&mut self, handle: task::Handle) {
        self.handles.push(handle.abort_on_drop());
    }
}
