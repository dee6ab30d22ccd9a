//! Copy-to-clipboard for command lines
//!
//! A successful copy shows a confirmation for [`CONFIRM_DURATION`]. Each copy
//! bumps a generation counter and the reset timer only clears the
//! confirmation it started, so a quick second click keeps the indicator up
//! for the full duration after that click.

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use leptos::prelude::*;
use wiki_web::command::copy_text;

/// How long the copied indicator stays visible.
pub const CONFIRM_DURATION: Duration = Duration::from_millis(1200);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
}

pub type ClipboardFuture = Pin<Box<dyn Future<Output = Result<(), ClipboardError>>>>;

/// System clipboard access
pub trait Clipboard: Send + Sync + 'static {
    fn write_text(&self, text: &str) -> ClipboardFuture;
}

/// Shared clipboard handle provided as context by the app root.
#[derive(Clone)]
pub struct ClipboardContext(pub Arc<dyn Clipboard>);

/// A clipboard that records writes, for tests and non-browser hosts.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard whose writes are always rejected.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.writes
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn contents(&self) -> Option<String> {
        self.writes().pop()
    }
}

impl Clipboard for MemoryClipboard {
    fn write_text(&self, text: &str) -> ClipboardFuture {
        let result = if self.fail {
            Err(ClipboardError::Rejected("permission denied".into()))
        } else {
            self.writes
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(text.to_string());
            Ok(())
        };
        Box::pin(std::future::ready(result))
    }
}

/// `navigator.clipboard`
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Default)]
pub struct BrowserClipboard;

#[cfg(feature = "csr")]
impl Clipboard for BrowserClipboard {
    fn write_text(&self, text: &str) -> ClipboardFuture {
        let clipboard = window().navigator().clipboard();
        // Only exposed in secure contexts
        if clipboard.is_undefined() {
            return Box::pin(std::future::ready(Err(ClipboardError::Unavailable)));
        }
        let promise = clipboard.write_text(text);
        Box::pin(async move {
            wasm_bindgen_futures::JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| ClipboardError::Rejected(format!("{err:?}")))
        })
    }
}

/// Copied-indicator state of one copy button
#[derive(Debug, Clone, Copy)]
pub struct CopyFeedback {
    confirmed: RwSignal<bool>,
    generation: StoredValue<u64>,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self {
            confirmed: RwSignal::new(false),
            generation: StoredValue::new(0),
        }
    }

    /// Whether the indicator is showing, tracked.
    pub fn is_confirmed(&self) -> bool {
        self.confirmed.get()
    }

    pub fn is_confirmed_untracked(&self) -> bool {
        self.confirmed.get_untracked()
    }

    /// Show the indicator and return the generation the reset timer must
    /// present to [`expire`](Self::expire).
    pub fn confirm(&self) -> u64 {
        self.generation.update_value(|g| *g += 1);
        self.confirmed.set(true);
        self.generation.get_value()
    }

    /// Hide the indicator, unless a newer copy happened since `generation`.
    pub fn expire(&self, generation: u64) {
        if self.generation.get_value() == generation {
            self.confirmed.set(false);
        }
    }
}

/// Copy a command line without its trailing comment.
///
/// Returns the feedback generation on success. Failures leave the indicator
/// untouched.
pub async fn copy_command(clipboard: &dyn Clipboard, line: &str, feedback: CopyFeedback) -> Option<u64> {
    match clipboard.write_text(copy_text(line)).await {
        Ok(()) => Some(feedback.confirm()),
        Err(err) => {
            leptos::logging::debug_warn!("copy failed: {err}");
            None
        }
    }
}

/// Run [`copy_command`] in the background and schedule the indicator reset.
pub fn spawn_copy(clipboard: Arc<dyn Clipboard>, line: String, feedback: CopyFeedback) {
    leptos::task::spawn_local(async move {
        if let Some(generation) = copy_command(clipboard.as_ref(), &line, feedback).await {
            set_timeout(move || feedback.expire(generation), CONFIRM_DURATION);
        }
    });
}
