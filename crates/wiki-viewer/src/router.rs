//! Hash router
//!
//! The router mirrors the location fragment into a signal. Navigation only
//! writes the fragment; the route signal is updated by the location's change
//! notification, so links, the back button, and manual edits of the address
//! bar all take the same path.

use std::sync::{Arc, Mutex, PoisonError};

use leptos::prelude::*;
use wiki_web::Route;

/// Callback receiving the new fragment, without its leading `#`
pub type FragmentListener = Arc<dyn Fn(String) + Send + Sync>;

/// Where the current fragment lives
pub trait Location: Send + Sync + 'static {
    /// Current fragment, without the leading `#`
    fn fragment(&self) -> String;

    /// Change the fragment. Listeners are notified only if it changed.
    fn set_fragment(&self, fragment: &str);

    /// Observe fragment changes until the returned subscription is dropped.
    fn subscribe(&self, listener: FragmentListener) -> Subscription;
}

/// Handle to a listener registration; unsubscribes on drop.
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + Sync + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.run_cancel();
    }

    fn run_cancel(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run_cancel();
    }
}

fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

/// In-memory location, used outside the browser.
#[derive(Clone, Default)]
pub struct MemoryLocation {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Default)]
struct MemoryState {
    fragment: String,
    next_id: u64,
    listeners: Vec<(u64, FragmentListener)>,
}

impl MemoryLocation {
    pub fn new(fragment: &str) -> Self {
        let location = Self::default();
        location.lock().fragment = strip_hash(fragment).to_string();
        location
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn listener_count(&self) -> usize {
        self.lock().listeners.len()
    }
}

impl Location for MemoryLocation {
    fn fragment(&self) -> String {
        self.lock().fragment.clone()
    }

    fn set_fragment(&self, fragment: &str) {
        let fragment = strip_hash(fragment);
        let listeners: Vec<_> = {
            let mut state = self.lock();
            if state.fragment == fragment {
                return;
            }
            state.fragment = fragment.to_string();
            state.listeners.iter().map(|(_, l)| l.clone()).collect()
        };
        // Listeners may read the location again, so call them unlocked.
        for listener in listeners {
            listener(fragment.to_string());
        }
    }

    fn subscribe(&self, listener: FragmentListener) -> Subscription {
        let id = {
            let mut state = self.lock();
            let id = state.next_id;
            state.next_id += 1;
            state.listeners.push((id, listener));
            id
        };
        let this = self.clone();
        Subscription::new(move || this.lock().listeners.retain(|(i, _)| *i != id))
    }
}

/// The browser's `window.location`, observed through `hashchange`.
#[cfg(feature = "csr")]
#[derive(Clone, Copy, Default)]
pub struct BrowserLocation;

#[cfg(feature = "csr")]
impl Location for BrowserLocation {
    fn fragment(&self) -> String {
        let hash = window().location().hash().unwrap_or_default();
        strip_hash(&hash).to_string()
    }

    fn set_fragment(&self, fragment: &str) {
        if let Err(err) = window().location().set_hash(strip_hash(fragment)) {
            leptos::logging::warn!("failed to set location hash: {err:?}");
        }
    }

    fn subscribe(&self, listener: FragmentListener) -> Subscription {
        let location = *self;
        let handle = window_event_listener(leptos::ev::hashchange, move |_| {
            listener(location.fragment());
        });
        Subscription::new(move || handle.remove())
    }
}

/// Reactive view of a [`Location`].
#[derive(Clone)]
pub struct HashRouter {
    location: Arc<dyn Location>,
    fragment: RwSignal<String>,
    subscription: Arc<Mutex<Option<Subscription>>>,
}

impl HashRouter {
    pub fn new(location: Arc<dyn Location>) -> Self {
        let fragment = RwSignal::new(location.fragment());
        let subscription = location.subscribe(Arc::new(move |new_fragment| {
            // The signal is gone once the owning view is disposed.
            let _ = fragment.try_set(new_fragment);
        }));

        Self {
            location,
            fragment,
            subscription: Arc::new(Mutex::new(Some(subscription))),
        }
    }

    /// Current route, untracked.
    pub fn route_untracked(&self) -> Route {
        self.fragment.with_untracked(|f| Route::from_fragment(f))
    }

    pub fn route_signal(&self) -> Signal<Route> {
        let fragment = self.fragment;
        Signal::derive(move || fragment.with(|f| Route::from_fragment(f)))
    }

    /// Navigate by writing the location fragment.
    pub fn navigate(&self, route: &Route) {
        self.location.set_fragment(&route.to_fragment());
    }

    /// Stop observing the location.
    pub fn dispose(&self) {
        let subscription = self
            .subscription
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        drop(subscription);
    }
}

/// Scroll a section into view, or to the top of the page when `anchor` is
/// `None` or not on the page.
#[cfg(feature = "csr")]
pub fn scroll_to_anchor(anchor: Option<&str>) {
    let target = anchor.and_then(|id| document().get_element_by_id(id));
    match target {
        Some(element) => {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => window().scroll_to_with_x_and_y(0.0, 0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn memory_location_notifies_on_change_only() {
        let location = MemoryLocation::new("#home");
        assert_eq!(location.fragment(), "home");

        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let _sub = location.subscribe(Arc::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        location.set_fragment("plugins");
        location.set_fragment("#plugins");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        location.set_fragment("guides");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let location = MemoryLocation::default();
        let sub = location.subscribe(Arc::new(|_| {}));
        assert_eq!(location.listener_count(), 1);
        drop(sub);
        assert_eq!(location.listener_count(), 0);
    }

    #[test]
    fn router_starts_from_current_fragment() {
        let router = HashRouter::new(Arc::new(MemoryLocation::new("#datapacks~pack-heads")));
        assert_eq!(router.route_untracked(), Route::section("datapacks", "pack-heads"));

        let router = HashRouter::new(Arc::new(MemoryLocation::default()));
        assert_eq!(router.route_untracked(), Route::Home);
    }

    #[test]
    fn navigate_and_external_change_converge() {
        let location = MemoryLocation::default();
        let router = HashRouter::new(Arc::new(location.clone()));

        router.navigate(&Route::page("plugins"));
        assert_eq!(location.fragment(), "plugins");
        assert_eq!(router.route_untracked(), Route::page("plugins"));

        // back button or manual edit
        location.set_fragment("#guides~claiming-101");
        assert_eq!(router.route_untracked(), Route::section("guides", "claiming-101"));

        router.navigate(&Route::Home);
        assert_eq!(location.fragment(), "home");
        assert_eq!(router.route_untracked(), Route::Home);
    }

    #[test]
    fn unknown_fragment_is_kept_for_not_found() {
        let location = MemoryLocation::default();
        let router = HashRouter::new(Arc::new(location.clone()));
        location.set_fragment("doesnotexist");
        assert_eq!(router.route_untracked(), Route::page("doesnotexist"));
    }

    #[test]
    fn dispose_stops_following_location() {
        let location = MemoryLocation::default();
        let router = HashRouter::new(Arc::new(location.clone()));
        router.dispose();
        assert_eq!(location.listener_count(), 0);

        location.set_fragment("plugins");
        assert_eq!(router.route_untracked(), Route::Home);
    }
}
