//! Window state store with explicit, slice-scoped change notification.
//!
//! [`WindowStore`] owns the desktop and interaction state, runs [`reduce_desktop`] for every
//! action, and calls subscribers synchronously after a successful commit. Listeners register for
//! one [`StoreSlice`] and only hear about changes to that slice.

use std::{collections::BTreeMap, rc::Rc};

use crate::{
    model::{AppId, DesktopState, InteractionState, WindowId, WindowRect},
    reducer::{reduce_desktop, DesktopAction, DesktopError, RuntimeEffect},
};

/// Viewport used until the host reports the real desktop area.
pub const DEFAULT_VIEWPORT: WindowRect = WindowRect {
    x: 0,
    y: 0,
    w: 1024,
    h: 720,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Independently observable parts of the store.
pub enum StoreSlice {
    /// Window records, geometry, and stacking.
    Windows,
    /// Minimized tray order.
    Minimized,
    /// Launcher menu open flag.
    Launcher,
    /// Wallpaper and sound preferences.
    Theme,
    /// Active drag/resize sessions.
    Interaction,
}

impl StoreSlice {
    /// Every slice, in notification order.
    pub const ALL: [StoreSlice; 5] = [
        Self::Windows,
        Self::Minimized,
        Self::Launcher,
        Self::Theme,
        Self::Interaction,
    ];

    fn changed(
        self,
        before: (&DesktopState, &InteractionState),
        after: (&DesktopState, &InteractionState),
    ) -> bool {
        match self {
            Self::Windows => before.0.windows != after.0.windows,
            Self::Minimized => before.0.minimized_order != after.0.minimized_order,
            Self::Launcher => before.0.launcher_open != after.0.launcher_open,
            Self::Theme => before.0.theme != after.0.theme,
            Self::Interaction => before.1 != after.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Handle returned by [`WindowStore::subscribe`].
pub struct SubscriptionId(u64);

/// Store change callback; receives the committed state.
pub type StoreListener = Rc<dyn Fn(&DesktopState, &InteractionState)>;

/// Owner of the desktop window state and its subscribers.
pub struct WindowStore {
    state: DesktopState,
    interaction: InteractionState,
    viewport: WindowRect,
    pending_effects: Vec<RuntimeEffect>,
    next_subscription: u64,
    listeners: BTreeMap<SubscriptionId, (StoreSlice, StoreListener)>,
}

impl Default for WindowStore {
    fn default() -> Self {
        Self::new(DesktopState::default())
    }
}

impl WindowStore {
    pub fn new(state: DesktopState) -> Self {
        Self {
            state,
            interaction: InteractionState::default(),
            viewport: DEFAULT_VIEWPORT,
            pending_effects: Vec::new(),
            next_subscription: 1,
            listeners: BTreeMap::new(),
        }
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn viewport(&self) -> WindowRect {
        self.viewport
    }

    /// Sets the area used to place windows opened through [`WindowStore::open`].
    pub fn set_viewport(&mut self, viewport: WindowRect) {
        self.viewport = viewport;
    }

    /// Drains side effects emitted by committed actions, oldest first.
    pub fn take_effects(&mut self) -> Vec<RuntimeEffect> {
        std::mem::take(&mut self.pending_effects)
    }

    /// Registers `listener` for changes to `slice`.
    pub fn subscribe(
        &mut self,
        slice: StoreSlice,
        listener: impl Fn(&DesktopState, &InteractionState) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.insert(id, (slice, Rc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.remove(&id).is_some()
    }

    /// Applies `action` and notifies listeners of every slice it changed.
    ///
    /// The reducer runs on a copy; on error nothing is committed and nobody is notified.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's [`DesktopError`].
    pub fn dispatch(&mut self, action: DesktopAction) -> Result<(), DesktopError> {
        let mut next_state = self.state.clone();
        let mut next_interaction = self.interaction.clone();
        let effects = reduce_desktop(&mut next_state, &mut next_interaction, action)?;

        let changed: Vec<StoreSlice> = StoreSlice::ALL
            .into_iter()
            .filter(|slice| {
                slice.changed(
                    (&self.state, &self.interaction),
                    (&next_state, &next_interaction),
                )
            })
            .collect();

        self.state = next_state;
        self.interaction = next_interaction;
        self.pending_effects.extend(effects);

        if changed.is_empty() {
            return Ok(());
        }
        for (slice, listener) in self.listeners.values() {
            if changed.contains(slice) {
                listener(&self.state, &self.interaction);
            }
        }
        Ok(())
    }

    /// Opens `app_id` in the current viewport and returns the focused window.
    ///
    /// # Errors
    ///
    /// Propagates the reducer's [`DesktopError`].
    pub fn open(&mut self, app_id: AppId) -> Result<WindowId, DesktopError> {
        self.dispatch(DesktopAction::OpenApp {
            app_id,
            viewport: self.viewport,
        })?;
        self.state
            .top_window_for_app(app_id)
            .map(|w| w.id)
            .ok_or(DesktopError::UnknownApp(app_id.key().to_string()))
    }

    /// Opens an app by registry key.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownApp`] for unregistered keys.
    pub fn open_key(&mut self, key: &str) -> Result<WindowId, DesktopError> {
        self.open(key.parse()?)
    }

    pub fn close(&mut self, window_id: WindowId) -> Result<(), DesktopError> {
        self.dispatch(DesktopAction::CloseWindow { window_id })
    }

    pub fn minimize(&mut self, window_id: WindowId) -> Result<(), DesktopError> {
        self.dispatch(DesktopAction::MinimizeWindow { window_id })
    }

    pub fn restore(&mut self, window_id: WindowId) -> Result<(), DesktopError> {
        self.dispatch(DesktopAction::RestoreWindow { window_id })
    }

    pub fn focus(&mut self, window_id: WindowId) -> Result<(), DesktopError> {
        self.dispatch(DesktopAction::FocusWindow { window_id })
    }

    pub fn move_to(&mut self, window_id: WindowId, x: i32, y: i32) -> Result<(), DesktopError> {
        self.dispatch(DesktopAction::MoveWindow { window_id, x, y })
    }

    pub fn resize(
        &mut self,
        window_id: WindowId,
        width: i32,
        height: i32,
    ) -> Result<(), DesktopError> {
        self.dispatch(DesktopAction::ResizeWindow {
            window_id,
            width,
            height,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use desktop_app_contract::UiSound;
    use pretty_assertions::assert_eq;

    use super::*;

    fn record(
        store: &mut WindowStore,
        slice: StoreSlice,
    ) -> (SubscriptionId, Rc<RefCell<Vec<usize>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let id = store.subscribe(slice, move |state, _| {
            sink.borrow_mut().push(state.windows.len());
        });
        (id, log)
    }

    #[test]
    fn open_notifies_synchronously_with_committed_state() {
        let mut store = WindowStore::default();
        let (_, windows) = record(&mut store, StoreSlice::Windows);

        let window_id = store.open(AppId::Timer).expect("open");

        assert_eq!(*windows.borrow(), vec![1]);
        assert_eq!(store.state().focused_window_id(), Some(window_id));
    }

    #[test]
    fn only_changed_slices_are_notified() {
        let mut store = WindowStore::default();
        let window_id = store.open(AppId::Notepad).expect("open");
        let (_, windows) = record(&mut store, StoreSlice::Windows);
        let (_, minimized) = record(&mut store, StoreSlice::Minimized);
        let (_, launcher) = record(&mut store, StoreSlice::Launcher);
        let (_, theme) = record(&mut store, StoreSlice::Theme);

        store.dispatch(DesktopAction::ToggleLauncher).expect("toggle");
        assert_eq!(launcher.borrow().len(), 1);
        assert!(windows.borrow().is_empty());

        store.minimize(window_id).expect("minimize");
        assert_eq!(windows.borrow().len(), 1);
        assert_eq!(minimized.borrow().len(), 1);

        store.move_to(window_id, 10, 10).expect("move");
        assert_eq!(windows.borrow().len(), 2);
        assert_eq!(minimized.borrow().len(), 1);
        assert!(theme.borrow().is_empty());
    }

    #[test]
    fn noop_actions_do_not_notify() {
        let mut store = WindowStore::default();
        let (_, launcher) = record(&mut store, StoreSlice::Launcher);

        store.dispatch(DesktopAction::CloseLauncher).expect("close");

        assert!(launcher.borrow().is_empty());
    }

    #[test]
    fn unsubscribed_listeners_are_not_called() {
        let mut store = WindowStore::default();
        let (id, windows) = record(&mut store, StoreSlice::Windows);

        store.open(AppId::Timer).expect("open");
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
        store.open(AppId::Bookmark).expect("open");

        assert_eq!(*windows.borrow(), vec![1]);
    }

    #[test]
    fn failed_dispatch_commits_nothing_and_notifies_nobody() {
        let mut store = WindowStore::default();
        let window_id = store.open(AppId::Settings).expect("open");
        store.close(window_id).expect("close");
        let (_, windows) = record(&mut store, StoreSlice::Windows);
        let before = store.state().clone();

        assert_eq!(
            store.close(window_id),
            Err(DesktopError::WindowNotFound(window_id))
        );
        assert_eq!(
            store.open_key("solitaire"),
            Err(DesktopError::UnknownApp("solitaire".to_string()))
        );

        assert_eq!(store.state(), &before);
        assert!(windows.borrow().is_empty());
    }

    #[test]
    fn convenience_ops_cover_the_window_lifecycle() {
        let mut store = WindowStore::default();
        store.set_viewport(WindowRect {
            x: 0,
            y: 0,
            w: 1600,
            h: 900,
        });

        let notes = store.open_key("notepad").expect("open");
        let todo = store.open(AppId::TodoList).expect("open");
        store.resize(notes, 700, 500).expect("resize");
        store.focus(notes).expect("focus");
        store.minimize(todo).expect("minimize");
        store.restore(todo).expect("restore");

        let state = store.state();
        let rect = state.window(notes).expect("notes").rect;
        assert_eq!((rect.w, rect.h), (700, 500));
        assert_eq!(state.focused_window_id(), Some(todo));
        assert!(state.minimized_order.is_empty());
    }

    #[test]
    fn effects_queue_until_taken() {
        let mut store = WindowStore::default();
        store.open(AppId::Ambience).expect("open");
        store
            .dispatch(DesktopAction::SetWallpaper {
                wallpaper_id: "night-city".to_string(),
            })
            .expect("wallpaper");

        assert_eq!(
            store.take_effects(),
            vec![
                RuntimeEffect::PlaySound(UiSound::WindowOpen),
                RuntimeEffect::PersistTheme,
            ]
        );
        assert!(store.take_effects().is_empty());
    }
}
