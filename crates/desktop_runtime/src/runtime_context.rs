//! Runtime provider and context wiring for the desktop shell.
//!
//! The provider owns the [`WindowStore`], mirrors each [`StoreSlice`] into its own signal through
//! store subscriptions, and runs reducer effects against the host. UI composition stays in
//! [`crate::components`].

use std::{
    cell::{Cell, RefCell},
    collections::VecDeque,
    rc::Rc,
};

use desktop_app_contract::{AppCommand, AppServices, PrefsService};
use leptos::*;

use crate::{
    host::DesktopHostContext,
    model::{AppId, DesktopTheme, InteractionState, WindowId, WindowRecord, WindowRect},
    reducer::{DesktopAction, RuntimeEffect},
    store::{StoreSlice, WindowStore},
};

/// Height reserved for the taskbar at the bottom of the viewport.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects and environment queries.
    pub host: StoredValue<DesktopHostContext>,
    /// Window records in paint order.
    pub windows: RwSignal<Vec<WindowRecord>>,
    /// Minimized window ids in tray order.
    pub minimized: RwSignal<Vec<WindowId>>,
    /// Launcher menu open flag.
    pub launcher_open: RwSignal<bool>,
    /// Wallpaper and sound preferences.
    pub theme: RwSignal<DesktopTheme>,
    /// Pointer drag/resize interaction state.
    pub interaction: RwSignal<InteractionState>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Current desktop area above the taskbar.
    pub fn viewport(&self) -> WindowRect {
        self.host
            .with_value(|host| host.desktop_viewport_rect(TASKBAR_HEIGHT_PX))
    }

    /// Opens `app_id`, or focuses its window for single-instance apps.
    pub fn open_app(&self, app_id: AppId) {
        self.dispatch_action(DesktopAction::OpenApp {
            app_id,
            viewport: self.viewport(),
        });
    }

    /// Builds the service bundle handed to the app mounted in `window_id`.
    pub fn app_services(&self, window_id: WindowId) -> AppServices {
        let runtime = *self;
        let sender = Callback::new(move |command: AppCommand| {
            runtime.dispatch_action(DesktopAction::HandleAppCommand {
                window_id,
                command,
                viewport: runtime.viewport(),
            });
        });
        let theme = self.theme;
        AppServices::new(
            sender,
            Signal::derive(move || theme.with(|theme| theme.wallpaper_id.clone())),
            Signal::derive(move || theme.with(|theme| theme.sound_enabled)),
            self.host.with_value(DesktopHostContext::prefs_store),
        )
    }
}

/// Applies actions to a [`WindowStore`] one at a time.
///
/// Store listeners write signals, and the views they re-run may dispatch again. Those actions
/// wait in the queue until the current one has committed and its effects have run.
#[derive(Clone)]
pub struct DispatchQueue {
    store: Rc<RefCell<WindowStore>>,
    pending: Rc<RefCell<VecDeque<DesktopAction>>>,
    draining: Rc<Cell<bool>>,
}

impl DispatchQueue {
    /// Wraps `store`.
    pub fn new(store: WindowStore) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
            pending: Rc::default(),
            draining: Rc::default(),
        }
    }

    /// Shared handle to the wrapped store.
    pub fn store(&self) -> Rc<RefCell<WindowStore>> {
        Rc::clone(&self.store)
    }

    /// Queues `action` and, unless a drain is already running, applies everything queued.
    ///
    /// `run_effects` receives each commit's effects with the theme they should honour. Reducer
    /// errors are logged and the drain moves on.
    pub fn dispatch(
        &self,
        action: DesktopAction,
        mut run_effects: impl FnMut(Vec<RuntimeEffect>, &DesktopTheme),
    ) {
        self.pending.borrow_mut().push_back(action);
        if self.draining.replace(true) {
            return;
        }

        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(action) = next else {
                break;
            };
            let outcome = self.store.borrow_mut().dispatch(action);
            if let Err(err) = outcome {
                logging::warn!("desktop reducer error: {err}");
                continue;
            }

            let (effects, theme) = {
                let mut store = self.store.borrow_mut();
                (store.take_effects(), store.state().theme.clone())
            };
            run_effects(effects, &theme);
        }
        self.draining.set(false);
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components and hydrates the persisted theme.
pub fn DesktopProvider(
    /// Host adapters; defaults to the browser implementations.
    #[prop(optional)]
    host: Option<DesktopHostContext>,
    children: Children,
) -> impl IntoView {
    let host = host.unwrap_or_default();
    let mut store = WindowStore::default();
    store.set_viewport(host.desktop_viewport_rect(TASKBAR_HEIGHT_PX));
    if let Some(theme) = host.load_theme() {
        if let Err(err) = store.dispatch(DesktopAction::HydrateTheme { theme }) {
            logging::warn!("theme hydration failed: {err}");
        }
    }

    let state = store.state();
    let windows = create_rw_signal(state.windows.clone());
    let minimized = create_rw_signal(state.minimized_order.clone());
    let launcher_open = create_rw_signal(state.launcher_open);
    let theme = create_rw_signal(state.theme.clone());
    let interaction = create_rw_signal(store.interaction().clone());

    store.subscribe(StoreSlice::Windows, move |state, _| {
        windows.set(state.windows.clone())
    });
    store.subscribe(StoreSlice::Minimized, move |state, _| {
        minimized.set(state.minimized_order.clone())
    });
    store.subscribe(StoreSlice::Launcher, move |state, _| {
        launcher_open.set(state.launcher_open)
    });
    store.subscribe(StoreSlice::Theme, move |state, _| {
        theme.set(state.theme.clone())
    });
    store.subscribe(StoreSlice::Interaction, move |_, ui| {
        interaction.set(ui.clone())
    });

    desktop_app_notepad::provide_shared_notes(PrefsService::new(host.prefs_store()));

    let host = store_value(host);
    let queue = DispatchQueue::new(store);
    let dispatch = Callback::new(move |action: DesktopAction| {
        queue.dispatch(action, |effects, current_theme| {
            host.with_value(|host| {
                for effect in effects {
                    host.run_runtime_effect(effect, current_theme);
                }
            });
        });
    });

    provide_context(DesktopRuntimeContext {
        host,
        windows,
        minimized,
        launcher_open,
        theme,
        interaction,
        dispatch,
    });

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::store::DEFAULT_VIEWPORT;

    fn open(app_id: AppId) -> DesktopAction {
        DesktopAction::OpenApp {
            app_id,
            viewport: DEFAULT_VIEWPORT,
        }
    }

    #[test]
    fn actions_dispatched_from_listeners_run_after_the_current_commit() {
        let queue = DispatchQueue::new(WindowStore::default());
        let seen = Rc::new(RefCell::new(Vec::new()));

        let listener_queue = queue.clone();
        let listener_seen = Rc::clone(&seen);
        queue
            .store()
            .borrow_mut()
            .subscribe(StoreSlice::Windows, move |state, _| {
                let apps: Vec<AppId> = state.windows.iter().map(|w| w.app_id).collect();
                listener_seen.borrow_mut().push(apps.clone());
                if apps == [AppId::Notepad] {
                    listener_queue.dispatch(open(AppId::Timer), |_, _| {});
                }
            });

        let mut commits = 0;
        queue.dispatch(open(AppId::Notepad), |_, _| commits += 1);

        assert_eq!(commits, 2);
        assert_eq!(
            *seen.borrow(),
            vec![vec![AppId::Notepad], vec![AppId::Notepad, AppId::Timer]]
        );
        let store = queue.store();
        let store = store.borrow();
        assert_eq!(store.state().windows.len(), 2);
        assert!(store
            .state()
            .windows
            .iter()
            .any(|w| w.app_id == AppId::Timer && w.is_focused));
    }

    #[test]
    fn reducer_errors_do_not_stall_the_queue() {
        let queue = DispatchQueue::new(WindowStore::default());
        let mut commits = 0;

        queue.dispatch(
            DesktopAction::CloseWindow {
                window_id: WindowId(404),
            },
            |_, _| commits += 1,
        );
        queue.dispatch(open(AppId::Settings), |_, _| commits += 1);

        assert_eq!(commits, 1);
        assert_eq!(queue.store().borrow().state().windows.len(), 1);
    }
}
