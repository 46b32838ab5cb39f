//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{AppCommand, UiSound};
use thiserror::Error;

use crate::{
    apps::{self, effective_min_size},
    model::{
        AppId, DesktopState, DesktopTheme, DragSession, InteractionState, PointerPosition,
        ResizeEdge, ResizeSession, WindowId, WindowRecord, WindowRect,
    },
    window_manager::{
        cascade_rect, focus_window_internal, keep_titlebar_reachable, normalize_window_stack,
        resize_rect,
    },
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open an app, or focus its existing window for single-instance apps.
    OpenApp {
        /// App to open.
        app_id: AppId,
        /// Desktop area available for placement.
        viewport: WindowRect,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Minimize a window to the taskbar tray.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Restore a minimized window, or un-maximize a maximized one.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Move a window's top-left corner.
    MoveWindow {
        /// Window to move.
        window_id: WindowId,
        /// New left edge.
        x: i32,
        /// New top edge.
        y: i32,
    },
    /// Resize a window; sizes below the app minimum are clamped.
    ResizeWindow {
        /// Window to resize.
        window_id: WindowId,
        /// Requested width.
        width: i32,
        /// Requested height.
        height: i32,
    },
    /// Maximize a window to the provided viewport.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
        /// Viewport rectangle to maximize into.
        viewport: WindowRect,
    },
    /// Tray/taskbar click: restore if minimized, minimize if focused, focus otherwise.
    ToggleTaskbarWindow {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Begin dragging a window.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window drag.
    EndMove,
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Toggle the launcher menu.
    ToggleLauncher,
    /// Close the launcher menu if open.
    CloseLauncher,
    /// Set the active wallpaper preset id.
    SetWallpaper {
        /// Wallpaper preset id.
        wallpaper_id: String,
    },
    /// Enable or disable UI sounds.
    SetSoundEnabled {
        /// Whether sounds play.
        enabled: bool,
    },
    /// Replace the theme with a persisted copy at boot.
    HydrateTheme {
        /// Theme loaded from preferences.
        theme: DesktopTheme,
    },
    /// Route a request coming from the app mounted in `window_id`.
    HandleAppCommand {
        /// Window whose app sent the command.
        window_id: WindowId,
        /// The request.
        command: AppCommand,
        /// Desktop area used when the command opens another app.
        viewport: WindowRect,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Persist the desktop theme.
    PersistTheme,
    /// Play a UI sound.
    PlaySound(UiSound),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors; the state is left untouched when one is returned.
pub enum DesktopError {
    /// The key does not name a registered app.
    #[error("unknown app `{0}`")]
    UnknownApp(String),
    /// The target window id was not found in the current state.
    #[error("window {0} not found")]
    WindowNotFound(WindowId),
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// # Errors
///
/// Returns [`DesktopError::WindowNotFound`] when an action references a window that is not
/// present, and [`DesktopError::UnknownApp`] when an app command names an unregistered key.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, DesktopError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenApp { app_id, viewport } => {
            open_app(state, app_id, viewport, &mut effects)?;
        }
        DesktopAction::CloseWindow { window_id } => {
            find_window_mut(state, window_id)?;
            state.windows.retain(|w| w.id != window_id);
            state.minimized_order.retain(|id| *id != window_id);
            if interaction
                .dragging
                .as_ref()
                .is_some_and(|s| s.window_id == window_id)
            {
                interaction.dragging = None;
            }
            if interaction
                .resizing
                .as_ref()
                .is_some_and(|s| s.window_id == window_id)
            {
                interaction.resizing = None;
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            window.minimized = true;
            window.is_focused = false;
            if !state.minimized_order.contains(&window_id) {
                state.minimized_order.push(window_id);
            }
        }
        DesktopAction::RestoreWindow { window_id } => {
            restore_window(state, window_id)?;
        }
        DesktopAction::FocusWindow { window_id } => {
            focus_window_internal(state, window_id)?;
            state.launcher_open = false;
        }
        DesktopAction::MoveWindow { window_id, x, y } => {
            let window = find_window_mut(state, window_id)?;
            window.rect = keep_titlebar_reachable(WindowRect { x, y, ..window.rect });
            window.maximized = false;
        }
        DesktopAction::ResizeWindow {
            window_id,
            width,
            height,
        } => {
            let window = find_window_mut(state, window_id)?;
            let min = effective_min_size(window.app_id);
            window.rect = WindowRect {
                w: width,
                h: height,
                ..window.rect
            }
            .clamped_min(min);
            window.maximized = false;
        }
        DesktopAction::MaximizeWindow {
            window_id,
            viewport,
        } => {
            let window = find_window_mut(state, window_id)?;
            if !window.maximized {
                window.restore_rect = Some(window.rect);
            }
            window.rect = viewport.clamped_min(effective_min_size(window.app_id));
            window.maximized = true;
            focus_window_internal(state, window_id)?;
        }
        DesktopAction::ToggleTaskbarWindow { window_id } => {
            let window = find_window_mut(state, window_id)?;
            let (minimized, focused) = (window.minimized, window.is_focused);
            if minimized {
                restore_window(state, window_id)?;
            } else if focused {
                return reduce_desktop(
                    state,
                    interaction,
                    DesktopAction::MinimizeWindow { window_id },
                );
            } else {
                focus_window_internal(state, window_id)?;
            }
        }
        DesktopAction::BeginMove { window_id, pointer } => {
            let rect_start = find_window_mut(state, window_id)?.rect;
            focus_window_internal(state, window_id)?;
            interaction.dragging = Some(DragSession {
                window_id,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateMove { pointer } => {
            if let Some(session) = interaction.dragging.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.window_id)?;
                if !window.maximized {
                    window.rect = keep_titlebar_reachable(session.rect_start.offset(dx, dy));
                }
            }
        }
        DesktopAction::EndMove => {
            interaction.dragging = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            let rect_start = find_window_mut(state, window_id)?.rect;
            focus_window_internal(state, window_id)?;
            interaction.resizing = Some(ResizeSession {
                window_id,
                edge,
                pointer_start: pointer,
                rect_start,
            });
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                let window = find_window_mut(state, session.window_id)?;
                if !window.maximized {
                    let min = effective_min_size(window.app_id);
                    window.rect = resize_rect(session.rect_start, session.edge, dx, dy, min);
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resizing = None;
        }
        DesktopAction::ToggleLauncher => {
            state.launcher_open = !state.launcher_open;
        }
        DesktopAction::CloseLauncher => {
            state.launcher_open = false;
        }
        DesktopAction::SetWallpaper { wallpaper_id } => {
            if state.theme.wallpaper_id != wallpaper_id {
                state.theme.wallpaper_id = wallpaper_id;
                effects.push(RuntimeEffect::PersistTheme);
            }
        }
        DesktopAction::SetSoundEnabled { enabled } => {
            if state.theme.sound_enabled != enabled {
                state.theme.sound_enabled = enabled;
                effects.push(RuntimeEffect::PersistTheme);
            }
        }
        DesktopAction::HydrateTheme { theme } => {
            state.theme = theme;
        }
        DesktopAction::HandleAppCommand {
            window_id,
            command,
            viewport,
        } => {
            find_window_mut(state, window_id)?;
            let routed = match command {
                AppCommand::CloseWindow => DesktopAction::CloseWindow { window_id },
                AppCommand::MinimizeWindow => DesktopAction::MinimizeWindow { window_id },
                AppCommand::OpenApp { app_key } => DesktopAction::OpenApp {
                    app_id: app_key.parse()?,
                    viewport,
                },
                AppCommand::SetWallpaper { wallpaper_id } => {
                    DesktopAction::SetWallpaper { wallpaper_id }
                }
                AppCommand::SetSoundEnabled { enabled } => {
                    DesktopAction::SetSoundEnabled { enabled }
                }
                AppCommand::PlaySound { sound } => {
                    if state.theme.sound_enabled {
                        effects.push(RuntimeEffect::PlaySound(sound));
                    }
                    return Ok(effects);
                }
            };
            return reduce_desktop(state, interaction, routed);
        }
    }

    normalize_window_stack(state);
    Ok(effects)
}

fn open_app(
    state: &mut DesktopState,
    app_id: AppId,
    viewport: WindowRect,
    effects: &mut Vec<RuntimeEffect>,
) -> Result<(), DesktopError> {
    let entry = apps::lookup(app_id);
    state.launcher_open = false;

    if entry.single_instance {
        if let Some(existing) = state.top_window_for_app(app_id).map(|w| w.id) {
            return restore_window(state, existing);
        }
    }

    let window_id = next_window_id(state);
    let min = effective_min_size(app_id);
    let rect = cascade_rect(window_id, entry.default_size.at_least(min), min, viewport);
    state.windows.push(WindowRecord {
        id: window_id,
        app_id,
        title: entry.display_name.to_string(),
        rect,
        restore_rect: None,
        z_index: 0,
        is_focused: false,
        minimized: false,
        maximized: false,
    });
    focus_window_internal(state, window_id)?;
    if state.theme.sound_enabled {
        effects.push(RuntimeEffect::PlaySound(UiSound::WindowOpen));
    }
    Ok(())
}

/// Un-minimizes (geometry untouched) or, for a visible maximized window, restores the saved rect.
fn restore_window(state: &mut DesktopState, window_id: WindowId) -> Result<(), DesktopError> {
    let window = find_window_mut(state, window_id)?;
    if window.minimized {
        window.minimized = false;
    } else if window.maximized {
        if let Some(restore_rect) = window.restore_rect.take() {
            window.rect = restore_rect;
        }
        window.maximized = false;
    }
    state.minimized_order.retain(|id| *id != window_id);
    focus_window_internal(state, window_id)
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(
    state: &mut DesktopState,
    window_id: WindowId,
) -> Result<&mut WindowRecord, DesktopError> {
    state
        .windows
        .iter_mut()
        .find(|w| w.id == window_id)
        .ok_or(DesktopError::WindowNotFound(window_id))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::window_manager::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

    const VIEWPORT: WindowRect = WindowRect {
        x: 0,
        y: 0,
        w: 1440,
        h: 860,
    };

    fn reduce(
        state: &mut DesktopState,
        interaction: &mut InteractionState,
        action: DesktopAction,
    ) -> Vec<RuntimeEffect> {
        reduce_desktop(state, interaction, action).expect("reduce")
    }

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: AppId) -> WindowId {
        reduce(
            state,
            interaction,
            DesktopAction::OpenApp {
                app_id,
                viewport: VIEWPORT,
            },
        );
        state.focused_window_id().expect("focused window")
    }

    fn window(state: &DesktopState, window_id: WindowId) -> &WindowRecord {
        state.window(window_id).expect("window")
    }

    #[test]
    fn open_app_focuses_new_window_on_top_with_registry_geometry() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let timer = open(&mut state, &mut interaction, AppId::Timer);
        let notes = open(&mut state, &mut interaction, AppId::Notepad);

        assert_eq!(state.windows.len(), 2);
        assert_eq!(state.focused_window_id(), Some(notes));
        assert!(window(&state, notes).z_index > window(&state, timer).z_index);
        assert_eq!(window(&state, notes).title, "Notepad");
        assert_eq!(window(&state, notes).rect.size(), apps::lookup(AppId::Notepad).default_size);
        assert_ne!(window(&state, timer).id, window(&state, notes).id);
    }

    #[test]
    fn open_app_emits_sound_only_when_enabled() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Bookmark,
                viewport: VIEWPORT,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PlaySound(UiSound::WindowOpen)]);

        state.theme.sound_enabled = false;
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::OpenApp {
                app_id: AppId::Timer,
                viewport: VIEWPORT,
            },
        );
        assert!(effects.is_empty());
    }

    #[test]
    fn reopening_single_instance_app_restores_existing_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let timer = open(&mut state, &mut interaction, AppId::Timer);
        open(&mut state, &mut interaction, AppId::TodoList);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MinimizeWindow { window_id: timer },
        );

        let reopened = open(&mut state, &mut interaction, AppId::Timer);

        assert_eq!(reopened, timer);
        assert_eq!(state.windows.len(), 2);
        assert!(!window(&state, timer).minimized);
        assert!(state.minimized_order.is_empty());
    }

    #[test]
    fn notepad_allows_multiple_windows() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, AppId::Notepad);
        let second = open(&mut state, &mut interaction, AppId::Notepad);

        assert_ne!(first, second);
        assert_eq!(state.windows.len(), 2);
    }

    #[test]
    fn z_indexes_stay_a_dense_total_order() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppId::Timer);
        open(&mut state, &mut interaction, AppId::Ambience);
        open(&mut state, &mut interaction, AppId::Settings);
        reduce(&mut state, &mut interaction, DesktopAction::FocusWindow { window_id: a });

        let z: Vec<u32> = state.windows.iter().map(|w| w.z_index).collect();
        assert_eq!(z, vec![1, 2, 3]);
        assert_eq!(state.windows.last().map(|w| w.id), Some(a));
        assert_eq!(state.windows.iter().filter(|w| w.is_focused).count(), 1);
    }

    #[test]
    fn minimize_restore_round_trip_keeps_geometry_and_order() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppId::Timer);
        let b = open(&mut state, &mut interaction, AppId::MusicPlayer);
        let rect_before = window(&state, a).rect;

        reduce(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: b });
        reduce(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: a });
        reduce(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: a });
        assert_eq!(state.minimized_order, vec![b, a]);
        assert_eq!(state.focused_window_id(), None);

        reduce(&mut state, &mut interaction, DesktopAction::RestoreWindow { window_id: a });

        assert_eq!(window(&state, a).rect, rect_before);
        assert!(!window(&state, a).minimized);
        assert_eq!(state.focused_window_id(), Some(a));
        assert_eq!(state.minimized_order, vec![b]);
    }

    #[test]
    fn resize_below_minimum_clamps_to_registry_min() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let todo = open(&mut state, &mut interaction, AppId::TodoList);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ResizeWindow {
                window_id: todo,
                width: 10,
                height: 10,
            },
        );

        assert_eq!(window(&state, todo).rect.size(), effective_min_size(AppId::TodoList));
    }

    #[test]
    fn close_removes_window_everywhere_and_second_close_reports_not_found() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let a = open(&mut state, &mut interaction, AppId::Timer);
        let b = open(&mut state, &mut interaction, AppId::Bookmark);
        reduce(&mut state, &mut interaction, DesktopAction::MinimizeWindow { window_id: b });
        reduce(&mut state, &mut interaction, DesktopAction::CloseWindow { window_id: b });

        assert_eq!(state.windows.len(), 1);
        assert!(state.minimized_order.is_empty());
        assert_eq!(state.focused_window_id(), Some(a));

        let before = state.clone();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: b },
        )
        .unwrap_err();
        assert_eq!(err, DesktopError::WindowNotFound(b));
        assert_eq!(state, before);
    }

    #[test]
    fn taskbar_toggle_minimizes_if_focused_and_restores_if_minimized() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Settings);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: win },
        );
        assert!(window(&state, win).minimized);
        assert_eq!(state.minimized_order, vec![win]);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::ToggleTaskbarWindow { window_id: win },
        );
        assert!(!window(&state, win).minimized);
        assert!(window(&state, win).is_focused);
    }

    #[test]
    fn maximize_then_restore_returns_to_previous_rect() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Notepad);
        let original = window(&state, win).rect;
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: win,
                viewport: VIEWPORT,
            },
        );
        assert_eq!(window(&state, win).rect, VIEWPORT);
        assert!(window(&state, win).maximized);

        reduce(&mut state, &mut interaction, DesktopAction::RestoreWindow { window_id: win });
        assert_eq!(window(&state, win).rect, original);
        assert!(!window(&state, win).maximized);
    }

    #[test]
    fn drag_moves_window_and_resize_respects_minimum() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Timer);
        let original = window(&state, win).rect;

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 10, y: 10 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 35, y: 50 },
            },
        );
        reduce(&mut state, &mut interaction, DesktopAction::EndMove);

        let moved = window(&state, win).rect;
        assert_eq!((moved.x, moved.y), (original.x + 25, original.y + 40));
        assert!(interaction.dragging.is_none());

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginResize {
                window_id: win,
                edge: ResizeEdge::SouthEast,
                pointer: PointerPosition { x: 0, y: 0 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateResize {
                pointer: PointerPosition { x: -900, y: -900 },
            },
        );

        assert_eq!(window(&state, win).rect.size(), effective_min_size(AppId::Timer));
        assert!(interaction.resizing.is_some());
    }

    #[test]
    fn windows_cannot_be_moved_above_the_desktop() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, AppId::Bookmark);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MoveWindow {
                window_id: win,
                x: 300,
                y: -120,
            },
        );
        assert_eq!((window(&state, win).rect.x, window(&state, win).rect.y), (300, 0));

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: win,
                pointer: PointerPosition { x: 400, y: 20 },
            },
        );
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition { x: 380, y: -500 },
            },
        );

        let rect = window(&state, win).rect;
        assert_eq!((rect.x, rect.y), (280, 0));
        assert_eq!(rect.size(), apps::lookup(AppId::Bookmark).default_size);
    }

    #[test]
    fn app_commands_route_to_their_window() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let settings = open(&mut state, &mut interaction, AppId::Settings);
        let effects = reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                window_id: settings,
                command: AppCommand::SetWallpaper {
                    wallpaper_id: "library".to_string(),
                },
                viewport: VIEWPORT,
            },
        );
        assert_eq!(effects, vec![RuntimeEffect::PersistTheme]);
        assert_eq!(state.theme.wallpaper_id, "library");

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                window_id: settings,
                command: AppCommand::OpenApp {
                    app_key: "changelog".to_string(),
                },
                viewport: VIEWPORT,
            },
        );
        let top = state.windows.last().expect("top window");
        assert_eq!(top.app_id, AppId::Changelog);

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                window_id: settings,
                command: AppCommand::CloseWindow,
                viewport: VIEWPORT,
            },
        );
        assert!(state.window(settings).is_none());
    }

    #[test]
    fn unknown_app_key_leaves_state_untouched() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let win = open(&mut state, &mut interaction, AppId::Timer);
        let before = state.clone();
        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::HandleAppCommand {
                window_id: win,
                command: AppCommand::OpenApp {
                    app_key: "paint".to_string(),
                },
                viewport: VIEWPORT,
            },
        )
        .unwrap_err();

        assert_eq!(err, DesktopError::UnknownApp("paint".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn muted_desktop_drops_app_sound_requests() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, AppId::Timer);

        let command = DesktopAction::HandleAppCommand {
            window_id: win,
            command: AppCommand::PlaySound {
                sound: UiSound::TimerDone,
            },
            viewport: VIEWPORT,
        };
        assert_eq!(
            reduce(&mut state, &mut interaction, command.clone()),
            vec![RuntimeEffect::PlaySound(UiSound::TimerDone)]
        );

        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::SetSoundEnabled { enabled: false },
        );
        assert!(reduce(&mut state, &mut interaction, command).is_empty());
    }

    #[test]
    fn global_floor_applies_to_tiny_viewports() {
        let tiny = WindowRect {
            x: 0,
            y: 0,
            w: 100,
            h: 100,
        };
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let win = open(&mut state, &mut interaction, AppId::Changelog);
        reduce(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow {
                window_id: win,
                viewport: tiny,
            },
        );

        let rect = window(&state, win).rect;
        assert!(rect.w >= MIN_WINDOW_WIDTH && rect.h >= MIN_WINDOW_HEIGHT);
    }
}
