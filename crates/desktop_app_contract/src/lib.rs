//! Shared contract between the desktop window manager and the leaf apps it hosts.
//!
//! Every app is a plain mount function receiving an [`AppMountContext`]: the window it renders
//! into, that window's reactive size, and an [`AppServices`] bundle for the few things an app may
//! ask of the shell (close/minimize itself, launch another app, theme changes, preferences).
//! Apps never see each other or the window list.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::rc::Rc;

use leptos::{Callable, Callback, Signal, SignalGetUntracked, View};
use platform_host::{load_pref_typed, save_pref_typed, PrefsStore};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Window content size in CSS pixels.
pub struct WindowSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl WindowSize {
    /// Creates a size.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Grows each dimension up to `min` when smaller.
    pub fn at_least(self, min: WindowSize) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Named UI sounds the shell knows how to play.
pub enum UiSound {
    /// A window opened.
    WindowOpen,
    /// A timer reached zero.
    TimerDone,
}

impl UiSound {
    /// Asset path served by the site.
    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::WindowOpen => "/sounds/open.mp3",
            Self::TimerDone => "/sounds/timer-done.mp3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Built-in desktop wallpaper.
pub struct WallpaperPreset {
    /// Stable id stored in the desktop theme.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Full-size image path.
    pub image_path: &'static str,
}

/// Wallpaper used before the user picks one.
pub const DEFAULT_WALLPAPER_ID: &str = "cozy-cafe";

const WALLPAPER_PRESETS: [WallpaperPreset; 5] = [
    WallpaperPreset {
        id: "cozy-cafe",
        name: "Cozy Cafe",
        image_path: "/wallpapers/cozy-cafe.jpg",
    },
    WallpaperPreset {
        id: "rainy-window",
        name: "Rainy Window",
        image_path: "/wallpapers/rainy-window.jpg",
    },
    WallpaperPreset {
        id: "forest-cabin",
        name: "Forest Cabin",
        image_path: "/wallpapers/forest-cabin.jpg",
    },
    WallpaperPreset {
        id: "night-city",
        name: "Night City",
        image_path: "/wallpapers/night-city.jpg",
    },
    WallpaperPreset {
        id: "library",
        name: "Library",
        image_path: "/wallpapers/library.jpg",
    },
];

/// All built-in wallpapers in picker order.
pub fn wallpaper_presets() -> &'static [WallpaperPreset] {
    &WALLPAPER_PRESETS
}

/// Resolves a wallpaper id, falling back to the default preset for unknown ids.
pub fn wallpaper_preset(id: &str) -> &'static WallpaperPreset {
    WALLPAPER_PRESETS
        .iter()
        .find(|preset| preset.id == id)
        .unwrap_or(&WALLPAPER_PRESETS[0])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Requests an app sends to the desktop runtime.
pub enum AppCommand {
    /// Close the sending window.
    CloseWindow,
    /// Minimize the sending window.
    MinimizeWindow,
    /// Launch another app by registry key (for example `changelog`).
    OpenApp {
        /// Registry key of the app to open.
        app_key: String,
    },
    /// Replace the desktop wallpaper.
    SetWallpaper {
        /// Wallpaper preset id.
        wallpaper_id: String,
    },
    /// Toggle desktop sound effects.
    SetSoundEnabled {
        /// Whether sounds play.
        enabled: bool,
    },
    /// Play a UI sound (ignored while sound is disabled).
    PlaySound {
        /// Sound to play.
        sound: UiSound,
    },
}

#[derive(Clone, Copy)]
/// Window-level requests for the window hosting the app.
pub struct WindowService {
    sender: Callback<AppCommand>,
}

impl WindowService {
    /// Closes the hosting window.
    pub fn close(&self) {
        self.sender.call(AppCommand::CloseWindow);
    }

    /// Minimizes the hosting window to the taskbar tray.
    pub fn minimize(&self) {
        self.sender.call(AppCommand::MinimizeWindow);
    }

    /// Opens another app by registry key.
    pub fn open_app(&self, app_key: impl Into<String>) {
        self.sender.call(AppCommand::OpenApp {
            app_key: app_key.into(),
        });
    }
}

#[derive(Clone, Copy)]
/// Desktop appearance and sound controls.
pub struct ThemeService {
    sender: Callback<AppCommand>,
    /// Active wallpaper preset id.
    pub wallpaper_id: Signal<String>,
    /// Whether UI sounds are enabled.
    pub sound_enabled: Signal<bool>,
}

impl ThemeService {
    /// Requests a wallpaper change.
    pub fn set_wallpaper(&self, wallpaper_id: impl Into<String>) {
        self.sender.call(AppCommand::SetWallpaper {
            wallpaper_id: wallpaper_id.into(),
        });
    }

    /// Enables or disables UI sounds.
    pub fn set_sound_enabled(&self, enabled: bool) {
        self.sender.call(AppCommand::SetSoundEnabled { enabled });
    }

    /// Plays `sound` when sounds are enabled.
    pub fn play(&self, sound: UiSound) {
        if self.sound_enabled.get_untracked() {
            self.sender.call(AppCommand::PlaySound { sound });
        }
    }
}

#[derive(Clone)]
/// App-owned persistence; each app picks its own keys.
pub struct PrefsService {
    store: Rc<dyn PrefsStore>,
}

impl PrefsService {
    /// Wraps a host preference store.
    pub fn new(store: Rc<dyn PrefsStore>) -> Self {
        Self { store }
    }

    /// Loads a typed value, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error when the store fails or the stored value is malformed.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, String> {
        load_pref_typed(self.store.as_ref(), key)
    }

    /// Saves a typed value.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the store write fails.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), String> {
        save_pref_typed(self.store.as_ref(), key, value)
    }
}

#[derive(Clone)]
/// Injected app services bundle.
pub struct AppServices {
    /// Window integration service.
    pub window: WindowService,
    /// Theme and sound service.
    pub theme: ThemeService,
    /// App-owned persistence.
    pub prefs: PrefsService,
    sender: Callback<AppCommand>,
}

impl AppServices {
    /// Creates service handles around the runtime command callback.
    pub fn new(
        sender: Callback<AppCommand>,
        wallpaper_id: Signal<String>,
        sound_enabled: Signal<bool>,
        prefs: Rc<dyn PrefsStore>,
    ) -> Self {
        Self {
            window: WindowService { sender },
            theme: ThemeService {
                sender,
                wallpaper_id,
                sound_enabled,
            },
            prefs: PrefsService::new(prefs),
            sender,
        }
    }

    /// Low-level transport send.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

#[derive(Clone)]
/// Window context injected by the desktop runtime per window instance.
pub struct AppMountContext {
    /// Registry key of the mounted app.
    pub app_key: &'static str,
    /// Runtime window id.
    pub window_id: WindowRuntimeId,
    /// Reactive window size (content box of the window frame).
    pub size: Signal<WindowSize>,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mountable app module bound into a registry entry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use leptos::{create_runtime, Signal};
    use platform_host::MemoryPrefsStore;

    use super::*;

    fn services_with_log(sound_enabled: bool) -> (AppServices, Rc<RefCell<Vec<AppCommand>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let sender = Callback::new(move |command: AppCommand| sink.borrow_mut().push(command));
        let services = AppServices::new(
            sender,
            Signal::derive(|| "sunrise".to_string()),
            Signal::derive(move || sound_enabled),
            Rc::new(MemoryPrefsStore::default()),
        );
        (services, log)
    }

    #[test]
    fn at_least_grows_only_the_short_dimension() {
        let size = WindowSize::new(200, 500).at_least(WindowSize::new(320, 400));
        assert_eq!(size, WindowSize::new(320, 500));
    }

    #[test]
    fn unknown_wallpaper_ids_fall_back_to_default() {
        assert_eq!(wallpaper_preset("night-city").name, "Night City");
        assert_eq!(wallpaper_preset("retired-id").id, DEFAULT_WALLPAPER_ID);
        assert!(wallpaper_presets()
            .iter()
            .all(|preset| preset.image_path.ends_with(".jpg")));
    }

    #[test]
    fn window_service_sends_commands_for_its_window() {
        let runtime = create_runtime();
        let (services, log) = services_with_log(true);

        services.window.minimize();
        services.window.open_app("changelog");
        services.window.close();

        assert_eq!(
            *log.borrow(),
            vec![
                AppCommand::MinimizeWindow,
                AppCommand::OpenApp {
                    app_key: "changelog".to_string()
                },
                AppCommand::CloseWindow,
            ]
        );
        runtime.dispose();
    }

    #[test]
    fn muted_theme_drops_sound_requests() {
        let runtime = create_runtime();
        let (services, log) = services_with_log(false);

        services.theme.play(UiSound::TimerDone);
        services.theme.set_sound_enabled(true);

        assert_eq!(
            *log.borrow(),
            vec![AppCommand::SetSoundEnabled { enabled: true }]
        );
        runtime.dispose();
    }

    #[test]
    fn prefs_service_round_trips_typed_values() {
        let store = MemoryPrefsStore::default();
        let prefs = PrefsService::new(Rc::new(store.clone()));

        prefs.save("wfc.test.v1", &vec![1, 2, 3]).expect("save");
        let loaded: Option<Vec<i32>> = prefs.load("wfc.test.v1").expect("load");

        assert_eq!(loaded, Some(vec![1, 2, 3]));
        assert_eq!(store.len(), 1);
    }
}
