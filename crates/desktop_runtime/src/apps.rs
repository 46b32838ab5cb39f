//! Static app registry: identity, presentation defaults, and mount binding for every app.

mod changelog;

use desktop_app_contract::{AppModule, WindowSize};

use crate::{
    model::AppId,
    reducer::DesktopError,
    window_manager::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH},
};

#[derive(Debug, Clone, Copy)]
pub struct AppRegistryEntry {
    pub app_id: AppId,
    pub display_name: &'static str,
    pub icon_path: &'static str,
    pub default_size: WindowSize,
    pub min_size: Option<WindowSize>,
    /// Hidden apps get no desktop icon or launcher row but stay openable by key.
    pub hidden: bool,
    /// Reopening focuses the existing window instead of creating another.
    pub single_instance: bool,
    pub module: AppModule,
}

// Order matches `AppId` discriminants; `lookup` indexes directly.
const APP_REGISTRY: [AppRegistryEntry; 8] = [
    AppRegistryEntry {
        app_id: AppId::Timer,
        display_name: "Timer",
        icon_path: "/icons/clock.png",
        default_size: WindowSize::new(400, 600),
        min_size: Some(WindowSize::new(250, 300)),
        hidden: false,
        single_instance: true,
        module: AppModule::new(desktop_app_timer::mount),
    },
    AppRegistryEntry {
        app_id: AppId::TodoList,
        display_name: "To-Do List",
        icon_path: "/icons/board.png",
        default_size: WindowSize::new(400, 600),
        min_size: Some(WindowSize::new(320, 400)),
        hidden: false,
        single_instance: true,
        module: AppModule::new(desktop_app_todo_list::mount),
    },
    AppRegistryEntry {
        app_id: AppId::Ambience,
        display_name: "Ambience",
        icon_path: "/icons/ambience.png",
        default_size: WindowSize::new(375, 190),
        min_size: Some(WindowSize::new(375, 190)),
        hidden: false,
        single_instance: true,
        module: AppModule::new(desktop_app_ambience::mount),
    },
    AppRegistryEntry {
        app_id: AppId::MusicPlayer,
        display_name: "Music Player",
        icon_path: "/icons/music.png",
        default_size: WindowSize::new(400, 600),
        min_size: Some(WindowSize::new(320, 400)),
        hidden: false,
        single_instance: true,
        module: AppModule::new(desktop_app_music_player::mount),
    },
    AppRegistryEntry {
        app_id: AppId::Notepad,
        display_name: "Notepad",
        icon_path: "/icons/notepad.png",
        default_size: WindowSize::new(600, 600),
        min_size: Some(WindowSize::new(320, 400)),
        hidden: false,
        single_instance: false,
        module: AppModule::new(desktop_app_notepad::mount),
    },
    AppRegistryEntry {
        app_id: AppId::Bookmark,
        display_name: "Bookmark",
        icon_path: "/icons/bookmark.png",
        default_size: WindowSize::new(400, 600),
        min_size: Some(WindowSize::new(320, 400)),
        hidden: false,
        single_instance: true,
        module: AppModule::new(desktop_app_bookmark::mount),
    },
    AppRegistryEntry {
        app_id: AppId::Settings,
        display_name: "Settings",
        icon_path: "/icons/settings.png",
        default_size: WindowSize::new(500, 550),
        min_size: Some(WindowSize::new(300, 300)),
        hidden: false,
        single_instance: true,
        module: AppModule::new(desktop_app_settings::mount),
    },
    AppRegistryEntry {
        app_id: AppId::Changelog,
        display_name: "Changelog",
        icon_path: "/icons/info.png",
        default_size: WindowSize::new(500, 400),
        min_size: Some(WindowSize::new(300, 200)),
        hidden: true,
        single_instance: true,
        module: AppModule::new(changelog::mount),
    },
];

pub fn app_registry() -> &'static [AppRegistryEntry] {
    &APP_REGISTRY
}

pub fn lookup(app_id: AppId) -> &'static AppRegistryEntry {
    &APP_REGISTRY[app_id as usize]
}

/// Resolves a registry key such as `todoList`.
///
/// # Errors
///
/// Returns [`DesktopError::UnknownApp`] for keys outside the registry.
pub fn lookup_key(key: &str) -> Result<&'static AppRegistryEntry, DesktopError> {
    key.parse::<AppId>().map(lookup)
}

pub fn desktop_icon_apps() -> Vec<&'static AppRegistryEntry> {
    visible_apps()
}

pub fn launcher_apps() -> Vec<&'static AppRegistryEntry> {
    visible_apps()
}

fn visible_apps() -> Vec<&'static AppRegistryEntry> {
    APP_REGISTRY.iter().filter(|entry| !entry.hidden).collect()
}

/// Registry minimum, or the global floor for apps without one.
pub fn effective_min_size(app_id: AppId) -> WindowSize {
    lookup(app_id)
        .min_size
        .unwrap_or(WindowSize::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT))
}
