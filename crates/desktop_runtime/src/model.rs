use std::{fmt, str::FromStr};

use desktop_app_contract::{WindowSize, DEFAULT_WALLPAPER_ID};
use serde::{Deserialize, Serialize};

use crate::reducer::DesktopError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Closed set of launchable apps. Discriminants index the registry table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppId {
    Timer,
    TodoList,
    Ambience,
    MusicPlayer,
    Notepad,
    Bookmark,
    Settings,
    Changelog,
}

impl AppId {
    pub const ALL: [AppId; 8] = [
        Self::Timer,
        Self::TodoList,
        Self::Ambience,
        Self::MusicPlayer,
        Self::Notepad,
        Self::Bookmark,
        Self::Settings,
        Self::Changelog,
    ];

    /// Stable key used in deep links and app commands.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Timer => "timer",
            Self::TodoList => "todoList",
            Self::Ambience => "ambience",
            Self::MusicPlayer => "musicPlayer",
            Self::Notepad => "notepad",
            Self::Bookmark => "bookmark",
            Self::Settings => "settings",
            Self::Changelog => "changelog",
        }
    }
}

impl FromStr for AppId {
    type Err = DesktopError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|app_id| app_id.key() == key)
            .ok_or_else(|| DesktopError::UnknownApp(key.to_string()))
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl WindowRect {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    pub fn clamped_min(self, min: WindowSize) -> Self {
        Self {
            w: self.w.max(min.width),
            h: self.h.max(min.height),
            ..self
        }
    }

    pub fn size(self) -> WindowSize {
        WindowSize::new(self.w, self.h)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_id: AppId,
    pub title: String,
    pub rect: WindowRect,
    pub restore_rect: Option<WindowRect>,
    pub z_index: u32,
    pub is_focused: bool,
    pub minimized: bool,
    pub maximized: bool,
}

/// Persisted appearance settings (`wfc.desktop.theme.v1`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopTheme {
    pub wallpaper_id: String,
    pub sound_enabled: bool,
}

impl Default for DesktopTheme {
    fn default() -> Self {
        Self {
            wallpaper_id: DEFAULT_WALLPAPER_ID.to_string(),
            sound_enabled: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopState {
    pub next_window_id: u64,
    /// Paint order, bottom to top.
    pub windows: Vec<WindowRecord>,
    /// Minimized window ids in the order they were minimized.
    pub minimized_order: Vec<WindowId>,
    pub launcher_open: bool,
    pub theme: DesktopTheme,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
            minimized_order: Vec::new(),
            launcher_open: false,
            theme: DesktopTheme::default(),
        }
    }
}

impl DesktopState {
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows.iter().find(|w| w.is_focused).map(|w| w.id)
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    /// Topmost window of `app_id`, if any.
    pub fn top_window_for_app(&self, app_id: AppId) -> Option<&WindowRecord> {
        self.windows.iter().rev().find(|w| w.app_id == app_id)
    }

    /// Minimized windows in tray order.
    pub fn minimized_windows(&self) -> impl Iterator<Item = &WindowRecord> + '_ {
        self.minimized_order
            .iter()
            .filter_map(|window_id| self.window(*window_id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResizeEdge {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeEdge {
    pub const ALL: [ResizeEdge; 8] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// CSS slot token for the matching resize handle.
    pub const fn token(self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::NorthEast => "ne",
            Self::NorthWest => "nw",
            Self::SouthEast => "se",
            Self::SouthWest => "sw",
        }
    }

    pub(crate) const fn moves_left_edge(self) -> bool {
        matches!(self, Self::West | Self::NorthWest | Self::SouthWest)
    }

    pub(crate) const fn moves_top_edge(self) -> bool {
        matches!(self, Self::North | Self::NorthEast | Self::NorthWest)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub edge: ResizeEdge,
    pub pointer_start: PointerPosition,
    pub rect_start: WindowRect,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub dragging: Option<DragSession>,
    pub resizing: Option<ResizeSession>,
}
