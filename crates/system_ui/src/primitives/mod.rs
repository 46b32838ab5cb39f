//! Desktop shell, control, overlay, and layout primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

use crate::{Icon, IconSize};

mod controls;
mod data_display;
mod layout;
mod navigation;
mod overlays;
mod shell;

pub use controls::{
    Button, CheckboxField, FieldGroup, IconButton, ProgressBar, RangeField, Switch, TextArea,
    TextField,
};
pub use data_display::{EmptyState, Heading, ListRow, ListSurface, OptionCard, Text};
pub use layout::{Cluster, Stack};
pub use navigation::{Tab, TabList};
pub use overlays::{LauncherMenu, MenuItem, MenuSeparator, MenuSurface};
pub use shell::{
    ClockLabel, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    ResizeHandle, Taskbar, TaskbarButton, TaskbarSection, TrayButton, TrayList, WindowBody,
    WindowControlButton, WindowControls, WindowFrame, WindowTitle, WindowTitleBar,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button emphasis.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary call to action.
    Primary,
    /// Borderless button for toolbars and menus.
    Quiet,
    /// Destructive action.
    Danger,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Button sizing.
pub enum ButtonSize {
    /// Dense.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Large, used for timer and transport controls.
    Lg,
}

impl ButtonSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text roles.
pub enum TextRole {
    /// Body text.
    #[default]
    Body,
    /// Form and list labels.
    Label,
    /// Small secondary text.
    Caption,
    /// Section title.
    Title,
    /// Oversized numeric readout (timer countdown).
    Display,
}

impl TextRole {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Label => "label",
            Self::Caption => "caption",
            Self::Title => "title",
            Self::Display => "display",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Text tone.
pub enum TextTone {
    /// Primary text.
    #[default]
    Primary,
    /// Muted text.
    Secondary,
    /// Accent text.
    Accent,
    /// Error text.
    Danger,
}

impl TextTone {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Accent => "accent",
            Self::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Spacing scale shared by gaps and padding.
pub enum LayoutGap {
    /// None.
    None,
    /// Small.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Large.
    Lg,
}

impl LayoutGap {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

/// Padding uses the same scale as gaps.
pub type LayoutPadding = LayoutGap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Cross-axis alignment.
pub enum LayoutAlign {
    /// Fill.
    #[default]
    Stretch,
    /// Start.
    Start,
    /// Center.
    Center,
    /// End.
    End,
}

impl LayoutAlign {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Stretch => "stretch",
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Main-axis justification.
pub enum LayoutJustify {
    /// Start.
    #[default]
    Start,
    /// Center.
    Center,
    /// Space between items.
    Between,
    /// End.
    End,
}

impl LayoutJustify {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::Between => "between",
            Self::End => "end",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

pub(crate) fn fire<E: 'static>(handler: Option<Callback<E>>, ev: E) {
    if let Some(handler) = handler {
        handler.call(ev);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_class_is_appended_only_when_present() {
        assert_eq!(merge_layout_class("ui-button", None), "ui-button");
        assert_eq!(merge_layout_class("ui-button", Some("")), "ui-button");
        assert_eq!(
            merge_layout_class("ui-button", Some("timer-preset")),
            "ui-button timer-preset"
        );
    }

    #[test]
    fn default_tokens_match_css_contract() {
        assert_eq!(ButtonVariant::default().token(), "standard");
        assert_eq!(ButtonSize::default().token(), "md");
        assert_eq!(TextRole::Display.token(), "display");
        assert_eq!(LayoutGap::default().token(), "md");
        assert_eq!(LayoutJustify::Between.token(), "between");
        assert_eq!(bool_token(false), "false");
    }
}
