//! Shared UI primitives for the desktop shell and its widgets.
//!
//! Every primitive renders a stable `data-ui-primitive` / `data-ui-kind` pair plus token
//! attributes (`data-ui-variant`, `data-ui-size`, ...) that the site stylesheet targets. Widgets
//! compose these instead of emitting ad hoc markup so the desktop keeps one visual language.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod icon;
mod primitives;

pub use icon::{Icon, IconSize};
pub use primitives::{
    Button, ButtonSize, ButtonVariant, CheckboxField, ClockLabel, Cluster, DesktopIconButton,
    DesktopIconGrid, DesktopRoot, DesktopWindowLayer, EmptyState, FieldGroup, Heading, IconButton,
    LauncherMenu, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, ListRow, ListSurface,
    MenuItem, MenuSeparator, MenuSurface, OptionCard, ProgressBar, RangeField, ResizeHandle, Stack,
    Switch, Tab, TabList, Taskbar, TaskbarButton, TaskbarSection, Text, TextArea, TextField,
    TextRole, TextTone, TrayButton, TrayList, WindowBody, WindowControlButton, WindowControls,
    WindowFrame, WindowTitle, WindowTitleBar,
};

/// Convenience imports for widget crates.
pub mod prelude {
    pub use crate::{
        Button, ButtonSize, ButtonVariant, CheckboxField, Cluster, EmptyState, FieldGroup, Heading,
        Icon, IconButton, IconSize, LayoutAlign, LayoutGap, LayoutJustify, LayoutPadding, ListRow,
        ListSurface, OptionCard, ProgressBar, RangeField, Stack, Switch, Tab, TabList, Text,
        TextArea, TextField, TextRole, TextTone,
    };
}
