//! Settings widget: wallpaper and sound preferences for the desktop.
//!
//! Panels are listed in [`settings_registry`] the same way the desktop lists apps, and write
//! through [`ThemeService`] so the runtime stays the single owner of the desktop theme.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{wallpaper_presets, AppMountContext, ThemeService};
use leptos::*;
use system_ui::prelude::*;

/// Renders one settings panel.
pub type SettingsPanelFn = fn(ThemeService) -> View;

#[derive(Debug, Clone, Copy)]
/// One entry in the settings sub-navigation.
pub struct SettingsEntry {
    /// Stable section id.
    pub id: &'static str,
    /// Tab label.
    pub name: &'static str,
    /// Tab icon.
    pub icon_path: &'static str,
    /// Panel renderer.
    pub module: SettingsPanelFn,
}

const SETTINGS_REGISTRY: [SettingsEntry; 2] = [
    SettingsEntry {
        id: "background",
        name: "Background",
        icon_path: "/icons/wallpaper.png",
        module: background_panel,
    },
    SettingsEntry {
        id: "sound",
        name: "Sound",
        icon_path: "/icons/volume.png",
        module: sound_panel,
    },
];

/// Settings sections in navigation order.
pub fn settings_registry() -> &'static [SettingsEntry] {
    &SETTINGS_REGISTRY
}

/// Finds a section by id.
pub fn settings_entry(id: &str) -> Option<&'static SettingsEntry> {
    SETTINGS_REGISTRY.iter().find(|entry| entry.id == id)
}

fn background_panel(theme: ThemeService) -> View {
    view! {
        <FieldGroup title="Wallpaper" description="Pick a backdrop for your desk.">
            <div class="app-settings-wallpapers">
                {wallpaper_presets()
                    .iter()
                    .map(|preset| {
                        let id = preset.id;
                        view! {
                            <OptionCard
                                label=preset.name
                                preview_src=preset.image_path
                                selected=Signal::derive(move || theme.wallpaper_id.with(|current| current == id))
                                on_select=Callback::new(move |_| theme.set_wallpaper(id))
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </FieldGroup>
    }
    .into_view()
}

fn sound_panel(theme: ThemeService) -> View {
    view! {
        <FieldGroup title="Sound effects" description="Window chimes and the timer bell.">
            <Switch
                aria_label="Sound effects"
                checked=theme.sound_enabled
                on_toggle=Callback::new(move |enabled| theme.set_sound_enabled(enabled))
            />
        </FieldGroup>
    }
    .into_view()
}

/// Mounts the widget into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <SettingsApp theme=context.services.theme /> }.into_view()
}

#[component]
/// Settings window contents.
pub fn SettingsApp(
    /// Desktop theme handle shared by every panel.
    theme: ThemeService,
) -> impl IntoView {
    let active = create_rw_signal(SETTINGS_REGISTRY[0].id);

    view! {
        <Cluster layout_class="app-settings" align=LayoutAlign::Stretch gap=LayoutGap::None>
            <TabList layout_class="app-settings-nav" aria_label="Settings sections" vertical=true>
                {settings_registry()
                    .iter()
                    .map(|entry| {
                        let id = entry.id;
                        view! {
                            <Tab
                                icon=entry.icon_path
                                selected=Signal::derive(move || active.get() == id)
                                on_select=Callback::new(move |_| active.set(id))
                            >
                                {entry.name}
                            </Tab>
                        }
                    })
                    .collect_view()}
            </TabList>
            <Stack layout_class="app-settings-panel" padding=LayoutPadding::Md>
                {move || settings_entry(active.get()).map(|entry| (entry.module)(theme))}
            </Stack>
        </Cluster>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_lists_background_then_sound() {
        let ids: Vec<&str> = settings_registry().iter().map(|entry| entry.id).collect();
        assert_eq!(ids, vec!["background", "sound"]);
    }

    #[test]
    fn entries_resolve_by_id_only() {
        assert_eq!(settings_entry("sound").map(|entry| entry.name), Some("Sound"));
        assert!(settings_entry("display").is_none());
        assert!(settings_registry()
            .iter()
            .all(|entry| entry.icon_path.starts_with("/icons/")));
    }
}
