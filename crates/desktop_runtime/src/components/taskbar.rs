use std::time::Duration;

use platform_host::{local_time_now, LocalTime};
use system_ui::{
    ClockLabel, Icon, IconSize, LauncherMenu, MenuItem, MenuSeparator, Taskbar, TaskbarButton,
    TaskbarSection, TrayButton, TrayList,
};

use super::*;
use crate::model::{AppId, WindowId};

const LAUNCHER_MENU_ID: &str = "desktop-launcher-menu";
const COFFEE_URL: &str = "https://andrewkumar.com/work/Uniform#Book+a+time+with+me";
const COFFEE_TITLE: &str = "Book a coffee with me";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Last clock tick; `None` until the taskbar has mounted.
struct ClockReading(Option<LocalTime>);

impl ClockReading {
    fn label(self) -> String {
        self.0.map(LocalTime::format_12h).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct TrayItem {
    window_id: WindowId,
    title: String,
    icon: &'static str,
}

fn tray_items(runtime: DesktopRuntimeContext) -> Vec<TrayItem> {
    let minimized = runtime.minimized.get();
    runtime.windows.with(|windows| {
        minimized
            .iter()
            .filter_map(|window_id| windows.iter().find(|w| w.id == *window_id))
            .map(|win| TrayItem {
                window_id: win.id,
                title: win.title.clone(),
                icon: apps::lookup(win.app_id).icon_path,
            })
            .collect()
    })
}

#[component]
pub(super) fn DesktopTaskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let launcher_open = runtime.launcher_open;
    let has_minimized = Signal::derive(move || runtime.minimized.with(|ids| !ids.is_empty()));
    let sound_enabled = Signal::derive(move || runtime.theme.with(|theme| theme.sound_enabled));

    view! {
        <Taskbar>
            <TaskbarSection ui_slot="start">
                <TaskbarButton
                    icon="/icons/coffee.png"
                    id="desktop-launcher-button"
                    aria_label="Open app menu"
                    expanded=launcher_open
                    pressed=launcher_open
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::ToggleLauncher);
                    })
                >
                    <span data-ui-slot="brand">"wfc"</span>
                </TaskbarButton>
                <Show when=move || launcher_open.get() fallback=|| ()>
                    <LauncherMenu id=LAUNCHER_MENU_ID>
                        {apps::launcher_apps()
                            .into_iter()
                            .map(|entry| {
                                let app_id = entry.app_id;
                                view! {
                                    <MenuItem
                                        icon=entry.icon_path
                                        data_app=app_id.key()
                                        on_click=Callback::new(move |_| runtime.open_app(app_id))
                                    >
                                        {entry.display_name}
                                    </MenuItem>
                                }
                            })
                            .collect_view()}
                        <MenuSeparator />
                        <MenuItem
                            icon=apps::lookup(AppId::Changelog).icon_path
                            data_app=AppId::Changelog.key()
                            on_click=Callback::new(move |_| runtime.open_app(AppId::Changelog))
                        >
                            "What's new"
                        </MenuItem>
                    </LauncherMenu>
                </Show>
            </TaskbarSection>

            <Show when=move || has_minimized.get() fallback=|| ()>
                <TaskbarSection ui_slot="tray">
                    <TrayList>
                        <For
                            each=move || tray_items(runtime)
                            key=|item| item.window_id.0
                            let:item
                        >
                            <TrayButton
                                icon=item.icon
                                title=item.title
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(DesktopAction::ToggleTaskbarWindow {
                                        window_id: item.window_id,
                                    });
                                })
                            />
                        </For>
                    </TrayList>
                </TaskbarSection>
            </Show>

            <TaskbarSection ui_slot="status">
                <TaskbarButton
                    aria_label=Signal::derive(move || {
                        let label = if sound_enabled.get() { "Mute sounds" } else { "Unmute sounds" };
                        label.to_string()
                    })
                    pressed=sound_enabled
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(DesktopAction::SetSoundEnabled {
                            enabled: !sound_enabled.get_untracked(),
                        });
                    })
                >
                    {move || {
                        let src = if sound_enabled.get() {
                            "/icons/volume.png"
                        } else {
                            "/icons/mute.png"
                        };
                        view! { <Icon src size=IconSize::Md /> }
                    }}
                </TaskbarButton>
                <a
                    href=COFFEE_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    title=COFFEE_TITLE
                    data-ui-slot="coffee-link"
                >
                    <Icon src="/icons/coffee.png" size=IconSize::Sm alt=COFFEE_TITLE />
                </a>
                <TaskbarClock />
            </TaskbarSection>
        </Taskbar>
    }
}

#[component]
fn TaskbarClock() -> impl IntoView {
    let reading = create_rw_signal(ClockReading::default());

    let tick = move || reading.set(ClockReading(Some(local_time_now())));
    // First reading lands on the frame after mount; the label is blank until then.
    request_animation_frame(tick);
    match set_interval_with_handle(tick, Duration::from_secs(1)) {
        Ok(handle) => on_cleanup(move || handle.clear()),
        Err(err) => logging::warn!("taskbar clock interval failed: {err:?}"),
    }

    view! { <ClockLabel text=Signal::derive(move || reading.get().label()) /> }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn clock_is_blank_before_first_tick() {
        assert_eq!(ClockReading::default().label(), "");
    }

    #[test]
    fn clock_uses_twelve_hour_time_with_padded_minutes() {
        assert_eq!(ClockReading(Some(LocalTime::new(14, 3, 9))).label(), "2:03 PM");
        assert_eq!(ClockReading(Some(LocalTime::new(0, 45, 0))).label(), "12:45 AM");
    }
}
