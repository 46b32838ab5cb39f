//! Desktop shell UI composition and interaction surfaces.

mod taskbar;
mod window;

use desktop_app_contract::wallpaper_preset;
use leptos::*;
use system_ui::{DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer};

use self::{taskbar::DesktopTaskbar, window::DesktopWindow};
use crate::{
    apps,
    model::PointerPosition,
    reducer::DesktopAction,
    runtime_context::DesktopRuntimeContext,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider};

fn wallpaper_style(wallpaper_id: &str) -> String {
    format!(
        "background-image:url('{}');",
        wallpaper_preset(wallpaper_id).image_path
    )
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove);
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}

#[component]
/// Full desktop: wallpaper, shortcuts, windows, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let wallpaper = Signal::derive(move || runtime.theme.with(|theme| wallpaper_style(&theme.wallpaper_id)));

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.key() != "Escape" {
            return;
        }
        if runtime.launcher_open.get_untracked() {
            ev.prevent_default();
            runtime.dispatch_action(DesktopAction::CloseLauncher);
        }
    });
    let move_listener = window_event_listener(ev::pointermove, move |ev| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();
        if interaction.dragging.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateMove { pointer });
        }
        if interaction.resizing.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
    });
    let up_listener =
        window_event_listener(ev::pointerup, move |_| end_active_pointer_interaction(runtime));
    let cancel_listener =
        window_event_listener(ev::pointercancel, move |_| end_active_pointer_interaction(runtime));
    on_cleanup(move || {
        escape_listener.remove();
        move_listener.remove();
        up_listener.remove();
        cancel_listener.remove();
    });

    view! {
        <DesktopRoot wallpaper_style=wallpaper>
            <div
                data-ui-slot="dismiss-layer"
                on:mousedown=move |_| {
                    if runtime.launcher_open.get_untracked() {
                        runtime.dispatch_action(DesktopAction::CloseLauncher);
                    }
                }
            ></div>
            <DesktopIconGrid>
                {apps::desktop_icon_apps()
                    .into_iter()
                    .map(|entry| {
                        let app_id = entry.app_id;
                        view! {
                            <DesktopIconButton
                                icon=entry.icon_path
                                label=entry.display_name
                                data_app=app_id.key()
                                on_open=Callback::new(move |_| runtime.open_app(app_id))
                            />
                        }
                    })
                    .collect_view()}
            </DesktopIconGrid>

            <DesktopWindowLayer>
                <For
                    each=move || runtime.windows.get()
                    key=|win| win.id.0
                    let:win
                >
                    <DesktopWindow window_id=win.id app_id=win.app_id />
                </For>
            </DesktopWindowLayer>

            <DesktopTaskbar />
        </DesktopRoot>
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::DEFAULT_WALLPAPER_ID;

    use super::*;

    #[test]
    fn wallpaper_style_resolves_presets_and_falls_back() {
        assert_eq!(
            wallpaper_style("library"),
            "background-image:url('/wallpapers/library.jpg');"
        );
        assert_eq!(
            wallpaper_style("deleted"),
            wallpaper_style(DEFAULT_WALLPAPER_ID)
        );
    }
}
