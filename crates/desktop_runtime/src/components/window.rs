use desktop_app_contract::{AppMountContext, WindowSize};
use system_ui::{
    ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame, WindowTitle,
    WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::model::{AppId, ResizeEdge, WindowId, WindowRecord, WindowRect};

const TITLEBAR_HEIGHT_PX: i32 = 32;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

/// Primary-button presses only; secondary touch points are ignored.
fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

fn window_style(win: &WindowRecord) -> String {
    let mut style = format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};",
        win.rect.x, win.rect.y, win.rect.w, win.rect.h, win.z_index
    );
    if win.minimized {
        style.push_str("display:none;");
    }
    style
}

fn content_size(rect: WindowRect) -> WindowSize {
    WindowSize::new(rect.w, (rect.h - TITLEBAR_HEIGHT_PX).max(0))
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId, app_id: AppId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entry = apps::lookup(app_id);

    let window = create_memo(move |_| {
        runtime
            .windows
            .with(|windows| windows.iter().find(|w| w.id == window_id).cloned())
    });
    let style = Signal::derive(move || window.with(|w| w.as_ref().map(window_style).unwrap_or_default()));
    let title = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    });
    let focused = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.is_focused)));
    let maximized = Signal::derive(move || window.with(|w| w.as_ref().is_some_and(|w| w.maximized)));
    let size = create_memo(move |_| {
        window.with(|w| w.as_ref().map(|w| content_size(w.rect)).unwrap_or(entry.default_size))
    });

    let focus = Callback::new(move |_: web_sys::PointerEvent| {
        if !focused.get_untracked() {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });
    let toggle_maximize = move || {
        if maximized.get_untracked() {
            runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
        } else {
            runtime.dispatch_action(DesktopAction::MaximizeWindow {
                window_id,
                viewport: runtime.viewport(),
            });
        }
    };
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    // Mounted once per window; geometry changes reach the app through `size`.
    let contents = entry.module.mount(AppMountContext {
        app_key: app_id.key(),
        window_id: window_id.0,
        size: size.into(),
        services: runtime.app_services(window_id),
    });

    view! {
        <WindowFrame
            style
            aria_label=title
            focused
            maximized
            data_app=app_id.key()
            on_pointerdown=focus
        >
            <WindowTitleBar
                on_pointerdown=begin_move
                on_dblclick=Callback::new(move |ev: ev::MouseEvent| {
                    ev.prevent_default();
                    toggle_maximize();
                })
            >
                <WindowTitle icon=entry.icon_path title />
                <WindowControls>
                    <WindowControlButton
                        aria_label="Minimize window"
                        glyph="_"
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                        })
                    />
                    <WindowControlButton
                        aria_label=Signal::derive(move || {
                            let label = if maximized.get() { "Restore window" } else { "Maximize window" };
                            label.to_string()
                        })
                        glyph="□"
                        on_click=Callback::new(move |_| toggle_maximize())
                    />
                    <WindowControlButton
                        aria_label="Close window"
                        glyph="×"
                        danger=true
                        on_click=Callback::new(move |_| {
                            runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                        })
                    />
                </WindowControls>
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
            <Show when=move || !maximized.get() fallback=|| ()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeHandle window_id edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

#[component]
fn WindowResizeHandle(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.token() on_pointerdown /> }
}
