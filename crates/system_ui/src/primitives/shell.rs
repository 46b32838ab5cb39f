use super::*;

#[component]
/// Full-viewport desktop root; `wallpaper_style` sets the background image.
pub fn DesktopRoot(
    #[prop(into)] wallpaper_style: MaybeSignal<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="desktop-shell"
            style=move || wallpaper_style.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            on:pointerdown=move |ev| fire(on_pointerdown, ev)
        >
            {children()}
        </div>
    }
}

#[component]
/// Column-flow grid of desktop shortcuts.
pub fn DesktopIconGrid(children: Children) -> impl IntoView {
    view! {
        <nav
            class="ui-desktop-icon-grid"
            aria-label="Desktop"
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Desktop shortcut. Opens on double-click or Enter.
pub fn DesktopIconButton(
    icon: &'static str,
    label: &'static str,
    #[prop(optional)] data_app: Option<&'static str>,
    on_open: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-desktop-icon-button"
            title=label
            data-app=data_app
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            on:dblclick=move |_| on_open.call(())
            on:keydown=move |ev: KeyboardEvent| {
                if ev.key() == "Enter" {
                    ev.prevent_default();
                    on_open.call(());
                }
            }
        >
            <Icon src=icon size=IconSize::Lg />
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}

#[component]
/// Positioning context for windows.
pub fn DesktopWindowLayer(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-layer" data-ui-primitive="true" data-ui-kind="desktop-window-layer">
            {children()}
        </div>
    }
}

#[component]
/// Window chrome container. Geometry arrives through `style`.
pub fn WindowFrame(
    #[prop(into)] style: MaybeSignal<String>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(into)] focused: MaybeSignal<bool>,
    #[prop(into)] maximized: MaybeSignal<bool>,
    #[prop(optional, into)] data_app: Option<String>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-window-frame"
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-app=data_app
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-maximized=move || bool_token(maximized.get())
            on:pointerdown=move |ev| fire(on_pointerdown, ev)
        >
            {children()}
        </section>
    }
}

#[component]
/// Draggable titlebar.
pub fn WindowTitleBar(
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class="ui-window-titlebar"
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| fire(on_pointerdown, ev)
            on:dblclick=move |ev| fire(on_dblclick, ev)
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon plus title text.
pub fn WindowTitle(
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(into)] title: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            {icon.map(|src| view! { <Icon src size=IconSize::Sm /> })}
            <span data-ui-slot="text">{move || title.get()}</span>
        </div>
    }
}

#[component]
/// Titlebar button row.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar button. Swallows pointerdown so the press never starts a drag.
pub fn WindowControlButton(
    #[prop(into)] aria_label: MaybeSignal<String>,
    glyph: &'static str,
    #[prop(optional)] danger: bool,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <Button
            aria_label=aria_label.clone()
            title=aria_label
            ui_slot="window-control"
            variant=if danger { ButtonVariant::Danger } else { ButtonVariant::Quiet }
            size=ButtonSize::Sm
            on_pointerdown=Callback::new(|ev: web_sys::PointerEvent| ev.stop_propagation())
            on_click=Callback::new(move |ev: MouseEvent| {
                ev.stop_propagation();
                on_click.call(ev);
            })
        >
            <span aria-hidden="true">{glyph}</span>
        </Button>
    }
}

#[component]
/// Window content area.
pub fn WindowBody(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-body" data-ui-primitive="true" data-ui-kind="window-body">
            {children()}
        </div>
    }
}

#[component]
/// Invisible edge/corner grip; `edge` is a CSS slot token like `ne`.
pub fn ResizeHandle(
    edge: &'static str,
    on_pointerdown: Callback<web_sys::PointerEvent>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            on:pointerdown=move |ev| on_pointerdown.call(ev)
        ></div>
    }
}

#[component]
/// Bottom bar.
pub fn Taskbar(children: Children) -> impl IntoView {
    view! {
        <footer
            class="ui-taskbar"
            role="toolbar"
            aria-label="Taskbar"
            data-ui-primitive="true"
            data-ui-kind="taskbar"
        >
            {children()}
        </footer>
    }
}

#[component]
/// Named taskbar region (`start`, `tray`, `status`).
pub fn TaskbarSection(ui_slot: &'static str, children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-taskbar-section"
            data-ui-primitive="true"
            data-ui-kind="taskbar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Taskbar button with optional icon; `expanded` marks it as a menu trigger.
pub fn TaskbarButton(
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    on_click: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-button"
            id=id
            aria-label=move || aria_label.get()
            aria-haspopup=expanded.is_some().then_some("menu")
            aria-expanded=move || expanded.as_ref().map(|expanded| expanded.get().to_string())
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot="taskbar-button"
            data-ui-variant=ButtonVariant::Quiet.token()
            data-ui-selected=move || bool_token(pressed.get())
            on:click=move |ev| on_click.call(ev)
        >
            {icon.map(|src| view! { <Icon src size=IconSize::Md /> })}
            {children()}
        </button>
    }
}

#[component]
/// Minimized-window tray.
pub fn TrayList(children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-tray-list"
            role="group"
            aria-label="Minimized windows"
            data-ui-primitive="true"
            data-ui-kind="tray-list"
        >
            {children()}
        </div>
    }
}

#[component]
/// Tray entry for one minimized window.
pub fn TrayButton(
    icon: &'static str,
    #[prop(into)] title: String,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-tray-button"
            title=title.clone()
            aria-label=format!("Restore {title}")
            data-ui-primitive="true"
            data-ui-kind="tray-button"
            on:click=move |ev| on_click.call(ev)
        >
            <Icon src=icon size=IconSize::Md />
        </button>
    }
}

#[component]
/// Read-only clock readout.
pub fn ClockLabel(#[prop(into)] text: MaybeSignal<String>) -> impl IntoView {
    view! {
        <time
            class="ui-clock"
            aria-live="off"
            data-ui-primitive="true"
            data-ui-kind="clock"
        >
            {move || text.get()}
        </time>
    }
}
