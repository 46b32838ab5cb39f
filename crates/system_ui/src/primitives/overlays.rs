use super::*;

#[component]
/// Floating surface for menus and popovers.
pub fn MenuSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-menu-surface", layout_class)
            id=id
            role=role
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="menu-surface"
        >
            {children()}
        </div>
    }
}

#[component]
/// Menu row with an optional leading icon.
pub fn MenuItem(
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] data_app: Option<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-menu-item", layout_class)
            role="menuitem"
            data-app=data_app
            data-ui-primitive="true"
            data-ui-kind="menu-item"
            on:click=move |ev| fire(on_click, ev)
        >
            {icon.map(|src| view! { <Icon src size=IconSize::Sm /> })}
            <span data-ui-slot="label">{children()}</span>
        </button>
    }
}

#[component]
/// Menu divider.
pub fn MenuSeparator() -> impl IntoView {
    view! {
        <div
            class="ui-menu-separator"
            role="separator"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="menu-separator"
        ></div>
    }
}

#[component]
/// Start-menu popover anchored above the taskbar launcher button.
pub fn LauncherMenu(#[prop(into)] id: String, children: Children) -> impl IntoView {
    view! {
        <MenuSurface
            layout_class="ui-launcher-menu"
            id=id
            role="menu"
            aria_label="Apps"
        >
            {children()}
        </MenuSurface>
    }
}
