use super::*;

#[component]
/// Vertical or horizontal tab strip.
pub fn TabList(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] vertical: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-tab-list", layout_class)
            role="tablist"
            aria-label=aria_label
            aria-orientation=if vertical { "vertical" } else { "horizontal" }
            data-ui-primitive="true"
            data-ui-kind="tab-list"
        >
            {children()}
        </div>
    }
}

#[component]
/// Tab trigger.
pub fn Tab(
    #[prop(optional)] icon: Option<&'static str>,
    #[prop(into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-tab"
            role="tab"
            aria-selected=move || selected.get().to_string()
            tabindex=move || if selected.get() { 0 } else { -1 }
            data-ui-primitive="true"
            data-ui-kind="tab"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |_| fire(on_select, ())
        >
            {icon.map(|src| view! { <Icon src size=IconSize::Sm /> })}
            <span>{children()}</span>
        </button>
    }
}
