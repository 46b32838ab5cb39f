use super::*;

#[component]
/// Inline text.
pub fn Text(
    #[prop(default = TextRole::Body)] role: TextRole,
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-variant=role.token()
            data-ui-tone=tone.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Section heading.
pub fn Heading(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <h2
            class=merge_layout_class("ui-heading", layout_class)
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-variant=TextRole::Title.token()
        >
            {children()}
        </h2>
    }
}

#[component]
/// Placeholder shown for empty lists.
pub fn EmptyState(children: Children) -> impl IntoView {
    view! {
        <div class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state">
            {children()}
        </div>
    }
}

#[component]
/// Scrollable list container.
pub fn ListSurface(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <ul
            class=merge_layout_class("ui-list", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="list"
        >
            {children()}
        </ul>
    }
}

#[component]
/// Row inside a [`ListSurface`].
pub fn ListRow(
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional, into)] muted: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <li
            class="ui-list-row"
            data-ui-primitive="true"
            data-ui-kind="list-row"
            data-ui-selected=move || bool_token(selected.get())
            data-ui-muted=move || bool_token(muted.get())
        >
            {children()}
        </li>
    }
}

#[component]
/// Selectable tile with a preview image, used for wallpaper choices.
pub fn OptionCard(
    #[prop(into)] label: String,
    preview_src: &'static str,
    #[prop(into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-option-card"
            aria-pressed=move || selected.get().to_string()
            aria-label=label.clone()
            data-ui-primitive="true"
            data-ui-kind="option-card"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |_| fire(on_select, ())
        >
            <img src=preview_src alt="" loading="lazy" data-ui-slot="preview" />
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}
