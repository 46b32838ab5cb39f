use super::*;

fn range_percent(value: f64, min: f64, max: f64) -> f64 {
    let span = (max - min).max(f64::EPSILON);
    (((value - min) / span) * 100.0).clamp(0.0, 100.0)
}

#[component]
/// Shared button with variant, size, and selection state tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] role: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] aria_expanded: Option<MaybeSignal<bool>>,
    #[prop(optional, into)] aria_haspopup: Option<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            role=role
            aria-label=move || aria_label.get()
            aria-expanded=move || aria_expanded.as_ref().map(|expanded| expanded.get().to_string())
            aria-haspopup=aria_haspopup
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-selected=move || bool_token(selected.get())
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| fire(on_click, ev)
            on:pointerdown=move |ev| fire(on_pointerdown, ev)
        >
            {leading_icon.map(|src| view! { <Icon src size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Round glyph button for media transport and compact row actions.
pub fn IconButton(
    /// Visible glyph, e.g. `▶`.
    glyph: &'static str,
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] pressed: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let title = aria_label.clone();
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-icon-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            aria-pressed=move || pressed.get().to_string()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="icon-button"
            data-ui-size=size.token()
            data-ui-pressed=move || bool_token(pressed.get())
            on:click=move |ev| fire(on_click, ev)
        >
            <span aria-hidden="true">{glyph}</span>
        </button>
    }
}

#[component]
/// Label plus control wrapper.
pub fn FieldGroup(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            class=merge_layout_class("ui-field-group", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-group"
        >
            <span data-ui-slot="title">{title}</span>
            {description.map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            <span data-ui-slot="control">{children()}</span>
        </label>
    }
}

#[component]
/// Single-line text input.
pub fn TextField(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] input_type: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-field", layout_class)
            type=input_type.unwrap_or("text")
            placeholder=placeholder
            aria-label=aria_label
            node_ref=node_ref
            autocomplete="off"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-field"
            on:input=move |ev| fire(on_input, event_target_value(&ev))
            on:keydown=move |ev| fire(on_keydown, ev)
        />
    }
}

#[component]
/// Multiline text input.
pub fn TextArea(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    view! {
        <textarea
            class=merge_layout_class("ui-textarea", layout_class)
            placeholder=placeholder
            aria-label=aria_label
            spellcheck="true"
            prop:value=move || value.get()
            data-ui-primitive="true"
            data-ui-kind="text-area"
            on:input=move |ev| fire(on_input, event_target_value(&ev))
        ></textarea>
    }
}

#[component]
/// Range slider; `data-ui-percent` drives the filled-track styling.
pub fn RangeField(
    #[prop(into)] aria_label: String,
    #[prop(default = 0.0)] min: f64,
    #[prop(default = 100.0)] max: f64,
    #[prop(default = 1.0)] step: f64,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(optional)] on_input: Option<Callback<f64>>,
) -> impl IntoView {
    view! {
        <input
            class=merge_layout_class("ui-range", layout_class)
            type="range"
            min=min
            max=max
            step=step
            aria-label=aria_label
            prop:value=move || value.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="range"
            data-ui-percent=move || format!("{:.2}", range_percent(value.get(), min, max))
            on:input=move |ev| {
                if let Ok(parsed) = event_target_value(&ev).parse::<f64>() {
                    fire(on_input, parsed);
                }
            }
        />
    }
}

#[component]
/// Checkbox, used for todo completion.
pub fn CheckboxField(
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <input
            class="ui-checkbox"
            type="checkbox"
            aria-label=move || aria_label.get()
            prop:checked=move || checked.get()
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-selected=move || bool_token(checked.get())
            on:change=move |ev| fire(on_toggle, event_target_checked(&ev))
        />
    }
}

#[component]
/// On/off switch with `role="switch"` semantics.
pub fn Switch(
    #[prop(into)] aria_label: MaybeSignal<String>,
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_toggle: Option<Callback<bool>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-switch", layout_class)
            role="switch"
            aria-label=move || aria_label.get()
            aria-checked=move || checked.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-selected=move || bool_token(checked.get())
            on:click=move |_| fire(on_toggle, !checked.get_untracked())
        >
            <span data-ui-slot="track">
                <span data-ui-slot="thumb"></span>
            </span>
        </button>
    }
}

#[component]
/// Linear progress indicator.
pub fn ProgressBar(
    #[prop(into)] value: MaybeSignal<f64>,
    #[prop(default = 1.0)] max: f64,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <progress
            class=merge_layout_class("ui-progress", layout_class)
            max=max
            value=move || value.get().clamp(0.0, max)
            data-ui-primitive="true"
            data-ui-kind="progress"
        ></progress>
    }
}

#[cfg(test)]
mod tests {
    use super::range_percent;

    #[test]
    fn range_percent_clamps_out_of_range_values() {
        assert_eq!(range_percent(50.0, 0.0, 100.0), 50.0);
        assert_eq!(range_percent(-5.0, 0.0, 1.0), 0.0);
        assert_eq!(range_percent(2.0, 0.0, 1.0), 100.0);
    }
}
