//! Image-backed icons.
//!
//! Desktop icons are static PNG assets served under `/icons/`; the primitive only fixes the
//! rendered size and keeps the `data-ui-*` contract consistent with the other primitives.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon size.
pub enum IconSize {
    /// 16px, menu rows.
    Sm,
    /// 24px, taskbar and titlebar.
    #[default]
    Md,
    /// 48px, desktop grid.
    Lg,
}

impl IconSize {
    /// Pixel edge length.
    pub const fn px(self) -> u32 {
        match self {
            Self::Sm => 16,
            Self::Md => 24,
            Self::Lg => 48,
        }
    }

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Square image icon. Decorative unless `alt` is given.
pub fn Icon(
    src: &'static str,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] alt: Option<&'static str>,
) -> impl IntoView {
    let px = size.px();
    view! {
        <img
            class="ui-icon"
            src=src
            alt=alt.unwrap_or("")
            aria-hidden=alt.is_none().then_some("true")
            width=px
            height=px
            draggable="false"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-size=size.token()
        />
    }
}

#[cfg(test)]
mod tests {
    use super::IconSize;

    #[test]
    fn sizes_are_ordered() {
        assert!(IconSize::Sm.px() < IconSize::Md.px());
        assert_eq!(IconSize::Lg.px(), 48);
    }
}
