//! Browser entry layer: page metadata, analytics, and the `?open=` deep link around the desktop.

mod config;
mod web_app;

pub use config::{SiteConfig, SITE_BASE_URL};
pub use web_app::{parse_open_param, DesktopEntry, SiteApp, OPEN_QUERY_PARAM};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <SiteApp /> })
}
