use desktop_runtime::{use_desktop_runtime, AppId, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::config::SiteConfig;

const PAGE_TITLE: &str = "KUMARx | work from coffee";
const PAGE_DESCRIPTION: &str =
    "A minimal virtual desktop on the web, built for productive & vibey work sessions.";
const OG_IMAGE_PATH: &str = "/metadata/wfc-og.png";

/// Query parameter naming apps to open at boot, e.g. `?open=timer,todoList`.
pub const OPEN_QUERY_PARAM: &str = "open";

/// Splits an `open` value into known apps and rejected keys, preserving order.
pub fn parse_open_param(raw: &str) -> (Vec<AppId>, Vec<String>) {
    let mut apps = Vec::new();
    let mut unknown = Vec::new();
    for key in raw.split(',').map(str::trim).filter(|key| !key.is_empty()) {
        match key.parse::<AppId>() {
            Ok(app_id) => apps.push(app_id),
            Err(_) => unknown.push(key.to_string()),
        }
    }
    (apps, unknown)
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();
    let config = SiteConfig::from_env();
    let og_image = config.absolute(OG_IMAGE_PATH);

    view! {
        <Html lang="en" />
        <Title text=PAGE_TITLE />
        <Meta name="description" content=PAGE_DESCRIPTION />
        <Link rel="canonical" href=config.base_url />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:image" content=og_image.clone() />
        <Meta name="twitter:card" content="summary_large_image" />
        <Meta name="twitter:image" content=og_image />
        <Analytics config />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn Analytics(config: SiteConfig) -> impl IntoView {
    config.analytics_enabled().then(|| {
        view! {
            <Script async_="true" src=config.gtag_src() />
            <Script>{config.gtag_bootstrap()}</Script>
        }
    })
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    view! {
        <DesktopProvider>
            <DeepLinkBoot />
            <DesktopShell />
        </DesktopProvider>
    }
}

#[component]
fn DeepLinkBoot() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let query = use_query_map();
    let raw = query.with_untracked(|query| query.get(OPEN_QUERY_PARAM).cloned());

    if let Some(raw) = raw {
        let (apps, unknown) = parse_open_param(&raw);
        for key in unknown {
            logging::warn!("ignoring unknown app `{key}` in ?{OPEN_QUERY_PARAM}=");
        }
        for app_id in apps {
            runtime.open_app(app_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_param_keeps_known_keys_in_order() {
        let (apps, unknown) = parse_open_param("notepad, timer,,todoList");
        assert_eq!(apps, vec![AppId::Notepad, AppId::Timer, AppId::TodoList]);
        assert!(unknown.is_empty());
    }

    #[test]
    fn open_param_reports_unknown_keys() {
        let (apps, unknown) = parse_open_param("minesweeper,changelog");
        assert_eq!(apps, vec![AppId::Changelog]);
        assert_eq!(unknown, vec!["minesweeper".to_string()]);
    }
}
