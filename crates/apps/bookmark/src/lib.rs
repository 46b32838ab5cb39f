//! Bookmark widget: saved links that open in a new browser tab.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppMountContext, PrefsService};
use leptos::*;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;
use thiserror::Error;
use url::{Host, Url};

/// Preference key for the persisted list.
pub const STORAGE_KEY: &str = "wfc.bookmarks.v1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Rejected bookmark input.
pub enum BookmarkError {
    /// Nothing was typed.
    #[error("enter a URL")]
    EmptyUrl,
    /// A scheme other than http or https.
    #[error("`{0}` links are not supported")]
    UnsupportedScheme(String),
    /// No usable host after the scheme.
    #[error("`{0}` is not a valid URL")]
    InvalidUrl(String),
}

fn has_scheme(input: &str) -> bool {
    let Some((scheme, rest)) = input.split_once(':') else {
        return false;
    };
    let is_scheme = scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    // `localhost:8080` is a host and port, not a scheme.
    is_scheme && !rest.starts_with(|c: char| c.is_ascii_digit())
}

fn has_usable_host(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => {
            let domain = domain.strip_suffix('.').unwrap_or(domain);
            !domain.is_empty() && domain.split('.').all(|label| !label.is_empty())
        }
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Parses user input as an absolute http(s) URL; input without a scheme gets `https://`.
///
/// # Errors
///
/// Rejects empty input, non-http schemes, and URLs without a usable host.
pub fn parse_bookmark_url(input: &str) -> Result<Url, BookmarkError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(BookmarkError::EmptyUrl);
    }
    let candidate = if has_scheme(input) {
        input.to_string()
    } else {
        format!("https://{input}")
    };
    let url =
        Url::parse(&candidate).map_err(|_| BookmarkError::InvalidUrl(input.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(BookmarkError::UnsupportedScheme(url.scheme().to_string()));
    }
    if !has_usable_host(&url) {
        return Err(BookmarkError::InvalidUrl(input.to_string()));
    }
    Ok(url)
}

/// Normalized string form of [`parse_bookmark_url`].
///
/// # Errors
///
/// Same as [`parse_bookmark_url`].
pub fn normalize_url(input: &str) -> Result<String, BookmarkError> {
    parse_bookmark_url(input).map(String::from)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One saved link.
pub struct Bookmark {
    /// Stable id within the list.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Normalized absolute URL.
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Saved links, oldest first.
pub struct BookmarkList {
    next_id: u64,
    /// Links in insertion order.
    pub items: Vec<Bookmark>,
}

impl Default for BookmarkList {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
        }
    }
}

impl BookmarkList {
    /// Adds a link. A blank title falls back to the host.
    ///
    /// # Errors
    ///
    /// Returns the [`parse_bookmark_url`] error for bad URLs.
    pub fn add(&mut self, title: &str, url: &str) -> Result<u64, BookmarkError> {
        let url = parse_bookmark_url(url)?;
        let title = match title.trim() {
            "" => url.host_str().unwrap_or_default().to_string(),
            title => title.to_string(),
        };
        let url = String::from(url);
        let id = self
            .next_id
            .max(self.items.iter().map(|item| item.id + 1).max().unwrap_or(1));
        self.next_id = id + 1;
        self.items.push(Bookmark { id, title, url });
        Ok(id)
    }

    /// Deletes `id`.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }
}

/// Loads saved bookmarks; a missing or unreadable entry starts empty.
pub fn load_bookmarks(prefs: &PrefsService) -> BookmarkList {
    prefs
        .load::<BookmarkList>(STORAGE_KEY)
        .unwrap_or_else(|err| {
            logging::warn!("bookmark load failed: {err}");
            None
        })
        .unwrap_or_default()
}

/// Mounts the widget into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <BookmarkApp prefs=context.services.prefs /> }.into_view()
}

#[component]
/// Bookmark window contents.
pub fn BookmarkApp(
    /// Store used to restore and persist links.
    prefs: PrefsService,
) -> impl IntoView {
    let bookmarks = create_rw_signal(load_bookmarks(&prefs));
    let title = create_rw_signal(String::new());
    let url = create_rw_signal(String::new());
    let error = create_rw_signal(None::<BookmarkError>);

    create_effect(move |previous: Option<BookmarkList>| {
        let current = bookmarks.get();
        if previous.is_some_and(|previous| previous != current) {
            if let Err(err) = prefs.save(STORAGE_KEY, &current) {
                logging::warn!("bookmark save failed: {err}");
            }
        }
        current
    });

    let submit = move || {
        let mut result = Ok(0);
        bookmarks.update(|list| {
            result = list.add(&title.get_untracked(), &url.get_untracked());
        });
        match result {
            Ok(_) => {
                title.set(String::new());
                url.set(String::new());
                error.set(None);
            }
            Err(err) => error.set(Some(err)),
        }
    };
    let submit_on_enter = Callback::new(move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            submit();
        }
    });

    view! {
        <Stack layout_class="app-bookmark" padding=LayoutPadding::Md>
            <Stack gap=LayoutGap::Sm>
                <TextField
                    placeholder="Title (optional)"
                    aria_label="Bookmark title"
                    value=title
                    on_input=Callback::new(move |value: String| title.set(value))
                    on_keydown=submit_on_enter
                />
                <Cluster gap=LayoutGap::Sm>
                    <TextField
                        placeholder="example.com"
                        aria_label="Bookmark URL"
                        input_type="url"
                        value=url
                        on_input=Callback::new(move |value: String| url.set(value))
                        on_keydown=submit_on_enter
                    />
                    <Button variant=ButtonVariant::Primary on_click=Callback::new(move |_| submit())>
                        "Save"
                    </Button>
                </Cluster>
                {move || {
                    error
                        .get()
                        .map(|err| view! { <Text role=TextRole::Caption tone=TextTone::Danger>{err.to_string()}</Text> })
                }}
            </Stack>

            <Show
                when=move || bookmarks.with(|list| !list.items.is_empty())
                fallback=|| view! { <EmptyState>"No bookmarks yet."</EmptyState> }
            >
                <ListSurface aria_label="Bookmarks">
                    <For each=move || bookmarks.get().items key=|item| item.id let:item>
                        <ListRow>
                            <a href=item.url.clone() target="_blank" rel="noopener noreferrer">
                                {item.title.clone()}
                            </a>
                            <IconButton
                                glyph="×"
                                aria_label=format!("Remove {}", item.title)
                                size=ButtonSize::Sm
                                on_click=Callback::new(move |_| bookmarks.update(|list| list.remove(item.id)))
                            />
                        </ListRow>
                    </For>
                </ListSurface>
            </Show>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::MemoryPrefsStore;

    use super::*;

    #[test]
    fn bare_hosts_get_https() {
        assert_eq!(
            normalize_url("  example.com/docs "),
            Ok("https://example.com/docs".to_string())
        );
        assert_eq!(
            normalize_url("localhost:8080"),
            Ok("https://localhost:8080/".to_string())
        );
    }

    #[test]
    fn explicit_http_schemes_are_kept_and_lowercased() {
        assert_eq!(
            normalize_url("http://intranet.local"),
            Ok("http://intranet.local/".to_string())
        );
        assert_eq!(
            normalize_url("HTTPS://Example.com"),
            Ok("https://example.com/".to_string())
        );
    }

    #[test]
    fn other_schemes_and_hostless_input_are_rejected() {
        assert_eq!(
            normalize_url("javascript:alert(1)"),
            Err(BookmarkError::UnsupportedScheme("javascript".to_string()))
        );
        assert_eq!(
            normalize_url("ftp://files.example.com"),
            Err(BookmarkError::UnsupportedScheme("ftp".to_string()))
        );
        assert_eq!(normalize_url("   "), Err(BookmarkError::EmptyUrl));
        assert!(matches!(normalize_url("https://"), Err(BookmarkError::InvalidUrl(_))));
        assert!(matches!(normalize_url("my site.com"), Err(BookmarkError::InvalidUrl(_))));
    }

    #[test]
    fn malformed_hosts_are_rejected() {
        for input in ["https://:80", "https://a<b>.com", "https://...", "http://@"] {
            assert_eq!(
                normalize_url(input),
                Err(BookmarkError::InvalidUrl(input.to_string())),
                "{input}"
            );
        }
        assert_eq!(
            normalize_url("http://192.168.1.10:8000/dash"),
            Ok("http://192.168.1.10:8000/dash".to_string())
        );
    }

    #[test]
    fn blank_titles_fall_back_to_host() {
        let mut list = BookmarkList::default();
        let id = list.add(" ", "news.ycombinator.com/item?id=1").expect("add");
        list.add("Docs", "https://docs.rs").expect("add");

        assert_eq!(list.items[0].title, "news.ycombinator.com");
        list.remove(id);
        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].title, "Docs");
    }

    #[test]
    fn list_round_trips_through_prefs() {
        let prefs = PrefsService::new(Rc::new(MemoryPrefsStore::default()));
        assert_eq!(load_bookmarks(&prefs), BookmarkList::default());

        let mut list = BookmarkList::default();
        list.add("Rust", "rust-lang.org").expect("add");
        prefs.save(STORAGE_KEY, &list).expect("save");

        assert_eq!(load_bookmarks(&prefs), list);
    }
}
