//! Built-in release notes, opened from the launcher's "What's new" item.

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::{Heading, ListRow, ListSurface, Stack, Text, TextRole, TextTone};

struct Release {
    version: &'static str,
    date: &'static str,
    notes: &'static [&'static str],
}

const RELEASES: &[Release] = &[
    Release {
        version: "1.3.0",
        date: "2025-03-02",
        notes: &[
            "Bookmarks: save links and open them in a new tab.",
            "Minimized windows now live in the taskbar tray.",
            "Sound toggle and clock moved to the right of the taskbar.",
        ],
    },
    Release {
        version: "1.2.0",
        date: "2025-01-18",
        notes: &[
            "Notepad keeps several notes at once.",
            "New wallpapers: Night City and Library.",
        ],
    },
    Release {
        version: "1.1.0",
        date: "2024-11-30",
        notes: &[
            "Ambience mixer with per-track volume.",
            "Windows can be resized from any edge.",
        ],
    },
    Release {
        version: "1.0.0",
        date: "2024-10-12",
        notes: &["Timer, to-do list, music player, and settings."],
    },
];

pub(super) fn mount(_: AppMountContext) -> View {
    view! { <ChangelogApp /> }.into_view()
}

#[component]
fn ChangelogApp() -> impl IntoView {
    view! {
        <Stack layout_class="app-changelog">
            {RELEASES
                .iter()
                .map(|release| {
                    view! {
                        <section>
                            <Heading>{format!("v{}", release.version)}</Heading>
                            <Text role=TextRole::Caption tone=TextTone::Secondary>
                                {release.date}
                            </Text>
                            <ListSurface aria_label=format!("Changes in {}", release.version)>
                                {release
                                    .notes
                                    .iter()
                                    .map(|note| view! { <ListRow>{*note}</ListRow> })
                                    .collect_view()}
                            </ListSurface>
                        </section>
                    }
                })
                .collect_view()}
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn releases_are_newest_first_and_non_empty() {
        assert!(RELEASES.windows(2).all(|pair| pair[0].date > pair[1].date));
        assert!(RELEASES.iter().all(|release| !release.notes.is_empty()));
    }
}
