//! Lo-fi music player: a fixed playlist behind a single audio element.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One playlist entry.
pub struct Track {
    /// Song title.
    pub title: &'static str,
    /// Artist credit.
    pub artist: &'static str,
    /// Audio asset.
    pub audio_path: &'static str,
}

/// Built-in playlist.
pub const PLAYLIST: &[Track] = &[
    Track {
        title: "Morning Pour",
        artist: "Lofi Cafe",
        audio_path: "/music/morning-pour.mp3",
    },
    Track {
        title: "Window Seat",
        artist: "Lofi Cafe",
        audio_path: "/music/window-seat.mp3",
    },
    Track {
        title: "Steam and Static",
        artist: "Night Owl",
        audio_path: "/music/steam-and-static.mp3",
    },
    Track {
        title: "Last Order",
        artist: "Night Owl",
        audio_path: "/music/last-order.mp3",
    },
    Track {
        title: "Refill",
        artist: "Bean Counter",
        audio_path: "/music/refill.mp3",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Playback cursor over [`PLAYLIST`].
pub struct Playlist {
    /// Current track index.
    pub index: usize,
    /// Whether audio should be playing.
    pub playing: bool,
}

impl Playlist {
    /// Current track.
    pub fn current(&self) -> &'static Track {
        &PLAYLIST[self.index % PLAYLIST.len()]
    }

    /// Advances, wrapping to the first track.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % PLAYLIST.len();
    }

    /// Steps back, wrapping to the last track.
    pub fn previous(&mut self) {
        self.index = (self.index + PLAYLIST.len() - 1) % PLAYLIST.len();
    }

    /// Jumps to `index` and starts playing.
    pub fn select(&mut self, index: usize) {
        if index < PLAYLIST.len() {
            self.index = index;
            self.playing = true;
        }
    }

    /// Play/pause.
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }
}

/// Mounts the widget into a desktop window.
pub fn mount(_: AppMountContext) -> View {
    view! { <MusicPlayerApp /> }.into_view()
}

#[component]
/// Music player window contents.
pub fn MusicPlayerApp() -> impl IntoView {
    let playlist = create_rw_signal(Playlist::default());
    let audio_ref = create_node_ref::<html::Audio>();

    // Loaded index, `None` until the element is mounted.
    create_effect(move |loaded: Option<Option<usize>>| {
        let state = playlist.get();
        let audio = audio_ref.get()?;
        let media: &web_sys::HtmlMediaElement = &audio;
        if loaded.flatten() != Some(state.index) {
            media.set_src(state.current().audio_path);
        }
        if state.playing {
            if let Err(err) = media.play() {
                logging::warn!("music play failed: {err:?}");
            }
        } else if let Err(err) = media.pause() {
            logging::warn!("music pause failed: {err:?}");
        }
        Some(state.index)
    });

    let current = Signal::derive(move || *playlist.with(Playlist::current));

    view! {
        <Stack layout_class="app-music-player" padding=LayoutPadding::Md>
            <Stack gap=LayoutGap::Sm align=LayoutAlign::Center>
                <Heading>{move || current.get().title}</Heading>
                <Text tone=TextTone::Secondary>{move || current.get().artist}</Text>
            </Stack>
            <Cluster justify=LayoutJustify::Center>
                <IconButton
                    glyph="⏮"
                    aria_label="Previous track"
                    on_click=Callback::new(move |_| playlist.update(Playlist::previous))
                />
                <IconButton
                    glyph="⏯"
                    size=ButtonSize::Lg
                    aria_label=Signal::derive(move || {
                        let label = if playlist.with(|p| p.playing) { "Pause" } else { "Play" };
                        label.to_string()
                    })
                    pressed=Signal::derive(move || playlist.with(|p| p.playing))
                    on_click=Callback::new(move |_| playlist.update(Playlist::toggle))
                />
                <IconButton
                    glyph="⏭"
                    aria_label="Next track"
                    on_click=Callback::new(move |_| playlist.update(Playlist::next))
                />
            </Cluster>
            <ListSurface aria_label="Playlist">
                {PLAYLIST
                    .iter()
                    .enumerate()
                    .map(|(index, track)| {
                        view! {
                            <ListRow selected=Signal::derive(move || playlist.with(|p| p.index == index))>
                                <Button
                                    variant=ButtonVariant::Quiet
                                    on_click=Callback::new(move |_| playlist.update(|p| p.select(index)))
                                >
                                    {format!("{} · {}", track.title, track.artist)}
                                </Button>
                            </ListRow>
                        }
                    })
                    .collect_view()}
            </ListSurface>
            <audio node_ref=audio_ref preload="none" on:ended=move |_| playlist.update(Playlist::next)></audio>
        </Stack>
    }
}
