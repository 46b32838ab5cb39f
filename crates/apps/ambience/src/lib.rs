//! Ambience mixer: looping background tracks, each with its own volume.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::AppMountContext;
use leptos::*;
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One looping ambient track.
pub struct AmbienceTrack {
    /// Display name.
    pub name: &'static str,
    /// Slider icon.
    pub icon_path: &'static str,
    /// Audio asset.
    pub audio_path: &'static str,
}

/// Tracks in mixer order.
pub const TRACKS: [AmbienceTrack; 4] = [
    AmbienceTrack {
        name: "Rain",
        icon_path: "/icons/rain.png",
        audio_path: "/sounds/ambience/rain.mp3",
    },
    AmbienceTrack {
        name: "Cafe",
        icon_path: "/icons/coffee.png",
        audio_path: "/sounds/ambience/cafe.mp3",
    },
    AmbienceTrack {
        name: "Fireplace",
        icon_path: "/icons/fire.png",
        audio_path: "/sounds/ambience/fireplace.mp3",
    },
    AmbienceTrack {
        name: "Birds",
        icon_path: "/icons/bird.png",
        audio_path: "/sounds/ambience/birds.mp3",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Per-track volume in `0.0..=1.0`; zero means stopped.
pub struct AmbienceMix {
    volumes: [f64; TRACKS.len()],
}

impl AmbienceMix {
    /// Volume of track `index`; out of range reads as silent.
    pub fn volume(&self, index: usize) -> f64 {
        self.volumes.get(index).copied().unwrap_or(0.0)
    }

    /// Sets track `index`, clamped. Non-finite input mutes the track.
    pub fn set_volume(&mut self, index: usize, volume: f64) {
        if let Some(slot) = self.volumes.get_mut(index) {
            *slot = if volume.is_finite() {
                volume.clamp(0.0, 1.0)
            } else {
                0.0
            };
        }
    }

    /// Whether track `index` should be playing.
    pub fn is_playing(&self, index: usize) -> bool {
        self.volume(index) > 0.0
    }

    /// Number of audible tracks.
    pub fn active_count(&self) -> usize {
        self.volumes.iter().filter(|volume| **volume > 0.0).count()
    }

    /// Silences every track.
    pub fn mute_all(&mut self) {
        self.volumes = [0.0; TRACKS.len()];
    }
}

fn apply_volume(audio: &web_sys::HtmlMediaElement, volume: f64) {
    audio.set_loop(true);
    audio.set_volume(volume);
    if volume > 0.0 {
        if audio.paused() {
            if let Err(err) = audio.play() {
                logging::warn!("ambience play failed: {err:?}");
            }
        }
    } else if let Err(err) = audio.pause() {
        logging::warn!("ambience pause failed: {err:?}");
    }
}

/// Mounts the widget into a desktop window.
pub fn mount(_: AppMountContext) -> View {
    view! { <AmbienceApp /> }.into_view()
}

#[component]
/// Ambience window contents.
pub fn AmbienceApp() -> impl IntoView {
    let mix = create_rw_signal(AmbienceMix::default());

    view! {
        <Stack layout_class="app-ambience" gap=LayoutGap::Sm padding=LayoutPadding::Md>
            {TRACKS
                .iter()
                .enumerate()
                .map(|(index, track)| view! { <AmbienceSlider index track=*track mix /> })
                .collect_view()}
            <Cluster justify=LayoutJustify::End>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    disabled=Signal::derive(move || mix.with(|m| m.active_count() == 0))
                    on_click=Callback::new(move |_| mix.update(AmbienceMix::mute_all))
                >
                    "Mute all"
                </Button>
            </Cluster>
        </Stack>
    }
}

#[component]
fn AmbienceSlider(index: usize, track: AmbienceTrack, mix: RwSignal<AmbienceMix>) -> impl IntoView {
    let audio_ref = create_node_ref::<html::Audio>();
    let volume = Signal::derive(move || mix.with(|m| m.volume(index)));

    create_effect(move |_| {
        let volume = volume.get();
        if let Some(audio) = audio_ref.get() {
            apply_volume(&audio, volume);
        }
    });

    view! {
        <Cluster gap=LayoutGap::Sm>
            <Icon src=track.icon_path size=IconSize::Md alt=track.name />
            <RangeField
                aria_label=format!("{} volume", track.name)
                min=0.0
                max=1.0
                step=0.01
                value=volume
                on_input=Callback::new(move |value: f64| mix.update(|m| m.set_volume(index, value)))
            />
            <audio node_ref=audio_ref src=track.audio_path preload="none"></audio>
        </Cluster>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mix_starts_silent() {
        let mix = AmbienceMix::default();
        assert_eq!(mix.active_count(), 0);
        assert!((0..TRACKS.len()).all(|index| !mix.is_playing(index)));
    }

    #[test]
    fn volumes_are_clamped_and_out_of_range_tracks_ignored() {
        let mut mix = AmbienceMix::default();
        mix.set_volume(0, 1.7);
        mix.set_volume(1, -0.2);
        mix.set_volume(2, f64::NAN);
        mix.set_volume(99, 0.5);

        assert_eq!(mix.volume(0), 1.0);
        assert_eq!(mix.volume(1), 0.0);
        assert_eq!(mix.volume(2), 0.0);
        assert_eq!(mix.volume(99), 0.0);
        assert_eq!(mix.active_count(), 1);
    }

    #[test]
    fn mute_all_stops_every_track() {
        let mut mix = AmbienceMix::default();
        mix.set_volume(0, 0.4);
        mix.set_volume(3, 0.8);
        assert_eq!(mix.active_count(), 2);

        mix.mute_all();
        assert_eq!(mix, AmbienceMix::default());
    }
}
