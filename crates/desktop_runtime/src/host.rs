//! Host-side runtime helpers for executing reducer effects and querying the browser viewport.

use std::rc::Rc;

use desktop_app_contract::UiSound;
use leptos::logging;
use platform_host::{PrefsStore, SoundPlayer};
use platform_host_web::{WebPrefsStore, WebSoundPlayer};

use crate::{
    model::{DesktopTheme, WindowRect},
    persistence,
    reducer::RuntimeEffect,
};

const UI_SOUND_VOLUME: f64 = 0.5;

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    prefs: Rc<dyn PrefsStore>,
    sound: Rc<dyn SoundPlayer>,
}

impl Default for DesktopHostContext {
    fn default() -> Self {
        Self::new(Rc::new(WebPrefsStore), Rc::new(WebSoundPlayer))
    }
}

impl DesktopHostContext {
    pub fn new(prefs: Rc<dyn PrefsStore>, sound: Rc<dyn SoundPlayer>) -> Self {
        Self { prefs, sound }
    }

    /// Returns the preference store shared with mounted apps.
    pub fn prefs_store(&self) -> Rc<dyn PrefsStore> {
        self.prefs.clone()
    }

    /// Reads the persisted theme; load failures are logged and treated as absent.
    pub fn load_theme(&self) -> Option<DesktopTheme> {
        match persistence::load_theme(self.prefs.as_ref()) {
            Ok(theme) => theme,
            Err(err) => {
                logging::warn!("theme load failed: {err}");
                None
            }
        }
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect, theme: &DesktopTheme) {
        match effect {
            RuntimeEffect::PersistTheme => {
                if let Err(err) = persistence::persist_theme(self.prefs.as_ref(), theme) {
                    logging::warn!("persist theme failed: {err}");
                }
            }
            RuntimeEffect::PlaySound(sound) => self.play_sound(sound),
        }
    }

    fn play_sound(&self, sound: UiSound) {
        if let Err(err) = self.sound.play(sound.asset_path(), UI_SOUND_VOLUME) {
            logging::warn!("sound playback failed: {err}");
        }
    }

    /// Desktop area above the taskbar.
    pub fn desktop_viewport_rect(&self, taskbar_height_px: i32) -> WindowRect {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let width = window
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(1024);
                let height = window
                    .inner_height()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .map(|value| value as i32)
                    .unwrap_or(768);

                return WindowRect {
                    x: 0,
                    y: 0,
                    w: width.max(320),
                    h: (height - taskbar_height_px).max(220),
                };
            }
        }

        WindowRect {
            x: 0,
            y: 0,
            w: 1024,
            h: 768 - taskbar_height_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingPlayer {
        played: RefCell<Vec<String>>,
    }

    impl SoundPlayer for RecordingPlayer {
        fn play(&self, src: &str, _volume: f64) -> Result<(), String> {
            self.played.borrow_mut().push(src.to_string());
            Ok(())
        }
    }

    #[test]
    fn effects_persist_theme_and_play_sounds() {
        let prefs = MemoryPrefsStore::default();
        let player = Rc::new(RecordingPlayer::default());
        let host = DesktopHostContext::new(Rc::new(prefs.clone()), player.clone());
        let theme = DesktopTheme {
            wallpaper_id: "rainy-window".to_string(),
            sound_enabled: true,
        };

        assert_eq!(host.load_theme(), None);
        host.run_runtime_effect(RuntimeEffect::PersistTheme, &theme);
        host.run_runtime_effect(RuntimeEffect::PlaySound(UiSound::WindowOpen), &theme);

        assert_eq!(host.load_theme(), Some(theme));
        assert_eq!(*player.played.borrow(), vec!["/sounds/open.mp3".to_string()]);
    }

    #[test]
    fn off_wasm_viewport_subtracts_taskbar() {
        let host = DesktopHostContext::new(
            Rc::new(MemoryPrefsStore::default()),
            Rc::new(RecordingPlayer::default()),
        );
        assert_eq!(host.desktop_viewport_rect(48).h, 720);
    }
}
