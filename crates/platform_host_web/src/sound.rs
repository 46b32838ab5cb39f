//! One-shot UI sound playback through detached `<audio>` elements.

use platform_host::SoundPlayer;

#[derive(Debug, Clone, Copy, Default)]
/// Browser sound player; each call creates a throwaway `HtmlAudioElement`.
pub struct WebSoundPlayer;

impl SoundPlayer for WebSoundPlayer {
    fn play(&self, src: &str, volume: f64) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            let audio = web_sys::HtmlAudioElement::new_with_src(src)
                .map_err(|e| format!("audio element creation failed: {e:?}"))?;
            audio.set_volume(volume.clamp(0.0, 1.0));
            // The returned promise may reject under autoplay policies; it is not awaited.
            audio
                .play()
                .map(|_| ())
                .map_err(|e| format!("audio play failed: {e:?}"))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (src, volume);
            Ok(())
        }
    }
}
