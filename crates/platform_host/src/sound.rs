//! UI sound-effect contract.

/// Plays short one-shot UI sounds by asset path.
pub trait SoundPlayer {
    /// Starts playback of `src` at `volume` (`0.0..=1.0`).
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot create or start the audio element.
    fn play(&self, src: &str, volume: f64) -> Result<(), String>;
}
