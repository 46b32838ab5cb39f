//! Browser (`wasm32`) implementations of the [`platform_host`] contracts.
//!
//! `localStorage` backs widget preferences and `HtmlAudioElement` plays UI sounds. Non-wasm
//! builds compile the same adapters as inert fallbacks so host-side tests can link them.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod sound;
pub mod storage;

pub use sound::WebSoundPlayer;
pub use storage::local_prefs::WebPrefsStore;
