//! Typed host contracts shared by the desktop runtime, leaf apps, and browser adapters.
//!
//! The browser implementations live in `platform_host_web`; this crate keeps the traits plus the
//! in-memory adapter used in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod sound;
pub mod storage;
pub mod time;

pub use sound::SoundPlayer;
pub use storage::prefs::{load_pref_typed, save_pref_typed, MemoryPrefsStore, PrefsStore};
pub use time::{local_time_now, unix_time_ms_now, LocalTime};
