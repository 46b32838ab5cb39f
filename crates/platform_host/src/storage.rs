//! Persistence contracts for widget-owned state.

pub mod prefs;
