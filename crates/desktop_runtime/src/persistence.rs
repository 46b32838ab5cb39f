//! Desktop theme persistence through the host preference store.

use platform_host::{load_pref_typed, save_pref_typed, PrefsStore};

use crate::model::DesktopTheme;

/// Preference key holding the serialized [`DesktopTheme`].
pub const THEME_KEY: &str = "wfc.desktop.theme.v1";

/// Loads the persisted theme, `Ok(None)` on first boot.
///
/// # Errors
///
/// Returns an error when the store fails or holds malformed JSON.
pub fn load_theme(store: &dyn PrefsStore) -> Result<Option<DesktopTheme>, String> {
    load_pref_typed(store, THEME_KEY)
}

/// Persists `theme`, replacing the previous value.
///
/// # Errors
///
/// Returns an error when serialization or the store write fails.
pub fn persist_theme(store: &dyn PrefsStore, theme: &DesktopTheme) -> Result<(), String> {
    save_pref_typed(store, THEME_KEY, theme)
}

#[cfg(test)]
mod tests {
    use platform_host::MemoryPrefsStore;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn theme_round_trips_through_prefs() {
        let store = MemoryPrefsStore::default();
        assert_eq!(load_theme(&store), Ok(None));

        let theme = DesktopTheme {
            wallpaper_id: "forest-cabin".to_string(),
            sound_enabled: false,
        };
        persist_theme(&store, &theme).expect("persist");

        assert_eq!(load_theme(&store), Ok(Some(theme)));
    }

    #[test]
    fn malformed_theme_is_an_error() {
        let store = MemoryPrefsStore::default();
        store.save_pref(THEME_KEY, "{not json").expect("raw write");

        assert!(load_theme(&store).is_err());
    }
}
