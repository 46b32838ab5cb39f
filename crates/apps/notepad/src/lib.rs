//! Notepad widget: a small multi-note workspace persisted per browser.
//!
//! Every Notepad window on a desktop edits the same [`SharedNotes`] workspace.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::time::Duration;

use desktop_app_contract::{AppMountContext, PrefsService};
use leptos::*;
use leptos::leptos_dom::helpers::TimeoutHandle;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;

/// Preference key for the persisted workspace.
pub const STORAGE_KEY: &str = "wfc.notepad.v1";

const UNTITLED: &str = "Untitled";
const TITLE_MAX_CHARS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One note.
pub struct Note {
    /// Stable id within the workspace.
    pub id: u64,
    /// Full note text.
    pub body: String,
}

impl Note {
    /// First non-blank line, shortened for the note list.
    pub fn title(&self) -> String {
        let line = self
            .body
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .unwrap_or(UNTITLED);
        if line.chars().count() > TITLE_MAX_CHARS {
            let short: String = line.chars().take(TITLE_MAX_CHARS).collect();
            format!("{short}…")
        } else {
            line.to_string()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Notes plus the selection. Never empty once normalized.
pub struct NoteWorkspace {
    next_id: u64,
    /// Notes, newest last.
    pub notes: Vec<Note>,
    /// Selected note id.
    pub active_id: u64,
}

impl Default for NoteWorkspace {
    fn default() -> Self {
        let mut workspace = Self {
            next_id: 1,
            notes: Vec::new(),
            active_id: 0,
        };
        workspace.create();
        workspace
    }
}

impl NoteWorkspace {
    /// Adds an empty note and selects it.
    pub fn create(&mut self) -> u64 {
        let id = self
            .next_id
            .max(self.notes.iter().map(|note| note.id + 1).max().unwrap_or(1));
        self.next_id = id + 1;
        self.notes.push(Note {
            id,
            body: String::new(),
        });
        self.active_id = id;
        id
    }

    /// Selects `id` when it exists.
    pub fn select(&mut self, id: u64) {
        if self.notes.iter().any(|note| note.id == id) {
            self.active_id = id;
        }
    }

    /// The selected note.
    pub fn active(&self) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == self.active_id)
    }

    /// Replaces the selected note's text.
    pub fn edit_active(&mut self, body: String) {
        self.edit(self.active_id, body);
    }

    /// Replaces the text of `id`; unknown ids are ignored.
    pub fn edit(&mut self, id: u64, body: String) {
        if let Some(note) = self.notes.iter_mut().find(|note| note.id == id) {
            note.body = body;
        }
    }

    /// `id` when it still exists, otherwise the workspace selection.
    pub fn resolve(&self, id: u64) -> u64 {
        if self.notes.iter().any(|note| note.id == id) {
            id
        } else {
            self.active_id
        }
    }

    /// Deletes `id`; the selection moves to the neighbour and an empty note replaces the last one.
    pub fn delete(&mut self, id: u64) {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            return;
        };
        self.notes.remove(index);
        if self.notes.is_empty() {
            self.create();
        } else if self.active_id == id {
            self.active_id = self.notes[index.min(self.notes.len() - 1)].id;
        }
    }

    /// Repairs a workspace loaded from storage.
    pub fn normalize(&mut self) {
        if self.notes.is_empty() {
            self.create();
        } else if self.active().is_none() {
            self.active_id = self.notes[0].id;
        }
    }
}

/// Loads the saved workspace, falling back to a single empty note.
pub fn load_workspace(prefs: &PrefsService) -> NoteWorkspace {
    let mut workspace = match prefs.load::<NoteWorkspace>(STORAGE_KEY) {
        Ok(workspace) => workspace.unwrap_or_default(),
        Err(err) => {
            logging::warn!("notepad load failed: {err}");
            NoteWorkspace::default()
        }
    };
    workspace.normalize();
    workspace
}

const SAVE_DELAY: Duration = Duration::from_millis(400);

#[derive(Clone, Copy)]
/// One workspace shared by every Notepad window on a desktop.
///
/// Structural changes save at once; typing is saved after a short pause.
pub struct SharedNotes {
    workspace: RwSignal<NoteWorkspace>,
    prefs: StoredValue<PrefsService>,
    pending_save: StoredValue<Option<TimeoutHandle>>,
}

impl SharedNotes {
    /// Loads the saved workspace into a new shared handle.
    pub fn load(prefs: PrefsService) -> Self {
        Self {
            workspace: create_rw_signal(load_workspace(&prefs)),
            prefs: store_value(prefs),
            pending_save: store_value(None),
        }
    }

    /// Reactive view of the workspace.
    pub fn workspace(&self) -> ReadSignal<NoteWorkspace> {
        self.workspace.read_only()
    }

    /// Applies `change` and saves immediately.
    pub fn update<T>(&self, change: impl FnOnce(&mut NoteWorkspace) -> T) -> T {
        let mut workspace = self.workspace.get_untracked();
        let out = change(&mut workspace);
        self.workspace.set(workspace);
        self.cancel_pending();
        self.save_now();
        out
    }

    /// Replaces the text of `id` and defers the save.
    pub fn edit(&self, id: u64, body: String) {
        self.workspace.update(|workspace| workspace.edit(id, body));
        self.schedule_save();
    }

    /// Writes a deferred save now, if one is waiting.
    pub fn flush(&self) {
        if self.cancel_pending() {
            self.save_now();
        }
    }

    fn cancel_pending(&self) -> bool {
        match self.pending_save.get_value() {
            Some(handle) => {
                handle.clear();
                self.pending_save.set_value(None);
                true
            }
            None => false,
        }
    }

    fn schedule_save(self) {
        self.cancel_pending();
        let saved = set_timeout_with_handle(
            move || {
                self.pending_save.set_value(None);
                self.save_now();
            },
            SAVE_DELAY,
        );
        match saved {
            Ok(handle) => self.pending_save.set_value(Some(handle)),
            Err(err) => {
                logging::warn!("notepad save timer failed: {err:?}");
                self.pending_save.set_value(None);
                self.save_now();
            }
        }
    }

    fn save_now(&self) {
        let result = self.workspace.with_untracked(|workspace| {
            self.prefs
                .with_value(|prefs| prefs.save(STORAGE_KEY, workspace))
        });
        if let Err(err) = result {
            logging::warn!("notepad save failed: {err}");
        }
    }
}

/// Provides the [`SharedNotes`] handle that Notepad windows mounted below this point share.
pub fn provide_shared_notes(prefs: PrefsService) -> SharedNotes {
    let notes = SharedNotes::load(prefs);
    provide_context(notes);
    notes
}

/// Mounts the widget into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    let notes = use_context::<SharedNotes>()
        .unwrap_or_else(|| SharedNotes::load(context.services.prefs));
    view! { <NotepadApp notes /> }.into_view()
}

#[component]
/// Notepad window contents. Each window keeps its own selection.
pub fn NotepadApp(
    /// Workspace shared with other Notepad windows.
    notes: SharedNotes,
) -> impl IntoView {
    let workspace = notes.workspace();
    let selected = create_rw_signal(workspace.with_untracked(|w| w.active_id));
    let current = Signal::derive(move || workspace.with(|w| w.resolve(selected.get())));

    on_cleanup(move || notes.flush());

    let active_body = Signal::derive(move || {
        let id = current.get();
        workspace.with(|w| {
            w.notes
                .iter()
                .find(|note| note.id == id)
                .map(|note| note.body.clone())
                .unwrap_or_default()
        })
    });
    let char_count = Signal::derive(move || active_body.with(|body| body.chars().count()));

    view! {
        <Cluster layout_class="app-notepad" align=LayoutAlign::Stretch gap=LayoutGap::None>
            <Stack layout_class="app-notepad-sidebar" gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                <Button
                    variant=ButtonVariant::Primary
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| selected.set(notes.update(NoteWorkspace::create)))
                >
                    "New note"
                </Button>
                <TabList aria_label="Notes" vertical=true>
                    <For
                        each=move || workspace.with(|w| w.notes.iter().map(|n| (n.id, n.title())).collect::<Vec<_>>())
                        key=|(id, title)| (*id, title.clone())
                        let:note
                    >
                        <Tab
                            selected=Signal::derive(move || current.get() == note.0)
                            on_select=Callback::new(move |_| {
                                notes.update(|w| w.select(note.0));
                                selected.set(note.0);
                            })
                        >
                            {note.1.clone()}
                        </Tab>
                    </For>
                </TabList>
            </Stack>
            <Stack layout_class="app-notepad-editor" gap=LayoutGap::Sm padding=LayoutPadding::Sm>
                <TextArea
                    aria_label="Note text"
                    placeholder="Start typing…"
                    value=active_body
                    on_input=Callback::new(move |text: String| notes.edit(current.get_untracked(), text))
                />
                <Cluster justify=LayoutJustify::Between>
                    <Text role=TextRole::Caption tone=TextTone::Secondary>
                        {move || format!("{} characters", char_count.get())}
                    </Text>
                    <Button
                        variant=ButtonVariant::Danger
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| {
                            let id = current.get_untracked();
                            let next = notes.update(|w| {
                                w.select(id);
                                w.delete(id);
                                w.active_id
                            });
                            selected.set(next);
                        })
                    >
                        "Delete"
                    </Button>
                </Cluster>
            </Stack>
        </Cluster>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::MemoryPrefsStore;

    use super::*;

    #[test]
    fn default_workspace_has_one_selected_note() {
        let workspace = NoteWorkspace::default();
        assert_eq!(workspace.notes.len(), 1);
        assert_eq!(workspace.active().map(|n| n.id), Some(workspace.active_id));
    }

    #[test]
    fn titles_come_from_first_non_blank_line() {
        let note = Note {
            id: 1,
            body: "\n  Standup notes  \n- ship it".to_string(),
        };
        assert_eq!(note.title(), "Standup notes");
        assert_eq!(
            Note {
                id: 2,
                body: String::new()
            }
            .title(),
            UNTITLED
        );
        let long = Note {
            id: 3,
            body: "x".repeat(40),
        };
        assert_eq!(long.title().chars().count(), TITLE_MAX_CHARS + 1);
    }

    #[test]
    fn edit_touches_only_the_active_note() {
        let mut workspace = NoteWorkspace::default();
        let first = workspace.active_id;
        let second = workspace.create();
        workspace.edit_active("draft".to_string());
        workspace.select(first);
        workspace.edit_active("groceries".to_string());

        let bodies: Vec<_> = workspace.notes.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, vec!["groceries", "draft"]);
        assert_ne!(first, second);
    }

    #[test]
    fn delete_moves_selection_and_never_leaves_the_workspace_empty() {
        let mut workspace = NoteWorkspace::default();
        let a = workspace.active_id;
        let b = workspace.create();
        let c = workspace.create();

        workspace.select(b);
        workspace.delete(b);
        assert_eq!(workspace.active_id, c);

        workspace.delete(c);
        assert_eq!(workspace.active_id, a);

        workspace.delete(a);
        assert_eq!(workspace.notes.len(), 1);
        assert_ne!(workspace.active_id, a);
    }

    #[test]
    fn normalize_repairs_stale_selection() {
        let prefs = PrefsService::new(Rc::new(MemoryPrefsStore::default()));
        let mut saved = NoteWorkspace::default();
        saved.edit_active("kept".to_string());
        saved.active_id = 99;
        prefs.save(STORAGE_KEY, &saved).expect("save");

        let loaded = load_workspace(&prefs);
        assert_eq!(loaded.active().map(|n| n.body.as_str()), Some("kept"));
    }

    #[test]
    fn resolve_falls_back_when_a_note_is_gone() {
        let mut workspace = NoteWorkspace::default();
        let first = workspace.active_id;
        let second = workspace.create();
        assert_eq!(workspace.resolve(first), first);

        workspace.delete(first);
        assert_eq!(workspace.resolve(first), second);
    }

    #[test]
    fn two_windows_on_one_workspace_keep_both_notes() {
        let _ = leptos::create_runtime();
        let prefs = PrefsService::new(Rc::new(MemoryPrefsStore::default()));
        let notes = SharedNotes::load(prefs.clone());

        let first_window = notes.workspace().with_untracked(|w| w.active_id);
        notes.update(|w| w.edit(first_window, "meeting notes".to_string()));
        let second_window = notes.update(NoteWorkspace::create);
        notes.update(|w| w.edit(second_window, "groceries".to_string()));

        let stored = load_workspace(&prefs);
        let bodies: Vec<_> = stored.notes.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, vec!["meeting notes", "groceries"]);
        assert_eq!(SharedNotes::load(prefs).workspace().get_untracked(), stored);
    }

    #[test]
    fn only_structural_changes_write_through_immediately() {
        let _ = leptos::create_runtime();
        let store = MemoryPrefsStore::default();
        let notes = SharedNotes::load(PrefsService::new(Rc::new(store.clone())));

        notes.flush();
        assert!(store.is_empty());

        notes.update(NoteWorkspace::create);
        assert_eq!(load_workspace(&PrefsService::new(Rc::new(store))).notes.len(), 2);
    }
}
