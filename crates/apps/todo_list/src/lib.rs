//! To-do list widget with per-browser persistence.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppMountContext, PrefsService};
use leptos::*;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;

/// Preference key for the persisted list.
pub const STORAGE_KEY: &str = "wfc.todo.v1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One task.
pub struct TodoItem {
    /// Stable id within the list.
    pub id: u64,
    /// Task text, trimmed.
    pub text: String,
    /// Completion flag.
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
/// Ordered task list, oldest first.
pub struct TodoList {
    next_id: u64,
    /// Tasks in insertion order.
    pub items: Vec<TodoItem>,
}

impl Default for TodoList {
    fn default() -> Self {
        Self {
            next_id: 1,
            items: Vec::new(),
        }
    }
}

impl TodoList {
    /// Appends a task; blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<u64> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id.max(self.max_id() + 1);
        self.next_id = id + 1;
        self.items.push(TodoItem {
            id,
            text: text.to_string(),
            done: false,
        });
        Some(id)
    }

    /// Flips completion of `id`.
    pub fn toggle(&mut self, id: u64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.done = !item.done;
        }
    }

    /// Deletes `id`.
    pub fn remove(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    /// Deletes every completed task.
    pub fn clear_completed(&mut self) {
        self.items.retain(|item| !item.done);
    }

    /// Number of open tasks.
    pub fn remaining(&self) -> usize {
        self.items.iter().filter(|item| !item.done).count()
    }

    fn max_id(&self) -> u64 {
        self.items.iter().map(|item| item.id).max().unwrap_or(0)
    }
}

/// Loads the saved list; a missing or unreadable entry starts empty.
pub fn load_todos(prefs: &PrefsService) -> TodoList {
    match prefs.load::<TodoList>(STORAGE_KEY) {
        Ok(list) => list.unwrap_or_default(),
        Err(err) => {
            logging::warn!("todo load failed: {err}");
            TodoList::default()
        }
    }
}

/// Mounts the widget into a desktop window.
pub fn mount(context: AppMountContext) -> View {
    view! { <TodoListApp prefs=context.services.prefs /> }.into_view()
}

#[component]
/// To-do list window contents.
pub fn TodoListApp(
    /// Store used to restore and persist the list.
    prefs: PrefsService,
) -> impl IntoView {
    let todos = create_rw_signal(load_todos(&prefs));
    let draft = create_rw_signal(String::new());

    create_effect(move |previous: Option<TodoList>| {
        let current = todos.get();
        if previous.is_some_and(|previous| previous != current) {
            if let Err(err) = prefs.save(STORAGE_KEY, &current) {
                logging::warn!("todo save failed: {err}");
            }
        }
        current
    });

    let submit = move || {
        let text = draft.get_untracked();
        let mut added = false;
        todos.update(|list| added = list.add(&text).is_some());
        if added {
            draft.set(String::new());
        }
    };

    view! {
        <Stack layout_class="app-todo" padding=LayoutPadding::Md>
            <Cluster gap=LayoutGap::Sm>
                <TextField
                    placeholder="Add a task"
                    aria_label="New task"
                    value=draft
                    on_input=Callback::new(move |value: String| draft.set(value))
                    on_keydown=Callback::new(move |ev: ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    })
                />
                <Button variant=ButtonVariant::Primary on_click=Callback::new(move |_| submit())>
                    "Add"
                </Button>
            </Cluster>

            <Show
                when=move || todos.with(|list| !list.items.is_empty())
                fallback=|| view! { <EmptyState>"Nothing to do. Enjoy your coffee."</EmptyState> }
            >
                <ListSurface aria_label="Tasks">
                    <For
                        each=move || todos.get().items
                        key=|item| (item.id, item.done)
                        children=move |item: TodoItem| {
                            let id = item.id;
                            let complete_label = format!("Complete {}", item.text);
                            let delete_label = format!("Delete {}", item.text);
                            view! {
                                <ListRow muted=item.done>
                                    <CheckboxField
                                        aria_label=complete_label
                                        checked=item.done
                                        on_toggle=Callback::new(move |_| todos.update(|list| list.toggle(id)))
                                    />
                                    <Text>{item.text}</Text>
                                    <IconButton
                                        glyph="×"
                                        aria_label=delete_label
                                        size=ButtonSize::Sm
                                        on_click=Callback::new(move |_| todos.update(|list| list.remove(id)))
                                    />
                                </ListRow>
                            }
                        }
                    />
                </ListSurface>
            </Show>

            <Cluster justify=LayoutJustify::Between>
                <Text role=TextRole::Caption tone=TextTone::Secondary>
                    {move || format!("{} left", todos.with(TodoList::remaining))}
                </Text>
                <Button
                    variant=ButtonVariant::Quiet
                    size=ButtonSize::Sm
                    on_click=Callback::new(move |_| todos.update(TodoList::clear_completed))
                >
                    "Clear completed"
                </Button>
            </Cluster>
        </Stack>
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use platform_host::MemoryPrefsStore;

    use super::*;

    #[test]
    fn add_trims_and_ignores_blank_text() {
        let mut list = TodoList::default();
        assert_eq!(list.add("  brew pour-over "), Some(1));
        assert_eq!(list.add("   "), None);
        assert_eq!(list.items[0].text, "brew pour-over");
    }

    #[test]
    fn toggle_remove_and_clear_completed() {
        let mut list = TodoList::default();
        let a = list.add("outline talk").expect("add");
        let b = list.add("reply to emails").expect("add");
        let c = list.add("stretch").expect("add");

        list.toggle(a);
        list.toggle(c);
        assert_eq!(list.remaining(), 1);

        list.remove(b);
        assert_eq!(list.remaining(), 0);

        list.clear_completed();
        assert!(list.items.is_empty());
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut list = TodoList::default();
        let first = list.add("one").expect("add");
        list.remove(first);
        let second = list.add("two").expect("add");
        assert_ne!(first, second);
    }

    #[test]
    fn list_round_trips_through_prefs() {
        let prefs = PrefsService::new(Rc::new(MemoryPrefsStore::default()));
        assert_eq!(load_todos(&prefs), TodoList::default());

        let mut list = TodoList::default();
        list.add("water plants");
        list.toggle(1);
        prefs.save(STORAGE_KEY, &list).expect("save");

        assert_eq!(load_todos(&prefs), list);
    }
}
