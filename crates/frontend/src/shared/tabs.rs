//! Tabbed content switcher.
//!
//! One `TabsContext` instance owns a single active section key. Trigger
//! buttons and content panels coordinate through the context without direct
//! references to each other: triggers write the key, panels render iff the
//! key matches theirs. Re-rendering after a selection is the signal graph's
//! job; the switcher itself is a single `RwSignal<String>`.

use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Shared selection state for one group of tabs.
///
/// Construct with [`TabsContext::new`], hand it to [`Tabs`], which provides
/// it to all descendant [`TabTrigger`]s and [`TabPanel`]s via context.
#[derive(Clone, Copy)]
pub struct TabsContext {
    active: RwSignal<String>,
}

impl TabsContext {
    /// Creates the switcher with `default_key` as the active section.
    pub fn new(default_key: &str) -> Self {
        Self {
            active: RwSignal::new(default_key.to_string()),
        }
    }

    /// Makes `key` the active section, unconditionally.
    ///
    /// A key no panel renders for leaves every panel hidden; selecting the
    /// already-active key changes nothing. Neither case is an error.
    pub fn select(&self, key: &str) {
        self.active.set(key.to_string());
    }

    /// The active section key. Reactive read, no side effects.
    pub fn current_key(&self) -> String {
        self.active.get()
    }

    /// `true` iff `key` is the active section.
    ///
    /// This is the visibility predicate panels and triggers subscribe
    /// through; it compares in place without cloning the key.
    pub fn is_active(&self, key: &str) -> bool {
        self.active.with(|active| active == key)
    }

    /// Mirrors the active key into the URL query string (`?<param>=<key>`)
    /// and restores it once on startup.
    ///
    /// A URL value not present in `known_keys` is ignored so a mistyped
    /// link still lands on the default section. The history entry is
    /// replaced, not pushed.
    pub fn init_query_sync(&self, param: &'static str, known_keys: Vec<String>) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(key) = params.get(param) {
            if known_keys.iter().any(|k| k == key) {
                self.select(key);
            }
        }

        let this = *self;
        Effect::new(move |_| {
            let key = this.current_key();
            let query_string =
                serde_qs::to_string(&HashMap::from([(param.to_string(), key)])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            // Untracked read; only touch history when the URL actually changed.
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

/// Provider wrapper for one tab group.
///
/// Takes the pre-built context so the caller keeps a handle for
/// programmatic selection and URL sync.
#[component]
pub fn Tabs(
    /// Selection state shared by all triggers and panels inside.
    tabs: TabsContext,
    /// Additional CSS classes
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    provide_context(tabs);
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <div class=move || format!("tabs {}", additional_class())>
            {children()}
        </div>
    }
}

/// Layout wrapper for the row of triggers.
#[component]
pub fn TabList(children: Children) -> impl IntoView {
    view! { <div class="tabs__list">{children()}</div> }
}

/// A button that activates the section `key` when clicked.
#[component]
pub fn TabTrigger(
    /// Section key this trigger selects.
    #[prop(into)]
    key: String,
    children: Children,
) -> impl IntoView {
    let tabs = expect_context::<TabsContext>();
    let trigger_key = key.clone();

    view! {
        <button
            type="button"
            class=move || {
                if tabs.is_active(&key) {
                    "tabs__trigger tabs__trigger--active"
                } else {
                    "tabs__trigger"
                }
            }
            on:click=move |_| tabs.select(&trigger_key)
        >
            {children()}
        </button>
    }
}

/// A content region rendered iff its `key` is the active section.
///
/// Several panels may share a key; all of them render while it is active.
#[component]
pub fn TabPanel(
    /// Section key this panel belongs to.
    #[prop(into)]
    key: String,
    children: ChildrenFn,
) -> impl IntoView {
    let tabs = expect_context::<TabsContext>();

    view! {
        <Show when=move || tabs.is_active(&key)>
            <div class="tabs__panel">{children()}</div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Signal allocation needs a reactive owner; components are not involved.
    fn with_owner(test: impl FnOnce()) {
        let owner = Owner::new();
        owner.set();
        test();
    }

    #[test]
    fn test_defaults_to_initial_key() {
        with_owner(|| {
            let tabs = TabsContext::new("appetizers");
            assert_eq!(tabs.current_key(), "appetizers");
        });
    }

    #[test]
    fn test_last_selection_wins() {
        with_owner(|| {
            let tabs = TabsContext::new("appetizers");
            tabs.select("entrees");
            tabs.select("desserts");
            tabs.select("entrees");
            assert_eq!(tabs.current_key(), "entrees");
        });
    }

    #[test]
    fn test_reselecting_active_key_changes_nothing() {
        with_owner(|| {
            let tabs = TabsContext::new("appetizers");
            tabs.select("desserts");
            let once = tabs.current_key();
            tabs.select("desserts");
            assert_eq!(tabs.current_key(), once);
        });
    }

    #[test]
    fn test_exactly_one_panel_matches_per_registered_key() {
        with_owner(|| {
            let panels = ["appetizers", "entrees", "desserts"];
            let visible = |tabs: &TabsContext| -> Vec<&str> {
                panels
                    .iter()
                    .copied()
                    .filter(|key| tabs.is_active(key))
                    .collect()
            };

            let tabs = TabsContext::new("appetizers");
            assert_eq!(visible(&tabs), vec!["appetizers"]);

            tabs.select("desserts");
            assert_eq!(visible(&tabs), vec!["desserts"]);

            // Unregistered key: silent no-op state, nothing renders.
            tabs.select("nonexistent");
            assert_eq!(visible(&tabs), Vec::<&str>::new());
            assert_eq!(tabs.current_key(), "nonexistent");
        });
    }

    #[test]
    fn test_selection_recovers_after_unmatched_key() {
        with_owner(|| {
            let tabs = TabsContext::new("appetizers");
            tabs.select("nonexistent");
            tabs.select("entrees");
            assert!(tabs.is_active("entrees"));
            assert!(!tabs.is_active("nonexistent"));
        });
    }
}
