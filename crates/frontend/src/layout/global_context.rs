use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

const SIDEBAR_STORAGE_KEY: &str = "admin_sidebar_open";

/// Навигационное состояние приложения: открытые разделы, активный раздел, видимость меню.
///
/// Данные списков сюда не попадают: каждый список держит свой `TableState`.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Ключ раздела из строки запроса (`?active=a002_product`)
pub fn active_from_query(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params
        .get("active")
        .map(|key| key.trim().to_string())
        .filter(|key| !key.is_empty())
}

fn query_for_active(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

/// Какой раздел станет активным после закрытия `closed`.
///
/// `tabs` - список до закрытия. Закрытие неактивного раздела ничего не меняет.
pub fn next_active_after_close(
    tabs: &[Tab],
    active: Option<&str>,
    closed: &str,
) -> Option<String> {
    if active != Some(closed) {
        return active.map(str::to_string);
    }
    let pos = tabs.iter().position(|t| t.key == closed)?;
    tabs.get(pos + 1)
        .or_else(|| pos.checked_sub(1).and_then(|prev| tabs.get(prev)))
        .map(|t| t.key.clone())
}

fn read_sidebar_open() -> bool {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(SIDEBAR_STORAGE_KEY).ok().flatten())
        .map(|raw| raw != "false")
        .unwrap_or(true)
}

fn write_sidebar_open(open: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        if storage
            .set_item(SIDEBAR_STORAGE_KEY, if open { "true" } else { "false" })
            .is_err()
        {
            log::warn!("sidebar state was not saved");
        }
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(read_sidebar_open()),
        }
    }

    /// Синхронизация активного раздела с адресной строкой
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(key) = active_from_query(&search) {
            self.open_tab(&key, tab_label_for_key(&key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(key) = this.active.get() else {
                return;
            };
            let new_url = query_for_active(&key);
            let Some(w) = window() else {
                return;
            };
            if w.location().search().ok().as_deref() == Some(new_url.as_str()) {
                return;
            }
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&new_url),
                );
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        leptos::logging::log!("open_tab: key='{}', title='{}'", key, title);
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        leptos::logging::log!("close_tab: key='{}'", key);
        let next = self.opened.with_untracked(|tabs| {
            self.active
                .with_untracked(|active| next_active_after_close(tabs, active.as_deref(), key))
        });
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        self.active.set(next);
    }

    pub fn toggle_left(&self) {
        let open = !self.left_open.get_untracked();
        self.left_open.set(open);
        write_sidebar_open(open);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs(keys: &[&str]) -> Vec<Tab> {
        keys.iter()
            .map(|k| Tab {
                key: k.to_string(),
                title: k.to_string(),
            })
            .collect()
    }

    #[test]
    fn test_active_from_query() {
        assert_eq!(
            active_from_query("?active=a002_product").as_deref(),
            Some("a002_product")
        );
        assert_eq!(active_from_query(""), None);
        assert_eq!(active_from_query("?active="), None);
        assert_eq!(active_from_query("?other=1"), None);
    }

    #[test]
    fn test_query_roundtrip() {
        let url = query_for_active("a001_category");
        assert_eq!(url, "?active=a001_category");
        assert_eq!(active_from_query(&url).as_deref(), Some("a001_category"));
    }

    #[test]
    fn test_next_active_after_close() {
        let t = tabs(&["a", "b", "c"]);
        // соседний справа, затем слева
        assert_eq!(next_active_after_close(&t, Some("b"), "b").as_deref(), Some("c"));
        assert_eq!(next_active_after_close(&t, Some("c"), "c").as_deref(), Some("b"));
        // закрыли неактивный
        assert_eq!(next_active_after_close(&t, Some("a"), "c").as_deref(), Some("a"));
        assert_eq!(next_active_after_close(&tabs(&["a"]), Some("a"), "a"), None);
    }
}
