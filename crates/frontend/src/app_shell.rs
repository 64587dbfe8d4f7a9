//! Application Shell - корневой layout приложения
//!
//! `AppShell` собирает Shell + Sidebar + Tabs. Авторизация вне этого
//! приложения, поэтому экрана входа нет.

use crate::layout::center::TabBar;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::left::Sidebar;
use crate::layout::tabs::TabPage;
use crate::layout::Shell;
use leptos::logging::log;
use leptos::prelude::*;

/// Main application layout с Sidebar и Tabs.
///
/// Инициализирует router integration для синхронизации табов с URL (?active=...).
#[component]
pub fn AppShell() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is created.
    tabs_store.init_router_integration();

    // Без сохранённого таба открываем список категорий
    if tabs_store.active.get_untracked().is_none() {
        tabs_store.open_tab("a001_category", crate::layout::tabs::tab_label_for_key("a001_category"));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || {
                view! {
                    <TabBar />
                    <For
                        each=move || {
                            let tabs = tabs_store.opened.get();
                            log!("📋 <For> each triggered. Tabs count: {}", tabs.len());
                            tabs
                        }
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| {
                            view! {
                                <TabPage tab=tab tabs_store=tabs_store />
                            }
                        }
                    />
                }.into_any()
            }
        />
    }
}
