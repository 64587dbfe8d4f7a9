//! Tab content registry - маппинг tab.key → View

use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::layout::global_context::AppGlobalContext;
use leptos::logging::log;
use leptos::prelude::*;

/// Рендерит контент таба по его ключу.
///
/// Неизвестный ключ (например, из устаревшей ссылки `?active=`) показывает
/// заглушку с кнопкой закрытия.
pub fn render_tab_content(key: &str, tabs_store: AppGlobalContext) -> AnyView {
    match key {
        "a001_category" => view! { <CategoryList /> }.into_any(),
        "a002_product" => view! { <ProductList /> }.into_any(),
        unknown => {
            log!("⚠️ Unknown tab key: '{}'", unknown);
            let key_for_close = unknown.to_string();
            view! {
                <div class="page">
                    <div class="alert alert--error">
                        {format!("Раздел '{}' не найден", unknown)}
                    </div>
                    <button
                        class="button button--secondary"
                        on:click=move |_| tabs_store.close_tab(&key_for_close)
                    >
                        "Закрыть"
                    </button>
                </div>
            }
            .into_any()
        }
    }
}
