use crate::shared::icons::icon;
use contracts::shared::table::Page;
use contracts::shared::table::Row;
use leptos::prelude::*;

/// Навигация по страницам и выбор размера страницы.
///
/// Номер страницы с 1; состояние кнопок берётся из `Page`.
#[component]
pub fn PaginationControls(
    /// Текущая видимая страница
    #[prop(into)]
    page: Signal<Page<Row>>,

    /// Переход на страницу (с 1)
    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    page_size_options: Vec<usize>,
) -> impl IntoView {
    let current = move || page.with(|p| p.page_index);
    let total_pages = move || page.with(|p| p.total_pages);
    let has_prev = move || page.with(|p| p.has_prev);
    let has_next = move || page.with(|p| p.has_next);
    let fallback_size = page_size_options.first().copied().unwrap_or(10);

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || !has_prev()
                title="Первая страница"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current().saturating_sub(1).max(1))
                disabled=move || !has_prev()
                title="Предыдущая страница"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || page.with(|p| format!("{} / {} ({})", p.page_index, p.total_pages, p.total_count))}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(current() + 1)
                disabled=move || !has_next()
                title="Следующая страница"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(total_pages())
                disabled=move || !has_next()
                title="Последняя страница"
            >
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(size);
                }
                prop:value=move || page.with(|p| p.page_size.to_string())
            >
                {page_size_options.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page.with(|p| p.page_size == size)>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
