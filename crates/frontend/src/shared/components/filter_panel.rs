use crate::shared::icons::icon;
use leptos::prelude::*;

/// Сворачиваемая панель фильтров с пагинацией и действиями в заголовке
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    /// Количество активных фильтров (бейдж)
    #[prop(into)]
    active_filters_count: Signal<usize>,

    #[prop(into)]
    pagination_controls: ChildrenFn,

    /// Поля фильтров
    #[prop(into)]
    filter_content: ChildrenFn,

    /// Кнопки справа (обновить, экспорт, удалить)
    #[prop(optional, into)]
    actions: Option<ChildrenFn>,

    /// Чипы активных фильтров
    #[prop(optional, into)]
    filter_tags: Option<ChildrenFn>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span
                        class="filter-panel__chevron"
                        class:filter-panel__chevron--expanded=move || is_expanded.get()
                    >
                        {icon("chevron-down")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Фильтры"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">
                    {pagination_controls()}
                </div>
                <div class="filter-panel-header__right">
                    {actions.as_ref().map(|actions| actions())}
                </div>
            </div>

            <Show when=move || is_expanded.get()>
                <div class="filter-panel-content">
                    {filter_content()}
                </div>
            </Show>
            {filter_tags.as_ref().map(|tags| view! {
                <div class="filter-panel__tags">{tags()}</div>
            })}
        </div>
    }
}

/// Чип активного фильтра с кнопкой удаления
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                title="Снять фильтр"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}
