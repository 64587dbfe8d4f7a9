mod grid;

use crate::domain::a001_category::api::{delete_category, fetch_categories};
use crate::domain::a001_category::ui::details::CategoryDetails;
use grid::CategoryGrid;
use crate::shared::api_utils::run_bulk;
use crate::shared::components::{
    ActiveFilterTags, ColumnFilters, DataTable, ErrorBanner, FilterPanel, PaginationControls,
    StatCard,
};
use crate::shared::config::use_config;
use crate::shared::export::export_table;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_stack::{DialogOptions, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_category::{
    sort_option_spec, Category, CategoryStats, CategoryViewMode, CATEGORY_SCHEMA, SORT_OPTIONS,
};
use contracts::domain::common::normalize_all;
use contracts::shared::error::AdminError;
use contracts::shared::table::{RowId, TableState};
use leptos::children::ToChildren;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

#[component]
pub fn CategoryList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService should be provided");

    let state = RwSignal::new(TableState::new(CATEGORY_SCHEMA, config.default_page_size));
    // исходные записи нужны для карточек статистики
    let categories = RwSignal::new(Vec::<Category>::new());
    let (is_loading, set_is_loading) = signal(false);
    let error = RwSignal::new(None::<AdminError>);
    let is_deleting = RwSignal::new(false);
    let is_filter_expanded = RwSignal::new(false);
    let dialog_busy = RwSignal::new(false);
    let sort_choice = RwSignal::new(SORT_OPTIONS[0].0.to_string());
    let view_mode = RwSignal::new(CategoryViewMode::default());

    let load = move || {
        set_is_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_categories().await {
                Ok(items) => {
                    let rows = normalize_all(&items);
                    state.try_update(|s| s.set_rows(rows));
                    categories.try_set(items);
                }
                Err(e) => {
                    log::error!("{}", e);
                    error.try_set(Some(e));
                }
            }
            set_is_loading.try_set(false);
        });
    };

    load();

    Effect::new(move |_| {
        let label = sort_choice.get();
        state.update(|s| s.set_sort(sort_option_spec(&label)));
    });

    let stats = Memo::new(move |_| categories.with(|items| CategoryStats::from_categories(items)));

    let open_details = move |id: Option<String>| {
        modal_stack.open(
            DialogOptions::class("category-details-modal")
                .guarded(move || !dialog_busy.try_get_untracked().unwrap_or(false)),
            move |handle| {
                view! {
                    <CategoryDetails
                        id=id.clone()
                        busy=dialog_busy
                        on_saved=move |_| load()
                        on_cancel=move |_| handle.close()
                    />
                }
                .into_any()
            },
        );
    };

    let on_row_click = Callback::new(move |id: RowId| {
        if id.as_str().starts_with('#') {
            log::warn!("category without id cannot be edited");
            return;
        }
        open_details(Some(id.to_string()));
    });

    let delete_selected = move |_| {
        let ids = state.with_untracked(|s| s.selection.ids());
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!(
                    "Удалить выбранные категории ({})?",
                    ids.len()
                ))
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        is_deleting.set(true);
        error.set(None);
        spawn_local(async move {
            let outcome =
                run_bulk(ids, |id: RowId| async move { delete_category(id.as_str()).await }).await;

            let removed: HashSet<&str> = outcome.succeeded.iter().map(RowId::as_str).collect();
            categories.try_update(|items| items.retain(|c| !removed.contains(c.id.as_str())));
            state.try_update(|s| s.apply_bulk_outcome(&outcome));
            error.try_set(AdminError::from_bulk_outcome(&outcome));
            is_deleting.try_set(false);
        });
    };

    let export = move |_| {
        if let Err(e) = state.with_untracked(export_table) {
            log::warn!("{}", e);
            error.set(Some(e));
        }
    };

    let selected_count = Signal::derive(move || state.with(|s| s.selection.len()));
    let page = Signal::derive(move || state.with(|s| s.visible()));

    view! {
        <PageFrame page_id="a001_category--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("layers")}
                    <h1 class="page__title">{CATEGORY_SCHEMA.list_name}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || stats.with(|s| s.total.to_string())}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <div class="view-toggle">
                        <Button
                            appearance=move || if view_mode.get() == CategoryViewMode::Table { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                            on_click=move |_| view_mode.set(CategoryViewMode::Table)
                            attr:title="Таблица"
                        >
                            {icon("list")}
                        </Button>
                        <Button
                            appearance=move || if view_mode.get() == CategoryViewMode::Grid { ButtonAppearance::Primary } else { ButtonAppearance::Secondary }
                            on_click=move |_| view_mode.set(CategoryViewMode::Grid)
                            attr:title="Карточки"
                        >
                            {icon("grid")}
                        </Button>
                    </div>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_details(None)
                    >
                        {icon("plus")}
                        " Добавить категорию"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load()
                        disabled=Signal::derive(move || is_loading.get())
                    >
                        {icon("refresh")}
                        {move || if is_loading.get() { " Загрузка..." } else { " Обновить" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <div class="stat-cards">
                    <StatCard
                        label="Всего категорий"
                        icon_name="folder-closed"
                        value=Signal::derive(move || stats.with(|s| s.total.to_string()))
                    />
                    <StatCard
                        label="Активные"
                        icon_name="check-circle"
                        value=Signal::derive(move || stats.with(|s| s.active.to_string()))
                        subtitle=Signal::derive(move || {
                            stats.with(|s| Some(format!("{:.0}% от общего числа", s.active_percent())))
                        })
                    />
                    <StatCard
                        label="Товаров"
                        icon_name="package"
                        value=Signal::derive(move || stats.with(|s| s.total_products.to_string()))
                    />
                    <StatCard
                        label="Подкатегорий"
                        icon_name="layers"
                        value=Signal::derive(move || stats.with(|s| s.total_subcategories.to_string()))
                    />
                </div>

                <ErrorBanner
                    error=error
                    on_retry=Callback::new(move |_| load())
                    on_dismiss=Callback::new(move |_| error.set(None))
                />

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || state.with(|s| s.filters.active_count()))
                    pagination_controls=ChildrenFn::to_children(move || view! {
                        <PaginationControls
                            page=page
                            on_page_change=Callback::new(move |p| state.update(|s| s.go_to_page(p)))
                            on_page_size_change=Callback::new(move |size| state.update(|s| s.set_page_size(size)))
                            page_size_options=config.page_size_options.clone()
                        />
                    })
                    actions=ChildrenFn::to_children(move || view! {
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=export
                            attr:title="Выбранные строки или все отфильтрованные"
                        >
                            {icon("download")}
                            " Excel"
                        </Button>
                        <Show when=move || { selected_count.get() > 0 }>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=delete_selected
                                disabled=Signal::derive(move || is_deleting.get())
                            >
                                {icon("delete")}
                                {move || if is_deleting.get() {
                                    " Удаление...".to_string()
                                } else {
                                    format!(" Удалить ({})", selected_count.get())
                                }}
                            </Button>
                        </Show>
                    })
                    filter_content=ChildrenFn::to_children(move || view! {
                        <div class="filter-panel__row">
                            <div class="form__group">
                                <label class="form__label">"Поиск"</label>
                                <SearchInput
                                    value=Signal::derive(move || state.with(|s| s.search.clone()))
                                    on_change=Callback::new(move |q: String| state.update(|s| s.set_search(q)))
                                    placeholder="Название, тип, описание, подкатегории..."
                                />
                            </div>
                            <div class="form__group">
                                <label class="form__label">"Сортировка"</label>
                                <select
                                    class="form__select"
                                    prop:value=move || sort_choice.get()
                                    on:change=move |ev| sort_choice.set(event_target_value(&ev))
                                >
                                    {SORT_OPTIONS
                                        .iter()
                                        .map(|(label, _, _)| view! { <option value=*label>{*label}</option> })
                                        .collect_view()}
                                </select>
                            </div>
                        </div>
                        <ColumnFilters state=state />
                    })
                    filter_tags=ChildrenFn::to_children(move || view! { <ActiveFilterTags state=state /> })
                />

                <Show
                    when=move || view_mode.get() == CategoryViewMode::Grid
                    fallback=move || view! { <DataTable state=state on_row_click=on_row_click /> }
                >
                    <CategoryGrid
                        categories=categories
                        state=state
                        page=page
                        on_open=on_row_click
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
