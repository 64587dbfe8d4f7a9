use crate::domain::a002_product::api::{delete_product, fetch_products};
use crate::domain::a002_product::ui::details::ProductDetails;
use crate::shared::api_utils::run_bulk;
use crate::shared::components::{
    ActiveFilterTags, ColumnFilters, DataTable, ErrorBanner, FilterPanel, PaginationControls,
};
use crate::shared::config::use_config;
use crate::shared::export::export_table;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_stack::{DialogOptions, ModalStackService};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_product::{Product, PRODUCT_SCHEMA};
use contracts::domain::common::normalize_all;
use contracts::shared::error::AdminError;
use contracts::shared::table::{RowId, TableState};
use leptos::children::ToChildren;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashSet;
use thaw::*;

#[component]
pub fn ProductList() -> impl IntoView {
    let config = use_config();
    let modal_stack =
        use_context::<ModalStackService>().expect("ModalStackService should be provided");

    let state = RwSignal::new(TableState::new(PRODUCT_SCHEMA, config.default_page_size));
    // полные записи: диалог редактирования открывается по ним
    let products = RwSignal::new(Vec::<Product>::new());
    let (is_loading, set_is_loading) = signal(false);
    let error = RwSignal::new(None::<AdminError>);
    let is_deleting = RwSignal::new(false);
    let is_filter_expanded = RwSignal::new(false);
    let dialog_busy = RwSignal::new(false);

    let load = move || {
        set_is_loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_products().await {
                Ok(items) => {
                    let rows = normalize_all(&items);
                    state.try_update(|s| s.set_rows(rows));
                    products.try_set(items);
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

    let open_details = move |product: Option<Product>| {
        modal_stack.open(
            DialogOptions::class("product-details-modal")
                .guarded(move || !dialog_busy.try_get_untracked().unwrap_or(false)),
            move |handle| {
                view! {
                    <ProductDetails
                        product=product.clone()
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
        let product = products.with_untracked(|items| {
            items.iter().find(|p| p.id.trim() == id.as_str()).cloned()
        });
        match product {
            Some(product) => open_details(Some(product)),
            None => log::warn!("product '{}' not found for editing", id),
        }
    });

    let delete_selected = move |_| {
        let ids = state.with_untracked(|s| s.selection.ids());
        if ids.is_empty() {
            return;
        }
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Удалить выбранные товары ({})?", ids.len()))
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
                run_bulk(ids, |id: RowId| async move { delete_product(id.as_str()).await }).await;

            let removed: HashSet<&str> = outcome.succeeded.iter().map(RowId::as_str).collect();
            products.try_update(|items| items.retain(|p| !removed.contains(p.id.trim())));
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

    let total_count = Signal::derive(move || state.with(|s| s.rows().len()));
    let selected_count = Signal::derive(move || state.with(|s| s.selection.len()));
    let page = Signal::derive(move || state.with(|s| s.visible()));

    view! {
        <PageFrame page_id="a002_product--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    {icon("package")}
                    <h1 class="page__title">{PRODUCT_SCHEMA.list_name}</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || total_count.get().to_string()}</span>
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| open_details(None)
                    >
                        {icon("plus")}
                        " Добавить товар"
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
                                    placeholder="Название, артикул, категория, теги..."
                                />
                            </div>
                        </div>
                        <ColumnFilters state=state />
                    })
                    filter_tags=ChildrenFn::to_children(move || view! { <ActiveFilterTags state=state /> })
                />

                <DataTable state=state on_row_click=on_row_click />
            </div>
        </PageFrame>
    }
}
