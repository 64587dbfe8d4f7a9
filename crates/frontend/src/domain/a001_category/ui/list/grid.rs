use crate::shared::icons::icon;
use contracts::domain::a001_category::{
    categories_for_rows, preview, Category, CHILDREN_PREVIEW, PRODUCTS_PREVIEW,
};
use contracts::shared::table::{Page, Row, RowId, TableState};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;

/// Карточки категорий текущей страницы.
///
/// Фильтры, сортировка и выбор общие с таблицей: карточки строятся из `page`.
#[component]
pub fn CategoryGrid(
    categories: RwSignal<Vec<Category>>,
    state: RwSignal<TableState>,
    #[prop(into)]
    page: Signal<Page<Row>>,
    on_open: Callback<RowId>,
) -> impl IntoView {
    // развёрнутые карточки
    let expanded = RwSignal::new(HashSet::<RowId>::new());

    let cards = move || {
        page.with(|p| {
            categories.with(|items| {
                categories_for_rows(items, &p.rows)
                    .into_iter()
                    .map(|(id, category)| (id, category.clone()))
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <div class="category-grid">
            <For
                each=cards
                key=|(id, category)| (id.clone(), category.updated_at, category.children.len())
                children=move |(id, category)| {
                    view! {
                        <CategoryCard
                            id=id
                            category=category
                            state=state
                            expanded=expanded
                            on_open=on_open
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn CategoryCard(
    id: RowId,
    category: Category,
    state: RwSignal<TableState>,
    expanded: RwSignal<HashSet<RowId>>,
    on_open: Callback<RowId>,
) -> impl IntoView {
    let is_expanded = {
        let id = id.clone();
        Signal::derive(move || expanded.with(|set| set.contains(&id)))
    };
    let toggle_expanded = {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| {
            expanded.update(|set| {
                if !set.remove(&id) {
                    set.insert(id.clone());
                }
            })
        }
    };
    let is_selected = {
        let id = id.clone();
        move || state.with(|s| s.selection.contains(&id))
    };
    let on_check = {
        let id = id.clone();
        move |ev: leptos::ev::Event| {
            let checked = event_target_checked(&ev);
            state.update(|s| s.selection.set_checked(id.clone(), checked));
        }
    };
    let open = {
        let id = id.clone();
        move |_: leptos::ev::MouseEvent| on_open.run(id.clone())
    };

    let is_active = category.is_active();
    let status = category.status.clone().unwrap_or_else(|| "-".to_string());
    let children = category.children.clone();
    let has_children = !children.is_empty();
    let products = category.product_previews();
    let product_count = category.product_count();
    let expandable = children.len() > CHILDREN_PREVIEW || products.len() > PRODUCTS_PREVIEW;

    let children_view = move || {
        let (shown, hidden) = preview(&children, CHILDREN_PREVIEW, is_expanded.get());
        let badges = shown
            .iter()
            .map(|child| view! { <span class="category-card__chip">{child.clone()}</span> })
            .collect_view();
        let more = (hidden > 0).then(|| {
            view! { <span class="category-card__chip category-card__chip--more">{format!("+{} ещё", hidden)}</span> }
        });
        view! { {badges} {more} }
    };

    let products_view = move || {
        let (shown, hidden) = preview(&products, PRODUCTS_PREVIEW, is_expanded.get());
        let list = shown
            .iter()
            .map(|p| {
                let price = p.price.map(|v| format!("{:.2}", v)).unwrap_or_default();
                view! {
                    <li class="category-card__product">
                        <span class="category-card__product-title">{p.title.clone()}</span>
                        <span class="category-card__product-price">{price}</span>
                    </li>
                }
            })
            .collect_view();
        let more = (hidden > 0).then(|| {
            view! { <li class="category-card__product category-card__product--more">{format!("и ещё {}", hidden)}</li> }
        });
        view! { <ul class="category-card__products">{list} {more}</ul> }
    };

    view! {
        <div class="category-card" class:category-card--selected=is_selected.clone()>
            <div class="category-card__top">
                <input
                    type="checkbox"
                    class="table__checkbox"
                    prop:checked=is_selected.clone()
                    on:change=on_check
                />
                <Badge
                    appearance=BadgeAppearance::Tint
                    color=if is_active { BadgeColor::Success } else { BadgeColor::Informative }
                >
                    {status}
                </Badge>
            </div>
            <div class="category-card__image">
                {match category.img.clone().filter(|src| !src.trim().is_empty()) {
                    Some(src) => view! { <img src=src alt=category.parent.clone() /> }.into_any(),
                    None => icon("image"),
                }}
            </div>
            <div class="category-card__body">
                <h3 class="category-card__title" on:click=open>{category.parent.clone()}</h3>
                {category.description.clone().map(|d| view! { <p class="category-card__description">{d}</p> })}
                <div class="category-card__meta">
                    <span>{category.product_type.clone().unwrap_or_default()}</span>
                    <span>{format!("Подкатегорий: {}", category.children_count())}</span>
                    <span>{format!("Товаров: {}", product_count)}</span>
                </div>
                {has_children.then(|| view! {
                    <div class="details-section">
                        <div class="category-card__chips">{children_view}</div>
                    </div>
                })}
                {(product_count > 0).then(|| view! {
                    <div class="details-section">{products_view}</div>
                })}
                {expandable.then(|| view! {
                    <Button appearance=ButtonAppearance::Subtle on_click=toggle_expanded>
                        {move || if is_expanded.get() { "Свернуть" } else { "Показать всё" }}
                    </Button>
                })}
            </div>
        </div>
    }
}
