//! Выбор бренда: поиск по названию, группировка по первой букве,
//! повтор загрузки при ошибке.

use crate::domain::a003_brand::api::fetch_active_brands;
use crate::shared::components::ErrorBanner;
use contracts::domain::a003_brand::{filter_brands, group_by_letter, Brand, BrandRef};
use contracts::shared::error::AdminError;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn BrandPicker(
    /// Выбранный бренд
    #[prop(into)]
    selected: Signal<BrandRef>,
    on_select: Callback<BrandRef>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let brands = RwSignal::new(Vec::<Brand>::new());
    let error = RwSignal::new(None::<AdminError>);
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let is_open = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match fetch_active_brands().await {
                Ok(items) => {
                    brands.try_set(items);
                }
                Err(e) => {
                    log::error!("{}", e);
                    error.try_set(Some(e));
                }
            }
            loading.try_set(false);
        });
    };

    load();

    let groups = move || {
        let query = search.get();
        brands.with(|all| {
            let found = filter_brands(all, &query);
            group_by_letter(&found)
                .into_iter()
                .map(|(letter, items)| {
                    (letter, items.into_iter().map(BrandRef::from).collect::<Vec<_>>())
                })
                .collect::<Vec<_>>()
        })
    };

    let choose = move |brand: BrandRef| {
        on_select.run(brand);
        is_open.set(false);
        search.set(String::new());
    };

    view! {
        <div class="brand-picker">
            <button
                type="button"
                class="form__input brand-picker__toggle"
                disabled=move || disabled.get()
                on:click=move |_| is_open.update(|o| *o = !*o)
            >
                {move || {
                    let brand = selected.get();
                    if brand.is_empty() { "Выберите бренд".to_string() } else { brand.name }
                }}
            </button>

            <ErrorBanner
                error=error
                on_retry=Callback::new(move |_| load())
                on_dismiss=Callback::new(move |_| error.set(None))
            />

            <Show when=move || is_open.get()>
                <div class="brand-picker__dropdown">
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Поиск бренда..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <Show when=move || loading.get()>
                        <div class="brand-picker__empty">"Загрузка..."</div>
                    </Show>
                    <div class="brand-picker__list">
                        {move || {
                            let groups = groups();
                            if groups.is_empty() && !loading.get() {
                                return view! {
                                    <div class="brand-picker__empty">"Бренды не найдены"</div>
                                }.into_any();
                            }
                            groups.into_iter().map(|(letter, items)| view! {
                                <div class="brand-picker__group">
                                    <div class="brand-picker__letter">{letter.to_string()}</div>
                                    {items.into_iter().map(|brand| {
                                        let is_selected = selected.with_untracked(|s| s.id == brand.id && !brand.id.is_empty());
                                        let name = brand.name.clone();
                                        view! {
                                            <div
                                                class="brand-picker__item"
                                                class:brand-picker__item--selected=is_selected
                                                on:click=move |_| choose(brand.clone())
                                            >
                                                {name}
                                            </div>
                                        }
                                    }).collect_view()}
                                </div>
                            }).collect_view().into_any()
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
