use super::super::view_model::ProductDetailsVm;
use crate::domain::a003_brand::ui::picker::BrandPicker;
use crate::shared::components::{FormField, TagInput};
use contracts::domain::a002_product::{subcategories_of, PARENT_OPTIONS};
use contracts::domain::a003_brand::BrandRef;
use leptos::prelude::*;

/// Вкладка "Основное": название, цена, категория, бренд, теги
#[component]
pub fn BasicTab(vm: ProductDetailsVm) -> impl IntoView {
    let locked = vm.is_locked();
    let parent = Memo::new(move |_| vm.form.with(|w| w.draft.parent.clone()));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Основная информация"</h4>
            <div class="details-grid--2col">
                <FormField label="Название" required=true error=vm.field_error("title")>
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || vm.form.with(|w| w.draft.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("title", |d| d.set_title(value));
                        }
                        disabled=locked
                    />
                </FormField>

                <FormField label="Slug">
                    <input
                        class="form__input"
                        type="text"
                        title="Очистите поле, чтобы снова строить slug из названия"
                        prop:value=move || vm.form.with(|w| w.draft.slug.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("slug", |d| d.set_slug(value));
                        }
                        disabled=locked
                    />
                </FormField>

                <FormField label="Артикул (SKU)">
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || vm.form.with(|w| w.draft.sku.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("sku", |d| d.sku = value);
                        }
                        disabled=locked
                    />
                </FormField>

                <FormField label="Тип товара" required=true error=vm.field_error("product_type")>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Например: electronics"
                        prop:value=move || vm.form.with(|w| w.draft.product_type.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("product_type", |d| d.product_type = value);
                        }
                        disabled=locked
                    />
                </FormField>

                <FormField label="Цена" required=true error=vm.field_error("price")>
                    <input
                        class="form__input"
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || vm.form.with(|w| w.draft.price.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("price", |d| d.price = value);
                        }
                        disabled=locked
                    />
                </FormField>

                <FormField label="Скидка" error=vm.field_error("discount")>
                    <input
                        class="form__input"
                        type="number"
                        step="0.01"
                        min="0"
                        prop:value=move || vm.form.with(|w| w.draft.discount.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("discount", |d| d.discount = value);
                        }
                        disabled=locked
                    />
                </FormField>
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Категория и бренд"</h4>
            <div class="details-grid--3col">
                <FormField label="Родительская категория" required=true error=vm.field_error("parent")>
                    <select
                        class="form__select"
                        prop:value=move || parent.get()
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("parent", |d| d.set_parent(value));
                        }
                        disabled=locked
                    >
                        <option value="">"Выберите категорию"</option>
                        {PARENT_OPTIONS
                            .iter()
                            .map(|(value, label, _)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </FormField>

                <FormField label="Подкатегория" required=true error=vm.field_error("children")>
                    <select
                        class="form__select"
                        prop:value=move || vm.form.with(|w| w.draft.children.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("children", |d| d.children = value);
                        }
                        disabled=move || locked.get() || parent.with(String::is_empty)
                    >
                        <option value="">"Выберите подкатегорию"</option>
                        {move || {
                            subcategories_of(&parent.get())
                                .iter()
                                .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                .collect_view()
                        }}
                    </select>
                </FormField>

                <FormField label="Бренд" required=true error=vm.field_error("brand")>
                    <BrandPicker
                        selected=Signal::derive(move || vm.form.with(|w| w.draft.brand.clone()))
                        on_select=Callback::new(move |brand: BrandRef| {
                            vm.edit("brand", |d| d.brand = brand);
                        })
                        disabled=locked
                    />
                </FormField>
            </div>

            <FormField label="Теги">
                <TagInput
                    values=Signal::derive(move || vm.form.with(|w| w.draft.tags.to_vec()))
                    on_add=Callback::new(move |input: String| {
                        vm.edit("tags", |d| {
                            d.tags.add_many(&input);
                        });
                    })
                    on_remove=Callback::new(move |idx: usize| {
                        vm.edit("tags", |d| {
                            d.tags.remove(idx);
                        });
                    })
                    placeholder="Введите тег и нажмите Enter"
                    disabled=locked
                />
            </FormField>

            <FormField label="Описание" required=true error=vm.field_error("description")>
                <textarea
                    class="form__textarea"
                    rows=5
                    prop:value=move || vm.form.with(|w| w.draft.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.edit("description", |d| d.description = value);
                    }
                    disabled=locked
                ></textarea>
            </FormField>
        </div>
    }
}
