use super::super::view_model::ProductDetailsVm;
use crate::shared::components::{FormField, TagInput};
use contracts::domain::a002_product::{STATUS_OPTIONS, UNIT_OPTIONS};
use leptos::prelude::*;

#[component]
pub fn InventoryTab(vm: ProductDetailsVm) -> impl IntoView {
    let locked = vm.is_locked();

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Склад"</h4>
            <div class="details-grid--3col">
                <FormField label="Количество" error=vm.field_error("quantity")>
                    <input
                        class="form__input"
                        type="number"
                        step="1"
                        min="0"
                        prop:value=move || vm.form.with(|w| w.draft.quantity.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("quantity", |d| d.quantity = value);
                        }
                        disabled=locked
                    />
                </FormField>

                <FormField label="Единица измерения" required=true error=vm.field_error("unit")>
                    <select
                        class="form__select"
                        prop:value=move || vm.form.with(|w| w.draft.unit.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("unit", |d| d.unit = value);
                        }
                        disabled=locked
                    >
                        <option value="">"Выберите единицу"</option>
                        {UNIT_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </FormField>

                <FormField label="Статус">
                    <select
                        class="form__select"
                        prop:value=move || vm.form.with(|w| w.draft.status.clone())
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("status", |d| d.status = value);
                        }
                        disabled=locked
                    >
                        {STATUS_OPTIONS
                            .iter()
                            .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                            .collect_view()}
                    </select>
                </FormField>
            </div>

            <FormField label="Размеры">
                <TagInput
                    values=Signal::derive(move || vm.form.with(|w| w.draft.sizes.to_vec()))
                    on_add=Callback::new(move |input: String| {
                        vm.edit("sizes", |d| {
                            d.sizes.add_many(&input);
                        });
                    })
                    on_remove=Callback::new(move |idx: usize| {
                        vm.edit("sizes", |d| {
                            d.sizes.remove(idx);
                        });
                    })
                    placeholder="S, M, L, XL"
                    disabled=locked
                />
            </FormField>
        </div>
    }
}
