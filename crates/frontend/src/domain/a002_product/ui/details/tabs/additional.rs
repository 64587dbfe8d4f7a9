use super::super::view_model::ProductDetailsVm;
use crate::shared::components::data_table::parse_date_input;
use crate::shared::components::FormField;
use crate::shared::icons::icon;
use chrono::{DateTime, Utc};
use contracts::domain::a002_product::AdditionalInfo;
use leptos::prelude::*;
use thaw::*;

fn date_input_value(date: Option<DateTime<Utc>>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn info_field(vm: ProductDetailsVm, idx: usize, get: impl Fn(&AdditionalInfo) -> String) -> String {
    vm.form
        .with(|w| w.draft.additional_info.get(idx).map(get))
        .unwrap_or_default()
}

/// Вкладка "Дополнительно": видео, акция, характеристики
#[component]
pub fn AdditionalTab(vm: ProductDetailsVm) -> impl IntoView {
    let locked = vm.is_locked();
    let has_offer_start = Signal::derive(move || vm.form.with(|w| w.draft.offer_start.is_some()));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Витрина"</h4>
            <div class="details-grid--2col">
                <FormField label="YouTube video ID">
                    <input
                        class="form__input"
                        type="text"
                        prop:value=move || vm.form.with(|w| w.draft.video_id.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("video_id", |d| d.video_id = value);
                        }
                        disabled=locked
                    />
                </FormField>

                <div class="form__group">
                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || vm.form.with(|w| w.draft.featured)
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                vm.edit("featured", |d| d.featured = checked);
                            }
                            disabled=locked
                        />
                        " Рекомендуемый товар"
                    </label>
                </div>
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Акция"</h4>
            <div class="details-grid--2col">
                <FormField label="Начало">
                    <input
                        class="form__input"
                        type="date"
                        prop:value=move || vm.form.with(|w| date_input_value(w.draft.offer_start))
                        on:change=move |ev| {
                            let value = parse_date_input(&event_target_value(&ev));
                            vm.edit("offer_end", |d| {
                                d.offer_start = value;
                                if value.is_none() {
                                    d.offer_end = None;
                                }
                            });
                        }
                        disabled=locked
                    />
                </FormField>

                <FormField label="Окончание" error=vm.field_error("offer_end")>
                    <input
                        class="form__input"
                        type="date"
                        prop:min=move || vm.form.with(|w| date_input_value(w.draft.offer_start))
                        prop:value=move || vm.form.with(|w| date_input_value(w.draft.offer_end))
                        on:change=move |ev| {
                            let value = parse_date_input(&event_target_value(&ev));
                            vm.edit("offer_end", |d| d.offer_end = value);
                        }
                        disabled=move || locked.get() || !has_offer_start.get()
                    />
                </FormField>
            </div>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Характеристики"</h4>
            <For
                each=move || 0..vm.form.with(|w| w.draft.additional_info.len())
                key=|idx| *idx
                children=move |idx| view! {
                    <div class="info-row">
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Название"
                            prop:value=move || info_field(vm, idx, |i| i.key.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit("additional_info", |d| d.update_info(idx, Some(value), None));
                            }
                            disabled=locked
                        />
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Значение"
                            prop:value=move || info_field(vm, idx, |i| i.value.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit("additional_info", |d| d.update_info(idx, None, Some(value)));
                            }
                            disabled=locked
                        />
                        <button
                            class="image-upload__remove"
                            title="Удалить строку"
                            disabled=locked
                            on:click=move |_| vm.edit("additional_info", |d| d.remove_info_row(idx))
                        >
                            {icon("x")}
                        </button>
                    </div>
                }
            />
            <Button
                appearance=ButtonAppearance::Subtle
                on_click=move |_| vm.edit("additional_info", |d| d.add_info_row())
                disabled=locked
            >
                {icon("plus")}
                " Добавить характеристику"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_input_value() {
        assert_eq!(date_input_value(None), "");
        let date = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
        assert_eq!(date_input_value(Some(date)), "2024-03-05");
    }
}
