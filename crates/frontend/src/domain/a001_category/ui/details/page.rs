//! Диалог добавления/редактирования категории

use super::view_model::CategoryDetailsVm;
use crate::shared::components::image_upload::ImageUploadProps;
use crate::shared::components::{ErrorBanner, FormField, ImageUpload, TagInput};
use crate::shared::icons::icon;
use contracts::domain::a001_category::STATUS_OPTIONS;
use contracts::shared::form::FormPhase;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn CategoryDetails(
    /// `None` - новая категория
    id: Option<String>,
    /// Общий с диалогом флаг "идёт сохранение"
    busy: RwSignal<bool>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CategoryDetailsVm::new(busy);
    if let Some(id) = id {
        vm.load(id);
    }

    on_cleanup(move || vm.discard_unsaved_uploads());

    let on_close = Callback::new(move |_| {
        vm.discard_unsaved_uploads();
        on_cancel.run(());
    });

    view! {
        <div class="details-container category-details">
            <Header vm=vm on_saved=on_saved on_close=on_close />

            <div class="modal-body">
                <ErrorBanner
                    error=vm.load_error
                    on_retry=Callback::new(move |_| {
                        if let Some(id) = vm.id.get_untracked() {
                            vm.load(id);
                        }
                    })
                />
                <SubmitStatus vm=vm />

                <Show
                    when=move || !vm.loading.get()
                    fallback=|| view! { <div class="text-muted">"Загрузка..."</div> }
                >
                    <CategoryForm vm=vm />
                </Show>
            </div>
        </div>
    }
}

#[component]
fn Header(vm: CategoryDetailsVm, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let is_submitting = Signal::derive(move || vm.form.with(|w| w.is_submitting()));

    view! {
        <div class="modal-header">
            <h3 class="modal-title">
                {move || if is_edit_mode.get() {
                    "Редактирование категории"
                } else {
                    "Новая категория"
                }}
            </h3>
            <div class="modal-header-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save(on_saved, on_close)
                    disabled=is_save_disabled
                >
                    {icon("save")}
                    {move || if is_submitting.get() { " Сохранение..." } else { " Сохранить" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_close.run(())
                    disabled=is_submitting
                >
                    {icon("x")}
                    " Закрыть"
                </Button>
            </div>
        </div>
    }
}

/// Ошибка отправки или сообщение об успехе
#[component]
fn SubmitStatus(vm: CategoryDetailsVm) -> impl IntoView {
    let phase = Memo::new(move |_| vm.form.with(|w| w.phase.clone()));

    view! {
        {move || match phase.get() {
            FormPhase::Failed(message) => view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                    <button
                        class="warning-box__close"
                        on:click=move |_| vm.form.update(|w| w.dismiss_error())
                    >
                        {icon("x")}
                    </button>
                </div>
            }.into_any(),
            FormPhase::Success => view! {
                <div class="warning-box warning-box--success">
                    {icon("check-circle")}
                    <span class="warning-box__text">"Категория сохранена"</span>
                </div>
            }.into_any(),
            _ => ().into_any(),
        }}
    }
}

#[component]
fn CategoryForm(vm: CategoryDetailsVm) -> impl IntoView {
    let disabled = Signal::derive(move || vm.form.with(|w| w.is_submitting() || w.is_success()));

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Основная информация"</h4>
            <div class="details-grid--2col">
                <FormField label="Изображение" error=vm.field_error("img")>
                    {component_view(
                        ImageUpload,
                        ImageUploadProps::builder()
                            .slot(Signal::derive(move || vm.form.with(|w| w.draft.img.clone())))
                            .on_change(Callback::new(move |slot| vm.set_image(slot)))
                            .disabled(disabled)
                            .build(),
                    )}
                </FormField>

                <div>
                    <FormField label="Родительская категория" required=true error=vm.field_error("parent")>
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Например: Электроника"
                            prop:value=move || vm.form.with(|w| w.draft.parent.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit("parent", |d| d.parent = value);
                            }
                            disabled=disabled
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
                            disabled=disabled
                        />
                    </FormField>

                    <FormField label="Статус">
                        <select
                            class="form__select"
                            prop:value=move || vm.form.with(|w| w.draft.status.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit("status", |d| d.status = value);
                            }
                            disabled=disabled
                        >
                            {STATUS_OPTIONS
                                .iter()
                                .map(|status| view! { <option value=*status>{*status}</option> })
                                .collect_view()}
                        </select>
                    </FormField>
                </div>
            </div>

            <FormField label="Подкатегории">
                <TagInput
                    values=Signal::derive(move || vm.form.with(|w| w.draft.children.to_vec()))
                    on_add=Callback::new(move |input: String| {
                        vm.edit("children", |d| {
                            d.children.add_many(&input);
                        });
                    })
                    on_remove=Callback::new(move |idx: usize| {
                        vm.edit("children", |d| {
                            d.children.remove(idx);
                        });
                    })
                    placeholder="Введите и нажмите Enter"
                    disabled=disabled
                />
            </FormField>

            <FormField label="Описание">
                <textarea
                    class="form__textarea"
                    rows=4
                    prop:value=move || vm.form.with(|w| w.draft.description.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        vm.edit("description", |d| d.description = value);
                    }
                    disabled=disabled
                ></textarea>
            </FormField>
        </div>
    }
}
