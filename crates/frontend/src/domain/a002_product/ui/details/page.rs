//! Диалог добавления/редактирования товара с вкладками

use super::tabs::{AdditionalTab, BasicTab, ImagesTab, InventoryTab, VariantsTab};
use super::view_model::{tab_of_field, ProductDetailsVm};
use crate::shared::icons::icon;
use contracts::domain::a002_product::{Product, TAB_LABELS};
use contracts::shared::form::FormPhase;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ProductDetails(
    /// `None` - новый товар
    product: Option<Product>,
    busy: RwSignal<bool>,
    #[prop(into)] on_saved: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = ProductDetailsVm::new(product.as_ref(), busy);

    on_cleanup(move || vm.discard_unsaved_uploads());

    let on_close = Callback::new(move |_| {
        vm.discard_unsaved_uploads();
        on_cancel.run(());
    });

    view! {
        <div class="details-container product-details">
            <Header vm=vm on_saved=on_saved on_close=on_close />

            <div class="modal-body">
                <SubmitStatus vm=vm />
                <TabBar vm=vm />

                <div style="height: 60vh; overflow-y: auto; overflow-x: hidden;">
                    <TabContent vm=vm />
                </div>
            </div>
        </div>
    }
}

#[component]
fn Header(vm: ProductDetailsVm, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let is_edit_mode = vm.is_edit_mode();
    let is_save_disabled = vm.is_save_disabled();
    let is_uploading = vm.is_uploading();
    let is_submitting = Signal::derive(move || vm.form.with(|w| w.is_submitting()));

    view! {
        <div class="modal-header">
            <h3 class="modal-title">
                {move || if is_edit_mode.get() {
                    "Редактирование товара"
                } else {
                    "Новый товар"
                }}
            </h3>
            <div class="modal-header-actions">
                <Show when=move || is_uploading.get()>
                    <span class="text-muted">"Загрузка изображений..."</span>
                </Show>
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

#[component]
fn SubmitStatus(vm: ProductDetailsVm) -> impl IntoView {
    let phase = Memo::new(move |_| vm.form.with(|w| w.phase.clone()));
    let error_count = Memo::new(move |_| vm.form.with(|w| w.errors.len()));

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
                    <span class="warning-box__text">"Товар сохранён"</span>
                </div>
            }.into_any(),
            _ => ().into_any(),
        }}
        <Show when=move || { error_count.get() > 0 }>
            <div class="warning-box">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">
                    {move || format!("Проверьте поля формы: ошибок {}", error_count.get())}
                </span>
            </div>
        </Show>
    }
}

#[component]
fn TabBar(vm: ProductDetailsVm) -> impl IntoView {
    let active_tab = Memo::new(move |_| vm.form.with(|w| w.active_tab()));
    // вкладки, на которых есть поля с ошибками
    let tabs_with_errors = Memo::new(move |_| {
        vm.form.with(|w| {
            TAB_LABELS
                .iter()
                .filter(|(tab, _)| {
                    w.errors.fields().any(|field| tab_of_field(field) == *tab)
                })
                .map(|(tab, _)| *tab)
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="detail-tabs">
            {TAB_LABELS
                .iter()
                .map(|(key, label)| {
                    let key = *key;
                    view! {
                        <button
                            class="detail-tabs__item"
                            class:detail-tabs__item--active=move || active_tab.get() == key
                            class:detail-tabs__item--error=move || tabs_with_errors.with(|t| t.contains(&key))
                            on:click=move |_| vm.set_tab(key)
                        >
                            {*label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn TabContent(vm: ProductDetailsVm) -> impl IntoView {
    let active_tab = Memo::new(move |_| vm.form.with(|w| w.active_tab()));

    view! {
        {move || match active_tab.get() {
            "images" => view! { <ImagesTab vm=vm /> }.into_any(),
            "variants" => view! { <VariantsTab vm=vm /> }.into_any(),
            "inventory" => view! { <InventoryTab vm=vm /> }.into_any(),
            "additional" => view! { <AdditionalTab vm=vm /> }.into_any(),
            _ => view! { <BasicTab vm=vm /> }.into_any(),
        }}
    }
}
