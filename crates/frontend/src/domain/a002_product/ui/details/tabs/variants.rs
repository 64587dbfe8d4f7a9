use super::super::view_model::ProductDetailsVm;
use crate::shared::components::{FormField, ImageGallery, TagInput};
use crate::shared::icons::icon;
use contracts::domain::a002_product::ColorVariant;
use leptos::prelude::*;
use thaw::*;

/// Вкладка "Варианты": цвета с изображениями и размерами
#[component]
pub fn VariantsTab(vm: ProductDetailsVm) -> impl IntoView {
    let locked = vm.is_locked();

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Новый вариант цвета"</h4>
            <div class="details-grid--2col">
                <FormField label="Название цвета" required=true>
                    <input
                        class="form__input"
                        type="text"
                        placeholder="Например: Чёрный"
                        prop:value=move || vm.form.with(|w| w.draft.new_variant.name.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.edit("color_variants", |d| d.new_variant.name = value);
                        }
                        disabled=locked
                    />
                </FormField>

                <FormField label="Код цвета" required=true>
                    <div class="color-input">
                        <input
                            type="color"
                            prop:value=move || vm.form.with(|w| w.draft.new_variant.clr_code.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.edit("color_variants", |d| d.new_variant.clr_code = value);
                            }
                            disabled=locked
                        />
                        <span>{move || vm.form.with(|w| w.draft.new_variant.clr_code.clone())}</span>
                    </div>
                </FormField>
            </div>

            <FormField label="Изображения варианта" required=true>
                <ImageGallery
                    images=Signal::derive(move || vm.form.with(|w| w.draft.new_variant.images.clone()))
                    on_uploaded=Callback::new(move |images| vm.add_variant_images(images))
                    on_remove=Callback::new(move |idx| vm.remove_variant_image(idx))
                    uploading=vm.variant_uploading
                    disabled=locked
                />
            </FormField>

            <FormField label="Размеры варианта" required=true>
                <TagInput
                    values=Signal::derive(move || vm.form.with(|w| w.draft.new_variant.sizes.to_vec()))
                    on_add=Callback::new(move |input: String| {
                        vm.edit("color_variants", |d| {
                            d.new_variant.sizes.add_many(&input);
                        });
                    })
                    on_remove=Callback::new(move |idx: usize| {
                        vm.edit("color_variants", |d| {
                            d.new_variant.sizes.remove(idx);
                        });
                    })
                    placeholder="S, M, L"
                    disabled=locked
                />
            </FormField>

            {move || vm.variant_error.get().map(|message| view! {
                <div class="form__error">{message}</div>
            })}

            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| vm.add_color_variant()
                disabled=Signal::derive(move || locked.get() || vm.variant_uploading.get())
            >
                {icon("plus")}
                " Добавить вариант"
            </Button>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">
                {move || format!(
                    "Добавленные варианты ({})",
                    vm.form.with(|w| w.draft.color_variants.len())
                )}
            </h4>
            <Show
                when=move || vm.form.with(|w| !w.draft.color_variants.is_empty())
                fallback=|| view! { <div class="text-muted">"Вариантов пока нет"</div> }
            >
                <div class="variant-list">
                    <For
                        each=move || {
                            vm.form.with(|w| {
                                w.draft.color_variants.iter().cloned().enumerate().collect::<Vec<_>>()
                            })
                        }
                        key=|(idx, variant)| format!("{}-{}-{}", idx, variant.name, variant.clr_code)
                        children=move |(idx, variant)| view! {
                            <VariantCard
                                variant=variant
                                disabled=locked
                                on_remove=Callback::new(move |_| vm.remove_color_variant(idx))
                            />
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn VariantCard(
    variant: ColorVariant,
    #[prop(into)] disabled: Signal<bool>,
    on_remove: Callback<()>,
) -> impl IntoView {
    let preview = variant.images.first().map(|image| image.url.clone());
    let sizes = variant.sizes.to_vec().join(", ");
    let swatch_style = format!("background: {};", variant.clr_code);

    view! {
        <div class="variant-card">
            <span class="variant-card__swatch" style=swatch_style></span>
            {preview.map(|url| view! { <img class="variant-card__image" src=url alt="" /> })}
            <div class="variant-card__info">
                <div class="variant-card__name">{variant.name.clone()}</div>
                <div class="text-muted">{format!("Размеры: {}", sizes)}</div>
                <div class="text-muted">{format!("Изображений: {}", variant.images.len())}</div>
            </div>
            <button
                class="image-upload__remove"
                title="Удалить вариант"
                disabled=disabled
                on:click=move |_| on_remove.run(())
            >
                {icon("delete")}
            </button>
        </div>
    }
}
