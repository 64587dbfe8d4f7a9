use super::super::view_model::ProductDetailsVm;
use crate::shared::components::image_upload::ImageUploadProps;
use crate::shared::components::{FormField, ImageGallery, ImageUpload};
use leptos::prelude::*;

#[component]
pub fn ImagesTab(vm: ProductDetailsVm) -> impl IntoView {
    let locked = vm.is_locked();

    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Основное изображение"</h4>
            <FormField label="Изображение" required=true error=vm.field_error("main_image")>
                {component_view(
                    ImageUpload,
                    ImageUploadProps::builder()
                        .slot(Signal::derive(move || vm.form.with(|w| w.draft.main_image.clone())))
                        .on_change(Callback::new(move |slot| vm.set_main_image(slot)))
                        .disabled(locked)
                        .build(),
                )}
            </FormField>
        </div>

        <div class="details-section">
            <h4 class="details-section__title">"Дополнительные изображения"</h4>
            <ImageGallery
                images=Signal::derive(move || vm.form.with(|w| w.draft.images.clone()))
                on_uploaded=Callback::new(move |images| vm.add_images(images))
                on_remove=Callback::new(move |idx| vm.remove_image(idx))
                uploading=vm.gallery_uploading
                disabled=locked
            />
        </div>
    }
}
