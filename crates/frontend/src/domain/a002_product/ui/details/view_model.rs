use crate::domain::a002_product::api::{add_product, edit_product};
use crate::domain::a004_media::api::{delete_image, discard_images};
use crate::shared::config::use_config;
use contracts::domain::a002_product::{Product, ProductDraft, PRODUCT_TABS};
use contracts::domain::a004_media::{unsaved_uploads, UploadedImage};
use contracts::shared::form::{FormWizard, ImageSlot};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel диалога товара.
///
/// Черновик, ошибки полей и активная вкладка живут в одном `FormWizard`;
/// отдельно хранятся только флаги загрузки галерей.
#[derive(Clone, Copy)]
pub struct ProductDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<FormWizard<ProductDraft>>,
    pub busy: RwSignal<bool>,
    /// Идёт загрузка дополнительных изображений
    pub gallery_uploading: RwSignal<bool>,
    /// Идёт загрузка изображений нового варианта цвета
    pub variant_uploading: RwSignal<bool>,
    /// Почему не удалось добавить вариант цвета
    pub variant_error: RwSignal<Option<String>>,
    session_uploads: RwSignal<Vec<UploadedImage>>,
}

impl ProductDetailsVm {
    pub fn new(product: Option<&Product>, busy: RwSignal<bool>) -> Self {
        let (id, wizard) = match product {
            Some(product) => (
                Some(product.id.clone()),
                FormWizard::with_draft(ProductDraft::from_product(product), PRODUCT_TABS),
            ),
            None => (None, FormWizard::new(PRODUCT_TABS)),
        };

        Self {
            id: RwSignal::new(id),
            form: RwSignal::new(wizard),
            busy,
            gallery_uploading: RwSignal::new(false),
            variant_uploading: RwSignal::new(false),
            variant_error: RwSignal::new(None),
            session_uploads: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.with(Option::is_some))
    }

    pub fn is_uploading(&self) -> Signal<bool> {
        let vm = *self;
        Signal::derive(move || {
            vm.gallery_uploading.get()
                || vm.variant_uploading.get()
                || vm.form.with(|w| w.draft.main_image.is_uploading())
        })
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let vm = *self;
        let uploading = self.is_uploading();
        Signal::derive(move || {
            uploading.get() || vm.form.with(|w| w.is_submitting() || w.is_success())
        })
    }

    /// Поля заблокированы на время отправки и после успеха
    pub fn is_locked(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.with(|w| w.is_submitting() || w.is_success()))
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|w| w.errors.get(field).map(str::to_string)))
    }

    pub fn edit(&self, field: &str, apply: impl FnOnce(&mut ProductDraft)) {
        self.form.update(|w| w.edit(field, apply));
    }

    pub fn set_tab(&self, tab: &str) {
        self.form.update(|w| w.set_tab(tab));
    }

    fn remember_uploads(&self, images: &[UploadedImage]) {
        let images = images.to_vec();
        self.session_uploads.try_update(|s| s.extend(images));
    }

    pub fn set_main_image(&self, slot: ImageSlot) {
        if let ImageSlot::Uploaded(image) = &slot {
            self.remember_uploads(std::slice::from_ref(image));
        }
        self.form.try_update(|w| w.edit("main_image", |d| d.main_image = slot));
    }

    pub fn add_images(&self, images: Vec<UploadedImage>) {
        self.remember_uploads(&images);
        self.form
            .try_update(|w| w.edit("images", |d| d.images.extend(images)));
    }

    /// Убирает дополнительное изображение из черновика и из хранилища
    pub fn remove_image(&self, index: usize) {
        let removed = self
            .form
            .try_update(|w| {
                let mut removed = None;
                w.edit("images", |d| removed = d.remove_image(index));
                removed
            })
            .flatten();
        if let Some(image) = removed {
            spawn_local(async move {
                if let Err(e) = delete_image(&image).await {
                    log::warn!("{}", e);
                }
            });
        }
    }

    pub fn add_variant_images(&self, images: Vec<UploadedImage>) {
        self.remember_uploads(&images);
        self.variant_error.try_set(None);
        self.form
            .try_update(|w| w.edit("color_variants", |d| d.new_variant.images.extend(images)));
    }

    pub fn remove_variant_image(&self, index: usize) {
        let removed = self
            .form
            .try_update(|w| {
                let mut removed = None;
                w.edit("color_variants", |d| removed = d.remove_variant_image(index));
                removed
            })
            .flatten();
        if let Some(image) = removed {
            spawn_local(async move {
                if let Err(e) = delete_image(&image).await {
                    log::warn!("{}", e);
                }
            });
        }
    }

    pub fn add_color_variant(&self) {
        let mut result = Ok(());
        self.edit("color_variants", |d| result = d.add_color_variant());
        self.variant_error.set(result.err());
    }

    /// Изображения удалённого варианта тоже удаляются из хранилища
    pub fn remove_color_variant(&self, index: usize) {
        let mut removed = None;
        self.edit("color_variants", |d| removed = d.remove_color_variant(index));
        if let Some(variant) = removed {
            discard_images(variant.images);
        }
    }

    pub fn save(&self, on_saved: Callback<()>, on_close: Callback<()>) {
        let payload = match self.form.try_update(|w| w.begin_submit()) {
            Some(Ok(Some(payload))) => payload,
            Some(Err(e)) => {
                log::debug!("{}", e);
                // первая вкладка с ошибкой становится активной
                self.form.update(|w| {
                    if let Some(tab) = first_tab_with_errors(w) {
                        w.set_tab(tab);
                    }
                });
                return;
            }
            _ => return,
        };

        let vm = *self;
        let id = vm.id.get_untracked();
        let close_delay = use_config().success_close_delay_ms;
        vm.busy.set(true);

        spawn_local(async move {
            let result = match id.as_deref() {
                Some(id) => edit_product(id, &payload).await,
                None => add_product(&payload).await,
            };
            vm.busy.try_set(false);

            match result {
                Ok(()) => {
                    log::info!("product saved: {}", payload.title);
                    vm.session_uploads.try_set(Vec::new());
                    vm.form.try_update(|w| w.succeeded());
                    on_saved.run(());

                    TimeoutFuture::new(close_delay).await;
                    if vm.form.try_with_untracked(|w| w.is_success()) == Some(true) {
                        on_close.run(());
                    }
                }
                Err(e) => {
                    log::error!("{}", e);
                    vm.form.try_update(|w| w.failed(e.to_string()));
                }
            }
        });
    }

    /// Удаляет изображения, загруженные в этом диалоге и не сохранённые
    pub fn discard_unsaved_uploads(&self) {
        let Some(session) = self.session_uploads.try_update(std::mem::take) else {
            return;
        };
        let in_draft = self
            .form
            .try_with_untracked(|w| w.draft.uploaded_images())
            .unwrap_or_default();
        discard_images(unsaved_uploads(&session, &in_draft));
    }
}

/// Поле формы -> вкладка, на которой оно находится
pub fn tab_of_field(field: &str) -> &'static str {
    match field {
        "main_image" | "images" => "images",
        "color_variants" => "variants",
        "quantity" | "unit" | "status" | "sizes" => "inventory",
        "video_id" | "featured" | "offer_end" | "additional_info" => "additional",
        _ => "basic",
    }
}

fn first_tab_with_errors(wizard: &FormWizard<ProductDraft>) -> Option<&'static str> {
    PRODUCT_TABS
        .iter()
        .copied()
        .find(|tab| wizard.errors.fields().any(|field| tab_of_field(field) == *tab))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tab_of_field() {
        assert_eq!(tab_of_field("title"), "basic");
        assert_eq!(tab_of_field("brand"), "basic");
        assert_eq!(tab_of_field("main_image"), "images");
        assert_eq!(tab_of_field("unit"), "inventory");
        assert_eq!(tab_of_field("offer_end"), "additional");
    }

    #[test]
    fn test_first_tab_with_errors_follows_tab_order() {
        let mut wizard: FormWizard<ProductDraft> = FormWizard::new(PRODUCT_TABS);
        wizard.errors.add("unit", "required");
        wizard.errors.add("main_image", "required");
        assert_eq!(first_tab_with_errors(&wizard), Some("images"));

        wizard.errors.clear();
        assert_eq!(first_tab_with_errors(&wizard), None);
    }
}
