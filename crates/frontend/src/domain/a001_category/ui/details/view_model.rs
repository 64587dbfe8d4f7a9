use crate::domain::a001_category::api::{add_category, edit_category, fetch_category};
use crate::domain::a004_media::api::discard_images;
use crate::shared::config::use_config;
use contracts::domain::a001_category::{CategoryDraft, CATEGORY_TABS};
use contracts::domain::a004_media::{unsaved_uploads, UploadedImage};
use contracts::shared::error::AdminError;
use contracts::shared::form::{FormWizard, ImageSlot};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// ViewModel диалога добавления/редактирования категории
#[derive(Clone, Copy)]
pub struct CategoryDetailsVm {
    pub id: RwSignal<Option<String>>,
    pub form: RwSignal<FormWizard<CategoryDraft>>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<AdminError>>,
    /// Сохранение в процессе; пока true, диалог не закрывается по Escape
    pub busy: RwSignal<bool>,
    session_uploads: RwSignal<Vec<UploadedImage>>,
}

impl CategoryDetailsVm {
    pub fn new(busy: RwSignal<bool>) -> Self {
        Self {
            id: RwSignal::new(None),
            form: RwSignal::new(FormWizard::new(CATEGORY_TABS)),
            loading: RwSignal::new(false),
            load_error: RwSignal::new(None),
            busy,
            session_uploads: RwSignal::new(Vec::new()),
        }
    }

    pub fn is_edit_mode(&self) -> Signal<bool> {
        let id = self.id;
        Signal::derive(move || id.with(Option::is_some))
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let vm = *self;
        Signal::derive(move || {
            vm.loading.get()
                || vm.load_error.with(Option::is_some)
                || vm.form.with(|w| {
                    w.is_submitting() || w.is_success() || w.draft.img.is_uploading()
                })
        })
    }

    pub fn field_error(&self, field: &'static str) -> Signal<Option<String>> {
        let form = self.form;
        Signal::derive(move || form.with(|w| w.errors.get(field).map(str::to_string)))
    }

    pub fn edit(&self, field: &str, apply: impl FnOnce(&mut CategoryDraft)) {
        self.form.update(|w| w.edit(field, apply));
    }

    pub fn set_image(&self, slot: ImageSlot) {
        if let ImageSlot::Uploaded(image) = &slot {
            let image = image.clone();
            self.session_uploads.update(|s| s.push(image));
        }
        // слот меняется и после завершения загрузки, когда диалог уже мог закрыться
        self.form.try_update(|w| w.edit("img", |d| d.img = slot));
    }

    /// Загрузить категорию для редактирования
    pub fn load(&self, id: String) {
        let vm = *self;
        vm.id.set(Some(id.clone()));
        vm.loading.set(true);
        vm.load_error.set(None);

        spawn_local(async move {
            match fetch_category(&id).await {
                Ok(category) => {
                    let draft = CategoryDraft::from_category(&category);
                    vm.form
                        .try_set(FormWizard::with_draft(draft, CATEGORY_TABS));
                }
                Err(e) => {
                    log::error!("{}", e);
                    vm.load_error.try_set(Some(e));
                }
            }
            vm.loading.try_set(false);
        });
    }

    /// Проверка и отправка формы.
    ///
    /// После успеха вызывается `on_saved`, а через `success_close_delay_ms`
    /// диалог закрывается через `on_close`.
    pub fn save(&self, on_saved: Callback<()>, on_close: Callback<()>) {
        let payload = match self.form.try_update(|w| w.begin_submit()) {
            Some(Ok(Some(payload))) => payload,
            Some(Err(e)) => {
                log::debug!("{}", e);
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
                Some(id) => edit_category(id, &payload).await,
                None => add_category(&payload).await,
            };
            vm.busy.try_set(false);

            match result {
                Ok(()) => {
                    log::info!("category saved: {}", payload.parent);
                    vm.session_uploads.try_set(Vec::new());
                    vm.form.try_update(|w| w.succeeded());
                    on_saved.run(());

                    TimeoutFuture::new(close_delay).await;
                    // диалог уже закрыт вручную
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
        let in_draft: Vec<UploadedImage> = self
            .form
            .try_with_untracked(|w| w.draft.img.image().cloned().into_iter().collect())
            .unwrap_or_default();
        discard_images(unsaved_uploads(&session, &in_draft));
    }
}
