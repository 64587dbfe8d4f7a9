//! Поля изображений формы.
//!
//! Файл загружается сразу после выбора; форма хранит уже загруженные
//! изображения (`url` + `public_id`).

use crate::domain::a004_media::api::{delete_image, upload_image, upload_images};
use crate::shared::icons::icon;
use contracts::domain::a004_media::UploadedImage;
use contracts::shared::form::ImageSlot;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Event, File, HtmlInputElement};

/// Выбранные в `<input type="file">` файлы; поле очищается, чтобы
/// повторный выбор того же файла снова вызвал `change`.
fn take_files(ev: &Event) -> Vec<File> {
    let Some(input) = ev
        .target()
        .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
    else {
        return Vec::new();
    };
    let files = input
        .files()
        .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
        .unwrap_or_default();
    input.set_value("");
    files
}

/// Одно изображение (основное фото товара, картинка категории)
#[component]
pub fn ImageUpload(
    #[prop(into)]
    slot: Signal<ImageSlot>,
    /// Новое состояние поля
    on_change: Callback<ImageSlot>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let on_select = move |ev: Event| {
        let Some(file) = take_files(&ev).into_iter().next() else {
            return;
        };
        let previous = slot.get_untracked().image().cloned();
        on_change.run(ImageSlot::Uploading);
        spawn_local(async move {
            match upload_image(file).await {
                Ok(image) => {
                    on_change.run(ImageSlot::Uploaded(image));
                    // заменённое изображение больше не нужно
                    if let Some(old) = previous {
                        if let Err(e) = delete_image(&old).await {
                            log::warn!("{}", e);
                        }
                    }
                }
                Err(e) => {
                    log::error!("{}", e);
                    on_change.run(ImageSlot::Failed(e.to_string()));
                }
            }
        });
    };

    let on_remove = move |_| {
        if let Some(image) = slot.get_untracked().image().cloned() {
            spawn_local(async move {
                if let Err(e) = delete_image(&image).await {
                    log::warn!("{}", e);
                }
            });
        }
        on_change.run(ImageSlot::Empty);
    };

    let is_busy = move || disabled.get() || slot.with(ImageSlot::is_uploading);

    view! {
        <div class="image-upload">
            {move || match slot.get() {
                ImageSlot::Uploaded(image) => view! {
                    <div class="image-upload__preview">
                        <img src=image.url alt="" />
                        <button
                            class="image-upload__remove"
                            title="Удалить изображение"
                            disabled=is_busy
                            on:click=on_remove
                        >
                            {icon("x")}
                        </button>
                    </div>
                }.into_any(),
                ImageSlot::Uploading => view! {
                    <div class="image-upload__placeholder">"Загрузка..."</div>
                }.into_any(),
                ImageSlot::Failed(message) => view! {
                    <div class="image-upload__placeholder image-upload__placeholder--error">
                        {icon("alert")}
                        <span>{message}</span>
                    </div>
                }.into_any(),
                ImageSlot::Empty => view! {
                    <div class="image-upload__placeholder">{icon("image")}</div>
                }.into_any(),
            }}
            <label class="image-upload__button" class:image-upload__button--disabled=is_busy>
                {icon("upload")}
                " Выбрать файл"
                <input
                    type="file"
                    accept="image/*"
                    style="display: none;"
                    disabled=is_busy
                    on:change=on_select
                />
            </label>
        </div>
    }
}

/// Галерея изображений (дополнительные фото, фото варианта цвета)
#[component]
pub fn ImageGallery(
    #[prop(into)]
    images: Signal<Vec<UploadedImage>>,
    /// Загруженные за один раз изображения
    on_uploaded: Callback<Vec<UploadedImage>>,
    /// Удаление по индексу; удаление из хранилища делает вызывающий
    on_remove: Callback<usize>,
    /// Идёт ли загрузка (блокирует отправку формы)
    uploading: RwSignal<bool>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let error = RwSignal::new(None::<String>);

    let on_select = move |ev: Event| {
        let files = take_files(&ev);
        if files.is_empty() {
            return;
        }
        uploading.set(true);
        error.set(None);
        spawn_local(async move {
            match upload_images(files).await {
                Ok(uploaded) => on_uploaded.run(uploaded),
                Err(e) => {
                    log::error!("{}", e);
                    error.try_set(Some(e.to_string()));
                }
            }
            uploading.try_set(false);
        });
    };

    let is_busy = move || disabled.get() || uploading.get();

    view! {
        <div class="image-gallery">
            <div class="image-gallery__grid">
                <For
                    each={move || images.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(idx, image)| format!("{}-{}", idx, image.url)
                    children=move |(idx, image)| view! {
                        <div class="image-gallery__item">
                            <img src=image.url alt="" />
                            <button
                                class="image-upload__remove"
                                title="Удалить изображение"
                                disabled=is_busy
                                on:click=move |_| on_remove.run(idx)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                />
                <Show when=move || uploading.get()>
                    <div class="image-upload__placeholder">"Загрузка..."</div>
                </Show>
            </div>
            {move || error.get().map(|message| view! {
                <div class="form__error">{message}</div>
            })}
            <label class="image-upload__button" class:image-upload__button--disabled=is_busy>
                {icon("upload")}
                " Добавить изображения"
                <input
                    type="file"
                    accept="image/*"
                    multiple=true
                    style="display: none;"
                    disabled=is_busy
                    on:change=on_select
                />
            </label>
        </div>
    }
}
