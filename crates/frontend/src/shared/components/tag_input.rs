use crate::shared::icons::icon;
use leptos::prelude::*;

/// Ввод списка значений (размеры, подкатегории, теги).
///
/// Enter или запятая добавляют значение. Проверка на пустые значения и
/// повторы делается в `TagList`.
#[component]
pub fn TagInput(
    #[prop(into)]
    values: Signal<Vec<String>>,
    /// Введённый текст; может содержать несколько значений через запятую
    on_add: Callback<String>,
    on_remove: Callback<usize>,
    #[prop(optional, into)]
    placeholder: String,
    #[prop(optional, into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let commit = move || {
        let text = draft.get_untracked();
        if !text.trim().is_empty() {
            on_add.run(text);
        }
        draft.set(String::new());
    };

    view! {
        <div class="tag-input">
            <div class="tag-input__tags">
                <For
                    each={move || values.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(idx, value)| format!("{}-{}", idx, value)
                    children=move |(idx, value)| view! {
                        <span class="filter-tag">
                            <span>{value}</span>
                            <span
                                class="filter-tag__remove"
                                title="Удалить"
                                on:click=move |_| {
                                    if !disabled.get_untracked() {
                                        on_remove.run(idx);
                                    }
                                }
                            >
                                {icon("x")}
                            </span>
                        </span>
                    }
                />
            </div>
            <input
                type="text"
                class="form__input tag-input__field"
                placeholder=placeholder
                disabled=move || disabled.get()
                prop:value=move || draft.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    if text.ends_with(',') {
                        draft.set(text);
                        commit();
                    } else {
                        draft.set(text);
                    }
                }
                on:keydown=move |ev| {
                    if ev.key() == "Enter" {
                        ev.prevent_default();
                        commit();
                    }
                }
                on:blur=move |_| commit()
            />
        </div>
    }
}
