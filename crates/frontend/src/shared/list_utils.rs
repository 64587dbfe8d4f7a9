//! Утилиты списков: индикатор сортировки и поле поиска с задержкой

use crate::shared::config::use_config;
use crate::shared::icons::icon;
use contracts::shared::table::sort::sort_indicator;
use contracts::shared::table::SortSpec;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Индикатор сортировки для заголовка: " ▲", " ▼" или " ⇅"
pub fn get_sort_indicator(current: Option<&SortSpec>, field: &str) -> &'static str {
    sort_indicator(current, field)
}

/// CSS-класс индикатора; активная колонка подсвечивается
pub fn get_sort_class(current: Option<&SortSpec>, field: &str) -> &'static str {
    match current {
        Some(spec) if spec.field == field => "table__sort-indicator table__sort-indicator--active",
        _ => "table__sort-indicator",
    }
}

/// Поле поиска с задержкой (`search_debounce_ms` из настроек) и кнопкой очистки.
///
/// Пустой запрос сразу снимает поиск, без задержки.
#[component]
pub fn SearchInput(
    /// Текущее значение поиска (для подсветки активного поля)
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Поиск...".to_string()
    } else {
        placeholder
    };
    let delay_ms = use_config().search_debounce_ms as i32;

    let (input_value, set_input_value) = signal(value.get_untracked());
    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.try_get_value().flatten() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.try_set_value(None);
        }
    };

    on_cleanup(cancel_pending);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        if new_value.trim().is_empty() {
            on_change.run(String::new());
            return;
        }

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        let closure = wasm_bindgen::closure::Closure::once(move || {
            debounce_timeout.try_set_value(None);
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            delay_ms,
        ) {
            Ok(timeout_id) => {
                closure.forget();
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let is_search_active = move || !value.get().trim().is_empty();

    let clear_search = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=is_search_active
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_search title="Очистить">
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table::SortDirection;

    #[test]
    fn test_sort_class_marks_active_column() {
        let spec = SortSpec::new("price", SortDirection::Descending);
        assert!(get_sort_class(Some(&spec), "price").ends_with("--active"));
        assert_eq!(get_sort_class(Some(&spec), "name"), "table__sort-indicator");
        assert_eq!(get_sort_class(None, "price"), "table__sort-indicator");
        assert_eq!(get_sort_indicator(Some(&spec), "price"), " ▼");
    }
}
