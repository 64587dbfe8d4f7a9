//! Чекбокс "выбрать всю страницу" в заголовке таблицы
//!
//! Отмечен, когда выбор совпадает ровно с видимой страницей. Если выбрана
//! только часть страницы или строки других страниц, показывается
//! промежуточное состояние.

use contracts::shared::table::{RowId, SelectionSet};
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen::JsCast;

#[component]
pub fn TableHeaderCheckbox(
    /// Идентификаторы строк текущей страницы
    #[prop(into)]
    visible_ids: Signal<Vec<RowId>>,

    #[prop(into)]
    selection: Signal<SelectionSet>,

    /// Переключение выбора страницы
    on_toggle: Callback<()>,
) -> impl IntoView {
    let checkbox_state = Signal::derive(move || {
        selection.with(|sel| {
            visible_ids.with(|ids| {
                if sel.is_empty() || ids.is_empty() {
                    CheckboxState::Unchecked
                } else if sel.equals_visible(ids.iter()) {
                    CheckboxState::Checked
                } else {
                    CheckboxState::Indeterminate
                }
            })
        })
    });

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate есть только у DOM-свойства, атрибута нет
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state == CheckboxState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell resizable=false class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                title="Выбрать страницу"
                disabled=move || visible_ids.with(Vec::is_empty)
                prop:checked=move || checkbox_state.get() == CheckboxState::Checked
                on:change=move |_| on_toggle.run(())
            />
        </TableHeaderCell>
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}
