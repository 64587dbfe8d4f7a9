use contracts::shared::table::{RowId, SelectionSet};
use leptos::prelude::*;
use thaw::*;

/// Чекбокс выбора строки. Клик не всплывает до строки (она открывает форму).
#[component]
pub fn TableCellCheckbox(
    row_id: RowId,

    #[prop(into)]
    selection: Signal<SelectionSet>,

    /// (id, checked)
    on_change: Callback<(RowId, bool)>,
) -> impl IntoView {
    let id_for_checked = row_id.clone();

    view! {
        <TableCell class="fixed-checkbox-column" on:click=|e| e.stop_propagation()>
            <input
                type="checkbox"
                class="table__checkbox"
                prop:checked=move || selection.with(|s| s.contains(&id_for_checked))
                on:change=move |ev| {
                    let checked = event_target_checked(&ev);
                    on_change.run((row_id.clone(), checked));
                }
            />
        </TableCell>
    }
}
