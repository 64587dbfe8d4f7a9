//! Таблица сущности по `TableSchema`: заголовки с сортировкой, выбор строк,
//! видимая страница из `TableState`, фильтры по колонкам.
//!
//! Состояние таблицы живёт в `RwSignal<TableState>` страницы списка и
//! уничтожается вместе с ней.

use super::filter_panel::FilterTag;
use super::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use contracts::shared::metadata::{ColumnMeta, FieldKind, FilterWidget};
use contracts::shared::table::{FieldValue, FilterValue, Row, RowId, TableState};
use chrono::{DateTime, NaiveDate, Utc};
use leptos::prelude::*;
use std::collections::BTreeSet;
use thaw::*;

/// Различные значения колонки для фильтра-списка (теги раскрываются)
pub fn distinct_values(rows: &[Row], field: &str) -> Vec<String> {
    let mut values = BTreeSet::new();
    for row in rows {
        match row.get(field) {
            Some(FieldValue::Tags(tags)) => {
                values.extend(tags.iter().filter(|t| !t.trim().is_empty()).cloned());
            }
            Some(value) if !value.is_null() => {
                values.insert(value.display());
            }
            _ => {}
        }
    }
    values.into_iter().collect()
}

/// Граница числового диапазона; пустая или нечисловая строка - без границы
pub fn parse_range_bound(input: &str) -> Option<f64> {
    input.trim().replace(',', ".").parse().ok()
}

/// Значение `<input type="date">` (YYYY-MM-DD) как начало дня UTC
pub fn parse_date_input(input: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
}

/// Текст ячейки: даты коротко, остальное как в экспорте
fn cell_text(kind: FieldKind, value: Option<&FieldValue>) -> String {
    match (kind, value) {
        (_, None) => String::new(),
        (FieldKind::Date, Some(FieldValue::Date(d))) => d.format("%d.%m.%Y").to_string(),
        (_, Some(v)) => v.display(),
    }
}

#[component]
pub fn DataTable(
    state: RwSignal<TableState>,
    /// Открытие записи по ссылке в первой колонке
    #[prop(optional)]
    on_row_click: Option<Callback<RowId>>,
    #[prop(optional, default = true)]
    selectable: bool,
) -> impl IntoView {
    let schema = state.with_untracked(|s| s.schema);
    let columns: Vec<&'static ColumnMeta> = schema.list_columns().collect();
    let column_count = columns.len() + usize::from(selectable);

    let page = Memo::new(move |_| state.with(|s| s.visible()));
    let visible_ids = Signal::derive(move || page.with(|p| p.rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>()));
    let selection = Signal::derive(move || state.with(|s| s.selection.clone()));
    let current_sort = Signal::derive(move || state.with(|s| s.sort.clone()));

    let on_sort = Callback::new(move |field: String| state.update(|s| s.toggle_sort(&field)));
    let on_toggle_page = Callback::new(move |_| state.update(|s| s.toggle_all_on_page()));
    let on_row_check = Callback::new(move |(id, checked): (RowId, bool)| {
        state.update(|s| s.set_selected(id, checked))
    });

    let header_columns = columns.clone();
    let body_columns = columns;

    view! {
        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        {selectable.then(|| view! {
                            <TableHeaderCheckbox
                                visible_ids=visible_ids
                                selection=selection
                                on_toggle=on_toggle_page
                            />
                        })}
                        {header_columns.into_iter().map(|column| {
                            let min_width = column.column_width.map(f64::from).unwrap_or(100.0);
                            if column.sortable {
                                view! {
                                    <SortableHeaderCell
                                        label=column.label
                                        sort_field=column.field
                                        current_sort=current_sort
                                        on_sort=on_sort
                                        min_width=min_width
                                        align=column.kind.align()
                                    />
                                }.into_any()
                            } else {
                                view! {
                                    <TableHeaderCell resizable=false min_width=min_width>
                                        {column.label}
                                    </TableHeaderCell>
                                }.into_any()
                            }
                        }).collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <Show when=move || page.with(|p| p.rows.is_empty())>
                        <TableRow>
                            <TableCell attr:colspan=column_count.to_string()>
                                <div class="table__empty">
                                    {move || if state.with(|s| s.is_loaded) { "Нет данных" } else { "Загрузка..." }}
                                </div>
                            </TableCell>
                        </TableRow>
                    </Show>
                    <For
                        each=move || page.get().rows
                        key=|row| (row.id.clone(), row.updated_at)
                        children=move |row: Row| {
                            let row_id = row.id.clone();
                            let selected_id = row.id.clone();
                            let cells = body_columns.iter().enumerate().map(|(idx, column)| {
                                let value = row.get(column.field);
                                let content = match value {
                                    Some(FieldValue::Tags(tags)) => view! {
                                        <span class="table__tags">
                                            {tags.iter().map(|t| view! { <span class="badge">{t.clone()}</span> }).collect_view()}
                                        </span>
                                    }.into_any(),
                                    _ => {
                                        let text = cell_text(column.kind, value);
                                        // первая колонка открывает форму редактирования
                                        match on_row_click.filter(|_| idx == 0) {
                                            Some(open) => {
                                                let id = row.id.clone();
                                                view! {
                                                    <TableCellLayout truncate=true>
                                                        <a
                                                            href="#"
                                                            class="table__link"
                                                            on:click=move |e| {
                                                                e.prevent_default();
                                                                open.run(id.clone());
                                                            }
                                                        >
                                                            {text}
                                                        </a>
                                                    </TableCellLayout>
                                                }.into_any()
                                            }
                                            None => view! {
                                                <TableCellLayout truncate=true>{text}</TableCellLayout>
                                            }.into_any(),
                                        }
                                    }
                                };
                                view! {
                                    <TableCell attr:style=format!("text-align: {};", column.kind.align())>
                                        {content}
                                    </TableCell>
                                }
                            }).collect_view();

                            view! {
                                <TableRow class:table__row--selected=move || selection.with(|s| s.contains(&selected_id))>
                                    {selectable.then(|| view! {
                                        <TableCellCheckbox
                                            row_id=row_id.clone()
                                            selection=selection
                                            on_change=on_row_check
                                        />
                                    })}
                                    {cells}
                                </TableRow>
                            }
                        }
                    />
                </TableBody>
            </Table>
        </div>
    }
}

/// Виджеты фильтров по колонкам схемы (`FilterWidget` колонки)
#[component]
pub fn ColumnFilters(state: RwSignal<TableState>) -> impl IntoView {
    let schema = state.with_untracked(|s| s.schema);
    let columns: Vec<&'static ColumnMeta> = schema
        .columns
        .iter()
        .filter(|c| c.filter != FilterWidget::None && c.visible_in_list)
        .collect();

    view! {
        <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
            {columns.into_iter().map(|column| {
                let widget = match column.filter {
                    FilterWidget::Text => text_filter(state, column).into_any(),
                    FilterWidget::Select => select_filter(state, column).into_any(),
                    FilterWidget::Range => range_filter(state, column).into_any(),
                    FilterWidget::DateFrom => date_filter(state, column).into_any(),
                    FilterWidget::None => ().into_any(),
                };
                view! {
                    <div class="form__group filter-panel__field">
                        <label class="form__label">{column.label}</label>
                        {widget}
                    </div>
                }
            }).collect_view()}
        </Flex>
    }
}

fn current_text(state: RwSignal<TableState>, field: &'static str) -> String {
    state.with(|s| match s.filters.get(field) {
        Some(FilterValue::Substring(v)) | Some(FilterValue::Exact(v)) => v.clone(),
        _ => String::new(),
    })
}

fn set_or_remove(state: RwSignal<TableState>, field: &'static str, value: FilterValue) {
    state.update(|s| {
        if value.is_empty() {
            s.remove_filter(field);
        } else {
            s.set_filter(field, value);
        }
    });
}

fn text_filter(state: RwSignal<TableState>, column: &'static ColumnMeta) -> impl IntoView {
    let field = column.field;
    view! {
        <input
            type="text"
            class="form__input"
            placeholder="Содержит..."
            prop:value=move || current_text(state, field)
            on:change=move |ev| set_or_remove(state, field, FilterValue::Substring(event_target_value(&ev)))
        />
    }
}

fn select_filter(state: RwSignal<TableState>, column: &'static ColumnMeta) -> impl IntoView {
    let field = column.field;
    let options = Memo::new(move |_| state.with(|s| distinct_values(s.rows(), field)));
    view! {
        <select
            class="form__select"
            prop:value=move || current_text(state, field)
            on:change=move |ev| set_or_remove(state, field, FilterValue::Exact(event_target_value(&ev)))
        >
            <option value="">"Все"</option>
            <For
                each=move || options.get()
                key=|value| value.clone()
                children=move |value: String| {
                    let selected_value = value.clone();
                    let option_value = value.clone();
                    view! {
                        <option
                            value=option_value
                            selected=move || current_text(state, field) == selected_value
                        >
                            {value}
                        </option>
                    }
                }
            />
        </select>
    }
}

fn range_filter(state: RwSignal<TableState>, column: &'static ColumnMeta) -> impl IntoView {
    let field = column.field;
    let bounds = move || {
        state.with(|s| match s.filters.get(field) {
            Some(FilterValue::Range { min, max }) => (*min, *max),
            _ => (None, None),
        })
    };
    let show = |v: Option<f64>| v.map(|n| n.to_string()).unwrap_or_default();

    view! {
        <div class="filter-panel__range">
            <input
                type="number"
                class="form__input"
                placeholder="от"
                prop:value=move || show(bounds().0)
                on:change=move |ev| {
                    let (_, max) = bounds();
                    let min = parse_range_bound(&event_target_value(&ev));
                    set_or_remove(state, field, FilterValue::Range { min, max });
                }
            />
            <input
                type="number"
                class="form__input"
                placeholder="до"
                prop:value=move || show(bounds().1)
                on:change=move |ev| {
                    let (min, _) = bounds();
                    let max = parse_range_bound(&event_target_value(&ev));
                    set_or_remove(state, field, FilterValue::Range { min, max });
                }
            />
        </div>
    }
}

fn date_filter(state: RwSignal<TableState>, column: &'static ColumnMeta) -> impl IntoView {
    let field = column.field;
    let current = move || {
        state.with(|s| match s.filters.get(field) {
            Some(FilterValue::DateFrom(d)) => d.format("%Y-%m-%d").to_string(),
            _ => String::new(),
        })
    };

    view! {
        <input
            type="date"
            class="form__input"
            prop:value=current
            on:change=move |ev| match parse_date_input(&event_target_value(&ev)) {
                Some(from) => state.update(|s| s.set_filter(field, FilterValue::DateFrom(from))),
                None => state.update(|s| s.remove_filter(field)),
            }
        />
    }
}

/// Чипы активных фильтров с подписью колонки
#[component]
pub fn ActiveFilterTags(state: RwSignal<TableState>) -> impl IntoView {
    let tags = move || {
        state.with(|s| {
            s.filters
                .iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(field, value)| {
                    let label = s
                        .schema
                        .column(field)
                        .map(|c| c.label)
                        .unwrap_or(field.as_str());
                    (field.clone(), format!("{}: {}", label, value.label()))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="filter-tags">
            <For
                each=tags
                key=|(field, label)| (field.clone(), label.clone())
                children=move |(field, label)| view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| state.update(|s| s.remove_filter(&field)))
                    />
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_values_expands_tags() {
        let rows = vec![
            Row::new("1")
                .with("status", FieldValue::text("active"))
                .with("tags", FieldValue::Tags(vec!["b".into(), "a".into()])),
            Row::new("2")
                .with("status", FieldValue::text("draft"))
                .with("tags", FieldValue::Tags(vec!["a".into()])),
            Row::new("3").with("status", FieldValue::Null),
        ];
        assert_eq!(distinct_values(&rows, "status"), vec!["active", "draft"]);
        assert_eq!(distinct_values(&rows, "tags"), vec!["a", "b"]);
        assert!(distinct_values(&rows, "missing").is_empty());
    }

    #[test]
    fn test_parse_inputs() {
        assert_eq!(parse_range_bound(" 12,5 "), Some(12.5));
        assert_eq!(parse_range_bound(""), None);
        assert_eq!(parse_range_bound("abc"), None);

        let d = parse_date_input("2024-03-01").unwrap();
        assert_eq!(d.format("%Y-%m-%dT%H:%M").to_string(), "2024-03-01T00:00");
        assert!(parse_date_input("01.03.2024").is_none());
    }

    #[test]
    fn test_cell_text_formats_dates_short() {
        let date = parse_date_input("2024-03-01").map(FieldValue::Date).unwrap();
        assert_eq!(cell_text(FieldKind::Date, Some(&date)), "01.03.2024");
        assert_eq!(cell_text(FieldKind::Text, None), "");
        assert_eq!(cell_text(FieldKind::Number, Some(&FieldValue::Number(3.0))), "3");
    }
}
