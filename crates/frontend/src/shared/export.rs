//! Выгрузка таблицы в CSV (Excel) через скачивание Blob
//!
//! Содержимое файла собирает `TableState::export_csv` в contracts,
//! здесь только браузерная часть.

use contracts::shared::error::AdminError;
use contracts::shared::table::export::export_filename;
use contracts::shared::table::TableState;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Выгружает выбранные строки (или все отфильтрованные) и инициирует скачивание
pub fn export_table(state: &TableState) -> Result<(), AdminError> {
    let csv_content = state.export_csv()?;
    let filename = export_filename(&state.schema, chrono::Local::now().date_naive());

    let blob = create_csv_blob(&csv_content).map_err(AdminError::Export)?;
    download_blob(&blob, &filename).map_err(AdminError::Export)?;

    log::info!(
        "{}: exported {} rows to {}",
        state.schema.entity_name,
        state.export_rows().len(),
        filename
    );
    Ok(())
}

/// Создает Blob объект с CSV данными
fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Инициирует скачивание Blob через временную ссылку
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}
