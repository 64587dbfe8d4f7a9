//! Загрузка настроек админки из localStorage
//!
//! Ключ `admin_config` хранит JSON `AdminConfig`. Отсутствие ключа или
//! ошибка разбора дают настройки по умолчанию.

use contracts::shared::config::AdminConfig;
use leptos::prelude::*;
use std::cell::OnceCell;
use web_sys::window;

const CONFIG_STORAGE_KEY: &str = "admin_config";

thread_local! {
    static CONFIG: OnceCell<AdminConfig> = const { OnceCell::new() };
}

/// Настройки приложения. Читаются из localStorage один раз.
pub fn load_config() -> AdminConfig {
    CONFIG.with(|cell| cell.get_or_init(read_config_from_storage).clone())
}

/// Настройки из контекста (в компонентах)
pub fn use_config() -> AdminConfig {
    use_context::<AdminConfig>().unwrap_or_else(load_config)
}

fn read_config_from_storage() -> AdminConfig {
    let raw = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(CONFIG_STORAGE_KEY).ok().flatten());

    match raw {
        None => AdminConfig::default(),
        Some(json) => match AdminConfig::from_json_str(&json) {
            Ok(config) => {
                log::info!("admin config loaded from localStorage: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                AdminConfig::default()
            }
        },
    }
}
