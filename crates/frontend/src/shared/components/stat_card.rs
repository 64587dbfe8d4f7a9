use crate::shared::icons::icon;
use leptos::prelude::*;

/// Карточка сводного показателя над таблицей
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Имя иконки для `icon()`
    #[prop(into)]
    icon_name: String,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{move || value.get()}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}
