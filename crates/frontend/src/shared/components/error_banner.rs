//! Баннер ошибки операции: текст `AdminError`, "Повторить" и "Скрыть"

use crate::shared::icons::icon;
use contracts::shared::error::AdminError;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn ErrorBanner(
    /// Текущая ошибка; `None` скрывает баннер
    #[prop(into)]
    error: Signal<Option<AdminError>>,
    /// Повтор операции. Показывается только для повторяемых ошибок.
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
    #[prop(optional)]
    on_dismiss: Option<Callback<()>>,
) -> impl IntoView {
    move || {
        error.get().map(|err| {
            let can_retry = err.is_retryable() && on_retry.is_some();
            view! {
                <div class="warning-box warning-box--error" role="alert">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">{err.to_string()}</span>
                    <div class="warning-box__actions">
                        {can_retry.then(|| view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                size=ButtonSize::Small
                                on_click=move |_| {
                                    if let Some(retry) = on_retry {
                                        retry.run(());
                                    }
                                }
                            >
                                {icon("refresh")}
                                " Повторить"
                            </Button>
                        })}
                        {on_dismiss.map(|dismiss| view! {
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| dismiss.run(())
                            >
                                {icon("x")}
                            </Button>
                        })}
                    </div>
                </div>
            }
        })
    }
}
