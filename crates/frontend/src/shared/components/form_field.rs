use leptos::prelude::*;

/// Подпись, поле и сообщение об ошибке под ним
#[component]
pub fn FormField(
    #[prop(into)]
    label: String,
    #[prop(optional)]
    required: bool,
    /// Ошибка проверки поля
    #[prop(optional, into)]
    error: Signal<Option<String>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group" class:form__group--invalid=move || error.with(Option::is_some)>
            <label class="form__label">
                {label}
                {required.then(|| view! { <span class="form__required">" *"</span> })}
            </label>
            {children()}
            {move || error.get().map(|message| view! {
                <div class="form__error">{message}</div>
            })}
        </div>
    }
}
