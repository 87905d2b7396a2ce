use leptos::*;

use crate::Panel;

#[component]
pub fn ErrorPanel(
    #[prop(into)] message: Signal<String>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-section" id=Panel::Error.element_id()>
            <div class="error-message" id="errorMessage">"❌ " {move || message.get()}</div>
            <button class="btn btn-primary" on:click=move |_| on_reset.call(())>
                "Try again"
            </button>
        </div>
    }
}
