//! Success panel: the resulting URL and the copy button.

use leptos::*;

use crate::{BrowserWidget, Panel};

#[component]
pub fn SuccessPanel(
    widget: RwSignal<BrowserWidget>,
    #[prop(into)] on_copy: Callback<()>,
    #[prop(into)] on_reset: Callback<()>,
) -> impl IntoView {
    let result_text = move || widget.with(|w| w.result_text().unwrap_or_default().to_string());
    let has_url = move || widget.with(|w| w.result_url().is_some());
    let copy_label = move || widget.with(|w| w.copy_feedback().label());

    view! {
        <div class="result-section" id=Panel::Success.element_id()>
            <div class="result-title">"✅ Upload complete"</div>
            <div class="result-url">
                <input type="text" id="fileUrl" readonly=true prop:value=result_text/>
                <Show
                    when=has_url
                    fallback=|| view! { }
                >
                    <button class="btn btn-secondary" id="copyBtn" on:click=move |_| on_copy.call(())>
                        {copy_label}
                    </button>
                </Show>
            </div>
            <button class="btn btn-primary" on:click=move |_| on_reset.call(())>
                "Upload another file"
            </button>
        </div>
    }
}
