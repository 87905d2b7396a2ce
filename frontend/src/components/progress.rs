use leptos::*;

use crate::{Panel, Progress};

#[component]
pub fn ProgressPanel(#[prop(into)] progress: Signal<Progress>) -> impl IntoView {
    view! {
        <div class="progress-section" id=Panel::Uploading.element_id()>
            <div class="progress-bar">
                <div class="progress-fill" id="progressFill" style=move || progress.get().css_width()></div>
            </div>
            <div class="progress-text">"Uploading... " {move || progress.get().percent()} "%"</div>
        </div>
    }
}
