//! Upload area: the file picker shown while the widget is idle.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::{Panel, ACCEPT_ATTRIBUTE};

#[component]
pub fn UploadArea(
    /// Called with the first picked file
    #[prop(into)]
    on_select: Callback<File>,
) -> impl IntoView {
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            on_select.call(file);
        }
        // Allow picking the same file again after a reset
        input.set_value("");
    };

    view! {
        <div class="upload-area" id=Panel::Idle.element_id()>
            <div class="upload-icon">"📁"</div>
            <div class="upload-text">"Choose a file to upload"</div>
            <div class="upload-hint">"JPG, PNG, GIF, PDF or TXT, up to 10MB"</div>

            <input
                type="file"
                id="fileInput"
                accept=ACCEPT_ATTRIBUTE
                style="display:none"
                on:change=on_file_change
            />

            <label for="fileInput" class="upload-button">
                "Select File"
            </label>
        </div>
    }
}
