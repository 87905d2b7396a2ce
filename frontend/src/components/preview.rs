//! File preview: name and size of the picked file, with upload/cancel.

use leptos::*;

use crate::{BrowserWidget, Panel};

#[component]
pub fn FilePreview(
    widget: RwSignal<BrowserWidget>,
    #[prop(into)] on_upload: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let file_name = move || {
        widget.with(|w| w.selected_file().map(|f| f.name.clone()).unwrap_or_default())
    };
    let file_size = move || {
        widget.with(|w| w.size_label().map(str::to_string).unwrap_or_default())
    };

    view! {
        <div class="file-preview" id=Panel::Previewing.element_id()>
            <div class="file-info">
                <div class="file-name" id="fileName">{file_name}</div>
                <div class="file-size" id="fileSize">{file_size}</div>
            </div>
            <div class="preview-actions">
                <button class="btn btn-primary" id="uploadBtn" on:click=move |_| on_upload.call(())>
                    "Upload"
                </button>
                <button class="btn btn-secondary" id="cancelBtn" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
            </div>
        </div>
    }
}
