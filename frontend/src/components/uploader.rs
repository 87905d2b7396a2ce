//! The upload widget: owns the state and wires the panels to it.

use gloo_timers::callback::Timeout;
use gloo_timers::future::IntervalStream;
use leptos::*;
use web_sys::File;

use crate::services::{perform_upload, write_text, HttpTransport};
use crate::{
    BrowserWidget, ErrorPanel, FilePreview, Panel, ProgressPanel, SelectedFile, SuccessPanel,
    UploadArea, UploaderConfig, WidgetError, COPY_FEEDBACK_MS, PROGRESS_TICK_MS,
};

#[component]
pub fn FileUploader(
    /// Backend configuration; read from the page when omitted
    #[prop(optional)]
    config: Option<UploaderConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_else(UploaderConfig::from_document);
    let transport = HttpTransport::new(&config);
    log::info!("Upload endpoint: {}", transport.endpoint());

    let widget = create_rw_signal(BrowserWidget::new());
    let is_panel = move |panel: Panel| move || widget.with(|w| w.panel() == panel);

    let on_select = Callback::new(move |file: File| {
        widget.update(|w| {
            // rejections are logged and shown by the widget itself
            let _ = w.select_file(SelectedFile::from_web_file(file));
        });
    });

    let on_upload = Callback::new(move |_: ()| {
        let Some(ticket) = widget.try_update(|w| w.confirm_upload()).flatten() else {
            return;
        };
        let transport = transport.clone();

        spawn_local(async move {
            let ticks = Box::pin(IntervalStream::new(PROGRESS_TICK_MS));
            let outcome = perform_upload(&transport, &ticket, ticks, || {
                widget
                    .try_update(|w| w.tick_progress(ticket.id))
                    .unwrap_or(false)
            })
            .await;

            widget.try_update(|w| w.finish_upload(ticket.id, outcome));
        });
    });

    let on_cancel = Callback::new(move |_: ()| {
        widget.update(|w| {
            w.cancel();
        });
    });

    let on_reset = Callback::new(move |_: ()| widget.update(|w| w.reset()));

    let on_copy = Callback::new(move |_: ()| {
        let Some(text) = widget.with_untracked(|w| w.copy_result_url()) else {
            return;
        };

        spawn_local(async move {
            let outcome = write_text(&text).await.map_err(WidgetError::from);
            let Some(generation) = widget.try_update(|w| w.record_copy(outcome)).flatten() else {
                return;
            };

            // a later copy bumps the generation, so this revert becomes a no-op
            Timeout::new(COPY_FEEDBACK_MS, move || {
                widget.try_update(|w| w.clear_copy_feedback(generation));
            })
            .forget();
        });
    });

    let progress = Signal::derive(move || widget.with(|w| w.progress()));
    let error_message = Signal::derive(move || widget.with(|w| w.error_message().unwrap_or_default()));

    view! {
        <div class="uploader">
            <Show when=is_panel(Panel::Idle) fallback=|| view! { }>
                <UploadArea on_select=on_select/>
            </Show>

            <Show when=is_panel(Panel::Previewing) fallback=|| view! { }>
                <FilePreview widget=widget on_upload=on_upload on_cancel=on_cancel/>
            </Show>

            <Show when=is_panel(Panel::Uploading) fallback=|| view! { }>
                <ProgressPanel progress=progress/>
            </Show>

            <Show when=is_panel(Panel::Success) fallback=|| view! { }>
                <SuccessPanel widget=widget on_copy=on_copy on_reset=on_reset/>
            </Show>

            <Show when=is_panel(Panel::Error) fallback=|| view! { }>
                <ErrorPanel message=error_message on_reset=on_reset/>
            </Show>
        </div>
    }
}
