//! Simple Uploader - Frontend Rust/Leptos Application
//!
//! A WebAssembly widget that lets the user pick a file, checks it in the
//! browser, previews it and posts it to `{API_BASE}/upload`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  FileUploader (RwSignal<UploadWidget<File>>)                 │
//! │  ├── UploadArea     (Idle)                                   │
//! │  ├── FilePreview    (Previewing)                             │
//! │  ├── ProgressPanel  (Uploading)                              │
//! │  ├── SuccessPanel   (Success)                                │
//! │  └── ErrorPanel     (Error)                                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Limits, timings and the backend base path
//! - [`types`] - Common types (SelectedFile, Panel, errors, API bodies)
//! - [`widget`] - Browser-independent state machine
//! - [`components`] - UI components
//! - [`services`] - Backend upload and clipboard

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod widget;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    SelectedFile,
    // Panels
    Panel, CopyFeedback,
    // API
    UploadResponse, ErrorResponse,
    // Errors
    UploadError, UploadResult, WidgetError, WidgetResult,
};

// State machine
pub use widget::{Progress, UploadState, UploadTicket, UploadWidget};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    view! {
        <div class="container">
            <div class="hero">
                <h1>"📤 " {APP_NAME}</h1>
                <p class="subtitle">"Upload an image, a PDF or a text file and get a shareable link."</p>
            </div>

            <FileUploader/>
        </div>
    }
}
