use web_sys::File;
use yew::prelude::*;

use crate::services::api::ApiConfig;
use crate::services::upload::{upload_invoices, validate_file_count};

/// Shown when an upload fails after leaving the browser.
pub const MSG_UPLOAD_FAILED: &str = "Erro ao fazer o upload. Por favor, tente novamente.";

/// Shown when a batch has been accepted by the backend.
pub const MSG_UPLOAD_SUCCEEDED: &str = "Upload concluído com sucesso!";

/// Lifecycle of one upload interaction. Validation failures land in
/// `Failed` without a request ever being issued.
#[derive(Clone, PartialEq, Debug)]
pub enum UploadState {
    Idle,
    Uploading(u32),
    Succeeded,
    Failed(String),
}

impl UploadState {
    /// Returns true while a batch is in flight
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading(_))
    }

    /// Returns the progress percentage while uploading
    pub fn progress(&self) -> Option<u32> {
        match self {
            UploadState::Uploading(percent) => Some(*percent),
            _ => None,
        }
    }
}

/// Handle returned by `use_upload`
#[derive(Clone, PartialEq)]
pub struct UploadHandle {
    pub state: UploadState,
    pub start: Callback<Vec<File>>,
}

/// Drives one upload batch at a time: validates the selection, then streams
/// progress events into `Uploading(percent)` until the terminal outcome.
/// There is no cancellation and no retry; a new `start` simply begins a new
/// interaction.
#[hook]
pub fn use_upload() -> UploadHandle {
    let state = use_state(|| UploadState::Idle);

    let start = {
        let state = state.clone();

        Callback::from(move |files: Vec<File>| {
            if let Err(e) = validate_file_count(files.len()) {
                state.set(UploadState::Failed(e.to_string()));
                return;
            }

            state.set(UploadState::Uploading(0));

            let on_progress = {
                let state = state.clone();
                move |percent| state.set(UploadState::Uploading(percent))
            };

            let on_done = {
                let state = state.clone();
                move |result| match result {
                    Ok(()) => state.set(UploadState::Succeeded),
                    Err(e) => {
                        gloo::console::error!(format!("Erro ao fazer o upload: {e}"));
                        state.set(UploadState::Failed(MSG_UPLOAD_FAILED.to_string()));
                    }
                }
            };

            if let Err(e) =
                upload_invoices(&ApiConfig::default(), &files, on_progress, on_done)
            {
                gloo::console::error!(format!("Erro ao fazer o upload: {e}"));
                state.set(UploadState::Failed(MSG_UPLOAD_FAILED.to_string()));
            }
        })
    };

    UploadHandle {
        state: (*state).clone(),
        start,
    }
}
