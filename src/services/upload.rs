use crate::config::Config;
use crate::models::error::AppError;
use crate::services::api::ApiConfig;
use gloo::events::EventListener;
use web_sys::wasm_bindgen::{JsCast, JsValue};
use web_sys::{File, FormData, ProgressEvent, XmlHttpRequest};

/// Shown when the user submits with no file selected.
pub const MSG_SELECT_AT_LEAST_ONE: &str =
    "Por favor, selecione pelo menos um arquivo para fazer o upload.";

/// Shown when the user submits more files than one batch allows.
pub const MSG_AT_MOST_TEN: &str = "Você só pode fazer o upload de até 10 arquivos por vez.";

/// Rejects empty and over-limit selections before any network activity.
pub fn validate_file_count(count: usize) -> Result<(), AppError> {
    if count == 0 {
        return Err(AppError::ValidationError(MSG_SELECT_AT_LEAST_ONE.to_string()));
    }
    if count > Config::MAX_UPLOAD_FILES {
        return Err(AppError::ValidationError(MSG_AT_MOST_TEN.to_string()));
    }
    Ok(())
}

/// Posts the selected files as one multipart batch (field `files`).
///
/// Goes through `XmlHttpRequest` rather than the crate's fetch client:
/// byte-level upload progress is only observable on XHR. `on_progress`
/// receives rounded percentages; `on_done` fires exactly once, after
/// success or failure. There is no cancellation: a started upload runs to
/// completion.
pub fn upload_invoices<P, D>(
    config: &ApiConfig,
    files: &[File],
    on_progress: P,
    on_done: D,
) -> Result<(), AppError>
where
    P: Fn(u32) + 'static,
    D: FnOnce(Result<(), AppError>) + 'static,
{
    let form = FormData::new().map_err(|e| js_error("Failed to create form data", &e))?;
    for file in files {
        form.append_with_blob("files", file)
            .map_err(|e| js_error("Failed to append file", &e))?;
    }

    let xhr = XmlHttpRequest::new().map_err(|e| js_error("Failed to create request", &e))?;
    xhr.open("POST", &config.upload_url())
        .map_err(|e| js_error("Failed to open request", &e))?;

    let upload_target = xhr
        .upload()
        .map_err(|e| js_error("Upload progress target unavailable", &e))?;

    let progress_listener = EventListener::new(&upload_target, "progress", move |event| {
        let event: &ProgressEvent = event.unchecked_ref();
        let total = if event.total() > 0.0 { event.total() } else { 1.0 };
        let percent = ((event.loaded() * 100.0) / total).round() as u32;
        on_progress(percent.min(100));
    });

    // "loadend" fires after both success and failure; moving the progress
    // listener in keeps it alive exactly as long as the transfer.
    let xhr_done = xhr.clone();
    EventListener::once(&xhr, "loadend", move |_| {
        let _progress = progress_listener;
        on_done(completion_result(&xhr_done));
    })
    .forget();

    xhr.send_with_opt_form_data(Some(&form))
        .map_err(|e| js_error("Failed to send request", &e))
}

/// Maps the terminal XHR status to the operation outcome. Status 0 means
/// the transfer never reached the server.
fn completion_result(xhr: &XmlHttpRequest) -> Result<(), AppError> {
    match xhr.status() {
        Ok(status) if (200..300).contains(&status) => Ok(()),
        Ok(0) => Err(AppError::ApiError("Network error: upload failed".to_string())),
        Ok(status) => Err(AppError::ApiError(format!("Upload rejected with status {status}"))),
        Err(e) => Err(js_error("Failed to read upload status", &e)),
    }
}

fn js_error(context: &str, value: &JsValue) -> AppError {
    AppError::ApiError(format!("{context}: {value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_selection_rejected() {
        let err = validate_file_count(0).unwrap_err();
        assert_eq!(err.to_string(), MSG_SELECT_AT_LEAST_ONE);
    }

    #[test]
    fn test_over_limit_selection_rejected() {
        let err = validate_file_count(11).unwrap_err();
        assert_eq!(err.to_string(), MSG_AT_MOST_TEN);
    }

    #[test]
    fn test_valid_counts_accepted() {
        assert!(validate_file_count(1).is_ok());
        assert!(validate_file_count(Config::MAX_UPLOAD_FILES).is_ok());
    }
}
