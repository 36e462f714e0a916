use crate::models::error::AppError;
use web_sys::js_sys::{Array, Uint8Array};
use web_sys::wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// File name under which an invoice PDF is saved locally.
pub fn invoice_file_name(client_number: &str, reference_month: &str) -> String {
    format!("fatura_{client_number}_{reference_month}.pdf")
}

/// Hands downloaded PDF bytes to the browser's save action.
///
/// Wraps the bytes in a `Blob`, points a synthesized anchor at a temporary
/// object URL, clicks it, and revokes the URL as soon as the click has been
/// dispatched so repeated downloads don't accumulate handles.
pub fn save_pdf(bytes: &[u8], file_name: &str) -> Result<(), AppError> {
    let parts = Array::new();
    parts.push(&Uint8Array::from(bytes));

    let options = BlobPropertyBag::new();
    options.set_type("application/pdf");

    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| js_error("Failed to create blob", &e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| js_error("Failed to create object URL", &e))?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| AppError::DataError("Browser document unavailable".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| js_error("Failed to create anchor", &e))?
        .unchecked_into();

    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    let _ = Url::revoke_object_url(&url);
    Ok(())
}

fn js_error(context: &str, value: &JsValue) -> AppError {
    AppError::DataError(format!("{context}: {value:?}"))
}
