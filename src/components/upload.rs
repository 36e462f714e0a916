use web_sys::{File, HtmlInputElement};
use yew::prelude::*;

use crate::hooks::use_upload::{MSG_UPLOAD_SUCCEEDED, UploadState, use_upload};

/// Invoice upload page: pick up to 10 files, send them as one batch, watch
/// the progress bar. The selection deliberately stays visible after a
/// successful upload.
#[function_component(UploadPage)]
pub fn upload_page() -> Html {
    let selected = use_state(Vec::<File>::new);
    let upload = use_upload();

    let on_file_change = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut files = Vec::new();
            if let Some(list) = input.files() {
                for index in 0..list.length() {
                    if let Some(file) = list.item(index) {
                        files.push(file);
                    }
                }
            }
            // Each pick replaces the previous selection outright
            selected.set(files);
        })
    };

    let on_submit = {
        let selected = selected.clone();
        let start = upload.start.clone();
        Callback::from(move |_: MouseEvent| start.emit((*selected).clone()))
    };

    html! {
        <div class="page">
            <h2 class="page-title">{"Upload de Faturas"}</h2>

            <div class="form-group">
                <label for="invoice-files">{"Selecione até 10 arquivos para upload"}</label>
                <input id="invoice-files" type="file" multiple=true onchange={on_file_change} />
            </div>

            if !selected.is_empty() {
                <div class="file-list">
                    <strong>{"Arquivos Selecionados:"}</strong>
                    <ul>
                        {
                            selected.iter().map(|file| html! {
                                <li>{format!("{} ({:.2} KB)", file.name(), file.size() / 1024.0)}</li>
                            }).collect::<Html>()
                        }
                    </ul>
                </div>
            }

            <button
                class="button primary"
                onclick={on_submit}
                disabled={upload.state.is_uploading()}
            >
                { if upload.state.is_uploading() { "Enviando..." } else { "Fazer Upload" } }
            </button>

            if let Some(percent) = upload.state.progress() {
                <div class="progress">
                    <div class="progress-bar" style={format!("width: {percent}%")}>
                        {format!("{percent}%")}
                    </div>
                </div>
            }

            { feedback(&upload.state) }
        </div>
    }
}

fn feedback(state: &UploadState) -> Html {
    match state {
        UploadState::Failed(message) => html! {
            <div class="alert danger">{message}</div>
        },
        UploadState::Succeeded => html! {
            <div class="alert success">{MSG_UPLOAD_SUCCEEDED}</div>
        },
        _ => html! {},
    }
}
