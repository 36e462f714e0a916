use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::hooks::use_invoices::{InvoicesState, use_invoices};
use crate::models::error::AppError;
use crate::models::invoice::Invoice;
use crate::models::period::{DEFAULT_YEAR, Month, ReferencePeriod, YEARS};
use crate::services::api::{InvoiceFilter, download_invoice};
use crate::utils::download::{invoice_file_name, save_pdf};

const MSG_SEARCH_FAILED: &str = "Erro ao buscar faturas. Tente novamente.";
const MSG_DOWNLOAD_FAILED: &str = "Erro ao baixar a fatura. Tente novamente.";
const MSG_NO_INVOICES: &str = "Nenhuma fatura encontrada para os critérios informados.";

/// Invoice library page: filter by client number, year and optional month,
/// list the matches, download any row as PDF.
#[function_component(InvoicePage)]
pub fn invoice_page() -> Html {
    let client_number = use_state(String::new);
    let year = use_state(|| DEFAULT_YEAR.to_string());
    let month = use_state(|| Option::<Month>::None);
    let download_error = use_state(|| Option::<String>::None);
    let invoices = use_invoices();

    let on_client_input = {
        let client_number = client_number.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            client_number.set(input.value());
        })
    };

    let on_year_change = {
        let year = year.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            year.set(select.value());
        })
    };

    let on_month_change = {
        let month = month.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            // The empty "all months" option parses to None
            month.set(select.value().parse::<Month>().ok());
        })
    };

    let on_search = {
        let client_number = client_number.clone();
        let year = year.clone();
        let month = month.clone();
        let download_error = download_error.clone();
        let search = invoices.search.clone();
        Callback::from(move |_: MouseEvent| {
            download_error.set(None);
            search.emit(InvoiceFilter::new(
                (*client_number).clone(),
                ReferencePeriod::new((*year).clone(), *month),
            ));
        })
    };

    let on_download = {
        let download_error = download_error.clone();
        Callback::from(move |(client_number, reference_month): (String, String)| {
            let download_error = download_error.clone();
            spawn_local(async move {
                let result: Result<(), AppError> = async {
                    let bytes = download_invoice(&client_number, &reference_month).await?;
                    save_pdf(&bytes, &invoice_file_name(&client_number, &reference_month))
                }
                .await;

                if let Err(e) = result {
                    gloo::console::error!(format!("Erro ao baixar a fatura: {e}"));
                    download_error.set(Some(MSG_DOWNLOAD_FAILED.to_string()));
                }
            });
        })
    };

    let loading = invoices.state.is_loading();

    html! {
        <div class="page page-wide">
            <h2 class="page-title">{"Biblioteca de Faturas"}</h2>

            <div class="filter-row">
                <div class="form-group">
                    <label for="client-number">{"Número do Cliente"}</label>
                    <input
                        id="client-number"
                        type="text"
                        placeholder="Ex.: 1234567890"
                        value={(*client_number).clone()}
                        oninput={on_client_input}
                    />
                </div>

                <div class="form-group">
                    <label for="year-select">{"Selecionar Ano"}</label>
                    <select id="year-select" onchange={on_year_change}>
                        {
                            YEARS.iter().map(|item| html! {
                                <option value={*item} selected={**year == **item}>{*item}</option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="month-select">{"Selecionar Mês (opcional)"}</label>
                    <select id="month-select" onchange={on_month_change}>
                        <option value="" selected={month.is_none()}>{"Todos os Meses"}</option>
                        {
                            Month::all().iter().map(|item| html! {
                                <option value={item.code()} selected={*month == Some(*item)}>
                                    {item.code()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <button class="button primary" onclick={on_search} disabled={loading}>
                    if loading {
                        <span class="spinner small"></span>
                    } else {
                        {"Buscar Faturas"}
                    }
                </button>
            </div>

            if let Some(message) = &*download_error {
                <div class="alert danger">{message.clone()}</div>
            }

            { results(&invoices.state, &on_download) }
        </div>
    }
}

fn results(state: &InvoicesState, on_download: &Callback<(String, String)>) -> Html {
    match state {
        InvoicesState::Loading => html! {},
        InvoicesState::Error(_) => html! {
            <div class="alert danger">{MSG_SEARCH_FAILED}</div>
        },
        InvoicesState::Loaded(invoices) if invoices.is_empty() => html! {
            <div class="empty-message">
                <p>{MSG_NO_INVOICES}</p>
            </div>
        },
        InvoicesState::Loaded(invoices) => html! {
            <table class="invoice-table">
                <thead>
                    <tr>
                        <th>{"Número da UC"}</th>
                        <th>{"Distribuidora"}</th>
                        <th>{"Mês de Referência"}</th>
                        <th>{"Download da Fatura"}</th>
                    </tr>
                </thead>
                <tbody>
                    { invoices.iter().map(|invoice| row(invoice, on_download)).collect::<Html>() }
                </tbody>
            </table>
        },
    }
}

fn row(invoice: &Invoice, on_download: &Callback<(String, String)>) -> Html {
    let on_download = on_download.clone();
    let client_number = invoice.client_number.clone();
    let reference_month = invoice.reference_month.clone();
    let onclick = Callback::from(move |_: MouseEvent| {
        on_download.emit((client_number.clone(), reference_month.clone()));
    });

    html! {
        <tr key={invoice.id.to_string()}>
            <td>{&invoice.client_number}</td>
            <td>{&invoice.distributor}</td>
            <td>{&invoice.reference_month}</td>
            <td class="center">
                <button class="button link" title="Baixar PDF" {onclick}>{"PDF"}</button>
            </td>
        </tr>
    }
}
