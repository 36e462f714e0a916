use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::chart::ChartPanel;
use crate::components::summary::SummaryCards;
use crate::hooks::use_customers::use_customers;
use crate::hooks::use_dashboard::{SummaryState, use_dashboard_summary};
use crate::models::dashboard::ChartKind;
use crate::models::period::{DASHBOARD_YEARS, Month, ReferencePeriod};
use crate::services::api::InvoiceFilter;

const MSG_DASHBOARD_FAILED: &str = "Erro ao buscar dados do dashboard. Tente novamente.";

/// Dashboard page: aggregate cards and two chart panels over the filtered
/// invoice set. Customers and the unfiltered summary load independently on
/// mount; the chart kind is purely local state.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let client_number = use_state(String::new);
    let year = use_state(String::new);
    let month = use_state(|| Option::<Month>::None);
    let chart_kind = use_state(ChartKind::default);

    let customers = use_customers();
    let dashboard = use_dashboard_summary();

    let on_client_change = {
        let client_number = client_number.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            client_number.set(select.value());
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
            month.set(select.value().parse::<Month>().ok());
        })
    };

    let on_apply = {
        let client_number = client_number.clone();
        let year = year.clone();
        let month = month.clone();
        let apply = dashboard.apply.clone();
        Callback::from(move |_: MouseEvent| {
            apply.emit(Some(InvoiceFilter::new(
                (*client_number).clone(),
                ReferencePeriod::new((*year).clone(), *month),
            )));
        })
    };

    let on_kind_change = {
        let chart_kind = chart_kind.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = select.value().parse::<ChartKind>() {
                chart_kind.set(kind);
            }
        })
    };

    html! {
        <div class="page page-wide">
            <div class="filter-row">
                <div class="form-group">
                    <label for="dashboard-client">{"Cliente"}</label>
                    <select id="dashboard-client" onchange={on_client_change}>
                        <option value="" selected={client_number.is_empty()}>
                            {"Todos os Clientes"}
                        </option>
                        {
                            customers.customers().map(|customers| customers.iter().map(|customer| {
                                html! {
                                    <option
                                        value={customer.client_number.clone()}
                                        selected={*client_number == customer.client_number}
                                    >
                                        {customer.label()}
                                    </option>
                                }
                            }).collect::<Html>()).unwrap_or_default()
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="dashboard-year">{"Ano"}</label>
                    <select id="dashboard-year" onchange={on_year_change}>
                        <option value="" selected={year.is_empty()}>{"Selecione o Ano"}</option>
                        {
                            DASHBOARD_YEARS.iter().map(|item| html! {
                                <option value={*item} selected={**year == **item}>{*item}</option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <div class="form-group">
                    <label for="dashboard-month">{"Mês"}</label>
                    <select id="dashboard-month" onchange={on_month_change}>
                        <option value="" selected={month.is_none()}>{"Selecione o Mês"}</option>
                        {
                            Month::all().iter().map(|item| html! {
                                <option value={item.code()} selected={*month == Some(*item)}>
                                    {item.code()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>

                <button class="button primary" onclick={on_apply}>{"Aplicar Filtros"}</button>
            </div>

            <div class="filter-row">
                <div class="form-group">
                    <label for="chart-kind">{"Tipo de Gráfico"}</label>
                    <select id="chart-kind" onchange={on_kind_change}>
                        {
                            ChartKind::all().iter().map(|kind| html! {
                                <option value={kind.code()} selected={*chart_kind == *kind}>
                                    {kind.label()}
                                </option>
                            }).collect::<Html>()
                        }
                    </select>
                </div>
            </div>

            {
                match &dashboard.state {
                    SummaryState::Loading => html! {
                        <div class="status loading">
                            <div class="spinner"></div>
                            <p>{"Carregando..."}</p>
                        </div>
                    },
                    SummaryState::Error(_) => html! {
                        <div class="alert danger">{MSG_DASHBOARD_FAILED}</div>
                    },
                    SummaryState::Loaded(summary) => html! {
                        <>
                            <SummaryCards summary={summary.clone()} />

                            <div class="chart-row">
                                <div class="chart-card">
                                    <h3>{"Consumo de Energia Elétrica (kWh)"}</h3>
                                    <ChartPanel
                                        id="energy-chart"
                                        series={summary.energy_series()}
                                        kind={*chart_kind}
                                    />
                                </div>
                                <div class="chart-card">
                                    <h3>{"Resultados Financeiros (R$)"}</h3>
                                    <ChartPanel
                                        id="financial-chart"
                                        series={summary.financial_series()}
                                        kind={*chart_kind}
                                    />
                                </div>
                            </div>
                        </>
                    },
                }
            }
        </div>
    }
}
