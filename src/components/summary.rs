use crate::models::dashboard::{DashboardSummary, format_brl, format_kwh};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub summary: Rc<DashboardSummary>,
}

/// The four aggregate metric cards at the top of the dashboard.
#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let summary = &props.summary;

    html! {
        <div class="summary-grid">
            <div class="summary-card">
                <h3>{"Total de Energia Consumida"}</h3>
                <p class="summary-value">{format_kwh(summary.total_energy_consumed)}</p>
            </div>
            <div class="summary-card">
                <h3>{"Total de Energia Compensada"}</h3>
                <p class="summary-value">{format_kwh(summary.total_energy_compensated)}</p>
            </div>
            <div class="summary-card">
                <h3>{"Valor Total Sem GD"}</h3>
                <p class="summary-value">{format_brl(summary.total_value_without_gd)}</p>
            </div>
            <div class="summary-card">
                <h3>{"Economia GD"}</h3>
                <p class="summary-value">{format_brl(summary.total_economy_gd)}</p>
            </div>
        </div>
    }
}
