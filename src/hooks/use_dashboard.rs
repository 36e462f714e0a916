use std::rc::Rc;
use yew::prelude::*;

use crate::models::dashboard::DashboardSummary;
use crate::services::api::{InvoiceFilter, fetch_dashboard_summary};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum SummaryState {
    Loading,
    Loaded(Rc<DashboardSummary>),
    Error(String),
}

impl SummaryState {
    /// Returns the summary if it is loaded
    pub fn summary(&self) -> Option<&Rc<DashboardSummary>> {
        match self {
            SummaryState::Loaded(summary) => Some(summary),
            _ => None,
        }
    }
}

/// Handle returned by `use_dashboard_summary`
#[derive(Clone, PartialEq)]
pub struct DashboardHandle {
    pub state: SummaryState,
    pub apply: Callback<Option<InvoiceFilter>>,
}

/// Dashboard aggregate fetches. `None` asks for the unfiltered summary;
/// mount issues that request once. Re-applies share the same
/// generation-counter stale guard as the invoice library.
#[hook]
pub fn use_dashboard_summary() -> DashboardHandle {
    let state = use_state(|| SummaryState::Loading);
    let generation = use_mut_ref(|| 0u32);

    let apply = {
        let state = state.clone();
        let generation = generation.clone();

        Callback::from(move |filter: Option<InvoiceFilter>| {
            let token = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };

            let state = state.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = fetch_dashboard_summary(filter.as_ref()).await;
                if *generation.borrow() != token {
                    return; // superseded by a newer filter application
                }

                match result {
                    Ok(summary) => state.set(SummaryState::Loaded(Rc::new(summary))),
                    Err(e) => {
                        gloo::console::error!(format!("Erro ao buscar dados do dashboard: {e}"));
                        state.set(SummaryState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    {
        let apply = apply.clone();
        use_effect_with((), move |_| {
            apply.emit(None);
            || ()
        });
    }

    DashboardHandle {
        state: (*state).clone(),
        apply,
    }
}
