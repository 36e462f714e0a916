use std::rc::Rc;
use yew::prelude::*;

use crate::models::invoice::Invoice;
use crate::services::api::{InvoiceFilter, fetch_invoices};
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum InvoicesState {
    Loading,
    Loaded(Rc<Vec<Invoice>>),
    Error(String),
}

impl InvoicesState {
    /// Returns true while a search is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, InvoicesState::Loading)
    }

    /// Returns the rows if a search has completed
    pub fn invoices(&self) -> Option<&Rc<Vec<Invoice>>> {
        match self {
            InvoicesState::Loaded(invoices) => Some(invoices),
            _ => None,
        }
    }
}

/// Handle returned by `use_invoices`
#[derive(Clone, PartialEq)]
pub struct InvoicesHandle {
    pub state: InvoicesState,
    pub search: Callback<InvoiceFilter>,
}

/// Invoice library queries with a stale-response guard.
///
/// Every dispatched search bumps a generation counter and stamps its future
/// with the value at dispatch time; a response is applied only when its
/// stamp still matches, so a slow superseded request can never overwrite a
/// newer result. Mount triggers one search with the default filter.
#[hook]
pub fn use_invoices() -> InvoicesHandle {
    let state = use_state(|| InvoicesState::Loading);
    let generation = use_mut_ref(|| 0u32);

    let search = {
        let state = state.clone();
        let generation = generation.clone();

        Callback::from(move |filter: InvoiceFilter| {
            let token = {
                let mut generation = generation.borrow_mut();
                *generation += 1;
                *generation
            };
            state.set(InvoicesState::Loading);

            let state = state.clone();
            let generation = generation.clone();
            spawn_local(async move {
                let result = fetch_invoices(&filter).await;
                if *generation.borrow() != token {
                    return; // superseded by a newer search
                }

                match result {
                    Ok(invoices) => state.set(InvoicesState::Loaded(Rc::new(invoices))),
                    Err(e) => {
                        gloo::console::error!(format!("Erro ao buscar faturas: {e}"));
                        state.set(InvoicesState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    {
        let search = search.clone();
        use_effect_with((), move |_| {
            search.emit(InvoiceFilter::default());
            || ()
        });
    }

    InvoicesHandle {
        state: (*state).clone(),
        search,
    }
}
