use crate::models::invoice::Customer;
use crate::services::api::fetch_customers;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Clone, PartialEq, Debug)]
pub enum CustomersState {
    Loading,
    Loaded(Rc<Vec<Customer>>),
    Error(String),
}

impl CustomersState {
    /// Returns the customers if they are loaded
    pub fn customers(&self) -> Option<&Rc<Vec<Customer>>> {
        match self {
            CustomersState::Loaded(customers) => Some(customers),
            _ => None,
        }
    }
}

/// One-shot customer fetch for the dashboard's filter dropdown. A failure
/// is logged and leaves the dropdown with its placeholder option only; the
/// view stays usable either way.
#[hook]
pub fn use_customers() -> UseStateHandle<CustomersState> {
    let state = use_state(|| CustomersState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let aborted = Rc::new(Cell::new(false));
            let aborted_check = aborted.clone();

            spawn_local(async move {
                match fetch_customers().await {
                    Ok(customers) if !aborted_check.get() => {
                        state.set(CustomersState::Loaded(Rc::new(customers)));
                    }
                    Err(e) if !aborted_check.get() => {
                        gloo::console::error!(format!("Erro ao buscar clientes: {e}"));
                        state.set(CustomersState::Error(e.to_string()));
                    }
                    _ => {} // unmounted before the response arrived
                }
            });

            move || {
                aborted.set(true);
            }
        });
    }

    state
}
