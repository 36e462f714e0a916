use yew::prelude::*;

use crate::components::dashboard::DashboardPage;
use crate::components::invoices::InvoicePage;
use crate::components::nav::NavBar;
use crate::components::upload::UploadPage;

/// The three navigable pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    Upload,
    Invoices,
    #[default]
    Dashboard,
}

#[function_component(App)]
pub fn app() -> Html {
    let page = use_state(Page::default);

    let on_select = {
        let page = page.clone();
        Callback::from(move |selected| page.set(selected))
    };

    html! {
        <div class="app-container">
            <NavBar active={*page} {on_select} />

            <main class="app-main">
                {
                    match *page {
                        Page::Upload => html! { <UploadPage /> },
                        Page::Invoices => html! { <InvoicePage /> },
                        Page::Dashboard => html! { <DashboardPage /> },
                    }
                }
            </main>

            <style>
                {include_str!("../style.css")}
            </style>
        </div>
    }
}
