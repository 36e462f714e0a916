use yew::prelude::*;

use crate::components::app::Page;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub active: Page,
    pub on_select: Callback<Page>,
}

const LINKS: &[(&str, Page)] = &[
    ("Upload de Faturas", Page::Upload),
    ("Biblioteca de Faturas", Page::Invoices),
    ("Dashboard", Page::Dashboard),
];

/// Persistent top bar. Pure navigation: the only thing it does is tell the
/// shell which page was clicked.
#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    let brand_click = {
        let on_select = props.on_select.clone();
        Callback::from(move |_| on_select.emit(Page::Dashboard))
    };

    html! {
        <nav class="navbar">
            <button class="navbar-brand" onclick={brand_click}>{"Sistema de Faturas"}</button>
            <ul class="navbar-links">
                {
                    LINKS.iter().map(|(label, page)| {
                        let on_select = props.on_select.clone();
                        let page = *page;
                        let class = classes!(
                            "nav-link",
                            (props.active == page).then_some("active"),
                        );
                        html! {
                            <li>
                                <button {class} onclick={Callback::from(move |_| on_select.emit(page))}>
                                    {*label}
                                </button>
                            </li>
                        }
                    }).collect::<Html>()
                }
            </ul>
        </nav>
    }
}
