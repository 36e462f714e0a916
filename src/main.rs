use fatura_dashboard::components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
