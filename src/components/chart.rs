use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, LineStyle, LineStyleType, SplitLine,
        Tooltip, Trigger,
    },
    renderer::WasmRenderer,
    series::{Bar, Line, Pie},
};
use gloo::events::EventListener;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::models::dashboard::{ChartKind, ChartSeries};

const AXIS_COLOR: &str = "#6b7280";
const GRID_COLOR: &str = "#e5e7eb";

#[derive(Properties, PartialEq)]
pub struct ChartPanelProps {
    /// DOM id the chart renders into; must be unique per panel
    pub id: AttrValue,
    pub series: ChartSeries,
    pub kind: ChartKind,
}

/// One chart panel. The same series re-renders under whichever kind is
/// selected; switching kinds never refetches, it only rebuilds the chart.
#[function_component(ChartPanel)]
pub fn chart_panel(props: &ChartPanelProps) -> Html {
    let container_ref = use_node_ref();

    {
        let deps = (
            props.series.clone(),
            props.kind,
            props.id.clone(),
            container_ref.clone(),
        );

        use_effect_with(deps, |(series, kind, id, container_ref)| {
            let listener = container_ref.cast::<HtmlElement>().map(|container| {
                render_chart(&container, id, series, *kind);

                let id = id.clone();
                let series = series.clone();
                let kind = *kind;
                EventListener::new(&web_sys::window().unwrap(), "resize", move |_| {
                    render_chart(&container, &id, &series, kind);
                })
            });

            move || drop(listener)
        });
    }

    html! {
        <div class="chart-container" ref={container_ref}>
            <div id={props.id.clone()} />
        </div>
    }
}

fn render_chart(container: &HtmlElement, id: &str, series: &ChartSeries, kind: ChartKind) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    let chart = build_chart(series, kind);
    if let Err(e) = WasmRenderer::new(width, height).render(id, &chart) {
        web_sys::console::error_1(&format!("Render error: {e:?}").into());
    }
}

fn build_chart(series: &ChartSeries, kind: ChartKind) -> CharmingChart {
    match kind {
        ChartKind::Pie => build_pie_chart(series),
        ChartKind::Bar | ChartKind::Line => build_axis_chart(series, kind),
    }
}

fn build_axis_chart(series: &ChartSeries, kind: ChartKind) -> CharmingChart {
    let chart = CharmingChart::new()
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("10%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.labels.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(series.name.clone())
                .axis_label(AxisLabel::new().color(AXIS_COLOR))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(GRID_COLOR)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        );

    match kind {
        ChartKind::Line => chart.series(Line::new().name(series.name.clone()).data(series.values.clone())),
        _ => chart.series(
            Bar::new()
                .name(series.name.clone())
                .data(series.values.clone())
                .bar_width("40%"),
        ),
    }
}

fn build_pie_chart(series: &ChartSeries) -> CharmingChart {
    let data: Vec<(f64, &str)> = series
        .values
        .iter()
        .zip(&series.labels)
        .map(|(value, label)| (*value, label.as_str()))
        .collect();

    CharmingChart::new()
        .tooltip(Tooltip::new().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0"))
        .series(Pie::new().name(series.name.clone()).radius("60%").data(data))
}
