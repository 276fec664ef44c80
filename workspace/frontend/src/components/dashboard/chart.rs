use std::sync::Arc;

use nogops::ChartDataset;
use plotly::common::{Fill, Line, LineShape, Marker, Mode};
use plotly::Scatter;
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;
use yew::prelude::*;
use crate::theme;

const CHART_DIV_ID: &str = "sales-analytics-chart";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub dataset: Arc<ChartDataset>,
}

/// Line chart of the sales series. Re-plots only when the dataset changes.
#[function_component(SalesChart)]
pub fn sales_chart(props: &Props) -> Html {
    let container_ref = use_node_ref();

    use_effect_with((container_ref.clone(), props.dataset.clone()), move |(container_ref, dataset)| {
        if let Some(element) = container_ref.cast::<HtmlElement>() {
            element.set_id(CHART_DIV_ID);
            log::trace!("Plotting {} sales points", dataset.len());

            if let Err(e) = plot(CHART_DIV_ID, dataset) {
                log::error!("Failed to render sales chart: {:?}", e);
            }
        }
        || ()
    });

    html! {
        <div ref={container_ref} style="height: 260px;"></div>
    }
}

fn plot(div_id: &str, dataset: &ChartDataset) -> Result<(), JsValue> {
    let to_js = |value: serde_json::Value| js_sys::JSON::parse(&value.to_string());

    let trace = serde_json::to_value(sales_trace(dataset))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let data_js = js_sys::Array::new();
    data_js.push(&to_js(trace)?);

    newPlot(div_id, data_js.into(), to_js(sales_layout(dataset))?, to_js(plot_config())?);
    Ok(())
}

/// Points are placed at their index so repeated labels ("12:00 PM" twice)
/// stay separate points; the labels are drawn as tick text by the layout.
fn sales_trace(dataset: &ChartDataset) -> Box<Scatter<usize, f64>> {
    Scatter::new((0..dataset.len()).collect(), dataset.series.clone())
        .mode(Mode::LinesMarkers)
        .name("Sales")
        .fill(Fill::ToZeroY)
        .fill_color(theme::ACCENT_FILL)
        .line(Line::new().color(theme::ACCENT).width(2.0).shape(LineShape::Spline).smoothing(0.4))
        .marker(Marker::new().color(theme::ACCENT).size(6))
}

fn sales_layout(dataset: &ChartDataset) -> serde_json::Value {
    let tick_positions: Vec<usize> = (0..dataset.len()).collect();

    serde_json::json!({
        "margin": {"t": 10, "r": 10, "l": 40, "b": 30},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false,
        "hovermode": "x unified",
        "xaxis": {
            "tickmode": "array",
            "tickvals": tick_positions,
            "ticktext": dataset.labels,
            "showgrid": false,
            "tickfont": {"color": theme::MUTED_TEXT}
        },
        "yaxis": {
            "showgrid": true,
            "gridcolor": theme::GRID_LINE,
            "tickfont": {"color": theme::MUTED_TEXT}
        }
    })
}

fn plot_config() -> serde_json::Value {
    serde_json::json!({"responsive": true, "displayModeBar": false})
}
