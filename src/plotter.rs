use crate::advisor::ChartType;
use crate::error::AppError;
use crate::processing::PlotData;
use crate::session::{ChartBundle, ChartPayload, ChartView};
use maud::{html, PreEscaped, DOCTYPE};
use serde_json::{json, Value};

/// Generates a self-contained HTML file with an interactive ECharts chart.
///
/// Unchartable results get a page with the explanatory message instead.
pub fn generate_html_plot(plot_data: &PlotData) -> Result<String, AppError> {
    let bundle = match &plot_data.view {
        ChartView::Ready(bundle) => bundle,
        ChartView::Unavailable { message, .. } => {
            return Ok(message_page(&plot_data.title, message));
        }
    };

    let option = build_option(bundle, &plot_data.title, plot_data.animations);
    // A literal "</" inside the option would close the script element.
    let option_json = serde_json::to_string(&option)?.replace("</", "<\\/");

    let markup = html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (plot_data.title) }
                script src="https://cdn.jsdelivr.net/npm/echarts/dist/echarts.min.js" {}
            }
            body {
                div #main style="width: 100%; height: 90vh;" {}
                p #suggestion style="font-family: sans-serif; color: #555;" {
                    (bundle.suggestion_text)
                }
                script {
                    (PreEscaped(format!(
                        "var chart = echarts.init(document.getElementById('main'), 'light');\n\
                         chart.setOption({});\n\
                         window.addEventListener('resize', function () {{ chart.resize(); }});",
                        option_json
                    )))
                }
            }
        }
    };

    Ok(markup.into_string())
}

fn message_page(title: &str, message: &str) -> String {
    html! {
        (DOCTYPE)
        html {
            head {
                meta charset="utf-8";
                title { (title) }
            }
            body {
                p style="font-family: sans-serif; color: #555; padding: 1em;" { (message) }
            }
        }
    }
    .into_string()
}

/// Builds the ECharts option object for a chart bundle.
pub fn build_option(bundle: &ChartBundle, title: &str, animations: bool) -> Value {
    let label = json!({ "show": bundle.data_labels });
    let mut option = json!({
        "title": { "text": title },
        "animation": animations,
        "legend": { "type": "scroll", "top": 30 },
        "toolbox": { "feature": { "saveAsImage": {} } },
    });

    let body = match &bundle.payload {
        ChartPayload::Series(datasets) => {
            let kind = if bundle.chart_type == ChartType::Bar {
                "bar"
            } else {
                "line"
            };
            let series: Vec<Value> = datasets
                .iter()
                .map(|d| {
                    let mut s = json!({
                        "name": d.label,
                        "type": kind,
                        "data": d.data,
                        "label": label,
                        "itemStyle": { "color": d.background_color, "borderColor": d.border_color },
                        "lineStyle": { "color": d.border_color, "width": 2 },
                        "smooth": 0.25,
                    });
                    if d.fill {
                        s["areaStyle"] = json!({ "color": d.background_color });
                    }
                    s
                })
                .collect();
            json!({
                "tooltip": { "trigger": "axis" },
                "grid": { "left": "5%", "right": "5%", "bottom": "10%", "containLabel": true },
                "xAxis": { "type": "category", "name": bundle.x_column, "data": bundle.labels },
                "yAxis": { "type": "value" },
                "series": series,
            })
        }
        ChartPayload::Pie(slices) => {
            let radius = if bundle.chart_type == ChartType::Doughnut {
                json!(["40%", "70%"])
            } else {
                json!("70%")
            };
            let data: Vec<Value> = slices
                .iter()
                .map(|s| json!({ "name": s.label, "value": s.value, "itemStyle": { "color": s.color } }))
                .collect();
            json!({
                "tooltip": { "trigger": "item" },
                "series": [{
                    "name": bundle.y_columns.first(),
                    "type": "pie",
                    "radius": radius,
                    "data": data,
                    "label": { "show": bundle.data_labels, "formatter": "{b}: {c}" },
                }],
            })
        }
        ChartPayload::Scatter(points) => {
            let data: Vec<[f64; 2]> = points.iter().filter_map(|p| p.coordinates()).collect();
            json!({
                "tooltip": { "trigger": "item" },
                "grid": { "left": "5%", "right": "5%", "bottom": "10%", "containLabel": true },
                "xAxis": { "type": "value", "name": bundle.x_column, "splitLine": { "show": false } },
                "yAxis": { "type": "value", "axisLine": { "show": true } },
                "series": [{
                    "name": bundle.y_columns.first(),
                    "type": "scatter",
                    "symbolSize": 8,
                    "data": data,
                    "label": label,
                }],
            })
        }
    };

    if let (Some(target), Value::Object(extra)) = (option.as_object_mut(), body) {
        target.extend(extra);
    }
    option
}
