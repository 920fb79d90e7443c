use crate::shared::charts::{
    axis_ticks, hover_band, monotone_path, series_points, x_at, y_at, PLOT_BOTTOM, PLOT_TOP,
};
use crate::shared::components::table::format_number_int;
use contracts::dashboards::d404_product_dashboard::{DailySales, DashboardConfig};
use leptos::prelude::*;

const Y_INTERVALS: usize = 4;

/// Tooltip lines for one day, in legend order
pub fn tooltip_rows(day: &DailySales) -> [(&'static str, String); 2] {
    [
        ("sales", format_number_int(day.sales)),
        ("orders", format_number_int(day.orders as f64)),
    ]
}

/// Weekly sales and orders as two lines on a shared axis
#[component]
pub fn SalesChart(daily: Vec<DailySales>) -> impl IntoView {
    let config = use_context::<DashboardConfig>();
    let (sales_color, orders_color) = match &config {
        Some(c) => (c.color(0).to_string(), c.color(1).to_string()),
        None => ("#3b82f6".to_string(), "#8b5cf6".to_string()),
    };

    let sales: Vec<f64> = daily.iter().map(|d| d.sales).collect();
    let orders: Vec<f64> = daily.iter().map(|d| d.orders as f64).collect();
    let max = sales.iter().chain(orders.iter()).cloned().fold(0.0, f64::max);
    let ticks = axis_ticks(max, Y_INTERVALS);
    let axis_max = ticks.last().copied().unwrap_or(1.0);

    let sales_path = monotone_path(&series_points(&sales, axis_max));
    let orders_path = monotone_path(&series_points(&orders, axis_max));

    let sales_dot = format!("background: {};", sales_color);
    let orders_dot = format!("background: {};", orders_color);
    let row_colors = StoredValue::new([sales_color.clone(), orders_color.clone()]);

    let grid = ticks
        .iter()
        .map(|t| {
            let y = y_at(*t, axis_max).to_string();
            view! {
                <line x1="0" y1=y.clone() x2="100" y2=y stroke="#e2e8f0" stroke-width="0.5" stroke-dasharray="3 3" vector-effect="non-scaling-stroke" />
            }
        })
        .collect_view();

    let y_labels = ticks
        .iter()
        .map(|t| {
            let y = y_at(*t, axis_max);
            view! {
                <div class="line-chart__y-label" style=format!("top: {}%;", y)>
                    {format_number_int(*t)}
                </div>
            }
        })
        .collect_view();

    let count = daily.len();
    let x_labels = daily
        .iter()
        .enumerate()
        .map(|(i, d)| {
            view! {
                <div class="line-chart__x-label" style=format!("left: {}%; top: {}%;", x_at(i, count), PLOT_BOTTOM)>
                    {d.label()}
                </div>
            }
        })
        .collect_view();

    let hovered = RwSignal::new(None::<usize>);
    let days = StoredValue::new(daily);

    let hover_zones = (0..count)
        .map(|i| {
            let (left, width) = hover_band(i, count);
            view! {
                <div
                    class="line-chart__hover-zone"
                    style=format!("left: {}%; width: {}%;", left, width)
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                ></div>
            }
        })
        .collect_view();

    let guide = move || {
        hovered.get().map(|i| {
            let x = x_at(i, count).to_string();
            view! {
                <line x1=x.clone() y1=PLOT_TOP.to_string() x2=x y2=PLOT_BOTTOM.to_string() stroke="#94a3b8" stroke-width="1" vector-effect="non-scaling-stroke" />
            }
        })
    };

    let tooltip = move || {
        let i = hovered.get()?;
        let day = days.with_value(|d| d.get(i).cloned())?;
        let colors = row_colors.get_value();
        let rows = tooltip_rows(&day)
            .into_iter()
            .zip(colors)
            .map(|((name, value), color)| {
                view! {
                    <div class="chart-tooltip__row" style=format!("color: {};", color)>
                        {format!("{} : {}", name, value)}
                    </div>
                }
            })
            .collect_view();

        Some(view! {
            <div class="chart-tooltip" style=format!("left: {}%; top: {}%;", x_at(i, count), PLOT_TOP)>
                <div class="chart-tooltip__title">{day.label()}</div>
                {rows}
            </div>
        })
    };

    view! {
        <div class="line-chart">
            <div class="line-chart__legend">
                <span class="line-chart__legend-item">
                    <span class="legend-dot" style=sales_dot></span>
                    "sales"
                </span>
                <span class="line-chart__legend-item">
                    <span class="legend-dot" style=orders_dot></span>
                    "orders"
                </span>
            </div>
            <div class="line-chart__plot">
                <div class="line-chart__y-axis">{y_labels}</div>
                <div class="line-chart__canvas">
                    <svg width="100%" height="100%" viewBox="0 0 100 100" preserveAspectRatio="none">
                        {grid}
                        {guide}
                        <path d=sales_path fill="none" stroke=sales_color stroke-width="2" vector-effect="non-scaling-stroke" stroke-linecap="round" stroke-linejoin="round" />
                        <path d=orders_path fill="none" stroke=orders_color stroke-width="2" vector-effect="non-scaling-stroke" stroke-linecap="round" stroke-linejoin="round" />
                    </svg>
                    {x_labels}
                    {hover_zones}
                    {tooltip}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d404_product_dashboard::Dataset;

    #[test]
    fn test_tooltip_rows() {
        let dataset = Dataset::sample().unwrap();
        let saturday = &dataset.daily_sales[5];
        assert_eq!(saturday.label(), "Sat");
        assert_eq!(
            tooltip_rows(saturday),
            [("sales", "8,900".to_string()), ("orders", "89".to_string())]
        );
    }
}
