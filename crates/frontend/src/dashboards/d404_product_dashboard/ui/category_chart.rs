use crate::shared::charts::{donut_arcs, polar};
use crate::shared::components::table::format_money_thousands;
use contracts::dashboards::d404_product_dashboard::{CategoryShare, DashboardConfig, FALLBACK_COLOR};
use leptos::prelude::*;

const INNER_RADIUS: f64 = 30.0;
const OUTER_RADIUS: f64 = 42.0;
const PAD_DEG: f64 = 5.0;

pub fn slice_tooltip(share: &CategoryShare) -> String {
    format!("{} : {}%", share.category.display_name(), share.share)
}

/// Donut of category shares with a revenue legend underneath
#[component]
pub fn CategoryChart(shares: Vec<CategoryShare>) -> impl IntoView {
    let config = use_context::<DashboardConfig>();
    let currency = config
        .as_ref()
        .map(|c| c.currency_symbol.clone())
        .unwrap_or_else(|| "$".to_string());
    let color = move |idx: usize| -> String {
        config
            .as_ref()
            .map(|c| c.color(idx).to_string())
            .unwrap_or_else(|| FALLBACK_COLOR.to_string())
    };

    let hovered = RwSignal::new(None::<usize>);

    let weights: Vec<f64> = shares.iter().map(|s| s.share as f64).collect();
    let arcs = donut_arcs(&weights, INNER_RADIUS, OUTER_RADIUS, PAD_DEG);
    // tooltip anchor of every slice, just outside the ring, in percent of the figure
    let anchors: Vec<(f64, f64)> = arcs
        .iter()
        .map(|arc| polar(OUTER_RADIUS + 4.0, arc.mid_deg()))
        .collect();

    let slices = arcs
        .into_iter()
        .zip(shares.iter())
        .enumerate()
        .map(|(idx, (arc, share))| {
            view! {
                <path
                    d=arc.path
                    fill=color(idx)
                    data-category=share.category.display_name()
                    on:mouseenter=move |_| hovered.set(Some(idx))
                    on:mouseleave=move |_| hovered.set(None)
                ></path>
            }
        })
        .collect_view();

    let legend = shares
        .iter()
        .enumerate()
        .map(|(idx, share)| {
            view! {
                <div class="category-legend__row">
                    <div class="category-legend__name">
                        <span class="legend-dot" style=format!("background: {};", color(idx))></span>
                        {share.category.display_name()}
                    </div>
                    <span class="category-legend__value">
                        {format_money_thousands(share.revenue, &currency)}
                    </span>
                </div>
            }
        })
        .collect_view();

    let tooltips = StoredValue::new(
        shares
            .iter()
            .zip(anchors)
            .map(|(share, anchor)| (slice_tooltip(share), anchor))
            .collect::<Vec<_>>(),
    );
    let tooltip = move || {
        let idx = hovered.get()?;
        let (text, (x, y)) = tooltips.with_value(|t| t.get(idx).cloned())?;
        Some(view! {
            <div class="chart-tooltip" style=format!("left: {:.1}%; top: {:.1}%;", x, y)>
                {text}
            </div>
        })
    };

    view! {
        <div class="category-chart">
            <div class="category-chart__figure">
                <svg class="category-chart__donut" viewBox="0 0 100 100">
                    {slices}
                </svg>
                {tooltip}
            </div>
            <div class="category-legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d404_product_dashboard::Dataset;

    #[test]
    fn test_slice_tooltip() {
        let dataset = Dataset::sample().unwrap();
        assert_eq!(slice_tooltip(&dataset.category_shares[0]), "Electronics : 45%");
    }
}
