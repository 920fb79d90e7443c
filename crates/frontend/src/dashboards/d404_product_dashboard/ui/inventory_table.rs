use crate::shared::components::table::TableCellMoney;
use crate::shared::components::ui::badge::{Badge, BadgeStyle};
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::dashboards::d404_product_dashboard::{DashboardConfig, Product, StockStatus};
use contracts::shared::indicators::TrendDirection;
use leptos::prelude::*;
use thaw::*;

const STOCK_BADGES: [(StockStatus, BadgeStyle); 3] = [
    (
        StockStatus::Active,
        BadgeStyle {
            label: "In Stock",
            background: "#d1fae5",
            foreground: "#065f46",
        },
    ),
    (
        StockStatus::LowStock,
        BadgeStyle {
            label: "Low Stock",
            background: "#fef3c7",
            foreground: "#92400e",
        },
    ),
    (
        StockStatus::OutOfStock,
        BadgeStyle {
            label: "Out of Stock",
            background: "#fee",
            foreground: "#c00",
        },
    ),
];

pub fn stock_badge(status: StockStatus) -> BadgeStyle {
    STOCK_BADGES
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, style)| *style)
        .unwrap_or(STOCK_BADGES[0].1)
}

/// Colour of the stock number: red at the low-stock threshold, amber up
/// to the warning level.
pub fn stock_level_color(stock: u32, config: &DashboardConfig) -> &'static str {
    if stock <= config.low_stock_threshold {
        "#dc2626"
    } else if stock <= config.stock_warning_level {
        "#ca8a04"
    } else {
        "#1e293b"
    }
}

/// Icon name and CSS class of the trend column
pub fn trend_display(trend: i32) -> (&'static str, &'static str) {
    match TrendDirection::from_signed(trend.into()) {
        TrendDirection::Up => ("trending-up", "trend trend--up"),
        TrendDirection::Down => ("trending-down", "trend trend--down"),
    }
}

#[component]
pub fn InventoryTable(
    #[prop(into)]
    products: Signal<Vec<Product>>,
    /// Current search text, used to highlight matches in product names
    #[prop(into)]
    query: Signal<String>,
    config: DashboardConfig,
) -> impl IntoView {
    let config = StoredValue::new(config);

    view! {
        <div class="inventory-table">
            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Category"</TableHeaderCell>
                        <TableHeaderCell>"Units Sold"</TableHeaderCell>
                        <TableHeaderCell>"Revenue"</TableHeaderCell>
                        <TableHeaderCell>"Stock"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Trend"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let q = query.get();
                        config.with_value(|cfg| {
                            products
                                .get()
                                .into_iter()
                                .map(|product| product_row(product, &q, cfg))
                                .collect_view()
                        })
                    }}
                </TableBody>
            </Table>
            {move || products.with(|p| p.is_empty()).then(|| view! {
                <div class="inventory-table__empty">"No products match the current filters"</div>
            })}
        </div>
    }
}

fn product_row(product: Product, query: &str, cfg: &DashboardConfig) -> impl IntoView {
    let status = product.status(cfg.low_stock_threshold);
    let stock_style = format!(
        "font-weight: 500; color: {};",
        stock_level_color(product.stock, cfg)
    );
    let (trend_icon, trend_class) = trend_display(product.trend);
    let query = query.to_string();
    let currency_symbol = cfg.currency_symbol.clone();

    view! {
        <TableRow>
            <TableCell>
                <span class="inventory-table__name">{highlight_matches(&product.name, &query)}</span>
            </TableCell>
            <TableCell>
                <span class="inventory-table__muted">{product.category.display_name()}</span>
            </TableCell>
            <TableCell>
                <span class="inventory-table__muted">{product.sold}</span>
            </TableCell>
            <TableCellMoney value=product.revenue currency=currency_symbol bold=true />
            <TableCell>
                <span style=stock_style>{product.stock}</span>
            </TableCell>
            <TableCell>
                <Badge badge=stock_badge(status) />
            </TableCell>
            <TableCell>
                <span class=trend_class>
                    {icon(trend_icon)}
                    {format!("{}%", product.trend.unsigned_abs())}
                </span>
            </TableCell>
        </TableRow>
    }
}
