use super::config::FALLBACK_COLOR;
use super::dataset::{DailySales, Product, StockStatus};
use crate::shared::indicators::{IndicatorId, IndicatorValue, TrendDirection, ValueFormat};
use serde::{Deserialize, Serialize};

/// Headline figures of the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalesSummary {
    /// Sum of daily sales amounts
    pub total_revenue: f64,
    /// Sum of daily order counts
    pub total_orders: u32,
    /// Sum of units sold over all products
    pub total_units_sold: u32,
    pub active_products: usize,
}

pub fn summarize(
    daily: &[DailySales],
    products: &[Product],
    low_stock_threshold: u32,
) -> SalesSummary {
    SalesSummary {
        total_revenue: daily.iter().map(|d| d.sales).sum(),
        total_orders: daily.iter().map(|d| d.orders).sum(),
        total_units_sold: products.iter().map(|p| p.sold).sum(),
        active_products: count_with_status(products, StockStatus::Active, low_stock_threshold),
    }
}

pub fn count_with_status(products: &[Product], status: StockStatus, low_stock_threshold: u32) -> usize {
    products
        .iter()
        .filter(|p| p.status(low_stock_threshold) == status)
        .count()
}

/// Counts shown in the two alert banners below the inventory table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StockAlerts {
    pub low_stock: usize,
    pub out_of_stock: usize,
}

pub fn stock_alerts(products: &[Product], low_stock_threshold: u32) -> StockAlerts {
    StockAlerts {
        low_stock: count_with_status(products, StockStatus::LowStock, low_stock_threshold),
        out_of_stock: count_with_status(products, StockStatus::OutOfStock, low_stock_threshold),
    }
}

/// Period-over-period change labels. The sample data has no previous
/// period, so these are fixed.
const REVENUE_CHANGE: &str = "+12.5%";
const ORDERS_CHANGE: &str = "+8.2%";
const UNITS_CHANGE: &str = "+15.3%";
const ACTIVE_CHANGE: &str = "+3";

/// Stat cards in display order. `palette` supplies the icon tile colours,
/// cycling when it is shorter than four entries.
pub fn stat_cards(summary: &SalesSummary, currency: &str, palette: &[String]) -> Vec<IndicatorValue> {
    let accent = |idx: usize| -> String {
        if palette.is_empty() {
            FALLBACK_COLOR.to_string()
        } else {
            palette[idx % palette.len()].clone()
        }
    };

    vec![
        IndicatorValue {
            id: IndicatorId::new("total_revenue"),
            label: "Total Revenue".to_string(),
            icon: "dollar".to_string(),
            accent: accent(0),
            value: summary.total_revenue,
            format: ValueFormat::Money {
                currency: currency.to_string(),
            },
            change: REVENUE_CHANGE.to_string(),
            trend: TrendDirection::Up,
        },
        IndicatorValue {
            id: IndicatorId::new("orders"),
            label: "Orders".to_string(),
            icon: "cart".to_string(),
            accent: accent(1),
            value: summary.total_orders as f64,
            format: ValueFormat::Integer,
            change: ORDERS_CHANGE.to_string(),
            trend: TrendDirection::Up,
        },
        IndicatorValue {
            id: IndicatorId::new("products_sold"),
            label: "Products Sold".to_string(),
            icon: "package".to_string(),
            accent: accent(2),
            value: summary.total_units_sold as f64,
            format: ValueFormat::Integer,
            change: UNITS_CHANGE.to_string(),
            trend: TrendDirection::Up,
        },
        IndicatorValue {
            id: IndicatorId::new("active_products"),
            label: "Active Products".to_string(),
            icon: "users".to_string(),
            accent: accent(3),
            value: summary.active_products as f64,
            format: ValueFormat::Integer,
            change: ACTIVE_CHANGE.to_string(),
            trend: TrendDirection::Up,
        },
    ]
}
