use super::error::DashboardError;
use anyhow::Context;
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const SAMPLE_DATASET_JSON: &str = include_str!("sample_dataset.json");

/// Product categories known to the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Accessories,
    #[serde(rename = "Home & Living")]
    HomeAndLiving,
    Fashion,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Accessories => "Accessories",
            Category::HomeAndLiving => "Home & Living",
            Category::Fashion => "Fashion",
        }
    }

    pub fn all() -> [Category; 4] {
        [
            Category::Electronics,
            Category::Accessories,
            Category::HomeAndLiving,
            Category::Fashion,
        ]
    }

    pub fn from_display_name(name: &str) -> Option<Self> {
        Self::all().into_iter().find(|c| c.display_name() == name)
    }
}

/// Stock state of a product, derived from its stock count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StockStatus {
    Active,
    LowStock,
    OutOfStock,
}

impl StockStatus {
    /// `0` is out of stock, `1..=low_stock_threshold` is low, anything above is active.
    pub fn from_stock(stock: u32, low_stock_threshold: u32) -> Self {
        if stock == 0 {
            StockStatus::OutOfStock
        } else if stock <= low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::Active
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            StockStatus::Active => "active",
            StockStatus::LowStock => "low_stock",
            StockStatus::OutOfStock => "out_of_stock",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: Category,
    /// Units sold in the reporting period
    pub sold: u32,
    pub revenue: f64,
    /// Signed % change of units sold versus the previous period
    pub trend: i32,
    pub stock: u32,
}

impl Product {
    pub fn status(&self, low_stock_threshold: u32) -> StockStatus {
        StockStatus::from_stock(self.stock, low_stock_threshold)
    }
}

/// One day of the weekly sales series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySales {
    pub day: Weekday,
    pub sales: f64,
    pub orders: u32,
    pub customers: u32,
}

impl DailySales {
    /// Short axis label, e.g. "Mon"
    pub fn label(&self) -> String {
        self.day.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub category: Category,
    /// Percentage of total sales volume, the set sums to 100
    pub share: u32,
    pub revenue: f64,
}

/// Immutable in-memory data behind the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub products: Vec<Product>,
    pub daily_sales: Vec<DailySales>,
    pub category_shares: Vec<CategoryShare>,
}

impl Dataset {
    /// Parses and validates the bundled sample data.
    pub fn sample() -> anyhow::Result<Self> {
        Self::from_json(SAMPLE_DATASET_JSON).context("failed to load bundled sample dataset")
    }

    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let dataset: Dataset =
            serde_json::from_str(json).context("dataset JSON does not match the schema")?;
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn validate(&self) -> Result<(), DashboardError> {
        let mut seen = HashSet::new();
        for product in &self.products {
            if !seen.insert(product.id) {
                return Err(DashboardError::DuplicateProductId(product.id));
            }
            check_amount(&format!("revenue of product {}", product.id), product.revenue)?;
        }

        if self.daily_sales.len() != 7 {
            return Err(DashboardError::DailySalesLength(self.daily_sales.len()));
        }
        for day in &self.daily_sales {
            check_amount(&format!("sales on {}", day.day), day.sales)?;
        }

        let share_sum: u32 = self.category_shares.iter().map(|c| c.share).sum();
        if share_sum != 100 {
            return Err(DashboardError::CategorySharesSum(share_sum));
        }
        for share in &self.category_shares {
            check_amount(
                &format!("revenue of {}", share.category.display_name()),
                share.revenue,
            )?;
        }

        Ok(())
    }

    /// Categories that occur in the product list, in first-appearance order.
    pub fn product_categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }
}

fn check_amount(field: &str, value: f64) -> Result<(), DashboardError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(DashboardError::NegativeAmount {
            field: field.to_string(),
            value,
        })
    }
}
