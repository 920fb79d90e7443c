use thiserror::Error;

/// Errors raised while loading or validating dashboard data and settings.
#[derive(Debug, Error, PartialEq)]
pub enum DashboardError {
    #[error("duplicate product id {0}")]
    DuplicateProductId(u32),

    #[error("expected 7 daily sales rows, got {0}")]
    DailySalesLength(usize),

    #[error("category shares must sum to 100, got {0}")]
    CategorySharesSum(u32),

    #[error("{field} must be a finite non-negative amount, got {value}")]
    NegativeAmount { field: String, value: f64 },

    #[error("invalid dashboard config: {0}")]
    InvalidConfig(String),
}
