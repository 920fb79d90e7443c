//! Table cell for money values
//!
//! ```ignore
//! <TableCellMoney value=product.revenue currency="$" />
//! <TableCellMoney value=total currency="$" bold=true />
//! ```

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Renders `$23,400`-style amounts. Negative values are coloured red.
#[component]
pub fn TableCellMoney(
    value: f64,
    /// Currency prefix
    #[prop(into)]
    currency: String,
    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let mut styles = Vec::new();
    if value < 0.0 {
        styles.push("color: var(--color-error-700)");
    }
    if bold {
        styles.push("font-weight: 600");
    }

    view! {
        <TableCell>
            <span class="table-cell-money" style=styles.join("; ")>
                {format_money(value, &currency)}
            </span>
        </TableCell>
    }
}
