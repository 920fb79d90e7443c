use crate::shared::icons::icon;
use contracts::dashboards::d404_product_dashboard::StockAlerts;
use leptos::prelude::*;

/// Low-stock and out-of-stock banners below the inventory table
#[component]
pub fn StockAlertBanners(alerts: StockAlerts) -> impl IntoView {
    view! {
        <div class="stock-alerts">
            <div class="stock-alert stock-alert--warning">
                <span class="stock-alert__icon">{icon("alert-triangle")}</span>
                <div>
                    <h3 class="stock-alert__title">"Low Stock Alert"</h3>
                    <p class="stock-alert__text">
                        {format!("{} products are running low on inventory", alerts.low_stock)}
                    </p>
                </div>
            </div>
            <div class="stock-alert stock-alert--error">
                <span class="stock-alert__icon">{icon("alert-triangle")}</span>
                <div>
                    <h3 class="stock-alert__title">"Out of Stock"</h3>
                    <p class="stock-alert__text">
                        {format!("{} products are currently unavailable", alerts.out_of_stock)}
                    </p>
                </div>
            </div>
        </div>
    }
}
