use crate::dashboards::ProductDashboard;
use contracts::dashboards::d404_product_dashboard::load_config;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    match load_config() {
        Ok(config) => {
            log::debug!(
                "Dashboard config loaded: low stock <= {}, refresh {} ms",
                config.low_stock_threshold,
                config.refresh_delay_ms
            );
            // Dashboard settings are read by every sub-component via context.
            provide_context(config);
            view! { <ProductDashboard /> }.into_any()
        }
        Err(err) => {
            log::error!("Failed to load dashboard config: {:#}", err);
            view! {
                <div class="alert alert--error">
                    <strong>"Configuration error: "</strong>
                    {format!("{:#}", err)}
                </div>
            }
            .into_any()
        }
    }
}
