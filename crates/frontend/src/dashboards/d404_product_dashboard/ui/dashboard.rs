use super::category_chart::CategoryChart;
use super::inventory_table::InventoryTable;
use super::sales_chart::SalesChart;
use super::stock_alerts::StockAlertBanners;
use crate::shared::components::card_animated::CardAnimated;
use crate::shared::components::indicator_set::IndicatorSetView;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Input, Select};
use crate::shared::icons::icon;
use contracts::dashboards::d404_product_dashboard::{
    filter_products, stat_cards, stock_alerts, summarize, CategoryFilter, DashboardConfig,
    DashboardState, Dataset, TimeRange,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Product Dashboard component
#[component]
pub fn ProductDashboard() -> impl IntoView {
    let Some(config) = use_context::<DashboardConfig>() else {
        log::error!("DashboardConfig is not provided");
        return view! {
            <div class="alert alert--error">"Dashboard settings are missing"</div>
        }
        .into_any();
    };

    match Dataset::sample() {
        Ok(dataset) => {
            log::debug!(
                "Loaded {} products, {} days, {} categories",
                dataset.products.len(),
                dataset.daily_sales.len(),
                dataset.category_shares.len()
            );
            view! { <DashboardContent dataset=dataset config=config /> }.into_any()
        }
        Err(err) => {
            log::error!("Failed to load dashboard data: {:#}", err);
            view! {
                <div class="alert alert--error">
                    <strong>"⚠ Error: "</strong>
                    {format!("{:#}", err)}
                </div>
            }
            .into_any()
        }
    }
}

#[component]
fn DashboardContent(dataset: Dataset, config: DashboardConfig) -> impl IntoView {
    let state = RwSignal::new(DashboardState::default());
    let products = StoredValue::new(dataset.products.clone());

    // Narrow memos so the product list is only re-filtered when the query
    // or the category changes, not on refresh or time range toggles.
    let query = Memo::new(move |_| state.with(|s| s.search_query.clone()));
    let category = Memo::new(move |_| state.with(|s| s.category_filter));
    let filtered = Memo::new(move |_| {
        let q = query.get();
        let c = category.get();
        products.with_value(|all| {
            filter_products(all, &q, c)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });
    let is_refreshing = Memo::new(move |_| state.with(|s| s.is_refreshing()));

    let summary = summarize(
        &dataset.daily_sales,
        &dataset.products,
        config.low_stock_threshold,
    );
    let cards = stat_cards(&summary, &config.currency_symbol, &config.palette);
    let alerts = stock_alerts(&dataset.products, config.low_stock_threshold);

    let category_options: Vec<(String, String)> = std::iter::once(CategoryFilter::All)
        .chain(
            dataset
                .product_categories()
                .into_iter()
                .map(CategoryFilter::Only),
        )
        .map(|f| (f.as_value().to_string(), f.label().to_string()))
        .collect();
    let time_range_options: Vec<(String, String)> = TimeRange::all()
        .into_iter()
        .map(|t| (t.code().to_string(), t.display_name().to_string()))
        .collect();

    let on_search = Callback::new(move |text: String| {
        state.update(|s| s.set_search_query(text));
    });

    let on_category_change = Callback::new(move |value: String| {
        let filter = CategoryFilter::from_value(&value);
        log::debug!("Category filter changed to {}", filter.label());
        state.update(|s| s.set_category_filter(filter));
    });

    let on_time_range_change = Callback::new(move |code: String| match TimeRange::from_code(&code) {
        Some(range) => {
            log::debug!("Time range changed to {}", range.code());
            state.update(|s| s.set_time_range(range));
        }
        None => log::warn!("Unknown time range option: {}", code),
    });

    let refresh_delay_ms = config.refresh_delay_ms;
    let on_refresh = move |_: leptos::ev::MouseEvent| {
        let mut ticket = None;
        state.update(|s| ticket = Some(s.begin_refresh()));
        let Some(ticket) = ticket else {
            return;
        };
        log::debug!("Refresh started");

        spawn_local(async move {
            TimeoutFuture::new(refresh_delay_ms).await;
            state.update(|s| {
                if s.finish_refresh(ticket) {
                    log::debug!("Refresh finished");
                }
            });
        });
    };

    let refresh_icon_class = move || {
        if is_refreshing.get() {
            "refresh-icon refresh-icon--spinning"
        } else {
            "refresh-icon"
        }
    };

    view! {
        <div
            id="d404_product_dashboard--dashboard"
            class="page page--dashboard product-dashboard"
            data-page-category="dashboard"
        >
            <PageHeader title="Product Dashboard" subtitle="Real-time inventory and sales analytics">
                <Button appearance=ButtonAppearance::Primary on_click=on_refresh>
                    <span class=refresh_icon_class>{icon("refresh")}</span>
                    "Refresh Data"
                </Button>
            </PageHeader>

            <IndicatorSetView values=cards columns=4 />

            <div class="dashboard-charts">
                <CardAnimated class="dashboard-card--wide" delay_ms=0>
                    <div class="dashboard-card__header">
                        <h2 class="dashboard-card__title">"Sales Overview"</h2>
                        <Select
                            value=Signal::derive(move || state.with(|s| s.time_range.code().to_string()))
                            on_change=on_time_range_change
                            options=time_range_options
                            aria_label="Time range"
                        />
                    </div>
                    <SalesChart daily=dataset.daily_sales.clone() />
                </CardAnimated>

                <CardAnimated title="Sales by Category" delay_ms=80>
                    <CategoryChart shares=dataset.category_shares.clone() />
                </CardAnimated>
            </div>

            <CardAnimated delay_ms=160>
                <div class="dashboard-card__header">
                    <h2 class="dashboard-card__title">"Product Inventory"</h2>
                    <div class="dashboard-card__controls">
                        <Input
                            value=query
                            on_input=on_search
                            placeholder="Search products..."
                            leading_icon="search"
                        />
                        <Select
                            value=Signal::derive(move || category.get().as_value().to_string())
                            on_change=on_category_change
                            options=category_options
                            aria_label="Category"
                        />
                    </div>
                </div>
                <InventoryTable products=filtered query=query config=config.clone() />
            </CardAnimated>

            <StockAlertBanners alerts=alerts />
        </div>
    }
}
