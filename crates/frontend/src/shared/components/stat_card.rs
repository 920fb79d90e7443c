use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::icons::icon;
use contracts::shared::indicators::{IndicatorValue, TrendDirection, ValueFormat};
use leptos::prelude::*;

pub fn format_value(val: f64, fmt: &ValueFormat) -> String {
    match fmt {
        ValueFormat::Money { currency } => format_money(val, currency),
        ValueFormat::Integer => format_number_int(val),
    }
}

#[component]
pub fn StatCard(
    /// Computed value with label, icon, accent and change badge
    indicator: IndicatorValue,
) -> impl IntoView {
    let formatted = format_value(indicator.value, &indicator.format);

    let (trend_icon, change_class) = match indicator.trend {
        TrendDirection::Up => ("trending-up", "stat-card__change stat-card__change--up"),
        TrendDirection::Down => ("trending-down", "stat-card__change stat-card__change--down"),
    };

    view! {
        <div class="stat-card" data-indicator-id=indicator.id.0>
            <div class="stat-card__top">
                <div class="stat-card__icon" style=format!("background-color: {};", indicator.accent)>
                    {icon(&indicator.icon)}
                </div>
                <span class=change_class>
                    {icon(trend_icon)}
                    {indicator.change}
                </span>
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{indicator.label}</div>
                <div class="stat-card__value">{formatted}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_value() {
        let money = ValueFormat::Money {
            currency: "$".to_string(),
        };
        assert_eq!(format_value(43900.0, &money), "$43,900");
        assert_eq!(format_value(439.0, &ValueFormat::Integer), "439");
        assert_eq!(format_value(1844.0, &ValueFormat::Integer), "1,844");
    }
}
