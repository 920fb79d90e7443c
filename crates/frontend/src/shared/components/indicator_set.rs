use super::stat_card::StatCard;
use contracts::shared::indicators::IndicatorValue;
use leptos::prelude::*;

/// Grid of stat cards, one per indicator, in the given order
#[component]
pub fn IndicatorSetView(
    values: Vec<IndicatorValue>,
    /// Number of columns in the card grid (2, 3, 4)
    #[prop(optional, default = 4)]
    columns: u8,
) -> impl IntoView {
    let cols_class = match columns {
        2 => "indicator-set__grid indicator-set__grid--cols-2",
        3 => "indicator-set__grid indicator-set__grid--cols-3",
        _ => "indicator-set__grid indicator-set__grid--cols-4",
    };

    let cards = values
        .into_iter()
        .map(|indicator| view! { <StatCard indicator=indicator /> })
        .collect_view();

    view! {
        <div class="indicator-set">
            <div class=cols_class>{cards}</div>
        </div>
    }
}
