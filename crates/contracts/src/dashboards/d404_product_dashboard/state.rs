use super::filter::CategoryFilter;
use serde::{Deserialize, Serialize};

/// Period selector of the sales overview. Display only: the sample data
/// always covers one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TimeRange {
    #[default]
    Week,
    Month,
    Year,
}

impl TimeRange {
    pub fn code(&self) -> &'static str {
        match self {
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TimeRange::Week => "This Week",
            TimeRange::Month => "This Month",
            TimeRange::Year => "This Year",
        }
    }

    pub fn all() -> [TimeRange; 3] {
        [TimeRange::Week, TimeRange::Month, TimeRange::Year]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.code() == code)
    }
}

/// Handle returned by [`RefreshToggle::begin`]; only the newest one can
/// end the refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTicket(u64);

/// Idle / Refreshing toggle behind the "Refresh Data" button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RefreshToggle {
    refreshing: bool,
    generation: u64,
}

impl RefreshToggle {
    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    /// Enters Refreshing. Calling it again while refreshing restarts the delay.
    pub fn begin(&mut self) -> RefreshTicket {
        self.generation = self.generation.wrapping_add(1);
        self.refreshing = true;
        RefreshTicket(self.generation)
    }

    /// Returns to Idle if `ticket` belongs to the latest `begin`.
    /// Returns whether the state changed.
    pub fn finish(&mut self, ticket: RefreshTicket) -> bool {
        if self.refreshing && ticket.0 == self.generation {
            self.refreshing = false;
            true
        } else {
            false
        }
    }
}

/// Local UI state of the dashboard view
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    pub search_query: String,
    pub category_filter: CategoryFilter,
    pub time_range: TimeRange,
    pub refresh: RefreshToggle,
}

impl DashboardState {
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_category_filter(&mut self, filter: CategoryFilter) {
        self.category_filter = filter;
    }

    pub fn set_time_range(&mut self, range: TimeRange) {
        self.time_range = range;
    }

    pub fn begin_refresh(&mut self) -> RefreshTicket {
        self.refresh.begin()
    }

    pub fn finish_refresh(&mut self, ticket: RefreshTicket) -> bool {
        self.refresh.finish(ticket)
    }

    pub fn is_refreshing(&self) -> bool {
        self.refresh.is_refreshing()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_product_dashboard::dataset::Category;

    fn customised_state() -> DashboardState {
        let mut state = DashboardState::default();
        state.set_search_query("mouse");
        state.set_category_filter(CategoryFilter::Only(Category::Electronics));
        state.set_time_range(TimeRange::Month);
        state
    }

    #[test]
    fn test_defaults() {
        let state = DashboardState::default();
        assert_eq!(state.search_query, "");
        assert_eq!(state.category_filter, CategoryFilter::All);
        assert_eq!(state.time_range, TimeRange::Week);
        assert!(!state.is_refreshing());
    }

    #[test]
    fn test_refresh_only_touches_flag() {
        let mut state = customised_state();
        let before = state.clone();

        let ticket = state.begin_refresh();
        assert!(state.is_refreshing());
        assert_eq!(state.search_query, before.search_query);
        assert_eq!(state.category_filter, before.category_filter);
        assert_eq!(state.time_range, before.time_range);

        assert!(state.finish_refresh(ticket));
        assert!(!state.is_refreshing());
        assert_eq!(state.search_query, before.search_query);
        assert_eq!(state.category_filter, before.category_filter);
        assert_eq!(state.time_range, before.time_range);
    }

    #[test]
    fn test_second_trigger_restarts_delay() {
        let mut toggle = RefreshToggle::default();
        let first = toggle.begin();
        let second = toggle.begin();

        assert!(!toggle.finish(first));
        assert!(toggle.is_refreshing());

        assert!(toggle.finish(second));
        assert!(!toggle.is_refreshing());
    }

    #[test]
    fn test_finish_twice_is_noop() {
        let mut toggle = RefreshToggle::default();
        let ticket = toggle.begin();
        assert!(toggle.finish(ticket));
        assert!(!toggle.finish(ticket));
        assert!(!toggle.is_refreshing());
    }

    #[test]
    fn test_time_range_codes() {
        for range in TimeRange::all() {
            assert_eq!(TimeRange::from_code(range.code()), Some(range));
        }
        assert_eq!(TimeRange::from_code("decade"), None);
        assert_eq!(TimeRange::Year.display_name(), "This Year");
    }
}
