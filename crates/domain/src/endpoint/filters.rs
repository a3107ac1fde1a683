//! Filter and pagination inputs for list endpoints

use super::query::QueryBuilder;
use crate::constants::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE};
use crate::impl_wire_value_conversions;

/// Workflow category filter for device lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum WorkflowCategory {
    /// No filtering; never sent on the wire
    #[default]
    All,
    Repair,
    Buyback,
    Refurb,
    Unassigned,
}

impl_wire_value_conversions!(WorkflowCategory {
    All => "all",
    Repair => "repair",
    Buyback => "buyback",
    Refurb => "refurb",
    Unassigned => "unassigned",
});

/// Reporting period for list and dashboard filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatePeriod {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    LastMonth,
}

impl_wire_value_conversions!(DatePeriod {
    Today => "today",
    Yesterday => "yesterday",
    ThisWeek => "this_week",
    ThisMonth => "this_month",
    LastMonth => "last_month",
});

/// Which timestamp a [`DatePeriod`] applies to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DateFilter {
    #[default]
    Created,
    Completed,
}

impl_wire_value_conversions!(DateFilter {
    Created => "created",
    Completed => "completed",
});

/// Collection status filter for device lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionStatus {
    Awaiting,
}

impl_wire_value_conversions!(CollectionStatus {
    Awaiting => "awaiting",
});

/// Dashboard aggregation scope
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatsScope {
    #[default]
    User,
    Company,
}

impl_wire_value_conversions!(StatsScope {
    User => "user",
    Company => "company",
});

/// Printable order documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    Invoice,
    Quote,
    Receipt,
    JobSheet,
    CollectionNote,
}

impl_wire_value_conversions!(DocumentKind {
    Invoice => "invoice",
    Quote => "quote",
    Receipt => "receipt",
    JobSheet => "job_sheet",
    CollectionNote => "collection_note",
});

/// Page number and size shared by every paginated endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    pub page: u32,
    pub limit: u32,
}

impl PageRequest {
    /// Page `page` with `limit` items per page
    #[must_use]
    pub const fn new(page: u32, limit: u32) -> Self {
        Self { page, limit }
    }

    /// Start a query with `page` and `limit`
    pub(crate) fn query(self) -> QueryBuilder {
        QueryBuilder::new().push_num("page", self.page).push_num("limit", self.limit)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_PAGE_SIZE)
    }
}

/// Filters for the staff order list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListQuery {
    pub page: PageRequest,
    pub status: Option<String>,
    pub search: Option<String>,
}

impl OrderListQuery {
    pub(crate) fn query(&self) -> Vec<(String, String)> {
        self.page
            .query()
            .push_str("status", self.status.as_deref())
            .push_str("search", self.search.as_deref())
            .build()
    }
}

/// Filters for the staff device list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeviceListQuery {
    pub page: PageRequest,
    pub search: Option<String>,
    pub status: Option<String>,
    pub exclude_status: Option<String>,
    pub device_type_id: Option<String>,
    pub engineer_id: Option<String>,
    pub location_id: Option<String>,
    pub workflow_category: WorkflowCategory,
    pub period: Option<DatePeriod>,
    pub date_filter: DateFilter,
    pub show_archived: bool,
    pub collection_status: Option<CollectionStatus>,
}

impl DeviceListQuery {
    /// Whether any filter beyond pagination is active
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.search.as_deref().is_some_and(|s| !s.is_empty())
            || self.status.is_some()
            || self.exclude_status.is_some()
            || self.device_type_id.is_some()
            || self.engineer_id.is_some()
            || self.location_id.is_some()
            || self.workflow_category != WorkflowCategory::All
            || self.period.is_some()
            || self.show_archived
            || self.collection_status.is_some()
    }

    /// Clear every filter and go back to the first page, keeping the page size
    pub fn reset(&mut self) {
        *self = Self { page: PageRequest::new(DEFAULT_PAGE, self.page.limit), ..Self::default() };
    }

    pub(crate) fn query(&self) -> Vec<(String, String)> {
        let category = match self.workflow_category {
            WorkflowCategory::All => None,
            other => Some(other.as_str()),
        };
        // date_filter only qualifies a period
        let (period, date_filter) = match self.period {
            Some(period) => (Some(period.as_str()), Some(self.date_filter.as_str())),
            None => (None, None),
        };

        self.page
            .query()
            .push_str("search", self.search.as_deref())
            .push_str("status", self.status.as_deref())
            .push_str("exclude_status", self.exclude_status.as_deref())
            .push_str("device_type_id", self.device_type_id.as_deref())
            .push_str("engineer_id", self.engineer_id.as_deref())
            .push_str("location_id", self.location_id.as_deref())
            .push_str("workflow_category", category)
            .push_str("period", period)
            .push_str("date_filter", date_filter)
            .push_flag("show_archived", self.show_archived)
            .push_str("collection_status", self.collection_status.as_ref().map(|c| c.as_str()))
            .build()
    }
}

/// Filters for the engineer's own work queue
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueueQuery {
    pub page: PageRequest,
    pub search: Option<String>,
    pub category: Option<String>,
}

impl QueueQuery {
    pub(crate) fn query(&self) -> Vec<(String, String)> {
        self.page
            .query()
            .push_str("search", self.search.as_deref())
            .push_str("category", self.category.as_deref())
            .build()
    }
}

/// Filters for buyback inventory
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuybackQuery {
    pub page: PageRequest,
    pub status: Option<String>,
    pub search: Option<String>,
    pub engineer_id: Option<String>,
}

impl BuybackQuery {
    pub(crate) fn query(&self) -> Vec<(String, String)> {
        self.page
            .query()
            .push_str("status", self.status.as_deref())
            .push_str("search", self.search.as_deref())
            .push_str("engineer_id", self.engineer_id.as_deref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pairs: &[(String, String)]) -> Vec<&str> {
        pairs.iter().map(|(k, _)| k.as_str()).collect()
    }

    #[test]
    fn device_query_without_filters_has_only_paging() {
        let query = DeviceListQuery::default().query();
        assert_eq!(keys(&query), ["page", "limit"]);
        assert_eq!(query[0].1, "1");
        assert_eq!(query[1].1, "20");
    }

    #[test]
    fn device_query_sends_date_filter_only_with_period() {
        let without_period =
            DeviceListQuery { date_filter: DateFilter::Completed, ..Default::default() };
        assert!(!keys(&without_period.query()).contains(&"date_filter"));

        let with_period = DeviceListQuery {
            period: Some(DatePeriod::ThisWeek),
            date_filter: DateFilter::Completed,
            ..Default::default()
        };
        let query = with_period.query();
        assert!(query.contains(&("period".to_string(), "this_week".to_string())));
        assert!(query.contains(&("date_filter".to_string(), "completed".to_string())));
    }

    #[test]
    fn device_query_omits_all_category_and_false_archived() {
        let query = DeviceListQuery {
            workflow_category: WorkflowCategory::All,
            show_archived: false,
            ..Default::default()
        }
        .query();
        assert!(!keys(&query).contains(&"workflow_category"));
        assert!(!keys(&query).contains(&"show_archived"));

        let query = DeviceListQuery {
            workflow_category: WorkflowCategory::Refurb,
            show_archived: true,
            collection_status: Some(CollectionStatus::Awaiting),
            ..Default::default()
        }
        .query();
        assert!(query.contains(&("workflow_category".to_string(), "refurb".to_string())));
        assert!(query.contains(&("show_archived".to_string(), "true".to_string())));
        assert!(query.contains(&("collection_status".to_string(), "awaiting".to_string())));
    }

    #[test]
    fn device_query_active_filters_and_reset() {
        let mut query = DeviceListQuery {
            page: PageRequest::new(4, 50),
            search: Some("pixel".into()),
            ..Default::default()
        };
        assert!(query.has_active_filters());

        query.reset();
        assert!(!query.has_active_filters());
        assert_eq!(query.page, PageRequest::new(1, 50));
    }

    #[test]
    fn empty_search_is_not_an_active_filter() {
        let query = DeviceListQuery { search: Some(String::new()), ..Default::default() };
        assert!(!query.has_active_filters());
        assert_eq!(keys(&query.query()), ["page", "limit"]);
    }

    #[test]
    fn order_query_omits_unset_filters() {
        let query = OrderListQuery { page: PageRequest::new(2, 20), ..Default::default() }.query();
        assert_eq!(
            query,
            vec![("page".to_string(), "2".to_string()), ("limit".to_string(), "20".to_string())]
        );
    }
}
