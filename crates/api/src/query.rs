//! Query parameter types for API handlers.

use serde::Deserialize;
use teamboard_core::activity::ActivityWindow;
use teamboard_core::date_range::DateFilter;
use teamboard_core::error::CoreError;
use teamboard_core::filter::{parse_flag, parse_limit, parse_offset, FilterSpec};
use teamboard_core::paging::PageWindow;

/// Raw `GET /projects` query string.
///
/// Every field is taken as text so that malformed pagination values can be
/// absorbed instead of rejecting the whole request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListQuery {
    pub search: Option<String>,
    pub date_filter: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub offset: Option<String>,
    pub limit: Option<String>,
    pub favorite_only: Option<String>,
    pub activity: Option<String>,
}

impl ProjectListQuery {
    /// Normalize into a [`FilterSpec`].
    ///
    /// Bad pagination and unknown activity values fall back to defaults;
    /// malformed date bounds are a validation error.
    pub fn to_filter_spec(&self) -> Result<FilterSpec, CoreError> {
        let date_filter = DateFilter::from_params(
            self.date_filter.as_deref(),
            self.start_date.as_deref(),
            self.end_date.as_deref(),
        )?;

        let activity = match self.activity.as_deref() {
            None => ActivityWindow::All,
            Some(raw) => ActivityWindow::parse(raw).unwrap_or_else(|| {
                tracing::warn!(value = raw, "Ignoring unknown activity window");
                ActivityWindow::All
            }),
        };

        let window = PageWindow::new(
            parse_offset(self.offset.as_deref()),
            parse_limit(self.limit.as_deref()),
        );

        Ok(FilterSpec::new()
            .with_search(self.search.as_deref().unwrap_or_default())
            .with_date_filter(date_filter)
            .with_activity(activity)
            .with_favorite_only(parse_flag(self.favorite_only.as_deref()))
            .with_window(window))
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use teamboard_core::date_range::DateRange;

    use super::*;

    fn query(pairs: &[(&str, &str)]) -> ProjectListQuery {
        let json: serde_json::Map<String, serde_json::Value> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();
        serde_json::from_value(serde_json::Value::Object(json)).unwrap()
    }

    #[test]
    fn empty_query_is_default_spec() {
        let spec = ProjectListQuery::default().to_filter_spec().unwrap();
        assert_eq!(spec, FilterSpec::new());
    }

    #[test]
    fn camel_case_params_are_read() {
        let spec = query(&[
            ("search", "  alpha "),
            ("dateFilter", "custom"),
            ("startDate", "2024-01-01"),
            ("favoriteOnly", "true"),
            ("activity", "week"),
            ("offset", "20"),
            ("limit", "5"),
        ])
        .to_filter_spec()
        .unwrap();

        assert_eq!(spec.search_text.as_deref(), Some("  alpha "));
        assert_matches!(
            spec.date_filter,
            DateFilter::Custom(DateRange { start_date: Some(_), end_date: None })
        );
        assert!(spec.favorite_only);
        assert_eq!(spec.activity, ActivityWindow::Week);
        assert_eq!(spec.window, PageWindow::new(20, 5));
    }

    #[test]
    fn malformed_paging_and_activity_fall_back() {
        let spec = query(&[("offset", "-3"), ("limit", "abc"), ("activity", "decade")])
            .to_filter_spec()
            .unwrap();
        assert_eq!(spec.window, PageWindow::default());
        assert_eq!(spec.activity, ActivityWindow::All);
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result = query(&[("startDate", "01/02/2024")]).to_filter_spec();
        assert_matches!(result, Err(CoreError::Validation(_)));
    }
}
