// SPDX-License-Identifier: PMPL-1.0-or-later

//! English base document.
//!
//! Source language: every section and label identifier is defined here and
//! every other document must carry exactly the same key set.

use super::StaticSection;

pub(crate) const BASE: &[StaticSection] = &[
    StaticSection {
        name: "dashboard",
        labels: &[
            ("title", "Performance Metrics Dashboard"),
            ("subtitle", "Monitor and analyze route performance metrics"),
            ("advanced_statistics", "Advanced Statistics"),
            ("export_csv", "Export CSV"),
            ("export_json", "Export JSON"),
            ("clear_all_records", "Clear All Records"),
            ("back_to_dashboard", "Back to Dashboard"),
            ("no_routes_found", "No routes found for the selected filters."),
        ],
    },
    StaticSection {
        name: "statistics",
        labels: &[
            ("total_routes", "Total Routes"),
            ("total_queries", "Total Queries"),
            ("avg_request_time", "Avg Request Time"),
            ("max_request_time", "Max Request Time"),
            ("avg_query_time", "Avg Query Time"),
            ("max_query_time", "Max Query Time"),
            ("max_queries", "Max Queries"),
            ("not_available", "N/A"),
        ],
    },
    StaticSection {
        name: "routes_table",
        labels: &[
            ("title", "Routes"),
            ("route_name", "Route Name"),
            ("environment", "Environment"),
            ("request_time", "Request Time"),
            ("query_time", "Query Time"),
            ("total_queries", "Total Queries"),
            ("memory_usage", "Memory Usage"),
            ("access_count", "Access Count"),
            ("last_accessed_at", "Last Accessed At"),
            ("updated_at", "Updated At"),
            ("review_status", "Review Status"),
            ("actions", "Actions"),
            ("reviewed", "Reviewed"),
            ("not_reviewed", "Not Reviewed"),
            ("queries_improved", "Queries: ✓ Improved"),
            ("queries_not_improved", "Queries: ✗ Not Improved"),
            ("time_improved", "Time: ✓ Improved"),
            ("time_not_improved", "Time: ✗ Not Improved"),
            ("delete_record", "Delete record"),
            ("mark_as_reviewed", "Mark as reviewed"),
            ("delete", "Delete"),
            ("review", "Review"),
            ("cancel", "Cancel"),
            ("confirm_delete", "Are you sure you want to delete this record?"),
        ],
    },
    StaticSection {
        name: "filters",
        labels: &[
            ("title", "Filters"),
            ("show_advanced", "Show Advanced Filters"),
            ("hide_advanced", "Hide Advanced Filters"),
            ("advanced_filters", "Advanced Filters"),
            ("environment", "Environment"),
            ("route_name", "Route Name"),
            ("sort_by", "Sort By"),
            ("order", "Order"),
            ("limit", "Limit"),
            ("min_request_time", "Min Request Time (s)"),
            ("max_request_time", "Max Request Time (s)"),
            ("min_query_count", "Min Query Count"),
            ("max_query_count", "Max Query Count"),
            ("date_from", "Date From"),
            ("date_to", "Date To"),
            ("apply_filters", "Apply Filters"),
            ("reset", "Reset"),
            ("placeholder_route", "Filter by route name..."),
            ("placeholder_time", "0.0000"),
            ("placeholder_count", "0"),
        ],
    },
    StaticSection {
        name: "review",
        labels: &[
            ("modal_title", "Mark as Reviewed"),
            ("queries_improved", "Queries Improved?"),
            ("time_improved", "Time Improved?"),
            ("not_specified", "Not specified"),
            ("yes", "Yes"),
            ("no", "No"),
            ("mark_as_reviewed", "Mark as Reviewed"),
        ],
    },
    StaticSection {
        name: "confirmations",
        labels: &[
            (
                "clear_all_records",
                "Are you sure you want to delete all performance records? This action cannot be undone.",
            ),
            ("delete_record", "Are you sure you want to delete this record?"),
        ],
    },
    StaticSection {
        name: "flash",
        labels: &[
            ("records_cleared", "All records have been successfully deleted."),
            ("record_deleted", "The record has been successfully deleted."),
            ("record_reviewed", "The record has been successfully marked as reviewed."),
            ("error", "An error occurred while processing the request."),
        ],
    },
    StaticSection {
        name: "statistics_page",
        labels: &[
            ("title", "Advanced Performance Statistics"),
            ("subtitle", "Detailed statistical analysis to identify optimization targets"),
            ("routes_needing_attention", "Routes Needing Attention"),
            ("routes_above_p95", "Routes above 95th percentile"),
            ("routes_with_outliers", "Routes with outliers"),
            ("metric", "Metric"),
            ("mean", "Mean"),
            ("median", "Median"),
            ("mode", "Mode"),
            ("std_deviation", "Standard Deviation"),
            ("min", "Min"),
            ("max", "Max"),
            ("range", "Range"),
            ("p25", "P25"),
            ("p50", "P50"),
            ("p75", "P75"),
            ("p90", "P90"),
            ("p95", "P95"),
            ("p99", "P99"),
            ("outliers", "Outliers"),
            ("histogram", "Distribution Histogram"),
            ("request_time", "Request Time"),
            ("query_time", "Query Time"),
            ("query_count", "Query Count"),
            ("memory_usage", "Memory Usage"),
            ("access_count", "Access Count"),
        ],
    },
    StaticSection {
        name: "sort_options",
        labels: &[
            ("request_time", "Request Time"),
            ("query_time", "Query Time"),
            ("queries", "Queries"),
            ("access_count", "Access Count"),
            ("route_name", "Route Name"),
        ],
    },
    StaticSection {
        name: "order_options",
        labels: &[
            ("descending", "Descending"),
            ("ascending", "Ascending"),
        ],
    },
];
