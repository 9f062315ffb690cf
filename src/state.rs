use std::fmt::Display;

use crate::config::DashboardConfig;
use crate::data::dashboard::{build_dashboard, Dashboard};
use crate::data::filter::{init_filter_state, FilterState};
use crate::data::model::{CategoryValue, FilterColumn, SalaryTable};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state of one session, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Loaded table (None until a load succeeds).
    pub table: Option<SalaryTable>,

    /// Where the table came from (URL or path), shown in the top bar.
    pub source: Option<String>,

    /// Per-column filter selections.
    pub filters: FilterState,

    /// Derived view for the current selections (recomputed on change).
    pub dashboard: Option<Dashboard>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            table: None,
            source: None,
            filters: FilterState::default(),
            dashboard: None,
            status_message: None,
        }
    }

    /// Ingest a newly loaded table and select every filter value.
    pub fn set_table(&mut self, table: SalaryTable, source: impl Into<String>) {
        self.filters = init_filter_state(&table);
        self.table = Some(table);
        self.source = Some(source.into());
        self.status_message = None;
        self.refilter();
    }

    /// Record a fatal load failure. Any previously loaded table is dropped.
    pub fn set_load_error(&mut self, err: impl Display) {
        self.table = None;
        self.dashboard = None;
        self.filters.clear();
        self.status_message = Some(format!("Error: {err}"));
    }

    /// Recompute the dashboard after a filter change.
    pub fn refilter(&mut self) {
        self.dashboard = self
            .table
            .as_ref()
            .map(|table| build_dashboard(table, &self.filters, &self.config));
    }

    /// Toggle a single value in a column's selection.
    pub fn toggle_filter_value(&mut self, column: FilterColumn, value: &CategoryValue) {
        let selected = self.filters.entry(column).or_default();
        if !selected.remove(value) {
            selected.insert(value.clone());
        }
        self.refilter();
    }

    /// Select all values in a column.
    pub fn select_all(&mut self, column: FilterColumn) {
        if let Some(table) = &self.table {
            self.filters.insert(column, table.facet(column).clone());
            self.refilter();
        }
    }

    /// Deselect all values in a column.
    pub fn select_none(&mut self, column: FilterColumn) {
        self.filters.insert(column, Default::default());
        self.refilter();
    }

    pub fn visible_rows(&self) -> &[usize] {
        self.dashboard
            .as_ref()
            .map(|d| d.rows.as_slice())
            .unwrap_or_default()
    }
}
