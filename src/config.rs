use serde::Deserialize;

/// Fixed settings of the dashboard. The binary always runs with
/// [`DashboardConfig::default`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// CSV fetched once at startup.
    pub source_url: String,
    pub histogram_bins: usize,
    pub top_job_titles: usize,
    /// Job title whose per-country mean salary is mapped.
    pub map_job_title: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_url: "https://raw.githubusercontent.com/vqrca/dashboard_salarios_dados/refs/heads/main/dados-imersao-final.csv".to_string(),
            histogram_bins: 30,
            top_job_titles: 10,
            map_job_title: "Data Scientist".to_string(),
            window_size: [1400.0, 900.0],
            min_window_size: [800.0, 500.0],
        }
    }
}
