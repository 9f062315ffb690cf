use crate::config::DashboardConfig;

use super::charts::{
    country_mean_salary, remote_distribution, salary_histogram, top_job_titles, ChartSlot,
    CountrySalary, Histogram, RemoteShare, TitleSalary,
};
use super::filter::{filtered_indices, FilterState};
use super::metrics::{compute_metrics, Metrics};
use super::model::SalaryTable;

/// Everything the central panel draws for one set of filter selections.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    /// Indices of the filtered view, in source order.
    pub rows: Vec<usize>,
    pub metrics: Metrics,
    pub top_titles: ChartSlot<Vec<TitleSalary>>,
    pub histogram: ChartSlot<Histogram>,
    pub remote_shares: ChartSlot<Vec<RemoteShare>>,
    /// Guarded on the filtered view only; `Ready(vec![])` when no row has
    /// the mapped job title.
    pub country_salaries: ChartSlot<Vec<CountrySalary>>,
}

/// Recompute the whole dashboard from scratch.
pub fn build_dashboard(
    table: &SalaryTable,
    filters: &FilterState,
    config: &DashboardConfig,
) -> Dashboard {
    let rows = filtered_indices(table, filters);
    log::debug!("{} of {} rows pass the filters", rows.len(), table.len());

    let metrics = compute_metrics(table, &rows);
    let top_titles = ChartSlot::guard(&rows, || {
        top_job_titles(table, &rows, config.top_job_titles)
    });
    let histogram = ChartSlot::guard(&rows, || {
        salary_histogram(table, &rows, config.histogram_bins)
    });
    let remote_shares = ChartSlot::guard(&rows, || remote_distribution(table, &rows));
    let country_salaries = ChartSlot::guard(&rows, || {
        country_mean_salary(table, &rows, &config.map_job_title)
    });

    if rows.is_empty() {
        log::warn!("Filtered view is empty; charts fall back to the no-data notice");
    } else if country_salaries.ready().is_some_and(Vec::is_empty) {
        log::warn!("No '{}' rows in the filtered view; map is empty", config.map_job_title);
    }

    Dashboard {
        rows,
        metrics,
        top_titles,
        histogram,
        remote_shares,
        country_salaries,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;
    use crate::data::filter::init_filter_state;
    use crate::data::loader::parse_csv;
    use crate::data::model::{CategoryValue, FilterColumn};

    const ROWS: &str = "\
ano,senioridade,contrato,tamanho_empresa,cargo,usd,remoto,residencia_iso3
2021,junior,integral,pequena,Data Analyst,40000,presencial,BRA
2022,senior,integral,grande,Data Scientist,150000,remoto,USA
2021,senior,freelancer,media,Data Engineer,120000,hibrido,DEU
2022,junior,integral,media,Data Analyst,55000,remoto,BRA
2022,senior,parcial,pequena,ML Engineer,170000,remoto,USA
";

    #[test]
    fn empty_view_falls_back_everywhere() {
        let table = parse_csv(ROWS.as_bytes()).unwrap();
        let mut filters = init_filter_state(&table);
        filters.insert(FilterColumn::Year, Default::default());

        let d = build_dashboard(&table, &filters, &DashboardConfig::default());
        assert!(d.rows.is_empty());
        assert_eq!(d.metrics, Metrics::default());
        assert_eq!(d.top_titles, ChartSlot::NoData);
        assert_eq!(d.histogram, ChartSlot::NoData);
        assert_eq!(d.remote_shares, ChartSlot::NoData);
        assert_eq!(d.country_salaries, ChartSlot::NoData);
    }

    #[test]
    fn map_without_target_title_is_empty_not_missing() {
        let table = parse_csv(ROWS.as_bytes()).unwrap();
        let mut filters = init_filter_state(&table);
        filters.insert(FilterColumn::Year, [CategoryValue::Integer(2021)].into());

        let d = build_dashboard(&table, &filters, &DashboardConfig::default());
        assert_eq!(d.rows, vec![0, 2]);
        assert_eq!(d.country_salaries, ChartSlot::Ready(Vec::new()));
        assert!(d.top_titles.ready().is_some());
    }

    #[test]
    fn views_agree_with_each_other() {
        let table = parse_csv(ROWS.as_bytes()).unwrap();
        let filters = init_filter_state(&table);
        let d = build_dashboard(&table, &filters, &DashboardConfig::default());

        assert_eq!(d.metrics.record_count, d.rows.len());
        let hist = d.histogram.ready().unwrap();
        assert_eq!(hist.counts.len(), 30);
        assert_eq!(hist.total(), d.metrics.record_count);
        let distinct_titles: BTreeSet<&str> = d
            .rows
            .iter()
            .map(|&i| table.records[i].job_title.as_str())
            .collect();
        let top = d.top_titles.ready().unwrap();
        assert_eq!(top.len(), distinct_titles.len().min(10));
        assert_eq!(top.last().unwrap().job_title, "ML Engineer");
        let countries = d.country_salaries.ready().unwrap();
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].iso3, "USA");
    }

    #[test]
    fn top_titles_cut_to_ten_of_twelve() {
        let mut csv =
            String::from("ano,senioridade,contrato,tamanho_empresa,cargo,usd,remoto,residencia_iso3\n");
        for t in 0..12 {
            let salary = 50_000 + t * 10_000;
            csv.push_str(&format!(
                "2024,senior,integral,media,T{t:02},{salary},remoto,USA\n"
            ));
        }
        let table = parse_csv(csv.as_bytes()).unwrap();
        let filters = init_filter_state(&table);
        let config = DashboardConfig::default();
        let d = build_dashboard(&table, &filters, &config);

        let top = d.top_titles.ready().unwrap();
        assert_eq!(top.len(), config.top_job_titles);
        let titles: Vec<&str> = top.iter().map(|r| r.job_title.as_str()).collect();
        let expected: Vec<String> = (2..12).map(|t| format!("T{t:02}")).collect();
        assert_eq!(titles, expected);
        assert!(!titles.contains(&"T00") && !titles.contains(&"T01"));
        assert!(top.windows(2).all(|w| w[0].mean_salary < w[1].mean_salary));
        assert_eq!(top[0].mean_salary, 70_000.0);
        assert_eq!(top[9].mean_salary, 160_000.0);
    }
}
