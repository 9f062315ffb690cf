use std::collections::BTreeMap;

use super::model::SalaryTable;

/// Headline numbers for the filtered view.
#[derive(Debug, Clone, PartialEq)]
pub struct Metrics {
    pub mean_salary: f64,
    pub max_salary: f64,
    pub record_count: usize,
    /// Most frequent job title; ties go to the alphabetically lowest title.
    pub top_job_title: String,
}

impl Default for Metrics {
    fn default() -> Self {
        Self {
            mean_salary: 0.0,
            max_salary: 0.0,
            record_count: 0,
            top_job_title: String::new(),
        }
    }
}

/// Compute the four headline metrics over `rows`. Empty view → defaults.
pub fn compute_metrics(table: &SalaryTable, rows: &[usize]) -> Metrics {
    if rows.is_empty() {
        return Metrics::default();
    }

    let mut sum = 0.0;
    let mut max = f64::NEG_INFINITY;
    let mut title_counts: BTreeMap<&str, usize> = BTreeMap::new();

    for &i in rows {
        let rec = &table.records[i];
        sum += rec.salary_usd;
        max = max.max(rec.salary_usd);
        *title_counts.entry(rec.job_title.as_str()).or_default() += 1;
    }

    // BTreeMap iterates alphabetically; keep the first title reaching the top count.
    let top_job_title = title_counts
        .iter()
        .fold(None::<(&str, usize)>, |best, (&title, &n)| match best {
            Some((_, best_n)) if best_n >= n => best,
            _ => Some((title, n)),
        })
        .map(|(title, _)| title.to_string())
        .unwrap_or_default();

    Metrics {
        mean_salary: sum / rows.len() as f64,
        max_salary: max,
        record_count: rows.len(),
        top_job_title,
    }
}
