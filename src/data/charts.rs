use std::collections::BTreeMap;

use super::model::SalaryTable;

// ---------------------------------------------------------------------------
// Chart slot
// ---------------------------------------------------------------------------

/// Contents of one chart panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartSlot<T> {
    /// The filtered view is empty; the panel shows a warning instead.
    NoData,
    Ready(T),
}

impl<T> ChartSlot<T> {
    /// `NoData` for an empty view, otherwise `Ready(compute())`.
    pub fn guard(rows: &[usize], compute: impl FnOnce() -> T) -> Self {
        if rows.is_empty() {
            ChartSlot::NoData
        } else {
            ChartSlot::Ready(compute())
        }
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartSlot::Ready(v) => Some(v),
            ChartSlot::NoData => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Aggregate rows
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct TitleSalary {
    pub job_title: String,
    pub mean_salary: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Left edge of the first bin.
    pub start: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Centre of bin `i`.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.start + (i as f64 + 0.5) * self.bin_width
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoteShare {
    pub remote_type: String,
    pub count: usize,
    /// Share of the view in percent.
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CountrySalary {
    pub iso3: String,
    pub mean_salary: f64,
}

// ---------------------------------------------------------------------------
// Aggregations
// ---------------------------------------------------------------------------

/// Mean salary per job title, `n` highest, returned in ascending order.
/// Titles with equal means are cut in alphabetical order.
pub fn top_job_titles(table: &SalaryTable, rows: &[usize], n: usize) -> Vec<TitleSalary> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for &i in rows {
        let rec = &table.records[i];
        let entry = groups.entry(rec.job_title.as_str()).or_default();
        entry.0 += rec.salary_usd;
        entry.1 += 1;
    }

    let mut means: Vec<TitleSalary> = groups
        .into_iter()
        .map(|(title, (sum, count))| TitleSalary {
            job_title: title.to_string(),
            mean_salary: sum / count as f64,
        })
        .collect();

    means.sort_by(|a, b| b.mean_salary.total_cmp(&a.mean_salary));
    means.truncate(n);
    means.sort_by(|a, b| a.mean_salary.total_cmp(&b.mean_salary));
    means
}

/// Equal-width histogram of `salary_usd` over `[min, max]` of the view.
/// The maximum lands in the last bin. A degenerate range is widened to one
/// dollar so every row still falls in the first bin.
pub fn salary_histogram(table: &SalaryTable, rows: &[usize], bins: usize) -> Histogram {
    let bins = bins.max(1);
    let salaries = rows.iter().map(|&i| table.records[i].salary_usd);
    let (min, max) = salaries.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if rows.is_empty() {
        return Histogram {
            start: 0.0,
            bin_width: 1.0,
            counts: vec![0; bins],
        };
    }

    let range = if max > min { max - min } else { 1.0 };
    let bin_width = range / bins as f64;
    let mut counts = vec![0usize; bins];
    for &i in rows {
        let offset = (table.records[i].salary_usd - min) / bin_width;
        let bin = (offset.floor() as usize).min(bins - 1);
        counts[bin] += 1;
    }

    Histogram {
        start: min,
        bin_width,
        counts,
    }
}

/// Row count and share per `remote_type`, largest first (ties alphabetical).
pub fn remote_distribution(table: &SalaryTable, rows: &[usize]) -> Vec<RemoteShare> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for &i in rows {
        *counts.entry(table.records[i].remote_type.as_str()).or_default() += 1;
    }

    let total = rows.len().max(1) as f64;
    let mut shares: Vec<RemoteShare> = counts
        .into_iter()
        .map(|(remote_type, count)| RemoteShare {
            remote_type: remote_type.to_string(),
            count,
            percent: count as f64 * 100.0 / total,
        })
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares
}

/// Mean salary per residence country for one job title, ordered by ISO3 code.
/// Empty when no row of the view has that title.
pub fn country_mean_salary(
    table: &SalaryTable,
    rows: &[usize],
    job_title: &str,
) -> Vec<CountrySalary> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for rec in rows
        .iter()
        .map(|&i| &table.records[i])
        .filter(|rec| rec.job_title == job_title)
    {
        let entry = groups.entry(rec.residence_country_iso3.as_str()).or_default();
        entry.0 += rec.salary_usd;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(iso3, (sum, count))| CountrySalary {
            iso3: iso3.to_string(),
            mean_salary: sum / count as f64,
        })
        .collect()
}
