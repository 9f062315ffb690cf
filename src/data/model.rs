use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

// ---------------------------------------------------------------------------
// CategoryValue – a single value of a filterable column
// ---------------------------------------------------------------------------

/// A value offered by one of the sidebar filters.
/// Years sort numerically, every other column lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CategoryValue {
    Integer(i64),
    Text(String),
}

impl fmt::Display for CategoryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryValue::Integer(i) => write!(f, "{i}"),
            CategoryValue::Text(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// FilterColumn – the four columns exposed in the sidebar
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FilterColumn {
    Year,
    Seniority,
    Contract,
    CompanySize,
}

impl FilterColumn {
    /// Sidebar order.
    pub const ALL: [FilterColumn; 4] = [
        FilterColumn::Year,
        FilterColumn::Seniority,
        FilterColumn::Contract,
        FilterColumn::CompanySize,
    ];

    /// Label shown above the multi-select control.
    pub fn label(self) -> &'static str {
        match self {
            FilterColumn::Year => "Ano",
            FilterColumn::Seniority => "Senioridade",
            FilterColumn::Contract => "Contrato",
            FilterColumn::CompanySize => "Tamanho da Empresa",
        }
    }
}

// ---------------------------------------------------------------------------
// SalaryRecord – one row of the source CSV
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct SalaryRecord {
    pub year: i64,
    pub seniority: String,
    pub contract: String,
    pub company_size: String,
    pub job_title: String,
    pub salary_usd: f64,
    pub remote_type: String,
    pub residence_country_iso3: String,
    /// Raw cells for every source column, in header order.
    pub cells: Vec<String>,
}

impl SalaryRecord {
    /// The record's value for a sidebar column.
    pub fn category(&self, column: FilterColumn) -> CategoryValue {
        match column {
            FilterColumn::Year => CategoryValue::Integer(self.year),
            FilterColumn::Seniority => CategoryValue::Text(self.seniority.clone()),
            FilterColumn::Contract => CategoryValue::Text(self.contract.clone()),
            FilterColumn::CompanySize => CategoryValue::Text(self.company_size.clone()),
        }
    }

    /// Whether this record's value for `column` is among `selected`.
    pub fn is_in(&self, column: FilterColumn, selected: &BTreeSet<CategoryValue>) -> bool {
        selected.contains(&self.category(column))
    }
}

// ---------------------------------------------------------------------------
// SalaryTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The parsed dataset with pre-computed filter facets.
/// Never mutated after construction.
#[derive(Debug, Clone)]
pub struct SalaryTable {
    /// Source header, in file order.
    pub columns: Vec<String>,
    pub records: Vec<SalaryRecord>,
    /// For each sidebar column the sorted set of distinct values.
    pub facets: BTreeMap<FilterColumn, BTreeSet<CategoryValue>>,
}

impl SalaryTable {
    /// Build facet indices from the loaded records.
    pub fn from_records(columns: Vec<String>, records: Vec<SalaryRecord>) -> Self {
        let mut facets: BTreeMap<FilterColumn, BTreeSet<CategoryValue>> = FilterColumn::ALL
            .iter()
            .map(|&col| (col, BTreeSet::new()))
            .collect();

        for rec in &records {
            for col in FilterColumn::ALL {
                facets.entry(col).or_default().insert(rec.category(col));
            }
        }

        SalaryTable {
            columns,
            records,
            facets,
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct values of a sidebar column (empty for an empty table).
    pub fn facet(&self, column: FilterColumn) -> &BTreeSet<CategoryValue> {
        static EMPTY: BTreeSet<CategoryValue> = BTreeSet::new();
        self.facets.get(&column).unwrap_or(&EMPTY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i64, seniority: &str) -> SalaryRecord {
        SalaryRecord {
            year,
            seniority: seniority.to_string(),
            contract: "integral".to_string(),
            company_size: "media".to_string(),
            job_title: "Data Engineer".to_string(),
            salary_usd: 100_000.0,
            remote_type: "remoto".to_string(),
            residence_country_iso3: "USA".to_string(),
            cells: Vec::new(),
        }
    }

    #[test]
    fn facets_are_sorted_and_distinct() {
        let table = SalaryTable::from_records(
            Vec::new(),
            vec![
                record(2024, "senior"),
                record(2020, "junior"),
                record(2024, "junior"),
                record(2021, "pleno"),
            ],
        );
        let years: Vec<_> = table.facet(FilterColumn::Year).iter().cloned().collect();
        assert_eq!(
            years,
            vec![
                CategoryValue::Integer(2020),
                CategoryValue::Integer(2021),
                CategoryValue::Integer(2024)
            ]
        );
        let seniority: Vec<String> = table
            .facet(FilterColumn::Seniority)
            .iter()
            .map(|v| v.to_string())
            .collect();
        assert_eq!(seniority, vec!["junior", "pleno", "senior"]);
    }

    #[test]
    fn years_sort_numerically() {
        let mut values = vec![
            CategoryValue::Integer(10),
            CategoryValue::Integer(9),
            CategoryValue::Integer(100),
        ];
        values.sort();
        assert_eq!(values[0], CategoryValue::Integer(9));
        assert_eq!(values[2], CategoryValue::Integer(100));
    }

    #[test]
    fn membership_matches_category() {
        let rec = record(2023, "senior");
        let selected: BTreeSet<_> = [CategoryValue::Text("senior".into())].into();
        assert!(rec.is_in(FilterColumn::Seniority, &selected));
        assert!(!rec.is_in(FilterColumn::Contract, &selected));
        let years: BTreeSet<_> = [CategoryValue::Integer(2023)].into();
        assert!(rec.is_in(FilterColumn::Year, &years));
    }

    #[test]
    fn membership_uses_set_lookup_across_many_values() {
        let rec = record(2023, "senior");
        let selected: BTreeSet<_> = ["junior", "pleno", "senior", "lead", "executivo"]
            .into_iter()
            .map(|s| CategoryValue::Text(s.to_string()))
            .collect();
        assert!(rec.is_in(FilterColumn::Seniority, &selected));
        // A year equal in text form is a different value.
        let text_year: BTreeSet<_> = [CategoryValue::Text("2023".into())].into();
        assert!(!rec.is_in(FilterColumn::Year, &text_year));
    }
}
