use std::collections::{BTreeMap, BTreeSet};

use super::model::{CategoryValue, FilterColumn, SalaryTable};

// ---------------------------------------------------------------------------
// Filter predicate: which distinct values are selected per sidebar column
// ---------------------------------------------------------------------------

/// Per-column selection state: maps column → set of selected values.
/// An empty (or absent) set selects nothing.
pub type FilterState = BTreeMap<FilterColumn, BTreeSet<CategoryValue>>;

/// Initialise a [`FilterState`] with every value selected.
pub fn init_filter_state(table: &SalaryTable) -> FilterState {
    FilterColumn::ALL
        .iter()
        .map(|&col| (col, table.facet(col).clone()))
        .collect()
}

/// Return indices of records that pass all four filters, in source order.
///
/// A record passes when, for every sidebar column, its value is in the
/// selected set. An empty selection for any column rejects every record.
pub fn filtered_indices(table: &SalaryTable, filters: &FilterState) -> Vec<usize> {
    let mut active = Vec::with_capacity(FilterColumn::ALL.len());
    for col in FilterColumn::ALL {
        match filters.get(&col) {
            Some(selected) if !selected.is_empty() => {
                // Everything selected → no effective constraint
                if selected == table.facet(col) {
                    continue;
                }
                active.push((col, selected));
            }
            _ => return Vec::new(),
        }
    }

    table
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| active.iter().all(|(col, selected)| rec.is_in(*col, selected)))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::parse_csv;

    const FIVE_ROWS: &str = "\
ano,senioridade,contrato,tamanho_empresa,cargo,usd,remoto,residencia_iso3
2021,junior,integral,pequena,Data Analyst,40000,presencial,BRA
2022,senior,integral,grande,Data Scientist,150000,remoto,USA
2021,senior,freelancer,media,Data Engineer,120000,hibrido,DEU
2022,junior,integral,media,Data Analyst,55000,remoto,BRA
2022,senior,parcial,pequena,ML Engineer,170000,remoto,USA
";

    fn table() -> SalaryTable {
        parse_csv(FIVE_ROWS.as_bytes()).unwrap()
    }

    fn text(s: &str) -> CategoryValue {
        CategoryValue::Text(s.to_string())
    }

    #[test]
    fn all_selected_is_identity() {
        let t = table();
        let filters = init_filter_state(&t);
        assert_eq!(filtered_indices(&t, &filters), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn empty_selection_selects_nothing() {
        let t = table();
        for col in FilterColumn::ALL {
            let mut filters = init_filter_state(&t);
            filters.insert(col, BTreeSet::new());
            assert!(filtered_indices(&t, &filters).is_empty(), "{col:?}");

            let mut filters = init_filter_state(&t);
            filters.remove(&col);
            assert!(filtered_indices(&t, &filters).is_empty(), "{col:?} absent");
        }
    }

    #[test]
    fn single_year_excludes_other_years() {
        let t = table();
        let mut filters = init_filter_state(&t);
        filters.insert(FilterColumn::Year, [CategoryValue::Integer(2022)].into());
        let rows = filtered_indices(&t, &filters);
        assert_eq!(rows, vec![1, 3, 4]);
        assert!(rows.iter().all(|&i| t.records[i].year == 2022));
    }

    #[test]
    fn criteria_combine_with_and() {
        let t = table();
        let mut filters = init_filter_state(&t);
        filters.insert(FilterColumn::Year, [CategoryValue::Integer(2022)].into());
        filters.insert(FilterColumn::Seniority, [text("senior")].into());
        filters.insert(FilterColumn::Contract, [text("integral")].into());
        // OR semantics would also admit rows 0, 2, 3 and 4.
        assert_eq!(filtered_indices(&t, &filters), vec![1]);
        let rec = &t.records[1];
        assert_eq!(rec.job_title, "Data Scientist");
        assert_eq!(rec.salary_usd, 150_000.0);
    }

    #[test]
    fn shrinking_a_selection_never_adds_rows() {
        let t = table();
        let full = init_filter_state(&t);
        let all_rows = filtered_indices(&t, &full);

        for col in FilterColumn::ALL {
            let values: Vec<_> = t.facet(col).iter().cloned().collect();
            let mut filters = full.clone();
            let mut previous = all_rows.clone();
            for v in &values {
                filters.get_mut(&col).unwrap().remove(v);
                let rows = filtered_indices(&t, &filters);
                assert!(rows.iter().all(|r| previous.contains(r)));
                assert!(rows.len() <= previous.len());
                previous = rows;
            }
            assert!(previous.is_empty());
        }
    }

    #[test]
    fn preserves_source_order() {
        let t = table();
        let mut filters = init_filter_state(&t);
        filters.insert(FilterColumn::CompanySize, [text("pequena"), text("media")].into());
        let rows = filtered_indices(&t, &filters);
        assert_eq!(rows, vec![0, 2, 3, 4]);
    }
}
