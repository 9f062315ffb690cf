use std::io::Read;
use std::path::Path;

use thiserror::Error;

use super::model::{SalaryRecord, SalaryTable};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Everything that can stop a table from loading. All of these are fatal
/// for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetching {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV missing '{0}' column")]
    MissingColumn(&'static str),
    #[error("CSV row {row}: '{value}' in column '{column}' is not a number")]
    InvalidValue {
        row: usize,
        column: &'static str,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Fetch the source CSV over HTTP and parse it. No retry, no cache.
pub fn fetch_table(url: &str) -> Result<SalaryTable, LoadError> {
    let http = |source: reqwest::Error| LoadError::Http {
        url: url.to_string(),
        source,
    };
    let response = reqwest::blocking::get(url)
        .and_then(|r| r.error_for_status())
        .map_err(http)?;
    let body = response.bytes().map_err(http)?;
    log::debug!("Fetched {} bytes from {url}", body.len());
    parse_csv(body.as_ref())
}

/// Load a local copy of the salary CSV.
pub fn load_file(path: &Path) -> Result<SalaryTable, LoadError> {
    let file = std::fs::File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_csv(file)
}

// ---------------------------------------------------------------------------
// CSV parser
// ---------------------------------------------------------------------------

/// Header row required, column order free. Extra columns are kept verbatim
/// in [`SalaryRecord::cells`].
pub fn parse_csv<R: Read>(input: R) -> Result<SalaryTable, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let idx = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let year_idx = idx("ano")?;
    let seniority_idx = idx("senioridade")?;
    let contract_idx = idx("contrato")?;
    let size_idx = idx("tamanho_empresa")?;
    let title_idx = idx("cargo")?;
    let usd_idx = idx("usd")?;
    let remote_idx = idx("remoto")?;
    let iso3_idx = idx("residencia_iso3")?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        let cell = |i: usize| record.get(i).unwrap_or("").trim();

        let year = parse_number::<i64>(cell(year_idx), row_no, "ano")?;
        let salary_usd = parse_number::<f64>(cell(usd_idx), row_no, "usd")?;
        if !salary_usd.is_finite() {
            return Err(LoadError::InvalidValue {
                row: row_no,
                column: "usd",
                value: cell(usd_idx).to_string(),
            });
        }

        records.push(SalaryRecord {
            year,
            seniority: cell(seniority_idx).to_string(),
            contract: cell(contract_idx).to_string(),
            company_size: cell(size_idx).to_string(),
            job_title: cell(title_idx).to_string(),
            salary_usd,
            remote_type: cell(remote_idx).to_string(),
            residence_country_iso3: cell(iso3_idx).to_string(),
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(SalaryTable::from_records(headers, records))
}

fn parse_number<T: std::str::FromStr>(
    s: &str,
    row: usize,
    column: &'static str,
) -> Result<T, LoadError> {
    // pandas writes integral floats as "2024.0"
    let s = match s.strip_suffix(".0") {
        Some(int) if column == "ano" => int,
        _ => s,
    };
    s.parse::<T>().map_err(|_| LoadError::InvalidValue {
        row,
        column,
        value: s.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CategoryValue, FilterColumn};

    const SAMPLE: &str = "\
ano,senioridade,contrato,cargo,salario,moeda,usd,residencia,remoto,empresa,tamanho_empresa,residencia_iso3
2025,senior,integral,Data Scientist,180000,USD,180000,US,remoto,US,media,USA
2024.0,junior,integral,Data Analyst,50000,EUR,54000,DE,presencial,DE,pequena,DEU
";

    #[test]
    fn parses_all_columns() {
        let table = parse_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns.len(), 12);
        assert_eq!(table.columns[0], "ano");

        let first = &table.records[0];
        assert_eq!(first.year, 2025);
        assert_eq!(first.job_title, "Data Scientist");
        assert_eq!(first.salary_usd, 180_000.0);
        assert_eq!(first.residence_country_iso3, "USA");
        assert_eq!(first.cells.len(), 12);
        assert_eq!(first.cells[5], "USD");

        assert_eq!(table.records[1].year, 2024);
        assert!(table
            .facet(FilterColumn::CompanySize)
            .contains(&CategoryValue::Text("pequena".into())));
    }

    #[test]
    fn missing_column_is_reported() {
        let csv = "ano,senioridade,contrato,cargo,usd,remoto,residencia_iso3\n";
        match parse_csv(csv.as_bytes()) {
            Err(LoadError::MissingColumn(name)) => assert_eq!(name, "tamanho_empresa"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_salary_is_rejected() {
        let csv = "\
ano,senioridade,contrato,tamanho_empresa,cargo,usd,remoto,residencia_iso3
2023,senior,integral,media,ML Engineer,lots,remoto,BRA
";
        match parse_csv(csv.as_bytes()) {
            Err(LoadError::InvalidValue { row, column, value }) => {
                assert_eq!(row, 0);
                assert_eq!(column, "usd");
                assert_eq!(value, "lots");
            }
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn non_finite_salary_is_rejected() {
        for bad in ["NaN", "inf", "-infinity"] {
            let csv = format!(
                "ano,senioridade,contrato,tamanho_empresa,cargo,usd,remoto,residencia_iso3\n\
                 2023,senior,integral,media,ML Engineer,0.1,remoto,BRA\n\
                 2023,senior,integral,media,ML Engineer,{bad},remoto,BRA\n"
            );
            match parse_csv(csv.as_bytes()) {
                Err(LoadError::InvalidValue { row, column, value }) => {
                    assert_eq!(row, 1);
                    assert_eq!(column, "usd");
                    assert_eq!(value, bad);
                }
                other => panic!("expected InvalidValue for {bad}, got {other:?}"),
            }
        }
    }

    #[test]
    fn ragged_rows_are_malformed() {
        let csv = "\
ano,senioridade,contrato,tamanho_empresa,cargo,usd,remoto,residencia_iso3
2023,senior,integral
";
        assert!(matches!(parse_csv(csv.as_bytes()), Err(LoadError::Csv(_))));
    }

    #[test]
    fn header_only_gives_empty_table() {
        let csv = "ano,senioridade,contrato,tamanho_empresa,cargo,usd,remoto,residencia_iso3\n";
        let table = parse_csv(csv.as_bytes()).unwrap();
        assert!(table.is_empty());
        assert!(table.facet(FilterColumn::Year).is_empty());
    }
}
