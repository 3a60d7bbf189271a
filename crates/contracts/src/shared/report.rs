//! Downloadable reports over a date range.

use chrono::NaiveDate;

use super::validation::DATE_FORMAT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Purchases,
    Sales,
    Entries,
    Outputs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Pdf,
    Excel,
}

impl ReportKind {
    pub const ALL: [ReportKind; 4] = [
        ReportKind::Purchases,
        ReportKind::Sales,
        ReportKind::Entries,
        ReportKind::Outputs,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ReportKind::Purchases => "Reporte de compras",
            ReportKind::Sales => "Reporte de ventas",
            ReportKind::Entries => "Reporte de entradas",
            ReportKind::Outputs => "Reporte de salidas",
        }
    }

    /// The server names the excel sales report `sale-` and the pdf one `sell-`.
    fn slug(&self, format: ReportFormat) -> &'static str {
        match (self, format) {
            (ReportKind::Purchases, _) => "buy",
            (ReportKind::Sales, ReportFormat::Pdf) => "sell",
            (ReportKind::Sales, ReportFormat::Excel) => "sale",
            (ReportKind::Entries, _) => "entry",
            (ReportKind::Outputs, _) => "output",
        }
    }

    pub fn path(&self, format: ReportFormat, start: NaiveDate, end: NaiveDate) -> String {
        let suffix = match format {
            ReportFormat::Pdf => "pdf",
            ReportFormat::Excel => "excel",
        };
        format!(
            "/api/sale/{}-report-{}/?start_date={}&end_date={}",
            self.slug(format),
            suffix,
            start.format(DATE_FORMAT),
            end.format(DATE_FORMAT)
        )
    }
}

/// Both dates parse and the range is not inverted.
pub fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), &'static str> {
    let start = NaiveDate::parse_from_str(start.trim(), DATE_FORMAT)
        .map_err(|_| "Ingrese una fecha de inicio válida.")?;
    let end = NaiveDate::parse_from_str(end.trim(), DATE_FORMAT)
        .map_err(|_| "Ingrese una fecha de fin válida.")?;
    if end < start {
        return Err("La fecha de fin no puede ser anterior a la de inicio.");
    }
    Ok((start, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_paths() {
        let (start, end) = parse_range("2024-01-01", "2024-01-31").expect("range");
        assert_eq!(
            ReportKind::Sales.path(ReportFormat::Pdf, start, end),
            "/api/sale/sell-report-pdf/?start_date=2024-01-01&end_date=2024-01-31"
        );
        assert_eq!(
            ReportKind::Sales.path(ReportFormat::Excel, start, end),
            "/api/sale/sale-report-excel/?start_date=2024-01-01&end_date=2024-01-31"
        );
        assert!(ReportKind::Purchases
            .path(ReportFormat::Excel, start, end)
            .starts_with("/api/sale/buy-report-excel/"));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!(parse_range("2024-02-01", "2024-01-01").is_err());
        assert!(parse_range("", "2024-01-01").is_err());
    }
}
