use super::error::AppError;
use serde::Deserialize;

/// Aggregate figures computed server-side for a filtered set of invoices.
///
/// The two `GD` fields are not plain camelCase on the wire, hence the
/// explicit renames.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DashboardSummary {
    #[serde(rename = "totalEnergyConsumed")]
    pub total_energy_consumed: f64,

    #[serde(rename = "totalEnergyCompensated")]
    pub total_energy_compensated: f64,

    #[serde(rename = "totalValueWithoutGD")]
    pub total_value_without_gd: f64,

    #[serde(rename = "totalEconomyGD")]
    pub total_economy_gd: f64,
}

/// A named pair of category labels and values feeding one chart panel.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartSeries {
    pub name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl DashboardSummary {
    /// Consumed vs. compensated energy, in kWh.
    pub fn energy_series(&self) -> ChartSeries {
        ChartSeries {
            name: "Energia (kWh)".to_string(),
            labels: vec![
                "Consumo de Energia".to_string(),
                "Energia Compensada".to_string(),
            ],
            values: vec![self.total_energy_consumed, self.total_energy_compensated],
        }
    }

    /// Gross value vs. distributed-generation savings, in R$.
    pub fn financial_series(&self) -> ChartSeries {
        ChartSeries {
            name: "Valor (R$)".to_string(),
            labels: vec![
                "Valor Total Sem GD".to_string(),
                "Economia GD".to_string(),
            ],
            values: vec![self.total_value_without_gd, self.total_economy_gd],
        }
    }
}

/// Energy card text: whole-number readings stay whole ("120 kWh").
pub fn format_kwh(value: f64) -> String {
    format!("{value} kWh")
}

/// Currency card text, always two decimal places ("R$ 450.50").
pub fn format_brl(value: f64) -> String {
    format!("R$ {value:.2}")
}

/// Rendering strategy selector for the dashboard's chart panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn code(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
        }
    }

    /// Human-readable label for the selector control.
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Barra",
            ChartKind::Line => "Linha",
            ChartKind::Pie => "Pizza",
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[ChartKind::Bar, ChartKind::Line, ChartKind::Pie]
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            _ => Err(AppError::DataError(format!("Invalid chart kind: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> DashboardSummary {
        DashboardSummary {
            total_energy_consumed: 120.0,
            total_energy_compensated: 80.0,
            total_value_without_gd: 450.5,
            total_economy_gd: 120.25,
        }
    }

    #[test]
    fn test_summary_deserialization_wire_names() {
        let json = r#"{
            "totalEnergyConsumed": 120,
            "totalEnergyCompensated": 80,
            "totalValueWithoutGD": 450.5,
            "totalEconomyGD": 120.25
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary, sample_summary());
    }

    #[test]
    fn test_energy_series_shape() {
        let series = sample_summary().energy_series();
        assert_eq!(series.labels, vec!["Consumo de Energia", "Energia Compensada"]);
        assert_eq!(series.values, vec![120.0, 80.0]);
    }

    #[test]
    fn test_financial_series_shape() {
        let series = sample_summary().financial_series();
        assert_eq!(series.labels, vec!["Valor Total Sem GD", "Economia GD"]);
        assert_eq!(series.values, vec![450.5, 120.25]);
    }

    #[test]
    fn test_card_formatting() {
        assert_eq!(format_kwh(120.0), "120 kWh");
        assert_eq!(format_kwh(80.0), "80 kWh");
        assert_eq!(format_brl(450.5), "R$ 450.50");
        assert_eq!(format_brl(120.25), "R$ 120.25");
    }

    #[test]
    fn test_chart_kind_parsing() {
        assert_eq!("bar".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert_eq!("pie".parse::<ChartKind>().unwrap(), ChartKind::Pie);
        assert!("donut".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_chart_kind_labels() {
        assert_eq!(ChartKind::all().len(), 3);
        assert_eq!(ChartKind::Line.label(), "Linha");
        assert_eq!(ChartKind::default(), ChartKind::Bar);
    }
}
