use super::error::AppError;

/// Years selectable in the invoice library filter.
pub const YEARS: &[&str] = &["2018", "2019", "2020", "2021", "2022", "2023", "2024"];

/// Most recent supported year, used as the library's initial filter.
pub const DEFAULT_YEAR: &str = "2024";

/// Years selectable in the dashboard filter (narrower set, plus an
/// "unselected" empty option rendered by the view).
pub const DASHBOARD_YEARS: &[&str] = &["2022", "2023", "2024"];

/// Billing months as abbreviated in reference-period tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Month {
    Jan,
    Fev,
    Mar,
    Abr,
    Mai,
    Jun,
    Jul,
    Ago,
    Set,
    Out,
    Nov,
    Dez,
}

impl Month {
    /// Returns the three-letter code used in reference-period tokens.
    pub fn code(&self) -> &'static str {
        match self {
            Month::Jan => "JAN",
            Month::Fev => "FEV",
            Month::Mar => "MAR",
            Month::Abr => "ABR",
            Month::Mai => "MAI",
            Month::Jun => "JUN",
            Month::Jul => "JUL",
            Month::Ago => "AGO",
            Month::Set => "SET",
            Month::Out => "OUT",
            Month::Nov => "NOV",
            Month::Dez => "DEZ",
        }
    }

    /// All twelve months in calendar order.
    pub fn all() -> &'static [Month] {
        &[
            Month::Jan,
            Month::Fev,
            Month::Mar,
            Month::Abr,
            Month::Mai,
            Month::Jun,
            Month::Jul,
            Month::Ago,
            Month::Set,
            Month::Out,
            Month::Nov,
            Month::Dez,
        ]
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Month {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "JAN" => Ok(Month::Jan),
            "FEV" => Ok(Month::Fev),
            "MAR" => Ok(Month::Mar),
            "ABR" => Ok(Month::Abr),
            "MAI" => Ok(Month::Mai),
            "JUN" => Ok(Month::Jun),
            "JUL" => Ok(Month::Jul),
            "AGO" => Ok(Month::Ago),
            "SET" => Ok(Month::Set),
            "OUT" => Ok(Month::Out),
            "NOV" => Ok(Month::Nov),
            "DEZ" => Ok(Month::Dez),
            _ => Err(AppError::DataError(format!("Invalid month code: {s}"))),
        }
    }
}

/// A billing period filter: a whole year, or one month within it.
///
/// The backend takes both shapes through a single `referenceMonth` query
/// parameter, so the token is `MON/YYYY` when a month is selected and the
/// bare year otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePeriod {
    pub year: String,
    pub month: Option<Month>,
}

impl ReferencePeriod {
    pub fn new(year: impl Into<String>, month: Option<Month>) -> Self {
        Self {
            year: year.into(),
            month,
        }
    }

    /// Composes the wire token. A selected month only qualifies the token
    /// when a year is present; with no year the token degrades to the year
    /// string itself (possibly empty, meaning "no period filter").
    pub fn token(&self) -> String {
        match self.month {
            Some(month) if !self.year.is_empty() => format!("{}/{}", month.code(), self.year),
            _ => self.year.clone(),
        }
    }
}

impl Default for ReferencePeriod {
    fn default() -> Self {
        Self {
            year: DEFAULT_YEAR.to_string(),
            month: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_month_parsing() {
        assert_eq!("MAR".parse::<Month>().unwrap(), Month::Mar);
        assert_eq!("mar".parse::<Month>().unwrap(), Month::Mar);
        assert_eq!("Dez".parse::<Month>().unwrap(), Month::Dez);
        assert!("XYZ".parse::<Month>().is_err());
        assert!("".parse::<Month>().is_err());
    }

    #[test]
    fn test_all_months_distinct() {
        let months = Month::all();
        assert_eq!(months.len(), 12);

        let codes: HashSet<&str> = months.iter().map(Month::code).collect();
        assert_eq!(codes.len(), 12);
    }

    #[test]
    fn test_token_with_month() {
        let period = ReferencePeriod::new("2023", Some(Month::Mar));
        assert_eq!(period.token(), "MAR/2023");
    }

    #[test]
    fn test_token_without_month() {
        let period = ReferencePeriod::new("2023", None);
        assert_eq!(period.token(), "2023");
    }

    #[test]
    fn test_token_month_without_year() {
        // An orphan month must not produce a dangling "MON/" token
        let period = ReferencePeriod::new("", Some(Month::Jan));
        assert_eq!(period.token(), "");
    }

    #[test]
    fn test_default_period_uses_latest_year() {
        let period = ReferencePeriod::default();
        assert_eq!(period.token(), DEFAULT_YEAR);
        assert!(YEARS.contains(&DEFAULT_YEAR));
    }
}
