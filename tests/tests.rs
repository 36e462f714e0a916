#[cfg(test)]
mod tests {
    use fatura_dashboard::config::Config;
    use fatura_dashboard::models::{
        dashboard::{ChartKind, DashboardSummary, format_brl, format_kwh},
        error::AppError,
        invoice::{Customer, Invoice},
        period::{DASHBOARD_YEARS, DEFAULT_YEAR, Month, ReferencePeriod, YEARS},
    };
    use fatura_dashboard::services::api::{ApiConfig, InvoiceFilter};
    use fatura_dashboard::services::upload::{
        MSG_AT_MOST_TEN, MSG_SELECT_AT_LEAST_ONE, validate_file_count,
    };
    use fatura_dashboard::utils::download::invoice_file_name;

    // Helper function to create a summary matching a typical backend payload
    fn create_test_summary() -> DashboardSummary {
        DashboardSummary {
            total_energy_consumed: 120.0,
            total_energy_compensated: 80.0,
            total_value_without_gd: 450.5,
            total_economy_gd: 120.25,
        }
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_api_display() {
        let error = AppError::ApiError("Connection failed".to_string());
        assert_eq!(error.to_string(), "API error: Connection failed");
    }

    #[test]
    fn test_app_error_validation_display_is_verbatim() {
        // Validation messages are shown to the user unchanged
        let error = AppError::ValidationError("mensagem".to_string());
        assert_eq!(error.to_string(), "mensagem");
    }

    // ===== Period Tests =====

    #[test]
    fn test_reference_token_with_month() {
        let period = ReferencePeriod::new("2023", Some(Month::Mar));
        assert_eq!(period.token(), "MAR/2023");
    }

    #[test]
    fn test_reference_token_year_only() {
        let period = ReferencePeriod::new("2023", None);
        assert_eq!(period.token(), "2023");
    }

    #[test]
    fn test_reference_token_every_month() {
        for month in Month::all() {
            let period = ReferencePeriod::new("2024", Some(*month));
            assert_eq!(period.token(), format!("{}/2024", month.code()));
        }
    }

    #[test]
    fn test_month_round_trip() {
        for month in Month::all() {
            assert_eq!(month.code().parse::<Month>().unwrap(), *month);
        }
        assert!("JANEIRO".parse::<Month>().is_err());
    }

    #[test]
    fn test_year_sets() {
        assert_eq!(YEARS.len(), 7);
        assert_eq!(*YEARS.last().unwrap(), DEFAULT_YEAR);

        // The dashboard offers a narrower window, all within the library's
        for year in DASHBOARD_YEARS {
            assert!(YEARS.contains(year));
        }
    }

    // ===== Upload Validation Tests =====

    #[test]
    fn test_upload_validation_empty_selection() {
        let error = validate_file_count(0).unwrap_err();
        assert_eq!(error.to_string(), MSG_SELECT_AT_LEAST_ONE);
    }

    #[test]
    fn test_upload_validation_over_limit() {
        let error = validate_file_count(11).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Você só pode fazer o upload de até 10 arquivos por vez."
        );
        assert_eq!(error.to_string(), MSG_AT_MOST_TEN);
    }

    #[test]
    fn test_upload_validation_boundaries() {
        assert!(validate_file_count(1).is_ok());
        assert!(validate_file_count(10).is_ok());
        assert!(validate_file_count(Config::MAX_UPLOAD_FILES + 1).is_err());
    }

    // ===== Wire Model Tests =====

    #[test]
    fn test_invoice_list_deserialization() {
        let json = r#"[
            {
                "id": 1,
                "clientNumber": "7204076116",
                "distributor": "CEMIG",
                "referenceMonth": "JAN/2024"
            },
            {
                "id": 2,
                "clientNumber": "7204076116",
                "distributor": "CEMIG",
                "referenceMonth": "FEV/2024"
            }
        ]"#;

        let invoices: Vec<Invoice> = serde_json::from_str(json).unwrap();
        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0].reference_month, "JAN/2024");
        assert_eq!(invoices[1].id, 2);
    }

    #[test]
    fn test_customer_label() {
        let json = r#"{"id": 3, "clientNumber": "7005400387", "ucNumber": "3001116735"}"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.label(), "7005400387 - 3001116735");
    }

    #[test]
    fn test_summary_deserialization() {
        let json = r#"{
            "totalEnergyConsumed": 120,
            "totalEnergyCompensated": 80,
            "totalValueWithoutGD": 450.5,
            "totalEconomyGD": 120.25
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary, create_test_summary());
    }

    // ===== Card Formatting Tests =====

    #[test]
    fn test_card_texts() {
        let summary = create_test_summary();
        assert_eq!(format_kwh(summary.total_energy_consumed), "120 kWh");
        assert_eq!(format_kwh(summary.total_energy_compensated), "80 kWh");
        assert_eq!(format_brl(summary.total_value_without_gd), "R$ 450.50");
        assert_eq!(format_brl(summary.total_economy_gd), "R$ 120.25");
    }

    #[test]
    fn test_fractional_energy_keeps_fraction() {
        assert_eq!(format_kwh(120.5), "120.5 kWh");
    }

    // ===== Chart Series Tests =====

    #[test]
    fn test_energy_series() {
        let series = create_test_summary().energy_series();
        assert_eq!(series.name, "Energia (kWh)");
        assert_eq!(series.labels, vec!["Consumo de Energia", "Energia Compensada"]);
        assert_eq!(series.values, vec![120.0, 80.0]);
    }

    #[test]
    fn test_financial_series() {
        let series = create_test_summary().financial_series();
        assert_eq!(series.name, "Valor (R$)");
        assert_eq!(series.labels, vec!["Valor Total Sem GD", "Economia GD"]);
        assert_eq!(series.values, vec![450.5, 120.25]);
    }

    #[test]
    fn test_chart_kind_selector_values() {
        for kind in ChartKind::all() {
            assert_eq!(kind.code().parse::<ChartKind>().unwrap(), *kind);
        }
        assert_eq!(ChartKind::default(), ChartKind::Bar);
        assert_eq!(ChartKind::Pie.label(), "Pizza");
    }

    // ===== Query Composition Tests =====

    #[test]
    fn test_search_params_with_month() {
        let filter = InvoiceFilter::new("1234567890", ReferencePeriod::new("2023", Some(Month::Mar)));
        let params = filter.query_params();

        assert_eq!(params[0], ("clientNumber", "1234567890".to_string()));
        assert_eq!(params[1], ("referenceMonth", "MAR/2023".to_string()));
    }

    #[test]
    fn test_search_params_year_only() {
        let filter = InvoiceFilter::new("1234567890", ReferencePeriod::new("2023", None));
        assert_eq!(filter.query_params()[1], ("referenceMonth", "2023".to_string()));
    }

    #[test]
    fn test_default_filter() {
        let params = InvoiceFilter::default().query_params();
        assert_eq!(params[0], ("clientNumber", String::new()));
        assert_eq!(params[1], ("referenceMonth", DEFAULT_YEAR.to_string()));
    }

    // ===== API Configuration Tests =====

    #[test]
    fn test_default_endpoints() {
        let config = ApiConfig::default();
        assert!(config.invoices_url().ends_with("/invoices"));
        assert!(config.upload_url().ends_with("/invoices/upload"));
        assert!(config.download_url().ends_with("/invoices/download"));
        assert!(config.dashboard_url().ends_with("/invoices/dashboard-data"));
        assert!(config.customers_url().ends_with("/invoices/customers"));
    }

    #[test]
    fn test_custom_base_url() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:3000/api")
            .build();
        assert_eq!(config.invoices_url(), "http://localhost:3000/api/invoices");
    }

    // ===== Download Naming Tests =====

    #[test]
    fn test_download_file_name() {
        assert_eq!(invoice_file_name("123", "JAN/2024"), "fatura_123_JAN/2024.pdf");
    }
}
