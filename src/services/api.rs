use crate::models::{
    dashboard::DashboardSummary,
    error::AppError,
    invoice::{Customer, Invoice},
    period::ReferencePeriod,
};
use serde::de::DeserializeOwned;

// CONSTANTS
const BASE_URL: &str = "https://lumi-backend-l6w4.onrender.com/api";

// QUERY MODEL
/// Filter shared by the invoice list and the dashboard summary: a free-text
/// client number plus a reference period. Both parameters are always sent,
/// empty strings meaning "no restriction", which is what the backend
/// expects.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct InvoiceFilter {
    pub client_number: String,
    pub period: ReferencePeriod,
}

impl InvoiceFilter {
    pub fn new(client_number: impl Into<String>, period: ReferencePeriod) -> Self {
        Self {
            client_number: client_number.into(),
            period,
        }
    }

    /// Wire query pairs, in the order the backend documents them.
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("clientNumber", self.client_number.clone()),
            ("referenceMonth", self.period.token()),
        ]
    }
}

// API CONFIGURATION
/// Configuration for the invoice backend client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn invoices_url(&self) -> String {
        format!("{}/invoices", self.base_url)
    }

    pub fn upload_url(&self) -> String {
        format!("{}/invoices/upload", self.base_url)
    }

    pub fn download_url(&self) -> String {
        format!("{}/invoices/download", self.base_url)
    }

    pub fn dashboard_url(&self) -> String {
        format!("{}/invoices/dashboard-data", self.base_url)
    }

    pub fn customers_url(&self) -> String {
        format!("{}/invoices/customers", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
        }
    }
}

// INVOICE CLIENT
/// HTTP client for the invoice backend.
pub struct InvoiceClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl InvoiceClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the invoices matching a filter.
    pub async fn fetch_invoices(&self, filter: &InvoiceFilter) -> Result<Vec<Invoice>, AppError> {
        self.get_json(&self.config.invoices_url(), &filter.query_params())
            .await
    }

    /// Fetches the dashboard summary, unfiltered when `filter` is `None`.
    pub async fn fetch_dashboard_summary(
        &self,
        filter: Option<&InvoiceFilter>,
    ) -> Result<DashboardSummary, AppError> {
        let params = filter.map(InvoiceFilter::query_params).unwrap_or_default();
        self.get_json(&self.config.dashboard_url(), &params).await
    }

    /// Fetches all known customers.
    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, AppError> {
        self.get_json(&self.config.customers_url(), &[]).await
    }

    /// Fetches one invoice document as raw PDF bytes.
    pub async fn download_invoice(
        &self,
        client_number: &str,
        reference_month: &str,
    ) -> Result<Vec<u8>, AppError> {
        let params = [
            ("clientNumber", client_number.to_string()),
            ("referenceMonth", reference_month.to_string()),
        ];

        let response = self
            .http
            .get(self.config.download_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to read response body: {e}")))?;

        Ok(bytes.to_vec())
    }

    /// Executes a GET and deserializes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, AppError> {
        let mut request = self.http.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

impl Default for InvoiceClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default client")
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches invoices using default configuration.
pub async fn fetch_invoices(filter: &InvoiceFilter) -> Result<Vec<Invoice>, AppError> {
    InvoiceClient::new()?.fetch_invoices(filter).await
}

/// Fetches the dashboard summary using default configuration.
pub async fn fetch_dashboard_summary(
    filter: Option<&InvoiceFilter>,
) -> Result<DashboardSummary, AppError> {
    InvoiceClient::new()?.fetch_dashboard_summary(filter).await
}

/// Fetches the customer list using default configuration.
pub async fn fetch_customers() -> Result<Vec<Customer>, AppError> {
    InvoiceClient::new()?.fetch_customers().await
}

/// Downloads one invoice PDF using default configuration.
pub async fn download_invoice(
    client_number: &str,
    reference_month: &str,
) -> Result<Vec<u8>, AppError> {
    InvoiceClient::new()?
        .download_invoice(client_number, reference_month)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::period::{Month, ReferencePeriod};

    #[test]
    fn test_config_default_base_url() {
        let config = ApiConfig::default();
        assert!(config.invoices_url().ends_with("/invoices"));
        assert!(config.invoices_url().starts_with("https://"));
    }

    #[test]
    fn test_config_builder_custom_base_url() {
        let config = ApiConfig::builder()
            .base_url("http://localhost:3000/api")
            .build();

        assert_eq!(config.invoices_url(), "http://localhost:3000/api/invoices");
        assert_eq!(
            config.upload_url(),
            "http://localhost:3000/api/invoices/upload"
        );
        assert_eq!(
            config.download_url(),
            "http://localhost:3000/api/invoices/download"
        );
        assert_eq!(
            config.dashboard_url(),
            "http://localhost:3000/api/invoices/dashboard-data"
        );
        assert_eq!(
            config.customers_url(),
            "http://localhost:3000/api/invoices/customers"
        );
    }

    #[test]
    fn test_filter_query_params_with_month() {
        let filter = InvoiceFilter::new("1234567890", ReferencePeriod::new("2023", Some(Month::Mar)));

        assert_eq!(
            filter.query_params(),
            vec![
                ("clientNumber", "1234567890".to_string()),
                ("referenceMonth", "MAR/2023".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_query_params_year_only() {
        let filter = InvoiceFilter::new("", ReferencePeriod::new("2023", None));

        assert_eq!(
            filter.query_params(),
            vec![
                ("clientNumber", String::new()),
                ("referenceMonth", "2023".to_string()),
            ]
        );
    }

    #[test]
    fn test_default_filter_uses_default_year() {
        let filter = InvoiceFilter::default();
        let params = filter.query_params();
        assert_eq!(params[0].1, "");
        assert_eq!(params[1].1, crate::models::period::DEFAULT_YEAR);
    }
}
