use serde::Deserialize;

/// One stored invoice, as served by the backend list endpoint.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: i64,
    pub client_number: String,
    pub distributor: String,
    pub reference_month: String,
}

/// A customer known to the backend, used to populate filter dropdowns.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub client_number: String,
    pub uc_number: String,
}

impl Customer {
    /// Dropdown label: client number plus consumer-unit number.
    pub fn label(&self) -> String {
        format!("{} - {}", self.client_number, self.uc_number)
    }
}
