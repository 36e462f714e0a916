pub mod use_customers;
pub mod use_dashboard;
pub mod use_invoices;
pub mod use_upload;
