/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Maximum number of invoice files accepted in a single upload batch
    pub const MAX_UPLOAD_FILES: usize = 10;
}
