use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    /// Name of the slot that holds the serialized booking collection.
    pub storage_key: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "playzone.db".to_string()),
            storage_key: env::var("STORAGE_KEY")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| crate::store::DEFAULT_STORAGE_KEY.to_string()),
        }
    }
}
