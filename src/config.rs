use std::env;

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    pub buffer_size: usize,
    pub log_filter: String,
    pub currency_symbol: String,
    pub store_name: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            log_filter: "info".to_string(),
            currency_symbol: "$".to_string(),
            store_name: "FASHION".to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys take their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let buffer_size = match lookup("STOREFRONT_BUFFER_SIZE") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|e| {
                anyhow::anyhow!("STOREFRONT_BUFFER_SIZE must be a positive integer, got {:?}: {}", raw, e)
            })?,
            None => defaults.buffer_size,
        };

        let config = Self {
            buffer_size,
            log_filter: lookup("STOREFRONT_LOG").unwrap_or(defaults.log_filter),
            currency_symbol: lookup("STOREFRONT_CURRENCY").unwrap_or(defaults.currency_symbol),
            store_name: lookup("STOREFRONT_NAME").unwrap_or(defaults.store_name),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), anyhow::Error> {
        if self.buffer_size == 0 {
            return Err(anyhow::anyhow!("STOREFRONT_BUFFER_SIZE must be greater than zero"));
        }

        tracing_subscriber::EnvFilter::try_new(&self.log_filter).map_err(|e| {
            anyhow::anyhow!("STOREFRONT_LOG is not a valid log filter {:?}: {}", self.log_filter, e)
        })?;

        if self.store_name.trim().is_empty() {
            return Err(anyhow::anyhow!("STOREFRONT_NAME must not be empty"));
        }

        Ok(())
    }
}
