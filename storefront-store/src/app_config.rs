use serde::Deserialize;
use std::env;
use storefront_catalog::PriceRange;
use storefront_order::PricingConfig;
use storefront_order::checkout::DEFAULT_DELIVERY_DAYS;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub business_rules: BusinessRules,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BusinessRules {
    pub tax_rate: f64,
    pub shipping_fee_cents: i64,
    pub free_shipping_threshold_cents: i64,
    #[serde(default = "default_delivery_days")]
    pub delivery_days: u64,
}

fn default_delivery_days() -> u64 { DEFAULT_DELIVERY_DAYS }

impl Default for BusinessRules {
    fn default() -> Self {
        let pricing = PricingConfig::default();
        Self {
            tax_rate: pricing.tax_rate,
            shipping_fee_cents: pricing.shipping_fee_cents,
            free_shipping_threshold_cents: pricing.free_shipping_threshold_cents,
            delivery_days: DEFAULT_DELIVERY_DAYS,
        }
    }
}

impl BusinessRules {
    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig {
            tax_rate: self.tax_rate,
            shipping_fee_cents: self.shipping_fee_cents,
            free_shipping_threshold_cents: self.free_shipping_threshold_cents,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    #[serde(default = "default_featured_count")]
    pub featured_count: usize,
    #[serde(default = "PriceRange::standard")]
    pub price_ranges: Vec<PriceRange>,
}

fn default_featured_count() -> usize { 4 }

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            featured_count: default_featured_count(),
            price_ranges: PriceRange::standard(),
        }
    }
}

impl CatalogConfig {
    /// Look up a sidebar band by its label.
    pub fn price_range(&self, label: &str) -> Option<&PriceRange> {
        self.price_ranges.iter().find(|range| range.label == label)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationConfig {
    #[serde(default = "default_capacity")]
    pub channel_capacity: usize,
}

fn default_capacity() -> usize { 100 }

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { channel_capacity: default_capacity() }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `STOREFRONT__BUSINESS_RULES__TAX_RATE=0.1`
            .add_source(config::Environment::with_prefix("STOREFRONT").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
