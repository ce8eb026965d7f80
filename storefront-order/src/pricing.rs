use serde::{Deserialize, Serialize};
use storefront_shared::Cents;
use storefront_shared::money::apply_rate;
use crate::cart::CartLine;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Fraction of the subtotal charged as tax
    pub tax_rate: f64,

    /// Flat shipping fee (in cents)
    pub shipping_fee_cents: Cents,

    /// Shipping is free when the subtotal is strictly above this (in cents)
    pub free_shipping_threshold_cents: Cents,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            tax_rate: 0.08,
            shipping_fee_cents: 999,
            free_shipping_threshold_cents: 5000,
        }
    }
}

/// Derived cart totals. Never stored on the cart; recomputed on every read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct PriceSummary {
    pub subtotal_cents: Cents,
    pub shipping_cents: Cents,
    pub tax_cents: Cents,
    pub total_cents: Cents,
}

impl PriceSummary {
    pub fn is_free_shipping(&self) -> bool {
        self.shipping_cents == 0
    }
}

/// Cart pricing engine
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    pub fn subtotal(&self, lines: &[CartLine]) -> Cents {
        lines.iter().map(CartLine::line_total_cents).sum()
    }

    pub fn shipping(&self, subtotal: Cents) -> Cents {
        if subtotal > self.config.free_shipping_threshold_cents {
            0
        } else {
            self.config.shipping_fee_cents
        }
    }

    /// Tax rounded half away from zero to the cent
    pub fn tax(&self, subtotal: Cents) -> Cents {
        apply_rate(subtotal, self.config.tax_rate)
    }

    pub fn compute_summary(&self, lines: &[CartLine]) -> PriceSummary {
        let subtotal_cents = self.subtotal(lines);
        let shipping_cents = self.shipping(subtotal_cents);
        let tax_cents = self.tax(subtotal_cents);

        PriceSummary {
            subtotal_cents,
            shipping_cents,
            tax_cents,
            total_cents: subtotal_cents + shipping_cents + tax_cents,
        }
    }
}
