use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub fares: FareSettings,
    #[serde(default)]
    pub assistant: AssistantSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

/// Fare derivation knobs.
///
/// Defaults reproduce the production price sheet: 15% taxes, 4% service
/// fee, a flat SAVE20 promo, and 30%-of-bill wallet redemption.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FareSettings {
    /// Tax rate applied to the subtotal.
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    /// Service fee rate applied to the subtotal.
    #[serde(default = "default_service_fee_rate")]
    pub service_fee_rate: f64,
    /// Subtotal used when no supplier has been selected yet.
    #[serde(default = "default_fallback_subtotal")]
    pub fallback_subtotal: i64,
    /// Taxes shown when the subtotal is zero.
    #[serde(default = "default_fallback_taxes")]
    pub fallback_taxes: i64,
    /// Service fee shown when the subtotal is zero.
    #[serde(default = "default_fallback_service_fee")]
    pub fallback_service_fee: i64,
    /// Share of the bill redeemable from the agency wallet.
    #[serde(default = "default_wallet_rate")]
    pub wallet_rate: f64,
    /// Recognized promo codes. Matching is case-insensitive.
    #[serde(default = "default_promos")]
    pub promos: Vec<PromoRule>,
}

/// A flat-amount promo code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PromoRule {
    pub code: String,
    pub amount: i64,
}

impl Default for FareSettings {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            service_fee_rate: default_service_fee_rate(),
            fallback_subtotal: default_fallback_subtotal(),
            fallback_taxes: default_fallback_taxes(),
            fallback_service_fee: default_fallback_service_fee(),
            wallet_rate: default_wallet_rate(),
            promos: default_promos(),
        }
    }
}

/// Assistant mock behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssistantSettings {
    /// Ticks to wait before a canned reply appears. At the default
    /// 250ms tick this simulates 1-2s of backend latency.
    #[serde(default = "default_assistant_delay_ticks")]
    pub delay_ticks: u32,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self {
            delay_ticks: default_assistant_delay_ticks(),
        }
    }
}

/// Presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiSettings {
    /// Event loop tick interval in milliseconds.
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
    /// Currency symbol prefixed to amounts.
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            currency: default_currency(),
        }
    }
}

fn default_tax_rate() -> f64 {
    0.15
}

fn default_service_fee_rate() -> f64 {
    0.04
}

fn default_fallback_subtotal() -> i64 {
    1200
}

fn default_fallback_taxes() -> i64 {
    180
}

fn default_fallback_service_fee() -> i64 {
    50
}

fn default_wallet_rate() -> f64 {
    0.30
}

fn default_promos() -> Vec<PromoRule> {
    vec![PromoRule {
        code: "SAVE20".to_string(),
        amount: 20,
    }]
}

fn default_assistant_delay_ticks() -> u32 {
    6
}

fn default_tick_ms() -> u64 {
    250
}

fn default_currency() -> String {
    "$".to_string()
}
