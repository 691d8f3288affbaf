//! Fare derivation.
//!
//! One shared implementation of the price summary shown on the detail,
//! payment, and voucher steps. All amounts are whole currency units.
//!
//! Derivation order: supplier unit prices (premium tier when a premium
//! slot is selected) -> subtotal -> taxes and service fee -> promo
//! discount -> wallet redemption -> total. The wallet redeems 30% of the
//! bill, capped at both the bill and the wallet balance. The total never
//! goes below zero.

use crate::booking::record::{BookingRecord, TicketCounts};
use crate::catalog::Supplier;
use crate::config::FareSettings;

/// Inputs to a fare quote.
#[derive(Debug, Clone, Default)]
pub struct FareRequest<'a> {
    pub tickets: TicketCounts,
    pub supplier: Option<&'a Supplier>,
    pub premium: bool,
    pub promo_code: Option<&'a str>,
    /// Wallet balance available for redemption; `None` when the wallet
    /// toggle is off.
    pub wallet_balance: Option<i64>,
}

impl<'a> FareRequest<'a> {
    /// Build a request from the accumulated record plus the agency wallet.
    pub fn from_record(record: &'a BookingRecord, wallet_balance: i64) -> Self {
        Self {
            tickets: record.ticket_counts(),
            supplier: record.supplier.as_ref(),
            premium: record.is_premium(),
            promo_code: record.promo_code.as_deref(),
            wallet_balance: record.use_wallet.then_some(wallet_balance),
        }
    }
}

/// A derived price summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FareBreakdown {
    pub subtotal: i64,
    pub taxes: i64,
    pub service_fee: i64,
    pub discount: i64,
    pub wallet_redemption: i64,
    pub total: i64,
}

/// Derive the full price summary for a request.
pub fn quote(settings: &FareSettings, request: &FareRequest<'_>) -> FareBreakdown {
    let subtotal = match request.supplier {
        Some(supplier) => {
            let (unit_adult, unit_child) = if request.premium {
                (supplier.adult_premium_price, supplier.child_premium_price)
            } else {
                (supplier.adult_price, supplier.child_price)
            };
            unit_adult * i64::from(request.tickets.adult)
                + unit_child * i64::from(request.tickets.child)
        }
        // Placeholder quote while no supplier is selected.
        None => settings.fallback_subtotal,
    };

    let (taxes, service_fee) = if subtotal == 0 {
        (settings.fallback_taxes, settings.fallback_service_fee)
    } else {
        (
            rounded_share(subtotal, settings.tax_rate),
            rounded_share(subtotal, settings.service_fee_rate),
        )
    };

    let discount = request
        .promo_code
        .and_then(|code| promo_amount(settings, code))
        .unwrap_or(0);

    let bill = (subtotal + taxes + service_fee - discount).max(0);
    let wallet_redemption = match request.wallet_balance {
        Some(balance) => rounded_share(bill, settings.wallet_rate)
            .min(bill)
            .min(balance.max(0)),
        None => 0,
    };

    let total = (subtotal + taxes + service_fee - discount - wallet_redemption).max(0);

    FareBreakdown {
        subtotal,
        taxes,
        service_fee,
        discount,
        wallet_redemption,
        total,
    }
}

/// Look up a promo code, ignoring case. Unknown codes yield no discount.
pub fn promo_amount(settings: &FareSettings, code: &str) -> Option<i64> {
    let trimmed = code.trim();
    if trimmed.is_empty() {
        return None;
    }
    settings
        .promos
        .iter()
        .find(|promo| promo.code.eq_ignore_ascii_case(trimmed))
        .map(|promo| promo.amount)
}

fn rounded_share(amount: i64, rate: f64) -> i64 {
    (amount as f64 * rate).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn supplier() -> Supplier {
        Supplier {
            id: 1,
            name: "Atlas Excursions".to_string(),
            adult_price: 45,
            child_price: 30,
            adult_premium_price: 60,
            child_premium_price: 40,
            commission_pct: 12,
            cancellation_policy: String::new(),
        }
    }

    #[test]
    fn premium_slot_uses_premium_prices() {
        let settings = FareSettings::default();
        let vendor = supplier();
        let breakdown = quote(
            &settings,
            &FareRequest {
                tickets: TicketCounts { adult: 1, child: 1 },
                supplier: Some(&vendor),
                premium: true,
                ..FareRequest::default()
            },
        );
        assert_eq!(breakdown.subtotal, 100);
    }

    #[test]
    fn missing_supplier_falls_back_to_placeholder_subtotal() {
        let settings = FareSettings::default();
        let breakdown = quote(
            &settings,
            &FareRequest {
                tickets: TicketCounts { adult: 2, child: 0 },
                ..FareRequest::default()
            },
        );
        assert_eq!(breakdown.subtotal, 1200);
        assert_eq!(breakdown.taxes, 180);
        assert_eq!(breakdown.service_fee, 48);
    }

    #[test]
    fn zero_subtotal_uses_fallback_taxes_and_fee() {
        let settings = FareSettings::default();
        let vendor = supplier();
        let breakdown = quote(
            &settings,
            &FareRequest {
                tickets: TicketCounts::default(),
                supplier: Some(&vendor),
                ..FareRequest::default()
            },
        );
        assert_eq!(breakdown.subtotal, 0);
        assert_eq!(breakdown.taxes, 180);
        assert_eq!(breakdown.service_fee, 50);
    }
}
