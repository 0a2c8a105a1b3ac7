//! Order sizing: resolving an amount mode into a tradable quantity.
//!
//! Pure functions over a balance snapshot; no I/O. Percentage sizing
//! rounds half-away-from-zero to 2 decimal places.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::balance::WalletBalances;
use crate::models::{Action, AmountMode};

/// Quote currency balances are denominated in for buy-side sizing.
pub const QUOTE_CURRENCY: &str = "THB";

/// Decimal places quantities are rounded to.
pub const QUANTITY_SCALE: u32 = 2;

/// Resolves the caller-supplied raw amount into a concrete trade quantity.
///
/// - [`AmountMode::Limit`]: `raw_amount` unchanged.
/// - [`AmountMode::AllAvailable`]: the available balance of the quote
///   currency for buys, of `symbol` for sells. A missing asset counts
///   as zero available, never an error.
/// - [`AmountMode::Percent`]: the same currency selection, scaled by
///   `raw_amount / 100` and rounded.
///
/// Negative `raw_amount` is the caller's job to reject before sizing.
pub fn resolve_quantity(
    action: Action,
    mode: AmountMode,
    raw_amount: Decimal,
    balances: &WalletBalances,
    symbol: &str,
) -> Decimal {
    match mode {
        AmountMode::Limit => raw_amount,
        AmountMode::AllAvailable => available(action, balances, symbol),
        AmountMode::Percent => {
            let fraction = raw_amount / Decimal::ONE_HUNDRED;
            round_quantity(available(action, balances, symbol) * fraction)
        }
    }
}

/// Rounds a quantity to [`QUANTITY_SCALE`] places, half-away-from-zero.
pub fn round_quantity(quantity: Decimal) -> Decimal {
    quantity.round_dp_with_strategy(QUANTITY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the available balance of the currency being spent: the quote
/// currency when buying, the traded symbol when selling.
fn available(action: Action, balances: &WalletBalances, symbol: &str) -> Decimal {
    let asset = match action {
        Action::Buy => QUOTE_CURRENCY,
        Action::Sell => symbol,
    };
    balances
        .get(asset)
        .map(|balance| balance.available)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::balance::Balance;
    use rust_decimal_macros::dec;

    fn balances(entries: &[(&str, Decimal)]) -> WalletBalances {
        entries
            .iter()
            .map(|(asset, available)| {
                (
                    asset.to_string(),
                    Balance {
                        available: *available,
                        reserved: Decimal::ZERO,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn buy_percent_of_quote_balance() {
        let balances = balances(&[("THB", dec!(1000))]);
        let quantity = resolve_quantity(
            Action::Buy,
            AmountMode::Percent,
            dec!(50),
            &balances,
            "IOST",
        );
        assert_eq!(quantity, dec!(500.0));
    }

    #[test]
    fn sell_all_available_uses_symbol_balance() {
        let balances = balances(&[("IOST", dec!(37.5))]);
        let quantity = resolve_quantity(
            Action::Sell,
            AmountMode::AllAvailable,
            dec!(0),
            &balances,
            "IOST",
        );
        assert_eq!(quantity, dec!(37.5));
    }

    #[test]
    fn limit_amount_ignores_balances() {
        let quantity = resolve_quantity(
            Action::Buy,
            AmountMode::Limit,
            dec!(12.34),
            &WalletBalances::new(),
            "IOST",
        );
        assert_eq!(quantity, dec!(12.34));
    }

    #[test]
    fn buy_all_available_uses_quote_balance() {
        let balances = balances(&[("THB", dec!(250.75)), ("IOST", dec!(99))]);
        let quantity = resolve_quantity(
            Action::Buy,
            AmountMode::AllAvailable,
            dec!(0),
            &balances,
            "IOST",
        );
        assert_eq!(quantity, dec!(250.75));
    }

    #[test]
    fn missing_asset_sizes_to_zero() {
        let quantity = resolve_quantity(
            Action::Sell,
            AmountMode::AllAvailable,
            dec!(0),
            &WalletBalances::new(),
            "IOST",
        );
        assert_eq!(quantity, Decimal::ZERO);
    }

    #[test]
    fn zero_percent_sizes_to_zero() {
        let balances = balances(&[("THB", dec!(1000))]);
        let quantity = resolve_quantity(
            Action::Buy,
            AmountMode::Percent,
            dec!(0),
            &balances,
            "IOST",
        );
        assert_eq!(quantity, Decimal::ZERO);
    }

    #[test]
    fn percent_rounds_half_away_from_zero() {
        // 33% of 10.25 = 3.3825 -> 3.38; 50% of 0.07 = 0.035 -> 0.04.
        let balances = balances(&[("THB", dec!(10.25))]);
        assert_eq!(
            resolve_quantity(Action::Buy, AmountMode::Percent, dec!(33), &balances, "IOST"),
            dec!(3.38)
        );

        let balances = self::balances(&[("THB", dec!(0.07))]);
        assert_eq!(
            resolve_quantity(Action::Buy, AmountMode::Percent, dec!(50), &balances, "IOST"),
            dec!(0.04)
        );
    }
}
