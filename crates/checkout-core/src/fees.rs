//! Processing Fees
//!
//! Gross-up fee calculation: the fee a contributor can opt to cover so the
//! organization nets the intended amount after the processor takes its cut.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::currency::Currency;
use crate::interval::ContributionInterval;

/// Fixed component of the processor's card fee
const FEE_FIXED: Decimal = dec!(0.30);

/// Percentage rate for registered nonprofits
const RATE_NONPROFIT: Decimal = dec!(0.022);

/// Standard percentage rate
const RATE_STANDARD: Decimal = dec!(0.029);

/// Surcharge for card-on-file recurring billing
const RATE_RECURRING: Decimal = dec!(0.005);

/// Compute the processing fee for an intended contribution amount.
///
/// Pure and deterministic: identical inputs always yield the identical
/// result, rounded to two decimal places and never negative. Returns `None`
/// when no amount has been resolved yet - the fee is then not computable
/// and must be displayed as absent, not as zero.
pub fn calculate_fee(
    amount: Option<Decimal>,
    interval: ContributionInterval,
    is_nonprofit: bool,
) -> Option<Decimal> {
    let amount = amount.filter(|a| !a.is_sign_negative())?;

    let mut rate = if is_nonprofit {
        RATE_NONPROFIT
    } else {
        RATE_STANDARD
    };
    if interval.is_recurring() {
        rate += RATE_RECURRING;
    }

    let grossed_up = (amount + FEE_FIXED) / (Decimal::ONE - rate);
    let fee = (grossed_up - amount)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Some(fee.max(Decimal::ZERO))
}

/// Display copy for the fee-agreement control, e.g. "$3.38 monthly".
///
/// `None` whenever the fee itself is not computable.
pub fn fee_notice(
    amount: Option<Decimal>,
    interval: ContributionInterval,
    is_nonprofit: bool,
    currency: &Currency,
) -> Option<String> {
    let fee = calculate_fee(amount, interval, is_nonprofit)?;
    Some(format!("{}{}", currency.format(fee), interval.rate_suffix()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_no_amount_means_no_fee() {
        assert_eq!(
            calculate_fee(None, ContributionInterval::OneTime, false),
            None
        );
    }

    #[test]
    fn test_negative_amount_means_no_fee() {
        assert_eq!(
            calculate_fee(Some(dec!(-5)), ContributionInterval::OneTime, false),
            None
        );
    }

    #[test]
    fn test_one_time_standard_rate() {
        // (100 + 0.30) / (1 - 0.029) - 100 = 3.2956... -> 3.30
        let fee = calculate_fee(Some(dec!(100)), ContributionInterval::OneTime, false);
        assert_eq!(fee, Some(dec!(3.30)));
    }

    #[test]
    fn test_nonprofit_rate_is_lower() {
        let standard =
            calculate_fee(Some(dec!(100)), ContributionInterval::OneTime, false).unwrap();
        let nonprofit =
            calculate_fee(Some(dec!(100)), ContributionInterval::OneTime, true).unwrap();
        assert!(nonprofit < standard);
        // (100 + 0.30) / (1 - 0.022) - 100 = 2.5562... -> 2.56
        assert_eq!(nonprofit, dec!(2.56));
    }

    #[test]
    fn test_recurring_carries_the_surcharge() {
        let one_time =
            calculate_fee(Some(dec!(100)), ContributionInterval::OneTime, false).unwrap();
        let monthly =
            calculate_fee(Some(dec!(100)), ContributionInterval::Monthly, false).unwrap();
        let yearly =
            calculate_fee(Some(dec!(100)), ContributionInterval::Yearly, false).unwrap();
        assert!(monthly > one_time);
        assert_eq!(monthly, yearly);
    }

    #[test]
    fn test_determinism_across_repeated_calls() {
        let first = calculate_fee(Some(dec!(100)), ContributionInterval::Monthly, false);
        let second = calculate_fee(Some(dec!(100)), ContributionInterval::Monthly, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fee_is_never_negative() {
        for amount in [dec!(0), dec!(0.01), dec!(1), dec!(250), dec!(100000)] {
            for interval in [
                ContributionInterval::OneTime,
                ContributionInterval::Monthly,
                ContributionInterval::Yearly,
            ] {
                for nonprofit in [false, true] {
                    let fee = calculate_fee(Some(amount), interval, nonprofit).unwrap();
                    assert!(fee >= Decimal::ZERO);
                }
            }
        }
    }

    #[test]
    fn test_fee_notice_copy() {
        let usd = Currency::default();
        let notice = fee_notice(Some(dec!(100)), ContributionInterval::Monthly, true, &usd);
        assert_eq!(notice.as_deref(), Some("$3.08 monthly"));

        let one_time = fee_notice(Some(dec!(100)), ContributionInterval::OneTime, true, &usd);
        assert_eq!(one_time.as_deref(), Some("$2.56"));

        assert_eq!(
            fee_notice(None, ContributionInterval::OneTime, true, &usd),
            None
        );
    }
}
