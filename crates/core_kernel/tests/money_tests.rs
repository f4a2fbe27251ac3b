//! Comprehensive unit tests for the Money module
//!
//! Tests cover minor-unit arithmetic, the decimal bridge, and the
//! half-away-from-zero rounding convention.

use core_kernel::{Money, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_from_minor_keeps_units() {
        let m = Money::from_minor(10050);
        assert_eq!(m.minor_units(), 10050);
    }

    #[test]
    fn test_zero_constant() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::ZERO.is_positive());
        assert!(!Money::ZERO.is_negative());
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::from_minor(-500);
        assert!(m.is_negative());
        assert_eq!(m.abs(), Money::from_minor(500));
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_add_sub_neg() {
        let a = Money::from_minor(1000);
        let b = Money::from_minor(300);

        assert_eq!(a + b, Money::from_minor(1300));
        assert_eq!(a - b, Money::from_minor(700));
        assert_eq!(-(a - b), Money::from_minor(-700));
    }

    #[test]
    fn test_assign_ops() {
        let mut m = Money::from_minor(100);
        m += Money::from_minor(50);
        m -= Money::from_minor(25);
        assert_eq!(m, Money::from_minor(125));
    }

    #[test]
    fn test_min_picks_smaller() {
        let debt = Money::from_minor(500);
        let credit = Money::from_minor(200);
        assert_eq!(debt.min(credit), credit);
    }

    #[test]
    fn test_checked_add_overflow() {
        let max = Money::from_minor(i64::MAX);
        assert_eq!(max.checked_add(Money::from_minor(1)), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_sum_of_balancing_amounts_is_zero() {
        let total: Money = [500, -200, -300].into_iter().map(Money::from_minor).sum();
        assert!(total.is_zero());
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(Money::from_decimal_rounded(dec!(0.5)).unwrap(), Money::from_minor(1));
        assert_eq!(Money::from_decimal_rounded(dec!(-0.5)).unwrap(), Money::from_minor(-1));
        assert_eq!(Money::from_decimal_rounded(dec!(1.5)).unwrap(), Money::from_minor(2));
        assert_eq!(Money::from_decimal_rounded(dec!(2.5)).unwrap(), Money::from_minor(3));
    }

    #[test]
    fn test_below_midpoint_rounds_toward_zero() {
        assert_eq!(Money::from_decimal_rounded(dec!(33.33)).unwrap(), Money::from_minor(33));
        assert_eq!(Money::from_decimal_rounded(dec!(-33.33)).unwrap(), Money::from_minor(-33));
    }

    #[test]
    fn test_third_of_hundred() {
        let third = Decimal::from(100) / Decimal::from(3);
        assert_eq!(Money::from_decimal_rounded(third).unwrap(), Money::from_minor(33));
        assert_eq!(Money::from_decimal_rounded(-third).unwrap(), Money::from_minor(-33));
    }

    #[test]
    fn test_two_thirds_of_hundred() {
        let two_thirds = Decimal::from(200) / Decimal::from(3);
        assert_eq!(Money::from_decimal_rounded(two_thirds).unwrap(), Money::from_minor(67));
    }
}
