//! USD display formatting for award amounts.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::{Formatter, Money, Params, Position, iso};

/// Formats an amount as whole US dollars, e.g. `1234.5` becomes `"$1,235"`.
///
/// Halves round away from zero, matching `Intl.NumberFormat` with
/// `maximumFractionDigits: 0`. Amounts outside the decimal range (NaN,
/// infinities, huge magnitudes) keep the symbol but skip digit grouping.
pub fn format_usd(amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    let Some(decimal) = Decimal::from_f64(amount) else {
        tracing::warn!(amount, "Award amount has no decimal representation");
        let sign = if amount.is_sign_negative() && !amount.is_nan() { "-" } else { "" };
        return format!("{}${}", sign, amount.abs());
    };

    let whole = decimal.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let money = Money::from_decimal(whole, iso::USD);
    Formatter::money(&money, en_us_params())
}

fn en_us_params() -> Params {
    Params {
        digit_separator: ',',
        exponent_separator: '.',
        separator_pattern: vec![3, 3, 3, 3, 3],
        positions: vec![Position::Sign, Position::Symbol, Position::Amount],
        rounding: Some(0),
        symbol: Some("$"),
        code: Some("USD"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_usd(1000.0), "$1,000");
        assert_eq!(format_usd(1_234_567.0), "$1,234,567");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_usd(0.0), "$0");
    }

    #[test]
    fn test_format_small_amount_has_no_separator() {
        assert_eq!(format_usd(750.0), "$750");
    }

    #[test]
    fn test_format_rounds_fraction_away() {
        assert_eq!(format_usd(2500.6), "$2,501");
        assert_eq!(format_usd(999.4), "$999");
        assert_eq!(format_usd(10.5), "$11");
    }

    #[test]
    fn test_format_is_idempotent() {
        let first = format_usd(15_000.25);
        let second = format_usd(15_000.25);
        assert_eq!(first, "$15,000");
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_non_finite_falls_back() {
        assert_eq!(format_usd(f64::NAN), "$NaN");
        assert_eq!(format_usd(f64::NEG_INFINITY), "-$inf");
    }

    #[test]
    fn test_format_out_of_range_keeps_symbol() {
        assert_eq!(format_usd(1e30), "$1000000000000000000000000000000");
        assert_eq!(format_usd(-1e30), "-$1000000000000000000000000000000");
    }

    struct CapturingLogger {
        records: Mutex<Vec<(log::Level, String)>>,
    }

    impl log::Log for CapturingLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            if let Ok(mut records) = self.records.lock() {
                records.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    fn capturing_logger() -> &'static CapturingLogger {
        static LOGGER: OnceLock<&'static CapturingLogger> = OnceLock::new();
        LOGGER.get_or_init(|| {
            let logger: &'static CapturingLogger = Box::leak(Box::new(CapturingLogger {
                records: Mutex::new(Vec::new()),
            }));
            log::set_logger(logger).unwrap();
            log::set_max_level(log::LevelFilter::Trace);
            logger
        })
    }

    #[test]
    fn test_fallback_warning_reaches_log_backend() {
        let logger = capturing_logger();

        format_usd(f64::INFINITY);

        let records = logger.records.lock().unwrap();
        assert!(records.iter().any(|(level, message)| {
            *level == log::Level::Warn && message.contains("Award amount has no decimal representation")
        }));
    }

    #[test]
    fn test_format_negative_zero() {
        assert_eq!(format_usd(-0.0), "$0");
    }
}
