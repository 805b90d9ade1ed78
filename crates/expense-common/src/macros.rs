//! Convenience macros for early returns with `ReportError`

/// Return early with an error.
///
/// Accepts either a format string, which becomes a generic error, or any
/// expression convertible into `ReportError`.
///
/// # Examples
///
/// ```rust
/// use expense_common::{bail, ReportError, Result};
///
/// fn parse_day(day: u32) -> Result<u32> {
///     if day == 0 {
///         bail!(ReportError::data("day of month cannot be zero"));
///     }
///     if day > 31 {
///         bail!("day {} is out of range", day);
///     }
///     Ok(day)
/// }
///
/// assert!(parse_day(0).is_err());
/// assert!(parse_day(32).is_err());
/// assert_eq!(parse_day(12).unwrap(), 12);
/// ```
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::ReportError::new($msg))
    };
    ($fmt:literal, $($arg:tt)+) => {
        return Err($crate::ReportError::new(format!($fmt, $($arg)+)))
    };
    ($err:expr $(,)?) => {
        return Err(::core::convert::From::from($err))
    };
}

/// Return early with an error if a condition does not hold.
///
/// # Examples
///
/// ```rust
/// use expense_common::{ensure, ReportError, Result};
///
/// fn check_total(total: f64) -> Result<f64> {
///     ensure!(total.is_finite(), ReportError::render("total is not a finite number"));
///     ensure!(total >= 0.0, "negative total: {}", total);
///     Ok(total)
/// }
///
/// assert!(check_total(f64::NAN).is_err());
/// assert!(check_total(-1.0).is_err());
/// assert!(check_total(12.5).is_ok());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $msg:literal $(,)?) => {
        if !$cond {
            return Err($crate::ReportError::new($msg));
        }
    };
    ($cond:expr, $fmt:literal, $($arg:tt)+) => {
        if !$cond {
            return Err($crate::ReportError::new(format!($fmt, $($arg)+)));
        }
    };
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err(::core::convert::From::from($err));
        }
    };
}
