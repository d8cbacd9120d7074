//! Net salary calculation.
//!
//! Gross pay at or above the threshold has levies and income tax deducted;
//! gross pay below it is paid out unchanged. The threshold is a cliff, not a
//! marginal bracket.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::SalaryRules;
use crate::error::{LedgerError, LedgerResult};
use crate::models::SalaryCalculation;

use super::worked_hours::MINUTES_PER_HOUR;

/// Computes gross pay for `minutes` worked at `salary_per_hour`.
///
/// The rate is applied to the minute count before dividing by sixty, so
/// whole-currency results such as 500 minutes at 21 per hour come out exact.
///
/// # Examples
///
/// ```
/// use hours_ledger::calculation::gross_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(gross_salary(500, Decimal::new(21, 0)).unwrap(), Decimal::new(175, 0));
/// ```
pub fn gross_salary(minutes: i64, salary_per_hour: Decimal) -> LedgerResult<Decimal> {
    let amount = Decimal::from(minutes)
        .checked_mul(salary_per_hour)
        .and_then(|amount| amount.checked_div(MINUTES_PER_HOUR));
    in_range(amount, "gross salary")
}

/// Computes the net ("clear") salary for a gross amount using the default rules.
///
/// # Examples
///
/// ```
/// use hours_ledger::calculation::net_salary;
/// use rust_decimal::Decimal;
///
/// assert_eq!(net_salary(Decimal::new(1000, 0)).unwrap(), Decimal::new(779, 0));
/// assert_eq!(net_salary(Decimal::new(500, 0)).unwrap(), Decimal::new(500, 0));
/// ```
pub fn net_salary(gross: Decimal) -> LedgerResult<Decimal> {
    net_salary_with(&SalaryRules::default(), gross)
}

/// Computes the net salary for a gross amount under the given rules.
///
/// Levies and tax are carried at full precision and only the final net
/// figure is rounded to whole currency units.
///
/// # Errors
///
/// Returns [`LedgerError::CalculationOverflow`] if an intermediate figure
/// leaves the decimal range.
pub fn net_salary_with(rules: &SalaryRules, gross: Decimal) -> LedgerResult<Decimal> {
    if gross < rules.threshold {
        return Ok(gross);
    }

    let levies = in_range(gross.checked_mul(rules.levy_rate), "levies")?;
    let tax = in_range(
        taxable(gross, levies, rules).and_then(|taxable| taxable.checked_mul(rules.tax_rate)),
        "tax",
    )?;
    let net = in_range(
        gross.checked_sub(levies).and_then(|net| net.checked_sub(tax)),
        "net salary",
    )?;
    Ok(round_half_up(net, 0))
}

/// Runs the salary calculator for `hours` worked at `salary_per_hour`
/// using the default rules.
///
/// # Examples
///
/// ```
/// use hours_ledger::calculation::calculate_salary;
/// use rust_decimal::Decimal;
///
/// let result = calculate_salary(Decimal::new(100, 0), Decimal::new(10, 0)).unwrap();
/// assert_eq!(result.total_salary, Decimal::new(1000, 0));
/// assert_eq!(result.levies, Decimal::new(13400, 2));
/// assert_eq!(result.tax, Decimal::new(8659, 2));
/// assert_eq!(result.clear_salary, Decimal::new(779, 0));
/// ```
pub fn calculate_salary(
    hours: Decimal,
    salary_per_hour: Decimal,
) -> LedgerResult<SalaryCalculation> {
    calculate_salary_with(&SalaryRules::default(), hours, salary_per_hour)
}

/// Runs the salary calculator under the given rules.
///
/// Unlike [`net_salary_with`], levies and tax are each rounded to two
/// decimals before the net figure is derived from them, and the net figure
/// is then rounded again to whole units.
///
/// # Errors
///
/// Returns [`LedgerError::CalculationOverflow`] if the inputs are so large
/// that gross pay or one of the figures derived from it leaves the decimal
/// range.
pub fn calculate_salary_with(
    rules: &SalaryRules,
    hours: Decimal,
    salary_per_hour: Decimal,
) -> LedgerResult<SalaryCalculation> {
    let total_salary = in_range(hours.checked_mul(salary_per_hour), "gross salary")?;
    let super_total_salary = in_range(
        total_salary
            .checked_mul(rules.super_gross_factor)
            .and_then(|contributions| contributions.checked_add(total_salary)),
        "super gross salary",
    )?;

    let (levies, tax, clear_salary) = if total_salary >= rules.threshold {
        let levies = round_half_up(
            in_range(total_salary.checked_mul(rules.levy_rate), "levies")?,
            2,
        );
        let tax = round_half_up(
            in_range(
                taxable(total_salary, levies, rules)
                    .and_then(|taxable| taxable.checked_mul(rules.tax_rate)),
                "tax",
            )?,
            2,
        );
        let net = in_range(
            total_salary.checked_sub(levies).and_then(|net| net.checked_sub(tax)),
            "net salary",
        )?;
        (levies, tax, round_half_up(net, 0))
    } else {
        (Decimal::ZERO, Decimal::ZERO, total_salary)
    };

    Ok(SalaryCalculation {
        total_hours: hours,
        salary_per_hour,
        total_salary,
        super_total_salary,
        levies,
        tax,
        clear_salary,
    })
}

fn taxable(gross: Decimal, levies: Decimal, rules: &SalaryRules) -> Option<Decimal> {
    gross
        .checked_sub(levies)
        .and_then(|rest| rest.checked_sub(rules.tax_free_allowance))
}

fn in_range(value: Option<Decimal>, figure: &str) -> LedgerResult<Decimal> {
    value.ok_or_else(|| LedgerError::CalculationOverflow {
        message: format!("{} is out of range", figure),
    })
}

fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
