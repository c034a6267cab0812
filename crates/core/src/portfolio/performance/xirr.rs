//! XIRR solver.
//!
//! Finds the annual rate `r` that zeroes `Σ CF_i / (1 + r)^t_i`, where `t_i`
//! is the calendar-exact distance in 365-day years from the earliest cash
//! flow to `CF_i`. Solved with Newton-Raphson using the closed-form
//! derivative `Σ -t_i · CF_i / (1 + r)^(t_i + 1)`.

use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::performance_model::CashFlow;
use crate::constants::{XIRR_DEFAULT_GUESS, XIRR_MAX_ITERATIONS, XIRR_TOLERANCE};
use crate::errors::CalculatorError;
use crate::utils::time_utils::year_fraction;

/// Solver knobs. The iteration cap is the only bound on execution time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XirrOptions {
    pub guess: f64,
    pub max_iterations: usize,
    pub tolerance: f64,
}

impl Default for XirrOptions {
    fn default() -> Self {
        Self {
            guess: XIRR_DEFAULT_GUESS,
            max_iterations: XIRR_MAX_ITERATIONS,
            tolerance: XIRR_TOLERANCE,
        }
    }
}

/// XIRR with the default iteration cap and tolerance.
///
/// Returns the rate as a percentage (`0.10` solves to `10.0`).
pub fn xirr(cash_flows: &[CashFlow], guess: f64) -> Result<f64, CalculatorError> {
    xirr_with_options(
        cash_flows,
        &XirrOptions {
            guess,
            ..XirrOptions::default()
        },
    )
}

/// XIRR with explicit solver options. Returns the rate as a percentage.
///
/// Cash flows are evaluated in the order given; times are measured from the
/// earliest date, so any permutation of the same flows yields the same rate
/// up to floating-point rounding.
pub fn xirr_with_options(
    cash_flows: &[CashFlow],
    options: &XirrOptions,
) -> Result<f64, CalculatorError> {
    if cash_flows.len() < 2 {
        return Err(CalculatorError::InsufficientData(format!(
            "at least two cash flows are required, got {}",
            cash_flows.len()
        )));
    }

    let has_outflow = cash_flows.iter().any(|cf| cf.amount < Decimal::ZERO);
    let has_inflow = cash_flows.iter().any(|cf| cf.amount > Decimal::ZERO);
    if !has_outflow || !has_inflow {
        return Err(CalculatorError::InsufficientData(
            "cash flows need at least one investment and one return".to_string(),
        ));
    }

    let amounts = cash_flows
        .iter()
        .map(|cf| {
            cf.amount.to_f64().ok_or_else(|| {
                CalculatorError::InsufficientData(format!(
                    "cash flow amount {} is not representable",
                    cf.amount
                ))
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let origin = cash_flows
        .iter()
        .map(|cf| cf.date)
        .min()
        .ok_or_else(|| CalculatorError::InsufficientData("no cash flows".to_string()))?;
    let times: Vec<f64> = cash_flows
        .iter()
        .map(|cf| year_fraction(origin, cf.date))
        .collect();

    // Every flow on the same day: the NPV is the plain sum whatever the rate.
    if times.iter().all(|t| *t == 0.0) {
        let net: f64 = amounts.iter().sum();
        if net.abs() < options.tolerance {
            return Ok(0.0);
        }
        return Err(CalculatorError::Convergence(
            "all cash flows share one date and do not net to zero; derivative vanished"
                .to_string(),
        ));
    }

    let mut rate = options.guess;

    for iteration in 0..options.max_iterations {
        let (value, derivative) = npv_and_derivative(&amounts, &times, rate);

        if !value.is_finite() || !derivative.is_finite() {
            return Err(CalculatorError::Convergence(format!(
                "rate diverged to {} after {} iterations",
                rate, iteration
            )));
        }

        if value.abs() < options.tolerance {
            return Ok(rate * 100.0);
        }

        if derivative.abs() < options.tolerance {
            return Err(CalculatorError::Convergence(format!(
                "derivative vanished at rate {} after {} iterations",
                rate, iteration
            )));
        }

        let next_rate = rate - value / derivative;
        if !next_rate.is_finite() {
            return Err(CalculatorError::Convergence(format!(
                "rate diverged after {} iterations",
                iteration + 1
            )));
        }

        if (next_rate - rate).abs() < options.tolerance {
            return Ok(next_rate * 100.0);
        }

        rate = next_rate;
    }

    Err(CalculatorError::Convergence(format!(
        "no solution within {} iterations",
        options.max_iterations
    )))
}

fn npv_and_derivative(amounts: &[f64], times: &[f64], rate: f64) -> (f64, f64) {
    let mut value = 0.0;
    let mut derivative = 0.0;

    for (amount, t) in amounts.iter().zip(times) {
        let factor = (1.0 + rate).powf(*t);
        value += amount / factor;
        derivative -= t * amount / (factor * (1.0 + rate));
    }

    (value, derivative)
}
