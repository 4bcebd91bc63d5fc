//! Position sizing from account risk
//!
//! Sizes a position so that a stop-out loses exactly the chosen fraction of
//! the account.

use crate::types::{Cash, Percentage, PositionType, Price, Quantity};
use serde::{Deserialize, Serialize};

/// Validated inputs for the position sizing calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSizeInputs {
    pub account_balance: Cash,
    /// Risk per trade as a percentage of the account (0-100)
    pub risk_percentage: Percentage,
    pub entry_price: Price,
    pub stop_loss_price: Price,
}

/// Result of a position sizing calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSizeResult {
    /// Account currency at risk if the stop is hit
    pub risk_amount: Cash,
    /// Absolute price distance from entry to stop
    pub stop_loss_distance: Price,
    /// Units to buy or sell
    pub position_size: Quantity,
    /// Notional value of the position at entry
    pub position_value: Cash,
    /// Position value as a percentage of the account
    pub position_percentage: Percentage,
    /// Leverage implied by taking the full position against the account
    pub max_leverage: f64,
    /// Long if the stop sits below entry, short otherwise
    pub position_type: PositionType,
}

/// Compute position size from account balance, risk tolerance and stop distance.
///
/// Assumes validated inputs; entry equal to stop divides by zero and is the
/// caller's responsibility to prevent.
pub fn calculate_position_size(inputs: &PositionSizeInputs) -> PositionSizeResult {
    let risk_amount = inputs.account_balance * inputs.risk_percentage / 100.0;
    let stop_loss_distance = (inputs.entry_price - inputs.stop_loss_price).abs();
    let position_size = risk_amount / stop_loss_distance;
    let position_value = position_size * inputs.entry_price;
    let position_percentage = position_value / inputs.account_balance * 100.0;
    let max_leverage = if inputs.account_balance == 0.0 {
        0.0
    } else {
        position_value / inputs.account_balance
    };
    let position_type = if inputs.entry_price > inputs.stop_loss_price {
        PositionType::Long
    } else {
        PositionType::Short
    };

    PositionSizeResult {
        risk_amount,
        stop_loss_distance,
        position_size,
        position_value,
        position_percentage,
        max_leverage,
        position_type,
    }
}
