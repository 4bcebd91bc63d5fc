//! Risk/reward analysis
//!
//! Compares the distance to the stop against the distance to the target and
//! grades the resulting ratio.

use crate::calculators::constants::{DEFAULT_POSITION_SIZE, EXCELLENT_RATIO, GOOD_RATIO};
use crate::types::{Cash, Percentage, PositionType, Price, Quantity};
use serde::{Deserialize, Serialize};

/// Validated inputs for the risk/reward calculator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRewardInputs {
    pub entry_price: Price,
    pub stop_loss_price: Price,
    pub take_profit_price: Price,
    /// Units held; ratio-only analysis when absent
    pub position_size: Option<Quantity>,
}

/// Result of a risk/reward calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskRewardResult {
    /// Reward distance divided by risk distance
    pub risk_reward_ratio: f64,
    /// Price distance from entry to stop
    pub risk_amount: Price,
    /// Price distance from entry to target
    pub reward_amount: Price,
    /// Loss at the stop for the given position size
    pub potential_loss: Cash,
    /// Gain at the target for the given position size
    pub potential_profit: Cash,
    /// Risk distance as a percentage of entry
    pub risk_percentage: Percentage,
    /// Reward distance as a percentage of entry
    pub reward_percentage: Percentage,
    /// Long if the target sits above entry, short otherwise
    pub position_type: PositionType,
}

/// Qualitative grade of a risk/reward ratio (display only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatioQuality {
    Excellent,
    Good,
    Poor,
}

impl RatioQuality {
    /// Grade a ratio: >= 2 excellent, >= 1.5 good, else poor
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio >= EXCELLENT_RATIO {
            RatioQuality::Excellent
        } else if ratio >= GOOD_RATIO {
            RatioQuality::Good
        } else {
            RatioQuality::Poor
        }
    }

    /// Advisory message shown alongside the grade
    pub fn message(&self) -> &'static str {
        match self {
            RatioQuality::Excellent => {
                "Excellent risk/reward ratio! This trade has favorable odds."
            }
            RatioQuality::Good => "Good risk/reward ratio. Consider this trade carefully.",
            RatioQuality::Poor => "Poor risk/reward ratio. Consider adjusting your targets.",
        }
    }
}

/// Compute the risk/reward profile of a trade setup.
///
/// Assumes validated inputs; a stop equal to entry divides by zero and is
/// the caller's responsibility to prevent.
pub fn calculate_risk_reward(inputs: &RiskRewardInputs) -> RiskRewardResult {
    let entry = inputs.entry_price;
    let position_size = inputs.position_size.unwrap_or(DEFAULT_POSITION_SIZE);

    let risk_amount = (entry - inputs.stop_loss_price).abs();
    let reward_amount = (inputs.take_profit_price - entry).abs();
    let risk_reward_ratio = reward_amount / risk_amount;

    let potential_loss = risk_amount * position_size;
    let potential_profit = reward_amount * position_size;

    let risk_percentage = risk_amount / entry * 100.0;
    let reward_percentage = reward_amount / entry * 100.0;

    let position_type = if inputs.take_profit_price > entry {
        PositionType::Long
    } else {
        PositionType::Short
    };

    RiskRewardResult {
        risk_reward_ratio,
        risk_amount,
        reward_amount,
        potential_loss,
        potential_profit,
        risk_percentage,
        reward_percentage,
        position_type,
    }
}
