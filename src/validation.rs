//! Form input validation
//!
//! Validates raw (string) form input before it is handed to the calculators.
//! Validators never fail: they always return a complete [`ValidationOutcome`]
//! with errors keyed by form field name, suitable for display next to the
//! offending input.

use crate::calculators::constants::{MAX_RECOMMENDED_RISK_PERCENTAGE, MAX_SAFE_LEVERAGE};
use crate::calculators::liquidation::LiquidationInputs;
use crate::calculators::position_sizer::PositionSizeInputs;
use crate::calculators::risk_reward::RiskRewardInputs;
use crate::calculators::simulator::SimulationInputs;
use crate::types::PositionType;
use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

/// Result of validating a form
#[derive(Debug, Clone, Default)]
pub struct ValidationOutcome {
    /// True iff `errors` is empty
    pub is_valid: bool,
    /// Error messages keyed by form field name
    pub errors: HashMap<&'static str, String>,
}

impl ValidationOutcome {
    fn from_errors(errors: HashMap<&'static str, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// Get the error message for a field, if any
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Parse a form value to a finite f64
fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether the value parses to a finite number >= 0. Empty input is invalid.
pub fn is_valid_number(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n >= 0.0)
}

/// Whether the value is a valid percentage in [0, 100]
pub fn is_valid_percentage(value: &str) -> bool {
    parse_number(value).is_some_and(|n| (0.0..=100.0).contains(&n))
}

/// Whether the value is a valid price (strictly positive)
pub fn is_valid_price(value: &str) -> bool {
    parse_number(value).is_some_and(|n| n > 0.0)
}

/// Raw input for the position sizing calculator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositionSizerForm {
    pub account_balance: String,
    pub risk_percentage: String,
    pub entry_price: String,
    pub stop_loss_price: String,
}

impl PositionSizerForm {
    /// Typed inputs, if every field parses. Callers should validate first.
    pub fn inputs(&self) -> Option<PositionSizeInputs> {
        Some(PositionSizeInputs {
            account_balance: parse_number(&self.account_balance)?,
            risk_percentage: parse_number(&self.risk_percentage)?,
            entry_price: parse_number(&self.entry_price)?,
            stop_loss_price: parse_number(&self.stop_loss_price)?,
        })
    }
}

/// Raw input for the liquidation price calculator
///
/// One of `position_size` / `margin_amount` may be left empty; the
/// calculator derives the missing one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiquidationForm {
    pub entry_price: String,
    pub leverage: String,
    pub position_size: String,
    pub margin_amount: String,
    pub position_type: String,
}

impl LiquidationForm {
    /// Typed inputs, if the required fields parse. Callers should validate first.
    pub fn inputs(&self) -> Option<LiquidationInputs> {
        let position_size = parse_number(&self.position_size);
        let margin_amount = parse_number(&self.margin_amount);
        if position_size.is_none() && margin_amount.is_none() {
            return None;
        }
        Some(LiquidationInputs {
            entry_price: parse_number(&self.entry_price)?,
            leverage: parse_number(&self.leverage)?,
            position_size,
            margin_amount,
            position_type: PositionType::parse(&self.position_type)
                .unwrap_or(PositionType::Long),
        })
    }
}

/// Raw input for the risk/reward calculator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskRewardForm {
    pub entry_price: String,
    pub stop_loss_price: String,
    pub take_profit_price: String,
    pub position_size: String,
}

impl RiskRewardForm {
    /// Typed inputs, if the three prices parse. Callers should validate first.
    pub fn inputs(&self) -> Option<RiskRewardInputs> {
        Some(RiskRewardInputs {
            entry_price: parse_number(&self.entry_price)?,
            stop_loss_price: parse_number(&self.stop_loss_price)?,
            take_profit_price: parse_number(&self.take_profit_price)?,
            position_size: parse_number(&self.position_size),
        })
    }
}

/// Raw input for the trade scenario simulator
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SimulatorForm {
    pub entry_price: String,
    pub position_size: String,
    pub leverage: String,
    pub stop_loss_price: String,
    pub take_profit_price: String,
    pub position_type: String,
}

impl SimulatorForm {
    /// Typed inputs, if the required fields parse. Callers should validate first.
    pub fn inputs(&self) -> Option<SimulationInputs> {
        Some(SimulationInputs {
            entry_price: parse_number(&self.entry_price)?,
            position_size: parse_number(&self.position_size)?,
            leverage: parse_number(&self.leverage)?,
            stop_loss_price: parse_number(&self.stop_loss_price),
            take_profit_price: parse_number(&self.take_profit_price),
            position_type: PositionType::parse(&self.position_type)
                .unwrap_or(PositionType::Long),
        })
    }
}

/// Validate a complete position sizing form
pub fn validate_position_sizer_form(form: &PositionSizerForm) -> ValidationOutcome {
    let mut errors = HashMap::new();

    if !is_valid_number(&form.account_balance)
        || parse_number(&form.account_balance).is_some_and(|n| n <= 0.0)
    {
        errors.insert(
            "accountBalance",
            "Please enter a valid account balance".to_string(),
        );
    }

    if !is_valid_percentage(&form.risk_percentage) {
        errors.insert(
            "riskPercentage",
            "Please enter a valid percentage between 0 and 100".to_string(),
        );
    } else if parse_number(&form.risk_percentage).is_some_and(|n| n > MAX_RECOMMENDED_RISK_PERCENTAGE) {
        errors.insert(
            "riskPercentage",
            "Risk percentage above 10% is not recommended".to_string(),
        );
    }

    if !is_valid_price(&form.entry_price) {
        errors.insert("entryPrice", "Please enter a valid entry price".to_string());
    }

    if !is_valid_price(&form.stop_loss_price) {
        errors.insert(
            "stopLossPrice",
            "Please enter a valid stop loss price".to_string(),
        );
    } else if is_valid_price(&form.entry_price)
        && parse_number(&form.stop_loss_price) == parse_number(&form.entry_price)
    {
        errors.insert(
            "stopLossPrice",
            "Stop loss price cannot be equal to entry price".to_string(),
        );
    }

    ValidationOutcome::from_errors(errors)
}

/// Validate a complete liquidation calculator form
pub fn validate_liquidation_form(form: &LiquidationForm) -> ValidationOutcome {
    let mut errors = HashMap::new();

    // Collateral may be given directly (margin) or implied by a position size;
    // at least one is required and whichever is present must be positive.
    let margin = parse_number(&form.margin_amount);
    let size = parse_number(&form.position_size);
    if margin.is_none() && size.is_none() {
        errors.insert(
            "marginAmount",
            "Please enter a valid collateral amount".to_string(),
        );
    } else {
        if !form.margin_amount.trim().is_empty() && !margin.is_some_and(|n| n > 0.0) {
            errors.insert(
                "marginAmount",
                "Please enter a valid collateral amount".to_string(),
            );
        }
        if !form.position_size.trim().is_empty() && !size.is_some_and(|n| n > 0.0) {
            errors.insert(
                "positionSize",
                "Please enter a valid position size".to_string(),
            );
        }
    }

    if !is_valid_number(&form.leverage) || parse_number(&form.leverage).is_some_and(|n| n <= 0.0) {
        errors.insert(
            "leverage",
            "Please enter a valid leverage value".to_string(),
        );
    } else if parse_number(&form.leverage).is_some_and(|n| n > MAX_SAFE_LEVERAGE) {
        errors.insert(
            "leverage",
            "Leverage above 100x is extremely risky".to_string(),
        );
    }

    if !is_valid_price(&form.entry_price) {
        errors.insert("entryPrice", "Please enter a valid entry price".to_string());
    }

    if !form.position_type.is_empty() && PositionType::parse(&form.position_type).is_none() {
        errors.insert(
            "positionType",
            "Please select a valid position type".to_string(),
        );
    }

    ValidationOutcome::from_errors(errors)
}

/// Validate a complete risk/reward calculator form
pub fn validate_risk_reward_form(form: &RiskRewardForm) -> ValidationOutcome {
    let mut errors = HashMap::new();

    if !is_valid_price(&form.entry_price) {
        errors.insert("entryPrice", "Please enter a valid entry price".to_string());
    }

    if !is_valid_price(&form.stop_loss_price) {
        errors.insert(
            "stopLossPrice",
            "Please enter a valid stop loss price".to_string(),
        );
    }

    if !is_valid_price(&form.take_profit_price) {
        errors.insert(
            "takeProfitPrice",
            "Please enter a valid take profit price".to_string(),
        );
    }

    if is_valid_price(&form.entry_price)
        && is_valid_price(&form.stop_loss_price)
        && is_valid_price(&form.take_profit_price)
    {
        // Safe: all three validated above
        let entry = parse_number(&form.entry_price).unwrap_or_default();
        let stop_loss = parse_number(&form.stop_loss_price).unwrap_or_default();
        let take_profit = parse_number(&form.take_profit_price).unwrap_or_default();

        if stop_loss == entry {
            errors.insert(
                "stopLossPrice",
                "Stop loss price cannot be equal to entry price".to_string(),
            );
        }

        if take_profit == entry {
            errors.insert(
                "takeProfitPrice",
                "Take profit price cannot be equal to entry price".to_string(),
            );
        }

        if stop_loss < entry && take_profit < entry {
            errors.insert(
                "takeProfitPrice",
                "For a long position, take profit must be above entry price".to_string(),
            );
        }

        if stop_loss > entry && take_profit > entry {
            errors.insert(
                "takeProfitPrice",
                "For a short position, take profit must be below entry price".to_string(),
            );
        }
    }

    ValidationOutcome::from_errors(errors)
}

/// Validate a complete trade simulator form
///
/// Stop loss and take profit are optional levels; when present they must be
/// valid prices.
pub fn validate_simulator_form(form: &SimulatorForm) -> ValidationOutcome {
    let mut errors = HashMap::new();

    if !is_valid_price(&form.entry_price) {
        errors.insert("entryPrice", "Please enter a valid entry price".to_string());
    }

    if !is_valid_number(&form.position_size)
        || parse_number(&form.position_size).is_some_and(|n| n <= 0.0)
    {
        errors.insert(
            "positionSize",
            "Please enter a valid position size".to_string(),
        );
    }

    if !is_valid_number(&form.leverage) || parse_number(&form.leverage).is_some_and(|n| n <= 0.0) {
        errors.insert(
            "leverage",
            "Please enter a valid leverage value".to_string(),
        );
    }

    if !form.stop_loss_price.trim().is_empty() && !is_valid_price(&form.stop_loss_price) {
        errors.insert(
            "stopLossPrice",
            "Please enter a valid stop loss price".to_string(),
        );
    }

    if !form.take_profit_price.trim().is_empty() && !is_valid_price(&form.take_profit_price) {
        errors.insert(
            "takeProfitPrice",
            "Please enter a valid take profit price".to_string(),
        );
    }

    if !form.position_type.is_empty() && PositionType::parse(&form.position_type).is_none() {
        errors.insert(
            "positionType",
            "Please select a valid position type".to_string(),
        );
    }

    ValidationOutcome::from_errors(errors)
}
