//! Core types and constants

use serde::{Deserialize, Serialize};

/// Price type (using f64 for precision)
pub type Price = f64;

/// Money/cash type
pub type Cash = f64;

/// Quantity/size type (units of the traded asset)
pub type Quantity = f64;

/// Leverage multiplier type
pub type Leverage = f64;

/// Percentage type (0.0 to 100.0, as entered in a form)
pub type Percentage = f64;

/// Direction of a trade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PositionType {
    Long,
    Short,
}

impl PositionType {
    /// Parse from a form value ("long"/"short")
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "long" => Some(PositionType::Long),
            "short" => Some(PositionType::Short),
            _ => None,
        }
    }

    /// Signed direction multiplier: +1 for long, -1 for short
    pub fn direction(&self) -> f64 {
        match self {
            PositionType::Long => 1.0,
            PositionType::Short => -1.0,
        }
    }

    /// Display label ("Long"/"Short")
    pub fn label(&self) -> &'static str {
        match self {
            PositionType::Long => "Long",
            PositionType::Short => "Short",
        }
    }
}

/// Which calculator produced a draft or history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalculatorType {
    #[serde(rename = "position-sizer")]
    PositionSizer,
    #[serde(rename = "liquidation-calculator")]
    LiquidationCalculator,
    #[serde(rename = "risk-reward")]
    RiskReward,
    #[serde(rename = "trade-simulator")]
    TradeSimulator,
}

impl CalculatorType {
    /// Storage key for this calculator's saved draft
    pub fn storage_key(&self) -> &'static str {
        match self {
            CalculatorType::PositionSizer => "leverage-lever-position-sizer",
            CalculatorType::LiquidationCalculator => "leverage-lever-liquidation-calculator",
            CalculatorType::RiskReward => "leverage-lever-risk-reward",
            CalculatorType::TradeSimulator => "leverage-lever-trade-simulator",
        }
    }
}

/// Storage key for the capped calculation history
pub const CALCULATION_HISTORY_KEY: &str = "leverage-lever-calculation-history";
