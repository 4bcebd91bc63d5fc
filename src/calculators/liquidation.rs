//! Liquidation price estimation
//!
//! Simplified isolated-margin model with a flat maintenance margin rate.

use crate::calculators::constants::MAINTENANCE_MARGIN_RATE;
use crate::types::{Cash, Leverage, Percentage, PositionType, Price, Quantity};
use serde::{Deserialize, Serialize};

/// Validated inputs for the liquidation calculator
///
/// Either `position_size` or `margin_amount` must be present; the missing
/// one is derived from the other at the entry price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidationInputs {
    pub entry_price: Price,
    pub leverage: Leverage,
    pub position_size: Option<Quantity>,
    pub margin_amount: Option<Cash>,
    pub position_type: PositionType,
}

/// Result of a liquidation price calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidationResult {
    pub liquidation_price: Price,
    /// Absolute price distance from entry to liquidation
    pub distance_to_liquidation: Price,
    /// Distance as a percentage of the entry price
    pub distance_percentage: Percentage,
    /// Collateral backing the position
    pub margin_used: Cash,
    /// Units held
    pub position_size: Quantity,
    /// Notional value at entry
    pub position_value: Cash,
}

/// Compute the liquidation price for a leveraged position.
///
/// Long positions liquidate below entry, shorts above. Assumes validated
/// inputs with at least one of size/margin present.
pub fn calculate_liquidation(inputs: &LiquidationInputs) -> LiquidationResult {
    let entry = inputs.entry_price;
    let leverage = inputs.leverage;

    let margin_used = match inputs.margin_amount {
        Some(margin) => margin,
        None => inputs
            .position_size
            .map(|size| size * entry / leverage)
            .unwrap_or(0.0),
    };
    let position_size = match inputs.position_size {
        Some(size) => size,
        None => margin_used * leverage / entry,
    };

    let liquidation_price = match inputs.position_type {
        PositionType::Long => entry * (1.0 - 1.0 / leverage + MAINTENANCE_MARGIN_RATE),
        PositionType::Short => entry * (1.0 + 1.0 / leverage - MAINTENANCE_MARGIN_RATE),
    };

    let distance_to_liquidation = (entry - liquidation_price).abs();
    let distance_percentage = distance_to_liquidation / entry * 100.0;
    let position_value = position_size * entry;

    LiquidationResult {
        liquidation_price,
        distance_to_liquidation,
        distance_percentage,
        margin_used,
        position_size,
        position_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn inputs() -> LiquidationInputs {
        LiquidationInputs {
            entry_price: 50000.0,
            leverage: 10.0,
            position_size: None,
            margin_amount: Some(5000.0),
            position_type: PositionType::Long,
        }
    }

    #[test]
    fn test_long_liquidation_example() {
        let result = calculate_liquidation(&inputs());

        // 50000 * (1 - 0.1 + 0.005)
        assert_relative_eq!(result.liquidation_price, 45250.0);
        assert_relative_eq!(result.distance_to_liquidation, 4750.0);
        assert_relative_eq!(result.distance_percentage, 9.5);
        assert_relative_eq!(result.margin_used, 5000.0);
        assert_relative_eq!(result.position_size, 1.0);
        assert_relative_eq!(result.position_value, 50000.0);
    }

    #[test]
    fn test_short_liquidation_above_entry() {
        let result = calculate_liquidation(&LiquidationInputs {
            position_type: PositionType::Short,
            ..inputs()
        });

        // 50000 * (1 + 0.1 - 0.005)
        assert_relative_eq!(result.liquidation_price, 54750.0);
        assert!(result.liquidation_price > 50000.0);
    }

    #[test]
    fn test_margin_derived_from_size() {
        let result = calculate_liquidation(&LiquidationInputs {
            position_size: Some(2.0),
            margin_amount: None,
            ..inputs()
        });

        assert_relative_eq!(result.margin_used, 10000.0);
        assert_relative_eq!(result.position_size, 2.0);
        assert_relative_eq!(result.position_value, 100000.0);
    }

    #[test]
    fn test_size_wins_when_both_given() {
        let result = calculate_liquidation(&LiquidationInputs {
            position_size: Some(0.5),
            margin_amount: Some(1000.0),
            ..inputs()
        });
        assert_relative_eq!(result.position_size, 0.5);
        assert_relative_eq!(result.margin_used, 1000.0);
    }

    proptest! {
        // Longs always liquidate below entry, shorts above, for leverage > 1.
        #[test]
        fn prop_liquidation_side(
            entry in 1.0..1e6f64,
            leverage in 1.001..150.0f64,
            margin in 1.0..1e6f64,
        ) {
            let long = calculate_liquidation(&LiquidationInputs {
                entry_price: entry,
                leverage,
                position_size: None,
                margin_amount: Some(margin),
                position_type: PositionType::Long,
            });
            prop_assert!(long.liquidation_price < entry);

            let short = calculate_liquidation(&LiquidationInputs {
                entry_price: entry,
                leverage,
                position_size: None,
                margin_amount: Some(margin),
                position_type: PositionType::Short,
            });
            prop_assert!(short.liquidation_price > entry);
        }
    }
}
