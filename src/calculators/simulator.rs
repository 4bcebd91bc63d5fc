//! Trade scenario simulation
//!
//! Projects a position's P&L over a fixed ladder of relative price moves,
//! plus a single custom price query.

use crate::calculators::constants::SCENARIO_LADDER;
use crate::types::{Cash, Leverage, Percentage, PositionType, Price, Quantity};
use serde::{Deserialize, Serialize};

/// Validated inputs for the trade simulator
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationInputs {
    pub entry_price: Price,
    pub position_size: Quantity,
    pub leverage: Leverage,
    pub stop_loss_price: Option<Price>,
    pub take_profit_price: Option<Price>,
    pub position_type: PositionType,
}

/// Whether a scenario price would have closed the position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScenarioStatus {
    /// Neither level crossed
    Open,
    /// Stop loss crossed in the adverse direction
    Stopped,
    /// Take profit crossed in the favorable direction
    Profit,
}

impl ScenarioStatus {
    /// Display label for the status column
    pub fn label(&self) -> &'static str {
        match self {
            ScenarioStatus::Open => "Open",
            ScenarioStatus::Stopped => "Stopped Out",
            ScenarioStatus::Profit => "Take Profit",
        }
    }
}

/// One rung of the scenario ladder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Display label, e.g. "-20%" or "Entry"
    pub label: String,
    pub price: Price,
    /// Signed price change from entry
    pub price_diff: Price,
    /// Signed P&L in account currency
    pub pnl: Cash,
    /// Signed P&L as a percentage of the position's margin
    pub pnl_percentage: Percentage,
    pub status: ScenarioStatus,
}

/// P&L at a single user-supplied price
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomScenario {
    pub price: Price,
    pub price_diff: Price,
    pub pnl: Cash,
    pub pnl_percentage: Percentage,
}

/// Classify a scenario price against the stop and take-profit levels.
///
/// A long is stopped at or below its stop and takes profit at or above its
/// target; a short is the mirror image. The stop wins when a price has
/// crossed both levels.
fn classify(price: Price, inputs: &SimulationInputs) -> ScenarioStatus {
    let stopped = inputs.stop_loss_price.is_some_and(|stop| match inputs.position_type {
        PositionType::Long => price <= stop,
        PositionType::Short => price >= stop,
    });
    if stopped {
        return ScenarioStatus::Stopped;
    }

    let profit = inputs
        .take_profit_price
        .is_some_and(|target| match inputs.position_type {
            PositionType::Long => price >= target,
            PositionType::Short => price <= target,
        });
    if profit {
        ScenarioStatus::Profit
    } else {
        ScenarioStatus::Open
    }
}

fn pnl_at(price: Price, inputs: &SimulationInputs) -> (Price, Cash, Percentage) {
    let direction = inputs.position_type.direction();
    let price_diff = price - inputs.entry_price;
    let pnl = direction * price_diff * inputs.position_size * inputs.leverage;
    let pnl_percentage =
        direction * price_diff / inputs.entry_price * 100.0 * inputs.leverage;
    (price_diff, pnl, pnl_percentage)
}

/// Generate the fixed ladder of price scenarios for a position.
///
/// Assumes validated inputs (positive entry, size and leverage).
pub fn generate_scenarios(inputs: &SimulationInputs) -> Vec<Scenario> {
    SCENARIO_LADDER
        .iter()
        .map(|&(label, pct)| {
            let price = inputs.entry_price * (1.0 + pct);
            let (price_diff, pnl, pnl_percentage) = pnl_at(price, inputs);
            Scenario {
                label: label.to_string(),
                price,
                price_diff,
                pnl,
                pnl_percentage,
                status: classify(price, inputs),
            }
        })
        .collect()
}

/// Evaluate P&L at one arbitrary price, independent of the ladder
pub fn custom_scenario(inputs: &SimulationInputs, price: Price) -> CustomScenario {
    let (price_diff, pnl, pnl_percentage) = pnl_at(price, inputs);
    CustomScenario {
        price,
        price_diff,
        pnl,
        pnl_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn inputs() -> SimulationInputs {
        SimulationInputs {
            entry_price: 50000.0,
            position_size: 0.1,
            leverage: 1.0,
            stop_loss_price: None,
            take_profit_price: None,
            position_type: PositionType::Long,
        }
    }

    #[test]
    fn test_ladder_shape() {
        let scenarios = generate_scenarios(&inputs());
        assert_eq!(scenarios.len(), 7);
        assert_eq!(scenarios[0].label, "-20%");
        assert_eq!(scenarios[3].label, "Entry");
        assert_relative_eq!(scenarios[0].price, 40000.0);
        assert_relative_eq!(scenarios[3].price, 50000.0);
        assert_relative_eq!(scenarios[6].price, 60000.0);
    }

    #[test]
    fn test_long_pnl_at_entry_is_zero() {
        let scenarios = generate_scenarios(&inputs());
        assert_relative_eq!(scenarios[3].pnl, 0.0);
        assert_relative_eq!(scenarios[3].pnl_percentage, 0.0);
    }

    #[test]
    fn test_custom_price_example() {
        let result = custom_scenario(&inputs(), 52000.0);
        assert_relative_eq!(result.price_diff, 2000.0);
        assert_relative_eq!(result.pnl, 200.0);
        assert_relative_eq!(result.pnl_percentage, 4.0);
    }

    #[test]
    fn test_leverage_multiplies_pnl() {
        let leveraged = SimulationInputs {
            leverage: 10.0,
            ..inputs()
        };
        let result = custom_scenario(&leveraged, 52000.0);
        assert_relative_eq!(result.pnl, 2000.0);
        assert_relative_eq!(result.pnl_percentage, 40.0);
    }

    #[test]
    fn test_short_pnl_is_mirrored() {
        let short = SimulationInputs {
            position_type: PositionType::Short,
            ..inputs()
        };
        let up = custom_scenario(&short, 52000.0);
        assert_relative_eq!(up.pnl, -200.0);
        assert_relative_eq!(up.pnl_percentage, -4.0);

        let down = custom_scenario(&short, 48000.0);
        assert_relative_eq!(down.pnl, 200.0);
    }

    // Crossing rules: a long is stopped at or below its stop and takes
    // profit at or above its target.
    #[test]
    fn test_long_status_classification() {
        let long = SimulationInputs {
            stop_loss_price: Some(46000.0),
            take_profit_price: Some(55000.0),
            ..inputs()
        };
        let scenarios = generate_scenarios(&long);

        // -20% = 40000 and -10% = 45000 are through the stop
        assert_eq!(scenarios[0].status, ScenarioStatus::Stopped);
        assert_eq!(scenarios[1].status, ScenarioStatus::Stopped);
        // -5% and entry sit between the levels
        assert_eq!(scenarios[2].status, ScenarioStatus::Open);
        assert_eq!(scenarios[3].status, ScenarioStatus::Open);
        // +10% = 55000 and +20% = 60000 reach the target
        assert_eq!(scenarios[4].status, ScenarioStatus::Open);
        assert_eq!(scenarios[5].status, ScenarioStatus::Profit);
        assert_eq!(scenarios[6].status, ScenarioStatus::Profit);
    }

    // A short is the mirror image: stopped at or above its stop, profit at
    // or below its target.
    #[test]
    fn test_short_status_classification() {
        let short = SimulationInputs {
            position_type: PositionType::Short,
            stop_loss_price: Some(54000.0),
            take_profit_price: Some(45000.0),
            ..inputs()
        };
        let scenarios = generate_scenarios(&short);

        assert_eq!(scenarios[0].status, ScenarioStatus::Profit); // 40000
        assert_eq!(scenarios[1].status, ScenarioStatus::Profit); // 45000
        assert_eq!(scenarios[2].status, ScenarioStatus::Open); // 47500
        assert_eq!(scenarios[3].status, ScenarioStatus::Open); // 50000
        assert_eq!(scenarios[4].status, ScenarioStatus::Open); // 52500
        assert_eq!(scenarios[5].status, ScenarioStatus::Stopped); // 55000
        assert_eq!(scenarios[6].status, ScenarioStatus::Stopped); // 60000
    }

    #[test]
    fn test_stop_wins_over_profit_when_both_crossed() {
        // Degenerate setup where the stop sits above the target
        let long = SimulationInputs {
            stop_loss_price: Some(55000.0),
            take_profit_price: Some(52000.0),
            ..inputs()
        };
        let result = classify(53000.0, &long);
        assert_eq!(result, ScenarioStatus::Stopped);
    }

    #[test]
    fn test_no_levels_means_always_open() {
        let scenarios = generate_scenarios(&inputs());
        assert!(scenarios
            .iter()
            .all(|s| s.status == ScenarioStatus::Open));
    }
}
