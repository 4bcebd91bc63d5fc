//! Capped calculation history
//!
//! Every completed calculation can be appended to a single history log,
//! newest first, capped at [`MAX_HISTORY_ENTRIES`] with FIFO eviction.

use crate::calculators::constants::MAX_HISTORY_ENTRIES;
use crate::calculators::liquidation::{LiquidationInputs, LiquidationResult};
use crate::calculators::position_sizer::{PositionSizeInputs, PositionSizeResult};
use crate::calculators::risk_reward::{RiskRewardInputs, RiskRewardResult};
use crate::calculators::simulator::{Scenario, SimulationInputs};
use crate::storage::{load_form_data, save_form_data, KeyValueStore};
use crate::types::{CalculatorType, CALCULATION_HISTORY_KEY};
use chrono::{DateTime, Utc};
use log::debug;
use serde::{Deserialize, Serialize};

/// A calculation's inputs and outputs, tagged by calculator
///
/// One variant per calculator keeps the form/result pairing checked at
/// build time instead of relying on matching field-name conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculatorType")]
pub enum CalculationRecord {
    #[serde(rename = "position-sizer")]
    PositionSizer {
        #[serde(rename = "formData")]
        form_data: PositionSizeInputs,
        result: PositionSizeResult,
    },
    #[serde(rename = "liquidation-calculator")]
    LiquidationCalculator {
        #[serde(rename = "formData")]
        form_data: LiquidationInputs,
        result: LiquidationResult,
    },
    #[serde(rename = "risk-reward")]
    RiskReward {
        #[serde(rename = "formData")]
        form_data: RiskRewardInputs,
        result: RiskRewardResult,
    },
    #[serde(rename = "trade-simulator")]
    TradeSimulator {
        #[serde(rename = "formData")]
        form_data: SimulationInputs,
        result: Vec<Scenario>,
    },
}

impl CalculationRecord {
    /// Which calculator produced this record
    pub fn calculator_type(&self) -> CalculatorType {
        match self {
            CalculationRecord::PositionSizer { .. } => CalculatorType::PositionSizer,
            CalculationRecord::LiquidationCalculator { .. } => {
                CalculatorType::LiquidationCalculator
            }
            CalculationRecord::RiskReward { .. } => CalculatorType::RiskReward,
            CalculationRecord::TradeSimulator { .. } => CalculatorType::TradeSimulator,
        }
    }
}

/// One saved calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Time-based id, strictly monotonic within a store
    pub id: i64,
    /// When the calculation was saved (ISO-8601 in the stored JSON)
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub record: CalculationRecord,
}

/// Load the full history, newest first. Empty on absent or corrupt data.
pub fn load_calculation_history(store: &dyn KeyValueStore) -> Vec<HistoryEntry> {
    load_form_data(store, CALCULATION_HISTORY_KEY).unwrap_or_default()
}

/// Prepend a calculation to the history and persist it, best-effort.
///
/// The log is truncated to the most recent [`MAX_HISTORY_ENTRIES`] entries.
pub fn save_calculation_to_history(store: &mut dyn KeyValueStore, record: CalculationRecord) {
    let mut history = load_calculation_history(store);

    let now = Utc::now();
    // Epoch millis can collide on fast consecutive saves; bump past the
    // newest entry to keep ids strictly monotonic.
    let id = match history.first() {
        Some(newest) => now.timestamp_millis().max(newest.id + 1),
        None => now.timestamp_millis(),
    };

    history.insert(
        0,
        HistoryEntry {
            id,
            timestamp: now,
            record,
        },
    );

    if history.len() > MAX_HISTORY_ENTRIES {
        debug!(
            "evicting {} oldest history entries",
            history.len() - MAX_HISTORY_ENTRIES
        );
        history.truncate(MAX_HISTORY_ENTRIES);
    }

    save_form_data(store, CALCULATION_HISTORY_KEY, &history);
}

/// Remove the stored history entirely
pub fn clear_calculation_history(store: &mut dyn KeyValueStore) {
    store.remove(CALCULATION_HISTORY_KEY);
}
