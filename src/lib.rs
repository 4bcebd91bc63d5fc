//! # Leverage Lever
//!
//! A client-side trading-math toolkit: position sizing, liquidation price,
//! risk/reward analysis and trade scenario simulation, with drafts and a
//! capped calculation history persisted to a local key-value store.
//!
//! Presentation layers collect raw strings, run them through [`validation`],
//! hand the typed inputs to a calculator and render the result record; the
//! calculators are pure and never see unvalidated input.
//!
//! ## Example
//!
//! ```rust
//! use leverage_lever::prelude::*;
//!
//! let form = PositionSizerForm {
//!     account_balance: "10000".to_string(),
//!     risk_percentage: "2".to_string(),
//!     entry_price: "50000".to_string(),
//!     stop_loss_price: "48000".to_string(),
//! };
//!
//! let outcome = validate_position_sizer_form(&form);
//! assert!(outcome.is_valid);
//!
//! let result = calculate_position_size(&form.inputs().unwrap());
//! assert_eq!(result.position_size, 0.1);
//! ```

pub mod calculators;
pub mod error;
pub mod format;
pub mod history;
pub mod storage;
pub mod types;
pub mod validation;

pub mod prelude {
    //! Commonly used types and functions
    pub use crate::calculators::{
        calculate_liquidation, calculate_position_size, calculate_risk_reward, custom_scenario,
        generate_scenarios, CustomScenario, LiquidationInputs, LiquidationResult,
        PositionSizeInputs, PositionSizeResult, RatioQuality, RiskRewardInputs, RiskRewardResult,
        Scenario, ScenarioStatus, SimulationInputs,
    };
    pub use crate::error::{LeverError, Result};
    pub use crate::format::{format_currency, format_percentage, format_units, round_to};
    pub use crate::history::{
        clear_calculation_history, load_calculation_history, save_calculation_to_history,
        CalculationRecord, HistoryEntry,
    };
    pub use crate::storage::{
        load_form_data, save_form_data, FileStore, KeyValueStore, MemoryStore,
    };
    pub use crate::types::{CalculatorType, PositionType, CALCULATION_HISTORY_KEY};
    pub use crate::validation::{
        validate_liquidation_form, validate_position_sizer_form, validate_risk_reward_form,
        validate_simulator_form, LiquidationForm, PositionSizerForm, RiskRewardForm,
        SimulatorForm, ValidationOutcome,
    };
}
