//! Calculation core - one pure module per calculator

pub mod constants;
pub mod liquidation;
pub mod position_sizer;
pub mod risk_reward;
pub mod simulator;

pub use liquidation::{calculate_liquidation, LiquidationInputs, LiquidationResult};
pub use position_sizer::{calculate_position_size, PositionSizeInputs, PositionSizeResult};
pub use risk_reward::{calculate_risk_reward, RatioQuality, RiskRewardInputs, RiskRewardResult};
pub use simulator::{
    custom_scenario, generate_scenarios, CustomScenario, Scenario, ScenarioStatus,
    SimulationInputs,
};
