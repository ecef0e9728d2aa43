//! Bot configuration read from the environment.
use std::env;

use rift_core::{AttritionRule, EngineConfig};
use rift_runtime::RuntimeConfig;

/// Runtime settings assembled from `RIFT_*` variables.
#[derive(Clone, Debug, Default)]
pub struct BotConfig {
    pub runtime: RuntimeConfig,
}

impl BotConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `RIFT_POD_PRICE` - Platinum per purchased unit (default: 20)
    /// - `RIFT_ATTRITION` - `legacy` or `per_opponent` (default: legacy)
    /// - `RIFT_FIRST_TURN_LINEAR` - Linear first-turn values (default: false)
    /// - `RIFT_TURN_BUDGET_MS` - Soft per-turn deadline (default: 100)
    /// - `RIFT_REPORT_TURNS` - Log a JSON report every turn (default: false)
    ///
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let mut engine = EngineConfig::default();

        if let Some(price) = read_env::<u32>("RIFT_POD_PRICE").filter(|&price| price > 0) {
            engine.pod_price = price;
        }
        if let Some(rule) = read_env::<AttritionRule>("RIFT_ATTRITION") {
            engine.attrition = rule;
        }
        if let Some(linear) = read_env::<bool>("RIFT_FIRST_TURN_LINEAR") {
            engine.first_turn_linear_fallback = linear;
        }
        if let Some(budget) = read_env::<u64>("RIFT_TURN_BUDGET_MS") {
            engine.turn_budget_ms = budget;
        }

        Self {
            runtime: RuntimeConfig {
                engine,
                report_turns: read_env::<bool>("RIFT_REPORT_TURNS").unwrap_or(false),
            },
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
