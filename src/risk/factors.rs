//! Risk factor rules
//!
//! One policy object per on-chain signal. Each rule maps the metrics
//! snapshot to a bounded contribution with a human-readable rationale, and
//! reports its own maximum so the scoring engine can normalize against the
//! rule set actually configured. Missing inputs always degrade to a zero
//! contribution, never an error.

use crate::config::FactorConfig;
use crate::core::{OnChainMetrics, RiskFactor};

/// One independently swappable scoring rule.
pub trait FactorRule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Largest contribution this rule can produce under its parameters.
    fn max_contribution(&self) -> f64;

    fn evaluate(&self, metrics: &OnChainMetrics) -> RiskFactor;
}

fn unavailable(name: &'static str, signal: &str) -> RiskFactor {
    RiskFactor {
        name: name.to_string(),
        contribution: 0.0,
        rationale: format!("{signal} data unavailable"),
    }
}

/// Supply concentrated in insider wallets.
pub struct InsiderHoldingRule {
    pub multiplier: f64,
}

impl FactorRule for InsiderHoldingRule {
    fn name(&self) -> &'static str {
        "insider_holding"
    }

    fn max_contribution(&self) -> f64 {
        100.0
    }

    fn evaluate(&self, metrics: &OnChainMetrics) -> RiskFactor {
        match metrics.insider_holding_pct {
            Some(pct) => RiskFactor {
                name: self.name().to_string(),
                contribution: (pct * self.multiplier).min(100.0),
                rationale: format!("insider wallets hold {pct:.1}% of supply"),
            },
            None => unavailable(self.name(), "insider holding"),
        }
    }
}

/// Supply bought up by snipers at launch.
pub struct SniperActivityRule {
    pub multiplier: f64,
}

impl FactorRule for SniperActivityRule {
    fn name(&self) -> &'static str {
        "sniper_activity"
    }

    fn max_contribution(&self) -> f64 {
        100.0
    }

    fn evaluate(&self, metrics: &OnChainMetrics) -> RiskFactor {
        match metrics.sniper_activity_pct {
            Some(pct) => RiskFactor {
                name: self.name().to_string(),
                contribution: (pct * self.multiplier).min(100.0),
                rationale: format!("snipers hold {pct:.1}% of supply"),
            },
            None => unavailable(self.name(), "sniper activity"),
        }
    }
}

/// Bundled launch transactions detected.
pub struct BundlerPresenceRule {
    pub contribution: f64,
}

impl FactorRule for BundlerPresenceRule {
    fn name(&self) -> &'static str {
        "bundler_presence"
    }

    fn max_contribution(&self) -> f64 {
        self.contribution
    }

    fn evaluate(&self, metrics: &OnChainMetrics) -> RiskFactor {
        match metrics.bundler_present {
            Some(true) => RiskFactor {
                name: self.name().to_string(),
                contribution: self.contribution,
                rationale: "bundled launch transactions detected".to_string(),
            },
            Some(false) => RiskFactor {
                name: self.name().to_string(),
                contribution: 0.0,
                rationale: "no bundler activity detected".to_string(),
            },
            None => unavailable(self.name(), "bundler"),
        }
    }
}

/// Liquidity pool tokens not burned, leaving the rug open.
pub struct LpBurnRule {
    pub contribution: f64,
}

impl FactorRule for LpBurnRule {
    fn name(&self) -> &'static str {
        "lp_burn"
    }

    fn max_contribution(&self) -> f64 {
        self.contribution
    }

    fn evaluate(&self, metrics: &OnChainMetrics) -> RiskFactor {
        match metrics.lp_burned {
            Some(true) => RiskFactor {
                name: self.name().to_string(),
                contribution: 0.0,
                rationale: "LP tokens burned".to_string(),
            },
            Some(false) => RiskFactor {
                name: self.name().to_string(),
                contribution: self.contribution,
                rationale: "LP not burned".to_string(),
            },
            None => unavailable(self.name(), "LP burn"),
        }
    }
}

/// Liquidity shallow relative to market cap.
pub struct LiquidityDepthRule {
    pub critical_ratio: f64,
    pub thin_ratio: f64,
    pub critical_contribution: f64,
    pub thin_contribution: f64,
}

impl FactorRule for LiquidityDepthRule {
    fn name(&self) -> &'static str {
        "liquidity_depth"
    }

    fn max_contribution(&self) -> f64 {
        self.critical_contribution.max(self.thin_contribution)
    }

    fn evaluate(&self, metrics: &OnChainMetrics) -> RiskFactor {
        let (liquidity, market_cap) = match (metrics.liquidity, metrics.market_cap) {
            (Some(l), Some(m)) => (l, m),
            _ => return unavailable(self.name(), "liquidity"),
        };

        let ratio_pct = if market_cap > 0.0 {
            liquidity / market_cap * 100.0
        } else {
            0.0
        };
        let (contribution, rationale) = if liquidity < market_cap * self.critical_ratio {
            (
                self.critical_contribution,
                format!("liquidity critically thin at {ratio_pct:.1}% of market cap"),
            )
        } else if liquidity < market_cap * self.thin_ratio {
            (
                self.thin_contribution,
                format!("liquidity thin at {ratio_pct:.1}% of market cap"),
            )
        } else {
            (
                0.0,
                format!("liquidity healthy at {ratio_pct:.1}% of market cap"),
            )
        };

        RiskFactor {
            name: self.name().to_string(),
            contribution,
            rationale,
        }
    }
}

/// Applies the configured rules in fixed order. Order matters only for
/// report readability, not for the score.
pub struct RiskFactorEvaluator {
    rules: Vec<Box<dyn FactorRule>>,
}

impl RiskFactorEvaluator {
    pub fn from_config(config: &FactorConfig) -> Self {
        Self::with_rules(vec![
            Box::new(InsiderHoldingRule {
                multiplier: config.insider_multiplier,
            }),
            Box::new(SniperActivityRule {
                multiplier: config.sniper_multiplier,
            }),
            Box::new(BundlerPresenceRule {
                contribution: config.bundler_contribution,
            }),
            Box::new(LpBurnRule {
                contribution: config.lp_unburned_contribution,
            }),
            Box::new(LiquidityDepthRule {
                critical_ratio: config.liquidity_critical_ratio,
                thin_ratio: config.liquidity_thin_ratio,
                critical_contribution: config.liquidity_critical_contribution,
                thin_contribution: config.liquidity_thin_contribution,
            }),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn FactorRule>>) -> Self {
        Self { rules }
    }

    pub fn evaluate(&self, metrics: &OnChainMetrics) -> Vec<RiskFactor> {
        self.rules.iter().map(|rule| rule.evaluate(metrics)).collect()
    }

    /// Sum of every rule's maximum, used to derive the normalization
    /// constant.
    pub fn max_total(&self) -> f64 {
        self.rules.iter().map(|rule| rule.max_contribution()).sum()
    }
}

impl Default for RiskFactorEvaluator {
    fn default() -> Self {
        Self::from_config(&FactorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risky_metrics() -> OnChainMetrics {
        OnChainMetrics {
            market_cap: Some(100_000.0),
            liquidity: Some(1_000.0),
            insider_holding_pct: Some(60.0),
            sniper_activity_pct: Some(0.0),
            bundler_present: Some(true),
            lp_burned: Some(false),
        }
    }

    #[test]
    fn test_rule_table_on_risky_token() {
        let factors = RiskFactorEvaluator::default().evaluate(&risky_metrics());
        let by_name = |name: &str| {
            factors
                .iter()
                .find(|f| f.name == name)
                .unwrap_or_else(|| panic!("missing factor {name}"))
        };

        assert_eq!(by_name("insider_holding").contribution, 100.0);
        assert_eq!(by_name("sniper_activity").contribution, 0.0);
        assert_eq!(by_name("bundler_presence").contribution, 30.0);
        assert_eq!(by_name("lp_burn").contribution, 25.0);
        assert_eq!(by_name("liquidity_depth").contribution, 40.0);

        let raw: f64 = factors.iter().map(|f| f.contribution).sum();
        assert_eq!(raw, 195.0);
    }

    #[test]
    fn test_insider_contribution_caps_at_100() {
        let evaluator = RiskFactorEvaluator::default();
        let metrics = OnChainMetrics {
            insider_holding_pct: Some(95.0),
            ..Default::default()
        };
        let factors = evaluator.evaluate(&metrics);
        assert_eq!(factors[0].contribution, 100.0);
    }

    #[test]
    fn test_liquidity_tiers() {
        let evaluator = RiskFactorEvaluator::default();
        let with_liquidity = |liq: f64| OnChainMetrics {
            market_cap: Some(1_000_000.0),
            liquidity: Some(liq),
            ..Default::default()
        };

        let depth = |liq: f64| {
            evaluator
                .evaluate(&with_liquidity(liq))
                .into_iter()
                .find(|f| f.name == "liquidity_depth")
                .unwrap()
                .contribution
        };

        assert_eq!(depth(40_000.0), 40.0);
        assert_eq!(depth(100_000.0), 20.0);
        assert_eq!(depth(200_000.0), 0.0);
    }

    #[test]
    fn test_missing_data_degrades_to_zero_with_rationale() {
        let factors = RiskFactorEvaluator::default().evaluate(&OnChainMetrics::default());
        assert_eq!(factors.len(), 5);
        for factor in &factors {
            assert_eq!(factor.contribution, 0.0, "factor {}", factor.name);
            assert!(
                factor.rationale.contains("data unavailable"),
                "rationale was '{}'",
                factor.rationale
            );
        }
    }

    #[test]
    fn test_max_total_reflects_configured_rules() {
        // 100 + 100 + 30 + 25 + 40 under defaults.
        assert_eq!(RiskFactorEvaluator::default().max_total(), 295.0);
    }

    #[test]
    fn test_custom_rule_parameters() {
        let config = FactorConfig {
            bundler_contribution: 50.0,
            ..Default::default()
        };
        let factors = RiskFactorEvaluator::from_config(&config).evaluate(&OnChainMetrics {
            bundler_present: Some(true),
            ..Default::default()
        });
        let bundler = factors.iter().find(|f| f.name == "bundler_presence").unwrap();
        assert_eq!(bundler.contribution, 50.0);
    }
}
