//! Consistency lints over an assembled bundle.
//!
//! Lints are advisory: they flag configuration that is legal but almost
//! certainly unintended (dead reward terms, episodes that can only time
//! out).  Hard failures live in [`DualPoleEnvCfg::validate`].

use std::fmt;

use crate::env::DualPoleEnvCfg;

/// A single advisory finding.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lint {
    pub code: &'static str,
    pub message: String,
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Run all lints over the bundle.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn lint(cfg: &DualPoleEnvCfg) -> Vec<Lint> {
    let mut findings = Vec::new();

    for (name, term) in cfg.rewards.terms() {
        if term.weight == 0.0 {
            findings.push(Lint {
                code: "dead-reward-term",
                message: format!("reward term '{name}' has zero weight and never contributes"),
            });
        } else if !term.weight.is_finite() {
            findings.push(Lint {
                code: "non-finite-reward-weight",
                message: format!("reward term '{name}' has non-finite weight {}", term.weight),
            });
        }
    }

    if !cfg.terminations.has_failure_condition() {
        findings.push(Lint {
            code: "timeout-only-termination",
            message: "no failure termination declared; episodes only ever end by timeout".into(),
        });
    }

    let policy = &cfg.observations.policy;
    if policy.enable_corruption && policy.terms.iter().all(|t| t.noise.is_none()) {
        findings.push(Lint {
            code: "corruption-without-noise",
            message: "observation corruption is enabled but no term declares a noise model".into(),
        });
    }

    findings
}
