//! The fixed battery of backend checks.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One smoke check against a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// `configuration()` returns.
    Configuration,
    /// `properties()` returns, and is absent on simulators.
    Properties,
    /// `status()` returns.
    Status,
    /// The reference circuit compiles, runs and reports success.
    RunCircuit,
}

impl Check {
    /// Every check, in execution order.
    pub const ALL: [Check; 4] = [
        Check::Configuration,
        Check::Properties,
        Check::Status,
        Check::RunCircuit,
    ];

    /// Test name used in reports and generated test functions.
    pub fn name(&self) -> &'static str {
        match self {
            Check::Configuration => "test_configuration",
            Check::Properties => "test_properties",
            Check::Status => "test_status",
            Check::RunCircuit => "test_run_circuit",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Check {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.strip_prefix("test_").unwrap_or(s);
        match key {
            "configuration" => Ok(Check::Configuration),
            "properties" => Ok(Check::Properties),
            "status" => Ok(Check::Status),
            "run_circuit" => Ok(Check::RunCircuit),
            other => Err(format!("unknown check '{other}'")),
        }
    }
}
