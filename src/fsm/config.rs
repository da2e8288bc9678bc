//! Machine configuration.

use serde::{Deserialize, Serialize};

/// What a direct transition does with arguments passed to `fire`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgumentPolicy {
    /// Arguments are dropped.
    #[default]
    Ignore,

    /// Any argument fails the fire with `UnexpectedArguments`.
    Reject,
}

/// Per-machine behaviour switches.
///
/// Deserializes with defaults for every missing field, so it can be
/// embedded in a larger application config.
///
/// # Example
///
/// ```rust
/// use nfa::fsm::{ArgumentPolicy, MachineConfig};
///
/// let config: MachineConfig = serde_json::from_str(r#"{ "direct_args": "reject" }"#).unwrap();
/// assert_eq!(config.direct_args, ArgumentPolicy::Reject);
///
/// let config: MachineConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config, MachineConfig::default());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub direct_args: ArgumentPolicy,
}

impl MachineConfig {
    /// Configuration that rejects arguments on direct transitions.
    pub fn strict() -> Self {
        Self {
            direct_args: ArgumentPolicy::Reject,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ignores_direct_arguments() {
        assert_eq!(MachineConfig::default().direct_args, ArgumentPolicy::Ignore);
    }

    #[test]
    fn strict_rejects_direct_arguments() {
        assert_eq!(MachineConfig::strict().direct_args, ArgumentPolicy::Reject);
    }

    #[test]
    fn config_round_trips_through_json() {
        let json = serde_json::to_string(&MachineConfig::strict()).unwrap();
        assert_eq!(json, r#"{"direct_args":"reject"}"#);

        let back: MachineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, MachineConfig::strict());
    }

    #[test]
    fn unknown_policy_fails_to_parse() {
        let result: Result<MachineConfig, _> = serde_json::from_str(r#"{"direct_args":"maybe"}"#);
        assert!(result.is_err());
    }
}
