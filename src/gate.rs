use serde::{Deserialize, Serialize};
use std::fmt;

/// Shared secret protecting the locked projects. Never printed.
#[derive(Clone, PartialEq, Eq)]
pub struct GateSecret(String);

impl GateSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(secret.into())
    }

    fn matches(&self, input: &str) -> bool {
        self.0 == input
    }
}

impl fmt::Debug for GateSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("GateSecret(..)")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Access {
    Granted,
    Denied,
}

/// Capability check for protected projects.
///
/// This is an obstacle to casual browsing, not an authentication layer: the
/// comparison is plain string equality and nothing is rate limited. A gate
/// without a secret denies every attempt.
#[derive(Debug, Clone, Default)]
pub struct Gate {
    secret: Option<GateSecret>,
}

impl Gate {
    pub fn new(secret: Option<GateSecret>) -> Self {
        Self { secret }
    }

    pub fn is_locked(&self) -> bool {
        self.secret.is_none()
    }

    pub fn check(&self, input: &str) -> Access {
        match &self.secret {
            Some(secret) if secret.matches(input) => Access::Granted,
            _ => Access::Denied,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTone {
    Empty,
    Filled,
    Error,
}

impl InputTone {
    pub fn class(self) -> &'static str {
        match self {
            InputTone::Empty => "text-zinc-500",
            InputTone::Filled => "text-black",
            InputTone::Error => "text-red-500",
        }
    }
}

/// Client side state of one password prompt. Lives only as long as the page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GateState {
    pub input: String,
    pub authenticated: bool,
    pub error: bool,
    pub pending: bool,
}

impl GateState {
    pub fn edit(&mut self, input: String) {
        self.input = input;
        self.error = false;
    }

    pub fn begin(&mut self) {
        self.pending = true;
    }

    pub fn resolve(&mut self, access: Access) {
        self.pending = false;
        match access {
            Access::Granted => {
                self.authenticated = true;
                self.error = false;
            }
            Access::Denied => {
                self.error = true;
            }
        }
    }

    pub fn tone(&self) -> InputTone {
        if self.error {
            InputTone::Error
        } else if self.input.is_empty() {
            InputTone::Empty
        } else {
            InputTone::Filled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate() -> Gate {
        Gate::new(Some(GateSecret::new("open-sesame")))
    }

    #[test]
    fn test_check() {
        let gate = gate();
        assert_eq!(gate.check("open-sesame"), Access::Granted);
        assert_eq!(gate.check("open-sesame "), Access::Denied);
        assert_eq!(gate.check("Open-Sesame"), Access::Denied);
        assert_eq!(gate.check(""), Access::Denied);
    }

    #[test]
    fn test_locked_gate_denies_everything() {
        let gate = Gate::default();
        assert!(gate.is_locked());
        assert_eq!(gate.check(""), Access::Denied);
        assert_eq!(gate.check("anything"), Access::Denied);
    }

    #[test]
    fn test_secret_not_printed() {
        let printed = format!("{:?}", gate());
        assert!(!printed.contains("open-sesame"));
    }

    #[test]
    fn test_wrong_attempts_stay_hidden() {
        let gate = gate();
        let mut state = GateState::default();
        for attempt in ["1", "12", "wrong", "1"] {
            state.edit(attempt.to_string());
            state.begin();
            state.resolve(gate.check(&state.input));
            assert!(!state.authenticated);
            assert!(state.error);
            assert!(!state.pending);
            assert_eq!(state.tone(), InputTone::Error);
        }
    }

    #[test]
    fn test_correct_attempt_reveals_and_clears_error() {
        let gate = gate();
        let mut state = GateState::default();
        state.edit("nope".to_string());
        state.resolve(gate.check(&state.input));
        assert!(state.error);

        state.edit("open-sesame".to_string());
        assert!(!state.error);
        state.resolve(gate.check(&state.input));
        assert!(state.authenticated);
        assert!(!state.error);
    }

    #[test]
    fn test_tone() {
        let mut state = GateState::default();
        assert_eq!(state.tone(), InputTone::Empty);
        state.edit("x".to_string());
        assert_eq!(state.tone(), InputTone::Filled);
        assert_eq!(state.tone().class(), "text-black");
        state.resolve(Access::Denied);
        assert_eq!(state.tone().class(), "text-red-500");
        state.edit(String::new());
        assert_eq!(state.tone(), InputTone::Empty);
    }
}
