//! `@Override` handling.
//!
//! The marker is stripped from its own line and the state moves to
//! [`OverrideState::PendingOverride`]. The very next line, whatever it
//! holds, is checked for a `public void name(` signature and the state goes
//! back to [`OverrideState::Idle`]. A blank line or comment in between loses
//! the override keyword.

use crate::rule::{LineContext, Rewritten, RewriteError, Rule, static_regex};

/// The only state carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverrideState {
    #[default]
    Idle,
    PendingOverride,
}

/// Apply the override transition to a single line.
pub fn track_override(line: &str, state: OverrideState) -> (String, OverrideState) {
    let marker = static_regex!(r"@\s*Override");
    if marker.is_match(line) {
        let stripped = static_regex!(r"@\s*Override\s*").replace_all(line, "");
        return (stripped.into_owned(), OverrideState::PendingOverride);
    }
    match state {
        OverrideState::PendingOverride => {
            let line = static_regex!(r"^(\s*)public\s+void\s+(\w+)\s*\(")
                .replace(line, "${1}public override void ${2}(")
                .into_owned();
            (line, OverrideState::Idle)
        }
        OverrideState::Idle => (line.to_string(), OverrideState::Idle),
    }
}

pub struct OverrideRule;

pub static OVERRIDE: OverrideRule = OverrideRule;

impl Rule for OverrideRule {
    fn name(&self) -> &'static str {
        "override"
    }

    fn apply(&self, line: &str, ctx: &LineContext<'_>) -> Result<Rewritten, RewriteError> {
        let (line, state) = track_override(line, ctx.state);
        Ok(Rewritten { line, state })
    }
}
