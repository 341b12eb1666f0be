//! The rule contract shared by every rewrite.
//!
//! A rule sees one line plus a read-only [`LineContext`] and produces the
//! rewritten line together with the override state for the next line. Most
//! rules are pure functions of the line and are wrapped in [`LineRule`].

use crate::annotation::OverrideState;
use crate::inference::CollectionIndex;

/// Error raised while rewriting a file.
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("unsupported conversion mode: {0}")]
    UnsupportedMode(String),

    #[error("rule `{rule}` failed to build pattern: {source}")]
    Pattern {
        rule: &'static str,
        #[source]
        source: regex::Error,
    },
}

/// Read-only inputs available to a rule while it rewrites a single line.
#[derive(Debug, Clone, Copy)]
pub struct LineContext<'a> {
    /// Element types of collections declared anywhere in the file.
    pub index: &'a CollectionIndex,
    /// Override state carried over from the previous line.
    pub state: OverrideState,
}

/// The result of applying a rule to a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewritten {
    pub line: String,
    pub state: OverrideState,
}

/// A named `line × context → line` transformation.
pub trait Rule: Send + Sync {
    /// Stable rule identifier (e.g., "enhanced-for").
    fn name(&self) -> &'static str;

    /// Rewrite one line.
    fn apply(&self, line: &str, ctx: &LineContext<'_>) -> Result<Rewritten, RewriteError>;
}

/// A rule that is a pure function of the line and never touches state.
pub struct LineRule {
    name: &'static str,
    rewrite: fn(&str) -> String,
}

impl LineRule {
    pub const fn new(name: &'static str, rewrite: fn(&str) -> String) -> Self {
        Self { name, rewrite }
    }
}

impl Rule for LineRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, line: &str, ctx: &LineContext<'_>) -> Result<Rewritten, RewriteError> {
        Ok(Rewritten {
            line: (self.rewrite)(line),
            state: ctx.state,
        })
    }
}

/// A pure line rewrite whose patterns are assembled at runtime, so building
/// them can fail.
pub struct TryLineRule {
    name: &'static str,
    rewrite: fn(&str) -> Result<String, regex::Error>,
}

impl TryLineRule {
    pub const fn new(name: &'static str, rewrite: fn(&str) -> Result<String, regex::Error>) -> Self {
        Self { name, rewrite }
    }
}

impl Rule for TryLineRule {
    fn name(&self) -> &'static str {
        self.name
    }

    fn apply(&self, line: &str, ctx: &LineContext<'_>) -> Result<Rewritten, RewriteError> {
        let line = (self.rewrite)(line).map_err(|source| RewriteError::Pattern {
            rule: self.name,
            source,
        })?;
        Ok(Rewritten {
            line,
            state: ctx.state,
        })
    }
}

/// Compile a literal pattern once and hand out a `&'static Regex`.
macro_rules! static_regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).unwrap())
    }};
}

pub(crate) use static_regex;

/// Replace every match of `re` whose start is not preceded by a character
/// rejected by `blocked`. Stands in for a fixed-width negative lookbehind,
/// which the `regex` crate does not support.
pub(crate) fn replace_unless_preceded(
    re: &regex::Regex,
    line: &str,
    blocked: impl Fn(char) -> bool,
    mut replace: impl FnMut(&regex::Captures<'_>) -> String,
) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    let mut pos = 0;
    while pos <= line.len() {
        let Some(caps) = re.captures_at(line, pos) else { break };
        let Some(m) = caps.get(0) else { break };
        let preceded = line[..m.start()].chars().next_back().is_some_and(&blocked);
        if preceded || m.is_empty() {
            // A rejected match may hide a valid one starting inside it.
            pos = m.start() + line[m.start()..].chars().next().map_or(1, char::len_utf8);
            if preceded {
                continue;
            }
        } else {
            pos = m.end();
        }
        out.push_str(&line[last..m.start()]);
        out.push_str(&replace(&caps));
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Word character as understood by `\w` for the ASCII sources we handle.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
