//! Rule catalogs per conversion mode and the line loop that runs them.
//!
//! Rule order matters: later rules assume earlier normalization (primitive
//! names are mapped before container declarations so `<...>` arguments are
//! already in C# form). Every rule of a mode runs on every line.

use crate::annotation::{self, OverrideState};
use crate::conventions;
use crate::domain::{self, DEFAULT_USINGS};
use crate::inference::{self, CollectionIndex};
use crate::rule::{LineContext, Rewritten, RewriteError, Rule};
use crate::structure;
use crate::types;
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

/// Which rule catalog to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionMode {
    /// General JVS/Java syntax to C#.
    General,
    /// NetToolkit plugin conversion: general syntax plus framework rewiring.
    Domain,
}

impl ConversionMode {
    pub const ALL: [ConversionMode; 2] = [ConversionMode::General, ConversionMode::Domain];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionMode::General => "general",
            ConversionMode::Domain => "domain",
        }
    }

    /// The declared rule order for this mode.
    pub fn rules(&self) -> &'static [&'static dyn Rule] {
        match self {
            ConversionMode::General => GENERAL_RULES,
            ConversionMode::Domain => DOMAIN_RULES,
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionMode {
    type Err = RewriteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "general" | "java2cs" => Ok(Self::General),
            "domain" | "jvs2ntk" => Ok(Self::Domain),
            _ => Err(RewriteError::UnsupportedMode(s.to_string())),
        }
    }
}

static GENERAL_RULES: &[&dyn Rule] = &[
    &inference::DIAMOND_INFERENCE,
    &structure::ENHANCED_FOR,
    &structure::INHERITANCE,
    &types::PRIMITIVE_TYPES,
    &structure::SCANNER_INPUT,
    &types::COLLECTION_DECLARATIONS,
    &types::COLLECTION_INSTANTIATIONS,
    &types::COLLECTION_UTILITIES,
    &types::MAP_METHODS,
    &structure::IMPORTS,
    &structure::CONSOLE_OUTPUT,
    &structure::MAIN_SIGNATURE,
    &conventions::TYPE_NAMES,
    &conventions::METHOD_NAMES,
    &conventions::CALL_CASING,
    &conventions::CONSTANTS,
    &conventions::PUBLIC_FIELDS,
    &structure::NAMESPACE,
    &structure::FILE_WRITER,
    &structure::PATTERN_MATCHER,
    &conventions::STANDALONE_CALLS,
    &structure::FINAL_CLASS,
    &structure::FINAL_FIELD,
    &annotation::OVERRIDE,
];

static DOMAIN_RULES: &[&dyn Rule] = &[
    &structure::ENHANCED_FOR,
    &structure::NAMESPACE,
    &structure::INHERITANCE,
    &conventions::METHOD_NAMES,
    &conventions::CALL_CASING,
    &conventions::STANDALONE_CALLS,
    &types::PRIMITIVE_TYPES,
    &types::COLLECTION_DECLARATIONS,
    &types::COLLECTION_INSTANTIATIONS,
    &types::COLLECTION_UTILITIES,
    &structure::STRIP_IMPORTS,
    &domain::LOGGER_DECLARATION,
    &domain::LOGGER_PRINT,
    &domain::EXECUTE_METHOD,
    &domain::DOMAIN_SUBSTITUTIONS,
    &domain::TRIM_TRAILING,
];

/// A line of input together with its 1-based position in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLine<'a> {
    pub number: usize,
    pub text: &'a str,
}

/// A configured conversion: rule catalog plus the lines wrapped around the
/// converted body.
#[derive(Clone)]
pub struct Pipeline {
    mode: ConversionMode,
    rules: &'static [&'static dyn Rule],
    prelude: Vec<String>,
    close_namespace: bool,
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("mode", &self.mode)
            .field("rules", &self.rule_names())
            .field("prelude", &self.prelude)
            .field("close_namespace", &self.close_namespace)
            .finish()
    }
}

impl Pipeline {
    /// Pipeline with the mode's defaults: the domain mode writes the using
    /// prelude and a closing `}`; the general mode writes neither.
    pub fn new(mode: ConversionMode) -> Self {
        let (prelude, close_namespace) = match mode {
            ConversionMode::General => (Vec::new(), false),
            ConversionMode::Domain => (DEFAULT_USINGS.iter().map(|s| s.to_string()).collect(), true),
        };
        Self {
            mode,
            rules: mode.rules(),
            prelude,
            close_namespace,
        }
    }

    /// Replace the lines written before the converted body.
    pub fn with_prelude(mut self, prelude: Vec<String>) -> Self {
        self.prelude = prelude;
        self
    }

    /// Whether to append a single `}` line after the converted body.
    pub fn with_closing_brace(mut self, close: bool) -> Self {
        self.close_namespace = close;
        self
    }

    pub fn mode(&self) -> ConversionMode {
        self.mode
    }

    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Run every rule of the catalog over one line, in order.
    pub fn rewrite_line(
        &self,
        line: SourceLine<'_>,
        index: &CollectionIndex,
        state: OverrideState,
    ) -> Result<Rewritten, RewriteError> {
        let mut current = Rewritten {
            line: line.text.to_string(),
            state,
        };
        for rule in self.rules {
            let ctx = LineContext {
                index,
                state: current.state,
            };
            let next = rule.apply(&current.line, &ctx)?;
            if next.line != current.line {
                trace!(rule = rule.name(), line = line.number, "{:?} -> {:?}", current.line, next.line);
            }
            current = next;
        }
        Ok(current)
    }

    /// Convert a whole file.
    ///
    /// Builds the collection index from every line first, then rewrites the
    /// lines in order while threading the override state. Lines that end up
    /// blank are dropped. Any rule error aborts the conversion.
    pub fn run<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<String>, RewriteError> {
        debug!(mode = %self.mode, lines = lines.len(), rules = self.rules.len(), "converting");
        let index = CollectionIndex::build(lines)?;

        let mut output = self.prelude.clone();
        let mut state = OverrideState::default();
        for (i, text) in lines.iter().enumerate() {
            let source = SourceLine {
                number: i + 1,
                text: text.as_ref(),
            };
            let rewritten = self.rewrite_line(source, &index, state)?;
            state = rewritten.state;
            if !rewritten.line.trim().is_empty() {
                output.push(rewritten.line);
            }
        }
        if self.close_namespace {
            output.push("}".to_string());
        }
        debug!(written = output.len(), "conversion finished");
        Ok(output)
    }
}

/// Convert `lines` with the default pipeline for `mode`.
pub fn convert<S: AsRef<str>>(lines: &[S], mode: ConversionMode) -> Result<Vec<String>, RewriteError> {
    Pipeline::new(mode).run(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_rule_order() {
        assert_eq!(
            Pipeline::new(ConversionMode::General).rule_names(),
            vec![
                "diamond-inference",
                "enhanced-for",
                "inheritance",
                "primitive-types",
                "scanner-input",
                "collection-declarations",
                "collection-instantiations",
                "collection-utilities",
                "map-methods",
                "imports",
                "console-output",
                "main-signature",
                "type-names",
                "method-names",
                "call-casing",
                "constants",
                "public-fields",
                "namespace",
                "file-writer",
                "pattern-matcher",
                "standalone-calls",
                "final-class",
                "final-field",
                "override",
            ]
        );
    }

    #[test]
    fn test_domain_rule_order() {
        assert_eq!(
            Pipeline::new(ConversionMode::Domain).rule_names(),
            vec![
                "enhanced-for",
                "namespace",
                "inheritance",
                "method-names",
                "call-casing",
                "standalone-calls",
                "primitive-types",
                "collection-declarations",
                "collection-instantiations",
                "collection-utilities",
                "strip-imports",
                "logger-declaration",
                "logger-print",
                "execute-signature",
                "domain-substitutions",
                "trim-trailing",
            ]
        );
    }

    #[test]
    fn test_primitive_mapping_precedes_collections() {
        let names = Pipeline::new(ConversionMode::General).rule_names();
        let pos = |n: &str| names.iter().position(|r| *r == n).unwrap();
        assert!(pos("primitive-types") < pos("collection-declarations"));
        assert!(pos("diamond-inference") < pos("collection-declarations"));
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("general".parse::<ConversionMode>().unwrap(), ConversionMode::General);
        assert_eq!("DOMAIN".parse::<ConversionMode>().unwrap(), ConversionMode::Domain);
        assert_eq!("jvs2ntk".parse::<ConversionMode>().unwrap(), ConversionMode::Domain);
        assert!(matches!(
            "cobol".parse::<ConversionMode>(),
            Err(RewriteError::UnsupportedMode(m)) if m == "cobol"
        ));
    }

    #[test]
    fn test_blank_results_dropped() {
        let out = convert(&["import java.util.List;", "", "   ", "int x;"], ConversionMode::General).unwrap();
        assert_eq!(out, vec!["using System;", "int x;"]);
    }

    #[test]
    fn test_domain_prelude_and_closing_brace() {
        let out = convert(&["int x;"], ConversionMode::Domain).unwrap();
        assert_eq!(out.len(), DEFAULT_USINGS.len() + 2);
        assert_eq!(out[0], "using System;");
        assert_eq!(out[out.len() - 2], "int x;");
        assert_eq!(out[out.len() - 1], "}");
    }

    #[test]
    fn test_general_has_no_prelude_or_closing_brace() {
        let out = convert(&["int x;"], ConversionMode::General).unwrap();
        assert_eq!(out, vec!["int x;"]);
    }

    #[test]
    fn test_custom_prelude() {
        let pipeline = Pipeline::new(ConversionMode::Domain)
            .with_prelude(vec!["using Foo;".to_string()])
            .with_closing_brace(false);
        assert_eq!(pipeline.run(&["int x;"]).unwrap(), vec!["using Foo;", "int x;"]);
    }

    #[test]
    fn test_override_state_threads_across_lines() {
        let out = convert(&["@Override", "public void run() {"], ConversionMode::General).unwrap();
        assert_eq!(out, vec!["public override void Run() {"]);
    }

    #[test]
    fn test_override_lost_across_blank_line() {
        let out = convert(&["@Override", "", "public void run() {"], ConversionMode::General).unwrap();
        assert_eq!(out, vec!["public void Run() {"]);
    }
}
