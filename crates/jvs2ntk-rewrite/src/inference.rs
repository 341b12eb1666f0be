//! Whole-file lookback for elided generic arguments.
//!
//! `this.items = new ArrayList<>();` carries no element type, so the type is
//! recovered from a typed declaration of `items` anywhere in the file. The
//! index is built once, before any line is rewritten, and is read-only
//! afterwards.

use crate::rule::{LineContext, Rewritten, RewriteError, Rule, static_regex};
use crate::types::{CONTAINERS, ContainerShape, map_primitive_types};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;
use tracing::debug;

/// Resolved element types for one declared collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionBinding {
    /// Target container (e.g., "Dictionary").
    pub container: &'static str,
    /// Element types, already mapped to C# names. Map-like containers carry
    /// `"K, V"`.
    pub element_types: String,
}

/// Name → binding index for a single file.
#[derive(Debug, Clone, Default)]
pub struct CollectionIndex {
    bindings: HashMap<String, CollectionBinding>,
}

fn declaration_patterns() -> Result<&'static [(ContainerShape, Regex)], RewriteError> {
    static PATTERNS: OnceLock<Result<Vec<(ContainerShape, Regex)>, regex::Error>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            CONTAINERS
                .iter()
                .map(|shape| -> Result<_, regex::Error> {
                    let pattern = format!(r"\b{}{}\s+(\w+)\s*;", shape.source, shape.args_pattern());
                    Ok((*shape, Regex::new(&pattern)?))
                })
                .collect()
        })
        .as_deref()
        .map_err(|source| RewriteError::Pattern {
            rule: "diamond-inference",
            source: source.clone(),
        })
}

impl CollectionIndex {
    /// Scan every line for typed container declarations. The first
    /// declaration of a name in file order wins.
    pub fn build<S: AsRef<str>>(lines: &[S]) -> Result<Self, RewriteError> {
        let patterns = declaration_patterns()?;
        let mut bindings = HashMap::new();
        for line in lines {
            let line = line.as_ref();
            for (shape, re) in patterns {
                for caps in re.captures_iter(line) {
                    let name_group = if shape.map_like { 3 } else { 2 };
                    let name = caps[name_group].to_string();
                    let types = if shape.map_like {
                        format!(
                            "{}, {}",
                            map_primitive_types(caps[1].trim()),
                            map_primitive_types(caps[2].trim())
                        )
                    } else {
                        map_primitive_types(caps[1].trim())
                    };
                    bindings.entry(name).or_insert_with(|| CollectionBinding {
                        container: shape.target,
                        element_types: types,
                    });
                }
            }
        }
        debug!(bindings = bindings.len(), "built collection index");
        Ok(Self { bindings })
    }

    /// Binding for a field or variable name.
    pub fn get(&self, name: &str) -> Option<&CollectionBinding> {
        self.bindings.get(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Rewrite `this.<name> = new <Container><>()` using the index.
pub fn resolve_elided_generics(line: &str, index: &CollectionIndex) -> String {
    static_regex!(r"this\.(\w+)\s*=\s*new\s+(\w+)\s*<\s*>\s*\(\s*\)")
        .replace_all(line, |caps: &regex::Captures<'_>| match index.get(&caps[1]) {
            Some(binding) => format!(
                "this.{} = new {}<{}>()",
                &caps[1], binding.container, binding.element_types
            ),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Rule wrapper that reads the file's index from the line context.
pub struct DiamondRule;

pub static DIAMOND_INFERENCE: DiamondRule = DiamondRule;

impl Rule for DiamondRule {
    fn name(&self) -> &'static str {
        "diamond-inference"
    }

    fn apply(&self, line: &str, ctx: &LineContext<'_>) -> Result<Rewritten, RewriteError> {
        Ok(Rewritten {
            line: resolve_elided_generics(line, ctx.index),
            state: ctx.state,
        })
    }
}
