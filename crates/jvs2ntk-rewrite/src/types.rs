//! Primitive type and generic container mapping.
//!
//! Container rewrites are purely syntactic: a call named `put` or `get` is
//! rewritten whatever the receiver's static type is.

use crate::rule::{LineRule, TryLineRule, static_regex};
use regex::Regex;
use std::sync::OnceLock;

/// One of the nine generic container shapes the converter understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerShape {
    /// Container name in JVS source (e.g., "ArrayList").
    pub source: &'static str,
    /// Equivalent C# container (e.g., "List").
    pub target: &'static str,
    /// Map-like containers take a key and a value type.
    pub map_like: bool,
}

impl ContainerShape {
    const fn list(source: &'static str, target: &'static str) -> Self {
        Self {
            source,
            target,
            map_like: false,
        }
    }

    const fn map(source: &'static str, target: &'static str) -> Self {
        Self {
            source,
            target,
            map_like: true,
        }
    }

    /// Pattern fragment capturing the type arguments: one group for list-like
    /// shapes, two for map-like ones.
    pub(crate) fn args_pattern(&self) -> &'static str {
        if self.map_like {
            r"<([\w<>,\s]+),\s*([\w<>,\s]+)>"
        } else {
            r"<([\w<>,\s]+)>"
        }
    }

    /// Render the target container's argument list from captured groups.
    pub(crate) fn target_args(&self, caps: &regex::Captures<'_>) -> String {
        if self.map_like {
            format!("{}, {}", &caps[1], &caps[2])
        } else {
            caps[1].to_string()
        }
    }
}

/// Container catalog, in the order rules try them.
pub const CONTAINERS: [ContainerShape; 9] = [
    ContainerShape::list("ArrayList", "List"),
    ContainerShape::list("LinkedList", "LinkedList"),
    ContainerShape::map("HashMap", "Dictionary"),
    ContainerShape::list("HashSet", "HashSet"),
    ContainerShape::map("TreeMap", "SortedDictionary"),
    ContainerShape::list("Vector", "List"),
    ContainerShape::list("Stack", "Stack"),
    ContainerShape::list("Queue", "Queue"),
    ContainerShape::list("PriorityQueue", "SortedSet"),
];

struct ContainerPatterns {
    shape: ContainerShape,
    elided: Regex,
    declared: Regex,
    instantiated: Regex,
}

fn container_patterns() -> Result<&'static [ContainerPatterns], regex::Error> {
    static PATTERNS: OnceLock<Result<Vec<ContainerPatterns>, regex::Error>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            CONTAINERS
                .iter()
                .map(|shape| -> Result<_, regex::Error> {
                    let src = shape.source;
                    let args = shape.args_pattern();
                    Ok(ContainerPatterns {
                        shape: *shape,
                        elided: Regex::new(&format!(r"\b{src}\s*<\s*>"))?,
                        declared: Regex::new(&format!(r"\b{src}{args}"))?,
                        instantiated: Regex::new(&format!(r"new\s+{src}{args}\s*\(\s*\)"))?,
                    })
                })
                .collect()
        })
        .as_deref()
        .map_err(Clone::clone)
}

/// Map JVS primitive and boxed type names to their C# keywords.
pub fn map_primitive_types(line: &str) -> String {
    static_regex!(
        r"\b(boolean|Boolean|Integer|Long|Float|Double|Character|Byte|Short|String)\b"
    )
    .replace_all(line, |caps: &regex::Captures<'_>| {
        match &caps[1] {
            "boolean" | "Boolean" => "bool",
            "Integer" => "int",
            "Long" => "long",
            "Float" => "float",
            "Double" => "double",
            "Character" => "char",
            "Byte" => "byte",
            "Short" => "short",
            _ => "string",
        }
        .to_string()
    })
    .into_owned()
}

/// Rename container types in declarations. An elided `Container<>` is
/// deleted so `new HashMap<>()` becomes the target-typed `new ()`.
pub fn convert_collection_declarations(line: &str) -> Result<String, regex::Error> {
    let mut line = line.to_string();
    for p in container_patterns()? {
        line = p.elided.replace_all(&line, "").into_owned();
        line = p
            .declared
            .replace_all(&line, |caps: &regex::Captures<'_>| {
                format!("{}<{}>", p.shape.target, p.shape.target_args(caps))
            })
            .into_owned();
    }
    Ok(line)
}

/// Rename containers in `new Container<Args>()` expressions.
pub fn convert_collection_instantiations(line: &str) -> Result<String, regex::Error> {
    let mut line = line.to_string();
    for p in container_patterns()? {
        line = p
            .instantiated
            .replace_all(&line, |caps: &regex::Captures<'_>| {
                format!("new {}<{}>()", p.shape.target, p.shape.target_args(caps))
            })
            .into_owned();
    }
    Ok(line)
}

/// Map the `Collections`/`Arrays` static helpers.
pub fn convert_collection_utilities(line: &str) -> String {
    let line = static_regex!(r"Collections\.sort\(([^)]+)\)").replace_all(line, "${1}.Sort()");
    let line = static_regex!(r"Arrays\.asList\(([^)]+)\)").replace_all(&line, "new List<${1}>()");
    static_regex!(r"Arrays\.copyOf\(([^,]+),\s*([^)]+)\)")
        .replace_all(&line, "Array.Copy(${1}, ${2})")
        .into_owned()
}

/// Map `put`/`get`/`keySet`/... calls to dictionary indexers and properties.
pub fn convert_map_methods(line: &str) -> String {
    let line = static_regex!(r"(?i)(\w+)\.(put)\s*\(\s*([^,]+)\s*,\s*([^)]+)\)")
        .replace_all(line, "${1}[${3}] = ${4}");
    let line = static_regex!(r"(?i)(\w+)\.(get)\s*\(\s*([^)]+)\)").replace_all(&line, "${1}[${3}]");
    let line = static_regex!(r"(?i)(\w+)\.(containsKey)\s*\(\s*([^)]+)\)")
        .replace_all(&line, "${1}.ContainsKey(${3})");
    let line = static_regex!(r"(?i)(\w+)\.(containsValue)\s*\(\s*([^)]+)\)")
        .replace_all(&line, "${1}.ContainsValue(${3})");
    let line = static_regex!(r"(?i)(\w+)\.(remove)\s*\(\s*([^)]+)\)")
        .replace_all(&line, "${1}.Remove(${3})");
    let line = static_regex!(r"(?i)(\w+)\.(clear)\s*\(\s*\)").replace_all(&line, "${1}.Clear()");
    let line = static_regex!(r"(?i)(\w+)\.(keySet)\s*\(\s*\)").replace_all(&line, "${1}.Keys");
    let line = static_regex!(r"(?i)(\w+)\.(values)\s*\(\s*\)").replace_all(&line, "${1}.Values");
    static_regex!(r"(?i)(\w+)\.(entrySet)\s*\(\s*\)")
        .replace_all(&line, "${1}")
        .into_owned()
}

pub static PRIMITIVE_TYPES: LineRule = LineRule::new("primitive-types", map_primitive_types);
pub static COLLECTION_DECLARATIONS: TryLineRule =
    TryLineRule::new("collection-declarations", convert_collection_declarations);
pub static COLLECTION_INSTANTIATIONS: TryLineRule =
    TryLineRule::new("collection-instantiations", convert_collection_instantiations);
pub static COLLECTION_UTILITIES: LineRule =
    LineRule::new("collection-utilities", convert_collection_utilities);
pub static MAP_METHODS: LineRule = LineRule::new("map-methods", convert_map_methods);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_types() {
        assert_eq!(
            map_primitive_types("Integer count = (Integer) x; boolean ok;"),
            "int count = (int) x; bool ok;"
        );
        assert_eq!(map_primitive_types("String[] args"), "string[] args");
        assert_eq!(map_primitive_types("StringBuilder sb;"), "StringBuilder sb;");
    }

    #[test]
    fn test_primitive_types_idempotent() {
        let once = map_primitive_types("Map<String, Boolean> flags; Character c;");
        assert_eq!(map_primitive_types(&once), once);
    }

    #[test]
    fn test_declarations() {
        assert_eq!(
            convert_collection_declarations("ArrayList<string> names;").unwrap(),
            "List<string> names;"
        );
        assert_eq!(
            convert_collection_declarations("HashMap<string,int> counts;").unwrap(),
            "Dictionary<string, int> counts;"
        );
        assert_eq!(
            convert_collection_declarations("PriorityQueue<int> pq;").unwrap(),
            "SortedSet<int> pq;"
        );
        assert_eq!(
            convert_collection_declarations("TreeMap<string, double> m = new TreeMap<string, double>();").unwrap(),
            "SortedDictionary<string, double> m = new SortedDictionary<string, double>();"
        );
    }

    #[test]
    fn test_elided_declaration_becomes_target_typed_new() {
        assert_eq!(
            convert_collection_declarations("this.counts = new HashMap<>();").unwrap(),
            "this.counts = new ();"
        );
    }

    #[test]
    fn test_instantiations() {
        assert_eq!(
            convert_collection_instantiations("x = new Vector<int>( );").unwrap(),
            "x = new List<int>();"
        );
        assert_eq!(
            convert_collection_instantiations("x = new HashMap<string, int>();").unwrap(),
            "x = new Dictionary<string, int>();"
        );
    }

    #[test]
    fn test_utilities() {
        assert_eq!(convert_collection_utilities("Collections.sort(items);"), "items.Sort();");
        assert_eq!(
            convert_collection_utilities("int[] b = Arrays.copyOf(a, 3);"),
            "int[] b = Array.Copy(a, 3);"
        );
    }

    #[test]
    fn test_map_methods() {
        assert_eq!(convert_map_methods("m.put(k, v);"), "m[k] = v;");
        assert_eq!(convert_map_methods("int x = m.get(k);"), "int x = m[k];");
        assert_eq!(convert_map_methods("if (m.containsKey(k))"), "if (m.ContainsKey(k))");
        assert_eq!(convert_map_methods("m.containsValue(v)"), "m.ContainsValue(v)");
        assert_eq!(convert_map_methods("m.remove(k);"), "m.Remove(k);");
        assert_eq!(convert_map_methods("m.clear();"), "m.Clear();");
        assert_eq!(convert_map_methods("for (k : m.keySet())"), "for (k : m.Keys)");
        assert_eq!(convert_map_methods("m.values()"), "m.Values");
        assert_eq!(convert_map_methods("m.entrySet()"), "m");
    }

    #[test]
    fn test_map_methods_match_by_name_only() {
        // Any receiver exposing `get` is treated as a dictionary.
        assert_eq!(convert_map_methods("list.get(0)"), "list[0]");
    }
}
