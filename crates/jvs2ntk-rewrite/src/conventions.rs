//! C# naming conventions: PascalCase types, methods, constants and public
//! fields.
//!
//! The declaration rule and the call-site rules are independent. A call site
//! and its declaration can end up cased differently when the declaration
//! rule's constructor guard fires.

use crate::naming::{capitalize_first, to_pascal_case};
use crate::rule::{LineRule, is_word_char, replace_unless_preceded, static_regex};

/// Words that stay lower case when they look like a call (`if (`, `catch (`,
/// `base(` ...). Compared case-insensitively.
const KEYWORDS: &[&str] = &[
    "if", "else", "for", "foreach", "while", "do", "switch", "case", "default", "break",
    "continue", "return", "try", "catch", "finally", "throw", "throws", "public", "private",
    "protected", "static", "final", "void", "int", "long", "float", "double", "boolean", "char",
    "byte", "short", "new", "class", "interface", "enum", "extends", "implements", "import",
    "package", "abstract", "synchronized", "volatile", "const", "goto", "instanceof", "this",
    "super", "namespace", "using", "readonly", "sealed", "var", "out", "ref", "in", "params",
    "get", "set", "add", "remove", "partial", "yield", "lock", "async", "await", "true", "false",
    "null",
];

fn is_keyword(name: &str) -> bool {
    KEYWORDS.iter().any(|k| k.eq_ignore_ascii_case(name))
}

/// `class foo` → `class Foo`, `interface shape` → `interface IShape`.
pub fn convert_type_names(line: &str) -> String {
    let line = static_regex!(r"\bclass\s+([a-zA-Z_]\w*)")
        .replace_all(line, |caps: &regex::Captures<'_>| {
            format!("class {}", to_pascal_case(&caps[1]))
        });
    static_regex!(r"\binterface\s+([a-zA-Z_]\w*)")
        .replace_all(&line, |caps: &regex::Captures<'_>| {
            format!("interface I{}", to_pascal_case(&caps[1]))
        })
        .into_owned()
}

/// Capitalize the name in method declarations.
///
/// Shapes where the name equals the return-type token are treated as
/// constructors and left alone.
pub fn convert_method_names(line: &str) -> String {
    static_regex!(
        r"(\b(?:public|private|protected|static|final|synchronized|abstract)\s+)*(\w[\w<>]*)\s+([a-z]\w*)\s*\("
    )
    .replace_all(line, |caps: &regex::Captures<'_>| {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(3)) else {
            return caps[0].to_string();
        };
        if caps[2] == caps[3] {
            return whole.as_str().to_string();
        }
        let text = whole.as_str();
        let start = name.start() - whole.start();
        let end = name.end() - whole.start();
        format!(
            "{}{}{}",
            &text[..start],
            to_pascal_case(name.as_str()),
            &text[end..]
        )
    })
    .into_owned()
}

/// `object.method(` → `object.Method(`; only the first letter changes.
pub fn convert_call_casing(line: &str) -> String {
    static_regex!(r"(\b\w+\b)\.([a-z]\w*)\s*\(")
        .replace_all(line, |caps: &regex::Captures<'_>| {
            format!("{}.{}(", &caps[1], capitalize_first(&caps[2]))
        })
        .into_owned()
}

/// Case bare `name(` calls: keywords go lower case, anything else goes
/// through [`to_pascal_case`]. Member calls (`x.name(`) are left to
/// [`convert_call_casing`].
pub fn convert_standalone_calls(line: &str) -> String {
    let line = static_regex!(r"(?i)\belse\s+If\b").replace_all(line, "else if");
    let re = static_regex!(r"([_a-zA-Z]\w*)(\s*)\(");
    replace_unless_preceded(
        re,
        &line,
        |c| c == '.' || is_word_char(c),
        |caps| {
            let name = &caps[1];
            let cased = if is_keyword(name) {
                name.to_lowercase()
            } else {
                to_pascal_case(name)
            };
            format!("{}{}(", cased, &caps[2])
        },
    )
}

/// `MAX_RETRY_COUNT` → `Max_Retry_Count`. Upper-case words without an
/// underscore are left alone.
pub fn convert_constants(line: &str) -> String {
    static_regex!(r"\b([A-Z][A-Z0-9_]+)\b")
        .replace_all(line, |caps: &regex::Captures<'_>| {
            let word = &caps[1];
            if word.contains('_') {
                to_pascal_case(&word.to_lowercase())
            } else {
                word.to_string()
            }
        })
        .into_owned()
}

/// `public T name;` → `public T Name;`.
pub fn convert_public_fields(line: &str) -> String {
    static_regex!(r"public\s+(\w[\w<>]*)\s+([a-z]\w*)\s*;")
        .replace_all(line, |caps: &regex::Captures<'_>| {
            format!("public {} {};", &caps[1], to_pascal_case(&caps[2]))
        })
        .into_owned()
}

pub static TYPE_NAMES: LineRule = LineRule::new("type-names", convert_type_names);
pub static METHOD_NAMES: LineRule = LineRule::new("method-names", convert_method_names);
pub static CALL_CASING: LineRule = LineRule::new("call-casing", convert_call_casing);
pub static STANDALONE_CALLS: LineRule = LineRule::new("standalone-calls", convert_standalone_calls);
pub static CONSTANTS: LineRule = LineRule::new("constants", convert_constants);
pub static PUBLIC_FIELDS: LineRule = LineRule::new("public-fields", convert_public_fields);
