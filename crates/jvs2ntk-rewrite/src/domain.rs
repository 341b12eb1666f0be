//! Framework-specific rewrites used only by the domain conversion.
//!
//! These rewire the JVS logging helpers onto the NetToolkit `Logger`, turn
//! the plugin `execute` method into the framework's overriding `Execute`
//! signature, and apply a fixed list of narrow API substitutions.

use crate::rule::{LineRule, static_regex};

/// Using directives written ahead of every converted domain script.
pub const DEFAULT_USINGS: &[&str] = &[
    "using System;",
    "using System.Collections.Generic;",
    "using System.Collections.ObjectModel;",
    "using System.Linq;",
    "using System.Text;",
    "using Olf.NetToolkit;",
    "using Olf.NetToolkit.Enums;",
    "using Olf.NetToolkit.Tpm;",
    "using Olf.NetToolkit.ReportBuilder;",
    "using Olf.Embedded.Generic;",
    "using Olf.Embedded.Application;",
];

const EXECUTE_SIGNATURE: &str = "public override Olf.Openrisk.Table.Table Execute(Context context, EnumScriptCategory category, Olf.Openrisk.Table.ConstTable table)";

const SCRIPT_CATEGORY_ATTRIBUTE: &str = "[ScriptCategoriesAttribute(EnumScriptCategory.Generic)]";

/// Replace the JVS logging include types with `Logger`.
pub fn convert_logger_declaration(line: &str) -> String {
    let line = static_regex!(r"\b(public|private)\s*JVS_INC_LogFunctions")
        .replace_all(line, "${1} Logger");
    let line = static_regex!(r"\b(private|public|protected)\s+JVS_INC_Standard\s+(\w+)\s*;")
        .replace_all(&line, "${1} Logger ${2};");
    let line = static_regex!(r"(\w+)\s*=\s*new\s+JVS_INC_Standard\s*\(\s*\)\s*;")
        .replace_all(&line, "${1} = new Logger(this.Plugin.Name);");
    static_regex!(r"new Logger\(\)")
        .replace_all(&line, "new Logger(this.Plugin.Name)")
        .into_owned()
}

/// `m_INCStandard.Print(a, b)` → `m_INCStandard.Info(a+ b)`.
pub fn convert_logger_print(line: &str) -> String {
    static_regex!(r"\b(m_INCStandard)\.Print\s*\(([^)]*)\)")
        .replace_all(line, |caps: &regex::Captures<'_>| {
            format!("{}.Info({})", &caps[1], caps[2].replace(',', "+"))
        })
        .into_owned()
}

/// Rewrite the plugin entry point into the framework's `Execute` override.
pub fn convert_execute_signature(line: &str) -> String {
    static_regex!(r"public\s+void\s+Execute\s*\(.*?\)\s*throws\s+\w+(?:\s*,\s*\w+)*")
        .replace_all(line, EXECUTE_SIGNATURE)
        .into_owned()
}

/// `Integer.parseInt(x)` and friends → `int.Parse(x)`. Each receiver only
/// pairs with its own parse method; `Integer.parseDouble` is left alone.
fn convert_parse_methods(line: &str) -> String {
    let line = static_regex!(r"(?i)\b(?:Integer|int)\.parseInt\s*\(([^)]*)\)")
        .replace_all(line, "int.Parse(${1})");
    let line = static_regex!(r"(?i)\bdouble\.parseDouble\s*\(([^)]*)\)")
        .replace_all(&line, "double.Parse(${1})");
    let line = static_regex!(r"(?i)\bfloat\.parseFloat\s*\(([^)]*)\)")
        .replace_all(&line, "float.Parse(${1})");
    let line = static_regex!(r"(?i)\blong\.parseLong\s*\(([^)]*)\)")
        .replace_all(&line, "long.Parse(${1})");
    let line = static_regex!(r"(?i)\bshort\.parseShort\s*\(([^)]*)\)")
        .replace_all(&line, "short.Parse(${1})");
    let line = static_regex!(r"(?i)\bbyte\.parseByte\s*\(([^)]*)\)")
        .replace_all(&line, "byte.Parse(${1})");
    static_regex!(r"(?i)\b(?:boolean|bool)\.parseBoolean\s*\(([^)]*)\)")
        .replace_all(&line, "bool.Parse(${1})")
        .into_owned()
}

/// `OLF_RETURN_CODE.OLF_RETURN_SUCCEED.ToInt()` → `(int)OLF_RETURN_CODE.OLF_RETURN_SUCCEED`.
fn convert_enum_casts(line: &str) -> String {
    static_regex!(r"\b(\w+\.\w+)\.To(\w+)\s*\(\)")
        .replace_all(line, |caps: &regex::Captures<'_>| {
            format!("({}){}", caps[2].to_lowercase(), &caps[1])
        })
        .into_owned()
}

/// The fixed catalog of narrow API substitutions, applied in order.
pub fn convert_domain_substitutions(line: &str) -> String {
    if static_regex!(r"(?i)^@?ScriptAttributes").is_match(line.trim_start()) {
        return SCRIPT_CATEGORY_ATTRIBUTE.to_string();
    }

    let line = convert_parse_methods(line);
    let line = static_regex!(r"ToUpperCase\(\)").replace_all(&line, "ToUpper()");
    let line = static_regex!(r"(?i)\bsize\(\)").replace_all(&line, "Count");
    let line = static_regex!(r"\bfinal\b").replace_all(&line, "readonly");
    let line = static_regex!(r"\bGetMessage\s*\(.*?\)").replace_all(&line, "Message");
    let line = static_regex!(r"\s*throws\b[^;{]*([;{]?)").replace_all(&line, "${1}");
    let line = static_regex!(r"\b(?:length|Length)\s*(?:\(\s*\))?").replace_all(&line, "Length");
    let line = static_regex!(r"\.replace\s*\(").replace_all(&line, ".Replace(");
    let line = static_regex!(r"\bTable\s+(\w+)\s*=\s*context\.GetArgumentsTable\s*\(\s*\)\s*;")
        .replace_all(&line, "Table ${1} = ContainerContext.GetGlobalContext().GetReturnTable();");
    let line = static_regex!(r"\b(\w+)\.IsEmpty\s*\(\)").replace_all(&line, "string.IsNullOrEmpty(${1})");
    let line = static_regex!(r"(class\s+\w+\s*:\s*)IScript\b").replace_all(&line, "${1}AbstractGenericScript");
    let line = convert_enum_casts(&line);
    let line = static_regex!(r"\b(OCalendarBase\.\w+\s*\()").replace_all(&line, "Olf.NetToolkit.Fnd.${1}");
    static_regex!(r"\)\s*\.\s*trim\s*\(")
        .replace_all(&line, ").Trim(")
        .into_owned()
}

pub fn trim_trailing(line: &str) -> String {
    line.trim_end().to_string()
}

pub static LOGGER_DECLARATION: LineRule =
    LineRule::new("logger-declaration", convert_logger_declaration);
pub static LOGGER_PRINT: LineRule = LineRule::new("logger-print", convert_logger_print);
pub static EXECUTE_METHOD: LineRule = LineRule::new("execute-signature", convert_execute_signature);
pub static DOMAIN_SUBSTITUTIONS: LineRule =
    LineRule::new("domain-substitutions", convert_domain_substitutions);
pub static TRIM_TRAILING: LineRule = LineRule::new("trim-trailing", trim_trailing);
