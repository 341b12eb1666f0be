//! Statement-level syntax: loops, type headers, packages, imports, and the
//! handful of library objects with a fixed C# counterpart.

use crate::naming::to_pascal_case;
use crate::rule::{LineRule, replace_unless_preceded, static_regex};

/// `for (T x : expr)` → `foreach (T x in expr)`.
pub fn convert_enhanced_for(line: &str) -> String {
    static_regex!(r"for\s*\(\s*([\w<>,\s]+)\s+(\w+)\s*:\s*([^)]+)\)")
        .replace_all(line, "foreach (${1} ${2} in ${3})")
        .into_owned()
}

/// Map `extends`/`implements` to C# base-list separators.
///
/// Only when both keywords appear does `implements` become `,`; a lone
/// `implements` is written as if it introduced a base class.
pub fn convert_inheritance(line: &str) -> String {
    let both = line.contains("extends") && line.contains("implements");
    let line = static_regex!(r"\bextends\b").replace_all(line, ":");
    let separator = if both { "," } else { ":" };
    static_regex!(r"\bimplements\b")
        .replace_all(&line, separator)
        .into_owned()
}

pub fn convert_main_signature(line: &str) -> String {
    static_regex!(r"public static void main\s*\(\s*[Ss]tring\[\]\s*args\s*\)")
        .replace_all(line, "public static void Main(string[] args)")
        .into_owned()
}

/// `package a.b.c;` → `namespace A.B.C {`. The closing brace is appended
/// once at the end of the document by the pipeline.
pub fn convert_namespace(line: &str) -> String {
    static_regex!(r"package\s+([a-z0-9_.]+);")
        .replace_all(line, |caps: &regex::Captures<'_>| {
            let segments: Vec<String> = caps[1].split('.').map(to_pascal_case).collect();
            format!("namespace {} {{", segments.join("."))
        })
        .into_owned()
}

/// Map well-known JDK imports to `using` directives and drop the rest.
pub fn convert_imports(line: &str) -> String {
    let line = static_regex!(r"import java\.(?:util|time|math|lang)\..*;").replace_all(line, "using System;");
    let line = static_regex!(r"import java\.io\..*;").replace_all(&line, "using System.IO;");
    let line = static_regex!(r"import java\.sql\..*;").replace_all(&line, "using System.Data;");
    static_regex!(r"import .+;").replace_all(&line, "").into_owned()
}

/// Drop import lines entirely; the domain prelude supplies the usings.
pub fn strip_imports(line: &str) -> String {
    if line.trim_start().starts_with("import ") {
        String::new()
    } else {
        line.to_string()
    }
}

pub fn convert_console_output(line: &str) -> String {
    let line = static_regex!(r"System\.out\.println").replace_all(line, "Console.WriteLine");
    static_regex!(r"System\.out\.print")
        .replace_all(&line, "Console.Write")
        .into_owned()
}

pub fn convert_file_writer(line: &str) -> String {
    static_regex!(r"FileWriter\s+(\w+)\s*=\s*new\s+FileWriter\s*\(\s*(\w+)\s*\)\s*;")
        .replace_all(line, "StreamWriter ${1} = new StreamWriter(${2}.FullName);")
        .into_owned()
}

pub fn convert_pattern_matcher(line: &str) -> String {
    let line = static_regex!(r"Pattern\s+(\w+)\s*=\s*Pattern\.compile\(([^)]+)\);")
        .replace_all(line, "Regex ${1} = new Regex(${2});");
    static_regex!(r"Matcher\s+(\w+)\s*=\s*(\w+)\.matcher\(([^)]+)\);")
        .replace_all(&line, "MatchCollection ${1} = ${2}.Matches(${3});")
        .into_owned()
}

/// Scanner reads become `Console.ReadLine()`; the scanner itself goes away.
pub fn convert_scanner_input(line: &str) -> String {
    let line = static_regex!(r"Scanner\s+(\w+)\s*=\s*new\s+Scanner\s*\(\s*System\.in\s*\)\s*;?")
        .replace_all(line, "");
    let line = static_regex!(
        r"\b\w+\s*\.\s*next(Int|Double|Float|Long|Boolean|Byte|Short)\s*\(\s*\)"
    )
    .replace_all(&line, |caps: &regex::Captures<'_>| {
        let ty = match &caps[1] {
            "Int" => "int",
            "Double" => "double",
            "Float" => "float",
            "Long" => "long",
            "Boolean" => "bool",
            "Byte" => "byte",
            _ => "short",
        };
        format!("{ty}.Parse(Console.ReadLine())")
    });
    static_regex!(r"\b\w+\s*\.\s*next(?:Line)?\s*\(\s*\)")
        .replace_all(&line, "Console.ReadLine()")
        .into_owned()
}

pub fn convert_final_class(line: &str) -> String {
    static_regex!(r"\bfinal\s+class\b")
        .replace_all(line, "sealed class")
        .into_owned()
}

/// `final T name =` or `final T name;` → `readonly …`.
pub fn convert_final_field(line: &str) -> String {
    let re = static_regex!(r"final\s+(\w[\w<>,\s]*)\s+([A-Za-z_][A-Za-z0-9_]*)(\s*[;=])");
    // `final` must open the line or follow whitespace.
    replace_unless_preceded(re, line, |c| !c.is_whitespace(), |caps| {
        format!("readonly {} {}{}", &caps[1], &caps[2], &caps[3])
    })
}

pub static ENHANCED_FOR: LineRule = LineRule::new("enhanced-for", convert_enhanced_for);
pub static INHERITANCE: LineRule = LineRule::new("inheritance", convert_inheritance);
pub static MAIN_SIGNATURE: LineRule = LineRule::new("main-signature", convert_main_signature);
pub static NAMESPACE: LineRule = LineRule::new("namespace", convert_namespace);
pub static IMPORTS: LineRule = LineRule::new("imports", convert_imports);
pub static STRIP_IMPORTS: LineRule = LineRule::new("strip-imports", strip_imports);
pub static CONSOLE_OUTPUT: LineRule = LineRule::new("console-output", convert_console_output);
pub static FILE_WRITER: LineRule = LineRule::new("file-writer", convert_file_writer);
pub static PATTERN_MATCHER: LineRule = LineRule::new("pattern-matcher", convert_pattern_matcher);
pub static SCANNER_INPUT: LineRule = LineRule::new("scanner-input", convert_scanner_input);
pub static FINAL_CLASS: LineRule = LineRule::new("final-class", convert_final_class);
pub static FINAL_FIELD: LineRule = LineRule::new("final-field", convert_final_field);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enhanced_for() {
        assert_eq!(
            convert_enhanced_for("for (String name : names) {"),
            "foreach (String name in names) {"
        );
        assert_eq!(
            convert_enhanced_for("for(Map<K, V> e : map.entries())"),
            "foreach (Map<K, V> e in map.entries())"
        );
    }

    #[test]
    fn test_inheritance_both_keywords() {
        assert_eq!(
            convert_inheritance("class Dog extends Animal implements Pet, Named {"),
            "class Dog : Animal , Pet, Named {"
        );
    }

    #[test]
    fn test_inheritance_single_keyword() {
        assert_eq!(convert_inheritance("class Dog implements Pet {"), "class Dog : Pet {");
        assert_eq!(convert_inheritance("class Dog extends Animal {"), "class Dog : Animal {");
    }

    #[test]
    fn test_main_signature() {
        assert_eq!(
            convert_main_signature("    public static void main(String[] args) {"),
            "    public static void Main(string[] args) {"
        );
    }

    #[test]
    fn test_namespace() {
        assert_eq!(convert_namespace("package com.acme.report_tools;"), "namespace Com.Acme.Report_Tools {");
    }

    #[test]
    fn test_imports() {
        assert_eq!(convert_imports("import java.util.List;"), "using System;");
        assert_eq!(convert_imports("import java.io.File;"), "using System.IO;");
        assert_eq!(convert_imports("import java.sql.Connection;"), "using System.Data;");
        assert_eq!(convert_imports("import com.olf.openjvs.*;"), "");
        assert_eq!(strip_imports("  import com.olf.openjvs.*;"), "");
        assert_eq!(strip_imports("int important;"), "int important;");
    }

    #[test]
    fn test_imports_idempotent() {
        for line in [
            "import java.util.List;",
            "import java.io.File;",
            "import java.sql.Connection;",
            "import com.olf.openjvs.*;",
        ] {
            let once = convert_imports(line);
            assert_eq!(convert_imports(&once), once, "{line}");
        }
    }

    #[test]
    fn test_console_output() {
        assert_eq!(
            convert_console_output("System.out.println(x); System.out.print(y);"),
            "Console.WriteLine(x); Console.Write(y);"
        );
    }

    #[test]
    fn test_file_writer_and_regex() {
        assert_eq!(
            convert_file_writer("FileWriter fw = new FileWriter(file);"),
            "StreamWriter fw = new StreamWriter(file.FullName);"
        );
        assert_eq!(
            convert_pattern_matcher("Pattern p = Pattern.compile(\"a+\");"),
            "Regex p = new Regex(\"a+\");"
        );
        assert_eq!(
            convert_pattern_matcher("Matcher m = p.matcher(text);"),
            "MatchCollection m = p.Matches(text);"
        );
    }

    #[test]
    fn test_scanner_input() {
        assert_eq!(convert_scanner_input("Scanner sc = new Scanner(System.in);"), "");
        assert_eq!(
            convert_scanner_input("int n = sc.nextInt();"),
            "int n = int.Parse(Console.ReadLine());"
        );
        assert_eq!(
            convert_scanner_input("bool b = sc.nextBoolean();"),
            "bool b = bool.Parse(Console.ReadLine());"
        );
        assert_eq!(convert_scanner_input("s = sc.nextLine();"), "s = Console.ReadLine();");
        assert_eq!(convert_scanner_input("s = sc.next();"), "s = Console.ReadLine();");
    }

    #[test]
    fn test_final_modifiers() {
        assert_eq!(convert_final_class("public final class Foo {"), "public sealed class Foo {");
        assert_eq!(
            convert_final_field("    private final int limit = 5;"),
            "    private readonly int limit = 5;"
        );
        assert_eq!(convert_final_field("final String name;"), "readonly String name;");
        assert_eq!(convert_final_field("isfinal x y;"), "isfinal x y;");
        assert_eq!(convert_final_field("xfinal final int a;"), "xfinal readonly int a;");
    }
}
