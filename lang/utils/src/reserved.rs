//! Reserved words of the target surface language.

const RESERVED: &[&str] = &[
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with", "implements", "interface", "let", "package",
    "private", "protected", "public", "static", "yield", "await",
];

pub fn is_reserved(name: &str) -> bool {
    RESERVED.contains(&name)
}

/// Whether `name` can appear unquoted as a property or binding.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        | Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        | _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
}

/// `name` with every character that cannot appear in an identifier replaced
/// by `_`; a leading digit is prefixed with `_`.
pub fn identifier_name(name: &str) -> String {
    if is_identifier(name) {
        return name.to_owned();
    }
    let body: String =
        name.chars().map(|c| if c.is_alphanumeric() || c == '$' { c } else { '_' }).collect();
    match body.chars().next() {
        | Some(c) if c.is_alphabetic() || c == '_' || c == '$' => body,
        | _ => format!("_{body}"),
    }
}

/// A name usable as a local binding; reserved words get a trailing `_`.
pub fn binding_name(name: &str) -> String {
    if is_reserved(name) { format!("{name}_") } else { name.to_owned() }
}
