//! Casing helpers for synthesized names.
//!
//! Only the first character is touched; the rest of the identifier is kept
//! verbatim so that `GotData` becomes `gotData` rather than `gotdata`.

/// `Some` -> `some`, `GotData` -> `gotData`
pub fn lower_first(name: &str) -> String {
    map_first(name, |c| c.to_lowercase().collect())
}

/// `value0` -> `Value0`
pub fn upper_first(name: &str) -> String {
    map_first(name, |c| c.to_uppercase().collect())
}

fn map_first(name: &str, f: impl FnOnce(char) -> String) -> String {
    let mut chars = name.chars();
    match chars.next() {
        | Some(c) => {
            let mut s = f(c);
            s.push_str(chars.as_str());
            s
        }
        | None => String::new(),
    }
}
