//! Symbol-class naming convention
//!
//! A name is eligible for synthesis iff it ends with the literal `.R`, or
//! its final dot-separated segment begins with `R$` (an inner symbol
//! class). Everything else must be rejected before the registry's cache is
//! even consulted.

/// Returns whether `name` denotes a symbol class or one of its inner classes
///
/// ```
/// use resym_bundle::is_symbol_class_name;
///
/// assert!(is_symbol_class_name("com.example.R"));
/// assert!(is_symbol_class_name("com.example.R$string"));
/// assert!(!is_symbol_class_name("com.example.Rfoo"));
/// assert!(!is_symbol_class_name("R"));
/// ```
#[must_use]
pub fn is_symbol_class_name(name: &str) -> bool {
    name.ends_with(".R") || final_segment(name).starts_with("R$")
}

/// Package prefix of a dotted class name
///
/// The substring before the last `.`; empty when the name has no dot.
#[must_use]
pub fn package_prefix(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[..idx],
        None => "",
    }
}

fn final_segment(name: &str) -> &str {
    match name.rfind('.') {
        Some(idx) => &name[idx + 1..],
        None => name,
    }
}
