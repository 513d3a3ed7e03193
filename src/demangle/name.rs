//! Base-name finalization.
//!
//! The base name (everything before the last `__`) may be an operator code, a constructor or
//! destructor code, or an ordinary identifier, optionally followed by template arguments. Its
//! final spelling can depend on the enclosing class, so it is resolved after the rest of the
//! symbol has been decoded.

use crate::{
    demangle::{expand_templates, separate_template, special_name, Cursor, CONSTRUCTOR, DESTRUCTOR},
    Result,
};

/// Resolve the base name of a symbol against its decoded `namespace`.
///
/// # Arguments
/// * `base` - The raw base name, e.g. `__ct<i>` or `findElement<l>`
/// * `namespace` - The decoded enclosing scope, e.g. `JGeometry::TVec3<float>`
///
/// # Errors
/// Returns [`crate::Error::MalformedSymbol`] if the template arguments of `base` are malformed,
/// or if `base` names a constructor or destructor but no enclosing class was decoded.
///
/// # Examples
///
/// ```rust
/// use symscope::demangle::resolve_name;
///
/// assert_eq!(resolve_name("__dt", Some("MorphItemNeoTeresa"))?, "~MorphItemNeoTeresa");
/// assert_eq!(resolve_name("__ct<i>", Some("JGeometry::TVec3<float>"))?, "TVec3<int>");
/// assert_eq!(resolve_name("__as", Some("TBox"))?, "operator=");
/// # Ok::<(), symscope::Error>(())
/// ```
pub fn resolve_name(base: &str, namespace: Option<&str>) -> Result<String> {
    let expanded = expand_templates(base, 0, 0)?;
    let (name, template) = separate_template(&expanded);

    let resolved = if let Some(special) = special_name(name) {
        special.to_string()
    } else if name == CONSTRUCTOR || name == DESTRUCTOR {
        let Some(namespace) = namespace else {
            return Err(malformed_symbol!(
                Cursor::new(base),
                "constructor or destructor without an enclosing class"
            ));
        };

        let class = class_name(namespace);
        if name == CONSTRUCTOR {
            class.to_string()
        } else {
            format!("~{class}")
        }
    } else {
        name.to_string()
    };

    Ok(format!("{resolved}{template}"))
}

/// Simple name of the innermost class of `namespace`, without template arguments.
///
/// Only `::` separators outside of template argument lists count, so
/// `TList<Game::Actor>` stays one component.
fn class_name(namespace: &str) -> &str {
    let mut level = 0usize;
    let mut start = 0;
    let bytes = namespace.as_bytes();

    for (i, byte) in bytes.iter().enumerate() {
        match byte {
            b'<' => level += 1,
            b'>' => level = level.saturating_sub(1),
            b':' if level == 0 && bytes.get(i + 1) == Some(&b':') => start = i + 2,
            _ => {}
        }
    }

    separate_template(&namespace[start..]).0
}
