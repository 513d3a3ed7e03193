//! Template argument lists embedded in names.
//!
//! Names carry their template arguments verbatim, e.g. `TLinkList<10JUTConsole,-24>`. Each
//! top-level argument is either an integral literal, emitted as written, or a mangled node that
//! is decoded like any other type.

use crate::{
    demangle::{Cursor, SymbolParser},
    Result,
};

/// Split `name` at its first `<` into the plain name and the template suffix.
///
/// # Examples
///
/// ```rust
/// use symscope::demangle::separate_template;
///
/// assert_eq!(separate_template("TVec3<f>"), ("TVec3", "<f>"));
/// assert_eq!(separate_template("Spine"), ("Spine", ""));
/// ```
#[must_use]
pub fn separate_template(name: &str) -> (&str, &str) {
    match name.find('<') {
        Some(start) => name.split_at(start),
        None => (name, ""),
    }
}

/// Decode the template argument list of `name`, if it has one.
///
/// `origin` is the absolute offset of `name` within the symbol and `depth` the nesting level of
/// the node that owns the name; both carry into the decoding of every argument.
///
/// # Errors
/// Returns [`crate::Error::MalformedSymbol`] if the list is unclosed, is followed by more text,
/// contains an empty argument, or an argument does not decode to exactly one node.
pub fn expand_templates(name: &str, origin: usize, depth: usize) -> Result<String> {
    let (plain, template) = separate_template(name);
    if template.is_empty() {
        return Ok(plain.to_string());
    }

    let arguments = split_template_args(template, origin + plain.len())?;

    let mut rendered = Vec::with_capacity(arguments.len());
    for (argument, offset) in arguments {
        if is_integral(argument) {
            rendered.push(argument.to_string());
            continue;
        }

        let mut parser = SymbolParser::nested(argument, offset, depth);
        let node = parser.parse_node()?;
        if parser.has_more_data() {
            return Err(malformed_symbol!(
                parser.cursor(),
                "unexpected input after template argument"
            ));
        }

        rendered.push(node);
    }

    Ok(format!("{plain}<{}>", rendered.join(", ")))
}

/// `-`? digit+
fn is_integral(argument: &str) -> bool {
    let digits = argument.strip_prefix('-').unwrap_or(argument);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Split `<a,b<c,d>,e>` at its top-level commas, returning each argument with its absolute offset.
fn split_template_args(template: &str, origin: usize) -> Result<Vec<(&str, usize)>> {
    let mut cursor = Cursor::with_origin(template, origin);
    let mut arguments = Vec::new();
    let mut level = 0usize;
    let mut start = 1;

    while cursor.has_more_data() {
        let at = cursor.pos() - origin;

        match cursor.peek_byte()? {
            b'<' => level += 1,
            b',' if level == 1 => {
                arguments.push(template_arg(&cursor, template, start, at, origin)?);
                start = at + 1;
            }
            b'>' => {
                level -= 1;
                if level == 0 {
                    arguments.push(template_arg(&cursor, template, start, at, origin)?);

                    cursor.advance()?;
                    if cursor.has_more_data() {
                        return Err(malformed_symbol!(
                            cursor,
                            "unexpected input after template argument list"
                        ));
                    }

                    return Ok(arguments);
                }
            }
            _ => {}
        }

        cursor.advance()?;
    }

    Err(malformed_symbol!(
        cursor,
        "missing closing '>' in template argument list"
    ))
}

fn template_arg<'t>(
    cursor: &Cursor<'_>,
    template: &'t str,
    start: usize,
    end: usize,
    origin: usize,
) -> Result<(&'t str, usize)> {
    if start == end {
        return Err(malformed_symbol!(cursor, "empty template argument"));
    }

    Ok((&template[start..end], origin + start))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_separate_template() {
        assert_eq!(separate_template("__ct<i>"), ("__ct", "<i>"));
        assert_eq!(separate_template("A<B<c>>"), ("A", "<B<c>>"));
        assert_eq!(separate_template(""), ("", ""));
    }

    #[test]
    fn test_is_integral() {
        assert!(is_integral("0"));
        assert!(is_integral("-24"));
        assert!(!is_integral("-"));
        assert!(!is_integral(""));
        assert!(!is_integral("10JUTConsole"));
        assert!(!is_integral("1-2"));
    }

    #[test]
    fn test_split_template_args() {
        let args = split_template_args("<f>", 5).unwrap();
        assert_eq!(args, vec![("f", 6)]);

        let args = split_template_args("<P3Foo,8Bar<i,c>,-1>", 0).unwrap();
        assert_eq!(args, vec![("P3Foo", 1), ("8Bar<i,c>", 7), ("-1", 17)]);
    }

    #[test]
    fn test_expand_templates() {
        assert_eq!(expand_templates("Spine", 0, 0).unwrap(), "Spine");
        assert_eq!(expand_templates("TVec3<f>", 0, 0).unwrap(), "TVec3<float>");
        assert_eq!(
            expand_templates(
                "FunctorV0M<P18SimpleBreakableObj,M18SimpleBreakableObjFPCvPv_v>",
                0,
                0
            )
            .unwrap(),
            "FunctorV0M<SimpleBreakableObj*, void (SimpleBreakableObj::*)(const void*, void*)>"
        );
        assert_eq!(
            expand_templates("Map<9Pair<i,b>,Uc>", 0, 0).unwrap(),
            "Map<Pair<int, bool>, unsigned char>"
        );
    }

    #[test]
    fn test_error_handling() {
        // Unclosed
        let err = expand_templates("TVec3<f", 10, 0).unwrap_err();
        assert_eq!(
            err,
            Error::MalformedSymbol {
                message: "missing closing '>' in template argument list".to_string(),
                remaining: String::new(),
                offset: 17,
            }
        );

        // Trailing text, empty arguments, leftover inside an argument
        assert!(expand_templates("TVec3<f>x", 0, 0).is_err());
        assert!(expand_templates("TVec3<>", 0, 0).is_err());
        assert!(expand_templates("TVec3<f,>", 0, 0).is_err());
        assert!(expand_templates("TVec3<ff>", 0, 0).is_err());

        // Offsets point into the argument
        let err = expand_templates("TVec3<z>", 100, 0).unwrap_err();
        assert_eq!(err.offset(), 106);
    }
}
