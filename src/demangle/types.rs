use std::fmt;

/// Decoded argument list of a function, function type or member function pointer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FunctionArgs {
    /// Rendered argument types in declaration order
    pub args: Vec<String>,
    /// Rendered return type, present only when the mangling spells it out after `_`
    pub return_type: Option<String>,
}

impl FunctionArgs {
    /// The return type followed by a space, or nothing.
    #[must_use]
    pub fn return_prefix(&self) -> String {
        match &self.return_type {
            Some(return_type) => format!("{return_type} "),
            None => String::new(),
        }
    }

    /// The arguments joined by `", "`.
    #[must_use]
    pub fn joined_args(&self) -> String {
        self.args.join(", ")
    }
}

/// A fully decoded symbol.
///
/// The pieces are kept apart so callers can, for example, group functions by class. The
/// [`Display`](fmt::Display) implementation renders the declaration text
/// `[return ]namespace::name(args)[ const]`.
///
/// # Examples
///
/// ```rust
/// use symscope::demangle::parse_symbol;
///
/// let decl = parse_symbol("execute__Q214NrvDemoStarter18DemoStarterNrvTermCFP5Spine")?.unwrap();
/// assert_eq!(decl.namespace.as_deref(), Some("NrvDemoStarter::DemoStarterNrvTerm"));
/// assert_eq!(decl.name, "execute");
/// assert_eq!(decl.arguments, Some(vec!["Spine*".to_string()]));
/// assert!(decl.is_const);
/// assert_eq!(
///     decl.to_string(),
///     "NrvDemoStarter::DemoStarterNrvTerm::execute(Spine*) const"
/// );
/// # Ok::<(), symscope::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Explicit return type of a function, if one was encoded
    pub return_type: Option<String>,
    /// Enclosing class or namespace chain (`A::B::C`), if one was encoded
    pub namespace: Option<String>,
    /// Final base name: operators, constructors and destructors already spelled out
    pub name: String,
    /// Argument types if the symbol is a function, `None` for data symbols
    pub arguments: Option<Vec<String>>,
    /// A `C` marker preceded the signature. Only rendered for functions.
    pub is_const: bool,
}

impl Declaration {
    /// Returns `true` if the symbol encodes a function signature.
    #[must_use]
    pub fn is_function(&self) -> bool {
        self.arguments.is_some()
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(return_type) = &self.return_type {
            write!(f, "{return_type} ")?;
        }

        if let Some(namespace) = &self.namespace {
            write!(f, "{namespace}::")?;
        }

        f.write_str(&self.name)?;

        if let Some(arguments) = &self.arguments {
            write!(f, "({})", arguments.join(", "))?;

            if self.is_const {
                f.write_str(" const")?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let decl = Declaration {
            return_type: Some("void*".to_string()),
            namespace: Some("JGeometry::TVec3<float>".to_string()),
            name: "TVec3<int>".to_string(),
            arguments: Some(vec!["int".to_string(), "int".to_string()]),
            is_const: false,
        };
        assert_eq!(
            decl.to_string(),
            "void* JGeometry::TVec3<float>::TVec3<int>(int, int)"
        );

        // const without a signature is not rendered
        let decl = Declaration {
            return_type: None,
            namespace: Some("CameraHolder".to_string()),
            name: "sCameraTable".to_string(),
            arguments: None,
            is_const: true,
        };
        assert!(!decl.is_function());
        assert_eq!(decl.to_string(), "CameraHolder::sCameraTable");
    }

    #[test]
    fn test_function_args() {
        let args = FunctionArgs::default();
        assert_eq!(args.return_prefix(), "");
        assert_eq!(args.joined_args(), "");

        let args = FunctionArgs {
            args: vec!["int".to_string(), "float".to_string()],
            return_type: Some("bool".to_string()),
        };
        assert_eq!(args.return_prefix(), "bool ");
        assert_eq!(args.joined_args(), "int, float");
    }
}
