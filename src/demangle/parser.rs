use crate::{
    demangle::{
        expand_templates, resolve_name, Cursor, Declaration, FunctionArgs, Primitive, Qualifier,
    },
    Result,
};

/// Maximum nesting of nodes (pointers to functions taking arrays of templates, ...)
const MAX_NESTING_DEPTH: usize = 256;

/// Qualifiers collected in front of a single node.
///
/// Prefixes keep their encounter order and render space-joined before the node; suffixes keep
/// their encounter order and render concatenated right after it.
#[derive(Debug, Default)]
struct QualifierSet {
    prefixes: Vec<Qualifier>,
    suffixes: Vec<&'static str>,
}

impl QualifierSet {
    fn push(&mut self, qualifier: Qualifier) {
        match qualifier {
            Qualifier::Pointer => self.suffixes.push("*"),
            Qualifier::Reference => self.suffixes.push("&"),
            prefix => self.prefixes.push(prefix),
        }
    }

    /// A lone `const` in front of a function type qualifies the call, not the return type.
    fn move_const_to_call(&mut self) {
        if self.prefixes == [Qualifier::Const] {
            self.prefixes.clear();
            self.suffixes.push(" const");
        }
    }

    fn render(&self, node: &str) -> String {
        let mut result = String::with_capacity(node.len() + 16);

        for prefix in &self.prefixes {
            result.push_str(&prefix.to_string());
            result.push(' ');
        }

        result.push_str(node);

        for suffix in &self.suffixes {
            result.push_str(suffix);
        }

        result
    }
}

/// Recursive-descent decoder for the mangled suffix of a symbol.
///
/// # Example
///
/// ```rust
/// use symscope::demangle::SymbolParser;
///
/// let mut parser = SymbolParser::new("PA4_f");
/// assert_eq!(parser.parse_node()?, "float[4]*");
/// assert!(!parser.has_more_data());
/// # Ok::<(), symscope::Error>(())
/// ```
///
/// ## Notes:
/// - One parser decodes one symbol; do not reuse an instance across symbols.
/// - Productions are decoded greedily. An argument list inside a function type runs until the
///   next `_` or the end of input, exactly like the outermost argument list does.
pub struct SymbolParser<'a> {
    cursor: Cursor<'a>,
    depth: usize,
}

impl<'a> SymbolParser<'a> {
    /// Create a new `SymbolParser` over mangled text
    ///
    /// ## Arguments
    /// * 'data' - The mangled text to decode
    #[must_use]
    pub fn new(data: &'a str) -> Self {
        Self::with_origin(data, 0)
    }

    /// Create a `SymbolParser` over a slice that starts at `origin` in the complete symbol
    ///
    /// ## Arguments
    /// * 'data' - The mangled text to decode
    /// * 'origin' - Absolute offset of `data`, used in error reports
    #[must_use]
    pub fn with_origin(data: &'a str, origin: usize) -> Self {
        SymbolParser {
            cursor: Cursor::with_origin(data, origin),
            depth: 0,
        }
    }

    /// Parser for a template argument, continuing the nesting count of its parent
    pub(crate) fn nested(data: &'a str, origin: usize, depth: usize) -> Self {
        SymbolParser {
            cursor: Cursor::with_origin(data, origin),
            depth,
        }
    }

    /// Returns `true` if there is undecoded input left.
    #[must_use]
    pub fn has_more_data(&self) -> bool {
        self.cursor.has_more_data()
    }

    /// The underlying cursor.
    pub fn cursor(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// Decode the mangled suffix of a symbol whose base name is `base`.
    ///
    /// Consumes namespace nodes and `C` markers up to an `F`, then the argument list, and
    /// finally resolves `base` against the last decoded namespace.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if the suffix does not follow the grammar or
    /// input is left after the function signature.
    pub fn parse_declaration(&mut self, base: &str) -> Result<Declaration> {
        let mut namespace = None;
        let mut is_const = false;
        let mut has_function = false;

        while self.cursor.has_more_data() {
            match self.cursor.peek_byte()? {
                b'F' => {
                    self.cursor.advance()?;
                    has_function = true;
                    break;
                }
                b'C' => {
                    self.cursor.advance()?;
                    is_const = true;
                }
                // Only the most recent node is kept as the namespace
                _ => namespace = Some(self.parse_node()?),
            }
        }

        let mut arguments = None;
        let mut return_type = None;

        if has_function {
            let function = self.parse_function_args()?;
            if self.cursor.has_more_data() {
                return Err(malformed_symbol!(
                    self.cursor,
                    "unexpected input after function signature"
                ));
            }

            arguments = Some(function.args);
            return_type = function.return_type;
        }

        let name = resolve_name(base, namespace.as_deref())?;

        Ok(Declaration {
            return_type,
            namespace,
            name,
            arguments,
            is_const,
        })
    }

    /// Decode a single node: qualifiers followed by one production.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] on an unknown lead character, truncated
    /// input, or nesting deeper than the decoder supports.
    pub fn parse_node(&mut self) -> Result<String> {
        self.depth += 1;
        if self.depth > MAX_NESTING_DEPTH {
            return Err(malformed_symbol!(
                self.cursor,
                "nesting exceeds {} levels",
                MAX_NESTING_DEPTH
            ));
        }

        let node = self.parse_qualified_node();
        self.depth -= 1;
        node
    }

    /// Decode an argument list, terminated by the end of input or by `_` and a return type.
    ///
    /// # Errors
    /// Returns [`crate::Error::MalformedSymbol`] if an argument or the return type is malformed.
    pub fn parse_function_args(&mut self) -> Result<FunctionArgs> {
        let mut args = Vec::new();
        let mut return_type = None;

        while self.cursor.has_more_data() {
            if self.cursor.next_is(b'_') {
                self.cursor.advance()?;
                return_type = Some(self.parse_node()?);
                break;
            }

            args.push(self.parse_node()?);
        }

        Ok(FunctionArgs { args, return_type })
    }

    fn parse_qualified_node(&mut self) -> Result<String> {
        let mut qualifiers = QualifierSet::default();
        while let Some(qualifier) = Qualifier::from_code(self.cursor.peek_byte()?) {
            qualifiers.push(qualifier);
            self.cursor.advance()?;
        }

        let lead = self.cursor.peek_byte()?;
        let node = if let Some(primitive) = Primitive::from_code(lead) {
            self.cursor.advance()?;
            primitive.to_string()
        } else {
            match lead {
                b'Q' => self.parse_qualified_name()?,
                b'A' => self.parse_array()?,
                b'F' => {
                    let function = self.parse_function_type()?;
                    qualifiers.move_const_to_call();
                    function
                }
                b'M' => self.parse_member_function_pointer()?,
                b'0'..=b'9' => self.parse_literal_name()?,
                _ => return Err(malformed_symbol!(self.cursor, "invalid node")),
            }
        };

        Ok(qualifiers.render(&node))
    }

    /// `Q` digit node{digit}
    fn parse_qualified_name(&mut self) -> Result<String> {
        self.cursor.expect_byte(b'Q')?;
        let count = self.cursor.read_digit()?;

        let mut components = Vec::with_capacity(count as usize);
        for _ in 0..count {
            components.push(self.parse_node()?);
        }

        Ok(components.join("::"))
    }

    /// `A` decimal `_` node
    fn parse_array(&mut self) -> Result<String> {
        self.cursor.expect_byte(b'A')?;
        let count = self.cursor.read_decimal()?;
        self.cursor.expect_byte(b'_')?;

        let element = self.parse_node()?;
        Ok(format!("{element}[{count}]"))
    }

    /// `F` args [`_` node]
    fn parse_function_type(&mut self) -> Result<String> {
        self.cursor.expect_byte(b'F')?;
        let function = self.parse_function_args()?;

        Ok(format!(
            "{}()({})",
            function.return_prefix(),
            function.joined_args()
        ))
    }

    /// `M` node [`C`] `F` args [`_` node]
    fn parse_member_function_pointer(&mut self) -> Result<String> {
        self.cursor.expect_byte(b'M')?;
        let class = self.parse_node()?;

        let is_const = self.cursor.next_is(b'C');
        if is_const {
            self.cursor.advance()?;
        }

        if !self.cursor.next_is(b'F') {
            return Err(malformed_symbol!(
                self.cursor,
                "expected 'F' after member pointer class"
            ));
        }
        self.cursor.advance()?;

        let function = self.parse_function_args()?;
        let mut node = format!(
            "{}({class}::*)({})",
            function.return_prefix(),
            function.joined_args()
        );

        if is_const {
            node.push_str(" const");
        }

        Ok(node)
    }

    /// decimal length, then that many raw characters
    fn parse_literal_name(&mut self) -> Result<String> {
        let length = self.cursor.read_decimal()?;
        let origin = self.cursor.pos();
        let name = self.cursor.read_str(length)?;

        expand_templates(name, origin, self.depth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn node(input: &str) -> String {
        let mut parser = SymbolParser::new(input);
        let result = parser.parse_node().unwrap();
        assert!(!parser.has_more_data(), "leftover input for {input}");
        result
    }

    #[test]
    fn test_parse_primitives() {
        assert_eq!(node("b"), "bool");
        assert_eq!(node("w"), "wchar_t");
        assert_eq!(node("x"), "long long");
        assert_eq!(node("e"), "...");
    }

    #[test]
    fn test_parse_qualifiers() {
        assert_eq!(node("PCc"), "const char*");
        assert_eq!(node("CUc"), "const unsigned char");
        assert_eq!(node("RCPi"), "const int&*");
        assert_eq!(node("PPv"), "void**");
        assert_eq!(node("Sc"), "signed char");
    }

    #[test]
    fn test_parse_qualified_name() {
        assert_eq!(node("Q22MR7Functor"), "MR::Functor");
        assert_eq!(
            node("Q34Game2UI6Layout"),
            "Game::UI::Layout"
        );
        assert_eq!(node("PCQ22MR7Functor"), "const MR::Functor*");
    }

    #[test]
    fn test_parse_arrays() {
        assert_eq!(node("A4_f"), "float[4]");
        assert_eq!(node("PA4_f"), "float[4]*");
        assert_eq!(node("A3_A4_f"), "float[4][3]");
        assert_eq!(node("A04_i"), "int[4]");
    }

    #[test]
    fn test_parse_function_types() {
        assert_eq!(node("Fv_v"), "void ()(void)");
        assert_eq!(node("PFi_Pc"), "char* ()(int)*");
        assert_eq!(node("Fii"), "()(int, int)");
        assert_eq!(node("CFv_v"), "void ()(void) const");
        assert_eq!(node("CPFv_v"), "void ()(void)* const");
        // More than the lone const prefix stays in front
        assert_eq!(node("CUFv_v"), "const unsigned void ()(void)");
    }

    #[test]
    fn test_parse_member_function_pointers() {
        assert_eq!(
            node("M18SimpleBreakableObjFPCvPv_v"),
            "void (SimpleBreakableObj::*)(const void*, void*)"
        );
        assert_eq!(node("M3FooCFv_i"), "int (Foo::*)(void) const");
        assert_eq!(node("M3FooFi"), "(Foo::*)(int)");
    }

    #[test]
    fn test_parse_literal_names() {
        assert_eq!(node("5Spine"), "Spine");
        assert_eq!(node("8TVec3<f>"), "TVec3<float>");
        assert_eq!(
            node("27TLinkList<10JUTConsole,-24>"),
            "TLinkList<JUTConsole, -24>"
        );
    }

    #[test]
    fn test_parse_function_args() {
        let mut parser = SymbolParser::new("PCcli_12JMapInfoIter");
        let function = parser.parse_function_args().unwrap();
        assert_eq!(function.args, vec!["const char*", "long", "int"]);
        assert_eq!(function.return_type.as_deref(), Some("JMapInfoIter"));
        assert!(!parser.has_more_data());

        // Decoding stops right after the return type
        let mut parser = SymbolParser::new("i_vi");
        let function = parser.parse_function_args().unwrap();
        assert_eq!(function.args, vec!["int"]);
        assert_eq!(function.return_type.as_deref(), Some("void"));
        assert_eq!(parser.cursor().remaining(), "i");

        let mut parser = SymbolParser::new("");
        let function = parser.parse_function_args().unwrap();
        assert!(function.args.is_empty());
        assert_eq!(function.return_type, None);
    }

    #[test]
    fn test_parse_declaration() {
        let mut parser = SymbolParser::with_origin("Q22MR5ClassCFv_i", 6);
        let decl = parser.parse_declaration("method").unwrap();
        assert_eq!(decl.namespace.as_deref(), Some("MR::Class"));
        assert_eq!(decl.name, "method");
        assert_eq!(decl.arguments, Some(vec!["void".to_string()]));
        assert_eq!(decl.return_type.as_deref(), Some("int"));
        assert!(decl.is_const);

        // Last namespace node wins
        let mut parser = SymbolParser::new("3Foo3Bar");
        let decl = parser.parse_declaration("value").unwrap();
        assert_eq!(decl.namespace.as_deref(), Some("Bar"));
        assert_eq!(decl.arguments, None);
    }

    #[test]
    fn test_error_handling() {
        let mut parser = SymbolParser::new("z");
        assert_eq!(
            parser.parse_node().unwrap_err(),
            Error::MalformedSymbol {
                message: "invalid node".to_string(),
                remaining: "z".to_string(),
                offset: 0,
            }
        );

        // Truncated productions
        for input in ["", "P", "Q2", "Q23Foo", "A4f", "A_f", "Ax_f", "9Short", "M3Foo", "M3Foov"]
        {
            let mut parser = SymbolParser::new(input);
            assert!(parser.parse_node().is_err(), "{input} should fail");
        }

        // Offsets are absolute
        let mut parser = SymbolParser::with_origin("PQ23Foo?", 20);
        assert_eq!(parser.parse_node().unwrap_err().offset(), 27);

        // Leftover after the signature
        let mut parser = SymbolParser::new("3FooFv_ii");
        assert!(parser.parse_declaration("bar").is_err());
    }

    #[test]
    fn test_nesting_limit() {
        let input = format!("{}i", "A1_".repeat(MAX_NESTING_DEPTH + 1));
        let mut parser = SymbolParser::new(&input);
        let err = parser.parse_node().unwrap_err();
        assert!(matches!(err, Error::MalformedSymbol { ref message, .. } if message.contains("nesting")));

        let input = format!("{}i", "A1_".repeat(MAX_NESTING_DEPTH - 1));
        let mut parser = SymbolParser::new(&input);
        assert!(parser.parse_node().is_ok());
    }
}
