//! Static code tables of the mangling grammar.
//!
//! All tables are immutable data baked into the binary: single-character primitive type codes,
//! the qualifier codes that wrap a type, and the reserved operator / special member names.

use strum::{Display, EnumCount, EnumIter};

/// Mangled code of a constructor base name.
pub const CONSTRUCTOR: &str = "__ct";

/// Mangled code of a destructor base name.
pub const DESTRUCTOR: &str = "__dt";

/// Builtin types that are encoded by a single character.
///
/// The [`Display`](std::fmt::Display) implementation yields the C++ keyword.
///
/// # Examples
///
/// ```rust
/// use symscope::demangle::Primitive;
///
/// assert_eq!(Primitive::from_code(b'x'), Some(Primitive::LongLong));
/// assert_eq!(Primitive::LongLong.to_string(), "long long");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Primitive {
    /// `b`
    #[strum(to_string = "bool")]
    Bool,
    /// `c`
    #[strum(to_string = "char")]
    Char,
    /// `w`
    #[strum(to_string = "wchar_t")]
    WChar,
    /// `s`
    #[strum(to_string = "short")]
    Short,
    /// `i`
    #[strum(to_string = "int")]
    Int,
    /// `l`
    #[strum(to_string = "long")]
    Long,
    /// `x`
    #[strum(to_string = "long long")]
    LongLong,
    /// `f`
    #[strum(to_string = "float")]
    Float,
    /// `d`
    #[strum(to_string = "double")]
    Double,
    /// `v`
    #[strum(to_string = "void")]
    Void,
    /// `e`, the variadic ellipsis of an argument list
    #[strum(to_string = "...")]
    Ellipsis,
}

impl Primitive {
    /// Look up the primitive encoded by `code`.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'b' => Some(Primitive::Bool),
            b'c' => Some(Primitive::Char),
            b'w' => Some(Primitive::WChar),
            b's' => Some(Primitive::Short),
            b'i' => Some(Primitive::Int),
            b'l' => Some(Primitive::Long),
            b'x' => Some(Primitive::LongLong),
            b'f' => Some(Primitive::Float),
            b'd' => Some(Primitive::Double),
            b'v' => Some(Primitive::Void),
            b'e' => Some(Primitive::Ellipsis),
            _ => None,
        }
    }

    /// The single-character code of this primitive.
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            Primitive::Bool => b'b',
            Primitive::Char => b'c',
            Primitive::WChar => b'w',
            Primitive::Short => b's',
            Primitive::Int => b'i',
            Primitive::Long => b'l',
            Primitive::LongLong => b'x',
            Primitive::Float => b'f',
            Primitive::Double => b'd',
            Primitive::Void => b'v',
            Primitive::Ellipsis => b'e',
        }
    }
}

/// Modifiers that may precede the lead character of a node.
///
/// Prefix qualifiers render as words before the base type, suffix qualifiers as symbols
/// directly after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumCount)]
pub enum Qualifier {
    /// `C`
    #[strum(to_string = "const")]
    Const,
    /// `U`
    #[strum(to_string = "unsigned")]
    Unsigned,
    /// `S`
    #[strum(to_string = "signed")]
    Signed,
    /// `P`
    #[strum(to_string = "*")]
    Pointer,
    /// `R`
    #[strum(to_string = "&")]
    Reference,
}

impl Qualifier {
    /// Look up the qualifier encoded by `code`.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            b'C' => Some(Qualifier::Const),
            b'U' => Some(Qualifier::Unsigned),
            b'S' => Some(Qualifier::Signed),
            b'P' => Some(Qualifier::Pointer),
            b'R' => Some(Qualifier::Reference),
            _ => None,
        }
    }

    /// Returns `true` for qualifiers that are written before the base type.
    #[must_use]
    pub fn is_prefix(self) -> bool {
        matches!(
            self,
            Qualifier::Const | Qualifier::Unsigned | Qualifier::Signed
        )
    }
}

/// Spelling of a reserved operator or special member code, if `code` is one.
///
/// # Examples
///
/// ```rust
/// use symscope::demangle::special_name;
///
/// assert_eq!(special_name("__eq"), Some("operator=="));
/// assert_eq!(special_name("__vt"), Some("VTable"));
/// assert_eq!(special_name("__ct"), None);
/// ```
#[must_use]
pub fn special_name(code: &str) -> Option<&'static str> {
    let name = match code {
        "__pl" => "operator+",
        "__mi" => "operator-",
        "__ml" => "operator*",
        "__dv" => "operator/",
        "__md" => "operator%",
        "__er" => "operator^",
        "__adv" => "operator/=",
        "__ad" => "operator&",
        "__or" => "operator|",
        "__co" => "operator~",
        "__nt" => "operator!",
        "__as" => "operator=",
        "__lt" => "operator<",
        "__gt" => "operator>",
        "__apl" => "operator+=",
        "__ami" => "operator-=",
        "__amu" => "operator*=",
        "__amd" => "operator%=",
        "__aer" => "operator^=",
        "__aad" => "operator&=",
        "__aor" => "operator|=",
        "__ls" => "operator<<",
        "__rs" => "operator>>",
        "__ars" => "operator>>=",
        "__als" => "operator<<=",
        "__eq" => "operator==",
        "__ne" => "operator!=",
        "__le" => "operator<=",
        "__ge" => "operator>=",
        "__aa" => "operator&&",
        "__oo" => "operator||",
        "__pp" => "operator++",
        "__mm" => "operator--",
        "__cl" => "operator()",
        "__vc" => "operator[]",
        "__rf" => "operator->",
        "__cm" => "operator,",
        "__rm" => "operator->*",
        "__vt" => "VTable",
        _ => return None,
    };

    Some(name)
}
