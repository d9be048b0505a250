//! Parse errors.
//!
//! Every failure carries a kind with a stable `E1xxx` code and the byte
//! offset where the parser gave up. The first error ends the parse; there is
//! no recovery.

use thiserror::Error;

/// Why a declaration failed to parse.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    #[error("empty match expression")]
    EmptyExpression,
    #[error("unexpected text after the end of the declaration")]
    TokensAfterEnd,
    #[error("invalid use of '.', expected '...'")]
    InvalidDots,
    #[error("invalid nested declarator")]
    InvalidDeclarator,
    #[error("missing closing bracket")]
    MissingBracket,
    #[error("missing declarator name")]
    MissingDeclaratorId,
    #[error("names are not allowed in an abstract declarator")]
    DeclaratorNotAbstract,
    #[error("argument after '...' in an argument list")]
    ArgumentAfterEllipsis,
    #[error("invalid function argument list")]
    InvalidArgumentList,
    #[error("invalid array dimension")]
    InvalidArraySize,
    #[error("duplicate 'const' or 'volatile'")]
    DuplicateQualifier,
    #[error("duplicate 'signed' or 'unsigned'")]
    DuplicateSign,
    #[error("conflicting 'short' and 'long'")]
    ConflictingSize,
    #[error("invalid combination of type specifiers")]
    InvalidType,
    #[error("invalid operator name")]
    InvalidOperator,
    #[error("invalid template argument list")]
    InvalidTemplateArgs,
    #[error("duplicate 'virtual' or 'static'")]
    DuplicateSpecifier,
    #[error("'virtual' is only allowed on functions")]
    SpecifierOnNonFunction,
    #[error("'virtual' and 'static' cannot be combined")]
    VirtualStaticConflict,
    #[error("'%' is not allowed in a concrete signature")]
    WildcardNotAllowed,
    #[error("conversion operator needs an empty argument list")]
    MissingConversionArgs,
}

impl ParseErrorKind {
    /// All kinds in code order.
    pub const ALL: [ParseErrorKind; 21] = [
        ParseErrorKind::EmptyExpression,
        ParseErrorKind::TokensAfterEnd,
        ParseErrorKind::InvalidDots,
        ParseErrorKind::InvalidDeclarator,
        ParseErrorKind::MissingBracket,
        ParseErrorKind::MissingDeclaratorId,
        ParseErrorKind::DeclaratorNotAbstract,
        ParseErrorKind::ArgumentAfterEllipsis,
        ParseErrorKind::InvalidArgumentList,
        ParseErrorKind::InvalidArraySize,
        ParseErrorKind::DuplicateQualifier,
        ParseErrorKind::DuplicateSign,
        ParseErrorKind::ConflictingSize,
        ParseErrorKind::InvalidType,
        ParseErrorKind::InvalidOperator,
        ParseErrorKind::InvalidTemplateArgs,
        ParseErrorKind::DuplicateSpecifier,
        ParseErrorKind::SpecifierOnNonFunction,
        ParseErrorKind::VirtualStaticConflict,
        ParseErrorKind::WildcardNotAllowed,
        ParseErrorKind::MissingConversionArgs,
    ];

    /// Stable error code, `E1001` through `E1021`.
    pub fn code(self) -> &'static str {
        match self {
            ParseErrorKind::EmptyExpression => "E1001",
            ParseErrorKind::TokensAfterEnd => "E1002",
            ParseErrorKind::InvalidDots => "E1003",
            ParseErrorKind::InvalidDeclarator => "E1004",
            ParseErrorKind::MissingBracket => "E1005",
            ParseErrorKind::MissingDeclaratorId => "E1006",
            ParseErrorKind::DeclaratorNotAbstract => "E1007",
            ParseErrorKind::ArgumentAfterEllipsis => "E1008",
            ParseErrorKind::InvalidArgumentList => "E1009",
            ParseErrorKind::InvalidArraySize => "E1010",
            ParseErrorKind::DuplicateQualifier => "E1011",
            ParseErrorKind::DuplicateSign => "E1012",
            ParseErrorKind::ConflictingSize => "E1013",
            ParseErrorKind::InvalidType => "E1014",
            ParseErrorKind::InvalidOperator => "E1015",
            ParseErrorKind::InvalidTemplateArgs => "E1016",
            ParseErrorKind::DuplicateSpecifier => "E1017",
            ParseErrorKind::SpecifierOnNonFunction => "E1018",
            ParseErrorKind::VirtualStaticConflict => "E1019",
            ParseErrorKind::WildcardNotAllowed => "E1020",
            ParseErrorKind::MissingConversionArgs => "E1021",
        }
    }

    /// Look a kind up by its code. Case-insensitive.
    pub fn from_code(code: &str) -> Option<ParseErrorKind> {
        ParseErrorKind::ALL
            .into_iter()
            .find(|kind| kind.code().eq_ignore_ascii_case(code.trim()))
    }

    /// Longer explanation for `weavec explain`.
    pub fn explanation(self) -> &'static str {
        match self {
            ParseErrorKind::EmptyExpression => {
                "The expression contains nothing but blanks.\n\n\
                 Use `%` to match any type, or `% %(...)` to match any function."
            }
            ParseErrorKind::TokensAfterEnd => {
                "A complete declaration was parsed but text remains after it.\n\n\
                 Example: `int x y` parses `int x` and stops at `y`."
            }
            ParseErrorKind::InvalidDots => {
                "A '.' may only appear as '...'. In a scope position '...' must be\n\
                 followed by '::', as in `...::f`, and matches any sequence of scopes.\n\
                 In argument lists '...' is the variadic marker."
            }
            ParseErrorKind::InvalidDeclarator => {
                "A parenthesized declarator such as `(*p)` has unbalanced brackets."
            }
            ParseErrorKind::MissingBracket => {
                "A ')' or ']' is missing, for example in `void f(int` or `int a[3`.\n\
                 Text left inside a nested declarator, as in `(*p x)`, is reported\n\
                 the same way."
            }
            ParseErrorKind::MissingDeclaratorId => {
                "A name was expected but not found.\n\n\
                 This happens after a scope with no identifier (`int A::`), and for\n\
                 `virtual` or `static` on a declaration without a name."
            }
            ParseErrorKind::DeclaratorNotAbstract => {
                "Function parameters, template arguments and conversion targets are\n\
                 abstract declarators and must not carry a name.\n\n\
                 Write `void f(int)`, not `void f(int x)`."
            }
            ParseErrorKind::ArgumentAfterEllipsis => {
                "'...' must be the last entry of a function argument list."
            }
            ParseErrorKind::InvalidArgumentList => {
                "Function arguments must be separated by ',' and each must be a type."
            }
            ParseErrorKind::InvalidArraySize => {
                "An array dimension must be a decimal number or `%`.\n\n\
                 Example: `int a[16]`, `char buf[%]`."
            }
            ParseErrorKind::DuplicateQualifier => {
                "`const` or `volatile` appears twice in the same specifier sequence."
            }
            ParseErrorKind::DuplicateSign => {
                "Only one of `signed` and `unsigned` may appear, and only once."
            }
            ParseErrorKind::ConflictingSize => {
                "`short` and `long` cannot be combined."
            }
            ParseErrorKind::InvalidType => {
                "The type specifiers do not name a type.\n\n\
                 Examples: `short char`, `long long long`, `unsigned double`, or a\n\
                 class name mixed with a builtin keyword such as `unsigned Foo`."
            }
            ParseErrorKind::InvalidOperator => {
                "`operator` is followed by something that is neither an operator\n\
                 symbol nor a conversion target type."
            }
            ParseErrorKind::InvalidTemplateArgs => {
                "A template argument list is malformed.\n\n\
                 Arguments are types, decimal values, `&name`, `%` or a final `...`,\n\
                 separated by ',' and closed by '>'."
            }
            ParseErrorKind::DuplicateSpecifier => {
                "`virtual` or `static` appears twice."
            }
            ParseErrorKind::SpecifierOnNonFunction => {
                "`virtual` only applies to functions."
            }
            ParseErrorKind::VirtualStaticConflict => {
                "A function cannot be both `virtual` and `static`."
            }
            ParseErrorKind::WildcardNotAllowed => {
                "Concrete signatures describe a single entity and cannot contain the\n\
                 wildcard `%`. Use a match expression to write patterns."
            }
            ParseErrorKind::MissingConversionArgs => {
                "A conversion function must be followed by `()`.\n\n\
                 Example: `A::operator int()`."
            }
        }
    }
}

/// A parse failure at a byte offset into the input.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{kind} (at offset {offset})")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub offset: usize,
}

impl ParseError {
    #[inline]
    pub fn new(kind: ParseErrorKind, offset: usize) -> Self {
        ParseError { kind, offset }
    }

    #[inline]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

#[cfg(test)]
mod tests;
