//! Errors from building signatures.

use thiserror::Error;
use weave_parse::ParseError;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// `declare_virtual_function` on something other than a function.
    #[error("only functions can be declared virtual")]
    VirtualNonFunction,
    /// `declare_static` on a type pattern.
    #[error("only functions and attributes can be declared static")]
    StaticType,
    #[error("a signature cannot be both virtual and static")]
    VirtualStaticConflict,
    /// The signature is still unparsed or failed to parse.
    #[error("signature is not valid")]
    Invalid,
}

impl SignatureError {
    /// Codes for errors outside the parser, `E2001` onwards. Parse errors
    /// keep their own `E1xxx` code.
    pub fn code(&self) -> &'static str {
        match self {
            SignatureError::Parse(error) => error.code(),
            SignatureError::VirtualNonFunction => "E2001",
            SignatureError::StaticType => "E2002",
            SignatureError::VirtualStaticConflict => "E2003",
            SignatureError::Invalid => "E2004",
        }
    }

    /// The non-parse errors, for code lookup.
    pub const DECLARATION_ERRORS: [SignatureError; 4] = [
        SignatureError::VirtualNonFunction,
        SignatureError::StaticType,
        SignatureError::VirtualStaticConflict,
        SignatureError::Invalid,
    ];

    pub fn from_code(code: &str) -> Option<SignatureError> {
        let code = code.trim();
        if let Some(kind) = weave_parse::ParseErrorKind::from_code(code) {
            return Some(SignatureError::Parse(ParseError::new(kind, 0)));
        }
        SignatureError::DECLARATION_ERRORS
            .into_iter()
            .find(|error| error.code().eq_ignore_ascii_case(code))
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            SignatureError::Parse(error) => error.kind.explanation(),
            SignatureError::VirtualNonFunction => {
                "A signature built programmatically was declared virtual, but its\n\
                 type is not a function type."
            }
            SignatureError::StaticType => {
                "A type pattern has no declarator name and cannot be static.\n\
                 Only functions and attributes can be."
            }
            SignatureError::VirtualStaticConflict => {
                "A signature already declared virtual was declared static, or the\n\
                 other way round."
            }
            SignatureError::Invalid => {
                "The signature has not been parsed successfully, so it has no\n\
                 declaration to modify."
            }
        }
    }
}
