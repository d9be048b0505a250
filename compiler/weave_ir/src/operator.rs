//! Overloadable operator names.

use std::cmp::Reverse;
use std::fmt;
use std::sync::OnceLock;

macro_rules! operators {
    ($($(#[$doc:meta])* $variant:ident => $spelling:literal, $code:literal;)*) => {
        /// The operator named by an `operator` function, or [`OperatorKind::Any`]
        /// for the `operator %` wildcard.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
        pub enum OperatorKind {
            $($(#[$doc])* $variant,)*
        }

        impl OperatorKind {
            /// Every operator, in declaration order.
            pub const ALL: &'static [OperatorKind] = &[$(OperatorKind::$variant,)*];

            /// Source spelling after the `operator` keyword.
            pub fn spelling(self) -> &'static str {
                match self {
                    $(OperatorKind::$variant => $spelling,)*
                }
            }

            /// Itanium ABI operator code.
            pub fn mangled(self) -> &'static str {
                match self {
                    $(OperatorKind::$variant => $code,)*
                }
            }
        }
    };
}

operators! {
    New => "new", "nw";
    NewArray => "new[]", "na";
    Delete => "delete", "dl";
    DeleteArray => "delete[]", "da";
    Plus => "+", "pl";
    Minus => "-", "mi";
    Mul => "*", "ml";
    Div => "/", "dv";
    Modulo => "%", "rm";
    Xor => "^", "eo";
    BitAnd => "&", "an";
    BitOr => "|", "or";
    Tilde => "~", "co";
    Not => "!", "nt";
    Assign => "=", "aS";
    Less => "<", "lt";
    Greater => ">", "gt";
    AddAssign => "+=", "pL";
    SubAssign => "-=", "mI";
    MulAssign => "*=", "mL";
    DivAssign => "/=", "dV";
    ModAssign => "%=", "rM";
    XorAssign => "^=", "eO";
    AndAssign => "&=", "aN";
    OrAssign => "|=", "oR";
    Shl => "<<", "ls";
    Shr => ">>", "rs";
    ShlAssign => "<<=", "lS";
    ShrAssign => ">>=", "rS";
    Eq => "==", "eq";
    Ne => "!=", "ne";
    Le => "<=", "le";
    Ge => ">=", "ge";
    AndAnd => "&&", "aa";
    OrOr => "||", "oo";
    Incr => "++", "pp";
    Decr => "--", "mm";
    Comma => ",", "cm";
    ArrowStar => "->*", "pm";
    Arrow => "->", "pt";
    Call => "()", "cl";
    Index => "[]", "ix";
    Conditional => "?:", "qu";
    Dot => ".", "dt";
    DotStar => ".*", "ds";
    /// `operator %` in a match expression: any operator.
    Any => "%", "X_";
}

impl OperatorKind {
    /// Operators spelled with punctuation only, longest spelling first.
    ///
    /// Scanning this table with `starts_with` yields the longest match for
    /// any leading character. `new`/`delete` and the wildcard are left out
    /// since they need keyword and mode handling.
    pub fn symbolic_by_length() -> &'static [OperatorKind] {
        static TABLE: OnceLock<Vec<OperatorKind>> = OnceLock::new();
        TABLE.get_or_init(|| {
            let mut symbolic: Vec<_> = OperatorKind::ALL
                .iter()
                .copied()
                .filter(|op| {
                    !matches!(
                        op,
                        OperatorKind::New
                            | OperatorKind::NewArray
                            | OperatorKind::Delete
                            | OperatorKind::DeleteArray
                            | OperatorKind::Any
                    )
                })
                .collect();
            symbolic.sort_by_key(|op| Reverse(op.spelling().len()));
            symbolic
        })
    }
}

impl OperatorKind {
    /// The spelling inside a match expression, where a lone `%` means any
    /// operator.
    pub fn pattern_spelling(self) -> &'static str {
        match self {
            OperatorKind::Modulo => "%%",
            OperatorKind::ModAssign => "%%=",
            other => other.spelling(),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "operator {}", self.spelling())
    }
}

#[cfg(test)]
mod tests;
