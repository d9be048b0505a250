//! Declaration specifiers.
//!
//! A specifier sequence mixes qualifiers, `virtual`/`static`, builtin type
//! keywords and at most one type name, in any order. A type name is only
//! accepted before any builtin keyword, so in `unsigned Foo` the `Foo` is
//! left for the declarator.

use weave_ir::{PrimitiveKind, QualifiedName, Qualifiers, Specifiers, TypePattern};

use crate::{commit, try_outcome, ParseError, ParseErrorKind, ParseOutcome, Parser};

/// Builtin type keywords other than `signed`/`unsigned`/`short`/`long`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum BaseKeyword {
    Bool,
    Char,
    WChar,
    Int,
    Int128,
    Float,
    Double,
    Void,
}

const BASE_KEYWORDS: [(&str, BaseKeyword); 8] = [
    ("bool", BaseKeyword::Bool),
    ("char", BaseKeyword::Char),
    ("wchar_t", BaseKeyword::WChar),
    ("int", BaseKeyword::Int),
    ("__int128", BaseKeyword::Int128),
    ("float", BaseKeyword::Float),
    ("double", BaseKeyword::Double),
    ("void", BaseKeyword::Void),
];

/// Accumulated specifiers.
#[derive(Debug, Default)]
struct DeclSpecs {
    quals: Qualifiers,
    specifiers: Specifiers,
    base: Option<BaseKeyword>,
    /// `-1` for `signed`, `1` for `unsigned`.
    sign: i8,
    /// Net count of `long` minus `short`.
    size: i8,
    name: Option<QualifiedName>,
    name_closed: bool,
    seen: bool,
}

impl DeclSpecs {
    /// The type the specifiers denote, `Undefined` if there were none.
    ///
    /// Only `virtual`/`static` with no type implies `int`.
    fn into_type(self) -> Result<TypePattern, ParseErrorKind> {
        if !self.seen {
            return Ok(TypePattern::Undefined);
        }
        let mut ty = match self.name {
            Some(name) => {
                if self.base.is_some() || self.sign != 0 || self.size != 0 {
                    return Err(ParseErrorKind::InvalidType);
                }
                if name.scopes().is_empty() && is_wildcard_type(&name) {
                    TypePattern::any()
                } else {
                    TypePattern::named(name)
                }
            }
            None => primitive_kind(self.base, self.sign, self.size)
                .map(TypePattern::primitive)
                .ok_or(ParseErrorKind::InvalidType)?,
        };
        ty.qualify(self.quals);
        Ok(ty)
    }
}

fn is_wildcard_type(name: &QualifiedName) -> bool {
    matches!(
        name.terminal(),
        weave_ir::NameTerminal::Ident { name, template_args: None } if name.is_any()
    )
}

/// Resolve keyword, sign and size into a builtin kind.
fn primitive_kind(base: Option<BaseKeyword>, sign: i8, size: i8) -> Option<PrimitiveKind> {
    use PrimitiveKind as P;
    let unsigned = sign > 0;
    let kind = match (base.unwrap_or(BaseKeyword::Int), size) {
        (BaseKeyword::Char, 0) => match sign {
            0 => P::Char,
            s if s < 0 => P::SignedChar,
            _ => P::UnsignedChar,
        },
        (BaseKeyword::Int, -1) if unsigned => P::UnsignedShort,
        (BaseKeyword::Int, -1) => P::Short,
        (BaseKeyword::Int, 0) if unsigned => P::UnsignedInt,
        (BaseKeyword::Int, 0) => P::Int,
        (BaseKeyword::Int, 1) if unsigned => P::UnsignedLong,
        (BaseKeyword::Int, 1) => P::Long,
        (BaseKeyword::Int, 2) if unsigned => P::UnsignedLongLong,
        (BaseKeyword::Int, 2) => P::LongLong,
        (BaseKeyword::Int128, 0) if unsigned => P::UnsignedInt128,
        (BaseKeyword::Int128, 0) => P::Int128,
        (BaseKeyword::Bool, 0) if sign == 0 => P::Bool,
        (BaseKeyword::WChar, 0) if sign == 0 => P::WChar,
        (BaseKeyword::Float, 0) if sign == 0 => P::Float,
        (BaseKeyword::Double, 0) if sign == 0 => P::Double,
        (BaseKeyword::Double, 1) if sign == 0 => P::LongDouble,
        (BaseKeyword::Void, 0) if sign == 0 => P::Void,
        _ => return None,
    };
    Some(kind)
}

impl Parser<'_> {
    /// Parse a (possibly empty) specifier sequence into a type and the
    /// `virtual`/`static` flags.
    pub(crate) fn parse_decl_specs(&mut self) -> Result<(TypePattern, Specifiers), ParseError> {
        self.cursor.skip_blanks();
        let start = self.position();
        let mut specs = DeclSpecs::default();
        while self.parse_decl_spec(&mut specs).into_result()?.is_some() {}

        let specifiers = specs.specifiers;
        let ty = specs
            .into_type()
            .map_err(|kind| ParseError::new(kind, start))?;
        Ok((ty, specifiers))
    }

    fn parse_decl_spec(&mut self, specs: &mut DeclSpecs) -> ParseOutcome<()> {
        let name_allowed = !specs.name_closed;
        let snapshot = self.snapshot();
        self.cursor.skip_blanks();
        let at = self.position();

        let qual = if self.eat_keyword("const") {
            Qualifiers::CONST
        } else if self.eat_keyword("volatile") {
            Qualifiers::VOLATILE
        } else {
            Qualifiers::empty()
        };
        if !qual.is_empty() {
            if specs.quals.intersects(qual) {
                return ParseOutcome::Failed(ParseError::new(ParseErrorKind::DuplicateQualifier, at));
            }
            specs.quals |= qual;
            specs.seen = true;
            return ParseOutcome::Matched(());
        }

        let spec = if self.eat_keyword("virtual") {
            Specifiers::VIRTUAL
        } else if self.eat_keyword("static") {
            Specifiers::STATIC
        } else {
            Specifiers::empty()
        };
        if !spec.is_empty() {
            if specs.specifiers.intersects(spec) {
                return ParseOutcome::Failed(ParseError::new(ParseErrorKind::DuplicateSpecifier, at));
            }
            specs.specifiers |= spec;
            if specs.specifiers.is_all() {
                return ParseOutcome::Failed(ParseError::new(
                    ParseErrorKind::VirtualStaticConflict,
                    at,
                ));
            }
            specs.seen = true;
            return ParseOutcome::Matched(());
        }

        specs.name_closed = true;

        if let Some(base) = self.eat_base_keyword() {
            if specs.base.replace(base).is_some() {
                return ParseOutcome::Failed(ParseError::new(ParseErrorKind::InvalidType, at));
            }
            specs.seen = true;
            return ParseOutcome::Matched(());
        }

        let size = if self.eat_keyword("short") {
            -1
        } else if self.eat_keyword("long") {
            1
        } else {
            0
        };
        if size != 0 {
            if specs.size != 0 && specs.size.signum() != size {
                return ParseOutcome::Failed(ParseError::new(ParseErrorKind::ConflictingSize, at));
            }
            specs.size += size;
            specs.seen = true;
            return ParseOutcome::Matched(());
        }

        let sign = if self.eat_keyword("signed") {
            -1
        } else if self.eat_keyword("unsigned") {
            1
        } else {
            0
        };
        if sign != 0 {
            if specs.sign != 0 {
                return ParseOutcome::Failed(ParseError::new(ParseErrorKind::DuplicateSign, at));
            }
            specs.sign = sign;
            specs.seen = true;
            return ParseOutcome::Matched(());
        }

        if name_allowed {
            if let Some(name) = try_outcome!(self, self.parse_type_name()) {
                specs.name = Some(name);
                specs.seen = true;
                return ParseOutcome::Matched(());
            }
        }

        self.restore(snapshot);
        ParseOutcome::Declined
    }

    fn eat_base_keyword(&mut self) -> Option<BaseKeyword> {
        BASE_KEYWORDS
            .into_iter()
            .find(|(keyword, _)| self.eat_keyword(keyword))
            .map(|(_, base)| base)
    }

    /// A type name in specifier position: `A::B<int>`, `%`, `<unnamed>`.
    ///
    /// Declines on `operator`, which starts a declarator id instead.
    fn parse_type_name(&mut self) -> ParseOutcome<QualifiedName> {
        let snapshot = self.snapshot();
        let mut name = QualifiedName::new();
        commit!(self.parse_nested_name(&mut name));
        self.cursor.skip_blanks();

        if self.cursor.eat_str(weave_ir::UNNAMED_SCOPE) {
            name.set_ident(weave_ir::UNNAMED_SCOPE, None);
            return ParseOutcome::Matched(name);
        }
        if self.at_forbidden_wildcard() {
            return self.fail(ParseErrorKind::WildcardNotAllowed);
        }
        let ident = self.take_identifier();
        if ident.is_empty() || ident == "operator" {
            self.restore(snapshot);
            return ParseOutcome::Declined;
        }
        let template_args = try_outcome!(self, self.parse_template_args());
        name.set_ident(ident, template_args);
        ParseOutcome::Matched(name)
    }
}
