//! Grammar productions.
//!
//! - `decl_spec`: specifier sequences and the builtin type table
//! - `declarator`: pointer operators, nested declarators, functions and arrays
//! - `name`: nested names, type names and declarator ids
//! - `operator`: operator and conversion function ids
//! - `template_args`: template argument lists and decimal literals

mod decl_spec;
mod declarator;
mod name;
mod operator;
mod template_args;

use std::mem;

use tracing::trace;
use weave_ir::{QualifiedName, Specifiers, TypePattern};

use crate::{Declaration, ParseError, ParseErrorKind, Parser};

/// Whether a declarator may carry a name.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum DeclaratorMode {
    /// The top-level declaration.
    Named,
    /// Parameters, template type arguments and conversion targets.
    Abstract,
}

impl Parser<'_> {
    /// `decl-spec-seq declarator?`
    pub(crate) fn parse_declaration(
        &mut self,
        mode: DeclaratorMode,
    ) -> Result<Declaration, ParseError> {
        self.cursor.skip_blanks();
        let start = self.position();
        let (mut ty, specifiers) = self.parse_decl_specs()?;

        let name = if let Some(id) = self.take_function_name(mode, &mut ty) {
            self.parse_declarator_post(&mut ty)?;
            Some(id)
        } else {
            self.cursor.skip_blanks();
            if self.cursor.is_at_end() {
                None
            } else {
                self.parse_declarator(mode, &mut ty)?
            }
        };
        trace!(start, ?mode, named = name.is_some(), "declaration");

        if specifiers.contains(Specifiers::VIRTUAL) && !ty.is_function() {
            return Err(ParseError::new(ParseErrorKind::SpecifierOnNonFunction, start));
        }
        match mode {
            DeclaratorMode::Abstract => Ok(Declaration {
                ty,
                name,
                specifiers: Specifiers::empty(),
            }),
            DeclaratorMode::Named => {
                if !specifiers.is_empty() && name.is_none() {
                    return Err(self.error(ParseErrorKind::MissingDeclaratorId));
                }
                Ok(Declaration {
                    ty,
                    name,
                    specifiers,
                })
            }
        }
    }

    /// In a match expression, a lone type name followed directly by a
    /// parameter list is a function name with an omitted return type, as a
    /// constructor is written: `...::X::%(...)`.
    ///
    /// On success `ty` becomes `%` and the name is returned.
    fn take_function_name(
        &mut self,
        mode: DeclaratorMode,
        ty: &mut TypePattern,
    ) -> Option<QualifiedName> {
        if mode != DeclaratorMode::Named
            || !self.config.wildcards_allowed()
            || !self.cursor.check(b'(')
            || self.is_nested_declarator()
        {
            return None;
        }
        match mem::take(ty) {
            TypePattern::Named { name, quals } if quals.is_empty() && name.ident_str().is_some() => {
                *ty = TypePattern::any();
                Some(name)
            }
            other => {
                *ty = other;
                None
            }
        }
    }
}
