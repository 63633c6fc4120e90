//! Reflection metadata of a class: its name and ordered parameter list.
//!
//! A signature is either parsed from a declaration such as
//! `function Service($logger, $db, options)` or built from a list of parameter
//! names. Parameters prefixed with [`SIGIL`] are dependency references and are
//! resolved by name against the registry, all others are ignored by resolution.

use alloc::{
    borrow::ToOwned as _,
    string::{String, ToString as _},
    vec::Vec,
};
use core::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::errors::SignatureErrorKind;

/// Marker that turns a parameter into a dependency reference
pub const SIGIL: char = '$';

const KEYWORD: &str = "function";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// Dependency reference, holds the injector name without [`SIGIL`]
    Dependency(String),
    Plain(String),
}

impl Param {
    fn parse(raw: &str, declaration: &str) -> Result<Self, SignatureErrorKind> {
        if let Some(name) = raw.strip_prefix(SIGIL) {
            if !name.is_empty() && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_') {
                return Ok(Self::Dependency(name.to_owned()));
            }
        }
        if is_identifier(raw) {
            return Ok(Self::Plain(raw.to_owned()));
        }

        Err(SignatureErrorKind::InvalidParameter {
            declaration: declaration.to_owned(),
            param: raw.to_owned(),
        })
    }

    /// Injector name for dependency references, the declared name for plain parameters
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Dependency(name) | Self::Plain(name) => name,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_dependency(&self) -> bool {
        matches!(self, Self::Dependency(_))
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dependency(name) => write!(f, "{SIGIL}{name}"),
            Self::Plain(name) => f.write_str(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Signature {
    name: Option<String>,
    params: Vec<Param>,
}

impl Signature {
    /// Parses a declaration of the form `[function] [Name](param, ...)[ body]`.
    ///
    /// Whitespace around parameters is ignored, as are default values (`opts = {}`)
    /// and a trailing comma. Brackets and quoted strings inside default values are skipped
    /// when looking for the closing parenthesis. Everything after it is ignored.
    ///
    /// # Errors
    /// Returns [`SignatureErrorKind`] if the declaration has no parameter list,
    /// the list isn't closed, or the name or any parameter isn't an identifier.
    pub fn parse(declaration: &str) -> Result<Self, SignatureErrorKind> {
        let text = declaration.trim();
        let text = match text.strip_prefix(KEYWORD) {
            Some(rest) if rest.starts_with(|ch: char| ch.is_whitespace() || ch == '(') => rest,
            _ => text,
        };

        let Some((name, rest)) = text.split_once('(') else {
            return Err(SignatureErrorKind::NoParameterList {
                declaration: declaration.to_owned(),
            });
        };
        let Some(mut raw_params) = split_params(rest) else {
            return Err(SignatureErrorKind::UnclosedParameterList {
                declaration: declaration.to_owned(),
            });
        };

        let name = name.trim();
        let name = if name.is_empty() {
            None
        } else if is_identifier(name) {
            Some(name.to_owned())
        } else {
            return Err(SignatureErrorKind::InvalidName {
                declaration: declaration.to_owned(),
                name: name.to_owned(),
            });
        };

        if matches!(raw_params.as_slice(), [param] if param.is_empty()) {
            raw_params.clear();
        } else if matches!(raw_params.as_slice(), [.., last, trailing] if trailing.is_empty() && !last.is_empty()) {
            raw_params.pop();
        }

        let params = raw_params
            .into_iter()
            .enumerate()
            .map(|(position, raw)| {
                if raw.is_empty() {
                    Err(SignatureErrorKind::EmptyParameter {
                        declaration: declaration.to_owned(),
                        position,
                    })
                } else {
                    Param::parse(raw, declaration)
                }
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { name, params })
    }

    /// Builds a signature from a parameter name manifest.
    ///
    /// # Errors
    /// Returns [`SignatureErrorKind`] if the name or any parameter isn't an identifier.
    pub fn from_params<I, P>(name: &str, params: I) -> Result<Self, SignatureErrorKind>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        let mut declaration = String::new();
        declaration.push_str(name);
        declaration.push('(');
        for (position, param) in params.into_iter().enumerate() {
            if position > 0 {
                declaration.push_str(", ");
            }
            let param = param.as_ref();
            if param.contains([',', '(', ')', '=']) {
                return Err(SignatureErrorKind::InvalidParameter {
                    declaration,
                    param: param.to_owned(),
                });
            }
            declaration.push_str(param);
        }
        declaration.push(')');

        Self::parse(&declaration)
    }

    /// Builds a signature whose every parameter is a dependency reference to the given injector names.
    ///
    /// # Errors
    /// Returns [`SignatureErrorKind`] if the name or any injector name isn't an identifier.
    pub fn with_dependencies<I, P>(name: &str, dependencies: I) -> Result<Self, SignatureErrorKind>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Self::from_params(
            name,
            dependencies.into_iter().map(|dependency| {
                let mut param = SIGIL.to_string();
                param.push_str(dependency.as_ref());
                param
            }),
        )
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    #[inline]
    #[must_use]
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Injector names of dependency references in declaration order
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.params.iter().filter(|param| param.is_dependency()).map(Param::name)
    }
}

impl FromStr for Signature {
    type Err = SignatureErrorKind;

    #[inline]
    fn from_str(declaration: &str) -> Result<Self, Self::Err> {
        Self::parse(declaration)
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{KEYWORD} {}(", self.name.as_deref().unwrap_or_default())?;
        for (position, param) in self.params.iter().enumerate() {
            if position > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        f.write_str(")")
    }
}

/// Splits the parameter list following `(` on top-level commas up to the matching `)`.
/// Default values are cut off. Returns `None` if the list isn't closed.
fn split_params(list: &str) -> Option<Vec<&str>> {
    let mut params = Vec::new();
    let mut depth = 0usize;
    let mut quote = None;
    let mut start = 0;

    let mut chars = list.char_indices();
    while let Some((index, ch)) = chars.next() {
        if let Some(open) = quote {
            if ch == '\\' {
                chars.next();
            } else if ch == open {
                quote = None;
            }
            continue;
        }

        match ch {
            '\'' | '"' | '`' => quote = Some(ch),
            '(' | '[' | '{' => depth += 1,
            ')' if depth == 0 => {
                params.push(param_name(&list[start..index]));
                return Some(params);
            }
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                params.push(param_name(&list[start..index]));
                start = index + 1;
            }
            _ => {}
        }
    }

    None
}

fn param_name(raw: &str) -> &str {
    raw.split_once('=').map_or(raw, |(name, _default)| name).trim()
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first.is_ascii_alphabetic() || first == '_' || first == SIGIL) && chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == SIGIL)
}
