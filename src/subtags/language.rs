// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use tinystr::TinyAsciiStr;

use crate::provider::BakedTables;
use crate::{IdentifierTables, TagError};

/// A language subtag (examples: `"en"`, `"csb"`, `"zh"`, `"und"`, etc.)
///
/// [`Language`] represents a Unicode base language code conformant to the
/// [`unicode_language_id`] field of the Language and Locale Identifier.
///
/// The id 0 is reserved for `und`, the undetermined language, which is also the
/// [`Default`].
///
/// # Examples
///
/// ```
/// use langtag::subtags::Language;
///
/// let language: Language = "En".parse().expect("Failed to parse a language subtag.");
/// assert_eq!(language.as_str(), "en");
///
/// assert!("und".parse::<Language>().unwrap().is_und());
/// assert!("a".parse::<Language>().is_err());
/// ```
///
/// [`unicode_language_id`]: https://unicode.org/reports/tr35/#unicode_language_id
#[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Language(u16);

impl Language {
    /// The undetermined language.
    pub const UND: Self = Self(0);

    /// Creates a [`Language`] from a raw id.
    ///
    /// The id is only meaningful to the [`IdentifierTables`] that produced it.
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Returns the raw id of this [`Language`].
    #[inline]
    pub const fn into_raw(self) -> u16 {
        self.0
    }

    /// Returns `true` if this is the undetermined language `und`.
    #[inline]
    pub const fn is_und(self) -> bool {
        self.0 == 0
    }

    /// A constructor which takes a str slice, parses it and
    /// produces a well-formed [`Language`].
    #[inline]
    pub fn try_from_str(s: &str) -> Result<Self, TagError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// See [`Self::try_from_str`]
    #[inline]
    pub fn try_from_utf8(code_units: &[u8]) -> Result<Self, TagError> {
        Self::try_from_utf8_with(&BakedTables, code_units)
    }

    /// Parses a language code and resolves it against `tables`.
    ///
    /// Two or three ASCII letters in any case are accepted. Anything else is a
    /// [`TagError::Syntax`].
    pub fn try_from_utf8_with(
        tables: &(impl IdentifierTables + ?Sized),
        code_units: &[u8],
    ) -> Result<Self, TagError> {
        if !(2..=3).contains(&code_units.len()) {
            return Err(TagError::Syntax);
        }
        let s = TinyAsciiStr::<3>::try_from_utf8(code_units).map_err(|_| TagError::Syntax)?;
        if !s.is_ascii_alphabetic() {
            return Err(TagError::Syntax);
        }
        let s = s.to_ascii_lowercase();
        if s.as_str() == "und" {
            return Ok(Self::UND);
        }
        tables.lookup_language(s.as_utf8())
    }

    /// Returns the code of this language in the baked tables.
    ///
    /// Use [`Self::as_str_with`] for ids produced by other tables.
    #[inline]
    pub fn as_str(self) -> &'static str {
        BakedTables::language_code(self)
    }

    /// Returns the code of this language in `tables`.
    #[inline]
    pub fn as_str_with(self, tables: &(impl IdentifierTables + ?Sized)) -> &str {
        tables.language_str(self)
    }
}

super::impl_id_subtag_text!(Language);

#[cfg(test)]
mod tests {
    use super::*;
    use writeable::assert_writeable_eq;

    #[test]
    fn parse() {
        assert_writeable_eq!(Language::try_from_str("EN").unwrap(), "en");
        assert_writeable_eq!(Language::try_from_str("fil").unwrap(), "fil");
        assert_writeable_eq!(Language::try_from_str("UnD").unwrap(), "und");
        assert_eq!(Language::default(), Language::UND);
    }

    #[test]
    fn errors() {
        assert_eq!(Language::try_from_str(""), Err(TagError::Syntax));
        assert_eq!(Language::try_from_str("e"), Err(TagError::Syntax));
        assert_eq!(Language::try_from_str("e1"), Err(TagError::Syntax));
        assert_eq!(Language::try_from_str("engl"), Err(TagError::Syntax));
        assert_eq!(
            Language::try_from_str("QAA"),
            Err(TagError::unknown(crate::SubtagKind::Language, b"qaa"))
        );
    }
}
