// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use core::num::NonZeroU16;

use tinystr::TinyAsciiStr;

use crate::provider::BakedTables;
use crate::{IdentifierTables, TagError};

/// A script subtag (examples: `"Latn"`, `"Arab"`, etc.)
///
/// [`Script`] represents a Unicode base language code conformant to the
/// [`unicode_script_id`] field of the Language and Locale Identifier.
///
/// A [`Tag`](crate::Tag) without a script holds `None`, so ids are never zero.
///
/// # Examples
///
/// ```
/// use langtag::subtags::Script;
///
/// let script: Script = "LATN".parse().expect("Failed to parse a script subtag.");
/// assert_eq!(script.as_str(), "Latn");
/// ```
///
/// [`unicode_script_id`]: https://unicode.org/reports/tr35/#unicode_script_id
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Script(NonZeroU16);

impl Script {
    /// Creates a [`Script`] from a raw id.
    #[inline]
    pub const fn from_raw(raw: NonZeroU16) -> Self {
        Self(raw)
    }

    /// Returns the raw id of this [`Script`].
    #[inline]
    pub const fn into_raw(self) -> NonZeroU16 {
        self.0
    }

    /// A constructor which takes a str slice, parses it and
    /// produces a well-formed [`Script`].
    #[inline]
    pub fn try_from_str(s: &str) -> Result<Self, TagError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// See [`Self::try_from_str`]
    #[inline]
    pub fn try_from_utf8(code_units: &[u8]) -> Result<Self, TagError> {
        Self::try_from_utf8_with(&BakedTables, code_units)
    }

    /// Parses a four letter script code and resolves it against `tables`.
    pub fn try_from_utf8_with(
        tables: &(impl IdentifierTables + ?Sized),
        code_units: &[u8],
    ) -> Result<Self, TagError> {
        if code_units.len() != 4 {
            return Err(TagError::Syntax);
        }
        let s = TinyAsciiStr::<4>::try_from_utf8(code_units).map_err(|_| TagError::Syntax)?;
        if !s.is_ascii_alphabetic() {
            return Err(TagError::Syntax);
        }
        tables.lookup_script(s.to_ascii_titlecase().as_utf8())
    }

    /// Returns the code of this script in the baked tables.
    #[inline]
    pub fn as_str(self) -> &'static str {
        BakedTables::script_code(self)
    }

    /// See [`Self::as_str`]
    #[inline]
    pub fn as_str_with(self, tables: &(impl IdentifierTables + ?Sized)) -> &str {
        tables.script_str(self)
    }
}

super::impl_id_subtag_text!(Script);

#[cfg(test)]
mod tests {
    use super::*;
    use writeable::assert_writeable_eq;

    #[test]
    fn parse() {
        assert_writeable_eq!(Script::try_from_str("hANS").unwrap(), "Hans");
        assert_eq!(Script::try_from_str("Latn"), Script::try_from_str("latn"));
        assert_eq!(Script::try_from_str("Lat"), Err(TagError::Syntax));
        assert_eq!(Script::try_from_str("La1n"), Err(TagError::Syntax));
        assert!(matches!(
            Script::try_from_str("Qaaa"),
            Err(TagError::UnknownIdentifier { .. })
        ));
    }
}
