// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use tinystr::TinyAsciiStr;

use crate::provider::BakedTables;
use crate::{IdentifierTables, SubtagKind, TagError};

/// A variant subtag (examples: `"macos"`, `"posix"`, `"1996"` etc.)
///
/// [`Variant`] represents a Unicode base language code conformant to the
/// [`unicode_variant_id`] field of the Language and Locale Identifier.
///
/// Only variants in the closed registry are accepted. Any other input, whatever
/// its shape, is reported as [`TagError::UnknownIdentifier`].
///
/// # Examples
///
/// ```
/// use langtag::subtags::Variant;
/// use langtag::{SubtagKind, TagError};
///
/// let variant: Variant = "POSIX".parse().expect("Failed to parse a variant subtag.");
/// assert_eq!(variant.as_str(), "posix");
///
/// assert!(matches!(
///     "macos".parse::<Variant>(),
///     Err(TagError::UnknownIdentifier {
///         kind: SubtagKind::Variant,
///         ..
///     })
/// ));
/// ```
///
/// [`unicode_variant_id`]: https://unicode.org/reports/tr35/#unicode_variant_id
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord, Copy)]
#[repr(transparent)]
pub struct Variant(TinyAsciiStr<8>);

impl Variant {
    /// A constructor which takes a str slice, parses it and
    /// produces a well-formed [`Variant`].
    #[inline]
    pub fn try_from_str(s: &str) -> Result<Self, TagError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// See [`Self::try_from_str`]
    #[inline]
    pub fn try_from_utf8(code_units: &[u8]) -> Result<Self, TagError> {
        Self::try_from_utf8_with(&BakedTables, code_units)
    }

    /// Normalizes `code_units` to lowercase and checks it against the variant
    /// registry of `tables`.
    pub fn try_from_utf8_with(
        tables: &(impl IdentifierTables + ?Sized),
        code_units: &[u8],
    ) -> Result<Self, TagError> {
        let unknown = || TagError::unknown(SubtagKind::Variant, code_units);
        let s = TinyAsciiStr::<8>::try_from_utf8(code_units)
            .map_err(|_| unknown())?
            .to_ascii_lowercase();
        if tables.is_known_variant(s.as_str()) {
            Ok(Self(s))
        } else {
            Err(unknown())
        }
    }

    /// Builds a [`Variant`] from text the parser has already validated.
    pub(crate) fn from_normalized(s: TinyAsciiStr<8>) -> Self {
        Self(s)
    }

    /// A helper function for displaying
    /// a [`Variant`] as a `&`[`str`].
    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying [`TinyAsciiStr`].
    #[inline]
    pub const fn into_tinystr(self) -> TinyAsciiStr<8> {
        self.0
    }
}

impl writeable::Writeable for Variant {
    #[inline]
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str(self.as_str())
    }

    #[inline]
    fn writeable_length_hint(&self) -> writeable::LengthHint {
        writeable::LengthHint::exact(self.0.len())
    }

    #[inline]
    fn write_to_string(&self) -> alloc::borrow::Cow<'_, str> {
        alloc::borrow::Cow::Borrowed(self.as_str())
    }
}

writeable::impl_display_with_writeable!(Variant);

impl core::str::FromStr for Variant {
    type Err = TagError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use writeable::assert_writeable_eq;

    #[test]
    fn registry() {
        assert_writeable_eq!(Variant::try_from_str("Valencia").unwrap(), "valencia");
        assert_writeable_eq!(Variant::try_from_str("1996").unwrap(), "1996");
        assert_eq!(
            Variant::try_from_str("abcde"),
            Err(TagError::unknown(SubtagKind::Variant, b"abcde"))
        );
        assert!(matches!(
            Variant::try_from_str("valenciana"),
            Err(TagError::UnknownIdentifier {
                kind: SubtagKind::Variant,
                ..
            })
        ));
        assert!(Variant::try_from_str("").is_err());
        assert!(Variant::try_from_str("fonipä").is_err());
    }
}
