// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use displaydoc::Display;
use tinystr::TinyAsciiStr;

/// The kind of subtag reported by [`TagError::UnknownIdentifier`].
#[derive(Display, Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[non_exhaustive]
pub enum SubtagKind {
    /// A language subtag, such as `en`.
    #[displaydoc("language")]
    Language,
    /// A script subtag, such as `Latn`.
    #[displaydoc("script")]
    Script,
    /// A region subtag, such as `US` or `419`.
    #[displaydoc("region")]
    Region,
    /// A variant subtag, such as `valencia`.
    #[displaydoc("variant")]
    Variant,
}

/// List of errors that can be generated while parsing or editing a [`Tag`](crate::Tag),
/// its [`subtags`](crate::subtags) or [`extensions`](crate::extensions).
///
/// Errors fall into two families. [`TagError::Syntax`] is detected from the shape of
/// the input alone, while [`TagError::UnknownIdentifier`] means the input was
/// well-formed but is not present in the [`IdentifierTables`](crate::IdentifierTables).
/// Callers that can live with a partial tag may use [`Tag::parse_best_effort`](crate::Tag::parse_best_effort)
/// and keep going after the latter.
#[derive(Display, Debug, PartialEq, Eq, Copy, Clone, Hash)]
#[non_exhaustive]
pub enum TagError {
    /// The input is not well-formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use langtag::{Tag, TagError};
    ///
    /// assert_eq!("en-".parse::<Tag>(), Err(TagError::Syntax));
    /// ```
    #[displaydoc("Syntax error in language tag")]
    Syntax,

    /// The input is well-formed but unknown.
    ///
    /// # Examples
    ///
    /// ```
    /// use langtag::subtags::Script;
    /// use langtag::{SubtagKind, TagError};
    ///
    /// assert!(matches!(
    ///     "Qaaz".parse::<Script>(),
    ///     Err(TagError::UnknownIdentifier {
    ///         kind: SubtagKind::Script,
    ///         ..
    ///     })
    /// ));
    /// ```
    #[displaydoc("Unknown {kind} subtag: {subtag}")]
    UnknownIdentifier {
        /// Which subtag position was rejected.
        kind: SubtagKind,
        /// The rejected subtag, truncated to eight characters.
        subtag: TinyAsciiStr<8>,
    },

    /// A Unicode extension key or type has an invalid length.
    #[displaydoc("Invalid key or type")]
    InvalidArguments,

    /// A Unicode extension key was set on a private use tag.
    #[displaydoc("Cannot set a key on a private use tag")]
    PrivateUse,

    /// The region has no country code top-level domain.
    #[displaydoc("Region is not a valid ccTLD")]
    NoTld,
}

impl TagError {
    pub(crate) fn unknown(kind: SubtagKind, code_units: &[u8]) -> Self {
        Self::UnknownIdentifier {
            kind,
            subtag: TinyAsciiStr::from_utf8_lossy(code_units, b'?'),
        }
    }
}

impl core::error::Error for TagError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(TagError::Syntax.to_string(), "Syntax error in language tag");
        assert_eq!(
            TagError::unknown(SubtagKind::Region, b"QX").to_string(),
            "Unknown region subtag: QX"
        );
        assert_eq!(
            TagError::unknown(SubtagKind::Variant, b"toolongvariant").to_string(),
            "Unknown variant subtag: toolongv"
        );
    }
}
