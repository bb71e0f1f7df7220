// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

//! The language, script, region and variant subtags of a [`Tag`](crate::Tag).
//!
//! [`Language`], [`Script`] and [`Region`] are small integer ids resolved against
//! [`IdentifierTables`](crate::IdentifierTables). They are `Copy`, compare by id and
//! serialize back to their canonical code. [`Variant`] is stored inline as text and
//! validated against the variant registry.
//!
//! Parsing performs syntax normalization before lookup, so the case of the input
//! does not matter.
//!
//! # Examples
//!
//! ```
//! use langtag::subtags::{Language, Region, Script, Variant};
//!
//! let language: Language = "EN".parse().expect("Failed to parse a language subtag.");
//! let script: Script = "arab".parse().expect("Failed to parse a script subtag.");
//! let region: Region = "cn".parse().expect("Failed to parse a region subtag.");
//! let variant: Variant = "Valencia".parse().expect("Failed to parse a variant subtag.");
//!
//! assert_eq!(language.as_str(), "en");
//! assert_eq!(script.as_str(), "Arab");
//! assert_eq!(region.as_str(), "CN");
//! assert_eq!(variant.as_str(), "valencia");
//! ```

mod language;
mod region;
mod script;
mod variant;

pub use language::Language;
pub use region::Region;
pub use script::Script;
pub use variant::Variant;

/// Implements the text traits shared by the id subtags on top of an
/// `as_str(self) -> &'static str` method and a `try_from_str` constructor.
macro_rules! impl_id_subtag_text {
    ($name:ident) => {
        impl writeable::Writeable for $name {
            #[inline]
            fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
                sink.write_str(self.as_str())
            }

            #[inline]
            fn writeable_length_hint(&self) -> writeable::LengthHint {
                writeable::LengthHint::exact(self.as_str().len())
            }

            #[inline]
            fn write_to_string(&self) -> alloc::borrow::Cow<'_, str> {
                alloc::borrow::Cow::Borrowed(self.as_str())
            }
        }

        writeable::impl_display_with_writeable!($name);

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(self, f)
            }
        }

        impl core::str::FromStr for $name {
            type Err = crate::TagError;

            #[inline]
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from_str(s)
            }
        }
    };
}

pub(crate) use impl_id_subtag_text;
