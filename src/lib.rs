// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

//! Compact [`BCP 47`] language tags.
//!
//! A [`Tag`] stores its language, script and region as small integer ids resolved
//! against a set of [`IdentifierTables`], and keeps the canonical text of any
//! variants and extensions in a single owned buffer addressed by two offsets.
//! On top of that representation this crate provides:
//!
//!  * parsing and canonical serialization ([`Tag::try_from_str`], [`Writeable`]);
//!  * extension block lookup ([`Tag::extension`], [`Tag::extensions`]);
//!  * Unicode (`-u-`) keyword lookup and editing ([`Tag::type_for_key`],
//!    [`Tag::set_type_for_key`]);
//!  * the [`CLDR`] parent chain ([`Tag::parent`]);
//!  * region containment and classification ([`subtags::Region`]);
//!  * validation of registered variants ([`subtags::Variant`]).
//!
//! Data comes from a compiled-in subset of CLDR, [`provider::BakedTables`]. Every
//! algorithm that consults data also has a `*_with` form taking any
//! [`IdentifierTables`] implementation.
//!
//! # Examples
//!
//! ```
//! use langtag::Tag;
//! use writeable::assert_writeable_eq;
//!
//! let tag: Tag = "zh-hant-hk".parse().expect("Failed to parse.");
//! assert_writeable_eq!(tag, "zh-Hant-HK");
//! assert_writeable_eq!(tag.parent(), "zh-Hant");
//! assert_writeable_eq!(tag.parent().parent(), "und");
//!
//! let tag: Tag = "en-u-co-phonebk".parse().unwrap();
//! let tag = tag.set_type_for_key("co", "pinyin").unwrap();
//! assert_writeable_eq!(tag, "en-u-co-pinyin");
//! assert_eq!(tag.type_for_key("co"), "pinyin");
//! ```
//!
//! [`BCP 47`]: https://www.rfc-editor.org/info/bcp47
//! [`CLDR`]: http://cldr.unicode.org/
//! [`Writeable`]: writeable::Writeable

#![cfg_attr(not(any(test, doc)), no_std)]
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing,
        clippy::panic,
        clippy::exhaustive_structs,
        clippy::exhaustive_enums,
        clippy::trivially_copy_pass_by_ref,
        missing_debug_implementations,
    )
)]
#![warn(missing_docs)]

extern crate alloc;

mod errors;
pub mod extensions;
mod parent;
mod parser;
pub mod provider;
pub mod subtags;
mod tag;

#[cfg(feature = "serde")]
mod serde;

pub use errors::{SubtagKind, TagError};
pub use parent::ParentChain;
pub use provider::IdentifierTables;
pub use tag::{FormattedTag, Tag};

#[cfg(feature = "logging")]
pub(crate) use log;

#[cfg(not(feature = "logging"))]
pub(crate) mod log {
    macro_rules! _internal_noop_log {
        ($($t:expr),*) => {};
    }
    pub(crate) use _internal_noop_log as debug;
    pub(crate) use _internal_noop_log as warn;
}

#[test]
fn test_logging() {
    // This should compile on all combinations of features
    crate::log::debug!("Hello World");
}
