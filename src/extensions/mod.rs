// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

//! Extension blocks of a [`Tag`].
//!
//! Every extension block starts with a single character *singleton* naming its
//! type, followed by subtags whose grammar depends on that type:
//!
//!  * `u`: [Unicode locale extension](https://unicode.org/reports/tr35/#unicode_locale_extensions),
//!    attributes followed by `key-type` keywords;
//!  * `t`: [transformed content](https://www.rfc-editor.org/rfc/rfc6497), an optional
//!    language tag followed by fields;
//!  * `x`: private use subtags, always the last block of a tag;
//!  * any other singleton: two to eight character subtags.
//!
//! Blocks are stored in ascending order of their singleton.
//!
//! # Examples
//!
//! ```
//! use langtag::extensions::Extension;
//! use langtag::Tag;
//!
//! let tag: Tag = "en-a-xyz-u-co-phonebk".parse().expect("Failed to parse.");
//!
//! assert_eq!(tag.extension(b'u').map(|e| e.to_string()), Some("u-co-phonebk".into()));
//! assert_eq!(tag.extension(b'a').map(|e| e.to_string()), Some("a-xyz".into()));
//! assert_eq!(tag.extension(b'z'), None);
//!
//! let ext: Extension = "U-CO-Phonebk".parse().expect("Failed to parse.");
//! assert_eq!(ext.singleton(), b'u');
//! assert_eq!(ext.tokens().collect::<Vec<_>>(), ["u", "co", "phonebk"]);
//! ```

mod unicode;

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use crate::parser::parse_extension_block;
use crate::{Tag, TagError};

/// A single extension block, such as `u-co-phonebk`, in canonical form.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Extension(String);

impl Extension {
    /// A constructor which takes a str slice, parses it and
    /// produces a well-formed [`Extension`].
    ///
    /// The whole input must be one block starting with its singleton.
    ///
    /// ```
    /// use langtag::extensions::Extension;
    /// use langtag::TagError;
    ///
    /// assert_eq!(
    ///     Extension::try_from_str("t-EN-h0-hybrid").map(|e| e.to_string()),
    ///     Ok("t-en-h0-hybrid".into())
    /// );
    /// assert_eq!(Extension::try_from_str("co-phonebk"), Err(TagError::Syntax));
    /// assert_eq!(Extension::try_from_str("a-xyz-b-foo"), Err(TagError::Syntax));
    /// ```
    #[inline]
    pub fn try_from_str(s: &str) -> Result<Self, TagError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// See [`Self::try_from_str`]
    pub fn try_from_utf8(code_units: &[u8]) -> Result<Self, TagError> {
        parse_extension_block(code_units).map(Self)
    }

    /// The singleton naming the type of this block.
    #[inline]
    pub fn singleton(&self) -> u8 {
        self.0.as_bytes().first().copied().unwrap_or(0)
    }

    /// The block as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the subtags of this block, starting with the singleton.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.split('-')
    }
}

impl writeable::Writeable for Extension {
    #[inline]
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        sink.write_str(&self.0)
    }

    #[inline]
    fn writeable_length_hint(&self) -> writeable::LengthHint {
        writeable::LengthHint::exact(self.0.len())
    }

    #[inline]
    fn write_to_string(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.0)
    }
}

writeable::impl_display_with_writeable!(Extension);

impl core::fmt::Debug for Extension {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl FromStr for Extension {
    type Err = TagError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from_str(s)
    }
}

/// Returns the offset of the dash starting the next extension block at or
/// after `p`, or the length of `s`.
///
/// A block starts at a `-X-` pattern, `X` being a single character.
pub(crate) fn next_extension(s: &[u8], mut p: usize) -> usize {
    let n = s.len().saturating_sub(3);
    while p < n {
        if s.get(p) == Some(&b'-') {
            if s.get(p + 2) == Some(&b'-') {
                return p;
            }
            p += 3;
        } else {
            p += 1;
        }
    }
    s.len()
}

/// Returns the extension block starting at `p`, which is either its singleton or
/// the dash before it, along with the offset just past the block.
pub(crate) fn get_extension(s: &str, mut p: usize) -> (usize, &str) {
    let bytes = s.as_bytes();
    if bytes.get(p) == Some(&b'-') {
        p += 1;
    }
    if bytes.get(p) == Some(&b'x') {
        return (s.len(), s.get(p..).unwrap_or_default());
    }
    let end = next_extension(bytes, p);
    (end, s.get(p..end).unwrap_or_default())
}

impl Tag {
    /// Calls `f` on each extension block, in storage order, until it returns
    /// `false`.
    fn for_each_extension<'a>(&'a self, mut f: impl FnMut(&'a str) -> bool) {
        let mut i = usize::from(self.p_ext);
        while i + 1 < self.s.len() {
            let (end, ext) = get_extension(&self.s, i);
            if !f(ext) || end <= i {
                return;
            }
            i = end;
        }
    }

    /// Returns the extension block of the given type, if present.
    ///
    /// ```
    /// use langtag::Tag;
    ///
    /// let tag = Tag::make("en-x-private-use");
    /// assert_eq!(tag.extension(b'x').map(|e| e.to_string()), Some("x-private-use".into()));
    /// ```
    pub fn extension(&self, singleton: u8) -> Option<Extension> {
        let mut found = None;
        self.for_each_extension(|ext| {
            if ext.as_bytes().first() == Some(&singleton) {
                found = Some(Extension(String::from(ext)));
                false
            } else {
                true
            }
        });
        found
    }

    /// Returns all extension blocks, in ascending order of their singleton with
    /// any private use block last.
    ///
    /// ```
    /// use langtag::Tag;
    ///
    /// let tag = Tag::make("en-u-co-phonebk-a-xyz-x-foo");
    /// let blocks: Vec<_> = tag.extensions().iter().map(|e| e.to_string()).collect();
    /// assert_eq!(blocks, ["a-xyz", "u-co-phonebk", "x-foo"]);
    /// ```
    pub fn extensions(&self) -> Vec<Extension> {
        let mut all = Vec::new();
        self.for_each_extension(|ext| {
            all.push(Extension(String::from(ext)));
            true
        });
        all
    }
}
