// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

//! Lookup and editing of `u` extension keywords in place.
//!
//! Keywords are located by fixed-width positional scanning of the canonical
//! string rather than by tokenizing it. This relies on the canonical form:
//! keys are exactly [`KEY_LENGTH`] characters and sorted, every type component
//! is [`TYPE_MIN_LENGTH`] to [`TYPE_MAX_LENGTH`] characters, and attributes
//! precede keys.

use alloc::string::String;

use tinystr::TinyAsciiStr;

use super::next_extension;
use crate::parser::{parse_extension_block, KEY_LENGTH, TYPE_MAX_LENGTH, TYPE_MIN_LENGTH};
use crate::provider::BakedTables;
use crate::{IdentifierTables, Tag, TagError};

impl Tag {
    /// Locates the type of `key` in the `u` extension.
    ///
    /// Returns `(start, end, has_u)`. If the key is present, `[start, end)` is its
    /// type value. Otherwise `start == end` is the offset at which `-key-type`
    /// (or a new `-u-key-type` block, if `has_u` is `false`) must be inserted to
    /// keep the tag canonical.
    fn find_type_for_key(&self, key: &[u8]) -> (usize, usize, bool) {
        let s = self.s.as_bytes();
        let byte = |i: usize| s.get(i).copied();
        let mut p = usize::from(self.p_ext);
        if key.len() != KEY_LENGTH || p == s.len() || p == 0 {
            return (p, p, false);
        }

        // Find the `u` block. Blocks are sorted, so a later singleton means there is none.
        p += 1;
        while byte(p) != Some(b'u') {
            if byte(p) > Some(b'u') {
                return (p - 1, p - 1, false);
            }
            p = next_extension(s, p);
            if p == s.len() {
                return (p, p, false);
            }
            p += 1;
        }
        // The dash after the singleton.
        p += 1;

        let mut current_key: &[u8] = &[];
        let mut start = 0;
        loop {
            // p is at the dash before a token.
            let key_end = p + 1 + KEY_LENGTH;
            if byte(key_end) == Some(b'-') {
                if current_key == key {
                    return (start, p, true);
                }
                current_key = s.get(p + 1..key_end).unwrap_or_default();
                if current_key > key {
                    return (p, p, true);
                }
                start = key_end + 1;
                p = start + TYPE_MIN_LENGTH;
            } else {
                // An attribute or a further type component.
                p += 1 + TYPE_MIN_LENGTH;
            }
            let max = (p + TYPE_MAX_LENGTH - TYPE_MIN_LENGTH).min(s.len());
            while p < max && byte(p) != Some(b'-') {
                p += 1;
            }
            // Stop at the end of the tag or at the start of the next block.
            if p >= s.len() || byte(p + 2) == Some(b'-') {
                let p = p.min(s.len());
                if current_key == key {
                    return (start, p, true);
                }
                return (p, p, true);
            }
        }
    }

    /// Returns the type of `key` in the `u` extension, or `""` if it is not set.
    ///
    /// ```
    /// use langtag::Tag;
    ///
    /// let tag = Tag::make("th-u-ca-buddhist-nu-thai");
    /// assert_eq!(tag.type_for_key("nu"), "thai");
    /// assert_eq!(tag.type_for_key("NU"), "thai");
    /// assert_eq!(tag.type_for_key("co"), "");
    /// ```
    pub fn type_for_key(&self, key: &str) -> &str {
        let Ok(key) = TinyAsciiStr::<KEY_LENGTH>::try_from_str(key) else {
            return "";
        };
        let (start, end, _) = self.find_type_for_key(key.to_ascii_lowercase().as_utf8());
        self.s.get(start..end).unwrap_or_default()
    }

    /// Returns a copy of this tag with `key` set to `value` in the `u` extension,
    /// or removed if `value` is empty.
    ///
    /// Removing the last keyword of a `u` block without attributes removes the
    /// block itself. On error, `self` is left as it was.
    ///
    /// # Errors
    ///
    ///  * [`TagError::PrivateUse`] if this is a private use tag;
    ///  * [`TagError::InvalidArguments`] if `key` is not two characters long or a
    ///    non-empty `value` is not three to eight characters long;
    ///  * [`TagError::Syntax`] if `key` or `value` are not well-formed.
    ///
    /// # Examples
    ///
    /// ```
    /// use langtag::Tag;
    /// use writeable::assert_writeable_eq;
    ///
    /// let tag = Tag::make("en-a-xyz-x-foo");
    ///
    /// let tag = tag.set_type_for_key("co", "pinyin").unwrap();
    /// assert_writeable_eq!(tag, "en-a-xyz-u-co-pinyin-x-foo");
    ///
    /// let tag = tag.set_type_for_key("CA", "Buddhist").unwrap();
    /// assert_writeable_eq!(tag, "en-a-xyz-u-ca-buddhist-co-pinyin-x-foo");
    ///
    /// let tag = tag.set_type_for_key("ca", "").unwrap();
    /// let tag = tag.set_type_for_key("co", "").unwrap();
    /// assert_writeable_eq!(tag, "en-a-xyz-x-foo");
    /// ```
    #[inline]
    pub fn set_type_for_key(&self, key: &str, value: &str) -> Result<Tag, TagError> {
        self.set_type_for_key_with(&BakedTables, key, value)
    }

    /// See [`Self::set_type_for_key`]
    ///
    /// `tables` are used to spell out the core of a tag that had no suffix yet.
    pub fn set_type_for_key_with(
        &self,
        tables: &(impl IdentifierTables + ?Sized),
        key: &str,
        value: &str,
    ) -> Result<Tag, TagError> {
        if self.is_private_use() {
            return Err(TagError::PrivateUse);
        }
        if key.len() != KEY_LENGTH {
            return Err(TagError::InvalidArguments);
        }

        if value.is_empty() {
            let key = TinyAsciiStr::<KEY_LENGTH>::try_from_str(key)
                .map_err(|_| TagError::InvalidArguments)?
                .to_ascii_lowercase();
            let (start, end, _) = self.find_type_for_key(key.as_utf8());
            if start == end {
                return Ok(self.clone());
            }
            let s = self.s.as_bytes();
            // Back up over `-key-`.
            let mut start = start - (KEY_LENGTH + 2);
            // Drop a `-u` left without attributes or keywords.
            if (end == s.len() || s.get(end + 2) == Some(&b'-'))
                && start >= 2
                && s.get(start - 2) == Some(&b'-')
            {
                start -= 2;
            }
            return self.splice(start, end, "");
        }

        if !(TYPE_MIN_LENGTH..=TYPE_MAX_LENGTH).contains(&value.len()) {
            return Err(TagError::InvalidArguments);
        }

        // Validate and normalize the pair on its own before touching the tag.
        let mut fragment = String::with_capacity(KEY_LENGTH + TYPE_MAX_LENGTH + 4);
        fragment.push_str("u-");
        fragment.push_str(key);
        fragment.push('-');
        fragment.push_str(value);
        let fragment = parse_extension_block(fragment.as_bytes())?;
        // The fragment is now `u-key-value`, lowercased.
        let pair = fragment.get(2..).unwrap_or_default();
        let key = pair.get(..KEY_LENGTH).unwrap_or_default();
        let value = pair.get(KEY_LENGTH + 1..).unwrap_or_default();

        if self.s.is_empty() {
            let core = self.core_with(tables);
            return Tag::try_compose(self.lang, self.script, self.region, &core, &fragment, 0);
        }

        let (start, end, has_u) = self.find_type_for_key(key.as_bytes());
        if start != end {
            return self.splice(start, end, value);
        }
        let mut insert = String::with_capacity(fragment.len() + 1);
        insert.push('-');
        insert.push_str(if has_u { pair } else { &fragment });
        self.splice(start, start, &insert)
    }

    /// Replaces `[start, end)` of the extensions with `insert`.
    fn splice(&self, start: usize, end: usize, insert: &str) -> Result<Tag, TagError> {
        let head = self.s.get(..start).unwrap_or_default();
        let tail = self.s.get(end..).unwrap_or_default();
        let mut s = String::with_capacity(head.len() + insert.len() + tail.len());
        s.push_str(head);
        s.push_str(insert);
        s.push_str(tail);

        let p_variant = usize::from(self.p_variant);
        let core = s.get(..p_variant).unwrap_or_default();
        let extra = s.get(p_variant + 1..).unwrap_or_default();
        let variants_len = usize::from(self.p_ext) - p_variant;
        Tag::try_compose(self.lang, self.script, self.region, core, extra, variants_len)
    }
}
