// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

mod extension;

pub(crate) use extension::{
    parse_extension_block, parse_extension_body, KEY_LENGTH, TYPE_MAX_LENGTH, TYPE_MIN_LENGTH,
};

use alloc::string::String;
use alloc::vec::Vec;

use tinystr::TinyAsciiStr;

use crate::subtags::{Language, Region, Script, Variant};
use crate::tag::{core_text, Tag};
use crate::{IdentifierTables, TagError};

// Returns the prefix of `slice` up to the first separator.
const fn skip_before_separator(slice: &[u8]) -> &[u8] {
    let mut end = 0;
    #[allow(clippy::indexing_slicing)] // end < slice.len()
    while end < slice.len() && !matches!(slice[end], b'-' | b'_') {
        end += 1;
    }

    // Notice: this slice may be empty for cases like `"en-"` or `"en--US"`
    slice.split_at(end).0
}

// `SubtagIterator` is a helper iterator for [`Tag`] and extension parsing.
//
// The iterator is eager and fallible allowing it to reject invalid slices such as `"-"`, `"-en"`,
// `"en-"` etc: those yield an empty subtag, which no grammar rule accepts.
//
// Both `-` and `_` are accepted as separators.
#[derive(Copy, Clone, Debug)]
pub(crate) struct SubtagIterator<'a> {
    remaining: &'a [u8],
    // Invariant: current is a prefix of remaining
    current: Option<&'a [u8]>,
}

impl<'a> SubtagIterator<'a> {
    pub(crate) const fn new(rest: &'a [u8]) -> Self {
        Self {
            remaining: rest,
            current: Some(skip_before_separator(rest)),
        }
    }

    pub(crate) const fn next_const(mut self) -> (Self, Option<&'a [u8]>) {
        let Some(result) = self.current else {
            return (self, None);
        };

        self.current = if result.len() < self.remaining.len() {
            // If there is more after `result`, by construction `current` starts with a separator
            self.remaining = self.remaining.split_at(result.len() + 1).1;
            Some(skip_before_separator(self.remaining))
        } else {
            None
        };
        (self, Some(result))
    }

    pub(crate) const fn peek(&self) -> Option<&'a [u8]> {
        self.current
    }

    /// Consumes the next subtag if `pred` accepts it.
    pub(crate) fn next_if(&mut self, pred: impl FnOnce(&[u8]) -> bool) -> Option<&'a [u8]> {
        match self.peek() {
            Some(subtag) if pred(subtag) => self.next(),
            _ => None,
        }
    }
}

impl<'a> Iterator for SubtagIterator<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let (s, res) = self.next_const();
        *self = s;
        res
    }
}

pub(crate) fn is_alphanumeric(subtag: &[u8]) -> bool {
    subtag.iter().all(u8::is_ascii_alphanumeric)
}

pub(crate) fn is_language_subtag(subtag: &[u8]) -> bool {
    (2..=3).contains(&subtag.len()) && subtag.iter().all(u8::is_ascii_alphabetic)
}

pub(crate) fn is_script_subtag(subtag: &[u8]) -> bool {
    subtag.len() == 4 && subtag.iter().all(u8::is_ascii_alphabetic)
}

pub(crate) fn is_region_subtag(subtag: &[u8]) -> bool {
    match subtag {
        [a, b] => a.is_ascii_alphabetic() && b.is_ascii_alphabetic(),
        [a, b, c] => a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit(),
        _ => false,
    }
}

pub(crate) fn is_variant_subtag(subtag: &[u8]) -> bool {
    match subtag.len() {
        5..=8 => is_alphanumeric(subtag),
        4 => subtag.first().is_some_and(u8::is_ascii_digit) && is_alphanumeric(subtag),
        _ => false,
    }
}

pub(crate) fn is_singleton(subtag: &[u8]) -> bool {
    matches!(subtag, [b] if b.is_ascii_alphanumeric())
}

pub(crate) fn push_lowercase(out: &mut String, subtag: &[u8]) {
    out.extend(subtag.iter().map(|b| char::from(b.to_ascii_lowercase())));
}

/// Keeps the first error seen while parsing.
struct Errors(Option<TagError>);

impl Errors {
    fn drop_unknown<T>(&mut self, result: Result<T, TagError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                crate::log::debug!("Dropping unknown subtag from language tag: {}", e);
                self.0.get_or_insert(e);
                None
            }
        }
    }
}

/// Parses a tag, returning the best tag that could be built and the first
/// error encountered.
///
/// A syntax error yields the root tag. Unknown identifiers are dropped.
pub(crate) fn parse_tag(
    tables: &(impl IdentifierTables + ?Sized),
    code_units: &[u8],
) -> (Tag, Option<TagError>) {
    let mut errors = Errors(None);
    match parse_tag_inner(tables, code_units, &mut errors) {
        Ok(tag) => (tag, errors.0),
        Err(e) => (Tag::UND, Some(e)),
    }
}

fn parse_tag_inner(
    tables: &(impl IdentifierTables + ?Sized),
    code_units: &[u8],
    errors: &mut Errors,
) -> Result<Tag, TagError> {
    let mut iter = SubtagIterator::new(code_units);

    let mut lang = Language::UND;
    let mut script = None;
    let mut region = None;
    let mut extra = String::new();
    let mut variants_len = 0;

    if iter.next_if(|s| matches!(s, [b'x' | b'X'])).is_some() {
        extra.push('x');
        parse_extension_body(b'x', &mut iter, &mut extra)?;
    } else {
        let subtag = iter.next().ok_or(TagError::Syntax)?;
        if !is_language_subtag(subtag) {
            return Err(TagError::Syntax);
        }
        lang = errors
            .drop_unknown(Language::try_from_utf8_with(tables, subtag))
            .unwrap_or(Language::UND);

        if let Some(subtag) = iter.next_if(is_script_subtag) {
            script = errors.drop_unknown(Script::try_from_utf8_with(tables, subtag));
        }
        if let Some(subtag) = iter.next_if(is_region_subtag) {
            region = errors.drop_unknown(Region::try_from_utf8_with(tables, subtag));
        }

        let mut variants: Vec<TinyAsciiStr<8>> = Vec::new();
        while let Some(subtag) = iter.next_if(is_variant_subtag) {
            if let Some(variant) = errors.drop_unknown(Variant::try_from_utf8_with(tables, subtag)) {
                variants.push(variant.into_tinystr());
            }
        }
        variants.sort_unstable();
        variants.dedup();
        for variant in &variants {
            if !extra.is_empty() {
                extra.push('-');
            }
            extra.push_str(variant.as_str());
            variants_len += 1 + variant.len();
        }

        let mut blocks: Vec<String> = Vec::new();
        let mut private: Option<String> = None;
        while let Some(subtag) = iter.next() {
            if !is_singleton(subtag) {
                return Err(TagError::Syntax);
            }
            let singleton = subtag.first().map_or(0, u8::to_ascii_lowercase);
            if singleton == b'x' {
                let mut block = String::from("x");
                parse_extension_body(b'x', &mut iter, &mut block)?;
                private = Some(block);
                break;
            }
            if blocks.iter().any(|b| b.as_bytes().first() == Some(&singleton)) {
                return Err(TagError::Syntax);
            }
            let mut block = String::new();
            block.push(char::from(singleton));
            parse_extension_body(singleton, &mut iter, &mut block)?;
            blocks.push(block);
        }
        blocks.sort_unstable_by_key(|b| b.as_bytes().first().copied());
        for block in blocks.iter().chain(private.as_ref()) {
            if !extra.is_empty() {
                extra.push('-');
            }
            extra.push_str(block);
        }
    }

    if iter.next().is_some() {
        return Err(TagError::Syntax);
    }

    let core = core_text(tables, lang, script, region);
    Tag::try_compose(lang, script, region, core.as_str(), &extra, variants_len)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::provider::BakedTables;
    use crate::SubtagKind;

    fn slice_to_str(input: &[u8]) -> &str {
        std::str::from_utf8(input).unwrap()
    }

    #[test]
    fn subtag_iterator_peek_test() {
        let slice = "de_at-u-ca-foobar";
        let mut si = SubtagIterator::new(slice.as_bytes());

        assert_eq!(si.peek().map(slice_to_str), Some("de"));
        assert_eq!(si.peek().map(slice_to_str), Some("de"));
        assert_eq!(si.next().map(slice_to_str), Some("de"));

        assert_eq!(si.peek().map(slice_to_str), Some("at"));
        assert_eq!(si.next_if(|s| s.len() == 3), None);
        assert_eq!(si.next_if(|s| s.len() == 2).map(slice_to_str), Some("at"));
    }

    #[test]
    fn subtag_iterator_test() {
        let slice = "";
        let mut si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.next().map(slice_to_str), Some(""));

        let slice = "-en";
        let mut si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.next().map(slice_to_str), Some(""));
        assert_eq!(si.next().map(slice_to_str), Some("en"));
        assert_eq!(si.next(), None);

        let slice = "en-";
        let si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(si.map(slice_to_str).collect::<Vec<_>>(), vec!["en", ""]);

        let slice = "de-at_u-ca-foobar";
        let si = SubtagIterator::new(slice.as_bytes());
        assert_eq!(
            si.map(slice_to_str).collect::<Vec<_>>(),
            vec!["de", "at", "u", "ca", "foobar"]
        );
    }

    #[test]
    fn skip_before_separator_test() {
        assert_eq!(skip_before_separator(b""), b"");
        assert_eq!(skip_before_separator(b"en"), b"en");
        assert_eq!(skip_before_separator(b"en-"), b"en");
        assert_eq!(skip_before_separator(b"en_US"), b"en");
        assert_eq!(skip_before_separator(b"-US"), b"");
    }

    #[test]
    fn shapes() {
        assert!(is_variant_subtag(b"1996"));
        assert!(!is_variant_subtag(b"abcd"));
        assert!(is_variant_subtag(b"fonipa"));
        assert!(!is_variant_subtag(b"toolongxx"));
        assert!(is_region_subtag(b"419"));
        assert!(!is_region_subtag(b"41a"));
        assert!(is_singleton(b"0"));
        assert!(!is_singleton(b"-"));
    }

    #[test]
    fn syntax_errors_yield_root() {
        for input in [
            "", "-", "en-", "-en", "en--US", "e", "english", "i-klingon", "en-US-x", "en-a",
            "en-a-b", "en-u-co", "en-u-ca-gregorian-ca", "en-a-foo-a-bar", "en-t", "en-x-",
            "en-Latn-Latn", "en-ü", "x",
        ] {
            let (tag, err) = parse_tag(&BakedTables, input.as_bytes());
            assert_eq!(err, Some(TagError::Syntax), "{input}");
            assert!(tag.is_root(), "{input}");
        }
    }

    #[test]
    fn unknown_subtags_are_dropped() {
        let (tag, err) = parse_tag(&BakedTables, b"qaa-Qaaa-QM-fooba-u-co-phonebk");
        assert_eq!(tag.to_string(), "und-u-co-phonebk");
        assert_eq!(err, Some(TagError::unknown(SubtagKind::Language, b"qaa")));

        let (tag, err) = parse_tag(&BakedTables, b"de-1901-abcde-1996");
        assert_eq!(tag.to_string(), "de-1901-1996");
        assert_eq!(err, Some(TagError::unknown(SubtagKind::Variant, b"abcde")));
        assert_eq!(tag.variants().len(), 2);
    }

    #[test]
    fn extensions_are_sorted() {
        let (tag, err) = parse_tag(&BakedTables, b"en-x-foo-u-co-phonebk-a-bar-t-hi");
        assert_eq!(err, None);
        assert_eq!(tag.to_string(), "en-x-foo-u-co-phonebk-a-bar-t-hi");

        let (tag, err) = parse_tag(&BakedTables, b"en-u-co-phonebk-a-bar-0-abc-x-foo");
        assert_eq!(err, None);
        assert_eq!(tag.to_string(), "en-0-abc-a-bar-u-co-phonebk-x-foo");
    }

    #[test]
    fn duplicate_variants_are_removed() {
        let (tag, err) = parse_tag(&BakedTables, b"sl-ROZAJ-biske-rozaj");
        assert_eq!(err, None);
        assert_eq!(tag.to_string(), "sl-biske-rozaj");
    }
}
