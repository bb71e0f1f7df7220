// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use alloc::string::String;
use alloc::vec::Vec;

use tinystr::TinyAsciiStr;

use super::{
    is_alphanumeric, is_language_subtag, is_region_subtag, is_script_subtag, is_singleton,
    is_variant_subtag, push_lowercase, SubtagIterator,
};
use crate::TagError;

/// Length of a Unicode or transform extension key.
pub(crate) const KEY_LENGTH: usize = 2;
/// Shortest component of a key's type value.
pub(crate) const TYPE_MIN_LENGTH: usize = 3;
/// Longest component of a key's type value.
pub(crate) const TYPE_MAX_LENGTH: usize = 8;

/// A `u` attribute or a component of a `u` type or `t` field value.
fn is_type_component(subtag: &[u8]) -> bool {
    (TYPE_MIN_LENGTH..=TYPE_MAX_LENGTH).contains(&subtag.len()) && is_alphanumeric(subtag)
}

fn is_unicode_key(subtag: &[u8]) -> bool {
    subtag.len() == KEY_LENGTH
        && matches!(subtag, [a, b] if a.is_ascii_alphanumeric() && b.is_ascii_alphabetic())
}

fn is_transform_key(subtag: &[u8]) -> bool {
    subtag.len() == KEY_LENGTH
        && matches!(subtag, [a, b] if a.is_ascii_alphabetic() && b.is_ascii_digit())
}

fn is_other_subtag(subtag: &[u8]) -> bool {
    (2..=8).contains(&subtag.len()) && is_alphanumeric(subtag)
}

fn is_private_subtag(subtag: &[u8]) -> bool {
    (1..=8).contains(&subtag.len()) && is_alphanumeric(subtag)
}

fn lowercase<const N: usize>(subtag: &[u8]) -> Result<TinyAsciiStr<N>, TagError> {
    TinyAsciiStr::try_from_utf8(subtag)
        .map(TinyAsciiStr::to_ascii_lowercase)
        .map_err(|_| TagError::Syntax)
}

/// Reads one or more type components into a dash-joined lowercase value.
fn parse_value(iter: &mut SubtagIterator) -> Result<String, TagError> {
    let mut value = String::new();
    while let Some(component) = iter.next_if(is_type_component) {
        if !value.is_empty() {
            value.push('-');
        }
        push_lowercase(&mut value, component);
    }
    if value.is_empty() {
        return Err(TagError::Syntax);
    }
    Ok(value)
}

/// Sorts keywords by key. Of several entries for one key, the first one wins.
fn push_keywords(out: &mut String, mut keywords: Vec<(TinyAsciiStr<KEY_LENGTH>, String)>) {
    keywords.sort_by_key(|(key, _)| *key);
    keywords.dedup_by(|later, earlier| later.0 == earlier.0);
    for (key, value) in &keywords {
        out.push('-');
        out.push_str(key.as_str());
        out.push('-');
        out.push_str(value);
    }
}

fn parse_unicode(iter: &mut SubtagIterator, out: &mut String) -> Result<(), TagError> {
    let mut attributes: Vec<TinyAsciiStr<TYPE_MAX_LENGTH>> = Vec::new();
    while let Some(attribute) = iter.next_if(is_type_component) {
        attributes.push(lowercase(attribute)?);
    }

    let mut keywords = Vec::new();
    while let Some(key) = iter.next_if(is_unicode_key) {
        keywords.push((lowercase(key)?, parse_value(iter)?));
    }

    if attributes.is_empty() && keywords.is_empty() {
        return Err(TagError::Syntax);
    }

    attributes.sort_unstable();
    attributes.dedup();
    for attribute in &attributes {
        out.push('-');
        out.push_str(attribute.as_str());
    }
    push_keywords(out, keywords);
    Ok(())
}

fn parse_transform(iter: &mut SubtagIterator, out: &mut String) -> Result<(), TagError> {
    let mut has_tlang = false;
    if let Some(language) = iter.next_if(is_language_subtag) {
        has_tlang = true;
        out.push('-');
        push_lowercase(out, language);
        if let Some(script) = iter.next_if(is_script_subtag) {
            out.push('-');
            push_lowercase(out, script);
        }
        if let Some(region) = iter.next_if(is_region_subtag) {
            out.push('-');
            push_lowercase(out, region);
        }
        let mut variants: Vec<TinyAsciiStr<8>> = Vec::new();
        while let Some(variant) = iter.next_if(is_variant_subtag) {
            variants.push(lowercase(variant)?);
        }
        variants.sort_unstable();
        variants.dedup();
        for variant in &variants {
            out.push('-');
            out.push_str(variant.as_str());
        }
    }

    let mut fields = Vec::new();
    while let Some(key) = iter.next_if(is_transform_key) {
        fields.push((lowercase(key)?, parse_value(iter)?));
    }

    if !has_tlang && fields.is_empty() {
        return Err(TagError::Syntax);
    }
    push_keywords(out, fields);
    Ok(())
}

fn parse_subtags(
    iter: &mut SubtagIterator,
    out: &mut String,
    pred: fn(&[u8]) -> bool,
) -> Result<(), TagError> {
    let mut count = 0;
    while let Some(subtag) = iter.next_if(pred) {
        out.push('-');
        push_lowercase(out, subtag);
        count += 1;
    }
    if count == 0 {
        return Err(TagError::Syntax);
    }
    Ok(())
}

/// Parses the subtags of one extension block following its `singleton`, which
/// must already be lowercase and written to `out`.
///
/// The block ends at the next singleton or at the end of input. A private use
/// block (`x`) always runs to the end of input.
pub(crate) fn parse_extension_body(
    singleton: u8,
    iter: &mut SubtagIterator,
    out: &mut String,
) -> Result<(), TagError> {
    match singleton {
        b'u' => parse_unicode(iter, out)?,
        b't' => parse_transform(iter, out)?,
        b'x' => parse_subtags(iter, out, is_private_subtag)?,
        _ => parse_subtags(iter, out, is_other_subtag)?,
    }
    match iter.peek() {
        None => Ok(()),
        Some(subtag) if is_singleton(subtag) => Ok(()),
        Some(_) => Err(TagError::Syntax),
    }
}

/// Parses a single extension block, such as `u-co-phonebk`, into its
/// canonical form.
pub(crate) fn parse_extension_block(code_units: &[u8]) -> Result<String, TagError> {
    let mut iter = SubtagIterator::new(code_units);
    let singleton = iter
        .next()
        .filter(|s| is_singleton(s))
        .and_then(|s| s.first())
        .map(u8::to_ascii_lowercase)
        .ok_or(TagError::Syntax)?;
    let mut out = String::new();
    out.push(char::from(singleton));
    parse_extension_body(singleton, &mut iter, &mut out)?;
    if iter.next().is_some() {
        return Err(TagError::Syntax);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unicode() {
        assert_eq!(
            parse_extension_block(b"U-CO-phonebk-CA-buddhist").as_deref(),
            Ok("u-ca-buddhist-co-phonebk")
        );
        assert_eq!(
            parse_extension_block(b"u-foo-bar-foo-nu-thai").as_deref(),
            Ok("u-bar-foo-nu-thai")
        );
        assert_eq!(
            parse_extension_block(b"u-co-phonebk-co-pinyin").as_deref(),
            Ok("u-co-phonebk")
        );
        assert_eq!(
            parse_extension_block(b"u-ca-islamic-civil").as_deref(),
            Ok("u-ca-islamic-civil")
        );
        assert_eq!(parse_extension_block(b"u"), Err(TagError::Syntax));
        assert_eq!(parse_extension_block(b"u-co"), Err(TagError::Syntax));
        assert_eq!(parse_extension_block(b"u-co-ab"), Err(TagError::Syntax));
        assert_eq!(parse_extension_block(b"u-co-abcdefghi"), Err(TagError::Syntax));
    }

    #[test]
    fn transform() {
        assert_eq!(
            parse_extension_block(b"t-EN-Latn-US-h0-hybrid").as_deref(),
            Ok("t-en-latn-us-h0-hybrid")
        );
        assert_eq!(
            parse_extension_block(b"t-m0-ungegn-h0-hybrid").as_deref(),
            Ok("t-h0-hybrid-m0-ungegn")
        );
        assert_eq!(parse_extension_block(b"t-h0"), Err(TagError::Syntax));
        assert_eq!(parse_extension_block(b"t"), Err(TagError::Syntax));
    }

    #[test]
    fn other_and_private() {
        assert_eq!(parse_extension_block(b"A-XYZ").as_deref(), Ok("a-xyz"));
        assert_eq!(parse_extension_block(b"a-x"), Err(TagError::Syntax));
        assert_eq!(parse_extension_block(b"x-A-bc").as_deref(), Ok("x-a-bc"));
        assert_eq!(parse_extension_block(b"x-abcdefghi"), Err(TagError::Syntax));
    }

    #[test]
    fn whole_input_is_consumed() {
        assert_eq!(parse_extension_block(b"a-xyz-b-foo"), Err(TagError::Syntax));
        assert_eq!(parse_extension_block(b"u-co-phonebk-"), Err(TagError::Syntax));
        assert_eq!(parse_extension_block(b"ab-xyz"), Err(TagError::Syntax));
        assert_eq!(parse_extension_block(b""), Err(TagError::Syntax));
    }
}
