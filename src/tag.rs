// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;
use core::str::FromStr;

use tinystr::TinyAsciiStr;

use crate::parser;
use crate::provider::BakedTables;
use crate::subtags::{Language, Region, Script, Variant};
use crate::{IdentifierTables, TagError};

/// Longest possible `language-Script-REG` core: 3 + 1 + 4 + 1 + 3 bytes.
pub(crate) const MAX_CORE_SIZE: usize = 12;

/// Longest suffix a [`Tag`] accepts, so that any core plus the suffix still fits
/// the `u16` offsets.
pub(crate) const MAX_SUFFIX_SIZE: usize = u16::MAX as usize - MAX_CORE_SIZE - 1;

/// A compact [`BCP 47`] language tag.
///
/// The language, script and region are stored as ids. Variants, extensions and
/// private use subtags are kept as canonical text in a single owned buffer, which
/// also holds the core so that the whole tag can be borrowed as one string.
/// Two offsets into that buffer delimit the variants and the extensions.
///
/// A tag without any suffix has an empty buffer and is serialized from its ids.
/// [`Display`](core::fmt::Display) and [`Writeable`](writeable::Writeable) resolve
/// those ids against [`BakedTables`]; a tag built with other tables is written
/// with [`Tag::display_with`].
///
/// [`Tag`] is an immutable value: every transformation returns a new [`Tag`].
///
/// # Examples
///
/// ```
/// use langtag::Tag;
/// use writeable::assert_writeable_eq;
///
/// let tag: Tag = "EN_latn_us-u-CA-buddhist-co-phonebk"
///     .parse()
///     .expect("Failed to parse.");
/// assert_writeable_eq!(tag, "en-Latn-US-u-ca-buddhist-co-phonebk");
///
/// let (language, script, region) = tag.raw();
/// assert_eq!(language.as_str(), "en");
/// assert_eq!(script.map(|s| s.as_str()), Some("Latn"));
/// assert_eq!(region.map(|r| r.as_str()), Some("US"));
/// ```
///
/// [`BCP 47`]: https://www.rfc-editor.org/info/bcp47
#[derive(Default, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    pub(crate) lang: Language,
    pub(crate) script: Option<Script>,
    pub(crate) region: Option<Region>,
    // Offset of the dash before the first variant, or 0 for a private use tag.
    pub(crate) p_variant: u16,
    // Offset of the dash before the first extension.
    pub(crate) p_ext: u16,
    pub(crate) s: String,
}

/// Writes `lang[-script][-region]` into a fixed-size buffer.
pub(crate) fn core_text(
    tables: &(impl IdentifierTables + ?Sized),
    lang: Language,
    script: Option<Script>,
    region: Option<Region>,
) -> TinyAsciiStr<MAX_CORE_SIZE> {
    let mut buf = [0u8; MAX_CORE_SIZE];
    let mut len = 0;
    let mut push = |part: &str| {
        for &b in part.as_bytes() {
            if let Some(slot) = buf.get_mut(len) {
                *slot = b;
                len += 1;
            }
        }
    };
    push(tables.language_str(lang));
    if let Some(script) = script {
        push("-");
        push(tables.script_str(script));
    }
    if let Some(region) = region {
        push("-");
        push(tables.region_str(region));
    }
    TinyAsciiStr::from_utf8_lossy(buf.get(..len).unwrap_or_default(), b'?')
}

impl Tag {
    /// The undetermined tag, `und`.
    ///
    /// This is the root of every [parent chain](Tag::parent).
    pub const UND: Self = Self {
        lang: Language::UND,
        script: None,
        region: None,
        p_variant: 0,
        p_ext: 0,
        s: String::new(),
    };

    /// Builds a tag from its core and the suffix that follows it.
    ///
    /// `extra` is the suffix without its leading dash, and `variants_len` the
    /// length of the variants at its start, counting the dash before each one.
    /// `extra` must be at most [`MAX_SUFFIX_SIZE`] bytes long.
    pub(crate) fn compose(
        lang: Language,
        script: Option<Script>,
        region: Option<Region>,
        core: &str,
        extra: &str,
        variants_len: usize,
    ) -> Self {
        let mut tag = Self {
            lang,
            script,
            region,
            ..Self::UND
        };
        if extra.is_empty() {
            return tag;
        }
        if lang.is_und() && script.is_none() && region.is_none() && extra.starts_with("x-") {
            tag.s = String::from(extra);
            return tag;
        }
        let mut s = String::with_capacity(core.len() + 1 + extra.len());
        s.push_str(core);
        s.push('-');
        s.push_str(extra);
        // Both offsets are bounded by MAX_CORE_SIZE + MAX_SUFFIX_SIZE.
        tag.p_variant = u16::try_from(core.len()).unwrap_or(u16::MAX);
        tag.p_ext = u16::try_from(core.len() + variants_len).unwrap_or(u16::MAX);
        tag.s = s;
        tag
    }

    /// Like [`Tag::compose`], but rejects a suffix that is too long.
    pub(crate) fn try_compose(
        lang: Language,
        script: Option<Script>,
        region: Option<Region>,
        core: &str,
        extra: &str,
        variants_len: usize,
    ) -> Result<Self, TagError> {
        if extra.len() > MAX_SUFFIX_SIZE {
            return Err(TagError::Syntax);
        }
        Ok(Self::compose(lang, script, region, core, extra, variants_len))
    }

    /// The suffix after the core, without its leading dash, and the length of
    /// its variants.
    pub(crate) fn suffix(&self) -> (&str, usize) {
        let p_variant = usize::from(self.p_variant);
        let start = if p_variant == 0 { 0 } else { p_variant + 1 };
        (
            self.s.get(start..).unwrap_or_default(),
            usize::from(self.p_ext) - p_variant,
        )
    }

    /// The core of this tag, `lang[-script][-region]`.
    pub(crate) fn core_with(&self, tables: &(impl IdentifierTables + ?Sized)) -> Cow<'_, str> {
        let p_variant = usize::from(self.p_variant);
        match self.s.get(..p_variant) {
            Some(core) if p_variant > 0 => Cow::Borrowed(core),
            _ => Cow::Owned(String::from(
                core_text(tables, self.lang, self.script, self.region).as_str(),
            )),
        }
    }

    /// Rebuilds the tag around a new core, keeping its suffix.
    pub(crate) fn remake_with(
        &self,
        tables: &(impl IdentifierTables + ?Sized),
        lang: Language,
        script: Option<Script>,
        region: Option<Region>,
    ) -> Self {
        let core = core_text(tables, lang, script, region);
        let (extra, variants_len) = self.suffix();
        Self::compose(lang, script, region, core.as_str(), extra, variants_len)
    }

    /// A constructor which takes a str slice, parses it and
    /// produces a well-formed [`Tag`].
    ///
    /// Any unknown subtag is an error; see [`Tag::parse_best_effort`] to keep
    /// going.
    ///
    /// # Examples
    ///
    /// ```
    /// use langtag::Tag;
    ///
    /// Tag::try_from_str("en-US").expect("Parsing failed");
    /// assert!(Tag::try_from_str("en-US-").is_err());
    /// ```
    #[inline]
    pub fn try_from_str(s: &str) -> Result<Self, TagError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// See [`Self::try_from_str`]
    #[inline]
    pub fn try_from_utf8(code_units: &[u8]) -> Result<Self, TagError> {
        Self::try_from_utf8_with(&BakedTables, code_units)
    }

    /// See [`Self::try_from_str`]
    pub fn try_from_utf8_with(
        tables: &(impl IdentifierTables + ?Sized),
        code_units: &[u8],
    ) -> Result<Self, TagError> {
        match parser::parse_tag(tables, code_units) {
            (tag, None) => Ok(tag),
            (_, Some(e)) => Err(e),
        }
    }

    /// Parses `s`, returning the best tag that could be built along with the
    /// first error encountered.
    ///
    /// Malformed input yields [`Tag::UND`]. Well-formed subtags that are not in
    /// the tables are dropped from the returned tag.
    ///
    /// # Examples
    ///
    /// ```
    /// use langtag::{SubtagKind, Tag, TagError};
    /// use writeable::assert_writeable_eq;
    ///
    /// let (tag, err) = Tag::parse_best_effort("en-QX-fonipa");
    /// assert_writeable_eq!(tag, "en-fonipa");
    /// assert!(matches!(
    ///     err,
    ///     Some(TagError::UnknownIdentifier {
    ///         kind: SubtagKind::Region,
    ///         ..
    ///     })
    /// ));
    ///
    /// let (tag, err) = Tag::parse_best_effort("en--US");
    /// assert!(tag.is_root());
    /// assert_eq!(err, Some(TagError::Syntax));
    /// ```
    #[inline]
    pub fn parse_best_effort(s: &str) -> (Self, Option<TagError>) {
        Self::parse_best_effort_with(&BakedTables, s.as_bytes())
    }

    /// See [`Self::parse_best_effort`]
    pub fn parse_best_effort_with(
        tables: &(impl IdentifierTables + ?Sized),
        code_units: &[u8],
    ) -> (Self, Option<TagError>) {
        parser::parse_tag(tables, code_units)
    }

    /// Parses `s` and returns the best-effort tag, ignoring any error.
    ///
    /// ```
    /// use langtag::Tag;
    /// use writeable::assert_writeable_eq;
    ///
    /// assert_writeable_eq!(Tag::make("de-CH-1901"), "de-CH-1901");
    /// assert_writeable_eq!(Tag::make("de-Qaaa-CH"), "de-CH");
    /// assert_writeable_eq!(Tag::make("de-"), "und");
    /// ```
    pub fn make(s: &str) -> Self {
        Self::parse_best_effort(s).0
    }

    /// Replaces `self` with the tag parsed from `text`.
    ///
    /// On failure the error is returned, but `self` still receives the partial
    /// tag the parser produced, which may be [`Tag::UND`].
    ///
    /// ```
    /// use langtag::{Tag, TagError};
    /// use writeable::assert_writeable_eq;
    ///
    /// let mut tag = Tag::default();
    /// assert!(tag.unmarshal_text(b"fr-QX").is_err());
    /// assert_writeable_eq!(tag, "fr");
    ///
    /// assert_eq!(tag.unmarshal_text(b"fr-"), Err(TagError::Syntax));
    /// assert_writeable_eq!(tag, "und");
    /// ```
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), TagError> {
        let (tag, err) = parser::parse_tag(&BakedTables, text);
        *self = tag;
        match err {
            Some(e) => {
                crate::log::warn!("Stored partial language tag {} after error: {}", self, e);
                Err(e)
            }
            None => Ok(()),
        }
    }

    /// Returns the language, script and region of this tag as stored, without
    /// inferring missing values.
    #[inline]
    pub fn raw(&self) -> (Language, Option<Script>, Option<Region>) {
        (self.lang, self.script, self.region)
    }

    /// The language of this tag.
    #[inline]
    pub fn language(&self) -> Language {
        self.lang
    }

    /// The script of this tag, if set.
    #[inline]
    pub fn script(&self) -> Option<Script> {
        self.script
    }

    /// The region of this tag, if set.
    #[inline]
    pub fn region(&self) -> Option<Region> {
        self.region
    }

    /// Returns `true` if this is the root tag `und`, with no suffix.
    ///
    /// ```
    /// use langtag::Tag;
    ///
    /// assert!(Tag::default().is_root());
    /// assert!(Tag::make("und").is_root());
    /// assert!(!Tag::make("und-x-private").is_root());
    /// assert!(!Tag::make("und-US").is_root());
    /// ```
    pub fn is_root(&self) -> bool {
        self.s.is_empty() && self.lang.is_und() && self.script.is_none() && self.region.is_none()
    }

    /// Returns `true` if this tag consists of a private use block only, such
    /// as `x-klingon`.
    #[inline]
    pub fn is_private_use(&self) -> bool {
        !self.s.is_empty() && self.p_variant == 0
    }

    /// Returns the variants of this tag, in canonical order.
    ///
    /// ```
    /// use langtag::Tag;
    ///
    /// let tag = Tag::make("sl-rozaj-biske-1994");
    /// let variants = tag.variants();
    /// let codes: Vec<_> = variants.iter().map(|v| v.as_str()).collect();
    /// assert_eq!(codes, ["1994", "biske", "rozaj"]);
    /// ```
    pub fn variants(&self) -> Vec<Variant> {
        let start = usize::from(self.p_variant);
        let end = usize::from(self.p_ext);
        self.s
            .get(start..end)
            .unwrap_or_default()
            .split('-')
            .filter(|v| !v.is_empty())
            .map(|v| Variant::from_normalized(TinyAsciiStr::from_utf8_lossy(v.as_bytes(), b'?')))
            .collect()
    }

    /// Returns a copy of this tag with its language replaced.
    ///
    /// ```
    /// use langtag::subtags::Language;
    /// use langtag::Tag;
    /// use writeable::assert_writeable_eq;
    ///
    /// let tag = Tag::make("en-US-u-co-phonebk");
    /// let es: Language = "es".parse().unwrap();
    /// assert_writeable_eq!(tag.with_language(es), "es-US-u-co-phonebk");
    /// assert_writeable_eq!(tag.with_language(Language::UND), "und-US-u-co-phonebk");
    /// ```
    pub fn with_language(&self, language: Language) -> Self {
        self.remake_with(&BakedTables, language, self.script, self.region)
    }

    /// Returns a copy of this tag with its script replaced or removed.
    pub fn with_script(&self, script: Option<Script>) -> Self {
        self.remake_with(&BakedTables, self.lang, script, self.region)
    }

    /// Returns a copy of this tag with its region replaced or removed.
    pub fn with_region(&self, region: Option<Region>) -> Self {
        self.remake_with(&BakedTables, self.lang, self.script, region)
    }

    /// Replaces a deprecated region with its successor.
    ///
    /// ```
    /// use langtag::Tag;
    /// use writeable::assert_writeable_eq;
    ///
    /// assert_writeable_eq!(Tag::make("my-BU").canonicalize(), "my-MM");
    /// assert_writeable_eq!(Tag::make("en-UK-oxendict").canonicalize(), "en-GB-oxendict");
    /// assert_writeable_eq!(Tag::make("sr-CS").canonicalize(), "sr-CS");
    /// ```
    #[inline]
    pub fn canonicalize(&self) -> Self {
        self.canonicalize_with(&BakedTables)
    }

    /// See [`Self::canonicalize`]
    pub fn canonicalize_with(&self, tables: &(impl IdentifierTables + ?Sized)) -> Self {
        match self.region.and_then(|r| tables.remap_deprecated_region(r)) {
            Some(region) => self.remake_with(tables, self.lang, self.script, Some(region)),
            None => self.clone(),
        }
    }

    /// Fills an unset script and region with their most likely values.
    ///
    /// Private use tags are returned unchanged.
    ///
    /// ```
    /// use langtag::Tag;
    /// use writeable::assert_writeable_eq;
    ///
    /// assert_writeable_eq!(Tag::make("zh-TW").maximize(), "zh-Hant-TW");
    /// assert_writeable_eq!(Tag::make("sr-Latn").maximize(), "sr-Latn-RS");
    /// assert_writeable_eq!(Tag::make("und").maximize(), "en-Latn-US");
    /// ```
    #[inline]
    pub fn maximize(&self) -> Self {
        self.maximize_with(&BakedTables)
    }

    /// See [`Self::maximize`]
    pub fn maximize_with(&self, tables: &(impl IdentifierTables + ?Sized)) -> Self {
        if self.is_private_use() {
            return self.clone();
        }
        let (lang, script, region) = tables.infer_defaults(self.lang, self.script, self.region);
        if (lang, script, region) == self.raw() {
            return self.clone();
        }
        self.remake_with(tables, lang, script, region)
    }
}

impl Tag {
    /// Returns a [`Writeable`](writeable::Writeable) for this tag that reads the
    /// codes of its language, script and region from `tables`.
    ///
    /// ```
    /// use langtag::provider::BakedTables;
    /// use langtag::Tag;
    /// use writeable::assert_writeable_eq;
    ///
    /// let tag = Tag::try_from_utf8_with(&BakedTables, b"fr-ca").expect("Parsing failed");
    /// assert_writeable_eq!(tag.display_with(&BakedTables), "fr-CA");
    /// ```
    pub fn display_with<'a, T: IdentifierTables + ?Sized>(
        &'a self,
        tables: &'a T,
    ) -> FormattedTag<'a, T> {
        FormattedTag { tag: self, tables }
    }
}

/// A [`Tag`] paired with the tables its ids resolve against.
///
/// Created by [`Tag::display_with`].
#[derive(Debug)]
pub struct FormattedTag<'a, T: IdentifierTables + ?Sized> {
    tag: &'a Tag,
    tables: &'a T,
}

impl<T: IdentifierTables + ?Sized> writeable::Writeable for FormattedTag<'_, T> {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        let tag = self.tag;
        if !tag.s.is_empty() {
            return sink.write_str(&tag.s);
        }
        sink.write_str(core_text(self.tables, tag.lang, tag.script, tag.region).as_str())
    }

    fn writeable_length_hint(&self) -> writeable::LengthHint {
        let tag = self.tag;
        if !tag.s.is_empty() {
            return writeable::LengthHint::exact(tag.s.len());
        }
        writeable::LengthHint::exact(core_text(self.tables, tag.lang, tag.script, tag.region).len())
    }

    fn write_to_string(&self) -> Cow<'_, str> {
        let tag = self.tag;
        if !tag.s.is_empty() {
            return Cow::Borrowed(&tag.s);
        }
        Cow::Owned(String::from(
            core_text(self.tables, tag.lang, tag.script, tag.region).as_str(),
        ))
    }
}

impl<T: IdentifierTables + ?Sized> core::fmt::Display for FormattedTag<'_, T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeable::Writeable::write_to(self, f)
    }
}

impl writeable::Writeable for Tag {
    fn write_to<W: core::fmt::Write + ?Sized>(&self, sink: &mut W) -> core::fmt::Result {
        writeable::Writeable::write_to(&self.display_with(&BakedTables), sink)
    }

    fn writeable_length_hint(&self) -> writeable::LengthHint {
        writeable::Writeable::writeable_length_hint(&self.display_with(&BakedTables))
    }

    fn write_to_string(&self) -> Cow<'_, str> {
        if !self.s.is_empty() {
            return Cow::Borrowed(&self.s);
        }
        if self.script.is_none() && self.region.is_none() {
            return Cow::Borrowed(self.lang.as_str());
        }
        Cow::Owned(String::from(
            core_text(&BakedTables, self.lang, self.script, self.region).as_str(),
        ))
    }
}

writeable::impl_display_with_writeable!(Tag);

impl core::fmt::Debug for Tag {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        core::fmt::Display::fmt(&self, f)
    }
}

impl FromStr for Tag {
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
    fn core_only() {
        let tag = Tag::try_from_str("en-latn-us").unwrap();
        assert!(tag.s.is_empty());
        assert_eq!((tag.p_variant, tag.p_ext), (0, 0));
        assert_writeable_eq!(tag, "en-Latn-US");

        assert_writeable_eq!(Tag::try_from_str("EN").unwrap(), "en");
        assert_writeable_eq!(Tag::default(), "und");
        assert_eq!(Tag::default(), Tag::UND);
    }

    #[test]
    fn offsets() {
        let tag = Tag::try_from_str("de-CH-1996-1901-u-co-phonebk").unwrap();
        assert_eq!(tag.s, "de-CH-1901-1996-u-co-phonebk");
        assert_eq!(&tag.s[..usize::from(tag.p_variant)], "de-CH");
        assert_eq!(
            &tag.s[usize::from(tag.p_variant)..usize::from(tag.p_ext)],
            "-1901-1996"
        );
        assert_eq!(&tag.s[usize::from(tag.p_ext)..], "-u-co-phonebk");
    }

    #[test]
    fn private_use() {
        let tag = Tag::try_from_str("x-Klingon").unwrap();
        assert!(tag.is_private_use());
        assert!(!tag.is_root());
        assert_eq!((tag.p_variant, tag.p_ext), (0, 0));
        assert_writeable_eq!(tag, "x-klingon");
        assert_writeable_eq!(Tag::try_from_str("und-x-klingon").unwrap(), "x-klingon");
        assert!(!Tag::try_from_str("en-x-klingon").unwrap().is_private_use());
    }

    #[test]
    fn remake_collapses_to_private_use() {
        let tag = Tag::try_from_str("en-x-foo").unwrap();
        let und = tag.with_language(Language::UND);
        assert!(und.is_private_use());
        assert_writeable_eq!(und, "x-foo");

        let en = und.with_language(Language::try_from_str("en").unwrap());
        assert_eq!(en, tag);
    }

    #[test]
    fn remake_shifts_offsets() {
        let tag = Tag::try_from_str("zh-TW-pinyin-u-co-stroke").unwrap();
        let hant = Script::try_from_str("Hant").unwrap();
        let tag = tag.with_script(Some(hant));
        assert_writeable_eq!(tag, "zh-Hant-TW-pinyin-u-co-stroke");
        assert_eq!(
            tag.variants().iter().map(|v| v.as_str()).collect::<Vec<_>>(),
            ["pinyin"]
        );
        assert_eq!(tag.type_for_key("co"), "stroke");

        let tag = tag.with_script(None).with_region(None);
        assert_writeable_eq!(tag, "zh-pinyin-u-co-stroke");
        assert_eq!(tag, Tag::try_from_str("zh-pinyin-u-co-stroke").unwrap());
    }

    #[test]
    fn maximize_keeps_suffix() {
        let tag = Tag::try_from_str("zh-HK-u-nu-hanidec").unwrap();
        assert_writeable_eq!(tag.maximize(), "zh-Hant-HK-u-nu-hanidec");
        let tag = Tag::try_from_str("und-Latn-u-nu-latn").unwrap();
        assert_eq!(tag.maximize(), tag);
    }

    #[test]
    fn suffix_limit() {
        let core = core_text(&BakedTables, Language::UND, None, None);
        assert_eq!(core.as_str(), "und");
        let long = "a".repeat(MAX_SUFFIX_SIZE + 1);
        assert_eq!(
            Tag::try_compose(Language::UND, None, None, core.as_str(), &long, 0),
            Err(TagError::Syntax)
        );
    }
}
