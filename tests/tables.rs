// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use langtag::provider::{BakedTables, ParentOverride};
use langtag::subtags::{Language, Region, Script};
use langtag::{IdentifierTables, Tag, TagError};
use writeable::assert_writeable_eq;

/// The baked data, with Afrikaans published under the code `xx`.
#[derive(Debug)]
struct Renamed;

impl IdentifierTables for Renamed {
    fn lookup_language(&self, code: &[u8]) -> Result<Language, TagError> {
        match code {
            b"xx" => BakedTables.lookup_language(b"af"),
            _ => BakedTables.lookup_language(code),
        }
    }

    fn lookup_script(&self, code: &[u8]) -> Result<Script, TagError> {
        BakedTables.lookup_script(code)
    }

    fn lookup_region(&self, code: &[u8]) -> Result<Region, TagError> {
        BakedTables.lookup_region(code)
    }

    fn region_from_m49(&self, m49: u16) -> Result<Region, TagError> {
        BakedTables.region_from_m49(m49)
    }

    fn language_str(&self, language: Language) -> &str {
        match BakedTables.language_str(language) {
            "af" => "xx",
            code => code,
        }
    }

    fn script_str(&self, script: Script) -> &str {
        BakedTables.script_str(script)
    }

    fn region_str(&self, region: Region) -> &str {
        BakedTables.region_str(region)
    }

    fn infer_defaults(
        &self,
        language: Language,
        script: Option<Script>,
        region: Option<Region>,
    ) -> (Language, Option<Script>, Option<Region>) {
        BakedTables.infer_defaults(language, script, region)
    }

    fn remap_deprecated_region(&self, region: Region) -> Option<Region> {
        BakedTables.remap_deprecated_region(region)
    }

    fn is_known_variant(&self, variant: &str) -> bool {
        BakedTables.is_known_variant(variant)
    }

    fn parent_overrides(&self) -> &[ParentOverride] {
        BakedTables.parent_overrides()
    }

    fn region_group_index(&self, region: Region) -> usize {
        BakedTables.region_group_index(region)
    }

    fn region_group_masks(&self) -> &[u64] {
        BakedTables.region_group_masks()
    }

    fn region_inclusion_bits(&self, region: Region) -> u64 {
        BakedTables.region_inclusion_bits(region)
    }

    fn region_flags(&self, region: Region) -> u8 {
        BakedTables.region_flags(region)
    }

    fn region_m49(&self, region: Region) -> u16 {
        BakedTables.region_m49(region)
    }

    fn region_iso3(&self, region: Region) -> Option<&str> {
        BakedTables.region_iso3(region)
    }
}

#[test]
fn test_core_only_tag_uses_given_tables() {
    let tag = Tag::try_from_utf8_with(&Renamed, b"XX-za").expect("Parsing failed.");
    assert_writeable_eq!(tag.display_with(&Renamed), "xx-ZA");
    assert_eq!(tag.display_with(&Renamed).to_string(), "xx-ZA");
    assert_eq!(tag.language().as_str_with(&Renamed), "xx");

    let tag = Tag::try_from_utf8_with(&Renamed, b"xx").expect("Parsing failed.");
    assert_writeable_eq!(tag.display_with(&Renamed), "xx");
}

#[test]
fn test_tag_with_suffix_uses_given_tables() {
    let tag = Tag::try_from_utf8_with(&Renamed, b"xx-ZA-fonipa").expect("Parsing failed.");
    assert_writeable_eq!(tag.display_with(&Renamed), "xx-ZA-fonipa");
    assert_writeable_eq!(tag, "xx-ZA-fonipa");
    assert_eq!(tag.extensions().len(), 0);
}

#[test]
fn test_parent_chain_uses_given_tables() {
    let tag = Tag::try_from_utf8_with(&Renamed, b"xx-ZA-fonipa").expect("Parsing failed.");
    let chain: Vec<String> = tag
        .parent_chain_with(&Renamed)
        .map(|t| t.display_with(&Renamed).to_string())
        .collect();
    assert_eq!(chain, ["xx-ZA", "xx", "und"]);

    let parent = tag.parent_with(&Renamed);
    assert_writeable_eq!(parent.display_with(&Renamed), "xx-ZA");
}

#[test]
fn test_best_effort_uses_given_tables() {
    let (tag, err) = Tag::parse_best_effort_with(&Renamed, b"xx-QX");
    assert!(matches!(err, Some(TagError::UnknownIdentifier { .. })));
    assert_writeable_eq!(tag.display_with(&Renamed), "xx");
}

#[test]
fn test_region_codes_use_given_tables() {
    let za = Region::try_from_utf8_with(&Renamed, b"ZA").expect("Parsing failed.");
    assert_eq!(za.as_str_with(&Renamed), "ZA");
    assert_eq!(za.m49_with(&Renamed), 710);
    assert_eq!(za.iso3_with(&Renamed), Some("ZAF"));
    assert!(Region::from_m49_with(&Renamed, 0).is_err());
}
