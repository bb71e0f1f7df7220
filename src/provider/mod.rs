// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

//! Data consumed by the tag algorithms.
//!
//! The algorithms in this crate never own any locale data. Everything they need
//! (code lookups, likely subtags, the CLDR parent overrides and the region
//! containment bitsets) is read through the [`IdentifierTables`] trait.
//!
//! [`BakedTables`] is the compiled-in implementation used by every method that
//! does not take tables explicitly. Its data is `static`, is never mutated, and
//! may be shared freely across threads.

mod baked;

pub use baked::BakedTables;

use crate::subtags::{Language, Region, Script};
use crate::TagError;

/// The region is a valid BCP 47 region subtag.
pub const REGION_BCP47: u8 = 1 << 0;
/// The region lies in the ISO 3166 user-assigned (private use) range.
pub const REGION_USER_ASSIGNED: u8 = 1 << 1;
/// The region has a country code top-level domain.
pub const REGION_CC_TLD: u8 = 1 << 2;

/// One irregular CLDR parent grouping.
///
/// A tag `language-region` whose effective script is `max_script` and whose region
/// is listed in `from_regions` has `language[-script]-to_region` as its parent,
/// instead of having its region stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)] // plain data record
pub struct ParentOverride {
    /// The language the override applies to.
    pub language: Language,
    /// The effective (explicit or inferred) script the override applies to.
    pub max_script: Script,
    /// The script of the resulting parent, if it keeps one.
    pub script: Option<Script>,
    /// The region of the resulting parent.
    pub to_region: Region,
    /// The regions redirected to `to_region`.
    pub from_regions: &'static [Region],
}

/// Read-only lookup service for language, script and region codes and the
/// relationship tables built on them.
///
/// Implementations must be safe for unsynchronized concurrent reads, which in
/// practice means they are built once and never mutated.
///
/// Codes passed to the `lookup_*` methods are already well-formed and
/// case-normalized: languages lowercase, scripts titlecase, regions uppercase
/// (or three ASCII digits).
pub trait IdentifierTables {
    /// Resolves a language code other than `und`.
    fn lookup_language(&self, code: &[u8]) -> Result<Language, TagError>;

    /// Resolves a script code.
    fn lookup_script(&self, code: &[u8]) -> Result<Script, TagError>;

    /// Resolves an alpha-2, alpha-3 or numeric region code.
    fn lookup_region(&self, code: &[u8]) -> Result<Region, TagError>;

    /// Resolves a UN M49 numeric code.
    fn region_from_m49(&self, m49: u16) -> Result<Region, TagError>;

    /// Returns the canonical code of `language`, `"und"` for [`Language::UND`].
    fn language_str(&self, language: Language) -> &str;

    /// Returns the canonical code of `script`.
    fn script_str(&self, script: Script) -> &str;

    /// Returns the canonical code of `region`.
    fn region_str(&self, region: Region) -> &str;

    /// Fills an unset script and region with the most likely values for the
    /// given subtags. Subtags that are already set are never changed.
    fn infer_defaults(
        &self,
        language: Language,
        script: Option<Script>,
        region: Option<Region>,
    ) -> (Language, Option<Script>, Option<Region>);

    /// Returns the replacement of a deprecated region, or `None` if `region` is
    /// current or was split into several successors.
    fn remap_deprecated_region(&self, region: Region) -> Option<Region>;

    /// Returns whether the lowercase `variant` is in the variant registry.
    fn is_known_variant(&self, variant: &str) -> bool;

    /// The CLDR parent overrides.
    fn parent_overrides(&self) -> &[ParentOverride];

    /// Returns the containment group index of `region`.
    ///
    /// The region is a group iff the index is in range for
    /// [`region_group_masks`](Self::region_group_masks).
    fn region_group_index(&self, region: Region) -> usize;

    /// For each group index, the set of groups (as bits of group indexes) that the
    /// group contains, itself included.
    fn region_group_masks(&self) -> &[u64];

    /// The set of groups `region` is a direct member of, plus its own bit if it
    /// is a group.
    fn region_inclusion_bits(&self, region: Region) -> u64;

    /// The classification flags of `region`, a combination of [`REGION_BCP47`],
    /// [`REGION_USER_ASSIGNED`] and [`REGION_CC_TLD`].
    fn region_flags(&self, region: Region) -> u8;

    /// The UN M49 code of `region`, or 0 if it has none.
    fn region_m49(&self, region: Region) -> u16;

    /// The ISO 3166-1 alpha-3 code of `region`, if it has one.
    fn region_iso3(&self, region: Region) -> Option<&str>;
}
