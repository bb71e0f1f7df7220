// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use core::num::NonZeroU16;

use tinystr::TinyAsciiStr;

use crate::provider::{BakedTables, REGION_CC_TLD, REGION_USER_ASSIGNED};
use crate::{IdentifierTables, TagError};

/// A region subtag (examples: `"US"`, `"CN"`, `"AR"`, `"419"` etc.)
///
/// [`Region`] represents a Unicode base language code conformant to the
/// [`unicode_region_id`] field of the Language and Locale Identifier.
///
/// Besides ISO 3166-1 countries, a region may be a UN M49 macro-region (a
/// *group*) such as `"419"` (Latin America and the Caribbean), or one of the
/// groupings CLDR adds, such as `"EU"`. Groups contain countries and other
/// groups, see [`Region::contains`].
///
/// # Examples
///
/// ```
/// use langtag::subtags::Region;
///
/// let region: Region = "DE".parse().expect("Failed to parse a region subtag.");
///
/// // Numeric and alpha-3 codes resolve to the same region.
/// assert_eq!("276".parse::<Region>(), Ok(region));
/// assert_eq!("deu".parse::<Region>(), Ok(region));
/// assert_eq!(region.as_str(), "DE");
/// ```
///
/// [`unicode_region_id`]: https://unicode.org/reports/tr35/#unicode_region_id
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Region(NonZeroU16);

impl Region {
    /// Creates a [`Region`] from a raw id.
    #[inline]
    pub const fn from_raw(raw: NonZeroU16) -> Self {
        Self(raw)
    }

    /// Returns the raw id of this [`Region`].
    #[inline]
    pub const fn into_raw(self) -> NonZeroU16 {
        self.0
    }

    /// A constructor which takes a str slice, parses it and
    /// produces a well-formed [`Region`].
    #[inline]
    pub fn try_from_str(s: &str) -> Result<Self, TagError> {
        Self::try_from_utf8(s.as_bytes())
    }

    /// See [`Self::try_from_str`]
    #[inline]
    pub fn try_from_utf8(code_units: &[u8]) -> Result<Self, TagError> {
        Self::try_from_utf8_with(&BakedTables, code_units)
    }

    /// Parses a region code and resolves it against `tables`.
    ///
    /// Accepts two letters, three digits (UN M49) or three letters
    /// (ISO 3166-1 alpha-3). A numeric code for a country resolves to the
    /// country's alpha-2 region.
    pub fn try_from_utf8_with(
        tables: &(impl IdentifierTables + ?Sized),
        code_units: &[u8],
    ) -> Result<Self, TagError> {
        if !(2..=3).contains(&code_units.len()) {
            return Err(TagError::Syntax);
        }
        let s = TinyAsciiStr::<3>::try_from_utf8(code_units).map_err(|_| TagError::Syntax)?;
        if s.is_ascii_alphabetic() {
            tables.lookup_region(s.to_ascii_uppercase().as_utf8())
        } else if s.len() == 3 && s.is_ascii_numeric() {
            tables.lookup_region(s.as_utf8())
        } else {
            Err(TagError::Syntax)
        }
    }

    /// Resolves a UN M49 numeric code.
    ///
    /// ```
    /// use langtag::subtags::Region;
    ///
    /// assert_eq!(Region::from_m49(419).unwrap().as_str(), "419");
    /// assert_eq!(Region::from_m49(840).unwrap().as_str(), "US");
    /// assert!(Region::from_m49(999).is_err());
    /// ```
    #[inline]
    pub fn from_m49(m49: u16) -> Result<Self, TagError> {
        Self::from_m49_with(&BakedTables, m49)
    }

    /// See [`Self::from_m49`]
    #[inline]
    pub fn from_m49_with(
        tables: &(impl IdentifierTables + ?Sized),
        m49: u16,
    ) -> Result<Self, TagError> {
        tables.region_from_m49(m49)
    }

    /// Returns the code of this region in the baked tables.
    #[inline]
    pub fn as_str(self) -> &'static str {
        BakedTables::region_code(self)
    }

    /// See [`Self::as_str`]
    #[inline]
    pub fn as_str_with(self, tables: &(impl IdentifierTables + ?Sized)) -> &str {
        tables.region_str(self)
    }

    /// Returns `true` if this region is a macro-region containing other regions.
    ///
    /// ```
    /// use langtag::subtags::Region;
    ///
    /// assert!("419".parse::<Region>().unwrap().is_group());
    /// assert!("EU".parse::<Region>().unwrap().is_group());
    /// assert!(!"US".parse::<Region>().unwrap().is_group());
    /// ```
    #[inline]
    pub fn is_group(self) -> bool {
        self.is_group_with(&BakedTables)
    }

    /// See [`Self::is_group`]
    pub fn is_group_with(self, tables: &(impl IdentifierTables + ?Sized)) -> bool {
        tables.region_group_index(self) < tables.region_group_masks().len()
    }

    /// Returns `true` if this region is a country: neither a group nor in the
    /// private use range. `XK` (Kosovo) counts as a country.
    ///
    /// ```
    /// use langtag::subtags::Region;
    ///
    /// assert!("US".parse::<Region>().unwrap().is_country());
    /// assert!("XK".parse::<Region>().unwrap().is_country());
    /// assert!(!"ZZ".parse::<Region>().unwrap().is_country());
    /// assert!(!"150".parse::<Region>().unwrap().is_country());
    /// ```
    #[inline]
    pub fn is_country(self) -> bool {
        self.is_country_with(&BakedTables)
    }

    /// See [`Self::is_country`]
    pub fn is_country_with(self, tables: &(impl IdentifierTables + ?Sized)) -> bool {
        if self.is_group_with(tables) {
            return false;
        }
        !self.is_private_use_with(tables) || tables.region_str(self) == "XK"
    }

    /// Returns `true` if this region lies in the ISO 3166 user-assigned range,
    /// such as `AA`, `QO`, `XK` or `ZZ`.
    #[inline]
    pub fn is_private_use(self) -> bool {
        self.is_private_use_with(&BakedTables)
    }

    /// See [`Self::is_private_use`]
    pub fn is_private_use_with(self, tables: &(impl IdentifierTables + ?Sized)) -> bool {
        tables.region_flags(self) & REGION_USER_ASSIGNED != 0
    }

    /// Returns `true` if this region is `other` or contains it.
    ///
    /// ```
    /// use langtag::subtags::Region;
    ///
    /// let region = |s: &str| s.parse::<Region>().unwrap();
    ///
    /// assert!(region("001").contains(region("150")));
    /// assert!(region("150").contains(region("DE")));
    /// assert!(region("EU").contains(region("DE")));
    /// assert!(!region("EU").contains(region("CH")));
    /// assert!(!region("DE").contains(region("150")));
    /// ```
    #[inline]
    pub fn contains(self, other: Region) -> bool {
        self.contains_with(&BakedTables, other)
    }

    /// See [`Self::contains`]
    pub fn contains_with(self, tables: &(impl IdentifierTables + ?Sized), other: Region) -> bool {
        if self == other {
            return true;
        }
        let masks = tables.region_group_masks();
        let Some(&mask) = masks.get(tables.region_group_index(self)) else {
            return false;
        };
        let bits = tables.region_inclusion_bits(other);
        if tables.region_group_index(other) < masks.len() {
            // Group bitmasks partition the world several ways, so a group is only
            // contained if all of its groups are.
            bits & !mask == 0
        } else {
            bits & mask != 0
        }
    }

    /// Returns the country code top-level domain of this region.
    ///
    /// This is the region itself, except that `GB` maps to `UK`.
    ///
    /// ```
    /// use langtag::subtags::Region;
    /// use langtag::TagError;
    ///
    /// let region = |s: &str| s.parse::<Region>().unwrap();
    ///
    /// assert_eq!(region("GB").tld(), Ok(region("UK")));
    /// assert_eq!(region("DE").tld(), Ok(region("DE")));
    /// assert_eq!(region("EU").tld(), Ok(region("EU")));
    /// assert_eq!(region("419").tld(), Err(TagError::NoTld));
    /// ```
    #[inline]
    pub fn tld(self) -> Result<Region, TagError> {
        self.tld_with(&BakedTables)
    }

    /// See [`Self::tld`]
    pub fn tld_with(self, tables: &(impl IdentifierTables + ?Sized)) -> Result<Region, TagError> {
        let region = if tables.region_str(self) == "GB" {
            tables.lookup_region(b"UK")?
        } else {
            self
        };
        if tables.region_flags(region) & REGION_CC_TLD == 0 {
            return Err(TagError::NoTld);
        }
        Ok(region)
    }

    /// Returns the replacement of a deprecated region, or the region itself.
    ///
    /// Regions that were split into several successors (such as `CS` and `SU`)
    /// are returned unchanged.
    ///
    /// ```
    /// use langtag::subtags::Region;
    ///
    /// let region = |s: &str| s.parse::<Region>().unwrap();
    ///
    /// assert_eq!(region("BU").canonicalize(), region("MM"));
    /// assert_eq!(region("SU").canonicalize(), region("SU"));
    /// ```
    #[inline]
    pub fn canonicalize(self) -> Region {
        self.canonicalize_with(&BakedTables)
    }

    /// See [`Self::canonicalize`]
    pub fn canonicalize_with(self, tables: &(impl IdentifierTables + ?Sized)) -> Region {
        tables.remap_deprecated_region(self).unwrap_or(self)
    }

    /// The UN M49 code of this region, or 0 if it has none.
    #[inline]
    pub fn m49(self) -> u16 {
        self.m49_with(&BakedTables)
    }

    /// See [`Self::m49`]
    #[inline]
    pub fn m49_with(self, tables: &(impl IdentifierTables + ?Sized)) -> u16 {
        tables.region_m49(self)
    }

    /// The ISO 3166-1 alpha-3 code of this region, if it has one.
    #[inline]
    pub fn iso3(self) -> Option<&'static str> {
        BakedTables::region_iso3_code(self)
    }

    /// See [`Self::iso3`]
    #[inline]
    pub fn iso3_with(self, tables: &(impl IdentifierTables + ?Sized)) -> Option<&str> {
        tables.region_iso3(self)
    }
}

super::impl_id_subtag_text!(Region);

#[cfg(test)]
mod tests {
    use super::*;
    use writeable::assert_writeable_eq;

    fn region(s: &str) -> Region {
        Region::try_from_str(s).unwrap()
    }

    #[test]
    fn parse() {
        assert_writeable_eq!(region("us"), "US");
        assert_writeable_eq!(region("419"), "419");
        assert_writeable_eq!(region("840"), "US");
        assert_writeable_eq!(region("Usa"), "US");
        assert_eq!(Region::try_from_str("U"), Err(TagError::Syntax));
        assert_eq!(Region::try_from_str("U1"), Err(TagError::Syntax));
        assert_eq!(Region::try_from_str("12"), Err(TagError::Syntax));
        assert_eq!(Region::try_from_str("1234"), Err(TagError::Syntax));
        assert!(matches!(
            Region::try_from_str("QX"),
            Err(TagError::UnknownIdentifier { .. })
        ));
    }

    #[test]
    fn classification() {
        assert!(region("XK").is_private_use());
        assert!(region("QO").is_private_use());
        assert!(region("QO").is_group());
        assert!(!region("QO").is_country());
        assert!(!region("AA").is_group());
        assert!(!region("AA").is_country());
        assert!(region("BU").is_country());
        assert!(!region("DE").is_private_use());
    }

    #[test]
    fn containment_is_reflexive() {
        for code in ["001", "419", "EU", "US", "ZZ", "XK", "QO", "UK"] {
            assert!(region(code).contains(region(code)), "{code}");
        }
    }

    #[test]
    fn containment() {
        assert!(region("419").contains(region("005")));
        assert!(region("019").contains(region("419")));
        assert!(region("019").contains(region("005")));
        assert!(region("019").contains(region("US")));
        assert!(!region("419").contains(region("US")));
        assert!(region("001").contains(region("EU")));
        assert!(!region("150").contains(region("EU")));
        assert!(!region("EU").contains(region("150")));
        assert!(region("UN").contains(region("US")));
        assert!(!region("UN").contains(region("TW")));
        assert!(region("009").contains(region("AQ")));
        assert!(region("039").contains(region("XK")));
        assert!(!region("US").contains(region("CA")));
        assert!(!region("ZZ").contains(region("US")));
    }

    #[test]
    fn containment_is_transitive() {
        let groups = [
            "001", "002", "003", "005", "009", "011", "013", "014", "015", "017", "018", "019",
            "021", "029", "030", "034", "035", "039", "053", "054", "057", "061", "142", "143",
            "145", "150", "151", "154", "155", "202", "419", "EU", "EZ", "QO", "UN",
        ];
        let leaves = ["US", "DE", "FR", "BR", "JP", "ZA", "AQ", "XK", "HK", "MX"];
        for a in groups.map(region) {
            for b in groups.map(region) {
                if !a.contains(b) {
                    continue;
                }
                for c in groups.iter().chain(leaves.iter()).map(|s| region(s)) {
                    if b.contains(c) {
                        assert!(a.contains(c), "{a} contains {b} contains {c}");
                    }
                }
            }
        }
    }

    #[test]
    fn metadata() {
        assert_eq!(region("US").m49(), 840);
        assert_eq!(region("US").iso3(), Some("USA"));
        assert_eq!(region("419").m49(), 419);
        assert_eq!(region("419").iso3(), None);
        assert_eq!(region("TP").canonicalize(), region("TL"));
        assert_eq!(region("UK").canonicalize(), region("GB"));
        assert_eq!(region("CS").tld(), Err(TagError::NoTld));
        assert_eq!(region("SU").tld(), Ok(region("SU")));
        assert_eq!(region("AC").tld(), Ok(region("AC")));
        assert_eq!(region("XK").tld(), Err(TagError::NoTld));
    }
}
