// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use core::num::NonZeroU16;

use super::{
    IdentifierTables, ParentOverride, REGION_BCP47, REGION_CC_TLD, REGION_USER_ASSIGNED,
};
use crate::subtags::{Language, Region, Script};
use crate::{SubtagKind, TagError};

/// Compiled-in identifier tables covering a subset of CLDR.
///
/// The tables hold the most widely used languages and scripts, every CLDR
/// macro-region, the countries those regions are most often resolved against, and
/// the deprecated ISO 3166 codes. Ids are 1-based indexes into the sorted arrays
/// below.
///
/// # Examples
///
/// ```
/// use langtag::provider::BakedTables;
/// use langtag::subtags::Region;
/// use langtag::IdentifierTables;
///
/// let de = BakedTables.lookup_region(b"DE").expect("DE is baked");
/// assert_eq!(BakedTables.region_m49(de), 276);
/// assert_eq!(Region::try_from_str("276"), Ok(de));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::exhaustive_structs)] // marker type
pub struct BakedTables;

/// Flag for deprecated codes, never reported through [`IdentifierTables::region_flags`].
const DEPRECATED: u8 = 1 << 7;
const PUBLIC_FLAGS: u8 = REGION_BCP47 | REGION_USER_ASSIGNED | REGION_CC_TLD;
const NOT_A_GROUP: u8 = u8::MAX;

struct LanguageRecord {
    code: &'static str,
    script: Script,
    region: Region,
}

struct RegionRecord {
    code: &'static str,
    m49: u16,
    iso3: &'static str,
    flags: u8,
    group: u8,
    within: u64,
}

// Group indexes, one bit each in the containment masks.
const G_001: u8 = 0;
const G_002: u8 = 1;
const G_003: u8 = 2;
const G_005: u8 = 3;
const G_009: u8 = 4;
const G_011: u8 = 5;
const G_013: u8 = 6;
const G_014: u8 = 7;
const G_015: u8 = 8;
const G_017: u8 = 9;
const G_018: u8 = 10;
const G_019: u8 = 11;
const G_021: u8 = 12;
const G_029: u8 = 13;
const G_030: u8 = 14;
const G_034: u8 = 15;
const G_035: u8 = 16;
const G_039: u8 = 17;
const G_053: u8 = 18;
const G_054: u8 = 19;
const G_057: u8 = 20;
const G_061: u8 = 21;
const G_142: u8 = 22;
const G_143: u8 = 23;
const G_145: u8 = 24;
const G_150: u8 = 25;
const G_151: u8 = 26;
const G_154: u8 = 27;
const G_155: u8 = 28;
const G_202: u8 = 29;
const G_419: u8 = 30;
const G_EU: u8 = 31;
const G_EZ: u8 = 32;
const G_QO: u8 = 33;
const G_UN: u8 = 34;
const GROUP_COUNT: usize = 35;

const fn bit(group: u8) -> u64 {
    1 << group
}

const UN: u64 = bit(G_UN);
const EU_UN: u64 = bit(G_EU) | bit(G_UN);
const EU_EZ_UN: u64 = bit(G_EU) | bit(G_EZ) | bit(G_UN);

const fn group(code: &'static str, m49: u16, index: u8, within: u8) -> RegionRecord {
    RegionRecord {
        code,
        m49,
        iso3: "",
        flags: REGION_BCP47,
        group: index,
        within: if within == NOT_A_GROUP { 0 } else { bit(within) },
    }
}

const fn country(code: &'static str, m49: u16, iso3: &'static str, within: u64) -> RegionRecord {
    RegionRecord {
        code,
        m49,
        iso3,
        flags: REGION_BCP47 | REGION_CC_TLD,
        group: NOT_A_GROUP,
        within,
    }
}

const fn special(
    code: &'static str,
    m49: u16,
    iso3: &'static str,
    flags: u8,
    within: u64,
) -> RegionRecord {
    RegionRecord {
        code,
        m49,
        iso3,
        flags: REGION_BCP47 | flags,
        group: NOT_A_GROUP,
        within,
    }
}

// Sorted by code; numeric codes sort before alphabetic ones.
const REGIONS: &[RegionRecord] = &[
    group("001", 1, G_001, NOT_A_GROUP),
    group("002", 2, G_002, G_001),
    group("003", 3, G_003, G_019),
    group("005", 5, G_005, G_419),
    group("009", 9, G_009, G_001),
    group("011", 11, G_011, G_202),
    group("013", 13, G_013, G_419),
    group("014", 14, G_014, G_202),
    group("015", 15, G_015, G_002),
    group("017", 17, G_017, G_202),
    group("018", 18, G_018, G_202),
    group("019", 19, G_019, G_001),
    group("021", 21, G_021, G_003),
    group("029", 29, G_029, G_419),
    group("030", 30, G_030, G_142),
    group("034", 34, G_034, G_142),
    group("035", 35, G_035, G_142),
    group("039", 39, G_039, G_150),
    group("053", 53, G_053, G_009),
    group("054", 54, G_054, G_009),
    group("057", 57, G_057, G_009),
    group("061", 61, G_061, G_009),
    group("142", 142, G_142, G_001),
    group("143", 143, G_143, G_142),
    group("145", 145, G_145, G_142),
    group("150", 150, G_150, G_001),
    group("151", 151, G_151, G_150),
    group("154", 154, G_154, G_150),
    group("155", 155, G_155, G_150),
    group("202", 202, G_202, G_002),
    group("419", 419, G_419, G_019),
    special("AA", 0, "", REGION_USER_ASSIGNED, 0),
    special("AC", 0, "", REGION_CC_TLD, bit(G_QO)),
    country("AD", 20, "AND", bit(G_039) | UN),
    country("AE", 784, "ARE", bit(G_145) | UN),
    country("AF", 4, "AFG", bit(G_034) | UN),
    country("AG", 28, "ATG", bit(G_029) | UN),
    country("AI", 660, "AIA", bit(G_029)),
    country("AL", 8, "ALB", bit(G_039) | UN),
    country("AM", 51, "ARM", bit(G_145) | UN),
    special("AN", 530, "ANT", DEPRECATED, 0),
    country("AO", 24, "AGO", bit(G_017) | UN),
    country("AQ", 10, "ATA", bit(G_QO)),
    country("AR", 32, "ARG", bit(G_005) | UN),
    country("AT", 40, "AUT", bit(G_155) | EU_EZ_UN),
    country("AU", 36, "AUS", bit(G_053) | UN),
    country("AZ", 31, "AZE", bit(G_145) | UN),
    country("BA", 70, "BIH", bit(G_039) | UN),
    country("BD", 50, "BGD", bit(G_034) | UN),
    country("BE", 56, "BEL", bit(G_155) | EU_EZ_UN),
    country("BG", 100, "BGR", bit(G_151) | EU_UN),
    country("BO", 68, "BOL", bit(G_005) | UN),
    country("BR", 76, "BRA", bit(G_005) | UN),
    country("BS", 44, "BHS", bit(G_029) | UN),
    special("BU", 104, "BUR", DEPRECATED, 0),
    country("BW", 72, "BWA", bit(G_018) | UN),
    country("BY", 112, "BLR", bit(G_151) | UN),
    country("BZ", 84, "BLZ", bit(G_013) | UN),
    country("CA", 124, "CAN", bit(G_021) | UN),
    country("CD", 180, "COD", bit(G_017) | UN),
    country("CH", 756, "CHE", bit(G_155) | UN),
    country("CL", 152, "CHL", bit(G_005) | UN),
    country("CM", 120, "CMR", bit(G_017) | UN),
    country("CN", 156, "CHN", bit(G_030) | UN),
    country("CO", 170, "COL", bit(G_005) | UN),
    country("CR", 188, "CRI", bit(G_013) | UN),
    special("CS", 891, "SCG", DEPRECATED, 0),
    country("CU", 192, "CUB", bit(G_029) | UN),
    country("CV", 132, "CPV", bit(G_011) | UN),
    country("CY", 196, "CYP", bit(G_145) | EU_EZ_UN),
    country("CZ", 203, "CZE", bit(G_151) | EU_UN),
    special("DD", 278, "DDR", DEPRECATED, 0),
    country("DE", 276, "DEU", bit(G_155) | EU_EZ_UN),
    special("DG", 0, "", 0, bit(G_QO)),
    country("DK", 208, "DNK", bit(G_154) | EU_UN),
    country("DO", 214, "DOM", bit(G_029) | UN),
    country("DZ", 12, "DZA", bit(G_015) | UN),
    country("EC", 218, "ECU", bit(G_005) | UN),
    country("EE", 233, "EST", bit(G_154) | EU_EZ_UN),
    country("EG", 818, "EGY", bit(G_015) | UN),
    country("ES", 724, "ESP", bit(G_039) | EU_EZ_UN),
    country("ET", 231, "ETH", bit(G_014) | UN),
    RegionRecord {
        code: "EU",
        m49: 967,
        iso3: "",
        flags: REGION_BCP47 | REGION_CC_TLD,
        group: G_EU,
        within: bit(G_001),
    },
    group("EZ", 0, G_EZ, G_001),
    country("FI", 246, "FIN", bit(G_154) | EU_EZ_UN),
    country("FJ", 242, "FJI", bit(G_054) | UN),
    country("FR", 250, "FRA", bit(G_155) | EU_EZ_UN),
    special("FX", 249, "FXX", DEPRECATED, 0),
    country("GB", 826, "GBR", bit(G_154) | UN),
    country("GE", 268, "GEO", bit(G_145) | UN),
    country("GH", 288, "GHA", bit(G_011) | UN),
    country("GQ", 226, "GNQ", bit(G_017) | UN),
    country("GR", 300, "GRC", bit(G_039) | EU_EZ_UN),
    country("GT", 320, "GTM", bit(G_013) | UN),
    country("GW", 624, "GNB", bit(G_011) | UN),
    country("HK", 344, "HKG", bit(G_030)),
    country("HN", 340, "HND", bit(G_013) | UN),
    country("HR", 191, "HRV", bit(G_039) | EU_EZ_UN),
    country("HU", 348, "HUN", bit(G_151) | EU_UN),
    country("ID", 360, "IDN", bit(G_035) | UN),
    country("IE", 372, "IRL", bit(G_154) | EU_EZ_UN),
    country("IL", 376, "ISR", bit(G_145) | UN),
    country("IN", 356, "IND", bit(G_034) | UN),
    country("IQ", 368, "IRQ", bit(G_145) | UN),
    country("IR", 364, "IRN", bit(G_034) | UN),
    country("IS", 352, "ISL", bit(G_154) | UN),
    country("IT", 380, "ITA", bit(G_039) | EU_EZ_UN),
    country("JM", 388, "JAM", bit(G_029) | UN),
    country("JP", 392, "JPN", bit(G_030) | UN),
    country("KE", 404, "KEN", bit(G_014) | UN),
    country("KG", 417, "KGZ", bit(G_143) | UN),
    country("KH", 116, "KHM", bit(G_035) | UN),
    country("KR", 410, "KOR", bit(G_030) | UN),
    country("KZ", 398, "KAZ", bit(G_143) | UN),
    country("LA", 418, "LAO", bit(G_035) | UN),
    country("LK", 144, "LKA", bit(G_034) | UN),
    country("LT", 440, "LTU", bit(G_154) | EU_EZ_UN),
    country("LU", 442, "LUX", bit(G_155) | EU_EZ_UN),
    country("LV", 428, "LVA", bit(G_154) | EU_EZ_UN),
    country("MA", 504, "MAR", bit(G_015) | UN),
    country("MK", 807, "MKD", bit(G_039) | UN),
    country("MM", 104, "MMR", bit(G_035) | UN),
    country("MN", 496, "MNG", bit(G_030) | UN),
    country("MO", 446, "MAC", bit(G_030)),
    country("MX", 484, "MEX", bit(G_013) | UN),
    country("MY", 458, "MYS", bit(G_035) | UN),
    country("MZ", 508, "MOZ", bit(G_014) | UN),
    country("NG", 566, "NGA", bit(G_011) | UN),
    country("NI", 558, "NIC", bit(G_013) | UN),
    country("NL", 528, "NLD", bit(G_155) | EU_EZ_UN),
    country("NO", 578, "NOR", bit(G_154) | UN),
    country("NP", 524, "NPL", bit(G_034) | UN),
    country("NZ", 554, "NZL", bit(G_053) | UN),
    country("PA", 591, "PAN", bit(G_013) | UN),
    country("PE", 604, "PER", bit(G_005) | UN),
    country("PG", 598, "PNG", bit(G_054) | UN),
    country("PH", 608, "PHL", bit(G_035) | UN),
    country("PK", 586, "PAK", bit(G_034) | UN),
    country("PL", 616, "POL", bit(G_151) | EU_UN),
    country("PR", 630, "PRI", bit(G_029)),
    country("PT", 620, "PRT", bit(G_039) | EU_EZ_UN),
    country("PY", 600, "PRY", bit(G_005) | UN),
    RegionRecord {
        code: "QO",
        m49: 961,
        iso3: "",
        flags: REGION_BCP47 | REGION_USER_ASSIGNED,
        group: G_QO,
        within: bit(G_009),
    },
    country("RO", 642, "ROU", bit(G_151) | EU_UN),
    country("RS", 688, "SRB", bit(G_039) | UN),
    country("RU", 643, "RUS", bit(G_151) | UN),
    country("SA", 682, "SAU", bit(G_145) | UN),
    country("SE", 752, "SWE", bit(G_154) | EU_UN),
    country("SG", 702, "SGP", bit(G_035) | UN),
    country("SI", 705, "SVN", bit(G_039) | EU_EZ_UN),
    country("SK", 703, "SVK", bit(G_151) | EU_EZ_UN),
    country("ST", 678, "STP", bit(G_017) | UN),
    special("SU", 810, "SUN", REGION_CC_TLD | DEPRECATED, 0),
    country("SV", 222, "SLV", bit(G_013) | UN),
    country("TH", 764, "THA", bit(G_035) | UN),
    country("TL", 626, "TLS", bit(G_035) | UN),
    special("TP", 626, "TMP", DEPRECATED, 0),
    country("TR", 792, "TUR", bit(G_145) | UN),
    country("TW", 158, "TWN", bit(G_030)),
    country("TZ", 834, "TZA", bit(G_014) | UN),
    country("UA", 804, "UKR", bit(G_151) | UN),
    country("UG", 800, "UGA", bit(G_014) | UN),
    special("UK", 0, "", REGION_CC_TLD | DEPRECATED, 0),
    group("UN", 0, G_UN, G_001),
    country("US", 840, "USA", bit(G_021) | UN),
    country("UY", 858, "URY", bit(G_005) | UN),
    country("UZ", 860, "UZB", bit(G_143) | UN),
    country("VE", 862, "VEN", bit(G_005) | UN),
    country("VN", 704, "VNM", bit(G_035) | UN),
    country("WS", 882, "WSM", bit(G_061) | UN),
    special("XA", 0, "", REGION_USER_ASSIGNED, 0),
    special("XB", 0, "", REGION_USER_ASSIGNED, 0),
    special("XK", 0, "", REGION_USER_ASSIGNED, bit(G_039)),
    special("YD", 720, "YMD", DEPRECATED, 0),
    country("YE", 887, "YEM", bit(G_145) | UN),
    special("YU", 891, "YUG", DEPRECATED, 0),
    country("ZA", 710, "ZAF", bit(G_018) | UN),
    country("ZM", 894, "ZMB", bit(G_014) | UN),
    special("ZR", 180, "ZAR", DEPRECATED, 0),
    country("ZW", 716, "ZWE", bit(G_014) | UN),
    special("ZZ", 0, "", REGION_USER_ASSIGNED, 0),
];

/// For each group, the bits of every group it contains, itself included.
///
/// Derived from the direct `within` edges of [`REGIONS`]. Groups form a tree with
/// exactly one parent edge each, so `GROUP_COUNT` rounds of propagation reach the
/// fixpoint.
#[allow(clippy::indexing_slicing)] // const context
const GROUP_MASKS: [u64; GROUP_COUNT] = {
    let mut masks = [0u64; GROUP_COUNT];
    let mut i = 0;
    while i < REGIONS.len() {
        let g = REGIONS[i].group as usize;
        if g < GROUP_COUNT {
            masks[g] |= 1 << g;
        }
        i += 1;
    }
    let mut round = 0;
    while round < GROUP_COUNT {
        let mut i = 0;
        while i < REGIONS.len() {
            let g = REGIONS[i].group as usize;
            if g < GROUP_COUNT && REGIONS[i].within != 0 {
                let parent = REGIONS[i].within.trailing_zeros() as usize;
                masks[parent] |= masks[g];
            }
            i += 1;
        }
        round += 1;
    }
    masks
};

// Sorted.
const SCRIPTS: &[&str] = &[
    "Arab", "Armn", "Beng", "Cyrl", "Deva", "Ethi", "Geor", "Grek", "Gujr", "Guru", "Hans", "Hant",
    "Hebr", "Jpan", "Khmr", "Knda", "Kore", "Laoo", "Latn", "Mlym", "Mymr", "Sinh", "Taml", "Telu",
    "Thai", "Zyyy", "Zzzz",
];

const fn lang(code: &'static str, script: &str, region: &str) -> LanguageRecord {
    LanguageRecord {
        code,
        script: script_id(script),
        region: region_id(region),
    }
}

// Sorted by code, with the likely script and region of each language.
const LANGUAGES: &[LanguageRecord] = &[
    lang("af", "Latn", "ZA"),
    lang("am", "Ethi", "ET"),
    lang("ar", "Arab", "EG"),
    lang("az", "Latn", "AZ"),
    lang("be", "Cyrl", "BY"),
    lang("bg", "Cyrl", "BG"),
    lang("bn", "Beng", "BD"),
    lang("bs", "Latn", "BA"),
    lang("ca", "Latn", "ES"),
    lang("cs", "Latn", "CZ"),
    lang("cy", "Latn", "GB"),
    lang("da", "Latn", "DK"),
    lang("de", "Latn", "DE"),
    lang("el", "Grek", "GR"),
    lang("en", "Latn", "US"),
    lang("es", "Latn", "ES"),
    lang("et", "Latn", "EE"),
    lang("eu", "Latn", "ES"),
    lang("fa", "Arab", "IR"),
    lang("fi", "Latn", "FI"),
    lang("fil", "Latn", "PH"),
    lang("fr", "Latn", "FR"),
    lang("ga", "Latn", "IE"),
    lang("gl", "Latn", "ES"),
    lang("gu", "Gujr", "IN"),
    lang("ha", "Latn", "NG"),
    lang("he", "Hebr", "IL"),
    lang("hi", "Deva", "IN"),
    lang("hr", "Latn", "HR"),
    lang("hu", "Latn", "HU"),
    lang("hy", "Armn", "AM"),
    lang("id", "Latn", "ID"),
    lang("is", "Latn", "IS"),
    lang("it", "Latn", "IT"),
    lang("ja", "Jpan", "JP"),
    lang("ka", "Geor", "GE"),
    lang("kk", "Cyrl", "KZ"),
    lang("km", "Khmr", "KH"),
    lang("kn", "Knda", "IN"),
    lang("ko", "Kore", "KR"),
    lang("ky", "Cyrl", "KG"),
    lang("lo", "Laoo", "LA"),
    lang("lt", "Latn", "LT"),
    lang("lv", "Latn", "LV"),
    lang("mk", "Cyrl", "MK"),
    lang("ml", "Mlym", "IN"),
    lang("mn", "Cyrl", "MN"),
    lang("mr", "Deva", "IN"),
    lang("ms", "Latn", "MY"),
    lang("my", "Mymr", "MM"),
    lang("nb", "Latn", "NO"),
    lang("ne", "Deva", "NP"),
    lang("nl", "Latn", "NL"),
    lang("nn", "Latn", "NO"),
    lang("no", "Latn", "NO"),
    lang("pa", "Guru", "IN"),
    lang("pl", "Latn", "PL"),
    lang("ps", "Arab", "AF"),
    lang("pt", "Latn", "BR"),
    lang("ro", "Latn", "RO"),
    lang("ru", "Cyrl", "RU"),
    lang("si", "Sinh", "LK"),
    lang("sk", "Latn", "SK"),
    lang("sl", "Latn", "SI"),
    lang("sq", "Latn", "AL"),
    lang("sr", "Cyrl", "RS"),
    lang("sv", "Latn", "SE"),
    lang("sw", "Latn", "TZ"),
    lang("ta", "Taml", "IN"),
    lang("te", "Telu", "IN"),
    lang("th", "Thai", "TH"),
    lang("tr", "Latn", "TR"),
    lang("uk", "Cyrl", "UA"),
    lang("ur", "Arab", "PK"),
    lang("uz", "Latn", "UZ"),
    lang("vi", "Latn", "VN"),
    lang("yue", "Hant", "HK"),
    lang("zh", "Hans", "CN"),
    lang("zu", "Latn", "ZA"),
];

// Likely region for a language written in a script other than its default.
const LANGUAGE_SCRIPT_REGION: &[(&str, &str, &str)] = &[
    ("az", "Arab", "IR"),
    ("pa", "Arab", "PK"),
    ("sr", "Latn", "RS"),
    ("uz", "Arab", "AF"),
    ("yue", "Hans", "CN"),
    ("zh", "Hant", "TW"),
];

// Likely script for a language in a region where it is not written in its default script.
const LANGUAGE_REGION_SCRIPT: &[(&str, &str, &str)] = &[
    ("az", "IR", "Arab"),
    ("pa", "PK", "Arab"),
    ("uz", "AF", "Arab"),
    ("yue", "CN", "Hans"),
    ("zh", "HK", "Hant"),
    ("zh", "MO", "Hant"),
    ("zh", "TW", "Hant"),
];

// Deprecated region and its successor. Regions split into several successors
// (AN, CS, SU, YU) are absent.
const DEPRECATED_REGIONS: &[(&str, &str)] = &[
    ("BU", "MM"),
    ("DD", "DE"),
    ("FX", "FR"),
    ("TP", "TL"),
    ("UK", "GB"),
    ("YD", "YE"),
    ("ZR", "CD"),
];

// Sorted.
const VARIANTS: &[&str] = &[
    "1606nict", "1694acad", "1901", "1959acad", "1994", "1996", "abl1943", "ao1990", "arevela",
    "arevmda", "baku1926", "biske", "bohoric", "boont", "colb1945", "fonipa", "fonupa",
    "fonxsamp", "hepburn", "heploc", "jyutping", "kkcor", "kscor", "lipaw", "monoton", "nedis",
    "njiva", "nulik", "osojs", "oxendict", "pinyin", "polyton", "posix", "rozaj", "rumgr",
    "scotland", "scouse", "solba", "tarask", "uccor", "ucrcor", "valencia", "wadegile",
];

const EN_001_FROM: &[Region] = &[
    region_id("150"),
    region_id("AG"),
    region_id("AI"),
    region_id("AU"),
    region_id("BS"),
    region_id("BW"),
    region_id("BZ"),
    region_id("CM"),
    region_id("CY"),
    region_id("FJ"),
    region_id("GB"),
    region_id("GH"),
    region_id("HK"),
    region_id("IE"),
    region_id("IL"),
    region_id("IN"),
    region_id("JM"),
    region_id("KE"),
    region_id("MO"),
    region_id("MY"),
    region_id("MZ"),
    region_id("NG"),
    region_id("NZ"),
    region_id("PG"),
    region_id("PK"),
    region_id("SG"),
    region_id("TZ"),
    region_id("UG"),
    region_id("WS"),
    region_id("ZA"),
    region_id("ZM"),
    region_id("ZW"),
];

const EN_150_FROM: &[Region] = &[
    region_id("AT"),
    region_id("BE"),
    region_id("CH"),
    region_id("DE"),
    region_id("DK"),
    region_id("FI"),
    region_id("NL"),
    region_id("SE"),
    region_id("SI"),
];

const ES_419_FROM: &[Region] = &[
    region_id("AR"),
    region_id("BO"),
    region_id("BR"),
    region_id("BZ"),
    region_id("CL"),
    region_id("CO"),
    region_id("CR"),
    region_id("CU"),
    region_id("DO"),
    region_id("EC"),
    region_id("GT"),
    region_id("HN"),
    region_id("MX"),
    region_id("NI"),
    region_id("PA"),
    region_id("PE"),
    region_id("PR"),
    region_id("PY"),
    region_id("SV"),
    region_id("US"),
    region_id("UY"),
    region_id("VE"),
];

const PT_PT_FROM: &[Region] = &[
    region_id("AO"),
    region_id("CH"),
    region_id("CV"),
    region_id("FR"),
    region_id("GQ"),
    region_id("GW"),
    region_id("LU"),
    region_id("MO"),
    region_id("MZ"),
    region_id("ST"),
    region_id("TL"),
];

const ZH_HANT_HK_FROM: &[Region] = &[region_id("MO")];

const PARENT_OVERRIDES: &[ParentOverride] = &[
    ParentOverride {
        language: lang_id("en"),
        max_script: script_id("Latn"),
        script: None,
        to_region: region_id("001"),
        from_regions: EN_001_FROM,
    },
    ParentOverride {
        language: lang_id("en"),
        max_script: script_id("Latn"),
        script: None,
        to_region: region_id("150"),
        from_regions: EN_150_FROM,
    },
    ParentOverride {
        language: lang_id("es"),
        max_script: script_id("Latn"),
        script: None,
        to_region: region_id("419"),
        from_regions: ES_419_FROM,
    },
    ParentOverride {
        language: lang_id("pt"),
        max_script: script_id("Latn"),
        script: None,
        to_region: region_id("PT"),
        from_regions: PT_PT_FROM,
    },
    ParentOverride {
        language: lang_id("zh"),
        max_script: script_id("Hant"),
        script: Some(script_id("Hant")),
        to_region: region_id("HK"),
        from_regions: ZH_HANT_HK_FROM,
    },
];

#[allow(clippy::indexing_slicing)] // i < a.len() == b.len()
const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn id_for_index(index: usize) -> NonZeroU16 {
    match NonZeroU16::new(index as u16 + 1) {
        Some(id) => id,
        #[allow(clippy::panic)] // const context
        None => panic!("baked table too large"),
    }
}

#[allow(clippy::panic, clippy::indexing_slicing)] // const context
const fn lang_id(code: &str) -> Language {
    let mut i = 0;
    while i < LANGUAGES.len() {
        if bytes_eq(LANGUAGES[i].code.as_bytes(), code.as_bytes()) {
            return Language::from_raw(id_for_index(i).get());
        }
        i += 1;
    }
    panic!("language missing from baked data")
}

#[allow(clippy::panic, clippy::indexing_slicing)] // const context
const fn script_id(code: &str) -> Script {
    let mut i = 0;
    while i < SCRIPTS.len() {
        if bytes_eq(SCRIPTS[i].as_bytes(), code.as_bytes()) {
            return Script::from_raw(id_for_index(i));
        }
        i += 1;
    }
    panic!("script missing from baked data")
}

#[allow(clippy::panic, clippy::indexing_slicing)] // const context
const fn region_id(code: &str) -> Region {
    let mut i = 0;
    while i < REGIONS.len() {
        if bytes_eq(REGIONS[i].code.as_bytes(), code.as_bytes()) {
            return Region::from_raw(id_for_index(i));
        }
        i += 1;
    }
    panic!("region missing from baked data")
}

fn index_to_id(index: usize) -> Option<NonZeroU16> {
    u16::try_from(index + 1).ok().and_then(NonZeroU16::new)
}

impl BakedTables {
    fn language_record(language: Language) -> Option<&'static LanguageRecord> {
        let index = usize::from(language.into_raw()).checked_sub(1)?;
        LANGUAGES.get(index)
    }

    fn region_record(region: Region) -> Option<&'static RegionRecord> {
        REGIONS.get(usize::from(region.into_raw().get()) - 1)
    }

    fn find_language(code: &str) -> Option<Language> {
        Self.lookup_language(code.as_bytes()).ok()
    }

    fn find_script(code: &str) -> Option<Script> {
        Self.lookup_script(code.as_bytes()).ok()
    }

    fn find_region(code: &str) -> Option<Region> {
        Self.lookup_region(code.as_bytes()).ok()
    }

    /// Returns the code of `language` with a `'static` lifetime.
    pub fn language_code(language: Language) -> &'static str {
        Self::language_record(language).map_or("und", |r| r.code)
    }

    /// Returns the code of `script` with a `'static` lifetime.
    pub fn script_code(script: Script) -> &'static str {
        SCRIPTS
            .get(usize::from(script.into_raw().get()) - 1)
            .copied()
            .unwrap_or("Zzzz")
    }

    /// Returns the code of `region` with a `'static` lifetime.
    pub fn region_code(region: Region) -> &'static str {
        Self::region_record(region).map_or("ZZ", |r| r.code)
    }

    /// Returns the ISO 3166-1 alpha-3 code of `region` with a `'static` lifetime.
    pub fn region_iso3_code(region: Region) -> Option<&'static str> {
        Self::region_record(region)
            .map(|r| r.iso3)
            .filter(|iso3| !iso3.is_empty())
    }

    fn language_script_region(language: Language, script: Script) -> Option<Region> {
        let (l, s) = (Self::language_code(language), Self::script_code(script));
        LANGUAGE_SCRIPT_REGION
            .binary_search_by(|&(rl, rs, _)| (rl, rs).cmp(&(l, s)))
            .ok()
            .and_then(|i| LANGUAGE_SCRIPT_REGION.get(i))
            .and_then(|&(_, _, r)| Self::find_region(r))
    }

    fn language_region_script(language: Language, region: Region) -> Option<Script> {
        let (l, r) = (Self::language_code(language), Self::region_code(region));
        LANGUAGE_REGION_SCRIPT
            .binary_search_by(|&(rl, rr, _)| (rl, rr).cmp(&(l, r)))
            .ok()
            .and_then(|i| LANGUAGE_REGION_SCRIPT.get(i))
            .and_then(|&(_, _, s)| Self::find_script(s))
    }
}

impl IdentifierTables for BakedTables {
    fn lookup_language(&self, code: &[u8]) -> Result<Language, TagError> {
        LANGUAGES
            .binary_search_by(|r| r.code.as_bytes().cmp(code))
            .ok()
            .and_then(index_to_id)
            .map(|id| Language::from_raw(id.get()))
            .ok_or_else(|| TagError::unknown(SubtagKind::Language, code))
    }

    fn lookup_script(&self, code: &[u8]) -> Result<Script, TagError> {
        SCRIPTS
            .binary_search_by(|s| s.as_bytes().cmp(code))
            .ok()
            .and_then(index_to_id)
            .map(Script::from_raw)
            .ok_or_else(|| TagError::unknown(SubtagKind::Script, code))
    }

    fn lookup_region(&self, code: &[u8]) -> Result<Region, TagError> {
        let index = match code {
            [a, b, c] if a.is_ascii_digit() && b.is_ascii_digit() && c.is_ascii_digit() => {
                let m49 = u16::from(a - b'0') * 100 + u16::from(b - b'0') * 10 + u16::from(c - b'0');
                return self.region_from_m49(m49);
            }
            [_, _, _] => REGIONS
                .iter()
                .position(|r| r.flags & DEPRECATED == 0 && r.iso3.as_bytes() == code),
            _ => REGIONS
                .binary_search_by(|r| r.code.as_bytes().cmp(code))
                .ok(),
        };
        index
            .and_then(index_to_id)
            .map(Region::from_raw)
            .ok_or_else(|| TagError::unknown(SubtagKind::Region, code))
    }

    fn region_from_m49(&self, m49: u16) -> Result<Region, TagError> {
        let unknown = || {
            let digits = [
                b'0' + (m49 / 100 % 10) as u8,
                b'0' + (m49 / 10 % 10) as u8,
                b'0' + (m49 % 10) as u8,
            ];
            TagError::unknown(SubtagKind::Region, &digits)
        };
        // Regions without a numeric code carry 0.
        if m49 == 0 {
            return Err(unknown());
        }
        let current = |r: &RegionRecord| r.m49 == m49 && r.flags & DEPRECATED == 0;
        REGIONS
            .iter()
            .position(current)
            .or_else(|| REGIONS.iter().position(|r| r.m49 == m49))
            .and_then(index_to_id)
            .map(Region::from_raw)
            .ok_or_else(unknown)
    }

    fn language_str(&self, language: Language) -> &str {
        Self::language_code(language)
    }

    fn script_str(&self, script: Script) -> &str {
        Self::script_code(script)
    }

    fn region_str(&self, region: Region) -> &str {
        Self::region_code(region)
    }

    fn infer_defaults(
        &self,
        language: Language,
        script: Option<Script>,
        region: Option<Region>,
    ) -> (Language, Option<Script>, Option<Region>) {
        let Some(record) = Self::language_record(language) else {
            if language.is_und() && script.is_none() && region.is_none() {
                // CLDR: und -> en-Latn-US
                return (
                    Self::find_language("en").unwrap_or(language),
                    Self::find_script("Latn"),
                    Self::find_region("US"),
                );
            }
            return (language, script, region);
        };
        let script = script.or_else(|| {
            region
                .and_then(|r| Self::language_region_script(language, r))
                .or(Some(record.script))
        });
        let region = region.or_else(|| match script {
            Some(s) if s != record.script => {
                Self::language_script_region(language, s).or(Some(record.region))
            }
            _ => Some(record.region),
        });
        (language, script, region)
    }

    fn remap_deprecated_region(&self, region: Region) -> Option<Region> {
        let code = Self::region_code(region);
        DEPRECATED_REGIONS
            .binary_search_by(|&(from, _)| from.cmp(code))
            .ok()
            .and_then(|i| DEPRECATED_REGIONS.get(i))
            .and_then(|&(_, to)| Self::find_region(to))
    }

    fn is_known_variant(&self, variant: &str) -> bool {
        VARIANTS.binary_search(&variant).is_ok()
    }

    fn parent_overrides(&self) -> &[ParentOverride] {
        PARENT_OVERRIDES
    }

    fn region_group_index(&self, region: Region) -> usize {
        Self::region_record(region).map_or(usize::MAX, |r| usize::from(r.group))
    }

    fn region_group_masks(&self) -> &[u64] {
        &GROUP_MASKS
    }

    fn region_inclusion_bits(&self, region: Region) -> u64 {
        Self::region_record(region).map_or(0, |r| {
            if usize::from(r.group) < GROUP_COUNT {
                r.within | bit(r.group)
            } else {
                r.within
            }
        })
    }

    fn region_flags(&self, region: Region) -> u8 {
        Self::region_record(region).map_or(0, |r| r.flags & PUBLIC_FLAGS)
    }

    fn region_m49(&self, region: Region) -> u16 {
        Self::region_record(region).map_or(0, |r| r.m49)
    }

    fn region_iso3(&self, region: Region) -> Option<&str> {
        Self::region_iso3_code(region)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted() {
        assert!(LANGUAGES.windows(2).all(|w| w[0].code < w[1].code));
        assert!(SCRIPTS.windows(2).all(|w| w[0] < w[1]));
        assert!(REGIONS.windows(2).all(|w| w[0].code < w[1].code));
        assert!(VARIANTS.windows(2).all(|w| w[0] < w[1]));
        assert!(DEPRECATED_REGIONS.windows(2).all(|w| w[0].0 < w[1].0));
        assert!(LANGUAGE_SCRIPT_REGION
            .windows(2)
            .all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
        assert!(LANGUAGE_REGION_SCRIPT
            .windows(2)
            .all(|w| (w[0].0, w[0].1) < (w[1].0, w[1].1)));
    }

    #[test]
    fn every_group_is_indexed_once() {
        let mut seen = 0u64;
        for r in REGIONS.iter().filter(|r| usize::from(r.group) < GROUP_COUNT) {
            assert_eq!(seen & bit(r.group), 0, "{} reuses a group index", r.code);
            seen |= bit(r.group);
        }
        assert_eq!(seen.count_ones() as usize, GROUP_COUNT);
    }

    #[test]
    fn world_mask_covers_every_group() {
        assert_eq!(GROUP_MASKS[usize::from(G_001)].count_ones() as usize, GROUP_COUNT);
        let europe = GROUP_MASKS[usize::from(G_150)];
        for g in [G_150, G_151, G_154, G_155, G_039] {
            assert_ne!(europe & bit(g), 0);
        }
        assert_eq!(europe & bit(G_EU), 0);
        assert_eq!(GROUP_MASKS[usize::from(G_419)] & bit(G_021), 0);
    }

    #[test]
    fn lookups() {
        let en = BakedTables.lookup_language(b"en").unwrap();
        assert_eq!(BakedTables.language_str(en), "en");
        assert_eq!(
            BakedTables.lookup_language(b"qaa"),
            Err(TagError::unknown(SubtagKind::Language, b"qaa"))
        );

        let latn = BakedTables.lookup_script(b"Latn").unwrap();
        assert_eq!(BakedTables.script_str(latn), "Latn");

        let us = BakedTables.lookup_region(b"US").unwrap();
        assert_eq!(BakedTables.lookup_region(b"840"), Ok(us));
        assert_eq!(BakedTables.lookup_region(b"USA"), Ok(us));
        assert_eq!(BakedTables.region_iso3(us), Some("USA"));

        // Numeric codes shared with a deprecated region resolve to the current one.
        let tl = BakedTables.lookup_region(b"TL").unwrap();
        assert_eq!(BakedTables.region_from_m49(626), Ok(tl));
        assert_eq!(
            BakedTables.region_from_m49(0),
            Err(TagError::unknown(SubtagKind::Region, b"000"))
        );
        assert!(BakedTables.lookup_region(b"000").is_err());
        assert!(BakedTables.region_from_m49(999).is_err());
    }

    #[test]
    fn infer_defaults() {
        let t = BakedTables;
        let zh = t.lookup_language(b"zh").unwrap();
        let hans = t.lookup_script(b"Hans").unwrap();
        let hant = t.lookup_script(b"Hant").unwrap();
        let cn = t.lookup_region(b"CN").unwrap();
        let tw = t.lookup_region(b"TW").unwrap();

        assert_eq!(t.infer_defaults(zh, None, None), (zh, Some(hans), Some(cn)));
        assert_eq!(t.infer_defaults(zh, None, Some(tw)), (zh, Some(hant), Some(tw)));
        assert_eq!(t.infer_defaults(zh, Some(hant), None), (zh, Some(hant), Some(tw)));

        let (en, latn, us) = t.infer_defaults(Language::UND, None, None);
        assert_eq!(t.language_str(en), "en");
        assert_eq!(latn.map(|s| t.script_str(s)), Some("Latn"));
        assert_eq!(us.map(|r| t.region_str(r)), Some("US"));
    }

    #[test]
    fn parent_override_ids_resolve() {
        let o = &PARENT_OVERRIDES[4];
        assert_eq!(BakedTables.language_str(o.language), "zh");
        assert_eq!(BakedTables.region_str(o.to_region), "HK");
        assert_eq!(BakedTables.region_str(o.from_regions[0]), "MO");
    }
}
