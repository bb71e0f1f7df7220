// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use crate::extensions::Extension;
use crate::subtags::{Language, Region, Script, Variant};
use crate::Tag;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use writeable::Writeable;

macro_rules! impl_serde_as_str {
    ($name:ident, $expecting:literal) => {
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_str(&self.write_to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct StrVisitor;

                impl serde::de::Visitor<'_> for StrVisitor {
                    type Value = $name;

                    fn expecting(
                        &self,
                        formatter: &mut core::fmt::Formatter<'_>,
                    ) -> core::fmt::Result {
                        write!(formatter, $expecting)
                    }

                    fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
                    where
                        E: serde::de::Error,
                    {
                        $name::try_from_str(s).map_err(serde::de::Error::custom)
                    }
                }

                deserializer.deserialize_str(StrVisitor)
            }
        }
    };
}

impl_serde_as_str!(Tag, "a valid BCP 47 language tag");
impl_serde_as_str!(Language, "a known language subtag");
impl_serde_as_str!(Script, "a known script subtag");
impl_serde_as_str!(Region, "a known region subtag");
impl_serde_as_str!(Variant, "a registered variant subtag");
impl_serde_as_str!(Extension, "a valid extension block");

#[test]
fn json() {
    assert_eq!(
        serde_json::to_string(&Tag::make("en-us-u-co-phonebk")).unwrap(),
        r#""en-US-u-co-phonebk""#
    );
    assert_eq!(
        serde_json::from_str::<Tag>(r#""zh-hant-tw""#).unwrap(),
        Tag::make("zh-Hant-TW")
    );
    assert!(serde_json::from_str::<Tag>(r#""en-a""#).is_err());
    assert!(serde_json::from_str::<Tag>("42").is_err());

    assert_eq!(
        serde_json::to_string(&Language::try_from_str("fr").unwrap()).unwrap(),
        r#""fr""#
    );
    assert!(serde_json::from_str::<Language>(r#""2Xs""#).is_err());

    assert_eq!(
        serde_json::from_str::<Script>(r#""latn""#).unwrap(),
        Script::try_from_str("Latn").unwrap()
    );
    assert_eq!(
        serde_json::to_string(&Region::try_from_str("419").unwrap()).unwrap(),
        r#""419""#
    );
    assert!(serde_json::from_str::<Region>(r#""QQ""#).is_err());

    assert_eq!(
        serde_json::to_string(&Variant::try_from_str("FONIPA").unwrap()).unwrap(),
        r#""fonipa""#
    );
    assert_eq!(
        serde_json::from_str::<Extension>(r#""u-nu-thai""#).unwrap(),
        Extension::try_from_str("u-nu-thai").unwrap()
    );

    #[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug)]
    struct Pair {
        tag: Tag,
        region: Option<Region>,
    }
    let pair = Pair {
        tag: Tag::make("pt-AO"),
        region: Region::try_from_str("PT").ok(),
    };
    let text = serde_json::to_string(&pair).unwrap();
    assert_eq!(text, r#"{"tag":"pt-AO","region":"PT"}"#);
    assert_eq!(serde_json::from_str::<Pair>(&text).unwrap(), pair);
}
