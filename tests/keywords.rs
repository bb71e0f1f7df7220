// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

mod fixtures;

use langtag::Tag;
use writeable::*;

#[test]
fn test_keyword_fixtures() {
    let tests: Vec<fixtures::KeywordTest> =
        serde_json::from_str(include_str!("fixtures/keywords.json"))
            .expect("Failed to read a fixture");
    for test in tests {
        let tag = Tag::try_from_str(&test.input).expect("Parsing failed.");
        let before = tag.clone();
        let result = tag.set_type_for_key(&test.key, &test.value);
        assert_eq!(tag, before, "{} was modified", test.input);
        match test.output {
            fixtures::Outcome::String(s) => {
                let updated = result.expect("Setting the key failed.");
                assert_writeable_eq!(updated, s, "{}", test.input);
                assert_eq!(
                    updated.type_for_key(&test.key),
                    test.value.to_ascii_lowercase(),
                    "{}",
                    test.input
                );
                // The edited tag is canonical.
                assert_eq!(Tag::try_from_str(&s), Ok(updated));
            }
            fixtures::Outcome::Error(err) => {
                let e = result.expect_err("Setting the key succeeded.");
                assert!(err.matches(&e), "{}: {:?}", test.input, e);
            }
        }
    }
}

const TAGS: &[&str] = &[
    "en",
    "en-US",
    "de-CH-1901",
    "en-a-xyz",
    "en-x-foo-bar",
    "en-u-attr-ca-buddhist",
    "en-u-ca-islamic-civil-nu-arab",
    "th-TH-u-nu-thai-t-hi-h0-hybrid-x-priv",
];

const KEYS: &[&str] = &["ca", "co", "nu", "zz"];

const VALUES: &[&str] = &["abc", "pinyin", "gregory", "abcdefgh"];

#[test]
fn test_set_then_get() {
    for input in TAGS {
        let tag = Tag::make(input);
        for key in KEYS {
            for value in VALUES {
                let updated = tag.set_type_for_key(key, value).expect("Setting the key failed.");
                assert_eq!(updated.type_for_key(key), *value, "{input} {key}={value}");
                for other in KEYS.iter().filter(|k| *k != key) {
                    assert_eq!(
                        updated.type_for_key(other),
                        tag.type_for_key(other),
                        "{input} {key}={value}"
                    );
                }
                assert_eq!(
                    Tag::make(&updated.write_to_string()),
                    updated,
                    "{input} {key}={value}"
                );
            }
        }
    }
}

#[test]
fn test_set_then_delete() {
    for input in TAGS {
        let tag = Tag::make(input);
        for key in KEYS {
            let deleted = tag
                .set_type_for_key(key, "gregory")
                .and_then(|t| t.set_type_for_key(key, ""))
                .expect("Editing the key failed.");
            assert_eq!(deleted.type_for_key(key), "", "{input} {key}");
            if tag.type_for_key(key).is_empty() {
                assert_eq!(deleted, tag, "{input} {key}");
            }
        }
    }

    let tag = Tag::make("en-u-co-phonebk");
    let tag = tag.set_type_for_key("co", "").expect("Deleting the key failed.");
    assert_writeable_eq!(tag, "en");
    assert_eq!(tag.extension(b'u'), None);

    let tag = Tag::make("en-u-attr-co-phonebk");
    let tag = tag.set_type_for_key("co", "").expect("Deleting the key failed.");
    assert_writeable_eq!(tag, "en-u-attr");
}

#[test]
fn test_keyword_examples() {
    let tag = Tag::make("en-u-co-phonebk");
    assert_writeable_eq!(
        tag.set_type_for_key("co", "pinyin").expect("Setting the key failed."),
        "en-u-co-pinyin"
    );

    let tag = Tag::make("en");
    assert_writeable_eq!(
        tag.set_type_for_key("co", "pinyin").expect("Setting the key failed."),
        "en-u-co-pinyin"
    );
}
