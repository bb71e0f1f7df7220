// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

#![allow(dead_code)]

use langtag::TagError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct ErrorInfo {
    pub error: String,
    pub kind: Option<String>,
    pub subtag: Option<String>,
    /// The tag a best-effort parse still produces.
    pub partial: Option<String>,
}

impl ErrorInfo {
    /// Returns `true` if `err` is the error this fixture describes.
    pub fn matches(&self, err: &TagError) -> bool {
        match err {
            TagError::Syntax => self.error == "Syntax",
            TagError::InvalidArguments => self.error == "InvalidArguments",
            TagError::PrivateUse => self.error == "PrivateUse",
            TagError::NoTld => self.error == "NoTld",
            TagError::UnknownIdentifier { kind, subtag } => {
                self.error == "UnknownIdentifier"
                    && self.kind.as_deref() == Some(kind.to_string().as_str())
                    && self.subtag.as_deref() == Some(subtag.as_str())
            }
            _ => false,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum Outcome {
    String(String),
    Error(ErrorInfo),
}

#[derive(Debug, Deserialize, Clone)]
pub struct TagTest {
    pub input: String,
    pub output: Outcome,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParentTest {
    pub input: String,
    pub chain: Vec<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct KeywordTest {
    pub input: String,
    pub key: String,
    pub value: String,
    pub output: Outcome,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RegionTest {
    pub region: String,
    pub contains: Vec<String>,
    pub excludes: Vec<String>,
}
