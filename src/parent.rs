// This file is part of langtag. For terms of use, please see the file
// called LICENSE at the top level of the langtag source tree.

use core::iter::FusedIterator;

use crate::provider::{BakedTables, IdentifierTables};
use crate::subtags::{Language, Region, Script};
use crate::Tag;

/// The script `language` is written in when nothing else is known.
fn default_script(tables: &(impl IdentifierTables + ?Sized), language: Language) -> Option<Script> {
    tables.infer_defaults(language, None, None).1
}

fn core_only(lang: Language, script: Option<Script>, region: Option<Region>) -> Tag {
    Tag {
        lang,
        script,
        region,
        ..Tag::UND
    }
}

impl Tag {
    /// Returns the CLDR parent of this tag.
    ///
    /// Variants and extensions are dropped first. A tag without them loses its
    /// region, then its script, unless CLDR redirects the region to a wider
    /// one (`en-GB` to `en-001`). A script that is not the language's default
    /// leads straight to the root. The parent of the root is the root.
    ///
    /// ```
    /// use langtag::Tag;
    /// use writeable::assert_writeable_eq;
    ///
    /// assert_writeable_eq!(Tag::make("en-GB").parent(), "en-001");
    /// assert_writeable_eq!(Tag::make("en-001").parent(), "en");
    /// assert_writeable_eq!(Tag::make("zh-MO").parent(), "zh-Hant-HK");
    /// assert_writeable_eq!(Tag::make("zh-Hant").parent(), "und");
    /// assert_writeable_eq!(Tag::make("de-1901").parent(), "de");
    /// assert_writeable_eq!(Tag::make("und").parent(), "und");
    /// ```
    pub fn parent(&self) -> Tag {
        self.parent_with(&BakedTables)
    }

    /// [`Tag::parent`] against custom tables.
    pub fn parent_with(&self, tables: &(impl IdentifierTables + ?Sized)) -> Tag {
        let (lang, script, region) = self.raw();

        if !self.s.is_empty() {
            if region.is_none()
                && script.is_some()
                && !lang.is_und()
                && default_script(tables, lang) == script
            {
                return core_only(lang, None, None);
            }
            return core_only(lang, script, region);
        }

        if lang.is_und() {
            return Tag::UND;
        }

        match (script, region) {
            (_, Some(region)) => {
                let max_script =
                    script.or_else(|| tables.infer_defaults(lang, None, Some(region)).1);
                let redirect = tables.parent_overrides().iter().find(|o| {
                    o.language == lang
                        && Some(o.max_script) == max_script
                        && o.from_regions.contains(&region)
                });
                if let Some(o) = redirect {
                    return core_only(lang, o.script, Some(o.to_region));
                }
                if default_script(tables, lang) != max_script {
                    core_only(lang, max_script, None)
                } else {
                    core_only(lang, None, None)
                }
            }
            (Some(_), None) => {
                if default_script(tables, lang) != script {
                    Tag::UND
                } else {
                    core_only(lang, None, None)
                }
            }
            (None, None) => Tag::UND,
        }
    }

    /// Returns an iterator over the ancestors of this tag, from its parent up to
    /// and including the root.
    ///
    /// The chain of the root itself is empty.
    ///
    /// ```
    /// use langtag::Tag;
    ///
    /// let chain: Vec<String> = Tag::make("en-GB-oxendict")
    ///     .parent_chain()
    ///     .map(|t| t.to_string())
    ///     .collect();
    /// assert_eq!(chain, ["en-GB", "en-001", "en", "und"]);
    ///
    /// assert_eq!(Tag::default().parent_chain().count(), 0);
    /// ```
    pub fn parent_chain(&self) -> ParentChain<'static> {
        self.parent_chain_with(&BakedTables)
    }

    /// [`Tag::parent_chain`] against custom tables.
    pub fn parent_chain_with<'t, T: IdentifierTables + ?Sized>(
        &self,
        tables: &'t T,
    ) -> ParentChain<'t, T> {
        ParentChain {
            tables,
            current: Some(self.clone()),
        }
    }
}

/// Iterator over the ancestors of a [`Tag`].
///
/// Created by [`Tag::parent_chain`].
#[derive(Debug)]
pub struct ParentChain<'t, T: IdentifierTables + ?Sized = BakedTables> {
    tables: &'t T,
    current: Option<Tag>,
}

impl<T: IdentifierTables + ?Sized> Iterator for ParentChain<'_, T> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        let current = self.current.take()?;
        if current.is_root() {
            return None;
        }
        let parent = current.parent_with(self.tables);
        self.current = Some(parent.clone());
        Some(parent)
    }
}

impl<T: IdentifierTables + ?Sized> FusedIterator for ParentChain<'_, T> {}
