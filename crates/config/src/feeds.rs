use relative_path::RelativePath;

/// Syndication feed locations, relative to the site root.
///
/// A feed set to `None` is not generated.  Omitting a key keeps its default;
/// an explicit `~` in the config file disables it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Feeds {
    pub all_atom: Option<crate::RelPath>,
    pub category_atom: Option<crate::RelPath>,
    pub translation_atom: Option<crate::RelPath>,
    pub author_atom: Option<crate::RelPath>,
    pub author_rss: Option<crate::RelPath>,
}

impl Default for Feeds {
    fn default() -> Self {
        Self {
            all_atom: Some(RelativePath::new("feeds/all.atom.xml").to_owned()),
            category_atom: Default::default(),
            translation_atom: Default::default(),
            author_atom: Default::default(),
            author_rss: Default::default(),
        }
    }
}
