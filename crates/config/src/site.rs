#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[serde(rename_all = "snake_case")]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct Site {
    pub author: Option<String>,
    pub name: Option<String>,
    pub url: Option<String>,
    pub timezone: String,
    pub default_language: String,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub favicon: Option<String>,
    pub logo: Option<String>,
    pub copyright_year: Option<i32>,
    pub cc_license: bool,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            author: Default::default(),
            name: Default::default(),
            url: Default::default(),
            timezone: "UTC".to_owned(),
            default_language: "en".to_owned(),
            title: Default::default(),
            subtitle: Default::default(),
            description: Default::default(),
            favicon: Default::default(),
            logo: Default::default(),
            copyright_year: Default::default(),
            cc_license: false,
        }
    }
}
