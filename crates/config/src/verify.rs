//! Static checks for a loaded [`Config`].
//!
//! These are lint-level checks: everything here would otherwise surface as a
//! broken build or broken output in the site generator consuming the config.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::Config;
use crate::Status;

static TIMEZONE_REF: LazyLock<regex::Regex> = LazyLock::new(|| {
    regex::Regex::new(r"^[A-Za-z][A-Za-z0-9_+-]*(/[A-Za-z0-9_+-]+)*$").unwrap()
});

static VERIFY_BASE: LazyLock<url::Url> =
    LazyLock::new(|| url::Url::parse("https://relative.invalid/").unwrap());

/// Check `config` against the constraints the site generator assumes.
///
/// Returns one entry per problem found; an empty result means the
/// configuration is clean.
pub fn verify(config: &Config) -> Vec<Status> {
    let mut problems = Vec::new();

    require(&mut problems, "site.author", config.site.author.as_deref());
    require(&mut problems, "site.name", config.site.name.as_deref());
    require(&mut problems, "site.url", config.site.url.as_deref());

    if let Some(url) = config.site.url.as_deref() {
        if !url.is_empty() && !is_absolute_url(url) {
            problems.push(invalid_url("site.url", url));
        }
    }
    check_url_ref(&mut problems, "site.favicon", config.site.favicon.as_deref());
    check_url_ref(&mut problems, "site.logo", config.site.logo.as_deref());

    if !TIMEZONE_REF.is_match(&config.site.timezone) {
        problems.push(
            Status::new("Invalid timezone")
                .context_with(|c| c.insert("Value", config.site.timezone.clone())),
        );
    }

    let mut seen = HashSet::new();
    for (index, item) in config.menu.items.iter().enumerate() {
        let field = format!("menu.items[{index}]");
        check_pair(&mut problems, &field, &item.label, &item.url);
        if !item.label.is_empty() && !seen.insert(item.label.as_str()) {
            problems.push(
                Status::new("Duplicate menu label")
                    .context_with(|c| c.insert("Label", item.label.clone())),
            );
        }
    }
    for (index, link) in config.links.iter().enumerate() {
        let field = format!("links[{index}]");
        check_pair(&mut problems, &field, &link.label, &link.url);
    }
    for (index, social) in config.social.iter().enumerate() {
        let field = format!("social[{index}]");
        check_pair(&mut problems, &field, &social.platform, &social.url);
    }

    if config.pagination.per_page < 1 {
        problems.push(
            Status::new("Pagination size must be a positive integer")
                .context_with(|c| c.insert("Value", config.pagination.per_page.to_string())),
        );
    }

    if config.source.as_str().is_empty() {
        problems.push(missing("source"));
    }
    for (index, dir) in config.static_dirs.iter().enumerate() {
        if dir.as_str().is_empty() {
            problems.push(missing(&format!("static_dirs[{index}]")));
        }
    }

    problems
}

fn require(problems: &mut Vec<Status>, field: &str, value: Option<&str>) {
    match value {
        Some(value) if !value.is_empty() => {}
        _ => problems.push(missing(field)),
    }
}

fn check_pair(problems: &mut Vec<Status>, field: &str, label: &str, url: &str) {
    if label.is_empty() {
        problems.push(missing(&format!("{field}.label")));
    }
    if !is_url_ref(url) {
        problems.push(invalid_url(&format!("{field}.url"), url));
    }
}

fn check_url_ref(problems: &mut Vec<Status>, field: &str, value: Option<&str>) {
    if let Some(value) = value {
        if !is_url_ref(value) {
            problems.push(invalid_url(field, value));
        }
    }
}

fn missing(field: &str) -> Status {
    Status::new("Missing required setting").context_with(|c| c.insert("Field", field.to_owned()))
}

fn invalid_url(field: &str, value: &str) -> Status {
    Status::new("Malformed URL").context_with(|c| {
        c.insert("Field", field.to_owned())
            .insert("Value", value.to_owned())
    })
}

/// An absolute URL, accepting the protocol-relative form (`//host/path`).
fn is_absolute_url(value: &str) -> bool {
    let value = if let Some(rest) = value.strip_prefix("//") {
        format!("https://{rest}")
    } else {
        value.to_owned()
    };
    match url::Url::parse(&value) {
        Ok(url) => url.has_host() || url.cannot_be_a_base(),
        Err(_) => false,
    }
}

/// Any well-formed URL reference: absolute, protocol-relative, or relative.
fn is_url_ref(value: &str) -> bool {
    if value.is_empty() {
        return false;
    }
    if value.starts_with("//") {
        return is_absolute_url(value);
    }
    match url::Url::parse(value) {
        Ok(_) => true,
        Err(url::ParseError::RelativeUrlWithoutBase) => VERIFY_BASE.join(value).is_ok(),
        Err(_) => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::MenuItem;
    use crate::SocialLink;

    fn valid_config() -> Config {
        let mut config = Config::default();
        config.site.author = Some("R4nd0m 6uy".to_owned());
        config.site.name = Some("R4nd0m's Blog".to_owned());
        config.site.url = Some("https://www.r4nd0m6uy.ch".to_owned());
        config
    }

    #[test]
    fn default_config_missing_identity() {
        let problems = verify(&Config::default());
        assert_eq!(problems.len(), 3);
    }

    #[test]
    fn valid_config_is_clean() {
        let problems = verify(&valid_config());
        assert!(problems.is_empty(), "{problems:#?}");
    }

    #[test]
    fn protocol_relative_urls_accepted() {
        let mut config = valid_config();
        config.site.logo = Some("//en.gravatar.com/userimage/6fb72a38.png?size=200".to_owned());
        config.social.push(SocialLink::new(
            "rss",
            "//r4nd0m6uy.ch/feeds/all.atom.xml",
        ));
        assert!(verify(&config).is_empty());
    }

    #[test]
    fn site_url_must_be_absolute() {
        let mut config = valid_config();
        config.site.url = Some("/blog".to_owned());
        assert_eq!(verify(&config).len(), 1);
    }

    #[test]
    fn menu_urls_may_be_site_relative() {
        let mut config = valid_config();
        config.menu.items = vec![
            MenuItem::new("Archives", "/archives.html"),
            MenuItem::new("Categories", "/categories.html"),
            MenuItem::new("Tags", "/tags.html"),
        ];
        assert!(verify(&config).is_empty());
    }

    #[test]
    fn empty_menu_label_rejected() {
        let mut config = valid_config();
        config.menu.items = vec![MenuItem::new("", "/archives.html")];
        assert_eq!(verify(&config).len(), 1);
    }

    #[test]
    fn duplicate_menu_labels_rejected() {
        let mut config = valid_config();
        config.menu.items = vec![
            MenuItem::new("Archives", "/archives.html"),
            MenuItem::new("Archives", "/old-archives.html"),
        ];
        assert_eq!(verify(&config).len(), 1);
    }

    #[test]
    fn empty_link_label_rejected() {
        let mut config = valid_config();
        config.links = vec![MenuItem::new("", "https://lwn.net")];
        assert_eq!(verify(&config).len(), 1);
    }

    #[test]
    fn malformed_link_url_rejected() {
        let mut config = valid_config();
        config.links = vec![MenuItem::new("LWN", "https://")];
        assert_eq!(verify(&config).len(), 1);

        config.links = vec![MenuItem::new("LWN", "https://lwn.net")];
        assert!(verify(&config).is_empty());
    }

    #[test]
    fn empty_social_platform_rejected() {
        let mut config = valid_config();
        config.social = vec![SocialLink::new("", "https://github.com/r4nd0m6uy")];
        assert_eq!(verify(&config).len(), 1);
    }

    #[test]
    fn empty_source_rejected() {
        let mut config = valid_config();
        config.source = relative_path::RelativePath::new("").to_owned();
        assert_eq!(verify(&config).len(), 1);
    }

    #[test]
    fn empty_static_dir_rejected() {
        let mut config = valid_config();
        config
            .static_dirs
            .push(relative_path::RelativePath::new("").to_owned());
        assert_eq!(verify(&config).len(), 1);
    }

    #[test]
    fn malformed_url_rejected() {
        let mut config = valid_config();
        config.site.favicon = Some("https://".to_owned());
        assert_eq!(verify(&config).len(), 1);
    }

    #[test]
    fn pagination_must_be_positive() {
        let mut config = valid_config();
        config.pagination.per_page = 0;
        assert_eq!(verify(&config).len(), 1);

        config.pagination.per_page = -5;
        assert_eq!(verify(&config).len(), 1);

        config.pagination.per_page = 5;
        assert!(verify(&config).is_empty());
    }

    #[test]
    fn bad_timezone_rejected() {
        let mut config = valid_config();
        config.site.timezone = "not a timezone".to_owned();
        assert_eq!(verify(&config).len(), 1);

        config.site.timezone = "Europe/Zurich".to_owned();
        assert!(verify(&config).is_empty());
    }
}
