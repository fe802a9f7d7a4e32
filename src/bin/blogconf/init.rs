use std::fs;
use std::path;

use anyhow::Context as _;

const STARTER_BLOG_YML: &str = "\
site:
  author: Your Name
  name: My Blog
  url: \"https://blog.example.com\"
  timezone: UTC
  default_language: en
menu:
  items:
    - label: Archives
      url: /archives.html
# feeds:
#   all_atom: feeds/all.atom.xml
# pagination:
#   per_page: 10
";

/// Create a new config file
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct InitArgs {
    /// Directory to create the config file in
    #[arg(default_value = "./")]
    directory: path::PathBuf,
}

impl InitArgs {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        let path = self.directory.join(blogconf_config::CONFIG_FILE);
        anyhow::ensure!(!path.exists(), "{} already exists", path.display());

        fs::write(&path, STARTER_BLOG_YML)
            .with_context(|| format!("Could not create {}", path.display()))?;
        log::info!("Created new config at {}", path.display());

        Ok(())
    }
}
