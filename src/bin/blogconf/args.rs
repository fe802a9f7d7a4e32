use std::path;

#[derive(Clone, Debug, clap::Parser)]
#[command(name = "blogconf")]
#[command(version, about, long_about = None)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Clone, Debug, clap::Subcommand)]
pub(crate) enum Command {
    Check(crate::check::CheckArgs),
    Init(crate::init::InitArgs),
    #[command(subcommand)]
    Debug(crate::debug::DebugCommands),
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _blog.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> anyhow::Result<blogconf_config::Config> {
        let config = if let Some(config_path) = self.config.as_deref() {
            blogconf_config::Config::from_file(config_path)?
        } else {
            let cwd = std::env::current_dir()?;
            blogconf_config::Config::from_cwd(cwd)?
        };
        Ok(config)
    }
}
