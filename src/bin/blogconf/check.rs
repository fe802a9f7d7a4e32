use proc_exit::prelude::*;

const ERROR: anstyle::Style = anstyle::AnsiColor::Red.on_default().bold();

/// Lint the configuration
#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct CheckArgs {
    #[command(flatten, next_help_heading = "Config")]
    config: crate::args::ConfigArgs,
}

impl CheckArgs {
    pub(crate) fn run(&self) -> proc_exit::ExitResult {
        let config = self
            .config
            .load_config()
            .with_code(proc_exit::Code::FAILURE)?;

        let problems = blogconf_config::verify::verify(&config);
        if problems.is_empty() {
            log::debug!("Configuration is clean");
            return proc_exit::Code::SUCCESS.ok();
        }

        for problem in &problems {
            anstream::eprintln!("{ERROR}error:{ERROR:#} {problem}");
        }
        proc_exit::sysexits::CONFIG_ERR.ok()
    }
}
