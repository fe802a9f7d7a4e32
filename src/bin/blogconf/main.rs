use clap::Parser;
use proc_exit::prelude::*;

mod args;
mod check;
mod debug;
mod init;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let args = match args::Args::try_parse() {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            e.print().with_code(proc_exit::Code::FAILURE)?;
            return proc_exit::sysexits::USAGE_ERR.ok();
        }
        Err(e) => {
            e.print().with_code(proc_exit::Code::FAILURE)?;
            return proc_exit::Code::SUCCESS.ok();
        }
    };

    args.color.write_global();
    init_logging(&args.verbose);

    match args.command {
        args::Command::Check(cmd) => cmd.run(),
        args::Command::Init(cmd) => cmd.run().with_code(proc_exit::Code::FAILURE),
        args::Command::Debug(cmd) => cmd.run().with_code(proc_exit::Code::FAILURE),
    }
}

fn init_logging(verbosity: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>) {
    if let Some(level) = verbosity.log_level() {
        let mut builder = env_logger::Builder::new();
        builder.filter(None, level.to_level_filter());
        builder.format_timestamp(None);
        builder.format_target(false);
        builder.init();
    }
}
