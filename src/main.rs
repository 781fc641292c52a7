use crate::plugin::{manage, report};
use crate::utils::{
    logger::{LogLevel, Logger},
    path,
};
use clap::Parser;
use clap::error::ErrorKind;
use std::process::ExitCode;

mod error;
mod plugin;
mod types;
mod utils;

#[derive(Parser)]
#[command(name = "plugin-bump")]
#[command(version)]
#[command(about = "Bump a plugin version in the marketplace registry and its plugin manifest")]
#[command(
    after_help = "The registry is .claude-plugin/marketplace.json in the first directory holding one, \
searched upward from the executable's location, then its build directory, then the current directory."
)]
struct Cli {
    /// Plugin name, as listed in .claude-plugin/marketplace.json
    plugin_name: Option<String>,

    /// Bump type: major | minor | patch
    bump_type: Option<String>,

    /// Ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,

    /// Print resolved paths and skipped steps
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let logger = Logger::default();
            logger.log_message(LogLevel::Error, e.to_string().trim_end());
            report::print_usage();
            return Ok(ExitCode::FAILURE);
        }
    };
    let logger = Logger::verbose(cli.verbose);

    let (name, kind) =
        match manage::validate_args(cli.plugin_name.as_deref(), cli.bump_type.as_deref()) {
            Ok(args) => args,
            Err(e) => {
                manage::report_validation(&e, &logger);
                return Ok(ExitCode::FAILURE);
            }
        };

    let root = path::get_install_root();
    logger.log_message(
        LogLevel::Debug,
        &format!("Install root: {}", path::normalize_path(&root)),
    );

    match manage::bump_version(&root, &name, kind, &logger).await {
        Ok(outcome) => {
            logger.log_message(
                LogLevel::Debug,
                &format!("Wrote {}", path::normalize_path(&outcome.registry_path)),
            );
            if let Some(manifest) = &outcome.manifest_path {
                logger.log_message(
                    LogLevel::Debug,
                    &format!("Wrote {}", path::normalize_path(manifest)),
                );
            }
            println!(
                "{}",
                report::summary_line(&outcome.name, &outcome.old_version, &outcome.new_version)
            );
            Ok(ExitCode::SUCCESS)
        }
        Err(e) if e.is_validation() => {
            manage::report_validation(&e, &logger);
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(anyhow::Error::new(e)
            .context(format!("failed to bump {} version of \"{}\"", kind, name))),
    }
}
