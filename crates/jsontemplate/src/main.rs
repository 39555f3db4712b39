mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::{Cli, Commands};

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match (cli.command, cli.description) {
        (
            Some(Commands::Render {
                template_file,
                template,
                data,
            }),
            _,
        ) => commands::render::run(template_file, template, data, cli.more_formatters),
        (Some(Commands::Check { template_file }), _) => {
            commands::check::run(&template_file, cli.more_formatters, cli.verbose)
        }
        (None, Some(description)) => commands::harness::run(&description, cli.more_formatters),
        (None, None) => Err(anyhow::anyhow!(
            "args: name of json file containing keys: template, options, dictionary"
        )),
    };

    if let Err(e) = result {
        output::print_exception(&e);
        std::process::exit(1);
    }
}
