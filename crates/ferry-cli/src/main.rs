//! Ferry CLI - checkout and checkin round-trips for GitHub-hosted content.

use clap::Parser;

mod commands;
mod output;
mod services;

use commands::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);

    let result = match cli.command {
        Commands::Checkout {
            file,
            branch,
            output,
        } => commands::checkout::run(&file, branch.as_deref(), output.as_deref()),
        Commands::Checkin {
            file,
            message,
            branch,
        } => commands::checkin::run(&file, message.as_deref(), branch.as_deref()),
        Commands::Update {
            file,
            branch,
            message,
            find,
            replace,
            append,
            prepend,
        } => commands::update::run(
            &file,
            branch.as_deref(),
            message.as_deref(),
            find,
            replace,
            append,
            prepend,
        ),
        Commands::List {
            directory,
            branch,
            json,
        } => commands::list::run(directory.as_deref(), branch.as_deref(), json),
        Commands::Info { json } => commands::info::run(json),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
