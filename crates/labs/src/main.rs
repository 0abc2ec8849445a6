//! `labs` -- formula exercises CLI.
//!
//! Parses CLI arguments with clap, resolves the runtime context (config file
//! plus flags), and dispatches to the exercise or utility handlers.

mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use labs_core::Exercise;

use cli::{Cli, Commands};
use context::RuntimeContext;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so exercise output on stdout stays exact.
    if cli.global.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("labs=debug,labs_config=debug")
            .with_writer(std::io::stderr)
            .init();
    }

    if let Err(e) = run(cli.command, &cli.global) {
        if cli.global.json {
            let err_json = serde_json::json!({
                "error": format!("{:#}", e),
            });
            if let Ok(s) = serde_json::to_string_pretty(&err_json) {
                eprintln!("{}", s);
            }
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}

fn run(command: Option<Commands>, global: &cli::GlobalArgs) -> anyhow::Result<()> {
    let Some(command) = command else {
        use clap::CommandFactory;
        Cli::command().print_help().ok();
        println!();
        return Ok(());
    };

    let ctx = RuntimeContext::from_global_args(global)?;

    match command {
        Commands::Powers => commands::exercise::run(&ctx, Exercise::Powers, &ctx.inputs),
        Commands::Kepler(args) => {
            let inputs = ctx.inputs_with(|i| args.apply(i));
            commands::exercise::run(&ctx, Exercise::Kepler, &inputs)
        }
        Commands::Circle(args) => {
            let inputs = ctx.inputs_with(|i| args.apply(i));
            commands::exercise::run(&ctx, Exercise::Circle, &inputs)
        }
        Commands::Cylinder(args) => {
            let inputs = ctx.inputs_with(|i| args.apply(i));
            commands::exercise::run(&ctx, Exercise::Cylinder, &inputs)
        }
        Commands::Time(args) => {
            let inputs = ctx.inputs_with(|i| args.apply(i));
            commands::exercise::run(&ctx, Exercise::Time, &inputs)
        }
        Commands::CircleTruncated(args) => {
            let inputs = ctx.inputs_with(|i| args.apply(i));
            commands::exercise::run(&ctx, Exercise::CircleTruncated, &inputs)
        }
        Commands::All => commands::all::run(&ctx),
        Commands::List => commands::list::run(&ctx),
        Commands::Version => commands::version::run(&ctx),
        Commands::Completion(args) => commands::completion::run(&args),
    }
}
