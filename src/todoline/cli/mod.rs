//! # CLI Layer
//!
//! The only place that knows about argv, stdout/stderr and exit codes.
//!
//! The command surface is the legacy single-dash one (`-add`, `-list_all`, ...):
//! clap handles the real options (`--file`, `--verbose`, `--help`) and hands
//! everything from the command token on to [`run`] untouched, since `-add` and
//! `-update_by_day` want the raw list and strip flag tokens themselves.
//!
//! Error policy:
//! - validation errors (bad arguments, empty store, no match) are printed as a
//!   warning and the process exits 0
//! - malformed records, I/O and config errors propagate to `main`, which exits 1

mod render;
mod setup;

use render::{print_items, print_lines, print_messages, print_recoverable};
use setup::{print_usage, Cli, TaskCommand};

use clap::Parser;
use todoline::api::{CmdResult, SortOrder, TodoApi};
use todoline::config::{config_dir, TodoConfig};
use todoline::error::Result;
use todoline::logging::init_logging;
use todoline::store::fs::FileStore;

struct AppContext {
    api: TodoApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let Some(cmd) = cli.args.first().and_then(|t| TaskCommand::from_token(t)) else {
        print_usage();
        return Ok(());
    };

    let mut ctx = init_context(&cli)?;
    let outcome = dispatch(&mut ctx, cmd, &cli.args);

    match outcome {
        Ok(result) => {
            render_result(&ctx, cmd, &result);
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            log::debug!("{} aborted: {:?}", cmd.token(), e);
            print_recoverable(&e);
            Ok(())
        }
        Err(e) => Err(e),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let config = TodoConfig::load(config_dir()?)?;
    let codec = config.codec()?;
    let path = config.store_path(cli.file.as_deref())?;
    log::debug!("using store {}", path.display());

    Ok(AppContext {
        api: TodoApi::new(FileStore::new(path), codec),
    })
}

fn dispatch(ctx: &mut AppContext, cmd: TaskCommand, args: &[String]) -> Result<CmdResult> {
    let first_arg = args.get(1).map(String::as_str);
    match cmd {
        TaskCommand::Add => ctx.api.add_item(args),
        TaskCommand::RemoveByTitle => ctx.api.remove_by_title(first_arg),
        TaskCommand::ListAll => ctx.api.list_items(),
        TaskCommand::MarkComplete => ctx.api.mark_complete(first_arg),
        TaskCommand::SortDateAscending => ctx.api.sort_by_date(SortOrder::Ascending),
        TaskCommand::SortDateDescending => ctx.api.sort_by_date(SortOrder::Descending),
        TaskCommand::UpdateByDay => ctx.api.update_by_day(args),
    }
}

fn render_result(ctx: &AppContext, cmd: TaskCommand, result: &CmdResult) {
    match cmd {
        TaskCommand::ListAll => print_lines(&result.listed_lines),
        TaskCommand::SortDateAscending | TaskCommand::SortDateDescending => {
            print_items(ctx.api.codec(), &result.listed_items)
        }
        _ => {}
    }
    print_messages(&result.messages);
}
