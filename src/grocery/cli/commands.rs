use super::print::{print_config, print_items, print_messages, print_status};
use super::setup::{Cli, Commands, CopyTarget};
use clap::Parser;
use colored::Colorize;
use grocery::api::GroceryApi;
use grocery::clipboard::{copy_to_clipboard, CopyKind};
use grocery::commands::config::ConfigAction;
use grocery::commands::{CmdResult, Confirm};
use grocery::error::Result;
use grocery::init::initialize;
use grocery::store::fs::FileStore;
use grocery::voice::{LineRecognizer, RecognizerEvent, VoiceSession};
use std::io::{self, BufRead, Write};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter, e.g. `GOBLIN_LOG=grocery=debug`.
const LOG_ENV: &str = "GOBLIN_LOG";

struct AppContext {
    api: GroceryApi<FileStore>,
    voice_enabled: bool,
}

/// Asks on stdout and reads the answer from stdin. Anything but y/yes declines.
struct TerminalConfirm {
    assume_yes: bool,
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{} [y/N] ", prompt.bold());
        let _ = io::stdout().flush();

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            Err(_) => false,
        }
    }
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = initialize()?;
    let mut ctx = AppContext {
        voice_enabled: ctx.config.voice,
        api: ctx.api,
    };

    match cli.command {
        Some(Commands::Add { words }) => handle_add(&mut ctx, words),
        Some(Commands::List) | None => handle_list(&ctx),
        Some(Commands::Toggle { selectors }) => handle_toggle(&mut ctx, selectors),
        Some(Commands::Delete { selectors }) => handle_delete(&mut ctx, selectors),
        Some(Commands::Clear { yes }) => handle_clear(&mut ctx, yes),
        Some(Commands::Share { copy, sms }) => handle_share(&ctx, copy, sms),
        Some(Commands::Open { url, yes }) => handle_open(&mut ctx, &url, yes),
        Some(Commands::Voice { transcript }) => handle_voice(&mut ctx, transcript),
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Prints messages, and the whole list again when it changed.
fn finish(ctx: &AppContext, result: CmdResult) -> Result<()> {
    print_messages(&result.messages);
    if result.changed() {
        println!();
        handle_list(ctx)?;
    }
    Ok(())
}

fn handle_add(ctx: &mut AppContext, words: Vec<String>) -> Result<()> {
    let result = ctx.api.add_item(&words.join(" "))?;
    finish(ctx, result)
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list_items()?;
    print_items(&result.listed_items, result.summary.unwrap_or_default());
    Ok(())
}

fn handle_toggle(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.toggle_items(&selectors)?;
    finish(ctx, result)
}

fn handle_delete(ctx: &mut AppContext, selectors: Vec<String>) -> Result<()> {
    let result = ctx.api.delete_items(&selectors)?;
    finish(ctx, result)
}

fn handle_clear(ctx: &mut AppContext, yes: bool) -> Result<()> {
    let mut confirm = TerminalConfirm { assume_yes: yes };
    let result = ctx.api.clear_all(&mut confirm)?;
    finish(ctx, result)
}

fn handle_share(ctx: &AppContext, copy: Option<CopyTarget>, sms: bool) -> Result<()> {
    let result = ctx.api.share()?;
    print_messages(&result.messages);
    let Some(share) = result.share else {
        return Ok(());
    };

    println!("{}", share.link.bold());
    println!();
    println!("{}", share.plain_text);
    if sms {
        println!();
        println!("{}", share.sms_link);
    }

    let copied = match copy {
        Some(CopyTarget::Link) => copy_to_clipboard(&share.link).message(CopyKind::Link),
        Some(CopyTarget::Text) => copy_to_clipboard(&share.plain_text).message(CopyKind::Text),
        None => None,
    };
    if let Some(message) = copied {
        println!();
        println!("{}", message.green());
    }
    Ok(())
}

fn handle_open(ctx: &mut AppContext, url: &str, yes: bool) -> Result<()> {
    let mut confirm = TerminalConfirm { assume_yes: yes };
    let result = ctx.api.import_from_address(url, &mut confirm)?;
    if let Some(cleaned) = &result.cleaned_address {
        println!("{} {}", "Link:".dimmed(), cleaned);
    }
    finish(ctx, result)
}

fn handle_voice(ctx: &mut AppContext, transcript: Vec<String>) -> Result<()> {
    if !transcript.is_empty() {
        return apply_transcript(ctx, &transcript.join(" "));
    }

    let recognizer = ctx
        .voice_enabled
        .then(|| LineRecognizer::new(io::stdin().lock()));
    let mut session = VoiceSession::new(recognizer);

    session.toggle(Instant::now())?;
    if !session.is_supported() {
        if let Some(status) = session.status(Instant::now()) {
            println!("{}", status.text.yellow());
        }
        return Ok(());
    }

    while let Some(event) = session.poll() {
        let ended = event == RecognizerEvent::Ended;
        match session.handle(event, Instant::now()) {
            Some(heard) if heard.is_empty() => {}
            Some(heard) => {
                let result = ctx.api.voice_command(&heard)?;
                if let Some(outcome) = &result.voice {
                    session.report(outcome, Instant::now());
                }
                show_voice_result(ctx, result)?;
            }
            None if !ended => {
                if let Some(status) = session.status(Instant::now()) {
                    println!("{}", status.text.dimmed());
                }
            }
            None => {}
        }
    }
    Ok(())
}

fn apply_transcript(ctx: &mut AppContext, transcript: &str) -> Result<()> {
    let result = ctx.api.voice_command(transcript)?;
    show_voice_result(ctx, result)
}

fn show_voice_result(ctx: &AppContext, result: CmdResult) -> Result<()> {
    if let Some(outcome) = &result.voice {
        print_status(outcome);
    }
    finish(ctx, result)
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = ctx.api.config_action(action.clone())?;
    print_messages(&result.messages);
    if let (ConfigAction::ShowAll, Some(config)) = (&action, &result.config) {
        print_config(config);
    }
    Ok(())
}
