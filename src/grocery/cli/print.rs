use chrono::{DateTime, Utc};
use colored::Colorize;
use grocery::commands::{CmdMessage, MessageLevel};
use grocery::config::GroceryConfig;
use grocery::index::DisplayItem;
use grocery::model::ListSummary;
use grocery::voice::VoiceOutcome;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const TIME_WIDTH: usize = 16;
const EMPTY_LIST: &str = "The goblin's belly is empty... Add some items!";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_status(outcome: &VoiceOutcome) {
    let text = outcome.status_text();
    match outcome {
        VoiceOutcome::Added(_) | VoiceOutcome::Removed(_) => println!("{}", text.green()),
        VoiceOutcome::NotFound(_) | VoiceOutcome::Unrecognized(_) => {
            println!("{}", text.yellow())
        }
    }
}

pub(super) fn print_items(items: &[DisplayItem], summary: ListSummary) {
    println!("{}", render_items(items, summary));
}

pub(super) fn print_config(config: &GroceryConfig) {
    for (key, value) in config.list_all() {
        println!("{} = {}", key.bold(), value);
    }
}

fn render_items(items: &[DisplayItem], summary: ListSummary) -> String {
    if items.is_empty() {
        return EMPTY_LIST.dimmed().to_string();
    }

    let mut lines: Vec<String> = items.iter().map(render_line).collect();
    lines.push(String::new());
    lines.push(remaining_label(summary.remaining).bold().to_string());
    lines.join("\n")
}

fn render_line(di: &DisplayItem) -> String {
    let idx_str = format!("{:>3}. ", di.index);
    let checkbox = if di.item.completed { "[x] " } else { "[ ] " };
    let time_ago = format_time_ago(di.item.id.created_at());

    let fixed_width = idx_str.width() + checkbox.width() + TIME_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed_width);
    let text = truncate_to_width(&di.item.text, available);
    let padding = available.saturating_sub(text.width());

    let text = if di.item.completed {
        text.dimmed().strikethrough()
    } else {
        text.normal()
    };

    format!(
        "{}{}{}{}{}",
        idx_str.yellow(),
        checkbox,
        text,
        " ".repeat(padding),
        time_ago.dimmed()
    )
}

fn remaining_label(remaining: usize) -> String {
    let noun = if remaining == 1 { "item" } else { "items" };
    format!("{} {} to hunt", remaining, noun)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
