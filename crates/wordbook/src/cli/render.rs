//! Terminal rendering of command results.
//!
//! Every function returns the text to print so output can be tested without a
//! terminal. Colors come from `colored`, which honors `NO_COLOR`.

use colored::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use wordbookapp::commands::{CmdMessage, MessageLevel};
use wordbookapp::model::{Entry, Meaning};

const LINE_WIDTH: usize = 80;
const WORD_COLUMN: usize = 18;
const EMPTY_LIST: &str = "No saved words yet.";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
        };
        out.push_str(&format!("{}\n", line));
    }
    out
}

/// One line per saved word: index, word, and a preview of its first definition.
pub fn render_list(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return format!("{}\n", EMPTY_LIST.dimmed());
    }

    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let idx = format!("{:>3}. ", i + 1);
        let word = truncate_to_width(&entry.word, WORD_COLUMN);
        let padding = " ".repeat(WORD_COLUMN.saturating_sub(word.width()) + 1);

        let available = LINE_WIDTH.saturating_sub(idx.width() + WORD_COLUMN + 1);
        let preview = entry
            .preview_definition()
            .map(|d| truncate_to_width(&single_line(&d.definition), available))
            .unwrap_or_default();

        out.push_str(&format!(
            "{}{}{}{}\n",
            idx.yellow(),
            word.bold(),
            padding,
            preview.dimmed()
        ));
    }
    out
}

/// Full entries separated by a blank line.
pub fn render_entries_full(entries: &[Entry]) -> String {
    entries
        .iter()
        .map(render_entry_full)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_entry_full(entry: &Entry) -> String {
    let mut out = format!("{}\n", entry.word.bold());
    if let Some(phonetic) = entry.primary_phonetic() {
        out.push_str(&format!("{}\n", phonetic.italic().dimmed()));
    }
    for meaning in &entry.meanings {
        out.push('\n');
        out.push_str(&render_meaning(meaning));
    }
    out
}

fn render_meaning(meaning: &Meaning) -> String {
    let mut out = format!("{}\n", capitalize(&meaning.part_of_speech).cyan());
    for (i, def) in meaning.definitions.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, def.definition));
        if let Some(example) = &def.example {
            out.push_str(&format!("     {}\n", format!("Example: {}", example).italic()));
        }
        if !def.synonyms.is_empty() {
            out.push_str(&format!(
                "     {}\n",
                format!("Synonyms: {}", def.synonyms.join(", ")).dimmed()
            ));
        }
    }
    if !meaning.synonyms.is_empty() {
        out.push_str(&format!(
            "  {}\n",
            format!("Synonyms: {}", meaning.synonyms.join(", ")).dimmed()
        ));
    }
    out
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
