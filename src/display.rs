use chrono::{DateTime, TimeZone};

use crate::model::{SettingsDocument, Task};
use crate::quotes::Quote;
use crate::theme::{RuleStyle, Theme};

pub const NO_PENDING: &str = "Looking good, no pending tasks ✨ 🍰 ✨";

const RULE_CHAR: &str = "─";
const BAR_WIDTH: usize = 40;

pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|w| *w > 0)
        .unwrap_or(80)
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

fn uncoloured(theme: &Theme) -> Theme {
    Theme {
        color: false,
        ..theme.clone()
    }
}

pub fn center_line(text: &str, width: usize) -> String {
    let len = text_width(text);
    if width <= len {
        return text.to_string();
    }
    let pad = (width - len) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

/// A horizontal rule with `title` in the middle, `width` columns wide.
pub fn rule_line(title: &str, width: usize, style: RuleStyle, theme: &Theme) -> String {
    let title_width = text_width(title) + 2;
    if width <= title_width + 2 {
        return theme.paint(title, style.text);
    }
    let left = (width - title_width) / 2;
    let right = width - title_width - left;
    format!(
        "{} {} {}",
        theme.paint(&RULE_CHAR.repeat(left), style.line),
        theme.paint(title, style.text),
        theme.paint(&RULE_CHAR.repeat(right), style.line),
    )
}

pub fn print_rule(title: &str, style: RuleStyle, theme: &Theme) {
    println!("{}", rule_line(title, terminal_width(), style, theme));
}

pub fn print_error(title: &str, theme: &Theme) {
    print_rule(title, theme.error, theme);
}

pub fn print_warning(title: &str, theme: &Theme) {
    print_rule(title, theme.warning, theme);
}

pub fn print_update(title: &str, theme: &Theme) {
    print_rule(title, theme.update, theme);
}

pub fn print_insert_or_delete(title: &str, theme: &Theme) {
    print_rule(title, theme.insert_or_delete, theme);
}

pub fn print_centered(text: &str, theme: &Theme, style: owo_colors::Style) {
    let line = center_line(text, terminal_width());
    println!("{}", theme.paint(&line, style));
}

/// Rows of the task table: header, separator, then one row per task.
pub fn task_table(tasks: &[Task], theme: &Theme) -> Vec<String> {
    let id_width = tasks.len().to_string().len().max(2);
    let name_width = tasks
        .iter()
        .map(|t| text_width(&t.name))
        .max()
        .unwrap_or(0)
        .max(4);
    let status_width = 6;

    let header = format!(
        " {:^id_width$}   {:<name_width$}   {:^status_width$} ",
        "ID", "TASK", "STATUS"
    );
    let separator = "━".repeat(text_width(&header));
    let mut lines = vec![
        theme.paint(&header, theme.table_header),
        theme.paint(&separator, theme.table_header),
    ];

    for (index, task) in tasks.iter().enumerate() {
        let id = format!("{:^id_width$}", index + 1);
        let name = format!("{:<name_width$}", task.name);
        let (row_style, status, status_style) = if task.done {
            (theme.task_done, "✓", theme.status_done)
        } else {
            (theme.task_pending, "○", theme.task_pending)
        };
        let status = format!("{:^status_width$}", status);
        lines.push(format!(
            " {}   {}   {} ",
            theme.paint(&id, row_style),
            theme.paint(&name, row_style),
            theme.paint(&status, status_style),
        ));
    }

    lines
}

fn centered_rows(plain: &[String], styled: Vec<String>, width: usize) -> Vec<String> {
    plain
        .iter()
        .zip(styled)
        .map(|(plain, styled)| {
            let pad = width.saturating_sub(text_width(plain)) / 2;
            format!("{}{}", " ".repeat(pad), styled)
        })
        .collect()
}

/// `━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 1/4 25%`
pub fn progress_bar(done: usize, total: usize, width: usize, theme: &Theme) -> String {
    let filled = if total == 0 { 0 } else { done * width / total };
    let percent = if total == 0 { 0 } else { done * 100 / total };
    format!(
        "{}{} {done}/{total} {percent}%",
        theme.paint(&"━".repeat(filled), theme.complete_bar),
        theme.paint(&"━".repeat(width - filled), theme.background_bar),
    )
}

/// Lines for the task list, centred in `width`: the table and, when
/// enabled, the progress bar. With nothing pending and `force` off only
/// the all-clear message is shown.
pub fn task_view(doc: &SettingsDocument, force: bool, theme: &Theme, width: usize) -> Vec<String> {
    let no_pending = theme.paint(&center_line(NO_PENDING, width), theme.msg_pending);
    if doc.all_done() && !force {
        return vec![no_pending];
    }

    // centre on the unstyled width, escapes would skew it
    let plain = uncoloured(theme);
    let mut lines = centered_rows(
        &task_table(&doc.tasks, &plain),
        task_table(&doc.tasks, theme),
        width,
    );

    if doc.show_task_progress && !doc.tasks.is_empty() {
        let (done, total) = (doc.count_done(), doc.tasks.len());
        lines.extend(centered_rows(
            &[progress_bar(done, total, BAR_WIDTH, &plain)],
            vec![progress_bar(done, total, BAR_WIDTH, theme)],
            width,
        ));
    }
    if doc.all_done() {
        lines.push(no_pending);
    }
    lines
}

pub fn print_tasks(doc: &SettingsDocument, force: bool, theme: &Theme) {
    for line in task_view(doc, force, theme, terminal_width()) {
        println!("{line}");
    }
}

pub fn greeting<Tz: TimeZone>(name: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("Hello {name}! It's {}", now.format("%d %b | %I:%M %p"))
}

pub fn print_greeting(name: &str, theme: &Theme) {
    let title = greeting(name, &chrono::Local::now());
    let style = RuleStyle {
        line: theme.header_greetings,
        text: theme.header_greetings,
    };
    print_rule(&title, style, theme);
}

pub fn print_quote(quote: &Quote, theme: &Theme) {
    print_centered(&format!("\"{}\"", quote.content), theme, theme.quote);
    print_centered(&format!("・{}・", quote.author), theme, theme.author);
    println!();
}
