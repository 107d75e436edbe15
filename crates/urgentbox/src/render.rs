//! Text rendering for the shell.

use std::fmt::Write;

use chrono::Local;
use urgentbox_core::{Draft, DraftField, Inbox, Message, UrgencyTab};

/// Renders the draft form.
pub fn draft(draft: &Draft) -> String {
    let mut out = String::from("📨 Compose Message\n");
    for field in DraftField::ALL {
        let value = draft.get(field);
        let shown = if value.is_empty() { "-" } else { value };
        let _ = writeln!(out, "  {:<13} {shown}", format!("{}:", field.label()));
    }
    out
}

/// Renders the tab bar with per-tab counts.
pub fn tab_bar(inbox: &Inbox, selected: UrgencyTab) -> String {
    let counts = inbox.counts();
    UrgencyTab::ALL
        .iter()
        .map(|tab| {
            let label = format!("{} ({})", tab.label(), counts.for_tab(*tab));
            if *tab == selected {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect::<Vec<_>>()
        .join("  ")
}

/// Renders one message card.
pub fn message(message: &Message) -> String {
    let mut out = String::new();
    let urgency = message.urgency();
    let _ = writeln!(
        out,
        "{} {} Urgency  #{}",
        urgency.indicator(),
        urgency.display_name(),
        message.id()
    );
    let _ = writeln!(out, "  Sender:  {} ({})", message.sender(), message.recipient());
    let _ = writeln!(out, "  Subject: {}", message.subject());
    let _ = writeln!(
        out,
        "  Date:    {}",
        message
            .created_at()
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
    );
    for line in message.body().lines() {
        let _ = writeln!(out, "  | {line}");
    }
    out
}

/// Renders an inbox tab.
pub fn inbox(inbox: &Inbox, tab: UrgencyTab) -> String {
    let mut out = format!("📬 Inbox  {}\n", tab_bar(inbox, tab));
    let messages = inbox.view(tab);
    if messages.is_empty() {
        out.push_str("No messages yet.\n");
    } else {
        for m in messages {
            out.push('\n');
            out.push_str(&message(m));
        }
    }
    out
}
