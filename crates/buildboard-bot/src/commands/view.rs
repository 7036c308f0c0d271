//! `/view` - list every build registered for a hero

use super::{elapsed_ms, GENERIC_FAILURE, MESSAGE_LIMIT};
use buildboard_core::model::BuildListing;
use buildboard_core::validation::normalize_name;
use buildboard_core::{log_op_end, log_op_error, log_op_start};
use buildboard_store::BuildStore;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use std::time::Instant;

pub const NAME: &str = "view";

// Room kept at the end of a long listing for the "…and N more." line
const OVERFLOW_RESERVE: usize = 32;

/// Longest description shown per row before it is clipped with "…"
pub const DESCRIPTION_PREVIEW: usize = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewArgs {
    pub name: String,
}

impl ViewArgs {
    pub fn from_raw(name: &str) -> Self {
        Self {
            name: normalize_name(name),
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Show the builds registered for a hero")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "name", "Hero name")
                .required(true),
        )
}

pub fn execute(store: &BuildStore, args: ViewArgs) -> String {
    let started = Instant::now();
    log_op_start!("view_command", hero_name = %args.name);

    match store.query_by_name(&args.name) {
        Ok(rows) => {
            log_op_end!(
                "view_command",
                duration_ms = elapsed_ms(started),
                row_count = rows.len()
            );
            format_listing(&args.name, &rows)
        }
        Err(err) => {
            log_op_error!(
                "view_command",
                &err,
                duration_ms = elapsed_ms(started)
            );
            GENERIC_FAILURE.to_string()
        }
    }
}

/// Render a hero's builds as a numbered list that fits in one message
///
/// Descriptions are shown up to `DESCRIPTION_PREVIEW` characters, and a
/// line that would overrun the message has its description clipped further.
/// Only rows that cannot fit even with an empty description are dropped and
/// summarized in a final "…and N more." line.
pub fn format_listing(name: &str, rows: &[BuildListing]) -> String {
    if rows.is_empty() {
        return format!("❌ No builds registered for '{}'.", name);
    }

    let mut reply = format!("📖 Builds registered for '{}':\n", name);
    let mut used = reply.chars().count();

    for (i, row) in rows.iter().enumerate() {
        let is_last = i + 1 == rows.len();
        let budget = if is_last {
            MESSAGE_LIMIT
        } else {
            MESSAGE_LIMIT - OVERFLOW_RESERVE
        };

        let Some(line) = fit_line(i + 1, row, budget.saturating_sub(used)) else {
            reply.push_str(&format!("\n…and {} more.", rows.len() - i));
            break;
        };

        used += line.chars().count();
        reply.push_str(&line);
    }

    reply
}

// Renders one row in at most `room` characters, or `None` if it cannot fit
fn fit_line(position: usize, row: &BuildListing, room: usize) -> Option<String> {
    let render = |description: &str| {
        format!(
            "\n{}. Code: `{}` | Description: {} | Owner: {} | Registered: {}",
            position,
            row.code,
            description,
            row.owner_display_name,
            row.created_at.format("%Y-%m-%d %H:%M:%S"),
        )
    };

    let line = render(&clip(&row.description, DESCRIPTION_PREVIEW));
    if line.chars().count() <= room {
        return Some(line);
    }

    let bare = render("").chars().count();
    let allowed = room.checked_sub(bare).filter(|n| *n > 0)?;
    Some(render(&clip(&row.description, allowed)))
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(max.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn listing(code: &str, description: &str) -> BuildListing {
        BuildListing {
            code: code.to_string(),
            description: description.to_string(),
            owner_display_name: "Alice".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 5, 12, 34, 56).unwrap(),
        }
    }

    #[test]
    fn test_empty_listing_message() {
        assert_eq!(
            format_listing("Ana", &[]),
            "❌ No builds registered for 'Ana'."
        );
    }

    #[test]
    fn test_listing_is_numbered() {
        let reply = format_listing("Ana", &[listing("AAAAA", "first"), listing("BBBBB", "second")]);
        assert!(reply.contains("\n1. Code: `AAAAA` | Description: first | Owner: Alice | Registered: 2024-05-05 12:34:56"));
        assert!(reply.contains("\n2. Code: `BBBBB`"));
        assert!(!reply.contains("more."));
    }

    #[test]
    fn test_long_listing_stays_under_limit() {
        let rows: Vec<_> = (0..100)
            .map(|i| listing(&format!("C{:04}", i), &"x".repeat(60)))
            .collect();

        let reply = format_listing("Ana", &rows);

        assert!(reply.chars().count() <= MESSAGE_LIMIT);
        assert!(reply.contains("\n1. Code: `C0000`"));
        assert!(reply.ends_with("more."));
    }

    #[test]
    fn test_long_description_does_not_hide_other_rows() {
        let rows = [listing("BIG01", &"x".repeat(2100)), listing("OLD01", "short")];

        let reply = format_listing("Ana", &rows);

        assert!(reply.chars().count() <= MESSAGE_LIMIT);
        assert!(reply.contains("\n1. Code: `BIG01`"));
        assert!(reply.contains("\n2. Code: `OLD01` | Description: short |"));
        assert!(!reply.contains("more."));
    }

    #[test]
    fn test_description_clipped_to_preview() {
        let reply = format_listing("Ana", &[listing("BIG01", &"y".repeat(500))]);

        let clipped = format!("Description: {}… |", "y".repeat(DESCRIPTION_PREVIEW - 1));
        assert!(reply.contains(&clipped));
    }

    #[test]
    fn test_short_description_is_untouched() {
        assert_eq!(clip("short", DESCRIPTION_PREVIEW), "short");
        assert_eq!(clip("abcdef", 4), "abc…");
    }

    #[test]
    fn test_args_trim_name() {
        assert_eq!(ViewArgs::from_raw("  Mercy ").name, "Mercy");
    }
}
