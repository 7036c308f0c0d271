//! Slash command handlers
//!
//! Each handler normalizes its raw options, calls the store and turns the
//! outcome into a reply string. Handlers never return errors: every
//! `BuildError` becomes a user-facing message here, and the caller only has
//! to deliver it privately.

use buildboard_core::validation::HERO_ROSTER;
use serenity::builder::CreateCommand;
use std::time::Instant;

pub mod add;
pub mod delete;
pub mod view;

/// Discord rejects message content longer than this many characters
pub const MESSAGE_LIMIT: usize = 2000;

/// Reply used when the store fails for reasons the user cannot fix
pub const GENERIC_FAILURE: &str = "⚠️ Something went wrong on our side. Please try again later.";

/// The user who invoked a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoker {
    /// Platform user id, compared against `owner_id` on delete
    pub user_id: String,
    /// Shown next to builds the user registers
    pub display_name: String,
}

impl Invoker {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            display_name: display_name.into(),
        }
    }
}

/// A parsed slash command ready to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandRequest {
    View(view::ViewArgs),
    Add(add::AddArgs),
    Delete(delete::DeleteArgs),
}

impl CommandRequest {
    /// Slash command name this request came from
    pub fn name(&self) -> &'static str {
        match self {
            CommandRequest::View(_) => view::NAME,
            CommandRequest::Add(_) => add::NAME,
            CommandRequest::Delete(_) => delete::NAME,
        }
    }
}

/// Command definitions pushed to Discord on startup
pub fn definitions() -> Vec<CreateCommand> {
    vec![view::register(), add::register(), delete::register()]
}

/// Run a parsed command against the store and produce its reply
pub fn dispatch(
    store: &buildboard_store::BuildStore,
    request: CommandRequest,
    invoker: &Invoker,
) -> String {
    let reply = match request {
        CommandRequest::View(args) => view::execute(store, args),
        CommandRequest::Add(args) => add::execute(store, args, invoker),
        CommandRequest::Delete(args) => delete::execute(store, args, invoker),
    };
    fit_message(reply)
}

/// Comma-separated hero list included in format-error replies
pub fn roster_hint() -> String {
    HERO_ROSTER.join(", ")
}

/// Clamp a reply to Discord's message limit
///
/// Listings are already paged by `view`; this only catches replies that
/// echo long user input, such as a very long description.
pub fn fit_message(reply: String) -> String {
    if reply.chars().count() <= MESSAGE_LIMIT {
        return reply;
    }
    let mut clipped: String = reply.chars().take(MESSAGE_LIMIT - 1).collect();
    clipped.push('…');
    clipped
}

pub(crate) fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
