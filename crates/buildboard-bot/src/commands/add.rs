//! `/add` - register a build code for a hero

use super::{elapsed_ms, roster_hint, Invoker, GENERIC_FAILURE};
use buildboard_core::errors::ExErrorKind;
use buildboard_core::model::NewBuild;
use buildboard_core::validation::{self, CODE_LENGTH};
use buildboard_core::{log_op_end, log_op_error, log_op_start};
use buildboard_store::BuildStore;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use std::time::Instant;

pub const NAME: &str = "add";

/// Raw option values as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddArgs {
    pub name: String,
    pub code: String,
    pub description: String,
}

impl AddArgs {
    pub fn new(
        name: impl Into<String>,
        code: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            description: description.into(),
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Register a build code for a hero")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "name", "Hero name")
                .required(true),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "code",
                "Build code (5 letters or digits)",
            )
            .required(true),
        )
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "description", "Short description")
                .required(true),
        )
}

pub fn execute(store: &BuildStore, args: AddArgs, invoker: &Invoker) -> String {
    let started = Instant::now();
    log_op_start!("add_command", owner_id = %invoker.user_id);

    // Roster and code shape are checked here; the store does not re-check
    let build = match validation::prepare_submission(
        &args.name,
        &args.code,
        &args.description,
        &invoker.user_id,
        &invoker.display_name,
    ) {
        Ok(build) => build,
        Err(err) => {
            log_op_error!("add_command", &err, duration_ms = elapsed_ms(started));
            return format_error_reply();
        }
    };

    match store.insert(&build) {
        Ok(()) => {
            log_op_end!(
                "add_command",
                duration_ms = elapsed_ms(started),
                build_code = %build.code
            );
            added_reply(&build)
        }
        Err(err) => {
            log_op_error!(
                "add_command",
                &err,
                duration_ms = elapsed_ms(started),
                build_code = %build.code
            );
            match err.kind() {
                ExErrorKind::DuplicateCode => {
                    format!("⚠️ Code `{}` is already registered.", build.code)
                }
                _ => GENERIC_FAILURE.to_string(),
            }
        }
    }
}

fn format_error_reply() -> String {
    format!(
        "⚠️ Format error: enter an exact hero name and a {}-character build code.\n{}",
        CODE_LENGTH,
        roster_hint()
    )
}

fn added_reply(build: &NewBuild) -> String {
    format!(
        "📌 Build added for '{}'!\nCode: `{}` | Description: {} | Owner: {}",
        build.name, build.code, build.description, build.owner_display_name
    )
}
