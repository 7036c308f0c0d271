//! `/delete` - remove a build the invoker registered

use super::{elapsed_ms, Invoker, GENERIC_FAILURE};
use buildboard_core::errors::ExErrorKind;
use buildboard_core::validation::normalize_code;
use buildboard_core::{log_op_end, log_op_error, log_op_start};
use buildboard_store::BuildStore;
use serenity::builder::{CreateCommand, CreateCommandOption};
use serenity::model::application::CommandOptionType;
use std::time::Instant;

pub const NAME: &str = "delete";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteArgs {
    pub code: String,
}

impl DeleteArgs {
    pub fn from_raw(code: &str) -> Self {
        Self {
            code: normalize_code(code),
        }
    }
}

pub fn register() -> CreateCommand {
    CreateCommand::new(NAME)
        .description("Delete a build you registered")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "code", "Build code")
                .required(true),
        )
}

pub fn execute(store: &BuildStore, args: DeleteArgs, invoker: &Invoker) -> String {
    let started = Instant::now();
    log_op_start!(
        "delete_command",
        build_code = %args.code,
        owner_id = %invoker.user_id
    );

    match store.delete_by_code(&args.code, &invoker.user_id) {
        Ok(()) => {
            log_op_end!(
                "delete_command",
                duration_ms = elapsed_ms(started),
                build_code = %args.code
            );
            format!("✅ Code `{}` has been deleted.", args.code)
        }
        Err(err) => {
            log_op_error!(
                "delete_command",
                &err,
                duration_ms = elapsed_ms(started),
                build_code = %args.code
            );
            match err.kind() {
                ExErrorKind::NotFound => format!("❌ Code `{}` does not exist.", args.code),
                ExErrorKind::NotOwner => {
                    "⚠️ You can only delete builds you registered.".to_string()
                }
                _ => GENERIC_FAILURE.to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_normalize_code() {
        assert_eq!(DeleteArgs::from_raw(" ab12c ").code, "AB12C");
    }
}
