//! Discord gateway wiring
//!
//! Registers the slash commands once the gateway is ready, and answers each
//! command interaction with an ephemeral reply. Every interaction is
//! acknowledged with a deferred response before the store is touched, since
//! Discord drops interactions left unanswered for three seconds and a store
//! call may wait out a writer's lock. Store calls block, so each one runs on
//! tokio's blocking pool inside a span tagged with a fresh request id.

use crate::commands::{self, add, delete, view, CommandRequest, Invoker, GENERIC_FAILURE};
use crate::config::BotConfig;
use anyhow::Context as _;
use buildboard_core::errors::{ExError, ExErrorKind};
use buildboard_core::log_op_error;
use buildboard_core_types::RequestContext;
use buildboard_store::BuildStore;
use serenity::all::{
    Client, Command, CommandInteraction, Context, CreateInteractionResponse,
    CreateInteractionResponseMessage, EditInteractionResponse, EventHandler, GatewayIntents,
    Interaction, Ready, ResolvedOption, ResolvedValue,
};
use serenity::async_trait;
use std::time::Instant;

/// serenity event handler holding the store handle
pub struct Handler {
    store: BuildStore,
}

impl Handler {
    pub fn new(store: BuildStore) -> Self {
        Self { store }
    }

    async fn handle_command(&self, ctx: &Context, command: &CommandInteraction) {
        let invoker = Invoker::new(command.user.id.to_string(), command.user.name.clone());
        let request_ctx = RequestContext::new(command.data.name.clone(), invoker.user_id.clone());
        let span = tracing::info_span!(
            "interaction",
            request_id = %request_ctx.request_id,
            command = %request_ctx.command,
            requester_id = %request_ctx.requester_id,
        );

        if let Err(err) = command.create_response(&ctx.http, deferred_ack()).await {
            span.in_scope(|| tracing::error!(error = %err, "failed to acknowledge interaction"));
            return;
        }

        let request = parse_request(&command.data.name, &command.data.options());
        let reply = match request {
            Some(request) => {
                let started = Instant::now();
                let store = self.store.clone();
                let task_span = span.clone();
                tokio::task::spawn_blocking(move || {
                    task_span.in_scope(|| commands::dispatch(&store, request, &invoker))
                })
                .await
                .unwrap_or_else(|err| {
                    let err = ExError::new(ExErrorKind::Internal)
                        .with_op("dispatch")
                        .with_message(err.to_string());
                    span.in_scope(|| log_op_error!(
                        "dispatch",
                        err,
                        duration_ms = commands::elapsed_ms(started)
                    ));
                    GENERIC_FAILURE.to_string()
                })
            }
            None => {
                span.in_scope(|| tracing::warn!("unknown command"));
                GENERIC_FAILURE.to_string()
            }
        };

        if let Err(err) = command
            .edit_response(&ctx.http, EditInteractionResponse::new().content(reply))
            .await
        {
            span.in_scope(|| tracing::error!(error = %err, "failed to send reply"));
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(user = %ready.user.name, "logged in");

        // A failed sync leaves the previous command set in place
        match Command::set_global_commands(&ctx.http, commands::definitions()).await {
            Ok(synced) => tracing::info!(count = synced.len(), "slash commands synced"),
            Err(err) => tracing::error!(error = %err, "failed to sync slash commands"),
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Interaction::Command(command) = interaction {
            self.handle_command(&ctx, &command).await;
        }
    }
}

/// First response to every command: a private "thinking" placeholder
///
/// The reply later replaces it through `edit_response` and inherits its
/// ephemeral flag.
pub fn deferred_ack() -> CreateInteractionResponse {
    CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new().ephemeral(true))
}

/// Turn a command name and its resolved options into a request
///
/// Missing options read as empty strings and are rejected by the handler's
/// own validation. Returns `None` for commands this bot does not define.
pub fn parse_request(name: &str, options: &[ResolvedOption<'_>]) -> Option<CommandRequest> {
    let text = |key: &str| string_option(options, key).unwrap_or_default();

    match name {
        view::NAME => Some(CommandRequest::View(view::ViewArgs::from_raw(text("name")))),
        add::NAME => Some(CommandRequest::Add(add::AddArgs::new(
            text("name"),
            text("code"),
            text("description"),
        ))),
        delete::NAME => Some(CommandRequest::Delete(delete::DeleteArgs::from_raw(text(
            "code",
        )))),
        _ => None,
    }
}

fn string_option<'a>(options: &[ResolvedOption<'a>], key: &str) -> Option<&'a str> {
    options.iter().find(|o| o.name == key).and_then(|o| match o.value {
        ResolvedValue::String(s) => Some(s),
        _ => None,
    })
}

/// Connect to the gateway and serve interactions until shutdown
///
/// # Errors
/// Returns an error if the client cannot be built or the gateway connection
/// ends with an error.
pub async fn run(config: &BotConfig, store: BuildStore) -> anyhow::Result<()> {
    let intents = GatewayIntents::non_privileged();
    let mut client = Client::builder(config.token.expose(), intents)
        .event_handler(Handler::new(store))
        .await
        .context("failed to build Discord client")?;

    let shard_manager = client.shard_manager.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("shutdown requested");
            shard_manager.shutdown_all().await;
        }
    });

    client.start().await.context("Discord client stopped")?;
    Ok(())
}
