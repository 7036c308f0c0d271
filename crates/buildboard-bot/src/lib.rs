//! buildboard bot - Discord slash commands over the build store
//!
//! - `config`: CLI flags, environment and `.env` loading
//! - `commands`: `/view`, `/add` and `/delete` handlers and their replies
//! - `discord`: serenity event handler that dispatches interactions

pub mod commands;
pub mod config;
pub mod discord;
