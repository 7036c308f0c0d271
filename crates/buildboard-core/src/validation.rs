//! Input normalization and the rules the store relies on callers to enforce
//!
//! The store is deliberately generic: it does not know about heroes or
//! the code shape. Every path that turns user input into a [`NewBuild`]
//! goes through [`prepare_submission`], which is the store's precondition.

use crate::errors::{BuildError, Result};
use crate::model::NewBuild;

/// Exact length of a build code after normalization
pub const CODE_LENGTH: usize = 5;

/// Heroes a build may be registered against
///
/// Membership is an exact, case-sensitive match on the trimmed name.
pub const HERO_ROSTER: &[&str] = &[
    "Ana",
    "Ashe",
    "Baptiste",
    "Bastion",
    "Brigitte",
    "Cassidy",
    "D.Va",
    "Doomfist",
    "Echo",
    "Freja",
    "Genji",
    "Hanzo",
    "Hazard",
    "Illari",
    "Junker Queen",
    "Junkrat",
    "Juno",
    "Kiriko",
    "Lifeweaver",
    "Lúcio",
    "Mauga",
    "Mei",
    "Mercy",
    "Moira",
    "Orisa",
    "Pharah",
    "Ramattra",
    "Reaper",
    "Reinhardt",
    "Roadhog",
    "Sigma",
    "Sojourn",
    "Soldier: 76",
    "Sombra",
    "Symmetra",
    "Torbjörn",
    "Tracer",
    "Venture",
    "Widowmaker",
    "Winston",
    "Wrecking Ball",
    "Zarya",
    "Zenyatta",
];

/// Trim a hero name as typed by the user
pub fn normalize_name(raw: &str) -> String {
    raw.trim().to_string()
}

/// Trim and uppercase a build code as typed by the user
pub fn normalize_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

pub fn normalize_description(raw: &str) -> String {
    raw.trim().to_string()
}

pub fn is_known_hero(name: &str) -> bool {
    HERO_ROSTER.contains(&name)
}

/// Check a normalized name and code against the roster and code shape
///
/// # Errors
/// Returns `BuildError::Validation` when the name is not on the roster or the
/// code is not exactly [`CODE_LENGTH`] characters.
pub fn validate_submission(name: &str, code: &str) -> Result<()> {
    if !is_known_hero(name) {
        return Err(BuildError::Validation {
            reason: format!("unknown hero '{}'", name),
        });
    }

    let len = code.chars().count();
    if len != CODE_LENGTH {
        return Err(BuildError::Validation {
            reason: format!(
                "build code must be {} characters, got {}",
                CODE_LENGTH, len
            ),
        });
    }

    Ok(())
}

/// Normalize raw command input and build a record ready for insertion
///
/// # Errors
/// Returns `BuildError::Validation` if the normalized input breaks the
/// roster or code-length rule.
pub fn prepare_submission(
    raw_name: &str,
    raw_code: &str,
    raw_description: &str,
    owner_id: &str,
    owner_display_name: &str,
) -> Result<NewBuild> {
    let name = normalize_name(raw_name);
    let code = normalize_code(raw_code);
    validate_submission(&name, &code)?;

    Ok(NewBuild::new(
        name,
        code,
        normalize_description(raw_description),
        owner_id,
        owner_display_name,
    ))
}
