//! High-score persistence in browser local storage.
//!
//! The one value this site persists. Storage being absent or unreadable
//! degrades to a high score of zero and silent writes.

/// Local storage key for the persisted high score.
pub const HIGH_SCORE_KEY: &str = "retrofolio.pacman.highscore.v1";

/// Parses a stored payload; anything malformed reads as no score.
pub fn parse_high_score(raw: &str) -> Option<u32> {
    serde_json::from_str(raw).ok()
}

pub fn encode_high_score(score: u32) -> String {
    score.to_string()
}

/// Reads the persisted high score, or 0 when storage is unavailable.
pub fn load_high_score() -> u32 {
    #[cfg(target_arch = "wasm32")]
    {
        local_storage()
            .and_then(|storage| storage.get_item(HIGH_SCORE_KEY).ok().flatten())
            .as_deref()
            .and_then(parse_high_score)
            .unwrap_or(0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}

/// Persists a new high score.
///
/// # Errors
///
/// Returns a message when storage is unavailable or rejects the write (for
/// example, in private browsing modes with a zero quota).
pub fn store_high_score(score: u32) -> Result<(), String> {
    #[cfg(target_arch = "wasm32")]
    {
        let storage = local_storage().ok_or_else(|| "local storage unavailable".to_string())?;
        storage
            .set_item(HIGH_SCORE_KEY, &encode_high_score(score))
            .map_err(|err| format!("high score write rejected: {err:?}"))
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = score;
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn payload_round_trips_through_parse() {
        assert_eq!(parse_high_score(&encode_high_score(1480)), Some(1480));
        assert_eq!(parse_high_score("0"), Some(0));
    }

    #[test]
    fn malformed_payloads_read_as_no_score() {
        assert_eq!(parse_high_score(""), None);
        assert_eq!(parse_high_score("not a number"), None);
        assert_eq!(parse_high_score("-5"), None);
        assert_eq!(parse_high_score("{\"score\":10}"), None);
    }
}
