//! Avatar image source and the generated fallback glyph.

use sha2::{Digest, Sha256};

use crate::config::AVATAR_ENDPOINT;
use crate::utils::url::encode_component;

/// Remote avatar image URL for `username`.
pub fn avatar_url(username: &str) -> String {
    format!(
        "{}?name={}&background=random",
        AVATAR_ENDPOINT,
        encode_component(username)
    )
}

/// Locally rendered stand-in used when the avatar image fails to load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AvatarPlaceholder {
    /// One or two uppercase initials, or `?` for a blank name.
    pub initials: String,
    /// Background hue in degrees, `0..360`.
    pub hue: u16,
}

impl AvatarPlaceholder {
    pub fn for_username(username: &str) -> Self {
        Self {
            initials: initials(username),
            hue: hue(username),
        }
    }

    /// Inline CSS background for the glyph.
    pub fn background(&self) -> String {
        format!("hsl({}, 55%, 45%)", self.hue)
    }
}

fn initials(username: &str) -> String {
    let letters: String = username
        .split(|c: char| c.is_whitespace() || matches!(c, '.' | '_' | '-'))
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

fn hue(username: &str) -> u16 {
    let digest = Sha256::digest(username.as_bytes());
    u16::from_be_bytes([digest[0], digest[1]]) % 360
}
