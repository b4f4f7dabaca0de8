// src/core/emoji.rs
//
// Leading-emoji detection for mini-card titles such as "🚀 Fast setup".
// One "emoji unit" is any of:
//   - a keycap:            [0-9#*] VS16? U+20E3          ("1️⃣")
//   - a flag:              two regional indicators       ("🇬🇧")
//   - a ZWJ sequence of pictographs, each with optional VS16 / skin tone
//   - a single Emoji_Presentation code point
use std::sync::LazyLock;

use regex::Regex;

static LEADING_EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)^(",
        r"[0-9#*]\x{FE0F}?\x{20E3}",
        r"|[\x{1F1E6}-\x{1F1FF}]{2}",
        r"|\p{Extended_Pictographic}\x{FE0F}?\p{Emoji_Modifier}?(?:\x{200D}\p{Extended_Pictographic}\x{FE0F}?\p{Emoji_Modifier}?)*",
        r"|\p{Emoji_Presentation}",
        r")\s*(.*)$",
    ))
    .expect("static emoji pattern")
});

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IconTitle {
    pub icon: String,
    pub title: String,
}

/// Split a leading emoji off `s`; without one, `fallback` becomes the icon.
pub fn split_emoji_title(s: &str, fallback: &str) -> IconTitle {
    let s = s.trim();
    match LEADING_EMOJI.captures(s) {
        Some(caps) => IconTitle {
            icon: s!(&caps[1]),
            title: caps[2].trim().to_string(),
        },
        None => IconTitle { icon: s!(fallback), title: s!(s) },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_codepoint_emoji() {
        let it = split_emoji_title("🚀 Fast setup", "💡");
        assert_eq!(it, IconTitle { icon: s!("🚀"), title: s!("Fast setup") });

        let tight = split_emoji_title("💳Free card", "💡");
        assert_eq!(tight.icon, "💳");
        assert_eq!(tight.title, "Free card");
    }

    #[test]
    fn no_emoji_uses_fallback() {
        let it = split_emoji_title("  Open an account ", "1\u{fe0f}\u{20e3}");
        assert_eq!(it.icon, "1\u{fe0f}\u{20e3}");
        assert_eq!(it.title, "Open an account");

        // a bare digit is not a keycap
        assert_eq!(split_emoji_title("3 easy steps", "⭐").icon, "⭐");
    }

    #[test]
    fn compound_sequences_are_one_unit() {
        let flag = split_emoji_title("🇬🇧 UK only", "⭐");
        assert_eq!(flag.icon, "🇬🇧");
        assert_eq!(flag.title, "UK only");

        let family = "👨\u{200d}👩\u{200d}👧";
        let zwj = split_emoji_title(&format!("{family} Family plan"), "⭐");
        assert_eq!(zwj.icon, family);
        assert_eq!(zwj.title, "Family plan");

        let keycap = split_emoji_title("2\u{fe0f}\u{20e3} Verify", "⭐");
        assert_eq!(keycap.icon, "2\u{fe0f}\u{20e3}");
        assert_eq!(keycap.title, "Verify");

        let toned = split_emoji_title("👍🏽 Trusted", "⭐");
        assert_eq!(toned.icon, "👍🏽");
    }

    #[test]
    fn emoji_only_has_empty_title() {
        let it = split_emoji_title("⭐", "💡");
        assert_eq!(it.icon, "⭐");
        assert_eq!(it.title, "");
    }
}
