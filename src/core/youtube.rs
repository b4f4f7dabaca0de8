// src/core/youtube.rs
use std::sync::LazyLock;

use regex::Regex;

use super::html::Html;

static VIDEO_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:watch\?v=|embed/|v/|shorts/|.+\?v=))([A-Za-z0-9_-]{11})")
        .expect("static youtube pattern")
});

const ID_LEN: usize = 11;

/// Video id from a YouTube URL, or `""` when none can be found.
pub fn youtube_id(url: &str) -> String {
    let url = url.trim();
    if url.is_empty() {
        return s!();
    }
    if let Some(caps) = VIDEO_ID.captures(url) {
        return s!(&caps[1]);
    }
    // Loose fallback for odd share links: whatever follows the first `v=`.
    if url.contains("youtube.com") || url.contains("youtu.be") {
        if let Some((_, rest)) = url.split_once("v=") {
            return rest.chars().take(ID_LEN).collect();
        }
    }
    s!()
}

/// Responsive iframe wrapper for an id returned by `youtube_id`.
pub fn youtube_embed(id: &str) -> String {
    let mut w = Html::new();
    w.push(r#"<div class="video-embed-wrapper card-video-embed">"#);
    w.push(r#"<iframe width="560" height="315""#);
    w.attr("src", &join!("https://www.youtube.com/embed/", id));
    w.push(concat!(
        r#" style="position:absolute; top:0; left:0; width:100%; height:100%;""#,
        r#" title="YouTube video" frameborder="0""#,
        r#" allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share""#,
        r#" allowfullscreen></iframe>"#,
    ));
    w.push("</div>");
    w.finish()
}
