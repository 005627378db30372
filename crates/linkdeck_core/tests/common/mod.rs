#![allow(dead_code)]

use std::sync::Once;

use linkdeck_core::UrlEntry;

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(dash_logging::initialize_for_tests);
}

pub fn entry(id: &str, title: &str, url: &str, description: &str) -> UrlEntry {
    UrlEntry {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
    }
}

/// The built-in mock listing used across the workspace.
pub fn mock_entries() -> Vec<UrlEntry> {
    vec![
        entry("1", "google", "https://www.google.com", "Google search engine"),
        entry("2", "github", "https://www.github.com", "GitHub code hosting"),
        entry(
            "3",
            "stackoverflow",
            "https://stackoverflow.com",
            "Stack Overflow Q&A",
        ),
    ]
}

/// `count` entries with ids `e00`, `e01`, ... for partition tests.
pub fn numbered_entries(count: usize) -> Vec<UrlEntry> {
    (0..count)
        .map(|i| {
            entry(
                &format!("e{i:02}"),
                &format!("link {i:02}"),
                &format!("https://example.com/{i}"),
                "numbered test entry",
            )
        })
        .collect()
}
