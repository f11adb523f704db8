//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Tiny paintings → dist/tiny-paintings/index.html
//!     Showing 20 of 45 posts (load more)
//! ```
//!
//! ## Check
//!
//! ```text
//! Config
//!     gallery.toml
//!     Path: /tiny-paintings/
//!     Reveal: 20 initial, +20 per step, 100px threshold
//! Posts
//!     45 selected of 60 (category: tiny-paintings)
//!     001 Koala (2019-03-02)
//!     002 Owl (2019-02-27)
//!     ...
//! ```

use std::path::Path;

use crate::config::GalleryConfig;
use crate::generate::GeneratedPage;
use crate::types::PostSummary;

/// Posts listed by `check` before eliding the rest.
const CHECK_LISTING_LIMIT: usize = 5;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Build
// ============================================================================

pub fn format_build_output(page: &GeneratedPage) -> Vec<String> {
    let mut showing = format!(
        "{}Showing {} of {}",
        indent(1),
        page.shown,
        plural(page.total, "post")
    );
    if page.load_more {
        showing.push_str(" (load more)");
    }
    vec![
        format!("{} → {}", page.title, page.output_path.display()),
        showing,
    ]
}

pub fn print_build_output(page: &GeneratedPage) {
    for line in format_build_output(page) {
        println!("{}", line);
    }
}

// ============================================================================
// Check
// ============================================================================

pub fn format_check_output(
    config: &GalleryConfig,
    config_path: &Path,
    config_found: bool,
    selected: &[PostSummary],
    total: usize,
) -> Vec<String> {
    let mut lines = vec!["Config".to_string()];
    if config_found {
        lines.push(format!("{}{}", indent(1), config_path.display()));
    } else {
        lines.push(format!("{}(stock defaults)", indent(1)));
    }
    lines.push(format!("{}Path: {}", indent(1), config.page.path));
    lines.push(format!(
        "{}Reveal: {} initial, +{} per step, {}px threshold",
        indent(1),
        config.reveal.initial_count,
        config.reveal.step,
        config.reveal.threshold
    ));

    lines.push("Posts".to_string());
    let mut summary = format!("{}{} selected of {}", indent(1), selected.len(), total);
    if let Some(category) = &config.source.category {
        summary.push_str(&format!(" (category: {category})"));
    }
    lines.push(summary);

    for (i, post) in selected.iter().take(CHECK_LISTING_LIMIT).enumerate() {
        let title = if post.title.is_empty() {
            format!("({})", post.id)
        } else {
            post.title.clone()
        };
        let mut line = format!("{}{} {}", indent(1), format_index(i + 1), title);
        if !post.date.is_empty() {
            line.push_str(&format!(" ({})", post.date));
        }
        lines.push(line);
    }
    if selected.len() > CHECK_LISTING_LIMIT {
        lines.push(format!("{}...", indent(1)));
    }
    lines
}

pub fn print_check_output(
    config: &GalleryConfig,
    config_path: &Path,
    config_found: bool,
    selected: &[PostSummary],
    total: usize,
) {
    for line in format_check_output(config, config_path, config_found, selected, total) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::make_posts;
    use std::path::PathBuf;

    #[test]
    fn build_output_mentions_load_more() {
        let page = GeneratedPage {
            output_path: PathBuf::from("dist/tiny-paintings/index.html"),
            title: "Tiny paintings".into(),
            shown: 20,
            total: 45,
            load_more: true,
        };
        let lines = format_build_output(&page);
        assert_eq!(
            lines,
            vec![
                "Tiny paintings → dist/tiny-paintings/index.html",
                "    Showing 20 of 45 posts (load more)",
            ]
        );
    }

    #[test]
    fn build_output_single_post() {
        let page = GeneratedPage {
            output_path: PathBuf::from("dist/g/index.html"),
            title: "G".into(),
            shown: 1,
            total: 1,
            load_more: false,
        };
        assert_eq!(format_build_output(&page)[1], "    Showing 1 of 1 post");
    }

    #[test]
    fn check_output_lists_and_elides() {
        let mut config = GalleryConfig::default();
        config.source.category = Some("tiny-paintings".into());
        let posts = make_posts(8);
        let lines = format_check_output(&config, Path::new("gallery.toml"), false, &posts, 12);

        assert_eq!(lines[0], "Config");
        assert_eq!(lines[1], "    (stock defaults)");
        assert_eq!(lines[3], "    Reveal: 20 initial, +20 per step, 100px threshold");
        assert!(lines.contains(&"    8 selected of 12 (category: tiny-paintings)".to_string()));
        assert!(lines.iter().any(|l| l.starts_with("    001 Painting 0 (")));
        assert_eq!(lines.last().map(String::as_str), Some("    ..."));
    }

    #[test]
    fn check_output_shows_found_config_path() {
        let config = GalleryConfig::default();
        let posts = make_posts(2);
        let lines = format_check_output(&config, Path::new("site/gallery.toml"), true, &posts, 2);
        assert_eq!(lines[1], "    site/gallery.toml");
        assert_eq!(lines.len(), 8);
        assert!(!lines.iter().any(|l| l == "    ..."));
    }
}
