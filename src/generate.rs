//! HTML page generation.
//!
//! Renders the complete gallery page: document head (title, canonical link,
//! description, social preview image), a minimal site header, the optional
//! cover image, the intro text, and the gallery grid.
//!
//! The written page is the non-interactive render of the gallery: it has no
//! viewport, so it always shows the configured initial count and the
//! "Load more" button when there is more to show.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── tiny-paintings/
//!     └── index.html     # page.path = "/tiny-paintings/"
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! The intro is markdown, converted with `pulldown-cmark`.

use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{self, GalleryConfig};
use crate::gallery::GalleryView;
use crate::persistence::NoStore;
use crate::source::PostsManifest;
use crate::types::{ImageRef, PageMeta};

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] crate::config::ConfigError),
    #[error("Source error: {0}")]
    Source(#[from] crate::source::SourceError),
}

/// What a build produced, for CLI output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPage {
    pub output_path: PathBuf,
    pub title: String,
    pub shown: usize,
    pub total: usize,
    pub load_more: bool,
}

const CSS_STATIC: &str = include_str!("../static/style.css");

impl From<&GalleryConfig> for PageMeta {
    fn from(config: &GalleryConfig) -> Self {
        PageMeta {
            title: config.document_title(),
            path: config.page.path.clone(),
            description: config.page.description.clone(),
            meta_image: config.page.meta_image.clone(),
        }
    }
}

/// Load config and manifest, then render the page.
pub fn build(
    config_path: &Path,
    posts_path: &Path,
    output_dir: &Path,
) -> Result<GeneratedPage, GenerateError> {
    let config = config::load_config(config_path)?;
    let manifest = crate::source::load_manifest(posts_path)?;
    generate(&config, &manifest, output_dir)
}

/// Render the gallery page for `manifest` into `output_dir`.
pub fn generate(
    config: &GalleryConfig,
    manifest: &PostsManifest,
    output_dir: &Path,
) -> Result<GeneratedPage, GenerateError> {
    let posts = crate::source::select_posts(&manifest.posts, config.source.category.as_deref());
    let view = GalleryView::headless(&posts, config.page.path.as_str(), &config.reveal, &NoStore);

    let css = format!(
        "{}\n\n{}\n\n{}",
        config::generate_color_css(&config.colors),
        config::generate_theme_css(&config.theme),
        CSS_STATIC
    );
    let page = render_page(config, manifest.cover.as_ref(), view.render(), &css);

    let page_dir = output_dir.join(config.page.path.trim_matches('/'));
    fs::create_dir_all(&page_dir)?;
    let output_path = page_dir.join("index.html");
    fs::write(&output_path, page.into_string())?;
    tracing::info!(path = %output_path.display(), "page written");

    Ok(GeneratedPage {
        output_path,
        title: config.page.title.clone(),
        shown: view.visible_posts().len(),
        total: posts.len(),
        load_more: view.load_more_visible(),
    })
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document with head metadata.
fn base_document(meta: &PageMeta, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                link rel="canonical" href=(meta.path);
                @if !meta.description.is_empty() {
                    meta name="description" content=(meta.description);
                }
                meta property="og:title" content=(meta.title);
                @if let Some(image) = &meta.meta_image {
                    meta property="og:image" content=(image);
                }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
            }
        }
    }
}

fn site_header(site_title: &str) -> Markup {
    html! {
        header.site-header {
            a href="/" {
                @if site_title.is_empty() { "Home" } @else { (site_title) }
            }
        }
    }
}

fn render_markdown(source: &str) -> String {
    let parser = Parser::new(source);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Renders the full gallery page around an already-rendered grid.
pub fn render_page(
    config: &GalleryConfig,
    cover: Option<&ImageRef>,
    gallery: Markup,
    css: &str,
) -> Markup {
    let meta = PageMeta::from(config);

    let content = html! {
        (site_header(&config.page.site_title))
        main id="main" class="document" {
            div.title {
                h1 { span { (config.page.title) } }
            }
            @if let Some(cover) = cover {
                img.cover src=(cover.src)
                    srcset=[cover.srcset.as_deref()]
                    width=[cover.width]
                    height=[cover.height]
                    alt="";
            }
            @if !config.page.intro.trim().is_empty() {
                div.intro {
                    (PreEscaped(render_markdown(&config.page.intro)))
                }
            }
            (gallery)
        }
    };

    base_document(&meta, css, content)
}

// ============================================================================
// Tests
// ============================================================================
