//! Note → Ghost post conversion

use ghostpress_domain::{Document, NoteMetadata, PostPayload, PostStatus};
use pulldown_cmark::{html, Options, Parser};

use super::front_matter;

/// Converts a [`Document`] into the payload the Admin API expects.
///
/// Pure and deterministic; rendering never fails.
#[derive(Debug, Clone, Copy)]
pub struct PostTransformer {
    options: Options,
}

impl Default for PostTransformer {
    fn default() -> Self {
        Self::new()
    }
}

impl PostTransformer {
    /// Transformer rendering CommonMark with tables and strikethrough.
    pub fn new() -> Self {
        Self { options: Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH }
    }

    /// Build the post payload for `document`.
    ///
    /// Host metadata wins over front matter; the title falls back to the
    /// identifier.
    pub fn transform(&self, document: &Document) -> PostPayload {
        let (parsed, body) = front_matter::extract(&document.raw_text);
        let metadata = document.metadata.as_ref().unwrap_or(&parsed);

        self.build(&document.identifier, metadata, body)
    }

    /// Render Markdown to HTML.
    pub fn render_html(&self, markdown: &str) -> String {
        let parser = Parser::new_ext(markdown, self.options);
        let mut out = String::with_capacity(markdown.len() + markdown.len() / 2);
        html::push_html(&mut out, parser);
        out
    }

    fn build(&self, identifier: &str, metadata: &NoteMetadata, body: &str) -> PostPayload {
        let title = metadata
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(identifier)
            .to_string();

        PostPayload {
            title,
            tags: dedup(&metadata.tags),
            featured: metadata.featured,
            status: PostStatus::from_published_flag(metadata.published),
            excerpt: metadata.excerpt.clone().filter(|s| !s.is_empty()),
            feature_image: metadata.feature_image.clone().filter(|s| !s.is_empty()),
            html: self.render_html(body),
        }
    }
}

fn dedup(tags: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        if !out.contains(tag) {
            out.push(tag.clone());
        }
    }
    out
}
