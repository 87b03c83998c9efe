//! Ghost post wire types

use serde::{Deserialize, Serialize};

use crate::impl_wire_str_conversions;

/// Publication status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Live on the site
    Published,
    /// Saved but not visible
    Draft,
}

impl_wire_str_conversions!(PostStatus {
    Published => "published",
    Draft => "draft",
});

impl PostStatus {
    /// `published: true` in front matter means published; anything else is a draft.
    pub fn from_published_flag(published: bool) -> Self {
        if published {
            Self::Published
        } else {
            Self::Draft
        }
    }
}

/// Body of a single post submitted to the Admin API.
///
/// Field order is the serialization order; unset optional fields are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostPayload {
    /// Post title
    pub title: String,
    /// Tag names, in note order
    pub tags: Vec<String>,
    /// Featured flag
    pub featured: bool,
    /// Published or draft
    pub status: PostStatus,
    /// Custom excerpt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    /// Feature image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feature_image: Option<String>,
    /// Rendered body
    pub html: String,
}

/// `{ "posts": [ ... ] }` request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostEnvelope {
    /// Always exactly one post
    pub posts: Vec<PostPayload>,
}

impl From<PostPayload> for PostEnvelope {
    fn from(post: PostPayload) -> Self {
        Self { posts: vec![post] }
    }
}
