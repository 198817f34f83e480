use serde::{Deserialize, Serialize};

/// A story hit as returned by the Algolia search API. Numeric fields come
/// back null for dead or very fresh items, so counts stay optional and are
/// clamped through the accessors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(default)]
    pub num_comments: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    /// Creation time as epoch seconds.
    #[serde(default)]
    pub created_at_i: i64,
    #[serde(default, rename = "_tags")]
    pub tags: Vec<String>,
}

impl Story {
    /// Point count with missing/negative values treated as zero.
    pub fn points(&self) -> u64 {
        self.points.unwrap_or(0).max(0) as u64
    }

    /// Comment count with missing/negative values treated as zero.
    pub fn num_comments(&self) -> u64 {
        self.num_comments.unwrap_or(0).max(0) as u64
    }
}

/// A comment hit. Shares the envelope with [`Story`] but carries the comment
/// body and its parent/story linkage instead of title and url.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    #[serde(rename = "objectID")]
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub comment_text: Option<String>,
    #[serde(default)]
    pub created_at_i: i64,
    #[serde(default)]
    pub parent_id: Option<i64>,
    #[serde(default)]
    pub story_id: Option<i64>,
    #[serde(default)]
    pub points: Option<i64>,
    #[serde(default, rename = "_tags")]
    pub tags: Vec<String>,
}

impl Comment {
    pub fn is_comment(&self) -> bool {
        self.tags.iter().any(|t| t == "comment")
    }
}

/// An author record from the `/users/<name>` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    #[serde(default)]
    pub about: Option<String>,
    #[serde(default)]
    pub karma: i64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Paged search envelope shared by the story and comment endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<T> {
    pub hits: Vec<T>,
    #[serde(default)]
    pub nb_hits: u64,
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub nb_pages: usize,
    #[serde(default)]
    pub hits_per_page: usize,
}

/// A story annotated with the quality score and display-only derived fields.
/// Never persisted: the score depends on the evaluation instant.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredStory {
    #[serde(flatten)]
    pub story: Story,
    pub quality_score: f64,
    pub domain: Option<String>,
    pub time_ago: String,
}

/// A comment annotated with its relative-age label for display.
#[derive(Debug, Clone, Serialize)]
pub struct CommentView {
    #[serde(flatten)]
    pub comment: Comment,
    pub time_ago: String,
}

/// A bookmarked story. Only the raw record and the bookmark instant are
/// stored; the quality score is recomputed at render time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SavedStory {
    #[serde(flatten)]
    pub story: Story,
    /// Epoch seconds at which the story was (last) bookmarked.
    pub saved_at: i64,
}

/// The persisted reading list, newest bookmark first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReadingList {
    #[serde(default)]
    pub stories: Vec<SavedStory>,
    /// Epoch seconds of the last mutation.
    #[serde(default)]
    pub last_updated: i64,
}
