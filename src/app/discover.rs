use crate::adapters::algolia::{AlgoliaClient, SearchOptions};
use crate::core::paging::{compute_window, validate_page_number, PageWindow};
use crate::core::score::{annotate_comment, score_story};
use crate::core::sort::{sort_by_field, sort_by_quality, SortField, SortOrder};
use crate::domain::model::{Author, CommentView, ScoredStory, SearchResponse, Story};
use crate::domain::ports::SettingsProvider;
use crate::utils::error::Result;
use chrono::Utc;

/// One rendered page of scored stories plus its pager metadata.
#[derive(Debug, Clone)]
pub struct StoryPage {
    pub stories: Vec<ScoredStory>,
    pub window: PageWindow,
    pub total_hits: u64,
}

/// A story together with its top comments.
#[derive(Debug, Clone)]
pub struct StoryDetail {
    pub story: ScoredStory,
    pub comments: Vec<CommentView>,
}

#[derive(Debug, Clone)]
pub struct AuthorOverview {
    pub author: Author,
    pub stories: StoryPage,
}

/// Orchestrates fetch -> score -> sort -> window for the list views.
/// Stateless apart from the HTTP client; safe to share across tasks.
pub struct DiscoverService<C: SettingsProvider> {
    client: AlgoliaClient,
    config: C,
}

impl<C: SettingsProvider> DiscoverService<C> {
    pub fn new(config: C) -> Self {
        Self {
            client: AlgoliaClient::new(config.api_base_url()),
            config,
        }
    }

    pub fn client(&self) -> &AlgoliaClient {
        &self.client
    }

    /// Searches stories and returns one scored page. `raw_page` is the
    /// 1-based external page parameter; it is clamped before the fetch and
    /// again against the reported page count, so a wild value degrades to
    /// the nearest valid page instead of an error. Without an explicit sort
    /// the page comes back best-quality-first.
    pub async fn story_page(
        &self,
        query: &str,
        raw_page: Option<&str>,
        options: &SearchOptions,
        sort: Option<(SortField, SortOrder)>,
    ) -> Result<StoryPage> {
        let requested = validate_page_number(raw_page, usize::MAX);
        let response = self
            .client
            .search_stories(query, requested, self.config.hits_per_page(), options)
            .await?;
        Ok(self.assemble_page(response, requested, sort))
    }

    /// Current front-page stories, scored and windowed.
    pub async fn front_page(
        &self,
        query: &str,
        raw_page: Option<&str>,
        sort: Option<(SortField, SortOrder)>,
    ) -> Result<StoryPage> {
        let requested = validate_page_number(raw_page, usize::MAX);
        let response = self
            .client
            .front_page(query, requested, self.config.hits_per_page())
            .await?;
        Ok(self.assemble_page(response, requested, sort))
    }

    /// A story and its top comments, fetched concurrently. None when the id
    /// is unknown.
    pub async fn story_detail(&self, id: &str, comment_limit: usize) -> Result<Option<StoryDetail>> {
        let (story, comments) = tokio::join!(
            self.client.story(id),
            self.client.story_comments(id, comment_limit)
        );
        let Some(story) = story? else {
            return Ok(None);
        };
        let now = Utc::now();
        Ok(Some(StoryDetail {
            story: score_story(story, now),
            comments: comments?
                .into_iter()
                .map(|c| annotate_comment(c, now))
                .collect(),
        }))
    }

    /// Author profile plus one page of their submissions. None when the
    /// username is unknown.
    pub async fn author_overview(
        &self,
        username: &str,
        raw_page: Option<&str>,
    ) -> Result<Option<AuthorOverview>> {
        let Some(author) = self.client.author(username).await? else {
            return Ok(None);
        };
        let requested = validate_page_number(raw_page, usize::MAX);
        let response = self
            .client
            .author_stories(username, requested, self.config.hits_per_page())
            .await?;
        Ok(Some(AuthorOverview {
            author,
            stories: self.assemble_page(response, requested, None),
        }))
    }

    fn assemble_page(
        &self,
        response: SearchResponse<Story>,
        requested: usize,
        sort: Option<(SortField, SortOrder)>,
    ) -> StoryPage {
        let total_pages = response.nb_pages;
        let current = if total_pages > 0 {
            requested.min(total_pages - 1)
        } else {
            0
        };

        let scored = sort_by_quality(response.hits, Utc::now());
        let stories = match sort {
            Some((field, order)) => sort_by_field(&scored, field, order),
            None => scored,
        };

        StoryPage {
            stories,
            window: compute_window(current, total_pages, self.config.max_visible_pages()),
            total_hits: response.nb_hits,
        }
    }
}
