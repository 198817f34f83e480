use crate::domain::model::{Author, Comment, SearchResponse, Story};
use crate::utils::error::Result;
use reqwest::Client;
use reqwest::StatusCode;

pub const DEFAULT_BASE_URL: &str = "https://hn.algolia.com/api/v1";

/// Optional filters for story and comment searches. Maps onto Algolia's
/// `tags` and `numericFilters` query parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Extra tags ANDed with the defaults (e.g. "show_hn").
    pub tags: Vec<String>,
    pub author: Option<String>,
    pub min_points: Option<i64>,
    pub min_comments: Option<i64>,
    /// Inclusive creation-time bounds, epoch seconds.
    pub created_after: Option<i64>,
    pub created_before: Option<i64>,
    /// Use the `/search_by_date` endpoint instead of relevance ordering.
    pub sort_by_date: bool,
}

impl SearchOptions {
    fn numeric_filters(&self) -> Option<String> {
        let mut filters = Vec::new();
        if let Some(p) = self.min_points {
            filters.push(format!("points>={}", p));
        }
        if let Some(c) = self.min_comments {
            filters.push(format!("num_comments>={}", c));
        }
        if let Some(from) = self.created_after {
            filters.push(format!("created_at_i>={}", from));
        }
        if let Some(to) = self.created_before {
            filters.push(format!("created_at_i<={}", to));
        }
        if filters.is_empty() {
            None
        } else {
            Some(filters.join(","))
        }
    }
}

/// Thin async client for the HN Algolia search API. Holds no global state;
/// the base URL is injected so tests can point it at a mock server.
#[derive(Debug, Clone)]
pub struct AlgoliaClient {
    client: Client,
    base_url: String,
}

impl AlgoliaClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn get_search<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> Result<SearchResponse<T>> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!("GET {} {:?}", url, params);
        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }

    fn base_params(query: &str, page: usize, hits_per_page: usize) -> Vec<(&'static str, String)> {
        vec![
            ("query", query.to_string()),
            ("page", page.to_string()),
            ("hitsPerPage", hits_per_page.to_string()),
        ]
    }

    /// Searches stories. Defaults to the `story` tag when the caller supplies
    /// no tags of its own.
    pub async fn search_stories(
        &self,
        query: &str,
        page: usize,
        hits_per_page: usize,
        options: &SearchOptions,
    ) -> Result<SearchResponse<Story>> {
        let mut params = Self::base_params(query, page, hits_per_page);
        if options.tags.is_empty() {
            params.push(("tags", "story".to_string()));
        } else {
            params.push(("tags", options.tags.join(",")));
        }
        if let Some(author) = &options.author {
            params.push(("tags", format!("author_{}", author)));
        }
        if let Some(filters) = options.numeric_filters() {
            params.push(("numericFilters", filters));
        }

        let endpoint = if options.sort_by_date {
            "/search_by_date"
        } else {
            "/search"
        };
        self.get_search(endpoint, &params).await
    }

    /// Searches comments, newest first.
    pub async fn search_comments(
        &self,
        query: &str,
        page: usize,
        hits_per_page: usize,
        options: &SearchOptions,
    ) -> Result<SearchResponse<Comment>> {
        let mut params = Self::base_params(query, page, hits_per_page);
        params.push(("tags", "comment".to_string()));
        if let Some(author) = &options.author {
            params.push(("tags", format!("author_{}", author)));
        }
        if let Some(filters) = options.numeric_filters() {
            params.push(("numericFilters", filters));
        }
        self.get_search("/search_by_date", &params).await
    }

    /// Stories currently (or formerly) on the front page.
    pub async fn front_page(
        &self,
        query: &str,
        page: usize,
        hits_per_page: usize,
    ) -> Result<SearchResponse<Story>> {
        let mut params = Self::base_params(query, page, hits_per_page);
        params.push(("tags", "front_page".to_string()));
        self.get_search("/search", &params).await
    }

    /// Stories submitted for a given URL.
    pub async fn search_by_url(
        &self,
        url: &str,
        page: usize,
        hits_per_page: usize,
    ) -> Result<SearchResponse<Story>> {
        let mut params = Self::base_params(url, page, hits_per_page);
        params.push(("tags", "story".to_string()));
        params.push(("restrictSearchableAttributes", "url".to_string()));
        self.get_search("/search", &params).await
    }

    /// A single story by id, or None when it does not exist.
    pub async fn story(&self, id: &str) -> Result<Option<Story>> {
        let params = vec![
            ("query", String::new()),
            ("tags", format!("story_{}", id)),
            ("hitsPerPage", "1".to_string()),
        ];
        let response: SearchResponse<Story> = self.get_search("/search", &params).await?;
        Ok(response.hits.into_iter().next())
    }

    /// The top comments of a story. Hits that are not comments (the story
    /// record itself can show up here) are filtered out.
    pub async fn story_comments(&self, id: &str, limit: usize) -> Result<Vec<Comment>> {
        let params = vec![
            ("query", String::new()),
            ("tags", format!("comment,story_{}", id)),
            ("hitsPerPage", limit.to_string()),
            ("page", "0".to_string()),
        ];
        let response: SearchResponse<Comment> = self.get_search("/search", &params).await?;
        Ok(response.hits.into_iter().filter(Comment::is_comment).collect())
    }

    /// Author profile from the users endpoint; 404 means unknown username.
    pub async fn author(&self, username: &str) -> Result<Option<Author>> {
        let url = format!("{}/users/{}", self.base_url, username);
        tracing::debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let author = response.error_for_status()?.json().await?;
        Ok(Some(author))
    }

    /// Stories submitted by an author, most relevant first.
    pub async fn author_stories(
        &self,
        username: &str,
        page: usize,
        hits_per_page: usize,
    ) -> Result<SearchResponse<Story>> {
        let options = SearchOptions {
            author: Some(username.to_string()),
            ..SearchOptions::default()
        };
        self.search_stories("", page, hits_per_page, &options).await
    }

    /// Comments written by an author, newest first.
    pub async fn author_comments(
        &self,
        username: &str,
        page: usize,
        hits_per_page: usize,
    ) -> Result<SearchResponse<Comment>> {
        let options = SearchOptions {
            author: Some(username.to_string()),
            ..SearchOptions::default()
        };
        self.search_comments("", page, hits_per_page, &options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_filters_are_comma_joined() {
        let options = SearchOptions {
            min_points: Some(50),
            min_comments: Some(10),
            created_after: Some(1_700_000_000),
            ..SearchOptions::default()
        };
        assert_eq!(
            options.numeric_filters().unwrap(),
            "points>=50,num_comments>=10,created_at_i>=1700000000"
        );
    }

    #[test]
    fn empty_options_produce_no_filters() {
        assert_eq!(SearchOptions::default().numeric_filters(), None);
    }
}
