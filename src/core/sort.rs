use crate::domain::model::{ScoredStory, Story};
use chrono::{DateTime, Utc};
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Points,
    Comments,
    CreatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Reorders stories by the chosen field without mutating the input.
///
/// The sort is stable so that equal keys keep their fetched order and
/// pagination stays reproducible across re-renders.
///
/// Creation time is compared newest-first as its natural direction and the
/// requested order is applied on top, so `Asc` yields oldest-first and
/// `Desc` newest-first, consistent with the numeric fields.
pub fn sort_by_field(stories: &[ScoredStory], field: SortField, order: SortOrder) -> Vec<ScoredStory> {
    let mut sorted = stories.to_vec();
    sorted.sort_by(|a, b| {
        let natural = match field {
            SortField::Points => a.story.points().cmp(&b.story.points()),
            SortField::Comments => a.story.num_comments().cmp(&b.story.num_comments()),
            // Natural direction for time is newest first.
            SortField::CreatedAt => b.story.created_at_i.cmp(&a.story.created_at_i),
        };
        match (field, order) {
            (SortField::CreatedAt, SortOrder::Desc) => natural,
            (SortField::CreatedAt, SortOrder::Asc) => natural.reverse(),
            (_, SortOrder::Asc) => natural,
            (_, SortOrder::Desc) => natural.reverse(),
        }
    });
    sorted
}

/// Scores every story and returns them best-first. This is the default
/// presentation order of a fetched page.
pub fn sort_by_quality(stories: Vec<Story>, now: DateTime<Utc>) -> Vec<ScoredStory> {
    let mut scored: Vec<ScoredStory> = stories
        .into_iter()
        .map(|s| super::score::score_story(s, now))
        .collect();
    scored.sort_by(|a, b| {
        b.quality_score
            .partial_cmp(&a.quality_score)
            .unwrap_or(Ordering::Equal)
    });
    scored
}
