use crate::domain::model::{Comment, CommentView, ScoredStory, Story};
use chrono::{DateTime, Utc};
use url::Url;

/// Half-life of the recency component, in hours.
const RECENCY_HALF_LIFE_HOURS: f64 = 24.0;

/// Points contribution: linear with a hard cap at 40.
pub fn points_component(points: u64) -> f64 {
    (points as f64 * 0.4).min(40.0)
}

/// Comments contribution: log10-damped so comment storms cannot dominate,
/// capped at 30. The argument of the log is always >= 2.
pub fn comments_component(comments: u64) -> f64 {
    ((comments.max(1) as f64 + 1.0).log10() * 10.0).min(30.0)
}

/// Recency contribution: exponential decay from 30 with a 24-hour half-life.
/// Negative ages (clock skew, future timestamps) count as age zero.
pub fn recency_component(age_hours: f64) -> f64 {
    let age = age_hours.max(0.0);
    (30.0 * 0.5f64.powf(age / RECENCY_HALF_LIFE_HOURS)).max(0.0)
}

/// Heuristic quality score of a story at the evaluation instant `now`.
///
/// Pure: identical inputs and instant always yield the identical score,
/// which is why the score is recomputed on every render instead of stored.
/// The result is rounded to two decimal places.
pub fn quality_score(story: &Story, now: DateTime<Utc>) -> f64 {
    let age_hours = (now.timestamp() - story.created_at_i) as f64 / 3600.0;
    let total = points_component(story.points())
        + comments_component(story.num_comments())
        + recency_component(age_hours);
    (total * 100.0).round() / 100.0
}

/// Host of `url` with a leading `www.` stripped; None when unparseable.
pub fn extract_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    Some(host.strip_prefix("www.").unwrap_or(host).to_string())
}

/// Coarse relative-age label for display ("just now", "3 hours ago", ...).
pub fn relative_age(created_at_i: i64, now: DateTime<Utc>) -> String {
    let secs = (now.timestamp() - created_at_i).max(0);
    let (count, unit) = if secs < 60 {
        return "just now".to_string();
    } else if secs < 3_600 {
        (secs / 60, "minute")
    } else if secs < 86_400 {
        (secs / 3_600, "hour")
    } else if secs < 30 * 86_400 {
        (secs / 86_400, "day")
    } else if secs < 365 * 86_400 {
        (secs / (30 * 86_400), "month")
    } else {
        (secs / (365 * 86_400), "year")
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, unit, plural)
}

/// Annotates a story with its score and derived display fields.
pub fn score_story(story: Story, now: DateTime<Utc>) -> ScoredStory {
    ScoredStory {
        quality_score: quality_score(&story, now),
        domain: story.url.as_deref().and_then(extract_domain),
        time_ago: relative_age(story.created_at_i, now),
        story,
    }
}

/// Annotates a comment with its relative-age label.
pub fn annotate_comment(comment: Comment, now: DateTime<Utc>) -> CommentView {
    CommentView {
        time_ago: relative_age(comment.created_at_i, now),
        comment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn story(points: i64, comments: i64, created_at_i: i64) -> Story {
        Story {
            id: "1".to_string(),
            title: Some("A story".to_string()),
            url: None,
            author: "alice".to_string(),
            points: Some(points),
            num_comments: Some(comments),
            created_at: None,
            created_at_i,
            tags: vec!["story".to_string()],
        }
    }

    #[test]
    fn points_component_is_capped_and_monotonic() {
        assert_eq!(points_component(0), 0.0);
        assert_eq!(points_component(50), 20.0);
        assert_eq!(points_component(100), 40.0);
        assert_eq!(points_component(10_000), 40.0);

        let mut prev = f64::MIN;
        for p in 0..500 {
            let c = points_component(p);
            assert!(c >= prev);
            prev = c;
        }
    }

    #[test]
    fn comments_component_is_bounded_and_monotonic() {
        let mut prev = f64::MIN;
        for c in 0..10_000 {
            let v = comments_component(c);
            assert!(v >= prev);
            assert!(v <= 30.0);
            prev = v;
        }
        // 0 and 1 comments collapse to the same log argument
        assert_eq!(comments_component(0), comments_component(1));
    }

    #[test]
    fn recency_component_decays_with_half_life() {
        assert_eq!(recency_component(0.0), 30.0);
        assert!((recency_component(24.0) - 15.0).abs() < 1e-9);
        assert!((recency_component(48.0) - 7.5).abs() < 1e-9);
        assert!(recency_component(1e6) < 1e-6);
        // future timestamps clamp to age zero
        assert_eq!(recency_component(-5.0), 30.0);
    }

    #[test]
    fn worked_example_from_fresh_story() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let s = story(100, 50, now.timestamp());
        // 40 + log10(51)*10 + 30 = 87.08 after rounding
        assert_eq!(quality_score(&s, now), 87.08);
    }

    #[test]
    fn score_is_deterministic() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let s = story(42, 7, now.timestamp() - 5 * 3600);
        assert_eq!(quality_score(&s, now), quality_score(&s, now));
    }

    #[test]
    fn negative_and_missing_counts_score_as_zero() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        // 0 + log10(2)*10 + 30, the floor for a fresh story
        let floor = quality_score(&story(0, 0, now.timestamp()), now);
        assert_eq!(floor, 33.01);

        let mut s = story(-10, -3, now.timestamp());
        assert_eq!(quality_score(&s, now), floor);
        s.points = None;
        s.num_comments = None;
        assert_eq!(quality_score(&s, now), floor);
    }

    #[test]
    fn score_rounds_to_two_decimals() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let s = story(13, 17, now.timestamp() - 7 * 3600);
        let score = quality_score(&s, now);
        assert_eq!((score * 100.0).round() / 100.0, score);
    }

    #[test]
    fn extract_domain_strips_www() {
        assert_eq!(
            extract_domain("https://www.example.com/post/1"),
            Some("example.com".to_string())
        );
        assert_eq!(
            extract_domain("https://news.ycombinator.com/item?id=1"),
            Some("news.ycombinator.com".to_string())
        );
        assert_eq!(extract_domain("not a url"), None);
    }

    #[test]
    fn relative_age_labels() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let t = now.timestamp();
        assert_eq!(relative_age(t - 30, now), "just now");
        assert_eq!(relative_age(t - 60, now), "1 minute ago");
        assert_eq!(relative_age(t - 300, now), "5 minutes ago");
        assert_eq!(relative_age(t - 2 * 3600, now), "2 hours ago");
        assert_eq!(relative_age(t - 3 * 86_400, now), "3 days ago");
        assert_eq!(relative_age(t - 400 * 86_400, now), "1 year ago");
        // future timestamps clamp rather than underflow
        assert_eq!(relative_age(t + 3600, now), "just now");
    }

    #[test]
    fn score_story_fills_derived_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut s = story(100, 50, now.timestamp());
        s.url = Some("https://www.example.com/a".to_string());
        let scored = score_story(s, now);
        assert_eq!(scored.quality_score, 87.08);
        assert_eq!(scored.domain.as_deref(), Some("example.com"));
        assert_eq!(scored.time_ago, "just now");
    }
}
