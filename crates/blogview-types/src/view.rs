//! Filter/sort derivation for the blog list.
//!
//! Pure functions: the frontend recomputes the derived list inside a `Memo`
//! on every change of posts, search text, or sort order. Filtering is a
//! case-insensitive substring match on the raw date string; sorting parses
//! dates into UTC instants, with an explicit policy for dates that fail to
//! parse.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::models::Post;

/// Sort direction for the blog list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Earliest first
    Ascending,
    /// Latest first (page default)
    #[default]
    Descending,
}

impl SortOrder {
    /// Selector wire value ("asc" / "desc").
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    /// Parse a selector value; anything unrecognized falls back to the
    /// default direction.
    pub fn from_value(value: &str) -> Self {
        match value {
            "asc" => Self::Ascending,
            _ => Self::Descending,
        }
    }
}

/// Placement policy for posts whose date fails to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedDates {
    /// Sort as if dated at the moment of derivation.
    #[default]
    SortAsNow,
    /// Pin before every parseable post.
    First,
    /// Pin after every parseable post.
    Last,
    /// Drop from the derived list entirely.
    Exclude,
}

/// Parse a stored date string into a UTC instant.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS` datetime, or a plain
/// `YYYY-MM-DD` date (midnight UTC). Returns None for anything else.
pub fn parse_post_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date.and_hms_opt(0, 0, 0)?.and_utc());
    }
    None
}

/// Derive the rendered list: filter by `search`, then sort by date.
///
/// A post survives the filter when `search` is empty or its raw date string
/// contains `search` case-insensitively. The sort is stable, so posts with
/// equal instants keep their store order. `now` is the substitute instant
/// for the `SortAsNow` policy; passing it in keeps the derivation
/// deterministic under test.
pub fn derive_view(
    posts: &[Post],
    search: &str,
    order: SortOrder,
    malformed: MalformedDates,
    now: DateTime<Utc>,
) -> Vec<Post> {
    let needle = search.to_lowercase();

    let mut keyed: Vec<(Option<DateTime<Utc>>, &Post)> = posts
        .iter()
        .filter(|p| needle.is_empty() || p.date.to_lowercase().contains(&needle))
        .map(|p| {
            let key = parse_post_date(&p.date);
            if key.is_none() {
                log::warn!("Unparseable post date {:?} (post {})", p.date, p.id);
            }
            (key, p)
        })
        .collect();

    if malformed == MalformedDates::Exclude {
        keyed.retain(|(key, _)| key.is_some());
    }

    let by_instant = |a: &DateTime<Utc>, b: &DateTime<Utc>| match order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => b.cmp(a),
    };

    let ordered: Vec<&Post> = match malformed {
        MalformedDates::First | MalformedDates::Last => {
            // Pinned posts keep their filtered order; the rest sort by date.
            let (pinned, mut dated): (Vec<_>, Vec<_>) =
                keyed.into_iter().partition(|(key, _)| key.is_none());
            dated.sort_by(|a, b| by_instant(&a.0.unwrap_or(now), &b.0.unwrap_or(now)));

            let (head, tail) = if malformed == MalformedDates::First {
                (pinned, dated)
            } else {
                (dated, pinned)
            };
            head.into_iter().chain(tail).map(|(_, p)| p).collect()
        }
        MalformedDates::SortAsNow | MalformedDates::Exclude => {
            keyed.sort_by(|a, b| by_instant(&a.0.unwrap_or(now), &b.0.unwrap_or(now)));
            keyed.into_iter().map(|(_, p)| p).collect()
        }
    };

    ordered.into_iter().cloned().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(id: &str, date: &str) -> Post {
        Post::new(id, date, format!("title-{id}"), format!("body-{id}"))
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn derive(posts: &[Post], search: &str, order: SortOrder) -> Vec<Post> {
        derive_view(posts, search, order, MalformedDates::SortAsNow, fixed_now())
    }

    #[test]
    fn test_parse_date_formats() {
        assert!(parse_post_date("2024-01-10").is_some());
        assert!(parse_post_date("2024-01-10T08:30:00").is_some());
        assert!(parse_post_date("2024-01-10T08:30:00Z").is_some());
        assert!(parse_post_date("2024-01-10T08:30:00+02:00").is_some());
        assert!(parse_post_date("not-a-date").is_none());
        assert!(parse_post_date("").is_none());
    }

    #[test]
    fn test_empty_search_preserves_length() {
        let posts = vec![post("a", "2024-01-10"), post("b", "2023-05-01"), post("c", "bogus")];
        let out = derive(&posts, "", SortOrder::Ascending);
        assert_eq!(out.len(), posts.len());
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let posts = vec![
            post("a", "2024-Jan-10"),
            post("b", "2023-05-01"),
            post("c", "2024-02-20"),
        ];
        let out = derive(&posts, "jan", SortOrder::Ascending);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "a");

        let out = derive(&posts, "2024", SortOrder::Ascending);
        assert!(out.iter().all(|p| p.date.to_lowercase().contains("2024")));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_ascending_adjacent_pairs_ordered() {
        let posts = vec![
            post("a", "2024-01-10"),
            post("b", "2022-11-03"),
            post("c", "2023-05-01"),
            post("d", "2024-01-01"),
        ];
        let out = derive(&posts, "", SortOrder::Ascending);
        for pair in out.windows(2) {
            let x = parse_post_date(&pair[0].date).unwrap();
            let y = parse_post_date(&pair[1].date).unwrap();
            assert!(x <= y, "{} should not precede {}", pair[0].date, pair[1].date);
        }
    }

    #[test]
    fn test_descending_adjacent_pairs_ordered() {
        let posts = vec![post("a", "2024-01-10"), post("b", "2022-11-03"), post("c", "2023-05-01")];
        let out = derive(&posts, "", SortOrder::Descending);
        for pair in out.windows(2) {
            let x = parse_post_date(&pair[0].date).unwrap();
            let y = parse_post_date(&pair[1].date).unwrap();
            assert!(x >= y);
        }
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let posts = vec![post("a", "2024-01-10"), post("b", "bogus"), post("c", "2023-05-01")];
        let first = derive(&posts, "20", SortOrder::Descending);
        let second = derive(&posts, "20", SortOrder::Descending);
        assert_eq!(first, second);
    }

    #[test]
    fn test_equal_dates_keep_store_order() {
        let posts = vec![post("a", "2024-01-10"), post("b", "2024-01-10"), post("c", "2024-01-10")];
        let out = derive(&posts, "", SortOrder::Descending);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn test_two_post_descending_scenario() {
        let posts = vec![
            Post::new("a", "2024-01-10", "A", "x".repeat(150)),
            Post::new("b", "2023-05-01", "B", "short"),
        ];
        let out = derive(&posts, "", SortOrder::Descending);
        let titles: Vec<&str> = out.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["A", "B"]);
    }

    #[test]
    fn test_search_scenario() {
        let posts = vec![
            Post::new("a", "2024-01-10", "A", "x".repeat(150)),
            Post::new("b", "2023-05-01", "B", "short"),
        ];
        let out = derive(&posts, "2023", SortOrder::Descending);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "B");
    }

    #[test]
    fn test_malformed_date_sorts_as_now() {
        // "now" is later than any valid past date, so the malformed post
        // lands after it under ascending order.
        let posts = vec![post("bad", "not-a-date"), post("ok", "2020-03-15")];
        let out = derive(&posts, "", SortOrder::Ascending);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["ok", "bad"]);

        let out = derive(&posts, "", SortOrder::Descending);
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["bad", "ok"]);
    }

    #[test]
    fn test_malformed_first_policy() {
        let posts = vec![post("ok", "2020-03-15"), post("bad", "???"), post("ok2", "2021-01-01")];
        let out =
            derive_view(&posts, "", SortOrder::Ascending, MalformedDates::First, fixed_now());
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["bad", "ok", "ok2"]);
    }

    #[test]
    fn test_malformed_last_policy() {
        let posts = vec![post("bad", "???"), post("ok", "2020-03-15"), post("ok2", "2021-01-01")];
        let out =
            derive_view(&posts, "", SortOrder::Descending, MalformedDates::Last, fixed_now());
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["ok2", "ok", "bad"]);
    }

    #[test]
    fn test_malformed_exclude_policy() {
        let posts = vec![post("bad", "???"), post("ok", "2020-03-15")];
        let out =
            derive_view(&posts, "", SortOrder::Ascending, MalformedDates::Exclude, fixed_now());
        let ids: Vec<&str> = out.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["ok"]);
    }

    #[test]
    fn test_sort_order_values_round_trip() {
        assert_eq!(SortOrder::from_value("asc"), SortOrder::Ascending);
        assert_eq!(SortOrder::from_value("desc"), SortOrder::Descending);
        assert_eq!(SortOrder::from_value("garbage"), SortOrder::Descending);
        assert_eq!(SortOrder::Ascending.as_str(), "asc");
        assert_eq!(SortOrder::Descending.as_str(), "desc");
    }
}
