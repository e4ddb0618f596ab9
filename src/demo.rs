// Demo mode: seed the feed with sample posts to showcase the TUI
//
// Posts are backdated so relative timestamps, reactions and comment
// threads are all visible on the first frame.
//
// Run with: feedbox --demo (or FEEDBOX_DEMO=1)

use crate::feed::{Category, Clock, Feed, ReactionKind};
use chrono::{DateTime, Duration, Utc};

struct DemoPost {
    /// Minutes before now
    age_minutes: i64,
    category: Category,
    content: &'static str,
    reaction: Option<ReactionKind>,
    /// (minutes after the post, text)
    comments: &'static [(i64, &'static str)],
}

const DEMO_POSTS: &[DemoPost] = &[
    DemoPost {
        age_minutes: 60 * 26,
        category: Category::CareerAdvice,
        content: "Three years in, I still can't tell whether to go deep on one stack \
                  or stay a generalist. What made the call for you?",
        reaction: Some(ReactionKind::Love),
        comments: &[
            (12, "Generalist until something grabs you, then go deep."),
            (95, "Whatever your team is missing is usually the fastest way to grow."),
        ],
    },
    DemoPost {
        age_minutes: 60 * 5,
        category: Category::Salaries,
        content: "Got an offer 18% above my current base but with half the equity. \
                  How do people usually value early-stage equity?",
        reaction: Some(ReactionKind::Haha),
        comments: &[(40, "Assume it's worth zero, then be pleasantly surprised.")],
    },
    DemoPost {
        age_minutes: 95,
        category: Category::JobSearch,
        content: "Had a system design round today:\n\
                  - design a rate limiter\n\
                  - then make it distributed\n\
                  Token bucket saved me.",
        reaction: None,
        comments: &[],
    },
    DemoPost {
        age_minutes: 12,
        category: Category::Mentorship,
        content: "Looking for a mentor who has moved from IC to manager and back. \
                  Happy to buy the coffee ☕",
        reaction: Some(ReactionKind::Like),
        comments: &[(3, "I did exactly that last year, DM me!")],
    },
];

/// Fill `feed` with the demo posts, oldest first so the newest ends on top
pub fn seed<C: Clock>(feed: &mut Feed<C>, now: DateTime<Utc>) {
    for demo in DEMO_POSTS {
        let created_at = now - Duration::minutes(demo.age_minutes);
        let Some(id) = feed.submit_post_at(demo.content, demo.category, created_at) else {
            continue;
        };

        for (offset, text) in demo.comments {
            let at = (created_at + Duration::minutes(*offset)).min(now);
            feed.add_comment_at(id, text, at);
        }

        if let Some(kind) = demo.reaction {
            feed.toggle_reaction(id, kind);
        }
    }

    tracing::info!(posts = DEMO_POSTS.len(), "Demo feed seeded");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::model::ReactionCounts;
    use crate::feed::{ManualClock, DEFAULT_AUTHOR};
    use chrono::TimeZone;

    #[test]
    fn test_seed_orders_newest_first() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(now);
        let mut feed = Feed::with_clock(DEFAULT_AUTHOR, &clock);

        seed(&mut feed, now);

        assert_eq!(feed.len(), DEMO_POSTS.len());
        let stamps: Vec<_> = feed.posts().iter().map(|p| p.created_at).collect();
        assert!(stamps.windows(2).all(|w| w[0] > w[1]));
        assert!(feed.posts().iter().all(|p| !p.composing_comment));
        assert!(feed
            .posts()
            .iter()
            .flat_map(|p| &p.comments)
            .all(|c| c.created_at <= now));
    }

    #[test]
    fn test_seeded_reactions_match_viewer() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(now);
        let mut feed = Feed::with_clock(DEFAULT_AUTHOR, &clock);

        seed(&mut feed, now);

        for post in feed.posts() {
            match post.viewer_reaction {
                Some(kind) => {
                    assert_eq!(post.reactions.get(kind), 1);
                    assert_eq!(post.reactions.total(), 1);
                }
                None => assert_eq!(post.reactions, ReactionCounts::default()),
            }
        }
    }
}
