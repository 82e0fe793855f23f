//! Influencer ranking
//!
//! Surfaces the loudest qualified voices among a token's mentions: authors
//! above a follower floor, ranked by a weighted blend of reach and
//! engagement.

use crate::core::{ClassifiedMention, Influencer};

pub const DEFAULT_MIN_FOLLOWERS: u64 = 10_000;

/// Rank mentions whose author clears the follower floor. One entry per
/// qualifying mention, highest influence first.
pub fn rank_influencers(mentions: &[ClassifiedMention], min_followers: u64) -> Vec<Influencer> {
    let mut influencers: Vec<Influencer> = mentions
        .iter()
        .filter(|m| m.mention.follower_count >= min_followers)
        .map(|m| {
            let mention = &m.mention;
            let influence_score = mention.follower_count as f64 * 0.4
                + mention.view_count as f64 * 0.3
                + mention.retweet_count as f64 * 0.2
                + mention.like_count as f64 * 0.1;
            Influencer {
                username: mention.author_username.clone(),
                followers: mention.follower_count,
                influence_score,
            }
        })
        .collect();

    influencers.sort_by(|a, b| b.influence_score.total_cmp(&a.influence_score));
    influencers
}
