use std::{io::Write, sync::Arc};

use anyhow::Context;
use kronolabs_api::{Comment, CommentId, Identity};
use rand::{seq::SliceRandom, Rng};

const NUM_USERS: usize = 8;

const NUM_TOP_LEVEL: usize = 12;
const MAX_REPLIES: usize = 3;
const MAX_DEPTH: usize = 3;
const MAX_LIKES: u64 = 250;

const COMMENT_MAX_WORDS: usize = 24;
const EMOJI_ONLY_CHANCE: f64 = 0.1;

const LABELS: &[&str] = &["2m ago", "15m ago", "1h ago", "3h ago", "Yesterday", "2d ago"];
const EMOJI: &[&str] = &["🔥", "😂", "❤️", "👏", "😮", "🚀"];

fn gen_user(rng: &mut impl Rng, n: usize) -> Identity {
    let name = lipsum::lipsum_words_from_seed(2, rng.gen());
    Identity::new(name, format!("https://example.com/avatars/{n}.png"))
}

fn gen_body(rng: &mut impl Rng) -> String {
    if rng.gen_bool(EMOJI_ONLY_CHANCE) {
        let count = rng.gen_range(1..=3);
        return (0..count)
            .filter_map(|_| EMOJI.choose(&mut *rng).copied())
            .collect();
    }
    let words = rng.gen_range(1..=COMMENT_MAX_WORDS);
    lipsum::lipsum_words_from_seed(words, rng.gen())
}

fn gen_comment(rng: &mut impl Rng, users: &[Identity], id: String, depth: usize) -> Comment {
    // users is never empty
    let author = users[rng.gen_range(0..users.len())].clone();
    let num_replies = match depth < MAX_DEPTH {
        true => rng.gen_range(0..=MAX_REPLIES),
        false => 0,
    };
    let replies = (0..num_replies)
        .map(|i| Arc::new(gen_comment(rng, users, format!("{id}-{}", i + 1), depth + 1)))
        .collect();
    Comment {
        id: CommentId(id),
        author,
        body: gen_body(rng),
        created_label: LABELS.choose(&mut *rng).copied().unwrap_or("Just now").to_string(),
        like_count: rng.gen_range(0..=MAX_LIKES),
        replies,
    }
}

fn main() -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();

    let users = (0..NUM_USERS)
        .map(|n| gen_user(&mut rng, n))
        .collect::<Vec<_>>();

    // ids follow the "c1", "c1-1", "c1-1-2" scheme of the mock datasets
    let forest = (0..NUM_TOP_LEVEL)
        .map(|i| gen_comment(&mut rng, &users, format!("c{}", i + 1), 0))
        .collect::<Vec<_>>();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &forest).context("serializing comment forest")?;
    writeln!(out).context("writing to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_comments_are_well_formed() {
        let mut rng = StdRng::seed_from_u64(42);
        let users = (0..NUM_USERS)
            .map(|n| gen_user(&mut rng, n))
            .collect::<Vec<_>>();
        assert!(users.iter().all(|u| !u.name.trim().is_empty()));

        let c = gen_comment(&mut rng, &users, String::from("c1"), 0);
        assert_eq!(c.id, CommentId::from("c1"));

        let mut pending = vec![(&c, 0)];
        while let Some((c, depth)) = pending.pop() {
            assert!(depth <= MAX_DEPTH);
            assert!(c.like_count <= MAX_LIKES);
            assert!(kronolabs_api::validate_body(&c.body).is_ok());
            for (i, r) in c.replies.iter().enumerate() {
                assert_eq!(r.id.0, format!("{}-{}", c.id, i + 1));
                pending.push((&**r, depth + 1));
            }
        }
    }
}
