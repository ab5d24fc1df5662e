#![cfg(test)]

use std::collections::HashSet;

use bolero_generator::TypeGenerator;

use crate::{
    api::{validate_body, CommentId, ContentRef, Error, Identity, TopLevelOrder},
    CommentThreadStore, Thread,
};

#[derive(Clone, Debug, bolero_generator::TypeGenerator)]
enum Op {
    TopLevel(String),
    Reply { target: usize, body: String },
    ReplyToMissing(String),
    Blank { target: Option<usize>, spaces: u8 },
    Like(usize),
}

/// Shape of every comment reachable from a snapshot, in walk order
fn shape(thread: &Thread) -> Vec<(usize, CommentId, u64, usize)> {
    thread
        .walk()
        .map(|(d, c)| (d, c.id.clone(), c.like_count, c.replies.len()))
        .collect()
}

fn pick(ids: &[CommentId], target: usize) -> Option<&CommentId> {
    match ids.len() {
        0 => None,
        n => ids.get(target % n),
    }
}

fn run(order: TopLevelOrder, ops: Vec<Op>) {
    if std::env::var("RUST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt::try_init();
    }
    let mut store =
        CommentThreadStore::initialize(ContentRef::post("fuzz"), order, Vec::new());
    let mut created: Vec<CommentId> = Vec::new();

    for op in ops {
        let before = store.snapshot();
        let before_shape = shape(&before);
        let mut expect_unchanged = false;

        match op {
            Op::TopLevel(body) => match store.submit_top_level(&body, Identity::stub()) {
                Some(c) => {
                    assert!(validate_body(&body).is_ok());
                    created.push(c.id.clone());
                }
                None => {
                    assert!(validate_body(&body).is_err());
                    expect_unchanged = true;
                }
            },
            Op::Reply { target, body } => {
                let Some(parent) = pick(&created, target).cloned() else {
                    continue;
                };
                match store.submit_reply(&parent, &body, Identity::stub()) {
                    Ok(Some(c)) => {
                        let parent = store.find(&parent).expect("parent still exists");
                        assert_eq!(parent.replies.last().map(|r| &r.id), Some(&c.id));
                        created.push(c.id.clone());
                    }
                    Ok(None) => {
                        assert!(validate_body(&body).is_err());
                        expect_unchanged = true;
                    }
                    Err(e) => panic!("reply to existing comment failed: {e}"),
                }
            }
            Op::ReplyToMissing(body) => {
                let missing = CommentId::stub();
                let res = store.submit_reply(&missing, &body, Identity::stub());
                if validate_body(&body).is_err() {
                    assert_eq!(res, Ok(None));
                } else {
                    assert_eq!(res, Err(Error::CommentNotFound(missing)));
                }
                expect_unchanged = true;
            }
            Op::Blank { target, spaces } => {
                let body = " ".repeat(usize::from(spaces));
                match target.and_then(|t| pick(&created, t)).cloned() {
                    Some(parent) => {
                        assert_eq!(store.submit_reply(&parent, &body, Identity::stub()), Ok(None))
                    }
                    None => assert_eq!(store.submit_top_level(&body, Identity::stub()), None),
                }
                expect_unchanged = true;
            }
            Op::Like(target) => {
                let Some(id) = pick(&created, target).cloned() else {
                    continue;
                };
                let likes = before.find(&id).map(|c| c.like_count).unwrap_or(0);
                assert_eq!(store.like(&id), Ok(likes + 1));
            }
        }

        // earlier snapshots never observe later mutations
        assert_eq!(shape(&before), before_shape);
        if expect_unchanged {
            assert!(before.ptr_eq(store.thread()));
        }

        // count is always the number of comments ever created, and ids never collide
        assert_eq!(store.count_all(), created.len());
        let ids = store
            .thread()
            .walk()
            .map(|(_, c)| c.id.clone())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), created.len());
    }
}

#[test]
fn random_sessions_newest_first() {
    bolero::check!()
        .with_type::<Vec<Op>>()
        .cloned()
        .for_each(|ops| run(TopLevelOrder::NewestFirst, ops))
}

#[test]
fn random_sessions_oldest_first() {
    bolero::check!()
        .with_type::<Vec<Op>>()
        .cloned()
        .for_each(|ops| run(TopLevelOrder::OldestFirst, ops))
}
