//! AFL fuzz harness for OrderedSet
//!
//! Replays a byte stream as set operations against a `BTreeSet` model and
//! checks after every step that:
//! 1. Membership agrees with the model
//! 2. Iteration yields the model's values in the same order
//! 3. `len()` matches and `height()` stays below the cap without shrinking

use std::collections::BTreeSet;

use afl::fuzz;
use skipset::Config;
use skipset::DuplicatePolicy;
use skipset::Error;
use skipset::OrderedSet;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Add(u8),
    Remove(u8),
    Discard(u8),
    Clear,
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 16;
        let rest = &bytes[1..];

        match op_type {
            0..=7 if !rest.is_empty() => Some((FuzzOp::Add(rest[0]), &rest[1..])),
            8..=11 if !rest.is_empty() => Some((FuzzOp::Remove(rest[0]), &rest[1..])),
            12..=14 if !rest.is_empty() => Some((FuzzOp::Discard(rest[0]), &rest[1..])),
            15 => Some((FuzzOp::Clear, rest)),
            _ => None,
        }
    }
}

fn main() {
    fuzz!(|data: &[u8]| {
        // Small caps make level growth reachable with short inputs.
        let config = Config::new()
            .with_seed(0)
            .with_max_level(4)
            .with_probability(0.5)
            .with_duplicates(DuplicatePolicy::Set);
        let mut set = OrderedSet::with_config(config).unwrap();
        let mut model = BTreeSet::new();
        let mut height = 0;
        let mut remaining = data;

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;
            match op {
                FuzzOp::Add(x) => {
                    assert_eq!(set.add(x).unwrap(), model.insert(x));
                }
                FuzzOp::Remove(x) => match set.remove(&x) {
                    Ok(removed) => {
                        assert_eq!(removed, x);
                        assert!(model.remove(&x));
                    }
                    Err(Error::NotFound) => assert!(!model.contains(&x)),
                    Err(err) => panic!("unexpected error: {}", err),
                },
                FuzzOp::Discard(x) => {
                    assert_eq!(set.discard(&x).unwrap(), model.remove(&x));
                }
                FuzzOp::Clear => {
                    set.clear();
                    model.clear();
                }
            }

            assert_eq!(set.len(), model.len());
            assert!(set.iter().eq(model.iter()));
            assert!(set.height() >= height && set.height() < 4);
            height = set.height();
            for x in [0u8, 127, 255] {
                assert_eq!(set.contains(&x).unwrap(), model.contains(&x));
            }
        }
    });
}
