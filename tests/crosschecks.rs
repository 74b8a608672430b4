use proptest::prelude::*;
use unbalanced_collections::BinarySearchTree;

mod common;
use common::*;

type Tree = BinarySearchTree<u16>;

fn check_against(t: &Tree, m: &Model) {
    t.check().unwrap();
    assert_eq!(t.len(), m.0.len());
    assert_eq!(t.is_empty(), m.0.is_empty());
    assert_eq!(t.first(), m.0.first());
    assert_eq!(t.last(), m.0.last());
    assert_eq_iters(t.iter(), m.0.iter());
    assert_eq_iters(t.iter().rev(), m.0.iter().rev());
}

fn check_ops(ops: Vec<Op>) {
    let mut t = Tree::new();
    let mut m = Model::default();

    for op in ops {
        match op {
            Op::Insert(v) => {
                t.insert(v);
                m.insert(v);
            }

            Op::Remove(v) => {
                assert_eq!(t.remove(&v), m.remove(v));
            }

            Op::RemoveAt(i) => {
                if m.0.is_empty() {
                    let mut c = t.cursor_first_mut();
                    assert!(c.is_end());
                    assert_eq!(c.remove_current(), None);
                } else {
                    let pos = i % m.0.len();
                    let mut c = t.cursor_first_mut();
                    for _ in 0..pos {
                        c.move_next();
                    }
                    let removed = c.remove_current();
                    let expected = m.0.remove(pos);
                    assert_eq!(removed, Some(expected));

                    // the cursor lands on the successor
                    assert_eq!(c.get(), m.0.get(pos));
                }
            }

            Op::PopFirst => {
                let expected = (!m.0.is_empty()).then(|| m.0.remove(0));
                assert_eq!(t.pop_first(), expected);
            }

            Op::PopLast => {
                assert_eq!(t.pop_last(), m.0.pop());
            }
        }

        check_against(&t, &m);
    }

    for v in 0..64 {
        assert_eq!(t.count(&v), m.count(v), "count({})", v);
        assert_eq!(t.contains(&v), m.count(v) > 0);
    }
}

fn check_build(v: U16Seq) {
    let t = Tree::from_iter(v.iter().copied());
    let mut m = Model::default();
    v.iter().for_each(|&x| m.insert(x));
    check_against(&t, &m);

    for x in 0..64 {
        assert_eq!(t.count(&x), m.count(x));
        assert_eq!(t.find(&x).get().copied(), m.0.iter().copied().find(|&y| y == x));
    }
}

// Removing every element, one at a time in insertion order, exercises each
// detach case somewhere along the way.
fn check_drain_in_insertion_order(v: U16Seq) {
    let mut t = Tree::from_iter(v.iter().copied());
    let mut m = Model::default();
    v.iter().for_each(|&x| m.insert(x));

    for x in v {
        assert!(t.remove(&x));
        assert!(m.remove(x));
        check_against(&t, &m);
    }
    assert!(t.is_empty());
}

fn check_clone_independence(u: U16Seq, v: U16Seq) {
    let t1 = Tree::from_iter(u.iter().copied());
    let mut t2 = t1.clone();
    assert_eq!(t1, t2);
    assert_eq!(t1.height(), t2.height());

    for x in v.iter() {
        t2.insert(*x);
    }
    for x in u.iter().step_by(2) {
        t2.remove(x);
    }

    // t1 is unaffected by the updates to t2
    let mut m = Model::default();
    u.iter().for_each(|&x| m.insert(x));
    check_against(&t1, &m);
    t2.check().unwrap();

    let mut t3 = Tree::new();
    t3.clone_from(&t2);
    assert_eq!(t3, t2);
    t3.clear();
    t2.check().unwrap();
    assert_eq!(t3.len(), 0);
}

fn check_cursor_walk(v: U16Seq) {
    let t = Tree::from_iter(v.iter().copied());
    let mut sorted = v.clone();
    sorted.sort();

    let mut c = t.cursor_first();
    for x in sorted.iter() {
        assert_eq!(c.get(), Some(x));
        c.move_next();
    }
    assert_eq!(c, t.cursor_end());

    for x in sorted.iter().rev() {
        c.move_prev();
        assert_eq!(c.get(), Some(x));
    }
    assert_eq!(c, t.cursor_first());
}

fn check_into_iter(v: U16Seq, from_back: Vec<bool>) {
    let t = Tree::from_iter(v.iter().copied());
    let mut sorted = std::collections::VecDeque::from_iter(v);
    sorted.make_contiguous().sort();

    let mut it = t.into_iter();
    for back in from_back.into_iter().cycle().take(sorted.len()) {
        assert_eq!(it.len(), sorted.len());
        if back {
            assert_eq!(it.next_back(), sorted.pop_back());
        } else {
            assert_eq!(it.next(), sorted.pop_front());
        }
    }
    assert_eq!(it.next(), sorted.pop_front());
}

proptest! {
    #[test]
    fn test_ops(ops in ops()) {
        check_ops(ops);
    }

    #[test]
    fn test_build(v in small_int_seq()) {
        check_build(v);
    }

    #[test]
    fn test_build_sorted(v in sorted_int_seq()) {
        check_build(v.clone());
        let t = Tree::from_iter(v.iter().copied());
        assert_eq!(t.height(), v.len());
    }

    #[test]
    fn test_drain(v in small_int_seq()) {
        check_drain_in_insertion_order(v);
    }

    #[test]
    fn test_clone(u in small_int_seq(), v in small_int_seq()) {
        check_clone_independence(u, v);
    }

    #[test]
    fn test_cursor_walk(v in small_int_seq()) {
        check_cursor_walk(v);
    }

    #[test]
    fn test_into_iter(
        v in small_int_seq(),
        from_back in prop::collection::vec(any::<bool>(), 1..8)
    ) {
        check_into_iter(v, from_back);
    }

    #[test]
    fn test_eq_ignores_shape(v in small_int_seq()) {
        let t1 = Tree::from_iter(v.iter().copied());
        let t2 = Tree::from_iter(v.iter().rev().copied());
        prop_assert_eq!(&t1, &t2);
        prop_assert_eq!(t1.cmp(&t2), std::cmp::Ordering::Equal);
    }

    #[test]
    fn test_cmp(u in small_int_seq(), v in small_int_seq()) {
        let t1 = Tree::from_iter(u.iter().copied());
        let t2 = Tree::from_iter(v.iter().copied());
        let (mut su, mut sv) = (u, v);
        su.sort();
        sv.sort();
        prop_assert_eq!(t1.cmp(&t2), su.cmp(&sv));
        prop_assert_eq!(t1 == t2, su == sv);
    }
}

#[cfg(feature = "serde")]
mod serde {
    #![allow(unused_imports)]
    use super::*;
    use crate::common::*;
    use proptest::prelude::*;
    use serde_test::{assert_de_tokens, assert_tokens, Token};

    fn make_tokens(sorted: &[u16]) -> Vec<Token> {
        let mut ts = vec![Token::Seq {
            len: Some(sorted.len()),
        }];
        ts.extend(sorted.iter().map(|&x| Token::U16(x)));
        ts.push(Token::SeqEnd);
        ts
    }

    fn check_serde(v: U16Seq) {
        let t = Tree::from_iter(v.iter().copied());
        let mut sorted = v.clone();
        sorted.sort();
        assert_tokens(&t, &make_tokens(&sorted));

        // unsorted input deserializes to the same multiset
        assert_de_tokens(&t, &make_tokens(&v));
    }

    #[test]
    fn serde_empty() {
        assert_tokens(&Tree::new(), &[Token::Seq { len: Some(0) }, Token::SeqEnd]);
    }

    proptest! {
        #[test]
        fn test_serde(v in small_int_seq()) {
            check_serde(v);
        }
    }
}
