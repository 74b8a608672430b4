//! Microbenchmarks of BinarySearchTree against std's BTreeSet.
//!
//! Invoke with
//! ```
//!     cargo +nightly bench [partial_test_name] --test benchmarks \
//!         --features bench
//! ```
//!
//! `#[bench]` requires `#![feature(test)]`, which requires nightly, so the
//! benchmarks only build when the "bench" feature is enabled.
//!
//! Unless noted, elements are inserted in a scrambled order.  Sorted input
//! turns the tree into a list, which is measured separately.
#![cfg(feature = "bench")]
#![feature(test)]

extern crate test;

// An xmacro that takes the name of another macro and invokes it once for each
// of the set types we are comparing.  The passed macro should produce a
// benchmark function named `f`; each instantiation gets its own module.
macro_rules! for_each_set_type {
    ( $macro_name:ident ) => {
        mod $macro_name {
            mod btreeset {
                use std::collections::BTreeSet;
                use test::Bencher;

                $macro_name!(BTreeSet);
            }

            mod bst {
                use test::Bencher;
                use unbalanced_collections::BinarySearchTree;

                $macro_name!(BinarySearchTree);
            }
        }
    };
}

// A permutation of 0..n for any n that is coprime with 7919.
fn scrambled(n: usize) -> impl Iterator<Item = usize> {
    (0..n).map(move |i| (i * 7919) % n)
}

macro_rules! build_500_elems {
    ( $set_t:ident ) => {
        #[bench]
        fn f(b: &mut Bencher) {
            b.iter(|| {
                let mut s = $set_t::new();
                for i in crate::scrambled(500) {
                    s.insert(i);
                }
                s
            });
        }
    };
}

for_each_set_type!(build_500_elems);

macro_rules! build_500_sorted_elems {
    ( $set_t:ident ) => {
        #[bench]
        fn f(b: &mut Bencher) {
            b.iter(|| {
                let mut s = $set_t::new();
                for i in 0..500 {
                    s.insert(i);
                }
                s
            });
        }
    };
}

for_each_set_type!(build_500_sorted_elems);

macro_rules! clone_1000_elems {
    ( $set_t:ident ) => {
        #[bench]
        fn f(b: &mut Bencher) {
            let s: $set_t<_> = crate::scrambled(1000).collect();
            b.iter(|| s.clone());
        }
    };
}

for_each_set_type!(clone_1000_elems);

macro_rules! contains_500_elems {
    ( $set_t:ident ) => {
        const SET_LEN: usize = 500;

        #[bench]
        fn f(b: &mut Bencher) {
            let s: $set_t<_> = crate::scrambled(SET_LEN).collect();
            b.iter(|| {
                let mut hits = 0;
                for i in 0..(2 * SET_LEN) {
                    hits += s.contains(&i) as usize;
                }
                hits
            });
        }
    };
}

for_each_set_type!(contains_500_elems);

macro_rules! iter_500_elems {
    ( $set_t:ident ) => {
        #[bench]
        fn f(b: &mut Bencher) {
            let s: $set_t<_> = crate::scrambled(500).collect();
            b.iter(|| s.iter().sum::<usize>());
        }
    };
}

for_each_set_type!(iter_500_elems);

macro_rules! remove_1000_elems {
    ( $set_t:ident ) => {
        const SET_LEN: usize = 1000;

        #[bench]
        fn f(b: &mut Bencher) {
            let s: $set_t<_> = crate::scrambled(SET_LEN).collect();
            b.iter(|| {
                let mut s = s.clone();
                let mut cnt = 0;
                for i in 0..SET_LEN {
                    cnt += s.remove(&i) as usize;
                }
                (cnt, s)
            });
        }
    };
}

for_each_set_type!(remove_1000_elems);

#[bench]
fn bst_into_iter(b: &mut test::Bencher) {
    let vs: Vec<_> = scrambled(1000).collect();
    b.iter(|| {
        let t: unbalanced_collections::BinarySearchTree<_> =
            vs.iter().copied().collect();
        t.into_iter().sum::<usize>()
    });
}

#[bench]
fn bst_count_duplicates(b: &mut test::Bencher) {
    let t: unbalanced_collections::BinarySearchTree<_> =
        scrambled(1000).map(|x| x % 50).collect();
    b.iter(|| (0..50).map(|x| t.count(&x)).sum::<usize>());
}
