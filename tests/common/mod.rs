use proptest::prelude::*;

#[allow(dead_code)]
pub(super) fn assert_eq_iters<I: Iterator, J: Iterator<Item = I::Item>>(
    mut i: I,
    mut j: J,
) where
    I::Item: std::fmt::Debug + Eq, // same inferred for J::Item
{
    loop {
        match (i.next(), j.next()) {
            (None, None) => return,
            (a, b) => assert_eq!(a, b),
        }
    }
}

pub(super) type U16Seq = Vec<u16>;

// Narrow value range so that duplicates are common.
#[allow(dead_code)]
pub(super) fn small_int_seq() -> impl Strategy<Value = U16Seq> {
    prop::collection::vec(0u16..64u16, 0..256)
}

#[allow(dead_code)]
pub(super) fn sorted_int_seq() -> impl Strategy<Value = U16Seq> {
    small_int_seq().prop_map(|mut v| {
        v.sort();
        v
    })
}

/// One step of a randomized workload.
#[allow(dead_code)]
#[derive(Clone, Debug)]
pub(super) enum Op {
    Insert(u16),
    Remove(u16),
    // remove the element at this position (modulo the length) via a cursor
    RemoveAt(usize),
    PopFirst,
    PopLast,
}

#[allow(dead_code)]
pub(super) fn ops() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        4 => (0u16..64).prop_map(Op::Insert),
        2 => (0u16..64).prop_map(Op::Remove),
        2 => any::<usize>().prop_map(Op::RemoveAt),
        1 => Just(Op::PopFirst),
        1 => Just(Op::PopLast),
    ];
    prop::collection::vec(op, 0..256)
}

/// Sorted-vector model of the tree's contents.
#[allow(dead_code)]
#[derive(Clone, Debug, Default)]
pub(super) struct Model(pub(super) Vec<u16>);

#[allow(dead_code)]
impl Model {
    pub(super) fn insert(&mut self, v: u16) {
        let pos = self.0.partition_point(|&x| x <= v);
        self.0.insert(pos, v);
    }

    pub(super) fn remove(&mut self, v: u16) -> bool {
        match self.0.binary_search(&v) {
            Ok(pos) => {
                self.0.remove(pos);
                true
            }
            Err(_) => false,
        }
    }

    pub(super) fn count(&self, v: u16) -> usize {
        self.0.iter().filter(|&&x| x == v).count()
    }
}
