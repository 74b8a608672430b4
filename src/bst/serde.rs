use super::BinarySearchTree;
use ::serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use ::serde::ser::{Serialize, SerializeSeq, Serializer};
use std::fmt;
use std::marker::PhantomData;

// Trees serialize as the ascending sequence of their elements.
impl<T: Serialize> Serialize for BinarySearchTree<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for v in self.iter() {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

struct SeqVisitor<T> {
    marker: PhantomData<fn() -> BinarySearchTree<T>>,
}

impl<'de, T> Visitor<'de> for SeqVisitor<T>
where
    T: Deserialize<'de> + Ord,
{
    type Value = BinarySearchTree<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence of elements")
    }

    // The input need not be sorted; elements are inserted in the order they
    // arrive, so the order also decides the shape of the tree.
    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut tree = BinarySearchTree::new();
        while let Some(v) = seq.next_element()? {
            tree.insert(v);
        }
        Ok(tree)
    }
}

impl<'de, T> Deserialize<'de> for BinarySearchTree<T>
where
    T: Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_seq(SeqVisitor {
            marker: PhantomData,
        })
    }
}
