//! Serde support: a list is encoded as a plain sequence of its values.

use core::fmt;
use core::marker::PhantomData;

use ::serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use ::serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::generic::singly_linked_list::SinglyLinkedList;

impl<T: Serialize> Serialize for SinglyLinkedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for value in self.iter() {
            seq.serialize_element(value)?;
        }
        seq.end()
    }
}

struct ListVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for ListVisitor<T> {
    type Value = SinglyLinkedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        // Size hints are untrusted input.
        let hint = seq.size_hint().unwrap_or(0).min(4096);
        let mut list = SinglyLinkedList::with_capacity(hint);
        while let Some(value) = seq.next_element()? {
            list.push_back(value);
        }
        Ok(list)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SinglyLinkedList<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(ListVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use crate::generic::singly_linked_list::SinglyLinkedList;

    #[test]
    fn test_serializes_as_sequence() {
        let list = SinglyLinkedList::from([3, 1, 2]);
        assert_eq!(serde_json::to_string(&list).unwrap(), "[3,1,2]");
    }

    #[test]
    fn test_deserializes_in_order() {
        let list: SinglyLinkedList<i32> = serde_json::from_str("[10, 20, 30]").unwrap();
        assert_eq!(list.to_vec(), vec![10, 20, 30]);
        assert_eq!(list.back(), Some(&30));
        assert!(list.check_invariants());
    }

    #[test]
    fn test_empty_and_invalid_input() {
        let empty: SinglyLinkedList<i32> = serde_json::from_str("[]").unwrap();
        assert!(empty.is_empty());
        assert!(serde_json::from_str::<SinglyLinkedList<i32>>("{\"a\": 1}").is_err());
    }
}
