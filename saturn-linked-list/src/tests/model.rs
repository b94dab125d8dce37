//! Model-based property tests: every operation is replayed against a
//! `VecDeque` holding the expected contents.

use std::collections::VecDeque;

use proptest::prelude::*;

use crate::generic::push_pop::PushPopCollection;
use crate::generic::singly_linked_list::SinglyLinkedList;

#[derive(Clone, Debug)]
enum Op {
    PushBack(i32),
    PushFront(i32),
    PopBack,
    PopFront,
    Insert(usize, i32),
    Erase(usize),
    RemoveMultiplesOf(i32),
    Reverse,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-50..50i32).prop_map(Op::PushBack),
        (-50..50i32).prop_map(Op::PushFront),
        Just(Op::PopBack),
        Just(Op::PopFront),
        (0..16usize, -50..50i32).prop_map(|(i, v)| Op::Insert(i, v)),
        (0..16usize).prop_map(Op::Erase),
        (2..6i32).prop_map(Op::RemoveMultiplesOf),
        Just(Op::Reverse),
    ]
}

/// Applies the ends-only operations through the shared trait.
fn apply_push_pop<C: PushPopCollection<i32>>(collection: &mut C, op: &Op) -> Option<Option<i32>> {
    match *op {
        Op::PushBack(v) => {
            collection.push_back(v);
            Some(None)
        }
        Op::PushFront(v) => {
            collection.push_front(v);
            Some(None)
        }
        Op::PopBack => Some(collection.pop_back()),
        Op::PopFront => Some(collection.pop_front()),
        _ => None,
    }
}

/// Reference semantics for the index-based and bulk operations.
fn apply_model(model: &mut VecDeque<i32>, op: &Op) -> Option<i32> {
    match *op {
        Op::Insert(index, v) => {
            if index == 0 {
                model.push_front(v);
            } else if index >= model.len() {
                model.push_back(v);
            } else {
                model.insert(index, v);
            }
            None
        }
        Op::Erase(index) => {
            if model.is_empty() {
                None
            } else if index >= model.len() - 1 {
                model.pop_back()
            } else if index == 0 {
                model.pop_front()
            } else {
                model.remove(index)
            }
        }
        Op::RemoveMultiplesOf(d) => {
            let before = model.len();
            model.retain(|v| v % d != 0);
            i32::try_from(before - model.len()).ok()
        }
        Op::Reverse => {
            model.make_contiguous().reverse();
            None
        }
        _ => None,
    }
}

fn apply_list(list: &mut SinglyLinkedList<i32>, op: &Op) -> Option<i32> {
    match *op {
        Op::Insert(index, v) => {
            list.insert(index, v);
            None
        }
        Op::Erase(index) => list.erase(index),
        Op::RemoveMultiplesOf(d) => i32::try_from(list.remove_if(|v| v % d == 0)).ok(),
        Op::Reverse => {
            list.reverse();
            None
        }
        _ => None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256, ..ProptestConfig::default()
    })]

    #[test]
    fn matches_deque_model(ops in prop::collection::vec(op_strategy(), 0..64)) {
        let mut list = SinglyLinkedList::new();
        let mut model = VecDeque::new();

        for op in &ops {
            match (apply_push_pop(&mut list, op), apply_push_pop(&mut model, op)) {
                (Some(got), Some(expected)) => {
                    prop_assert_eq!(got, expected, "op {:?}", op);
                }
                _ => {
                    let got = apply_list(&mut list, op);
                    let expected = apply_model(&mut model, op);
                    prop_assert_eq!(got, expected, "op {:?}", op);
                }
            }

            prop_assert!(list.check_invariants(), "invariants broken after {:?}", op);
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), list.len() == 0);
            prop_assert!(list.iter().eq(model.iter()));
            prop_assert_eq!(list.front(), model.front());
            prop_assert_eq!(list.back(), model.back());
        }
    }

    #[test]
    fn push_back_preserves_order(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = SinglyLinkedList::new();
        for &v in &values {
            list.push_back(v);
        }
        prop_assert_eq!(list.to_vec(), values);
    }

    #[test]
    fn push_then_pop_back_restores(values in prop::collection::vec(any::<i32>(), 0..32), x in any::<i32>()) {
        let mut list = SinglyLinkedList::from(values.clone());
        list.push_back(x);
        prop_assert_eq!(list.pop_back(), Some(x));
        prop_assert_eq!(list.to_vec(), values);
        prop_assert!(list.check_invariants());
    }

    #[test]
    fn insert_then_erase_restores(
        values in prop::collection::vec(any::<i32>(), 2..32),
        raw_index in any::<usize>(),
        x in any::<i32>()
    ) {
        let index = 1 + raw_index % (values.len() - 1);
        let mut list = SinglyLinkedList::from(values.clone());

        list.insert(index, x);
        prop_assert_eq!(list.at(index), Ok(&x));
        prop_assert_eq!(list.erase(index), Some(x));
        prop_assert_eq!(list.to_vec(), values);
        prop_assert!(list.check_invariants());
    }

    #[test]
    fn reverse_twice_is_identity(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = SinglyLinkedList::from(values.clone());
        list.reverse();
        let reversed: Vec<i32> = values.iter().rev().copied().collect();
        prop_assert_eq!(list.to_vec(), reversed);
        list.reverse();
        prop_assert_eq!(list.to_vec(), values);
        prop_assert!(list.check_invariants());
    }

    #[test]
    fn remove_if_removes_exactly_matches(
        values in prop::collection::vec(-20..20i32, 0..64),
        threshold in -20..20i32
    ) {
        let mut list = SinglyLinkedList::from(values.clone());
        let removed = list.remove_if(|v| *v < threshold);

        let kept: Vec<i32> = values.iter().copied().filter(|v| *v >= threshold).collect();
        prop_assert_eq!(removed, values.len() - kept.len());
        prop_assert!(list.iter().all(|v| *v >= threshold));
        prop_assert_eq!(list.to_vec(), kept);
        prop_assert!(list.check_invariants());
    }
}
