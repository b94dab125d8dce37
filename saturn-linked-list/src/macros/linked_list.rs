/// Builds a [`SinglyLinkedList`] from a list of values, pushing each to the back
/// in order.
///
/// ```rust
/// use saturn_linked_list::linked_list;
///
/// let list = linked_list![1, 2, 3, 4];
/// assert_eq!(list.len(), 4);
/// assert_eq!(list.to_string(), "[1, 2, 3, 4]");
///
/// let empty: saturn_linked_list::generic::singly_linked_list::SinglyLinkedList<u8> = linked_list![];
/// assert!(empty.is_empty());
/// ```
///
/// [`SinglyLinkedList`]: crate::generic::singly_linked_list::SinglyLinkedList
#[macro_export]
macro_rules! linked_list {
    () => {
        $crate::generic::singly_linked_list::SinglyLinkedList::new()
    };
    ($($value:expr),+ $(,)?) => {{
        let mut list = $crate::generic::singly_linked_list::SinglyLinkedList::new();
        $(list.push_back($value);)+
        list
    }};
}
