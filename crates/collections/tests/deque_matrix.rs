use dsa_collections::{Deque, DequeError};

#[test]
fn fifo_at_opposite_ends_matrix() {
    let mut deque = Deque::new();
    assert!(deque.is_empty());

    deque.push_back(1);
    deque.push_back(2);
    deque.push_back(3);
    assert_eq!(deque.len(), 3);

    assert_eq!(deque.pop_front(), Ok(1));
    assert_eq!(deque.pop_front(), Ok(2));
    assert_eq!(deque.pop_front(), Ok(3));
    assert!(deque.is_empty());
}

#[test]
fn lifo_at_one_end_matrix() {
    let mut deque = Deque::new();
    deque.push_back("a");
    deque.push_back("b");
    assert_eq!(deque.pop_back(), Ok("b"));
    assert_eq!(deque.pop_back(), Ok("a"));
}

#[test]
fn both_ends_interleaved_matrix() {
    let mut deque = Deque::new();
    deque.push_front(2);
    deque.push_front(1);
    deque.push_back(3);
    assert_eq!(deque.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);

    assert_eq!(deque.pop_back(), Ok(3));
    assert_eq!(deque.pop_front(), Ok(1));
    deque.push_back(4);
    assert_eq!(deque.pop_front(), Ok(2));
    assert_eq!(deque.pop_front(), Ok(4));
}

#[test]
fn empty_pops_report_empty_container_matrix() {
    let mut deque: Deque<i32> = Deque::new();
    assert_eq!(deque.pop_front(), Err(DequeError::EmptyContainer));
    assert_eq!(deque.pop_back(), Err(DequeError::EmptyContainer));

    // Draining back to empty reinstates the condition.
    deque.push_back(7);
    assert_eq!(deque.pop_back(), Ok(7));
    assert_eq!(deque.pop_front(), Err(DequeError::EmptyContainer));
    assert_eq!(deque.front(), None);
    assert_eq!(deque.back(), None);
}
