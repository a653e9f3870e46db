use super::{elem, value, Rb, ELEM};
use crate::traits::*;

fn indices(this: &impl Observer) -> (usize, usize) {
    (this.read_index(), this.write_index())
}

#[test]
fn capacity() {
    let rb = Rb::new(ELEM, 14).unwrap();
    assert_eq!(rb.capacity().get(), 16);
    assert_eq!(rb.element_size(), ELEM);
}

#[test]
fn enough_capacity() {
    for n in (1..65535).step_by(1023) {
        let rb = Rb::new(ELEM, n).unwrap();
        assert!(rb.capacity().get() >= n);
        assert!(rb.capacity().is_power_of_two());
    }
}

#[test]
fn empty_after_creation() {
    for n in 1..128 {
        let rb = Rb::new(ELEM, n).unwrap();
        assert!(rb.is_empty());
        assert_eq!(rb.count(), 0);
        assert_eq!(indices(&rb), (0, 0));
    }
}

#[test]
fn fill_until_full() {
    let mut rb = Rb::new(ELEM, 14).unwrap();

    for i in 0..15 {
        assert!(!rb.is_full());
        assert!(rb.enqueue(&elem(i)));
    }
    assert!(rb.is_full());
    assert_eq!(rb.count(), 15);
    assert_eq!(rb.vacant_len(), 0);

    assert!(!rb.enqueue(&elem(15)));
    assert_eq!(rb.count(), 15);

    assert_eq!(rb.dequeue(None), Some(ELEM));
    assert!(!rb.is_full());
    assert!(rb.enqueue(&elem(15)));
    assert!(rb.is_full());
    assert!(!rb.enqueue(&elem(16)));
}

#[test]
fn dequeue_empty() {
    let mut rb = Rb::new(ELEM, 4).unwrap();
    let mut out = [0; ELEM];

    assert_eq!(rb.dequeue(Some(&mut out)), None);
    assert_eq!(indices(&rb), (0, 0));

    assert!(rb.enqueue(&elem(1)));
    assert_eq!(rb.dequeue(Some(&mut out)), Some(ELEM));
    assert_eq!(rb.dequeue(Some(&mut out)), None);
    assert_eq!(value(&out), 1);
}

#[test]
fn push_pop_one() {
    const CAP: usize = 4;
    let mut rb = Rb::new(ELEM, CAP).unwrap();
    let mut out = [0; ELEM];

    for i in 0..10 {
        let v = 100 + i as u64;
        assert!(rb.enqueue(&elem(v)));
        assert_eq!(indices(&rb), (i % CAP, (i + 1) % CAP));

        assert_eq!(rb.dequeue(Some(&mut out)), Some(ELEM));
        assert_eq!(value(&out), v);
        assert_eq!(indices(&rb), ((i + 1) % CAP, (i + 1) % CAP));

        assert_eq!(rb.dequeue(Some(&mut out)), None);
    }
}

#[test]
fn first_in_first_out() {
    let mut rb = Rb::new(ELEM, 8).unwrap();
    let mut out = [0; ELEM];
    let mut next = 0;

    // Interleave partial fills and drains so that indices wrap several times.
    for round in 0..20u64 {
        let n = round % 7 + 1;
        for i in 0..n {
            assert!(rb.enqueue(&elem(round * 10 + i)));
        }
        for i in 0..n {
            assert_eq!(rb.dequeue(Some(&mut out)), Some(ELEM));
            assert_eq!(value(&out), round * 10 + i);
            next += 1;
        }
        assert!(rb.is_empty());
    }
    assert_eq!(next, (0..20).map(|r| r % 7 + 1).sum::<u64>());
}

#[test]
fn full_empty_cycles() {
    let mut rb = Rb::new(ELEM, 4).unwrap();

    for _ in 0..5 {
        while !rb.is_full() {
            assert!(!rb.is_empty() || rb.count() == 0);
            assert!(rb.enqueue(&elem(7)));
        }
        assert!(!rb.is_empty());
        assert!(!rb.enqueue(&elem(7)));

        while !rb.is_empty() {
            assert!(rb.skip());
        }
        assert!(!rb.is_full());
        assert!(!rb.skip());
    }
}

#[test]
fn variable_sizes() {
    let mut rb = Rb::new(ELEM, 4).unwrap();
    let mut out = [0xff; ELEM];

    assert!(rb.enqueue(b""));
    assert!(rb.enqueue(b"abc"));
    assert!(rb.enqueue(b"12345678"));

    assert_eq!(rb.dequeue(Some(&mut out)), Some(0));
    assert_eq!(out, [0xff; ELEM]);
    assert_eq!(rb.dequeue(Some(&mut out)), Some(3));
    assert_eq!(&out[..3], b"abc");
    assert_eq!(rb.dequeue(Some(&mut out)), Some(8));
    assert_eq!(&out, b"12345678");
}

#[test]
fn single_slot() {
    let mut rb = Rb::new(ELEM, 1).unwrap();

    assert_eq!(rb.capacity().get(), 1);
    assert!(rb.is_empty());
    assert!(rb.is_full());
    assert!(!rb.enqueue(&elem(1)));
    assert_eq!(rb.dequeue(None), None);
    assert_eq!(rb.count(), 0);
}

#[test]
fn zero_sized_slots() {
    let mut rb = Rb::new(0, 4).unwrap();

    assert!(rb.enqueue(&[]));
    assert!(rb.enqueue(&[]));
    assert_eq!(rb.count(), 2);
    assert_eq!(rb.peek(), Some(&[][..]));
    assert_eq!(rb.dequeue(Some(&mut [])), Some(0));
    assert_eq!(rb.count(), 1);
}

#[test]
#[should_panic]
fn oversized_element() {
    let mut rb = Rb::new(4, 4).unwrap();
    rb.enqueue(&elem(1));
}

#[test]
#[should_panic]
fn short_output() {
    let mut rb = Rb::new(ELEM, 4).unwrap();
    assert!(rb.enqueue(&elem(1)));
    let mut out = [0; 4];
    rb.dequeue(Some(&mut out));
}

#[test]
fn split_ends() {
    let (mut prod, mut cons) = Rb::new(ELEM, 4).unwrap().split();

    assert_eq!(prod.capacity().get(), 4);
    assert_eq!(cons.capacity().get(), 4);

    assert!(prod.enqueue(&elem(5)));
    assert!(prod.enqueue(&elem(6)));
    assert_eq!(cons.count(), 2);
    assert_eq!(prod.count(), 2);

    assert_eq!(cons.peek().map(value), Some(5));
    assert!(cons.skip());
    assert_eq!(cons.peek().map(value), Some(6));
    assert_eq!(prod.vacant_len(), 2);
}
