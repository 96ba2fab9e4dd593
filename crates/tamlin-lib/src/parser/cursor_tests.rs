use super::cursor::Cursor;

#[test]
fn peek_does_not_consume() {
    let mut cur = Cursor::new(&[0xAA, 0xBB]);
    assert_eq!(cur.peek(), Some(0xAA));
    assert_eq!(cur.peek(), Some(0xAA));
    assert_eq!(cur.peek_at(1), Some(0xBB));
    assert_eq!(cur.peek_at(2), None);
    assert_eq!(cur.pos(), 0);
    assert_eq!(cur.remaining(), 2);

    assert_eq!(cur.bump(), Some(0xAA));
    assert_eq!(cur.pos(), 1);
}

#[test]
fn bump_stops_at_the_end() {
    let mut cur = Cursor::new(&[1]);
    assert_eq!(cur.bump(), Some(1));
    assert_eq!(cur.bump(), None);
    assert!(cur.is_empty());
}

#[test]
fn take_is_all_or_nothing() {
    let mut cur = Cursor::new(b"abcd");
    assert_eq!(cur.take(2), Some(&b"ab"[..]));
    assert_eq!(cur.take(3), None);
    assert_eq!(cur.pos(), 2);
    assert_eq!(cur.take(2), Some(&b"cd"[..]));
    assert!(cur.is_empty());
}

#[test]
fn take_rest_drains_the_region() {
    let mut cur = Cursor::new(b"abcd");
    cur.take(1);
    assert_eq!(cur.take_rest(), b"bcd");
    assert!(cur.is_empty());
    assert_eq!(cur.take_rest(), b"");
}

#[test]
fn restore_rewinds_position_and_limit() {
    let mut cur = Cursor::new(b"abcdef");
    let mark = cur.mark();
    cur.take(2);
    let prev = cur.narrow(2).unwrap();
    assert_eq!(cur.remaining(), 2);

    cur.restore(mark);
    assert_eq!(cur.pos(), 0);
    assert_eq!(cur.remaining(), 6);
    let _ = prev;
}

#[test]
fn narrow_bounds_reads() {
    let mut cur = Cursor::new(b"abcdef");
    let prev = cur.narrow(3).unwrap();
    assert_eq!(cur.remaining(), 3);
    assert_eq!(cur.take(4), None);
    assert_eq!(cur.take_rest(), b"abc");
    assert!(cur.is_empty());

    cur.widen(prev);
    assert_eq!(cur.remaining(), 3);
    assert_eq!(cur.take_rest(), b"def");
}

#[test]
fn narrow_past_the_region_fails() {
    let mut cur = Cursor::new(b"ab");
    assert_eq!(cur.narrow(3), None);
    assert_eq!(cur.remaining(), 2);
}

#[test]
fn high_water_survives_restore() {
    let mut cur = Cursor::new(b"abcdef");
    let mark = cur.mark();
    cur.take(4);
    assert_eq!(cur.high_water(), 4);

    cur.restore(mark);
    assert_eq!(cur.pos(), 0);
    assert_eq!(cur.high_water(), 4);

    cur.take(2);
    assert_eq!(cur.high_water(), 4);
}
