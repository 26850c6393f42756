use insta::assert_snapshot;

use imseq::{seq, Error, Sequence, SequenceExt};
use imseq_combinators::{
    concat, drop, filter, group, group_by, interleave, map, partition, reduce, take, to_index_map,
    unzip, zip,
};

#[test]
fn test_end_to_end() {
    let xs = seq![1, 2, 3, 4, 5];
    assert_eq!(xs.subsequence(1, 4), [2, 3, 4]);
    assert_eq!(filter(xs.clone(), |x: &i32| x % 2 == 0), [2, 4]);
    assert_eq!(map(xs.clone(), |x: i32| 2 * x), [2, 4, 6, 8, 10]);

    let chunks = partition(xs.clone(), 2).unwrap();
    assert_snapshot!(chunks.to_string(), @"[[1, 2], [3, 4], [5]]");
    assert_eq!(reduce(&xs, |x: &i32, acc: i32| acc + x, 0), 15);
    assert_eq!(xs, [1, 2, 3, 4, 5]);
}

#[test]
fn test_group_strings() {
    let runs = group(["a", "a", "b", "a"]);
    assert_snapshot!(runs.to_string(), @"[[a, a], [b], [a]]");
}

#[test]
fn test_group_by_case_insensitive() {
    let runs = group_by(["A", "a", "b", "B", "a"], |x: &&str, y: &&str| {
        x.eq_ignore_ascii_case(y)
    });
    assert_snapshot!(runs.to_string(), @"[[A, a], [b, B], [a]]");
}

#[test]
fn test_partition_error_message() {
    let error = partition(seq!['x'], 0).unwrap_err();
    assert!(matches!(error, Error::InvalidArgument(_)));
    assert_snapshot!(error.to_string(), @"invalid argument: partition size must be at least 1");
}

#[test]
fn test_chunks_can_be_detached() {
    let chunks = partition(0..7, 3).unwrap();
    let detached: Sequence<Sequence<i32>> = map(&chunks, |chunk: &imseq::View<i32>| {
        chunk.to_sequence()
    });
    assert_snapshot!(detached.to_string(), @"[[0, 1, 2], [3, 4, 5], [6]]");
    assert!(!detached[0].shares_buffer_with(&chunks[0]));
}

#[test]
fn test_zip_and_unzip() {
    let pairs = zip(["one", "two", "three"], 1..);
    assert_snapshot!(format!("{pairs:?}"), @r#"[("one", 1), ("two", 2), ("three", 3)]"#);
    let (names, numbers) = unzip(pairs);
    assert_eq!(names, ["one", "two", "three"]);
    assert_eq!(numbers, [1, 2, 3]);
}

#[test]
fn test_take_drop_concat() {
    let xs = seq!['a', 'b', 'c', 'd'];
    let joined = concat(take(xs.clone(), 1), drop(xs.clone(), 1));
    assert_eq!(joined, xs);
    assert_snapshot!(interleave(take(xs.clone(), 2), drop(xs, 2)).to_string(), @"[a, c, b, d]");
}

#[test]
fn test_index_map_from_sequences() {
    let keys = seq!["b", "a"];
    let values = map(&keys, |key: &&str| key.len());
    let map = to_index_map(keys, values);
    assert_snapshot!(format!("{map:?}"), @r#"{"b": 1, "a": 1}"#);
}
