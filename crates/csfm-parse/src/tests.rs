use std::fs;
use std::path::{Path, PathBuf};

use expect_test::expect_file;
use quickcheck_macros::quickcheck;
use text_size::{TextRange, TextSize};

use crate::{NodeKind, WalkEvent, parse};

#[derive(PartialEq, Eq, PartialOrd, Ord)]
struct TestCase {
    input: PathBuf,
    expected: PathBuf,
    bytes: Vec<u8>,
}

impl TestCase {
    fn list() -> Vec<Self> {
        let test_data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");

        let mut cases = fs::read_dir(&test_data_dir)
            .unwrap_or_else(|err| {
                panic!("Cannot read directory {}: {err}", test_data_dir.display())
            })
            .filter_map(|entry| {
                let path = entry.ok()?.path();
                if path.extension()? == "usfm" {
                    let expected = path.with_extension("tree");
                    let bytes = fs::read(&path).ok()?;
                    Some(Self { input: path, expected, bytes })
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();

        cases.sort();
        cases
    }
}

#[test]
fn parse_test_data() {
    let cases = TestCase::list();
    assert!(!cases.is_empty());

    for case in cases {
        let document = parse(&case.bytes)
            .unwrap_or_else(|err| panic!("{} failed: {err}", case.input.display()));

        let malformed = document
            .malformed()
            .map(|id| {
                let node = &document[id];
                format!("  {:?}@{:?} {}:{}\n", node.kind, node.range, node.line, node.column)
            })
            .collect::<String>();

        let actual = format!("{}Malformed:\n{malformed}", document.debug_tree(&case.bytes));
        expect_file![&case.expected].assert_eq(&actual);
    }
}

#[test]
fn marker_owns_following_text() {
    let bytes = b"\\v 1 In the beginning";
    let document = parse(bytes).unwrap();

    let markers: Vec<_> = document.markers().collect();
    assert_eq!(markers.len(), 1);

    let marker = &document[markers[0]];
    assert_eq!(marker.kind, NodeKind::Marker);
    assert_eq!(document.text(markers[0], bytes), b"\\v");
    assert_eq!(marker.name_range(), Some(TextRange::new(1.into(), 2.into())));

    let text = marker.child.unwrap();
    assert_eq!(document[text].kind, NodeKind::Text);
    assert_eq!(document[text].range.start(), TextSize::new(3));
    assert_eq!(document.text(text, bytes), b"1 In the beginning");
    assert_eq!(document.loose_text().count(), 0);
}

#[test]
fn empty_input_has_empty_root() {
    let document = parse(b"").unwrap();

    assert!(document.is_empty());
    assert_eq!(document.len(), 1);
    assert_eq!(document[document.root()].kind, NodeKind::Document);
    assert_eq!(document.markers().count(), 0);
    assert_eq!(document.loose_text().count(), 0);
}

#[test]
fn whitespace_only_input_has_empty_root() {
    let document = parse(b"  \t \n\n  ").unwrap();
    assert!(document.is_empty());
}

#[test]
fn marker_at_end_of_input() {
    let bytes = b"\\p";
    let document = parse(bytes).unwrap();

    let marker = document.markers().next().unwrap();
    assert_eq!(document[marker].range, TextRange::new(0.into(), 2.into()));
    assert_eq!(document.child(marker), None);
}

#[test]
fn lone_backslash_is_malformed_marker() {
    let document = parse(b"\\").unwrap();

    let malformed: Vec<_> = document.malformed().collect();
    assert_eq!(malformed.len(), 1);
    assert_eq!(document[malformed[0]].range, TextRange::new(0.into(), 1.into()));
    assert_eq!(document[malformed[0]].name_range(), Some(TextRange::empty(1.into())));
}

#[test]
fn markers_do_not_nest() {
    let bytes = b"\\f + \\ft note\\f*";
    let document = parse(bytes).unwrap();

    let names: Vec<_> = document.markers().map(|id| document.text(id, bytes)).collect();
    assert_eq!(names, [b"\\f".as_slice(), b"\\ft".as_slice(), b"\\f".as_slice()]);

    for marker in document.markers() {
        let child = document.child(marker).unwrap();
        assert_eq!(document.child(child), None);
        assert_eq!(document[child].next, None);
    }
}

#[test]
fn punctuation_ends_marker_name() {
    let bytes = b"\\w gracious|strong=\"H2587\"\\w*";
    let document = parse(bytes).unwrap();

    let markers: Vec<_> = document.markers().collect();
    assert_eq!(markers.len(), 2);
    assert_eq!(document.text(markers[0], bytes), b"\\w");
    assert_eq!(
        document.text(document.child(markers[0]).unwrap(), bytes),
        b"gracious|strong=\"H2587\""
    );
    assert_eq!(document.text(document.child(markers[1]).unwrap(), bytes), b"*");
}

#[test]
fn each_non_text_kind_ends_a_marker_name() {
    let cases: [(&[u8], &[u8]); 10] = [
        (b"\\id GEN", b"\\id"),
        (b"\\p\n", b"\\p"),
        (b"\\p\r\n", b"\\p"),
        (b"\\p\rx", b"\\p"),
        (b"\\q1 x", b"\\q"),
        (b"\\f+ x", b"\\f"),
        (b"\\x-", b"\\x"),
        (b"\\w//", b"\\w"),
        (b"\\a\\b", b"\\a"),
        (b"\\nd", b"\\nd"),
    ];

    for (bytes, name) in cases {
        let document = parse(bytes).unwrap();
        let first = document.markers().next().unwrap();
        assert_eq!(document.text(first, bytes), name, "{:?}", bstr::BStr::new(bytes));
    }
}

#[test]
fn text_before_first_marker_is_loose() {
    let bytes = b"intro\n\\c 1";
    let document = parse(bytes).unwrap();

    let loose: Vec<_> = document.loose_text().map(|id| document.text(id, bytes)).collect();
    assert_eq!(loose, [b"intro".as_slice()]);
    assert_eq!(document.markers().count(), 1);
}

#[test]
fn root_children_list_loose_text_first() {
    let bytes = b"\\v 1 In the\nbeginning \\v 2 x";
    let document = parse(bytes).unwrap();

    let children: Vec<_> = document
        .children(document.root())
        .map(|id| (document.node(id).kind, document.node(id).range))
        .collect();
    assert_eq!(children, vec![
        (NodeKind::Text, TextRange::new(12.into(), 22.into())),
        (NodeKind::Marker, TextRange::new(0.into(), 2.into())),
        (NodeKind::Marker, TextRange::new(22.into(), 24.into())),
    ]);

    let tree = document.debug_tree(bytes);
    let first = tree.lines().nth(1).unwrap();
    assert!(first.trim_start().starts_with("Text@12..22"), "{tree}");
}

#[test]
fn preorder_is_balanced() {
    let bytes = b"head\n\\p\n\\v 1 a\n\\v 2 b";
    let document = parse(bytes).unwrap();

    let mut depth = 0i32;
    let mut entered = 0;
    for event in document.preorder() {
        match event {
            WalkEvent::Enter(_) => {
                depth += 1;
                entered += 1;
            }
            WalkEvent::Leave(_) => depth -= 1,
        }
        assert!(depth >= 0);
    }

    assert_eq!(depth, 0);
    assert_eq!(entered, document.len());
}

#[test]
fn printing_does_not_consume_the_tree() {
    let bytes = b"\\v 1 text";
    let document = parse(bytes).unwrap();

    let first = document.debug_tree(bytes);
    let second = document.debug_tree(bytes);
    assert_eq!(first, second);
    assert_eq!(document.markers().count(), 1);
}

#[quickcheck]
fn nodes_stay_within_input(bytes: Vec<u8>) -> bool {
    let document = parse(&bytes).unwrap();
    let len = TextSize::try_from(bytes.len()).unwrap();

    document.iter().all(|(_, node)| node.range.end() <= len && node.range.start() <= node.range.end())
}

#[quickcheck]
fn markers_are_in_source_order(bytes: Vec<u8>) -> bool {
    let document = parse(&bytes).unwrap();
    let starts: Vec<_> = document.markers().map(|id| document[id].range.start()).collect();

    starts.windows(2).all(|pair| pair[0] < pair[1])
        && document.markers().all(|id| bytes[usize::from(document[id].range.start())] == b'\\')
}

#[quickcheck]
fn every_node_is_reachable(bytes: Vec<u8>) -> bool {
    let document = parse(&bytes).unwrap();
    let entered =
        document.preorder().filter(|event| matches!(event, WalkEvent::Enter(_))).count();
    entered == document.len()
}
