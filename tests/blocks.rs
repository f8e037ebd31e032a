use blockscript::{SAMPLE_PROGRAM, error::ParseError, interpreter::blocks::BlockMap};
use pretty_assertions::assert_eq;

fn build(source: &str) -> BlockMap {
    let lines: Vec<&str> = source.lines().collect();
    BlockMap::build(&lines).unwrap_or_else(|e| panic!("block map failed: {e}"))
}

fn build_err(source: &str) -> ParseError {
    let lines: Vec<&str> = source.lines().collect();
    BlockMap::build(&lines).expect_err("block map built but was expected to fail")
}

#[test]
fn partners_link_both_ways() {
    let blocks = build(SAMPLE_PROGRAM);

    for (from, _) in blocks.entries() {
        let partner = blocks.partner(from).unwrap();
        assert_eq!(blocks.partner(partner), Some(from), "line {}", from + 1);
    }
}

#[test]
fn sample_program_map() {
    let blocks = build(SAMPLE_PROGRAM);

    assert_eq!(blocks.len(), 8);
    assert_eq!(blocks.partner(8), Some(25));
    assert_eq!(blocks.partner(9), Some(11));
    assert_eq!(blocks.partner(12), Some(24));
    assert_eq!(blocks.partner(28), Some(31));

    assert_eq!(blocks.else_after(11), Some(12));
    assert_eq!(blocks.else_after(15), Some(16));
    assert_eq!(blocks.else_after(19), Some(20));
    assert_eq!(blocks.else_after(25), None);
}

#[test]
fn chained_else_targets() {
    let blocks = build("START_IF x\nPRINT a\nEND_IF\nSTART_ELSE\nPRINT b\nEND_ELSE");

    assert_eq!(blocks.target(0), Some(2));
    assert_eq!(blocks.target(2), Some(3));
    assert_eq!(blocks.partner(2), Some(0));
    assert_eq!(blocks.target(3), Some(5));
    assert_eq!(blocks.if_before(3), Some(2));
    assert_eq!(blocks.if_before(5), None);
}

#[test]
fn else_must_directly_follow_end_if() {
    let blocks = build("START_IF x\nEND_IF\n\nSTART_ELSE\nEND_ELSE");

    assert_eq!(blocks.else_after(1), None);
    assert_eq!(blocks.target(1), Some(0));
    assert_eq!(blocks.partner(3), Some(4));
}

#[test]
fn only_if_blocks_chain_to_else() {
    let blocks = build("START_WHILE x\nEND_WHILE\nSTART_ELSE\nEND_ELSE");

    assert_eq!(blocks.else_after(1), None);
}

#[test]
fn body_covers_the_lines_between_markers() {
    let blocks = build("START_WHILE x > 0\nPRINT x\nASSIGN x = x - 1\nEND_WHILE");

    assert_eq!(blocks.body(0), Some(1..3));
    assert_eq!(blocks.body(3), None);
    assert_eq!(blocks.body(1), None);
}

#[test]
fn entries_are_sorted_and_use_jump_targets() {
    let blocks = build("START_IF x\nEND_IF\nSTART_ELSE\nSTART_FOR i FROM 1 TO 2 BY 1\nEND_FOR\nEND_ELSE");

    assert_eq!(blocks.entries(),
               vec![(0, 1), (1, 2), (2, 5), (3, 4), (4, 3), (5, 2)]);
}

#[test]
fn indentation_and_case() {
    let blocks = build("    START_FOR i FROM 1 TO 3 BY 1\n\tEND_FOR\nstart_if x\nend_if");

    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks.partner(0), Some(1));
    assert_eq!(blocks.partner(2), None);
}

#[test]
fn programs_without_blocks() {
    let blocks = build("ASSIGN x = 1\nPRINT x");

    assert!(blocks.is_empty());
    assert!(blocks.entries().is_empty());
    assert!(build("").is_empty());
}

#[test]
fn close_without_open_is_unbalanced() {
    assert_eq!(build_err("PRINT x\nEND_WHILE"),
               ParseError::UnbalancedBlock { marker: "END_WHILE".into(),
                                             line:   2, });
}

#[test]
fn close_of_another_kind_is_mismatched() {
    assert_eq!(build_err("START_IF x\nEND_FOR"),
               ParseError::MismatchedBlock { opened: "START_IF".into(),
                                             closed: "END_FOR".into(),
                                             line:   2, });
}

#[test]
fn open_without_close_is_unclosed() {
    assert_eq!(build_err("START_FOR i FROM 1 TO 3 BY 1\nSTART_IF x\nEND_IF"),
               ParseError::UnclosedBlock { marker: "START_FOR".into(),
                                           line:   1, });
}
