use pretty_assertions::assert_eq;

use super::interpret;

#[test]
fn worked_example() {
    let source = "\
for i 1 2
print i
if i == 1
Yes
print 100
No
print 200
end
end

x
9
";
    assert_eq!(interpret(source), vec![1, 100, 2, 200]);
}

#[test]
fn insufficient_input_produces_nothing() {
    assert_eq!(interpret(""), Vec::<i64>::new());
    assert_eq!(interpret("print 1\n"), Vec::<i64>::new());
    assert_eq!(interpret("print 1\nx\n"), Vec::<i64>::new());
}

#[test]
fn trailing_lines_feed_the_environment() {
    let source = "print a\nprint b\nprint c\na b c\n10 -20\n";
    assert_eq!(interpret(source), vec![10, -20, 0]);
}

#[test]
fn crlf_input_runs_unchanged() {
    let source = "print a\r\na\r\n5\r\n";
    assert_eq!(interpret(source), vec![5]);
}

#[test]
fn blank_lines_are_invisible_to_the_layout() {
    let source = "\nprint a\n\n\na\n\n12\n\n";
    assert_eq!(interpret(source), vec![12]);
}

#[test]
fn malformed_constructs_degrade_silently() {
    let source = "\
for broken
print 1
end
if a ==
Yes
print 2
end
mystery line
x
1
";
    // The malformed `for` drops; its `end` is a no-op. `if a ==` compares
    // the unbound a (0) with the empty name (0), so the yes-branch runs.
    assert_eq!(interpret(source), vec![1, 2]);
}

#[test]
fn whole_pipeline_is_deterministic() {
    let source = "for i 1 3\nprint i\nend\nseed\n0\n";
    assert_eq!(interpret(source), interpret(source));
}
