use blockscript::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context,
        lexer::{Token, tokenize},
        value::Value,
    },
};
use pretty_assertions::assert_eq;

fn eval(expression: &str) -> Value {
    Context::new().eval_expression(expression, 1)
                  .unwrap_or_else(|e| panic!("'{expression}' failed: {e}"))
}

fn eval_err(expression: &str) -> RuntimeError {
    Context::new().eval_expression(expression, 1)
                  .expect_err("expression succeeded but was expected to fail")
}

#[test]
fn tokenizer_splits_operators_without_spaces() {
    use Token::{Identifier, Integer};

    assert_eq!(tokenize("a<=b", 1).unwrap(),
               vec![Identifier("a".into()), Token::LessEqual, Identifier("b".into())]);
    assert_eq!(tokenize("x<y", 1).unwrap(),
               vec![Identifier("x".into()), Token::Less, Identifier("y".into())]);
    assert_eq!(tokenize("(n_1+2)*3", 1).unwrap(),
               vec![Token::LParen,
                    Identifier("n_1".into()),
                    Token::Plus,
                    Integer(2),
                    Token::RParen,
                    Token::Star,
                    Integer(3)]);
    assert_eq!(tokenize("a != b >= c > d", 1).unwrap(),
               vec![Identifier("a".into()),
                    Token::BangEqual,
                    Identifier("b".into()),
                    Token::GreaterEqual,
                    Identifier("c".into()),
                    Token::Greater,
                    Identifier("d".into())]);
}

#[test]
fn tokenizer_has_no_negative_literals() {
    assert_eq!(tokenize("-5", 1).unwrap(), vec![Token::Minus, Token::Integer(5)]);
}

#[test]
fn tokenizer_keeps_mixed_words_as_identifiers() {
    assert_eq!(tokenize("12abc", 1).unwrap(), vec![Token::Identifier("12abc".into())]);
    assert!(tokenize("   ", 1).unwrap().is_empty());
}

#[test]
fn tokenizer_reads_lone_assignment_and_bang_as_names() {
    use Token::Identifier;

    assert_eq!(tokenize("a=b", 3).unwrap(), vec![Identifier("a=b".into())]);
    assert_eq!(tokenize("!a", 1).unwrap(), vec![Identifier("!a".into())]);
    assert_eq!(tokenize("x = 5", 1).unwrap(),
               vec![Identifier("x".into()), Identifier("=".into()), Token::Integer(5)]);
    assert_eq!(tokenize("5= =x", 1).unwrap(),
               vec![Identifier("5=".into()), Identifier("=x".into())]);
    assert_eq!(tokenize("a==b", 1).unwrap(),
               vec![Identifier("a".into()), Token::EqualEqual, Identifier("b".into())]);
    assert_eq!(tokenize("a!=b", 1).unwrap(),
               vec![Identifier("a".into()), Token::BangEqual, Identifier("b".into())]);
}

#[test]
fn tokenizer_rejects_oversized_literals() {
    assert!(matches!(tokenize("99999999999999999999", 1),
                     Err(ParseError::LiteralTooLarge { .. })));
}

#[test]
fn precedence_is_respected() {
    assert_eq!(eval("2 + 3 * 4"), Value::Integer(14));
    assert_eq!(eval("2 * 3 + 4"), Value::Integer(10));
    assert_eq!(eval("20 - 6 % 4"), Value::Integer(18));
    assert_eq!(eval("1 + 2 < 2 * 2"), Value::Bool(true));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(eval("(2 + 3) * 4"), Value::Integer(20));
    assert_eq!(eval("2 * (3 + 4) - 1"), Value::Integer(13));
    assert_eq!(eval("((1 + 1) * (2 + 2))"), Value::Integer(8));
}

#[test]
fn equal_precedence_is_left_associative() {
    assert_eq!(eval("10 - 3 - 2"), Value::Integer(5));
    assert_eq!(eval("100 / 10 / 5"), Value::Real(2.0));
    assert_eq!(eval("7 % 4 * 3"), Value::Integer(9));
}

#[test]
fn division_always_yields_a_real() {
    assert_eq!(eval("7 / 2"), Value::Real(3.5));
    assert_eq!(eval("6 / 3"), Value::Real(2.0));
    assert_eq!(eval("7 / 2 + 1"), Value::Real(4.5));
}

#[test]
fn remainder_takes_the_sign_of_the_divisor() {
    assert_eq!(eval("7 % 3"), Value::Integer(1));
    assert_eq!(eval("0 - 7 % 3"), Value::Integer(-1));
    assert_eq!(eval("(0 - 7) % 3"), Value::Integer(2));
    assert_eq!(eval("7 % (0 - 3)"), Value::Integer(-2));
    assert_eq!(eval("(7 / 2) % 2"), Value::Real(1.5));
}

#[test]
fn comparisons_yield_booleans() {
    assert_eq!(eval("3 == 3"), Value::Bool(true));
    assert_eq!(eval("3 != 3"), Value::Bool(false));
    assert_eq!(eval("2 <= 2"), Value::Bool(true));
    assert_eq!(eval("2 >= 3"), Value::Bool(false));
    assert_eq!(eval("6 / 4 > 1"), Value::Bool(true));
    assert_eq!(eval("4 / 2 == 2"), Value::Bool(true));
}

#[test]
fn variables_resolve_and_unbound_names_read_as_zero() {
    let mut context = Context::new();
    context.set_variable("x", Value::Integer(6));
    context.set_variable("greeting", Value::Text("hi".into()));

    assert_eq!(context.eval_expression("x * 7", 1).unwrap(), Value::Integer(42));
    assert_eq!(context.eval_expression("y + 1", 1).unwrap(), Value::Integer(1));
    assert_eq!(context.eval_expression("greeting == greeting", 1).unwrap(),
               Value::Bool(true));
    assert_eq!(context.eval_expression("greeting == x", 1).unwrap(), Value::Bool(false));
}

#[test]
fn division_and_remainder_by_zero_fail() {
    assert!(matches!(eval_err("10 / 0"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(eval_err("10 % 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(eval_err("(1 / 2) / 0"), RuntimeError::DivisionByZero { .. }));
    assert!(matches!(eval_err("1 / (2 - 2)"), RuntimeError::DivisionByZero { .. }));
}

#[test]
fn missing_operands_are_malformed() {
    assert!(matches!(eval_err("-5"), RuntimeError::MalformedExpression { .. }));
    assert!(matches!(eval_err("2 +"), RuntimeError::MalformedExpression { .. }));
    assert!(matches!(eval_err(""), RuntimeError::MalformedExpression { .. }));
    assert!(matches!(eval_err("()"), RuntimeError::MalformedExpression { .. }));
}

#[test]
fn unsupported_operands_are_type_errors() {
    let mut context = Context::new();
    context.set_variable("s", Value::Text("abc".into()));
    context.set_variable("flag", Value::Bool(true));

    assert!(matches!(context.eval_expression("s * 2", 4),
                     Err(RuntimeError::TypeError { line: 4, .. })));
    assert!(matches!(context.eval_expression("flag + 1", 4),
                     Err(RuntimeError::TypeError { .. })));
    assert!(matches!(context.eval_expression("s < 1", 4),
                     Err(RuntimeError::TypeError { .. })));
}

#[test]
fn integer_overflow_is_reported() {
    assert!(matches!(eval_err("9223372036854775807 + 1"), RuntimeError::Overflow { .. }));
}

#[test]
fn operands_without_an_operator_keep_the_first() {
    let mut context = Context::new();
    context.set_variable("x", Value::Integer(5));

    assert_eq!(eval("2 3"), Value::Integer(2));
    assert_eq!(context.eval_expression("x = 5", 1).unwrap(), Value::Integer(5));
    assert_eq!(context.eval_expression("x=5", 1).unwrap(), Value::Integer(0));
    assert_eq!(eval("1 2 + 3"), Value::Integer(1));
}

#[test]
fn lexical_errors_surface_from_evaluation() {
    assert!(matches!(eval_err("1 + 99999999999999999999"),
                     RuntimeError::Parse(ParseError::LiteralTooLarge { line: 1, .. })));
}
