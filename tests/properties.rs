use prefixa::{
    ast::{Expr, Operator, OperatorKind},
    interpreter::{
        compiler::compile,
        evaluator::{evaluate, fold::fold},
        lexer::lex,
        parser::{core::is_number_literal, parse},
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

const KINDS: [OperatorKind; 4] =
    [OperatorKind::Sum, OperatorKind::Sub, OperatorKind::Div, OperatorKind::Mul];
const WHITESPACE: [&str; 5] = [" ", "  ", "\t", "\n", " \r\n "];

/// Builds the tokens of a random well-formed expression.
///
/// An operation takes every token after it, so only the last operand of an
/// operation can itself be an operation.
fn random_tokens(rng: &mut StdRng, depth: u32, tokens: &mut Vec<String>) {
    if depth == 0 || rng.gen_bool(0.25) {
        tokens.push(rng.gen_range(0..1000).to_string());
        return;
    }

    tokens.push(KINDS.choose(rng).map_or("sum", |kind| kind.keyword()).to_string());
    for _ in 0..rng.gen_range(1..4) {
        tokens.push(rng.gen_range(0..1000).to_string());
    }
    if rng.gen_bool(0.7) {
        random_tokens(rng, depth - 1, tokens);
    }
}

fn random_source(rng: &mut StdRng) -> String {
    let mut tokens = Vec::new();
    random_tokens(rng, 6, &mut tokens);

    let mut source = String::from(*WHITESPACE.choose(rng).unwrap_or(&" "));
    for token in tokens {
        source.push_str(&token);
        source.push_str(WHITESPACE.choose(rng).unwrap_or(&" "));
    }
    source
}

fn samples() -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..500).map(|_| random_source(&mut rng)).collect()
}

#[test]
fn tree_shape_matches_token_kinds() {
    for source in samples() {
        let tokens = lex(&source);
        let ast = parse(&tokens).unwrap_or_else(|e| panic!("{source:?} failed to parse: {e}"));

        let numbers = tokens.iter().filter(|t| is_number_literal(t)).count();
        let keywords = tokens.iter()
                             .filter(|t| OperatorKind::from_keyword(t).is_some())
                             .count();

        assert_eq!(ast.leaf_count(), numbers, "leaves of {source:?}");
        assert_eq!(ast.operation_count(), keywords, "operations of {source:?}");
    }
}

#[test]
fn compiled_code_joins_every_operand() {
    for source in samples() {
        let ast = parse(&lex(&source)).unwrap();
        let code = compile(&ast).unwrap();

        let symbols = KINDS.iter()
                           .map(|kind| code.matches(&format!(" {} ", kind.symbol())).count())
                           .sum::<usize>();

        // Each operation with n operands contributes n - 1 symbols.
        assert_eq!(symbols, ast.leaf_count() - 1, "symbols in {code:?}");
        assert_eq!(code.matches('(').count(), ast.operation_count());
    }
}

#[test]
fn evaluation_and_compilation_visit_the_same_operands() {
    for source in samples() {
        let ast = parse(&lex(&source)).unwrap();
        assert_operands_agree(&ast);
    }
}

/// Rebuilds each operation's result from its operands' results and checks
/// that both walkers used the whole operand list.
fn assert_operands_agree(expr: &Expr) {
    let Expr::Operation { operator: Operator::Known(kind),
                          operands,
                          position, } = expr
    else {
        return;
    };

    let parts = operands.iter().map(|o| compile(o).unwrap()).collect::<Vec<_>>();
    let separator = format!(" {} ", kind.symbol());
    assert_eq!(compile(expr).unwrap(), format!("({})", parts.join(separator.as_str())));

    if let Ok(values) = operands.iter().map(evaluate).collect::<Result<Vec<_>, _>>() {
        assert_eq!(evaluate(expr), fold(*kind, &values, *position));
    }

    operands.iter().for_each(assert_operands_agree);
}

#[test]
fn lexing_is_idempotent() {
    let mut inputs = samples();
    inputs.extend(["", "   ", "\t\n", "sum", "  a b\t\tc  d ", "x\r\ny"].map(String::from));

    for source in inputs {
        let tokens = lex(&source);
        assert_eq!(lex(&tokens.join(" ")), tokens, "{source:?}");
        assert!(tokens.iter().all(|t| !t.is_empty() && !t.contains(char::is_whitespace)));
    }
}

#[test]
fn flat_sums_add_their_literals() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..100 {
        let values = (0..rng.gen_range(0..20)).map(|_| rng.gen_range(0..10_000_i64))
                                              .collect::<Vec<_>>();
        let source = std::iter::once("sum".to_string()).chain(values.iter().map(i64::to_string))
                                                       .collect::<Vec<_>>()
                                                       .join(" ");

        let ast = parse(&lex(&source)).unwrap();
        assert_eq!(evaluate(&ast).map(|v| v.as_integer()),
                   Ok(Some(values.iter().sum::<i64>())));
    }
}
