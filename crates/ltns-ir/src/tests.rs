//! Tests for ltns-ir.

use crate::{BinOp, Expr, KeywordArg, Params, Program, Stmt, KEYWORD_CONSTRUCTOR};

#[test]
fn test_expr_constructors() {
    assert_eq!(Expr::name("x"), Expr::Name("x".into()));
    assert_eq!(Expr::str("hi"), Expr::Str("hi".into()));
}

#[test]
fn test_keyword_is_a_call() {
    let expr = Expr::keyword("hello");
    match &expr {
        Expr::Call { func, args, keywords } => {
            assert_eq!(func.as_name(), Some(KEYWORD_CONSTRUCTOR));
            assert_eq!(args, &vec![Expr::str("hello")]);
            assert!(keywords.is_empty());
        }
        other => panic!("expected call, got {:?}", other),
    }
    assert_ne!(expr, Expr::str("hello"));
}

#[test]
fn test_params_names_order() {
    let params = Params::new(["a", "b"])
        .with_rest("more")
        .with_keyword("k", Expr::Int(1));
    let names: Vec<_> = params.names().collect();
    assert_eq!(names, vec!["a", "b", "more", "k"]);
    assert!(!params.is_empty());
    assert!(Params::default().is_empty());
}

#[test]
fn test_nullary_call_of() {
    assert!(Expr::call(Expr::name("f"), vec![]).is_nullary_call_of("f"));
    assert!(!Expr::call(Expr::name("f"), vec![Expr::Int(1)]).is_nullary_call_of("f"));
    assert!(!Expr::call(Expr::name("g"), vec![]).is_nullary_call_of("f"));
    assert!(!Expr::name("f").is_nullary_call_of("f"));
}

#[test]
fn test_program_json_roundtrip() {
    let program = Program::new(vec![
        Stmt::function_def(
            "_temp_func_1",
            Params::default(),
            vec![
                Stmt::If {
                    test: Expr::name("ready"),
                    then: vec![
                        Stmt::Expr(Expr::call(Expr::name("print"), vec![Expr::str("go")])),
                        Stmt::assign("_temp_var_2", Expr::Int(1)),
                    ],
                    orelse: vec![Stmt::assign("_temp_var_2", Expr::None)],
                },
                Stmt::Return(Expr::name("_temp_var_2")),
            ],
        ),
        Stmt::Expr(Expr::call(Expr::name("_temp_func_1"), vec![])),
    ]);

    let json = serde_json::to_string(&program).unwrap();
    let parsed: Program = serde_json::from_str(&json).unwrap();

    assert_eq!(program, parsed);
}

#[test]
fn test_render_expressions() {
    assert_eq!(Expr::name("x").to_string(), "x");
    assert_eq!(Expr::str("a\"b\n").to_string(), "\"a\\\"b\\n\"");
    assert_eq!(Expr::Int(-3).to_string(), "-3");
    assert_eq!(Expr::Float(1.0).to_string(), "1.0");
    assert_eq!(Expr::Float(f64::INFINITY).to_string(), "float(\"inf\")");
    assert_eq!(
        Expr::Complex { re: 1.0, im: 2.0 }.to_string(),
        "complex(1.0, 2.0)"
    );
    assert_eq!(
        Expr::List(vec![Expr::Int(1), Expr::List(vec![])]).to_string(),
        "[1, []]"
    );
    assert_eq!(
        Expr::binop(BinOp::Pow, Expr::Int(2), Expr::Int(8)).to_string(),
        "(2 ** 8)"
    );
    assert_eq!(
        Expr::if_exp(Expr::name("t"), Expr::Int(1), Expr::None).to_string(),
        "(1 if t else None)"
    );
}

#[test]
fn test_render_calls_and_lambdas() {
    let call = Expr::call_with_keywords(
        Expr::name("print"),
        vec![Expr::str("a"), Expr::str("b")],
        vec![KeywordArg::new("sep", Expr::str("-"))],
    );
    assert_eq!(call.to_string(), "print(\"a\", \"b\", sep=\"-\")");

    let only_keywords = Expr::call_with_keywords(
        Expr::name("f"),
        vec![],
        vec![KeywordArg::new("x", Expr::Int(1))],
    );
    assert_eq!(only_keywords.to_string(), "f(x=1)");

    let lambda = Expr::lambda(
        Params::new(["a"]).with_rest("rest").with_keyword("k", Expr::Int(0)),
        Expr::name("a"),
    );
    assert_eq!(lambda.to_string(), "(lambda a, *rest, k=0: a)");
    assert_eq!(
        Expr::call(lambda, vec![Expr::Int(1)]).to_string(),
        "((lambda a, *rest, k=0: a))(1)"
    );
    assert_eq!(
        Expr::lambda(Params::default(), Expr::None).to_string(),
        "(lambda: None)"
    );
}

#[test]
fn test_render_program() {
    let program = Program::new(vec![
        Stmt::function_def(
            "_temp_func_1",
            Params::default(),
            vec![
                Stmt::If {
                    test: Expr::name("ready"),
                    then: vec![
                        Stmt::Expr(Expr::call(Expr::name("print"), vec![Expr::str("go")])),
                        Stmt::assign("_temp_var_2", Expr::Int(1)),
                    ],
                    orelse: vec![Stmt::assign("_temp_var_2", Expr::Int(0))],
                },
                Stmt::Return(Expr::name("_temp_var_2")),
            ],
        ),
        Stmt::Expr(Expr::call(
            Expr::name("print"),
            vec![Expr::call(Expr::name("_temp_func_1"), vec![])],
        )),
    ]);

    let expected = "\
def _temp_func_1():
    if ready:
        print(\"go\")
        _temp_var_2 = 1
    else:
        _temp_var_2 = 0
    return _temp_var_2
print(_temp_func_1())
";
    assert_eq!(program.to_string(), expected);
}

#[test]
fn test_render_empty_bodies() {
    assert_eq!(Program::default().to_string(), "pass\n");
    let stmt = Stmt::If {
        test: Expr::name("x"),
        then: vec![],
        orelse: vec![],
    };
    assert_eq!(stmt.to_string(), "if x:\n    pass\n");
}
