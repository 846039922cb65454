use adtc_codegen::{
    FragmentKind, Item, Options, generate,
    target::{Const, Expr, Function, Stmt, TypeParam},
};
use adtc_surface::{ParseFailure, parse};
use adtc_syntax::{Constructor, Declaration, Formatter, TypeParameter, Ugly};
use std::collections::HashSet;
use pretty_assertions::assert_eq;

fn kinds(data: &Declaration, options: &Options) -> Vec<FragmentKind> {
    generate(data, options).iter().map(|fragment| fragment.kind).collect()
}

fn folds(data: &Declaration, options: &Options) -> Vec<Function> {
    (generate(data, options).into_iter())
        .filter(|fragment| fragment.kind == FragmentKind::Fold)
        .map(|fragment| match fragment.item {
            | Item::Function(function) => function,
            | item => panic!("fold is not a function: {item:?}"),
        })
        .collect()
}

fn return_parameter(fold: &Function) -> String {
    let TypeParam { name, .. } = fold.type_params.last().unwrap();
    name.clone()
}

/* -------------------------------- Scenarios ------------------------------- */

#[test]
fn option_has_eager_and_lazy_folds() {
    let data = parse("data Option A = None | Some A").unwrap();
    let options = Options::default();
    let fragments = generate(&data, &options);
    let text = adtc_driver::compile("data Option A = None | Some A", &options).unwrap();
    assert!(text.contains(r#"readonly type: "None";"#));
    assert!(text.contains(r#"readonly type: "Some";"#));
    assert!(text.contains("export const none: Option<never>"));
    assert!(text.contains("export function some<A>(value0: A): Option<A>"));
    let folds = folds(&data, &options);
    assert_eq!(folds.iter().map(|f| f.name.as_str()).collect::<Vec<_>>(), vec!["fold", "foldL"]);
    for fold in &folds {
        // matchee plus one handler per constructor
        assert_eq!(fold.params.len(), 3);
    }
    assert_eq!(fragments[0].kind, FragmentKind::Data);
}

#[test]
fn either_has_only_the_lazy_fold() {
    let data = parse("data Either L R = Left L | Right R").unwrap();
    let folds = folds(&data, &Options::default());
    assert_eq!(folds.len(), 1);
    assert_eq!(folds[0].name, "fold");
    assert_eq!(return_parameter(&folds[0]), "R1");
}

#[test]
fn user_is_a_product() {
    let data = parse("data User = User { name :: string, surname :: string }").unwrap();
    assert!(data.is_product());
    let options = Options::default();
    assert_eq!(
        kinds(&data, &options),
        vec![FragmentKind::Data, FragmentKind::Constructor, FragmentKind::Import, FragmentKind::Equality]
    );
    assert_eq!(
        kinds(&data, &options.clone().with_equality(false)),
        vec![FragmentKind::Data, FragmentKind::Constructor]
    );
    let text = adtc_driver::compile(&data.ugly(&Formatter::new()), &options).unwrap();
    assert!(text.contains("export function user(name: string, surname: string): User"));
    assert!(!text.contains("readonly type:"));
    assert!(text.contains("export function getEq(eqName: Eq<string>, eqSurname: Eq<string>): Eq<User>"));
}

#[test]
fn tree_equality_refers_to_itself() {
    let data = parse("data Tree A = Leaf | Node (Tree A) A (Tree A)").unwrap();
    assert!(data.is_recursive());
    let fragments = generate(&data, &Options::default());
    let equality = (fragments.into_iter())
        .find(|fragment| fragment.kind == FragmentKind::Equality)
        .unwrap();
    let Item::Function(function) = equality.item else { panic!("equality is not a function") };
    // only the `A` member asks for a comparator
    assert_eq!(function.params.len(), 1);
    assert_eq!(function.params[0].name, "eqNodeValue1");
    assert!(matches!(&function.body[0], Stmt::Const { name, .. } if name == "S"));
    assert!(matches!(&function.body[1], Stmt::Return(Expr::Ident(name)) if name == "S"));
}

#[test]
fn malformed_declaration_reports_empty_tail() {
    let failure = parse("data Option A = ").unwrap_err();
    assert_eq!(
        failure,
        ParseFailure { expected: "a data declaration".to_string(), remaining: String::new(), reason: None }
    );
    assert_eq!(failure.to_string(), r#"Expected a data declaration, cannot parse """#);
}

/* ------------------------------- Properties ------------------------------- */

const CORPUS: &[&str] = &[
    "data Option A = None | Some A",
    "data Either L R = Left L | Right R",
    "data User = User { name :: string, surname :: string }",
    "data Tree A = Leaf | Node (Tree A) A (Tree A)",
    "data FooBar = Foo | Bar",
    "data Unit = Unit",
    "data Constrained (A :: string) = Fetching | GotData A",
    "data State S A = State S -> (A, S)",
    "data Thunk A = Thunk (() -> A) | Done ()",
    "data Shape = Circle { radius :: number } | Rect { w :: number, h :: number } | Dot",
    "data Pair A B = Pair (A, B) | Swapped (B, A) (Pair A B)",
];

#[test]
fn compiling_is_deterministic() {
    let options = Options::default().with_record_handlers("handlers");
    for source in CORPUS {
        let first = adtc_driver::compile(source, &options).unwrap();
        let second = adtc_driver::compile(source, &options).unwrap();
        assert_eq!(first, second, "{source}");
    }
}

#[test]
fn generation_shape_follows_classification() {
    let options = Options::default().with_equality(false);
    for source in CORPUS {
        let data = parse(source).unwrap();
        let kinds = kinds(&data, &options);
        let ctors = kinds.iter().filter(|kind| **kind == FragmentKind::Constructor).count();
        assert_eq!(ctors, data.ctors().len(), "{source}");
        let folds = kinds.iter().filter(|kind| **kind == FragmentKind::Fold).count();
        if data.is_sum() {
            assert_eq!(folds, if data.has_nullary() { 2 } else { 1 }, "{source}");
            assert!(kinds.contains(&FragmentKind::Accessor), "{source}");
        } else {
            assert_eq!(kinds, vec![FragmentKind::Data, FragmentKind::Constructor], "{source}");
        }
    }
}

#[test]
fn folds_are_exhaustive() {
    for source in CORPUS {
        let data = parse(source).unwrap();
        for fold in folds(&data, &Options::default()) {
            let [Stmt::Switch { cases, .. }] = fold.body.as_slice() else {
                panic!("fold body is not a single switch: {source}")
            };
            assert_eq!(cases.len(), data.ctors().len(), "{source}");
            for (case, ctor) in cases.iter().zip(data.ctors()) {
                assert_eq!(case.label, Expr::Str(ctor.name().to_owned()));
                match &case.body {
                    | Stmt::Return(Expr::Call { args, .. }) => {
                        assert_eq!(args.len(), ctor.members().len(), "{source}");
                    }
                    | Stmt::Return(Expr::Ident(_)) => {
                        assert!(ctor.is_nullary(), "{source}");
                    }
                    | body => panic!("unexpected case body {body:?}"),
                }
            }
        }
    }
}

#[test]
fn return_parameter_is_fresh() {
    let declared = ["R", "R1", "R2"];
    for taken in 0..=declared.len() {
        let params = declared[..taken].iter().map(|name| TypeParameter::new(*name)).collect();
        let data =
            Declaration::new("Busy", params, vec![Constructor::nullary("A"), Constructor::nullary("B")])
                .unwrap();
        for fold in folds(&data, &Options::default()) {
            let ret = return_parameter(&fold);
            assert!(!declared[..taken].contains(&ret.as_str()), "{ret} collides");
            let expected = if taken == 0 { "R".to_string() } else { format!("R{taken}") };
            assert_eq!(ret, expected);
        }
    }
}

#[test]
fn reparsing_rebuilds_the_model() {
    let f = Formatter::new();
    for source in CORPUS {
        let data = parse(source).unwrap();
        assert_eq!(parse(source).unwrap(), data);
        let printed = data.ugly(&f);
        assert_eq!(parse(&printed).unwrap(), data, "{printed}");
    }
}

#[test]
fn exported_names_are_distinct() {
    let clashing = [
        "data X = Fold | FoldL | GetEq | FromEquals | Eq | Prism",
        "data R A = Foo | Bar A",
        "data Q = A_ number | A' string | Fold1",
        "data X = A { bC :: number } | AB { c :: string }",
    ];
    for source in CORPUS.iter().chain(&clashing) {
        let data = parse(source).unwrap();
        let mut seen = HashSet::new();
        for fragment in generate(&data, &Options::default()) {
            let name = match fragment.item {
                | Item::Const(Const { name, .. }) | Item::Function(Function { name, .. }) => name,
                | _ => continue,
            };
            assert!(seen.insert(name.clone()), "`{name}` bound twice for {source}");
        }
        for fold in folds(&data, &Options::default()) {
            let mut params = HashSet::new();
            for param in &fold.params {
                assert!(params.insert(param.name.clone()), "{source}");
            }
            assert_ne!(return_parameter(&fold), data.name(), "{source}");
        }
    }
}
