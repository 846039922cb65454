use crate::*;
use pretty_assertions::assert_eq;

fn option() -> Declaration {
    Declaration::new(
        "Option",
        vec![TypeParameter::new("A")],
        vec![
            Constructor::nullary("None"),
            Constructor::new("Some", vec![Member::positional(Type::var("A"))]).unwrap(),
        ],
    )
    .unwrap()
}

fn tree() -> Declaration {
    let tree_a = Type::reference("Tree", vec![Type::var("A")]);
    Declaration::new(
        "Tree",
        vec![TypeParameter::new("A")],
        vec![
            Constructor::nullary("Leaf"),
            Constructor::new(
                "Node",
                vec![
                    Member::positional(tree_a.clone()),
                    Member::positional(Type::var("A")),
                    Member::positional(tree_a),
                ],
            )
            .unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn classification() {
    let option = option();
    assert!(option.is_sum());
    assert!(!option.is_product());
    assert!(option.is_polymorphic());
    assert!(!option.is_enum());
    assert!(option.has_nullary());
    assert!(!option.is_recursive());

    let foo_bar = Declaration::new(
        "FooBar",
        vec![],
        vec![Constructor::nullary("Foo"), Constructor::nullary("Bar")],
    )
    .unwrap();
    assert!(foo_bar.is_enum());
    assert!(!foo_bar.is_polymorphic());
}

#[test]
fn recursive_members() {
    let tree = tree();
    assert!(tree.is_recursive());
    let node = &tree.ctors()[1];
    let flags: Vec<_> = node.members().iter().map(|m| tree.is_recursive_member(m)).collect();
    assert_eq!(flags, vec![true, false, true]);
}

#[test]
fn rejects_structural_violations() {
    assert_eq!(
        Declaration::new("Empty", vec![], vec![]),
        Err(ModelError::NoConstructors { data: "Empty".to_string() })
    );
    assert_eq!(
        Declaration::new("D", vec![], vec![Constructor::nullary("A"), Constructor::nullary("A")]),
        Err(ModelError::DuplicateConstructor { data: "D".to_string(), ctor: "A".to_string() })
    );
    assert_eq!(
        Declaration::new(
            "D",
            vec![TypeParameter::new("A"), TypeParameter::new("A")],
            vec![Constructor::nullary("C")]
        ),
        Err(ModelError::DuplicateParameter { data: "D".to_string(), param: "A".to_string() })
    );
    assert_eq!(
        Constructor::new(
            "C",
            vec![Member::named("x", Type::var("A")), Member::positional(Type::var("B"))]
        ),
        Err(ModelError::MixedMembers { ctor: "C".to_string() })
    );
    assert_eq!(
        Constructor::new(
            "C",
            vec![Member::named("x", Type::var("A")), Member::named("x", Type::var("B"))]
        ),
        Err(ModelError::DuplicateField { ctor: "C".to_string(), field: "x".to_string() })
    );
}

#[test]
fn ugly_prints_source_grammar() {
    let f = Formatter::new();
    assert_eq!(option().ugly(&f), "data Option A = None | Some A");
    assert_eq!(tree().ugly(&f), "data Tree A = Leaf | Node (Tree A) A (Tree A)");

    let user = Declaration::new(
        "User",
        vec![],
        vec![
            Constructor::new(
                "User",
                vec![
                    Member::named("name", Type::var("string")),
                    Member::named("surname", Type::var("string")),
                ],
            )
            .unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(user.ugly(&f), "data User = User { name :: string, surname :: string }");

    let state = Declaration::new(
        "State",
        vec![TypeParameter::new("S"), TypeParameter::constrained("A", Type::var("string"))],
        vec![
            Constructor::new(
                "State",
                vec![Member::positional(Type::arrow(
                    Type::var("S"),
                    Type::tuple(vec![Type::var("A"), Type::var("S")]),
                ))],
            )
            .unwrap(),
        ],
    )
    .unwrap();
    assert_eq!(state.ugly(&f), "data State S (A :: string) = State (S -> (A, S))");
}

#[test]
fn ugly_types() {
    let f = Formatter::new();
    let higher = Type::arrow(Type::arrow(Type::var("A"), Type::var("B")), Type::var("C"));
    assert_eq!(higher.ugly(&f), "(A -> B) -> C");
    let applied = Type::arrow(Type::reference("T", vec![Type::var("A")]), Type::unit());
    assert_eq!(applied.ugly(&f), "T A -> ()");
}
