use class_graph::{Field, GraphError, Model, ModelBuilder, Type};
use pretty_assertions::assert_eq;

fn names(model: &Model) -> Vec<String> {
    let mut names: Vec<_> = model.types().map(|(_, ty)| ty.qualified_name()).collect();
    names.sort();
    names
}

fn relations(model: &Model) -> Vec<String> {
    let mut relations: Vec<_> = model
        .relations()
        .map(|r| {
            format!(
                "{} {} {}",
                model.get_type(r.from).unwrap().name,
                r.kind,
                model.get_type(r.to).unwrap().name
            )
        })
        .collect();
    relations.sort();
    relations
}

/// A -> B -> C
fn chain() -> Model {
    ModelBuilder::new().build(vec![
        Type::new("A", "").field(Field::new("b", "B")),
        Type::new("B", "").field(Field::new("c", "C")),
        Type::new("C", ""),
    ])
}

#[test]
fn depth_zero_is_the_seed_alone() {
    let model = chain();
    let a = model.types_with_name("A")[0];

    let sub = model.neighborhood(a, 0).unwrap();

    assert_eq!(names(&sub), vec!["A"]);
    assert_eq!(sub.relation_count(), 0);
}

#[test]
fn depth_one_stops_after_one_hop() {
    let model = chain();
    let a = model.types_with_name("A")[0];

    let sub = model.neighborhood(a, 1).unwrap();

    assert_eq!(names(&sub), vec!["A", "B"]);
    assert_eq!(relations(&sub), vec!["A encapsulates B"]);
}

#[test]
fn edges_are_followed_backwards() {
    let model = chain();
    let c = model.types_with_name("C")[0];

    let sub = model.neighborhood(c, 2).unwrap();

    assert_eq!(names(&sub), vec!["A", "B", "C"]);
    assert_eq!(
        relations(&sub),
        vec!["A encapsulates B", "B encapsulates C"]
    );
}

#[test]
fn cycles_terminate() {
    let model = ModelBuilder::new().build(vec![
        Type::new("A", "").field(Field::new("b", "B")),
        Type::new("B", "").field(Field::new("a", "A")),
    ]);
    let a = model.types_with_name("A")[0];

    let sub = model.neighborhood(a, 5).unwrap();

    assert_eq!(names(&sub), vec!["A", "B"]);
    assert_eq!(
        relations(&sub),
        vec!["A encapsulates B", "B encapsulates A"]
    );
}

#[test]
fn relations_leaving_the_neighborhood_are_dropped() {
    // Hub -> {Left, Right}, Right -> Far
    let model = ModelBuilder::new().build(vec![
        Type::new("Hub", "")
            .field(Field::new("left", "Left"))
            .field(Field::new("right", "Right")),
        Type::new("Left", ""),
        Type::new("Right", "").field(Field::new("far", "Far")),
        Type::new("Far", ""),
    ]);
    let left = model.types_with_name("Left")[0];

    let sub = model.neighborhood(left, 2).unwrap();

    assert_eq!(names(&sub), vec!["Hub", "Left", "Right"]);
    assert_eq!(
        relations(&sub),
        vec!["Hub encapsulates Left", "Hub encapsulates Right"]
    );
    // The parent model is untouched
    assert_eq!(model.type_count(), 4);
    assert_eq!(model.relation_count(), 3);
}

#[test]
fn every_node_within_depth_is_reached() {
    // A-B, A-C, B-C, C-D: D is reachable in two hops through C even if the
    // traversal meets C through B first.
    let model = ModelBuilder::new().build(vec![
        Type::new("A", "")
            .field(Field::new("b", "B"))
            .field(Field::new("c", "C")),
        Type::new("B", "").field(Field::new("c", "C")),
        Type::new("C", "").field(Field::new("d", "D")),
        Type::new("D", ""),
    ]);
    let a = model.types_with_name("A")[0];

    let sub = model.neighborhood(a, 2).unwrap();

    assert_eq!(names(&sub), vec!["A", "B", "C", "D"]);
    assert_eq!(sub.relation_count(), 4);
}

#[test]
fn same_named_types_are_distinct_nodes() {
    let model = ModelBuilder::new().build(vec![
        Type::new("Node", "a"),
        Type::new("Node", "b"),
        Type::new("Holder", "a").field(Field::new("n", "Unrelated")),
    ]);

    let nodes = model.types_with_name("Node");
    assert_eq!(nodes.len(), 2);
    assert_ne!(nodes[0], nodes[1]);

    let sub = model.neighborhood(nodes[1], 3).unwrap();
    assert_eq!(names(&sub), vec!["b.Node"]);
}

#[test]
fn focus_merges_same_named_seeds() {
    let model = ModelBuilder::new().build(vec![
        Type::new("Node", "a"),
        Type::new("Node", "b"),
        Type::new("Graph", "a").field(Field::new("root", "Node")),
        Type::new("Other", "c"),
    ]);

    let sub = model.focus("Node", 1).unwrap();

    assert_eq!(names(&sub), vec!["a.Graph", "a.Node", "b.Node"]);
    assert_eq!(sub.relation_count(), 2);

    assert_eq!(
        model.focus("Missing", 1).unwrap_err(),
        GraphError::TypeNotFound("Missing".to_string())
    );
}

#[test]
fn user_address_scenario() {
    let model = ModelBuilder::new().build(vec![
        Type::new("User", "")
            .field(Field::new("name", "String"))
            .field(Field::new("address", "Address")),
        Type::new("Address", "").field(Field::new("city", "String")),
    ]);
    assert_eq!(relations(&model), vec!["User encapsulates Address"]);

    let address = model.types_with_name("Address")[0];
    let sub = model.neighborhood(address, 1).unwrap();

    let ordered: Vec<_> = sub.types().map(|(_, ty)| ty.name.clone()).collect();
    assert_eq!(ordered, vec!["Address", "User"]);
    assert_eq!(relations(&sub), vec!["User encapsulates Address"]);
    assert!(sub.unused_types().is_empty());
}
