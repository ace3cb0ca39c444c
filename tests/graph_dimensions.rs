use activitymap::graph::{ActivityGraph, Dimensions};

fn graph_at(points: &[(f64, f64)]) -> ActivityGraph {
    let mut graph = ActivityGraph::new();
    graph.load_nodes(
        points
            .iter()
            .enumerate()
            .map(|(i, &(x, y))| (x, y, format!("n{i}"))),
    );
    graph
}

#[test]
fn bounding_box_spans_mixed_sign_coordinates() {
    let dims = graph_at(&[(-100.0, 50.0), (200.0, -30.0)]).dimensions();

    assert_eq!(
        dims,
        Dimensions {
            min_x: -100.0,
            min_y: -30.0,
            max_x: 200.0,
            max_y: 50.0,
            width: 300.0,
            height: 80.0,
        }
    );
}

#[test]
fn all_positive_coordinates_are_stretched_to_the_origin() {
    let dims = graph_at(&[(100.0, 40.0), (300.0, 90.0)]).dimensions();

    assert_eq!(dims.min_x, 0.0);
    assert_eq!(dims.min_y, 0.0);
    assert_eq!(dims.width, 300.0);
    assert_eq!(dims.height, 90.0);
}

#[test]
fn all_negative_coordinates_are_stretched_to_the_origin() {
    let dims = graph_at(&[(-700.0, -10.0), (-500.0, -250.0)]).dimensions();

    assert_eq!(dims.max_x, 0.0);
    assert_eq!(dims.max_y, 0.0);
    assert_eq!(dims.min_x, -700.0);
    assert_eq!(dims.width, 700.0);
    assert_eq!(dims.height, 250.0);
}

#[test]
fn tight_box_hugs_same_sign_coordinates() {
    let dims = graph_at(&[(100.0, 40.0), (300.0, 90.0)])
        .tight_dimensions()
        .expect("non-empty graph");

    assert_eq!(dims.min_x, 100.0);
    assert_eq!(dims.min_y, 40.0);
    assert_eq!(dims.width, 200.0);
    assert_eq!(dims.height, 50.0);
}

#[test]
fn empty_graph_has_zero_box_and_no_tight_box() {
    let graph = ActivityGraph::new();
    let dims = graph.dimensions();

    assert_eq!(dims.width, 0.0);
    assert_eq!(dims.height, 0.0);
    assert!(graph.tight_dimensions().is_none());
}

#[test]
fn single_node_tight_box_is_a_point() {
    let dims = graph_at(&[(5.0, -5.0)]).tight_dimensions().unwrap();
    assert_eq!((dims.min_x, dims.max_x, dims.width), (5.0, 5.0, 0.0));
}
