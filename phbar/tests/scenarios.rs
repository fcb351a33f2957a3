use phbar::{
    compute_barcodes, parse_filtration, Barcode, BoundaryMatrix, Pipeline, PipelineConfig,
    ReductionStrategy, Simplex,
};

const TWO_POINTS: &str = "
0.0 0 0
0.0 0 1
1.0 1 0 1
";

const HOLLOW_TRIANGLE: &str = "
0.0 0 0
0.0 0 1
0.0 0 2
1.0 1 0 1
1.0 1 1 2
1.0 1 0 2
";

const FILLED_TRIANGLE: &str = "
0.0 0 0
0.0 0 1
0.0 0 2
1.0 1 0 1
1.0 1 1 2
1.0 1 0 2
2.0 2 0 1 2
";

fn count(barcodes: &[Barcode], dimension: usize, infinite: bool) -> usize {
    barcodes
        .iter()
        .filter(|b| b.dimension == dimension && b.is_infinite() == infinite)
        .count()
}

#[test]
fn two_points_joined_by_an_edge() {
    let f = parse_filtration(TWO_POINTS).unwrap();
    let d = BoundaryMatrix::from_filtration(&f);
    assert!(d.column(0).is_empty());
    assert!(d.column(1).is_empty());
    assert_eq!(d.column(2).rows(), &[0, 1]);

    let barcodes = compute_barcodes(&f).unwrap();
    let mut triples: Vec<_> = barcodes.iter().map(Barcode::as_triple).collect();
    triples.sort();
    assert_eq!(triples, vec![(0, 0, -1), (0, 1, 2)]);
}

#[test]
fn hollow_triangle_keeps_its_loop() {
    let f = parse_filtration(HOLLOW_TRIANGLE).unwrap();
    let barcodes = compute_barcodes(&f).unwrap();
    assert_eq!(count(&barcodes, 0, true), 1);
    assert_eq!(count(&barcodes, 0, false), 2);
    assert_eq!(count(&barcodes, 1, true), 1);
    assert_eq!(count(&barcodes, 1, false), 0);
}

#[test]
fn filled_triangle_pairs_loop_with_face() {
    let f = parse_filtration(FILLED_TRIANGLE).unwrap();
    let barcodes = compute_barcodes(&f).unwrap();
    assert!(barcodes.contains(&Barcode::finite(1, 5, 6)));
    assert_eq!(count(&barcodes, 1, true), 0);
    assert_eq!(count(&barcodes, 0, true), 1);

    let loop_bar = barcodes.iter().find(|b| b.birth == 5).unwrap();
    assert_eq!(loop_bar.birth_value(&f), 1.0);
    assert_eq!(loop_bar.death_value(&f), 2.0);
}

#[test]
fn single_vertex_lives_forever() {
    let f = parse_filtration("0.5 0 7").unwrap();
    assert_eq!(compute_barcodes(&f).unwrap(), vec![Barcode::infinite(0, 0)]);
}

#[test]
fn empty_input_has_no_bars() {
    let f = parse_filtration("").unwrap();
    assert!(f.is_empty());
    assert!(compute_barcodes(&f).unwrap().is_empty());
}

#[test]
fn input_order_is_irrelevant_up_to_ties() {
    let shuffled = "
        2.0 2 0 1 2
        1.0 1 0 1
        0.0 0 0
        1.0 1 1 2
        0.0 0 1
        1.0 1 0 2
        0.0 0 2
    ";
    let f = parse_filtration(shuffled).unwrap();
    assert!(f.check_face_closure().is_ok());
    let barcodes = compute_barcodes(&f).unwrap();
    assert_eq!(count(&barcodes, 0, true), 1);
    assert_eq!(count(&barcodes, 1, false), 1);
    assert_eq!(count(&barcodes, 1, true), 0);
}

#[test]
fn two_loops_of_a_figure_eight() {
    // two triangles sharing vertex 0, filled one at a time
    let f = phbar::Filtration::new(vec![
        Simplex::vertex(0.0, 0),
        Simplex::vertex(0.0, 1),
        Simplex::vertex(0.0, 2),
        Simplex::vertex(0.0, 3),
        Simplex::vertex(0.0, 4),
        Simplex::from_vertices(1.0, vec![0, 1]).unwrap(),
        Simplex::from_vertices(1.0, vec![1, 2]).unwrap(),
        Simplex::from_vertices(1.0, vec![0, 2]).unwrap(),
        Simplex::from_vertices(1.0, vec![0, 3]).unwrap(),
        Simplex::from_vertices(1.0, vec![3, 4]).unwrap(),
        Simplex::from_vertices(1.0, vec![0, 4]).unwrap(),
        Simplex::from_vertices(3.0, vec![0, 1, 2]).unwrap(),
    ])
    .unwrap();

    let config = PipelineConfig::default().with_reduction(ReductionStrategy::Standard);
    let output = Pipeline::new(config.clone()).run(&f).unwrap();
    assert_eq!(count(&output.barcodes, 1, true), 1);
    assert_eq!(count(&output.barcodes, 1, false), 1);

    let diagram = output.diagram(&f, &config);
    assert_eq!(diagram.betti_numbers(), vec![1, 1]);
    let finite_loop = diagram
        .dimension(1)
        .find(|i| !i.is_essential())
        .unwrap();
    assert_eq!(finite_loop.persistence(), 2.0);
}

#[test]
fn presentation_filters_short_bars() {
    let text = "
        0.0 0 0
        0.0 0 1
        0.2 0 2
        0.3 1 1 2
        1.0 1 0 1
    ";
    let f = parse_filtration(text).unwrap();
    let config = PipelineConfig::default().with_min_persistence(0.5);
    let output = Pipeline::new(config.clone()).run(&f).unwrap();
    assert_eq!(output.barcodes.len(), 3);

    let diagram = output.diagram(&f, &config);
    let mut plain = Vec::new();
    diagram.write_plain(&mut plain).unwrap();
    assert_eq!(String::from_utf8(plain).unwrap(), "0 0 inf\n0 0 1\n");
}
