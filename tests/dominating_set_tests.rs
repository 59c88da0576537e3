use metrosolve::algorithm::{solve, AbortHandle, FileSink, SearchContext};
use metrosolve::models::{Problem, SearchStatus, SizeWindow, SolveReport, Strategy};
use metrosolve::{Graph, SolveError};

fn star() -> Graph {
    Graph::from_edges(
        &["X", "L1", "L2", "L3", "L4"],
        &[("X", "L1"), ("X", "L2"), ("X", "L3"), ("X", "L4")],
    )
    .expect("estrella válida")
}

/// Camino de 6 vértices: el mínimo dominante tiene 2 (p. ej. {b, e}).
fn path6() -> Graph {
    Graph::from_edges(
        &["a", "b", "c", "d", "e", "f"],
        &[("a", "b"), ("b", "c"), ("c", "d"), ("d", "e"), ("e", "f")],
    )
    .expect("camino válido")
}

/// Tres estrellas pequeñas encadenadas por sus centros.
fn caterpillar() -> Graph {
    Graph::from_edges(
        &["h1", "h2", "h3", "x1", "y1", "x2", "y2", "x3", "y3"],
        &[
            ("h1", "h2"),
            ("h2", "h3"),
            ("h1", "x1"),
            ("h1", "y1"),
            ("h2", "x2"),
            ("h2", "y2"),
            ("h3", "x3"),
            ("h3", "y3"),
        ],
    )
    .expect("oruga válida")
}

const STRATEGIES: [Strategy; 3] = [Strategy::BruteForce, Strategy::BranchAndBound, Strategy::Heuristic];

fn run(graph: &Graph, strategy: Strategy) -> SolveReport {
    let mut ctx = SearchContext::new();
    solve(graph, Problem::DominatingSet, strategy, &mut ctx).expect("la búsqueda debe terminar")
}

#[test]
fn star_is_dominated_by_its_center() {
    let g = star();
    let bnb = run(&g, Strategy::BranchAndBound);
    assert_eq!(g.labels_of(&bnb.solution), vec!["X".to_string()]);
    assert_eq!(bnb.metric, 1);

    let bf = run(&g, Strategy::BruteForce);
    assert_eq!(g.labels_of(&bf.solution), vec!["X".to_string()]);

    let greedy = run(&g, Strategy::Heuristic);
    assert!(greedy.metric <= 4, "la heurística no puede ser peor que las hojas");
    assert!(g.is_dominating_set(&greedy.solution));
}

#[test]
fn branch_and_bound_stops_once_a_single_vertex_dominates() {
    let g = star();
    let r = run(&g, Strategy::BranchAndBound);
    assert_eq!(r.metric, 1);
    assert_eq!(r.status, SearchStatus::Complete);
    // el centro es el primero en el orden por grado; no se prueban las hojas
    assert_eq!(r.calls, 1);
}

#[test]
fn exact_strategies_agree_and_heuristic_is_never_better() {
    for (g, optimum) in [(path6(), 2), (caterpillar(), 3), (star(), 1)] {
        let bf = run(&g, Strategy::BruteForce);
        let bnb = run(&g, Strategy::BranchAndBound);
        let greedy = run(&g, Strategy::Heuristic);
        assert_eq!(bf.metric, optimum);
        assert_eq!(bnb.metric, optimum);
        assert!(greedy.metric >= bnb.metric);
        for r in [&bf, &bnb, &greedy] {
            assert!(g.is_dominating_set(&r.solution), "{:?} no domina: {:?}", r.strategy, r.solution);
            assert_eq!(r.metric, r.solution.len());
            assert!(r.solution.windows(2).all(|w| w[0] < w[1]), "solución ordenada y sin repetidos");
        }
    }
}

#[test]
fn repeated_runs_are_identical() {
    let g = caterpillar();
    for strategy in STRATEGIES {
        assert_eq!(run(&g, strategy), run(&g, strategy));
    }
}

#[test]
fn brute_force_window_controls_the_search() {
    let g = path6();
    let mut ctx = SearchContext::new().with_window(SizeWindow::new(1, 1));
    let r = solve(&g, Problem::DominatingSet, Strategy::BruteForce, &mut ctx).unwrap();
    assert_eq!(r.status, SearchStatus::NotFound);
    assert!(r.solution.is_empty());
    assert_eq!(r.calls, 6, "se prueban los 6 subconjuntos de tamaño 1");

    let mut ctx = SearchContext::new().with_window(SizeWindow::new(3, 10));
    let r = solve(&g, Problem::DominatingSet, Strategy::BruteForce, &mut ctx).unwrap();
    assert_eq!(r.metric, 3, "la ventana empieza en 3");
    assert!(g.is_dominating_set(&r.solution));

    let mut ctx = SearchContext::new().with_window(SizeWindow::new(0, 2));
    let err = solve(&g, Problem::DominatingSet, Strategy::BruteForce, &mut ctx).unwrap_err();
    assert_eq!(err, SolveError::InvalidWindow { min: 0, max: 2 });
}

#[test]
fn double_sweep_is_not_available_for_dominating_set() {
    let mut ctx = SearchContext::new();
    let err = solve(&star(), Problem::DominatingSet, Strategy::DoubleSweep, &mut ctx).unwrap_err();
    assert!(matches!(err, SolveError::UnsupportedCombination { .. }));
}

#[test]
fn disconnected_graph_is_rejected_by_every_strategy() {
    let g = Graph::from_edges(&["A", "B", "C", "D"], &[("A", "B"), ("C", "D")]).unwrap();
    for strategy in STRATEGIES {
        let mut ctx = SearchContext::new();
        let err = solve(&g, Problem::DominatingSet, strategy, &mut ctx).unwrap_err();
        assert!(matches!(err, SolveError::InvalidInput(_)), "{:?}: {:?}", strategy, err);
    }
}

#[test]
fn progress_ends_at_hundred_even_on_early_success() {
    let g = caterpillar();
    for strategy in STRATEGIES {
        let mut seen: Vec<u8> = Vec::new();
        {
            let mut ctx = SearchContext::new().with_reporter(|p: u8| seen.push(p));
            solve(&g, Problem::DominatingSet, strategy, &mut ctx).unwrap();
        }
        assert_eq!(seen.last(), Some(&100), "{:?}: {:?}", strategy, seen);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }
}

#[test]
fn aborted_before_start_reports_aborted() {
    let g = caterpillar();
    for strategy in STRATEGIES {
        let abort = AbortHandle::new();
        abort.abort();
        let mut ctx = SearchContext::new().with_abort(abort);
        let r = solve(&g, Problem::DominatingSet, strategy, &mut ctx).unwrap();
        assert_eq!(r.status, SearchStatus::Aborted, "{:?}", strategy);
    }
}

#[test]
fn file_sink_writes_one_file_per_combination() {
    let dir = std::env::temp_dir().join(format!("metrosolve_dom_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let g = star();
    for _ in 0..2 {
        let mut ctx = SearchContext::new().with_sink(FileSink::new(&dir));
        solve(&g, Problem::DominatingSet, Strategy::BranchAndBound, &mut ctx).unwrap();
    }
    let text = std::fs::read_to_string(dir.join("dominating_set_branch_and_bound.txt")).expect("archivo de resultado");
    assert_eq!(text, "Conjunto dominante con 1 vértices:\n[X]\n", "el archivo se sobrescribe, no se acumula");
    let _ = std::fs::remove_dir_all(&dir);
}
