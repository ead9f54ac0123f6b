use maximum_flow::maximum_flow::graph::Graph;
use maximum_flow::maximum_flow::EdmondsKarp;

fn main() {
    env_logger::init();

    let mut graph = Graph::default();
    graph.add_nodes(4);

    let edges = vec![
        graph.add_directed_edge(0, 1, 3.0).unwrap(),
        graph.add_directed_edge(0, 2, 2.0).unwrap(),
        graph.add_directed_edge(1, 3, 2.0).unwrap(),
        graph.add_directed_edge(2, 3, 3.0).unwrap(),
        graph.add_directed_edge(1, 2, 1.0).unwrap(),
    ];

    let mut solver = match EdmondsKarp::new(&graph) {
        Ok(solver) => solver,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match solver.solve(0, 3) {
        Ok(result) => {
            println!("maximum flow:{} ({} phases)", result.value, result.num_phases);
            graph.set_flow(&result);
            for edge_id in edges {
                println!("{:?}", graph.get_edge(edge_id).unwrap());
            }
            println!("minimum cut:{:?}", solver.minimum_cut(0).unwrap());
        }
        Err(err) => eprintln!("{err}"),
    }
}
