use agglo::{Agglomerator, DistanceMatrix};

fn main() {
    // Pairwise distances between 4 points (symmetric, zero diagonal).
    let matrix = DistanceMatrix::from_rows(&[
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, 0.0, 4.0, 5.0],
        vec![2.0, 4.0, 0.0, 6.0],
        vec![3.0, 5.0, 6.0, 0.0],
    ])
    .unwrap();

    let dendro = Agglomerator::new().fit(&matrix).unwrap();

    println!("Merge history:");
    for (step, merge) in dendro.merges().enumerate() {
        println!(
            "  step {}: {:?} + {:?} at distance {}",
            step + 1,
            merge.left,
            merge.right,
            merge.distance
        );
    }

    println!("Final merged cluster: {:?}", dendro.final_cluster());

    // The same history cut to 2 flat clusters.
    let labels = dendro.cut_to_k(2).unwrap();
    println!("Labels at k=2: {:?}", labels);
}
