#![cfg(feature = "heavy")]
use all_lcs::{AllLcsSolver, Solver, SolverBuilder};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx] as char
        })
        .collect()
}

#[test]
fn heavy_stress_length_and_one_solution() {
    let mut rng = StdRng::seed_from_u64(123);
    let s = random_dna(&mut rng, 3_000);
    let t = random_dna(&mut rng, 3_000);
    let mut solver = AllLcsSolver::new(s, t);
    solver.solve();
    let len = solver.length_of_solution().unwrap();
    assert!(len <= 3_000);
    let one = solver.one_solution().unwrap();
    assert_eq!(one.len(), len);
    assert!(solver.is_common_subsequence(&one));
}

#[test]
fn heavy_long_identical_inputs_enumerate_without_recursion() {
    let mut rng = StdRng::seed_from_u64(7);
    let s = random_dna(&mut rng, 1_500);
    let mut solver = SolverBuilder::new(s.clone(), s.clone()).build_all();
    solver.solve();
    let all = solver.all_solutions().unwrap();
    assert_eq!(all.len(), 1);
    assert!(all.contains(&s));
}
