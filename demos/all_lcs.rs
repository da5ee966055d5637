//! Example: every longest common subsequence of two strings.
//!
//! Run with:
//! `cargo run --example all_lcs -- ABCBDAB BDCABA`
//!
//! Set `RUST_LOG=all_lcs=trace` to see the solver spans.

use all_lcs::{Solver, SolverBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let x = args.next().unwrap_or_else(|| "ABCBDAB".to_string());
    let y = args.next().unwrap_or_else(|| "BDCABA".to_string());

    let mut solver = SolverBuilder::new(x, y).with_max_solutions(10_000).build_all();
    solver.solve();

    println!("x = {:?}, y = {:?}", solver.x(), solver.y());
    if let Ok(table) = solver.lcs_solver().table() {
        println!("length table:\n{table}");
    }

    match solver.length_of_solution() {
        Ok(len) => println!("LCS length: {len}"),
        Err(err) => eprintln!("all_lcs: {err}"),
    }
    match solver.one_solution() {
        Ok(one) => println!("one LCS: {one:?}"),
        Err(err) => eprintln!("all_lcs: {err}"),
    }
    match solver.all_solutions() {
        Ok(all) => {
            println!("all LCSs ({}):", all.len());
            for s in &all {
                println!("  {s:?}");
            }
        }
        Err(err) => {
            eprintln!("all_lcs: {err}");
            std::process::exit(1);
        }
    }
}
