//! Reproducible sampling: a seeded worker thread and an explicit context
//! produce the same stream.

use rsl::{random_unit_quaternion, rng_with_seed, try_rng_with_seed, uniform_real, RandomContext};
use std::thread;

const SEED: [u32; 2] = [2024, 7];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let from_thread = thread::spawn(|| {
        let _ = rng_with_seed(SEED);
        let draws: Vec<f64> = (0..5).filter_map(|_| uniform_real(0.0, 1.0).ok()).collect();

        if let Err(err) = try_rng_with_seed([1]) {
            println!("second seed on the same thread: {}", err);
        }
        let q = random_unit_quaternion();
        println!("random rotation {:?} (norm {:.6})", q.to_array(), q.norm());
        draws
    })
    .join()
    .unwrap();

    let mut ctx = RandomContext::from_seed_sequence(SEED);
    let from_context: Vec<f64> = (0..5).filter_map(|_| ctx.uniform_real(0.0, 1.0).ok()).collect();

    println!("thread draws:  {:?}", from_thread);
    println!("context draws: {:?}", from_context);
    assert_eq!(from_thread, from_context);
}
