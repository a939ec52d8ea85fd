use rsl::{
    random_unit_quaternion, rng, rng_with_seed, try_rng_with_seed, uniform_int, uniform_real,
    RandomContext, RandomError, SeedSequence, ThreadRng,
};
use std::thread;

// Each scenario runs on its own thread so it controls that thread's first
// `rng` call.
fn on_fresh_thread<T: Send + 'static>(f: impl FnOnce() -> T + Send + 'static) -> T {
    thread::spawn(f).join().unwrap()
}

#[test]
fn test_repeated_calls_yield_same_generator() {
    on_fresh_thread(|| {
        let first = rng_with_seed([0, 1]);
        assert!(ThreadRng::ptr_eq(&first, &rng()));
        assert!(ThreadRng::ptr_eq(&first, &rng()));
        assert!(ThreadRng::ptr_eq(&first, &rng_with_seed(SeedSequence::new())));
    });
}

#[test]
fn test_separate_threads_yield_separate_generators() {
    on_fresh_thread(|| {
        let here = rng_with_seed([0, 1]);
        let here_again = rng();

        // Unseeded and explicitly seeded threads both work independently.
        let unseeded = thread::spawn(|| {
            let _ = rng();
            rsl::random::is_initialized()
        });
        let seeded = thread::spawn(|| {
            let _ = rng_with_seed([2, 3]);
            rsl::random::is_initialized()
        });
        assert!(unseeded.join().unwrap());
        assert!(seeded.join().unwrap());

        assert!(ThreadRng::ptr_eq(&here, &here_again));
    });
}

#[test]
fn test_reseed_after_explicit_seed_is_rejected() {
    on_fresh_thread(|| {
        let _ = rng_with_seed([0, 1]);
        assert!(try_rng_with_seed(SeedSequence::new()).is_ok());
        assert_eq!(
            try_rng_with_seed([1, 2, 3, 4]).unwrap_err(),
            RandomError::ReseedOnSeededThread
        );
    });
}

#[test]
fn test_reseed_after_entropy_seed_is_rejected() {
    on_fresh_thread(|| {
        let _ = uniform_int(0, 10).unwrap();
        assert_eq!(
            try_rng_with_seed([7]).unwrap_err(),
            RandomError::ReseedOnSeededThread
        );
    });
}

#[test]
#[should_panic(expected = "rng cannot be re-seeded on this thread")]
fn test_reseed_panics() {
    let result = thread::spawn(|| {
        let _ = rng();
        let _ = rng_with_seed([1, 2, 3, 4]);
    })
    .join();
    if let Err(payload) = result {
        std::panic::resume_unwind(payload);
    }
}

#[test]
fn test_uniform_real_range() {
    let lower = -100.0;
    let upper = 100.0;
    for _ in 0..1_000 {
        let value = uniform_real(lower, upper).unwrap();
        assert!(value >= lower);
        assert!(value < upper);
    }
}

#[test]
fn test_uniform_int_range() {
    let lower = -100;
    let upper = 100;
    for _ in 0..1_000 {
        let value = uniform_int(lower, upper).unwrap();
        assert!(value >= lower);
        assert!(value <= upper);
    }
}

#[test]
fn test_uniform_int_hits_both_bounds() {
    let mut seen = [false; 3];
    for _ in 0..1_000 {
        seen[uniform_int(0usize, 2).unwrap()] = true;
    }
    assert_eq!(seen, [true; 3]);
}

#[test]
fn test_invalid_ranges_are_errors() {
    assert!(matches!(
        uniform_real(1.0f32, -1.0),
        Err(RandomError::InvalidRange { inclusive: false, .. })
    ));
    assert!(matches!(
        uniform_int(3u8, 2),
        Err(RandomError::InvalidRange { inclusive: true, .. })
    ));
}

#[test]
fn test_random_unit_quaternion() {
    for _ in 0..1_000 {
        assert!((random_unit_quaternion().norm() - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_seeded_threads_are_reproducible() {
    fn draws() -> (Vec<f64>, Vec<i32>) {
        let _ = rng_with_seed([0, 1]);
        let reals = (0..32).map(|_| uniform_real(0.0, 1.0).unwrap()).collect();
        let ints = (0..32).map(|_| uniform_int(-50, 50).unwrap()).collect();
        (reals, ints)
    }

    let a = on_fresh_thread(draws);
    let b = on_fresh_thread(draws);
    assert_eq!(a, b);

    let mut ctx = RandomContext::from_seed_sequence([0, 1]);
    let reals: Vec<f64> = (0..32).map(|_| ctx.uniform_real(0.0, 1.0).unwrap()).collect();
    let ints: Vec<i32> = (0..32).map(|_| ctx.uniform_int(-50, 50).unwrap()).collect();
    assert_eq!((reals, ints), a);
}

#[test]
fn test_different_seeds_diverge() {
    let a: Vec<u64> = on_fresh_thread(|| {
        let _ = rng_with_seed([0, 1]);
        (0..8).map(|_| uniform_int(0, u64::MAX).unwrap()).collect()
    });
    let b: Vec<u64> = on_fresh_thread(|| {
        let _ = rng_with_seed([0, 2]);
        (0..8).map(|_| uniform_int(0, u64::MAX).unwrap()).collect()
    });
    assert_ne!(a, b);
}
