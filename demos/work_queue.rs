use rsl::{uniform_int, Queue};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("Work Queue Example\n");

    const NUM_WORKERS: usize = 4;
    const NUM_JOBS: usize = 20;
    const IDLE_TIMEOUT: Duration = Duration::from_millis(500);

    let jobs = Arc::new(Queue::<String>::with_capacity(NUM_JOBS));
    let results = Arc::new(Queue::<String>::new());

    let jobs_tx = jobs.clone();
    let producer = thread::spawn(move || {
        for i in 0..NUM_JOBS {
            let job = format!("Job-{:02}", i);
            jobs_tx.push(job.clone());
            println!("Enqueued: {}", job);
            thread::sleep(Duration::from_millis(50));
        }
        println!("All jobs enqueued!");
    });

    let mut workers = vec![];
    for worker_id in 0..NUM_WORKERS {
        let jobs_rx = jobs.clone();
        let results_tx = results.clone();

        workers.push(thread::spawn(move || {
            let mut processed = 0;
            while let Some(job) = jobs_rx.pop(IDLE_TIMEOUT) {
                println!("Worker {} processing: {}", worker_id, job);

                // Every worker thread draws from its own generator.
                let millis = uniform_int(50u64, 250).unwrap_or(100);
                thread::sleep(Duration::from_millis(millis));

                results_tx.push(format!("{} -> completed by worker {} in {}ms", job, worker_id, millis));
                processed += 1;
            }
            println!("Worker {} finished ({} jobs)", worker_id, processed);
        }));
    }

    producer.join().unwrap();
    for worker in workers {
        worker.join().unwrap();
    }

    let collected = results.drain();
    for result in &collected {
        println!("Result: {}", result);
    }
    assert_eq!(collected.len(), NUM_JOBS);
    println!("\nAll {} results collected!", collected.len());
}
