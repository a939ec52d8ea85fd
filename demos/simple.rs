//! Simple usage example

use rsl::Queue;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("rsl Queue - Simple Example\n");

    let queue = Arc::new(Queue::<String>::new());

    // Clone handles for different threads
    let producer_queue = queue.clone();
    let consumer_queue = queue.clone();

    let producer = thread::spawn(move || {
        for i in 0..10 {
            let message = format!("Message {}", i);
            println!("Sending: {}", message);
            producer_queue.push(message);

            // Small delay to make output readable
            thread::sleep(Duration::from_millis(100));
        }
        println!("Producer finished!");
    });

    let consumer = thread::spawn(move || {
        let mut received = 0;
        // Stop once the producer has been quiet for a whole second.
        while let Some(message) = consumer_queue.pop(Duration::from_secs(1)) {
            println!("Received: {}", message);
            received += 1;
        }
        println!("Consumer finished after {} messages!", received);
    });

    producer.join().unwrap();
    consumer.join().unwrap();

    println!("\nExample completed successfully!");
}
