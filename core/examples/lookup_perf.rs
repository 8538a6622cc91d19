use quiz_topics::{TopicRegistry, TOPICS};
use std::time::Instant;

fn main() {
    env_logger::init();

    let registry = TopicRegistry::new();

    println!("Topic Catalog");
    println!("=============\n");

    for topic in registry.iter() {
        println!(
            "  {:<16} {:<18} {:>3} questions  {}  {}",
            topic.id(),
            topic.name(),
            topic.total_questions(),
            topic.color(),
            topic.data_path("data").display()
        );
    }
    println!(
        "\n  {} topics, {} questions\n",
        registry.len(),
        registry.total_questions()
    );

    let iterations = 1_000_000u64;

    for id in [TOPICS[0].id(), TOPICS[TOPICS.len() - 1].id(), "does-not-exist"] {
        let start = Instant::now();
        let mut hits = 0u64;
        for _ in 0..iterations {
            if registry.get_topic(std::hint::black_box(id)).is_some() {
                hits += 1;
            }
        }
        let elapsed = start.elapsed();
        let ops_per_sec = iterations as f64 / elapsed.as_secs_f64();
        println!(
            "Lookup {:?}: {} hits in {:?} ({:.2}M ops/sec)",
            id,
            hits,
            elapsed,
            ops_per_sec / 1_000_000.0
        );
    }

    match registry.require_topic("does-not-exist") {
        Ok(topic) => println!("\nUnexpected topic: {}", topic),
        Err(err) => println!("\nMiss reported as: {}", err),
    }
}
