//! A simple deadline scheduler.
//!
//! Jobs wait on a min heap ordered by deadline, and are identified by a key generated by the heap.
//! Between rounds, jobs may be expedited (their deadline is brought forward), postponed, or cancelled outright.

use keyed_heap::{config::Config, config::Mode, heap::KeyedHeap, types::err};

#[derive(Debug, Default)]
struct Job {
    name: &'static str,
    attempts: u32,
}

fn schedule() -> Result<(), err::ErrorKind> {
    let mut config = Config::default();
    config.mode = Mode::Min;
    config.capacity.set(8)?;

    let mut queue: KeyedHeap<usize, u64, Job> = KeyedHeap::from_config(&config);

    let mut keys = vec![];
    for (name, deadline) in [
        ("backup", 40),
        ("compile", 15),
        ("email", 25),
        ("index", 30),
    ] {
        let key = queue.push_value(deadline);
        queue.set_data(&key, Job { name, attempts: 0 })?;
        keys.push(key);
    }

    println!("queue: {}", queue.len());

    // Expedite the backup, postpone the compile, cancel the index.
    queue.update(&keys[0], 5)?;
    queue.update(&keys[1], 50)?;
    let cancelled = queue.delete(&keys[3])?;
    println!("cancelled {} (deadline {})", cancelled.data.name, cancelled.value);

    let mut clock = 0;
    while let Ok(job) = queue.pop_min() {
        clock = std::cmp::max(clock, job.value);
        println!(
            "t={clock:>3} ran {} (deadline {}, attempt {})",
            job.data.name,
            job.value,
            job.data.attempts + 1
        );

        // The email fails once, and is retried later.
        if job.data.name == "email" && job.data.attempts == 0 {
            let key = queue.push_value(clock + 20);
            *queue.data_mut(&key)? = Job {
                name: job.data.name,
                attempts: job.data.attempts + 1,
            };
        }
    }

    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = schedule() {
        println!("Scheduling failed: {e}");
        std::process::exit(2);
    }
}
