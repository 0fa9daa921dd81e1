//! Demo of an audited member table
//!
//! Demonstrates:
//! - Starting a session log
//! - Inserting, overwriting and removing members
//! - Growth past the 0.5 load factor
//! - Printing the ordered listing

use roster_audit::{initialize_logger, FileAuditSink};
use roster_core::config::DEFAULT_AUDIT_LOG;
use roster_core::{AuditSink, ProbeTable, Record, Reporter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();
    println!("=== Roster Member Table Demo ===\n");

    let log_path = std::env::temp_dir().join(DEFAULT_AUDIT_LOG);
    let sink = FileAuditSink::new(&log_path);
    if let Err(err) = sink.begin_session() {
        println!(" >>> UNKNOWN ERROR OCCURRED. PROCEEDING WITHOUT LOGGING <<< ({})", err);
    }

    let mut table = ProbeTable::with_sink(11, sink)?;

    println!("Adding members...");
    for (name, affiliation) in [
        ("Alice", "UniA"),
        ("Bob", "UniB"),
        ("Carol", "UniC"),
        ("alice", "UniZ"),
    ] {
        table.put(Record::new(name, affiliation)?)?;
        println!("  {} (load factor {:.1}%)", name, table.load_factor_percent());
    }

    if let Some(previous) = table.put(Record::new("Bob", "UniB2")?)? {
        println!("Overwrote {}", previous);
    }

    if let Some(removed) = table.remove("Carol")? {
        println!("Removed {}", removed);
    }

    println!("\nAdding members until the table grows...");
    let before = table.capacity();
    for name in ["Dave", "Eve", "Frank", "Grace"] {
        table.put(Record::new(name, "UniX")?)?;
    }
    println!("  capacity {} -> {}", before, table.capacity());

    let stats = table.stats();
    println!("\nTable statistics:");
    println!("  Members: {}", stats.size);
    println!("  Capacity: {}", stats.capacity);
    println!("  Load factor: {:.2}", stats.load_factor);
    println!("  Tombstones: {}", stats.tombstones);

    print!("{}", Reporter::new(&table));

    println!("Audit trail written to {}", log_path.display());
    Ok(())
}
