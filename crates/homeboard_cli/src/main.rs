//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `homeboard_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use chrono::{TimeZone, Utc};
use homeboard_core::{ChoreService, MemoryStore, NewChore};

fn main() {
    let now = Utc.with_ymd_and_hms(2026, 1, 1, 9, 0, 0).single();
    let Some(now) = now else {
        eprintln!("homeboard_cli: failed to build probe timestamp");
        std::process::exit(1);
    };

    let service = ChoreService::new(MemoryStore::new());
    let seeded = service
        .add_chore("smoke-user", NewChore::today("Take out the trash"), now)
        .and_then(|_| service.ranked("smoke-user", now));

    match seeded {
        Ok(ranked) => {
            println!("homeboard_core version={}", homeboard_core::core_version());
            println!("homeboard_core ranked_chores={}", ranked.len());
        }
        Err(err) => {
            eprintln!("homeboard_cli: core probe failed: {err}");
            std::process::exit(1);
        }
    }
}
