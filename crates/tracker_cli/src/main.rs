//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `tracker_core` linkage outside the Flutter/FFI runtime.
//! - Replay one scripted session on a pinned clock so output is stable.

use std::error::Error;
use tracker_core::{parse_deadline, FixedClock, ProjectDraft, ProjectService};

const SESSION_DATE: &str = "2025-01-01";

fn main() -> Result<(), Box<dyn Error>> {
    println!("tracker_core ping={}", tracker_core::ping());
    println!("tracker_core version={}", tracker_core::core_version());

    let mut service = ProjectService::new(FixedClock(parse_deadline(SESSION_DATE)?));
    let mut draft = ProjectDraft::new("Website", "design, build, launch");
    draft
        .submit(&mut service)
        .ok_or("scripted project was rejected")?;
    service
        .add_project("Release", "")
        .ok_or("scripted project was rejected")?;
    service.set_progress(0, 40)?;
    service.update_subcategory_deadline(0, 2, "2025-02-01")?;
    service.delete_project(1)?;

    for project in service.snapshot() {
        println!(
            "project name={} deadline={} progress={}",
            project.name, project.deadline, project.progress_label
        );
        for sub in &project.subcategories {
            println!("  subcategory name={} deadline={}", sub.name, sub.deadline);
        }
    }
    Ok(())
}
