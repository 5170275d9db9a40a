use anyhow::Result;
use chrono::Local;

use galerie_core::exhibition::{
    calculated_status, days_info, exhibitions, status_label, vernissage_visible,
};

/// Print the exhibition list with statuses computed for today.
pub fn run() -> Result<()> {
    let today = Local::now().date_naive();

    for ex in exhibitions() {
        let status = calculated_status(&ex, today);
        let label = status_label(status, ex.confirmed);

        println!("[{label}] {}", ex.title);
        println!("  {}", ex.location_display());
        println!("  {}", ex.date_display());
        if let Some(days) = days_info(&ex, today) {
            println!("  {days}");
        }
        if vernissage_visible(&ex, today) {
            if let Some(vernissage) = &ex.vernissage {
                println!("  Vernisáž: {vernissage}");
            }
        }
        if let Some(admission) = &ex.admission {
            println!("  Vstupné: {admission}");
        }
        println!();
    }

    Ok(())
}
