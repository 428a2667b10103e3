//! Terminal rendering of the filtered result list: cards, a compact table,
//! and a small progress summary.

use bidboard_core::{Application, ApplicationStatus, Facets};

const STATUSES: &[ApplicationStatus] = &[
    ApplicationStatus::Draft,
    ApplicationStatus::Ready,
    ApplicationStatus::Submitted,
    ApplicationStatus::Awarded,
    ApplicationStatus::Lost,
];

fn status_label(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::Draft => "Draft",
        ApplicationStatus::Ready => "Ready",
        ApplicationStatus::Submitted => "Submitted",
        ApplicationStatus::Awarded => "Awarded",
        ApplicationStatus::Lost => "Lost",
    }
}

/// Print each application as a vertical card.
pub fn print_cards(apps: &[Application]) {
    for app in apps {
        println!("=== {} ===", app.id);
        println!("{}", app.title);
        println!();
        println!("  {:<16} {}", "organization", app.organization);
        println!("  {:<16} {}", "category", app.category);
        println!("  {:<16} {}", "vehicle", app.vehicle);
        if !app.tags.is_empty() {
            println!("  {:<16} {}", "set-asides", app.tags.join(", "));
        }
        println!("  {:<16} {}", "due", app.due_date);
        println!("  {:<16} {}", "status", status_label(app.status));
        println!("  {:<16} {}%", "complete", app.percent_complete);
        println!("  {:<16} {}", "fit score", app.fit_score);
        println!("  {:<16} ${:.0}", "ceiling", app.ceiling);
        if !app.keywords.is_empty() {
            println!("  {:<16} {}", "keywords", app.keywords.join(", "));
        }
        if let Some(summary) = &app.summary {
            println!();
            println!("  {summary}");
        }
        println!();
    }
}

/// Print the result list as a compact table.
pub fn print_table(apps: &[Application]) {
    println!(
        "{:<10} {:<44} {:<6} {:<12} {:<10} {:>5} {:>4}",
        "id", "title", "org", "due", "status", "done", "fit"
    );
    for app in apps {
        println!(
            "{:<10} {:<44} {:<6} {:<12} {:<10} {:>4}% {:>4}",
            app.id,
            truncate(&app.title, 44),
            app.organization,
            app.due_date,
            status_label(app.status),
            app.percent_complete,
            app.fit_score,
        );
    }
}

/// Print match count, status breakdown, and average completion.
pub fn print_summary(apps: &[Application]) {
    println!("{} applications match", apps.len());
    if apps.is_empty() {
        return;
    }

    for &status in STATUSES {
        let count = apps.iter().filter(|app| app.status == status).count();
        if count > 0 {
            println!("  {:<10} {count}", status_label(status));
        }
    }

    let total: u32 = apps.iter().map(|app| u32::from(app.percent_complete)).sum();
    println!("  avg completion {}%", total / apps.len() as u32);
}

/// Print the distinct filterable values of the dataset.
pub fn print_facets(facets: &Facets) {
    println!("{:<16} {}", "categories", facets.categories.join(", "));
    println!("{:<16} {}", "vehicles", facets.vehicles.join(", "));
    println!("{:<16} {}", "set-asides", facets.tags.join(", "));
    println!("{:<16} {}", "organizations", facets.organizations.join(", "));
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let cut: String = s.chars().take(max.saturating_sub(1)).collect();
    format!("{cut}…")
}
