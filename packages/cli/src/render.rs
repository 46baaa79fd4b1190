//! Terminal rendering for run results and history.

use colored::Colorize;
use console::truncate_str;

use distill::{Artifact, History, Priority, ResultBundle};

fn rule() {
    println!("  {}", "─".repeat(63).dimmed());
}

fn priority_label(priority: Priority) -> colored::ColoredString {
    match priority {
        Priority::High => "High".red(),
        Priority::Medium => "Medium".yellow(),
        Priority::Low => "Low".green(),
    }
}

/// Print a finished bundle: header metrics, narrative, and the
/// priority-sorted task table.
pub fn print_bundle(bundle: &ResultBundle) {
    println!("\n{}", "═".repeat(65).dimmed());
    match &bundle.artifact {
        Artifact::Meeting(_) => println!("  {}", "MEETING MODE — RESULTS".bold()),
        Artifact::Video(_) => println!("  {}", "VIDEO MODE — RESULTS".bold()),
    }
    println!("{}", "═".repeat(65).dimmed());
    println!("  Title     : {}", bundle.artifact.title().bold());
    if bundle.tasks.is_some() {
        println!("  Accuracy  : {}%", bundle.accuracy);
    }
    println!(
        "  Processed : {:.1}s for ~{:.0} min of source",
        bundle.processing_time_secs, bundle.source_duration_minutes
    );
    rule();
    println!("  {}", truncate_str(bundle.artifact.summary(), 130, "…"));

    match &bundle.artifact {
        Artifact::Meeting(summary) => {
            if !summary.key_decisions.is_empty() {
                rule();
                println!("  {}", "Key Decisions".bold());
                for decision in &summary.key_decisions {
                    println!("    • {decision}");
                }
            }
            if !summary.next_steps.is_empty() {
                rule();
                println!("  {}", "Next Steps".bold());
                for step in &summary.next_steps {
                    println!("    • {step}");
                }
            }
        }
        Artifact::Video(insights) => {
            if !insights.topics_covered.is_empty() {
                rule();
                println!("  {}", "Topics Covered".bold());
                for topic in &insights.topics_covered {
                    println!("    • {topic}");
                }
            }
            if !insights.key_takeaways.is_empty() {
                rule();
                println!("  {}", "Key Takeaways".bold());
                for (i, takeaway) in insights.key_takeaways.iter().enumerate() {
                    println!("    {}. {takeaway}", i + 1);
                }
            }
            if !insights.action_items.is_empty() {
                rule();
                println!("  {}", "Action Items".bold());
                for action in &insights.action_items {
                    println!("    → {action}");
                }
            }
        }
    }

    if let Some(tasks) = &bundle.tasks {
        rule();
        println!(
            "  {} unique action items",
            tasks.len().to_string().bold()
        );
        println!(
            "  {:<3} {:<8} {:<15} {:<12} TASK",
            "#", "PRIORITY", "ASSIGNEE", "DUE DATE"
        );
        rule();
        for (i, record) in tasks.sorted_by_priority().iter().enumerate() {
            println!(
                "  {:<3} {:<8} {:<15} {:<12} {}",
                i + 1,
                priority_label(record.priority),
                truncate_str(&record.assignee, 14, "…"),
                record.due_date,
                truncate_str(&record.task, 38, "…"),
            );
        }
    }
    println!("{}", "═".repeat(65).dimmed());
}

/// Print the session history, newest first.
pub fn print_history(history: &History) {
    if history.is_empty() {
        println!("\n  No runs this session yet.");
        return;
    }

    println!("\n  {} run(s), newest first:", history.len());
    for bundle in history.entries() {
        let kind = match &bundle.artifact {
            Artifact::Meeting(_) => "meeting",
            Artifact::Video(_) => "video",
        };
        println!(
            "  [{}] {} — {} task(s), {}% | {}",
            kind,
            bundle.artifact.title().bold(),
            bundle.task_count(),
            bundle.accuracy,
            bundle.completed_at.format("%Y-%m-%d %H:%M UTC"),
        );
    }
}
