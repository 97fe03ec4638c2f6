//! Derives maintenance tasks and category insights from check verdicts.

use crate::model::{
    AuditCheck, AuditInsight, CheckStatus, InsightCategory, MaintenanceTask, TaskPriority,
};

/// Fixed mapping from check id to problem category.
pub fn category_for(check_id: &str) -> InsightCategory {
    match check_id {
        "uptime" | "link-health" => InsightCategory::Reliability,
        "response-time" => InsightCategory::Performance,
        "content-depth" => InsightCategory::Content,
        "seo-presence" => InsightCategory::Seo,
        "alt-text" => InsightCategory::Accessibility,
        _ => InsightCategory::Reliability,
    }
}

fn priority_for(check: &AuditCheck) -> TaskPriority {
    // Alt text is routine editorial work whatever the ratio looks like.
    if check.id == "alt-text" {
        return TaskPriority::Low;
    }

    match check.status {
        CheckStatus::Fail => TaskPriority::High,
        CheckStatus::Warn => match category_for(&check.id) {
            InsightCategory::Reliability | InsightCategory::Performance => TaskPriority::Medium,
            _ => TaskPriority::Low,
        },
        CheckStatus::Pass => TaskPriority::Low,
    }
}

/// One task per non-passing check, in check order.
pub fn derive_tasks(checks: &[AuditCheck]) -> Vec<MaintenanceTask> {
    checks
        .iter()
        .filter(|check| check.status != CheckStatus::Pass)
        .map(|check| MaintenanceTask {
            id: format!("task-{}", check.id),
            priority: priority_for(check),
            title: format!("Address {}", check.label.to_lowercase()),
            description: format!("{} {}", check.details, check.recommendation),
        })
        .collect()
}

/// One insight per distinct category holding a non-passing check, in the
/// order categories first appear among the checks.
pub fn derive_insights(checks: &[AuditCheck]) -> Vec<AuditInsight> {
    let mut seen = Vec::new();

    for check in checks {
        if check.status == CheckStatus::Pass {
            continue;
        }
        let category = category_for(&check.id);
        if !seen.contains(&category) {
            seen.push(category);
        }
    }

    seen.into_iter()
        .map(|category| {
            let affected: Vec<&AuditCheck> = checks
                .iter()
                .filter(|check| {
                    check.status != CheckStatus::Pass && category_for(&check.id) == category
                })
                .collect();

            let failing = affected
                .iter()
                .filter(|check| check.status == CheckStatus::Fail)
                .count();
            let warning = affected.len() - failing;
            let labels: Vec<String> = affected
                .iter()
                .map(|check| check.label.to_lowercase())
                .collect();

            let message = match (failing, warning) {
                (0, _) => format!(
                    "{} needs attention: {} below target.",
                    capitalize(&category.to_string()),
                    labels.join(", ")
                ),
                (_, 0) => format!(
                    "{} is in poor shape: {} failing.",
                    capitalize(&category.to_string()),
                    labels.join(", ")
                ),
                _ => format!(
                    "{} has {} failing and {} warning signals: {}.",
                    capitalize(&category.to_string()),
                    failing,
                    warning,
                    labels.join(", ")
                ),
            };

            AuditInsight {
                id: format!("insight-{}", category),
                category,
                message,
            }
        })
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}
