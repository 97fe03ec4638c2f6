pub mod audit;
pub mod model;
pub mod report;
pub mod rules;
pub mod triage;

pub use audit::{run_audit, validate_target, AuditOptions};
pub use model::{
    AuditCheck, AuditInsight, AuditReport, BrokenLink, CheckStatus, InsightCategory,
    MaintenanceTask, TaskPriority,
};
pub use vigil_scanner::{AuditError, FetchResult, LinkCheckResult, PageSignals};

pub fn print_banner() {
    println!(
        r#"
       _       _ _
__   _(_) __ _(_) |
\ \ / / |/ _` | | |
 \ V /| | (_| | | |
  \_/ |_|\__, |_|_|
         |___/
  single-page maintenance auditor v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
