//! Demonstration service: config load, health-check stub, sample task
//! processing. There is no real business logic here; the service exists so
//! the pipeline has something to lint, test, build, and publish.

use serde::Serialize;
use serde_json::{json, Value};

use crate::config::{self, ServiceConfig};
use crate::utils::{ident, timestamp};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthChecks {
    pub os: String,
    pub arch: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Health-check stub. Always healthy; the checks echo the runtime platform.
pub fn health_check() -> HealthReport {
    HealthReport {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            os: std::env::consts::OS.to_string(),
            arch: std::env::consts::ARCH.to_string(),
        },
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskOutput {
    pub processed: bool,
    pub items_count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    pub task_id: String,
    pub status: String,
    pub input: Value,
    pub output: TaskOutput,
}

/// Process a sample task.
///
/// No real work happens: the input is echoed back with a completion marker
/// and, for object inputs, the number of top-level keys.
pub fn process_task(task_id: &str, data: &Value) -> TaskResult {
    crate::log_status!("service", "Processing task: {}", task_id);

    let items_count = data.as_object().map(|obj| obj.len()).unwrap_or(0);
    let result = TaskResult {
        task_id: task_id.to_string(),
        status: "completed".to_string(),
        input: data.clone(),
        output: TaskOutput {
            processed: true,
            items_count,
        },
    };

    crate::log_status!("service", "Task {} completed", task_id);
    result
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceReport {
    pub started_at: String,
    pub config: ServiceConfig,
    pub health: HealthReport,
    pub sample_task: TaskResult,
}

/// Startup sequence for the demo service: load config, run the health
/// check, process one sample task.
pub fn run(task_id: Option<&str>) -> ServiceReport {
    crate::log_status!("service", "devops-toolchain service starting...");

    let started_at = timestamp::format_timestamp(None);
    let config = config::load();
    crate::log_status!(
        "service",
        "Environment: {} (log level {})",
        config.environment,
        config.log_level
    );

    let health = health_check();

    let task_id = task_id
        .map(str::to_string)
        .unwrap_or_else(|| ident::generate_id("task"));
    let sample_task = process_task(
        &task_id,
        &json!({"message": "Hello from devops-toolchain!"}),
    );

    crate::log_status!("service", "Service initialization complete");

    ServiceReport {
        started_at,
        config,
        health,
        sample_task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_check_is_always_healthy() {
        let health = health_check();
        assert_eq!(health.status, "healthy");
        assert_eq!(health.version, env!("CARGO_PKG_VERSION"));
        assert!(!health.checks.os.is_empty());
    }

    #[test]
    fn process_task_echoes_input_and_counts_keys() {
        let data = json!({"a": 1, "b": 2});
        let result = process_task("test-001", &data);

        assert_eq!(result.task_id, "test-001");
        assert_eq!(result.status, "completed");
        assert_eq!(result.input, data);
        assert!(result.output.processed);
        assert_eq!(result.output.items_count, 2);
    }

    #[test]
    fn non_object_input_counts_zero_items() {
        let result = process_task("test-002", &json!("plain string"));
        assert_eq!(result.output.items_count, 0);
    }

    #[test]
    fn run_generates_a_task_id_when_none_given() {
        let report = run(None);
        assert!(report.sample_task.task_id.starts_with("task-"));
        assert_eq!(report.health.status, "healthy");
    }
}
