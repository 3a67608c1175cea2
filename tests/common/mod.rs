//! Shared helpers for integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use helm_chart_gen::{ChartGenResult, CommandOutput, CommandRunner, CommandSpec, Config};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

pub const NAMESPACE: &str = "apiVersion: v1\nkind: Namespace\nmetadata:\n  labels:\n    control-plane: controller-manager\n  name: meridio-operator-system";

pub const SERVICE_ACCOUNT: &str = "apiVersion: v1\nkind: ServiceAccount\nmetadata:\n  name: meridio-operator-controller-manager\n  namespace: meridio-operator-system";

pub const DEPLOYMENT: &str = "apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  labels:\n    control-plane: controller-manager\n  name: meridio-operator-controller-manager\n  namespace: meridio-operator-system\nspec:\n  replicas: 1\n  template:\n    spec:\n      containers:\n      - image: controller:0.0.1\n        name: manager";

pub const MUTATING_HOOK: &str = "apiVersion: admissionregistration.k8s.io/v1\nkind: MutatingWebhookConfiguration\nmetadata:\n  annotations:\n    cert-manager.io/inject-ca-from: meridio-operator-system/meridio-operator-serving-cert\n  name: my-hook\nwebhooks:\n- admissionReviewVersions:\n  - v1\n  clientConfig:\n    service:\n      name: meridio-operator-webhook-service\n      namespace: meridio-operator-system\n      path: /mutate-meridio-nordix-org-v1-trench\n  name: mtrench.kb.io\n";

/// Join documents the way the generator prints them
pub fn generator_output(documents: &[&str]) -> String {
    documents.join("\n---\n")
}

/// Command runner that replays canned outputs and records every call
#[derive(Default)]
pub struct FakeRunner {
    outputs: Mutex<HashMap<String, CommandOutput>>,
    calls: Mutex<Vec<CommandSpec>>,
}

impl FakeRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, program: &str, output: CommandOutput) {
        self.outputs
            .lock()
            .unwrap()
            .insert(program.to_string(), output);
    }

    pub fn succeed_with(&self, program: &str, stdout: &str) {
        self.respond(
            program,
            CommandOutput {
                success: true,
                status: "exit status: 0".to_string(),
                stdout: stdout.as_bytes().to_vec(),
                stderr: Vec::new(),
            },
        );
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.lock().unwrap().clone()
    }

    pub fn calls_to(&self, program: &str) -> Vec<CommandSpec> {
        self.calls()
            .into_iter()
            .filter(|spec| spec.program == program)
            .collect()
    }
}

#[async_trait]
impl CommandRunner for FakeRunner {
    async fn run(&self, spec: &CommandSpec) -> ChartGenResult<CommandOutput> {
        self.calls.lock().unwrap().push(spec.clone());
        Ok(self
            .outputs
            .lock()
            .unwrap()
            .get(&spec.program)
            .cloned()
            .unwrap_or(CommandOutput {
                success: true,
                status: "exit status: 0".to_string(),
                ..CommandOutput::default()
            }))
    }
}

/// Default configuration rooted at `workdir`
pub fn config_in(workdir: &Path) -> Config {
    Config {
        workdir: workdir.to_path_buf(),
        ..Config::default()
    }
}

/// Write the chart descriptor where the default configuration expects it
pub fn write_descriptor(workdir: &Path) {
    let hack = workdir.join("hack");
    std::fs::create_dir_all(&hack).unwrap();
    std::fs::write(
        hack.join("Chart.yaml"),
        "apiVersion: v2\nname: meridio-operator\ntype: application\nversion: 0.0.1\n",
    )
    .unwrap();
}
