//! Checks for the sequence-of-mapping sections: models, prompts,
//! constraints and tasks.
//!
//! Every entry gets the same treatment (shape, required fields, duplicate
//! ids), followed by a section-specific rule on one field.

use serde_json::{Map, Value};
use tracing::debug;

use super::findings::Findings;
use crate::document::{as_mapping, as_sequence, is_one_of, render_value};

pub const MODEL_TYPES: [&str; 6] = [
    "LLM",
    "Vision",
    "Audio",
    "Multimodal",
    "Classification",
    "Embedding",
];
pub const PROMPT_ROLES: [&str; 3] = ["system", "user", "assistant"];
pub const CONSTRAINT_SEVERITIES: [&str; 4] = ["low", "medium", "high", "critical"];

/// Shape of one sequence section.
struct Collection {
    section: &'static str,
    entry: &'static str,
    kind: &'static str,
    required: &'static [&'static str],
}

const MODELS: Collection = Collection {
    section: "models",
    entry: "Model",
    kind: "model",
    required: &["id", "type", "provider", "name", "purpose"],
};

const PROMPTS: Collection = Collection {
    section: "prompts",
    entry: "Prompt",
    kind: "prompt",
    required: &["id", "role", "template"],
};

const CONSTRAINTS: Collection = Collection {
    section: "constraints",
    entry: "Constraint",
    kind: "constraint",
    required: &["id", "rule", "severity"],
};

const TASKS: Collection = Collection {
    section: "tasks",
    entry: "Task",
    kind: "task",
    required: &["id", "description"],
};

impl Collection {
    fn entries<'a>(&self, value: &'a Value, findings: &mut Findings) -> Option<&'a [Value]> {
        match as_sequence(value) {
            Some(entries) => Some(entries.as_slice()),
            None => {
                findings.error(format!("{} must be an array", self.section));
                None
            }
        }
    }

    /// Walk entries in order, running `rule` on each well-shaped one after
    /// the shared field and id checks.
    fn check_entries<F>(&self, entries: &[Value], findings: &mut Findings, mut rule: F)
    where
        F: FnMut(&Map<String, Value>, &mut Findings),
    {
        debug!("Checking {} {} entries", entries.len(), self.section);
        let mut seen = IdSet::default();

        for (index, entry) in entries.iter().enumerate() {
            let Some(entry) = as_mapping(entry) else {
                findings.error(format!("{} {index} must be an array", self.entry));
                continue;
            };

            for field in self.required {
                if !entry.contains_key(*field) {
                    findings.error(format!(
                        "{} {index} missing required field: {field}",
                        self.entry
                    ));
                }
            }

            if let Some(id) = entry.get("id")
                && !seen.insert(id)
            {
                findings.error(format!(
                    "Duplicate {} ID: {}",
                    self.kind,
                    render_value(id)
                ));
            }

            rule(entry, findings);
        }
    }
}

/// Ids seen so far in one section, compared by value.
#[derive(Default)]
struct IdSet<'a> {
    ids: Vec<&'a Value>,
}

impl<'a> IdSet<'a> {
    /// Returns `false` if `id` was already present.
    fn insert(&mut self, id: &'a Value) -> bool {
        if self.ids.contains(&id) {
            return false;
        }
        self.ids.push(id);
        true
    }
}

pub fn check_models(models: &Value, findings: &mut Findings) {
    let Some(entries) = MODELS.entries(models, findings) else {
        return;
    };

    if entries.is_empty() {
        findings.error("At least one model is required");
        return;
    }

    MODELS.check_entries(entries, findings, |model, findings| {
        if let Some(kind) = model.get("type")
            && !is_one_of(kind, &MODEL_TYPES)
        {
            findings.warning(format!("Unknown model type: {}", render_value(kind)));
        }
    });
}

pub fn check_prompts(prompts: &Value, findings: &mut Findings) {
    let Some(entries) = PROMPTS.entries(prompts, findings) else {
        return;
    };

    PROMPTS.check_entries(entries, findings, |prompt, findings| {
        if let Some(role) = prompt.get("role")
            && !is_one_of(role, &PROMPT_ROLES)
        {
            findings.error(format!("Invalid prompt role: {}", render_value(role)));
        }
    });
}

pub fn check_constraints(constraints: &Value, findings: &mut Findings) {
    let Some(entries) = CONSTRAINTS.entries(constraints, findings) else {
        return;
    };

    CONSTRAINTS.check_entries(entries, findings, |constraint, findings| {
        if let Some(severity) = constraint.get("severity")
            && !is_one_of(severity, &CONSTRAINT_SEVERITIES)
        {
            findings.error(format!(
                "Invalid constraint severity: {}",
                render_value(severity)
            ));
        }
    });
}

pub fn check_tasks(tasks: &Value, findings: &mut Findings) {
    let Some(entries) = TASKS.entries(tasks, findings) else {
        return;
    };

    // Task descriptions and steps are free-form here; steps are resolved by
    // the reference checks.
    TASKS.check_entries(entries, findings, |_, _| {});
}
