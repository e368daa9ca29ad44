//! Evergreen project configuration model (the subset the generator emits)

use std::collections::BTreeMap;

use serde::Serialize;

/// Top-level evergreen configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tasks: Vec<Task>,
    #[serde(rename = "buildvariants", skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
}

impl Configuration {
    /// Tab-indented JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDependency {
    pub name: String,
    pub variant: String,
}

/// One step of a task: a call to a project function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandDefinition {
    #[serde(rename = "func")]
    pub function: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub vars: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    pub name: String,
    #[serde(rename = "depends_on", skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<TaskDependency>,
    pub commands: Vec<CommandDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stepback: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub git_tag_only: Option<bool>,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dependencies: Vec::new(),
            commands: Vec::new(),
            stepback: None,
            git_tag_only: None,
        }
    }

    pub fn stepback(mut self, stepback: bool) -> Self {
        self.stepback = Some(stepback);
        self
    }

    pub fn git_tag_only(mut self, git_tag_only: bool) -> Self {
        self.git_tag_only = Some(git_tag_only);
        self
    }

    pub fn dependency(mut self, dependency: TaskDependency) -> Self {
        self.dependencies.push(dependency);
        self
    }

    pub fn function(self, name: impl Into<String>) -> Self {
        self.function_with_vars(name, BTreeMap::new())
    }

    pub fn function_with_vars(
        mut self,
        name: impl Into<String>,
        vars: BTreeMap<String, String>,
    ) -> Self {
        self.commands.push(CommandDefinition {
            function: name.into(),
            vars,
        });
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRef {
    pub name: String,
}

/// Build variant grouping tasks on a distro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variant {
    pub name: String,
    pub display_name: String,
    pub run_on: Vec<String>,
    pub tasks: Vec<TaskRef>,
}

impl Variant {
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        run_on: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            run_on: vec![run_on.into()],
            tasks: Vec::new(),
        }
    }

    pub fn add_task(&mut self, name: impl Into<String>) {
        self.tasks.push(TaskRef { name: name.into() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_task_without_optional_fields_when_serializing_then_omits_them() {
        let task = Task::new("t").function("clone");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["commands"][0]["func"], "clone");
        assert!(json.get("depends_on").is_none());
        assert!(json.get("stepback").is_none());
        assert!(json["commands"][0].get("vars").is_none());
    }

    #[test]
    fn given_configuration_when_rendering_json_then_indents_with_tabs() {
        let mut config = Configuration::default();
        config.tasks.push(Task::new("t"));
        let json = config.to_json().unwrap();
        assert!(json.contains("\n\t\"tasks\""));
        assert!(!json.contains("buildvariants"));
    }
}
