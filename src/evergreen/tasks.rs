//! Task generators

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::error::{GeneratorError, GeneratorResult};
use super::shrub::{Configuration, Task, TaskDependency, Variant};

pub const RUN_ON: &str = "ubuntu1804-small";
pub const SERVER_VERSIONS: [&str; 4] = ["4.2", "4.4", "5.0", "6.0"];
pub const OSES: [&str; 9] = [
    "amazonlinux2",
    "centos7",
    "centos8",
    "rhel9",
    "debian9",
    "debian10",
    "ubuntu18.04",
    "ubuntu20.04",
    "ubuntu22.04",
];
pub const REPOS: [&str; 2] = ["org", "enterprise"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    AtlasCli,
    MongoCli,
}

impl ToolName {
    pub fn as_str(self) -> &'static str {
        match self {
            ToolName::AtlasCli => "atlascli",
            ToolName::MongoCli => "mongocli",
        }
    }

    /// Package name and entrypoint installed from the repo.
    fn package(self) -> (&'static str, &'static str) {
        match self {
            ToolName::AtlasCli => ("mongodb-atlas-cli", "atlas"),
            ToolName::MongoCli => ("mongocli", "mongocli"),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(GeneratorError::ToolNameMissing),
            "atlascli" => Ok(ToolName::AtlasCli),
            "mongocli" => Ok(ToolName::MongoCli),
            other => Err(GeneratorError::InvalidToolName(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskType {
    Repo,
    PostPkg,
}

impl FromStr for TaskType {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(GeneratorError::TasksMissing),
            "repo" => Ok(TaskType::Repo),
            "postpkg" => Ok(TaskType::PostPkg),
            other => Err(GeneratorError::InvalidTasks(other.to_string())),
        }
    }
}

/// Validate the raw flags in order (tool first, then tasks) and build the graph.
pub fn generate(tool_name: Option<&str>, tasks: Option<&str>) -> GeneratorResult<Configuration> {
    let tool: ToolName = tool_name.unwrap_or_default().parse()?;
    let task_type: TaskType = tasks.unwrap_or_default().parse()?;
    debug!(%tool, ?task_type, "generating tasks");

    let mut config = Configuration::default();
    match task_type {
        TaskType::Repo => generate_repo_tasks(&mut config, tool),
        TaskType::PostPkg => {
            generate_post_pkg_tasks(&mut config, tool);
            generate_post_pkg_meta_tasks(&mut config, tool);
        }
    }
    Ok(config)
}

/// Docker image used by the post-packaging smoke tests.
fn post_pkg_image(os: &str) -> String {
    match os {
        "centos7" | "centos8" | "rhel9" | "amazonlinux2" => format!("{os}-rpm"),
        _ => format!("{os}-deb"),
    }
}

/// Distro name used by the release publish tasks.
fn publish_os(os: &str) -> &str {
    match os {
        "centos7" => "rhel70",
        "centos8" => "rhel80",
        "rhel9" => "rhel90",
        "amazonlinux2" => "amazon2",
        "ubuntu18.04" => "ubuntu1804",
        "ubuntu20.04" => "ubuntu2004",
        "ubuntu22.04" => "ubuntu2204",
        "debian9" => "debian92",
        other => other,
    }
}

fn publish_dependency(
    tool: ToolName,
    os: &str,
    server_version: &str,
    repo: &str,
) -> TaskDependency {
    TaskDependency {
        name: format!("push_{}_{}_{}_stable", tool, publish_os(os), repo),
        variant: format!("release_{}_publish_{}", tool, server_version.replace('.', "")),
    }
}

fn snapshot_dependency(tool: ToolName) -> TaskDependency {
    TaskDependency {
        name: "package_goreleaser".to_string(),
        variant: format!("goreleaser_{tool}_snapshot"),
    }
}

fn vars<const N: usize>(pairs: [(&str, String); N]) -> BTreeMap<String, String> {
    pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
}

/// One variant per server version, one task per OS and repo.
pub fn generate_repo_tasks(config: &mut Configuration, tool: ToolName) {
    let (package, entrypoint) = tool.package();
    for server_version in SERVER_VERSIONS {
        let mut variant = Variant::new(
            format!("test_repo_{tool}_{server_version}"),
            format!("Test {tool} on repo {server_version}"),
            RUN_ON,
        );

        for os in OSES {
            for repo in REPOS {
                let mongo_repo = if repo == "org" {
                    "https://repo.mongodb.org"
                } else {
                    "https://repo.mongodb.com"
                };
                let task = Task::new(format!("test_repo_{tool}_{os}_{repo}_{server_version}"))
                    .stepback(false)
                    .git_tag_only(true)
                    .dependency(publish_dependency(tool, os, server_version, repo))
                    .function("clone")
                    .function_with_vars(
                        "docker build repo",
                        vars([
                            ("server_version", server_version.to_string()),
                            ("package", package.to_string()),
                            ("entrypoint", entrypoint.to_string()),
                            ("image", os.to_string()),
                            ("mongo_package", format!("mongodb-{repo}")),
                            ("mongo_repo", mongo_repo.to_string()),
                        ]),
                    );
                variant.add_task(task.name.clone());
                config.tasks.push(task);
            }
        }

        config.variants.push(variant);
    }
}

pub fn generate_post_pkg_tasks(config: &mut Configuration, tool: ToolName) {
    post_pkg_variant(
        config,
        tool,
        format!("pkg_smoke_tests_docker_{tool}_generated"),
        format!("Generated post packaging smoke tests (Docker / {tool})"),
        |os| format!("pkg_test_{tool}_docker_{os}"),
        "docker build",
    );
}

/// Meta package smoke tests; atlascli only.
pub fn generate_post_pkg_meta_tasks(config: &mut Configuration, tool: ToolName) {
    if tool != ToolName::AtlasCli {
        return;
    }
    post_pkg_variant(
        config,
        tool,
        format!("pkg_smoke_tests_docker_meta_{tool}_generated"),
        format!("Generated post packaging smoke tests (Meta / {tool})"),
        |os| format!("pkg_test_{tool}_meta_docker_{os}"),
        "docker build meta",
    );
}

fn post_pkg_variant(
    config: &mut Configuration,
    tool: ToolName,
    name: String,
    display_name: String,
    task_name: impl Fn(&str) -> String,
    function: &str,
) {
    let mut variant = Variant::new(name, display_name, RUN_ON);
    for os in OSES {
        let task = Task::new(task_name(os))
            .dependency(snapshot_dependency(tool))
            .function("clone")
            .function_with_vars(
                function,
                vars([
                    ("tool_name", tool.to_string()),
                    ("image", post_pkg_image(os)),
                ]),
            );
        variant.add_task(task.name.clone());
        config.tasks.push(task);
    }
    config.variants.push(variant);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_os_when_mapping_publish_distro_then_matches_release_names() {
        assert_eq!(publish_os("centos7"), "rhel70");
        assert_eq!(publish_os("debian10"), "debian10");
        assert_eq!(publish_os("ubuntu22.04"), "ubuntu2204");
    }

    #[test]
    fn given_os_when_mapping_image_then_picks_package_format() {
        assert_eq!(post_pkg_image("amazonlinux2"), "amazonlinux2-rpm");
        assert_eq!(post_pkg_image("debian9"), "debian9-deb");
    }

    #[test]
    fn given_tool_when_validating_before_tasks_then_tool_error_wins() {
        assert_eq!(
            generate(Some("nope"), None).unwrap_err(),
            GeneratorError::InvalidToolName("nope".into())
        );
        assert_eq!(generate(None, Some("repo")).unwrap_err(), GeneratorError::ToolNameMissing);
    }
}
