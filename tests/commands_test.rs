//! Tests for command options: flag resolution, store calls and rendering

mod common;

use std::sync::Arc;

use clap::Parser;
use rstest::rstest;

use common::{api_key, container, Call, FakeAtlas, FakeOpsManager};
use mongocli::application::{ApplicationError, Backend, Store};
use mongocli::cli::args::{
    AtlasCommands, Cli, Commands, ContainersCommands, ContainersListArgs, LinkCreateArgs,
    NetworkingCommands, OrgApiKeysDescribeArgs, PageArgs,
};
use mongocli::cli::commands::{
    ContainersListOpts, LinkCreateOpts, OrgApiKeysDescribeOpts, OrgApiKeysListOpts,
};
use mongocli::cli::output::{OutputFormat, Printer};
use mongocli::cli::CliError;
use mongocli::config::Settings;
use mongocli::domain::{ListOptions, Service};

fn profile() -> Settings {
    Settings {
        org_id: Some("profile-org".into()),
        project_id: Some("profile-project".into()),
        ..Default::default()
    }
}

/// Run `f` with a printer over a buffer and return what was written.
fn capture<F>(format: OutputFormat, f: F) -> String
where
    F: FnOnce(&mut Printer<'_>),
{
    let mut buf = Vec::new();
    {
        let mut printer = Printer::new(format, &mut buf);
        f(&mut printer);
    }
    String::from_utf8(buf).unwrap()
}

// ============================================================
// containers list
// ============================================================

#[test]
fn given_no_provider_when_listing_containers_then_calls_only_unfiltered_listing() {
    let atlas = Arc::new(FakeAtlas {
        containers: vec![container("c1", "AWS")],
        ..Default::default()
    });
    let store = Store::new(Service::Cloud, Backend::Atlas(atlas.clone()));
    let opts = ContainersListOpts::from_args(&ContainersListArgs::default(), &profile()).unwrap();

    let out = capture(OutputFormat::Plain, |printer| opts.run(&store, printer).unwrap());

    assert_eq!(
        atlas.calls(),
        vec![Call::new("list_all_containers", &["profile-project", "0", "0"])]
    );
    assert!(out.starts_with("ID"));
    assert!(out.contains("c1"));
    assert!(out.contains("10.8.0.0/21"));
}

#[rstest]
#[case("AWS")]
#[case("GCP")]
#[case("AZURE")]
fn given_provider_when_listing_containers_then_calls_only_filtered_listing(
    #[case] provider: &str,
) {
    let atlas = Arc::new(FakeAtlas::default());
    let store = Store::new(Service::Cloud, Backend::Atlas(atlas.clone()));
    let args = ContainersListArgs {
        provider: Some(provider.to_string()),
        project_id: Some("p-flag".into()),
        page: PageArgs { page: 2, limit: 30 },
    };
    let opts = ContainersListOpts::from_args(&args, &profile()).unwrap();

    capture(OutputFormat::Plain, |printer| opts.run(&store, printer).unwrap());

    assert_eq!(
        atlas.calls(),
        vec![Call::new("list_containers", &["p-flag", provider, "2", "30"])]
    );
}

#[test]
fn given_empty_provider_when_building_opts_then_treated_as_unset() {
    let args = ContainersListArgs {
        provider: Some(String::new()),
        ..Default::default()
    };
    let opts = ContainersListOpts::from_args(&args, &profile()).unwrap();
    assert_eq!(opts.provider, None);
}

#[test]
fn given_no_project_anywhere_when_building_opts_then_missing_project_id() {
    let err = ContainersListOpts::from_args(&ContainersListArgs::default(), &Settings::default())
        .unwrap_err();
    assert!(matches!(
        err,
        CliError::Application(ApplicationError::MissingProjectId)
    ));
    assert_eq!(err.exit_code(), mongocli::exitcode::USAGE);
}

#[test]
fn given_json_output_when_listing_containers_then_prints_json_array() {
    let atlas = Arc::new(FakeAtlas {
        containers: vec![container("c1", "AWS"), container("c2", "AWS")],
        ..Default::default()
    });
    let store = Store::new(Service::Cloud, Backend::Atlas(atlas));
    let opts = ContainersListOpts::from_args(&ContainersListArgs::default(), &profile()).unwrap();

    let out = capture(OutputFormat::Json, |printer| opts.run(&store, printer).unwrap());

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(2));
    assert_eq!(value[0]["providerName"], "AWS");
}

#[test]
fn given_ops_manager_store_when_listing_containers_then_unsupported_and_no_output() {
    let om = Arc::new(FakeOpsManager::default());
    let store = Store::new(Service::OpsManager, Backend::OpsManager(om));
    let opts = ContainersListOpts::from_args(&ContainersListArgs::default(), &profile()).unwrap();

    let mut result = None;
    let out = capture(OutputFormat::Plain, |printer| {
        result = Some(opts.run(&store, printer));
    });

    let err = result.unwrap().unwrap_err();
    assert_eq!(err.to_string(), "unsupported service: ops-manager");
    assert!(out.is_empty());
}

// ============================================================
// liveMigrations link create
// ============================================================

#[test]
fn given_link_token_when_creating_link_then_payload_is_token_unchanged() {
    let args = LinkCreateArgs {
        link_token: "  abc/+=  ".into(),
        org_id: Some("org-flag".into()),
    };
    let opts = LinkCreateOpts::from_args(&args, &profile()).unwrap();

    let payload = serde_json::to_value(opts.request()).unwrap();

    assert_eq!(payload, serde_json::json!({ "linkToken": "  abc/+=  " }));
}

#[rstest]
#[case(Service::OpsManager)]
#[case(Service::CloudManager)]
fn given_manager_store_when_creating_link_then_prints_confirmation(#[case] service: Service) {
    let om = Arc::new(FakeOpsManager::default());
    let store = Store::new(service, Backend::OpsManager(om.clone()));
    let args = LinkCreateArgs {
        link_token: "tok".into(),
        org_id: None,
    };
    let opts = LinkCreateOpts::from_args(&args, &profile()).unwrap();

    let out = capture(OutputFormat::Plain, |printer| opts.run(&store, printer).unwrap());

    assert_eq!(out, "Organization link successfully created.\n");
    assert_eq!(
        om.calls(),
        vec![Call::new("connect_organizations", &["profile-org", "tok"])]
    );
}

#[test]
fn given_empty_link_token_when_building_opts_then_invalid_args() {
    let err = LinkCreateOpts::from_args(&LinkCreateArgs::default(), &profile()).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgs(_)));
}

#[test]
fn given_link_opts_when_debug_formatting_then_token_is_hidden() {
    let args = LinkCreateArgs {
        link_token: "secret-token".into(),
        org_id: Some("o".into()),
    };
    let opts = LinkCreateOpts::from_args(&args, &profile()).unwrap();
    assert!(!format!("{opts:?}").contains("secret-token"));
}

// ============================================================
// iam organizations apiKeys
// ============================================================

#[test]
fn given_org_keys_when_listing_plain_then_renders_rows_in_order() {
    let atlas = Arc::new(FakeAtlas {
        api_keys: vec![api_key("k2"), api_key("k1")],
        ..Default::default()
    });
    let store = Store::new(Service::Cloud, Backend::Atlas(atlas.clone()));
    let opts = OrgApiKeysListOpts {
        org_id: "abc123".into(),
        list: ListOptions::new(1, 10),
    };

    let out = capture(OutputFormat::Plain, |printer| opts.run(&store, printer).unwrap());

    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("ID"));
    assert!(lines[1].starts_with("k2"));
    assert!(lines[2].starts_with("k1"));
    assert_eq!(
        atlas.calls(),
        vec![Call::new("list_org_api_keys", &["abc123", "1", "10"])]
    );
}

#[test]
fn given_empty_key_id_when_describing_then_invalid_args() {
    let args = OrgApiKeysDescribeArgs {
        id: String::new(),
        org_id: None,
    };
    let err = OrgApiKeysDescribeOpts::from_args(&args, &profile()).unwrap_err();
    assert!(matches!(err, CliError::InvalidArgs(_)));
}

// ============================================================
// argument parsing
// ============================================================

#[test]
fn given_containers_command_line_when_parsing_then_builds_list_args() {
    let cli = Cli::try_parse_from([
        "mongocli",
        "atlas",
        "networking",
        "containers",
        "list",
        "--provider",
        "GCP",
        "--projectId",
        "p1",
        "--page",
        "2",
    ])
    .unwrap();

    let Some(Commands::Atlas {
        command:
            AtlasCommands::Networking {
                command:
                    NetworkingCommands::Containers {
                        command: ContainersCommands::List(args),
                    },
            },
    }) = &cli.command
    else {
        panic!("unexpected command: {:?}", cli.command);
    };
    assert_eq!(args.provider.as_deref(), Some("GCP"));
    assert_eq!(args.project_id.as_deref(), Some("p1"));
    assert_eq!(args.page.page, 2);
    let list: ListOptions = PageArgs { page: 2, limit: 0 }.into();
    assert_eq!(list.query(), vec![("pageNum", "2".to_string())]);
}

#[test]
fn given_link_create_without_token_when_parsing_then_fails() {
    let result = Cli::try_parse_from(["mongocli", "om", "liveMigrations", "link", "create"]);
    assert!(result.is_err());
}
