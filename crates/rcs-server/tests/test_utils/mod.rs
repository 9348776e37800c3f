//! Shared test utilities for rcs-server tests
//!
//! Builds in-memory content snapshots, on-disk content trees and local
//! Rocket clients for the content API.

#![allow(dead_code)] // Test utilities may not all be used in every test file

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rcs_application::{GroupCatalog, ParsedContent};
use rcs_domain::{
    ErrorKeyMetadata, GlobalRuleConfig, Group, Impact, RuleContent, RuleContentDirectory,
    RuleContentStatus, RuleErrorKeyContent, RulePluginInfo, RuleType,
};
use rcs_infrastructure::config::AppConfig;
use rcs_server::api::{ContentState, content_rocket};
use rcs_server::build_info::BuildInfo;
use rcs_server::constants::IDENTITY_HEADER;
use rocket::http::Header;
use rocket::local::asynchronous::Client;
use tempfile::TempDir;

pub const API_PREFIX: &str = "/api/v1";

pub const OPENAPI_DOCUMENT: &str = r#"{"openapi": "3.0.0", "info": {"title": "Rules content service"}}"#;

pub const GROUPS_YAML: &str = "\
security:
  name: Security
  description: Security related rules
  tags:
    - security
    - cve
performance:
  name: Performance
  description: Performance rules
  tags:
    - performance
";

pub const GLOBAL_CONFIG: &str = "\
impact:
  Data Loss: 4
resolution_risk:
  Upgrade Cluster: 3
";

pub const PLUGIN: &str = "\
name: Test rule
node_id: '1234'
product_code: ocp
python_module: ccx_rules_ocp.external.rules.test_rule
";

pub const METADATA: &str = "\
condition: The cluster is affected
description: A description
impact: Data Loss
likelihood: 2
publish_date: '2020-04-08 00:42:00'
resolution_risk: Upgrade Cluster
status: active
tags:
  - security
";

/// Full API path of `route`
pub fn api(route: &str) -> String {
    format!("{API_PREFIX}{route}")
}

pub fn sample_groups() -> GroupCatalog {
    BTreeMap::from([
        (
            "performance".to_string(),
            Group::new("Performance", "Performance rules", ["performance"]),
        ),
        (
            "security".to_string(),
            Group::new("Security", "Security related rules", ["security", "cve"]),
        ),
    ])
}

fn sample_rule(name: &str) -> RuleContent {
    let error_key = RuleErrorKeyContent {
        generic: "Generic text".to_string(),
        reason: "Reason text".to_string(),
        has_reason: true,
        metadata: ErrorKeyMetadata {
            condition: "The cluster is affected".to_string(),
            description: "A description".to_string(),
            impact: Impact {
                name: "Data Loss".to_string(),
                impact: 4,
            },
            likelihood: 2,
            status: "active".to_string(),
            tags: vec!["security".to_string()],
            ..ErrorKeyMetadata::default()
        },
        ..RuleErrorKeyContent::default()
    };

    RuleContent {
        summary: format!("Summary of {name}"),
        plugin: RulePluginInfo {
            name: name.to_string(),
            node_id: "1234".to_string(),
            product_code: "ocp".to_string(),
            python_module: format!("rules.{name}"),
        },
        error_keys: BTreeMap::from([("ERROR_KEY".to_string(), error_key)]),
        ..RuleContent::default()
    }
}

/// Two loaded rules (one per category) and one failed external rule
pub fn sample_content() -> ParsedContent {
    let mut directory = RuleContentDirectory::new(GlobalRuleConfig {
        impact: BTreeMap::from([("Data Loss".to_string(), 4)]),
        resolution_risk: BTreeMap::from([("Upgrade Cluster".to_string(), 3)]),
    });
    directory
        .rules
        .insert("ext_rule".to_string(), sample_rule("ext_rule"));
    directory
        .rules
        .insert("int_rule".to_string(), sample_rule("int_rule"));

    let status = BTreeMap::from([
        (
            "ext_rule".to_string(),
            RuleContentStatus::loaded(RuleType::External),
        ),
        (
            "int_rule".to_string(),
            RuleContentStatus::loaded(RuleType::Internal),
        ),
        (
            "broken_rule".to_string(),
            RuleContentStatus::failed(RuleType::External, "missing mandatory file: plugin.yaml"),
        ),
    ]);

    ParsedContent { directory, status }
}

/// `x-rh-identity` header carrying `json`
pub fn identity_header(json: &str) -> Header<'static> {
    Header::new(IDENTITY_HEADER, STANDARD.encode(json))
}

/// A valid identity header
pub fn valid_identity() -> Header<'static> {
    identity_header(r#"{"identity": {"account_number": "6212377", "org_id": "1"}}"#)
}

/// Content API over [`sample_content`] with an OpenAPI file on disk
pub struct TestServer {
    temp: TempDir,
    pub config: AppConfig,
    pub state: Arc<ContentState>,
}

impl TestServer {
    pub fn new() -> Self {
        Self::with_config(|_| {})
    }

    /// Authentication switched on
    pub fn with_auth() -> Self {
        Self::with_config(|config| config.server.auth = true)
    }

    pub fn with_config(adjust: impl FnOnce(&mut AppConfig)) -> Self {
        let temp = TempDir::new().expect("create temp dir");
        let spec_path = temp.path().join("openapi.json");
        fs::write(&spec_path, OPENAPI_DOCUMENT).expect("write openapi.json");

        let mut config = AppConfig::default();
        config.server.api_spec_file = spec_path;
        adjust(&mut config);

        let state = Arc::new(ContentState::new(
            &sample_groups(),
            sample_content(),
            &BuildInfo::current(),
            &config.server,
        ));

        Self {
            temp,
            config,
            state,
        }
    }

    pub async fn client(&self) -> Client {
        Client::tracked(content_rocket(Arc::clone(&self.state), &self.config))
            .await
            .expect("valid rocket instance")
    }
}

/// A content tree and group file on disk
pub struct ContentFixture {
    temp: TempDir,
}

impl ContentFixture {
    /// Groups file, global config and empty category directories
    pub fn new() -> Self {
        let fixture = Self {
            temp: TempDir::new().expect("create temp dir"),
        };
        fixture.file("groups_config.yaml", GROUPS_YAML);
        fixture.file("content/config.yaml", GLOBAL_CONFIG);
        fs::create_dir_all(fixture.path("content/external")).expect("create external");
        fs::create_dir_all(fixture.path("content/internal")).expect("create internal");
        fixture
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp.path().join(relative)
    }

    pub fn groups_path(&self) -> PathBuf {
        self.path("groups_config.yaml")
    }

    pub fn content_path(&self) -> PathBuf {
        self.path("content")
    }

    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dir");
        }
        fs::write(path, content).expect("write file");
        self
    }

    /// A complete rule with one error key under `category`
    pub fn rule(&self, category: &str, name: &str, metadata: &str) -> &Self {
        let rule = format!("content/{category}/{name}");
        self.file(&format!("{rule}/plugin.yaml"), PLUGIN)
            .file(&format!("{rule}/summary.md"), "Summary")
            .file(&format!("{rule}/reason.md"), "Reason")
            .file(&format!("{rule}/resolution.md"), "Resolution")
            .file(&format!("{rule}/more_info.md"), "More info")
            .file(&format!("{rule}/ERROR_KEY/generic.md"), "Generic")
            .file(&format!("{rule}/ERROR_KEY/metadata.yaml"), metadata)
    }

    /// Configuration pointing at this fixture
    pub fn config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        config.groups.config_path = self.groups_path();
        config.content.path = self.content_path();
        config
    }

    pub fn root(&self) -> &Path {
        self.temp.path()
    }
}
