//! Build information

use rcs_server::build_info::{BuildInfo, NOT_SET};

fn sample() -> BuildInfo {
    BuildInfo {
        version: "1.2.3".to_string(),
        time: "2020-06-01".to_string(),
        branch: "main".to_string(),
        commit: "abc123".to_string(),
    }
}

#[test]
fn current_uses_package_version() {
    let info = BuildInfo::current();
    assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
    assert!(!info.time.is_empty());
}

#[test]
fn unset_facts_use_placeholder() {
    if option_env!("RCS_BUILD_COMMIT").is_none() {
        assert_eq!(BuildInfo::current().commit, NOT_SET);
    }
}

#[test]
fn map_uses_info_endpoint_keys() {
    let map = sample().to_map();
    assert_eq!(map.len(), 4);
    assert_eq!(map["BuildVersion"], "1.2.3");
    assert_eq!(map["BuildTime"], "2020-06-01");
    assert_eq!(map["BuildBranch"], "main");
    assert_eq!(map["BuildCommit"], "abc123");
}

#[test]
fn entries_are_in_display_order() {
    let info = sample();
    let labels: Vec<&str> = info.entries().iter().map(|(label, _)| *label).collect();
    assert_eq!(labels, ["Version:", "Build time:", "Branch:", "Commit:"]);
}
