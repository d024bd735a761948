//! End-to-end tests for the osg-build inspection commands.

mod common;

use common::TestEnv;

#[test]
fn defaults_json_reports_common_options_and_el5_tags() {
    let env = TestEnv::new();
    let result = env.run(&["defaults", "--json"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let json = result.json();
    assert_eq!(json["mode"], "common");
    assert_eq!(json["buildopts"]["redhat_release"], "5");
    assert_eq!(json["buildopts"]["cache_prefix"], "AUTO");
    assert_eq!(json["buildopts"]["kojilogin"], serde_json::Value::Null);
    assert_eq!(json["buildopts"]["koji_wrapper"], true);
    assert_eq!(json["buildopts"]["working_directory"], ".");
    assert_eq!(json["release_tags"]["koji_target"], "el5-osg");
}

#[test]
fn allbuild_defaults_apply_overrides_and_release() {
    let env = TestEnv::new();
    let result = env.run(&[
        "defaults",
        "--allbuild",
        "--release",
        "6",
        "--set",
        "scratch=true",
        "--json",
    ]);
    assert!(result.success, "stderr: {}", result.stderr);

    let json = result.json();
    assert_eq!(json["mode"], "allbuild");
    assert_eq!(json["buildopts"]["no_wait"], true);
    assert_eq!(json["buildopts"]["svn"], true);
    assert_eq!(json["buildopts"]["scratch"], true);
    assert_eq!(json["buildopts"]["redhat_release"], "6");
    assert_eq!(json["release_tags"]["distro_tag"], "osg.el6");
}

#[test]
fn allbuild_rejects_options_outside_allow_list() {
    let env = TestEnv::new();
    let result = env.run(&["defaults", "--allbuild", "--set", "regen_repos=true"]);
    assert!(!result.success);
    assert!(
        result
            .stderr
            .contains("regen_repos cannot be overridden in allbuild mode"),
        "stderr: {}",
        result.stderr
    );

    let common = env.run(&["defaults", "--set", "regen_repos=true"]);
    assert!(common.success, "stderr: {}", common.stderr);
    assert!(common.stdout.contains("regen_repos = true"));
}

#[test]
fn unsupported_release_is_a_configuration_error() {
    let env = TestEnv::new();
    let result = env.run(&["defaults", "--release", "7"]);
    assert!(!result.success);
    assert!(
        result.stderr.contains("unsupported redhat release \"7\""),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn releases_reads_site_config_table() {
    let env = TestEnv::new();
    let builtin = env.run(&["releases"]);
    assert!(builtin.success, "stderr: {}", builtin.stderr);
    assert_eq!(
        builtin.stdout.lines().collect::<Vec<_>>(),
        [
            "5: distro_tag=osg.el5 koji_tag=el5-osg koji_target=el5-osg",
            "6: distro_tag=osg.el6 koji_tag=el6-osg koji_target=el6-osg",
        ]
    );

    let site = env.write(
        "site.json",
        r#"{ "releases": { "6": { "distro_tag": "osg.el6", "koji_tag": "el6-osg-testing", "koji_target": "el6-osg" } } }"#,
    );
    let site_arg = site.to_str().expect("utf-8 path");
    let custom = env.run(&["releases", "--config", site_arg, "--json"]);
    assert!(custom.success, "stderr: {}", custom.stderr);
    let json = custom.json();
    assert_eq!(json["6"]["koji_tag"], "el6-osg-testing");
    assert!(json.get("5").is_none());
}

#[test]
fn paths_follow_home_and_program_dir() {
    let env = TestEnv::new();
    env.write(".vdt-build.ini", "[options]\n");
    let result = env.run(&["paths", "--program-dir", "/opt/osg-build", "--json"]);
    assert!(result.success, "stderr: {}", result.stderr);

    let json = result.json();
    let home = env.home.path();
    assert_eq!(
        json["koji_client_cert"],
        home.join(".koji/client.crt").to_str().expect("utf-8 path")
    );
    assert_eq!(
        json["existing_config_file"],
        home.join(".vdt-build.ini").to_str().expect("utf-8 path")
    );
    assert_eq!(
        json["data_file_search_path"],
        serde_json::json!(["/opt/osg-build", "/opt/osg-build/data", "/usr/share/osg-build"])
    );
}

#[test]
fn check_passes_builtin_tables_and_flags_broken_site_config() {
    let env = TestEnv::new();
    let ok = env.run(&["check"]);
    assert!(ok.success, "stderr: {}", ok.stderr);
    assert!(ok.stdout.starts_with("ok:"));

    let site = env.write(
        "site.json",
        r#"{ "koji_hub": "koji-hub.batlab.org", "releases": { "6": { "distro_tag": "osg.el6", "koji_tag": "el6-osg", "koji_target": "el6-osg" } } }"#,
    );
    let site_arg = site.to_str().expect("utf-8 path");
    let broken = env.run(&["check", "--config", site_arg]);
    assert!(!broken.success);
    let failed: Vec<&str> = broken
        .stdout
        .lines()
        .map(|line| line.split(':').next().unwrap_or(""))
        .collect();
    assert_eq!(
        failed,
        ["FAIL release_table", "FAIL site_config"],
        "stdout: {}",
        broken.stdout
    );
    assert!(broken.stdout.contains("invalid site config: koji_hub"));
    assert!(broken.stderr.contains("2 consistency check(s) failed"));
}

#[test]
fn check_reports_invalid_site_fields_as_json() {
    let env = TestEnv::new();
    let site = env.write("site.json", r#"{ "koji_hub": "koji-hub.batlab.org" }"#);
    let site_arg = site.to_str().expect("utf-8 path");
    let result = env.run(&["check", "--config", site_arg, "--json"]);
    assert!(!result.success);

    let json = result.json();
    assert_eq!(json["ok"], false);
    assert_eq!(json["findings"][0]["check"], "site_config");
    assert!(json["findings"][0]["message"]
        .as_str()
        .is_some_and(|message| message.contains("koji_hub must start with")));
}

#[test]
fn init_config_prints_and_writes_default_site_config() {
    let env = TestEnv::new();
    let printed = env.run(&["init-config"]);
    assert!(printed.success, "stderr: {}", printed.stderr);
    let json = printed.json();
    assert_eq!(json["koji_hub"], "http://koji-hub.batlab.org");
    assert_eq!(json["releases"]["5"]["distro_tag"], "osg.el5");

    let out = env.home.path().join("etc").join("site.json");
    let out_arg = out.to_str().expect("utf-8 path");
    let written = env.run(&["init-config", "--out", out_arg]);
    assert!(written.success, "stderr: {}", written.stderr);
    let check = env.run(&["check", "--config", out_arg]);
    assert!(check.success, "stderr: {}", check.stderr);

    let again = env.run(&["init-config", "--out", out_arg]);
    assert!(!again.success);
    assert!(again.stderr.contains("already exists"));
    let forced = env.run(&["init-config", "--out", out_arg, "--force"]);
    assert!(forced.success, "stderr: {}", forced.stderr);
}

#[test]
fn check_reports_missing_release_as_json() {
    let env = TestEnv::new();
    let site = env.write(
        "site.json",
        r#"{ "releases": { "6": { "distro_tag": "osg.el6", "koji_tag": "el6-osg", "koji_target": "el6-osg" } } }"#,
    );
    let site_arg = site.to_str().expect("utf-8 path");
    let result = env.run(&["check", "--config", site_arg, "--json"]);
    assert!(!result.success);

    let json = result.json();
    assert_eq!(json["ok"], false);
    assert_eq!(json["findings"][0]["check"], "release_table");
    assert_eq!(json["findings"].as_array().map(Vec::len), Some(1));
}
