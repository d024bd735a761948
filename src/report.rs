//! Command implementations: resolve tables, then render text or JSON.
use crate::cli::{CheckArgs, DefaultsArgs, InitConfigArgs, PathsArgs, ReleasesArgs};
use anyhow::{anyhow, Context, Result};
use osg_build::{
    check_tables, config_stub, data_file_search_path, load_config_or_default, read_config,
    restrict_to_allowed, write_config, BuildOpts, Finding, OptName, OptValue, OverrideSet,
    RedhatRelease, ReleaseTags, SiteConfig, UserPaths,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Serialize)]
struct DefaultsReport {
    mode: &'static str,
    buildopts: BTreeMap<&'static str, OptValue>,
    release_tags: ReleaseTags,
}

#[derive(Serialize)]
struct PathsReport {
    home: PathBuf,
    default_config_file: PathBuf,
    alt_default_config_file: PathBuf,
    existing_config_file: Option<PathBuf>,
    koji_user_config_dir: PathBuf,
    osg_koji_user_config_dir: PathBuf,
    koji_client_cert: PathBuf,
    data_file_search_path: Vec<PathBuf>,
}

#[derive(Serialize)]
struct CheckReport<'a> {
    ok: bool,
    findings: &'a [Finding],
}

pub fn run_defaults(args: &DefaultsArgs) -> Result<()> {
    let config = load_config_or_default(args.config.as_deref())?;

    let mut user = OverrideSet::new("command line");
    for assignment in &args.overrides {
        user.push_assignment(assignment)
            .with_context(|| format!("parse --set {assignment}"))?;
    }
    let (mode, base) = if args.allbuild {
        restrict_to_allowed(&user)?;
        ("allbuild", BuildOpts::allbuild_defaults()?)
    } else {
        ("common", BuildOpts::common_defaults())
    };

    let mut selected = base;
    if let Some(raw) = args.release.as_deref() {
        let release: RedhatRelease = raw.parse()?;
        selected = selected.with_overrides(
            &OverrideSet::new("release").with(OptName::RedhatRelease, release.as_str()),
        )?;
    }
    let opts = selected.with_overrides(&user)?;
    let release_tags = config.tags_for(opts.redhat_release)?.clone();
    tracing::info!(mode, release = %opts.redhat_release, "resolved build options");

    let report = DefaultsReport {
        mode,
        buildopts: opts.to_map(),
        release_tags,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("# {} defaults", report.mode);
    for (name, value) in &report.buildopts {
        println!("{name} = {value}");
    }
    println!("distro_tag = {}", report.release_tags.distro_tag);
    println!("koji_tag = {}", report.release_tags.koji_tag);
    println!("koji_target = {}", report.release_tags.koji_target);
    Ok(())
}

pub fn run_releases(args: &ReleasesArgs) -> Result<()> {
    let config = load_config_or_default(args.config.as_deref())?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&config.releases)?);
        return Ok(());
    }
    for (release, tags) in &config.releases {
        println!(
            "{release}: distro_tag={} koji_tag={} koji_target={}",
            tags.distro_tag, tags.koji_tag, tags.koji_target
        );
    }
    Ok(())
}

pub fn run_paths(args: &PathsArgs) -> Result<()> {
    let user = UserPaths::from_home()?;
    let program_dir = args
        .program_dir
        .clone()
        .unwrap_or_else(osg_build::paths::program_dir);
    let report = PathsReport {
        home: user.home().to_path_buf(),
        default_config_file: user.default_config_file(),
        alt_default_config_file: user.alt_default_config_file(),
        existing_config_file: user.existing_config_file(),
        koji_user_config_dir: user.koji_user_config_dir(),
        osg_koji_user_config_dir: user.osg_koji_user_config_dir(),
        koji_client_cert: user.koji_client_cert(),
        data_file_search_path: data_file_search_path(&program_dir),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!("home = {}", report.home.display());
    println!("default_config_file = {}", report.default_config_file.display());
    println!(
        "alt_default_config_file = {}",
        report.alt_default_config_file.display()
    );
    if let Some(existing) = &report.existing_config_file {
        println!("existing_config_file = {}", existing.display());
    }
    println!(
        "koji_user_config_dir = {}",
        report.koji_user_config_dir.display()
    );
    println!(
        "osg_koji_user_config_dir = {}",
        report.osg_koji_user_config_dir.display()
    );
    println!("koji_client_cert = {}", report.koji_client_cert.display());
    for dir in &report.data_file_search_path {
        println!("data_file_search_path = {}", dir.display());
    }
    Ok(())
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    // Field validation is one of the checks, so parse without it.
    let config = match args.config.as_deref() {
        Some(path) => read_config(path)?,
        None => SiteConfig::default(),
    };
    let findings = check_tables(&config);
    if args.json {
        let report = CheckReport {
            ok: findings.is_empty(),
            findings: &findings,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for finding in &findings {
            println!("FAIL {}: {}", finding.check, finding.message);
        }
        if findings.is_empty() {
            println!("ok: {} checks passed", osg_build::integrity::CHECKS.len());
        }
    }
    if findings.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("{} consistency check(s) failed", findings.len()))
    }
}

pub fn run_init_config(args: &InitConfigArgs) -> Result<()> {
    let Some(out) = args.out.as_deref() else {
        println!("{}", config_stub()?);
        return Ok(());
    };
    if out.exists() && !args.force {
        return Err(anyhow!(
            "{} already exists (use --force to overwrite)",
            out.display()
        ));
    }
    write_config(out, &SiteConfig::default())?;
    tracing::info!(path = %out.display(), "wrote default site config");
    println!("wrote {}", out.display());
    Ok(())
}
