use clap::Parser;
use create_simple_ai::cli::Args;
use create_simple_ai::config::{Auth, Database, Example, PackageManager};
use std::ffi::OsString;
use std::path::PathBuf;

fn make_args(args: &[&str]) -> Vec<OsString> {
    let mut res = vec![OsString::from("create-simple-ai")];
    res.extend(args.iter().map(OsString::from));
    res
}

#[test]
fn test_basic_args() {
    let parsed = Args::try_parse_from(make_args(&["demo-app"])).unwrap();

    assert_eq!(parsed.project_name.as_deref(), Some("demo-app"));
    assert!(!parsed.yes);
    assert!(!parsed.no_git);
    assert!(!parsed.no_install);
    assert!(!parsed.verbose);
    assert_eq!(parsed.database, None);
    assert_eq!(parsed.auth, None);
    assert_eq!(parsed.examples, None);
    assert_eq!(parsed.package_manager, None);
    assert_eq!(parsed.template_dir, None);
}

#[test]
fn test_project_name_is_optional() {
    let parsed = Args::try_parse_from(make_args(&[])).unwrap();
    assert_eq!(parsed.project_name, None);
}

#[test]
fn test_all_flags() {
    let args = make_args(&[
        "--yes",
        "--database",
        "postgres",
        "--auth",
        "better-auth",
        "--examples",
        "todo,blog",
        "--no-git",
        "--no-install",
        "--package-manager",
        "pnpm",
        "--template-dir",
        "./templates",
        "--verbose",
        "demo-app",
    ]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.yes);
    assert_eq!(parsed.database, Some(Database::Postgres));
    assert_eq!(parsed.auth, Some(Auth::BetterAuth));
    assert_eq!(parsed.examples, Some(vec![Example::Todo, Example::Blog]));
    assert!(parsed.no_git);
    assert!(parsed.no_install);
    assert_eq!(parsed.package_manager, Some(PackageManager::Pnpm));
    assert_eq!(parsed.template_dir, Some(PathBuf::from("./templates")));
    assert!(parsed.verbose);
}

#[test]
fn test_short_flags() {
    let args = make_args(&["-y", "-d", "mysql", "-a", "none", "-p", "bun", "-v", "."]);
    let parsed = Args::try_parse_from(args).unwrap();

    assert!(parsed.yes);
    assert_eq!(parsed.database, Some(Database::Mysql));
    assert_eq!(parsed.auth, Some(Auth::None));
    assert_eq!(parsed.package_manager, Some(PackageManager::Bun));
    assert!(parsed.verbose);
    assert_eq!(parsed.project_name.as_deref(), Some("."));
}

#[test]
fn test_unknown_option_values() {
    assert!(Args::try_parse_from(make_args(&["-d", "mongodb", "demo-app"])).is_err());
    assert!(Args::try_parse_from(make_args(&["-a", "clerk", "demo-app"])).is_err());
    assert!(Args::try_parse_from(make_args(&["-p", "yarn", "demo-app"])).is_err());
    assert!(Args::try_parse_from(make_args(&["-e", "shop", "demo-app"])).is_err());
}

#[test]
fn test_too_many_args() {
    assert!(Args::try_parse_from(make_args(&["demo-app", "extra"])).is_err());
}
