use clap::Parser;
use create_simple_ai::cli::Args;
use create_simple_ai::config::{Auth, Database, Example, PackageManager};
use create_simple_ai::error::{Error, Result};
use create_simple_ai::prompt::{gather_config, Prompter};
use std::cell::RefCell;
use std::collections::VecDeque;
use tempfile::TempDir;

enum Answer {
    Text(&'static str),
    Choice(usize),
    Choices(Vec<usize>),
}

/// Replays canned answers in order and records every question asked.
#[derive(Default)]
struct ScriptedPrompter {
    answers: RefCell<VecDeque<Answer>>,
    asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    fn new(answers: Vec<Answer>) -> Self {
        Self { answers: RefCell::new(answers.into()), asked: RefCell::default() }
    }

    fn next(&self, prompt: &str) -> Answer {
        self.asked.borrow_mut().push(prompt.to_string());
        self.answers.borrow_mut().pop_front().expect("unexpected prompt")
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&self, prompt: &str, _default: &str) -> Result<String> {
        match self.next(prompt) {
            Answer::Text(text) => Ok(text.to_string()),
            _ => panic!("expected a text answer for '{prompt}'"),
        }
    }

    fn select(&self, prompt: &str, _items: &[&str], _default: usize) -> Result<usize> {
        match self.next(prompt) {
            Answer::Choice(index) => Ok(index),
            _ => panic!("expected a choice for '{prompt}'"),
        }
    }

    fn multi_select(&self, prompt: &str, _items: &[&str]) -> Result<Vec<usize>> {
        match self.next(prompt) {
            Answer::Choices(indices) => Ok(indices),
            _ => panic!("expected choices for '{prompt}'"),
        }
    }
}

fn parse(args: &[&str]) -> Args {
    let mut argv = vec!["create-simple-ai"];
    argv.extend_from_slice(args);
    Args::try_parse_from(argv).unwrap()
}

#[test]
fn test_yes_uses_defaults_without_prompting() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::default();

    let config = gather_config(&parse(&["--yes", "demo-app"]), &prompter, cwd.path()).unwrap();

    assert!(prompter.asked.borrow().is_empty());
    assert_eq!(config.project_name, "demo-app");
    assert_eq!(config.project_dir, cwd.path().join("demo-app"));
    assert_eq!(config.database, Database::Sqlite);
    assert_eq!(config.auth, Auth::BetterAuth);
    assert!(config.examples.is_empty());
    assert!(config.git);
    assert!(config.install);
    assert_eq!(config.package_manager, PackageManager::Npm);
}

#[test]
fn test_yes_without_project_name_fails() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::default();

    let error = gather_config(&parse(&["--yes"]), &prompter, cwd.path()).unwrap_err();

    match error {
        Error::MissingArgument { flag } => assert_eq!(flag, "PROJECT_NAME"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_interactive_answers() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new(vec![
        Answer::Text("  shop  "),
        Answer::Choice(0),
        Answer::Choice(1),
        Answer::Choices(vec![1, 0]),
    ]);

    let config = gather_config(&parse(&[]), &prompter, cwd.path()).unwrap();

    assert_eq!(prompter.asked.borrow().len(), 4);
    assert_eq!(config.project_name, "shop");
    assert_eq!(config.database, Database::Postgres);
    assert_eq!(config.auth, Auth::None);
    assert_eq!(config.examples, vec![Example::Todo, Example::Blog]);
}

#[test]
fn test_flags_skip_their_prompts() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new(vec![Answer::Choices(vec![])]);

    let args = parse(&["-d", "mysql", "-a", "none", "--no-git", "--no-install", "-p", "pnpm", "app"]);
    let config = gather_config(&args, &prompter, cwd.path()).unwrap();

    assert_eq!(prompter.asked.borrow().len(), 1);
    assert_eq!(config.database, Database::Mysql);
    assert_eq!(config.auth, Auth::None);
    assert!(config.examples.is_empty());
    assert!(!config.git);
    assert!(!config.install);
    assert_eq!(config.package_manager, PackageManager::Pnpm);
}

#[test]
fn test_out_of_range_selection_is_an_error() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::new(vec![Answer::Choice(9)]);

    let error = gather_config(&parse(&["app"]), &prompter, cwd.path()).unwrap_err();
    assert!(matches!(error, Error::PromptError(_)));
}

#[test]
fn test_package_manager_detected_from_lockfile() {
    let cwd = TempDir::new().unwrap();
    std::fs::write(cwd.path().join("pnpm-lock.yaml"), "").unwrap();
    let prompter = ScriptedPrompter::default();

    let config = gather_config(&parse(&["-y", "app"]), &prompter, cwd.path()).unwrap();
    assert_eq!(config.package_manager, PackageManager::Pnpm);

    let config = gather_config(&parse(&["-y", "-p", "bun", "app"]), &prompter, cwd.path()).unwrap();
    assert_eq!(config.package_manager, PackageManager::Bun);
}

#[test]
fn test_current_directory_project() {
    let cwd = TempDir::new().unwrap();
    let prompter = ScriptedPrompter::default();

    let config = gather_config(&parse(&["-y", "."]), &prompter, cwd.path()).unwrap();
    assert_eq!(config.project_dir, cwd.path());
}
