use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn langmap_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("langmap"))
}

fn locale_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("langmap-locale"))
}

const GREETINGS_MAP: &str = "# greetings
'''
HELLO
'''
Hi
'''

'''
Hi
'''
Greetings
'''
";

#[test]
fn test_replace_command_basic() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    let langmap = temp_dir.path().join("en.langmap");

    fs::write(&input, "HELLO, HELLO!\nNothing else.\n").unwrap();
    fs::write(&langmap, GREETINGS_MAP).unwrap();

    let result = langmap_cmd()
        .args([
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            langmap.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(result.status.success(), "Command failed: {}", stderr);

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "Greetings, Greetings!\nNothing else.\n"
    );
    assert!(stderr.contains(&format!("{}: loaded 2 messages.", langmap.display())));
    assert!(stderr.contains(&format!("{}: replaced 2 words.", output.display())));
    assert!(result.stdout.is_empty());
}

#[test]
fn test_missing_arguments_exit_with_one() {
    let result = langmap_cmd().args(["only-input.txt"]).output().unwrap();

    assert_eq!(result.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Usage"), "stderr: {}", stderr);
}

#[test]
fn test_no_arguments_exit_with_one() {
    let result = langmap_cmd().output().unwrap();
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn test_help_succeeds() {
    let result = langmap_cmd().arg("--help").output().unwrap();
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("LANGMAP"));
}

#[test]
fn test_syntax_errors_are_reported_but_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    let langmap = temp_dir.path().join("broken.langmap");

    fs::write(&input, "KEY").unwrap();
    fs::write(&langmap, "junk\n'''\nKEY\n'''\nvalue\n'''\n'''\nOPEN\n").unwrap();

    let result = langmap_cmd()
        .args([
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            langmap.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(result.status.success(), "Command failed: {}", stderr);
    assert!(stderr.contains(&format!("{}:1: syntax error", langmap.display())));
    assert!(stderr.contains("never closed"));
    assert!(stderr.contains("loaded 1 messages."));
    assert_eq!(fs::read_to_string(&output).unwrap(), "value");
}

#[test]
fn test_missing_langmap_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    fs::write(&input, "text").unwrap();

    let result = langmap_cmd()
        .args([
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            temp_dir.path().join("missing.langmap").to_str().unwrap(),
        ])
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Error: I/O error"));
    assert!(!output.exists());
}

#[test]
fn test_custom_domain_and_dump_to_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    let langmap = temp_dir.path().join("en.langmap");

    fs::write(&input, "HELLO").unwrap();
    fs::write(&langmap, GREETINGS_MAP).unwrap();

    let result = langmap_cmd()
        .args([
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            langmap.to_str().unwrap(),
            "--domain",
            "ui",
            "--dump",
            "-",
        ])
        .output()
        .unwrap();

    assert!(result.status.success());
    let dumped: serde_json::Value = serde_json::from_slice(&result.stdout).unwrap();
    assert_eq!(dumped["ui"]["entries"][0]["key"], "HELLO");
    assert_eq!(dumped["ui"]["entries"][1]["message"], "Greetings");
    assert_eq!(fs::read_to_string(&output).unwrap(), "Greetings");
}

#[test]
fn test_dump_to_langmap_file_reloads() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    let langmap = temp_dir.path().join("en.langmap");
    let dump = temp_dir.path().join("copy.langmap");
    let output_again = temp_dir.path().join("out-again.txt");

    fs::write(&input, "HELLO").unwrap();
    fs::write(&langmap, GREETINGS_MAP).unwrap();

    let first = langmap_cmd()
        .args([
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            langmap.to_str().unwrap(),
            "--dump",
            dump.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert!(first.stdout.is_empty());

    let second = langmap_cmd()
        .args([
            input.to_str().unwrap(),
            output_again.to_str().unwrap(),
            dump.to_str().unwrap(),
        ])
        .output()
        .unwrap();

    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(second.status.success(), "Command failed: {}", stderr);
    assert!(stderr.contains(&format!("{}: loaded 2 messages.", dump.display())));
    assert_eq!(
        fs::read_to_string(&output_again).unwrap(),
        fs::read_to_string(&output).unwrap()
    );
}

#[test]
fn test_strict_flag_rejects_duplicates() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    let output = temp_dir.path().join("out.txt");
    let langmap = temp_dir.path().join("dup.langmap");

    fs::write(&input, "A").unwrap();
    fs::write(&langmap, "'''\nA\n'''\n1\n'''\n'''\nA\n'''\n2\n'''\n").unwrap();

    let lenient = langmap_cmd()
        .args([
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            langmap.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(lenient.status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "2");

    let strict = langmap_cmd()
        .args([
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            langmap.to_str().unwrap(),
            "--strict",
        ])
        .output()
        .unwrap();
    assert_eq!(strict.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&strict.stderr).contains("duplicate key 'A'"));
}

#[test]
fn test_locale_command_uses_environment() {
    let result = locale_cmd()
        .env("LANG", "de_DE.UTF-8")
        .output()
        .unwrap();

    assert!(result.status.success());
    let stdout = String::from_utf8_lossy(&result.stdout);
    if cfg!(windows) {
        assert!(!stdout.trim().is_empty());
    } else {
        assert_eq!(stdout.trim(), "de_DE");
    }
}

#[test]
fn test_locale_command_default() {
    if cfg!(windows) {
        return;
    }
    let result = locale_cmd()
        .env_remove("LANG")
        .env_remove("LANGUAGE")
        .env_remove("LC_ALL")
        .env_remove("LC_CTYPE")
        .env_remove("LC_MESSAGES")
        .output()
        .unwrap();

    assert!(result.status.success());
    assert_eq!(String::from_utf8_lossy(&result.stdout).trim(), "en_US");
}
