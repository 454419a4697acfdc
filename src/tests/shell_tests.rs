use super::*;
use crate::store::MemoryStore;

fn shell() -> Shell<MemoryStore> {
    Shell::new(MemoryStore::new(), HostFacts::default())
}

fn texts(shell: &Shell<MemoryStore>) -> Vec<(EntryKind, &str)> {
    shell
        .log()
        .iter()
        .map(|e| (e.kind, e.text.as_str()))
        .collect()
}

#[test]
fn mkdir_echoes_then_reports_success() {
    let mut sh = shell();
    assert_eq!(sh.run_line("mkdir https://example.com ex"), None);
    assert_eq!(
        texts(&sh),
        vec![
            (EntryKind::Command, "mkdir https://example.com ex"),
            (EntryKind::Success, "mkdir: created site 'ex'"),
        ]
    );
    assert_eq!(sh.sites(), vec![Site::new("ex", "https://example.com")]);
}

#[test]
fn mkdir_errors_are_echoed_lines_not_faults() {
    let mut sh = shell();
    sh.run_line("mkdir ftp://x.com x");
    sh.run_line("mkdir https://a.com A");
    sh.run_line("mkdir https://b.com a");
    let log = texts(&sh);
    assert_eq!(log[0], (EntryKind::Command, "mkdir ftp://x.com x"));
    assert_eq!(
        log[1],
        (
            EntryKind::Error,
            "mkdir: invalid URL format. Use: mkdir https://site.com sitename"
        )
    );
    assert_eq!(log[5], (EntryKind::Error, "mkdir: site 'a' already exists"));
    assert_eq!(sh.sites().len(), 1);
}

#[test]
fn rm_reports_missing_site() {
    let mut sh = shell();
    sh.run_line("rm -rf ghost");
    assert_eq!(
        texts(&sh),
        vec![
            (EntryKind::Command, "rm -rf ghost"),
            (EntryKind::Error, "rm: cannot remove 'ghost': No such site"),
        ]
    );
}

#[test]
fn rm_uses_typed_name_in_message() {
    let mut sh = shell();
    sh.run_line("mkdir https://foo.com foo");
    sh.run_line("rm -rf FOO");
    assert_eq!(
        sh.log().last().map(|e| e.text.as_str()),
        Some("rm: removed site 'FOO'")
    );
    assert!(sh.sites().is_empty());
}

#[test]
fn clear_wipes_history_without_echo() {
    let mut sh = shell();
    sh.run_line("help");
    assert!(!sh.log().is_empty());
    sh.run_line("clear");
    assert!(sh.log().is_empty());
}

#[test]
fn help_prints_fixed_command_list() {
    let mut sh = shell();
    sh.run_line("help");
    assert_eq!(sh.log()[0].kind, EntryKind::Command);
    let out = sh.log()[1..]
        .iter()
        .map(|e| e.text.as_str())
        .collect::<Vec<_>>();
    assert_eq!(out, HELP_LINES.to_vec());
}

#[test]
fn kabufetch_counts_sites() {
    let mut sh = shell();
    sh.run_line("mkdir https://a.com a");
    sh.run_line("mkdir https://b.com b");
    sh.clear_log();
    sh.run_line("kabufetch");
    assert_eq!(sh.log()[0].text, "kabufetch");
    assert!(
        sh.log()
            .iter()
            .any(|e| e.text.ends_with("Sites        2"))
    );
}

#[test]
fn unknown_input_navigates_without_echo() {
    let mut sh = shell();
    let nav = sh.run_line("hello world");
    assert_eq!(
        nav,
        Some(Navigation {
            url: "https://duckduckgo.com/?q=hello%20world".to_string()
        })
    );
    assert!(sh.log().is_empty());
}

#[test]
fn empty_line_is_a_noop() {
    let mut sh = shell();
    assert_eq!(sh.run_line("   "), None);
    assert!(sh.log().is_empty());
}
