//! `kabufetch`: a static system-info panel next to the logo.

use std::time::Duration;

const ART: &[&str] = &[
    "                         +++==         ",
    "                         **+++*%        ",
    "                         **#+           ",
    "                        *##*#           ",
    "                      #*+**##           ",
    "                    ------:*#           ",
    "                  :----::----*          ",
    "                %---:::-----=*          ",
    "              *#+%##--------+           ",
    "            @+-*#*:--%*--=+*            ",
    "          ++=#*=:##+--=*#**             ",
    "       #%####***+**%#-=                 ",
    "      ##**@         %-                  ",
    "    *@@             #%=++",
];

const SEPARATOR: &str = "────────────────────────";

/// Facts the host knows about its environment. Counts it cannot query stay `None`.
#[derive(Clone, Debug, Default)]
pub struct HostFacts {
    /// Opaque platform identifier (a user-agent style string).
    pub user_agent: String,
    pub resolution: Option<(u16, u16)>,
    pub tabs: Option<u32>,
    pub extensions: Option<u32>,
}

impl HostFacts {
    /// Platform string from the compile target plus `$BROWSER`, if set.
    pub fn detect() -> Self {
        let os = match std::env::consts::OS {
            "windows" => "Windows",
            "macos" => "Macintosh",
            "linux" => "Linux",
            "android" => "Android",
            "ios" => "iOS",
            other => other,
        };
        let browser = std::env::var("BROWSER").unwrap_or_default();
        Self {
            user_agent: format!("{} {}", os, browser).trim().to_string(),
            ..Self::default()
        }
    }
}

/// Checks run in a fixed order; the first substring hit wins.
pub fn detect_os(user_agent: &str) -> &'static str {
    const CHECKS: &[(&str, &str)] = &[
        ("Windows", "Windows"),
        ("Mac", "macOS"),
        ("Linux", "Linux"),
        ("Android", "Android"),
        ("iOS", "iOS"),
    ];
    first_match(user_agent, CHECKS)
}

/// "Edg" must be tested before "Chrome": Edge advertises both.
pub fn detect_browser(user_agent: &str) -> &'static str {
    const CHECKS: &[(&str, &str)] = &[
        ("Firefox", "Firefox"),
        ("Edg", "Edge"),
        ("Chrome", "Chrome"),
        ("Safari", "Safari"),
    ];
    first_match(user_agent, CHECKS)
}

fn first_match(haystack: &str, checks: &[(&str, &'static str)]) -> &'static str {
    checks
        .iter()
        .find(|(needle, _)| haystack.contains(needle))
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

fn count_or_na(n: Option<u32>) -> String {
    n.map(|n| n.to_string()).unwrap_or_else(|| "N/A".to_string())
}

pub fn info_lines(facts: &HostFacts, site_count: usize, uptime: Duration) -> Vec<String> {
    let secs = uptime.as_secs();
    let resolution = facts
        .resolution
        .map(|(w, h)| format!("{}x{}", w, h))
        .unwrap_or_else(|| "N/A".to_string());
    let row = |label: &str, value: &str| format!("{: <13}{}", label, value);

    vec![
        "kabutor@newtab".to_string(),
        SEPARATOR.to_string(),
        row("OS", detect_os(&facts.user_agent)),
        row("Browser", detect_browser(&facts.user_agent)),
        row("Resolution", &resolution),
        SEPARATOR.to_string(),
        row("Sites", &site_count.to_string()),
        row("Tabs", &count_or_na(facts.tabs)),
        row("Extensions", &count_or_na(facts.extensions)),
        row("Uptime", &format!("{}m {}s", secs / 60, secs % 60)),
    ]
}

/// Logo and info side by side, one string per output row.
pub fn render(facts: &HostFacts, site_count: usize, uptime: Duration) -> Vec<String> {
    let info = info_lines(facts, site_count, uptime);
    let art_w = ART.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let rows = ART.len().max(info.len());

    (0..rows)
        .map(|i| {
            let art = ART.get(i).copied().unwrap_or("");
            match info.get(i) {
                Some(text) => format!("{: <w$}  {}", art, text, w = art_w),
                None => art.trim_end().to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "tests/fetch_tests.rs"]
mod tests;
