/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Grey out placeholders ("--:--", "00h 00m", empty).
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--:--" || v == "00h 00m" || v == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Late minutes: red when > 0, grey otherwise.
pub fn color_for_late(late_minutes: i64) -> &'static str {
    if late_minutes > 0 { RED } else { GREY }
}

pub fn colorize_complete(is_complete: bool, has_data: bool) -> String {
    match (is_complete, has_data) {
        (true, _) => format!("{GREEN}✔{RESET}"),
        (false, true) => format!("{YELLOW}…{RESET}"),
        (false, false) => format!("{GREY}-{RESET}"),
    }
}

/// Strip ANSI escapes, used where the visible width matters.
pub fn strip_ansi(s: &str) -> String {
    match regex::Regex::new(r"\x1B\[[0-9;]*[mK]") {
        Ok(re) => re.replace_all(s, "").into_owned(),
        Err(_) => s.to_string(),
    }
}
