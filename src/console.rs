//! Pretty terminal output with colors and badges.
//! Stdout write errors are swallowed: a broken terminal must never fail a request.

use std::io::Write;

use colored::Colorize;

// === Startup ===

pub fn print_banner() {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "╔═══════════════════════════════════════════════╗".cyan());
    let _ = writeln!(out, "║   {}                       ║", "⚖  BMI Calculator API".bold().white());
    let _ = writeln!(out, "║   {}      ║", "weight (kg) / height (m)²".dimmed());
    let _ = writeln!(out, "{}", "╚═══════════════════════════════════════════════╝".cyan());
    let _ = writeln!(out);
}

pub fn print_startup<'a>(addr: &str, origins: impl Iterator<Item = &'a str>) {
    let mut out = std::io::stdout().lock();
    let _ = writeln!(out, "{} {}", "✓".green().bold(), "Server ready".white().bold());
    let _ = writeln!(out, "  {} {}", "→".dimmed(), format!("http://{addr}").cyan().underline());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Endpoints:".white().bold());
    let _ = writeln!(out, "  {} {}         {}", "GET ".green(), "/".white(), "Running check".dimmed());
    let _ = writeln!(out, "  {} {}   {}", "POST".yellow(), "/api/bmi".white(), "Compute BMI".dimmed());
    let _ = writeln!(out, "  {} {}   {}", "GET ".green(), "/metrics".white(), "Counters".dimmed());
    let _ = writeln!(out, "  {} {}    {}", "GET ".green(), "/health".white(), "Health check".dimmed());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", "Allowed origins:".white().bold());
    for origin in origins {
        let _ = writeln!(out, "  {} {}", "•".dimmed(), origin.cyan());
    }
    let _ = writeln!(out);
}

// === Requests ===

/// `[2026-01-01T12:00:00.000Z] Request received: POST /api/bmi`
pub fn write_request<W: Write>(out: &mut W, timestamp: &str, method: &str, path: &str) -> std::io::Result<()> {
    writeln!(
        out,
        "{} {} {} {}",
        format!("[{timestamp}]").dimmed(),
        "Request received:".white(),
        method.yellow().bold(),
        path.cyan()
    )
}
