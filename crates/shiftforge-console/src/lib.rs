//! Colorful console output for the planner.
//!
//! Provides a custom `tracing` layer that formats planner events with colors,
//! and renderers for the month grid and the diagnostics report.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (generation and phase start/end)
//! - **DEBUG**: Per-day fills, rebalancing and toggles
//! - **TRACE**: Individual rejected candidates

use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use shiftforge_core::{Assignment, DateCategory, LockSet, MonthCalendar, Roster};
use shiftforge_solver::{DiagnosticsReport, FindingKind};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initializes the planner console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Honors `RUST_LOG`, defaulting to `shiftforge_solver=info`.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("shiftforge_solver=info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(PlannerConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let mut stdout = io::stdout().lock();
    let _ = writeln!(
        stdout,
        "{} {}",
        "ShiftForge".bright_cyan().bold(),
        format!("v{VERSION} - monthly shift planner").bright_white()
    );
    let _ = stdout.flush();
}

/// A tracing layer that formats planner events with colors.
pub struct PlannerConsoleLayer;

impl<S: Subscriber> Layer<S> for PlannerConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("shiftforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    phase: Option<String>,
    month: Option<String>,
    reason: Option<String>,
    phase_index: Option<u64>,
    steps: Option<u64>,
    duration_ms: Option<u64>,
    employee_count: Option<u64>,
    day_count: Option<u64>,
    locked_days: Option<u64>,
    assigned_slots: Option<u64>,
    short_days: Option<u64>,
    removed: Option<u64>,
    day: Option<u64>,
    employee: Option<u64>,
    target: Option<u64>,
    assigned: Option<u64>,
    deficit: Option<u64>,
    windows: Option<u64>,
    working: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        let s = s.trim_matches('"').to_string();
        match field.name() {
            "event" => self.event = Some(s),
            "phase" => self.phase = Some(s),
            "month" => self.month = Some(s),
            "reason" => self.reason = Some(s),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "phase_index" => self.phase_index = Some(value),
            "steps" => self.steps = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "employee_count" => self.employee_count = Some(value),
            "day_count" => self.day_count = Some(value),
            "locked_days" => self.locked_days = Some(value),
            "assigned_slots" => self.assigned_slots = Some(value),
            "short_days" => self.short_days = Some(value),
            "removed" => self.removed = Some(value),
            "day" => self.day = Some(value),
            "employee" => self.employee = Some(value),
            "target" => self.target = Some(value),
            "assigned" => self.assigned = Some(value),
            "deficit" => self.deficit = Some(value),
            "windows" => self.windows = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        // Counts are never negative; drop anything that is.
        if let Ok(value) = u64::try_from(value) {
            self.record_u64(field, value);
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "working" {
            self.working = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "phase" => self.phase = Some(value.to_string()),
            "month" => self.month = Some(value.to_string()),
            "reason" => self.reason = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref().unwrap_or("") {
        "generate_start" => format_generate_start(v),
        "generate_end" => format_generate_end(v),
        "phase_start" => format_phase_start(v),
        "phase_end" => format_phase_end(v),
        "day_filled" => format_day_filled(v),
        "rest_rebalanced" => format_rest_rebalanced(v),
        "candidate_rejected" if level == Level::TRACE => format_candidate_rejected(v),
        "toggle_applied" => format_toggle_applied(v),
        "toggle_rejected" => format_toggle_rejected(v),
        _ => String::new(),
    }
}

fn format_generate_start(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} Generating {} │ {} staff │ {} days",
        "▶".bright_green().bold(),
        v.month.as_deref().unwrap_or("?").bright_white().bold(),
        v.employee_count.unwrap_or(0).bright_yellow(),
        v.day_count.unwrap_or(0).bright_yellow(),
    );
    let locked = v.locked_days.unwrap_or(0);
    if locked > 0 {
        let _ = write!(output, " │ {} locked", locked.bright_magenta());
    }
    output
}

fn format_generate_end(v: &EventVisitor) -> String {
    format!(
        "{} Generation complete │ {} │ {} steps │ {} shifts",
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.steps.unwrap_or(0).white(),
        v.assigned_slots.unwrap_or(0).bright_yellow(),
    )
}

fn format_phase_start(v: &EventVisitor) -> String {
    format!(
        "{} {} started",
        "▶".bright_blue(),
        v.phase.as_deref().unwrap_or("Unknown").white().bold()
    )
}

fn format_phase_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} ended │ {} │ {} steps",
        "◀".bright_blue(),
        v.phase.as_deref().unwrap_or("Unknown").white().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        v.steps.unwrap_or(0).white(),
    );
    if let Some(short) = v.short_days.filter(|&n| n > 0) {
        let _ = write!(output, " │ {} days short", short.bright_red());
    }
    if let Some(removed) = v.removed {
        let _ = write!(output, " │ {} shifts released", removed.bright_green());
    }
    output
}

fn format_day_filled(v: &EventVisitor) -> String {
    let target = v.target.unwrap_or(0);
    let assigned = v.assigned.unwrap_or(0);
    let count = format!("{assigned}/{target}");
    let count = if assigned < target {
        count.bright_red().to_string()
    } else {
        count.bright_green().to_string()
    };
    format!("  {} day {:>2} │ {}", "·".bright_black(), v.day.unwrap_or(0), count)
}

fn format_rest_rebalanced(v: &EventVisitor) -> String {
    format!(
        "  {} #{} │ deficit {} │ released {}",
        "↺".bright_cyan(),
        v.employee.unwrap_or(0),
        v.deficit.unwrap_or(0).yellow(),
        v.removed.unwrap_or(0).bright_green(),
    )
}

fn format_candidate_rejected(v: &EventVisitor) -> String {
    format!(
        "    {} day {:>2} │ #{} │ {}",
        "✗".bright_red(),
        v.day.unwrap_or(0),
        v.employee.unwrap_or(0),
        v.reason.as_deref().unwrap_or("").bright_black(),
    )
}

fn format_toggle_applied(v: &EventVisitor) -> String {
    let action = if v.working.unwrap_or(false) {
        "on".bright_green().to_string()
    } else {
        "off".yellow().to_string()
    };
    format!(
        "{} #{} day {} │ {}",
        "✓".bright_green(),
        v.employee.unwrap_or(0),
        v.day.unwrap_or(0),
        action
    )
}

fn format_toggle_rejected(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} #{} day {} │ {}",
        "✗".bright_red(),
        v.employee.unwrap_or(0),
        v.day.unwrap_or(0),
        v.reason.as_deref().unwrap_or("rejected").bright_red(),
    );
    if let Some(windows) = v.windows {
        let _ = write!(output, " │ {} windows", windows);
    }
    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else {
        format!("{:.2}s", ms as f64 / 1000.0)
    }
}

/// Renders the month as one row per employee.
///
/// `●` marks a working day, `·` a rest day. Absolute-off days show `×`,
/// requested-off days `r` and mandatory days `!` when not worked. Locked
/// days are marked with `*` in the header.
pub fn render_grid(
    calendar: &MonthCalendar,
    roster: &Roster,
    assignment: &Assignment,
    locks: &LockSet,
) -> String {
    let name_width = roster.iter().map(|e| e.name.chars().count()).max().unwrap_or(0).max(4);
    let mut out = String::new();

    let _ = write!(out, "{:<name_width$} ", calendar.to_string().bright_white().bold());
    for day in calendar.days() {
        let label = format!("{day:>2}");
        let label = if calendar.is_weekend(day) {
            label.bright_blue().to_string()
        } else {
            label
        };
        let lock = if locks.is_locked(day) { "*" } else { " " };
        let _ = write!(out, "{label}{lock}");
    }
    out.push('\n');

    for employee in roster.iter() {
        let _ = write!(out, "{:<name_width$} ", employee.name);
        for day in calendar.days() {
            let working = assignment.is_working(day, employee.id);
            let cell = match (working, employee.category_on(calendar, day)) {
                (true, Some(DateCategory::AbsoluteOff)) => " ●".bright_red().to_string(),
                (true, _) => " ●".bright_green().to_string(),
                (false, Some(DateCategory::AbsoluteOff)) => " ×".bright_black().to_string(),
                (false, Some(DateCategory::RequestedOff)) => " r".cyan().to_string(),
                (false, Some(DateCategory::MandatoryWork)) => " !".bright_red().to_string(),
                (false, None) => " ·".bright_black().to_string(),
            };
            let _ = write!(out, "{cell} ");
        }
        out.push('\n');
    }

    let _ = write!(out, "{:<name_width$} ", "n");
    for day in calendar.days() {
        let _ = write!(out, "{:>2} ", assignment.headcount(day));
    }
    out.push('\n');
    out
}

/// Renders a diagnostics report as a summary table followed by findings.
pub fn render_report(report: &DiagnosticsReport) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{} {}",
        "Diagnostics".bright_cyan().bold(),
        report.calendar.to_string().bright_white()
    );
    let _ = writeln!(
        out,
        "  {:<16}{:>6}{:>6}{:>9}{:>10}{:>9}",
        "Employee", "Work", "Rest", "Weekend", "Requests", "Streak"
    );
    for e in &report.employees {
        let rest = format!("{:>6}", format!("{}/{}", e.rest_days, e.required_rest_days));
        let rest = if e.rest_shortfall() > 0 {
            rest.bright_red().to_string()
        } else {
            rest
        };
        let _ = writeln!(
            out,
            "  {:<16}{:>6}{}{:>9}{:>9}%{:>9}",
            e.name,
            e.days_worked,
            rest,
            e.weekend_rest_days,
            e.fulfillment_percent(),
            e.streak_windows
        );
    }

    if report.is_clean() {
        let _ = writeln!(out, "{} No findings", "✓".bright_green().bold());
        return out;
    }

    let _ = writeln!(out, "{} {} findings", "!".bright_yellow().bold(), report.findings.len());
    for finding in &report.findings {
        let marker = match finding.kind {
            FindingKind::AbsoluteOffBreach | FindingKind::MandatoryMissing | FindingKind::StreakViolation => {
                "✗".bright_red().to_string()
            }
            _ => "•".yellow().to_string(),
        };
        let _ = write!(out, "  {marker} {finding}");
        if !finding.days.is_empty() {
            let days: Vec<String> = finding.days.iter().map(u32::to_string).collect();
            let _ = write!(out, " [{}]", days.join(", "));
        }
        let _ = writeln!(out, " - {}", finding.suggestion().bright_black());
    }
    out
}

#[cfg(test)]
mod tests;
