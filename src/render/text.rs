use crate::report::{DirectivesView, ReportData};
use std::fmt::Write;

/// Render the report as an aligned text table, one row per concept.
///
/// Only directives that differ from their default are listed; a `-` means the
/// concept requests no override at all.
pub fn render_text_report(data: &ReportData) -> anyhow::Result<String> {
    let width = data
        .concepts
        .iter()
        .map(|c| c.path.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for c in &data.concepts {
        writeln!(out, "{:<width$}  {}", c.path, summary(&c.directives))?;
        for p in &c.problems {
            writeln!(out, "{:<width$}    ! {}", "", p)?;
        }
    }
    writeln!(
        out,
        "\n{}, {} annotated, {}",
        plural(data.totals.concepts, "concept"),
        data.totals.annotated,
        plural(data.totals.problems, "problem")
    )?;
    Ok(out)
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 {
        format!("{} {}", n, noun)
    } else {
        format!("{} {}s", n, noun)
    }
}

fn summary(d: &DirectivesView) -> String {
    let mut parts = Vec::new();
    if !d.http_name.is_empty() {
        parts.push(format!("http={}", d.http_name));
    }
    if !d.json_name.is_empty() {
        parts.push(format!("json={}", d.json_name));
    }
    if d.json_required {
        parts.push("required".to_string());
    }
    if d.json_read_only {
        parts.push("readOnly".to_string());
    }
    if !d.json_default.is_empty() {
        parts.push(format!("default={:?}", d.json_default));
    }
    if !d.json_context.is_empty() {
        parts.push(format!("context=[{}]", d.json_context.join(",")));
    }
    if !d.go_name.is_empty() {
        parts.push(format!("go={}", d.go_name));
    }
    if parts.is_empty() {
        "-".to_string()
    } else {
        parts.join(" ")
    }
}
