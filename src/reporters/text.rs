//! Text (terminal) summary

use crate::models::Report;
use console::style;
use std::fmt::Write;

/// Render the fixed-format console summary
pub fn render(report: &Report, large_file_threshold: usize) -> String {
    let s = &report.summary;
    let q = &report.quality_metrics;
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "\n{}", style("=== Summary ===").bold());
    let _ = writeln!(out, "Total Files: {}", s.total_files);
    let _ = writeln!(out, "Total Lines: {}", s.total_lines);
    let _ = writeln!(out, "Code Lines: {}", s.code_lines);
    let _ = writeln!(out, "Comment Lines: {}", s.comment_lines);
    let _ = writeln!(out, "Blank Lines: {}", s.blank_lines);
    let _ = writeln!(out, "Libraries: {}", s.total_libraries);
    let _ = writeln!(out, "Packages: {}", s.total_packages);
    let _ = writeln!(out, "Classes: {}", s.total_classes);
    let _ = writeln!(out, "Interfaces: {}", s.total_interfaces);
    let _ = writeln!(out, "Components: {}", s.total_components);
    let _ = writeln!(out, "Test Files: {}", s.test_files);
    let _ = writeln!(out, "Documentation Files: {}", s.documentation_files);

    let _ = writeln!(out, "\n{}", style("=== Quality Metrics ===").bold());
    let _ = writeln!(out, "Quality Score: {}/100", score_style(s.quality_score));
    let _ = writeln!(out, "Comment-to-Code Ratio: {}", s.comment_to_code_ratio);
    let _ = writeln!(out, "Average Lines per File: {}", s.avg_lines_per_file);
    let _ = writeln!(out, "Average Lines per Class: {}", s.avg_lines_per_class);
    let _ = writeln!(out, "TODOs: {}", q.todos);
    let _ = writeln!(out, "FIXMEs: {}", q.fixmes);
    let _ = writeln!(out, "HACKs: {}", q.hacks);
    let _ = writeln!(
        out,
        "Large Files (>{} lines): {}",
        large_file_threshold,
        q.large_files.len()
    );

    out
}

fn score_style(score: f64) -> console::StyledObject<f64> {
    if score >= 80.0 {
        style(score).green()
    } else if score >= 60.0 {
        style(score).yellow()
    } else {
        style(score).red()
    }
}
