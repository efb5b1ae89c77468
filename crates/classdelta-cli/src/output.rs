//! Text and JSON rendering of a report

use std::io::{self, Write};

use classdelta_core::Diff;
use classdelta_engine::messages::render;
use classdelta_engine::Report;

pub fn write_text(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "classdelta report {}", report.run_id)?;
    writeln!(out, "previous: {}", report.previous)?;
    writeln!(out, "next:     {}", report.next)?;

    for package in &report.packages {
        let name = if package.package_name.is_empty() {
            "(default package)"
        } else {
            package.package_name.as_str()
        };
        writeln!(out)?;
        writeln!(out, "== package {}", name)?;
        write_diffs(out, &package.diffs)?;
    }
    for class in &report.classes {
        writeln!(out)?;
        writeln!(out, "== {}", class.class_name)?;
        write_diffs(out, &class.diffs)?;
    }

    if !report.failures.is_empty() {
        writeln!(out)?;
        writeln!(out, "Failures:")?;
        for entry in &report.failures {
            writeln!(
                out,
                "  [{}] {} ({}): {}",
                entry.side.as_str(),
                entry.failure.class_name,
                entry.failure.path,
                entry.failure.reason
            )?;
        }
    }

    let summary = &report.summary;
    writeln!(out)?;
    writeln!(
        out,
        "Summary: {} error(s), {} warning(s), {} info(s); {} class(es) compared, {} failure(s)",
        summary.errors,
        summary.warnings,
        summary.infos,
        summary.classes_compared,
        summary.failures
    )
}

fn write_diffs(out: &mut impl Write, diffs: &[Diff]) -> io::Result<()> {
    for diff in diffs {
        writeln!(
            out,
            "  [{}] {}",
            diff.severity(),
            render(diff.message_key(), diff.args())
        )?;
    }
    Ok(())
}

pub fn write_json(out: &mut impl Write, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
