//! Text rendering of a resource report.

use std::fmt;

use rail_core::report::{ReportSection, ResourceReport};

const RULE: &str = "═══════════════════════════════════════";

/// Write the report as one table per section.
pub fn write_text(out: &mut impl fmt::Write, report: &ResourceReport, show_stacks: bool) -> fmt::Result {
    let slots = report.display_slots();

    writeln!(out, "{}", RULE)?;
    writeln!(out, "  RAIL LINE: {}", report.blocks)?;
    writeln!(out, "{}", RULE)?;

    for section in ReportSection::ALL {
        writeln!(out)?;
        writeln!(out, "{}:", section.title())?;
        for slot in slots.iter().filter(|s| s.section == section) {
            write!(out, "  {:<18} {:>8}", slot.label, slot.amount)?;
            if show_stacks {
                write!(out, "   ({})", slot.stacks)?;
            }
            writeln!(out)?;
        }
    }

    Ok(())
}
