//! Plain text load report.

use std::fmt;
use u_pallet_core::{PalletBase, PlacementPlan};
use u_pallet_packer::{summarize, PlanSummary};

/// Per-pallet listing and overall figures of a plan.
pub struct Report<'a> {
    plan: &'a PlacementPlan,
    base: &'a PalletBase,
}

impl<'a> Report<'a> {
    /// Creates a report of `plan` packed on `base`.
    pub fn new(plan: &'a PlacementPlan, base: &'a PalletBase) -> Self {
        Self { plan, base }
    }

    fn write_overall(&self, f: &mut fmt::Formatter<'_>, summary: &PlanSummary) -> fmt::Result {
        writeln!(f, "{:-<40}", "")?;
        writeln!(f, "L: {:.1} cm", summary.final_length)?;
        writeln!(f, "B: {:.1} cm", summary.final_width)?;
        writeln!(f, "H: {:.1} cm", summary.overall_height)?;
        if self.plan.placed_count() == 0 {
            writeln!(f, "Weight: {:.1} kg (empty)", summary.overall_weight)
        } else {
            writeln!(
                f,
                "Weight: {:.1} kg ({} pallet(s))",
                summary.overall_weight, summary.pallet_count
            )?;
            writeln!(f, "Fill: {:.1} %", summary.utilization() * 100.0)
        }
    }

    fn write_rejected(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.plan.all_placed() {
            return Ok(());
        }
        writeln!(f, "\nRejected ({}):", self.plan.rejected_count())?;
        for err in &self.plan.rejected {
            writeln!(f, "  {err}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let summary = summarize(self.plan, self.base);

        if self.plan.placed_count() == 0 {
            writeln!(f, "No load.")?;
        }

        for (pallet, plan) in summary.pallets.iter().zip(&self.plan.pallets) {
            if plan.is_empty() {
                continue;
            }
            writeln!(f, "Pallet #{}", pallet.id)?;
            for count in &pallet.items {
                writeln!(f, "  {}x {} ({})", count.count, count.name, count.id)?;
            }
            writeln!(f, "  L: {:.1} cm | B: {:.1} cm", pallet.length, pallet.width)?;
            writeln!(f, "  H: {:.1} cm | G: {:.1} kg", pallet.height, pallet.weight)?;
            writeln!(f, "  Layers: {}", plan.layer_heights().len())?;
            writeln!(f)?;
        }

        self.write_overall(f, &summary)?;
        self.write_rejected(f)
    }
}

/// Renders the report of `plan` as text.
pub fn render_report(plan: &PlacementPlan, base: &PalletBase) -> String {
    Report::new(plan, base).to_string()
}
