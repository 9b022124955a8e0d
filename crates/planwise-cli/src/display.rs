//! Terminal rendering for plan lists, detail cards, comparison tables, and
//! cost summaries.
//!
//! Thin view code: every flag rendered here (best value, differs, coverage)
//! comes from the value model. Plain text markers are used instead of
//! colour: `*` best value, `!` differs between plans, `+` fully covered,
//! `x` not covered.

use planwise_core::{
    Category, Comparison, ComparisonCell, CostOutlook, Coverage, Plan, STANDARD_ROWS,
    UsageAssumptions,
};

/// Width of the row-label column in cards and tables.
const LABEL_WIDTH: usize = 22;

/// Print the catalog as one line per plan.
pub fn print_plan_list(plans: &[Plan]) {
    if plans.is_empty() {
        println!("Catalog is empty.");
        return;
    }
    for plan in plans {
        println!(
            "{:<16} {:<22} {:<18} {:<6} {}/mo",
            plan.id, plan.name, plan.carrier, plan.plan_type, plan.premium
        );
    }
}

/// Print a single plan as a vertical card grouped by row category.
pub fn print_plan_card(plan: &Plan) {
    println!("=== {} ===", plan.name);
    println!("{} ({})", plan.carrier, plan.plan_type);
    println!();

    for category in Category::ALL {
        println!("{}", category.label());
        for row in STANDARD_ROWS.iter().filter(|r| r.category == *category) {
            println!(
                "  {:<w$} {}",
                row.label,
                plan.benefit(row.field),
                w = LABEL_WIDTH
            );
        }
        println!();
    }
}

/// Print the comparison grid as a side-by-side table grouped by category.
pub fn print_comparison(plans: &[Plan], grid: &Comparison, diff_only: bool) {
    if plans.is_empty() {
        println!("No plans selected.");
        return;
    }

    // One column per plan, sized to its widest content.
    let widths: Vec<usize> = plans
        .iter()
        .enumerate()
        .map(|(i, plan)| {
            let mut w = plan
                .name
                .chars()
                .count()
                .max(plan.carrier.chars().count())
                .max(plan.plan_type.chars().count());
            for row in &grid.rows {
                w = w.max(cell_text(&row.cells[i]).chars().count());
            }
            w + 2
        })
        .collect();

    print_table_line("Coverage Details", plans.iter().map(|p| p.name.clone()), &widths);
    print_table_line("", plans.iter().map(|p| p.carrier.clone()), &widths);
    print_table_line("", plans.iter().map(|p| p.plan_type.clone()), &widths);
    println!();

    for category in Category::ALL {
        let rows: Vec<_> = grid
            .rows
            .iter()
            .filter(|r| r.config.category == *category && (!diff_only || r.differs))
            .collect();
        if rows.is_empty() {
            continue;
        }
        println!("{}", category.label());
        for row in rows {
            let label = if row.differs {
                format!("  {} !", row.config.label)
            } else {
                format!("  {}", row.config.label)
            };
            print_table_line(&label, row.cells.iter().map(cell_text), &widths);
        }
    }

    println!();
    let mut legend = vec!["+ fully covered", "x not covered", "! differs between plans"];
    if grid.comparative() {
        legend.insert(0, "* best value");
    }
    println!("{}", legend.join("   "));
}

/// Print the estimated annual cost summary.
pub fn print_cost_summary(outlook: &CostOutlook, usage: &UsageAssumptions) {
    println!("Estimated Annual Cost");
    println!(
        "  Assumes {} primary care visits, {} specialist visits, {} months of generic Rx.",
        usage.primary_care_visits, usage.specialist_visits, usage.generic_fill_months
    );
    println!();

    for projection in &outlook.projections {
        let mut headline = format!(
            "  {:<w$} {} /year",
            projection.plan_name,
            format_currency(projection.estimated_total),
            w = LABEL_WIDTH
        );
        if outlook.is_best_value(projection) {
            headline.push_str("   Best Value");
        }
        println!("{headline}");
        println!(
            "    {:<w$} {}",
            "Annual premium",
            format_currency(projection.annual_premium),
            w = LABEL_WIDTH - 2
        );
        println!(
            "    {:<w$} {}",
            "Deductible",
            format_currency(projection.deductible),
            w = LABEL_WIDTH - 2
        );
        if let Some(savings) = outlook.savings_vs_highest(projection) {
            println!("    Save {} vs highest", format_currency(savings));
        }
        println!();
    }

    println!("  Estimates are illustrative only; actual costs depend on individual usage.");
}

// ── Helpers ──

fn print_table_line(label: &str, cells: impl Iterator<Item = String>, widths: &[usize]) {
    let mut line = format!("{:<w$}", label, w = LABEL_WIDTH + 6);
    for (cell, width) in cells.zip(widths) {
        line.push_str(&format!("{:<w$}", cell, w = *width));
    }
    println!("{}", line.trim_end());
}

/// Cell content plus coverage and best-value markers.
fn cell_text(cell: &ComparisonCell) -> String {
    let mut text = match cell.coverage {
        Coverage::Full => format!("+ {}", cell.value),
        Coverage::NotCovered => format!("x {}", cell.value),
        Coverage::Neutral => cell.value.clone(),
    };
    if cell.best {
        text.push_str(" *");
    }
    text
}

/// Whole-dollar currency with thousands separators: `5720.0` → `"$5,720"`.
fn format_currency(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if rounded < 0 {
        format!("-${out}")
    } else {
        format!("${out}")
    }
}
