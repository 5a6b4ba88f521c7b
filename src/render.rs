use std::fmt::Write;

use strum::VariantArray;
use weekmenu_mealplan::{Day, Plan};

/// Plain-text rendering of a plan, one block per day.
pub fn render_plan(plan: &Plan<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "menu (seed {})", plan.seed);

    for day in Day::VARIANTS {
        let _ = writeln!(out, "\n{day}");

        for (meal, recipe) in plan.menu.day(*day) {
            let _ = writeln!(
                out,
                "  {meal:<9} {} ({})",
                recipe.title, recipe.primary_taste
            );

            if !recipe.ingredients_raw.is_empty() {
                let _ = writeln!(out, "            {}", recipe.ingredients_raw);
            }
        }
    }

    out
}
