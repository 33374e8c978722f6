//! Recipe costing engine
//!
//! Normalizes heterogeneous ingredient lines (grams, kilograms,
//! milliliters, liters, counts) onto each group's base unit, aggregates
//! them into a total ingredient cost, and derives a suggested sale price
//! from labor, margin, and optional yield. Pure functions, no state.

use serde::Serialize;

use crate::domain::entities::{Ingredient, RecipeLine};

/// Why a recipe line contributed nothing to the cost total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The line references an ingredient id that no longer exists
    IngredientNotFound,
    /// The line's unit group differs from its ingredient's unit group
    IncompatibleUnits,
}

/// Diagnostic record for a skipped recipe line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SkippedLine {
    /// Zero-based index of the line in the recipe
    pub line: usize,
    pub reason: SkipReason,
}

/// Result of costing a set of recipe lines
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub ingredient_cost: f64,
    /// Lines excluded from the total, in line order
    pub skipped: Vec<SkippedLine>,
}

/// Price derivation for a costed recipe
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceQuote {
    pub total_cost: f64,
    pub suggested_price: f64,
    pub profit: f64,
    /// Suggested price divided by yield, when a positive yield is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_per_unit: Option<f64>,
}

/// Cost a recipe's lines against an ingredient collection.
///
/// Lines referencing a missing ingredient or mixing unit groups are skipped
/// rather than failing the whole computation: recipes are built iteratively
/// and a half-filled row must not block the total. A recipe whose lines are
/// all invalid costs zero. Each skip is recorded in the breakdown so
/// callers can surface it without changing the numbers.
pub fn cost_lines(lines: &[RecipeLine], ingredients: &[Ingredient]) -> CostBreakdown {
    let mut ingredient_cost = 0.0;
    let mut skipped = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        let Some(ingredient) = ingredients.iter().find(|i| i.id == line.ingredient_id) else {
            skipped.push(SkippedLine {
                line: index,
                reason: SkipReason::IngredientNotFound,
            });
            continue;
        };

        if ingredient.unit.group() != line.unit.group() {
            skipped.push(SkippedLine {
                line: index,
                reason: SkipReason::IncompatibleUnits,
            });
            continue;
        }

        ingredient_cost += ingredient.unit_price() * line.unit.to_base(line.quantity);
    }

    CostBreakdown {
        ingredient_cost,
        skipped,
    }
}

/// Derive the suggested sale price from ingredient cost, labor, and margin.
///
/// Margin 0 is valid and yields suggested price == total cost with zero
/// profit. Negative margin is not rejected here; it prices below cost.
pub fn quote(
    ingredient_cost: f64,
    labor_cost: f64,
    margin_percent: f64,
    yield_units: Option<f64>,
) -> PriceQuote {
    let total_cost = ingredient_cost + labor_cost;
    let suggested_price = total_cost * (1.0 + margin_percent / 100.0);
    let profit = suggested_price - total_cost;
    let price_per_unit = yield_units
        .filter(|y| *y > 0.0)
        .map(|y| suggested_price / y);

    PriceQuote {
        total_cost,
        suggested_price,
        profit,
        price_per_unit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{IngredientId, Unit};

    fn ingredient(price: f64, quantity: f64, unit: Unit) -> Ingredient {
        Ingredient {
            id: IngredientId::new(),
            name: "Sugar".to_string(),
            price,
            quantity,
            unit,
        }
    }

    fn line(ingredient: &Ingredient, quantity: f64, unit: Unit) -> RecipeLine {
        RecipeLine {
            ingredient_id: ingredient.id,
            quantity,
            unit,
        }
    }

    #[test]
    fn kilogram_purchase_costed_in_grams() {
        // 10.00 per kg is 0.01 per gram; 200 g costs 2.00
        let sugar = ingredient(10.0, 1.0, Unit::Kilogram);
        let lines = vec![line(&sugar, 200.0, Unit::Gram)];

        let breakdown = cost_lines(&lines, &[sugar]);

        assert!((breakdown.ingredient_cost - 2.0).abs() < 1e-9);
        assert!(breakdown.skipped.is_empty());
    }

    #[test]
    fn lines_in_the_same_group_mix_units() {
        let milk = ingredient(6.0, 1.0, Unit::Liter);
        let lines = vec![line(&milk, 500.0, Unit::Milliliter), line(&milk, 0.5, Unit::Liter)];

        let breakdown = cost_lines(&lines, &[milk]);

        // both lines normalize to 500 ml at 0.006 per ml
        assert!((breakdown.ingredient_cost - 6.0).abs() < 1e-9);
    }

    #[test]
    fn cost_is_invariant_to_line_order() {
        let sugar = ingredient(10.0, 1.0, Unit::Kilogram);
        let eggs = ingredient(12.0, 30.0, Unit::Count);
        let forward = vec![line(&sugar, 200.0, Unit::Gram), line(&eggs, 3.0, Unit::Count)];
        let reversed: Vec<RecipeLine> = forward.iter().rev().cloned().collect();
        let ingredients = vec![sugar, eggs];

        let a = cost_lines(&forward, &ingredients);
        let b = cost_lines(&reversed, &ingredients);

        assert_eq!(a.ingredient_cost, b.ingredient_cost);
    }

    #[test]
    fn missing_ingredient_is_skipped_not_fatal() {
        let sugar = ingredient(10.0, 1.0, Unit::Kilogram);
        let dangling = RecipeLine {
            ingredient_id: IngredientId::new(),
            quantity: 100.0,
            unit: Unit::Gram,
        };
        let lines = vec![line(&sugar, 200.0, Unit::Gram), dangling];

        let breakdown = cost_lines(&lines, &[sugar]);

        assert!((breakdown.ingredient_cost - 2.0).abs() < 1e-9);
        assert_eq!(
            breakdown.skipped,
            vec![SkippedLine {
                line: 1,
                reason: SkipReason::IngredientNotFound,
            }]
        );
    }

    #[test]
    fn incompatible_unit_group_contributes_zero() {
        let milk = ingredient(6.0, 1.0, Unit::Liter);
        let lines = vec![line(&milk, 100.0, Unit::Gram)];

        let breakdown = cost_lines(&lines, &[milk]);

        assert_eq!(breakdown.ingredient_cost, 0.0);
        assert_eq!(breakdown.skipped[0].reason, SkipReason::IncompatibleUnits);
    }

    #[test]
    fn all_invalid_lines_cost_zero_without_error() {
        let lines = vec![
            RecipeLine {
                ingredient_id: IngredientId::new(),
                quantity: 1.0,
                unit: Unit::Gram,
            },
            RecipeLine {
                ingredient_id: IngredientId::new(),
                quantity: 2.0,
                unit: Unit::Count,
            },
        ];

        let breakdown = cost_lines(&lines, &[]);

        assert_eq!(breakdown.ingredient_cost, 0.0);
        assert_eq!(breakdown.skipped.len(), 2);
    }

    #[test]
    fn empty_lines_cost_zero() {
        let breakdown = cost_lines(&[], &[]);
        assert_eq!(breakdown.ingredient_cost, 0.0);
        assert!(breakdown.skipped.is_empty());
    }

    #[test]
    fn quote_applies_margin_over_labor_and_ingredients() {
        let q = quote(2.0, 1.0, 50.0, None);

        assert!((q.total_cost - 3.0).abs() < 1e-9);
        assert!((q.suggested_price - 4.5).abs() < 1e-9);
        assert!((q.profit - 1.5).abs() < 1e-9);
        assert_eq!(q.price_per_unit, None);
    }

    #[test]
    fn zero_margin_sells_at_cost() {
        let q = quote(8.0, 2.0, 0.0, None);

        assert_eq!(q.suggested_price, q.total_cost);
        assert_eq!(q.profit, 0.0);
    }

    #[test]
    fn negative_margin_prices_below_cost() {
        let q = quote(10.0, 0.0, -20.0, None);

        assert!((q.suggested_price - 8.0).abs() < 1e-9);
        assert!(q.profit < 0.0);
    }

    #[test]
    fn positive_yield_derives_price_per_unit() {
        let q = quote(2.0, 1.0, 50.0, Some(10.0));

        assert_eq!(q.price_per_unit, Some(0.45));
    }

    #[test]
    fn zero_or_negative_yield_has_no_per_unit_price() {
        assert_eq!(quote(2.0, 1.0, 50.0, Some(0.0)).price_per_unit, None);
        assert_eq!(quote(2.0, 1.0, 50.0, Some(-3.0)).price_per_unit, None);
    }
}
