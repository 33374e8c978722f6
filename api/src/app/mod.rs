//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and the pure
//! costing and conversion logic.

pub mod conversion;
pub mod costing;
pub mod ingredient_service;
pub mod order_service;
pub mod recipe_service;

pub use conversion::{convert_basic, convert_culinary, Conversion, CulinaryConversion};
pub use costing::{cost_lines, quote, CostBreakdown, PriceQuote, SkipReason, SkippedLine};
pub use ingredient_service::IngredientService;
pub use order_service::OrderService;
pub use recipe_service::{Calculation, RecipeDraft, RecipeService};
