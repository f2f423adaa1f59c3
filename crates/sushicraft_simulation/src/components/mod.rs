//! ECS Components для crafting entity
//!
//! Организация по доменам:
//! - hand: tracked руки и player rig (Hand, Grip, GripKind, PlayerRig)
//! - held: held state spawned items (HeldObjectState)
//! - ingredient: ingredient capabilities и output markers (IngredientTag, Ingredient, CategoryTag, Throwable)

pub mod hand;
pub mod held;
pub mod ingredient;

// Re-exports для удобного импорта
pub use hand::*;
pub use held::*;
pub use ingredient::*;
