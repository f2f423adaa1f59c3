//! TypeResolver — ingredient → IngredientType
//!
//! Цепочка capability probes, первый сработавший выигрывает:
//! 1. `IngredientTag` — switch по tag (неизвестный tag → default + warning)
//! 2. `Ingredient` — type name capability (неизвестное имя → default)
//! 3. `CategoryTag` — legacy marker, только если категория есть в `category_types`
//! 4. `Name` — case-insensitive substring по keyword'ам типов
//!
//! Legacy marker из `legacy_categories` без записи в `category_types` делает объект
//! ingredient'ом, но тип берётся из имени (шаг 4).
//!
//! Ничего не сработало → default + warning. Resolver никогда не падает.
//! Чистая функция: warnings возвращаются в `Resolution::fallback`, логирует caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::components::{CategoryTag, Ingredient, IngredientTag, IngredientType};

/// Какой probe дал результат
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionPath {
    TypeTag,
    TypeName,
    Category,
    NameKeyword,
    Default,
}

/// Почему результат — default, а не распознанный тип
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    UnknownTag(String),
    UnknownTypeName(String),
    NoKeywordMatch(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub ingredient_type: IngredientType,
    pub path: ResolutionPath,
    pub fallback: Option<Fallback>,
}

/// Capabilities ingredient entity (что нашлось при query)
#[derive(Debug, Clone, Copy, Default)]
pub struct IngredientProbe<'a> {
    pub tag: Option<&'a IngredientTag>,
    pub ingredient: Option<&'a Ingredient>,
    pub category: Option<&'a CategoryTag>,
    pub name: Option<&'a str>,
}

type Probe = fn(&TypeResolver, &IngredientProbe) -> Option<Resolution>;

const PROBES: [Probe; 4] = [
    TypeResolver::probe_type_tag,
    TypeResolver::probe_type_name,
    TypeResolver::probe_category,
    TypeResolver::probe_name_keywords,
];

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeResolver {
    pub default_type: IngredientType,
    /// Keywords для name heuristic (lowercase), проверка в порядке IngredientType
    pub keywords: BTreeMap<IngredientType, Vec<String>>,
    /// Legacy category → type (приоритет над именем)
    pub category_types: BTreeMap<String, IngredientType>,
    /// Legacy categories без фиксированного типа (резолвятся по имени)
    pub legacy_categories: Vec<String>,
}

impl Default for TypeResolver {
    fn default() -> Self {
        let keywords = BTreeMap::from([
            (IngredientType::Tuna, vec!["tuna".into(), "maguro".into()]),
            (IngredientType::Salmon, vec!["salmon".into(), "sake".into()]),
            (IngredientType::Shrimp, vec!["shrimp".into(), "ebi".into(), "prawn".into()]),
        ]);

        Self {
            default_type: IngredientType::Tuna,
            keywords,
            // Старые fish prefabs (до capability компонентов) — все shrimp
            category_types: BTreeMap::from([("Fish".to_string(), IngredientType::Shrimp)]),
            // Смешанные seafood prefabs — тип только по имени
            legacy_categories: vec!["Seafood".to_string()],
        }
    }
}

impl TypeResolver {
    /// Valid ingredient: есть identity capability или распознанная legacy категория
    pub fn is_ingredient(&self, probe: &IngredientProbe) -> bool {
        probe.tag.is_some() || probe.ingredient.is_some() || self.recognizes_category(probe.category)
    }

    pub fn recognizes_category(&self, category: Option<&CategoryTag>) -> bool {
        category.is_some_and(|category| {
            self.category_types.contains_key(&category.0)
                || self.legacy_categories.contains(&category.0)
        })
    }

    pub fn resolve(&self, probe: &IngredientProbe) -> Resolution {
        PROBES
            .iter()
            .find_map(|probe_fn| probe_fn(self, probe))
            .unwrap_or_else(|| Resolution {
                ingredient_type: self.default_type,
                path: ResolutionPath::Default,
                fallback: Some(Fallback::NoKeywordMatch(probe.name.map(str::to_string))),
            })
    }

    fn probe_type_tag(&self, probe: &IngredientProbe) -> Option<Resolution> {
        let tag = probe.tag?;
        Some(match IngredientType::from_name(&tag.0) {
            Some(ingredient_type) => Resolution {
                ingredient_type,
                path: ResolutionPath::TypeTag,
                fallback: None,
            },
            None => Resolution {
                ingredient_type: self.default_type,
                path: ResolutionPath::TypeTag,
                fallback: Some(Fallback::UnknownTag(tag.0.clone())),
            },
        })
    }

    fn probe_type_name(&self, probe: &IngredientProbe) -> Option<Resolution> {
        let ingredient = probe.ingredient?;
        Some(match IngredientType::from_name(&ingredient.type_name) {
            Some(ingredient_type) => Resolution {
                ingredient_type,
                path: ResolutionPath::TypeName,
                fallback: None,
            },
            None => Resolution {
                ingredient_type: self.default_type,
                path: ResolutionPath::TypeName,
                fallback: Some(Fallback::UnknownTypeName(ingredient.type_name.clone())),
            },
        })
    }

    fn probe_category(&self, probe: &IngredientProbe) -> Option<Resolution> {
        let category = probe.category?;
        let ingredient_type = *self.category_types.get(&category.0)?;
        Some(Resolution {
            ingredient_type,
            path: ResolutionPath::Category,
            fallback: None,
        })
    }

    fn probe_name_keywords(&self, probe: &IngredientProbe) -> Option<Resolution> {
        let name = probe.name?.to_lowercase();
        self.keywords
            .iter()
            .find(|(_, words)| {
                words
                    .iter()
                    .any(|word| !word.is_empty() && name.contains(&word.to_lowercase()))
            })
            .map(|(ingredient_type, _)| Resolution {
                ingredient_type: *ingredient_type,
                path: ResolutionPath::NameKeyword,
                fallback: None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::default;

    fn resolver() -> TypeResolver {
        TypeResolver::default()
    }

    #[test]
    fn test_type_tag_wins() {
        let tag = IngredientTag("Salmon".into());
        let ingredient = Ingredient::new("Shrimp");
        let probe = IngredientProbe {
            tag: Some(&tag),
            ingredient: Some(&ingredient),
            name: Some("tuna slice"),
            ..default()
        };

        let resolution = resolver().resolve(&probe);
        assert_eq!(resolution.ingredient_type, IngredientType::Salmon);
        assert_eq!(resolution.path, ResolutionPath::TypeTag);
        assert!(resolution.fallback.is_none());
    }

    #[test]
    fn test_unknown_tag_falls_back_to_default() {
        let tag = IngredientTag("Eel".into());
        let probe = IngredientProbe {
            tag: Some(&tag),
            name: Some("Salmon"), // name heuristic не используется
            ..default()
        };

        let resolution = resolver().resolve(&probe);
        assert_eq!(resolution.ingredient_type, IngredientType::Tuna);
        assert_eq!(resolution.path, ResolutionPath::TypeTag);
        assert_eq!(resolution.fallback, Some(Fallback::UnknownTag("Eel".into())));
    }

    #[test]
    fn test_type_name_capability() {
        let ingredient = Ingredient::new("shrimp");
        let probe = IngredientProbe {
            ingredient: Some(&ingredient),
            ..default()
        };

        let resolution = resolver().resolve(&probe);
        assert_eq!(resolution.ingredient_type, IngredientType::Shrimp);
        assert_eq!(resolution.path, ResolutionPath::TypeName);

        let unknown = Ingredient::new("Octopus");
        let resolution = resolver().resolve(&IngredientProbe {
            ingredient: Some(&unknown),
            ..default()
        });
        assert_eq!(resolution.ingredient_type, IngredientType::Tuna);
        assert_eq!(resolution.fallback, Some(Fallback::UnknownTypeName("Octopus".into())));
    }

    #[test]
    fn test_category_beats_name_heuristic() {
        let category = CategoryTag("Fish".into());
        let probe = IngredientProbe {
            category: Some(&category),
            name: Some("Tuna Scrap"),
            ..default()
        };

        let resolution = resolver().resolve(&probe);
        assert_eq!(resolution.ingredient_type, IngredientType::Shrimp);
        assert_eq!(resolution.path, ResolutionPath::Category);
    }

    #[test]
    fn test_unmapped_category_falls_through_to_name() {
        let category = CategoryTag("Garnish".into());
        let probe = IngredientProbe {
            category: Some(&category),
            name: Some("Big SALMON chunk"),
            ..default()
        };

        assert!(!resolver().is_ingredient(&probe));
        let resolution = resolver().resolve(&probe);
        assert_eq!(resolution.ingredient_type, IngredientType::Salmon);
        assert_eq!(resolution.path, ResolutionPath::NameKeyword);
    }

    #[test]
    fn test_unmapped_legacy_category_resolved_by_name() {
        let seafood = CategoryTag("Seafood".into());
        let probe = IngredientProbe {
            category: Some(&seafood),
            name: Some("Ebi Tempura"),
            ..default()
        };

        assert!(resolver().is_ingredient(&probe));
        let resolution = resolver().resolve(&probe);
        assert_eq!(resolution.ingredient_type, IngredientType::Shrimp);
        assert_eq!(resolution.path, ResolutionPath::NameKeyword);

        let mystery = IngredientProbe {
            category: Some(&seafood),
            name: Some("Mystery Chunk"),
            ..default()
        };
        let resolution = resolver().resolve(&mystery);
        assert_eq!(resolution.path, ResolutionPath::Default);
        assert_eq!(
            resolution.fallback,
            Some(Fallback::NoKeywordMatch(Some("Mystery Chunk".into())))
        );
    }

    #[test]
    fn test_name_keyword_order() {
        // "tuna" и "ebi" оба в имени — Tuna проверяется первым
        let probe = IngredientProbe {
            name: Some("ebi_tuna_combo"),
            ..default()
        };
        assert_eq!(resolver().resolve(&probe).ingredient_type, IngredientType::Tuna);
    }

    #[test]
    fn test_nothing_recognized_yields_default() {
        let probe = IngredientProbe {
            name: Some("Cucumber"),
            ..default()
        };

        let resolution = resolver().resolve(&probe);
        assert_eq!(resolution.ingredient_type, IngredientType::Tuna);
        assert_eq!(resolution.path, ResolutionPath::Default);
        assert_eq!(
            resolution.fallback,
            Some(Fallback::NoKeywordMatch(Some("Cucumber".into())))
        );

        let empty = resolver().resolve(&IngredientProbe::default());
        assert_eq!(empty.ingredient_type, IngredientType::Tuna);
        assert_eq!(empty.path, ResolutionPath::Default);
    }

    #[test]
    fn test_is_ingredient() {
        let tag = IngredientTag("Tuna".into());
        let fish = CategoryTag("Fish".into());

        assert!(resolver().is_ingredient(&IngredientProbe { tag: Some(&tag), ..default() }));
        assert!(resolver().is_ingredient(&IngredientProbe { category: Some(&fish), ..default() }));
        assert!(!resolver().is_ingredient(&IngredientProbe { name: Some("tuna"), ..default() }));
    }

    #[test]
    fn test_custom_default_type() {
        let resolver = TypeResolver {
            default_type: IngredientType::Salmon,
            ..default()
        };
        let resolution = resolver.resolve(&IngredientProbe::default());
        assert_eq!(resolution.ingredient_type, IngredientType::Salmon);
    }
}
