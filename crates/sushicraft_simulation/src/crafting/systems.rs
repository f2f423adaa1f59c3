//! Crafting system: contact → combination

use bevy::prelude::*;
use std::collections::HashSet;

use crate::blueprint::{spawn_blueprint, Blueprints};
use crate::components::{
    CategoryTag, GripKind, Hand, HeldObjectState, Ingredient, IngredientTag, PlayerRig,
};
use crate::config::CraftingConfig;
use crate::crafting::{
    CombinationAgent, CombinationCompleted, ContactBegan, Fallback, IngredientProbe, Resolution,
};
use crate::hand::{opposite_hand, GripRequest};
use crate::presentation::{spawn_visual_effect, AudioCueRequested};
use crate::{log, log_info, log_warning};

/// Ingredient capabilities (все optional, распознавание по наличию)
type IngredientCapabilities = (
    Option<&'static IngredientTag>,
    Option<&'static Ingredient>,
    Option<&'static CategoryTag>,
    Option<&'static Name>,
);

/// Система: ContactBegan → combination
///
/// # Условия (все сразу)
/// 1. Guard агента Armed
/// 2. Base item в руке (или `allow_unheld`)
/// 3. Второй объект — распознанный ingredient
///
/// Нарушения 1-3 — ожидаемые гонки физики, игнорируются без лога.
///
/// # Flow
/// 1. TypeResolver → IngredientType
/// 2. Recipe → output blueprint (нет → warning, guard остаётся Armed)
/// 3. Guard → Consumed
/// 4. Spawn output в точке контакта + offset
/// 5. Audio cue + VFX
/// 6. Throwable output → во вторую руку
/// 7. Despawn base + ingredient
pub fn combine_on_contact(
    mut commands: Commands,
    mut contacts: EventReader<ContactBegan>,
    mut agents: Query<(&mut CombinationAgent, Option<&HeldObjectState>, &Transform)>,
    ingredients: Query<IngredientCapabilities>,
    hands: Query<&Hand>,
    rigs: Query<&PlayerRig>,
    blueprints: Res<Blueprints>,
    config: Res<CraftingConfig>,
    time: Res<Time>,
    mut grip_requests: EventWriter<GripRequest>,
    mut audio_cues: EventWriter<AudioCueRequested>,
    mut completed_events: EventWriter<CombinationCompleted>,
) {
    // Entities уже потраченные в этом кадре (despawn через Commands отложен)
    let mut consumed: HashSet<Entity> = HashSet::new();

    for contact in contacts.read() {
        for (base, other) in [(contact.a, contact.b), (contact.b, contact.a)] {
            if base == other || consumed.contains(&base) || consumed.contains(&other) {
                continue;
            }

            let Ok((mut agent, held, base_transform)) = agents.get_mut(base) else {
                continue;
            };

            // Guard: Consumed или rice не в руке
            if !agent.can_combine(held) {
                continue;
            }

            // Guard: не ingredient
            let Ok((tag, ingredient, category, name)) = ingredients.get(other) else {
                continue;
            };
            let probe = IngredientProbe {
                tag,
                ingredient,
                category,
                name: name.map(Name::as_str),
            };
            if !agent.config.resolver.is_ingredient(&probe) {
                continue;
            }

            // 1. Resolve type
            let resolution = agent.config.resolver.resolve(&probe);
            report_fallback(other, &resolution);

            // 2. Output blueprint
            let blueprint = match agent
                .output_for(resolution.ingredient_type)
                .and_then(|id| blueprints.resolve(Some(id)))
            {
                Ok(blueprint) => blueprint,
                Err(err) => {
                    log_warning(&format!("Combination {:?} + {:?} aborted: {}", base, other, err));
                    continue;
                }
            };

            // 3. Armed → Consumed
            agent.consume();

            // 4. Spawn output
            let contact_point = contact
                .points
                .first()
                .copied()
                .unwrap_or(base_transform.translation);
            let transform = agent.output_transform(contact_point);
            let output = spawn_blueprint(&mut commands, blueprint, transform, &config);

            // 5. Presentation
            if let Some(cue) = &agent.config.audio_cue {
                audio_cues.write(AudioCueRequested {
                    cue: cue.clone(),
                    position: transform.translation,
                });
            }
            if let Some(prefab) = &agent.config.effect {
                spawn_visual_effect(&mut commands, prefab, transform.translation, time.elapsed_secs());
            }

            // 6. Hand-to-hand transfer
            let transferred_to = if blueprint.is_throwable() {
                held.and_then(|state| state.holder)
                    .and_then(|hand| opposite_hand(hand, &hands, &rigs))
            } else {
                None
            };
            if let Some(hand) = transferred_to {
                grip_requests.write(GripRequest::Attach {
                    hand,
                    object: output,
                    grip: GripKind::Grip,
                });
            }

            // 7. Despawn inputs (руки освободит release_despawned_objects)
            for entity in [base, other] {
                if let Ok(mut entity_commands) = commands.get_entity(entity) {
                    entity_commands.despawn();
                }
            }
            consumed.insert(base);
            consumed.insert(other);

            completed_events.write(CombinationCompleted {
                base,
                ingredient: other,
                output,
                ingredient_type: resolution.ingredient_type,
                resolved_by: resolution.path,
                transferred_to,
            });

            log_info(&format!(
                "🍣 {:?} + {:?} ({:?} via {:?}) → {} {:?}",
                base, other, resolution.ingredient_type, resolution.path, blueprint.name, output
            ));
        }
    }
}

/// Diagnostic для default fallback'а
fn report_fallback(ingredient: Entity, resolution: &Resolution) {
    match &resolution.fallback {
        None => {}
        Some(Fallback::UnknownTag(tag)) => log_warning(&format!(
            "Ingredient {:?}: unknown type tag '{}', using {:?}",
            ingredient, tag, resolution.ingredient_type
        )),
        Some(Fallback::UnknownTypeName(type_name)) => log(&format!(
            "Ingredient {:?}: unknown type name '{}', using {:?}",
            ingredient, type_name, resolution.ingredient_type
        )),
        Some(Fallback::NoKeywordMatch(name)) => log_warning(&format!(
            "Ingredient {:?}: name {:?} matches no keywords, using {:?}",
            ingredient, name, resolution.ingredient_type
        )),
    }
}
