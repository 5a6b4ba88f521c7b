use std::collections::BTreeMap;

use weekmenu_knowledge::FactStore;
use weekmenu_shared::{Catalog, Recipe};

use crate::{Day, MealType, SLOT_COUNT, Schedule, Slot};

/// A solved schedule resolved to full recipe records.
#[derive(Clone, Debug, PartialEq)]
pub struct Menu<'c> {
    slots: BTreeMap<Slot, &'c Recipe>,
}

impl<'c> Menu<'c> {
    pub fn assemble(
        schedule: &Schedule,
        catalog: &'c Catalog,
        facts: &FactStore,
    ) -> weekmenu_shared::Result<Self> {
        if schedule.len() != SLOT_COUNT {
            weekmenu_shared::bail!(
                "schedule has {} slots, expected {SLOT_COUNT}",
                schedule.len()
            );
        }

        let mut slots = BTreeMap::new();

        for (slot, title) in schedule.iter() {
            if !facts.knows_recipe(title) {
                weekmenu_shared::bail!("{slot} holds {title}, unknown to the fact store");
            }

            let Some(recipe) = catalog.get(title) else {
                weekmenu_shared::bail!("{slot} holds {title}, missing from the catalog");
            };

            slots.insert(slot, recipe);
        }

        Ok(Self { slots })
    }

    pub fn get(&self, slot: Slot) -> Option<&'c Recipe> {
        self.slots.get(&slot).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &'c Recipe)> + '_ {
        self.slots.iter().map(|(slot, recipe)| (*slot, *recipe))
    }

    /// Breakfast, lunch and dinner of `day`.
    pub fn day(&self, day: Day) -> impl Iterator<Item = (MealType, &'c Recipe)> + '_ {
        self.iter()
            .filter(move |(slot, _)| slot.day == day)
            .map(|(slot, recipe)| (slot.meal, recipe))
    }
}
