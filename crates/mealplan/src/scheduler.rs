use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use strum::VariantArray;
use weekmenu_knowledge::{Predicate, RuleEngine};
use weekmenu_shared::Error;

use crate::{Day, Domains, Goal, MealType, Slot};

/// Default cap on the number of values tried on lunch and dinner slots.
pub const DEFAULT_MAX_NODES: u64 = 2_000_000;

const MAIN_VARS: usize = 14;

/// A complete assignment of recipe titles to the 21 weekly slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schedule {
    slots: BTreeMap<Slot, String>,
}

impl Schedule {
    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.slots.get(&slot).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> {
        self.slots.iter().map(|(slot, title)| (*slot, title.as_str()))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl FromIterator<(Slot, String)> for Schedule {
    fn from_iter<T: IntoIterator<Item = (Slot, String)>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

/// Backtracking solver for the weekly menu.
pub struct Scheduler<'a, 'f> {
    rules: &'a RuleEngine<'f>,
    goals: Vec<Goal>,
    max_nodes: u64,
}

impl<'a, 'f> Scheduler<'a, 'f> {
    pub fn new(rules: &'a RuleEngine<'f>, goals: Vec<Goal>) -> Self {
        Self {
            rules,
            goals,
            max_nodes: DEFAULT_MAX_NODES,
        }
    }

    /// Caps the search; `0` lifts the cap.
    pub fn max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn solve(&self, domains: &Domains, rng: &mut StdRng) -> weekmenu_shared::Result<Schedule> {
        domains.ensure_satisfiable()?;

        // One independently shuffled copy per slot, drawn in slot order.
        let mut orders = Vec::with_capacity(crate::SLOT_COUNT);
        for slot in Slot::all() {
            let len = if slot.meal.is_main() {
                domains.main.len()
            } else {
                domains.breakfast.len()
            };

            let mut order = (0..len).collect::<Vec<_>>();
            order.shuffle(&mut *rng);
            orders.push((slot, order));
        }

        let mut slots = BTreeMap::new();
        let mut main_orders = Vec::with_capacity(MAIN_VARS);

        for (slot, order) in orders {
            if slot.meal.is_main() {
                main_orders.push(order);
                continue;
            }

            let Some(first) = order.first() else {
                weekmenu_shared::bail!("breakfast domain emptied after shuffling");
            };

            slots.insert(slot, domains.breakfast[*first].to_owned());
        }

        let mut search = Search::new(
            self.rules,
            &self.goals,
            &domains.main,
            main_orders,
            self.max_nodes,
        );

        match search.run(0) {
            Ok(true) => {}
            Ok(false) => {
                tracing::warn!(explored = search.nodes, "search space exhausted without a menu");
                return Err(Error::NoSolutionFound {
                    explored: search.nodes,
                });
            }
            Err(BudgetExhausted) => {
                tracing::warn!(
                    explored = search.nodes,
                    max_nodes = self.max_nodes,
                    "search budget exhausted"
                );
                return Err(Error::NoSolutionFound {
                    explored: search.nodes,
                });
            }
        }

        let mains = Day::VARIANTS
            .iter()
            .flat_map(|day| [Slot::new(*day, MealType::Lunch), Slot::new(*day, MealType::Dinner)]);

        for (slot, candidate) in mains.zip(search.assigned.iter()) {
            slots.insert(slot, domains.main[*candidate].to_owned());
        }

        tracing::info!(explored = search.nodes, "menu found");

        Ok(Schedule { slots })
    }
}

struct BudgetExhausted;

/// Search state over the 14 main variables, ordered Monday lunch, Monday
/// dinner, Tuesday lunch and so on. Values are indexes into the main domain.
struct Search {
    orders: Vec<Vec<usize>>,
    /// `pruned[var][candidate]` holds the depth whose assignment removed it.
    pruned: Vec<Vec<Option<usize>>>,
    /// Prunings in the order they were made, undone from the top.
    trail: Vec<(usize, usize)>,
    /// Live candidates left per variable.
    live: Vec<usize>,
    /// `support[var][goal]` counts live candidates of `var` meeting `goal`.
    support: Vec<Vec<usize>>,
    high_fat: Vec<usize>,
    is_high_fat: Vec<bool>,
    goals: Vec<u32>,
    required: u32,
    assigned: Vec<usize>,
    nodes: u64,
    max_nodes: u64,
}

impl Search {
    fn new(
        rules: &RuleEngine<'_>,
        goals: &[Goal],
        main: &[String],
        orders: Vec<Vec<usize>>,
        max_nodes: u64,
    ) -> Self {
        let is_high_fat = main
            .iter()
            .map(|title| rules.holds(Predicate::HighFat, title))
            .collect();

        let masks = main
            .iter()
            .map(|title| {
                goals
                    .iter()
                    .enumerate()
                    .filter(|(_, goal)| goal.is_met_by(rules, title))
                    .fold(0u32, |mask, (bit, _)| mask | (1u32 << bit))
            })
            .collect();

        let required = (0..goals.len()).fold(0u32, |mask, bit| mask | (1u32 << bit));

        Self::from_parts(orders, is_high_fat, masks, required, max_nodes)
    }

    fn from_parts(
        orders: Vec<Vec<usize>>,
        is_high_fat: Vec<bool>,
        goals: Vec<u32>,
        required: u32,
        max_nodes: u64,
    ) -> Self {
        let candidates = goals.len();
        let goal_count = (u32::BITS - required.leading_zeros()) as usize;

        let per_var = (0..goal_count)
            .map(|bit| goals.iter().filter(|mask| *mask & (1u32 << bit) != 0).count())
            .collect::<Vec<_>>();

        let high_fat = is_high_fat
            .iter()
            .enumerate()
            .filter(|(_, high_fat)| **high_fat)
            .map(|(candidate, _)| candidate)
            .collect();

        Self {
            pruned: vec![vec![None; candidates]; orders.len()],
            trail: vec![],
            live: vec![candidates; orders.len()],
            support: vec![per_var; orders.len()],
            orders,
            high_fat,
            is_high_fat,
            goals,
            required,
            assigned: Vec::with_capacity(MAIN_VARS),
            nodes: 0,
            max_nodes,
        }
    }

    fn run(&mut self, var: usize) -> Result<bool, BudgetExhausted> {
        if var == self.orders.len() {
            return Ok(self.covered() & self.required == self.required);
        }

        if var == 0 && !self.coverage_reachable(0) {
            return Ok(false);
        }

        for pos in 0..self.orders[var].len() {
            let candidate = self.orders[var][pos];

            if self.pruned[var][candidate].is_some() {
                continue;
            }

            if self.max_nodes > 0 && self.nodes >= self.max_nodes {
                return Err(BudgetExhausted);
            }

            self.nodes += 1;
            self.assigned.push(candidate);

            if self.forward_check(var, candidate) && self.run(var + 1)? {
                return Ok(true);
            }

            self.undo(var);
            self.assigned.pop();
        }

        Ok(false)
    }

    fn prune(&mut self, var: usize, candidate: usize, depth: usize) {
        if self.pruned[var][candidate].is_some() {
            return;
        }

        self.pruned[var][candidate] = Some(depth);
        self.trail.push((var, candidate));
        self.live[var] -= 1;
        self.adjust_support(var, candidate, false);
    }

    fn undo(&mut self, depth: usize) {
        while let Some(&(var, candidate)) = self.trail.last() {
            if self.pruned[var][candidate] != Some(depth) {
                break;
            }

            self.trail.pop();
            self.pruned[var][candidate] = None;
            self.live[var] += 1;
            self.adjust_support(var, candidate, true);
        }
    }

    fn adjust_support(&mut self, var: usize, candidate: usize, restore: bool) {
        let mask = self.goals[candidate];

        for (bit, count) in self.support[var].iter_mut().enumerate() {
            if mask & (1u32 << bit) == 0 {
                continue;
            }

            if restore {
                *count += 1;
            } else {
                *count -= 1;
            }
        }
    }

    fn forward_check(&mut self, var: usize, candidate: usize) -> bool {
        let vars = self.orders.len();

        // Lunches are pairwise distinct, and so are dinners.
        for future in (var + 2..vars).step_by(2) {
            self.prune(future, candidate, var);
        }

        // Dinner differs from the same day's lunch and is not also high fat.
        if var % 2 == 0 && var + 1 < vars {
            let dinner = var + 1;
            self.prune(dinner, candidate, var);

            if self.is_high_fat[candidate] {
                for other in 0..self.high_fat.len() {
                    let other = self.high_fat[other];
                    self.prune(dinner, other, var);
                }
            }
        }

        let wiped = (var + 1..vars).any(|future| self.live[future] == 0);

        !wiped && self.coverage_reachable(var + 1)
    }

    fn covered(&self) -> u32 {
        self.assigned
            .iter()
            .fold(0, |mask, candidate| mask | self.goals[*candidate])
    }

    /// Every goal not yet covered can still be met by some variable from `from` on.
    fn coverage_reachable(&self, from: usize) -> bool {
        let missing = self.required & !self.covered();

        (0..u32::BITS as usize)
            .filter(|bit| missing & (1u32 << bit) != 0)
            .all(|bit| {
                self.support[from..]
                    .iter()
                    .any(|counts| counts.get(bit).is_some_and(|count| *count > 0))
            })
    }
}
