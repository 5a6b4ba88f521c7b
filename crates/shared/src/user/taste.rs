use std::collections::HashMap;

/// Taste assumed when nothing is known about the user's preferences.
pub const NEUTRAL_TASTE: &str = "neutral";

/// Seam to the external taste classifier.
pub trait TastePredictor {
    fn predict_taste(&self, ingredient_text: &str) -> String;
}

impl<F> TastePredictor for F
where
    F: Fn(&str) -> String,
{
    fn predict_taste(&self, ingredient_text: &str) -> String {
        self(ingredient_text)
    }
}

/// Most frequent predicted taste across the dishes a user says they like.
///
/// Ties go to the label seen first; no dishes means [`NEUTRAL_TASTE`].
pub fn preferred_taste<P, I, S>(predictor: &P, liked_dishes: I) -> String
where
    P: TastePredictor + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();

    for (seen, dish) in liked_dishes.into_iter().enumerate() {
        let taste = predictor.predict_taste(&dish.as_ref().to_lowercase());
        counts.entry(taste).or_insert((0, seen)).0 += 1;
    }

    counts
        .into_iter()
        .max_by(|(_, (a_count, a_seen)), (_, (b_count, b_seen))| {
            a_count.cmp(b_count).then(b_seen.cmp(a_seen))
        })
        .map(|(taste, _)| taste)
        .unwrap_or_else(|| NEUTRAL_TASTE.to_owned())
}
