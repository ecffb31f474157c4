use crate::domain::shared::value_objects::CoffeeId;

/// Favorite coffee ids in the order they were first marked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<CoffeeId>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from stored ids, keeping the first occurrence of duplicates.
    pub fn from_ids(ids: impl IntoIterator<Item = CoffeeId>) -> Self {
        let mut set = FavoriteSet::new();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    pub fn ids(&self) -> &[CoffeeId] {
        &self.ids
    }

    pub fn contains(&self, id: &CoffeeId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flips membership of `id` and returns whether it is now a favorite.
    pub fn toggle(&mut self, id: CoffeeId) -> bool {
        if self.contains(&id) {
            self.ids.retain(|existing| existing != &id);
            false
        } else {
            self.ids.push(id);
            true
        }
    }
}
