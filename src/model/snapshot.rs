//! Snapshot model.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::Article;

/// Ordered articles from one complete sync pass.
///
/// Serialized as a bare JSON array, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Snapshot {
    articles: Vec<Article>,
}

impl Snapshot {
    /// Wrap articles that are already in snapshot order.
    #[must_use]
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    #[must_use]
    pub fn into_articles(self) -> Vec<Article> {
        self.articles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    /// Look up one article by id.
    #[must_use]
    pub fn find(&self, item_id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.item_id == item_id)
    }

    /// Pick an article uniformly at random. `None` for an empty snapshot.
    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Article> {
        self.articles.choose(rng)
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Article;
    type IntoIter = std::slice::Iter<'a, Article>;

    fn into_iter(self) -> Self::IntoIter {
        self.articles.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Snapshot {
        Snapshot::new(vec![
            Article::new("3", 300),
            Article::new("2", 200),
            Article::new("1", 100),
        ])
    }

    #[test]
    fn test_find() {
        let snapshot = sample();
        assert_eq!(snapshot.find("2").map(|a| a.time_added), Some(200));
        assert!(snapshot.find("9").is_none());
    }

    #[test]
    fn test_random_picks_member() {
        let snapshot = sample();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let picked = snapshot.random(&mut rng).unwrap();
            assert!(snapshot.find(&picked.item_id).is_some());
        }
    }

    #[test]
    fn test_random_on_empty() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(Snapshot::default().random(&mut rng).is_none());
    }

    #[test]
    fn test_serializes_as_array() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["item_id"], "3");
    }
}
