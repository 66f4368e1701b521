use designmap_catalog::ComponentEntity;
use nucleo_matcher::{pattern::Pattern, Matcher};

/// Fuzzy-ranked component search using nucleo-matcher.
///
/// Companion to the exact substring contract of
/// [`DesignRegistry::search_components`](crate::DesignRegistry::search_components):
/// tolerates typos and ranks by relevance instead of filtering.
pub struct ComponentRanker {
    matcher: Matcher,
}

impl ComponentRanker {
    pub fn new() -> Self {
        Self {
            matcher: Matcher::new(nucleo_matcher::Config::DEFAULT),
        }
    }

    /// Rank components by fuzzy match against name, description and
    /// feature tags. Returns (component_index, score) sorted by score
    /// descending, scores normalized to 0-1.
    pub fn rank(
        &mut self,
        query: &str,
        components: &[ComponentEntity],
        limit: usize,
    ) -> Vec<(usize, f32)> {
        let pattern = Pattern::parse(
            query,
            nucleo_matcher::pattern::CaseMatching::Smart,
            nucleo_matcher::pattern::Normalization::Smart,
        );

        let mut scored: Vec<(usize, u32)> = components
            .iter()
            .enumerate()
            .filter_map(|(idx, component)| {
                let name_haystack = nucleo_matcher::Utf32String::from(component.name.as_str());
                let name_score = pattern.score(name_haystack.slice(..), &mut self.matcher);

                let description_haystack =
                    nucleo_matcher::Utf32String::from(component.description.as_str());
                let description_score =
                    pattern.score(description_haystack.slice(..), &mut self.matcher);

                let feature_score = component
                    .features
                    .iter()
                    .filter_map(|feature| {
                        let haystack = nucleo_matcher::Utf32String::from(feature.as_str());
                        pattern.score(haystack.slice(..), &mut self.matcher)
                    })
                    .max();

                // Take best score across the three targets
                let best_score = [name_score, description_score, feature_score]
                    .into_iter()
                    .flatten()
                    .max()?;

                Some((idx, best_score))
            })
            .collect();

        scored.sort_by(|a, b| b.1.cmp(&a.1));
        scored.truncate(limit);

        // Normalize scores to 0-1 range (nucleo scores are u32)
        let max_score = scored.first().map(|(_, s)| *s as f32).unwrap_or(1.0);

        scored
            .into_iter()
            .map(|(idx, score)| {
                let normalized = if max_score > 0.0 {
                    score as f32 / max_score
                } else {
                    0.0
                };
                (idx, normalized)
            })
            .collect()
    }
}

impl Default for ComponentRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl crate::DesignRegistry {
    /// Fuzzy-ranked component search, best matches first with normalized
    /// scores. The substring contract lives in
    /// [`search_components`](crate::DesignRegistry::search_components).
    pub fn rank_components(
        &self,
        query: &str,
        limit: usize,
    ) -> Vec<(designmap_catalog::ComponentEntity, f32)> {
        let components = self.components();
        ComponentRanker::new()
            .rank(query, &components, limit)
            .into_iter()
            .map(|(idx, score)| (components[idx].clone(), score))
            .collect()
    }
}
