pub mod config;
pub mod filters;
pub mod matching;
pub mod ordering;

use tracing::debug;

use crate::content::Discoverable;
use crate::facets::{distinct_tags, facet_counts, FacetCatalog};
use crate::types::discovery::{Discovery, FilterSummary};
use crate::types::facet_state::FacetState;
use crate::types::query::TextQuery;
pub use config::DiscoveryConfig;
pub use filters::{facet_matches, featured};
pub use matching::{SubstringMatcher, TextMatcher};
pub use ordering::sort_by_published;

/// The catalog filter engine.
///
/// Stateless: every call recomputes from the full collection, so repeated
/// calls with the same inputs always agree.
pub struct CatalogFilter<M> {
	config: DiscoveryConfig,
	matcher: M,
}

impl Default for CatalogFilter<SubstringMatcher> {
	fn default() -> Self {
		Self {
			config: DiscoveryConfig::v0(),
			matcher: SubstringMatcher,
		}
	}
}

impl<M> CatalogFilter<M>
where
	M: TextMatcher,
{
	pub fn new(config: DiscoveryConfig, matcher: M) -> Self {
		Self { config, matcher }
	}

	pub fn config(&self) -> &DiscoveryConfig {
		&self.config
	}

	/// Items matching both the text query and the selected facet, in
	/// collection order.
	pub fn filter<'a, T: Discoverable>(
		&self,
		items: &'a [T],
		facets: &FacetCatalog,
		state: &FacetState,
	) -> Vec<&'a T> {
		let query = TextQuery::new(state.query.as_str(), self.config.whitespace);
		let effective = facets.resolve_or_all(&state.selected_facet);
		self.apply(items, &query, effective)
	}

	pub fn discover<'a, T: Discoverable>(
		&self,
		items: &'a [T],
		facets: &FacetCatalog,
		state: &FacetState,
	) -> Discovery<'a, T> {
		let query = TextQuery::new(state.query.as_str(), self.config.whitespace);
		let effective = facets.resolve_or_all(&state.selected_facet);

		let visible = self.apply(items, &query, effective);

		let summary = FilterSummary {
			query: state.query.clone(),
			selected_facet: state.selected_facet.clone(),
			effective_facet: effective.to_string(),
			items_considered: items.len(),
			items_visible: visible.len(),
		};

		debug!(
			query = %summary.query,
			facet = %summary.effective_facet,
			considered = summary.items_considered,
			visible = summary.items_visible,
			"discovery recomputed"
		);

		Discovery {
			visible,
			facet_counts: facet_counts(items, facets),
			distinct_tags: distinct_tags(items),
			summary,
		}
	}

	fn apply<'a, T: Discoverable>(
		&self,
		items: &'a [T],
		query: &TextQuery,
		effective_facet: &str,
	) -> Vec<&'a T> {
		items
			.iter()
			.filter(|item| {
				facet_matches(*item, effective_facet)
					&& self.matcher.matches(&item.searchable_fields(), query)
			})
			.collect()
	}
}

/// `filter` with the default engine.
pub fn filter<'a, T: Discoverable>(
	items: &'a [T],
	facets: &FacetCatalog,
	state: &FacetState,
) -> Vec<&'a T> {
	CatalogFilter::default().filter(items, facets, state)
}
