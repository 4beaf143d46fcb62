//! # Article Catalog
//!
//! The static reference list of article definitions. Immutable for the
//! process lifetime; every derived view resolves display names and units
//! through it.
//!
//! ## Resolution Rules
//! - `ArticleRef::Custom(name)` resolves to that name with the default
//!   unit - custom items always win over catalog data.
//! - `ArticleRef::Catalog(id)` resolves through the catalog; an id the
//!   catalog doesn't know yields `None`. Aggregations skip such records,
//!   display contexts show [`UNKNOWN_ARTICLE_NAME`]. Never a panic.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Article, ArticleCategory, ArticleRef};

/// Display fallback for records referencing an id missing from the catalog.
pub const UNKNOWN_ARTICLE_NAME: &str = "Unknown Article";

/// Unit assumed for custom items (the factory counts one-offs in pieces).
pub const DEFAULT_CUSTOM_UNIT: &str = "pcs";

// =============================================================================
// Resolved Article
// =============================================================================

/// Display data for an [`ArticleRef`], resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ResolvedArticle {
    pub name: String,
    pub unit: String,
    pub category: ArticleCategory,
}

// =============================================================================
// Catalog
// =============================================================================

/// The article catalog: read-only shared reference data.
#[derive(Debug, Clone)]
pub struct Catalog {
    articles: Vec<Article>,
}

impl Catalog {
    /// Creates a catalog from an explicit article list (tests, future
    /// per-tenant catalogs).
    pub fn new(articles: Vec<Article>) -> Self {
        Catalog { articles }
    }

    /// All articles, in catalog order.
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Looks up an article by its catalog id.
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Resolves a reference to its display data.
    ///
    /// Returns `None` for a catalog id the catalog doesn't know - callers
    /// in aggregation paths skip those records, display paths fall back to
    /// [`Catalog::display_name`].
    pub fn resolve(&self, article: &ArticleRef) -> Option<ResolvedArticle> {
        match article {
            ArticleRef::Custom(name) => Some(ResolvedArticle {
                name: name.clone(),
                unit: DEFAULT_CUSTOM_UNIT.to_string(),
                category: ArticleCategory::Other,
            }),
            ArticleRef::Catalog(id) => self.get(id).map(|a| ResolvedArticle {
                name: a.name.clone(),
                unit: a.unit.clone(),
                category: a.category,
            }),
        }
    }

    /// Display name with the unknown-article fallback, for contexts that
    /// must render something.
    pub fn display_name(&self, article: &ArticleRef) -> String {
        self.resolve(article)
            .map(|r| r.name)
            .unwrap_or_else(|| UNKNOWN_ARTICLE_NAME.to_string())
    }
}

/// The factory's standard catalog.
impl Default for Catalog {
    fn default() -> Self {
        fn article(id: &str, name: &str, unit: &str, category: ArticleCategory) -> Article {
            Article {
                id: id.to_string(),
                name: name.to_string(),
                unit: unit.to_string(),
                category,
            }
        }
        use ArticleCategory::{Floor, Imported, Material, Roof};

        Catalog::new(vec![
            // Prepared articles (roof)
            article("k6", "Kari 6 feet", "pcs", Roof),
            article("k55", "Kari 5.5 Feet", "pcs", Roof),
            article("k5", "Kari 5 Feet", "pcs", Roof),
            article("rt", "Roof Tiles", "pcs", Roof),
            article("ex", "Exaust", "pcs", Roof),
            article("kf", "Khaprail Foot", "pcs", Roof),
            article("k6i", "Khaprail 6 inch", "pcs", Roof),
            // Floor
            article("ft-12", "Floor Tile 12x12", "pcs", Floor),
            article("ft-24", "Floor Tile 24x24", "pcs", Floor),
            article("pc-blk", "Paver Block", "pcs", Floor),
            // Prepared articles (material/general)
            article("st", "Stove", "pcs", Material),
            article("pl", "Piller", "pcs", Material),
            article("ps", "Piller stand", "pcs", Material),
            article("j25", "Jali 2.5x2.5", "pcs", Material),
            article("j225", "Jali 2x2.5", "pcs", Material),
            article("j22", "Jali 2x2", "pcs", Material),
            article("j152", "Jali 1.5x2", "pcs", Material),
            article("j1515", "Jali 1.5x1.5", "pcs", Material),
            article("j115", "Jali 1x1.5", "pcs", Material),
            article("j1f", "Jali 1 feet", "pcs", Material),
            article("j6i", "Jali 6 inch", "pcs", Material),
            article("j4i", "Jali 4 inch", "pcs", Material),
            article("mg", "Mogha", "pcs", Material),
            article("nk", "Naka", "pcs", Material),
            // Imported items (from other factories)
            article("imp-gs", "Gas Stove (Imported)", "pcs", Imported),
            article("imp-cp", "Concrete Pipe (External)", "pcs", Imported),
            article("imp-bf", "Brick Facade (Premium)", "pcs", Imported),
            // Raw materials for purchases
            article("cmt", "Portland Cement", "bags", Material),
            article("snd", "Fine Sand", "cum", Material),
            article("agg", "Crushed Stone (Aggregates)", "cum", Material),
        ])
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_lookup() {
        let catalog = Catalog::default();

        let kari = catalog.get("k6").unwrap();
        assert_eq!(kari.name, "Kari 6 feet");
        assert_eq!(kari.unit, "pcs");
        assert_eq!(kari.category, ArticleCategory::Roof);

        let cement = catalog.get("cmt").unwrap();
        assert_eq!(cement.unit, "bags");
    }

    #[test]
    fn test_resolve_custom_wins() {
        let catalog = Catalog::default();
        let resolved = catalog.resolve(&ArticleRef::custom("Garden Bench")).unwrap();
        assert_eq!(resolved.name, "Garden Bench");
        assert_eq!(resolved.unit, DEFAULT_CUSTOM_UNIT);
        assert_eq!(resolved.category, ArticleCategory::Other);
    }

    #[test]
    fn test_unknown_id_resolves_none_with_display_fallback() {
        let catalog = Catalog::default();
        let ghost = ArticleRef::catalog("does-not-exist");

        assert!(catalog.resolve(&ghost).is_none());
        assert_eq!(catalog.display_name(&ghost), UNKNOWN_ARTICLE_NAME);
    }
}
