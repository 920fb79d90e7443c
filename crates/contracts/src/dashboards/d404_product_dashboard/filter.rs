use super::dataset::{Category, Product};
use serde::{Deserialize, Serialize};

/// Value of the "all categories" option in the category select
pub const ALL_CATEGORIES_VALUE: &str = "all";

/// Category selector of the inventory table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// Option value used by the select element
    pub fn as_value(&self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_VALUE,
            CategoryFilter::Only(c) => c.display_name(),
        }
    }

    /// Unknown values fall back to `All`.
    pub fn from_value(value: &str) -> Self {
        Category::from_display_name(value)
            .map(CategoryFilter::Only)
            .unwrap_or(CategoryFilter::All)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.display_name(),
        }
    }
}

/// Case-insensitive name match combined with the category selector.
/// Keeps the input order.
pub fn filter_products<'a>(
    products: &'a [Product],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a Product> {
    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|p| filter.matches(p.category) && p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Byte ranges of `query` matches inside `text`, case-insensitive.
///
/// Matching runs on lowercased characters, each remembering the byte span
/// of the character it came from, so every range starts and ends on a
/// char boundary of `text` even when lowercasing changes byte lengths.
/// A match that starts or ends inside the expansion of one character
/// (e.g. the `i̇` of `İ`) is skipped.
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Vec::new();
    }

    // (lowercased char, byte start of source char, byte end of source char)
    let folded: Vec<(char, usize, usize)> = text
        .char_indices()
        .flat_map(|(start, c)| {
            let end = start + c.len_utf8();
            c.to_lowercase().map(move |lc| (lc, start, end))
        })
        .collect();

    let mut ranges = Vec::new();
    let mut i = 0;
    while i + needle.len() <= folded.len() {
        let last = i + needle.len() - 1;
        let starts_on_char = i == 0 || folded[i - 1].1 != folded[i].1;
        let ends_on_char = last + 1 == folded.len() || folded[last + 1].1 != folded[last].1;
        let hit = folded[i..=last]
            .iter()
            .zip(&needle)
            .all(|((c, _, _), n)| c == n);

        if hit && starts_on_char && ends_on_char {
            ranges.push((folded[i].1, folded[last].2));
            i = last + 1;
        } else {
            i += 1;
        }
    }
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d404_product_dashboard::dataset::Dataset;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_all_and_empty_query_returns_everything_in_order() {
        let dataset = Dataset::sample().unwrap();
        let result = filter_products(&dataset.products, "", CategoryFilter::All);
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let dataset = Dataset::sample().unwrap();
        let result = filter_products(&dataset.products, "WIRELESS", CategoryFilter::All);
        assert_eq!(ids(&result), vec![1, 7]);
    }

    #[test]
    fn test_query_and_category_combine() {
        let dataset = Dataset::sample().unwrap();
        let result = filter_products(
            &dataset.products,
            "a",
            CategoryFilter::Only(Category::Accessories),
        );
        assert_eq!(ids(&result), vec![3, 4, 5]);

        let result = filter_products(
            &dataset.products,
            "lamp",
            CategoryFilter::Only(Category::Electronics),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_without_products_yields_nothing() {
        let dataset = Dataset::sample().unwrap();
        let result = filter_products(
            &dataset.products,
            "",
            CategoryFilter::Only(Category::Fashion),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let dataset = Dataset::sample().unwrap();
        let queries = ["", "w", "pro", "USB", "zzz", " "];
        let mut filters = vec![CategoryFilter::All];
        filters.extend(Category::all().into_iter().map(CategoryFilter::Only));

        for query in queries {
            for filter in &filters {
                let once: Vec<Product> = filter_products(&dataset.products, query, *filter)
                    .into_iter()
                    .cloned()
                    .collect();
                let twice = filter_products(&once, query, *filter);
                assert_eq!(ids(&twice), once.iter().map(|p| p.id).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_filter_value_round_trip() {
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_value("Home & Living"),
            CategoryFilter::Only(Category::HomeAndLiving)
        );
        assert_eq!(CategoryFilter::from_value("bogus"), CategoryFilter::All);
        for category in Category::all() {
            let filter = CategoryFilter::Only(category);
            assert_eq!(CategoryFilter::from_value(filter.as_value()), filter);
        }
    }

    #[test]
    fn test_match_ranges() {
        assert_eq!(match_ranges("Wireless Mouse", "s"), vec![(6, 7), (7, 8), (12, 13)]);
        assert_eq!(match_ranges("Smart Watch Pro", "PRO"), vec![(12, 15)]);
        assert!(match_ranges("Desk Lamp LED", "").is_empty());
        assert!(match_ranges("Desk Lamp LED", "mouse").is_empty());
    }

    #[test]
    fn test_match_ranges_stay_on_char_boundaries() {
        // 'Ⱥ' grows and 'ẞ' shrinks when lowercased, total length unchanged
        let name = "Ⱥẞ Lamp";
        assert_eq!(match_ranges(name, "ß"), vec![(2, 5)]);
        assert_eq!(match_ranges(name, "LAMP"), vec![(6, 10)]);
        assert_eq!(match_ranges(name, "ⱥ"), vec![(0, 2)]);

        for query in ["ß", "ⱥß", " l", "p", "ẞ LAMP"] {
            for (start, end) in match_ranges(name, query) {
                assert!(name.is_char_boundary(start) && name.is_char_boundary(end));
                assert_eq!(name[start..end].to_lowercase(), query.to_lowercase());
            }
        }
    }

    #[test]
    fn test_match_ranges_skip_partial_expansions() {
        // 'İ' lowercases to two chars; matching only the dot is not a range
        assert!(match_ranges("İstanbul Rug", "\u{307}").is_empty());
        assert_eq!(match_ranges("İstanbul Rug", "i\u{307}s"), vec![(0, 3)]);
    }
}
