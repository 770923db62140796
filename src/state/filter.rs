//! Client-side filter and sort pipeline for the product grid
//!
//! The pipeline is a pure function from (products, category, search term,
//! sort key) to an ordered view over the fetched products. It never mutates
//! or clones product records.

use std::cmp::Ordering;
use std::fmt;

use feruca::Collator;

use super::data::Product;

/// Category selection in the sidebar
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// "All Products"
    #[default]
    All,
    /// Only products of this exact category
    Only(String),
}

impl CategoryFilter {
    /// Check whether a product category passes this filter
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Ordering applied to the filtered products
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Catalog fetch order
    #[default]
    Relevance,
    PriceAsc,
    PriceDesc,
    NameAsc,
    NameDesc,
}

impl SortKey {
    /// Every sort key in menu order
    pub const ALL: [SortKey; 5] = [
        SortKey::Relevance,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::NameAsc,
        SortKey::NameDesc,
    ];

    /// Stable identifier used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
        }
    }

    /// Compare two products under this key; `Equal` keeps fetch order.
    /// Names use Unicode collation with the CLDR root tailoring: accents and
    /// case only break ties between equal letters, lowercase first.
    fn compare(&self, collator: &mut Collator, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Relevance => Ordering::Equal,
            SortKey::PriceAsc => a.price.total_cmp(&b.price),
            SortKey::PriceDesc => b.price.total_cmp(&a.price),
            SortKey::NameAsc => collator.collate(a.title.as_str(), b.title.as_str()),
            SortKey::NameDesc => collator.collate(b.title.as_str(), a.title.as_str()),
        }
    }
}

/// Menu label shown in the sort pick list
impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SortKey::Relevance => "Relevance",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::NameAsc => "Name: A to Z",
            SortKey::NameDesc => "Name: Z to A",
        };
        f.write_str(label)
    }
}

/// Run the pipeline and return the derived view
///
/// A product is kept iff its category passes `category` and its title,
/// lowercased, contains the lowercased and trimmed `term`. The survivors are
/// stable-sorted by `sort`, so ties keep the catalog's fetch order.
pub fn apply<'a>(
    products: &'a [Product],
    category: &CategoryFilter,
    term: &str,
    sort: SortKey,
) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();

    let mut view: Vec<&Product> = products
        .iter()
        .filter(|product| category.matches(&product.category))
        .filter(|product| product.title.to_lowercase().contains(&needle))
        .collect();

    // one collator per sort; sort_by is stable
    let mut collator = Collator::default();
    view.sort_by(|a, b| sort.compare(&mut collator, a, b));
    view
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u32, title: &str, price: f64, category: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            price,
            description: String::new(),
            category: category.to_string(),
            image: String::new(),
            rating: None,
        }
    }

    fn sample() -> Vec<Product> {
        vec![
            product(1, "Shirt", 20.0, "men"),
            product(2, "Shoe", 50.0, "men"),
            product(3, "Bag", 30.0, "women"),
        ]
    }

    fn collate(a: &str, b: &str) -> Ordering {
        Collator::default().collate(a, b)
    }

    fn titles(view: &[&Product]) -> Vec<String> {
        view.iter().map(|p| p.title.clone()).collect()
    }

    #[test]
    fn test_category_search_and_price_sort() {
        let products = sample();
        let view = apply(
            &products,
            &CategoryFilter::Only("men".to_string()),
            "sh",
            SortKey::PriceAsc,
        );

        assert_eq!(titles(&view), vec!["Shirt", "Shoe"]);
    }

    #[test]
    fn test_all_with_empty_term_is_identity() {
        let products = sample();
        let view = apply(&products, &CategoryFilter::All, "", SortKey::Relevance);

        let ids: Vec<u32> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filtered_products_satisfy_both_criteria() {
        let products = vec![
            product(1, "Slim Fit T-Shirt", 22.3, "men's clothing"),
            product(2, "Rain Jacket", 39.99, "women's clothing"),
            product(3, "SHIRT dress", 12.0, "women's clothing"),
            product(4, "Gold Ring", 168.0, "jewelery"),
            product(5, "Cotton shirt", 15.99, "women's clothing"),
        ];
        let category = CategoryFilter::Only("women's clothing".to_string());

        for key in SortKey::ALL {
            let view = apply(&products, &category, "Shirt", key);
            assert_eq!(view.len(), 2);
            for p in view {
                assert_eq!(p.category, "women's clothing");
                assert!(p.title.to_lowercase().contains("shirt"));
            }
        }
    }

    #[test]
    fn test_search_term_is_trimmed_and_case_folded() {
        let products = sample();
        let view = apply(&products, &CategoryFilter::All, "  BAG ", SortKey::Relevance);

        assert_eq!(titles(&view), vec!["Bag"]);
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let products = sample();
        let view = apply(&products, &CategoryFilter::All, "laptop", SortKey::NameAsc);

        assert!(view.is_empty());
    }

    #[test]
    fn test_unknown_category_filters_everything() {
        let products = sample();
        let view = apply(
            &products,
            &CategoryFilter::Only("electronics".to_string()),
            "",
            SortKey::Relevance,
        );

        assert!(view.is_empty());
    }

    #[test]
    fn test_price_desc() {
        let products = sample();
        let view = apply(&products, &CategoryFilter::All, "", SortKey::PriceDesc);

        assert_eq!(titles(&view), vec!["Shoe", "Bag", "Shirt"]);
    }

    #[test]
    fn test_name_sorts_ignore_case() {
        let products = vec![
            product(1, "banana", 1.0, "x"),
            product(2, "Apple", 1.0, "x"),
            product(3, "cherry", 1.0, "x"),
        ];

        let asc = apply(&products, &CategoryFilter::All, "", SortKey::NameAsc);
        assert_eq!(titles(&asc), vec!["Apple", "banana", "cherry"]);

        let desc = apply(&products, &CategoryFilter::All, "", SortKey::NameDesc);
        assert_eq!(titles(&desc), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_ties_keep_fetch_order() {
        let products = vec![
            product(1, "A", 10.0, "x"),
            product(2, "B", 5.0, "x"),
            product(3, "C", 10.0, "x"),
            product(4, "D", 5.0, "x"),
        ];

        let view = apply(&products, &CategoryFilter::All, "", SortKey::PriceAsc);
        let ids: Vec<u32> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        let view = apply(&products, &CategoryFilter::All, "", SortKey::PriceDesc);
        let ids: Vec<u32> = view.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let products = vec![
            product(1, "Backpack", 109.95, "men's clothing"),
            product(2, "t-shirt", 22.3, "men's clothing"),
            product(3, "Jacket", 55.99, "men's clothing"),
            product(4, "Bracelet", 695.0, "jewelery"),
            product(5, "backpack", 22.3, "jewelery"),
        ];

        for key in SortKey::ALL {
            let once: Vec<Product> = apply(&products, &CategoryFilter::All, "", key)
                .into_iter()
                .cloned()
                .collect();
            let twice: Vec<Product> = apply(&once, &CategoryFilter::All, "", key)
                .into_iter()
                .cloned()
                .collect();
            assert_eq!(once, twice, "sort {} is not idempotent", key.as_str());
        }
    }

    #[test]
    fn test_collate_lowercase_first_on_ties() {
        assert_eq!(collate("apple", "Apple"), Ordering::Less);
        assert_eq!(collate("Apple", "banana"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_accented_titles_sort_next_to_base_letter() {
        let products = vec![
            product(1, "Zebra", 1.0, "x"),
            product(2, "fig", 1.0, "x"),
            product(3, "Émile", 1.0, "x"),
            product(4, "apple", 1.0, "x"),
            product(5, "éclair", 1.0, "x"),
        ];

        let asc = apply(&products, &CategoryFilter::All, "", SortKey::NameAsc);
        assert_eq!(titles(&asc), vec!["apple", "éclair", "Émile", "fig", "Zebra"]);

        let desc = apply(&products, &CategoryFilter::All, "", SortKey::NameDesc);
        assert_eq!(titles(&desc), vec!["Zebra", "fig", "Émile", "éclair", "apple"]);

        assert_eq!(collate("éclair", "fig"), Ordering::Less);
        assert_eq!(collate("Zebra", "Émile"), Ordering::Greater);
    }

    #[test]
    fn test_sort_key_labels() {
        assert_eq!(SortKey::default(), SortKey::Relevance);
        assert_eq!(SortKey::PriceAsc.to_string(), "Price: Low to High");
        assert_eq!(SortKey::NameDesc.as_str(), "name-desc");
    }
}
