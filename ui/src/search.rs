use std::borrow::Cow;

use types::{Product, User};

/// Text a screen's free-text search looks at.
pub trait Searchable {
    fn search_fields(&self) -> Vec<Cow<'_, str>>;

    /// Case-insensitive substring match on any field. `needle` must already be
    /// lowercase.
    fn matches(&self, needle: &str) -> bool {
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.email.as_str()),
            Cow::Borrowed(self.role.as_str()),
            Cow::Borrowed(self.status.as_str()),
        ]
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<Cow<'_, str>> {
        vec![
            Cow::Borrowed(self.name.as_str()),
            Cow::Borrowed(self.category.as_str()),
            Cow::Borrowed(self.status.as_str()),
            Cow::Owned(self.price.to_string()),
        ]
    }
}

/// Records matching `term`; everything when the term is blank.
pub fn filter<T: Searchable + Clone>(records: &[T], term: &str) -> Vec<T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|record| record.matches(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use types::{RecordId, StockStatus};

    use super::*;

    fn product(id: u64, name: &str, category: &str, price: f64, status: StockStatus) -> Product {
        Product {
            id: RecordId(id),
            name: name.into(),
            category: category.into(),
            price,
            stock: 0,
            status,
            created_at: None,
        }
    }

    fn sample_products() -> Vec<Product> {
        vec![
            product(1, "Laptop Pro 15\"", "Electronics", 1299.99, StockStatus::InStock),
            product(2, "Wireless Mouse", "Accessories", 29.99, StockStatus::InStock),
            product(3, "USB-C Hub", "Accessories", 59.99, StockStatus::OutOfStock),
            product(6, "Webcam HD", "Electronics", 79.99, StockStatus::LowStock),
            product(7, "Desk Lamp LED", "Office", 34.99, StockStatus::OutOfStock),
        ]
    }

    #[test]
    fn status_search_is_case_insensitive() {
        let products = sample_products();

        let hits = filter(&products, "OUT of stock");
        let ids: Vec<_> = hits.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn price_is_searchable_as_text() {
        let hits = filter(&sample_products(), "29.9");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Wireless Mouse");
    }

    #[test]
    fn blank_term_returns_everything() {
        assert_eq!(filter(&sample_products(), "  ").len(), 5);
    }

    #[test]
    fn users_match_on_role() {
        let user = User {
            id: RecordId(4),
            name: "Alice Brown".into(),
            email: "alice@example.com".into(),
            role: "Moderator".into(),
            status: "Active".into(),
            created_at: None,
        };
        assert!(user.matches("moder"));
        assert!(!user.matches("admin"));
    }
}
