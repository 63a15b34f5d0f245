use types::{NewProduct, Product, StockStatus, product::CATEGORIES};

use crate::{
    form::{Form, Rule},
    table::{Align, Column, Renderer},
};

pub fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID").sortable().width("80px"),
        Column::new("name", "Product Name").sortable(),
        Column::new("category", "Category").sortable().width("140px"),
        Column::new("price", "Price")
            .sortable()
            .width("120px")
            .align(Align::Right)
            .renderer(Renderer::Currency),
        Column::new("stock", "Stock")
            .sortable()
            .width("100px")
            .align(Align::Center),
        Column::new("status", "Status")
            .sortable()
            .width("120px")
            .renderer(Renderer::Badge),
        Column::new("createdAt", "Created Date")
            .sortable()
            .width("150px")
            .renderer(Renderer::Date),
    ]
}

pub fn create_form() -> Form {
    Form::new()
        .field("name", "", vec![Rule::Required, Rule::MinLength(3)])
        .field("category", CATEGORIES[0], vec![Rule::Required])
        .field("price", "", vec![Rule::Required, Rule::Number])
        .field("stock", "", vec![Rule::Required, Rule::Integer])
}

/// Only meaningful for a valid form; unparsable numbers fall back to zero.
pub fn draft(form: &Form) -> NewProduct {
    let stock = form.value("stock").trim().parse().unwrap_or(0);

    NewProduct {
        name: form.value("name").trim().to_string(),
        category: form.value("category").to_string(),
        price: form.value("price").trim().parse().unwrap_or(0.0),
        stock,
        status: StockStatus::from_stock(stock),
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl StockSummary {
    pub fn of(products: &[Product]) -> Self {
        products
            .iter()
            .fold(Self::default(), |mut summary, product| {
                match product.status {
                    StockStatus::InStock => summary.in_stock += 1,
                    StockStatus::LowStock => summary.low_stock += 1,
                    StockStatus::OutOfStock => summary.out_of_stock += 1,
                    StockStatus::Unknown => {}
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use types::RecordId;

    use super::*;
    use crate::search::filter;

    fn product(id: u64, name: &str, category: &str, price: f64, stock: u32) -> Product {
        Product {
            id: RecordId(id),
            name: name.into(),
            category: category.into(),
            price,
            stock,
            status: StockStatus::from_stock(stock),
            created_at: None,
        }
    }

    fn catalogue() -> Vec<Product> {
        vec![
            product(1, "Laptop Pro 15\"", "Electronics", 1299.99, 45),
            product(2, "Wireless Mouse", "Accessories", 29.99, 120),
            product(3, "USB-C Hub", "Accessories", 59.99, 0),
            product(4, "Monitor 27\"", "Electronics", 399.99, 23),
            product(5, "Keyboard Mechanical", "Accessories", 149.99, 67),
            product(6, "Webcam HD", "Electronics", 79.99, 5),
            product(7, "Desk Lamp LED", "Office", 34.99, 0),
            product(8, "Standing Desk", "Furniture", 599.99, 12),
            product(9, "Office Chair", "Furniture", 299.99, 8),
            product(10, "Headphones Wireless", "Electronics", 199.99, 34),
        ]
    }

    #[test]
    fn summary_counts_each_status() {
        assert_eq!(
            StockSummary::of(&catalogue()),
            StockSummary {
                in_stock: 6,
                low_stock: 2,
                out_of_stock: 2,
            }
        );
    }

    #[test]
    fn out_of_stock_search_over_catalogue() {
        let hits = filter(&catalogue(), "out of stock");
        let ids: Vec<_> = hits.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![3, 7]);
    }

    #[test]
    fn draft_derives_status_from_stock() {
        let mut form = create_form();
        form.set("name", "Desk Mat");
        form.set("price", "19.50");
        form.set("stock", "4");
        assert!(form.is_valid());

        let draft = draft(&form);

        assert_eq!(draft.category, "Electronics");
        assert_eq!(draft.price, 19.5);
        assert_eq!(draft.stock, 4);
        assert_eq!(draft.status, StockStatus::LowStock);
    }

    #[test]
    fn stock_must_be_whole() {
        let mut form = create_form();
        form.set("stock", "2.5");
        assert_eq!(form.errors("stock"), vec!["Please enter a whole number"]);
    }
}
