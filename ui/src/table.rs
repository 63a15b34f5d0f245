//! View state and algorithms behind the data table.
//!
//! The table tracks sort and page bookkeeping only. It never reorders or fetches data:
//! callers sort their own rows (see [`sort_rows`]) and hand the table whatever slice
//! they want windowed.

use std::cmp::Ordering;

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    pub fn class(&self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

/// How a cell turns its value into text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Renderer {
    #[default]
    Text,
    /// Numbers as `$1234.50`.
    Currency,
    /// RFC 3339 timestamps as `YYYY-MM-DD`.
    Date,
    /// Text inside a status pill.
    Badge,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Dotted path into the row, e.g. `address.city`. Unique within a table.
    pub key: String,
    pub label: String,
    pub sortable: bool,
    pub width: Option<String>,
    pub align: Align,
    pub renderer: Renderer,
}

impl Column {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            align: Align::Left,
            renderer: Renderer::Text,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: impl Into<String>) -> Self {
        self.width = Some(width.into());
        self
    }

    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn renderer(mut self, renderer: Renderer) -> Self {
        self.renderer = renderer;
        self
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEvent {
    pub column: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageEvent {
    pub page_index: usize,
    pub page_size: usize,
    pub length: usize,
}

/// Header glyph for a sortable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIcon {
    Neutral,
    Asc,
    Desc,
}

impl SortIcon {
    pub fn class(&self) -> &'static str {
        match self {
            SortIcon::Neutral => "sort-neutral",
            SortIcon::Asc => "sort-asc",
            SortIcon::Desc => "sort-desc",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            SortIcon::Neutral => "↕",
            SortIcon::Asc => "↑",
            SortIcon::Desc => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    pub sort_column: Option<String>,
    pub sort_direction: SortDirection,
    /// Zero-based.
    pub current_page: usize,
    pub page_size: usize,
    pub paginate: bool,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            sort_column: None,
            sort_direction: SortDirection::Asc,
            current_page: 0,
            page_size: DEFAULT_PAGE_SIZE,
            paginate: false,
        }
    }
}

impl TableState {
    pub fn with_pagination(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            paginate: true,
            ..Self::default()
        }
    }

    /// Header click. Returns the sort the caller should apply, or `None` for a
    /// non-sortable column.
    pub fn on_sort(&mut self, column: &Column) -> Option<SortEvent> {
        if !column.sortable {
            return None;
        }

        if self.sort_column.as_deref() == Some(column.key.as_str()) {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_column = Some(column.key.clone());
            self.sort_direction = SortDirection::Asc;
        }

        Some(SortEvent {
            column: column.key.clone(),
            direction: self.sort_direction,
        })
    }

    pub fn sort_icon(&self, column: &Column) -> Option<SortIcon> {
        if !column.sortable {
            return None;
        }
        if self.sort_column.as_deref() != Some(column.key.as_str()) {
            return Some(SortIcon::Neutral);
        }
        Some(match self.sort_direction {
            SortDirection::Asc => SortIcon::Asc,
            SortDirection::Desc => SortIcon::Desc,
        })
    }

    /// Out-of-range indexes land on the last page.
    pub fn on_page_change(&mut self, page_index: usize, length: usize) -> PageEvent {
        self.current_page = page_index.min(self.last_page(length));
        self.page_event(length)
    }

    /// Pulls the current page back inside `length` rows. Returns whether it moved.
    pub fn clamp_page(&mut self, length: usize) -> bool {
        let page = self.page_index(length);
        let moved = page != self.current_page;
        self.current_page = page;
        moved
    }

    /// Changing the page size always goes back to the first page.
    pub fn on_page_size_change(&mut self, page_size: usize, length: usize) -> PageEvent {
        self.page_size = page_size.max(1);
        self.current_page = 0;
        self.page_event(length)
    }

    fn page_event(&self, length: usize) -> PageEvent {
        PageEvent {
            page_index: self.current_page,
            page_size: self.page_size,
            length,
        }
    }

    /// The page actually shown for `length` rows. A page past the end shows the last one.
    pub fn page_index(&self, length: usize) -> usize {
        self.current_page.min(self.last_page(length))
    }

    fn last_page(&self, length: usize) -> usize {
        self.total_pages(length).saturating_sub(1)
    }

    /// The rows to render right now.
    pub fn paginated_data<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        if !self.paginate {
            return data;
        }
        let start = self
            .page_index(data.len())
            .saturating_mul(self.page_size)
            .min(data.len());
        let end = start.saturating_add(self.page_size).min(data.len());
        &data[start..end]
    }

    pub fn total_pages(&self, length: usize) -> usize {
        length.div_ceil(self.page_size.max(1))
    }

    pub fn page_numbers(&self, length: usize) -> std::ops::Range<usize> {
        0..self.total_pages(length)
    }

    /// One-based first and last rows shown, for "Showing x to y of n" footers.
    pub fn range_label(&self, length: usize) -> (usize, usize) {
        if length == 0 {
            return (0, 0);
        }
        let start = self.page_index(length) * self.page_size;
        let end = (start + self.page_size).min(length);
        (start + 1, end)
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last_page(&self, length: usize) -> bool {
        self.page_index(length) + 1 >= self.total_pages(length)
    }
}

/// Walk a dotted path. A missing segment anywhere yields `None`.
pub fn cell_value<'a>(row: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(row, |value, segment| match value {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
        _ => None,
    })
}

fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

/// Total order over cell values: missing/null, then booleans, numbers, strings, and
/// anything else. Values of the same kind compare naturally.
pub fn compare_cells(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(a)), Some(Value::Bool(b))) => a.cmp(b),
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        (Some(Value::String(a)), Some(Value::String(b))) => a.cmp(b),
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

/// Stable sort of `rows` by the cell at `event.column`.
///
/// Rows are compared through their JSON form, so any `Serialize` row type works.
pub fn sort_rows<T: Serialize>(rows: &mut Vec<T>, event: &SortEvent) {
    let mut keyed: Vec<(Value, T)> = rows
        .drain(..)
        .map(|row| (serde_json::to_value(&row).unwrap_or(Value::Null), row))
        .collect();

    // `sort_by` is stable, so equal keys keep their relative order in both directions.
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = compare_cells(cell_value(a, &event.column), cell_value(b, &event.column));
        match event.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    rows.extend(keyed.into_iter().map(|(_, row)| row));
}

/// Text for a cell according to its column's renderer.
pub fn format_cell(value: Option<&Value>, renderer: Renderer) -> String {
    let Some(value) = value else {
        return String::new();
    };

    match (renderer, value) {
        (_, Value::Null) => String::new(),
        (Renderer::Currency, Value::Number(n)) => match n.as_f64() {
            Some(n) => types::product::format_price(n),
            None => n.to_string(),
        },
        (Renderer::Date, Value::String(s)) => s
            .parse::<jiff::Timestamp>()
            .map(|ts| ts.strftime("%Y-%m-%d").to_string())
            .unwrap_or_else(|_| s.clone()),
        (_, Value::String(s)) => s.clone(),
        (_, other) => other.to_string(),
    }
}

/// CSS class for a status pill.
pub fn badge_class(text: &str) -> &'static str {
    match text.to_lowercase().as_str() {
        "active" | "in stock" => "status-success",
        "low stock" | "pending" => "status-warning",
        "inactive" | "out of stock" => "status-danger",
        _ => "status-neutral",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn id_and_name() -> Vec<Column> {
        vec![Column::new("id", "ID"), Column::new("name", "Name").sortable()]
    }

    #[test]
    fn header_click_scenario() {
        let columns = id_and_name();
        let mut state = TableState::default();
        let mut rows = vec![json!({"id": 2, "name": "b"}), json!({"id": 1, "name": "a"})];

        let event = state.on_sort(&columns[1]).unwrap();
        assert_eq!(
            event,
            SortEvent {
                column: "name".into(),
                direction: SortDirection::Asc
            }
        );
        sort_rows(&mut rows, &event);
        assert_eq!(
            rows,
            vec![json!({"id": 1, "name": "a"}), json!({"id": 2, "name": "b"})]
        );

        let event = state.on_sort(&columns[1]).unwrap();
        assert_eq!(event.direction, SortDirection::Desc);
        sort_rows(&mut rows, &event);
        assert_eq!(
            rows,
            vec![json!({"id": 2, "name": "b"}), json!({"id": 1, "name": "a"})]
        );
    }

    #[test]
    fn non_sortable_column_is_ignored() {
        let columns = id_and_name();
        let mut state = TableState::default();

        assert_eq!(state.on_sort(&columns[0]), None);
        assert_eq!(state.sort_column, None);
        assert_eq!(state.sort_icon(&columns[0]), None);
    }

    #[test]
    fn new_column_resets_to_ascending() {
        let name = Column::new("name", "Name").sortable();
        let email = Column::new("email", "Email").sortable();
        let mut state = TableState::default();

        state.on_sort(&name);
        state.on_sort(&name);
        assert_eq!(state.sort_direction, SortDirection::Desc);
        assert_eq!(state.sort_icon(&name), Some(SortIcon::Desc));

        let event = state.on_sort(&email).unwrap();
        assert_eq!(event.direction, SortDirection::Asc);
        assert_eq!(state.sort_icon(&name), Some(SortIcon::Neutral));
        assert_eq!(state.sort_icon(&email), Some(SortIcon::Asc));

        // A third click on the same column comes back to ascending.
        state.on_sort(&email);
        let event = state.on_sort(&email).unwrap();
        assert_eq!(event.direction, SortDirection::Asc);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut rows = vec![
            json!({"id": 1, "role": "User"}),
            json!({"id": 2, "role": "Admin"}),
            json!({"id": 3, "role": "User"}),
            json!({"id": 4, "role": "Admin"}),
        ];
        let by_role = |direction| SortEvent {
            column: "role".into(),
            direction,
        };

        sort_rows(&mut rows, &by_role(SortDirection::Asc));
        let ids: Vec<_> = rows.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);

        sort_rows(&mut rows, &by_role(SortDirection::Desc));
        let ids: Vec<_> = rows.iter().map(|r| r["id"].as_u64().unwrap()).collect();
        assert_eq!(ids, vec![1, 3, 2, 4]);
    }

    #[test]
    fn ascending_sort_is_non_decreasing() {
        let mut rows: Vec<Value> = [5.5, -1.0, 3.0, 3.0, 10.0, 0.25]
            .iter()
            .map(|p| json!({"price": p}))
            .collect();
        sort_rows(
            &mut rows,
            &SortEvent {
                column: "price".into(),
                direction: SortDirection::Asc,
            },
        );

        let prices: Vec<f64> = rows.iter().map(|r| r["price"].as_f64().unwrap()).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]), "{prices:?}");
    }

    #[test]
    fn numbers_sort_numerically_and_missing_first() {
        let mut rows = vec![json!({"n": 10}), json!({}), json!({"n": 9})];
        sort_rows(
            &mut rows,
            &SortEvent {
                column: "n".into(),
                direction: SortDirection::Asc,
            },
        );
        assert_eq!(rows, vec![json!({}), json!({"n": 9}), json!({"n": 10})]);
    }

    #[test]
    fn dotted_path_lookup() {
        let row = json!({"address": {"city": "Oslo"}, "tags": ["a", "b"]});

        assert_eq!(cell_value(&row, "address.city"), Some(&json!("Oslo")));
        assert_eq!(cell_value(&row, "tags.1"), Some(&json!("b")));
        assert_eq!(cell_value(&row, "address.zip"), None);
        assert_eq!(cell_value(&row, "company.name.first"), None);
        assert_eq!(cell_value(&row, "address.city.length"), None);
    }

    #[test]
    fn pages_reconstruct_the_data() {
        for n in [0usize, 1, 9, 10, 11, 25, 53] {
            for size in [1usize, 3, 5, 10, 25, 50] {
                let data: Vec<usize> = (0..n).collect();
                let mut state = TableState::with_pagination(size);

                assert_eq!(state.total_pages(n), n.div_ceil(size));

                let mut rebuilt = Vec::new();
                for page in state.page_numbers(n) {
                    state.on_page_change(page, n);
                    let slice = state.paginated_data(&data);
                    assert!(slice.len() <= size);
                    rebuilt.extend_from_slice(slice);
                }
                assert_eq!(rebuilt, data);
            }
        }
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut state = TableState::with_pagination(10);
        let event = state.on_page_change(3, 45);
        assert_eq!(
            event,
            PageEvent {
                page_index: 3,
                page_size: 10,
                length: 45
            }
        );

        let event = state.on_page_size_change(25, 45);
        assert_eq!(state.current_page, 0);
        assert_eq!(
            event,
            PageEvent {
                page_index: 0,
                page_size: 25,
                length: 45
            }
        );
    }

    #[test]
    fn out_of_range_page_lands_on_last() {
        let data = [1, 2, 3];
        let mut state = TableState::with_pagination(2);
        let event = state.on_page_change(5, data.len());
        assert_eq!(event.page_index, 1);
        assert_eq!(state.paginated_data(&data), &[3]);
    }

    #[test]
    fn shrinking_rows_keep_a_visible_page() {
        let mut state = TableState::with_pagination(10);
        state.on_page_change(2, 25);

        let matches = [1, 2];
        assert_eq!(state.paginated_data(&matches), &[1, 2]);
        assert_eq!(state.range_label(matches.len()), (1, 2));
        assert!(state.is_last_page(matches.len()));

        assert!(state.clamp_page(matches.len()));
        assert_eq!(state.current_page, 0);
        assert!(!state.clamp_page(matches.len()));

        let (first, last) = state.range_label(0);
        assert!(first <= last);
        assert!(state.paginated_data::<i32>(&[]).is_empty());
    }

    #[test]
    fn unpaginated_shows_everything() {
        let data = [1, 2, 3];
        let state = TableState::default();
        assert_eq!(state.paginated_data(&data), &data);
    }

    #[test]
    fn range_label_for_footer() {
        let mut state = TableState::with_pagination(10);
        assert_eq!(state.range_label(0), (0, 0));
        state.on_page_change(2, 25);
        assert_eq!(state.range_label(25), (21, 25));
        assert!(state.is_last_page(25));
    }

    #[test]
    fn formats_by_renderer() {
        assert_eq!(format_cell(Some(&json!(1299.99)), Renderer::Currency), "$1299.99");
        assert_eq!(
            format_cell(Some(&json!("2024-01-15T00:00:00Z")), Renderer::Date),
            "2024-01-15"
        );
        assert_eq!(format_cell(Some(&json!(45)), Renderer::Text), "45");
        assert_eq!(format_cell(None, Renderer::Text), "");
        assert_eq!(badge_class("Out of Stock"), "status-danger");
    }
}
