use std::collections::HashMap;

/// One menu item, keyed by the column names of the sheet's header row.
///
/// The sheet has no fixed schema, so columns are kept as plain strings and a
/// missing column reads as the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: HashMap<String, String>,
}

impl Record {
    /// Build a record by zipping a data row against the header.
    /// Short rows are padded with empty values, extra cells are dropped.
    pub fn from_row(header: &[String], row: &[String]) -> Self {
        let fields = header
            .iter()
            .enumerate()
            .map(|(i, column)| (column.clone(), row.get(i).cloned().unwrap_or_default()))
            .collect();
        Self { fields }
    }

    /// Value of a column, or `""` when the column is absent
    pub fn get(&self, column: &str) -> &str {
        self.fields.get(column).map(String::as_str).unwrap_or("")
    }

    pub fn contains_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn category(&self) -> &str {
        self.get("category")
    }

    pub fn roast(&self) -> &str {
        self.get("roast")
    }

    pub fn is_sold_out(&self) -> bool {
        is_true(self.get("is_sold_out"))
    }

    pub fn is_featured(&self) -> bool {
        is_true(self.get("is_featured"))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn is_true(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

/// Menu tabs. `All` is the distinguished "no category filter" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    All,
    Estate,
    Competition,
    Geisha,
    Limited,
}

impl Category {
    /// Tabs in display order
    pub const ALL: [Category; 5] = [
        Category::All,
        Category::Estate,
        Category::Competition,
        Category::Geisha,
        Category::Limited,
    ];

    /// Key used both as the tab id and as the sheet's `category` value
    pub fn key(&self) -> &'static str {
        match self {
            Category::All => "all",
            Category::Estate => "estate",
            Category::Competition => "competition",
            Category::Geisha => "geisha",
            Category::Limited => "limited",
        }
    }

    pub fn from_key(key: &str) -> Option<Category> {
        let key = key.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key))
    }

    /// Whether a sheet `category` value belongs to this tab
    pub fn matches(&self, value: &str) -> bool {
        match self {
            Category::All => true,
            other => value.to_lowercase() == other.key(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn from_row_pads_short_rows() {
        let header = strings(&["name_en", "price", "roast"]);
        let record = Record::from_row(&header, &strings(&["Geisha"]));

        assert_eq!(record.get("name_en"), "Geisha");
        assert_eq!(record.get("price"), "");
        assert!(record.contains_column("roast"));
    }

    #[test]
    fn from_row_drops_extra_cells() {
        let header = strings(&["name_en"]);
        let record = Record::from_row(&header, &strings(&["Geisha", "300", "Light"]));

        assert_eq!(record.columns().count(), 1);
        assert_eq!(record.get("name_en"), "Geisha");
    }

    #[test]
    fn missing_column_reads_empty() {
        let record = Record::default();
        assert_eq!(record.get("origin"), "");
        assert!(!record.is_sold_out());
        assert!(!record.is_featured());
    }

    #[test]
    fn flags_are_case_insensitive() {
        let record: Record = [("is_sold_out", "TRUE"), ("is_featured", "True")]
            .into_iter()
            .collect();
        assert!(record.is_sold_out());
        assert!(record.is_featured());

        let record: Record = [("is_sold_out", "yes")].into_iter().collect();
        assert!(!record.is_sold_out());
    }

    #[test]
    fn category_parsing_and_matching() {
        assert_eq!(Category::from_key("Geisha"), Some(Category::Geisha));
        assert_eq!(Category::from_key("decaf"), None);
        assert!(Category::Estate.matches("ESTATE"));
        assert!(!Category::Estate.matches("limited"));
        assert!(Category::All.matches(""));
    }
}
