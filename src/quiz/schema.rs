//! The candy database the built-in questions are written against.
//!
//! Nothing here executes SQL; this is reference data the view layer shows
//! players so they know which tables and columns exist.

use serde::Serialize;

use self::Value::{Integer as I, Text as T};

/// Column SQL type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SqlType {
    Integer,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub sql_type: SqlType,
    pub primary_key: bool,
    /// `(table, column)` this column references.
    pub references: Option<(&'static str, &'static str)>,
}

impl Column {
    const fn integer(name: &'static str) -> Self {
        Self {
            name,
            sql_type: SqlType::Integer,
            primary_key: false,
            references: None,
        }
    }

    const fn text(name: &'static str) -> Self {
        Self {
            name,
            sql_type: SqlType::Text,
            primary_key: false,
            references: None,
        }
    }

    const fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    const fn references(mut self, table: &'static str, column: &'static str) -> Self {
        self.references = Some((table, column));
        self
    }
}

/// A cell in a seed row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Text(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub rows: &'static [&'static [Value]],
}

impl Table {
    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|c| c.name)
    }
}

pub const CANDY_SHOPS: Table = Table {
    name: "candy_shops",
    columns: &[
        Column::integer("id").primary_key(),
        Column::text("name"),
        Column::text("location"),
        Column::integer("rating"),
    ],
    rows: &[
        &[I(1), T("Sweet Haven"), T("Candyland"), I(5)],
        &[I(2), T("Lollipop Palace"), T("Sugar Hills"), I(4)],
        &[I(3), T("Chocolate Kingdom"), T("Cocoa Valley"), I(5)],
        &[I(4), T("Gummy Wonderland"), T("Jelly Isles"), I(3)],
    ],
};

pub const CANDY_INGREDIENTS: Table = Table {
    name: "candy_ingredients",
    columns: &[
        Column::integer("id").primary_key(),
        Column::text("name"),
        Column::text("rarity"),
        Column::integer("shop_id").references("candy_shops", "id"),
    ],
    rows: &[
        &[I(1), T("Rainbow Sugar"), T("Rare"), I(1)],
        &[I(2), T("Golden Caramel"), T("Epic"), I(2)],
        &[I(3), T("Mystic Cocoa"), T("Legendary"), I(3)],
        &[I(4), T("Glowing Gummy Gel"), T("Rare"), I(4)],
    ],
};

/// Every table in the candy database.
pub const CANDY_TABLES: [Table; 2] = [CANDY_SHOPS, CANDY_INGREDIENTS];

/// Player-facing listing of tables and their columns.
#[must_use]
pub fn describe_schema() -> String {
    let mut out = String::from("Tables:");
    for (i, table) in CANDY_TABLES.iter().enumerate() {
        let columns: Vec<_> = table.column_names().collect();
        out.push_str(&format!("\n{}. {} - {}", i + 1, table.name, columns.join(", ")));
    }
    out
}
