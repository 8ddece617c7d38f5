//! SQLite repository for Products
//!
//! Mutations run in a scoped transaction that commits on success; an early
//! return drops the transaction, which rolls back. Reads run as single
//! statements on a shared connection reference.

#![allow(clippy::result_large_err)]

use crate::errors::{from_rusqlite, Result};
use prodcat_core::errors::DataValidationError;
use prodcat_core::product::price_text;
use prodcat_core::{Category, Product};
use rusqlite::{Connection, OptionalExtension, Row};
use rust_decimal::Decimal;

/// Field-to-column mapping; the one SELECT list used by every read
const PRODUCT_COLUMNS: &str = "id, name, description, price, available, category";

/// SQLite repository for Products
pub struct ProductRepo;

impl ProductRepo {
    /// Create a Product in the database and assign its id
    ///
    /// The id is assigned by the store exactly once; the rowid is written
    /// back into `product.id` after the transaction commits.
    ///
    /// # Arguments
    /// * `conn` - Database connection
    /// * `product` - Product to persist; `id` must be unset
    ///
    /// # Errors
    /// - `InvalidName` if the name is empty or whitespace-only
    /// - `AlreadyPersisted` if the Product already carries an id
    pub fn create(conn: &mut Connection, product: &mut Product) -> Result<()> {
        product.validate()?;
        if let Some(id) = product.id {
            return Err(DataValidationError::AlreadyPersisted { id });
        }

        tracing::debug!(name = %product.name, "Creating product");

        let tx = conn.transaction().map_err(from_rusqlite)?;

        tx.execute(
            "INSERT INTO products (name, description, price, available, category)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                product.name,
                product.description,
                price_text(&product.price),
                if product.available { 1 } else { 0 },
                product.category.as_str(),
            ],
        )
        .map_err(from_rusqlite)?;

        let id = tx.last_insert_rowid();

        tx.commit().map_err(from_rusqlite)?;

        product.id = Some(id);

        Ok(())
    }

    /// Update a Product's row to match its current field values
    ///
    /// A vanished row is not an error; the in-memory object may be stale
    /// after an external delete.
    ///
    /// # Arguments
    /// * `conn` - Database connection
    /// * `product` - Product whose current state should be persisted
    ///
    /// # Errors
    /// - `MissingId` if the Product has no assigned id
    /// - `InvalidName` if the name is empty or whitespace-only
    pub fn update(conn: &mut Connection, product: &Product) -> Result<()> {
        let id = product
            .id
            .ok_or(DataValidationError::MissingId { op: "Update" })?;
        product.validate()?;

        tracing::debug!(id = id, name = %product.name, "Updating product");

        let tx = conn.transaction().map_err(from_rusqlite)?;

        tx.execute(
            "UPDATE products
             SET name = ?1, description = ?2, price = ?3, available = ?4, category = ?5
             WHERE id = ?6",
            rusqlite::params![
                product.name,
                product.description,
                price_text(&product.price),
                if product.available { 1 } else { 0 },
                product.category.as_str(),
                id,
            ],
        )
        .map_err(from_rusqlite)?;

        tx.commit().map_err(from_rusqlite)?;

        Ok(())
    }

    /// Delete a Product's row from the database
    ///
    /// # Errors
    /// - `MissingId` if the Product has no assigned id
    pub fn delete(conn: &mut Connection, product: &Product) -> Result<()> {
        let id = product
            .id
            .ok_or(DataValidationError::MissingId { op: "Delete" })?;

        tracing::debug!(id = id, name = %product.name, "Deleting product");

        let tx = conn.transaction().map_err(from_rusqlite)?;

        tx.execute("DELETE FROM products WHERE id = ?1", [id])
            .map_err(from_rusqlite)?;

        tx.commit().map_err(from_rusqlite)?;

        Ok(())
    }

    /// List all Products, ordered by id
    pub fn all(conn: &Connection) -> Result<Vec<Product>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"))
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map([], row_to_product)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }

    /// Find a Product by id
    ///
    /// Absence is a normal outcome, not an error.
    pub fn find(conn: &Connection, id: i64) -> Result<Option<Product>> {
        let mut stmt = conn
            .prepare(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?1"))
            .map_err(from_rusqlite)?;

        let product = stmt
            .query_row([id], row_to_product)
            .optional()
            .map_err(from_rusqlite)?;

        Ok(product)
    }

    /// Find all Products with the given name
    pub fn find_by_name(conn: &Connection, name: &str) -> Result<Vec<Product>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM products WHERE name = ?1 ORDER BY id"
            ))
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map([name], row_to_product)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }

    /// Find all Products with the given availability
    pub fn find_by_availability(conn: &Connection, available: bool) -> Result<Vec<Product>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM products WHERE available = ?1 ORDER BY id"
            ))
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map([if available { 1 } else { 0 }], row_to_product)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }

    /// Find all Products in the given category
    pub fn find_by_category(conn: &Connection, category: Category) -> Result<Vec<Product>> {
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM products WHERE category = ?1 ORDER BY id"
            ))
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map([category.as_str()], row_to_product)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }

    /// Find all Products whose category matches the given enumeration name
    ///
    /// # Errors
    /// - `UnknownCategory` if the name is not a member of the closed set
    pub fn find_by_category_name(conn: &Connection, name: &str) -> Result<Vec<Product>> {
        let category: Category = name.parse()?;
        Self::find_by_category(conn, category)
    }

    /// Find all Products with the given price
    ///
    /// Prices match by decimal value: `12.50` and `12.5` select the same rows.
    pub fn find_by_price(conn: &Connection, price: Decimal) -> Result<Vec<Product>> {
        let needle = price_text(&price);

        let mut stmt = conn
            .prepare(&format!(
                "SELECT {PRODUCT_COLUMNS} FROM products WHERE price = ?1 ORDER BY id"
            ))
            .map_err(from_rusqlite)?;

        let products = stmt
            .query_map([needle], row_to_product)
            .map_err(from_rusqlite)?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(from_rusqlite)?;

        Ok(products)
    }

    /// Find all Products matching a price given as text
    ///
    /// Surrounding whitespace and double quotes are stripped before parsing,
    /// so `" \"12.50\" "` and `"\t12.50\n"` match the same rows as `12.5`.
    ///
    /// # Errors
    /// - `InvalidPrice` if the remaining text is not a decimal
    pub fn find_by_price_text(conn: &Connection, text: &str) -> Result<Vec<Product>> {
        let trimmed = text.trim_matches(|c: char| c.is_whitespace() || c == '"');
        let price: Decimal = trimmed
            .parse()
            .map_err(|_| DataValidationError::InvalidPrice {
                text: text.to_string(),
            })?;

        Self::find_by_price(conn, price)
    }
}

/// Convert a database row into a Product
///
/// Price and category are parsed back through the domain types; a corrupted
/// row surfaces as a conversion failure rather than a silent default.
fn row_to_product(row: &Row<'_>) -> rusqlite::Result<Product> {
    let id: i64 = row.get(0)?;
    let name: String = row.get(1)?;
    let description: String = row.get(2)?;
    let price_str: String = row.get(3)?;
    let available: i32 = row.get(4)?;
    let category_str: String = row.get(5)?;

    let price: Decimal = price_str.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    let category: Category = category_str.parse().map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
    })?;

    let mut product = Product::new(name, description, price, available != 0, category);
    product.id = Some(id);

    Ok(product)
}
