//! SQL DDL for the download client table (SQLite).

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT (surrogate identity)
/// - `name` UNIQUE, the natural key behind `ON CONFLICT DO NOTHING` inserts
/// - `enabled` / `ssl` BOOLEAN (stored as INTEGER 0/1)
/// - `settings` JSON serialized as text; '' or NULL means no settings
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS client (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    type TEXT NOT NULL,
    enabled BOOLEAN NOT NULL DEFAULT 1,
    host TEXT NOT NULL,
    port INTEGER NOT NULL DEFAULT 0,
    ssl BOOLEAN NOT NULL DEFAULT 0,
    username TEXT NOT NULL DEFAULT '',
    password TEXT NOT NULL DEFAULT '',
    settings TEXT NULL
);
"#;
