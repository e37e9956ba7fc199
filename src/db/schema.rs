pub const SCHEMA: &str = r#"
-- todo table
CREATE TABLE IF NOT EXISTS todo (
    id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
    description TEXT NOT NULL,
    completed BOOLEAN NOT NULL DEFAULT (0),
    date_created TEXT NOT NULL,
    date_completed TEXT
);
"#;
