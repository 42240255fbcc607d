//! SQLite schema. Every statement is safe to run against an existing database.

pub const CREATE_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS folders (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT NOT NULL DEFAULT '',
    color TEXT NOT NULL DEFAULT '#3b82f6',
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS templates (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    description TEXT,
    fixed_content TEXT NOT NULL,
    variables TEXT NOT NULL,
    tags TEXT NOT NULL,
    folder_id INTEGER,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS content_info (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL UNIQUE,
    content TEXT NOT NULL,
    category TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    updated_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);

CREATE TABLE IF NOT EXISTS ai_generations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    keyword TEXT NOT NULL,
    generation_type TEXT NOT NULL,
    generated_text TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#;

/// Columns added after the first release of the `templates` table.
pub const TEMPLATE_COLUMN_MIGRATIONS: [&str; 2] = [
    "tags TEXT NOT NULL DEFAULT '{}'",
    "folder_id INTEGER",
];

/// Uniqueness for tables that older databases created without the
/// constraint. On a fresh database these duplicate the column constraint.
pub const UNIQUE_INDEXES: [&str; 1] =
    ["CREATE UNIQUE INDEX IF NOT EXISTS content_info_title ON content_info(title)"];

/// Folders created on an empty database. The first one becomes id 1, the
/// fallback for templates of deleted folders.
pub const DEFAULT_FOLDERS: [(&str, &str, &str); 4] = [
    ("기본", "폴더를 지정하지 않은 템플릿", "#6b7280"),
    ("체크인", "회기 시작 인사와 컨디션 확인", "#3b82f6"),
    ("놀이 활동", "놀이 중 상호작용 스크립트", "#10b981"),
    ("마무리", "회기 정리와 다음 약속", "#f59e0b"),
];
