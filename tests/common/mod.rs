use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rusqlite::Connection;

/// Lay down a populated profile directory under `root`, shaped like a real
/// Chromium profile: cache directories, the four databases, loose files.
pub fn seed_profile(root: &Path, name: &str) -> PathBuf {
    let profile = root.join(name);

    for dir in ["Cache", "Code Cache", "GPUCache", "Sessions"] {
        let path = profile.join(dir);
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("f_000001"), vec![0xC5u8; 1024]).unwrap();
    }

    seed_history(&profile.join("History"), 10);
    seed_cookies(&profile.join("Cookies"), 5);
    seed_web_data(&profile.join("Web Data"), 4);
    seed_logins(&profile.join("Login Data"), 2);

    for file in [
        "Cookies-journal",
        "Current Session",
        "Preferences",
        "Visited Links",
    ] {
        fs::write(profile.join(file), vec![0x11u8; 256]).unwrap();
    }

    profile
}

pub fn seed_history(path: &Path, rows: usize) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE urls (id INTEGER PRIMARY KEY, url TEXT, title TEXT, visit_count INTEGER DEFAULT 0);
         CREATE TABLE visits (id INTEGER PRIMARY KEY, url INTEGER, visit_time INTEGER);
         CREATE TABLE downloads (id INTEGER PRIMARY KEY, target_path TEXT);",
    )
    .unwrap();
    for i in 0..rows {
        conn.execute(
            "INSERT INTO urls (url, title) VALUES (?1, ?2)",
            (format!("https://example.com/page/{i}"), format!("Page {i}")),
        )
        .unwrap();
        conn.execute(
            "INSERT INTO visits (url, visit_time) VALUES (?1, ?2)",
            (i as i64 + 1, 13_350_000_000_000_000i64 + i as i64),
        )
        .unwrap();
    }
    conn.execute(
        "INSERT INTO downloads (target_path) VALUES ('/home/user/Downloads/setup.bin')",
        [],
    )
    .unwrap();
}

pub fn seed_cookies(path: &Path, rows: usize) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE cookies (creation_utc INTEGER PRIMARY KEY, host_key TEXT, name TEXT, value TEXT);",
    )
    .unwrap();
    for i in 0..rows {
        conn.execute(
            "INSERT INTO cookies (creation_utc, host_key, name, value) VALUES (?1, ?2, ?3, ?4)",
            (
                i as i64 + 1,
                format!(".tracker{i}.example.com"),
                "session_id",
                "abc123",
            ),
        )
        .unwrap();
    }
}

pub fn seed_web_data(path: &Path, rows: usize) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE autofill (name TEXT, value TEXT, count INTEGER DEFAULT 1);
         CREATE TABLE autofill_profiles (guid TEXT PRIMARY KEY, company_name TEXT);",
    )
    .unwrap();
    for i in 0..rows {
        conn.execute(
            "INSERT INTO autofill (name, value) VALUES ('email', ?1)",
            [format!("user{i}@example.com")],
        )
        .unwrap();
    }
    conn.execute(
        "INSERT INTO autofill_profiles (guid, company_name) VALUES ('a-1', 'Example Corp')",
        [],
    )
    .unwrap();
}

pub fn seed_logins(path: &Path, rows: usize) {
    let conn = Connection::open(path).unwrap();
    conn.execute_batch(
        "CREATE TABLE logins (id INTEGER PRIMARY KEY, origin_url TEXT, username_value TEXT, password_value BLOB);",
    )
    .unwrap();
    for i in 0..rows {
        conn.execute(
            "INSERT INTO logins (origin_url, username_value, password_value) VALUES (?1, ?2, ?3)",
            (
                format!("https://site{i}.example.com/login"),
                format!("user{i}"),
                vec![0x42u8; 16],
            ),
        )
        .unwrap();
    }
}

pub fn count_rows(db: &Path, table: &str) -> i64 {
    let conn = Connection::open(db).unwrap();
    let sql = format!("SELECT COUNT(*) FROM {table}");
    conn.query_row(&sql, [], |row| row.get(0)).unwrap()
}

/// Snapshot of every file under a tree, keyed by relative path.
pub fn snapshot(root: &Path) -> BTreeMap<PathBuf, Vec<u8>> {
    let mut files = BTreeMap::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry.unwrap();
        if entry.file_type().is_file() {
            files.insert(
                entry.path().strip_prefix(root).unwrap().to_path_buf(),
                fs::read(entry.path()).unwrap(),
            );
        }
    }
    files
}
