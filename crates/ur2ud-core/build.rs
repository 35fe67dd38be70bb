fn main() {
    // The embedded assets are parsed with expect at runtime; reject bad ones here.
    validate_toml(
        "src/default_settings.toml",
        include_str!("src/default_settings.toml"),
        &["engine"],
    );
    validate_toml(
        "src/tables/default_tables.toml",
        include_str!("src/tables/default_tables.toml"),
        &["consonants", "initial_vowels", "combining_vowels", "diacritics"],
    );
}

fn validate_toml(path: &str, content: &str, required: &[&str]) {
    let table = match toml::from_str::<toml::Table>(content) {
        Ok(table) => table,
        Err(e) => panic!("{path} contains invalid TOML: {e}"),
    };
    for section in required {
        if !table.get(*section).is_some_and(toml::Value::is_table) {
            panic!("{path} is missing the [{section}] table");
        }
    }
}
