use std::fs;
use std::process;

use ur2ud_core::settings::{self, SettingsError};
use ur2ud_core::tables::{self, Scheme, TableError, TableSet};

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

pub fn tables_export() {
    print!("{}", tables::default_toml());
}

/// Parse a table asset and build it for every scheme, so overlay and
/// duplicate-key errors surface here rather than at conversion time.
pub fn check_tables(content: &str) -> Result<String, TableError> {
    let source = tables::parse_tables_toml(content)?;
    let mut summary = format!("OK: {} mappings", source.len());
    for scheme in Scheme::ALL {
        let set = TableSet::from_source(&source, scheme, true)?;
        summary.push_str(&format!(
            ", {scheme}: {} consonants / {} vowels / anusvara {:?}",
            set.consonants().count(),
            set.initial_vowels().count(),
            set.anusvara_letter()
        ));
    }
    Ok(summary)
}

pub fn tables_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let summary = die!(check_tables(&content), "Error: {}");
    println!("{summary}");
}

pub fn settings_export() {
    print!("{}", settings::default_toml());
}

pub fn check_settings(content: &str) -> Result<String, SettingsError> {
    let s = settings::parse_settings_toml(content)?;
    let tables = s
        .tables
        .path
        .as_ref()
        .map_or_else(|| "built-in".to_string(), |p| p.display().to_string());
    Ok(format!(
        "OK: engine.scheme={}, engine.accented_vowels={}, tables.path={}",
        s.engine.scheme, s.engine.accented_vowels, tables
    ))
}

pub fn settings_validate(file: &str) {
    let content = die!(fs::read_to_string(file), "Error reading {file}: {}");
    let summary = die!(check_settings(&content), "Error: {}");
    println!("{summary}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_check() {
        let summary = check_tables(tables::default_toml()).unwrap();
        assert!(summary.starts_with("OK: "));
        assert!(summary.contains("iso15919: 45 consonants"));
        assert!(summary.contains("anusvara '\u{1E41}'"));
        assert!(summary.contains("anusvara '\u{1E43}'"));
    }

    #[test]
    fn tables_check_reports_bad_key() {
        let err = check_tables("[consonants]\nK = [0x0915]\n").unwrap_err();
        assert!(matches!(err, TableError::UppercaseKey { .. }));
        assert!(err.to_string().contains("\"K\""));
    }

    #[test]
    fn tables_check_builds_iast_overlay() {
        let toml = r#"
[consonants]
k = [0x0915]

[diacritics]
"\u1E41" = [0x0902]

[iast.remove]
consonants = ["g"]
"#;
        let err = check_tables(toml).unwrap_err();
        assert!(matches!(
            err,
            TableError::UnknownKey {
                scheme: Scheme::Iast,
                ..
            }
        ));
    }

    #[test]
    fn builtin_settings_check() {
        let summary = check_settings(settings::default_toml()).unwrap();
        assert_eq!(
            summary,
            "OK: engine.scheme=iso15919, engine.accented_vowels=true, tables.path=built-in"
        );
    }

    #[test]
    fn settings_check_reports_parse_error() {
        let err = check_settings("[engine]\nscheme = 7\n").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn validate_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.toml");
        fs::write(&path, "[engine]\nscheme = \"iast\"\n").unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(check_settings(&content)
            .unwrap()
            .contains("engine.scheme=iast"));
    }
}
