use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process;

use ur2ud_core::settings::{parse_settings_toml, Settings, SettingsError};
use ur2ud_core::tables::{builtin_source, parse_tables_toml, Scheme, TableError};
use ur2ud_core::Transliterator;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("cannot read {}: {source}", .path.display())]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("{}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        source: SettingsError,
    },
    #[error("{}: {source}", .path.display())]
    Tables { path: PathBuf, source: TableError },
    #[error("{0}")]
    Build(#[from] TableError),
    #[error("input is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Where the engine's configuration comes from.
#[derive(Debug, Default, Clone)]
pub struct ConvertOptions {
    /// Force IAST regardless of the settings file.
    pub iast: bool,
    pub config: Option<PathBuf>,
    /// Table asset; takes precedence over `tables.path` in the settings.
    pub tables: Option<PathBuf>,
}

fn read_file(path: &Path) -> Result<String, ConvertError> {
    fs::read_to_string(path).map_err(|source| ConvertError::ReadFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Settings from `config`, or the embedded defaults.
///
/// A relative `tables.path` is resolved against the settings file's
/// directory.
pub fn load_settings(config: Option<&Path>) -> Result<Settings, ConvertError> {
    let Some(path) = config else {
        return Ok(Settings::default());
    };
    let mut settings =
        parse_settings_toml(&read_file(path)?).map_err(|source| ConvertError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
    if let (Some(tables), Some(dir)) = (settings.tables.path.as_mut(), path.parent()) {
        if tables.is_relative() {
            *tables = dir.join(&*tables);
        }
    }
    Ok(settings)
}

/// Build the engine described by `opts`.
pub fn build_engine(opts: &ConvertOptions) -> Result<Transliterator, ConvertError> {
    let mut settings = load_settings(opts.config.as_deref())?;
    if opts.iast {
        settings.engine.scheme = Scheme::Iast;
    }

    let tables_path = opts.tables.as_deref().or(settings.tables.path.as_deref());
    let custom;
    let source = match tables_path {
        Some(path) => {
            custom = parse_tables_toml(&read_file(path)?).map_err(|source| {
                ConvertError::Tables {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
            &custom
        }
        None => builtin_source(),
    };

    let engine = Transliterator::from_settings(source, &settings)?;
    tracing::debug!(
        scheme = %engine.scheme(),
        accented_vowels = settings.engine.accented_vowels,
        tables = ?tables_path,
        "engine ready"
    );
    Ok(engine)
}

/// Convert everything `input` yields and write it to `output`.
///
/// The whole input is read first: a consonant at the very end of the text
/// still needs its closing virama.
pub fn convert_stream<R: Read, W: Write>(
    engine: &Transliterator,
    mut input: R,
    mut output: W,
) -> Result<(), ConvertError> {
    let mut bytes = Vec::new();
    input.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes)?;
    let converted = engine.transliterate(&text);
    tracing::debug!(
        chars_in = text.chars().count(),
        chars_out = converted.chars().count(),
        "converted"
    );
    output.write_all(converted.as_bytes())?;
    output.flush()?;
    Ok(())
}

/// Default action: stdin → Devanagari → stdout.
pub fn convert_stdin(opts: &ConvertOptions) {
    let engine = die!(build_engine(opts), "Error: {}");
    let stdin = io::stdin();
    let stdout = io::stdout();
    die!(
        convert_stream(&engine, stdin.lock(), stdout.lock()),
        "Error: {}"
    );
}
