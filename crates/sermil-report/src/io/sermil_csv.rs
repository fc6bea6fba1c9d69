//! SERMIL `sermil<year>.csv` reader.
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::ops::RangeInclusive;
use std::path::PathBuf;

use csv::{ByteRecord, ReaderBuilder};
use serde::{Deserialize, Serialize};

/// One enlisted person in one yearly dump, restricted to the columns the
/// report needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SermilRecord {
    pub state_code: String,
    pub exemption_flag: String,
    pub enrollment_year: Option<i32>,
}

/// All records read from a single year's file, in file order.
#[derive(Debug, Clone)]
pub struct YearTable {
    pub year: i32,
    pub records: Vec<SermilRecord>,
}

/// Configuration for reading SERMIL CSV files.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SermilReaderConfig {
    /// Column holding the UF of the enlistment board.
    pub state_column: String,
    /// Column holding "Com dispensa" / "Sem dispensa".
    pub exemption_column: String,
    /// Column holding the enrollment year.
    pub year_column: String,
    pub delimiter: char,
}

impl SermilReaderConfig {
    /// The delimiter as a byte, if it is a single ASCII character.
    pub fn delimiter_byte(&self) -> Option<u8> {
        u8::try_from(self.delimiter).ok().filter(u8::is_ascii)
    }
}

impl Default for SermilReaderConfig {
    fn default() -> Self {
        Self {
            state_column: "UF_JSM".to_string(),
            exemption_column: "DISPENSA".to_string(),
            year_column: "VINCULACAO_ANO".to_string(),
            delimiter: ',',
        }
    }
}

/// Why a single year's file could not be read.
#[derive(Debug)]
pub enum LoadErrorKind {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingColumn(String),
    InvalidDelimiter(char),
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadErrorKind::Io(e) => write!(f, "{}", e),
            LoadErrorKind::Csv(e) => write!(f, "{}", e),
            LoadErrorKind::MissingColumn(name) => {
                write!(f, "Column expected but not found: '{}'", name)
            }
            LoadErrorKind::InvalidDelimiter(c) => {
                write!(f, "CSV delimiter must be a single ASCII character: {:?}", c)
            }
        }
    }
}

impl From<std::io::Error> for LoadErrorKind {
    fn from(e: std::io::Error) -> Self {
        LoadErrorKind::Io(e)
    }
}

impl From<csv::Error> for LoadErrorKind {
    fn from(e: csv::Error) -> Self {
        LoadErrorKind::Csv(e)
    }
}

/// A failed year. Its `Display` is the diagnostic line shown to the user.
#[derive(Debug)]
pub struct LoadError {
    pub year: i32,
    pub path: PathBuf,
    pub kind: LoadErrorKind,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.kind {
            LoadErrorKind::Io(e) => write!(
                f,
                "Erro de leitura no database do ano {}: {}: '{}'",
                self.year,
                e,
                self.path.display()
            ),
            kind => write!(f, "Erro de leitura no database do ano {}: {}", self.year, kind),
        }
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self.kind {
            LoadErrorKind::Io(e) => Some(e),
            LoadErrorKind::Csv(e) => Some(e),
            LoadErrorKind::MissingColumn(_) | LoadErrorKind::InvalidDelimiter(_) => None,
        }
    }
}

/// Path of the dump for `year`. The prefix is concatenated as-is, so it must
/// carry its own trailing separator when it names a directory.
pub fn year_file_path(path_prefix: &str, year: i32) -> PathBuf {
    PathBuf::from(format!("{}sermil{}.csv", path_prefix, year))
}

/// Read SERMIL records from any Latin-1 encoded CSV source.
pub fn read_sermil_csv<R: Read>(
    source: R,
    config: &SermilReaderConfig,
) -> Result<Vec<SermilRecord>, LoadErrorKind> {
    let delimiter = config
        .delimiter_byte()
        .ok_or(LoadErrorKind::InvalidDelimiter(config.delimiter))?;
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(source);

    let headers = reader.byte_headers()?.clone();
    let state_idx = find_column(&headers, &config.state_column)?;
    let exemption_idx = find_column(&headers, &config.exemption_column)?;
    let year_idx = find_column(&headers, &config.year_column)?;

    let mut records = Vec::new();
    let mut row = ByteRecord::new();
    while reader.read_byte_record(&mut row)? {
        let field = |idx: usize| row.get(idx).map(decode_latin1).unwrap_or_default();
        records.push(SermilRecord {
            state_code: field(state_idx),
            exemption_flag: field(exemption_idx),
            enrollment_year: field(year_idx).trim().parse::<i32>().ok(),
        });
    }

    Ok(records)
}

/// Load the dump for a single year.
pub fn load_year(
    path_prefix: &str,
    year: i32,
    config: &SermilReaderConfig,
) -> Result<YearTable, LoadError> {
    let path = year_file_path(path_prefix, year);
    let records = File::open(&path)
        .map_err(LoadErrorKind::from)
        .and_then(|file| read_sermil_csv(BufReader::new(file), config));

    match records {
        Ok(records) => {
            log::info!(
                "[SERMIL::Report] Loaded {} records for {} from {}",
                records.len(),
                year,
                path.display()
            );
            Ok(YearTable { year, records })
        }
        Err(kind) => Err(LoadError { year, path, kind }),
    }
}

/// Load every year in `years`, stopping at the first year that fails.
pub fn load_years(
    path_prefix: &str,
    years: RangeInclusive<i32>,
    config: &SermilReaderConfig,
) -> Result<Vec<YearTable>, LoadError> {
    years
        .map(|year| load_year(path_prefix, year, config))
        .collect()
}

fn find_column(headers: &ByteRecord, name: &str) -> Result<usize, LoadErrorKind> {
    headers
        .iter()
        .position(|header| decode_latin1(header).trim() == name)
        .ok_or_else(|| LoadErrorKind::MissingColumn(name.to_string()))
}

/// Latin-1 maps every byte to the code point of the same value.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
