//! Parsers for catalog files.
//!
//! Two shapes are accepted:
//! - movies.csv: header row with `movieId,title,genres` (extra columns ignored)
//! - movies.dat: MovieLens style `movieId::title::genres`, Latin-1 encoded
//!
//! In both, genres are pipe-separated: "Animation|Children's|Comedy"

use crate::error::{CatalogError, Result};
use crate::types::MovieRecord;
use rayon::prelude::*;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One row of movies.csv. Columns are matched by header name.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "movieId")]
    movie_id: String,
    #[serde(default)]
    title: String,
    #[serde(default)]
    genres: String,
}

/// Parse a movies.csv file
pub fn parse_csv(path: &Path) -> Result<Vec<MovieRecord>> {
    let file = File::open(path)?;
    parse_csv_reader(file, &file_label(path))
}

/// Parse CSV catalog data from any reader
///
/// `file` is only used to label errors.
pub fn parse_csv_reader<R: Read>(reader: R, file: &str) -> Result<Vec<MovieRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut movies = Vec::new();
    for (idx, row) in reader.deserialize::<CsvRow>().enumerate() {
        // Header is line 1
        let line_no = idx + 2;
        let row = row?;
        if row.movie_id.is_empty() {
            return Err(CatalogError::ParseError {
                file: file.to_string(),
                line: line_no,
                reason: "Missing movieId".to_string(),
            });
        }
        movies.push(MovieRecord::new(row.movie_id, row.title, &row.genres));
    }
    Ok(movies)
}

/// Helper function to read a file with ISO-8859-1 encoding (Latin-1)
///
/// Each byte maps directly to the Unicode code point of the same value.
fn read_lines_latin1(path: &Path) -> Result<Vec<String>> {
    let mut file = File::open(path)?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)?;

    let content: String = bytes.iter().map(|&b| b as char).collect();

    Ok(content.lines().map(|s| s.to_string()).collect())
}

/// Parse a movies.dat file
pub fn parse_dat(path: &Path) -> Result<Vec<MovieRecord>> {
    let lines = read_lines_latin1(path)?;
    parse_dat_lines(&lines, &file_label(path))
}

/// Parse `id::title::genres` lines.
///
/// Lines are parsed in parallel; the output keeps input order.
pub fn parse_dat_lines(lines: &[String], file: &str) -> Result<Vec<MovieRecord>> {
    let parsed: Vec<Option<MovieRecord>> = lines
        .par_iter()
        .enumerate()
        .map(|(idx, line)| parse_dat_line(line, idx + 1, file))
        .collect::<Result<_>>()?;

    Ok(parsed.into_iter().flatten().collect())
}

/// Returns `Ok(None)` for blank lines
fn parse_dat_line(line: &str, line_no: usize, file: &str) -> Result<Option<MovieRecord>> {
    let line_trimmed = line.trim();
    if line_trimmed.is_empty() {
        return Ok(None);
    }

    let missing = |field: &str| CatalogError::ParseError {
        file: file.to_string(),
        line: line_no,
        reason: format!("Missing {}", field),
    };

    // Titles never contain "::", genres might be absent entirely
    let mut parts = line_trimmed.splitn(3, "::");
    let movie_id = parts.next().map(str::trim).filter(|s| !s.is_empty()).ok_or_else(|| missing("movieId"))?;
    let title = parts.next().ok_or_else(|| missing("title"))?;
    let genres = parts.next().unwrap_or("");

    Ok(Some(MovieRecord::new(movie_id, title.trim(), genres)))
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_csv_with_quoted_titles_and_extra_columns() {
        let data = "movieId,title,genres,overview\n\
                    19995,Avatar,Action|Adventure|Sci-Fi,blue people\n\
                    2,\"Crouching Tiger, Hidden Dragon\",Action|Drama,\n\
                    3,Untitled,,\n";

        let movies = parse_csv_reader(data.as_bytes(), "movies.csv").unwrap();

        assert_eq!(movies.len(), 3);
        assert_eq!(movies[0].id, "19995");
        assert_eq!(movies[0].genres, vec!["Action", "Adventure", "Sci-Fi"]);
        assert_eq!(movies[1].title, "Crouching Tiger, Hidden Dragon");
        assert!(movies[2].genres.is_empty());
    }

    #[test]
    fn test_parse_csv_missing_genres_column() {
        let data = "movieId,title\n1,Solo\n";
        let movies = parse_csv_reader(data.as_bytes(), "movies.csv").unwrap();
        assert_eq!(movies.len(), 1);
        assert!(movies[0].genres.is_empty());
    }

    #[test]
    fn test_parse_csv_blank_id_is_an_error() {
        let data = "movieId,title,genres\n1,Ok,Drama\n,Broken,Drama\n";
        let err = parse_csv_reader(data.as_bytes(), "movies.csv").unwrap_err();
        assert!(matches!(err, CatalogError::ParseError { line: 3, .. }));
    }

    #[test]
    fn test_parse_dat_lines() {
        let lines: Vec<String> = vec![
            "1::Toy Story (1995)::Animation|Children's|Comedy".to_string(),
            "".to_string(),
            "2::Jumanji (1995)".to_string(),
        ];

        let movies = parse_dat_lines(&lines, "movies.dat").unwrap();

        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Toy Story (1995)");
        assert_eq!(movies[0].primary_genre(), Some("Animation"));
        assert_eq!(movies[1].id, "2");
        assert!(movies[1].genres.is_empty());
    }

    #[test]
    fn test_parse_dat_missing_title() {
        let lines = vec!["42".to_string()];
        let err = parse_dat_lines(&lines, "movies.dat").unwrap_err();
        match err {
            CatalogError::ParseError { line, reason, .. } => {
                assert_eq!(line, 1);
                assert_eq!(reason, "Missing title");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
