use crate::Mechanism::errors::MechError;
use crate::Mechanism::line_tokenizer::MechanismLine;
use log::{error, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// mechanism file split into its header line and reaction lines
#[derive(Debug, Clone, PartialEq)]
pub struct MechanismSource {
    pub file_name: String,
    pub header: String,
    pub lines: Vec<String>,
}

impl MechanismSource {
    pub fn from_text(file_name: &str, text: &str) -> Result<Self, MechError> {
        let mut lines = text.lines();
        let header = match lines.next() {
            Some(header) => header.to_string(),
            None => return Err(MechError::EmptyMechanism(file_name.to_string())),
        };
        Ok(Self {
            file_name: file_name.to_string(),
            header,
            lines: lines.map(|l| l.to_string()).collect(),
        })
    }

    /// Tokenizes every reaction line. Stops at the first malformed line so that
    /// nothing is written for a broken file.
    pub fn parse_lines(&self) -> Result<Vec<MechanismLine>, MechError> {
        let mut parsed = Vec::with_capacity(self.lines.len());
        for (i, raw) in self.lines.iter().enumerate() {
            // header is line 1
            match MechanismLine::parse(raw, i + 2) {
                Ok(line) => parsed.push(line),
                Err(e) => {
                    error!("Error parsing '{}': {}", self.file_name, e);
                    return Err(e);
                }
            }
        }
        Ok(parsed)
    }
}

/// reads a mechanism file
pub fn load_mechanism(path: &Path) -> Result<MechanismSource, MechError> {
    if !path.exists() {
        return Err(MechError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File '{}' does not exist", path.display()),
        )));
    }
    info!("Reading file: {}", path.display());
    let text = fs::read_to_string(path)?;
    MechanismSource::from_text(&path.display().to_string(), &text)
}

/// Writes a whole document through a temporary file in the target directory,
/// the destination is replaced only once everything is written.
pub fn write_document(path: &Path, contents: &str) -> Result<(), MechError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let mut temp_file = NamedTempFile::new_in(dir)?;
    temp_file.write_all(contents.as_bytes())?;
    temp_file.flush()?;
    temp_file.persist(path).map_err(|e| MechError::Io(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_load_mechanism() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "#EQUATIONS").unwrap();
        writeln!(temp_file, "1 NO2 + hv -> NO + O : TJPL(1.40D-2,TEMP) ;").unwrap();
        writeln!(temp_file, "2 O + O2 + M -> O3 + M : 6.0E-34 ;").unwrap();

        let source = load_mechanism(temp_file.path()).unwrap();
        assert_eq!(source.header, "#EQUATIONS");
        assert_eq!(source.lines.len(), 2);

        let lines = source.parse_lines().unwrap();
        assert_eq!(lines[0].line_no, 2);
        assert_eq!(lines[1].line_no, 3);
        assert_eq!(lines[1].rate, "6.0E-34");
    }

    #[test]
    fn test_load_mechanism_file_not_found() {
        let result = load_mechanism(Path::new("non_existent_file.eqn"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_empty_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let result = load_mechanism(temp_file.path());
        assert!(matches!(result, Err(MechError::EmptyMechanism(_))));
    }

    #[test]
    fn test_header_only() {
        let source = MechanismSource::from_text("m.eqn", "header\n").unwrap();
        assert!(source.lines.is_empty());
        assert!(source.parse_lines().unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_reports_file_line() {
        let source =
            MechanismSource::from_text("m.eqn", "header\n1 A -> B : 1.0 ;\n2 B -> C 1.0 ;\n")
                .unwrap();
        match source.parse_lines() {
            Err(MechError::MalformedLine { line, content, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "2 B -> C 1.0 ;");
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_write_document_replaces_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rf_test.eqn");
        fs::write(&path, "old content").unwrap();
        write_document(&path, "new content\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content\n");
        // only the destination is left in the directory
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
