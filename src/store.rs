use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, StoreError};
use crate::model::{AttendanceRecord, Direction, Employee, EmployeeId, Timestamp};

const END_MARKER: &str = "END";

/// Flat-file copy of the roster.
///
/// Each employee is stored as a header line `<id> <name> <designation>
/// <department>`, one `IN <ts>` / `OUT <ts>` line per record and a closing
/// `END` line.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Reads every employee from the store. A missing file is a first run:
    /// an empty file is created and an empty roster returned.
    pub fn load(&self) -> Result<Vec<Employee>> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let employees = decode(&contents)?;
                info!(
                    path = %self.path.display(),
                    employees = employees.len(),
                    "Store loaded"
                );
                Ok(employees)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.bootstrap()?;
                Ok(Vec::new())
            }
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Replaces the whole store with `employees`.
    pub fn save(&self, employees: &[Employee]) -> Result<()> {
        fs::write(&self.path, encode(employees)).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            path = %self.path.display(),
            employees = employees.len(),
            "Store saved"
        );
        Ok(())
    }

    fn bootstrap(&self) -> Result<()> {
        File::create(&self.path).map_err(|source| StoreError::Bootstrap {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "Created empty store");
        Ok(())
    }
}

pub fn encode(employees: &[Employee]) -> String {
    let mut out = String::new();
    for emp in employees {
        out.push_str(&format!(
            "{} {} {} {}\n",
            emp.id, emp.name, emp.designation, emp.department
        ));
        for record in emp.records() {
            out.push_str(&format!("{} {}\n", record.direction, record.timestamp));
        }
        out.push_str(END_MARKER);
        out.push('\n');
    }
    out
}

/// Parses store contents. Any line that does not fit the format rejects the
/// whole input; blank lines between employee blocks are skipped.
pub fn decode(contents: &str) -> Result<Vec<Employee>> {
    let mut employees = Vec::new();
    let mut current: Option<Employee> = None;
    let mut last_line = 0;

    for (idx, raw) in contents.lines().enumerate() {
        let line = idx + 1;
        last_line = line;
        let tokens: Vec<&str> = raw.split_whitespace().collect();

        match current.take() {
            None if tokens.is_empty() => {}
            None => current = Some(parse_header(&tokens, line)?),
            Some(emp) if tokens == [END_MARKER] => employees.push(emp),
            Some(mut emp) => {
                emp.push_record(parse_record(&tokens, line)?);
                current = Some(emp);
            }
        }
    }

    if let Some(emp) = current {
        return Err(malformed(
            last_line,
            format!("block for employee {} is missing its END line", emp.id),
        ));
    }

    Ok(employees)
}

fn parse_header(tokens: &[&str], line: usize) -> Result<Employee> {
    let [id, name, designation, department] = tokens else {
        return Err(malformed(
            line,
            format!("expected 4 header fields, found {}", tokens.len()),
        ));
    };
    let id = id
        .parse::<EmployeeId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| malformed(line, format!("invalid employee id {id:?}")))?;

    Ok(Employee::new(id, *name, *designation, *department))
}

fn parse_record(tokens: &[&str], line: usize) -> Result<AttendanceRecord> {
    let [direction, timestamp] = tokens else {
        return Err(malformed(
            line,
            format!("expected IN|OUT and a timestamp, found {} fields", tokens.len()),
        ));
    };
    let direction = direction
        .parse::<Direction>()
        .map_err(|_| malformed(line, format!("unknown record type {direction:?}")))?;
    let timestamp = timestamp
        .parse::<Timestamp>()
        .map_err(|_| malformed(line, format!("invalid timestamp {timestamp:?}")))?;

    Ok(AttendanceRecord {
        timestamp,
        direction,
    })
}

fn malformed(line: usize, reason: String) -> StoreError {
    StoreError::Malformed { line, reason }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};
    use tempfile::TempDir;

    #[fixture]
    fn workdir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    fn sample_roster() -> Vec<Employee> {
        let mut alice = Employee::new(1, "Alice", "Engineer", "R&D");
        alice.add_clock_in(1_700_000_000);
        alice.add_clock_out(1_700_018_000);
        alice.add_clock_in(1_700_086_400);

        let bob = Employee::new(2, "Bob", "Manager", "Sales");

        let mut carol = Employee::new(3, "Carol", "Analyst", "Finance");
        carol.add_clock_out(-5);
        carol.add_clock_in(0);
        carol.add_clock_in(42);

        vec![alice, bob, carol]
    }

    #[test]
    fn encode_writes_documented_layout() {
        let mut emp = Employee::new(7, "Dana", "Lead", "Ops");
        emp.add_clock_in(100);
        emp.add_clock_out(200);

        assert_eq!(
            encode(&[emp, Employee::new(8, "Eve", "Intern", "Ops")]),
            "7 Dana Lead Ops\nIN 100\nOUT 200\nEND\n8 Eve Intern Ops\nEND\n"
        );
    }

    #[rstest]
    fn save_then_load_round_trips(workdir: TempDir) {
        let store = FileStore::new(workdir.path().join("employees.txt"));
        let roster = sample_roster();

        store.save(&roster).unwrap();

        assert_eq!(store.load().unwrap(), roster);
    }

    #[rstest]
    fn save_overwrites_previous_contents(workdir: TempDir) {
        let store = FileStore::new(workdir.path().join("employees.txt"));
        store.save(&sample_roster()).unwrap();

        let smaller = vec![Employee::new(1, "Solo", "Dev", "Ops")];
        store.save(&smaller).unwrap();

        assert_eq!(store.load().unwrap(), smaller);
        assert_eq!(
            fs::read_to_string(store.path()).unwrap(),
            "1 Solo Dev Ops\nEND\n"
        );
    }

    #[rstest]
    fn missing_store_is_created_empty(workdir: TempDir) {
        let store = FileStore::new(workdir.path().join("employees.txt"));
        assert!(!store.exists());

        let employees = store.load().unwrap();

        assert!(employees.is_empty());
        assert!(store.exists());
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "");
    }

    #[rstest]
    fn bootstrap_failure_is_reported(workdir: TempDir) {
        let store = FileStore::new(workdir.path().join("no-such-dir").join("employees.txt"));

        let err = store.load().unwrap_err();

        assert!(matches!(err, StoreError::Bootstrap { .. }));
    }

    #[rstest]
    fn save_to_unwritable_path_fails(workdir: TempDir) {
        // A directory cannot be opened for writing.
        let store = FileStore::new(workdir.path());

        let err = store.save(&sample_roster()).unwrap_err();

        assert!(matches!(err, StoreError::Io { .. }));
    }

    #[test]
    fn duplicate_ids_are_accepted() {
        let employees = decode("3 a x y\nEND\n3 b x y\nIN 5\nEND\n").unwrap();

        assert_eq!(employees.len(), 2);
        assert_eq!(employees[0].id, 3);
        assert_eq!(employees[1].id, 3);
        assert_eq!(employees[1].records().len(), 1);
    }

    #[test]
    fn blank_lines_between_blocks_are_skipped() {
        let employees = decode("\n1 a x y\nIN 5\nEND\n\n  \n2 b x y\nEND\n\n").unwrap();

        assert_eq!(employees.len(), 2);
    }

    #[test]
    fn empty_input_decodes_to_empty_roster() {
        assert!(decode("").unwrap().is_empty());
    }

    #[rstest]
    #[case::short_header("1 Alice Engineer\nEND\n", 1)]
    #[case::long_header("1 Alice Engineer R&D extra\nEND\n", 1)]
    #[case::zero_id("0 Alice Engineer R&D\nEND\n", 1)]
    #[case::text_id("one Alice Engineer R&D\nEND\n", 1)]
    #[case::unknown_direction("1 a x y\nLUNCH 100\nEND\n", 2)]
    #[case::lowercase_direction("1 a x y\nin 100\nEND\n", 2)]
    #[case::bad_timestamp("1 a x y\nIN soon\nEND\n", 2)]
    #[case::missing_timestamp("1 a x y\nOUT\nEND\n", 2)]
    #[case::blank_inside_block("1 a x y\nIN 1\n\nEND\n", 3)]
    #[case::missing_end("1 a x y\nIN 1\n2 b x y\n", 3)]
    #[case::unterminated("1 a x y\nIN 1\n", 2)]
    fn malformed_input_is_rejected(#[case] contents: &str, #[case] expected_line: usize) {
        match decode(contents) {
            Err(StoreError::Malformed { line, .. }) => assert_eq!(line, expected_line),
            other => panic!("expected malformed error, got {other:?}"),
        }
    }

    #[rstest]
    fn load_rejects_malformed_file(workdir: TempDir) {
        let path = workdir.path().join("employees.txt");
        fs::write(&path, "1 a x y\nIN nope\nEND\n").unwrap();

        let err = FileStore::new(&path).load().unwrap_err();

        assert!(matches!(err, StoreError::Malformed { line: 2, .. }));
    }
}
