//! Ledger file format.
//!
//! One record per line, no header, no quoting:
//!
//! ```text
//! id,name,base_salary,attendance_days,leave_days
//! ```

use std::io::{self, Write};
use std::str::FromStr;

use crate::error::{LedgerError, LedgerResult};
use crate::models::EmployeeRecord;

/// Field layout of a ledger line, used in error messages.
pub const LEDGER_LINE_SHAPE: &str = "id,name,baseSalary,attendanceDays,leaveDays";

const LEDGER_FIELD_COUNT: usize = 5;

/// Parses one ledger line.
///
/// `line_number` is 1-based and only used to build the `Format` error.
/// Every problem with the line, including an unusable name or days over the
/// ceiling, is reported as `Format`.
///
/// # Examples
///
/// ```
/// use attendance_ledger::codec::parse_record;
///
/// let record = parse_record(1, "7,Ana,440000,20,0").unwrap();
/// assert_eq!(record.id(), 7);
/// assert_eq!(record.base_salary(), 440_000);
///
/// assert!(parse_record(2, "7,Ana,440000").is_err());
/// ```
pub fn parse_record(line_number: usize, line: &str) -> LedgerResult<EmployeeRecord> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != LEDGER_FIELD_COUNT {
        return Err(format_error(
            line_number,
            line,
            format!(
                "expected {} fields ({}), found {}",
                LEDGER_FIELD_COUNT,
                LEDGER_LINE_SHAPE,
                fields.len()
            ),
        ));
    }

    let id: i64 = parse_field(line_number, line, fields[0], "id")?;
    let base_salary: u64 = parse_field(line_number, line, fields[2], "baseSalary")?;
    let attendance_days: u32 = parse_field(line_number, line, fields[3], "attendanceDays")?;
    let leave_days: u32 = parse_field(line_number, line, fields[4], "leaveDays")?;

    EmployeeRecord::new(id, fields[1], base_salary, attendance_days, leave_days)
        .map_err(|err| format_error(line_number, line, err.to_string()))
}

/// Renders a record as a ledger line, without the trailing newline.
///
/// `total_pay` is derived and never written to the ledger file.
pub fn format_record(record: &EmployeeRecord) -> String {
    format!(
        "{},{},{},{},{}",
        record.id(),
        record.name(),
        record.base_salary(),
        record.attendance_days(),
        record.leave_days()
    )
}

/// Writes records as newline-terminated ledger lines.
pub fn write_ledger<'a, W, I>(writer: &mut W, records: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a EmployeeRecord>,
{
    for record in records {
        writeln!(writer, "{}", format_record(record))?;
    }
    Ok(())
}

pub(crate) fn format_error(line_number: usize, line: &str, message: String) -> LedgerError {
    LedgerError::Format {
        line: line_number,
        content: line.to_string(),
        message,
    }
}

fn parse_field<T>(line_number: usize, line: &str, raw: &str, field: &str) -> LedgerResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.parse::<T>().map_err(|err| {
        format_error(
            line_number,
            line,
            format!("field '{}' has invalid value '{}': {}", field, raw, err),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_format_error(result: LedgerResult<EmployeeRecord>, expected_line: usize, needle: &str) {
        match result.unwrap_err() {
            LedgerError::Format {
                line,
                content: _,
                message,
            } => {
                assert_eq!(line, expected_line);
                assert!(
                    message.contains(needle),
                    "expected '{}' in '{}'",
                    needle,
                    message
                );
            }
            other => panic!("Expected Format, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_well_formed_line() {
        let record = parse_record(1, "1,Ana,440000,20,0").unwrap();
        assert_eq!(record.id(), 1);
        assert_eq!(record.name(), "Ana");
        assert_eq!(record.base_salary(), 440_000);
        assert_eq!(record.attendance_days(), 20);
        assert_eq!(record.leave_days(), 0);
        assert_eq!(record.total_pay(), 0);
    }

    #[test]
    fn test_parse_keeps_spaces_in_name() {
        let record = parse_record(1, "2,Budi Santoso,300000,0,0").unwrap();
        assert_eq!(record.name(), "Budi Santoso");
    }

    #[test]
    fn test_too_few_fields() {
        assert_format_error(parse_record(4, "1,Ana,440000,20"), 4, "found 4");
    }

    #[test]
    fn test_too_many_fields_from_comma_in_name() {
        assert_format_error(parse_record(2, "1,Doe, Jane,440000,20,0"), 2, "found 6");
    }

    #[test]
    fn test_non_numeric_salary() {
        assert_format_error(parse_record(3, "1,Ana,lots,20,0"), 3, "baseSalary");
    }

    #[test]
    fn test_negative_attendance_rejected() {
        assert_format_error(parse_record(1, "1,Ana,440000,-1,0"), 1, "attendanceDays");
    }

    #[test]
    fn test_padded_number_rejected() {
        assert_format_error(parse_record(1, " 1,Ana,440000,0,0"), 1, "id");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert_format_error(parse_record(5, "1,,440000,0,0"), 5, "name");
    }

    #[test]
    fn test_days_over_ceiling_rejected() {
        assert_format_error(parse_record(1, "1,Ana,440000,20,5"), 1, "ceiling");
    }

    #[test]
    fn test_salary_over_maximum_rejected() {
        assert_format_error(parse_record(2, "1,Ana,18446744073709551615,22,0"), 2, "base_salary");
    }

    #[test]
    fn test_format_error_keeps_raw_line() {
        match parse_record(9, "garbage").unwrap_err() {
            LedgerError::Format { content, .. } => assert_eq!(content, "garbage"),
            other => panic!("Expected Format, got {:?}", other),
        }
    }

    #[test]
    fn test_format_record_omits_total_pay() {
        let record = EmployeeRecord::new(1, "Ana", 440_000, 20, 0).unwrap();
        assert_eq!(format_record(&record), "1,Ana,440000,20,0");
    }

    #[test]
    fn test_write_ledger_terminates_every_line() {
        let records = vec![
            EmployeeRecord::new(1, "Ana", 440_000, 20, 0).unwrap(),
            EmployeeRecord::new(2, "Budi", 300_000, 3, 1).unwrap(),
        ];
        let mut buffer = Vec::new();

        write_ledger(&mut buffer, &records).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "1,Ana,440000,20,0\n2,Budi,300000,3,1\n"
        );
    }
}
