//! Property tests for ledger invariants.

use proptest::prelude::*;

use attendance_ledger::calculation::{
    MAX_BASE_SALARY, WORKING_DAYS_PER_MONTH, calculate_pay, compute_payroll,
};
use attendance_ledger::error::LedgerError;
use attendance_ledger::ledger::LedgerStore;
use attendance_ledger::models::EmployeeRecord;

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

fn record_strategy() -> impl Strategy<Value = (u64, u32, u32)> {
    (0u64..10_000_000, 0u32..=WORKING_DAYS_PER_MONTH).prop_flat_map(|(salary, leave)| {
        (
            Just(salary),
            0u32..=(WORKING_DAYS_PER_MONTH - leave),
            Just(leave),
        )
    })
}

proptest! {
    #[test]
    fn attendance_never_exceeds_ceiling_minus_leave(
        leave in 0u32..=WORKING_DAYS_PER_MONTH,
        attempts in 0usize..40,
    ) {
        let mut store = LedgerStore::new();
        store.insert(EmployeeRecord::new(1, "Ana", 440_000, 0, leave).unwrap()).unwrap();

        for _ in 0..attempts {
            let before = store.find_by_id(1).unwrap().attendance_days();
            match store.record_attendance(1) {
                Ok(record) => prop_assert_eq!(record.attendance_days(), before + 1),
                Err(LedgerError::AttendanceCeilingExceeded { .. }) => {
                    prop_assert_eq!(before + leave, WORKING_DAYS_PER_MONTH);
                    prop_assert_eq!(store.find_by_id(1).unwrap().attendance_days(), before);
                }
                Err(other) => prop_assert!(false, "unexpected error {:?}", other),
            }
            prop_assert!(
                store.find_by_id(1).unwrap().attendance_days() <= WORKING_DAYS_PER_MONTH - leave
            );
        }
    }

    #[test]
    fn total_pay_follows_formula((salary, attendance, leave) in record_strategy()) {
        let record = EmployeeRecord::new(1, "Ana", salary, attendance, leave).unwrap();
        let pay = calculate_pay(&record);
        let days = u64::from(attendance);

        prop_assert_eq!(pay.daily_rate, salary / 22);
        prop_assert_eq!(pay.total_pay, (salary / 22) * days + days * 10_000 + days * 20_000);
    }

    #[test]
    fn total_pay_never_overflows(
        salary in 0u64..=MAX_BASE_SALARY,
        attendance in 0u32..=WORKING_DAYS_PER_MONTH,
    ) {
        let record = EmployeeRecord::new(1, "Ana", salary, attendance, 0).unwrap();
        let pay = calculate_pay(&record);
        let days = u128::from(attendance);

        let expected = u128::from(salary / 22) * days + days * 30_000;
        prop_assert_eq!(u128::from(pay.total_pay), expected);
    }

    #[test]
    fn save_then_load_round_trips(
        rows in prop::collection::vec((name_strategy(), record_strategy()), 0..20),
    ) {
        let mut store = LedgerStore::new();
        for (index, (name, (salary, attendance, leave))) in rows.into_iter().enumerate() {
            let record = EmployeeRecord::new(index as i64, name, salary, attendance, leave).unwrap();
            store.insert(record).unwrap();
        }

        let mut first = Vec::new();
        store.write_to(&mut first).unwrap();
        let reloaded = LedgerStore::from_reader(first.as_slice(), "buffer").unwrap();
        let mut second = Vec::new();
        reloaded.write_to(&mut second).unwrap();

        prop_assert_eq!(&reloaded, &store);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn payroll_batch_is_idempotent(
        rows in prop::collection::vec(record_strategy(), 1..10),
    ) {
        let mut store = LedgerStore::new();
        for (index, (salary, attendance, leave)) in rows.into_iter().enumerate() {
            let name = format!("emp{index}");
            let record = EmployeeRecord::new(index as i64, name, salary, attendance, leave).unwrap();
            store.insert(record).unwrap();
        }

        let first = compute_payroll(&mut store);
        let second = compute_payroll(&mut store);

        prop_assert_eq!(first.lines, second.lines);
    }
}
