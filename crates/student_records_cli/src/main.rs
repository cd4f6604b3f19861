//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `student_records_core` wiring against a real store file.
//! - Print the data behind the record table and both charts as plain text.
//!
//! Usage: `student_records [config.json] [student-name] [subject]`

use log::error;
use std::process::ExitCode;
use student_records_core::{
    core_version, init_logging_from_config, StoreConfig, StudentSession, StudentStore, Subject,
};

fn main() -> ExitCode {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => match StoreConfig::from_json_file(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("config error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => StoreConfig::default(),
    };

    if let Err(err) = init_logging_from_config(&config) {
        eprintln!("logging disabled: {err}");
    }

    println!("student_records_core version={}", core_version());
    println!("store={}", config.db_path.display());

    let mut session = StudentSession::new(StudentStore::new(config));
    if let Err(err) = session.reload() {
        // The session stays usable with an empty collection.
        eprintln!("load failed: {err}");
    }
    println!("records={}", session.records().len());

    for (name, total) in session.totals_by_name() {
        println!("total name={name} marks={total}");
    }

    let Some(name) = args.next() else {
        return ExitCode::SUCCESS;
    };
    let subject = args
        .next()
        .unwrap_or_else(|| Subject::Mathematics.as_str().to_string());

    match session.semester_series_with_grades(&name, &subject) {
        Ok(series) => {
            for point in series {
                println!("{subject} marks={} {point}", point.marks);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_grading module=cli status=error error={err}");
            eprintln!("grading failed: {err}");
            ExitCode::FAILURE
        }
    }
}
