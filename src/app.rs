use std::io::{self, Write};

use anyhow::{bail, Result};

use crate::{
    cli::{Cli, Command},
    domain::typing_status::TypingStatus,
    infra::{self, contracts::PayloadSource, input::FilePayloadSource},
    usecases::{
        self, bootstrap,
        decode_typing::{decode_lines, decode_one, DecodeReport},
    },
};

pub fn run(cli: Cli) -> Result<()> {
    let context = bootstrap::bootstrap(cli.config.as_deref())?;

    tracing::debug!(
        domain = crate::domain::module_name(),
        usecases = usecases::module_name(),
        infra = infra::module_name(),
        "module boundaries loaded"
    );

    match cli.command_or_default() {
        Command::Decode { path, lines } => {
            let policy = context.config.decoding.unrecognized;
            let raw = FilePayloadSource::new(path).read_payload()?;
            let stdout = io::stdout();
            let mut out = stdout.lock();

            if lines {
                let report = decode_lines(&raw, policy);
                write_report(&mut out, &mut io::stderr(), &report)?;

                if !report.is_clean() {
                    bail!(
                        "{} of {} typing status lines failed to decode",
                        report.failures.len(),
                        report.total()
                    );
                }
            } else {
                let record = decode_one(&raw, policy)?;
                write_record(&mut out, &record)?;
            }

            tracing::info!(?policy, lines, "typing status decode completed");
        }
    }

    Ok(())
}

fn write_record(out: &mut impl Write, record: &TypingStatus) -> Result<()> {
    serde_json::to_writer(&mut *out, record)?;
    writeln!(out)?;
    Ok(())
}

fn write_report(
    out: &mut impl Write,
    err: &mut impl Write,
    report: &DecodeReport,
) -> Result<()> {
    for record in &report.records {
        write_record(out, record)?;
    }

    for failure in &report.failures {
        writeln!(err, "line {}: {}", failure.line, failure.error)?;
    }

    Ok(())
}
