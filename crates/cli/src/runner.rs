use std::io::{BufRead, Write};

use anyhow::Context;
use serde::Serialize;

use stockledger_core::{DomainError, DomainResult, Entity};
use stockledger_inventory::Registry;

use crate::command::{Command, parse_line};
use crate::dto::{CommandOutput, DeletedView, HistoryView, ListView, ProductView, RecordedView};
use crate::errors::error_to_json;

/// Outcome counts for one script run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub failed: usize,
}

/// Executes commands against an owned registry.
#[derive(Debug)]
pub struct ScriptRunner {
    registry: Registry,
}

impl ScriptRunner {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Execute one command and return its view.
    pub fn execute(&mut self, command: Command) -> DomainResult<CommandOutput> {
        let value = match command {
            Command::Create {
                id,
                entry_date,
                quantity,
                name,
            } => {
                let product = self.registry.create(&id, &name, entry_date, quantity)?;
                CommandOutput::Product(ProductView::from(product))
            }
            Command::Record {
                id,
                kind,
                quantity,
                date,
            } => {
                let event = self.registry.record_event(&id, kind, quantity, date)?;
                let product = self.registry.find(&id)?;
                CommandOutput::Recorded(RecordedView {
                    product_id: product.id().to_string(),
                    event,
                    quantity: product.quantity(),
                })
            }
            Command::Delete { id } => {
                let removed = self.registry.delete(&id)?;
                CommandOutput::Deleted(DeletedView {
                    deleted: removed.id().to_string(),
                })
            }
            Command::Find { id } => CommandOutput::Product(ProductView::from(self.registry.find(&id)?)),
            Command::List => {
                let products: Vec<ProductView> = self.registry.list().iter().map(ProductView::from).collect();
                CommandOutput::List(ListView {
                    count: products.len(),
                    products,
                })
            }
            Command::History { id } => {
                let events = self.registry.history_sorted_by_quantity(&id)?;
                let product = self.registry.find(&id)?;
                CommandOutput::History(HistoryView {
                    product_id: product.id().to_string(),
                    quantity: product.quantity(),
                    events,
                })
            }
        };
        Ok(value)
    }

    /// Run every line of `input`, writing one JSON document per command to `output`.
    ///
    /// Only IO and serialization failures abort the run. Domain and parse
    /// errors, including lines that are not valid UTF-8, are written as error
    /// documents and counted in the summary.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> anyhow::Result<RunSummary> {
        let mut summary = RunSummary::default();
        let mut buf = Vec::new();
        let mut line_no = 0;

        loop {
            buf.clear();
            let read = input
                .read_until(b'\n', &mut buf)
                .with_context(|| format!("failed to read script line {}", line_no + 1))?;
            if read == 0 {
                break;
            }
            line_no += 1;

            let result = match std::str::from_utf8(&buf) {
                Ok(line) => match parse_line(line) {
                    Ok(None) => continue,
                    Ok(Some(command)) => self.execute(command),
                    Err(err) => Err(err),
                },
                Err(_) => Err(DomainError::invalid_input("script line is not valid UTF-8")),
            };

            summary.executed += 1;
            match result {
                Ok(document) => write_document(&mut output, &document)?,
                Err(err) => {
                    summary.failed += 1;
                    tracing::debug!(line = line_no, error = %err, "script command failed");
                    write_document(&mut output, &error_to_json(&err, line_no))?;
                }
            }
        }

        output.flush().context("failed to flush command output")?;
        Ok(summary)
    }
}

fn write_document<W: Write, T: Serialize>(output: &mut W, document: &T) -> anyhow::Result<()> {
    serde_json::to_writer(&mut *output, document).context("failed to write command output")?;
    output.write_all(b"\n").context("failed to write command output")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use stockledger_core::SequentialIdGenerator;
    use stockledger_inventory::{MovementKind, RegistryConfig};

    fn runner() -> ScriptRunner {
        let registry =
            Registry::with_config(RegistryConfig::default(), Arc::new(SequentialIdGenerator::new())).unwrap();
        ScriptRunner::new(registry)
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn execute_returns_typed_views() {
        let mut runner = runner();
        let created = runner
            .execute(Command::Create {
                id: "P1".to_string(),
                entry_date: date(1),
                quantity: 5,
                name: "Apple".to_string(),
            })
            .unwrap();
        match created {
            CommandOutput::Product(view) => {
                assert_eq!(view.id, "P1");
                assert_eq!(view.quantity, 5);
            }
            other => panic!("expected a product view, got {other:?}"),
        }

        let recorded = runner
            .execute(Command::Record {
                id: "P1".to_string(),
                kind: MovementKind::RemoveFromStock,
                quantity: 2,
                date: date(2),
            })
            .unwrap();
        match recorded {
            CommandOutput::Recorded(view) => {
                assert_eq!(view.quantity, 3);
                assert_eq!(view.event.id().as_str(), "ACT-000002");
            }
            other => panic!("expected a recorded view, got {other:?}"),
        }

        let err = runner.execute(Command::Find { id: "P9".to_string() }).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn views_serialize_without_a_tag() {
        let output = CommandOutput::Deleted(DeletedView {
            deleted: "P1".to_string(),
        });
        let mut out = Vec::new();
        write_document(&mut out, &output).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "{\"deleted\":\"P1\"}\n");
    }

    #[test]
    fn invalid_utf8_line_is_reported_and_run_continues() {
        let mut runner = runner();
        let script: &[u8] = b"create P1 2024-01-01 1 Apple\n\xff\xfe\nfind P1\n";
        let mut out = Vec::new();
        let summary = runner.run(script, &mut out).unwrap();

        assert_eq!(summary, RunSummary { executed: 3, failed: 1 });
        let lines: Vec<serde_json::Value> = String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines[1]["error"], "invalid_input");
        assert_eq!(lines[1]["line"], 2);
        assert_eq!(lines[2]["id"], "P1");
    }
}
