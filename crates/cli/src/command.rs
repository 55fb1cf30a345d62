use chrono::NaiveDate;

use stockledger_core::{DomainError, DomainResult};
use stockledger_inventory::MovementKind;

/// One parsed script command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `create <id> <yyyy-mm-dd> <qty> <name...>`
    Create {
        id: String,
        entry_date: NaiveDate,
        quantity: i64,
        name: String,
    },
    /// `add|remove <id> <qty> <yyyy-mm-dd>` or `record <id> <kind> <qty> <yyyy-mm-dd>`
    Record {
        id: String,
        kind: MovementKind,
        quantity: i64,
        date: NaiveDate,
    },
    Delete { id: String },
    Find { id: String },
    List,
    /// History ordered by quantity.
    History { id: String },
}

/// Parse one script line. Blank lines and `#` comments yield `Ok(None)`.
pub fn parse_line(line: &str) -> DomainResult<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let verb = verb.to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let command = match verb.as_str() {
        "create" => {
            if args.len() < 4 {
                return Err(usage("create <id> <yyyy-mm-dd> <qty> <name...>"));
            }
            Command::Create {
                id: args[0].to_string(),
                entry_date: parse_date(args[1])?,
                quantity: parse_quantity(args[2])?,
                name: args[3..].join(" "),
            }
        }
        "add" | "remove" => {
            let [id, quantity, date] = exact::<3>(&args, "add|remove <id> <qty> <yyyy-mm-dd>")?;
            Command::Record {
                id: id.to_string(),
                kind: verb.parse()?,
                quantity: parse_quantity(quantity)?,
                date: parse_date(date)?,
            }
        }
        "record" => {
            let [id, kind, quantity, date] =
                exact::<4>(&args, "record <id> <kind> <qty> <yyyy-mm-dd>")?;
            Command::Record {
                id: id.to_string(),
                kind: kind.parse()?,
                quantity: parse_quantity(quantity)?,
                date: parse_date(date)?,
            }
        }
        "delete" => {
            let [id] = exact::<1>(&args, "delete <id>")?;
            Command::Delete { id: id.to_string() }
        }
        "find" => {
            let [id] = exact::<1>(&args, "find <id>")?;
            Command::Find { id: id.to_string() }
        }
        "history" => {
            let [id] = exact::<1>(&args, "history <id>")?;
            Command::History { id: id.to_string() }
        }
        "list" => {
            exact::<0>(&args, "list")?;
            Command::List
        }
        other => {
            return Err(DomainError::invalid_input(format!("unknown command '{other}'")));
        }
    };

    Ok(Some(command))
}

fn exact<'a, const N: usize>(args: &[&'a str], shape: &str) -> DomainResult<[&'a str; N]> {
    <[&str; N]>::try_from(args).map_err(|_| usage(shape))
}

fn usage(shape: &str) -> DomainError {
    DomainError::invalid_input(format!("usage: {shape}"))
}

fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DomainError::invalid_input(format!("invalid date '{raw}' (expected YYYY-MM-DD)")))
}

fn parse_quantity(raw: &str) -> DomainResult<i64> {
    raw.parse()
        .map_err(|_| DomainError::invalid_input(format!("invalid quantity '{raw}'")))
}
