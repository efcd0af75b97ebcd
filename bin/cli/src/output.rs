use alloy::rpc::types::TransactionReceipt;
use lsp_contracts::{DecodedEvent, LspEvent};
use tabled::{settings::Style, Table, Tabled};

/// A `field | value` row.
#[derive(Tabled)]
pub struct Field {
    #[tabled(rename = "Field")]
    pub name: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

impl Field {
    pub fn new(name: &str, value: impl ToString) -> Self {
        Self { name: name.to_string(), value: value.to_string() }
    }
}

/// A decoded event row.
#[derive(Tabled)]
pub struct EventRow {
    #[tabled(rename = "Block")]
    pub block: String,
    #[tabled(rename = "Tx")]
    pub tx_hash: String,
    #[tabled(rename = "Log")]
    pub log_index: String,
    #[tabled(rename = "Event")]
    pub event: String,
}

impl From<&DecodedEvent<LspEvent>> for EventRow {
    fn from(decoded: &DecodedEvent<LspEvent>) -> Self {
        let log = &decoded.log;
        Self {
            block: log.block_number.map(|n| n.to_string()).unwrap_or_default(),
            tx_hash: log.transaction_hash.map(|h| h.to_string()).unwrap_or_default(),
            log_index: log.log_index.map(|i| i.to_string()).unwrap_or_default(),
            event: decoded.event.to_string(),
        }
    }
}

/// Prints rows as a table with a title.
pub fn print_table<T: Tabled>(title: &str, rows: impl IntoIterator<Item = T>) {
    let mut table = Table::new(rows);
    table.with(Style::modern());
    println!("\n{title}:");
    println!("{table}\n");
}

/// The summary rows of a confirmed transaction.
pub fn receipt_fields(receipt: &TransactionReceipt) -> Vec<Field> {
    vec![
        Field::new("Transaction", receipt.transaction_hash),
        Field::new("Block", receipt.block_number.map(|n| n.to_string()).unwrap_or_default()),
        Field::new("Gas Used", receipt.gas_used),
    ]
}

/// Prints a confirmed transaction followed by the events it emitted.
pub fn print_receipt(title: &str, receipt: &TransactionReceipt, extra: Vec<Field>) {
    let mut fields = receipt_fields(receipt);
    fields.extend(extra);
    print_table(title, fields);

    let logs = receipt.inner.logs();
    let events: Vec<EventRow> = logs
        .iter()
        .filter_map(|log| {
            let event = LspEvent::decode(log).ok().flatten()?;
            Some(EventRow::from(&DecodedEvent { event, log: log.clone() }))
        })
        .collect();
    if !events.is_empty() {
        print_table("Events", events);
    }
}
