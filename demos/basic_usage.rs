use searchtable::seed::default_records;
use searchtable::{Record, SearchTable, TableResult};

fn main() -> TableResult<()> {
    let mut table = SearchTable::new();
    let inserted = table.bulk_load(default_records());
    println!("Loaded {} records:\n{}", inserted, table.render());

    table.insert(Record::new(42, "Ma", "F", 21))?;
    if let Err(err) = table.insert(Record::new(42, "Hu", "M", 22)) {
        println!("\nSecond insert rejected: {}", err);
    }

    let search = table.search(37);
    if let Some(record) = search.record {
        println!("\nFound {} after {} comparisons", record, search.comparisons);
    }

    let removed = table.remove(56)?;
    println!("\nRemoved {}; tree is now:\n{}", removed, table.render_shape());
    Ok(())
}
