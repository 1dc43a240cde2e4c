use awql_http::{AwqlError, Connection, Value};

fn main() -> anyhow::Result<()> {
    let mut conn = Connection::from_env().map_err(anyhow::Error::msg)?;

    let mut rows = conn
        .prepare(
            "SELECT CampaignName, Clicks, Impressions FROM CAMPAIGN_PERFORMANCE_REPORT \
             WHERE CampaignStatus = ? DURING LAST_7_DAYS",
        )?
        .query([Value::text("ENABLED")])?;

    println!("{}", rows.columns().join("\t"));
    let mut row = vec![String::new(); rows.columns().len()];
    loop {
        match rows.next_into(&mut row) {
            Ok(()) => println!("{}", row.join("\t")),
            Err(AwqlError::EndOfData) => break,
            Err(err) => return Err(err.into()),
        }
    }
    rows.close()?;
    conn.close()?;

    Ok(())
}
