use gift_catalog::doc::schema_json;

fn main() -> anyhow::Result<()> {
    println!("{}", schema_json()?);
    Ok(())
}
