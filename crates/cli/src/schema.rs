use bpcorr_api::BreakpointEvent;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let schema = schemars::schema_for!(BreakpointEvent);
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}
